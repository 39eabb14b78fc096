use std::fs::File;
use std::io::{Read, Seek};
use std::path::Path;

use zip::result::ZipError;
use zip::ZipArchive;

use super::ImportError;

const DOCUMENT_PART: &str = "word/document.xml";

/// Paragraph text of a DOCX file, paragraphs joined by `\n`.
pub fn read_docx(path: &Path) -> Result<String, ImportError> {
    let paragraphs = docx_paragraphs(File::open(path)?)?;
    Ok(paragraphs.join("\n"))
}

/// Body paragraphs of a DOCX container, in document order.
///
/// Paragraphs nested in tables and text boxes are skipped. Inside a run,
/// `<w:tab/>` becomes a tab and `<w:br/>` / `<w:cr/>` a newline; tab-stop
/// definitions in paragraph properties contribute nothing.
pub fn docx_paragraphs<R: Read + Seek>(reader: R) -> Result<Vec<String>, ImportError> {
    let mut archive = ZipArchive::new(reader)?;
    let mut xml = String::new();
    match archive.by_name(DOCUMENT_PART) {
        Ok(mut part) => {
            part.read_to_string(&mut xml)?;
        }
        Err(ZipError::FileNotFound) => return Err(ImportError::MissingPart(DOCUMENT_PART)),
        Err(e) => return Err(e.into()),
    }
    extract_paragraphs(&xml)
}

fn extract_paragraphs(xml: &str) -> Result<Vec<String>, ImportError> {
    let mut paragraphs = Vec::new();
    let mut current: Option<String> = None;
    let mut in_text = false;
    let mut in_run = false;
    // Depth inside tables and text boxes, whose paragraphs are not body text.
    let mut skip_depth = 0usize;
    let mut rest = xml;

    while let Some(lt) = rest.find('<') {
        if in_text {
            if let Some(p) = current.as_mut() {
                unescape_into(&rest[..lt], p)?;
            }
        }
        let after = &rest[lt..];
        if after.starts_with("<!--") {
            let end = after
                .find("-->")
                .ok_or_else(|| ImportError::Xml("unterminated comment".into()))?;
            rest = &after[end + 3..];
            continue;
        }
        let gt = after
            .find('>')
            .ok_or_else(|| ImportError::Xml("unterminated tag".into()))?;
        let tag = &after[1..gt];
        rest = &after[gt + 1..];

        if tag.starts_with('?') || tag.starts_with('!') {
            continue;
        }
        let closing = tag.starts_with('/');
        let self_closing = tag.ends_with('/');
        let name = tag
            .trim_start_matches('/')
            .split(|c: char| c.is_whitespace() || c == '/')
            .next()
            .unwrap_or("");

        match (name, closing) {
            ("w:tbl" | "w:txbxContent", false) if !self_closing => skip_depth += 1,
            ("w:tbl" | "w:txbxContent", true) => skip_depth = skip_depth.saturating_sub(1),
            _ if skip_depth > 0 => {}
            ("w:p", false) if self_closing => paragraphs.push(String::new()),
            ("w:p", false) => current = Some(String::new()),
            ("w:p", true) => {
                if let Some(p) = current.take() {
                    paragraphs.push(p);
                }
            }
            ("w:r", false) => in_run = !self_closing,
            ("w:r", true) => in_run = false,
            ("w:t", false) => in_text = !self_closing,
            ("w:t", true) => in_text = false,
            ("w:tab", false) if in_run => push_char(&mut current, '\t'),
            ("w:br" | "w:cr", false) if in_run => push_char(&mut current, '\n'),
            _ => {}
        }
    }

    Ok(paragraphs)
}

fn push_char(current: &mut Option<String>, c: char) {
    if let Some(p) = current.as_mut() {
        p.push(c);
    }
}

fn unescape_into(text: &str, out: &mut String) -> Result<(), ImportError> {
    let mut rest = text;
    while let Some(amp) = rest.find('&') {
        out.push_str(&rest[..amp]);
        let semi = rest[amp..]
            .find(';')
            .ok_or_else(|| ImportError::Xml(format!("unterminated entity in {text:?}")))?;
        let entity = &rest[amp + 1..amp + semi];
        let c = match entity {
            "amp" => '&',
            "lt" => '<',
            "gt" => '>',
            "quot" => '"',
            "apos" => '\'',
            _ => {
                let code = if let Some(hex) = entity.strip_prefix("#x") {
                    u32::from_str_radix(hex, 16).ok()
                } else if let Some(dec) = entity.strip_prefix('#') {
                    dec.parse().ok()
                } else {
                    None
                };
                code.and_then(char::from_u32)
                    .ok_or_else(|| ImportError::Xml(format!("unknown entity &{entity};")))?
            }
        };
        out.push(c);
        rest = &rest[amp + semi + 1..];
    }
    out.push_str(rest);
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::io::{Cursor, Write};

    use zip::write::SimpleFileOptions;
    use zip::ZipWriter;

    use super::*;

    fn make_docx(document_xml: &str) -> Cursor<Vec<u8>> {
        let mut writer = ZipWriter::new(Cursor::new(Vec::new()));
        let options = SimpleFileOptions::default();
        writer.start_file("[Content_Types].xml", options).unwrap();
        writer.write_all(b"<?xml version=\"1.0\"?><Types/>").unwrap();
        writer.start_file(DOCUMENT_PART, options).unwrap();
        writer.write_all(document_xml.as_bytes()).unwrap();
        let mut cursor = writer.finish().unwrap();
        cursor.set_position(0);
        cursor
    }

    fn body(inner: &str) -> String {
        format!(
            "<?xml version=\"1.0\" encoding=\"UTF-8\" standalone=\"yes\"?>\
             <w:document xmlns:w=\"http://schemas.openxmlformats.org/wordprocessingml/2006/main\">\
             <w:body>{inner}<w:sectPr/></w:body></w:document>"
        )
    }

    #[test]
    fn paragraphs_in_order() {
        let xml = body(
            "<w:p><w:r><w:t>بيت</w:t></w:r></w:p>\
             <w:p><w:pPr><w:jc w:val=\"right\"/></w:pPr>\
             <w:r><w:t xml:space=\"preserve\">Hello </w:t></w:r><w:r><w:t>القمر</w:t></w:r></w:p>",
        );
        let paragraphs = docx_paragraphs(make_docx(&xml)).unwrap();
        assert_eq!(paragraphs, vec!["بيت", "Hello القمر"]);
    }

    #[test]
    fn empty_paragraphs_and_breaks() {
        let xml = body(
            "<w:p/><w:p><w:r><w:t>a</w:t><w:tab/><w:t>b</w:t><w:br/><w:t>c</w:t></w:r></w:p><w:p></w:p>",
        );
        let paragraphs = docx_paragraphs(make_docx(&xml)).unwrap();
        assert_eq!(paragraphs, vec!["", "a\tb\nc", ""]);
    }

    #[test]
    fn entities_are_decoded() {
        let xml = body("<w:p><w:r><w:t>a &amp; b &lt;c&gt; &#1576;&#x064A;</w:t></w:r></w:p>");
        let paragraphs = docx_paragraphs(make_docx(&xml)).unwrap();
        assert_eq!(paragraphs, vec!["a & b <c> بي"]);
    }

    #[test]
    fn table_paragraphs_skipped() {
        let xml = body(
            "<w:p><w:r><w:t>before</w:t></w:r></w:p>\
             <w:tbl><w:tr><w:tc><w:p><w:r><w:t>cell</w:t></w:r></w:p></w:tc></w:tr></w:tbl>\
             <w:p><w:r><w:t>after</w:t></w:r></w:p>",
        );
        let paragraphs = docx_paragraphs(make_docx(&xml)).unwrap();
        assert_eq!(paragraphs, vec!["before", "after"]);
    }

    #[test]
    fn tab_stop_definitions_are_not_text() {
        let xml = body(
            "<w:p><w:pPr><w:tabs><w:tab w:val=\"left\" w:pos=\"720\"/>\
             <w:tab w:val=\"right\" w:pos=\"9000\"/></w:tabs></w:pPr>\
             <w:r><w:t>بيت</w:t><w:tab/><w:t>1</w:t></w:r></w:p>",
        );
        let paragraphs = docx_paragraphs(make_docx(&xml)).unwrap();
        assert_eq!(paragraphs, vec!["بيت\t1"]);
    }

    #[test]
    fn text_box_keeps_outer_paragraph() {
        let xml = body(
            "<w:p><w:r><w:t>outer </w:t></w:r>\
             <w:r><mc:AlternateContent><mc:Choice Requires=\"wps\"><w:drawing><wps:txbx>\
             <w:txbxContent><w:p><w:r><w:t>box</w:t></w:r></w:p></w:txbxContent>\
             </wps:txbx></w:drawing></mc:Choice><mc:Fallback><w:pict><v:textbox>\
             <w:txbxContent><w:p><w:r><w:t>box</w:t></w:r></w:p></w:txbxContent>\
             </v:textbox></w:pict></mc:Fallback></mc:AlternateContent></w:r>\
             <w:r><w:t>tail</w:t></w:r></w:p>\
             <w:p><w:r><w:t>next</w:t></w:r></w:p>",
        );
        let paragraphs = docx_paragraphs(make_docx(&xml)).unwrap();
        assert_eq!(paragraphs, vec!["outer tail", "next"]);
    }

    #[test]
    fn missing_document_part() {
        let mut writer = ZipWriter::new(Cursor::new(Vec::new()));
        writer
            .start_file("other.xml", SimpleFileOptions::default())
            .unwrap();
        writer.write_all(b"<x/>").unwrap();
        let mut cursor = writer.finish().unwrap();
        cursor.set_position(0);
        let err = docx_paragraphs(cursor).unwrap_err();
        assert!(matches!(err, ImportError::MissingPart(_)));
    }

    #[test]
    fn not_a_zip() {
        let err = docx_paragraphs(Cursor::new(b"plain text".to_vec())).unwrap_err();
        assert!(matches!(err, ImportError::Zip(_)));
    }

    #[test]
    fn read_docx_joins_with_newline() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("doc.docx");
        let xml = body("<w:p><w:r><w:t>one</w:t></w:r></w:p><w:p><w:r><w:t>two</w:t></w:r></w:p>");
        std::fs::write(&path, make_docx(&xml).into_inner()).unwrap();
        assert_eq!(read_docx(&path).unwrap(), "one\ntwo");
    }
}
