//! Reading source documents and writing romanized output.
//!
//! Plain text is decoded as UTF-8, falling back to Windows-1256 when the
//! bytes are not valid UTF-8. DOCX files contribute their paragraph text,
//! one paragraph per line.

mod cp1256;
mod docx;

use std::fs;
use std::path::Path;

pub use docx::{docx_paragraphs, read_docx};

#[derive(Debug, thiserror::Error)]
pub enum ImportError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("zip error: {0}")]
    Zip(#[from] zip::result::ZipError),
    #[error("not a DOCX document: missing {0}")]
    MissingPart(&'static str),
    #[error("malformed document XML: {0}")]
    Xml(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceEncoding {
    Utf8,
    Windows1256,
    Docx,
}

#[derive(Debug)]
pub struct Imported {
    pub text: String,
    pub encoding: SourceEncoding,
}

/// Decode text bytes: UTF-8 (BOM stripped) or the legacy Arabic code page.
/// Line endings are normalized to `\n`.
pub fn decode_text(bytes: &[u8]) -> Imported {
    let bytes = bytes.strip_prefix(b"\xEF\xBB\xBF").unwrap_or(bytes);
    let (text, encoding) = match std::str::from_utf8(bytes) {
        Ok(s) => (s.to_string(), SourceEncoding::Utf8),
        Err(_) => (cp1256::decode(bytes), SourceEncoding::Windows1256),
    };
    let text = if text.contains('\r') {
        text.replace("\r\n", "\n").replace('\r', "\n")
    } else {
        text
    };
    Imported { text, encoding }
}

pub fn read_text_file(path: &Path) -> Result<Imported, ImportError> {
    Ok(decode_text(&fs::read(path)?))
}

/// Read any supported document, choosing the reader by extension.
pub fn read_document(path: &Path) -> Result<Imported, ImportError> {
    let is_docx = path
        .extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case("docx"));
    if is_docx {
        Ok(Imported {
            text: read_docx(path)?,
            encoding: SourceEncoding::Docx,
        })
    } else {
        read_text_file(path)
    }
}

/// Export is always UTF-8.
pub fn write_text_file(path: &Path, text: &str) -> Result<(), ImportError> {
    fs::write(path, text.as_bytes())?;
    Ok(())
}
