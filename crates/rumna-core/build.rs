const STANDARDS: &str = "src/standard/default_standards.toml";

fn main() {
    println!("cargo:rerun-if-changed={STANDARDS}");
    check_standards(include_str!("src/standard/default_standards.toml"));
}

/// Shape check of the embedded standards; the full validation runs when the
/// registry loads them.
fn check_standards(content: &str) {
    let doc: toml::Table = match content.parse() {
        Ok(doc) => doc,
        Err(e) => panic!("{STANDARDS} contains invalid TOML: {e}"),
    };
    for key in ["fallback", "sun_letters", "shadda"] {
        if !doc.get(key).is_some_and(toml::Value::is_str) {
            panic!("{STANDARDS}: missing string `{key}`");
        }
    }
    match doc.get("standard").and_then(toml::Value::as_array) {
        Some(entries) if !entries.is_empty() => {}
        _ => panic!("{STANDARDS}: no [[standard]] entries"),
    }
}
