use std::io::{self, Read};
use std::path::Path;

use rumna_core::explain::explain;
use rumna_core::standard::Step;
use rumna_core::{Registry, Transliterate};

use super::die;
use crate::import::{read_document, write_text_file};

pub fn list_cmd() {
    let registry = Registry::global();
    for name in registry.names() {
        let mut notes = Vec::new();
        if name == registry.fallback_name() {
            notes.push("default");
        }
        if !registry.resolve(name).is_available() {
            notes.push("unavailable");
        }
        if notes.is_empty() {
            println!("{name}");
        } else {
            println!("{name}  [{}]", notes.join(", "));
        }
    }
}

/// Source text: the positional argument, an input document, or stdin.
fn source_text(text: Option<&str>, input: Option<&str>) -> String {
    match (text, input) {
        (Some(t), _) => t.to_string(),
        (None, Some(path)) => {
            let imported = die!(read_document(Path::new(path)), "Error reading {path}: {}");
            eprintln!("read {path} ({:?})", imported.encoding);
            imported.text
        }
        (None, None) => {
            let mut buf = String::new();
            die!(io::stdin().read_to_string(&mut buf), "Error reading stdin: {}");
            buf
        }
    }
}

pub fn convert_cmd(
    standard: Option<&str>,
    text: Option<&str>,
    input: Option<&str>,
    output: Option<&str>,
) {
    let registry = Registry::global();
    let name = standard.unwrap_or_else(|| registry.fallback_name());
    if registry.get(name).is_none() {
        eprintln!(
            "warning: unknown standard {name:?}, using {}",
            registry.fallback_name()
        );
    }
    if !registry.resolve(name).is_available() {
        eprintln!("warning: {name:?} is unavailable, text is passed through unchanged");
    }

    let source = source_text(text, input);
    let romanized = registry.convert(&source, name);

    match output {
        Some(path) => {
            die!(
                write_text_file(Path::new(path), &romanized),
                "Error writing {path}: {}"
            );
            eprintln!("wrote {path}");
        }
        None => println!("{romanized}"),
    }
}

pub fn explain_cmd(standard: Option<&str>, text: &str, json: bool) {
    let registry = Registry::global();
    let name = standard.unwrap_or_else(|| registry.fallback_name());
    let result = explain(registry, text, name);

    if json {
        let out = die!(serde_json::to_string_pretty(&result), "Error: {}");
        println!("{out}");
        return;
    }

    if result.resolved != result.requested {
        println!("standard: {} (fallback for {:?})", result.resolved, result.requested);
    } else {
        println!("standard: {}", result.resolved);
    }
    if !result.available {
        println!("  (unavailable: identity)");
    }
    for token in &result.tokens {
        println!("{:?} {:?} -> {:?}", token.kind, token.text, token.output);
        for step in &token.steps {
            println!("    {}", describe(step));
        }
    }
    println!("=> {}", result.output());
}

fn describe(step: &Step) -> String {
    match step {
        Step::Override { word, output } => format!("override   {word} -> {output}"),
        Step::Article {
            assimilated: true,
            output,
        } => format!("article    ال + sun letter -> {output}"),
        Step::Article { output, .. } => format!("article    ال -> {output}"),
        Step::Vowel { mark, output } => format!("vowel      U+{:04X} -> {output}", *mark as u32),
        Step::Gemination { of, output } if output.is_empty() => {
            format!("shadda     after U+{:04X} (unmapped) -> nothing", *of as u32)
        }
        Step::Gemination { of, output } => format!("shadda     {of} doubled -> {output}"),
        Step::TehMarbuta { output } => format!("teh marbuta -> {output}"),
        Step::Letter { letter, output } => format!("letter     {letter} -> {output}"),
        Step::Passthrough { ch } => format!("passthrough {ch}"),
    }
}
