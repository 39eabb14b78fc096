use std::fs;

use rumna_core::standard::{parse_standards_toml, SystemSpec};

use super::die;

pub fn standards_export() {
    print!("{}", rumna_core::standard::default_toml());
}

pub fn standards_validate(file: &str) {
    let content = die!(fs::read_to_string(file), "Error reading {file}: {}");
    let config = die!(parse_standards_toml(&content), "Error: {}");
    let rules = config
        .systems
        .iter()
        .filter(|s| matches!(s, SystemSpec::Rules(_)))
        .count();
    println!(
        "OK: {} standards ({} rule-based), fallback={}",
        config.systems.len(),
        rules,
        config.fallback
    );
}
