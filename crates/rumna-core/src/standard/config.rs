use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet};
use std::sync::Arc;

use serde::Deserialize;

use super::{Standard, TEH_MARBUTA};
use crate::unicode::{is_arabic, is_arabic_mark, strip_marks};

#[derive(Deserialize)]
struct StandardsFile {
    fallback: String,
    sun_letters: String,
    shadda: String,
    #[serde(default, rename = "standard")]
    standards: Vec<StandardEntry>,
}

#[derive(Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
enum Kind {
    Rules,
    External,
}

#[derive(Deserialize)]
struct StandardEntry {
    name: String,
    kind: Kind,
    #[serde(default)]
    teh_marbuta: Option<String>,
    #[serde(default)]
    letters: BTreeMap<String, String>,
    #[serde(default)]
    vowels: BTreeMap<String, String>,
    #[serde(default)]
    overrides: BTreeMap<String, String>,
    #[serde(default)]
    skeleton_overrides: BTreeMap<String, String>,
}

#[derive(Debug, thiserror::Error)]
pub enum StandardsConfigError {
    #[error("TOML parse error: {0}")]
    Parse(String),
    #[error("no [[standard]] entries")]
    Empty,
    #[error("duplicate standard name: {0}")]
    DuplicateName(String),
    #[error("{standard}: key {key:?} is not a single Arabic-block codepoint")]
    NonArabicKey { standard: String, key: String },
    #[error("{standard}: key {key:?} is not a single Arabic combining mark")]
    NotCombiningMark { standard: String, key: String },
    #[error("{standard}: empty value for key {key:?}")]
    EmptyValue { standard: String, key: String },
    #[error("{0}: rule-based standard needs a non-empty teh_marbuta")]
    MissingTehMarbuta(String),
    #[error("{0}: the shadda mark cannot appear in [vowels]")]
    ShaddaInVowels(String),
    #[error("invalid sun_letters: {0:?}")]
    SunLetter(String),
    #[error("invalid shadda: {0:?}")]
    Shadda(String),
    #[error("fallback {0:?} does not name a standard")]
    UnknownFallback(String),
    #[error("standards already initialized")]
    AlreadyInitialized,
}

/// One registered system, in configuration order.
#[derive(Debug)]
pub enum SystemSpec {
    /// Table-driven standard with its own mapping tables.
    Rules(Standard),
    /// Opaque system supplied by the host at startup.
    External { name: String },
}

impl SystemSpec {
    pub fn name(&self) -> &str {
        match self {
            Self::Rules(s) => s.name(),
            Self::External { name } => name,
        }
    }
}

/// Validated standards table.
#[derive(Debug)]
pub struct StandardsConfig {
    pub fallback: String,
    pub systems: Vec<SystemSpec>,
}

fn single_char(s: &str) -> Option<char> {
    let mut chars = s.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Some(c),
        _ => None,
    }
}

/// Parse and validate a standards TOML document.
pub fn parse_standards_toml(toml_str: &str) -> Result<StandardsConfig, StandardsConfigError> {
    let file: StandardsFile =
        toml::from_str(toml_str).map_err(|e| StandardsConfigError::Parse(e.to_string()))?;

    if file.standards.is_empty() {
        return Err(StandardsConfigError::Empty);
    }

    let shadda = single_char(&file.shadda)
        .filter(|&c| is_arabic_mark(c))
        .ok_or_else(|| StandardsConfigError::Shadda(file.shadda.clone()))?;

    let mut sun_letters = BTreeSet::new();
    for c in file.sun_letters.chars() {
        if !is_arabic(c) || is_arabic_mark(c) {
            return Err(StandardsConfigError::SunLetter(file.sun_letters.clone()));
        }
        sun_letters.insert(c);
    }
    if sun_letters.is_empty() {
        return Err(StandardsConfigError::SunLetter(file.sun_letters));
    }
    let sun_letters = Arc::new(sun_letters);

    let mut seen = HashSet::new();
    let mut systems = Vec::with_capacity(file.standards.len());
    for entry in file.standards {
        if !seen.insert(entry.name.clone()) {
            return Err(StandardsConfigError::DuplicateName(entry.name));
        }
        let spec = match entry.kind {
            Kind::External => SystemSpec::External { name: entry.name },
            Kind::Rules => SystemSpec::Rules(build_standard(entry, &sun_letters, shadda)?),
        };
        systems.push(spec);
    }

    if !seen.contains(&file.fallback) {
        return Err(StandardsConfigError::UnknownFallback(file.fallback));
    }

    Ok(StandardsConfig {
        fallback: file.fallback,
        systems,
    })
}

fn build_standard(
    entry: StandardEntry,
    sun_letters: &Arc<BTreeSet<char>>,
    shadda: char,
) -> Result<Standard, StandardsConfigError> {
    let name = entry.name;

    let teh_marbuta = match entry.teh_marbuta {
        Some(v) if !v.is_empty() => v,
        _ => return Err(StandardsConfigError::MissingTehMarbuta(name)),
    };

    let mut letters = HashMap::with_capacity(entry.letters.len() + 1);
    for (key, value) in entry.letters {
        let c = match single_char(&key) {
            Some(c) if is_arabic(c) => c,
            _ => {
                return Err(StandardsConfigError::NonArabicKey {
                    standard: name,
                    key,
                })
            }
        };
        if value.is_empty() {
            return Err(StandardsConfigError::EmptyValue {
                standard: name,
                key,
            });
        }
        letters.insert(c, value);
    }
    // Gemination of ة re-reads the letter table, so it must carry the same value.
    letters.insert(TEH_MARBUTA, teh_marbuta.clone());

    let mut vowels = HashMap::with_capacity(entry.vowels.len());
    for (key, value) in entry.vowels {
        let c = match single_char(&key) {
            Some(c) if is_arabic_mark(c) => c,
            _ => {
                return Err(StandardsConfigError::NotCombiningMark {
                    standard: name,
                    key,
                })
            }
        };
        if c == shadda {
            return Err(StandardsConfigError::ShaddaInVowels(name));
        }
        if value.is_empty() {
            return Err(StandardsConfigError::EmptyValue {
                standard: name,
                key,
            });
        }
        vowels.insert(c, value);
    }

    let overrides = word_table(&name, entry.overrides, str::to_string)?;
    let skeleton_overrides = word_table(&name, entry.skeleton_overrides, strip_marks)?;

    Ok(Standard {
        name,
        letters,
        vowels,
        teh_marbuta,
        overrides,
        skeleton_overrides,
        sun_letters: Arc::clone(sun_letters),
        shadda,
    })
}

fn word_table(
    standard: &str,
    table: BTreeMap<String, String>,
    key_of: impl Fn(&str) -> String,
) -> Result<HashMap<String, String>, StandardsConfigError> {
    let mut words = HashMap::with_capacity(table.len());
    for (key, value) in table {
        if key.is_empty() || !key.chars().all(is_arabic) {
            return Err(StandardsConfigError::NonArabicKey {
                standard: standard.to_string(),
                key,
            });
        }
        if value.is_empty() {
            return Err(StandardsConfigError::EmptyValue {
                standard: standard.to_string(),
                key,
            });
        }
        words.insert(key_of(&key), value);
    }
    Ok(words)
}
