//! Name-to-system registry, following the same OnceLock pattern as the
//! settings layer.
//!
//! - `init_custom(toml_content)` replaces the embedded tables before first use
//! - `init_external(system)` plugs in the host's external system
//! - `global()` returns `&'static Registry` (lazy-init singleton)

use std::sync::{Arc, OnceLock};

use tracing::debug;

use crate::standard::{
    parse_standards_toml, Standard, StandardsConfig, StandardsConfigError, SystemSpec,
    DEFAULT_TOML,
};
use crate::transliterate::{External, Transliterate};

static CUSTOM_TOML: OnceLock<String> = OnceLock::new();
static EXTERNAL: OnceLock<Arc<dyn Transliterate>> = OnceLock::new();
static INSTANCE: OnceLock<Registry> = OnceLock::new();

#[derive(Debug)]
pub enum System {
    Rules(Standard),
    External(External),
}

impl Transliterate for System {
    fn transliterate_word(&self, word: &str) -> String {
        match self {
            Self::Rules(s) => s.transliterate_word(word),
            Self::External(e) => e.transliterate_word(word),
        }
    }

    fn is_available(&self) -> bool {
        match self {
            Self::Rules(_) => true,
            Self::External(e) => e.is_available(),
        }
    }
}

#[derive(Debug)]
struct Entry {
    name: String,
    system: System,
}

/// Ordered, immutable set of named systems with a fallback.
#[derive(Debug)]
pub struct Registry {
    entries: Vec<Entry>,
    fallback: usize,
}

impl Registry {
    /// Build from validated tables. Every external entry is bound to
    /// `external`, or degrades to identity when it is `None`.
    pub fn new(config: StandardsConfig, external: Option<Arc<dyn Transliterate>>) -> Self {
        let entries: Vec<Entry> = config
            .systems
            .into_iter()
            .map(|spec| match spec {
                SystemSpec::Rules(standard) => Entry {
                    name: standard.name().to_string(),
                    system: System::Rules(standard),
                },
                SystemSpec::External { name } => Entry {
                    system: System::External(External::new(name.clone(), external.clone())),
                    name,
                },
            })
            .collect();
        // The parser guarantees the fallback names an entry.
        let fallback = entries
            .iter()
            .position(|e| e.name == config.fallback)
            .unwrap_or(0);
        debug!(systems = entries.len(), fallback, "registry built");
        Self { entries, fallback }
    }

    pub fn from_toml(
        toml_str: &str,
        external: Option<Arc<dyn Transliterate>>,
    ) -> Result<Self, StandardsConfigError> {
        Ok(Self::new(parse_standards_toml(toml_str)?, external))
    }

    /// Set custom standards TOML before first `global()` call.
    pub fn init_custom(toml_content: String) -> Result<(), StandardsConfigError> {
        // Validate eagerly
        parse_standards_toml(&toml_content)?;
        if INSTANCE.get().is_some() {
            return Err(StandardsConfigError::AlreadyInitialized);
        }
        CUSTOM_TOML
            .set(toml_content)
            .map_err(|_| StandardsConfigError::AlreadyInitialized)
    }

    /// Plug in the external system before first `global()` call.
    pub fn init_external(system: Arc<dyn Transliterate>) -> Result<(), StandardsConfigError> {
        if INSTANCE.get().is_some() {
            return Err(StandardsConfigError::AlreadyInitialized);
        }
        EXTERNAL
            .set(system)
            .map_err(|_| StandardsConfigError::AlreadyInitialized)
    }

    /// Get or initialize the global singleton.
    pub fn global() -> &'static Registry {
        INSTANCE.get_or_init(|| {
            let toml_str = CUSTOM_TOML
                .get()
                .map(|s| s.as_str())
                .unwrap_or(DEFAULT_TOML);
            let config = parse_standards_toml(toml_str).expect("standards TOML must be valid");
            Registry::new(config, EXTERNAL.get().cloned())
        })
    }

    /// Registered names, in registration order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|e| e.name.as_str())
    }

    pub fn fallback_name(&self) -> &str {
        &self.entries[self.fallback].name
    }

    pub fn get(&self, name: &str) -> Option<&System> {
        self.entries.iter().find(|e| e.name == name).map(|e| &e.system)
    }

    /// The system registered under `name`, or the fallback system.
    pub fn resolve(&self, name: &str) -> &System {
        self.get(name).unwrap_or_else(|| {
            debug!(name, fallback = self.fallback_name(), "unknown standard");
            &self.entries[self.fallback].system
        })
    }

    /// Rule tables behind `name`, if it names a rule-based standard.
    pub fn standard(&self, name: &str) -> Option<&Standard> {
        match self.get(name)? {
            System::Rules(s) => Some(s),
            System::External(_) => None,
        }
    }
}
