use std::sync::{Arc, Once};

use tracing::warn;

use crate::standard::Standard;

/// Romanizes a single Arabic token.
///
/// The tokenizer only ever hands over pure Arabic-block runs, so
/// implementations need not handle mixed-script input.
pub trait Transliterate: Send + Sync {
    fn transliterate_word(&self, word: &str) -> String;

    /// `false` when the system degrades to returning its input unchanged.
    fn is_available(&self) -> bool {
        true
    }
}

impl Transliterate for Standard {
    fn transliterate_word(&self, word: &str) -> String {
        self.romanize_word(word)
    }
}

impl<F> Transliterate for F
where
    F: Fn(&str) -> String + Send + Sync,
{
    fn transliterate_word(&self, word: &str) -> String {
        self(word)
    }
}

/// Host-supplied system whose rules live outside this crate.
///
/// Without a plugged-in implementation every word comes back unchanged.
pub struct External {
    name: String,
    inner: Option<Arc<dyn Transliterate>>,
    warned: Once,
}

impl External {
    pub fn new(name: impl Into<String>, inner: Option<Arc<dyn Transliterate>>) -> Self {
        Self {
            name: name.into(),
            inner,
            warned: Once::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

impl std::fmt::Debug for External {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("External")
            .field("name", &self.name)
            .field("available", &self.inner.is_some())
            .finish()
    }
}

impl Transliterate for External {
    fn transliterate_word(&self, word: &str) -> String {
        match &self.inner {
            Some(inner) => inner.transliterate_word(word),
            None => {
                self.warned.call_once(|| {
                    warn!(system = %self.name, "external system unavailable, passing text through");
                });
                word.to_string()
            }
        }
    }

    fn is_available(&self) -> bool {
        self.inner.as_ref().is_some_and(|i| i.is_available())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn external_without_impl_is_identity() {
        let ext = External::new("legacy", None);
        assert_eq!(ext.transliterate_word("بيت"), "بيت");
        assert!(!ext.is_available());
    }

    #[test]
    fn external_delegates_to_closure() {
        let inner: Arc<dyn Transliterate> = Arc::new(|w: &str| format!("<{w}>"));
        let ext = External::new("legacy", Some(inner));
        assert_eq!(ext.transliterate_word("بيت"), "<بيت>");
        assert!(ext.is_available());
    }

    #[test]
    fn closure_is_transliterator() {
        let reverse = |w: &str| w.chars().rev().collect::<String>();
        assert_eq!(reverse.transliterate_word("abc"), "cba");
    }
}
