use tracing::{debug, debug_span};

use crate::registry::Registry;
use crate::tokenizer::{tokenize, TokenKind};
use crate::transliterate::Transliterate;

impl Registry {
    /// Romanize every Arabic run of `text` with the system named
    /// `standard_name` (or the fallback), leaving everything else intact.
    pub fn convert(&self, text: &str, standard_name: &str) -> String {
        let _span = debug_span!("convert", standard_name, bytes = text.len()).entered();
        if text.is_empty() {
            return String::new();
        }

        let system = self.resolve(standard_name);
        let tokens = tokenize(text);
        let mut out = String::with_capacity(text.len() * 2);
        let mut arabic = 0usize;
        for token in &tokens {
            if token.kind == TokenKind::Arabic {
                arabic += 1;
                out.push_str(&system.transliterate_word(token.text));
            } else {
                out.push_str(token.text);
            }
        }

        debug!(tokens = tokens.len(), arabic);
        out
    }
}

/// Convert with the process-wide registry.
pub fn convert(text: &str, standard_name: &str) -> String {
    Registry::global().convert(text, standard_name)
}

/// Names of the process-wide registry, in registration order.
pub fn list_standards() -> Vec<&'static str> {
    Registry::global().names().collect()
}
