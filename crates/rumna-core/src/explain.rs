use serde::Serialize;

use crate::registry::{Registry, System};
use crate::standard::Step;
use crate::tokenizer::{tokenize, TokenKind};
use crate::transliterate::Transliterate;

/// Full diagnostic result for one conversion.
#[derive(Debug, Serialize)]
pub struct ExplainResult {
    pub requested: String,
    /// Name actually used after fallback.
    pub resolved: String,
    pub available: bool,
    pub tokens: Vec<ExplainToken>,
}

#[derive(Debug, Serialize)]
pub struct ExplainToken {
    pub text: String,
    pub kind: TokenKind,
    pub output: String,
    /// Empty for non-Arabic tokens and for external systems.
    pub steps: Vec<Step>,
}

impl ExplainResult {
    pub fn output(&self) -> String {
        self.tokens.iter().map(|t| t.output.as_str()).collect()
    }
}

pub fn explain(registry: &Registry, text: &str, standard_name: &str) -> ExplainResult {
    let resolved = if registry.get(standard_name).is_some() {
        standard_name
    } else {
        registry.fallback_name()
    };
    let system = registry.resolve(resolved);

    let tokens = tokenize(text)
        .into_iter()
        .map(|token| {
            if token.kind != TokenKind::Arabic {
                return ExplainToken {
                    text: token.text.to_string(),
                    kind: token.kind,
                    output: token.text.to_string(),
                    steps: Vec::new(),
                };
            }
            let (output, steps) = match system {
                System::Rules(standard) => {
                    let steps = standard.steps(token.text);
                    (steps.iter().map(Step::output).collect::<String>(), steps)
                }
                System::External(ext) => (ext.transliterate_word(token.text), Vec::new()),
            };
            ExplainToken {
                text: token.text.to_string(),
                kind: token.kind,
                output,
                steps,
            }
        })
        .collect();

    ExplainResult {
        requested: standard_name.to_string(),
        resolved: resolved.to_string(),
        available: system.is_available(),
        tokens,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::standard::DEFAULT_TOML;

    #[test]
    fn explain_matches_convert() {
        let reg = Registry::from_toml(DEFAULT_TOML, None).unwrap();
        let name = "DMG (الجمعية الألمانية)";
        for text in ["الشمس والقمر", "Hello بيت!", "محم\u{0651}د الله", ""] {
            let result = explain(&reg, text, name);
            assert_eq!(result.output(), reg.convert(text, name), "{text}");
        }
    }

    #[test]
    fn explain_steps_for_article() {
        let reg = Registry::from_toml(DEFAULT_TOML, None).unwrap();
        let result = explain(&reg, "القمر", "IJMES (المجلة الدولية)");
        assert_eq!(result.tokens.len(), 1);
        let steps = &result.tokens[0].steps;
        assert_eq!(
            steps[0],
            Step::Article {
                assimilated: false,
                output: "al-".into()
            }
        );
        assert_eq!(steps.len(), 4);
    }

    #[test]
    fn explain_reports_fallback() {
        let reg = Registry::from_toml(DEFAULT_TOML, None).unwrap();
        let result = explain(&reg, "بيت", "unknown");
        assert_eq!(result.requested, "unknown");
        assert_eq!(result.resolved, "النظام الحالي");
        assert!(!result.available);
        assert_eq!(result.output(), "بيت");
        assert!(result.tokens[0].steps.is_empty());
    }

    #[test]
    fn explain_serializes() {
        let reg = Registry::from_toml(DEFAULT_TOML, None).unwrap();
        let result = explain(&reg, "الله", "ISO 233 (المعيار الدولي)");
        let json = serde_json::to_string(&result).unwrap();
        assert!(json.contains("\"step\":\"override\""));
        assert!(json.contains("Allāh"));
        assert!(json.contains("\"kind\":\"arabic\""));
    }
}
