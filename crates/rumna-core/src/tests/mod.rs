
use crate::standard::DEFAULT_TOML;
use crate::Registry;

const ALA_LC: &str = "ALA-LC (مكتبة الكونغرس)";
const DMG: &str = "DMG (الجمعية الألمانية)";
const ISO_233: &str = "ISO 233 (المعيار الدولي)";
const IJMES: &str = "IJMES (المجلة الدولية)";

const RULE_STANDARDS: [&str; 4] = [ALA_LC, DMG, ISO_233, IJMES];

fn make_registry() -> Registry {
    Registry::from_toml(DEFAULT_TOML, None).unwrap()
}
