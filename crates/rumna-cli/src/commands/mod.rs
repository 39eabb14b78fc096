pub mod config_ops;
pub mod convert_ops;

macro_rules! die {
    ($result:expr, $($arg:tt)*) => {
        $result.unwrap_or_else(|e| {
            eprintln!($($arg)*, e);
            std::process::exit(1);
        })
    };
}

pub(crate) use die;

/// Load a custom standards table before the registry is first used.
pub fn load_standards(path: Option<&str>) {
    if let Some(path) = path {
        let content = die!(std::fs::read_to_string(path), "Error reading {path}: {}");
        die!(
            rumna_core::Registry::init_custom(content),
            "Error loading standards: {}"
        );
    }
}
