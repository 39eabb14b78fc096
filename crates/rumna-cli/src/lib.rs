pub mod commands;
pub mod import;
