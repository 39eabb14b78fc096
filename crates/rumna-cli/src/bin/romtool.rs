use clap::{Parser, Subcommand};

use rumna_cli::commands::{config_ops, convert_ops, load_standards};

#[derive(Parser)]
#[command(name = "romtool", about = "Arabic romanization tool")]
struct Cli {
    /// Custom standards TOML replacing the embedded tables
    #[arg(long, global = true)]
    standards: Option<String>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// List available standards in registration order
    List,
    /// Romanize text, a .txt/.docx file, or stdin
    Convert {
        /// Standard name (default: the registry's fallback)
        #[arg(short, long)]
        standard: Option<String>,
        /// Input document (.txt in UTF-8 or Windows-1256, or .docx)
        #[arg(short, long)]
        input: Option<String>,
        /// Write the result here (UTF-8) instead of stdout
        #[arg(short, long)]
        output: Option<String>,
        /// Text to romanize
        text: Option<String>,
    },
    /// Show how each word is romanized, step by step
    Explain {
        /// Standard name (default: the registry's fallback)
        #[arg(short, long)]
        standard: Option<String>,
        /// Output as JSON instead of text
        #[arg(long)]
        json: bool,
        /// Text to explain
        text: String,
    },
    /// Standards table management
    Standards {
        #[command(subcommand)]
        action: StandardsAction,
    },
}

#[derive(Subcommand)]
enum StandardsAction {
    /// Print the embedded default standards TOML
    Export,
    /// Validate a standards TOML file
    Validate {
        /// TOML file to validate
        file: String,
    },
}

fn main() {
    let cli = Cli::parse();
    load_standards(cli.standards.as_deref());

    match cli.command {
        Command::List => convert_ops::list_cmd(),
        Command::Convert {
            standard,
            input,
            output,
            text,
        } => convert_ops::convert_cmd(
            standard.as_deref(),
            text.as_deref(),
            input.as_deref(),
            output.as_deref(),
        ),
        Command::Explain {
            standard,
            json,
            text,
        } => convert_ops::explain_cmd(standard.as_deref(), &text, json),
        Command::Standards { action } => match action {
            StandardsAction::Export => config_ops::standards_export(),
            StandardsAction::Validate { file } => config_ops::standards_validate(&file),
        },
    }
}
