use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use kidskb_cli::commands::{
    config_ops, history_ops, init_settings, play_ops, suggest_ops, vocab_ops,
};

macro_rules! die {
    ($result:expr, $($arg:tt)*) => {
        $result.unwrap_or_else(|e| {
            eprintln!($($arg)*, e);
            process::exit(1);
        })
    };
}

#[derive(Parser)]
#[command(name = "kbtool", about = "Kids keyboard engine tool")]
struct Cli {
    /// Custom settings TOML (defaults are built in)
    #[arg(long, global = true)]
    settings: Option<PathBuf>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Type on the keyboard from stdin, one key per character
    Play {
        /// Vocabulary manifest (default: built-in words)
        #[arg(long)]
        vocab: Option<PathBuf>,
        /// History file, loaded at start and saved on every new word
        #[arg(long)]
        history: Option<PathBuf>,
        /// Seed for the recycle pick
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Show ranked completions for a prefix
    Suggest {
        /// Typed prefix
        prefix: String,
        /// Vocabulary manifest (default: built-in words)
        #[arg(long)]
        vocab: Option<PathBuf>,
        /// History file used to mark already-used words
        #[arg(long)]
        history: Option<PathBuf>,
        /// Output as JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Inspect vocabulary manifests
    Vocab {
        #[command(subcommand)]
        action: VocabAction,
    },
    /// Inspect or reset a history file
    History {
        #[command(subcommand)]
        action: HistoryAction,
    },
    /// Export default settings as TOML
    SettingsExport,
    /// Validate a custom settings TOML file
    SettingsValidate {
        /// Path to the TOML file
        file: PathBuf,
    },
}

#[derive(Subcommand)]
enum VocabAction {
    /// List every word with its identifier
    List {
        /// Manifest file (default: built-in words)
        file: Option<PathBuf>,
    },
    /// Validate a manifest file
    Check {
        /// Manifest file
        file: PathBuf,
    },
}

#[derive(Subcommand)]
enum HistoryAction {
    /// Print the stored words
    Show {
        /// History file
        file: PathBuf,
    },
    /// Replace the file with an empty history
    Clear {
        /// History file
        file: PathBuf,
    },
}

fn main() {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    if let Some(path) = &cli.settings {
        die!(init_settings(path), "Error loading {}: {}", path.display());
    }

    match cli.command {
        Command::Play {
            vocab,
            history,
            seed,
        } => die!(
            play_ops::play(vocab.as_deref(), history.as_deref(), seed),
            "Error: {}"
        ),
        Command::Suggest {
            prefix,
            vocab,
            history,
            json,
        } => die!(
            suggest_ops::suggest(&prefix, vocab.as_deref(), history.as_deref(), json),
            "Error: {}"
        ),
        Command::Vocab { action } => match action {
            VocabAction::List { file } => {
                die!(vocab_ops::vocab_list(file.as_deref()), "Error: {}")
            }
            VocabAction::Check { file } => {
                let n = die!(vocab_ops::vocab_check(&file), "Error: {}");
                println!("OK: {n} words");
            }
        },
        Command::History { action } => match action {
            HistoryAction::Show { file } => {
                die!(history_ops::history_show(&file), "Error: {}")
            }
            HistoryAction::Clear { file } => {
                die!(history_ops::history_clear(&file), "Error: {}")
            }
        },
        Command::SettingsExport => config_ops::settings_export(),
        Command::SettingsValidate { file } => {
            let s = die!(config_ops::settings_validate(&file), "Error: {}");
            println!("{}", config_ops::settings_summary(&s));
        }
    }
}
