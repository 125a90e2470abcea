//! CLI tool for one-off email analysis
//!
//! # Usage
//!
//! ```bash
//! # Analyze an email file
//! phish-check analyze suspicious.eml
//!
//! # Analyze stdin, with Spanish labels
//! cat mail.txt | phish-check analyze - --lang es
//!
//! # Machine-readable output
//! phish-check analyze mail.txt --json
//! ```

use clap::{Parser, Subcommand};
use phishguard::analysis::EmailClassifier;
use phishguard::i18n::{self, Language};
use std::io::Read;

#[derive(Parser)]
#[command(name = "phish-check")]
#[command(about = "Classify email text as safe, suspicious, or phishing", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Analyze an email file ("-" reads stdin)
    Analyze {
        /// Path to the email file
        file: String,
        /// Label language (en, es, fr)
        #[arg(long, default_value = "en")]
        lang: Language,
        /// Emit the result as JSON
        #[arg(long)]
        json: bool,
    },
}

fn main() -> phishguard::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Analyze { file, lang, json } => {
            let content = if file == "-" {
                let mut buf = String::new();
                std::io::stdin().read_to_string(&mut buf)?;
                buf
            } else {
                std::fs::read_to_string(&file)?
            };

            let result = EmailClassifier::new().classify(&content);

            if json {
                println!("{}", serde_json::to_string_pretty(&result)?);
            } else {
                println!("Verdict: {}", i18n::verdict_label(lang, result.verdict));
                println!("{}", result.explanation);
            }
        }
    }

    Ok(())
}
