//! voice-export - MUCOM88 voice bank export tool
//!
//! Converts a MUCOM88 voice bank (voice.dat) into one preset per voice
//! (.rym2612 or .muc)

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use voice_export::{bank, NamedVoice, OutputFormat, DEFAULT_PREFIX};

const DEFAULT_INPUT: &str = "voice.dat";
const DEFAULT_OUTPUT: &str = "output";

#[derive(Parser)]
#[command(name = "voice-export")]
#[command(about = "MUCOM88 voice bank export tool")]
#[command(version)]
struct Cli {
    /// Defaults to `convert voice.dat -o output`
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert a voice bank into one preset file per voice
    Convert {
        /// Input voice bank
        #[arg(default_value = DEFAULT_INPUT)]
        input: PathBuf,

        /// Output directory (created if missing)
        #[arg(short, long, default_value = DEFAULT_OUTPUT)]
        output: PathBuf,

        /// Preset format: rym2612 or mucom
        #[arg(short, long, default_value_t = OutputFormat::Rym2612)]
        format: OutputFormat,

        /// Prefix for patch names
        #[arg(long, default_value = DEFAULT_PREFIX)]
        prefix: String,

        /// Verbose output
        #[arg(short, long)]
        verbose: bool,
    },

    /// Print every voice in a bank
    Dump {
        /// Input voice bank
        #[arg(default_value = DEFAULT_INPUT)]
        input: PathBuf,

        /// Prefix for patch names
        #[arg(long, default_value = DEFAULT_PREFIX)]
        prefix: String,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let command = cli.command.unwrap_or(Commands::Convert {
        input: PathBuf::from(DEFAULT_INPUT),
        output: PathBuf::from(DEFAULT_OUTPUT),
        format: OutputFormat::default(),
        prefix: DEFAULT_PREFIX.to_string(),
        verbose: false,
    });

    let level = match command {
        Commands::Convert { verbose: true, .. } => tracing::Level::DEBUG,
        _ => tracing::Level::INFO,
    };

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into()),
        )
        .init();

    match command {
        Commands::Convert {
            input,
            output,
            format,
            prefix,
            verbose: _,
        } => {
            tracing::info!("Converting {:?} -> {:?} ({})", input, output, format);
            let options = bank::ConvertOptions { format, prefix };
            let report = bank::convert_bank(&input, &output, &options)?;
            tracing::info!(
                "Done! {} presets written, {} unused slots dropped",
                report.kept.len(),
                report.removed.len()
            );
        }

        Commands::Dump { input, prefix } => {
            let data = std::fs::read(&input)
                .with_context(|| format!("Failed to read voice bank: {:?}", input))?;
            for (index, record) in bank::voices(&data).enumerate() {
                let named = NamedVoice::from_record(&record);
                println!(
                    "{} [{}]",
                    named.display_name(&prefix, index),
                    named.category
                );
                print!("{}", record);
            }
        }
    }

    Ok(())
}
