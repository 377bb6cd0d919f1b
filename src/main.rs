use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use log::info;
use sigmatch::{codec, config, matcher, response::Response};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "sigmatch")]
#[command(
    version,
    about = "Signature-match helper - base64 image codec and best-match extraction"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Base64-encode a file and print the text to stdout
    Encode {
        /// File to encode
        file: PathBuf,
    },
    /// Decode a base64 text file back into bytes
    Decode {
        /// File containing base64 text
        file: PathBuf,
        /// Where to write the decoded bytes
        out: PathBuf,
    },
    /// Extract the best match from a service response JSON file
    Match {
        /// JSON response from the signature-matching service
        response: PathBuf,
    },
}

fn main() -> Result<()> {
    env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .format_target(false)
        .format_timestamp(None)
        .init();

    let cli = Cli::parse();
    let cfg = config::load_config(None)?;

    match cli.command {
        Commands::Encode { file } => {
            let text = codec::encode_file(&file)?;
            println!("{}", text);
            Ok(())
        }
        Commands::Decode { file, out } => {
            let text = std::fs::read_to_string(&file)
                .with_context(|| format!("reading {}", file.display()))?;
            codec::decode_to_file(&text, &out)?;
            info!("Wrote {}", out.display());
            Ok(())
        }
        Commands::Match { response } => run_match(&cfg, &response),
    }
}

fn run_match(cfg: &config::Config, path: &std::path::Path) -> Result<()> {
    let raw =
        std::fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
    let response: Response =
        serde_json::from_str(&raw).with_context(|| format!("parsing {}", path.display()))?;

    let outcome = matcher::run_matching_at(&response, &cfg.out_dir, &matcher::LogSink)?;

    println!(
        "{} {} {} {} {}",
        outcome.reference_image.display(),
        outcome.query_image.display(),
        outcome.reference_confidence,
        outcome.query_confidence,
        outcome.score
    );
    Ok(())
}
