use clap::{Parser, Subcommand};
use log::debug;
use std::io::Read;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

// Import the library
use vast2::models::Vast;
use vast2::{validate, DecodeOptions, EncodeOptions};

/// VAST 2.0 decoder and encoder
#[derive(Parser)]
#[command(version, about, long_about = None)]
struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Decode a VAST file and print the document tree
    Parse {
        /// Path to the VAST file, or `-` for stdin
        #[arg(short, long)]
        input: PathBuf,

        /// Pretty print the output
        #[arg(short, long)]
        pretty: bool,

        /// Print the tree as JSON
        #[arg(long)]
        json: bool,

        /// Trim whitespace around text content
        #[arg(long)]
        trim: bool,
    },

    /// Decode a VAST file and encode it again in canonical element order
    Format {
        /// Path to the VAST file, or `-` for stdin
        #[arg(short, long)]
        input: PathBuf,

        /// Output file path (if not specified, prints to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Prefix the output with an XML declaration
        #[arg(long)]
        declaration: bool,

        /// Trim whitespace around text content
        #[arg(long)]
        trim: bool,
    },

    /// Report ads and creatives with ambiguous structure or unknown enumeration values
    Check {
        /// Path to the VAST file, or `-` for stdin
        #[arg(short, long)]
        input: PathBuf,
    },
}

fn read_input(path: &Path) -> std::io::Result<Vec<u8>> {
    if path == Path::new("-") {
        let mut content = Vec::new();
        std::io::stdin().read_to_end(&mut content)?;
        return Ok(content);
    }
    debug!("Reading from file: {}", path.display());
    std::fs::read(path)
}

fn decode(path: &Path, trim: bool) -> Result<Vast, Box<dyn std::error::Error>> {
    let content = read_input(path)?;
    let options = if trim {
        DecodeOptions::trimmed()
    } else {
        DecodeOptions::default()
    };
    Ok(vast2::from_slice_with(&content, &options)?)
}

fn main() -> Result<ExitCode, Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let filter = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(filter)).init();

    match &cli.command {
        Commands::Parse {
            input,
            pretty,
            json,
            trim,
        } => {
            let vast = decode(input, *trim)?;

            match (*json, *pretty) {
                (true, true) => println!("{}", serde_json::to_string_pretty(&vast)?),
                (true, false) => println!("{}", serde_json::to_string(&vast)?),
                (false, true) => println!("{:#?}", vast),
                (false, false) => println!("{:?}", vast),
            }
        }
        Commands::Format {
            input,
            output,
            declaration,
            trim,
        } => {
            let vast = decode(input, *trim)?;

            let options = EncodeOptions {
                declaration: *declaration,
            };
            let xml = vast2::to_string_with(&vast, &options)?;

            if let Some(output_path) = output {
                std::fs::write(output_path, &xml)?;
                println!("Formatted VAST written to {}", output_path.display());
            } else {
                println!("{}", xml);
            }
        }
        Commands::Check { input } => {
            let vast = decode(input, true)?;

            let mut issues = validate::check_structure(&vast);
            issues.extend(validate::unknown_values(&vast));

            for issue in &issues {
                println!("{}", issue);
            }

            if !issues.is_empty() {
                return Ok(ExitCode::FAILURE);
            }
            println!("{} ad(s), no issues found", vast.ads.len());
        }
    }

    Ok(ExitCode::SUCCESS)
}
