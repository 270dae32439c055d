//! docpack CLI - build .docx packages from YAML document descriptions
//!
//! ```sh
//! docpack build guide.yaml -o guide.docx
//! docpack check guide.yaml
//! ```
//!
//! Set `RUST_LOG=debug` to see what is generated.

use std::error::Error;
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};

use docpack::description::Description;
use docpack::{Document, OoxmlError};

#[derive(Parser)]
#[command(name = "docpack")]
#[command(version)]
#[command(about = "Build Word (.docx) documents from YAML descriptions", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Build a .docx package from a description
    Build {
        /// Description file (YAML)
        #[arg(value_name = "INPUT")]
        input: PathBuf,

        /// Output file (defaults to the input name with a .docx extension)
        #[arg(short, long, value_name = "OUTPUT")]
        output: Option<PathBuf>,
    },

    /// Validate a description without writing anything
    Check {
        /// Description file (YAML)
        #[arg(value_name = "INPUT")]
        input: PathBuf,
    },
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Build { input, output } => cmd_build(&input, output),
        Commands::Check { input } => cmd_check(&input),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        let mut source = e.source();
        while let Some(cause) = source {
            eprintln!("  caused by: {}", cause);
            source = cause.source();
        }
        std::process::exit(1);
    }
}

fn load(input: &Path) -> Result<Document, OoxmlError> {
    log::info!("reading {}", input.display());
    Description::from_path(input)?.into_document()
}

fn cmd_build(input: &Path, output: Option<PathBuf>) -> Result<(), OoxmlError> {
    let output = output.unwrap_or_else(|| input.with_extension("docx"));
    let document = load(input)?;
    document.save(&output)?;
    println!("Wrote {}", output.display());
    Ok(())
}

fn cmd_check(input: &Path) -> Result<(), OoxmlError> {
    let document = load(input)?;
    // Serializing runs the writer's own checks as well
    let bytes = docpack::serialize(&document)?;
    println!(
        "{}: ok ({} section(s), {} bytes)",
        input.display(),
        document.sections().len(),
        bytes.len()
    );
    Ok(())
}
