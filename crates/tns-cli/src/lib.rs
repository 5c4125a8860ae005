//! tns-cli library
//!
//! This library is the foundation for the `tns` CLI binary.
//! Exports CLI structures for testing and reuse.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

mod commands;
mod document;
pub mod error;
mod output;

pub use error::CliError;

use commands::build::BuildOptions;
use commands::{build, stats};

/// Default URL prefix under which FROSTT tensor files are hosted.
pub const DB_URL: &str = "http://www-users.cs.umn.edu/~shaden/frostt_data";

/// tns - FROSTT tensor tooling
///
/// Summarize sparse coordinate tensor files and build the markdown
/// dataset pages that describe them.
#[derive(Parser, Debug)]
#[command(name = "tns")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output as JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Quiet mode (errors only)
    #[arg(short, long, global = true)]
    pub quiet: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Summarize a tensor file: order, non-zeros, dimensions, density
    Stats {
        /// Path to .tns or .tns.gz file
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Known non-zero count (skips counting)
        #[arg(short, long)]
        nnz: Option<u64>,

        /// Known dimensions, comma-separated (skips the dimension scan)
        #[arg(short, long, value_delimiter = ',')]
        dims: Option<Vec<u64>>,
    },

    /// Build the markdown dataset page for a tensor
    Build {
        /// Tensor file to extract stats from (.tns, .tns.gz)
        #[arg(short, long, value_name = "FILE")]
        tensor: Option<PathBuf>,

        /// Output file (default: tensor filename with .tns[.gz] replaced by .md)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Tensor title (default: output filename stem)
        #[arg(long)]
        title: Option<String>,

        /// File with a bibtex entry
        #[arg(short, long, value_name = "FILE")]
        cite: Option<PathBuf>,

        /// Description file
        #[arg(long, value_name = "FILE")]
        desc: Option<PathBuf>,

        /// Number of non-zeros
        #[arg(short, long)]
        nnz: Option<u64>,

        /// Comma-separated list of dimensions
        #[arg(short, long, value_delimiter = ',')]
        dims: Option<Vec<u64>>,

        /// File listing hosted tensor files, one `name caption..` per line
        #[arg(short, long, value_name = "FILE")]
        files: Option<PathBuf>,

        /// URL prefix for hosted files
        #[arg(long, default_value = DB_URL)]
        base_url: String,

        /// Comma-separated list of tags
        #[arg(long, value_delimiter = ',')]
        tags: Option<Vec<String>>,
    },
}

/// Dispatch a parsed command line.
///
/// # Errors
///
/// Returns the first [`CliError`] raised by the selected command.
pub fn execute(cli: Cli) -> Result<(), CliError> {
    match cli.command {
        Commands::Stats { file, nnz, dims } => stats::run(&file, nnz, dims, cli.json),

        Commands::Build {
            tensor,
            output,
            title,
            cite,
            desc,
            nnz,
            dims,
            files,
            base_url,
            tags,
        } => build::run(BuildOptions {
            tensor,
            output,
            title,
            cite,
            desc,
            nnz,
            dims,
            files,
            base_url,
            tags: tags.unwrap_or_default(),
            quiet: cli.quiet,
            verbose: cli.verbose,
        }),
    }
}
