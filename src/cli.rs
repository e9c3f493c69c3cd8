/// CLI argument definitions for the `sb` command.
///
/// Defines all subcommands, their arguments, and long help text
/// using the `clap` derive macros.
use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use clap_complete::Shell;

/// Top-level CLI parser with a single subcommand selector.
#[derive(Parser)]
#[command(
    name = "sb",
    version,
    about = "Partition per-file maintainability scores into severity bands"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

/// Common arguments shared by the non-interactive commands.
#[derive(Args)]
pub struct CommonArgs {
    /// Report file or directory to ingest (default: current directory)
    pub path: Option<PathBuf>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,

    /// Exclude report files matching this glob (repeatable)
    #[arg(long)]
    pub exclude: Vec<String>,

    /// Configuration file (default: scorebands.toml next to the target)
    #[arg(long)]
    pub config: Option<PathBuf>,
}

/// All available subcommands.
#[derive(Subcommand)]
pub enum Commands {
    /// Interactively partition the score distribution over a histogram
    #[command(long_about = "\
Interactively partition the score distribution over a histogram.

Renders the ingested scores as a terminal histogram with six draggable
boundary markers delimiting five bands (xs/s/m/l/xl by default). Drag a
marker with the mouse to reshape the bands; a marker can never cross its
neighbors. Band counts in the footer follow the drag.

Keys:
  e    export the current partition as JSON
  q    quit (also Esc)")]
    View {
        /// Report file or directory to ingest (default: current directory)
        path: Option<PathBuf>,

        /// Exclude report files matching this glob (repeatable)
        #[arg(long)]
        exclude: Vec<String>,

        /// Configuration file (default: scorebands.toml next to the target)
        #[arg(long)]
        config: Option<PathBuf>,

        /// Export target for the partition JSON
        #[arg(long, default_value = "partition.json")]
        output: PathBuf,
    },

    /// Classify the dataset into bands with fixed boundaries
    #[command(long_about = "\
Classify the dataset into bands with fixed boundaries.

Band k covers the half-open interval [b_k, b_k+1); only the final band
includes its upper boundary so a record scoring exactly the maximum is
kept. Scores outside the outermost boundaries are excluded, not errors.

Without --boundaries the score range [0, max] is split evenly.")]
    Bands {
        #[command(flatten)]
        common: CommonArgs,

        /// Comma-separated ascending boundary scores, one more than bands
        #[arg(long)]
        boundaries: Option<String>,

        /// List the files in each band
        #[arg(long)]
        files: bool,
    },

    /// Print the score histogram (distinct score and frequency)
    Hist {
        #[command(flatten)]
        common: CommonArgs,
    },

    /// List ingested records sorted ascending by score
    #[command(long_about = "\
List ingested records sorted ascending by score.

Report files hold either full complexity records (the score is computed
here) or a pre-computed score column (used verbatim).

Formula for the complexity format:
  score = 5.2 * ln(V) + 0.23 * G + 16.2 * ln(SLOC)

Where V = Halstead volume and G = cyclomatic complexity; a file with
SLOC = 0 scores 0. Higher scores mean harder-to-maintain files.")]
    Scores {
        #[command(flatten)]
        common: CommonArgs,

        /// Show only the first N records (0 = all)
        #[arg(long, default_value = "0")]
        top: usize,
    },

    /// Generate shell completion scripts
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}
