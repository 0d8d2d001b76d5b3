use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use lrng_coalesce::{Adjacency, CoalesceOptions, Strategy};

mod commands;
mod logging;
mod range_file;
mod utils;

#[derive(Parser)]
#[command(name = "lrng-cmd")]
#[command(about = "Command-line utility for coalescing labeled ranges")]
#[command(version)]
struct Cli {
    /// Increase verbosity (-v for debug, -vv for trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Merge same-label overlapping ranges from a JSON file
    Coalesce {
        /// JSON file with an array of ranges, or `-` for stdin
        #[arg(short, long)]
        input: String,

        /// Ordered, comma-separated label table; labels must then be strings from this list
        #[arg(short, long, value_delimiter = ',')]
        labels: Option<Vec<String>>,

        /// Merge algorithm
        #[arg(long, value_enum, default_value_t = StrategyArg::FixedPoint)]
        strategy: StrategyArg,

        /// Also merge ranges that are adjacent without overlapping (e.g. [0,2] and [3,5])
        #[arg(long)]
        merge_adjacent: bool,

        /// Output file (defaults to stdout if not specified)
        #[arg(short, long)]
        output: Option<String>,

        /// Pretty-print the JSON output
        #[arg(long)]
        pretty: bool,
    },

    /// Check whether a JSON range file is already fully coalesced
    Verify {
        /// JSON file with an array of ranges, or `-` for stdin
        #[arg(short, long)]
        input: String,

        /// Treat adjacent ranges as mergeable
        #[arg(long)]
        merge_adjacent: bool,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum StrategyArg {
    FixedPoint,
    Sweep,
}

impl From<StrategyArg> for Strategy {
    fn from(arg: StrategyArg) -> Self {
        match arg {
            StrategyArg::FixedPoint => Strategy::FixedPoint,
            StrategyArg::Sweep => Strategy::Sweep,
        }
    }
}

fn adjacency(merge_adjacent: bool) -> Adjacency {
    if merge_adjacent {
        Adjacency::Touching
    } else {
        Adjacency::Overlapping
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::initialize_logger(cli.verbose);

    match cli.command {
        Commands::Coalesce {
            input,
            labels,
            strategy,
            merge_adjacent,
            output,
            pretty,
        } => {
            let options = CoalesceOptions::default()
                .with_strategy(strategy.into())
                .with_adjacency(adjacency(merge_adjacent));
            commands::coalesce::run(input, labels, options, output, pretty)
        }
        Commands::Verify {
            input,
            merge_adjacent,
        } => commands::verify::run(input, adjacency(merge_adjacent)),
    }
}
