//! CLI argument definitions using clap

use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand, ValueHint};

/// Walk a left/right node network along a cyclic direction tape
#[derive(Parser, Debug)]
#[command(name = "wasteland")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Log verbosity (-d info, -dd debug, -ddd trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub debug: u8,

    /// Network input file (default: input/input.txt)
    #[arg(short, long, global = true, value_hint = ValueHint::FilePath)]
    pub input: Option<PathBuf>,

    /// Config file (default: ./wasteland.toml)
    #[arg(short, long, global = true, env = "WASTELAND_CONFIG", value_hint = ValueHint::FilePath)]
    pub config: Option<PathBuf>,

    /// Abort any walk after this many jumps
    #[arg(long, global = true)]
    pub max_jumps: Option<u64>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Dump the network and solve all puzzles (default)
    Run {
        /// Skip the lockstep ghost walk
        #[arg(long)]
        skip_naive: bool,
    },

    /// Print direction tape and node edges
    Dump,

    /// Count jumps of a single walker
    Walk {
        /// Start node name
        #[arg(long)]
        from: Option<String>,
        /// Target name pattern
        #[arg(long)]
        to: Option<String>,
    },

    /// Ghost walk via least common multiple of the walker cycles
    Lcm {
        /// Pattern selecting the walkers
        #[arg(long)]
        from: Option<String>,
        /// Target name pattern
        #[arg(long)]
        to: Option<String>,
        /// Show each walker's cycle length
        #[arg(short, long)]
        verbose: bool,
    },

    /// Ghost walk by simulating all walkers in lockstep (slow)
    Naive {
        /// Pattern selecting the walkers
        #[arg(long)]
        from: Option<String>,
        /// Target name pattern
        #[arg(long)]
        to: Option<String>,
        /// Expected answer for progress percentages
        #[arg(long)]
        expected: Option<u64>,
    },

    /// Manage settings
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },

    /// Generate shell completions
    Completion {
        /// Shell type
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Show merged config
    Show,

    /// Show config paths
    Path,
}
