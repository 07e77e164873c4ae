use std::path::PathBuf;

use clap::{ArgAction, Parser};
use passmint::pass::Category;

#[derive(Debug, Parser)]
#[command(name = "passmint", author, version, about)]
pub struct Cli {
    /// Characters per password (4-32)
    #[arg(short, long, value_name = "N", value_parser = clap::value_parser!(u8).range(4..=32))]
    pub length: Option<u8>,

    /// Character sets to draw from, comma separated (upper,lower,numbers,symbols)
    #[arg(short, long, value_name = "LIST", value_delimiter = ',')]
    pub sets: Option<Vec<Category>>,

    /// Drop symbols from the character sets
    #[arg(long)]
    pub no_special: bool,

    /// Leave out look-alike characters (l 1 I o O 0)
    #[arg(short = 'a', long, conflicts_with = "allow_ambiguous")]
    pub no_ambiguous: bool,

    /// Keep look-alike characters even if saved settings exclude them
    #[arg(long)]
    pub allow_ambiguous: bool,

    /// Use rejection sampling instead of modulo reduction
    #[arg(long)]
    pub exact: bool,

    /// Read /dev/urandom directly instead of the OS random API
    #[arg(short, long)]
    pub urandom: bool,

    /// Copy to clipboard instead of printing
    #[arg(short, long)]
    pub board: bool,

    /// Print only the password
    #[arg(short, long)]
    pub quiet: bool,

    /// More log output (repeat for debug)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,

    /// Store the effective options as defaults for later runs
    #[arg(long)]
    pub save: bool,

    /// Ignore saved defaults for this run
    #[arg(short, long)]
    pub default: bool,

    /// Settings file location
    #[arg(long, value_name = "PATH", env = "PASSMINT_CONFIG")]
    pub config: Option<PathBuf>,
}
