use std::path::PathBuf;

use clap::Parser;

#[derive(Parser)]
#[command(version, about)]
pub struct Cli {
    /// File containing the grammar
    pub file: PathBuf,

    /// Rewrite direct left recursion into right recursion
    #[arg(short = 'r', long)]
    pub left_recursion: bool,

    /// Factor shared prefixes out of alternatives with the same leading symbol
    #[arg(short = 'f', long)]
    pub left_factoring: bool
}
