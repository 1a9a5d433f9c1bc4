//! Print file names ordered by their source number, names without one last.
use std::io::{self, BufRead};

use clap::Parser;
use h5util::prelude::*;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// File names to sort, read from stdin (one per line) if none are given
    names: Vec<String>,
}

fn main() -> Result<(), anyhow::Error> {
    env_logger::init();
    let args = Args::parse();

    let mut names = if args.names.is_empty() {
        io::stdin().lock().lines().collect::<Result<Vec<_>, _>>()?
    } else {
        args.names
    };

    sort_by_source(&mut names);

    for n in &names {
        match source_number(n) {
            Some(s) => println!("{s:>8} {n}"),
            None => println!("{:>8} {n}", "-"),
        }
    }

    Ok(())
}
