//! Print the groups, datasets and attributes of HDF5 files to stdout.
use std::path::PathBuf;

use clap::Parser;
use h5util::prelude::*;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// HDF5 files to list
    #[arg(required = true)]
    files: Vec<PathBuf>,
}

fn main() -> Result<(), anyhow::Error> {
    env_logger::init();
    let args = Args::parse();

    for f in &args.files {
        print_structure(f)?;
    }

    Ok(())
}
