//! Read a dataset and print its shape, element type and values.
use std::path::PathBuf;

use clap::Parser;
use h5util::prelude::*;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// HDF5 file
    file: PathBuf,

    /// Path of the dataset within the file, e.g. `pt2/corrected_h/h_corr`
    dataset: String,

    /// Only print shape and element type
    #[arg(short, long)]
    summary: bool,
}

fn main() -> Result<(), anyhow::Error> {
    env_logger::init();
    let args = Args::parse();

    let data = read_dataset(&args.file, &args.dataset)?;

    println!("{}: shape={:?}, dtype={}", args.dataset, data.shape(), data.dtype());
    if !args.summary {
        println!("{data}");
    }

    Ok(())
}
