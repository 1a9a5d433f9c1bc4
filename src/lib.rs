//! # h5util
//!
//! Small helpers for inspecting and reading HDF5 files, built on the [bindings to the official
//! HDF5 library](https://docs.rs/hdf5-metno).
//!
//! * [Source numbers](source) pulled from file names like `obs_source12.h5`, for ordering files.
//! * A [printed listing](print) of the groups, datasets and attributes in a file.
//! * [Reading](read) a whole dataset into an [ndarray](https://docs.rs/ndarray).
//!
//! ## Usage
//!
//! ```no_run
//! use h5util::prelude::*;
//!
//! let mut files = vec!["obs_source10.h5", "obs_source2.h5"];
//! sort_by_source(&mut files);
//!
//! print_structure(files[0]).unwrap();
//!
//! let sst = read_dataset(files[0], "SST").unwrap();
//! println!("SST: {:?} {}: {}", sst.shape(), sst.dtype(), sst);
//! ```

#[macro_use]
extern crate anyhow;

#[macro_use]
extern crate log;

#[macro_use]
extern crate lazy_static;

pub mod data;
mod error;
pub mod print;
pub mod read;
pub mod source;
pub mod tree;

pub use error::Error;

pub mod prelude {
    pub use super::data::Data;
    pub use super::print::{print_structure, write_structure};
    pub use super::read::{read_dataset, read_dataset_as};
    pub use super::source::{sort_by_source, source_key, source_number};
    pub use super::tree::{walk, Node, NodeKind};
    pub use super::Error;
}
