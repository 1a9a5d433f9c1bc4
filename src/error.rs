/// Conditions detected by this crate. Errors from the HDF5 library are passed through unchanged.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum Error {
    #[error("{0}: no such dataset")]
    NotFound(String),

    #[error("{0}: not a dataset")]
    NotADataset(String),

    #[error("unsupported element type: {0}")]
    UnsupportedType(String),
}
