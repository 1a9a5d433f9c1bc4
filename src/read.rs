//! Read whole datasets into memory.
use std::path::Path;

use hdf5::{File, H5Type, LocationType};
use ndarray::ArrayD;

use crate::data::Data;
use crate::Error;

/// Read the dataset `name` (e.g. `pt2/corrected_h/h_corr`) from the file at `path`.
///
/// The returned array is owned and independent of the file, which is closed before returning.
pub fn read_dataset<P>(path: P, name: &str) -> Result<Data, anyhow::Error>
where
    P: AsRef<Path>,
{
    let hf = File::open(path.as_ref())?;
    let ds = open_dataset(&hf, name)?;

    debug!("{}: reading {} ({:?})", hf.filename(), ds.name(), ds.shape());

    Data::read(&ds)
}

/// Read the dataset `name`, converting the elements to `T`.
pub fn read_dataset_as<T, P>(path: P, name: &str) -> Result<ArrayD<T>, anyhow::Error>
where
    T: H5Type,
    P: AsRef<Path>,
{
    let hf = File::open(path.as_ref())?;
    let ds = open_dataset(&hf, name)?;

    Data::read_as::<T>(&ds)
}

/// Open `name` in `hf`, failing with [`Error::NotFound`] if there is no such object and with
/// [`Error::NotADataset`] if it is something other than a dataset.
fn open_dataset(hf: &File, name: &str) -> Result<hdf5::Dataset, anyhow::Error> {
    if !hf.link_exists(name) {
        return Err(Error::NotFound(name.to_string()).into());
    }

    // the link may exist while its target does not (dangling soft or external links)
    let loc_type = hf
        .loc_type_by_name(name)
        .map_err(|_| Error::NotFound(name.to_string()))?;

    match loc_type {
        LocationType::Dataset => Ok(hf.dataset(name)?),
        _ => Err(Error::NotADataset(name.to_string()).into()),
    }
}
