#![allow(dead_code)]

use std::path::{Path, PathBuf};
use std::str::FromStr;

use hdf5::types::{FixedAscii, VarLenUnicode};
use hdf5::File;
use ndarray::{arr1, arr2, Array1};
use tempfile::TempDir;

/// A file with a single group holding one dataset with two attributes:
///
/// ```text
/// /grp
/// /grp/values    float64 (2, 3), attributes: scale = 0.5, units = K
/// ```
pub fn simple() -> (TempDir, PathBuf) {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("simple_source1.h5");

    let hf = File::create(&path).unwrap();
    let grp = hf.create_group("grp").unwrap();
    let ds = grp
        .new_dataset_builder()
        .with_data(&arr2(&[[1.0f64, 2.0, 3.0], [4.0, 5.0, 6.0]]))
        .create("values")
        .unwrap();

    ds.new_attr::<f64>()
        .shape(())
        .create("scale")
        .unwrap()
        .write_scalar(&0.5f64)
        .unwrap();
    ds.new_attr::<VarLenUnicode>()
        .shape(())
        .create("units")
        .unwrap()
        .write_scalar(&VarLenUnicode::from_str("K").unwrap())
        .unwrap();

    (dir, path)
}

/// A deeper file with several element types:
///
/// ```text
/// /a                 group, attribute: version = 3
/// /a/b               group
/// /a/b/c             group
/// /a/b/c/deep        int64 (2,)
/// /a/b/counts        int32 (4,)
/// /a/ints            uint8 (3,)
/// /alias             hard link to /a/ints
/// /fixed             fixed length strings (2,)
/// /floats            float32 (2, 2)
/// /names             variable length strings (2,)
/// /scalar            float64 ()
/// ```
pub fn nested() -> (TempDir, PathBuf) {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested.h5");

    let hf = File::create(&path).unwrap();

    let a = hf.create_group("a").unwrap();
    a.new_attr::<i32>()
        .shape(())
        .create("version")
        .unwrap()
        .write_scalar(&3i32)
        .unwrap();

    let b = a.create_group("b").unwrap();
    let c = b.create_group("c").unwrap();
    c.new_dataset_builder()
        .with_data(&arr1(&[i64::MIN, i64::MAX]))
        .create("deep")
        .unwrap();
    b.new_dataset_builder()
        .with_data(&arr1(&[1i32, -2, 3, -4]))
        .create("counts")
        .unwrap();
    a.new_dataset_builder()
        .with_data(&arr1(&[0u8, 127, 255]))
        .create("ints")
        .unwrap();

    hf.link_hard("/a/ints", "alias").unwrap();

    hf.new_dataset::<FixedAscii<8>>()
        .shape(2)
        .create("fixed")
        .unwrap();
    hf.new_dataset_builder()
        .with_data(&arr2(&[[f32::NAN, -0.0], [f32::MIN_POSITIVE, 1.5]]))
        .create("floats")
        .unwrap();

    let names: Array1<VarLenUnicode> = ["alpha", "βeta"]
        .iter()
        .map(|s| VarLenUnicode::from_str(s).unwrap())
        .collect();
    hf.new_dataset_builder()
        .with_data(&names)
        .create("names")
        .unwrap();

    hf.new_dataset::<f64>()
        .shape(())
        .create("scalar")
        .unwrap()
        .write_scalar(&42.5f64)
        .unwrap();

    (dir, path)
}

/// Soft and external links next to the objects they point at:
///
/// ```text
/// /a_link            soft link to /z/data
/// /dangling          soft link to /nowhere
/// /external          external link to a missing file
/// /z                 group
/// /z/data            int32 (3,)
/// ```
pub fn links() -> (TempDir, PathBuf) {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("links.h5");

    let hf = File::create(&path).unwrap();
    let z = hf.create_group("z").unwrap();
    z.new_dataset_builder()
        .with_data(&arr1(&[1i32, 2, 3]))
        .create("data")
        .unwrap();

    hf.link_soft("/z/data", "a_link").unwrap();
    hf.link_soft("/nowhere", "dangling").unwrap();
    hf.link_external("missing.h5", "/data", "external").unwrap();

    (dir, path)
}

pub fn missing(dir: &Path) -> PathBuf {
    dir.join("does_not_exist.h5")
}
