use std::fmt;

use hdf5::types::{FloatSize, IntSize, TypeDescriptor, VarLenAscii, VarLenUnicode};
use hdf5::{Container, H5Type};
use ndarray::ArrayD;

use crate::Error;

/// The fully read contents of a dataset or attribute, typed after what is stored in the file.
#[derive(Debug, Clone, PartialEq)]
pub enum Data {
    Int8(ArrayD<i8>),
    Int16(ArrayD<i16>),
    Int32(ArrayD<i32>),
    Int64(ArrayD<i64>),
    UInt8(ArrayD<u8>),
    UInt16(ArrayD<u16>),
    UInt32(ArrayD<u32>),
    UInt64(ArrayD<u64>),
    Float32(ArrayD<f32>),
    Float64(ArrayD<f64>),
    Bool(ArrayD<bool>),
    String(ArrayD<String>),
}

/// Apply `$e` to the array inside any variant of `Data`.
macro_rules! dispatch {
    ($data:expr, $a:ident => $e:expr) => {
        match $data {
            Data::Int8($a) => $e,
            Data::Int16($a) => $e,
            Data::Int32($a) => $e,
            Data::Int64($a) => $e,
            Data::UInt8($a) => $e,
            Data::UInt16($a) => $e,
            Data::UInt32($a) => $e,
            Data::UInt64($a) => $e,
            Data::Float32($a) => $e,
            Data::Float64($a) => $e,
            Data::Bool($a) => $e,
            Data::String($a) => $e,
        }
    };
}

impl Data {
    /// Read the entire contents of a dataset or attribute.
    ///
    /// Fails with [`Error::UnsupportedType`] for element types without a variant (compounds,
    /// enums, fixed-length strings, references, ..).
    pub fn read(c: &Container) -> Result<Data, anyhow::Error> {
        use Data::*;
        use TypeDescriptor as T;

        let desc = c.dtype()?.to_descriptor()?;

        Ok(match desc {
            T::Integer(IntSize::U1) => Int8(c.read_dyn()?),
            T::Integer(IntSize::U2) => Int16(c.read_dyn()?),
            T::Integer(IntSize::U4) => Int32(c.read_dyn()?),
            T::Integer(IntSize::U8) => Int64(c.read_dyn()?),
            T::Unsigned(IntSize::U1) => UInt8(c.read_dyn()?),
            T::Unsigned(IntSize::U2) => UInt16(c.read_dyn()?),
            T::Unsigned(IntSize::U4) => UInt32(c.read_dyn()?),
            T::Unsigned(IntSize::U8) => UInt64(c.read_dyn()?),
            T::Float(FloatSize::U4) => Float32(c.read_dyn()?),
            T::Float(FloatSize::U8) => Float64(c.read_dyn()?),
            T::Boolean => Bool(c.read_dyn()?),
            T::VarLenUnicode => String(c.read_dyn::<VarLenUnicode>()?.map(|s| s.to_string())),
            T::VarLenAscii => String(c.read_dyn::<VarLenAscii>()?.map(|s| s.to_string())),
            other => return Err(Error::UnsupportedType(other.to_string()).into()),
        })
    }

    /// Read the entire contents converted to `T` by the HDF5 library.
    pub fn read_as<T: H5Type>(c: &Container) -> Result<ArrayD<T>, anyhow::Error> {
        Ok(c.read_dyn::<T>()?)
    }

    pub fn shape(&self) -> &[usize] {
        dispatch!(self, a => a.shape())
    }

    pub fn ndim(&self) -> usize {
        self.shape().len()
    }

    pub fn len(&self) -> usize {
        dispatch!(self, a => a.len())
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Name of the element type, spelled the way the HDF5 bindings display it.
    pub fn dtype(&self) -> &'static str {
        use Data::*;

        match self {
            Int8(_) => "int8",
            Int16(_) => "int16",
            Int32(_) => "int32",
            Int64(_) => "int64",
            UInt8(_) => "uint8",
            UInt16(_) => "uint16",
            UInt32(_) => "uint32",
            UInt64(_) => "uint64",
            Float32(_) => "float32",
            Float64(_) => "float64",
            Bool(_) => "bool",
            String(_) => "unicode (var len)",
        }
    }
}

impl fmt::Display for Data {
    /// Scalars are shown as the bare value, arrays in `ndarray` notation.
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        dispatch!(self, a => match a.ndim() {
            0 => match a.iter().next() {
                Some(v) => write!(f, "{v}"),
                None => Ok(()),
            },
            _ => write!(f, "{a}"),
        })
    }
}

macro_rules! impl_from_array {
    ($($t:ty => $v:ident),*) => {
        $(
            impl From<ArrayD<$t>> for Data {
                fn from(a: ArrayD<$t>) -> Data {
                    Data::$v(a)
                }
            }

            impl TryFrom<Data> for ArrayD<$t> {
                type Error = anyhow::Error;

                fn try_from(d: Data) -> Result<ArrayD<$t>, anyhow::Error> {
                    match d {
                        Data::$v(a) => Ok(a),
                        d => Err(anyhow!(
                            "element type is {}, not {}",
                            d.dtype(),
                            stringify!($t)
                        )),
                    }
                }
            }
        )*
    };
}

impl_from_array!(
    i8 => Int8, i16 => Int16, i32 => Int32, i64 => Int64,
    u8 => UInt8, u16 => UInt16, u32 => UInt32, u64 => UInt64,
    f32 => Float32, f64 => Float64, bool => Bool, String => String
);
