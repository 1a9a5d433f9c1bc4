//! Human readable listing of the groups, datasets and attributes in a file.
//!
//! ```text
//! File: tests/data/obs.h5
//! 📂 Group: pt2
//!   📄 Dataset: pt2/h_corr, shape=(1024, 3), dtype=float32
//!      ↳ Attribute: units = meters
//! ```
use std::io::{self, Write};
use std::path::Path;

use hdf5::File;
use itertools::Itertools;

use crate::tree::{self, Node, NodeKind};

/// Print the structure of the file at `path` to stdout.
pub fn print_structure<P>(path: P) -> Result<(), anyhow::Error>
where
    P: AsRef<Path>,
{
    let stdout = io::stdout();
    let mut out = stdout.lock();
    write_structure(path, &mut out)
}

/// Write the structure of the file at `path` to `out`.
pub fn write_structure<P, W>(path: P, out: &mut W) -> Result<(), anyhow::Error>
where
    P: AsRef<Path>,
    W: Write,
{
    let path = path.as_ref();

    debug!("opening {path:?}");
    let hf = File::open(path)?;
    writeln!(out, "File: {}", path.display())?;

    let nodes = tree::walk(&hf)?;
    for node in &nodes {
        write_node(node, out)?;
    }

    Ok(())
}

fn write_node<W: Write>(node: &Node, out: &mut W) -> io::Result<()> {
    let indent = "  ".repeat(node.depth());
    let name = node.name();

    match &node.kind {
        NodeKind::Group => writeln!(out, "{indent}📂 Group: {name}")?,
        NodeKind::Dataset { shape, dtype } => writeln!(
            out,
            "{indent}📄 Dataset: {name}, shape={}, dtype={dtype}",
            format_shape(shape)
        )?,
        NodeKind::Unknown => writeln!(out, "{indent}❓ {name} (unknown type)")?,
    }

    for attr in &node.attributes {
        writeln!(out, "{indent}   ↳ Attribute: {} = {}", attr.name, attr.value)?;
    }

    Ok(())
}

/// Shape as a tuple: `()`, `(3,)`, `(3, 4)`.
fn format_shape(shape: &[usize]) -> String {
    match shape {
        [n] => format!("({n},)"),
        _ => format!("({})", shape.iter().join(", ")),
    }
}
