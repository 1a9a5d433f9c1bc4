//! Depth-first listing of the objects in a HDF5 file.
//!
//! The walk descends through the hard links of each group, in the order the library lists them,
//! and emits every object once in pre-order. An object reachable through several hard links is
//! reported under the first path it was found at. Soft and external links are not followed.
use serde::{Deserialize, Serialize};

use hdf5::{Group, LinkType, Location, LocationToken, LocationType};

use crate::data::Data;
use crate::Error;

/// An object in the file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Node {
    /// Absolute path, e.g. `/pt2/corrected_h`.
    pub path: String,
    pub kind: NodeKind,
    pub attributes: Vec<Attribute>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum NodeKind {
    Group,
    Dataset { shape: Vec<usize>, dtype: String },

    /// Named datatypes and other object kinds.
    Unknown,
}

/// An attribute with its value rendered to text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attribute {
    pub name: String,
    pub value: String,
}

impl Node {
    /// Path relative to the root group.
    pub fn name(&self) -> &str {
        self.path.trim_start_matches('/')
    }

    /// Nesting level, 0 for members of the root group.
    pub fn depth(&self) -> usize {
        self.path.matches('/').count().saturating_sub(1)
    }
}

/// Walk every object reachable from `root`.
pub fn walk(root: &Group) -> Result<Vec<Node>, anyhow::Error> {
    let mut seen = vec![root.loc_info()?.token];
    let mut nodes = Vec::new();

    let base = root.name();
    visit(root, base.trim_end_matches('/'), &mut seen, &mut nodes)?;

    debug!("walked {} objects below {}", nodes.len(), base);

    Ok(nodes)
}

fn visit(
    group: &Group,
    base: &str,
    seen: &mut Vec<LocationToken>,
    nodes: &mut Vec<Node>,
) -> Result<(), anyhow::Error> {
    for member in hard_links(group)? {
        let info = group.loc_info_by_name(&member)?;

        if seen.contains(&info.token) {
            continue;
        }
        seen.push(info.token);

        let path = format!("{base}/{member}");

        match info.loc_type {
            LocationType::Group => {
                let g = group.group(&member)?;
                nodes.push(Node {
                    path: path.clone(),
                    kind: NodeKind::Group,
                    attributes: attributes(&g)?,
                });
                visit(&g, &path, seen, nodes)?;
            }
            LocationType::Dataset => {
                let ds = group.dataset(&member)?;
                let dtype = ds.dtype()?.to_descriptor()?.to_string();
                nodes.push(Node {
                    path,
                    kind: NodeKind::Dataset {
                        shape: ds.shape(),
                        dtype,
                    },
                    attributes: attributes(&ds)?,
                });
            }
            _ => {
                let loc = group.open_by_token(info.token)?;
                nodes.push(Node {
                    path,
                    kind: NodeKind::Unknown,
                    attributes: attributes(&loc)?,
                });
            }
        }
    }

    Ok(())
}

/// Names of the members of `group` that are hard links.
fn hard_links(group: &Group) -> hdf5::Result<Vec<String>> {
    group.iter_visit_default(vec![], |_, name, link, names| {
        if link.link_type == LinkType::Hard {
            names.push(name.to_owned());
        }
        true
    })
}

/// Read and render all attributes of an object. Attributes of a type that cannot be read are
/// shown as `<type>`.
pub fn attributes(loc: &Location) -> Result<Vec<Attribute>, anyhow::Error> {
    let mut attrs = Vec::new();

    for name in loc.attr_names()? {
        let attr = loc.attr(&name)?;

        let value = match Data::read(&attr) {
            Ok(v) => v.to_string(),
            Err(e) => match e.downcast_ref::<Error>() {
                Some(Error::UnsupportedType(t)) => {
                    warn!("{}: attribute {}: unsupported type {}", loc.name(), name, t);
                    format!("<{t}>")
                }
                _ => return Err(e),
            },
        };

        attrs.push(Attribute { name, value });
    }

    Ok(attrs)
}
