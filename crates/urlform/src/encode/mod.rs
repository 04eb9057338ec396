//! Flattening of a finished tree into `key[sub][]=value&...` text.

pub mod encoders;
pub mod primitives;
pub mod writer;

pub use primitives::escape;

use crate::tree::Node;
use crate::{options::Options, Result};

/// Percent-escaped pairs joined by `&`.
pub fn flatten(root: &Node, options: &Options) -> Result<String> {
    let mut w = writer::PairWriter::new();
    encoders::encode_root(root, options, &mut w)?;
    log::trace!("flattened {} pairs", w.pair_count());
    Ok(w.into_string())
}

/// Unescaped `(key, value)` pairs in emission order.
pub fn pairs(root: &Node, options: &Options) -> Result<Vec<(String, String)>> {
    let mut out = Vec::new();
    encoders::encode_root(root, options, &mut out)?;
    Ok(out)
}
