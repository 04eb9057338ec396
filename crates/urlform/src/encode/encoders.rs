use crate::{
    Error, Result,
    encode::writer::PairSink,
    options::Options,
    tree::Node,
};

/// Emits every entry of the root record with its own name as key.
pub fn encode_root<S: PairSink>(root: &Node, opts: &Options, sink: &mut S) -> Result<()> {
    let Some(entries) = root.as_record() else {
        log::debug!("refusing to flatten a {} root", root.shape());
        return Err(Error::InvalidRoot { found: root.shape() });
    };
    for (key, child) in entries {
        encode_node(child, key, opts, sink);
    }
    Ok(())
}

pub fn encode_node<S: PairSink>(node: &Node, key: &str, opts: &Options, sink: &mut S) {
    match node {
        Node::Scalar(text) => sink.pair(key, text),
        Node::Record(entries) => {
            let mut sub = String::with_capacity(key.len() + 8);
            for (name, child) in entries {
                sub.clear();
                sub.push_str(key);
                sub.push('[');
                sub.push_str(name);
                sub.push(']');
                encode_node(child, &sub, opts, sink);
            }
        }
        Node::Sequence(items) => {
            let item_key = opts.array_encoding.apply(key);
            for item in items {
                encode_node(item, &item_key, opts, sink);
            }
        }
    }
}
