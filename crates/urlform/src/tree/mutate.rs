//! Path-addressed reads and writes over a [`Node`] tree.
//!
//! Writes create every missing intermediate node on the way down:
//! - a missing record entry grows as an empty record
//! - a missing sequence slot also grows as an empty record, even though the
//!   segment is an index; the write-back of the next index segment upgrades it
//! - on write-back, an index segment turns the current node into a sequence
//!   and a field segment turns it into a record, discarding whatever shape
//!   was there before
//!
//! Sequences only ever grow by appending, so an index at or beyond the
//! current length pushes a new element.

use core::mem;

use indexmap::IndexMap;

use super::{Node, Segment};

/// Sets the node at `path` inside `root` to `value`.
pub fn write(root: &mut Node, path: &[Segment], value: Node) {
    let current = mem::take(root);
    *root = written(current, path, value);
}

fn written(node: Node, path: &[Segment], value: Node) -> Node {
    let Some((head, tail)) = path.split_first() else {
        return value;
    };
    match head {
        Segment::Index(i) => {
            let mut items = match node {
                Node::Sequence(items) => items,
                _ => Vec::new(),
            };
            let child = if tail.is_empty() {
                value
            } else {
                let existing = match items.get_mut(*i) {
                    Some(slot) => mem::take(slot),
                    None => Node::empty_record(),
                };
                written(existing, tail, value)
            };
            match items.get_mut(*i) {
                Some(slot) => *slot = child,
                None => items.push(child),
            }
            Node::Sequence(items)
        }
        Segment::Field(name) => {
            let mut entries = match node {
                Node::Record(entries) => entries,
                _ => IndexMap::new(),
            };
            let child = if tail.is_empty() {
                value
            } else {
                let existing = entries
                    .get_mut(name.as_str())
                    .map(mem::take)
                    .unwrap_or_else(Node::empty_record);
                written(existing, tail, value)
            };
            entries.insert(name.clone(), child);
            Node::Record(entries)
        }
    }
}

/// Returns the node at `path`, or `None` as soon as a segment does not
/// match the shape of the node it is applied to.
pub fn read<'a>(root: &'a Node, path: &[Segment]) -> Option<&'a Node> {
    path.iter().try_fold(root, |node, seg| match (node, seg) {
        (Node::Record(entries), Segment::Field(name)) => entries.get(name.as_str()),
        (Node::Sequence(items), Segment::Index(i)) => items.get(*i),
        _ => None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn field(s: &str) -> Segment {
        Segment::Field(s.to_string())
    }

    #[test]
    fn empty_path_replaces_root() {
        let mut root = Node::empty_record();
        write(&mut root, &[], Node::from("x"));
        assert_eq!(root, Node::from("x"));
    }

    #[test]
    fn nested_fields_grow_records() {
        let mut root = Node::empty_record();
        write(&mut root, &[field("a"), field("b")], Node::from("1"));
        let inner = read(&root, &[field("a"), field("b")]);
        assert_eq!(inner.and_then(Node::as_scalar), Some("1"));
        assert!(read(&root, &[field("a")]).and_then(Node::as_record).is_some());
    }

    #[test]
    fn index_writes_append_in_order() {
        let mut root = Node::empty_record();
        for (i, v) in ["a", "b", "c"].iter().enumerate() {
            write(&mut root, &[field("xs"), Segment::Index(i)], Node::from(*v));
        }
        let xs = read(&root, &[field("xs")]).and_then(Node::as_sequence).unwrap();
        let texts: Vec<_> = xs.iter().filter_map(Node::as_scalar).collect();
        assert_eq!(texts, vec!["a", "b", "c"]);
    }

    #[test]
    fn index_within_bounds_overwrites() {
        let mut root = Node::empty_record();
        write(&mut root, &[field("xs"), Segment::Index(0)], Node::from("a"));
        write(&mut root, &[field("xs"), Segment::Index(0)], Node::from("b"));
        let xs = read(&root, &[field("xs")]).and_then(Node::as_sequence).unwrap();
        assert_eq!(xs.len(), 1);
        assert_eq!(xs[0].as_scalar(), Some("b"));
    }

    #[test]
    fn missing_index_slot_grows_as_record() {
        let mut root = Node::empty_record();
        let path = [field("xs"), Segment::Index(0), field("name")];
        write(&mut root, &path, Node::from("n"));
        let slot = read(&root, &[field("xs"), Segment::Index(0)]).unwrap();
        assert_eq!(slot.as_record().map(|r| r.len()), Some(1));
        assert_eq!(read(&root, &path).and_then(Node::as_scalar), Some("n"));
    }

    #[test]
    fn grown_record_slot_is_upgraded_by_index_write_back() {
        let mut root = Node::empty_record();
        let path = [field("m"), Segment::Index(0), Segment::Index(0)];
        write(&mut root, &path, Node::from("1"));
        let slot = read(&root, &[field("m"), Segment::Index(0)]).unwrap();
        assert_eq!(slot.as_sequence().map(|s| s.len()), Some(1));
    }

    #[test]
    fn field_write_back_turns_sequence_into_record() {
        let mut root = Node::empty_record();
        write(&mut root, &[field("xs"), Segment::Index(0)], Node::from("a"));
        assert!(read(&root, &[field("xs")]).and_then(Node::as_sequence).is_some());
        write(&mut root, &[field("xs"), field("k")], Node::from("b"));
        let xs = read(&root, &[field("xs")]).unwrap();
        assert_eq!(xs.shape(), "record");
        assert_eq!(xs.as_record().map(|r| r.len()), Some(1));
        assert_eq!(read(&root, &[field("xs"), field("k")]).and_then(Node::as_scalar), Some("b"));
    }

    #[test]
    fn existing_element_is_descended_into() {
        let mut root = Node::empty_record();
        write(&mut root, &[field("xs"), Segment::Index(0), field("a")], Node::from("1"));
        write(&mut root, &[field("xs"), Segment::Index(0), field("b")], Node::from("2"));
        let xs = read(&root, &[field("xs")]).and_then(Node::as_sequence).unwrap();
        assert_eq!(xs.len(), 1);
        assert_eq!(xs[0].as_record().map(|r| r.len()), Some(2));
    }

    #[test]
    fn read_fails_on_shape_mismatch() {
        let mut root = Node::empty_record();
        write(&mut root, &[field("a")], Node::from("1"));
        assert!(read(&root, &[Segment::Index(0)]).is_none());
        assert!(read(&root, &[field("a"), field("b")]).is_none());
        assert!(read(&root, &[field("missing")]).is_none());
        assert_eq!(read(&root, &[]), Some(&root));
    }

    #[test]
    fn rewriting_a_field_keeps_its_position() {
        let mut root = Node::empty_record();
        write(&mut root, &[field("a")], Node::from("1"));
        write(&mut root, &[field("b")], Node::from("2"));
        write(&mut root, &[field("a")], Node::from("3"));
        let keys: Vec<_> = root.as_record().unwrap().keys().cloned().collect();
        assert_eq!(keys, vec!["a", "b"]);
        assert_eq!(read(&root, &[field("a")]).and_then(Node::as_scalar), Some("3"));
    }
}
