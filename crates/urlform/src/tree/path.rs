use std::borrow::Cow;
use std::fmt;

/// One step of a [`CodingPath`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Segment {
    Field(String),
    Index(usize),
}

impl Segment {
    /// The segment as a field name; indices render as their decimal string.
    pub fn as_field(&self) -> Cow<'_, str> {
        match self {
            Segment::Field(name) => Cow::Borrowed(name),
            Segment::Index(i) => Cow::Owned(i.to_string()),
        }
    }
}

impl fmt::Display for Segment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.as_field())
    }
}

impl From<&str> for Segment {
    fn from(name: &str) -> Self {
        Segment::Field(name.to_string())
    }
}

impl From<String> for Segment {
    fn from(name: String) -> Self {
        Segment::Field(name)
    }
}

impl From<usize> for Segment {
    fn from(i: usize) -> Self {
        Segment::Index(i)
    }
}

/// Coordinate of a node inside the output tree.
///
/// Paths are never mutated in place: each nested encoder gets its own
/// extended copy.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct CodingPath {
    segments: Vec<Segment>,
}

impl CodingPath {
    pub fn root() -> Self {
        Self::default()
    }

    pub fn child(&self, segment: Segment) -> Self {
        let mut segments = Vec::with_capacity(self.len() + 1);
        segments.extend_from_slice(&self.segments);
        segments.push(segment);
        Self { segments }
    }

    pub fn field(&self, name: impl Into<String>) -> Self {
        self.child(Segment::Field(name.into()))
    }

    pub fn index(&self, i: usize) -> Self {
        self.child(Segment::Index(i))
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// First segment and the remainder, or `None` at the root.
    pub fn split_first(&self) -> Option<(&Segment, &[Segment])> {
        self.segments.split_first()
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }
}

impl fmt::Display for CodingPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Some((head, tail)) = self.split_first() else {
            return f.write_str("<root>");
        };
        write!(f, "{}", head)?;
        for seg in tail {
            write!(f, ".{}", seg)?;
        }
        Ok(())
    }
}

impl From<Vec<Segment>> for CodingPath {
    fn from(segments: Vec<Segment>) -> Self {
        Self { segments }
    }
}

impl FromIterator<Segment> for CodingPath {
    fn from_iter<I: IntoIterator<Item = Segment>>(iter: I) -> Self {
        Self { segments: iter.into_iter().collect() }
    }
}
