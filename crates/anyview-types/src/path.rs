use std::fmt;

/// Separator used when a node path is written as a single string
pub const PATH_DELIMITER: char = '/';

/// One step of a node path: a mapping key or a sequence index
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Segment {
    Key(String),
    Index(usize),
}

impl Segment {
    /// Numeric view of the segment, for indexing into sequences.
    /// A `Key` holding digits counts as an index.
    pub fn as_index(&self) -> Option<usize> {
        match self {
            Segment::Index(i) => Some(*i),
            Segment::Key(k) => k.parse().ok(),
        }
    }

    pub fn as_key(&self) -> Option<&str> {
        match self {
            Segment::Key(k) => Some(k),
            Segment::Index(_) => None,
        }
    }
}

impl fmt::Display for Segment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Segment::Key(k) => write!(f, "{}", k),
            Segment::Index(i) => write!(f, "{}", i),
        }
    }
}

impl From<&str> for Segment {
    fn from(s: &str) -> Self {
        Segment::Key(s.to_string())
    }
}

impl From<String> for Segment {
    fn from(s: String) -> Self {
        Segment::Key(s)
    }
}

impl From<usize> for Segment {
    fn from(i: usize) -> Self {
        Segment::Index(i)
    }
}

/// Ordered sequence of segments locating a node relative to a root
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NodePath(Vec<Segment>);

impl NodePath {
    pub fn root() -> Self {
        NodePath(Vec::new())
    }

    pub fn new(segments: Vec<Segment>) -> Self {
        NodePath(segments)
    }

    /// Parse a delimited path string; digit-only parts become indices
    pub fn parse(path: &str) -> Self {
        if path.is_empty() {
            return NodePath::root();
        }
        let segments = path
            .split(PATH_DELIMITER)
            .map(|part| match part.parse::<usize>() {
                Ok(i) => Segment::Index(i),
                Err(_) => Segment::Key(part.to_string()),
            })
            .collect();
        NodePath(segments)
    }

    pub fn is_root(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn segments(&self) -> &[Segment] {
        &self.0
    }

    pub fn push(&mut self, segment: impl Into<Segment>) {
        self.0.push(segment.into());
    }

    /// New path with one more segment appended
    pub fn join(&self, segment: impl Into<Segment>) -> Self {
        let mut segments = self.0.clone();
        segments.push(segment.into());
        NodePath(segments)
    }

    pub fn split_first(&self) -> Option<(&Segment, NodePath)> {
        let (first, rest) = self.0.split_first()?;
        Some((first, NodePath(rest.to_vec())))
    }

    /// True when the path consists of exactly the given key
    pub fn is_single_key(&self, name: &str) -> bool {
        match self.0.as_slice() {
            [Segment::Key(k)] => k == name,
            _ => false,
        }
    }
}

impl fmt::Display for NodePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for segment in &self.0 {
            if !first {
                write!(f, "{}", PATH_DELIMITER)?;
            }
            write!(f, "{}", segment)?;
            first = false;
        }
        Ok(())
    }
}

impl From<Vec<Segment>> for NodePath {
    fn from(segments: Vec<Segment>) -> Self {
        NodePath(segments)
    }
}

impl From<&str> for NodePath {
    fn from(path: &str) -> Self {
        NodePath::parse(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_mixed_segments() {
        let path = NodePath::parse("users/0/name");
        assert_eq!(
            path.segments(),
            &[
                Segment::Key("users".to_string()),
                Segment::Index(0),
                Segment::Key("name".to_string()),
            ]
        );
    }

    #[test]
    fn test_parse_empty_is_root() {
        assert!(NodePath::parse("").is_root());
    }

    #[test]
    fn test_display_round_trip() {
        let path = NodePath::parse("a/b/2");
        assert_eq!(path.to_string(), "a/b/2");
        assert_eq!(NodePath::parse(&path.to_string()), path);
    }

    #[test]
    fn test_join_does_not_mutate() {
        let base = NodePath::parse("a");
        let child = base.join("b");
        assert_eq!(base.len(), 1);
        assert_eq!(child.to_string(), "a/b");
    }

    #[test]
    fn test_is_single_key() {
        assert!(NodePath::parse("data").is_single_key("data"));
        assert!(!NodePath::parse("data/0").is_single_key("data"));
        assert!(!NodePath::root().is_single_key("data"));
    }
}
