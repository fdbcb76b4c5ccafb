// bookmark/src/domain/bookmark.rs
use std::fmt;

/// A single `name -> value` entry from a bookmark file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bookmark {
    pub name: String,
    pub value: String,
}

impl Bookmark {
    pub fn new<N: Into<String>, V: Into<String>>(name: N, value: V) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

impl fmt::Display for Bookmark {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.name, self.value)
    }
}

/// Bookmarks in file order.
///
/// Names are not required to be unique; lookups return the first match, so
/// earlier lines shadow later ones.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Bookmarks {
    entries: Vec<Bookmark>,
}

impl Bookmarks {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, bookmark: Bookmark) {
        self.entries.push(bookmark);
    }

    /// First bookmark whose name equals `name` exactly (case-sensitive)
    pub fn resolve(&self, name: &str) -> Option<&Bookmark> {
        self.entries.iter().find(|bm| bm.name == name)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|bm| bm.name.as_str())
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Bookmark> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl FromIterator<Bookmark> for Bookmarks {
    fn from_iter<I: IntoIterator<Item = Bookmark>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a Bookmarks {
    type Item = &'a Bookmark;
    type IntoIter = std::slice::Iter<'a, Bookmark>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
