use std::collections::{hash_set, HashSet};

/// Signatures of puzzle states that may not appear in a solution path.
///
/// Solvers never mutate a caller's set. They clone it on entry and hand
/// snapshots down to nested searches, so sibling branches stay independent.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Seen {
    signatures: HashSet<String>,
}

impl Seen {
    pub fn new() -> Self {
        Seen::default()
    }

    pub fn contains(&self, signature: &str) -> bool {
        self.signatures.contains(signature)
    }

    /// Returns `false` if the signature was already present.
    pub fn insert(&mut self, signature: String) -> bool {
        self.signatures.insert(signature)
    }

    pub fn len(&self) -> usize {
        self.signatures.len()
    }

    pub fn is_empty(&self) -> bool {
        self.signatures.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.signatures.iter().map(String::as_str)
    }
}

impl From<HashSet<String>> for Seen {
    fn from(signatures: HashSet<String>) -> Self {
        Seen { signatures }
    }
}

impl FromIterator<String> for Seen {
    fn from_iter<I: IntoIterator<Item = String>>(iter: I) -> Self {
        Seen {
            signatures: iter.into_iter().collect(),
        }
    }
}

impl<'a> FromIterator<&'a str> for Seen {
    fn from_iter<I: IntoIterator<Item = &'a str>>(iter: I) -> Self {
        iter.into_iter().map(String::from).collect()
    }
}

impl Extend<String> for Seen {
    fn extend<I: IntoIterator<Item = String>>(&mut self, iter: I) {
        self.signatures.extend(iter);
    }
}

impl IntoIterator for Seen {
    type Item = String;
    type IntoIter = hash_set::IntoIter<String>;

    fn into_iter(self) -> Self::IntoIter {
        self.signatures.into_iter()
    }
}
