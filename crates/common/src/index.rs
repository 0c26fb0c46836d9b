use serde::{Deserialize, Serialize};

/// Position of an entry in a displayed list.
///
/// Users see one-based positions while the model works with zero-based
/// offsets; this type keeps the two from being mixed up.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Index(usize);

impl Index {
    /// Creates an index from a zero-based offset.
    pub fn from_zero_based(offset: usize) -> Self {
        Self(offset)
    }

    /// Creates an index from a one-based position. Returns `None` for `0`.
    pub fn from_one_based(position: usize) -> Option<Self> {
        position.checked_sub(1).map(Self)
    }

    pub fn zero_based(&self) -> usize {
        self.0
    }

    pub fn one_based(&self) -> usize {
        self.0 + 1
    }
}

impl std::fmt::Display for Index {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.one_based())
    }
}
