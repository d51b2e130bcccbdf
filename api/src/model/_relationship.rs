use std::fmt;

use super::Uri;

/// The predicate of a [`Triple`](super::Triple), identified by a [`Uri`].
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Relationship(pub Uri);

impl From<Uri> for Relationship {
    fn from(u: Uri) -> Self {
        Self(u)
    }
}

impl From<Relationship> for Uri {
    fn from(r: Relationship) -> Self {
        r.0
    }
}

impl fmt::Display for Relationship {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}
