use std::fmt;

use super::Uri;

/// The subject of a [`Triple`](super::Triple), identified by a [`Uri`].
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Resource(pub Uri);

impl From<Uri> for Resource {
    fn from(u: Uri) -> Self {
        Self(u)
    }
}

impl From<Resource> for Uri {
    fn from(r: Resource) -> Self {
        r.0
    }
}

impl fmt::Display for Resource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}
