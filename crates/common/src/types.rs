use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier of a picture frame in the pavilion.
///
/// Frames are numbered by their slot on the arc (`f0`, `f1`, ...), so ids are
/// stable across runs for the same configuration.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct FrameId(pub String);

impl FrameId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Id for the frame occupying arc slot `index`.
    pub fn indexed(index: usize) -> Self {
        Self(format!("f{index}"))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for FrameId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for FrameId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}
