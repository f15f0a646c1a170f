use serde::{Deserialize, Serialize};

/// Unstructured TLE, split into its lines but not yet parsed
/// https://en.wikipedia.org/wiki/Two-line_element_set
#[derive(Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug, Default, Serialize, Deserialize)]
pub struct UnstructuredTle {
    /// Line 0, empty for a two-line set
    pub satellite_name: String,
    pub line1: String,
    pub line2: String,
}

impl UnstructuredTle {
    pub fn has_title(&self) -> bool {
        !self.satellite_name.is_empty()
    }
}
