pub use crate::record::{CatalogNumber, TleRecord};
pub use crate::tle::UnstructuredTle;
