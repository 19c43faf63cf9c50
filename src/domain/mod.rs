//! Domain models for the site
//!
//! Contains the Toy Space catalog, its query engine and the user-facing
//! notice types, without any I/O concerns.

mod catalog;
mod criteria;
mod notice;
mod toy;

pub use catalog::{Catalog, CatalogError};
pub use criteria::{Filter, SearchCriteria, SortOrder};
pub use notice::{
    DataRange, DataRequest, DataResponse, ErrorNotice, HueRecord, GENERIC_FETCH_MESSAGE,
};
pub use toy::{Category, Difficulty, ToyEntry, ToyFrontmatter, ToyTag};
