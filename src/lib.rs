//! ahaha-site - Router and Toy Space catalog of a personal portfolio site
//!
//! The site is a handful of pages behind a small client-side router plus a
//! filterable catalog of experiments ("Toy Space"). This crate holds that
//! core and a terminal front end to drive it.

pub mod cli;
pub mod domain;
pub mod router;
pub mod site;
pub mod storage;

pub use domain::{Catalog, SearchCriteria, ToyEntry};
pub use router::{Router, RouterHandle};
pub use site::{Page, Site};
