//! Typed data model for the Google file picker.
//!
//! - [`ViewId`] / [`Feature`]: the closed catalogs of picker views and feature flags
//! - [`ViewGroup`]: a tree of views presented as one picker tab
//! - [`GoogleDocument`] / [`GoogleDocuments`]: the selection payload mapped into typed records
//! - [`PickerConfig`] / [`PickerResponse`]: the properties of one picker invocation and its callback result

pub mod catalog;
pub mod document;
pub mod error;
pub mod picker;
pub mod view_group;

pub use catalog::*;
pub use document::*;
pub use error::{Error, Result};
pub use picker::*;
pub use view_group::*;
