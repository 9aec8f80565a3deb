//! Case summary publishing core
//!
//! This crate holds everything below the HTTP layer:
//! - `article`: the persisted record shape
//! - `normalize`: flat form submission to [`Article`]
//! - `store`: the JSON file holding the whole collection
//!
//! An article's identifier is its position in the collection.

pub mod article;
pub mod config;
pub mod error;
pub mod normalize;
pub mod store;

pub use article::{Article, Judge, TimelineEntry};
pub use config::StoreConfig;
pub use error::{CaseError, Result};
pub use normalize::{form_fields, form_schema, normalize, split_lines, FormFields, FormSchema};
pub use store::ArticleStore;
