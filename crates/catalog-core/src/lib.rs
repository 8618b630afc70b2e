//! Core types for the catalog's Author record.
//!
//! This crate is deliberately free of HTTP and database dependencies. It
//! holds the stored shape of an author, the display fields derived from it,
//! and the trait a storage backend implements.

pub mod author;
pub mod date;
pub mod error;
pub mod settings;
pub mod store;
pub mod view;

pub use author::{AuthorRecord, NewAuthor};
pub use error::{Error, Result};
pub use settings::CatalogConfig;
pub use view::AuthorView;
