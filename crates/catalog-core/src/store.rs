//! The `AuthorStore` trait: the seam between this crate and whatever
//! persists authors.
//!
//! Backends live outside this crate. They assign identifiers, enforce the
//! declared field constraints at write time, and hand back
//! [`AuthorRecord`]s whose display fields are derived here.

use std::future::Future;

use uuid::Uuid;

use crate::author::{AuthorRecord, NewAuthor};

/// Abstraction over an author storage backend.
///
/// Every write must call [`NewAuthor::check`] first and reject the input if
/// it fails. Updates replace all stored fields at once; there is no partial
/// mutation.
///
/// All methods return `Send` futures so the trait can be used in
/// multi-threaded async runtimes.
pub trait AuthorStore: Send + Sync {
  type Error: std::error::Error + Send + Sync + 'static;

  /// Persist a new author and return it with its assigned identifier.
  fn create(
    &self,
    input: NewAuthor,
  ) -> impl Future<Output = Result<AuthorRecord, Self::Error>> + Send + '_;

  /// Retrieve an author by identifier. Returns `None` if not found.
  fn get(
    &self,
    author_id: Uuid,
  ) -> impl Future<Output = Result<Option<AuthorRecord>, Self::Error>> + Send + '_;

  fn list(
    &self,
  ) -> impl Future<Output = Result<Vec<AuthorRecord>, Self::Error>> + Send + '_;

  /// Replace every stored field of an existing author.
  fn replace(
    &self,
    author_id: Uuid,
    input: NewAuthor,
  ) -> impl Future<Output = Result<AuthorRecord, Self::Error>> + Send + '_;

  /// Remove an author. Errors if the identifier is unknown.
  fn delete(
    &self,
    author_id: Uuid,
  ) -> impl Future<Output = Result<(), Self::Error>> + Send + '_;
}
