//! Error types for `catalog-core`.

use thiserror::Error;
use uuid::Uuid;

#[derive(Debug, Error)]
pub enum Error {
  /// One or more fields violate the declared constraints.
  #[error("invalid author: {0}")]
  Invalid(#[from] garde::Report),

  #[error("author not found: {0}")]
  AuthorNotFound(Uuid),

  #[error("config error: {0}")]
  Config(#[from] ::config::ConfigError),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
