//! [`AuthorView`] — the serialisable read model handed to a presentation
//! layer. Computed from an [`AuthorRecord`] on construction; never stored.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{AuthorRecord, CatalogConfig};

/// Stored fields plus every derived display field of an author.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthorView {
  pub author_id:               Uuid,
  pub first_name:              String,
  pub family_name:             String,
  pub date_of_birth:           Option<NaiveDate>,
  pub date_of_death:           Option<NaiveDate>,
  pub full_name:               String,
  pub url:                     String,
  pub date_of_birth_formatted: String,
  pub date_of_death_formatted: String,
  pub date_of_birth_yyyymmdd:  String,
  pub date_of_death_yyyymmdd:  String,
  pub lifespan:                String,
}

impl AuthorView {
  /// Like `From<&AuthorRecord>`, but `url` is built from the configured
  /// route.
  pub fn with_config(record: &AuthorRecord, config: &CatalogConfig) -> Self {
    Self {
      url: config.author_url(record.author_id),
      ..Self::from(record)
    }
  }
}

impl From<&AuthorRecord> for AuthorView {
  fn from(r: &AuthorRecord) -> Self {
    Self {
      author_id:               r.author_id,
      first_name:              r.first_name.clone(),
      family_name:             r.family_name.clone(),
      date_of_birth:           r.date_of_birth,
      date_of_death:           r.date_of_death,
      full_name:               r.full_name(),
      url:                     r.url(),
      date_of_birth_formatted: r.date_of_birth_formatted(),
      date_of_death_formatted: r.date_of_death_formatted(),
      date_of_birth_yyyymmdd:  r.date_of_birth_yyyymmdd(),
      date_of_death_yyyymmdd:  r.date_of_death_yyyymmdd(),
      lifespan:                r.lifespan(),
    }
  }
}
