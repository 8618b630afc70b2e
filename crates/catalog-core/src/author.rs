//! The Author record and its derived display fields.
//!
//! Only the identifier, the two names, and the two optional dates are stored.
//! Everything else (full name, URL, formatted dates, lifespan) is recomputed
//! from those fields on every call and never persisted.

use chrono::NaiveDate;
use garde::Validate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{Result, date};

/// Mount point for author detail pages.
pub const DEFAULT_AUTHOR_ROUTE: &str = "/catalog/author";

/// Upper bound on either name, in UTF-16 code units.
pub const MAX_NAME_LEN: usize = 100;

// ─── NewAuthor ───────────────────────────────────────────────────────────────

/// The caller-supplied fields of an author; everything except the identifier.
///
/// Input to [`crate::store::AuthorStore::create`] and
/// [`crate::store::AuthorStore::replace`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct NewAuthor {
  #[serde(default)]
  #[garde(length(utf16, min = 1, max = MAX_NAME_LEN))]
  pub first_name:    String,
  #[serde(default)]
  #[garde(length(utf16, min = 1, max = MAX_NAME_LEN))]
  pub family_name:   String,
  #[garde(skip)]
  pub date_of_birth: Option<NaiveDate>,
  #[garde(skip)]
  pub date_of_death: Option<NaiveDate>,
}

impl NewAuthor {
  pub fn new(
    first_name: impl Into<String>,
    family_name: impl Into<String>,
  ) -> Self {
    Self {
      first_name: first_name.into(),
      family_name: family_name.into(),
      date_of_birth: None,
      date_of_death: None,
    }
  }

  pub fn born(mut self, date: NaiveDate) -> Self {
    self.date_of_birth = Some(date);
    self
  }

  pub fn died(mut self, date: NaiveDate) -> Self {
    self.date_of_death = Some(date);
    self
  }

  /// Enforce the declared name constraints. Storage layers call this before
  /// every write.
  pub fn check(&self) -> Result<()> {
    self.validate().map_err(|report| {
      tracing::debug!(%report, "author rejected by field constraints");
      report.into()
    })
  }
}

// ─── AuthorRecord ────────────────────────────────────────────────────────────

/// A stored author as handed out by the storage layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct AuthorRecord {
  /// Assigned by the storage layer on creation; opaque to this crate.
  #[garde(skip)]
  pub author_id:     Uuid,
  #[serde(default)]
  #[garde(length(utf16, min = 1, max = MAX_NAME_LEN))]
  pub first_name:    String,
  #[serde(default)]
  #[garde(length(utf16, min = 1, max = MAX_NAME_LEN))]
  pub family_name:   String,
  #[garde(skip)]
  pub date_of_birth: Option<NaiveDate>,
  #[garde(skip)]
  pub date_of_death: Option<NaiveDate>,
}

impl AuthorRecord {
  /// Assemble a record once the storage layer has picked an identifier.
  pub fn from_new(author_id: Uuid, fields: NewAuthor) -> Self {
    let NewAuthor {
      first_name,
      family_name,
      date_of_birth,
      date_of_death,
    } = fields;
    Self {
      author_id,
      first_name,
      family_name,
      date_of_birth,
      date_of_death,
    }
  }

  /// Swap every stored field at once; the identifier is kept.
  pub fn replace(&mut self, fields: NewAuthor) {
    *self = Self::from_new(self.author_id, fields);
  }

  /// The stored fields without the identifier.
  pub fn fields(&self) -> NewAuthor {
    NewAuthor {
      first_name:    self.first_name.clone(),
      family_name:   self.family_name.clone(),
      date_of_birth: self.date_of_birth,
      date_of_death: self.date_of_death,
    }
  }

  /// Same constraints as [`NewAuthor::check`], logged against this record's
  /// id.
  pub fn check(&self) -> Result<()> {
    self.validate().map_err(|report| {
      tracing::debug!(
        author_id = %self.author_id,
        %report,
        "author rejected by field constraints"
      );
      report.into()
    })
  }

  // ── Derived fields ────────────────────────────────────────────────────

  /// `"{family_name}, {first_name}"`, or `""` if either name is missing.
  pub fn full_name(&self) -> String {
    if self.first_name.is_empty() || self.family_name.is_empty() {
      return String::new();
    }
    format!("{}, {}", self.family_name, self.first_name)
  }

  /// Path of the author's detail page under [`DEFAULT_AUTHOR_ROUTE`].
  pub fn url(&self) -> String {
    format!("{DEFAULT_AUTHOR_ROUTE}/{}", self.author_id)
  }

  pub fn date_of_birth_formatted(&self) -> String {
    date::format_medium(self.date_of_birth)
  }

  pub fn date_of_death_formatted(&self) -> String {
    date::format_medium(self.date_of_death)
  }

  pub fn date_of_birth_yyyymmdd(&self) -> String {
    date::format_yyyymmdd(self.date_of_birth)
  }

  pub fn date_of_death_yyyymmdd(&self) -> String {
    date::format_yyyymmdd(self.date_of_death)
  }

  /// See [`date::format_lifespan`].
  pub fn lifespan(&self) -> String {
    date::format_lifespan(self.date_of_birth, self.date_of_death)
  }
}
