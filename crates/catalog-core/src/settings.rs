//! Catalog configuration.
//!
//! Values come from an optional TOML file, overridden by `CATALOG_*`
//! environment variables (e.g. `CATALOG_AUTHOR_ROUTE=/books/author`).

use std::path::Path;

use serde::Deserialize;
use uuid::Uuid;

use crate::{Result, author::DEFAULT_AUTHOR_ROUTE};

const ENV_PREFIX: &str = "CATALOG";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct CatalogConfig {
  /// Mount point of the author detail pages.
  pub author_route: String,
}

impl Default for CatalogConfig {
  fn default() -> Self {
    Self {
      author_route: DEFAULT_AUTHOR_ROUTE.to_owned(),
    }
  }
}

impl CatalogConfig {
  /// Load from `path` (if given and present) and the `CATALOG_*` process
  /// environment.
  pub fn load(path: Option<&Path>) -> Result<Self> {
    Self::load_from(path, ::config::Environment::with_prefix(ENV_PREFIX))
  }

  /// Like [`CatalogConfig::load`] with an explicit environment source, which
  /// takes precedence over the file.
  pub fn load_from(
    path: Option<&Path>,
    env: ::config::Environment,
  ) -> Result<Self> {
    let mut builder = ::config::Config::builder();
    if let Some(path) = path {
      builder = builder.add_source(::config::File::from(path).required(false));
    }
    let cfg: Self = builder
      .add_source(env)
      .build()?
      .try_deserialize()?;
    tracing::debug!(author_route = %cfg.author_route, "loaded catalog config");
    Ok(cfg)
  }

  /// `"{author_route}/{author_id}"`; a trailing `/` on the route is ignored.
  pub fn author_url(&self, author_id: Uuid) -> String {
    format!("{}/{author_id}", self.author_route.trim_end_matches('/'))
  }
}

#[cfg(test)]
mod tests {
  use std::io::Write;

  use super::*;

  fn env(vars: &[(&str, &str)]) -> ::config::Environment {
    let map = vars
      .iter()
      .map(|(k, v)| ((*k).to_owned(), (*v).to_owned()))
      .collect::<::config::Map<String, String>>();
    ::config::Environment::with_prefix(ENV_PREFIX).source(Some(map))
  }

  fn toml_file(dir: &tempfile::TempDir, contents: &str) -> std::path::PathBuf {
    let path = dir.path().join("catalog.toml");
    let mut file = std::fs::File::create(&path).unwrap();
    writeln!(file, "{contents}").unwrap();
    path
  }

  #[test]
  fn default_route_matches_record_url() {
    let id = Uuid::new_v4();
    assert_eq!(
      CatalogConfig::default().author_url(id),
      format!("/catalog/author/{id}")
    );
  }

  #[test]
  fn trailing_slash_is_ignored() {
    let id = Uuid::nil();
    let cfg = CatalogConfig {
      author_route: "/books/author/".into(),
    };
    assert_eq!(
      cfg.author_url(id),
      "/books/author/00000000-0000-0000-0000-000000000000"
    );
  }

  #[test]
  fn missing_file_falls_back_to_default() {
    let cfg = CatalogConfig::load_from(
      Some(Path::new("/nonexistent/catalog.toml")),
      env(&[]),
    )
    .unwrap();
    assert_eq!(cfg, CatalogConfig::default());
  }

  #[test]
  fn route_read_from_toml_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = toml_file(&dir, "author_route = \"/library/author\"");

    let cfg = CatalogConfig::load_from(Some(&path), env(&[])).unwrap();
    assert_eq!(cfg.author_route, "/library/author");
  }

  #[test]
  fn environment_overrides_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = toml_file(&dir, "author_route = \"/library/author\"");

    let cfg = CatalogConfig::load_from(
      Some(&path),
      env(&[("CATALOG_AUTHOR_ROUTE", "/books/author")]),
    )
    .unwrap();
    assert_eq!(cfg.author_route, "/books/author");
  }

  #[test]
  fn environment_alone_sets_route() {
    let cfg = CatalogConfig::load_from(
      None,
      env(&[("CATALOG_AUTHOR_ROUTE", "/books/author")]),
    )
    .unwrap();
    assert_eq!(
      cfg.author_url(Uuid::nil()),
      "/books/author/00000000-0000-0000-0000-000000000000"
    );
  }

  #[test]
  fn unrelated_variables_are_ignored() {
    let cfg =
      CatalogConfig::load_from(None, env(&[("OTHER_AUTHOR_ROUTE", "/nope")]))
        .unwrap();
    assert_eq!(cfg, CatalogConfig::default());
  }
}
