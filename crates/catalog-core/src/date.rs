//! Display formatting for optional calendar dates.
//!
//! Every helper maps an absent date to the empty string; there is no failure
//! path. Years in `0..=9999` are zero-padded to four digits; years outside
//! that range are written as plain signed integers (`10000`, `-44`).

use chrono::{Datelike, NaiveDate};

/// Abbreviated month and unpadded day; the year is appended separately.
const MEDIUM_MONTH_DAY: &str = "%b %-d";

const MONTH_DAY: &str = "%m-%d";

fn year(d: NaiveDate) -> String {
  match d.year() {
    y @ 0..=9999 => format!("{y:04}"),
    y => y.to_string(),
  }
}

/// Medium-length en-US rendering such as `Jan 5, 1990`, or `""` when `date`
/// is `None`.
pub fn format_medium(date: Option<NaiveDate>) -> String {
  date
    .map(|d| format!("{}, {}", d.format(MEDIUM_MONTH_DAY), year(d)))
    .unwrap_or_default()
}

/// Canonical `YYYY-MM-DD`, or `""` when `date` is `None`.
pub fn format_yyyymmdd(date: Option<NaiveDate>) -> String {
  date
    .map(|d| format!("{}-{}", year(d), d.format(MONTH_DAY)))
    .unwrap_or_default()
}

/// `"{birth} - {death}"` in medium form when either date is known.
///
/// Each side is rendered independently, so a record with only a death date
/// yields `" - Mar 2, 2020"`. With neither date the result is `""`, never
/// `" - "`.
pub fn format_lifespan(
  birth: Option<NaiveDate>,
  death: Option<NaiveDate>,
) -> String {
  if birth.is_none() && death.is_none() {
    return String::new();
  }
  format!("{} - {}", format_medium(birth), format_medium(death))
}
