//! SQL for each table, operating on a borrowed connection.

pub mod calculations;
pub mod practices;
pub mod profile;

use chrono::{DateTime, Utc};

use mysticnum_core::errors::MysticResult;

use crate::to_storage_err;

pub(crate) fn format_ts(ts: &DateTime<Utc>) -> String {
    ts.to_rfc3339()
}

pub(crate) fn parse_ts(raw: &str) -> MysticResult<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(raw)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| to_storage_err(format!("bad timestamp '{raw}': {e}")))
}
