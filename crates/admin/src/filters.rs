//! Template filters available to all Askama templates.

use std::fmt::Display;

use chrono::Datelike;

/// Current year, for the footer copyright line: `{{ ""|current_year }}`.
#[allow(clippy::unnecessary_wraps)]
#[askama::filter_fn]
pub fn current_year(_value: impl Display, _values: &dyn askama::Values) -> askama::Result<i32> {
    Ok(chrono::Utc::now().year())
}
