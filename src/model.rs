//! Shared behaviour for the service data models.
//!
//! Every model renders as pretty-printed JSON through `Display`, which is the
//! form the services document their payloads in and what shows up in logs.

use serde::Serialize;
use std::fmt;

/// Writes `value` as pretty JSON into a formatter.
pub(crate) fn fmt_json<T: Serialize>(value: &T, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    let json = serde_json::to_string_pretty(value).map_err(|e| {
        tracing::warn!(error = %e, "Failed to render model as JSON");
        fmt::Error
    })?;
    f.write_str(&json)
}

/// Implements `Display` as pretty JSON for one or more model types.
macro_rules! display_as_json {
    ($($model:ty),+ $(,)?) => {
        $(
            impl ::std::fmt::Display for $model {
                fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                    $crate::model::fmt_json(self, f)
                }
            }
        )+
    };
}

pub(crate) use display_as_json;
