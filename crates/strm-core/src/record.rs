//! Semi-structured torrent record access
//!
//! The listing endpoint returns loosely shaped JSON; records stay as
//! `serde_json::Value` and are picked apart defensively through these
//! borrowed views.

use serde_json::Value;

/// Borrowed view over one element of the remote listing.
///
/// Construction succeeds only for JSON objects; every field accessor is
/// tolerant of missing or oddly typed values.
#[derive(Debug, Clone, Copy)]
pub struct TorrentRecord<'a> {
    value: &'a Value,
}

impl<'a> TorrentRecord<'a> {
    /// Wrap a listing element, returning `None` unless it is an object.
    pub fn from_value(value: &'a Value) -> Option<Self> {
        value.is_object().then_some(Self { value })
    }

    /// The identifying hash, if present and non-empty.
    pub fn hash(&self) -> Option<&'a str> {
        non_empty_str(self.value, "hash")
    }

    /// The raw category label, if present and non-empty.
    pub fn category(&self) -> Option<&'a str> {
        non_empty_str(self.value, "category")
    }

    /// The display title: `title`, else `name`. Callers fall back to the
    /// hash when neither is present.
    pub fn title(&self) -> Option<&'a str> {
        non_empty_str(self.value, "title").or_else(|| non_empty_str(self.value, "name"))
    }

    /// The `file_stats` array, if present and non-empty.
    ///
    /// `None` means the torrent is itself a single streamable unit.
    pub fn file_stats(&self) -> Option<&'a [Value]> {
        self.value
            .get("file_stats")
            .and_then(Value::as_array)
            .filter(|files| !files.is_empty())
            .map(Vec::as_slice)
    }
}

/// Borrowed view over one `file_stats` element.
#[derive(Debug, Clone, Copy)]
pub struct FileStat<'a> {
    value: &'a Value,
}

impl<'a> FileStat<'a> {
    /// Wrap a `file_stats` element, returning `None` unless it is an
    /// object.
    pub fn from_value(value: &'a Value) -> Option<Self> {
        value.is_object().then_some(Self { value })
    }

    /// The file identifier rendered for pointer content.
    ///
    /// `0` and `""` are valid identifiers; only an absent or null `id`
    /// yields `None`. Numbers render in their canonical display form,
    /// strings pass through verbatim.
    pub fn id(&self) -> Option<String> {
        match self.value.get("id") {
            None | Some(Value::Null) => None,
            Some(Value::String(s)) => Some(s.clone()),
            Some(other) => Some(other.to_string()),
        }
    }

    /// The file path inside the torrent, if present and non-empty.
    pub fn path(&self) -> Option<&'a str> {
        non_empty_str(self.value, "path")
    }
}

/// A string field that is present and non-empty.
fn non_empty_str<'a>(value: &'a Value, key: &str) -> Option<&'a str> {
    value
        .get(key)
        .and_then(Value::as_str)
        .filter(|s| !s.is_empty())
}
