//! Whole-file reads and writes as text, JSON or bytes.

use std::fs;
use std::path::Path;

use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use serde_json::{Map, Serializer, Value};

use crate::fs_op::create::ensure_parent_exists;
use crate::fs_op::error::FsOpError;

/// How `read` should interpret a file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Format {
    #[default]
    Text,
    Json,
    Binary,
}

/// A file's full contents.
#[derive(Debug, Clone, PartialEq)]
pub enum Content {
    Text(String),
    Json(Value),
    Bytes(Vec<u8>),
}

impl Content {
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Content::Text(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_json(&self) -> Option<&Value> {
        match self {
            Content::Json(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_bytes(&self) -> Option<&[u8]> {
        match self {
            Content::Bytes(b) => Some(b),
            _ => None,
        }
    }
}

impl From<String> for Content {
    fn from(s: String) -> Self {
        Content::Text(s)
    }
}

impl From<&str> for Content {
    fn from(s: &str) -> Self {
        Content::Text(s.to_string())
    }
}

impl From<Value> for Content {
    fn from(v: Value) -> Self {
        Content::Json(v)
    }
}

impl From<Vec<u8>> for Content {
    fn from(b: Vec<u8>) -> Self {
        Content::Bytes(b)
    }
}

/// Read the whole of `path` in the requested format.
pub fn read<P: AsRef<Path>>(path: P, format: Format) -> Result<Content, FsOpError> {
    let p = path.as_ref();
    let read_err = |source| FsOpError::Read {
        path: p.to_path_buf(),
        source,
    };
    match format {
        Format::Binary => fs::read(p).map(Content::Bytes).map_err(read_err),
        Format::Text => fs::read_to_string(p).map(Content::Text).map_err(read_err),
        Format::Json => {
            let text = fs::read_to_string(p).map_err(read_err)?;
            serde_json::from_str(&text)
                .map(Content::Json)
                .map_err(|source| FsOpError::Json {
                    path: p.to_path_buf(),
                    source,
                })
        }
    }
}

/// Write `content` to `path`, creating the parent directory first.
///
/// JSON is written with sorted keys and four-space indentation.
pub fn write<P: AsRef<Path>>(path: P, content: &Content) -> Result<(), FsOpError> {
    let p = path.as_ref();
    let json;
    let bytes: &[u8] = match content {
        Content::Text(s) => s.as_bytes(),
        Content::Bytes(b) => b.as_slice(),
        Content::Json(v) => {
            json = to_pretty_json(v).map_err(|source| FsOpError::Serialize {
                path: p.to_path_buf(),
                source,
            })?;
            json.as_slice()
        }
    };

    let write_err = |source| FsOpError::Write {
        path: p.to_path_buf(),
        source,
    };
    ensure_parent_exists(p).map_err(write_err)?;
    tracing::debug!(path = %p.display(), len = bytes.len(), "writing file");
    fs::write(p, bytes).map_err(write_err)
}

/// Serialize any value and write it as JSON.
pub fn write_json<P: AsRef<Path>, T: Serialize + ?Sized>(
    path: P,
    value: &T,
) -> Result<(), FsOpError> {
    let p = path.as_ref();
    let value = serde_json::to_value(value).map_err(|source| FsOpError::Serialize {
        path: p.to_path_buf(),
        source,
    })?;
    write(p, &Content::Json(value))
}

/// Render `value` with four-space indentation and keys sorted at every level.
pub fn to_pretty_json(value: &Value) -> serde_json::Result<Vec<u8>> {
    let sorted = sort_keys(value.clone());
    let mut buf = Vec::new();
    let mut ser = Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(b"    "));
    sorted.serialize(&mut ser)?;
    Ok(buf)
}

// `Map` only keeps keys sorted when serde_json's `preserve_order` feature is
// off, so rebuild objects in key order explicitly.
fn sort_keys(value: Value) -> Value {
    match value {
        Value::Object(map) => {
            let mut entries: Vec<(String, Value)> = map.into_iter().collect();
            entries.sort_by(|a, b| a.0.cmp(&b.0));
            Value::Object(
                entries
                    .into_iter()
                    .map(|(k, v)| (k, sort_keys(v)))
                    .collect::<Map<String, Value>>(),
            )
        }
        Value::Array(items) => Value::Array(items.into_iter().map(sort_keys).collect()),
        other => other,
    }
}
