// envdoc: Environment override documentation generator
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Rendering and persisting the snapshot.
//!
//! ```text
//! DocumentationSnapshot
//!   |  serde_json + AsciiFormatter (2-space indent, \uXXXX escapes)
//!   v
//! String + "\n"
//!   |-- write_atomic()  --> tempfile in target dir --> rename
//!   '-- check()         --> compare with file on disk, ignoring generated_at
//! ```


use std::io::{self, Write};
use std::path::Path;

use serde::Serialize;
use serde_json::Value;
use serde_json::ser::{Formatter, PrettyFormatter};
use tempfile::NamedTempFile;
use tracing::{debug, info};

use crate::error::OutputError;
use crate::snapshot::DocumentationSnapshot;

/// Key excluded from staleness comparison; it changes every day.
const VOLATILE_KEY: &str = "generated_at";

/// Pretty printer that escapes every non-ASCII character.
///
/// Keeps the generated file byte-stable across platforms and editors.
struct AsciiFormatter<'a> {
    inner: PrettyFormatter<'a>,
}

impl AsciiFormatter<'_> {
    fn new() -> Self {
        Self {
            inner: PrettyFormatter::with_indent(b"  "),
        }
    }
}

impl Formatter for AsciiFormatter<'_> {
    fn write_string_fragment<W: ?Sized + Write>(
        &mut self,
        writer: &mut W,
        fragment: &str,
    ) -> io::Result<()> {
        let mut start = 0;
        for (index, ch) in fragment.char_indices() {
            if ch.is_ascii() {
                continue;
            }
            writer.write_all(&fragment.as_bytes()[start..index])?;
            let mut units = [0u16; 2];
            for unit in ch.encode_utf16(&mut units) {
                write!(writer, "\\u{unit:04x}")?;
            }
            start = index + ch.len_utf8();
        }
        writer.write_all(&fragment.as_bytes()[start..])
    }

    fn begin_array<W: ?Sized + Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.inner.begin_array(writer)
    }

    fn end_array<W: ?Sized + Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.inner.end_array(writer)
    }

    fn begin_array_value<W: ?Sized + Write>(
        &mut self,
        writer: &mut W,
        first: bool,
    ) -> io::Result<()> {
        self.inner.begin_array_value(writer, first)
    }

    fn end_array_value<W: ?Sized + Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.inner.end_array_value(writer)
    }

    fn begin_object<W: ?Sized + Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.inner.begin_object(writer)
    }

    fn end_object<W: ?Sized + Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.inner.end_object(writer)
    }

    fn begin_object_key<W: ?Sized + Write>(
        &mut self,
        writer: &mut W,
        first: bool,
    ) -> io::Result<()> {
        self.inner.begin_object_key(writer, first)
    }

    fn begin_object_value<W: ?Sized + Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.inner.begin_object_value(writer)
    }

    fn end_object_value<W: ?Sized + Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.inner.end_object_value(writer)
    }
}

/// Serialize any value the way the snapshot file is written.
///
/// # Errors
///
/// Returns an `OutputError::Serialize` if serialization fails.
pub fn to_json<T: Serialize + ?Sized>(value: &T) -> Result<String, OutputError> {
    let mut buffer = Vec::with_capacity(4096);
    let mut serializer = serde_json::Serializer::with_formatter(&mut buffer, AsciiFormatter::new());
    value.serialize(&mut serializer)?;
    buffer.push(b'\n');
    // Every byte written is ASCII.
    Ok(String::from_utf8_lossy(&buffer).into_owned())
}

/// Render the snapshot file content.
///
/// # Errors
///
/// Returns an `OutputError::Serialize` if serialization fails.
///
/// # Example
/// ```
/// use envdoc::output::render;
/// use envdoc::snapshot::{Aggregator, SourceInfo};
///
/// let snapshot = Aggregator::builder()
///     .with_generated_at("2026-01-01")
///     .with_sources(SourceInfo::default())
///     .build()
///     .build();
/// let json = render(&snapshot)?;
/// assert!(json.starts_with("{\n  \"generated_at\": \"2026-01-01\""));
/// assert!(json.ends_with("}\n"));
/// # Ok::<(), envdoc::error::OutputError>(())
/// ```
pub fn render(snapshot: &DocumentationSnapshot) -> Result<String, OutputError> {
    to_json(snapshot)
}

/// Write `content` to `path`, replacing any existing file in one rename.
///
/// Parent directories are created as needed. The new file keeps the mode
/// of the file it replaces; a fresh file is world-readable (`0644` on Unix)
/// rather than the private mode temp files are created with.
///
/// # Errors
///
/// Returns an `OutputError::WriteFailed` if any filesystem step fails.
pub fn write_atomic(path: &Path, content: &str) -> Result<(), OutputError> {
    let failed = |source: io::Error| OutputError::WriteFailed {
        path: path.to_path_buf(),
        source,
    };

    let parent = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    std::fs::create_dir_all(parent).map_err(failed)?;

    let mut file = NamedTempFile::new_in(parent).map_err(failed)?;
    file.write_all(content.as_bytes()).map_err(failed)?;
    file.as_file().sync_all().map_err(failed)?;
    if let Some(permissions) = output_permissions(path) {
        file.as_file().set_permissions(permissions).map_err(failed)?;
    }
    file.persist(path).map_err(|e| failed(e.error))?;

    info!(path = %path.display(), bytes = content.len(), "wrote snapshot");
    Ok(())
}

/// Permissions for the file written to `path`.
fn output_permissions(path: &Path) -> Option<std::fs::Permissions> {
    std::fs::metadata(path)
        .ok()
        .map(|metadata| metadata.permissions())
        .or_else(default_permissions)
}

#[cfg(unix)]
fn default_permissions() -> Option<std::fs::Permissions> {
    use std::os::unix::fs::PermissionsExt;
    Some(std::fs::Permissions::from_mode(0o644))
}

#[cfg(not(unix))]
fn default_permissions() -> Option<std::fs::Permissions> {
    None
}

/// Compare the file at `path` with a freshly built snapshot.
///
/// Only `generated_at` may differ.
///
/// # Errors
///
/// Returns `OutputError::Missing` if there is no file, `OutputError::Stale`
/// if it differs or cannot be parsed, and `OutputError::ReadFailed` for
/// other read failures.
pub fn check(path: &Path, snapshot: &DocumentationSnapshot) -> Result<(), OutputError> {
    let existing = match std::fs::read_to_string(path) {
        Ok(existing) => existing,
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            return Err(OutputError::Missing {
                path: path.to_path_buf(),
            });
        }
        Err(source) => {
            return Err(OutputError::ReadFailed {
                path: path.to_path_buf(),
                source,
            });
        }
    };

    let Ok(mut on_disk) = serde_json::from_str::<Value>(&existing) else {
        debug!(path = %path.display(), "existing output is not valid JSON");
        return Err(OutputError::Stale {
            path: path.to_path_buf(),
        });
    };
    let mut fresh = serde_json::to_value(snapshot)?;

    strip_volatile(&mut on_disk);
    strip_volatile(&mut fresh);

    if on_disk == fresh {
        debug!(path = %path.display(), "snapshot is up to date");
        Ok(())
    } else {
        Err(OutputError::Stale {
            path: path.to_path_buf(),
        })
    }
}

fn strip_volatile(value: &mut Value) {
    if let Value::Object(map) = value {
        map.remove(VOLATILE_KEY);
    }
}
