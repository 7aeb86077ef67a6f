// envdoc: Environment override documentation generator
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Parallel glob search below the extracted sources directory.
//!
//! ```text
//! WalkBuilder(root) --build_parallel--> worker threads
//!        |                                  |
//!   hidden / gitignore              glob.is_match(rel_path)
//!                                           |
//!                                     flume channel
//!                                           |
//!                                   collect + sort --> Vec<PathBuf>
//! ```
//!
//! Results are sorted so the scan order (and thus `sources` order) does not
//! depend on thread scheduling.

use bon::Builder;
use flume::bounded;
use ignore::WalkBuilder;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use tracing::{debug, warn};
use wax::{Glob, Program};

use crate::config::types::DiscoveryConfig;
use crate::error::SourceError;

/// Options for directory traversal.
#[derive(Debug, Clone, Builder)]
pub struct WalkOptions {
    /// Include hidden files/directories
    #[builder(setters(name = with_include_hidden), default = true)]
    include_hidden: bool,
    /// Respect .gitignore files
    #[builder(setters(name = with_respect_gitignore), default = false)]
    respect_gitignore: bool,
}

impl Default for WalkOptions {
    fn default() -> Self {
        Self::builder().build()
    }
}

impl From<&DiscoveryConfig> for WalkOptions {
    fn from(config: &DiscoveryConfig) -> Self {
        Self::builder()
            .with_include_hidden(config.include_hidden)
            .with_respect_gitignore(config.respect_gitignore)
            .build()
    }
}

impl WalkOptions {
    #[must_use]
    pub const fn include_hidden(&self) -> bool {
        self.include_hidden
    }

    #[must_use]
    pub const fn respect_gitignore(&self) -> bool {
        self.respect_gitignore
    }
}

fn build_walker(root: &Path, options: &WalkOptions) -> WalkBuilder {
    let mut builder = WalkBuilder::new(root);

    builder.hidden(!options.include_hidden());

    builder.git_ignore(options.respect_gitignore());
    builder.git_global(options.respect_gitignore());
    builder.git_exclude(options.respect_gitignore());
    builder.ignore(options.respect_gitignore());
    builder.parents(options.respect_gitignore());

    builder
}

/// Finds files below `root` whose root-relative path matches `pattern`.
///
/// # Errors
///
/// Returns a `SourceError::Discovery` if the root does not exist or the
/// pattern is not a valid glob.
///
/// # Example
/// ```no_run
/// use envdoc::sources::walk::{find_files, WalkOptions};
///
/// let inis = find_files("docs/env_sources", "**/*.ini", &WalkOptions::default())?;
/// for file in inis {
///     println!("{}", file.display());
/// }
/// # Ok::<(), envdoc::error::SourceError>(())
/// ```
pub fn find_files<P: AsRef<Path>>(
    root: P,
    pattern: &str,
    options: &WalkOptions,
) -> Result<Vec<PathBuf>, SourceError> {
    let root = root.as_ref();

    if !root.is_dir() {
        return Err(SourceError::Discovery {
            root: root.to_path_buf(),
            message: "not a directory".to_string(),
        });
    }

    let glob = Glob::new(pattern).map_err(|e| SourceError::Discovery {
        root: root.to_path_buf(),
        message: format!("invalid glob pattern '{pattern}': {e}"),
    })?;

    // Bounded so a huge extracted tree cannot exhaust memory.
    let (tx, rx) = bounded::<PathBuf>(1000);
    let glob = Arc::new(glob);
    let root_path = root.to_path_buf();
    let error_count = Arc::new(AtomicUsize::new(0));

    let parallel = build_walker(root, options).build_parallel();

    // The walk blocks until every worker is done, so it runs on its own
    // thread while this one drains the channel.
    let mut files: Vec<PathBuf> = std::thread::scope(|scope| {
        let error_count = Arc::clone(&error_count);
        scope.spawn(move || {
            parallel.run(|| {
                let tx = tx.clone();
                let glob = Arc::clone(&glob);
                let root_path = root_path.clone();
                let error_count = Arc::clone(&error_count);

                Box::new(move |entry_result| {
                    match entry_result {
                        Ok(entry) => {
                            if entry.file_type().is_some_and(|ft| ft.is_file())
                                && let Ok(rel_path) = entry.path().strip_prefix(&root_path)
                                && glob.is_match(rel_path)
                            {
                                let _ = tx.send(entry.path().to_path_buf());
                            }
                        }
                        Err(e) => {
                            warn!(error = %e, "walk error");
                            error_count.fetch_add(1, Ordering::Relaxed);
                        }
                    }
                    ignore::WalkState::Continue
                })
            });
            // `tx` drops here, closing the channel.
        });
        rx.iter().collect()
    });

    files.sort();
    debug!(
        root = %root.display(),
        pattern,
        found = files.len(),
        errors = error_count.load(Ordering::Relaxed),
        "searched sources directory"
    );
    Ok(files)
}
