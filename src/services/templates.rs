//! Embedded default templates.
//!
//! The three artifact templates are compiled into the binary so a fresh
//! checkout can generate artifacts without hand-writing them first. `init`
//! materializes them into the template directory; `generate` does the same
//! when the directory is missing. Existing files are never overwritten, so
//! local template edits survive.

use std::fs;
use std::path::Path;

use include_dir::{Dir, include_dir};

use crate::domain::AppError;

static TEMPLATE_DIR: Dir = include_dir!("$CARGO_MANIFEST_DIR/templates");

/// Write the embedded templates into `dir`, skipping files that already
/// exist. Returns the names of the files actually written.
pub fn materialize(dir: &Path) -> Result<Vec<String>, AppError> {
    fs::create_dir_all(dir)?;

    let mut written = Vec::new();
    for file in TEMPLATE_DIR.files() {
        let target = dir.join(file.path());
        if target.exists() {
            continue;
        }
        fs::write(&target, file.contents())?;
        written.push(file.path().to_string_lossy().to_string());
    }

    written.sort();
    Ok(written)
}
