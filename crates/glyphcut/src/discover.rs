//! Pairing of manifests with their sheet images in a directory.
use std::{
    fs,
    path::{Path, PathBuf},
};

use crate::error::Result;

pub const MANIFEST_EXTENSION: &str = "plist";
pub const SHEET_EXTENSION: &str = "png";

/// A manifest and the sheet image sharing its file stem.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SheetPair {
    pub stem: String,
    pub manifest: PathBuf,
    pub sheet: PathBuf,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Discovery {
    pub pairs: Vec<SheetPair>,
    /// Manifests without a matching sheet.
    pub unmatched: Vec<PathBuf>,
}

/// Sheet path for a manifest: same directory and stem, `.png` extension.
pub fn sheet_for(manifest: &Path) -> PathBuf {
    manifest.with_extension(SHEET_EXTENSION)
}

/// Scans `dir` (not recursively) for `<stem>.plist` files and pairs each with
/// `<stem>.png`. Results are sorted by path.
pub fn discover_sheets(dir: &Path) -> Result<Discovery> {
    let mut manifests = Vec::new();
    for entry in fs::read_dir(dir)? {
        let path = entry?.path();
        if path.is_file() && has_extension(&path, MANIFEST_EXTENSION) {
            manifests.push(path);
        }
    }
    manifests.sort();

    let mut discovery = Discovery::default();
    for manifest in manifests {
        let sheet = sheet_for(&manifest);
        let stem = manifest
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default();
        if sheet.is_file() {
            discovery.pairs.push(SheetPair {
                stem,
                manifest,
                sheet,
            });
        } else {
            log::debug!("no sheet for {}", manifest.display());
            discovery.unmatched.push(manifest);
        }
    }
    Ok(discovery)
}

fn has_extension(path: &Path, ext: &str) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case(ext))
}
