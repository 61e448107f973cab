//! Directory listings and pattern selection.

use crate::bundler::error::{ErrorExt, Result};
use regex::Regex;
use std::path::Path;

/// Returns the names of the top-level entries of `dir`, sorted.
///
/// Names that are not valid UTF-8 are skipped; none of the allow-lists can
/// match them.
pub async fn list_dir(dir: &Path) -> Result<Vec<String>> {
    let mut entries = tokio::fs::read_dir(dir)
        .await
        .fs_context("listing directory", dir)?;

    let mut names = Vec::new();
    while let Some(entry) = entries
        .next_entry()
        .await
        .fs_context("listing directory", dir)?
    {
        match entry.file_name().into_string() {
            Ok(name) => names.push(name),
            Err(name) => log::debug!("skipping non UTF-8 entry {:?}", name),
        }
    }
    names.sort();
    Ok(names)
}

/// First name in `listing` matched by `pattern`.
pub fn find_first<'a>(listing: &'a [String], pattern: &Regex) -> Option<&'a str> {
    listing
        .iter()
        .map(String::as_str)
        .find(|name| pattern.is_match(name))
}
