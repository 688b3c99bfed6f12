// SPDX-FileCopyrightText: 2026 Metra Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Catalog file loading.
//!
//! Records are consumed in fixed windows of three non-blank lines,
//! advancing by three whether or not the current window parsed. A malformed
//! triplet is skipped without desynchronizing the triplets after it — but a
//! single malformed line inside an otherwise well-formed file will consume
//! the two lines that follow it. That fixed-stride behavior is intentional;
//! the format is not self-resynchronizing.

use std::path::Path;

use metra_core::{Catalog, MetraError};
use tracing::{debug, info};

use crate::parser::parse_entry;

/// Load a validated catalog from a flat-record text file.
///
/// Malformed triplets are dropped with a debug log; the load only fails
/// when the file cannot be opened (`CatalogNotFound`) or when zero valid
/// services remain after processing every triplet (`EmptyCatalog`).
pub fn load_catalog(path: &Path) -> Result<Catalog, MetraError> {
    let contents =
        std::fs::read_to_string(path).map_err(|source| MetraError::CatalogNotFound {
            path: path.display().to_string(),
            source,
        })?;

    let lines: Vec<String> = contents
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect();

    let mut catalog = Catalog::default();
    let mut index = 0;
    while index + 3 <= lines.len() {
        match parse_entry(&lines, index) {
            Some(service) => {
                // Last write wins on duplicate names.
                catalog.insert(service);
            }
            None => {
                debug!(start_line = index, "skipping malformed catalog record");
            }
        }
        index += 3;
    }

    if catalog.is_empty() {
        return Err(MetraError::EmptyCatalog {
            path: path.display().to_string(),
        });
    }

    info!(
        path = %path.display(),
        services = catalog.len(),
        "catalog loaded"
    );
    Ok(catalog)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn catalog_file(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn loads_single_service() {
        let file = catalog_file("Compute,hour\n0,50,1000\n0.62,0.58,0.55\n");
        let catalog = load_catalog(file.path()).unwrap();
        assert_eq!(catalog.len(), 1);
        let def = catalog.get("Compute").unwrap();
        assert_eq!(def.unit(), "hour");
        assert_eq!(def.tiers(), &[0.0, 50.0, 1000.0]);
    }

    #[test]
    fn loads_multiple_services_and_skips_blank_lines() {
        let file = catalog_file(
            "Compute,hour\n0,50\n0.62,0.58\n\n  \nStorage,Gb\n0,100\n0.10,0.08\n",
        );
        let catalog = load_catalog(file.path()).unwrap();
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.names(), vec!["Compute", "Storage"]);
    }

    #[test]
    fn trims_surrounding_whitespace_per_line() {
        let file = catalog_file("  Compute,hour  \n  0,50\n0.62,0.58  \n");
        let catalog = load_catalog(file.path()).unwrap();
        assert!(catalog.get("Compute").is_some());
    }

    #[test]
    fn skips_malformed_triplet_keeps_rest() {
        let file = catalog_file(
            "Broken\n0,50\n0.62,0.58\nStorage,Gb\n0,100\n0.10,0.08\n",
        );
        let catalog = load_catalog(file.path()).unwrap();
        assert_eq!(catalog.len(), 1);
        assert!(catalog.get("Storage").is_some());
    }

    #[test]
    fn malformed_triplet_does_not_desynchronize_later_triplets() {
        // A rejected window of exactly three lines leaves the following
        // triplets aligned.
        let file = catalog_file(
            "Compute,hour,extra\n0,50\n0.62,0.58\nStorage,Gb\n0,100\n0.10,0.08\n",
        );
        let catalog = load_catalog(file.path()).unwrap();
        assert_eq!(catalog.len(), 1);
        assert!(catalog.get("Storage").is_some());
    }

    #[test]
    fn stray_extra_line_consumes_the_following_record() {
        // A single stray line shifts every later window: "STRAY" becomes a
        // one-field name line, "Storage,Gb" and "0,100" become its numeric
        // lines, and the real rate line is left as a truncated window.
        // Fixed-stride parsing does not resynchronize.
        let file = catalog_file(
            "Compute,hour\n0,50\n0.62,0.58\nSTRAY\nStorage,Gb\n0,100\n0.10,0.08\n",
        );
        let catalog = load_catalog(file.path()).unwrap();
        assert_eq!(catalog.len(), 1);
        assert!(catalog.get("Storage").is_none());
    }

    #[test]
    fn trailing_partial_triplet_is_ignored() {
        let file = catalog_file("Compute,hour\n0,50\n0.62,0.58\nStorage,Gb\n0,100\n");
        let catalog = load_catalog(file.path()).unwrap();
        assert_eq!(catalog.len(), 1);
    }

    #[test]
    fn duplicate_name_last_write_wins() {
        let file = catalog_file(
            "Compute,hour\n0,50\n0.62,0.58\nCompute,Gb\n0,10\n1.00,0.90\n",
        );
        let catalog = load_catalog(file.path()).unwrap();
        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.get("Compute").unwrap().unit(), "Gb");
    }

    #[test]
    fn missing_file_is_catalog_not_found() {
        let err = load_catalog(Path::new("/definitely/not/here.csv")).unwrap_err();
        assert!(matches!(err, MetraError::CatalogNotFound { .. }));
    }

    #[test]
    fn all_malformed_is_empty_catalog() {
        let file = catalog_file("junk\nmore junk\neven more\n");
        let err = load_catalog(file.path()).unwrap_err();
        assert!(matches!(err, MetraError::EmptyCatalog { .. }));
    }

    #[test]
    fn empty_file_is_empty_catalog() {
        let file = catalog_file("");
        let err = load_catalog(file.path()).unwrap_err();
        assert!(matches!(err, MetraError::EmptyCatalog { .. }));
    }
}
