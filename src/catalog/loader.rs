/*
loader.rs

Copyright 2025 Hervé Quatremain

This file is part of StrokeX.

StrokeX is free software: you can redistribute it and/or modify it under the
terms of the GNU General Public License as published by the Free Software
Foundation, either version 3 of the License, or (at your option) any later
version.

StrokeX is distributed in the hope that it will be useful, but WITHOUT ANY
WARRANTY; without even the implied warranty of MERCHANTABILITY or FITNESS FOR
A PARTICULAR PURPOSE. See the GNU General Public License for more details.

You should have received a copy of the GNU General Public License along with
StrokeX. If not, see <https://www.gnu.org/licenses/>.

SPDX-License-Identifier: GPL-3.0-or-later
*/

//! Load and export catalogs as JSON documents.
//!
//! The document lists the levels in play order. Node positions are `[x, y]` arrays and edges
//! are `[a, b]` arrays of node identifiers:
//!
//! ```json
//! {
//!   "levels": [
//!     {
//!       "nodes": [[940.0, 441.0], [705.0, 707.0], [1175.0, 707.0]],
//!       "edges": [[0, 1], [1, 2], [2, 0]]
//!     }
//!   ]
//! }
//! ```

use log::debug;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

use super::{CatalogError, LevelCatalog, LevelDef};

/// Top-level structure of the catalog document.
#[derive(Serialize, Deserialize, Debug)]
struct CatalogDocument {
    levels: Vec<LevelDef>,
}

impl LevelCatalog {
    /// Build a catalog from a JSON document.
    ///
    /// # Errors
    ///
    /// The method returns an error when the document cannot be parsed, or when a level breaks
    /// an authoring rule.
    pub fn from_json(document: &str) -> Result<Self, CatalogError> {
        let doc: CatalogDocument = serde_json::from_str(document)?;
        LevelCatalog::new(doc.levels)
    }

    /// Build a catalog from a JSON file.
    ///
    /// # Errors
    ///
    /// The method returns an error when the file cannot be read or parsed, or when a level
    /// breaks an authoring rule.
    pub fn from_file(path: &Path) -> Result<Self, CatalogError> {
        debug!("Loading catalog file: {path:?}");
        let file: File = File::open(path)?;
        let reader: BufReader<File> = BufReader::new(file);
        let doc: CatalogDocument = serde_json::from_reader(reader)?;
        LevelCatalog::new(doc.levels)
    }

    /// Serialize the catalog as a JSON document.
    pub fn to_json(&self) -> Result<String, CatalogError> {
        let doc = CatalogDocument {
            levels: self.levels().to_vec(),
        };
        Ok(serde_json::to_string_pretty(&doc)?)
    }

    /// Write the catalog to a JSON file, so that level designers can start from it.
    pub fn save(&self, path: &Path) -> Result<(), CatalogError> {
        debug!("Writing catalog file: {path:?}");
        let file: File = File::create(path)?;
        let mut writer: BufWriter<File> = BufWriter::new(file);
        let doc = CatalogDocument {
            levels: self.levels().to_vec(),
        };

        serde_json::to_writer_pretty(&mut writer, &doc)?;
        writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_documented_format() {
        let catalog = LevelCatalog::from_json(
            r#"{"levels": [{"nodes": [[940.0, 441.0], [705.0, 707.0], [1175.0, 707.0]],
                            "edges": [[0, 1], [1, 2], [2, 0]]}]}"#,
        )
        .unwrap();
        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.get(1).nodes[1].x, 705.0);
        assert_eq!(catalog.get(1).edges[2], (2, 0));
    }

    #[test]
    fn rejects_duplicate_pairs() {
        let res = LevelCatalog::from_json(
            r#"{"levels": [{"nodes": [[0, 0], [1, 1]], "edges": [[0, 1], [1, 0]]}]}"#,
        );
        assert!(matches!(res, Err(CatalogError::DuplicateEdge { level: 1, .. })));
    }

    #[test]
    fn rejects_malformed_documents() {
        assert!(matches!(
            LevelCatalog::from_json(r#"{"levels": 3}"#),
            Err(CatalogError::Parse(_))
        ));
        assert!(matches!(
            LevelCatalog::from_json(r#"{"levels": []}"#),
            Err(CatalogError::Empty)
        ));
    }

    #[test]
    fn builtin_catalog_survives_export() {
        let builtin = LevelCatalog::builtin();
        let reloaded = LevelCatalog::from_json(&builtin.to_json().unwrap()).unwrap();
        assert_eq!(reloaded.levels(), builtin.levels());
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let res = LevelCatalog::from_file(Path::new("/nonexistent/strokex/levels.json"));
        assert!(matches!(res, Err(CatalogError::Io(_))));
    }
}
