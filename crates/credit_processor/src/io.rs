/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

use std::fs;
use std::path::Path;

use credit_core::Author;

use crate::AnnotatorError;

/// Load an author sequence from a file.
/// Supports YAML/JSON; either a list of authors or a single author record.
pub fn load_authors(path: &Path) -> Result<Vec<Author>, AnnotatorError> {
    let bytes = fs::read(path)?;
    let ext = path.extension().and_then(|e| e.to_str()).unwrap_or("yaml");

    match ext {
        "json" => {
            // Check for syntax errors first
            let _: serde_json::Value = serde_json::from_slice(&bytes)
                .map_err(|e| AnnotatorError::ParseError("JSON".to_string(), e.to_string()))?;

            if let Ok(authors) = serde_json::from_slice::<Vec<Author>>(&bytes) {
                return Ok(authors);
            }
            match serde_json::from_slice::<Author>(&bytes) {
                Ok(author) => Ok(vec![author]),
                Err(e) => Err(AnnotatorError::ParseError(
                    "JSON".to_string(),
                    e.to_string(),
                )),
            }
        }
        _ => {
            let content = String::from_utf8_lossy(&bytes);
            // Check for syntax errors first
            let _: serde_yaml::Value = serde_yaml::from_str(&content)
                .map_err(|e| AnnotatorError::ParseError("YAML".to_string(), e.to_string()))?;

            if let Ok(authors) = serde_yaml::from_str::<Vec<Author>>(&content) {
                return Ok(authors);
            }
            match serde_yaml::from_str::<Author>(&content) {
                Ok(author) => Ok(vec![author]),
                Err(e) => Err(AnnotatorError::ParseError(
                    "YAML".to_string(),
                    e.to_string(),
                )),
            }
        }
    }
}
