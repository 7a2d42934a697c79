/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

use credit_core::VocabularyError;
use thiserror::Error;

/// Errors for the annotation layer.
#[derive(Debug, Error)]
pub enum AnnotatorError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("{0} parse error: {1}")]
    ParseError(String, String),

    #[error("vocabulary error: {0}")]
    Vocabulary(#[from] VocabularyError),

    #[error("author list has {matched} entries but only {supplied} author records were supplied")]
    StructuralMismatch { matched: usize, supplied: usize },
}
