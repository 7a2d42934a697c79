/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

use thiserror::Error;

/// Errors produced while loading a role vocabulary.
#[derive(Debug, Error)]
pub enum VocabularyError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("XML error: {0}")]
    Xml(#[from] roxmltree::Error),

    #[error("vocabulary item missing {0} attribute")]
    MissingAttribute(&'static str),
}
