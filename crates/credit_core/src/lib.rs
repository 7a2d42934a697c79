/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

//! Core data model for CRediT contributor-role annotation.
//!
//! This crate holds the vocabulary side of the NISO CRediT taxonomy: the
//! [`RoleCatalog`] mapping role URIs to display terms, the XML loader for
//! external vocabulary files, and the [`Author`] record carrying a
//! publication's per-contributor role references. Rendering and markup
//! annotation live in `credit_processor`.

pub mod author;
pub mod error;
pub mod vocabulary;

pub use author::{Author, RoleUri};
pub use error::VocabularyError;
pub use vocabulary::RoleCatalog;
