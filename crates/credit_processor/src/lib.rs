/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

//! CRediT annotation processor
//!
//! This crate attaches NISO CRediT contributor-role information to rendered
//! article markup. The host application renders its author list as plain
//! HTML; the [`Annotator`] re-scans that output and appends a role sublist
//! inside each top-level author entry, resolving role URIs to display terms
//! through a [`RoleCatalog`](credit_core::RoleCatalog).
//!
//! # Example
//!
//! ```rust
//! use credit_core::{Author, RoleCatalog};
//! use credit_processor::{AnnotateOptions, Annotator};
//!
//! let mut catalog = RoleCatalog::new();
//! catalog.insert(
//!     "https://credit.niso.org/contributor-roles/supervision/",
//!     "Supervision",
//! );
//!
//! let authors = vec![Author::with_roles([
//!     "https://credit.niso.org/contributor-roles/supervision/",
//! ])];
//!
//! let annotator = Annotator::new(catalog, AnnotateOptions::default());
//! let page = r#"<ul class="authors"><li>Maia Ito</li></ul>"#;
//! assert_eq!(
//!     annotator.annotate(page, &authors),
//!     r#"<ul class="authors"><li>Maia Ito<ul class="userGroup"><li class="creditRole">Supervision</li></ul></li></ul>"#
//! );
//! ```

pub mod annotator;
pub mod error;
pub mod form;
pub mod io;

pub use annotator::{AnnotateOptions, AnnotationReport, Annotator};
pub use error::AnnotatorError;
pub use form::splice_after_field;

// Re-export the vocabulary types from credit_core for convenience
pub use credit_core::{Author, RoleCatalog, RoleUri};
