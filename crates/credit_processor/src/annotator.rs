/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

//! The author-list markup annotator.
//!
//! Takes a rendered HTML page containing an author list, and appends a role
//! sublist inside each top-level author entry. The scan is a single forward
//! pass over the text after the list marker, driven by three token classes
//! (`</li>`, opening `<ul>`/`<ol>`, closing `</ul>`/`</ol>`) and a depth
//! counter. There is no DOM: the host template layer hands us a string and
//! expects a string back, and malformed markup must degrade gracefully
//! rather than fail the page render.

use crate::error::AnnotatorError;
use credit_core::{Author, RoleCatalog};
use regex::Regex;

/// Options controlling where the annotator injects role sublists and which
/// CSS classes the injected markup carries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnnotateOptions {
    /// Substring that opens the author list container. Exact match.
    pub list_marker: String,
    /// Class of the injected `<ul>` wrapper.
    pub group_class: String,
    /// Class of each injected role `<li>`.
    pub role_class: String,
}

impl Default for AnnotateOptions {
    fn default() -> Self {
        Self {
            list_marker: r#"<ul class="authors">"#.to_string(),
            group_class: "userGroup".to_string(),
            role_class: "creditRole".to_string(),
        }
    }
}

/// Outcome of one annotation pass.
///
/// The annotator itself never fails; callers that care about structural
/// problems inspect the report (or use [`Annotator::annotate_strict`]).
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct AnnotationReport {
    /// Top-level author entries that received a role sublist.
    pub items_annotated: usize,
    /// Top-level entries matched beyond the supplied author count. These
    /// pass through untouched.
    pub extra_items: usize,
    /// Role references with no catalog term; their entries are skipped.
    pub missing_terms: usize,
}

impl AnnotationReport {
    /// True when the page had more top-level author entries than author
    /// records were supplied.
    pub fn structural_mismatch(&self) -> bool {
        self.extra_items > 0
    }
}

/// Injects CRediT role sublists into rendered author-list markup.
#[derive(Debug)]
pub struct Annotator {
    catalog: RoleCatalog,
    options: AnnotateOptions,
    token_regex: Regex,
}

impl Annotator {
    pub fn new(catalog: RoleCatalog, options: AnnotateOptions) -> Self {
        Self {
            catalog,
            options,
            // The three token classes, in capture-group order: closing list
            // item, opening list, closing list. Case-insensitive.
            token_regex: Regex::new(r"(?i)(</li>)|(<[uo]l[^>]*>)|(</[uo]l>)").unwrap(),
        }
    }

    pub fn catalog(&self) -> &RoleCatalog {
        &self.catalog
    }

    /// Annotate `document`, appending a role sublist inside each top-level
    /// author entry, one author per entry in sequence order.
    ///
    /// If the list marker is absent the document is returned unchanged.
    /// Entries beyond the supplied authors are left untouched. Never fails.
    ///
    /// Note this is not idempotent: a second pass over its own output will
    /// insert a second sublist into each entry.
    pub fn annotate(&self, document: &str, authors: &[Author]) -> String {
        self.annotate_report(document, authors).0
    }

    /// Like [`annotate`](Self::annotate), returning an [`AnnotationReport`]
    /// alongside the output.
    pub fn annotate_report(&self, document: &str, authors: &[Author]) -> (String, AnnotationReport) {
        let mut report = AnnotationReport::default();
        let Some(start) = document.find(&self.options.list_marker) else {
            return (document.to_string(), report);
        };
        let (prefix, tail) = document.split_at(start + self.options.list_marker.len());

        let mut out = String::with_capacity(document.len());
        out.push_str(prefix);

        // Depth of potentially nested ul/ol elements. 1 means "inside the
        // top-level author list"; only there does a closing list item end an
        // author entry. Malformed markup may drive this negative.
        let mut depth: i32 = 1;
        let mut cursor = 0;
        let mut copied = 0;
        for caps in self.token_regex.captures_iter(tail) {
            let m = caps.get(0).unwrap();
            if caps.get(1).is_some() {
                if depth == 1 {
                    out.push_str(&tail[copied..m.start()]);
                    copied = m.start();
                    match authors.get(cursor) {
                        Some(author) => {
                            self.push_role_sublist(&mut out, author, &mut report);
                            report.items_annotated += 1;
                        }
                        None => report.extra_items += 1,
                    }
                    cursor += 1;
                }
            } else if caps.get(2).is_some() {
                // Do not re-enter once the scan has left the top-level list.
                if depth >= 1 {
                    depth += 1;
                }
            } else {
                depth -= 1;
            }
        }
        out.push_str(&tail[copied..]);
        (out, report)
    }

    /// Annotate, but treat a structural mismatch between the markup and the
    /// author sequence as an error.
    pub fn annotate_strict(&self, document: &str, authors: &[Author]) -> Result<String, AnnotatorError> {
        let (out, report) = self.annotate_report(document, authors);
        if report.structural_mismatch() {
            return Err(AnnotatorError::StructuralMismatch {
                matched: report.items_annotated + report.extra_items,
                supplied: authors.len(),
            });
        }
        Ok(out)
    }

    /// Append one author's role sublist. An author with no roles still gets
    /// the empty wrapper; a role with no catalog term is skipped.
    fn push_role_sublist(&self, out: &mut String, author: &Author, report: &mut AnnotationReport) {
        out.push_str(&format!(r#"<ul class="{}">"#, self.options.group_class));
        for uri in &author.credit_roles {
            match self.catalog.term(uri) {
                Some(term) => out.push_str(&format!(
                    r#"<li class="{}">{}</li>"#,
                    self.options.role_class,
                    html_escape::encode_safe(term)
                )),
                None => report.missing_terms += 1,
            }
        }
        out.push_str("</ul>");
    }
}
