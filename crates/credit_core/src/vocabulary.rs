/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

//! The CRediT role vocabulary.
//!
//! A [`RoleCatalog`] maps role URIs to localized display terms. Catalogs are
//! loaded from flat XML vocabulary files of the form
//!
//! ```xml
//! <credit-roles>
//!   <item uri="https://credit.niso.org/contributor-roles/supervision/"
//!         term="Supervision"/>
//! </credit-roles>
//! ```
//!
//! following the locale-suffixed filename convention
//! `credit-roles-<locale>.xml`, with fallback to the unsuffixed default file.

use crate::author::RoleUri;
use crate::error::VocabularyError;
use indexmap::IndexMap;
use roxmltree::Document;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Filename of the default (unlocalized) vocabulary file.
pub const DEFAULT_VOCABULARY: &str = "credit-roles.xml";

/// An ordered, read-only mapping from role URI to display term.
#[derive(Debug, Default, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(transparent)]
pub struct RoleCatalog {
    roles: IndexMap<RoleUri, String>,
}

impl RoleCatalog {
    /// Create an empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace a role entry.
    pub fn insert(&mut self, uri: impl Into<String>, term: impl Into<String>) {
        self.roles.insert(uri.into(), term.into());
    }

    /// Look up the display term for a role URI. Exact key match only.
    pub fn term(&self, uri: &str) -> Option<&str> {
        self.roles.get(uri).map(|s| s.as_str())
    }

    /// Iterate entries in vocabulary document order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.roles.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.roles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.roles.is_empty()
    }

    /// Parse a catalog from vocabulary XML.
    ///
    /// Reads every `<item>` under every `<credit-roles>` element; other
    /// elements are ignored. An item missing its `uri` or `term` attribute
    /// is an error.
    pub fn from_xml(xml: &str) -> Result<Self, VocabularyError> {
        let doc = Document::parse(xml)?;
        let mut catalog = Self::new();
        for roles in doc.descendants().filter(|n| n.has_tag_name("credit-roles")) {
            for item in roles.descendants().filter(|n| n.has_tag_name("item")) {
                let uri = item
                    .attribute("uri")
                    .ok_or(VocabularyError::MissingAttribute("uri"))?;
                let term = item
                    .attribute("term")
                    .ok_or(VocabularyError::MissingAttribute("term"))?;
                catalog.insert(uri, term);
            }
        }
        Ok(catalog)
    }

    /// Load a catalog from a vocabulary file.
    pub fn from_path(path: &Path) -> Result<Self, VocabularyError> {
        let xml = fs::read_to_string(path)?;
        Self::from_xml(&xml)
    }

    /// Load the vocabulary for `locale` from `dir`.
    ///
    /// Tries `credit-roles-<locale>.xml` first, then falls back to the
    /// default file.
    pub fn load_dir(dir: &Path, locale: &str) -> Result<Self, VocabularyError> {
        let localized = dir.join(format!("credit-roles-{}.xml", locale));
        if localized.exists() {
            Self::from_path(&localized)
        } else {
            Self::from_path(&dir.join(DEFAULT_VOCABULARY))
        }
    }

    /// The built-in English catalog: the 14 NISO CRediT contributor roles.
    pub fn en() -> Self {
        let mut catalog = Self::new();
        for (slug, term) in [
            ("conceptualization", "Conceptualization"),
            ("data-curation", "Data curation"),
            ("formal-analysis", "Formal analysis"),
            ("funding-acquisition", "Funding acquisition"),
            ("investigation", "Investigation"),
            ("methodology", "Methodology"),
            ("project-administration", "Project administration"),
            ("resources", "Resources"),
            ("software", "Software"),
            ("supervision", "Supervision"),
            ("validation", "Validation"),
            ("visualization", "Visualization"),
            ("writing-original-draft", "Writing – original draft"),
            ("writing-review-editing", "Writing – review & editing"),
        ] {
            catalog.insert(
                format!("https://credit.niso.org/contributor-roles/{}/", slug),
                term,
            );
        }
        catalog
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"<credit-roles>
        <item uri="https://credit.niso.org/contributor-roles/supervision/" term="Supervision"/>
        <item uri="https://credit.niso.org/contributor-roles/software/" term="Software"/>
    </credit-roles>"#;

    #[test]
    fn test_parse_vocabulary() {
        let catalog = RoleCatalog::from_xml(SAMPLE).unwrap();
        assert_eq!(catalog.len(), 2);
        assert_eq!(
            catalog.term("https://credit.niso.org/contributor-roles/supervision/"),
            Some("Supervision")
        );
        assert_eq!(catalog.term("https://example.org/unknown/"), None);
    }

    #[test]
    fn test_document_order_preserved() {
        let catalog = RoleCatalog::from_xml(SAMPLE).unwrap();
        let terms: Vec<&str> = catalog.iter().map(|(_, t)| t).collect();
        assert_eq!(terms, vec!["Supervision", "Software"]);
    }

    #[test]
    fn test_items_outside_credit_roles_ignored() {
        let xml = r#"<vocab>
            <other><item uri="x" term="X"/></other>
            <credit-roles><item uri="y" term="Y"/></credit-roles>
        </vocab>"#;
        let catalog = RoleCatalog::from_xml(xml).unwrap();
        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.term("y"), Some("Y"));
    }

    #[test]
    fn test_missing_attribute() {
        let xml = r#"<credit-roles><item uri="x"/></credit-roles>"#;
        let err = RoleCatalog::from_xml(xml).unwrap_err();
        assert!(matches!(err, VocabularyError::MissingAttribute("term")));
    }

    #[test]
    fn test_builtin_english_catalog() {
        let catalog = RoleCatalog::en();
        assert_eq!(catalog.len(), 14);
        assert_eq!(
            catalog.term("https://credit.niso.org/contributor-roles/writing-original-draft/"),
            Some("Writing – original draft")
        );
    }

    #[test]
    fn test_locale_fallback() {
        let dir = std::env::temp_dir().join("credit_vocab_fallback_test");
        fs::create_dir_all(&dir).unwrap();
        fs::write(
            dir.join(DEFAULT_VOCABULARY),
            r#"<credit-roles><item uri="u" term="Default"/></credit-roles>"#,
        )
        .unwrap();
        fs::write(
            dir.join("credit-roles-de.xml"),
            r#"<credit-roles><item uri="u" term="Betreuung"/></credit-roles>"#,
        )
        .unwrap();

        let de = RoleCatalog::load_dir(&dir, "de").unwrap();
        assert_eq!(de.term("u"), Some("Betreuung"));

        // No French file: falls back to the default vocabulary.
        let fr = RoleCatalog::load_dir(&dir, "fr").unwrap();
        assert_eq!(fr.term("u"), Some("Default"));

        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_serde_transparent() {
        let catalog = RoleCatalog::from_xml(SAMPLE).unwrap();
        let json = serde_json::to_string(&catalog).unwrap();
        assert!(json.starts_with('{'));
        let back: RoleCatalog = serde_json::from_str(&json).unwrap();
        assert_eq!(back, catalog);
    }
}
