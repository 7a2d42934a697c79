/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

use serde::{Deserialize, Serialize};

/// A reference to one CRediT role, e.g.
/// `https://credit.niso.org/contributor-roles/supervision/`.
///
/// Opaque to this crate; resolved to a display term via
/// [`RoleCatalog`](crate::RoleCatalog).
pub type RoleUri = String;

/// A publication contributor, in author-sequence order.
///
/// The annotator only reads authors; it never mutates them. The role list
/// preserves the order in which roles were assigned in the editing form.
#[derive(Debug, Default, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct Author {
    /// Display name, as the host application renders it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Role URIs held by this contributor, possibly empty.
    #[serde(default)]
    pub credit_roles: Vec<RoleUri>,
}

impl Author {
    /// Build an author record from a list of role URIs.
    pub fn with_roles<I, S>(roles: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            name: None,
            credit_roles: roles.into_iter().map(Into::into).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_author_deserialization() {
        let json = r#"{
            "name": "Maia Ito",
            "credit-roles": [
                "https://credit.niso.org/contributor-roles/software/",
                "https://credit.niso.org/contributor-roles/supervision/"
            ]
        }"#;

        let author: Author = serde_json::from_str(json).unwrap();
        assert_eq!(author.name.as_deref(), Some("Maia Ito"));
        assert_eq!(author.credit_roles.len(), 2);
        assert_eq!(
            author.credit_roles[0],
            "https://credit.niso.org/contributor-roles/software/"
        );
    }

    #[test]
    fn test_roles_default_to_empty() {
        let author: Author = serde_json::from_str(r#"{"name": "Lee"}"#).unwrap();
        assert!(author.credit_roles.is_empty());
    }
}
