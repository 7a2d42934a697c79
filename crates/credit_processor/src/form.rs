/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

//! Form-markup splicing.
//!
//! The host's contributor-editing form has no extension point of its own, so
//! the role-selection control is injected as a rendered fragment immediately
//! after a known `<input>` element in the form markup.

use regex::Regex;

/// Insert `fragment` immediately after the first `<input>` element whose
/// `name` attribute equals `field_name`. Returns the document unchanged when
/// no such input is present. Later occurrences are left alone.
pub fn splice_after_field(document: &str, field_name: &str, fragment: &str) -> String {
    let pattern = format!(r#"(?i)<input[^>]+name="{}"[^>]*>"#, regex::escape(field_name));
    let field_regex = Regex::new(&pattern).unwrap();
    match field_regex.find(document) {
        Some(m) => {
            let mut out = String::with_capacity(document.len() + fragment.len());
            out.push_str(&document[..m.end()]);
            out.push_str(fragment);
            out.push_str(&document[m.end()..]);
            out
        }
        None => document.to_string(),
    }
}
