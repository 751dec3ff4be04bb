//! Placeholder-substitution engine shared by every artifact generator.
//!
//! Templates are plain text with `{{NAME}}` tokens. Rendering is a single
//! left-to-right scan: tokens whose name is present in the mapping are
//! replaced by the literal value, tokens with unknown names are left
//! verbatim, and values are never re-scanned for further tokens. Key order
//! cannot affect the output.

use std::collections::BTreeMap;
use std::fmt::Display;

/// Flat placeholder-name to value mapping for one artifact.
///
/// Built fresh per generator and never mutated after construction. Booleans
/// render as the literal text `true`/`false` via `Display`.
#[derive(Debug, Clone, Default)]
pub struct Replacements {
    values: BTreeMap<String, String>,
}

impl Replacements {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a placeholder value. Numbers and booleans are rendered
    /// through their `Display` form.
    pub fn set(&mut self, name: &str, value: impl Display) {
        self.values.insert(name.to_string(), value.to_string());
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.values.get(name).map(|s| s.as_str())
    }
}

/// Substitute `{{NAME}}` tokens in `template` from `replacements`.
pub fn render(template: &str, replacements: &Replacements) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(start) = rest.find("{{") {
        out.push_str(&rest[..start]);
        let after = &rest[start + 2..];

        match after.find("}}") {
            // A well-formed token: the candidate name must not itself
            // contain an opening brace, otherwise the `{{` was literal text.
            Some(end) if !after[..end].contains('{') => {
                let name = &after[..end];
                match replacements.get(name) {
                    Some(value) => out.push_str(value),
                    None => {
                        // Unknown placeholders stay verbatim; partial
                        // templates are allowed.
                        out.push_str("{{");
                        out.push_str(name);
                        out.push_str("}}");
                    }
                }
                rest = &after[end + 2..];
            }
            _ => {
                out.push_str("{{");
                rest = after;
            }
        }
    }

    out.push_str(rest);
    out
}

/// Escape text for embedding inside a double-quoted shell context.
///
/// Every `$` becomes `\$` and every backtick becomes `` \` ``, applied once.
/// Without this, a `$(...)` or backtick in embedded nginx config would be
/// executed as a shell command when the deploy script runs.
pub fn escape_shell_embed(text: &str) -> String {
    text.replace('$', "\\$").replace('`', "\\`")
}
