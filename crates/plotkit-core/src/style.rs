//! Style surface consumed by rendering collaborators
//!
//! The data model carries no visual logic; it only exposes a mutable
//! attribute bag plus the two legend fields legend builders read.

use std::collections::BTreeMap;

/// Free-form style attributes plus legend participation flags.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Style {
    attrs: BTreeMap<String, String>,
    /// Whether legend builders should include this object
    pub inlegend: bool,
    /// Legend entry style tag (e.g. "F", "L", "P")
    pub legendstyle: String,
}

impl Default for Style {
    fn default() -> Self {
        Self {
            attrs: BTreeMap::new(),
            inlegend: true,
            legendstyle: "P".to_string(),
        }
    }
}

impl Style {
    /// Set one style attribute, returning the previous value if any.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) -> Option<String> {
        self.attrs.insert(key.into(), value.into())
    }

    /// Look up one style attribute.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.attrs.get(key).map(String::as_str)
    }

    /// All attributes in key order.
    pub fn attrs(&self) -> impl Iterator<Item = (&str, &str)> {
        self.attrs.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

/// Read/style contract every plottable data object exposes.
pub trait Plottable {
    /// Object name (identifier for collaborators)
    fn name(&self) -> &str;

    /// Display title
    fn title(&self) -> &str;

    /// Style attribute bag
    fn style(&self) -> &Style;

    /// Mutable style attribute bag
    fn style_mut(&mut self) -> &mut Style;
}
