// Lookup table from a field's `type` tag to how it renders and how its value
// is checked. The table is closed: any tag not listed renders as a plain
// `<input>` carrying the tag verbatim, with no format check.

use crate::validate;

/// A format check on a non-blank value.
pub type FormatCheck = fn(&str) -> bool;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Render {
    /// A submit button, with no label and no validation
    Submit,
    /// A label plus a multi-line `<textarea>`
    TextArea,
    /// A label plus an `<input>` whose `type` is the tag itself
    Input,
}

#[derive(Debug, Clone, Copy)]
pub struct FieldStrategy {
    pub render: Render,
    pub check: Option<FormatCheck>,
}

impl FieldStrategy {
    const fn new(render: Render, check: Option<FormatCheck>) -> Self {
        Self { render, check }
    }

    /// Whether a value passes this strategy's format check (vacuously true without one).
    pub fn accepts(&self, value: &str) -> bool {
        self.check.is_none_or(|check| check(value))
    }
}

pub const PASSTHROUGH: FieldStrategy = FieldStrategy::new(Render::Input, None);

const STRATEGIES: &[(&str, FieldStrategy)] = &[
    ("text", PASSTHROUGH),
    ("submit", FieldStrategy::new(Render::Submit, None)),
    ("textarea", FieldStrategy::new(Render::TextArea, None)),
    ("email", FieldStrategy::new(Render::Input, Some(validate::is_email as FormatCheck))),
    ("url", FieldStrategy::new(Render::Input, Some(validate::is_url as FormatCheck))),
    ("number", FieldStrategy::new(Render::Input, Some(validate::is_number as FormatCheck))),
    ("tel", FieldStrategy::new(Render::Input, Some(validate::is_tel as FormatCheck))),
];

/// Find the strategy for a type tag (case-sensitive)
///
/// ### Returns
/// The listed strategy, or `None` if the tag is not in the table
pub fn lookup(type_tag: &str) -> Option<FieldStrategy> {
    STRATEGIES
        .iter()
        .find(|(tag, _)| *tag == type_tag)
        .map(|(_, strategy)| *strategy)
}

/// Like [`lookup`], falling back to [`PASSTHROUGH`] for unlisted tags.
pub fn strategy_for(type_tag: &str) -> FieldStrategy {
    lookup(type_tag).unwrap_or(PASSTHROUGH)
}

pub fn known_types() -> impl Iterator<Item = &'static str> {
    STRATEGIES.iter().map(|(tag, _)| *tag)
}
