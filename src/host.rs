// The capabilities a field component needs from whatever environment hosts it.
// The component never sees the DOM directly: it asks its Host to create children
// (attached to the component root), to read reflected attributes, and to change
// the root's content and class list. Created children are only reachable through
// the HostElement handles returned by `create`.

use anyhow::Result;

#[cfg(test)]
pub mod fake;

/// The two DOM events a field listens to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldEvent {
    Input,
    Blur,
}

impl FieldEvent {
    pub const ALL: [FieldEvent; 2] = [FieldEvent::Input, FieldEvent::Blur];

    pub fn as_str(&self) -> &'static str {
        match self {
            FieldEvent::Input => "input",
            FieldEvent::Blur => "blur",
        }
    }
}

/// A child element created by a [`Host`].
pub trait HostElement {
    fn set_attribute(&mut self, name: &str, value: &str) -> Result<()>;

    /// Current value of a form control (`None` for elements without one).
    fn value(&self) -> Option<String>;

    fn add_event_listener(&self, event: FieldEvent, handler: Box<dyn Fn()>) -> Result<()>;

    /// Check that the live element matches what this handle has recorded.
    fn audit(&self) {}
}

pub trait Host {
    type Element: HostElement;

    /// Create a child of the component root. The `content` prop sets the text
    /// content; every other prop becomes an attribute.
    fn create(&self, tag: &str, props: &[(&str, &str)]) -> Result<Self::Element>;

    /// Read a raw attribute of the component root.
    fn get_attribute(&self, key: &str) -> Option<String>;

    /// Replace everything under the component root with plain text.
    fn set_content(&self, text: &str);

    fn add_class(&self, class: &str);
    fn remove_class(&self, class: &str);
    fn has_class(&self, class: &str) -> bool;
}
