// The easy-input field component. Renders a label plus a form control into its
// host's root (or a placeholder when unnamed), and re-validates the control's
// value on every `input` and `blur` event, reflecting the outcome in the root's
// `invalid-input` class.

use crate::{
    config::{Attributes, FieldConfig},
    field::{self, FieldStrategy, Render},
    host::{FieldEvent, Host, HostElement},
    validate,
};
use anyhow::Result;
use leptos::logging::{log, warn};
use std::rc::{Rc, Weak};

pub const NAME_REQUIRED: &str = "Name Required";
pub const INVALID_CLASS: &str = "invalid-input";
pub const REQUIRED_CLASS: &str = "required";

// The control a field owns. Only a `Field` is validated.
enum Control<E> {
    Submit(E),
    Field(E),
}

impl<E: HostElement> Control<E> {
    fn element(&self) -> &E {
        match self {
            Control::Submit(elem) | Control::Field(elem) => elem,
        }
    }
}

struct Inner<H: Host> {
    host: H,
    config: Option<FieldConfig>,
    strategy: FieldStrategy,
    label: Option<H::Element>,
    control: Option<Control<H::Element>>,
}

/// A handle to one rendered field. Clones share the same component.
pub struct EasyInput<H: Host>(Rc<Inner<H>>);

impl<H: Host> Clone for EasyInput<H> {
    fn clone(&self) -> Self {
        Self(self.0.clone())
    }
}

impl<H: Host + 'static> EasyInput<H> {
    /// Render a field into `host` and wire up its validation
    ///
    /// ### Parameters
    /// `host`: the component root's capabilities
    ///
    /// `attributes`: the attribute bag the field is configured from
    ///
    /// ### Returns
    /// The live component; host failures while building the subtree are errors
    pub fn initialize(host: H, attributes: &Attributes) -> Result<Self> {
        log!("easy-input attributes: {attributes:?}");

        let Some(config) = FieldConfig::from_attributes(attributes, |key| host.get_attribute(key))
        else {
            host.set_content(NAME_REQUIRED);
            return Ok(Self(Rc::new(Inner {
                host,
                config: None,
                strategy: field::PASSTHROUGH,
                label: None,
                control: None,
            })));
        };

        let strategy = field::lookup(&config.field_type).unwrap_or_else(|| {
            warn!(
                "easy-input {}: unrecognized type {:?}, passing it through",
                config.name, config.field_type
            );
            field::PASSTHROUGH
        });

        let (label, mut control) = Self::render(&host, &config, strategy.render)?;

        if config.required {
            if let Control::Field(elem) = &mut control {
                elem.set_attribute("required", "")?;
            }
            host.add_class(REQUIRED_CLASS);
        }

        let inner = Rc::new(Inner {
            host,
            config: Some(config),
            strategy,
            label,
            control: Some(control),
        });

        if let Some(Control::Field(elem)) = &inner.control {
            for event in FieldEvent::ALL {
                let weak = Rc::downgrade(&inner);
                elem.add_event_listener(event, Box::new(move || Self::on_event(&weak)))?;
            }
        }

        Ok(Self(inner))
    }

    fn on_event(weak: &Weak<Inner<H>>) {
        if let Some(inner) = weak.upgrade() {
            EasyInput(inner).validate_input();
        }
    }

    fn render(
        host: &H,
        config: &FieldConfig,
        render: Render,
    ) -> Result<(Option<H::Element>, Control<H::Element>)> {
        let name = config.name.as_str();
        let label = || {
            host.create(
                "label",
                &[
                    ("class", "easy-label"),
                    ("for", name),
                    ("content", config.label_text()),
                ],
            )
        };

        Ok(match render {
            Render::Submit => (
                None,
                Control::Submit(host.create(
                    "input",
                    &[
                        ("class", "easy-input submit"),
                        ("type", "submit"),
                        ("name", name),
                    ],
                )?),
            ),
            Render::TextArea => (
                Some(label()?),
                Control::Field(host.create(
                    "textarea",
                    &[("class", "easy-input"), ("name", name), ("id", name)],
                )?),
            ),
            Render::Input => (
                Some(label()?),
                Control::Field(host.create(
                    "input",
                    &[
                        ("class", "easy-input"),
                        ("name", name),
                        ("id", name),
                        ("type", config.field_type.as_str()),
                    ],
                )?),
            ),
        })
    }
}

impl<H: Host> EasyInput<H> {
    /// Check the control's current value and update the `invalid-input` class
    ///
    /// Blank values are always valid; otherwise the field type's format check
    /// decides (types without one are always valid).
    ///
    /// ### Returns
    /// Whether the value is valid
    pub fn validate_input(&self) -> bool {
        let inner = &self.0;
        let Some(Control::Field(elem)) = &inner.control else {
            return true;
        };

        let value = elem.value().unwrap_or_default();
        let is_valid = !validate::has_value(&value) || inner.strategy.accepts(&value);

        if is_valid {
            inner.host.remove_class(INVALID_CLASS);
        } else {
            inner.host.add_class(INVALID_CLASS);
        }
        is_valid
    }

    pub fn config(&self) -> Option<&FieldConfig> {
        self.0.config.as_ref()
    }

    /// True when the field was unnamed and only shows the placeholder.
    pub fn is_placeholder(&self) -> bool {
        self.0.config.is_none()
    }

    // Verify that every owned element still matches what was set on it, and
    // that a required field's root carries the `required` class. The root's
    // class list is shared with the page, so extra classes are not checked.
    pub fn audit(&self) {
        let inner = &self.0;
        if let Some(label) = &inner.label {
            label.audit();
        }
        if let Some(control) = &inner.control {
            control.element().audit();
        }
        if inner.config.as_ref().is_some_and(|config| config.required) {
            assert!(
                inner.host.has_class(REQUIRED_CLASS),
                "required field without required class"
            );
        }
    }
}
