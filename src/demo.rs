//! A small contact form built from `<easy-input>` fields.
use leptos::prelude::*;

/// One row of the demo form: `(name, label, type, required)`.
pub const CONTACT_FIELDS: &[(&str, &str, &str, bool)] = &[
    ("full_name", "Full name", "text", true),
    ("email", "Email", "email", true),
    ("website", "Website", "url", false),
    ("age", "Age", "number", false),
    ("phone", "Phone", "tel", false),
    ("message", "Message", "textarea", false),
    ("send", "", "submit", false),
];

/// ### Contact form
/// Renders each of [`CONTACT_FIELDS`] as an `<easy-input>`; the registered
/// element takes over rendering and validation once connected.
#[component]
pub fn ContactForm() -> impl IntoView {
    view! {
        <form class="easy-form" novalidate="">
            {CONTACT_FIELDS
                .iter()
                .map(|&(name, label, field_type, required)| {
                    view! {
                        <easy-input
                            name=name
                            label=label
                            type=field_type
                            required=required.then_some("")
                        ></easy-input>
                    }
                })
                .collect::<Vec<_>>()}
        </form>
    }
}
