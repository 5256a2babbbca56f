use std::collections::BTreeMap;

/// Attribute name -> raw value, as supplied by the host element.
pub type Attributes = BTreeMap<String, String>;

pub const DEFAULT_TYPE: &str = "text";

/// The read-only configuration of one field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldConfig {
    pub name: String,
    pub label: Option<String>,
    pub field_type: String,
    pub required: bool,
}

impl FieldConfig {
    /// Build a config from the host's attribute bag
    ///
    /// ### Parameters
    /// `attributes`: the structured attribute bag
    ///
    /// `reflected`: raw attribute lookup on the host element, consulted for `required`
    ///
    /// ### Returns
    /// `None` when `name` is missing or empty
    pub fn from_attributes(
        attributes: &Attributes,
        reflected: impl Fn(&str) -> Option<String>,
    ) -> Option<Self> {
        let name = attributes.get("name").filter(|name| !name.is_empty())?;
        let label = attributes
            .get("label")
            .filter(|label| !label.is_empty())
            .cloned();
        let field_type = attributes
            .get("type")
            .cloned()
            .unwrap_or_else(|| DEFAULT_TYPE.to_string());
        let required = attributes.get("required").is_some_and(|flag| is_truthy(flag))
            || reflected("required").is_some();

        Some(Self {
            name: name.clone(),
            label,
            field_type,
            required,
        })
    }

    /// Display text for the label: the label if given, otherwise the name.
    pub fn label_text(&self) -> &str {
        self.label.as_deref().unwrap_or(&self.name)
    }
}

fn is_truthy(flag: &str) -> bool {
    !flag.is_empty() && flag != "false"
}

#[cfg(test)]
mod tests {
    use super::*;

    fn attrs(pairs: &[(&str, &str)]) -> Attributes {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    fn no_reflection(_: &str) -> Option<String> {
        None
    }

    #[test]
    fn name_is_required() {
        assert_eq!(FieldConfig::from_attributes(&attrs(&[]), no_reflection), None);
        assert_eq!(
            FieldConfig::from_attributes(&attrs(&[("name", ""), ("type", "email")]), no_reflection),
            None
        );
    }

    #[test]
    fn label_defaults_to_name() {
        let config = FieldConfig::from_attributes(&attrs(&[("name", "email")]), no_reflection)
            .expect("config");
        assert_eq!(config.label, None);
        assert_eq!(config.label_text(), "email");

        let config =
            FieldConfig::from_attributes(&attrs(&[("name", "email"), ("label", "")]), no_reflection)
                .expect("config");
        assert_eq!(config.label_text(), "email");

        let config = FieldConfig::from_attributes(
            &attrs(&[("name", "email"), ("label", "Email address")]),
            no_reflection,
        )
        .expect("config");
        assert_eq!(config.label_text(), "Email address");
    }

    #[test]
    fn type_defaults_to_text_and_passes_through() {
        let config =
            FieldConfig::from_attributes(&attrs(&[("name", "x")]), no_reflection).expect("config");
        assert_eq!(config.field_type, "text");

        let config =
            FieldConfig::from_attributes(&attrs(&[("name", "x"), ("type", "color")]), no_reflection)
                .expect("config");
        assert_eq!(config.field_type, "color");
    }

    #[test]
    fn required_from_flag_or_reflection() {
        let flag = |value| {
            FieldConfig::from_attributes(&attrs(&[("name", "x"), ("required", value)]), no_reflection)
                .expect("config")
                .required
        };
        assert!(flag("true"));
        assert!(flag("required"));
        assert!(!flag("false"));
        assert!(!flag(""));

        let config = FieldConfig::from_attributes(&attrs(&[("name", "x")]), no_reflection)
            .expect("config");
        assert!(!config.required);

        // reflected boolean attribute, any value
        let config = FieldConfig::from_attributes(&attrs(&[("name", "x")]), |key| {
            (key == "required").then(String::new)
        })
        .expect("config");
        assert!(config.required);
    }
}
