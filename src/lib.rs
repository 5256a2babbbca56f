pub mod config;
pub mod demo;
pub mod easy_input;
pub mod field;
pub mod host;
pub mod registry;
pub mod validate;
pub mod web_support;

pub use config::{Attributes, FieldConfig};
pub use easy_input::EasyInput;
pub use registry::{ELEMENT_TAG, register};
