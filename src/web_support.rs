// Browser implementation of the Host capabilities, on top of web_sys.
// A WebHost wraps one custom element (the component root). Children created
// through it are returned as ElementHandles, which record the attributes set on
// them, keep their event-listener closures alive, and detach themselves from
// the DOM when dropped.

use crate::{
    config::Attributes,
    host::{FieldEvent, Host, HostElement},
};
use anyhow::{Result, anyhow};
use std::{
    cell::RefCell,
    collections::HashMap,
    ops::Deref,
};
use wasm_bindgen::{JsCast, JsValue, closure::Closure};

fn js_err(context: &str, err: JsValue) -> anyhow::Error {
    anyhow!("{context}: {err:?}")
}

// Wrapper for a Node or Element that removes it from its parent when dropped
struct AutoRemove<T: AsRef<web_sys::Node>>(T);

impl<T: AsRef<web_sys::Node>> From<T> for AutoRemove<T> {
    fn from(t: T) -> Self {
        Self(t)
    }
}

impl<T: AsRef<web_sys::Node>> Deref for AutoRemove<T> {
    type Target = T;

    fn deref(&self) -> &T {
        &self.0
    }
}

impl<T: AsRef<web_sys::Node>> Drop for AutoRemove<T> {
    fn drop(&mut self) {
        if let Some(parent) = self.0.as_ref().parent_node() {
            parent.remove_child(self.0.as_ref()).expect("remove_child");
        }
    }
}

// Wrapper for an element created under a WebHost, allowing modification of its
// attributes and registration of event listeners.
pub struct ElementHandle {
    elem: AutoRemove<web_sys::HtmlElement>,
    attributes: HashMap<String, String>,
    listeners: RefCell<Vec<(FieldEvent, Closure<dyn Fn()>)>>,
}

impl ElementHandle {
    fn new(elem: web_sys::HtmlElement) -> Self {
        Self {
            elem: elem.into(),
            attributes: HashMap::default(),
            listeners: RefCell::default(),
        }
    }
}

impl HostElement for ElementHandle {
    fn set_attribute(&mut self, name: &str, value: &str) -> Result<()> {
        self.elem
            .set_attribute(name, value)
            .map_err(|e| js_err("set_attribute", e))?;
        self.attributes.insert(name.to_string(), value.to_string());
        Ok(())
    }

    fn value(&self) -> Option<String> {
        if let Some(input) = self.elem.dyn_ref::<web_sys::HtmlInputElement>() {
            Some(input.value())
        } else {
            self.elem
                .dyn_ref::<web_sys::HtmlTextAreaElement>()
                .map(web_sys::HtmlTextAreaElement::value)
        }
    }

    fn add_event_listener(&self, event: FieldEvent, handler: Box<dyn Fn()>) -> Result<()> {
        let closure = Closure::wrap(handler);
        self.elem
            .add_event_listener_with_callback(event.as_str(), closure.as_ref().unchecked_ref())
            .map_err(|e| js_err("add_event_listener", e))?;
        self.listeners.borrow_mut().push((event, closure));
        Ok(())
    }

    fn audit(&self) {
        for (key, value) in &self.attributes {
            if let Some(dom_value) = self.elem.get_attribute(key) {
                assert_eq!(dom_value, *value);
            } else {
                panic!("missing {key} (expected value {value})");
            }
        }

        for dom_key in self.elem.get_attribute_names().iter() {
            let dom_key = dom_key.as_string().expect("attribute name");
            assert!(
                self.attributes.contains_key(&dom_key),
                "unexpected attribute {dom_key}"
            );
        }

        let listeners = self.listeners.borrow();
        for event in FieldEvent::ALL {
            let count = listeners.iter().filter(|(e, _)| *e == event).count();
            assert!(count <= 1, "{} listener attached {count} times", event.as_str());
        }
    }
}

// The component root: a custom element and the document that owns it.
pub struct WebHost {
    root: web_sys::HtmlElement,
    document: web_sys::Document,
}

impl WebHost {
    pub fn new(root: web_sys::HtmlElement) -> Result<Self> {
        let document = root
            .owner_document()
            .ok_or_else(|| anyhow!("element has no owner document"))?;
        Ok(Self { root, document })
    }

    /// Snapshot of the root's attributes.
    pub fn attributes(&self) -> Attributes {
        self.root
            .get_attribute_names()
            .iter()
            .filter_map(|key| key.as_string())
            .filter_map(|key| {
                let value = self.root.get_attribute(&key)?;
                Some((key, value))
            })
            .collect()
    }

    fn class_list(&self) -> web_sys::DomTokenList {
        self.root.class_list()
    }
}

impl Host for WebHost {
    type Element = ElementHandle;

    fn create(&self, tag: &str, props: &[(&str, &str)]) -> Result<ElementHandle> {
        let elem = self
            .document
            .create_element(tag)
            .map_err(|e| js_err("create_element", e))?
            .dyn_into::<web_sys::HtmlElement>()
            .map_err(|_| anyhow!("expecting {tag} to be an HTML element"))?;
        let mut handle = ElementHandle::new(elem);
        for &(key, value) in props {
            if key == "content" {
                handle.elem.set_text_content(Some(value));
            } else {
                handle.set_attribute(key, value)?;
            }
        }
        self.root
            .append_child(&handle.elem)
            .map_err(|e| js_err("append_child", e))?;
        Ok(handle)
    }

    fn get_attribute(&self, key: &str) -> Option<String> {
        self.root.get_attribute(key)
    }

    fn set_content(&self, text: &str) {
        self.root.set_text_content(Some(text));
    }

    fn add_class(&self, class: &str) {
        self.class_list().add_1(class).expect("classList.add");
    }

    fn remove_class(&self, class: &str) {
        self.class_list().remove_1(class).expect("classList.remove");
    }

    fn has_class(&self, class: &str) -> bool {
        self.class_list().contains(class)
    }
}
