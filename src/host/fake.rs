// In-memory Host for tests: records the root's attributes, classes and content,
// plus every created child, and can dispatch events to a child's listeners.

use super::{FieldEvent, Host, HostElement};
use crate::config::Attributes;
use anyhow::{Result, bail};
use std::{
    cell::RefCell,
    collections::{BTreeMap, BTreeSet},
    rc::Rc,
};

#[derive(Default)]
pub struct FakeNode {
    pub tag: String,
    pub attributes: BTreeMap<String, String>,
    pub content: Option<String>,
    pub value: String,
    listeners: Vec<(FieldEvent, Box<dyn Fn()>)>,
}

impl FakeNode {
    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).map(String::as_str)
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }
}

#[derive(Default)]
struct FakeRoot {
    attributes: Attributes,
    classes: BTreeSet<String>,
    content: Option<String>,
    children: Vec<Rc<RefCell<FakeNode>>>,
}

#[derive(Clone, Default)]
pub struct FakeHost(Rc<RefCell<FakeRoot>>);

pub struct FakeElement(Rc<RefCell<FakeNode>>);

impl FakeHost {
    pub fn with_attributes(attributes: &Attributes) -> Self {
        let host = Self::default();
        host.0.borrow_mut().attributes = attributes.clone();
        host
    }

    pub fn content(&self) -> Option<String> {
        self.0.borrow().content.clone()
    }

    pub fn classes(&self) -> BTreeSet<String> {
        self.0.borrow().classes.clone()
    }

    pub fn child_count(&self) -> usize {
        self.0.borrow().children.len()
    }

    pub fn child(&self, index: usize) -> Rc<RefCell<FakeNode>> {
        self.0.borrow().children[index].clone()
    }

    pub fn tags(&self) -> Vec<String> {
        self.0
            .borrow()
            .children
            .iter()
            .map(|child| child.borrow().tag.clone())
            .collect()
    }

    /// Set the value of a child (as a user would), then fire its `input` listeners.
    pub fn type_into(&self, index: usize, value: &str) {
        let child = self.child(index);
        child.borrow_mut().value = value.to_string();
        Self::dispatch(&child, FieldEvent::Input);
    }

    pub fn blur(&self, index: usize) {
        Self::dispatch(&self.child(index), FieldEvent::Blur);
    }

    fn dispatch(child: &Rc<RefCell<FakeNode>>, event: FieldEvent) {
        let node = child.borrow();
        for (_, handler) in node.listeners.iter().filter(|(e, _)| *e == event) {
            handler();
        }
    }
}

impl Host for FakeHost {
    type Element = FakeElement;

    fn create(&self, tag: &str, props: &[(&str, &str)]) -> Result<FakeElement> {
        if tag.is_empty() {
            bail!("empty tag name");
        }
        let mut node = FakeNode {
            tag: tag.to_string(),
            ..FakeNode::default()
        };
        for (key, value) in props {
            if *key == "content" {
                node.content = Some(value.to_string());
            } else {
                node.attributes.insert(key.to_string(), value.to_string());
            }
        }
        let node = Rc::new(RefCell::new(node));
        self.0.borrow_mut().children.push(node.clone());
        Ok(FakeElement(node))
    }

    fn get_attribute(&self, key: &str) -> Option<String> {
        self.0.borrow().attributes.get(key).cloned()
    }

    fn set_content(&self, text: &str) {
        let mut root = self.0.borrow_mut();
        root.children.clear();
        root.content = Some(text.to_string());
    }

    fn add_class(&self, class: &str) {
        self.0.borrow_mut().classes.insert(class.to_string());
    }

    fn remove_class(&self, class: &str) {
        self.0.borrow_mut().classes.remove(class);
    }

    fn has_class(&self, class: &str) -> bool {
        self.0.borrow().classes.contains(class)
    }
}

impl HostElement for FakeElement {
    fn set_attribute(&mut self, name: &str, value: &str) -> Result<()> {
        self.0
            .borrow_mut()
            .attributes
            .insert(name.to_string(), value.to_string());
        Ok(())
    }

    fn value(&self) -> Option<String> {
        let node = self.0.borrow();
        matches!(node.tag.as_str(), "input" | "textarea").then(|| node.value.clone())
    }

    fn add_event_listener(&self, event: FieldEvent, handler: Box<dyn Fn()>) -> Result<()> {
        self.0.borrow_mut().listeners.push((event, handler));
        Ok(())
    }
}
