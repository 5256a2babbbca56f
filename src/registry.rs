// Registration of the `easy-input` custom element. `register()` is called once
// from the application's bootstrap; the browser then hands each connected
// `<easy-input>` to `connect`, which renders it and keeps it alive here until
// the element is disconnected.

use crate::{easy_input::EasyInput, web_support::WebHost};
use anyhow::{Result, anyhow, bail};
use std::{cell::RefCell, collections::BTreeSet};
use wasm_bindgen::{JsCast, JsValue, prelude::*};

pub const ELEMENT_TAG: &str = "easy-input";

// The element class forwards each connection to Rust once, until the matching
// disconnection.
#[wasm_bindgen(inline_js = r#"
export function define_element(tag, connected, disconnected) {
    customElements.define(tag, class extends HTMLElement {
        connectedCallback() {
            if (this.__easyInputConnected) return;
            this.__easyInputConnected = true;
            connected(this);
        }
        disconnectedCallback() {
            if (!this.__easyInputConnected) return;
            this.__easyInputConnected = false;
            disconnected(this);
        }
    });
}
"#)]
extern "C" {
    #[wasm_bindgen(catch)]
    fn define_element(
        tag: &str,
        connected: &js_sys::Function,
        disconnected: &js_sys::Function,
    ) -> Result<(), JsValue>;
}

/// Tags defined so far. A tag can only be defined once per page.
#[derive(Debug, Default)]
pub struct Registry {
    defined: BTreeSet<String>,
}

impl Registry {
    pub fn define(&mut self, tag: &str) -> Result<()> {
        if !is_custom_element_name(tag) {
            bail!("{tag:?} is not a valid custom element name");
        }
        if !self.defined.insert(tag.to_string()) {
            bail!("{tag} is already registered");
        }
        Ok(())
    }

    pub fn is_defined(&self, tag: &str) -> bool {
        self.defined.contains(tag)
    }
}

// Lowercase ASCII letter first, at least one hyphen, no uppercase.
fn is_custom_element_name(tag: &str) -> bool {
    tag.starts_with(|c: char| c.is_ascii_lowercase())
        && tag.contains('-')
        && !tag.chars().any(|c| c.is_ascii_uppercase() || c.is_whitespace())
}

/// Live components keyed by their root element. Dropping a component detaches
/// the children it rendered and releases their listeners.
#[derive(Debug)]
pub struct Instances<R, T> {
    live: Vec<(R, T)>,
}

impl<R, T> Default for Instances<R, T> {
    fn default() -> Self {
        Self { live: Vec::new() }
    }
}

impl<R: PartialEq, T> Instances<R, T> {
    /// Track `instance` for `root`, returning whatever was tracked for it before.
    pub fn insert(&mut self, root: R, instance: T) -> Option<T> {
        let previous = self.remove(&root);
        self.live.push((root, instance));
        previous
    }

    pub fn remove(&mut self, root: &R) -> Option<T> {
        let index = self.live.iter().position(|(r, _)| r == root)?;
        Some(self.live.swap_remove(index).1)
    }

    pub fn len(&self) -> usize {
        self.live.len()
    }

    pub fn is_empty(&self) -> bool {
        self.live.is_empty()
    }
}

thread_local! {
    static REGISTRY: RefCell<Registry> = RefCell::default();
    static INSTANCES: RefCell<Instances<web_sys::HtmlElement, EasyInput<WebHost>>> =
        RefCell::default();
}

/// Define `<easy-input>` with the browser. Must be called once, before any
/// `<easy-input>` element is expected to render.
pub fn register() -> Result<()> {
    REGISTRY.with_borrow_mut(|registry| registry.define(ELEMENT_TAG))?;

    let connected = Closure::<dyn Fn(web_sys::HtmlElement)>::new(|root| {
        if let Err(e) = connect(root) {
            web_sys::console::error_1(&format!("{ELEMENT_TAG}: {e:#}").into());
        }
    });
    let disconnected = Closure::<dyn Fn(web_sys::HtmlElement)>::new(disconnect);
    define_element(
        ELEMENT_TAG,
        connected.as_ref().unchecked_ref(),
        disconnected.as_ref().unchecked_ref(),
    )
    .map_err(|e| anyhow!("customElements.define: {e:?}"))?;
    // the element class holds the callbacks for the life of the page
    connected.forget();
    disconnected.forget();

    web_sys::console::log_1(&format!("{ELEMENT_TAG} registered").into());
    Ok(())
}

fn connect(root: web_sys::HtmlElement) -> Result<()> {
    let host = WebHost::new(root.clone())?;
    let attributes = host.attributes();
    let input = EasyInput::initialize(host, &attributes)?;
    if cfg!(debug_assertions) {
        input.audit();
    }
    INSTANCES.with_borrow_mut(|instances| instances.insert(root, input));
    Ok(())
}

// A reconnected element renders from scratch.
fn disconnect(root: web_sys::HtmlElement) {
    let removed = INSTANCES.with_borrow_mut(|instances| instances.remove(&root));
    drop(removed);
}
