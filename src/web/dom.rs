//! `web-sys` implementations of the [`crate::dom`] traits.

use wasm_bindgen::{JsCast, JsValue};
use web_sys::{
    Document, HtmlElement, HtmlImageElement, HtmlInputElement, HtmlTextAreaElement, NodeList, Storage, Window,
};

use crate::dom::{Dom, Element, KeyValueStore};
use crate::error::StorageError;

fn warn_on_err<T>(op: &str, result: Result<T, JsValue>) {
    if let Err(err) = result {
        log::warn!("dom: {op} failed: {err:?}");
    }
}

fn html_elements(list: Result<NodeList, JsValue>, selector: &str) -> Vec<HtmlElement> {
    let list = match list {
        Ok(list) => list,
        Err(err) => {
            log::warn!("dom: bad selector {selector:?}: {err:?}");
            return Vec::new();
        }
    };
    (0..list.length())
        .filter_map(|i| list.item(i))
        .flat_map(|node| node.dyn_into::<HtmlElement>())
        .collect()
}

impl Element for HtmlElement {
    fn add_class(&self, class: &str) {
        warn_on_err("classList.add", self.class_list().add_1(class));
    }

    fn remove_class(&self, class: &str) {
        warn_on_err("classList.remove", self.class_list().remove_1(class));
    }

    fn has_class(&self, class: &str) -> bool {
        self.class_list().contains(class)
    }

    fn attr(&self, name: &str) -> Option<String> {
        self.get_attribute(name)
    }

    fn set_attr(&self, name: &str, value: &str) {
        warn_on_err("setAttribute", self.set_attribute(name, value));
    }

    fn set_style(&self, property: &str, value: &str) {
        let style = self.style();
        if value.is_empty() {
            warn_on_err("style.removeProperty", style.remove_property(property));
        } else {
            warn_on_err("style.setProperty", style.set_property(property, value));
        }
    }

    fn set_text(&self, text: &str) {
        self.set_text_content(Some(text));
    }

    fn set_checked(&self, checked: bool) {
        if let Some(input) = self.dyn_ref::<HtmlInputElement>() {
            input.set_checked(checked);
        }
    }

    fn value(&self) -> String {
        if let Some(input) = self.dyn_ref::<HtmlInputElement>() {
            return input.value();
        }
        if let Some(area) = self.dyn_ref::<HtmlTextAreaElement>() {
            return area.value();
        }
        String::new()
    }

    fn image_src(&self) -> Option<String> {
        self.dyn_ref::<HtmlImageElement>().map(HtmlImageElement::src)
    }

    fn bounding_top(&self) -> f64 {
        self.get_bounding_client_rect().top()
    }

    fn offset_top(&self) -> f64 {
        f64::from(HtmlElement::offset_top(self))
    }

    fn client_height(&self) -> f64 {
        f64::from(web_sys::Element::client_height(self))
    }

    fn query_all(&self, selector: &str) -> Vec<Self> {
        html_elements(web_sys::Element::query_selector_all(self, selector), selector)
    }
}

/// `window.localStorage`.
pub struct WebStorage(Storage);

impl KeyValueStore for WebStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.0.get_item(key).unwrap_or(None)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.0
            .set_item(key, value)
            .map_err(|err| StorageError { key: key.to_owned(), reason: format!("{err:?}") })
    }
}

/// The live document and its window.
pub struct WebDom {
    window: Window,
    document: Document,
}

impl WebDom {
    /// `None` outside a browser window (workers, SSR).
    pub fn new() -> Option<Self> {
        let window = web_sys::window()?;
        let document = window.document()?;
        Some(Self { window, document })
    }

    pub fn window(&self) -> &Window {
        &self.window
    }

    pub fn document(&self) -> &Document {
        &self.document
    }
}

impl Dom for WebDom {
    type Element = HtmlElement;
    type Store = WebStorage;

    fn element_by_id(&self, id: &str) -> Option<HtmlElement> {
        self.document.get_element_by_id(id)?.dyn_into::<HtmlElement>().into_iter().next()
    }

    fn query_all(&self, selector: &str) -> Vec<HtmlElement> {
        html_elements(self.document.query_selector_all(selector), selector)
    }

    fn root(&self) -> Option<HtmlElement> {
        self.document.document_element()?.dyn_into::<HtmlElement>().into_iter().next()
    }

    fn body(&self) -> Option<HtmlElement> {
        self.document.body()
    }

    fn local_storage(&self) -> Option<WebStorage> {
        match self.window.local_storage() {
            Ok(Some(storage)) => Some(WebStorage(storage)),
            _ => None,
        }
    }

    fn prefers_dark(&self) -> bool {
        match self.window.match_media("(prefers-color-scheme: dark)") {
            Ok(Some(mq)) => mq.matches(),
            _ => false,
        }
    }

    fn viewport_height(&self) -> f64 {
        let inner = self.window.inner_height().map_or(None, |h| h.as_f64()).unwrap_or(0.0);
        if inner > 0.0 {
            return inner;
        }
        self.document
            .document_element()
            .map_or(0.0, |el| f64::from(el.client_height()))
    }

    fn scroll_y(&self) -> f64 {
        self.window.scroll_y().unwrap_or(0.0)
    }

    fn location_href(&self) -> String {
        self.window.location().href().unwrap_or_default()
    }
}
