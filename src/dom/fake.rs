//! In-memory DOM used by unit tests.
//!
//! Supports the selector shapes the page uses: `.class`, `#id`, a bare tag,
//! and `tag[attr^="prefix"]`.

use std::cell::{Cell, RefCell};
use std::collections::{BTreeMap, BTreeSet};
use std::rc::Rc;

use super::{Dom, Element, KeyValueStore};
use crate::error::StorageError;

pub const PAGE_URL: &str = "https://portfolio.test/";

#[derive(Debug, Default)]
struct FakeNode {
    tag: String,
    id: Option<String>,
    classes: BTreeSet<String>,
    attrs: BTreeMap<String, String>,
    styles: BTreeMap<String, String>,
    text: String,
    checked: bool,
    value: String,
    image_src: Option<String>,
    bounding_top: f64,
    offset_top: f64,
    client_height: f64,
    children: Vec<FakeElement>,
}

#[derive(Debug, Clone, Default)]
pub struct FakeElement(Rc<RefCell<FakeNode>>);

impl FakeElement {
    pub fn new(tag: &str) -> Self {
        let el = Self::default();
        el.0.borrow_mut().tag = tag.to_owned();
        el
    }

    // --- builders ---

    pub fn id(self, id: &str) -> Self {
        self.set_attr("id", id);
        self
    }

    pub fn class(self, class: &str) -> Self {
        self.add_class(class);
        self
    }

    pub fn with_attr(self, name: &str, value: &str) -> Self {
        self.set_attr(name, value);
        self
    }

    pub fn src(self, src: &str) -> Self {
        self.0.borrow_mut().image_src = Some(src.to_owned());
        self
    }

    pub fn top(self, top: f64) -> Self {
        self.set_bounding_top(top);
        self
    }

    pub fn span(self, offset_top: f64, height: f64) -> Self {
        {
            let mut node = self.0.borrow_mut();
            node.offset_top = offset_top;
            node.client_height = height;
        }
        self
    }

    pub fn child(self, child: FakeElement) -> Self {
        self.0.borrow_mut().children.push(child);
        self
    }

    // --- inspection / mutation from tests ---

    pub fn style(&self, property: &str) -> Option<String> {
        self.0.borrow().styles.get(property).cloned()
    }

    pub fn text(&self) -> String {
        self.0.borrow().text.clone()
    }

    pub fn checked(&self) -> bool {
        self.0.borrow().checked
    }

    pub fn set_value(&self, value: &str) {
        self.0.borrow_mut().value = value.to_owned();
    }

    pub fn set_bounding_top(&self, top: f64) {
        self.0.borrow_mut().bounding_top = top;
    }

    pub fn is_same(&self, other: &FakeElement) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }

    fn matches(&self, selector: &str) -> bool {
        let node = self.0.borrow();
        if let Some(class) = selector.strip_prefix('.') {
            return node.classes.contains(class);
        }
        if let Some(id) = selector.strip_prefix('#') {
            return node.id.as_deref() == Some(id);
        }
        if let Some((tag, rest)) = selector.split_once('[') {
            let Some((attr, prefix)) = rest.trim_end_matches(']').split_once("^=") else {
                return false;
            };
            let prefix = prefix.trim_matches('"');
            return node.tag == tag && node.attrs.get(attr).is_some_and(|v| v.starts_with(prefix));
        }
        node.tag == selector
    }

    fn collect(&self, selector: &str, out: &mut Vec<FakeElement>) {
        let children = self.0.borrow().children.clone();
        for child in children {
            if child.matches(selector) {
                out.push(child.clone());
            }
            child.collect(selector, out);
        }
    }

    fn find_id(&self, id: &str) -> Option<FakeElement> {
        if self.0.borrow().id.as_deref() == Some(id) {
            return Some(self.clone());
        }
        let children = self.0.borrow().children.clone();
        children.iter().find_map(|child| child.find_id(id))
    }
}

impl Element for FakeElement {
    fn add_class(&self, class: &str) {
        self.0.borrow_mut().classes.insert(class.to_owned());
    }

    fn remove_class(&self, class: &str) {
        self.0.borrow_mut().classes.remove(class);
    }

    fn has_class(&self, class: &str) -> bool {
        self.0.borrow().classes.contains(class)
    }

    fn attr(&self, name: &str) -> Option<String> {
        self.0.borrow().attrs.get(name).cloned()
    }

    fn set_attr(&self, name: &str, value: &str) {
        let mut node = self.0.borrow_mut();
        if name == "id" {
            node.id = Some(value.to_owned());
        }
        node.attrs.insert(name.to_owned(), value.to_owned());
    }

    fn set_style(&self, property: &str, value: &str) {
        let mut node = self.0.borrow_mut();
        if value.is_empty() {
            node.styles.remove(property);
        } else {
            node.styles.insert(property.to_owned(), value.to_owned());
        }
    }

    fn set_text(&self, text: &str) {
        self.0.borrow_mut().text = text.to_owned();
    }

    fn set_checked(&self, checked: bool) {
        self.0.borrow_mut().checked = checked;
    }

    fn value(&self) -> String {
        self.0.borrow().value.clone()
    }

    fn image_src(&self) -> Option<String> {
        self.0.borrow().image_src.clone()
    }

    fn bounding_top(&self) -> f64 {
        self.0.borrow().bounding_top
    }

    fn offset_top(&self) -> f64 {
        self.0.borrow().offset_top
    }

    fn client_height(&self) -> f64 {
        self.0.borrow().client_height
    }

    fn query_all(&self, selector: &str) -> Vec<Self> {
        let mut out = Vec::new();
        self.collect(selector, &mut out);
        out
    }
}

/// Shared map so a test can hold one handle while the page holds another.
#[derive(Debug, Clone, Default)]
pub struct FakeStore {
    items: Rc<RefCell<BTreeMap<String, String>>>,
    reject_writes: Rc<Cell<bool>>,
}

impl FakeStore {
    pub fn with(key: &str, value: &str) -> Self {
        let store = Self::default();
        store.items.borrow_mut().insert(key.to_owned(), value.to_owned());
        store
    }

    pub fn reject_writes(&self) {
        self.reject_writes.set(true);
    }
}

impl KeyValueStore for FakeStore {
    fn get(&self, key: &str) -> Option<String> {
        self.items.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        if self.reject_writes.get() {
            return Err(StorageError { key: key.to_owned(), reason: "QuotaExceededError".into() });
        }
        self.items.borrow_mut().insert(key.to_owned(), value.to_owned());
        Ok(())
    }
}

pub struct FakeDom {
    pub root: FakeElement,
    pub body: FakeElement,
    pub store: Option<FakeStore>,
    pub prefers_dark: bool,
    pub viewport_height: Cell<f64>,
    pub scroll_y: Cell<f64>,
}

impl Default for FakeDom {
    fn default() -> Self {
        let body = FakeElement::new("body");
        let root = FakeElement::new("html").child(body.clone());
        Self {
            root,
            body,
            store: Some(FakeStore::default()),
            prefers_dark: false,
            viewport_height: Cell::new(800.0),
            scroll_y: Cell::new(0.0),
        }
    }
}

impl FakeDom {
    /// Append an element to `<body>`.
    pub fn push(&self, el: FakeElement) {
        self.body.0.borrow_mut().children.push(el);
    }

    pub fn get(&self, id: &str) -> Option<FakeElement> {
        self.root.find_id(id)
    }

    /// The stock portfolio page: three sections, three reveal targets, the
    /// full lightbox and menu markup, and one gallery image per `src`.
    pub fn portfolio(images: &[&str]) -> Self {
        let dom = Self::default();
        dom.push(FakeElement::new("input").id("toggle"));
        dom.push(FakeElement::new("button").id("mobile-menu-btn"));
        dom.push(
            FakeElement::new("div")
                .id("mobile-menu")
                .class("hidden")
                .child(FakeElement::new("button").id("close-menu"))
                .child(FakeElement::new("a").with_attr("href", "#about"))
                .child(FakeElement::new("a").with_attr("href", "#projects")),
        );
        for target in ["#home", "#about", "#projects"] {
            dom.push(FakeElement::new("a").class("nav-link").with_attr("href", target));
        }
        dom.push(FakeElement::new("section").id("home").span(0.0, 700.0));
        dom.push(FakeElement::new("section").id("about").span(700.0, 800.0));
        dom.push(FakeElement::new("section").id("projects").span(1500.0, 1000.0));
        for top in [100.0, 900.0, 2000.0] {
            dom.push(FakeElement::new("div").class("scroll-animate").top(top));
        }
        for (i, src) in images.iter().enumerate() {
            let img = FakeElement::new("img").class("project-image").src(src);
            if i % 2 == 0 {
                img.set_attr("alt", &format!("Screenshot {src}"));
            }
            dom.push(img);
        }
        dom.push(
            FakeElement::new("div")
                .id("lightbox-modal")
                .child(FakeElement::new("img").id("lightbox-image"))
                .child(FakeElement::new("button").id("lightbox-close"))
                .child(FakeElement::new("button").id("lightbox-prev"))
                .child(FakeElement::new("button").id("lightbox-next"))
                .child(FakeElement::new("span").id("lightbox-counter")),
        );
        dom.push(
            FakeElement::new("form")
                .id("contact-form")
                .child(FakeElement::new("input").id("name"))
                .child(FakeElement::new("input").id("email"))
                .child(FakeElement::new("textarea").id("message")),
        );
        dom
    }
}

impl Dom for FakeDom {
    type Element = FakeElement;
    type Store = FakeStore;

    fn element_by_id(&self, id: &str) -> Option<FakeElement> {
        self.get(id)
    }

    fn query_all(&self, selector: &str) -> Vec<FakeElement> {
        self.root.query_all(selector)
    }

    fn root(&self) -> Option<FakeElement> {
        Some(self.root.clone())
    }

    fn body(&self) -> Option<FakeElement> {
        Some(self.body.clone())
    }

    fn local_storage(&self) -> Option<FakeStore> {
        self.store.clone()
    }

    fn prefers_dark(&self) -> bool {
        self.prefers_dark
    }

    fn viewport_height(&self) -> f64 {
        self.viewport_height.get()
    }

    fn scroll_y(&self) -> f64 {
        self.scroll_y.get()
    }

    fn location_href(&self) -> String {
        PAGE_URL.to_owned()
    }
}
