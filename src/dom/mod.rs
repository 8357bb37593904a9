//! Collaborator boundary between page behavior and the browser.
//!
//! SYSTEM CONTEXT
//! ==============
//! Controllers in [`crate::state`] only talk to the page through these traits.
//! The `hydrate` build implements them over `web-sys`; tests implement them
//! over an in-memory fake so index arithmetic, theme resolution and span
//! matching run without a browser.
//!
//! Mutating calls return nothing. A browser that rejects a class or style
//! write leaves the page cosmetically stale; the implementation logs it.

#[cfg(test)]
pub(crate) mod fake;

use crate::error::StorageError;

/// A handle to one element in the page. Cloning clones the handle, not the node.
pub trait Element: Clone {
    fn add_class(&self, class: &str);
    fn remove_class(&self, class: &str);
    fn has_class(&self, class: &str) -> bool;

    fn attr(&self, name: &str) -> Option<String>;
    fn set_attr(&self, name: &str, value: &str);

    /// Set an inline style property. An empty value clears it.
    fn set_style(&self, property: &str, value: &str);
    fn set_text(&self, text: &str);

    /// Checkbox state. No-op on anything that is not an input.
    fn set_checked(&self, checked: bool);
    /// Current value of a form field; empty for non-field elements.
    fn value(&self) -> String;

    /// Fully resolved image source, `None` when this is not an image.
    fn image_src(&self) -> Option<String>;

    /// Top edge relative to the viewport (`getBoundingClientRect().top`).
    fn bounding_top(&self) -> f64;
    /// Top edge relative to the offset parent.
    fn offset_top(&self) -> f64;
    fn client_height(&self) -> f64;

    /// Descendants matching `selector`, in document order.
    fn query_all(&self, selector: &str) -> Vec<Self>;
}

/// Per-origin string key/value storage (`localStorage`).
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;
}

/// The document plus the window-level queries the controllers need.
pub trait Dom {
    type Element: Element;
    type Store: KeyValueStore;

    fn element_by_id(&self, id: &str) -> Option<Self::Element>;
    fn query_all(&self, selector: &str) -> Vec<Self::Element>;

    /// The `<html>` element.
    fn root(&self) -> Option<Self::Element>;
    fn body(&self) -> Option<Self::Element>;

    /// `None` when storage is unavailable (disabled, sandboxed, ...).
    fn local_storage(&self) -> Option<Self::Store>;
    /// `(prefers-color-scheme: dark)` matches.
    fn prefers_dark(&self) -> bool;

    fn viewport_height(&self) -> f64;
    fn scroll_y(&self) -> f64;
    /// Full URL of the current page.
    fn location_href(&self) -> String;
}
