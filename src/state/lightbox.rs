//! Image lightbox: a modal carousel over the page's gallery images.
//!
//! The gallery is discovered once at mount and never changes. The cursor is an
//! index into it and wraps at both ends. While open, the body's scroll is
//! suspended; closing restores it.

#[cfg(test)]
#[path = "lightbox_test.rs"]
mod lightbox_test;

use crate::config::LightboxConfig;
use crate::dom::Element;
use crate::error::LightboxError;
use crate::event::LightboxKey;

const LOADING_OPACITY: &str = "0.7";
const LOADING_FILTER: &str = "blur(2px)";

/// One gallery image.
#[derive(Clone, Debug)]
pub struct ImageEntry<E> {
    pub src: String,
    pub alt: String,
    pub element: E,
}

/// Build the gallery from candidate image elements in document order.
///
/// An element whose source is missing, empty, or resolves to the page's own
/// URL is skipped. An empty `alt` falls back to `"Project image {n}"`, where
/// `n` is the element's 1-based position among the candidates.
pub fn discover<E: Element>(candidates: Vec<E>, page_url: &str) -> Vec<ImageEntry<E>> {
    let mut entries = Vec::new();
    for (position, element) in candidates.into_iter().enumerate() {
        let Some(src) = element.image_src().filter(|src| !src.is_empty() && src != page_url) else {
            log::debug!("lightbox: skipping image {position} with no usable source");
            continue;
        };
        let alt = element
            .attr("alt")
            .filter(|alt| !alt.is_empty())
            .unwrap_or_else(|| format!("Project image {}", position + 1));
        log::debug!("lightbox: found image {position}: {src}");
        entries.push(ImageEntry { src, alt, element });
    }
    log::info!("lightbox: {} images ready", entries.len());
    entries
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LightboxState {
    #[default]
    Closed,
    Open,
}

/// The modal's own elements.
#[derive(Clone, Debug)]
pub struct LightboxElements<E> {
    pub modal: E,
    pub image: E,
    pub counter: E,
    pub prev: E,
    pub next: E,
}

pub struct Lightbox<E> {
    entries: Vec<ImageEntry<E>>,
    cursor: usize,
    state: LightboxState,
    els: LightboxElements<E>,
    body: E,
    active_class: String,
}

impl<E: Element> Lightbox<E> {
    pub fn new(entries: Vec<ImageEntry<E>>, els: LightboxElements<E>, body: E, config: &LightboxConfig) -> Self {
        Self { entries, cursor: 0, state: LightboxState::Closed, els, body, active_class: config.active_class.clone() }
    }

    // --- Queries ---

    #[must_use]
    pub fn state(&self) -> LightboxState {
        self.state
    }

    #[must_use]
    pub fn is_open(&self) -> bool {
        self.state == LightboxState::Open
    }

    #[must_use]
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[must_use]
    pub fn entries(&self) -> &[ImageEntry<E>] {
        &self.entries
    }

    /// Counter label for the current cursor, e.g. `"2 / 3"`.
    #[must_use]
    pub fn counter_text(&self) -> String {
        format!("{} / {}", self.cursor + 1, self.entries.len())
    }

    // --- Transitions ---

    /// Open at `index`. Rejected requests leave cursor, state and DOM untouched.
    pub fn open(&mut self, index: usize) -> Result<(), LightboxError> {
        let count = self.entries.len();
        if count == 0 {
            return Err(LightboxError::Empty);
        }
        if index >= count {
            return Err(LightboxError::IndexOutOfRange { index, count });
        }
        self.cursor = index;
        self.render();
        self.els.modal.add_class(&self.active_class);
        self.body.set_style("overflow", "hidden");
        self.state = LightboxState::Open;
        log::info!("lightbox: opened at {index}");
        Ok(())
    }

    pub fn close(&mut self) {
        self.els.modal.remove_class(&self.active_class);
        self.body.set_style("overflow", "");
        self.state = LightboxState::Closed;
        log::info!("lightbox: closed");
    }

    /// Advance with wraparound. No-op with fewer than two images.
    pub fn next(&mut self) {
        let count = self.entries.len();
        if count <= 1 {
            return;
        }
        self.cursor = (self.cursor + 1) % count;
        log::debug!("lightbox: next -> {}", self.cursor);
        self.render();
    }

    /// Step back with wraparound. No-op with fewer than two images.
    pub fn prev(&mut self) {
        let count = self.entries.len();
        if count <= 1 {
            return;
        }
        self.cursor = (self.cursor + count - 1) % count;
        log::debug!("lightbox: prev -> {}", self.cursor);
        self.render();
    }

    /// Push the entry under the cursor into the modal.
    ///
    /// The image gets a dimmed, blurred loading style until the browser
    /// reports load or error (see [`Self::on_image_settled`]).
    pub fn render(&self) {
        let Some(entry) = self.entries.get(self.cursor) else {
            return;
        };
        let image = &self.els.image;
        image.set_style("opacity", LOADING_OPACITY);
        image.set_style("filter", LOADING_FILTER);
        image.set_attr("src", &entry.src);
        image.set_attr("alt", &entry.alt);

        self.els.counter.set_text(&self.counter_text());

        let show_nav = self.entries.len() > 1;
        self.els.prev.set_style("display", if show_nav { "flex" } else { "none" });
        self.els.next.set_style("display", if show_nav { "flex" } else { "none" });
        self.els.counter.set_style("display", if show_nav { "block" } else { "none" });
    }

    /// The modal image finished loading (`loaded`) or failed. Either way the
    /// loading style is cleared.
    pub fn on_image_settled(&self, loaded: bool) {
        if !loaded {
            log::error!("lightbox: error displaying image {}", self.cursor);
        }
        self.els.image.set_style("opacity", "1");
        self.els.image.set_style("filter", "none");
    }

    /// Keyboard input. Ignored while closed. Returns whether the key was used.
    pub fn on_key(&mut self, key: &str) -> bool {
        if !self.is_open() {
            return false;
        }
        match LightboxKey::from_key(key) {
            Some(LightboxKey::Escape) => self.close(),
            Some(LightboxKey::ArrowLeft) => self.prev(),
            Some(LightboxKey::ArrowRight) => self.next(),
            None => return false,
        }
        true
    }
}
