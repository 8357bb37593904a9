//! Page core: every controller, wired to one event entry point.
//!
//! `PageCore` is the browser-independent half of the page. The `hydrate` host
//! ([`crate::web`]) forwards DOM listeners here as [`PageEvent`]s and executes
//! the returned [`Action`]s; tests drive it with a fake DOM.

#[cfg(test)]
#[path = "page_test.rs"]
mod page_test;

use crate::config::PageConfig;
use crate::dom::{Dom, Element};
use crate::error::PageError;
use crate::event::{Action, PageEvent};
use crate::state::contact::ContactForm;
use crate::state::lightbox::{self, Lightbox, LightboxElements};
use crate::state::panel::PanelController;
use crate::state::reveal::RevealAnimator;
use crate::state::sections::{self, SectionHighlighter};
use crate::state::theme::{PreferenceStore, ThemeController};

type El<D> = <D as Dom>::Element;

pub struct PageCore<D: Dom> {
    dom: D,
    config: PageConfig,
    pub theme: ThemeController<El<D>, D::Store>,
    pub panel: PanelController<El<D>>,
    pub reveal: RevealAnimator<El<D>>,
    pub sections: SectionHighlighter<El<D>>,
    pub lightbox: Lightbox<El<D>>,
    pub contact: ContactForm<El<D>>,
}

impl<D: Dom> PageCore<D> {
    /// Resolve the page's elements, apply the initial theme, run the first
    /// reveal pass, and discover the gallery.
    pub fn mount(dom: D, config: PageConfig) -> Result<Self, PageError> {
        config.validate()?;

        let root = dom.root().ok_or_else(|| PageError::MissingElement { id: "html".into() })?;
        let body = dom.body().ok_or_else(|| PageError::MissingElement { id: "body".into() })?;
        let toggle = required(&dom, &config.theme.toggle_id)?;
        let prefs = PreferenceStore::new(dom.local_storage(), config.theme.storage_key.clone());
        let theme = ThemeController::new(root, toggle, prefs, config.theme.dark_class.clone(), dom.prefers_dark());

        let panel = PanelController::new(required(&dom, &config.menu.panel_id)?, &config.menu);

        let reveal = RevealAnimator::new(dom.query_all(&config.reveal.selector), &config.reveal);
        reveal.tick(dom.viewport_height());

        let sections = SectionHighlighter::new(
            dom.query_all(&config.nav.section_selector),
            dom.query_all(&config.nav.link_selector),
            &config.nav,
        );

        let lb = &config.lightbox;
        let els = LightboxElements {
            modal: required(&dom, &lb.modal_id)?,
            image: required(&dom, &lb.image_id)?,
            counter: required(&dom, &lb.counter_id)?,
            prev: required(&dom, &lb.prev_id)?,
            next: required(&dom, &lb.next_id)?,
        };
        let entries = lightbox::discover(dom.query_all(&lb.image_selector), &dom.location_href());
        let lightbox = Lightbox::new(entries, els, body, lb);

        let c = &config.contact;
        required(&dom, &c.form_id)?;
        let contact = ContactForm::new(required(&dom, &c.name_id)?, required(&dom, &c.email_id)?, required(&dom, &c.message_id)?);

        log::info!(
            "page mounted: theme={} reveal={} sections={} gallery={}",
            theme.current().as_str(),
            reveal.len(),
            sections.spans().len(),
            lightbox.len()
        );

        Ok(Self { dom, config, theme, panel, reveal, sections, lightbox, contact })
    }

    #[must_use]
    pub fn dom(&self) -> &D {
        &self.dom
    }

    #[must_use]
    pub fn config(&self) -> &PageConfig {
        &self.config
    }

    #[must_use]
    pub fn gallery_len(&self) -> usize {
        self.lightbox.len()
    }

    /// Gallery image elements in gallery order; index `i` opens entry `i`.
    pub fn gallery_elements(&self) -> Vec<El<D>> {
        self.lightbox.entries().iter().map(|entry| entry.element.clone()).collect()
    }

    /// Links inside the mobile menu panel.
    pub fn menu_links(&self) -> Vec<El<D>> {
        self.dom
            .element_by_id(&self.config.menu.panel_id)
            .map_or_else(Vec::new, |panel| panel.query_all("a"))
    }

    /// React to one UI event.
    pub fn handle(&mut self, event: PageEvent) -> Vec<Action> {
        match event {
            PageEvent::ThemeToggled { checked } => {
                self.theme.on_toggle(checked);
            }
            PageEvent::MenuOpenClicked => return self.panel.open().into_iter().collect(),
            PageEvent::MenuCloseClicked | PageEvent::MenuLinkClicked => {
                return self.panel.close().into_iter().collect();
            }
            PageEvent::PanelTimer { step, generation } => self.panel.on_timer(step, generation),
            PageEvent::PanelTransitionEnd => self.panel.on_transition_end(),
            PageEvent::Scrolled => self.on_scroll(),
            PageEvent::AnchorClicked { href } => {
                if let Some(top) = sections::scroll_target(&self.dom, &href, self.config.nav.scroll_offset) {
                    log::debug!("nav: scrolling to {href} at {top}");
                    return vec![Action::ScrollTo { top }];
                }
            }
            PageEvent::GalleryImageClicked { index } => {
                if let Err(err) = self.lightbox.open(index) {
                    log::error!("lightbox: {err}");
                }
            }
            PageEvent::LightboxCloseClicked | PageEvent::LightboxBackdropClicked => self.lightbox.close(),
            PageEvent::LightboxPrevClicked => self.lightbox.prev(),
            PageEvent::LightboxNextClicked => self.lightbox.next(),
            PageEvent::LightboxImageLoaded => self.lightbox.on_image_settled(true),
            PageEvent::LightboxImageFailed => self.lightbox.on_image_settled(false),
            PageEvent::KeyDown { key } => {
                self.lightbox.on_key(&key);
            }
            PageEvent::ContactSubmitted => return self.contact.submit(),
        }
        Vec::new()
    }

    fn on_scroll(&self) {
        self.reveal.tick(self.dom.viewport_height());
        self.sections.update(self.dom.scroll_y());
    }
}

fn required<D: Dom>(dom: &D, id: &str) -> Result<D::Element, PageError> {
    dom.element_by_id(id).ok_or_else(|| PageError::MissingElement { id: id.to_owned() })
}
