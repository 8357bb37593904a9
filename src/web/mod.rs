//! Browser host: wires DOM listeners to [`PageCore`] and performs its actions.
//!
//! ARCHITECTURE
//! ============
//! One `PageCore` lives behind `Rc<RefCell<..>>` for the life of the page.
//! Every listener translates its DOM event into a [`PageEvent`], dispatches it,
//! and runs the returned [`Action`]s after the core borrow is released.
//! Listener closures are leaked on purpose; they live as long as the page.

mod dom;

pub use dom::{WebDom, WebStorage};

use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{
    Document, Event, EventTarget, HtmlFormElement, HtmlInputElement, KeyboardEvent, ScrollBehavior,
    ScrollToOptions, Window,
};

use crate::config::{CONFIG_ELEMENT_ID, PageConfig};
use crate::dom::Dom;
use crate::error::ConfigError;
use crate::event::{Action, PageEvent};
use crate::page::PageCore;

type SharedPage = Rc<RefCell<PageCore<WebDom>>>;

/// WASM entry point. Mounts now, or on `DOMContentLoaded` if still parsing.
#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let Some(dom) = WebDom::new() else {
        return;
    };
    if dom.document().ready_state() == "loading" {
        listen(dom.document(), "DOMContentLoaded", |_| boot());
    } else {
        boot();
    }
}

fn boot() {
    let Some(dom) = WebDom::new() else {
        return;
    };
    let (config, config_err) = load_config(dom.document());
    if let Err(err) = console_log::init_with_level(config.log_level()) {
        log::debug!("logger already installed: {err}");
    }
    if let Some(err) = config_err {
        log::warn!("{err}; using defaults");
    }

    let window = dom.window().clone();
    let document = dom.document().clone();
    let core = match PageCore::mount(dom, config) {
        Ok(core) => core,
        Err(err) => {
            log::error!("page: {err}");
            return;
        }
    };
    let page: SharedPage = Rc::new(RefCell::new(core));
    bind(&page, &window, &document);
}

/// Read `<script type="application/json" id="page-config">`. Absent means
/// defaults; a bad config also falls back to defaults and reports why.
fn load_config(document: &Document) -> (PageConfig, Option<ConfigError>) {
    let Some(raw) = document.get_element_by_id(CONFIG_ELEMENT_ID).and_then(|el| el.text_content()) else {
        return (PageConfig::default(), None);
    };
    match PageConfig::from_json(&raw) {
        Ok(config) => (config, None),
        Err(err) => (PageConfig::default(), Some(err)),
    }
}

fn bind(page: &SharedPage, window: &Window, document: &Document) {
    let (config, gallery, menu_links) = {
        let core = page.borrow();
        (core.config().clone(), core.gallery_elements(), core.menu_links())
    };
    let by_id = |id: &str| document.get_element_by_id(id);

    // --- theme ---
    if let Some(toggle) = by_id(&config.theme.toggle_id) {
        let page = Rc::clone(page);
        listen(&toggle, "change", move |event| {
            let checked = event
                .target()
                .and_then(|t| t.dyn_ref::<HtmlInputElement>().map(HtmlInputElement::checked))
                .unwrap_or(false);
            dispatch(&page, PageEvent::ThemeToggled { checked });
        });
    }

    // --- mobile menu ---
    if let Some(button) = by_id(&config.menu.open_button_id) {
        forward(page, &button, "click", PageEvent::MenuOpenClicked);
    }
    if let Some(button) = by_id(&config.menu.close_button_id) {
        forward(page, &button, "click", PageEvent::MenuCloseClicked);
    }
    for link in &menu_links {
        forward(page, link, "click", PageEvent::MenuLinkClicked);
    }
    if let Some(panel) = by_id(&config.menu.panel_id) {
        let page = Rc::clone(page);
        let target = panel.clone();
        listen(&panel, "transitionend", move |event| {
            if is_target(&event, &target) {
                dispatch(&page, PageEvent::PanelTransitionEnd);
            }
        });
    }

    // --- scrolling and in-page navigation ---
    forward(page, window, "scroll", PageEvent::Scrolled);
    let anchors = page.borrow().dom().query_all(&config.nav.anchor_selector);
    for anchor in anchors {
        let page = Rc::clone(page);
        let href_source = anchor.clone();
        listen(&anchor, "click", move |event| {
            event.prevent_default();
            if let Some(href) = href_source.get_attribute("href") {
                dispatch(&page, PageEvent::AnchorClicked { href });
            }
        });
    }

    // --- lightbox ---
    for (index, image) in gallery.iter().enumerate() {
        let page = Rc::clone(page);
        listen(image, "click", move |event| {
            event.prevent_default();
            event.stop_propagation();
            dispatch(&page, PageEvent::GalleryImageClicked { index });
        });
    }
    let lb = &config.lightbox;
    if let Some(button) = by_id(&lb.close_id) {
        forward(page, &button, "click", PageEvent::LightboxCloseClicked);
    }
    if let Some(button) = by_id(&lb.prev_id) {
        forward(page, &button, "click", PageEvent::LightboxPrevClicked);
    }
    if let Some(button) = by_id(&lb.next_id) {
        forward(page, &button, "click", PageEvent::LightboxNextClicked);
    }
    if let Some(modal) = by_id(&lb.modal_id) {
        let page = Rc::clone(page);
        let target = modal.clone();
        listen(&modal, "click", move |event| {
            if is_target(&event, &target) {
                dispatch(&page, PageEvent::LightboxBackdropClicked);
            }
        });
    }
    if let Some(image) = by_id(&lb.image_id) {
        forward(page, &image, "load", PageEvent::LightboxImageLoaded);
        forward(page, &image, "error", PageEvent::LightboxImageFailed);
    }
    {
        let page = Rc::clone(page);
        listen(document, "keydown", move |event| {
            if let Some(key) = event.dyn_ref::<KeyboardEvent>().map(KeyboardEvent::key) {
                dispatch(&page, PageEvent::KeyDown { key });
            }
        });
    }

    // --- contact form ---
    if let Some(form) = by_id(&config.contact.form_id) {
        let page = Rc::clone(page);
        listen(&form, "submit", move |event| {
            event.prevent_default();
            dispatch(&page, PageEvent::ContactSubmitted);
        });
    }
}

fn dispatch(page: &SharedPage, event: PageEvent) {
    let actions = match page.try_borrow_mut() {
        Ok(mut core) => core.handle(event),
        Err(_) => {
            log::warn!("page busy, dropping {event:?}");
            return;
        }
    };
    for action in actions {
        perform(page, action);
    }
}

fn perform(page: &SharedPage, action: Action) {
    let Some(window) = web_sys::window() else {
        return;
    };
    match action {
        Action::Schedule { delay_ms, event } => {
            let page = Rc::clone(page);
            Timeout::new(delay_ms, move || dispatch(&page, event)).forget();
        }
        Action::ScrollTo { top } => {
            let options = ScrollToOptions::new();
            options.set_top(top);
            options.set_behavior(ScrollBehavior::Smooth);
            window.scroll_to_with_scroll_to_options(&options);
        }
        Action::Alert { message } => {
            if let Err(err) = window.alert_with_message(&message) {
                log::warn!("alert failed: {err:?}");
            }
        }
        Action::ResetForm => {
            let form_id = page.borrow().config().contact.form_id.clone();
            let form = window.document().and_then(|d| d.get_element_by_id(&form_id));
            if let Some(form) = form.as_ref().and_then(|f| f.dyn_ref::<HtmlFormElement>()) {
                form.reset();
            }
        }
    }
}

/// Dispatch a fixed event whenever `event_type` fires on `target`.
fn forward(page: &SharedPage, target: &EventTarget, event_type: &str, event: PageEvent) {
    let page = Rc::clone(page);
    listen(target, event_type, move |_| dispatch(&page, event.clone()));
}

fn listen(target: &EventTarget, event_type: &str, handler: impl FnMut(Event) + 'static) {
    let closure = Closure::<dyn FnMut(Event)>::new(handler);
    if let Err(err) = target.add_event_listener_with_callback(event_type, closure.as_ref().unchecked_ref()) {
        log::warn!("failed to listen for {event_type}: {err:?}");
    }
    closure.forget();
}

/// The event was dispatched on `el` itself rather than bubbling up from a child.
fn is_target(event: &Event, el: &web_sys::Element) -> bool {
    event.target().is_some_and(|t| {
        let t: &JsValue = t.as_ref();
        t == AsRef::<JsValue>::as_ref(el)
    })
}
