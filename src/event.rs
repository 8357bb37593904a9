//! UI events fed into [`crate::page::PageCore`] and the host actions it returns.
//!
//! The browser host translates DOM listeners into [`PageEvent`]s; tests build
//! them directly. Anything the core cannot do through [`crate::dom`] (timers,
//! scrolling the window, dialogs) comes back as an [`Action`].

#[cfg(test)]
#[path = "event_test.rs"]
mod event_test;

use crate::state::panel::PanelStep;

#[derive(Debug, Clone, PartialEq)]
pub enum PageEvent {
    /// The theme checkbox changed; `checked` means dark.
    ThemeToggled { checked: bool },
    MenuOpenClicked,
    MenuCloseClicked,
    /// A link inside the mobile menu panel was clicked.
    MenuLinkClicked,
    /// A timer scheduled by the panel controller fired.
    PanelTimer { step: PanelStep, generation: u64 },
    /// The panel finished a CSS transition.
    PanelTransitionEnd,
    Scrolled,
    /// An in-page anchor (`href` starting with `#`) was clicked.
    AnchorClicked { href: String },
    /// A gallery image was clicked; `index` is its position in the gallery.
    GalleryImageClicked { index: usize },
    LightboxCloseClicked,
    /// A click landed on the modal backdrop itself, not its content.
    LightboxBackdropClicked,
    LightboxPrevClicked,
    LightboxNextClicked,
    LightboxImageLoaded,
    LightboxImageFailed,
    KeyDown { key: String },
    ContactSubmitted,
}

/// Side effects for the host to carry out.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// Dispatch `event` back into the core after `delay_ms`.
    Schedule { delay_ms: u32, event: PageEvent },
    /// Smooth-scroll the window so its top edge lands at `top`.
    ScrollTo { top: f64 },
    /// Show a blocking acknowledgment to the user.
    Alert { message: String },
    /// Reset the contact form fields.
    ResetForm,
}

/// Keys the open lightbox responds to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LightboxKey {
    Escape,
    ArrowLeft,
    ArrowRight,
}

impl LightboxKey {
    /// Map a `KeyboardEvent.key` value. Unbound keys return `None`.
    #[must_use]
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "Escape" => Some(Self::Escape),
            "ArrowLeft" => Some(Self::ArrowLeft),
            "ArrowRight" => Some(Self::ArrowRight),
            _ => None,
        }
    }
}
