//! Page behavior controllers.
//!
//! SYSTEM CONTEXT
//! ==============
//! Each controller owns the element handles it mutates and nothing else; they
//! share no state beyond the CSS classes they set. All are generic over
//! [`crate::dom::Element`] so they run against the fake DOM in tests.

pub mod contact;
pub mod lightbox;
pub mod panel;
pub mod reveal;
pub mod sections;
pub mod theme;
