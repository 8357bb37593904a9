//! Client-side behavior for a single-page portfolio site.
//!
//! This crate is compiled to WebAssembly and hydrates an already-rendered
//! page: it persists the color theme, animates the mobile menu panel, reveals
//! content as it scrolls into view, highlights the navigation link for the
//! visible section, runs the project image lightbox, and acknowledges contact
//! form submissions. Nothing is rendered from scratch; every controller works
//! against elements the markup already contains.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`page`] | Testable [`page::PageCore`]: mounts controllers, routes events |
//! | [`state`] | One controller per behavior (theme, panel, reveal, sections, lightbox, contact) |
//! | [`dom`] | Element, storage, and document traits the controllers run against |
//! | [`event`] | UI events in, host actions out |
//! | [`config`] | Element ids, selectors, timings; JSON-overridable |
//! | [`error`] | Error types |
//! | `web` | Browser host (feature `hydrate`): listeners, timers, `web-sys` DOM |

pub mod config;
pub mod dom;
pub mod error;
pub mod event;
pub mod page;
pub mod state;

#[cfg(feature = "hydrate")]
pub mod web;
