//! Mobile menu panel: a slide-in panel driven by two CSS classes.
//!
//! The panel is out of layout while `hidden` is set and slides in while
//! `show` is set. Opening drops `hidden` first and adds `show` a moment later
//! so the transition runs; closing drops `show` and only re-adds `hidden` once
//! the slide-out has finished.
//!
//! DESIGN
//! ======
//! Every `open`/`close` bumps a generation counter and the follow-up step is
//! scheduled with it. A step whose generation is stale is dropped, so rapid
//! toggling settles on whatever was asked for last. A `transitionend` while
//! closing finishes the close early; the timer is only the fallback.

#[cfg(test)]
#[path = "panel_test.rs"]
mod panel_test;

use crate::config::MenuConfig;
use crate::dom::Element;
use crate::event::{Action, PageEvent};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PanelState {
    #[default]
    Closed,
    Opening,
    Open,
    Closing,
}

/// Deferred half of an open or close.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PanelStep {
    /// Add the `show` class (finishes opening).
    Show,
    /// Add the `hidden` class (finishes closing).
    Hide,
}

pub struct PanelController<E> {
    panel: E,
    state: PanelState,
    generation: u64,
    hidden_class: String,
    show_class: String,
    open_delay_ms: u32,
    close_delay_ms: u32,
}

impl<E: Element> PanelController<E> {
    pub fn new(panel: E, config: &MenuConfig) -> Self {
        Self {
            panel,
            state: PanelState::Closed,
            generation: 0,
            hidden_class: config.hidden_class.clone(),
            show_class: config.show_class.clone(),
            open_delay_ms: config.open_delay_ms,
            close_delay_ms: config.close_delay_ms,
        }
    }

    #[must_use]
    pub fn state(&self) -> PanelState {
        self.state
    }

    /// Start opening. Returns the timer for the `show` step.
    pub fn open(&mut self) -> Option<Action> {
        if matches!(self.state, PanelState::Open | PanelState::Opening) {
            return None;
        }
        self.panel.remove_class(&self.hidden_class);
        self.state = PanelState::Opening;
        Some(self.schedule(PanelStep::Show, self.open_delay_ms))
    }

    /// Start closing. Returns the fallback timer for the `hidden` step.
    pub fn close(&mut self) -> Option<Action> {
        if matches!(self.state, PanelState::Closed | PanelState::Closing) {
            return None;
        }
        self.panel.remove_class(&self.show_class);
        self.state = PanelState::Closing;
        Some(self.schedule(PanelStep::Hide, self.close_delay_ms))
    }

    /// A scheduled step fired.
    pub fn on_timer(&mut self, step: PanelStep, generation: u64) {
        if generation != self.generation {
            log::trace!("menu: dropping stale {step:?} step (gen {generation}, now {})", self.generation);
            return;
        }
        match (step, self.state) {
            (PanelStep::Show, PanelState::Opening) => {
                self.panel.add_class(&self.show_class);
                self.state = PanelState::Open;
            }
            (PanelStep::Hide, PanelState::Closing) => self.finish_close(),
            _ => {}
        }
    }

    /// The panel's slide transition ended.
    pub fn on_transition_end(&mut self) {
        if self.state == PanelState::Closing {
            self.finish_close();
        }
    }

    fn finish_close(&mut self) {
        self.panel.add_class(&self.hidden_class);
        self.state = PanelState::Closed;
    }

    fn schedule(&mut self, step: PanelStep, delay_ms: u32) -> Action {
        self.generation += 1;
        Action::Schedule { delay_ms, event: PageEvent::PanelTimer { step, generation: self.generation } }
    }
}
