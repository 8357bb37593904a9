//! Scroll-triggered reveal: marks elements once they scroll into view.
//!
//! Reveal is one-way. Nothing un-reveals an element that scrolls back out.

#[cfg(test)]
#[path = "reveal_test.rs"]
mod reveal_test;

use crate::config::RevealConfig;
use crate::dom::Element;

/// Whether an element whose top edge sits at `top` (viewport coordinates) is
/// in view: at or above `viewport_height / threshold`.
#[must_use]
pub fn is_in_view(top: f64, viewport_height: f64, threshold: f64) -> bool {
    top <= viewport_height / threshold
}

pub struct RevealAnimator<E> {
    elements: Vec<E>,
    revealed_class: String,
    threshold: f64,
}

impl<E: Element> RevealAnimator<E> {
    pub fn new(elements: Vec<E>, config: &RevealConfig) -> Self {
        Self { elements, revealed_class: config.revealed_class.clone(), threshold: config.threshold }
    }

    /// Reveal every tracked element currently in view. Returns how many are in view.
    pub fn tick(&self, viewport_height: f64) -> usize {
        let mut in_view = 0;
        for el in &self.elements {
            if is_in_view(el.bounding_top(), viewport_height, self.threshold) {
                el.add_class(&self.revealed_class);
                in_view += 1;
            }
        }
        in_view
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }
}
