//! Scroll-driven nav highlighting and smooth in-page navigation.
//!
//! Spans are read from live geometry on every call; nothing is cached, so
//! layout changes (images loading, viewport resizes) are picked up for free.

#[cfg(test)]
#[path = "sections_test.rs"]
mod sections_test;

use crate::config::NavConfig;
use crate::dom::{Dom, Element};

/// Vertical extent of one page section, already shifted by the section offset.
#[derive(Clone, Debug, PartialEq)]
pub struct SectionSpan {
    pub id: Option<String>,
    pub top: f64,
    pub height: f64,
}

impl SectionSpan {
    /// Half-open `[top, top + height)`.
    #[must_use]
    pub fn contains(&self, offset: f64) -> bool {
        offset >= self.top && offset < self.top + self.height
    }
}

/// The span containing `offset`. Later spans win when ranges overlap.
#[must_use]
pub fn active_span(spans: &[SectionSpan], offset: f64) -> Option<&SectionSpan> {
    spans.iter().rev().find(|span| span.contains(offset))
}

pub struct SectionHighlighter<E> {
    sections: Vec<E>,
    links: Vec<E>,
    active_class: String,
    section_offset: f64,
}

impl<E: Element> SectionHighlighter<E> {
    pub fn new(sections: Vec<E>, links: Vec<E>, config: &NavConfig) -> Self {
        Self { sections, links, active_class: config.active_class.clone(), section_offset: config.section_offset }
    }

    /// Current spans, computed from live geometry.
    pub fn spans(&self) -> Vec<SectionSpan> {
        self.sections
            .iter()
            .map(|section| SectionSpan {
                id: section.attr("id"),
                top: section.offset_top() - self.section_offset,
                height: section.client_height(),
            })
            .collect()
    }

    /// Mark the nav link for the section under `scroll_y` as active and clear
    /// the rest. Returns the active section id, if any link was marked.
    pub fn update(&self, scroll_y: f64) -> Option<String> {
        let spans = self.spans();
        let current = active_span(&spans, scroll_y).and_then(|span| span.id.clone());
        let target = current.as_ref().map(|id| format!("#{id}"));

        let mut marked = false;
        for link in &self.links {
            link.remove_class(&self.active_class);
            if target.is_some() && link.attr("href") == target {
                link.add_class(&self.active_class);
                marked = true;
            }
        }
        if marked { current } else { None }
    }
}

/// Where a click on an in-page anchor should scroll to.
///
/// `None` for a bare `#`, for hrefs that are not fragments, and for fragments
/// naming no element.
pub fn scroll_target<D: Dom>(dom: &D, href: &str, scroll_offset: f64) -> Option<f64> {
    let id = href.strip_prefix('#').filter(|id| !id.is_empty())?;
    let target = dom.element_by_id(id)?;
    Some(target.offset_top() - scroll_offset)
}
