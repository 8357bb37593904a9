//! Page configuration: the DOM contract and the handful of tunables.
//!
//! Every field has a default matching the stock portfolio markup, so an empty
//! JSON object (or no config at all) yields a working page. The browser host
//! reads overrides from an inline `<script type="application/json">` element.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use serde::Deserialize;

use crate::error::ConfigError;

pub const DEFAULT_STORAGE_KEY: &str = "theme";
pub const DEFAULT_REVEAL_THRESHOLD: f64 = 1.2;
pub const DEFAULT_SECTION_OFFSET: f64 = 100.0;
pub const DEFAULT_SCROLL_OFFSET: f64 = 80.0;
pub const DEFAULT_MENU_OPEN_DELAY_MS: u32 = 10;
pub const DEFAULT_MENU_CLOSE_DELAY_MS: u32 = 300;

/// Id of the inline JSON element the browser host reads config from.
pub const CONFIG_ELEMENT_ID: &str = "page-config";

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct PageConfig {
    pub theme: ThemeConfig,
    pub menu: MenuConfig,
    pub reveal: RevealConfig,
    pub nav: NavConfig,
    pub lightbox: LightboxConfig,
    pub contact: ContactConfig,
    /// Console log level: `error`, `warn`, `info`, `debug` or `trace`.
    pub log_level: String,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            theme: ThemeConfig::default(),
            menu: MenuConfig::default(),
            reveal: RevealConfig::default(),
            nav: NavConfig::default(),
            lightbox: LightboxConfig::default(),
            contact: ContactConfig::default(),
            log_level: "info".into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ThemeConfig {
    pub toggle_id: String,
    pub dark_class: String,
    pub storage_key: String,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self { toggle_id: "toggle".into(), dark_class: "dark".into(), storage_key: DEFAULT_STORAGE_KEY.into() }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct MenuConfig {
    pub panel_id: String,
    pub open_button_id: String,
    pub close_button_id: String,
    pub hidden_class: String,
    pub show_class: String,
    pub open_delay_ms: u32,
    pub close_delay_ms: u32,
}

impl Default for MenuConfig {
    fn default() -> Self {
        Self {
            panel_id: "mobile-menu".into(),
            open_button_id: "mobile-menu-btn".into(),
            close_button_id: "close-menu".into(),
            hidden_class: "hidden".into(),
            show_class: "show".into(),
            open_delay_ms: DEFAULT_MENU_OPEN_DELAY_MS,
            close_delay_ms: DEFAULT_MENU_CLOSE_DELAY_MS,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct RevealConfig {
    pub selector: String,
    pub revealed_class: String,
    /// Viewport height is divided by this; an element is in view once its
    /// top edge is at or above the quotient.
    pub threshold: f64,
}

impl Default for RevealConfig {
    fn default() -> Self {
        Self { selector: ".scroll-animate".into(), revealed_class: "show".into(), threshold: DEFAULT_REVEAL_THRESHOLD }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct NavConfig {
    pub section_selector: String,
    pub link_selector: String,
    pub anchor_selector: String,
    pub active_class: String,
    /// Subtracted from each section's offset top when matching the scroll offset.
    pub section_offset: f64,
    /// Subtracted from the target's offset top when smooth-scrolling to it.
    pub scroll_offset: f64,
}

impl Default for NavConfig {
    fn default() -> Self {
        Self {
            section_selector: "section".into(),
            link_selector: ".nav-link".into(),
            anchor_selector: "a[href^=\"#\"]".into(),
            active_class: "active".into(),
            section_offset: DEFAULT_SECTION_OFFSET,
            scroll_offset: DEFAULT_SCROLL_OFFSET,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct LightboxConfig {
    pub image_selector: String,
    pub modal_id: String,
    pub image_id: String,
    pub close_id: String,
    pub prev_id: String,
    pub next_id: String,
    pub counter_id: String,
    pub active_class: String,
}

impl Default for LightboxConfig {
    fn default() -> Self {
        Self {
            image_selector: ".project-image".into(),
            modal_id: "lightbox-modal".into(),
            image_id: "lightbox-image".into(),
            close_id: "lightbox-close".into(),
            prev_id: "lightbox-prev".into(),
            next_id: "lightbox-next".into(),
            counter_id: "lightbox-counter".into(),
            active_class: "active".into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ContactConfig {
    pub form_id: String,
    pub name_id: String,
    pub email_id: String,
    pub message_id: String,
}

impl Default for ContactConfig {
    fn default() -> Self {
        Self {
            form_id: "contact-form".into(),
            name_id: "name".into(),
            email_id: "email".into(),
            message_id: "message".into(),
        }
    }
}

impl PageConfig {
    /// Parse config JSON and validate it. Missing fields take their defaults.
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject values that would make a controller misbehave.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.reveal.threshold.is_finite() || self.reveal.threshold <= 0.0 {
            return Err(ConfigError::Invalid(format!(
                "reveal.threshold must be a positive number, got {}",
                self.reveal.threshold
            )));
        }
        if !self.nav.section_offset.is_finite() || !self.nav.scroll_offset.is_finite() {
            return Err(ConfigError::Invalid("nav offsets must be finite".into()));
        }
        if parse_level(&self.log_level).is_err() {
            return Err(ConfigError::Invalid(format!("unknown log_level '{}'", self.log_level)));
        }
        if self.theme.storage_key.trim().is_empty() {
            return Err(ConfigError::Invalid("theme.storage_key must not be empty".into()));
        }
        for (field, id) in self.required_ids() {
            if id.trim().is_empty() {
                return Err(ConfigError::Invalid(format!("{field} must not be empty")));
            }
        }
        Ok(())
    }

    /// Configured console log level.
    #[must_use]
    pub fn log_level(&self) -> log::Level {
        parse_level(&self.log_level).unwrap_or(log::Level::Info)
    }

    /// Every element id the page cannot work without, paired with its config field name.
    #[must_use]
    pub fn required_ids(&self) -> [(&'static str, &str); 14] {
        [
            ("theme.toggle_id", &self.theme.toggle_id),
            ("menu.panel_id", &self.menu.panel_id),
            ("menu.open_button_id", &self.menu.open_button_id),
            ("menu.close_button_id", &self.menu.close_button_id),
            ("lightbox.modal_id", &self.lightbox.modal_id),
            ("lightbox.image_id", &self.lightbox.image_id),
            ("lightbox.close_id", &self.lightbox.close_id),
            ("lightbox.prev_id", &self.lightbox.prev_id),
            ("lightbox.next_id", &self.lightbox.next_id),
            ("lightbox.counter_id", &self.lightbox.counter_id),
            ("contact.form_id", &self.contact.form_id),
            ("contact.name_id", &self.contact.name_id),
            ("contact.email_id", &self.contact.email_id),
            ("contact.message_id", &self.contact.message_id),
        ]
    }
}

fn parse_level(raw: &str) -> Result<log::Level, log::ParseLevelError> {
    raw.trim().parse::<log::Level>()
}
