//! Contact form stub. Submitting acknowledges the sender and resets the form;
//! nothing leaves the browser.

#[cfg(test)]
#[path = "contact_test.rs"]
mod contact_test;

use crate::dom::Element;
use crate::event::Action;

/// Field values at submit time, unvalidated.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContactMessage {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactMessage {
    #[must_use]
    pub fn acknowledgment(&self) -> String {
        format!("Thank you for your message, {}! I'll get back to you soon.", self.name)
    }
}

pub struct ContactForm<E> {
    name: E,
    email: E,
    message: E,
}

impl<E: Element> ContactForm<E> {
    pub fn new(name: E, email: E, message: E) -> Self {
        Self { name, email, message }
    }

    pub fn read(&self) -> ContactMessage {
        ContactMessage { name: self.name.value(), email: self.email.value(), message: self.message.value() }
    }

    /// Acknowledge and reset.
    pub fn submit(&self) -> Vec<Action> {
        let msg = self.read();
        log::info!("contact: message from {} <{}> ({} chars)", msg.name, msg.email, msg.message.chars().count());
        vec![Action::Alert { message: msg.acknowledgment() }, Action::ResetForm]
    }
}
