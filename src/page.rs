//! Page interaction helpers: scroll-driven nav highlighting and contact
//! form validation.

use regex::Regex;

use crate::dom::Document;

/// Pixels added to the scroll position when probing for the active section.
pub const SCROLL_PROBE_OFFSET: u32 = 100;

/// Vertical placement of one page section, as reported by layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SectionMetrics<'a> {
    /// Section element id (matches the nav link anchors).
    pub id: &'a str,
    /// Offset of the section top from the document top.
    pub top: u32,
    /// Section height.
    pub height: u32,
}

/// Returns the id of the section under the scroll probe, if any.
#[must_use]
pub fn active_section<'a>(sections: &[SectionMetrics<'a>], scroll_y: u32) -> Option<&'a str> {
    let probe = scroll_y + SCROLL_PROBE_OFFSET;
    sections
        .iter()
        .find(|s| probe >= s.top && probe < s.top + s.height)
        .map(|s| s.id)
}

/// Marks the nav link targeting `section_id` active, and only that one.
pub fn update_active_nav(doc: &mut Document, section_id: &str) {
    let target = format!("#{section_id}");
    doc.for_each_class_mut("nav-link", &mut |link| {
        if link.attr("href") == Some(target.as_str()) {
            link.add_class("active");
        } else {
            link.remove_class("active");
        }
    });
}

/// Applies the scroll position: computes the active section and updates the
/// nav links. Scroll positions outside every section leave the links as
/// they are.
pub fn on_scroll(doc: &mut Document, sections: &[SectionMetrics<'_>], scroll_y: u32) {
    if let Some(id) = active_section(sections, scroll_y) {
        let id = id.to_string();
        update_active_nav(doc, &id);
    }
}

/// A nav link click: scrolls to the section (browser concern) and marks the
/// clicked link active.
pub fn on_nav_click(doc: &mut Document, href: &str) {
    let section_id = href.trim_start_matches('#');
    update_active_nav(doc, section_id);
    // Selecting a destination also dismisses the mobile menu.
    close_mobile_menu(doc);
}

/// Toggles the mobile menu open/closed.
pub fn toggle_mobile_menu(doc: &mut Document) {
    for id in ["mobile-menu-toggle", "nav-menu"] {
        if let Some(el) = doc.find_mut(id) {
            if el.has_class("active") {
                el.remove_class("active");
            } else {
                el.add_class("active");
            }
        }
    }
}

/// Closes the mobile menu; closing an already-closed menu is a no-op.
pub fn close_mobile_menu(doc: &mut Document) {
    for id in ["mobile-menu-toggle", "nav-menu"] {
        if let Some(el) = doc.find_mut(id) {
            el.remove_class("active");
        }
    }
}

/// A submitted contact form.
#[derive(Debug, Clone, Default)]
pub struct ContactForm {
    /// Sender name.
    pub name: String,
    /// Sender email address.
    pub email: String,
    /// Message subject.
    pub subject: String,
    /// Message body.
    pub message: String,
}

/// Why a contact form submission was rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContactFormError {
    /// At least one field is empty.
    MissingFields,
    /// The email address does not look like `user@host.tld`.
    InvalidEmail,
}

impl std::fmt::Display for ContactFormError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ContactFormError::MissingFields => write!(f, "Please fill in all fields"),
            ContactFormError::InvalidEmail => write!(f, "Please enter a valid email address"),
        }
    }
}

impl ContactForm {
    /// Validates the submission: all fields required, email shape checked.
    pub fn validate(&self) -> Result<(), ContactFormError> {
        if self.name.trim().is_empty()
            || self.email.trim().is_empty()
            || self.subject.trim().is_empty()
            || self.message.trim().is_empty()
        {
            return Err(ContactFormError::MissingFields);
        }

        let email_pattern = Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap();
        if !email_pattern.is_match(&self.email) {
            return Err(ContactFormError::InvalidEmail);
        }

        Ok(())
    }
}
