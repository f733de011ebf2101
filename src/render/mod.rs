//! Config-driven page rendering.
//!
//! `render_page` builds the scaffold and runs every section renderer over
//! it, producing the complete document. Each section renderer is
//! independently callable and idempotent; see [`sections`].

pub mod scaffold;
pub mod sections;

use crate::config::Config;
use crate::dom::Document;
use crate::theme::ThemeName;

pub use scaffold::scaffold;

/// Populates every enabled section of an existing document from the
/// configuration.
pub fn populate_all(doc: &mut Document, config: &Config) {
    sections::populate_page_title(doc, config.personal.as_ref());
    sections::populate_favicon(doc, config.personal.as_ref());
    sections::populate_nav_logo(doc, config.personal.as_ref(), config.navigation.as_ref());
    sections::populate_nav_menu(doc, config.navigation.as_ref());

    // One selector control per configured mode, in the fixed set order.
    let modes: Vec<(&str, &str)> = ThemeName::ALL
        .into_iter()
        .filter_map(|name| {
            let entry = config.theme.as_ref()?.modes.get(&name)?;
            Some((name.key(), entry.name.as_str()))
        })
        .collect();
    sections::populate_theme_toggle(doc, &modes);

    sections::populate_hero(doc, config.personal.as_ref());
    sections::populate_hero_buttons(doc, config.hero_buttons.as_ref());
    sections::populate_skills_marquee(doc, config.skills.as_ref());
    sections::apply_marquee_speed(doc, config.theme.as_ref());
    sections::populate_about(doc, config.about.as_ref());
    sections::populate_technical_skills(doc, config.technical_skills.as_ref());
    sections::populate_experience(doc, config.experience.as_ref());
    sections::populate_projects(doc, config.projects.as_ref());
    sections::populate_videos(doc, config.video_links.as_ref());
    sections::populate_gallery(doc, config.gallery.as_ref());
    sections::populate_references(doc, config.references.as_ref());
    sections::populate_contact(doc, config.contacts.as_ref());
}

/// Renders the full page document from a configuration.
#[must_use]
pub fn render_page(config: &Config) -> Document {
    let mut doc = scaffold();
    populate_all(&mut doc, config);
    doc
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_page_from_fallback() {
        let config = Config::fallback();
        let doc = render_page(&config);

        assert_eq!(doc.find("page-title").unwrap().text(), "Alex Moreno - Portfolio");
        assert!(!doc.find("nav-menu").unwrap().children().is_empty());
        assert!(doc.find("video-modal").is_some());
    }

    #[test]
    fn test_render_page_empty_config_is_bare() {
        let config = Config::default();
        let doc = render_page(&config);

        // Nothing to render: containers exist but stay empty.
        assert!(doc.find("nav-menu").unwrap().children().is_empty());
        assert!(doc.find_class("projects-grid").unwrap().children().is_empty());
        assert_eq!(doc.find("page-title").unwrap().text(), "Portfolio");
    }

    #[test]
    fn test_render_page_to_html_round_trip() {
        let config = Config::fallback();
        let html = render_page(&config).to_html();

        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("class=\"hero-greeting\""));
        assert!(html.contains("Alex Moreno"));
    }
}
