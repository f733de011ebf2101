//! The empty page scaffold.
//!
//! Builds the fixed document structure the section renderers populate:
//! every section container exists up front with a stable id or class, so
//! population is pure "find container, fill children".

use crate::dom::{Document, Element};

/// Builds the empty page document.
#[must_use]
pub fn scaffold() -> Document {
    let mut doc = Document::new();

    let head = doc.head_mut();
    head.append_child(Element::new("meta").with_attr("charset", "UTF-8"));
    head.append_child(
        Element::new("meta")
            .with_attr("name", "viewport")
            .with_attr("content", "width=device-width, initial-scale=1.0"),
    );
    head.append_child(Element::new("title").with_id("page-title").with_text("Portfolio"));

    let body = doc.body_mut();
    body.append_child(navbar());
    body.append_child(hero_section());
    body.append_child(skills_marquee());
    body.append_child(about_section());
    body.append_child(technical_skills_section());
    body.append_child(experience_section());
    body.append_child(projects_section());
    body.append_child(videos_section());
    body.append_child(gallery_section());
    body.append_child(references_section());
    body.append_child(contacts_section());

    doc
}

fn navbar() -> Element {
    Element::new("nav")
        .with_class("navbar")
        .with_child(Element::new("div").with_id("nav-logo").with_class("nav-logo"))
        .with_child(Element::new("ul").with_id("nav-menu").with_class("nav-menu"))
        .with_child(
            Element::new("div")
                .with_id("theme-toggle")
                .with_class("theme-toggle"),
        )
        .with_child(
            Element::new("button")
                .with_id("mobile-menu-toggle")
                .with_class("mobile-menu-toggle"),
        )
}

fn hero_section() -> Element {
    Element::new("section")
        .with_id("home")
        .with_class("hero")
        .with_child(
            Element::new("div")
                .with_class("hero-text")
                .with_child(Element::new("p").with_class("hero-greeting"))
                .with_child(Element::new("h1").with_class("hero-title"))
                .with_child(Element::new("div").with_class("hero-buttons")),
        )
        .with_child(
            Element::new("div")
                .with_class("hero-image")
                .with_child(Element::new("img").with_class("profile-img")),
        )
}

fn skills_marquee() -> Element {
    Element::new("section")
        .with_id("skills")
        .with_class("skills")
        .with_child(Element::new("div").with_class("skills-scroll"))
}

fn about_section() -> Element {
    Element::new("section")
        .with_id("about")
        .with_class("about")
        .with_child(Element::new("h2").with_class("about-title"))
        .with_child(Element::new("p").with_class("about-description"))
        .with_child(Element::new("div").with_class("services"))
        .with_child(Element::new("div").with_class("about-stats"))
}

fn technical_skills_section() -> Element {
    Element::new("section")
        .with_id("technical-skills")
        .with_class("technical-skills")
        .with_child(Element::new("h2").with_class("technical-skills-title"))
        .with_child(Element::new("p").with_class("technical-skills-subtitle"))
        .with_child(Element::new("div").with_class("technical-skills-grid"))
}

fn experience_section() -> Element {
    Element::new("section")
        .with_id("experience")
        .with_class("experience")
        .with_child(Element::new("h2").with_class("experience-title"))
        .with_child(Element::new("div").with_class("experience-timeline"))
}

fn projects_section() -> Element {
    Element::new("section")
        .with_id("projects")
        .with_class("projects")
        .with_child(Element::new("h2").with_class("projects-title"))
        .with_child(Element::new("div").with_class("projects-grid"))
}

fn videos_section() -> Element {
    Element::new("section")
        .with_id("videos")
        .with_class("video-links")
        .with_child(Element::new("h2").with_class("video-links-title"))
        .with_child(Element::new("div").with_class("video-links-grid"))
}

fn gallery_section() -> Element {
    Element::new("section")
        .with_id("gallery")
        .with_class("gallery")
        .with_child(Element::new("div").with_class("gallery-scroll"))
        .with_child(Element::new("div").with_class("gallery-dots"))
}

fn references_section() -> Element {
    Element::new("section")
        .with_id("references")
        .with_class("references")
        .with_child(Element::new("h2").with_class("references-title"))
        .with_child(Element::new("div").with_id("references-grid"))
}

fn contacts_section() -> Element {
    Element::new("section")
        .with_id("contacts")
        .with_class("contacts")
        .with_child(Element::new("h2").with_class("contact-title"))
        .with_child(Element::new("p").with_class("contact-subtitle"))
        .with_child(Element::new("div").with_class("contact-items"))
        .with_child(Element::new("div").with_class("social-links"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scaffold_has_all_containers() {
        let doc = scaffold();
        for id in [
            "page-title",
            "nav-logo",
            "nav-menu",
            "theme-toggle",
            "home",
            "skills",
            "about",
            "technical-skills",
            "experience",
            "projects",
            "videos",
            "references",
            "references-grid",
            "contacts",
        ] {
            assert!(doc.find(id).is_some(), "missing #{id}");
        }
        for class in [
            "hero-greeting",
            "hero-title",
            "profile-img",
            "skills-scroll",
            "about-description",
            "services",
            "about-stats",
            "technical-skills-grid",
            "experience-timeline",
            "projects-grid",
            "video-links-grid",
            "gallery-scroll",
            "contact-items",
            "social-links",
        ] {
            assert!(doc.find_class(class).is_some(), "missing .{class}");
        }
    }

    #[test]
    fn test_scaffold_containers_start_empty() {
        let doc = scaffold();
        assert!(doc.find("nav-menu").unwrap().children().is_empty());
        assert!(doc.find_class("projects-grid").unwrap().children().is_empty());
        assert!(doc.find("references-grid").unwrap().children().is_empty());
    }
}
