//! Integration tests for the section renderers.
//!
//! The shared contract under test: N entries render exactly N children in
//! input order, re-rendering is idempotent, and disabled or missing sections
//! leave their container untouched.

use folio::config::Config;
use folio::dom::Document;
use folio::render::{populate_all, render_page, scaffold, sections};

/// A configuration exercising every list section with known counts.
fn fixture_config() -> Config {
    json5::from_str(
        r##"{
        personal: {
            name: "Ada Wong",
            title: "Systems Engineer",
            greeting: "Hello.",
            pageLogo: "/images/logo.jpg",
            profileImage: "/images/profile.jpg",
        },
        navigation: {
            logo: "*",
            menuItems: [
                { name: "Home", link: "#home" },
                { name: "About", link: "#about" },
                { name: "Contacts", link: "#contacts" },
            ],
        },
        skills: {
            list: ["Rust", "Python", "Linux", "MQTT"],
        },
        technicalSkills: {
            title: "Skills",
            subtitle: "What I do",
            categories: [
                { title: "Code", icon: "K", skills: ["Rust", "Python"] },
                { title: "Ops", icon: "O", skills: ["Linux"] },
            ],
        },
        about: {
            title: "About",
            description: "A short bio.",
            services: [
                { icon: "a", title: "One", description: "first" },
                { icon: "b", title: "Two", description: "second" },
                { icon: "c", title: "Three", description: "third" },
            ],
            statistics: [
                { number: 12, suffix: "+", label: "Projects" },
                { number: 95, suffix: "%", label: "Satisfaction" },
            ],
        },
        projects: {
            title: "Work",
            list: [
                { name: "Alpha", description: "A", image: "/a.png", link: "#",
                  technologies: ["Rust"], featured: true, date: "2023" },
                { name: "Beta", description: "B", image: "/b.png", link: "#",
                  technologies: ["Go", "C"], featured: false, date: "2024" },
            ],
        },
        videoLinks: {
            title: "Videos",
            videos: [
                { platform: "youtube", title: "V1", description: "d1",
                  videoId: "id1", isPortrait: false },
                { platform: "tiktok", title: "V2", description: "d2",
                  videoId: "id2", isPortrait: true },
            ],
        },
        references: {
            title: "References",
            list: [
                { name: "R1", title: "T1", relationship: "Mentor",
                  email: "r1@example.com", phone: "1", image: "/r1.png" },
                { name: "R2", title: "T2", relationship: "Advisor",
                  email: "r2@example.com", phone: "2", image: "/r2.png" },
                { name: "R3", title: "T3", relationship: "Peer",
                  email: "r3@example.com", phone: "3", image: "/r3.png" },
            ],
        },
        experience: {
            title: "Experience",
            positions: [
                { title: "P1", company: "C1", period: "2020", description: "d1" },
                { title: "P2", company: "C2", period: "2021", description: "d2" },
            ],
        },
        contacts: {
            title: "Contact",
            email: "ada@example.com",
            phone: "+1-555",
            location: "Lisbon",
            social: { github: "https://github.com/ada" },
        },
        gallery: {
            images: [
                { src: "/g1.png", alt: "g1", caption: "G1" },
                { src: "/g2.png", alt: "g2", caption: "G2" },
            ],
        },
    }"##,
    )
    .expect("fixture config parses")
}

/// Every list section's container, with its expected child count.
fn expected_counts(doc: &Document, config: &Config) -> Vec<(&'static str, usize, usize)> {
    vec![
        (
            "nav-menu",
            doc.find("nav-menu").unwrap().children().len(),
            config.navigation.as_ref().unwrap().menu_items.len(),
        ),
        (
            "skills-scroll",
            doc.find_class("skills-scroll").unwrap().children().len(),
            config.skills.as_ref().unwrap().list.len(),
        ),
        (
            "technical-skills-grid",
            doc.find_class("technical-skills-grid").unwrap().children().len(),
            config.technical_skills.as_ref().unwrap().categories.len(),
        ),
        (
            "services",
            doc.find_class("services").unwrap().children().len(),
            config.about.as_ref().unwrap().services.len(),
        ),
        (
            "about-stats",
            doc.find_class("about-stats").unwrap().children().len(),
            config.about.as_ref().unwrap().statistics.len(),
        ),
        (
            "projects-grid",
            doc.find_class("projects-grid").unwrap().children().len(),
            config.projects.as_ref().unwrap().list.len(),
        ),
        (
            "video-links-grid",
            doc.find_class("video-links-grid").unwrap().children().len(),
            config.video_links.as_ref().unwrap().videos.len(),
        ),
        (
            "references-grid",
            doc.find("references-grid").unwrap().children().len(),
            config.references.as_ref().unwrap().list.len(),
        ),
        (
            "experience-timeline",
            doc.find_class("experience-timeline").unwrap().children().len(),
            config.experience.as_ref().unwrap().positions.len(),
        ),
        (
            "gallery-scroll",
            doc.find_class("gallery-scroll").unwrap().children().len(),
            config.gallery.as_ref().unwrap().images.len(),
        ),
    ]
}

#[test]
fn every_list_section_renders_exactly_n_children() {
    let config = fixture_config();
    let doc = render_page(&config);

    for (container, actual, expected) in expected_counts(&doc, &config) {
        assert_eq!(actual, expected, "container {container}");
    }
}

#[test]
fn rendering_twice_keeps_n_children() {
    let config = fixture_config();
    let mut doc = render_page(&config);
    populate_all(&mut doc, &config);

    for (container, actual, expected) in expected_counts(&doc, &config) {
        assert_eq!(actual, expected, "container {container} after re-render");
    }
}

#[test]
fn entries_render_in_input_order() {
    let config = fixture_config();
    let doc = render_page(&config);

    let names: Vec<String> = doc
        .query_class("project-name")
        .iter()
        .map(|el| el.text().to_string())
        .collect();
    assert_eq!(names, vec!["Alpha", "Beta"]);

    let positions: Vec<String> = doc
        .query_class("experience-position")
        .iter()
        .map(|el| el.text().to_string())
        .collect();
    assert_eq!(positions, vec!["P1", "P2"]);

    let references: Vec<String> = doc
        .query_class("reference-name")
        .iter()
        .map(|el| el.text().to_string())
        .collect();
    assert_eq!(references, vec!["R1", "R2", "R3"]);
}

#[test]
fn disabled_sections_leave_containers_untouched() {
    let mut config = fixture_config();
    config.projects.as_mut().unwrap().enabled = false;
    config.references.as_mut().unwrap().enabled = false;

    let doc = render_page(&config);
    assert!(doc.find_class("projects-grid").unwrap().children().is_empty());
    assert!(doc.find("references-grid").unwrap().children().is_empty());

    // Other sections still rendered.
    assert!(!doc.find_class("experience-timeline").unwrap().children().is_empty());
}

#[test]
fn missing_sections_leave_containers_untouched() {
    let mut config = fixture_config();
    config.video_links = None;
    config.experience = None;

    let doc = render_page(&config);
    assert!(doc.find_class("video-links-grid").unwrap().children().is_empty());
    assert!(doc.find_class("experience-timeline").unwrap().children().is_empty());
}

#[test]
fn missing_section_preserves_prior_children() {
    // Render once, then re-render with the section gone: the previously
    // rendered children must survive (the renderer never touches the
    // container of a missing section).
    let config = fixture_config();
    let mut doc = render_page(&config);

    let mut without_projects = fixture_config();
    without_projects.projects = None;
    populate_all(&mut doc, &without_projects);

    assert_eq!(
        doc.find_class("projects-grid").unwrap().children().len(),
        config.projects.as_ref().unwrap().list.len()
    );
}

#[test]
fn renderers_tolerate_missing_containers() {
    // A bare document without any scaffold containers: every renderer must
    // silently do nothing.
    let config = fixture_config();
    let mut doc = Document::new();
    populate_all(&mut doc, &config);
    assert!(doc.find("nav-menu").is_none());
}

#[test]
fn missing_optional_fields_render_as_empty() {
    let config: Config = json5::from_str(
        r#"{
        projects: {
            list: [ { name: "Solo" } ],
        },
    }"#,
    )
    .unwrap();

    let mut doc = scaffold();
    sections::populate_projects(&mut doc, config.projects.as_ref());

    let grid = doc.find_class("projects-grid").unwrap();
    assert_eq!(grid.children().len(), 1);
    assert_eq!(
        grid.children()[0].find_class("project-description").unwrap().text(),
        ""
    );
    assert_eq!(
        grid.children()[0].find_class("project-date").unwrap().text(),
        ""
    );
}

#[test]
fn page_title_falls_back_to_name_and_title() {
    let config: Config = json5::from_str(
        r#"{ personal: { name: "Ada Wong", title: "Systems Engineer" } }"#,
    )
    .unwrap();
    let doc = render_page(&config);
    assert_eq!(
        doc.find("page-title").unwrap().text(),
        "Ada Wong - Systems Engineer"
    );
}

#[test]
fn built_html_contains_rendered_sections() {
    let config = fixture_config();
    let html = render_page(&config).to_html();

    assert!(html.contains("class=\"project-card featured\""));
    assert!(html.contains("Ada Wong"));
    assert!(html.contains("data-target=\"95\""));
    assert!(html.contains("id=\"video-modal\""));
}
