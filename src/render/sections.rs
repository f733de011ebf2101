//! Section renderers.
//!
//! One function per config section. Shared contract: if the section is
//! absent or disabled, or its container is missing from the document, the
//! function silently does nothing. Re-invoking a renderer clears the
//! container before repopulating, so renders are idempotent. Missing
//! optional fields render as empty strings.

use crate::config::{
    AboutConfig, ContactsConfig, ExperienceConfig, GalleryConfig, HeroButton, HeroButtons,
    NavigationConfig, PersonalConfig, ProjectsConfig, ReferencesConfig, SkillsConfig,
    TechnicalSkillsConfig, ThemeConfig, Video, VideoLinksConfig,
};
use crate::dom::{Document, Element};

/// Sets the page title: explicit `pageTitle`, or "{name} - {title}".
pub fn populate_page_title(doc: &mut Document, personal: Option<&PersonalConfig>) {
    let Some(personal) = personal else { return };
    let Some(title_el) = doc.find_mut("page-title") else {
        return;
    };

    if let Some(page_title) = &personal.page_title {
        title_el.set_text(page_title);
    } else if let (Some(name), Some(title)) = (&personal.name, &personal.title) {
        title_el.set_text(&format!("{name} - {title}"));
    }
}

/// Replaces the favicon link based on `pageLogo`: image paths become an icon
/// link, anything else is treated as an emoji and inlined as an SVG data URL.
pub fn populate_favicon(doc: &mut Document, personal: Option<&PersonalConfig>) {
    let Some(logo) = personal.and_then(|p| p.page_logo.as_ref()) else {
        return;
    };

    let head = doc.head_mut();
    head.children_mut().retain(|el| el.attr("rel") != Some("icon"));

    let favicon = if is_image_ref(logo) {
        Element::new("link")
            .with_attr("rel", "icon")
            .with_attr("type", "image/x-icon")
            .with_attr("href", logo)
    } else {
        let svg = format!(
            "<svg xmlns='http://www.w3.org/2000/svg' viewBox='0 0 100 100'><text y='.9em' font-size='90'>{logo}</text></svg>"
        );
        Element::new("link")
            .with_attr("rel", "icon")
            .with_attr("type", "image/svg+xml")
            .with_attr("href", &format!("data:image/svg+xml,{}", encode_uri_component(&svg)))
    };
    head.append_child(favicon);
}

/// Fills the nav logo: `personal.pageLogo` (image or text), falling back to
/// `navigation.logo`.
pub fn populate_nav_logo(
    doc: &mut Document,
    personal: Option<&PersonalConfig>,
    navigation: Option<&NavigationConfig>,
) {
    let Some(logo_el) = doc.find_mut("nav-logo") else {
        return;
    };

    if let Some(logo) = personal.and_then(|p| p.page_logo.as_ref()) {
        logo_el.clear_children();
        if is_image_ref(logo) {
            logo_el.set_text("");
            logo_el.append_child(
                Element::new("img")
                    .with_class("nav-logo-image")
                    .with_attr("src", logo)
                    .with_attr("alt", "Logo"),
            );
        } else {
            logo_el.set_text(logo);
        }
    } else if let Some(logo) = navigation.and_then(|n| n.logo.as_ref()) {
        logo_el.clear_children();
        logo_el.set_text(logo);
    }
}

/// Fills the navigation menu: one `li > a.nav-link` per entry, in order.
pub fn populate_nav_menu(doc: &mut Document, navigation: Option<&NavigationConfig>) {
    let Some(navigation) = navigation else { return };
    let Some(menu) = doc.find_mut("nav-menu") else {
        return;
    };

    menu.clear_children();
    for item in &navigation.menu_items {
        menu.append_child(
            Element::new("li").with_child(
                Element::new("a")
                    .with_class("nav-link")
                    .with_attr("href", &item.link)
                    .with_text(&item.name),
            ),
        );
    }
}

/// Fills the theme selector: one button per mode, tagged with its key and
/// titled with its display name.
pub fn populate_theme_toggle(doc: &mut Document, modes: &[(&str, &str)]) {
    let Some(toggle) = doc.find_mut("theme-toggle") else {
        return;
    };

    toggle.clear_children();
    for (key, display_name) in modes {
        toggle.append_child(
            Element::new("button")
                .with_class("theme-btn")
                .with_attr("data-theme", key)
                .with_attr("title", display_name)
                .with_child(Element::new("span")),
        );
    }
}

/// Fills the hero: greeting, composed title, profile image.
pub fn populate_hero(doc: &mut Document, personal: Option<&PersonalConfig>) {
    let Some(personal) = personal else { return };

    if let Some(greeting) = &personal.greeting {
        if let Some(el) = doc.find_class_mut("hero-greeting") {
            el.set_text(greeting);
        }
    }

    if let (Some(name), Some(title)) = (&personal.name, &personal.title) {
        if let Some(el) = doc.find_class_mut("hero-title") {
            let prefix = personal.hero_title_prefix.as_deref().unwrap_or("I'm");
            el.set_text(prefix);
            el.clear_children();
            el.append_child(Element::new("span").with_class("highlight").with_text(name));
            el.append_child(Element::new("br"));
            el.append_child(Element::new("span").with_class("hero-role").with_text(title));
        }
    }

    if let Some(image) = &personal.profile_image {
        if let Some(img) = doc.find_class_mut("profile-img") {
            img.set_attr("src", image);
            img.set_attr("alt", personal.name.as_deref().unwrap_or("Profile"));
        }
    }
}

/// Fills the hero call-to-action buttons; disabled buttons are omitted.
pub fn populate_hero_buttons(doc: &mut Document, buttons: Option<&HeroButtons>) {
    let Some(buttons) = buttons else { return };
    let Some(container) = doc.find_class_mut("hero-buttons") else {
        return;
    };

    container.clear_children();
    let entries: [(&str, Option<&HeroButton>); 2] = [
        ("btn-primary", buttons.primary.as_ref()),
        ("btn-secondary", buttons.secondary.as_ref()),
    ];
    for (class, button) in entries {
        let Some(button) = button.filter(|b| b.enabled) else {
            continue;
        };
        let mut el = Element::new("a")
            .with_class("btn")
            .with_class(class)
            .with_text(&button.text)
            .with_attr("href", &button.link);
        if button.link != "#" {
            el.set_attr("target", "_blank");
        }
        container.append_child(el);
    }
}

/// Fills the scrolling skills marquee: one item per label, in order.
pub fn populate_skills_marquee(doc: &mut Document, skills: Option<&SkillsConfig>) {
    let Some(skills) = skills.filter(|s| s.enabled) else {
        return;
    };
    let Some(strip) = doc.find_class_mut("skills-scroll") else {
        return;
    };

    strip.clear_children();
    for skill in &skills.list {
        strip.append_child(Element::new("div").with_class("skill-item").with_text(skill));
    }
}

/// Id of the injected marquee pacing style element.
const MARQUEE_STYLE_ID: &str = "skills-marquee-style";

/// Injects the marquee pacing rule derived from `animations.scrollSpeed`.
/// Re-running replaces the previous rule.
pub fn apply_marquee_speed(doc: &mut Document, theme: Option<&ThemeConfig>) {
    let Some(theme) = theme else { return };
    let speed = &theme.animations.scroll_speed;
    if speed.is_empty() {
        return;
    }

    let head = doc.head_mut();
    head.children_mut()
        .retain(|el| el.id() != Some(MARQUEE_STYLE_ID));
    head.append_child(
        Element::new("style")
            .with_id(MARQUEE_STYLE_ID)
            .with_text(&format!(
                ".skills-scroll {{ animation: scroll {speed} linear infinite; }}"
            )),
    );
}

/// Fills the technical skills grid: one category card per entry.
pub fn populate_technical_skills(doc: &mut Document, section: Option<&TechnicalSkillsConfig>) {
    let Some(section) = section.filter(|s| s.enabled) else {
        return;
    };

    if let Some(title) = &section.title {
        if let Some(el) = doc.find_class_mut("technical-skills-title") {
            el.set_text(title);
        }
    }
    if let Some(subtitle) = &section.subtitle {
        if let Some(el) = doc.find_class_mut("technical-skills-subtitle") {
            el.set_text(subtitle);
        }
    }

    let Some(grid) = doc.find_class_mut("technical-skills-grid") else {
        return;
    };

    grid.clear_children();
    for (index, category) in section.categories.iter().enumerate() {
        let header = Element::new("div")
            .with_class("skill-category-header")
            .with_child(
                Element::new("div")
                    .with_class("skill-category-icon")
                    .with_text(&category.icon),
            )
            .with_child(
                Element::new("h3")
                    .with_class("skill-category-title")
                    .with_text(&category.title),
            );

        let mut list = Element::new("div").with_class("skill-list");
        for skill in &category.skills {
            list.append_child(Element::new("div").with_class("skill-item").with_text(skill));
        }

        grid.append_child(
            Element::new("div")
                .with_id(&format!("skill-category-{}", index + 1))
                .with_class("skill-category")
                .with_child(header)
                .with_child(list),
        );
    }
}

/// Fills the about section: title, typed description, services, statistics.
pub fn populate_about(doc: &mut Document, about: Option<&AboutConfig>) {
    let Some(about) = about.filter(|a| a.enabled) else {
        return;
    };

    if let Some(title) = &about.title {
        if let Some(el) = doc.find_class_mut("about-title") {
            el.set_text(title);
        }
    }

    // The description is typed in by the bio typewriter; stash the full text
    // and start empty.
    if let Some(el) = doc.find_class_mut("about-description") {
        el.set_text("");
        el.set_attr("data-text", about.description.as_deref().unwrap_or(""));
    }

    if let Some(container) = doc.find_class_mut("services") {
        container.clear_children();
        for (index, service) in about.services.iter().enumerate() {
            container.append_child(
                Element::new("div")
                    .with_id(&format!("service-{}", index + 1))
                    .with_class("service-item")
                    .with_child(
                        Element::new("div")
                            .with_class("service-icon")
                            .with_text(&service.icon),
                    )
                    .with_child(
                        Element::new("div")
                            .with_class("service-text")
                            .with_text(&service.title),
                    ),
            );
        }
    }

    if let Some(container) = doc.find_class_mut("about-stats") {
        container.clear_children();
        for (index, stat) in about.statistics.iter().enumerate() {
            container.append_child(
                Element::new("div")
                    .with_class("stat-item")
                    .with_child(
                        Element::new("span")
                            .with_id(&format!("stat-number-{}", index + 1))
                            .with_class("stat-number")
                            .with_attr("data-target", &stat.number.to_string())
                            .with_text("0"),
                    )
                    .with_child(
                        Element::new("span")
                            .with_class("stat-label")
                            .with_text(&stat.label),
                    ),
            );
        }
    }
}

/// Fills the projects grid: one card per entry, featured cards marked.
pub fn populate_projects(doc: &mut Document, projects: Option<&ProjectsConfig>) {
    let Some(projects) = projects.filter(|p| p.enabled) else {
        return;
    };

    if let Some(title) = &projects.title {
        if let Some(el) = doc.find_class_mut("projects-title") {
            el.set_text(title);
        }
    }

    let Some(grid) = doc.find_class_mut("projects-grid") else {
        return;
    };

    grid.clear_children();
    for project in &projects.list {
        let mut card = Element::new("div").with_class("project-card");
        if project.featured {
            card.add_class("featured");
        }

        let image = Element::new("div")
            .with_class("project-image")
            .with_child(
                Element::new("img")
                    .with_attr("src", &project.image)
                    .with_attr("alt", &project.name),
            )
            .with_child(
                Element::new("div").with_class("project-overlay").with_child(
                    Element::new("a")
                        .with_class("project-link")
                        .with_attr("href", &project.link)
                        .with_attr("target", "_blank")
                        .with_text("View Project"),
                ),
            );

        let mut tech = Element::new("div").with_class("project-technologies");
        for name in &project.technologies {
            tech.append_child(Element::new("span").with_class("tech-tag").with_text(name));
        }

        let content = Element::new("div")
            .with_class("project-content")
            .with_child(
                Element::new("div")
                    .with_class("project-header")
                    .with_child(
                        Element::new("h3")
                            .with_class("project-name")
                            .with_text(&project.name),
                    )
                    .with_child(
                        Element::new("div")
                            .with_class("project-date")
                            .with_text(&project.date),
                    ),
            )
            .with_child(
                Element::new("p")
                    .with_class("project-description")
                    .with_text(&project.description),
            )
            .with_child(tech);

        card.append_child(image);
        card.append_child(content);
        grid.append_child(card);
    }
}

/// Fills the video grid: one card per video, plus the (single) modal.
pub fn populate_videos(doc: &mut Document, videos: Option<&VideoLinksConfig>) {
    let Some(section) = videos.filter(|v| v.enabled) else {
        return;
    };

    if let Some(title) = &section.title {
        if let Some(el) = doc.find_class_mut("video-links-title") {
            el.set_text(title);
        }
    }

    let Some(grid) = doc.find_class_mut("video-links-grid") else {
        return;
    };
    grid.clear_children();
    for (index, video) in section.videos.iter().enumerate() {
        grid.append_child(video_card(video, index + 1));
    }

    ensure_video_modal(doc);
}

fn video_card(video: &Video, index: usize) -> Element {
    let mut container = Element::new("div")
        .with_class("video-container")
        .with_child(
            Element::new("iframe")
                .with_id(&format!("video-{index}"))
                .with_class("video-iframe")
                .with_attr("src", "")
                .with_attr("title", &video.title)
                .with_attr("allowfullscreen", "true"),
        )
        .with_child(
            Element::new("div").with_class("video-overlay").with_child(
                Element::new("button")
                    .with_class("video-play-btn")
                    .with_child(Element::new("span").with_class("play-icon").with_text("▶"))
                    .with_child(
                        Element::new("span")
                            .with_class("platform-badge")
                            .with_text(video.platform.badge()),
                    ),
            ),
        );

    if let Some(thumbnail) = video.thumbnail_url() {
        container.append_child(
            Element::new("img")
                .with_class("video-thumbnail")
                .with_attr("src", &thumbnail)
                .with_attr("alt", &video.title)
                .with_attr("loading", "lazy"),
        );
    }

    Element::new("div")
        .with_class("video-link-card")
        .with_child(container)
        .with_child(
            Element::new("div")
                .with_class("video-content")
                .with_child(Element::new("h3").with_class("video-title").with_text(&video.title))
                .with_child(
                    Element::new("p")
                        .with_class("video-description")
                        .with_text(&video.description),
                ),
        )
}

/// Appends the modal markup once; re-renders reuse the existing modal.
fn ensure_video_modal(doc: &mut Document) {
    if doc.find("video-modal").is_some() {
        return;
    }

    let modal = Element::new("div")
        .with_id("video-modal")
        .with_class("video-modal")
        .with_child(
            Element::new("div")
                .with_id("video-modal-backdrop")
                .with_class("video-modal-backdrop"),
        )
        .with_child(
            Element::new("div")
                .with_class("video-modal-content")
                .with_child(
                    Element::new("button")
                        .with_id("video-modal-close")
                        .with_class("video-modal-close")
                        .with_text("✕"),
                )
                .with_child(
                    Element::new("div")
                        .with_class("video-modal-iframe-container")
                        .with_child(
                            Element::new("iframe")
                                .with_id("video-modal-iframe")
                                .with_class("video-modal-iframe")
                                .with_attr("src", "")
                                .with_attr("allowfullscreen", "true"),
                        ),
                )
                .with_child(
                    Element::new("div")
                        .with_class("video-modal-info")
                        .with_child(Element::new("h3").with_id("video-modal-title"))
                        .with_child(Element::new("p").with_id("video-modal-description")),
                ),
        );

    doc.body_mut().append_child(modal);
}

/// Fills the references grid: one card per referee.
pub fn populate_references(doc: &mut Document, references: Option<&ReferencesConfig>) {
    let Some(references) = references.filter(|r| r.enabled) else {
        return;
    };

    if let Some(title) = &references.title {
        if let Some(el) = doc.find_class_mut("references-title") {
            el.set_text(title);
        }
    }

    let Some(grid) = doc.find_mut("references-grid") else {
        return;
    };

    grid.clear_children();
    for reference in &references.list {
        grid.append_child(
            Element::new("div")
                .with_class("reference-card")
                .with_child(
                    Element::new("div").with_class("reference-image").with_child(
                        Element::new("img")
                            .with_attr("src", &reference.image)
                            .with_attr("alt", &reference.name),
                    ),
                )
                .with_child(
                    Element::new("div")
                        .with_class("reference-content")
                        .with_child(
                            Element::new("h3")
                                .with_class("reference-name")
                                .with_text(&reference.name),
                        )
                        .with_child(
                            Element::new("p")
                                .with_class("reference-title")
                                .with_text(&reference.title),
                        )
                        .with_child(
                            Element::new("p")
                                .with_class("reference-relationship")
                                .with_text(&reference.relationship),
                        )
                        .with_child(
                            Element::new("div")
                                .with_class("reference-contact")
                                .with_child(
                                    Element::new("div")
                                        .with_class("contact-info")
                                        .with_text(&format!("📧 {}", reference.email)),
                                )
                                .with_child(
                                    Element::new("div")
                                        .with_class("contact-info")
                                        .with_text(&format!("📱 {}", reference.phone)),
                                ),
                        ),
                ),
        );
    }
}

/// Fills the experience timeline: one item per position.
pub fn populate_experience(doc: &mut Document, experience: Option<&ExperienceConfig>) {
    let Some(experience) = experience.filter(|e| e.enabled) else {
        return;
    };

    if let Some(title) = &experience.title {
        if let Some(el) = doc.find_class_mut("experience-title") {
            el.set_text(title);
        }
    }

    let Some(timeline) = doc.find_class_mut("experience-timeline") else {
        return;
    };

    timeline.clear_children();
    for (index, position) in experience.positions.iter().enumerate() {
        timeline.append_child(
            Element::new("div")
                .with_id(&format!("experience-{}", index + 1))
                .with_class("experience-item")
                .with_child(
                    Element::new("div")
                        .with_class("experience-header")
                        .with_child(
                            Element::new("h3")
                                .with_class("experience-position")
                                .with_text(&position.title),
                        )
                        .with_child(
                            Element::new("div")
                                .with_class("experience-company")
                                .with_text(&position.company),
                        )
                        .with_child(
                            Element::new("div")
                                .with_class("experience-period")
                                .with_text(&position.period),
                        ),
                )
                .with_child(
                    Element::new("div")
                        .with_class("experience-description")
                        .with_child(Element::new("p").with_text(&position.description)),
                ),
        );
    }
}

/// Known social platform icons; unknown platforms get a generic link icon.
fn social_icon(platform: &str) -> &'static str {
    match platform {
        "github" => "🐙",
        "linkedin" => "💼",
        "twitter" => "🐦",
        "instagram" => "📷",
        _ => "🔗",
    }
}

/// Fills contact info and social links.
pub fn populate_contact(doc: &mut Document, contacts: Option<&ContactsConfig>) {
    let Some(contacts) = contacts.filter(|c| c.enabled) else {
        return;
    };

    if let Some(title) = &contacts.title {
        if let Some(el) = doc.find_class_mut("contact-title") {
            el.set_text(title);
        }
    }
    if let Some(subtitle) = &contacts.subtitle {
        if let Some(el) = doc.find_class_mut("contact-subtitle") {
            el.set_text(subtitle);
        }
    }

    if let Some(items) = doc.find_class_mut("contact-items") {
        items.clear_children();
        let rows = [
            ("📧", "Email", contacts.email.as_deref()),
            ("📱", "Phone", contacts.phone.as_deref()),
            ("📍", "Location", contacts.location.as_deref()),
        ];
        for (icon, label, value) in rows {
            items.append_child(
                Element::new("div")
                    .with_class("contact-item")
                    .with_child(Element::new("div").with_class("contact-icon").with_text(icon))
                    .with_child(
                        Element::new("div")
                            .with_class("contact-label")
                            .with_text(label),
                    )
                    .with_child(
                        Element::new("div")
                            .with_class("contact-value")
                            .with_text(value.unwrap_or("")),
                    ),
            );
        }
    }

    if let Some(links) = doc.find_class_mut("social-links") {
        links.clear_children();
        for (platform, url) in &contacts.social {
            if url.is_empty() || url == "#" {
                continue;
            }
            links.append_child(
                Element::new("a")
                    .with_class("social-link")
                    .with_attr("href", url)
                    .with_attr("target", "_blank")
                    .with_child(
                        Element::new("div")
                            .with_class("social-icon")
                            .with_text(social_icon(platform)),
                    )
                    .with_child(Element::new("span").with_text(&capitalize(platform))),
            );
        }
    }
}

/// Fills the gallery: slides and dots, first of each active.
pub fn populate_gallery(doc: &mut Document, gallery: Option<&GalleryConfig>) {
    let Some(gallery) = gallery.filter(|g| g.enabled) else {
        return;
    };

    if let Some(scroll) = doc.find_class_mut("gallery-scroll") {
        scroll.clear_children();
        for (index, image) in gallery.images.iter().enumerate() {
            let mut item = Element::new("div")
                .with_class("gallery-item")
                .with_child(
                    Element::new("img")
                        .with_attr("src", &image.src)
                        .with_attr("alt", &image.alt),
                )
                .with_child(
                    Element::new("div")
                        .with_class("gallery-caption")
                        .with_text(&image.caption),
                );
            if index == 0 {
                item.add_class("active");
            }
            scroll.append_child(item);
        }
    }

    if let Some(dots) = doc.find_class_mut("gallery-dots") {
        dots.clear_children();
        for index in 0..gallery.images.len() {
            let mut dot = Element::new("span").with_class("dot");
            if index == 0 {
                dot.add_class("active");
            }
            dots.append_child(dot);
        }
    }
}

fn is_image_ref(logo: &str) -> bool {
    logo.starts_with('/') || logo.starts_with("http")
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

/// Percent-encodes a string the way `encodeURIComponent` does.
fn encode_uri_component(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for byte in input.bytes() {
        match byte {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'_' | b'.' | b'!' | b'~' | b'*'
            | b'\'' | b'(' | b')' => out.push(byte as char),
            _ => {
                out.push('%');
                out.push_str(&format!("{byte:02X}"));
            }
        }
    }
    out
}
