//! Full-page flows: render from configuration, then drive the controllers
//! against the rendered document the way page events would.

use folio::animation::{AnimationController, COUNTER_TICK_MS};
use folio::config::Config;
use folio::render::render_page;
use folio::theme::{FilePreferences, MemoryPreferences, ThemeController, ThemeName};
use folio::video::{load_video, Platform, VideoModalController};

fn config() -> Config {
    Config::fallback()
}

#[test]
fn theme_round_trip_on_rendered_page() {
    let config = config();
    let mut doc = render_page(&config);
    let mut themes = ThemeController::new(MemoryPreferences::default(), &config);

    themes
        .select_theme(&mut doc, &config, ThemeName::Cyberpunk)
        .unwrap();
    themes
        .select_theme(&mut doc, &config, ThemeName::Dark)
        .unwrap();

    // Exactly one theme stylesheet link remains, tagged dark.
    let links: Vec<_> = doc
        .head()
        .children()
        .iter()
        .filter(|el| el.attr("data-theme").is_some())
        .collect();
    assert_eq!(links.len(), 1);
    assert_eq!(links[0].attr("data-theme"), Some("dark"));

    // All cyberpunk markers are gone from body, navbar, and hero elements.
    for el in [
        doc.body(),
        doc.find_class("navbar").unwrap(),
        doc.find_class("hero-greeting").unwrap(),
        doc.find_class("hero-title").unwrap(),
    ] {
        assert!(!el.has_class("cyberpunk-active"));
    }

    // The dark palette is applied to the document root.
    assert_eq!(doc.root().style("--bg-color"), Some("#1e1e2f"));
}

#[test]
fn theme_selection_marks_rendered_control_active() {
    let config = config();
    let mut doc = render_page(&config);
    let mut themes = ThemeController::new(MemoryPreferences::default(), &config);

    themes
        .select_theme(&mut doc, &config, ThemeName::Techno)
        .unwrap();

    let active: Vec<_> = doc
        .query_class("theme-btn")
        .into_iter()
        .filter(|btn| btn.has_class("active"))
        .collect();
    assert_eq!(active.len(), 1);
    assert_eq!(active[0].attr("data-theme"), Some("techno"));
}

#[test]
fn theme_selection_persists_across_sessions() {
    let config = config();
    let mut doc = render_page(&config);
    let temp_dir = tempfile::TempDir::new().unwrap();
    let prefs_path = temp_dir.path().join("preferences.toml");

    let mut themes = ThemeController::new(FilePreferences::at(prefs_path.clone()), &config);
    themes
        .select_theme(&mut doc, &config, ThemeName::Light)
        .unwrap();

    // A fresh controller (next startup) picks up the persisted selection.
    let next_session = ThemeController::new(FilePreferences::at(prefs_path), &config);
    assert_eq!(next_session.current(), ThemeName::Light);
}

#[test]
fn video_exclusivity_across_rendered_cards() {
    let config = config();
    let mut doc = render_page(&config);
    let videos = &config.video_links.as_ref().unwrap().videos;

    load_video(&mut doc, videos[0].platform, &videos[0].video_id, "video-1");
    load_video(&mut doc, videos[1].platform, &videos[1].video_id, "video-2");

    let a = doc.find("video-1").unwrap().attr("src").unwrap_or("");
    let b = doc.find("video-2").unwrap().attr("src").unwrap_or("");
    assert_eq!(a, "");
    assert!(b.contains(&videos[1].video_id));
}

#[test]
fn portrait_flag_routes_layout_regardless_of_viewport() {
    let config = config();
    let videos = &config.video_links.as_ref().unwrap().videos;
    let portrait = videos.iter().find(|v| v.is_portrait).unwrap();
    let landscape = videos.iter().find(|v| !v.is_portrait).unwrap();

    for width in [768, 1920] {
        let mut doc = render_page(&config);
        let mut modal = VideoModalController::new();
        modal.open(&mut doc, portrait, width);
        assert!(
            doc.find("video-modal").unwrap().has_class("portrait-mobile"),
            "portrait at width {width}"
        );
    }

    let mut doc = render_page(&config);
    let mut modal = VideoModalController::new();
    modal.open(&mut doc, landscape, 1920);
    assert!(doc.find("video-modal").unwrap().has_class("landscape-desktop"));
    modal.close(&mut doc);
    modal.open(&mut doc, landscape, 768);
    assert!(doc.find("video-modal").unwrap().has_class("landscape-mobile"));
}

#[test]
fn modal_open_then_escape_restores_page() {
    let config = config();
    let mut doc = render_page(&config);
    let videos = &config.video_links.as_ref().unwrap().videos;
    let mut modal = VideoModalController::new();

    modal.open(&mut doc, &videos[0], 1920);
    assert!(modal.is_open());
    assert!(doc.body().has_class("modal-open"));
    assert_eq!(
        doc.find("video-modal-title").unwrap().text(),
        videos[0].title
    );

    modal.on_key(&mut doc, "Escape");
    assert!(!modal.is_open());
    assert!(!doc.body().has_class("modal-open"));
    assert_eq!(doc.find("video-modal-iframe").unwrap().attr("src"), Some(""));
}

#[test]
fn grid_then_modal_then_grid_keeps_single_live_embed() {
    let config = config();
    let mut doc = render_page(&config);
    let videos = &config.video_links.as_ref().unwrap().videos;
    let mut modal = VideoModalController::new();

    load_video(&mut doc, videos[0].platform, &videos[0].video_id, "video-1");
    modal.open(&mut doc, &videos[1], 1024);
    load_video(&mut doc, Platform::Youtube, "zzz", "video-2");

    let live: Vec<&str> = ["video-1", "video-2", "video-modal-iframe"]
        .iter()
        .filter_map(|id| doc.find(id).unwrap().attr("src"))
        .filter(|src| !src.is_empty())
        .collect();
    assert_eq!(live.len(), 1);
    assert!(live[0].contains("zzz"));
}

#[test]
fn animations_drive_rendered_page() {
    let config = config();
    let mut doc = render_page(&config);
    let mut animations = AnimationController::start(&config, &mut doc, false);
    assert!(animations.is_enabled());

    // The greeting starts empty and types out through ticks.
    assert_eq!(doc.find_class("hero-greeting").unwrap().text(), "");
    let settings = config.animations();
    let total =
        settings.greeting_typing_delay + settings.greeting_speed() * 6 + settings.greeting_speed();
    let mut elapsed = 0;
    while elapsed < total {
        animations.tick(&mut doc, 50);
        elapsed += 50;
    }
    assert_eq!(doc.find_class("hero-greeting").unwrap().text(), "Hello.");
}

#[test]
fn counter_activates_on_intersection_and_lands_exactly() {
    let config = config();
    let mut doc = render_page(&config);
    let mut animations = AnimationController::start(&config, &mut doc, false);

    // Before any intersection the counter holds at zero.
    animations.tick(&mut doc, 500);
    assert_eq!(doc.find("stat-number-2").unwrap().text(), "0");

    // stat-number-2 targets 95 in the fallback configuration.
    animations.on_intersection(&mut doc, "stat-number-2", 0.6);
    for _ in 0..200 {
        animations.tick(&mut doc, COUNTER_TICK_MS);
    }
    assert_eq!(doc.find("stat-number-2").unwrap().text(), "95%");
}

#[test]
fn reduced_motion_disables_effects() {
    let config = config();
    let mut doc = render_page(&config);
    let mut animations = AnimationController::start(&config, &mut doc, true);
    assert!(!animations.is_enabled());

    // The greeting keeps its rendered text; nothing types.
    assert_eq!(doc.find_class("hero-greeting").unwrap().text(), "Hello.");
    animations.tick(&mut doc, 10_000);
    assert_eq!(doc.find_class("hero-greeting").unwrap().text(), "Hello.");
}

#[test]
fn reveal_observation_fires_once_on_rendered_items() {
    let config = config();
    let mut doc = render_page(&config);
    let mut animations = AnimationController::start(&config, &mut doc, false);

    animations.reveal_mut().observe(&mut doc, "service-1");
    assert_eq!(doc.find("service-1").unwrap().style("opacity"), Some("0"));

    animations.on_intersection(&mut doc, "service-1", 0.2);
    assert_eq!(doc.find("service-1").unwrap().style("opacity"), Some("1"));

    // Re-hiding manually shows the observer is detached: further
    // intersections change nothing.
    doc.find_mut("service-1").unwrap().set_style("opacity", "0");
    animations.on_intersection(&mut doc, "service-1", 0.9);
    assert_eq!(doc.find("service-1").unwrap().style("opacity"), Some("0"));
}
