//! Portfolio configuration.
//!
//! This module defines the configuration tree that drives the whole site:
//! content sections, theme palettes, animation pacing, and dev-server
//! settings. The file lives in the site root as `portfolio.json5` (JSON5, so
//! comments and trailing commas survive hand-editing); when it is absent, an
//! embedded fallback configuration is used instead.
//!
//! The configuration is loaded once and treated as immutable for the rest of
//! the process. Every consumer receives a `&Config`; there is no global.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::constants::{CONFIG_FILE_NAME, DEFAULT_CACHE_CONTROL, DEFAULT_PORT};
use crate::theme::{Palette, ThemeName};
use crate::video::Platform;

fn default_true() -> bool {
    true
}

/// Personal information shown in the hero section and page chrome.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PersonalConfig {
    /// Full display name.
    pub name: Option<String>,
    /// Professional title (e.g. "Systems Engineer").
    pub title: Option<String>,
    /// Browser tab title; falls back to "{name} - {title}".
    pub page_title: Option<String>,
    /// Logo shown in the navigation bar: an image path (`/`- or
    /// `http`-prefixed) or a literal emoji/text.
    pub page_logo: Option<String>,
    /// Short greeting typed into the hero section.
    pub greeting: Option<String>,
    /// Path to the profile image.
    pub profile_image: Option<String>,
    /// Link to a downloadable resume.
    pub resume_link: Option<String>,
    /// Contact email.
    pub email: Option<String>,
    /// Short bio typed into the about section.
    pub bio: Option<String>,
    /// Location line.
    pub location: Option<String>,
    /// Prefix before the name in the hero title (defaults to "I'm").
    pub hero_title_prefix: Option<String>,
}

/// One entry of the navigation menu.
#[derive(Debug, Clone, Deserialize)]
pub struct MenuItem {
    /// Link label.
    pub name: String,
    /// Anchor target (e.g. "#about").
    pub link: String,
}

/// Navigation bar contents.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct NavigationConfig {
    /// Fallback logo text when `personal.pageLogo` is absent.
    pub logo: Option<String>,
    /// Menu entries, rendered in order.
    pub menu_items: Vec<MenuItem>,
}

/// A category of related skills.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct SkillCategory {
    /// Category heading.
    pub title: String,
    /// Decorative icon (emoji).
    pub icon: String,
    /// Skill labels, rendered in order.
    pub skills: Vec<String>,
}

/// Technical skills section.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TechnicalSkillsConfig {
    /// Section gate; disabled sections are never rendered.
    #[serde(default = "default_true")]
    pub enabled: bool,
    /// Section heading.
    pub title: Option<String>,
    /// Section subheading.
    pub subtitle: Option<String>,
    /// Skill categories, rendered in order.
    pub categories: Vec<SkillCategory>,
}

impl Default for TechnicalSkillsConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            title: None,
            subtitle: None,
            categories: Vec::new(),
        }
    }
}

/// Scrolling skills marquee shown under the hero.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SkillsConfig {
    /// Section gate; disabled sections are never rendered.
    #[serde(default = "default_true")]
    pub enabled: bool,
    /// Skill labels scrolled across the strip, in order.
    pub list: Vec<String>,
}

impl Default for SkillsConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            list: Vec::new(),
        }
    }
}

/// A service card in the about section.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ServiceEntry {
    /// Decorative icon (emoji).
    pub icon: String,
    /// Service name.
    pub title: String,
    /// One-line description.
    pub description: String,
}

/// An animated statistic in the about section.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Statistic {
    /// Counter target value.
    pub number: u32,
    /// Static suffix shown in non-animated rendering.
    pub suffix: String,
    /// Label under the number.
    pub label: String,
}

/// About section: description, service cards, statistics.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AboutConfig {
    /// Section gate; disabled sections are never rendered.
    #[serde(default = "default_true")]
    pub enabled: bool,
    /// Section heading.
    pub title: Option<String>,
    /// Long-form description, typed by the bio typewriter.
    pub description: Option<String>,
    /// Service cards, rendered in order.
    pub services: Vec<ServiceEntry>,
    /// Animated statistics, rendered in order.
    pub statistics: Vec<Statistic>,
}

impl Default for AboutConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            title: None,
            description: None,
            services: Vec::new(),
            statistics: Vec::new(),
        }
    }
}

/// One named theme: display name plus a full palette.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ThemeModeEntry {
    /// Human-readable name (e.g. "Dark Mode").
    pub name: String,
    /// Color roles for this mode. Always fully specified; partial palettes
    /// are a configuration error.
    pub colors: Palette,
}

/// Animation pacing and gating.
///
/// Speeds and delays are in milliseconds. The per-effect speeds fall back to
/// `typing_speed` when not given.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AnimationSettings {
    /// Master gate for all animated effects.
    #[serde(default = "default_true")]
    pub enabled: bool,
    /// Default per-character typing delay.
    pub typing_speed: u64,
    /// Per-character delay for the hero greeting.
    pub greeting_typing_speed: Option<u64>,
    /// Per-character delay for the about bio.
    pub bio_typing_speed: Option<u64>,
    /// Total counter animation duration.
    pub counter_duration: u64,
    /// CSS duration string for the skills marquee (e.g. "30s").
    pub scroll_speed: String,
    /// Delay before the greeting starts typing.
    pub greeting_typing_delay: u64,
    /// Delay before the bio starts typing.
    pub bio_typing_delay: u64,
}

impl Default for AnimationSettings {
    fn default() -> Self {
        Self {
            enabled: true,
            typing_speed: 100,
            greeting_typing_speed: None,
            bio_typing_speed: None,
            counter_duration: 2000,
            scroll_speed: "30s".to_string(),
            greeting_typing_delay: 500,
            bio_typing_delay: 1500,
        }
    }
}

impl AnimationSettings {
    /// Per-character delay for the greeting typewriter.
    #[must_use]
    pub fn greeting_speed(&self) -> u64 {
        self.greeting_typing_speed.unwrap_or(self.typing_speed)
    }

    /// Per-character delay for the bio typewriter.
    #[must_use]
    pub fn bio_speed(&self) -> u64 {
        self.bio_typing_speed.unwrap_or(self.typing_speed)
    }
}

/// Theme section: startup mode, named palettes, animation settings.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ThemeConfig {
    /// Mode applied at startup when no preference is persisted.
    pub mode: ThemeName,
    /// Palettes per named mode.
    pub modes: BTreeMap<ThemeName, ThemeModeEntry>,
    /// Animation pacing and gating.
    pub animations: AnimationSettings,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            mode: ThemeName::Dark,
            modes: BTreeMap::new(),
            animations: AnimationSettings::default(),
        }
    }
}

/// A project card.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ProjectEntry {
    /// Project name.
    pub name: String,
    /// Short description.
    pub description: String,
    /// Path to the project image.
    pub image: String,
    /// External link ("#" for none).
    pub link: String,
    /// Technology tags, rendered in order.
    pub technologies: Vec<String>,
    /// Featured cards get a highlighted style.
    pub featured: bool,
    /// Free-form date label.
    pub date: String,
}

impl Default for ProjectEntry {
    fn default() -> Self {
        Self {
            name: String::new(),
            description: String::new(),
            image: String::new(),
            link: "#".to_string(),
            technologies: Vec::new(),
            featured: false,
            date: String::new(),
        }
    }
}

/// Projects section.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProjectsConfig {
    /// Section gate; disabled sections are never rendered.
    #[serde(default = "default_true")]
    pub enabled: bool,
    /// Section heading.
    pub title: Option<String>,
    /// Project cards, rendered in order.
    pub list: Vec<ProjectEntry>,
}

impl Default for ProjectsConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            title: None,
            list: Vec::new(),
        }
    }
}

/// An embeddable video.
///
/// Portrait-flagged videos always open in the phone-style modal layout,
/// whatever the viewport width.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Video {
    /// Hosting platform, which determines the embed URL shape.
    pub platform: Platform,
    /// Card title.
    pub title: String,
    /// Card description.
    pub description: String,
    /// Platform-specific video identifier.
    pub video_id: String,
    /// Orientation flag: portrait content gets phone-style framing.
    pub is_portrait: bool,
    /// Explicit thumbnail URL; YouTube cards derive one when absent.
    pub thumbnail: Option<String>,
}

impl Default for Video {
    fn default() -> Self {
        Self {
            platform: Platform::Youtube,
            title: String::new(),
            description: String::new(),
            video_id: String::new(),
            is_portrait: false,
            thumbnail: None,
        }
    }
}

impl Video {
    /// Thumbnail URL for the card: the explicit one, or the derived YouTube
    /// still. TikTok cards have none unless explicit.
    #[must_use]
    pub fn thumbnail_url(&self) -> Option<String> {
        if let Some(url) = &self.thumbnail {
            return Some(url.clone());
        }
        match self.platform {
            Platform::Youtube => Some(format!(
                "https://img.youtube.com/vi/{}/maxresdefault.jpg",
                self.video_id
            )),
            Platform::Tiktok => None,
        }
    }
}

/// Videos section.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct VideoLinksConfig {
    /// Section gate; disabled sections are never rendered.
    #[serde(default = "default_true")]
    pub enabled: bool,
    /// Section heading.
    pub title: Option<String>,
    /// Video cards, rendered in order.
    pub videos: Vec<Video>,
}

impl Default for VideoLinksConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            title: None,
            videos: Vec::new(),
        }
    }
}

/// A character reference card.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ReferenceEntry {
    /// Referee name.
    pub name: String,
    /// Referee title/position.
    pub title: String,
    /// Relationship to the referee.
    pub relationship: String,
    /// Contact email.
    pub email: String,
    /// Contact phone.
    pub phone: String,
    /// Path to the referee image.
    pub image: String,
}

/// References section.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ReferencesConfig {
    /// Section gate; disabled sections are never rendered.
    #[serde(default = "default_true")]
    pub enabled: bool,
    /// Section heading.
    pub title: Option<String>,
    /// Reference cards, rendered in order.
    pub list: Vec<ReferenceEntry>,
}

impl Default for ReferencesConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            title: None,
            list: Vec::new(),
        }
    }
}

/// One position in the experience timeline.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ExperiencePosition {
    /// Position title.
    pub title: String,
    /// Company or engagement type.
    pub company: String,
    /// Period label (e.g. "06/2021 - 03/2024").
    pub period: String,
    /// One-line description.
    pub description: String,
}

/// Experience section.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ExperienceConfig {
    /// Section gate; disabled sections are never rendered.
    #[serde(default = "default_true")]
    pub enabled: bool,
    /// Section heading.
    pub title: Option<String>,
    /// Positions, rendered in order.
    pub positions: Vec<ExperiencePosition>,
}

impl Default for ExperienceConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            title: None,
            positions: Vec::new(),
        }
    }
}

/// Contact section.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ContactsConfig {
    /// Section gate; disabled sections are never rendered.
    #[serde(default = "default_true")]
    pub enabled: bool,
    /// Section heading.
    pub title: Option<String>,
    /// Section subheading.
    pub subtitle: Option<String>,
    /// Contact email.
    pub email: Option<String>,
    /// Contact phone.
    pub phone: Option<String>,
    /// Location line.
    pub location: Option<String>,
    /// Social links: platform name to URL. Empty and "#" URLs are skipped.
    pub social: BTreeMap<String, String>,
}

impl Default for ContactsConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            title: None,
            subtitle: None,
            email: None,
            phone: None,
            location: None,
            social: BTreeMap::new(),
        }
    }
}

/// A hero call-to-action button.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct HeroButton {
    /// Button gate.
    #[serde(default = "default_true")]
    pub enabled: bool,
    /// Button label.
    pub text: String,
    /// Link target ("#" for none).
    pub link: String,
}

impl Default for HeroButton {
    fn default() -> Self {
        Self {
            enabled: true,
            text: String::new(),
            link: "#".to_string(),
        }
    }
}

/// Hero call-to-action buttons.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct HeroButtons {
    /// Primary button.
    pub primary: Option<HeroButton>,
    /// Secondary button.
    pub secondary: Option<HeroButton>,
}

/// One slide of the image gallery.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct GalleryImage {
    /// Image path.
    pub src: String,
    /// Alt text.
    pub alt: String,
    /// Caption shown under the slide.
    pub caption: String,
}

/// Optional auto-advancing image gallery.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GalleryConfig {
    /// Section gate; disabled sections are never rendered.
    #[serde(default = "default_true")]
    pub enabled: bool,
    /// Slides, rendered in order.
    pub images: Vec<GalleryImage>,
}

impl Default for GalleryConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            images: Vec::new(),
        }
    }
}

/// Development server settings.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ServerConfig {
    /// Port to bind. Takes precedence over the command-line argument.
    pub default_port: Option<u16>,
    /// `Cache-Control` header value for served files.
    pub cache_control: Option<String>,
}

/// The whole portfolio configuration.
///
/// Every section is optional: an absent section is skipped by the renderer,
/// and absent fields fall back to omission or a default. Loading never fails
/// on missing content, only on a file that exists but does not parse.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Config {
    /// Personal information.
    pub personal: Option<PersonalConfig>,
    /// Navigation bar.
    pub navigation: Option<NavigationConfig>,
    /// Skills marquee strip.
    pub skills: Option<SkillsConfig>,
    /// Technical skills section.
    pub technical_skills: Option<TechnicalSkillsConfig>,
    /// About section.
    pub about: Option<AboutConfig>,
    /// Theme modes and animation settings.
    pub theme: Option<ThemeConfig>,
    /// Hero call-to-action buttons.
    pub hero_buttons: Option<HeroButtons>,
    /// Projects section.
    pub projects: Option<ProjectsConfig>,
    /// Videos section.
    pub video_links: Option<VideoLinksConfig>,
    /// References section.
    pub references: Option<ReferencesConfig>,
    /// Experience section.
    pub experience: Option<ExperienceConfig>,
    /// Contact section.
    pub contacts: Option<ContactsConfig>,
    /// Image gallery section.
    pub gallery: Option<GalleryConfig>,
    /// Development server settings.
    pub server: Option<ServerConfig>,
}

impl Config {
    /// Loads the configuration from `portfolio.json5` in the site root.
    ///
    /// A missing file yields the embedded fallback configuration; a file
    /// that exists but does not parse is an error.
    pub fn load(site_root: &Path) -> Result<Self> {
        let path = site_root.join(CONFIG_FILE_NAME);

        if !path.exists() {
            return Ok(Self::fallback());
        }

        let content = fs::read_to_string(&path)
            .context(format!("Failed to read config file: {}", path.display()))?;

        json5::from_str(&content)
            .context(format!("Failed to parse config file: {}", path.display()))
    }

    /// Parses the embedded fallback configuration.
    fn embedded_default() -> Result<Self> {
        let data = include_str!("data/portfolio.default.json5");
        json5::from_str(data).context("Failed to parse embedded default configuration")
    }

    /// The built-in fallback used when no configuration file exists.
    #[must_use]
    pub fn fallback() -> Self {
        Self::embedded_default().unwrap_or_default()
    }

    /// Animation settings, defaulted when the theme section is absent.
    #[must_use]
    pub fn animations(&self) -> AnimationSettings {
        self.theme
            .as_ref()
            .map_or_else(AnimationSettings::default, |t| t.animations.clone())
    }

    /// Palette for a theme mode, if the configuration provides one.
    #[must_use]
    pub fn palette(&self, name: ThemeName) -> Option<&Palette> {
        self.theme
            .as_ref()
            .and_then(|t| t.modes.get(&name))
            .map(|entry| &entry.colors)
    }

    /// Resolves the server port: configuration value, then command-line
    /// argument, then the default.
    #[must_use]
    pub fn resolve_port(&self, cli_port: Option<u16>) -> u16 {
        self.server
            .as_ref()
            .and_then(|s| s.default_port)
            .or(cli_port)
            .unwrap_or(DEFAULT_PORT)
    }

    /// `Cache-Control` value for served files.
    #[must_use]
    pub fn cache_control(&self) -> String {
        self.server
            .as_ref()
            .and_then(|s| s.cache_control.clone())
            .unwrap_or_else(|| DEFAULT_CACHE_CONTROL.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_fallback_parses() {
        let config = Config::fallback();
        // The embedded fallback must at least carry a greeting and themes.
        assert!(config.personal.is_some());
        let theme = config.theme.expect("fallback theme section");
        assert_eq!(theme.modes.len(), 4);
        assert!(theme.modes.contains_key(&ThemeName::Cyberpunk));
    }

    #[test]
    fn test_load_missing_file_uses_fallback() {
        let temp_dir = TempDir::new().unwrap();
        let config = Config::load(temp_dir.path()).unwrap();
        assert!(config.personal.is_some());
    }

    #[test]
    fn test_load_tolerates_missing_sections() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(
            temp_dir.path().join(CONFIG_FILE_NAME),
            r#"{ personal: { greeting: "Hello." } }"#,
        )
        .unwrap();

        let config = Config::load(temp_dir.path()).unwrap();
        assert_eq!(
            config.personal.unwrap().greeting.as_deref(),
            Some("Hello.")
        );
        assert!(config.projects.is_none());
        assert!(config.references.is_none());
    }

    #[test]
    fn test_load_rejects_malformed_file() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join(CONFIG_FILE_NAME), "{ not json5").unwrap();
        assert!(Config::load(temp_dir.path()).is_err());
    }

    #[test]
    fn test_enabled_defaults_true() {
        let config: Config =
            json5::from_str(r#"{ projects: { title: "Work", list: [] } }"#).unwrap();
        assert!(config.projects.unwrap().enabled);
    }

    #[test]
    fn test_enabled_false_respected() {
        let config: Config = json5::from_str(r#"{ projects: { enabled: false } }"#).unwrap();
        assert!(!config.projects.unwrap().enabled);
    }

    #[test]
    fn test_animation_speed_fallbacks() {
        let settings: AnimationSettings =
            json5::from_str(r#"{ typingSpeed: 40 }"#).unwrap();
        assert_eq!(settings.greeting_speed(), 40);
        assert_eq!(settings.bio_speed(), 40);

        let settings: AnimationSettings =
            json5::from_str(r#"{ typingSpeed: 40, bioTypingSpeed: 10 }"#).unwrap();
        assert_eq!(settings.bio_speed(), 10);
        assert_eq!(settings.greeting_speed(), 40);
    }

    #[test]
    fn test_port_resolution_order() {
        // Config value wins over the CLI argument.
        let config: Config = json5::from_str(r#"{ server: { defaultPort: 8123 } }"#).unwrap();
        assert_eq!(config.resolve_port(Some(9000)), 8123);

        // CLI argument wins over the default.
        let config = Config::default();
        assert_eq!(config.resolve_port(Some(9000)), 9000);

        // Default applies last.
        assert_eq!(config.resolve_port(None), DEFAULT_PORT);
    }

    #[test]
    fn test_cache_control_default() {
        let config = Config::default();
        assert_eq!(config.cache_control(), DEFAULT_CACHE_CONTROL);

        let config: Config =
            json5::from_str(r#"{ server: { cacheControl: "max-age=60" } }"#).unwrap();
        assert_eq!(config.cache_control(), "max-age=60");
    }

    #[test]
    fn test_youtube_thumbnail_derived() {
        let video: Video =
            json5::from_str(r#"{ platform: "youtube", videoId: "abc123" }"#).unwrap();
        assert_eq!(
            video.thumbnail_url().unwrap(),
            "https://img.youtube.com/vi/abc123/maxresdefault.jpg"
        );
    }

    #[test]
    fn test_tiktok_thumbnail_absent_unless_explicit() {
        let video: Video =
            json5::from_str(r#"{ platform: "tiktok", videoId: "42" }"#).unwrap();
        assert!(video.thumbnail_url().is_none());

        let video: Video = json5::from_str(
            r#"{ platform: "tiktok", videoId: "42", thumbnail: "/images/t.png" }"#,
        )
        .unwrap();
        assert_eq!(video.thumbnail_url().unwrap(), "/images/t.png");
    }
}
