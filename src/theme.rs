//! Theme switching and persistence.
//!
//! Themes form a closed set of four named modes. Switching is a data-driven
//! operation: remove whatever the previous theme injected, inject the new
//! stylesheet link, apply the mode's palette as CSS custom properties, and
//! persist the selection for the next startup.

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::config::Config;
use crate::constants::APP_DATA_DIR;
use crate::dom::{Document, Element};

/// The closed set of theme modes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ThemeName {
    /// Dark theme (the startup default).
    #[default]
    Dark,
    /// Light theme.
    Light,
    /// Cyberpunk theme, with glitch text effects.
    Cyberpunk,
    /// Techno theme, with glitch text effects.
    Techno,
}

impl ThemeName {
    /// All modes, in selector order.
    pub const ALL: [ThemeName; 4] = [
        ThemeName::Dark,
        ThemeName::Light,
        ThemeName::Cyberpunk,
        ThemeName::Techno,
    ];

    /// The lowercase key used in configuration, markup, and persistence.
    #[must_use]
    pub fn key(self) -> &'static str {
        match self {
            ThemeName::Dark => "dark",
            ThemeName::Light => "light",
            ThemeName::Cyberpunk => "cyberpunk",
            ThemeName::Techno => "techno",
        }
    }

    /// Parses a lowercase key back into a mode.
    #[must_use]
    pub fn parse(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|name| name.key() == key)
    }

    /// Path of this mode's stylesheet, relative to the site root.
    #[must_use]
    pub fn stylesheet_href(self) -> String {
        format!("themes/{}-theme.css", self.key())
    }

    /// Marker class applied to the body (and, for glitch themes, the navbar
    /// and hero elements) while this mode is active.
    #[must_use]
    pub fn marker_class(self) -> String {
        format!("{}-active", self.key())
    }

    /// Glitch themes decorate the hero text with `data-text` attributes.
    #[must_use]
    pub fn has_glitch_effects(self) -> bool {
        matches!(self, ThemeName::Cyberpunk | ThemeName::Techno)
    }
}

/// The seven color roles of a theme, plus its background gradient.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Palette {
    /// Page background color.
    pub background: String,
    /// Card background color.
    pub card_background: String,
    /// Primary text color.
    pub primary: String,
    /// Secondary text color.
    pub secondary: String,
    /// Accent color.
    pub accent: String,
    /// Accent hover color.
    pub accent_hover: String,
    /// Border color.
    pub border: String,
    /// Background gradient (consumed by the stylesheets, not applied as a
    /// custom property).
    #[serde(default)]
    pub gradient: String,
}

impl Default for Palette {
    /// The built-in default color set (the dark palette).
    fn default() -> Self {
        Self {
            background: "#1e1e2f".to_string(),
            card_background: "#2a2a3e".to_string(),
            primary: "#ffffff".to_string(),
            secondary: "#a0a0b8".to_string(),
            accent: "#ff6b61".to_string(),
            accent_hover: "#ff5a4f".to_string(),
            border: "#3a3a4f".to_string(),
            gradient: "linear-gradient(135deg, #1e1e2f 0%, #252536 100%)".to_string(),
        }
    }
}

impl Palette {
    /// Applies the seven color roles as CSS custom properties on an element
    /// (the document root in practice).
    pub fn apply(&self, root: &mut Element) {
        root.set_style("--bg-color", &self.background);
        root.set_style("--card-bg", &self.card_background);
        root.set_style("--text-primary", &self.primary);
        root.set_style("--text-secondary", &self.secondary);
        root.set_style("--accent-color", &self.accent);
        root.set_style("--accent-hover", &self.accent_hover);
        root.set_style("--border-color", &self.border);
    }
}

/// Storage for the persisted theme selection.
///
/// A single string value under a fixed key: read once at startup, written on
/// every change. The file-backed implementation is the production store; the
/// in-memory one substitutes in tests.
pub trait PreferenceStore {
    /// Returns the persisted selection, if any.
    fn load_theme(&self) -> Option<ThemeName>;

    /// Persists the selection.
    fn save_theme(&mut self, theme: ThemeName) -> Result<()>;
}

/// Serialized shape of the preference file.
#[derive(Debug, Deserialize)]
struct PreferencesFile {
    selected_theme: Option<String>,
}

/// File-backed preference store under the platform config directory.
#[derive(Debug, Clone)]
pub struct FilePreferences {
    path: PathBuf,
}

impl FilePreferences {
    /// Opens the default store at
    /// `{config_dir}/Folio/preferences.toml`.
    pub fn open_default() -> Result<Self> {
        let dir = dirs::config_dir()
            .context("Failed to determine config directory")?
            .join(APP_DATA_DIR);
        Ok(Self {
            path: dir.join("preferences.toml"),
        })
    }

    /// Opens a store at an explicit path (used by tests).
    #[must_use]
    pub fn at(path: PathBuf) -> Self {
        Self { path }
    }
}

impl PreferenceStore for FilePreferences {
    fn load_theme(&self) -> Option<ThemeName> {
        let content = fs::read_to_string(&self.path).ok()?;
        let prefs: PreferencesFile = toml::from_str(&content).ok()?;
        ThemeName::parse(&prefs.selected_theme?)
    }

    fn save_theme(&mut self, theme: ThemeName) -> Result<()> {
        let dir = self
            .path
            .parent()
            .context("Preference file has no parent directory")?;
        fs::create_dir_all(dir).context(format!(
            "Failed to create preference directory: {}",
            dir.display()
        ))?;

        let content = format!("selected_theme = \"{}\"\n", theme.key());
        let temp_path = self.path.with_extension("toml.tmp");

        // Atomic write: temp file + rename.
        fs::write(&temp_path, content).context(format!(
            "Failed to write temp preference file: {}",
            temp_path.display()
        ))?;
        fs::rename(&temp_path, &self.path).context(format!(
            "Failed to rename temp preference file to: {}",
            self.path.display()
        ))?;

        Ok(())
    }
}

/// In-memory preference store for tests.
#[derive(Debug, Clone, Default)]
pub struct MemoryPreferences {
    theme: Option<ThemeName>,
}

impl PreferenceStore for MemoryPreferences {
    fn load_theme(&self) -> Option<ThemeName> {
        self.theme
    }

    fn save_theme(&mut self, theme: ThemeName) -> Result<()> {
        self.theme = Some(theme);
        Ok(())
    }
}

/// Theme selector: exactly one mode is current at any time.
#[derive(Debug)]
pub struct ThemeController<S: PreferenceStore> {
    current: ThemeName,
    store: S,
}

impl<S: PreferenceStore> ThemeController<S> {
    /// Creates a controller, initializing the current mode from the persisted
    /// preference, then the configured startup mode, then `dark`.
    pub fn new(store: S, config: &Config) -> Self {
        let configured = config.theme.as_ref().map(|t| t.mode);
        let current = store
            .load_theme()
            .or(configured)
            .unwrap_or(ThemeName::Dark);
        Self { current, store }
    }

    /// Returns the current mode.
    #[must_use]
    pub fn current(&self) -> ThemeName {
        self.current
    }

    /// Applies the current mode to the document without changing it (used
    /// once after the initial render).
    pub fn apply_current(&mut self, doc: &mut Document, config: &Config) -> Result<()> {
        self.select_theme(doc, config, self.current)
    }

    /// Switches to a theme mode.
    ///
    /// After this call exactly one theme stylesheet link exists in the head,
    /// tagged with the new mode; all previous marker classes and glitch
    /// attributes are gone; the mode's palette is applied to the document
    /// root; the matching selector control is active; and the selection is
    /// persisted.
    ///
    /// A mode with no palette in the configuration falls back to the built-in
    /// default color set, not an error.
    pub fn select_theme(
        &mut self,
        doc: &mut Document,
        config: &Config,
        name: ThemeName,
    ) -> Result<()> {
        remove_theme_artifacts(doc);

        // Inject the stylesheet link for the new mode.
        doc.head_mut().append_child(
            Element::new("link")
                .with_attr("rel", "stylesheet")
                .with_attr("href", &name.stylesheet_href())
                .with_attr("data-theme", name.key()),
        );

        apply_theme_effects(doc, name);

        // Palette from config, or the built-in default color set.
        let palette = config.palette(name).cloned().unwrap_or_default();
        palette.apply(doc.root_mut());

        set_active_control(doc, name);

        self.current = name;
        self.store
            .save_theme(name)
            .context("Failed to persist theme selection")
    }
}

/// Removes every artifact a prior theme selection may have left behind:
/// stylesheet links, marker classes, glitch attributes.
fn remove_theme_artifacts(doc: &mut Document) {
    doc.head_mut()
        .children_mut()
        .retain(|el| el.attr("data-theme").is_none());

    let markers: Vec<String> = ThemeName::ALL
        .into_iter()
        .map(ThemeName::marker_class)
        .collect();

    for target in ["navbar", "hero-greeting", "hero-title"] {
        if let Some(el) = doc.find_class_mut(target) {
            for marker in &markers {
                el.remove_class(marker);
            }
            el.remove_attr("data-text");
        }
    }
    let body = doc.body_mut();
    for marker in &markers {
        body.remove_class(marker);
    }
}

/// Applies the new mode's marker classes; glitch themes also decorate the
/// hero text with `data-text` copies of their content.
fn apply_theme_effects(doc: &mut Document, name: ThemeName) {
    let marker = name.marker_class();

    doc.body_mut().add_class(&marker);

    if !name.has_glitch_effects() {
        return;
    }

    if let Some(navbar) = doc.find_class_mut("navbar") {
        navbar.add_class(&marker);
    }
    for target in ["hero-greeting", "hero-title"] {
        if let Some(el) = doc.find_class_mut(target) {
            el.add_class(&marker);
            let text = el.text().to_string();
            el.set_attr("data-text", &text);
        }
    }
}

/// Marks the selector control for the new mode active, and only that one.
fn set_active_control(doc: &mut Document, name: ThemeName) {
    doc.for_each_class_mut("theme-btn", &mut |btn| {
        if btn.attr("data-theme") == Some(name.key()) {
            btn.add_class("active");
        } else {
            btn.remove_class("active");
        }
    });
}
