//! Timer-driven page effects.
//!
//! Every effect is a state machine advanced by explicit `tick` calls
//! carrying elapsed milliseconds, so tests drive them deterministically.
//! Restarting an effect always cancels its prior run first: at most one
//! active run exists per target.

use std::collections::BTreeSet;

use crate::config::{AnimationSettings, Config};
use crate::dom::Document;

/// Counter tick interval in milliseconds.
pub const COUNTER_TICK_MS: u64 = 20;

/// Intersection threshold for reveal effects.
pub const REVEAL_THRESHOLD: f64 = 0.1;

/// Intersection threshold for counter activation.
pub const COUNTER_THRESHOLD: f64 = 0.5;

/// Whether animated effects run at all.
///
/// A reduced-motion preference wins over the configuration flag.
#[must_use]
pub fn effects_enabled(settings: &AnimationSettings, prefers_reduced_motion: bool) -> bool {
    settings.enabled && !prefers_reduced_motion
}

/// Character-by-character text reveal.
///
/// The first character appears one character-delay after the start delay;
/// each further character one delay later, strictly in source order. `start`
/// cancels any in-flight run for the target and resets to the empty string.
#[derive(Debug, Clone)]
pub struct Typewriter {
    target_class: String,
    text: String,
    char_delay: u64,
    start_delay: u64,
    elapsed: u64,
    revealed: usize,
    running: bool,
}

impl Typewriter {
    /// Creates a typewriter for the element carrying `target_class`.
    #[must_use]
    pub fn new(target_class: &str, text: &str, char_delay: u64, start_delay: u64) -> Self {
        Self {
            target_class: target_class.to_string(),
            text: text.to_string(),
            char_delay: char_delay.max(1),
            start_delay,
            elapsed: 0,
            revealed: 0,
            running: false,
        }
    }

    /// Starts (or restarts) the run from the empty string.
    pub fn start(&mut self, doc: &mut Document) {
        self.elapsed = 0;
        self.revealed = 0;
        self.running = true;
        if let Some(el) = doc.find_class_mut(&self.target_class) {
            el.set_text("");
        }
    }

    /// Cancels the run, leaving whatever is currently shown.
    pub fn cancel(&mut self) {
        self.running = false;
    }

    /// True once the full string is shown.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.revealed == self.text.chars().count()
    }

    /// Advances the run by `dt` milliseconds.
    pub fn tick(&mut self, doc: &mut Document, dt: u64) {
        if !self.running {
            return;
        }
        self.elapsed += dt;

        let total = self.text.chars().count();
        let typed_for = self.elapsed.saturating_sub(self.start_delay);
        let due = usize::try_from(typed_for / self.char_delay).unwrap_or(usize::MAX);
        let due = due.min(total);

        if due == self.revealed {
            return;
        }
        self.revealed = due;

        let shown: String = self.text.chars().take(self.revealed).collect();
        if let Some(el) = doc.find_class_mut(&self.target_class) {
            el.set_text(&shown);
        }
        if self.revealed == total {
            self.running = false;
        }
    }
}

/// Animated statistic counter.
///
/// Counts from 0 to the target in equal steps over a fixed duration at a
/// fixed tick interval; the final frame shows the exact target. The suffix
/// follows the display rule: `+` above 100, `%` otherwise.
#[derive(Debug, Clone)]
pub struct Counter {
    target_id: String,
    target: u32,
    duration: u64,
    elapsed: u64,
    started: bool,
}

impl Counter {
    /// Creates a counter for the element with id `target_id`.
    #[must_use]
    pub fn new(target_id: &str, target: u32, duration: u64) -> Self {
        Self {
            target_id: target_id.to_string(),
            target,
            duration: duration.max(COUNTER_TICK_MS),
            elapsed: 0,
            started: false,
        }
    }

    /// Returns the id of the element this counter drives.
    #[must_use]
    pub fn target_id(&self) -> &str {
        &self.target_id
    }

    /// True once the counter has been activated by visibility.
    #[must_use]
    pub fn is_started(&self) -> bool {
        self.started
    }

    /// True once the exact target is shown.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.started && self.elapsed >= self.duration
    }

    /// Activates the counter (first intersection), resetting any progress.
    pub fn start(&mut self, doc: &mut Document) {
        self.started = true;
        self.elapsed = 0;
        if let Some(el) = doc.find_mut(&self.target_id) {
            el.set_text("0");
        }
    }

    fn suffix(&self) -> &'static str {
        if self.target > 100 {
            "+"
        } else {
            "%"
        }
    }

    /// The value shown after `ticks` completed tick intervals.
    fn value_at(&self, ticks: u64) -> u32 {
        let steps = self.duration / COUNTER_TICK_MS;
        if ticks >= steps {
            return self.target;
        }
        // Equal steps of target/steps per tick, displayed rounded up;
        // integer ceiling division keeps the final frame exact.
        let numerator = u64::from(self.target) * ticks;
        u32::try_from(numerator.div_ceil(steps)).unwrap_or(self.target)
    }

    /// Advances the counter by `dt` milliseconds.
    pub fn tick(&mut self, doc: &mut Document, dt: u64) {
        if !self.started || self.is_complete() {
            return;
        }
        self.elapsed = (self.elapsed + dt).min(self.duration);

        let ticks = self.elapsed / COUNTER_TICK_MS;
        let display = format!("{}{}", self.value_at(ticks), self.suffix());
        if let Some(el) = doc.find_mut(&self.target_id) {
            el.set_text(&display);
        }
    }
}

/// One-shot reveal of elements entering the viewport.
///
/// Observed elements start hidden (opacity 0, shifted down); the first
/// intersection at or above the threshold reveals them and detaches the
/// observation, so each element transitions at most once.
#[derive(Debug, Clone)]
pub struct ScrollReveal {
    threshold: f64,
    pending: BTreeSet<String>,
}

impl ScrollReveal {
    /// Creates a reveal observer with the given intersection threshold.
    #[must_use]
    pub fn new(threshold: f64) -> Self {
        Self {
            threshold,
            pending: BTreeSet::new(),
        }
    }

    /// Starts observing the element with the given id, hiding it.
    pub fn observe(&mut self, doc: &mut Document, id: &str) {
        let Some(el) = doc.find_mut(id) else {
            return;
        };
        el.set_style("opacity", "0");
        el.set_style("transform", "translateY(30px)");
        el.set_style("transition", "opacity 0.6s ease, transform 0.6s ease");
        self.pending.insert(id.to_string());
    }

    /// True while the element is observed and still hidden.
    #[must_use]
    pub fn is_observing(&self, id: &str) -> bool {
        self.pending.contains(id)
    }

    /// Reports an intersection ratio for an element.
    ///
    /// Returns true if this call revealed the element.
    pub fn on_intersection(&mut self, doc: &mut Document, id: &str, ratio: f64) -> bool {
        if ratio < self.threshold || !self.pending.contains(id) {
            return false;
        }
        if let Some(el) = doc.find_mut(id) {
            el.set_style("opacity", "1");
            el.set_style("transform", "translateY(0)");
        }
        // Fires once, then detaches.
        self.pending.remove(id);
        true
    }
}

/// Auto-advancing slideshow over the gallery slides.
///
/// The slide index is 1-based and wraps in both directions. The auto-advance
/// interval is an owned handle: starting it again replaces (cancels) the
/// previous one.
#[derive(Debug, Clone)]
pub struct Gallery {
    current: usize,
    auto_interval: Option<u64>,
    auto_elapsed: u64,
}

impl Gallery {
    /// Creates a gallery positioned on the first slide.
    #[must_use]
    pub fn new() -> Self {
        Self {
            current: 1,
            auto_interval: None,
            auto_elapsed: 0,
        }
    }

    /// Returns the 1-based index of the active slide.
    #[must_use]
    pub fn current(&self) -> usize {
        self.current
    }

    /// Shows slide `n` (1-based), wrapping past either end.
    pub fn jump(&mut self, doc: &mut Document, n: i64) {
        let count = doc.query_class("gallery-item").len();
        if count == 0 {
            return;
        }
        let count_i = i64::try_from(count).unwrap_or(i64::MAX);
        self.current = if n > count_i {
            1
        } else if n < 1 {
            count
        } else {
            usize::try_from(n).unwrap_or(1)
        };

        let active = self.current;
        for class in ["gallery-item", "dot"] {
            let mut index = 0usize;
            doc.for_each_class_mut(class, &mut |el| {
                index += 1;
                if index == active {
                    el.add_class("active");
                } else {
                    el.remove_class("active");
                }
            });
        }
    }

    /// Advances to the next slide.
    pub fn next(&mut self, doc: &mut Document) {
        let n = i64::try_from(self.current).unwrap_or(0) + 1;
        self.jump(doc, n);
    }

    /// Steps back to the previous slide.
    pub fn previous(&mut self, doc: &mut Document) {
        let n = i64::try_from(self.current).unwrap_or(2) - 1;
        self.jump(doc, n);
    }

    /// Starts (or restarts) auto-advance with the given interval.
    pub fn start_auto(&mut self, interval_ms: u64) {
        // Replacing the handle cancels the previous schedule.
        self.auto_interval = Some(interval_ms.max(1));
        self.auto_elapsed = 0;
    }

    /// Stops auto-advance.
    pub fn stop_auto(&mut self) {
        self.auto_interval = None;
        self.auto_elapsed = 0;
    }

    /// Advances the auto-advance clock; steps only while effects are enabled.
    pub fn tick(&mut self, doc: &mut Document, dt: u64, effects_enabled: bool) {
        let Some(interval) = self.auto_interval else {
            return;
        };
        if !effects_enabled {
            return;
        }
        self.auto_elapsed += dt;
        while self.auto_elapsed >= interval {
            self.auto_elapsed -= interval;
            self.next(doc);
        }
    }
}

impl Default for Gallery {
    fn default() -> Self {
        Self::new()
    }
}

/// Wires the configured effects to a rendered document and drives them.
#[derive(Debug)]
pub struct AnimationController {
    enabled: bool,
    greeting: Option<Typewriter>,
    bio: Option<Typewriter>,
    counters: Vec<Counter>,
    reveal: ScrollReveal,
}

impl AnimationController {
    /// Builds the controller from the configuration and starts the enabled
    /// effects against the rendered document.
    pub fn start(config: &Config, doc: &mut Document, prefers_reduced_motion: bool) -> Self {
        let settings = config.animations();
        let enabled = effects_enabled(&settings, prefers_reduced_motion);

        let mut controller = Self {
            enabled,
            greeting: None,
            bio: None,
            counters: Vec::new(),
            reveal: ScrollReveal::new(REVEAL_THRESHOLD),
        };
        if !enabled {
            return controller;
        }

        if let Some(greeting) = config.personal.as_ref().and_then(|p| p.greeting.as_ref()) {
            let mut tw = Typewriter::new(
                "hero-greeting",
                greeting,
                settings.greeting_speed(),
                settings.greeting_typing_delay,
            );
            tw.start(doc);
            controller.greeting = Some(tw);
        }

        if let Some(bio) = config.about.as_ref().and_then(|a| a.description.as_ref()) {
            let mut tw = Typewriter::new(
                "about-description",
                bio,
                settings.bio_speed(),
                settings.bio_typing_delay,
            );
            tw.start(doc);
            controller.bio = Some(tw);
        }

        let statistics = config
            .about
            .as_ref()
            .filter(|about| about.enabled)
            .map(|about| about.statistics.as_slice())
            .unwrap_or_default();
        for (index, stat) in statistics.iter().enumerate() {
            let id = format!("stat-number-{}", index + 1);
            if doc.find(&id).is_some() {
                controller
                    .counters
                    .push(Counter::new(&id, stat.number, settings.counter_duration));
            }
        }

        controller
    }

    /// Returns true when effects run at all.
    #[must_use]
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Access to the reveal observer for wiring additional elements.
    pub fn reveal_mut(&mut self) -> &mut ScrollReveal {
        &mut self.reveal
    }

    /// Restarts the greeting typewriter (e.g. after a re-render).
    pub fn restart_greeting(&mut self, doc: &mut Document) {
        if let Some(tw) = &mut self.greeting {
            tw.start(doc);
        }
    }

    /// Advances every running effect by `dt` milliseconds.
    pub fn tick(&mut self, doc: &mut Document, dt: u64) {
        if !self.enabled {
            return;
        }
        if let Some(tw) = &mut self.greeting {
            tw.tick(doc, dt);
        }
        if let Some(tw) = &mut self.bio {
            tw.tick(doc, dt);
        }
        for counter in &mut self.counters {
            counter.tick(doc, dt);
        }
    }

    /// Reports an element intersection: activates pending counters at the
    /// counter threshold, reveals observed elements at the reveal threshold.
    pub fn on_intersection(&mut self, doc: &mut Document, id: &str, ratio: f64) {
        if !self.enabled {
            return;
        }
        if ratio >= COUNTER_THRESHOLD {
            if let Some(counter) = self
                .counters
                .iter_mut()
                .find(|c| c.target_id() == id && !c.is_started())
            {
                counter.start(doc);
            }
        }
        self.reveal.on_intersection(doc, id, ratio);
    }
}
