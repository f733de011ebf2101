//! Video playback: embed URLs, grid playback, and the modal player.
//!
//! A single embed slot exists across the whole page: every play operation
//! (grid card or modal) first clears every competing frame, so at most one
//! video element ever carries a live source. Pausing clears the source and
//! re-arms the card overlay; playback stops because the frame unloads.

use serde::Deserialize;

use crate::config::Video;
use crate::constants::MOBILE_BREAKPOINT;
use crate::dom::{Document, Element};

/// Video hosting platform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    /// YouTube (landscape-oriented embeds).
    #[default]
    Youtube,
    /// TikTok (portrait-oriented embeds).
    Tiktok,
}

impl Platform {
    /// Display label shown on the card badge.
    #[must_use]
    pub fn badge(self) -> &'static str {
        match self {
            Platform::Youtube => "YouTube",
            Platform::Tiktok => "TikTok",
        }
    }

    /// Embed URL for in-grid playback.
    #[must_use]
    pub fn embed_url(self, video_id: &str) -> String {
        match self {
            Platform::Youtube => {
                format!("https://www.youtube.com/embed/{video_id}?autoplay=1&rel=0")
            }
            Platform::Tiktok => format!("https://www.tiktok.com/embed/v2/{video_id}"),
        }
    }

    /// Embed URL for the modal player; YouTube gets the extended parameter
    /// set for framed playback.
    #[must_use]
    pub fn modal_embed_url(self, video_id: &str) -> String {
        match self {
            Platform::Youtube => format!(
                "https://www.youtube.com/embed/{video_id}?autoplay=1&rel=0&modestbranding=1&playsinline=0&controls=1"
            ),
            Platform::Tiktok => format!("https://www.tiktok.com/embed/v2/{video_id}"),
        }
    }
}

/// Modal layout, determined by the video orientation and viewport width.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModalLayout {
    /// Landscape video on a desktop-width viewport.
    LandscapeDesktop,
    /// Landscape video on a mobile-width viewport.
    LandscapeMobile,
    /// Portrait video, phone-style framing on every viewport.
    PortraitMobile,
}

impl ModalLayout {
    /// Picks the layout for a video at a viewport width.
    ///
    /// Portrait-flagged videos always get the phone-style framing, whatever
    /// the viewport; landscape videos split on the mobile breakpoint.
    #[must_use]
    pub fn for_video(video: &Video, viewport_width: u32) -> Self {
        if video.is_portrait {
            ModalLayout::PortraitMobile
        } else if viewport_width <= MOBILE_BREAKPOINT {
            ModalLayout::LandscapeMobile
        } else {
            ModalLayout::LandscapeDesktop
        }
    }

    /// Class list applied to the modal for this layout.
    #[must_use]
    pub fn classes(self) -> &'static [&'static str] {
        match self {
            ModalLayout::LandscapeDesktop => &["landscape-video", "landscape-desktop"],
            ModalLayout::LandscapeMobile => &["landscape-video", "landscape-mobile"],
            ModalLayout::PortraitMobile => &["portrait-video", "portrait-mobile"],
        }
    }
}

/// Id of the modal player frame.
pub const MODAL_IFRAME_ID: &str = "video-modal-iframe";

/// Clears every embedded frame except `keep`, re-arming its card overlay.
///
/// Shared by grid playback and the modal: this is what makes "at most one
/// live embed source" hold however the two are interleaved. The modal frame
/// shares the slot, so it is cleared here too.
pub fn pause_all_videos(doc: &mut Document, keep: Option<&str>) {
    if keep != Some(MODAL_IFRAME_ID) {
        if let Some(iframe) = doc.find_mut(MODAL_IFRAME_ID) {
            iframe.set_attr("src", "");
        }
    }

    doc.for_each_class_mut("video-container", &mut |container| {
        let playing = container
            .children_mut()
            .iter_mut()
            .find(|child| child.has_class("video-iframe"))
            .is_some_and(|iframe| {
                if iframe.id() == keep && keep.is_some() {
                    return false;
                }
                let live = iframe.attr("src").is_some_and(|src| !src.is_empty());
                if live {
                    iframe.set_attr("src", "");
                }
                live
            });

        if playing {
            container.remove_class("video-playing");
            if let Some(overlay) = container.find_class_mut("video-overlay") {
                overlay.set_style("display", "flex");
            }
        }
    });
}

/// Starts in-grid playback of one card's frame, pausing every other frame
/// first.
pub fn load_video(doc: &mut Document, platform: Platform, video_id: &str, iframe_id: &str) {
    pause_all_videos(doc, Some(iframe_id));

    let url = platform.embed_url(video_id);
    doc.for_each_class_mut("video-container", &mut |container| {
        let owns_frame = container
            .children_mut()
            .iter_mut()
            .find(|child| child.id() == Some(iframe_id))
            .map(|iframe| iframe.set_attr("src", &url))
            .is_some();

        if owns_frame {
            container.add_class("video-playing");
            if let Some(overlay) = container.find_class_mut("video-overlay") {
                overlay.set_style("display", "none");
            }
        }
    });
}

/// Modal player state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModalState {
    /// No modal is shown.
    Closed,
    /// The modal is shown, playing one video in one layout.
    Open {
        /// Identifier of the playing video.
        video_id: String,
        /// Layout in effect.
        layout: ModalLayout,
    },
}

/// The modal video player.
///
/// Open pauses every sibling frame, routes the layout, points the modal
/// frame at the platform embed URL, and captures focus. Close clears the
/// frame (stopping playback), hides the modal, and restores page scroll.
/// Both transitions are idempotent.
#[derive(Debug)]
pub struct VideoModalController {
    state: ModalState,
}

impl VideoModalController {
    /// Creates a controller in the closed state.
    #[must_use]
    pub fn new() -> Self {
        Self {
            state: ModalState::Closed,
        }
    }

    /// Returns the current state.
    #[must_use]
    pub fn state(&self) -> &ModalState {
        &self.state
    }

    /// Returns true while the modal is shown.
    #[must_use]
    pub fn is_open(&self) -> bool {
        matches!(self.state, ModalState::Open { .. })
    }

    /// Opens the modal for a video at the given viewport width.
    pub fn open(&mut self, doc: &mut Document, video: &Video, viewport_width: u32) {
        // The modal takes over the single embed slot.
        pause_all_videos(doc, None);

        let layout = ModalLayout::for_video(video, viewport_width);

        if let Some(title) = doc.find_mut("video-modal-title") {
            title.set_text(&video.title);
        }
        if let Some(description) = doc.find_mut("video-modal-description") {
            description.set_text(&video.description);
        }

        if let Some(modal) = doc.find_mut("video-modal") {
            let mut classes = vec!["video-modal"];
            classes.extend_from_slice(layout.classes());
            classes.push("active");
            modal.set_classes(&classes);
        }

        if let Some(iframe) = doc.find_mut(MODAL_IFRAME_ID) {
            iframe.set_attr("src", &video.platform.modal_embed_url(&video.video_id));
        }

        doc.body_mut().add_class("modal-open");
        doc.set_focus("video-modal");

        self.state = ModalState::Open {
            video_id: video.video_id.clone(),
            layout,
        };
    }

    /// Closes the modal. Closing an already-closed modal is a no-op.
    pub fn close(&mut self, doc: &mut Document) {
        if !self.is_open() {
            return;
        }

        if let Some(iframe) = doc.find_mut(MODAL_IFRAME_ID) {
            iframe.set_attr("src", "");
        }
        if let Some(modal) = doc.find_mut("video-modal") {
            modal.remove_class("active");
        }

        // Restore page scroll.
        doc.body_mut().remove_class("modal-open");
        if doc.focused() == Some("video-modal") {
            doc.clear_focus();
        }

        self.state = ModalState::Closed;
    }

    /// Backdrop click closes the modal.
    pub fn on_backdrop_click(&mut self, doc: &mut Document) {
        self.close(doc);
    }

    /// The explicit close control closes the modal.
    pub fn on_close_control(&mut self, doc: &mut Document) {
        self.close(doc);
    }

    /// Escape closes the modal; every other key is ignored.
    pub fn on_key(&mut self, doc: &mut Document, key: &str) {
        if key == "Escape" {
            self.close(doc);
        }
    }
}

impl Default for VideoModalController {
    fn default() -> Self {
        Self::new()
    }
}
