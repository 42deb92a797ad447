// SPDX-License-Identifier: MIT OR Apache-2.0
//! Viewport-gated media playback for carousel cards.
//!
//! A card's media plays only while its container is visible above the
//! threshold and the card is the carousel's current slide. Narrow viewports
//! additionally require a tap on the card's overlay since the last reset.
//!
//! The current slide is read from [`CarouselState`] on every event; this
//! module never writes carousel state.

use crate::carousel::CarouselState;
use crate::document::{MediaDocument, OverlaySpec};
use crate::events::{EventKind, ListenerRegistry, Target};
use crate::settings::PlaybackSettings;
use indexmap::IndexMap;

/// Viewport class, decided once per page load
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewportClass {
    /// Wide viewport, visibility alone drives playback
    Desktop,
    /// Narrow viewport, playback starts only from a tap
    Mobile,
}

impl ViewportClass {
    /// Classify a viewport width
    pub fn from_width(width: u32, mobile_breakpoint: u32) -> Self {
        if width <= mobile_breakpoint {
            Self::Mobile
        } else {
            Self::Desktop
        }
    }
}

/// Per-card playback state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaybackGate {
    /// Desktop gate
    Desktop {
        /// Whether the media was last told to play
        playing: bool,
    },
    /// Mobile gate
    Mobile {
        /// Whether the media was last told to play
        playing: bool,
        /// Whether the user tapped since the last reset
        armed: bool,
    },
}

impl PlaybackGate {
    fn for_viewport(viewport: ViewportClass) -> Self {
        match viewport {
            ViewportClass::Desktop => Self::Desktop { playing: false },
            ViewportClass::Mobile => Self::Mobile {
                playing: false,
                armed: false,
            },
        }
    }

    /// Whether the media is playing
    pub fn is_playing(&self) -> bool {
        match *self {
            Self::Desktop { playing } | Self::Mobile { playing, .. } => playing,
        }
    }
}

/// Plays, pauses and rewinds card media
#[derive(Debug, Clone)]
pub struct VisibilityPlaybackController {
    viewport: ViewportClass,
    threshold: f64,
    gates: IndexMap<usize, PlaybackGate>,
}

impl VisibilityPlaybackController {
    /// Attach gates to every card that has both a media element and a
    /// media container.
    pub fn mount<D: MediaDocument>(
        doc: &mut D,
        settings: &PlaybackSettings,
        slide_count: usize,
        listeners: &mut ListenerRegistry,
    ) -> Self {
        let viewport = ViewportClass::from_width(doc.viewport_width(), settings.mobile_breakpoint_px);
        let mut gates = IndexMap::new();

        for slide in 0..slide_count {
            if !doc.has_target(Target::Media(slide)) || !doc.has_target(Target::MediaContainer(slide)) {
                continue;
            }

            gates.insert(slide, PlaybackGate::for_viewport(viewport));
            listeners.register(Target::MediaContainer(slide), EventKind::Visibility);

            if viewport == ViewportClass::Mobile {
                if !doc.has_target(Target::TapOverlay(slide)) {
                    doc.create_overlay(&OverlaySpec::for_slide(slide));
                }
                doc.set_overlay_visible(slide, true);
                listeners.register(Target::TapOverlay(slide), EventKind::Click);
            }
        }

        tracing::info!(?viewport, gated = gates.len(), "Mounted media playback");
        Self {
            viewport,
            threshold: settings.visibility_threshold,
            gates,
        }
    }

    /// Viewport class in use
    pub fn viewport(&self) -> ViewportClass {
        self.viewport
    }

    /// Gate of a card, `None` when the card has no controllable media
    pub fn gate(&self, slide: usize) -> Option<PlaybackGate> {
        self.gates.get(&slide).copied()
    }

    /// Number of gated cards
    pub fn gated_count(&self) -> usize {
        self.gates.len()
    }

    /// Visibility of a card's media container changed
    pub fn on_visibility<D: MediaDocument>(
        &mut self,
        doc: &mut D,
        carousel: &CarouselState,
        slide: usize,
        ratio: f64,
    ) {
        let Some(gate) = self.gates.get_mut(&slide) else {
            return;
        };
        let visible = ratio >= self.threshold;
        let current = carousel.current_index() == slide;

        match gate {
            PlaybackGate::Desktop { playing } => {
                if visible && current {
                    doc.play_media(slide);
                    *playing = true;
                } else {
                    doc.pause_media(slide);
                    doc.rewind_media(slide);
                    *playing = false;
                }
            }
            PlaybackGate::Mobile { playing, armed } => {
                if !visible || !current {
                    doc.pause_media(slide);
                    doc.rewind_media(slide);
                    doc.set_overlay_visible(slide, true);
                    *playing = false;
                    *armed = false;
                }
            }
        }
        tracing::debug!(slide, ratio, visible, current, "Media visibility");
    }

    /// User tapped a card's tap-to-play overlay
    pub fn on_overlay_tap<D: MediaDocument>(
        &mut self,
        doc: &mut D,
        carousel: &CarouselState,
        slide: usize,
    ) -> bool {
        let Some(PlaybackGate::Mobile { playing, armed }) = self.gates.get_mut(&slide) else {
            return false;
        };
        if carousel.current_index() != slide {
            tracing::debug!(slide, "Ignoring tap on a card that is not current");
            return false;
        }

        doc.set_overlay_visible(slide, false);
        doc.play_media(slide);
        *armed = true;
        *playing = true;
        tracing::debug!(slide, "Tap to play");
        true
    }
}
