// SPDX-License-Identifier: MIT OR Apache-2.0
//! Document ports.
//!
//! The presentation document is supplied by markup. Components only see it
//! through these traits: every optional element is a presence check on
//! [`ElementLookup`], every write is a narrow command.

pub mod memory;

pub use memory::{MemoryDocument, MemoryIndicator, MemoryMedia, PageLayout};

use crate::events::Target;
use serde::{Deserialize, Serialize};

/// Display phase of a carousel slide
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SlidePhase {
    /// Current slide
    Active,
    /// Outgoing slide during its transition window
    Leaving,
    /// Neither current nor transitioning
    #[default]
    Idle,
}

/// An indicator control synthesized to match a slide
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndicatorSpec {
    /// Slide ordinal
    pub index: usize,
    /// Human-readable label
    pub label: String,
    /// Stable identifier for automation
    pub test_id: String,
}

impl IndicatorSpec {
    /// Indicator for a slide ordinal
    pub fn for_slide(index: usize) -> Self {
        Self {
            index,
            label: format!("Go to slide {}", index + 1),
            test_id: format!("carousel-indicator-{index}"),
        }
    }
}

/// A tap-to-play overlay synthesized for a slide
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OverlaySpec {
    /// Slide ordinal
    pub index: usize,
    /// Human-readable label
    pub label: String,
    /// Stable identifier for automation
    pub test_id: String,
}

impl OverlaySpec {
    /// Overlay for a slide ordinal
    pub fn for_slide(index: usize) -> Self {
        Self {
            index,
            label: "Tap to play video".to_string(),
            test_id: format!("tap-to-play-{index}"),
        }
    }
}

/// Optional element lookup
pub trait ElementLookup {
    /// Check whether the element named by `target` exists
    fn has_target(&self, target: Target) -> bool;
}

/// Carousel cards, indicators and progress fill
pub trait CarouselDocument: ElementLookup {
    /// Number of slide cards
    fn slide_count(&self) -> usize;
    /// Write the display phase marker of a slide
    fn set_slide_phase(&mut self, slide: usize, phase: SlidePhase);
    /// Write the expanded/collapsed marker of a details panel
    fn set_details_open(&mut self, slide: usize, open: bool);
    /// Number of indicator controls present
    fn indicator_count(&self) -> usize;
    /// Append an indicator control to the indicator container
    fn append_indicator(&mut self, spec: &IndicatorSpec);
    /// Write the active marker of an indicator
    fn set_indicator_active(&mut self, indicator: usize, active: bool);
    /// Write the progress-fill width, 0.0 to 100.0
    fn set_progress(&mut self, percent: f64);
}

/// Per-card media elements
pub trait MediaDocument: ElementLookup {
    /// Viewport width in CSS pixels
    fn viewport_width(&self) -> u32;
    /// Issue a play command
    fn play_media(&mut self, slide: usize);
    /// Issue a pause command
    fn pause_media(&mut self, slide: usize);
    /// Reset `currentTime` to the start
    fn rewind_media(&mut self, slide: usize);
    /// Create a tap-to-play overlay inside the media container
    fn create_overlay(&mut self, spec: &OverlaySpec);
    /// Show or hide the tap-to-play overlay
    fn set_overlay_visible(&mut self, slide: usize, visible: bool);
}

/// Mobile navigation overlay
pub trait MenuDocument: ElementLookup {
    /// Number of links inside the menu
    fn menu_link_count(&self) -> usize;
    /// Write the open/closed marker and `aria-hidden` of the menu
    fn set_menu_open(&mut self, open: bool);
    /// Write `aria-expanded` on the toggle button
    fn set_toggle_expanded(&mut self, expanded: bool);
    /// Lock or unlock scrolling of the document body
    fn set_scroll_locked(&mut self, locked: bool);
}

/// Elements flagged for text reveal
pub trait RevealDocument: ElementLookup {
    /// Number of reveal elements
    fn reveal_count(&self) -> usize;
    /// Whether the host can observe intersections
    fn supports_observation(&self) -> bool;
    /// Viewport height in CSS pixels
    fn viewport_height(&self) -> u32;
    /// Top of a reveal element relative to the viewport
    fn reveal_top(&self, index: usize) -> Option<f64>;
    /// Write the revealed marker
    fn set_revealed(&mut self, index: usize);
}

/// Horizontal slider
pub trait SliderDocument: ElementLookup {
    /// Current horizontal scroll offset
    fn slider_scroll_left(&self) -> f64;
    /// Largest horizontal scroll offset
    fn slider_max_scroll(&self) -> f64;
    /// Write the horizontal scroll offset
    fn set_slider_scroll_left(&mut self, left: f64);
}

/// Everything the page needs from its document
pub trait PageDocument:
    CarouselDocument + MediaDocument + MenuDocument + RevealDocument + SliderDocument
{
}

impl<T> PageDocument for T where
    T: CarouselDocument + MediaDocument + MenuDocument + RevealDocument + SliderDocument
{
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_synthesized_identifiers() {
        let spec = IndicatorSpec::for_slide(2);
        assert_eq!(spec.label, "Go to slide 3");
        assert_eq!(spec.test_id, "carousel-indicator-2");
        assert_eq!(OverlaySpec::for_slide(0).test_id, "tap-to-play-0");
    }
}
