// SPDX-License-Identifier: MIT OR Apache-2.0
//! In-memory document.
//!
//! Records every marker the behavior layer writes so hosts without a
//! browser (tests, the native preview) can drive and inspect a page.

use super::{
    CarouselDocument, ElementLookup, IndicatorSpec, MediaDocument, MenuDocument, OverlaySpec,
    RevealDocument, SlidePhase, SliderDocument,
};
use crate::events::Target;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

const LOG_TARGET: &str = "vitrine::document";

/// Markup shape of a page
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PageLayout {
    /// Number of carousel cards
    pub slides: usize,
    /// Indicator controls already present in markup
    pub indicators: usize,
    /// Whether the indicator container exists
    pub indicator_container: bool,
    /// Whether prev/next buttons exist
    pub nav_buttons: bool,
    /// Whether the carousel container exists
    pub container: bool,
    /// Whether the progress fill exists
    pub progress_bar: bool,
    /// Whether every card has a details panel with learn-more/close controls
    pub details: bool,
    /// Cards carrying a media element inside a media container
    pub media: Vec<usize>,
    /// Cards carrying a media element but no container
    pub bare_media: Vec<usize>,
    /// Cards whose tap-to-play overlay already exists in markup
    pub overlays: Vec<usize>,
    /// Viewport width in CSS pixels
    pub viewport_width: u32,
    /// Viewport height in CSS pixels
    pub viewport_height: u32,
    /// Whether the host can observe intersections
    pub observation: bool,
    /// Number of mobile menu links, `None` when there is no menu
    pub menu_links: Option<usize>,
    /// Whether the mobile menu has a close button
    pub menu_close: bool,
    /// Viewport-relative tops of the text reveal elements
    pub reveals: Vec<f64>,
    /// Largest scroll offset of the horizontal slider, `None` when absent
    pub slider_max_scroll: Option<f64>,
}

impl Default for PageLayout {
    fn default() -> Self {
        Self {
            slides: 3,
            indicators: 0,
            indicator_container: true,
            nav_buttons: true,
            container: true,
            progress_bar: true,
            details: true,
            media: Vec::new(),
            bare_media: Vec::new(),
            overlays: Vec::new(),
            viewport_width: 1280,
            viewport_height: 800,
            observation: true,
            menu_links: None,
            menu_close: true,
            reveals: Vec::new(),
            slider_max_scroll: None,
        }
    }
}

/// Recorded state of a media element
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MemoryMedia {
    /// Whether the last command was play
    pub playing: bool,
    /// Playback position in seconds
    pub current_time: f64,
    /// Play commands received
    pub play_commands: u32,
    /// Pause commands received
    pub pause_commands: u32,
}

/// Recorded state of an indicator control
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryIndicator {
    /// Active marker
    pub active: bool,
    /// Label, set on synthesized indicators
    pub label: Option<String>,
    /// Test identifier, set on synthesized indicators
    pub test_id: Option<String>,
}

#[derive(Debug, Clone, Default)]
struct MemorySlide {
    phase: SlidePhase,
    details: Option<bool>,
    media: Option<MemoryMedia>,
    media_container: bool,
}

#[derive(Debug, Clone)]
struct MemoryOverlay {
    visible: bool,
    test_id: Option<String>,
}

#[derive(Debug, Clone, Default)]
struct MemoryMenu {
    open: bool,
    toggle_expanded: bool,
    has_close: bool,
    link_count: usize,
}

#[derive(Debug, Clone)]
struct MemoryReveal {
    top: f64,
    revealed: bool,
}

#[derive(Debug, Clone)]
struct MemorySlider {
    scroll_left: f64,
    max_scroll: f64,
}

/// Document kept entirely in memory
#[derive(Debug, Clone)]
pub struct MemoryDocument {
    slides: Vec<MemorySlide>,
    indicators: Vec<MemoryIndicator>,
    indicator_container: bool,
    nav_buttons: bool,
    container: bool,
    progress: Option<f64>,
    overlays: BTreeMap<usize, MemoryOverlay>,
    viewport_width: u32,
    viewport_height: u32,
    observation: bool,
    menu: Option<MemoryMenu>,
    scroll_locked: bool,
    reveals: Vec<MemoryReveal>,
    slider: Option<MemorySlider>,
}

impl MemoryDocument {
    /// Default layout with `slides` cards
    pub fn new(slides: usize) -> Self {
        Self::from_layout(&PageLayout {
            slides,
            ..PageLayout::default()
        })
    }

    /// Build a document from a layout
    pub fn from_layout(layout: &PageLayout) -> Self {
        let slides = (0..layout.slides)
            .map(|index| {
                let contained = layout.media.contains(&index);
                let bare = layout.bare_media.contains(&index);
                MemorySlide {
                    phase: SlidePhase::Idle,
                    details: layout.details.then_some(false),
                    media: (contained || bare).then(MemoryMedia::default),
                    media_container: contained,
                }
            })
            .collect();

        let overlays = layout
            .overlays
            .iter()
            .map(|index| {
                (
                    *index,
                    MemoryOverlay {
                        visible: true,
                        test_id: None,
                    },
                )
            })
            .collect();

        Self {
            slides,
            indicators: vec![MemoryIndicator::default(); layout.indicators],
            indicator_container: layout.indicator_container,
            nav_buttons: layout.nav_buttons,
            container: layout.container,
            progress: layout.progress_bar.then_some(0.0),
            overlays,
            viewport_width: layout.viewport_width,
            viewport_height: layout.viewport_height,
            observation: layout.observation,
            menu: layout.menu_links.map(|link_count| MemoryMenu {
                has_close: layout.menu_close,
                link_count,
                ..MemoryMenu::default()
            }),
            scroll_locked: false,
            reveals: layout
                .reveals
                .iter()
                .map(|top| MemoryReveal {
                    top: *top,
                    revealed: false,
                })
                .collect(),
            slider: layout.slider_max_scroll.map(|max_scroll| MemorySlider {
                scroll_left: 0.0,
                max_scroll,
            }),
        }
    }

    /// Display phase of a slide
    pub fn slide_phase(&self, slide: usize) -> Option<SlidePhase> {
        self.slides.get(slide).map(|s| s.phase)
    }

    /// Slides carrying the active marker
    pub fn active_slides(&self) -> Vec<usize> {
        self.slides
            .iter()
            .enumerate()
            .filter(|(_, s)| s.phase == SlidePhase::Active)
            .map(|(i, _)| i)
            .collect()
    }

    /// Whether a details panel is expanded
    pub fn is_details_open(&self, slide: usize) -> bool {
        self.slides
            .get(slide)
            .and_then(|s| s.details)
            .unwrap_or(false)
    }

    /// Indicator control by position
    pub fn indicator(&self, index: usize) -> Option<&MemoryIndicator> {
        self.indicators.get(index)
    }

    /// Indicators carrying the active marker
    pub fn active_indicators(&self) -> Vec<usize> {
        self.indicators
            .iter()
            .enumerate()
            .filter(|(_, ind)| ind.active)
            .map(|(i, _)| i)
            .collect()
    }

    /// Progress-fill width, `None` without a progress bar
    pub fn progress(&self) -> Option<f64> {
        self.progress
    }

    /// Media element of a slide
    pub fn media(&self, slide: usize) -> Option<&MemoryMedia> {
        self.slides.get(slide).and_then(|s| s.media.as_ref())
    }

    /// Simulate playback progress on a media element
    pub fn set_media_time(&mut self, slide: usize, seconds: f64) {
        if let Some(media) = self.slides.get_mut(slide).and_then(|s| s.media.as_mut()) {
            media.current_time = seconds;
        }
    }

    /// Whether a tap-to-play overlay is shown, `None` when it does not exist
    pub fn overlay_visible(&self, slide: usize) -> Option<bool> {
        self.overlays.get(&slide).map(|o| o.visible)
    }

    /// Test identifier of a synthesized overlay
    pub fn overlay_test_id(&self, slide: usize) -> Option<&str> {
        self.overlays.get(&slide).and_then(|o| o.test_id.as_deref())
    }

    /// Whether the mobile menu is open
    pub fn is_menu_open(&self) -> bool {
        self.menu.as_ref().is_some_and(|m| m.open)
    }

    /// `aria-expanded` of the menu toggle
    pub fn is_toggle_expanded(&self) -> bool {
        self.menu.as_ref().is_some_and(|m| m.toggle_expanded)
    }

    /// Whether body scrolling is locked
    pub fn is_scroll_locked(&self) -> bool {
        self.scroll_locked
    }

    /// Whether a reveal element carries the revealed marker
    pub fn is_revealed(&self, index: usize) -> bool {
        self.reveals.get(index).is_some_and(|r| r.revealed)
    }

    /// Move a reveal element, as scrolling would
    pub fn set_reveal_top(&mut self, index: usize, top: f64) {
        if let Some(reveal) = self.reveals.get_mut(index) {
            reveal.top = top;
        }
    }

    /// Resize the viewport height
    pub fn set_viewport_height(&mut self, height: u32) {
        self.viewport_height = height;
    }
}

impl ElementLookup for MemoryDocument {
    fn has_target(&self, target: Target) -> bool {
        let slide = |i: usize| self.slides.get(i);
        match target {
            Target::CarouselContainer => self.container,
            Target::PrevButton | Target::NextButton => self.nav_buttons,
            Target::IndicatorContainer => self.indicator_container,
            Target::Indicator(i) => i < self.indicators.len(),
            Target::ProgressBar => self.progress.is_some(),
            Target::DetailsPanel(i) | Target::LearnMore(i) | Target::CloseDetails(i) => {
                slide(i).is_some_and(|s| s.details.is_some())
            }
            Target::Media(i) => slide(i).is_some_and(|s| s.media.is_some()),
            Target::MediaContainer(i) => slide(i).is_some_and(|s| s.media_container),
            Target::TapOverlay(i) => self.overlays.contains_key(&i),
            Target::MenuToggle | Target::Menu => self.menu.is_some(),
            Target::MenuClose => self.menu.as_ref().is_some_and(|m| m.has_close),
            Target::MenuLink(i) => self.menu.as_ref().is_some_and(|m| i < m.link_count),
            Target::RevealText(i) => i < self.reveals.len(),
            Target::Slider => self.slider.is_some(),
            Target::Window => true,
        }
    }
}

impl CarouselDocument for MemoryDocument {
    fn slide_count(&self) -> usize {
        self.slides.len()
    }

    fn set_slide_phase(&mut self, slide: usize, phase: SlidePhase) {
        if let Some(s) = self.slides.get_mut(slide) {
            tracing::debug!(target: LOG_TARGET, slide, ?phase, "slide phase");
            s.phase = phase;
        }
    }

    fn set_details_open(&mut self, slide: usize, open: bool) {
        if let Some(details) = self.slides.get_mut(slide).and_then(|s| s.details.as_mut()) {
            tracing::debug!(target: LOG_TARGET, slide, open, "details panel");
            *details = open;
        }
    }

    fn indicator_count(&self) -> usize {
        self.indicators.len()
    }

    fn append_indicator(&mut self, spec: &IndicatorSpec) {
        tracing::debug!(target: LOG_TARGET, test_id = %spec.test_id, "indicator appended");
        self.indicators.push(MemoryIndicator {
            active: false,
            label: Some(spec.label.clone()),
            test_id: Some(spec.test_id.clone()),
        });
    }

    fn set_indicator_active(&mut self, indicator: usize, active: bool) {
        if let Some(ind) = self.indicators.get_mut(indicator) {
            ind.active = active;
        }
    }

    fn set_progress(&mut self, percent: f64) {
        if let Some(progress) = self.progress.as_mut() {
            *progress = percent;
        }
    }
}

impl MediaDocument for MemoryDocument {
    fn viewport_width(&self) -> u32 {
        self.viewport_width
    }

    fn play_media(&mut self, slide: usize) {
        if let Some(media) = self.slides.get_mut(slide).and_then(|s| s.media.as_mut()) {
            tracing::debug!(target: LOG_TARGET, slide, "media play");
            media.playing = true;
            media.play_commands += 1;
        }
    }

    fn pause_media(&mut self, slide: usize) {
        if let Some(media) = self.slides.get_mut(slide).and_then(|s| s.media.as_mut()) {
            tracing::debug!(target: LOG_TARGET, slide, "media pause");
            media.playing = false;
            media.pause_commands += 1;
        }
    }

    fn rewind_media(&mut self, slide: usize) {
        if let Some(media) = self.slides.get_mut(slide).and_then(|s| s.media.as_mut()) {
            media.current_time = 0.0;
        }
    }

    fn create_overlay(&mut self, spec: &OverlaySpec) {
        tracing::debug!(target: LOG_TARGET, test_id = %spec.test_id, "overlay created");
        self.overlays.insert(
            spec.index,
            MemoryOverlay {
                visible: true,
                test_id: Some(spec.test_id.clone()),
            },
        );
    }

    fn set_overlay_visible(&mut self, slide: usize, visible: bool) {
        if let Some(overlay) = self.overlays.get_mut(&slide) {
            tracing::debug!(target: LOG_TARGET, slide, visible, "overlay");
            overlay.visible = visible;
        }
    }
}

impl MenuDocument for MemoryDocument {
    fn menu_link_count(&self) -> usize {
        self.menu.as_ref().map_or(0, |m| m.link_count)
    }

    fn set_menu_open(&mut self, open: bool) {
        if let Some(menu) = self.menu.as_mut() {
            tracing::debug!(target: LOG_TARGET, open, "mobile menu");
            menu.open = open;
        }
    }

    fn set_toggle_expanded(&mut self, expanded: bool) {
        if let Some(menu) = self.menu.as_mut() {
            menu.toggle_expanded = expanded;
        }
    }

    fn set_scroll_locked(&mut self, locked: bool) {
        self.scroll_locked = locked;
    }
}

impl RevealDocument for MemoryDocument {
    fn reveal_count(&self) -> usize {
        self.reveals.len()
    }

    fn supports_observation(&self) -> bool {
        self.observation
    }

    fn viewport_height(&self) -> u32 {
        self.viewport_height
    }

    fn reveal_top(&self, index: usize) -> Option<f64> {
        self.reveals.get(index).map(|r| r.top)
    }

    fn set_revealed(&mut self, index: usize) {
        if let Some(reveal) = self.reveals.get_mut(index) {
            tracing::debug!(target: LOG_TARGET, index, "text revealed");
            reveal.revealed = true;
        }
    }
}

impl SliderDocument for MemoryDocument {
    fn slider_scroll_left(&self) -> f64 {
        self.slider.as_ref().map_or(0.0, |s| s.scroll_left)
    }

    fn slider_max_scroll(&self) -> f64 {
        self.slider.as_ref().map_or(0.0, |s| s.max_scroll)
    }

    fn set_slider_scroll_left(&mut self, left: f64) {
        if let Some(slider) = self.slider.as_mut() {
            slider.scroll_left = left;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_presence() {
        let doc = MemoryDocument::from_layout(&PageLayout {
            slides: 2,
            media: vec![0],
            bare_media: vec![1],
            ..PageLayout::default()
        });

        assert!(doc.has_target(Target::MediaContainer(0)));
        assert!(doc.has_target(Target::Media(1)));
        assert!(!doc.has_target(Target::MediaContainer(1)));
        assert!(doc.has_target(Target::LearnMore(1)));
        assert!(!doc.has_target(Target::Menu));
        assert!(!doc.has_target(Target::Slider));
    }

    #[test]
    fn test_layout_parses_from_ron() {
        let layout: PageLayout = ron::from_str("(slides: 4, menu_links: Some(3))").unwrap();
        assert_eq!(layout.slides, 4);
        assert_eq!(layout.menu_links, Some(3));
        assert!(layout.progress_bar);
    }
}
