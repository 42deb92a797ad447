// SPDX-License-Identifier: MIT OR Apache-2.0
//! Horizontal slider driven by the vertical wheel.

use crate::document::SliderDocument;
use crate::events::{EventKind, EventOutcome, ListenerRegistry, Target};
use crate::settings::SliderSettings;

/// Translates vertical wheel motion into horizontal scrolling
#[derive(Debug, Clone)]
pub struct HorizontalSlider {
    multiplier: f64,
}

impl HorizontalSlider {
    /// Mount the slider. Returns `None` when the page has none.
    pub fn mount<D: SliderDocument>(
        doc: &D,
        settings: &SliderSettings,
        listeners: &mut ListenerRegistry,
    ) -> Option<Self> {
        if !doc.has_target(Target::Slider) {
            return None;
        }
        listeners.register(Target::Slider, EventKind::Wheel);
        tracing::info!(max_scroll = doc.slider_max_scroll(), "Mounted horizontal slider");
        Some(Self {
            multiplier: settings.wheel_multiplier,
        })
    }

    /// Handle a wheel event over the slider.
    ///
    /// Vertical-dominant motion scrolls horizontally and is consumed while
    /// the slider can still move. At either end the page scrolls normally.
    pub fn on_wheel<D: SliderDocument>(&self, doc: &mut D, delta_x: f64, delta_y: f64) -> EventOutcome {
        if delta_y.abs() <= delta_x.abs() {
            return EventOutcome::Ignored;
        }

        let max = doc.slider_max_scroll().max(0.0);
        let current = doc.slider_scroll_left();
        let next = (current + delta_y * self.multiplier).clamp(0.0, max);
        if next == current {
            return EventOutcome::Ignored;
        }

        doc.set_slider_scroll_left(next);
        tracing::trace!(from = current, to = next, "Slider scrolled");
        EventOutcome::Consumed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::{MemoryDocument, PageLayout};

    fn slider_doc() -> MemoryDocument {
        MemoryDocument::from_layout(&PageLayout {
            slider_max_scroll: Some(500.0),
            ..PageLayout::default()
        })
    }

    fn mount(doc: &MemoryDocument) -> HorizontalSlider {
        let mut listeners = ListenerRegistry::new();
        let slider = HorizontalSlider::mount(doc, &SliderSettings::default(), &mut listeners).unwrap();
        assert!(listeners.is_registered(Target::Slider, EventKind::Wheel));
        slider
    }

    #[test]
    fn test_vertical_wheel_scrolls_horizontally() {
        let mut doc = slider_doc();
        let slider = mount(&doc);
        assert_eq!(slider.on_wheel(&mut doc, 0.0, 120.0), EventOutcome::Consumed);
        assert_eq!(doc.slider_scroll_left(), 120.0);
    }

    #[test]
    fn test_clamps_and_releases_at_edges() {
        let mut doc = slider_doc();
        let slider = mount(&doc);
        assert_eq!(slider.on_wheel(&mut doc, 0.0, 800.0), EventOutcome::Consumed);
        assert_eq!(doc.slider_scroll_left(), 500.0);

        // Already at the end, the page takes over
        assert_eq!(slider.on_wheel(&mut doc, 0.0, 50.0), EventOutcome::Ignored);

        assert_eq!(slider.on_wheel(&mut doc, 0.0, -900.0), EventOutcome::Consumed);
        assert_eq!(doc.slider_scroll_left(), 0.0);
        assert_eq!(slider.on_wheel(&mut doc, 0.0, -10.0), EventOutcome::Ignored);
    }

    #[test]
    fn test_horizontal_wheel_is_left_alone() {
        let mut doc = slider_doc();
        let slider = mount(&doc);
        assert_eq!(slider.on_wheel(&mut doc, 40.0, 10.0), EventOutcome::Ignored);
        assert_eq!(doc.slider_scroll_left(), 0.0);
    }

    #[test]
    fn test_missing_slider() {
        let doc = MemoryDocument::new(1);
        let mut listeners = ListenerRegistry::new();
        assert!(HorizontalSlider::mount(&doc, &SliderSettings::default(), &mut listeners).is_none());
    }
}
