// SPDX-License-Identifier: MIT OR Apache-2.0
//! Page composition root.
//!
//! This module handles:
//! - Mounting every behavior against one document
//! - Routing host events to the component that registered for them
//! - Driving timers from the host clock

use crate::carousel::{CarouselController, CarouselState};
use crate::document::PageDocument;
use crate::events::{EventOutcome, Key, ListenerRegistry, PageEvent, Target};
use crate::menu::MobileMenu;
use crate::playback::VisibilityPlaybackController;
use crate::reveal::TextReveal;
use crate::settings::PageSettings;
use crate::slider::HorizontalSlider;
use crate::timers::Scheduler;
use std::time::Duration;

/// All behavior of one page load
#[derive(Debug)]
pub struct Page<D: PageDocument> {
    document: D,
    settings: PageSettings,
    scheduler: Scheduler,
    listeners: ListenerRegistry,
    carousel: Option<CarouselController>,
    playback: Option<VisibilityPlaybackController>,
    menu: Option<MobileMenu>,
    reveal: Option<TextReveal>,
    slider: Option<HorizontalSlider>,
}

impl<D: PageDocument> Page<D> {
    /// Mount every behavior whose elements are present
    pub fn mount(mut document: D, settings: PageSettings) -> Self {
        let mut scheduler = Scheduler::new();
        let mut listeners = ListenerRegistry::new();

        let carousel =
            CarouselController::mount(&mut document, &settings.carousel, &mut listeners, &mut scheduler);
        let playback = carousel.as_ref().map(|carousel| {
            VisibilityPlaybackController::mount(
                &mut document,
                &settings.playback,
                carousel.state().slide_count(),
                &mut listeners,
            )
        });
        let menu = MobileMenu::mount(&mut document, &mut listeners);
        let reveal = TextReveal::mount(&mut document, &settings.reveal, &mut listeners);
        let slider = HorizontalSlider::mount(&document, &settings.slider, &mut listeners);

        tracing::info!(
            carousel = carousel.is_some(),
            menu = menu.is_some(),
            reveal = reveal.is_some(),
            slider = slider.is_some(),
            listeners = listeners.len(),
            "Page mounted"
        );

        Self {
            document,
            settings,
            scheduler,
            listeners,
            carousel,
            playback,
            menu,
            reveal,
            slider,
        }
    }

    /// Route a host event.
    ///
    /// Events without a registered listener are ignored.
    pub fn dispatch(&mut self, event: &PageEvent) -> EventOutcome {
        if !self.listeners.listens(event) {
            return EventOutcome::Ignored;
        }

        match *event {
            PageEvent::Click(target) => self.click(target),
            PageEvent::PointerEnter(Target::CarouselContainer) => {
                if let Some(carousel) = self.carousel.as_mut() {
                    carousel.pointer_enter(&mut self.scheduler);
                }
                EventOutcome::Handled
            }
            PageEvent::PointerLeave(Target::CarouselContainer) => {
                if let Some(carousel) = self.carousel.as_mut() {
                    carousel.pointer_leave(&mut self.document, &mut self.scheduler);
                }
                EventOutcome::Handled
            }
            PageEvent::Visibility { target, ratio } => self.visibility(target, ratio),
            PageEvent::Wheel {
                target: Target::Slider,
                delta_x,
                delta_y,
            } => match self.slider.as_ref() {
                Some(slider) => slider.on_wheel(&mut self.document, delta_x, delta_y),
                None => EventOutcome::Ignored,
            },
            PageEvent::Scroll | PageEvent::Resize => {
                if let Some(reveal) = self.reveal.as_mut() {
                    reveal.poll(&mut self.document);
                }
                EventOutcome::Handled
            }
            PageEvent::KeyDown(Key::Escape) => {
                if let Some(menu) = self.menu.as_mut() {
                    menu.close(&mut self.document);
                }
                EventOutcome::Handled
            }
            _ => EventOutcome::Ignored,
        }
    }

    fn click(&mut self, target: Target) -> EventOutcome {
        let doc = &mut self.document;
        let scheduler = &mut self.scheduler;

        match target {
            Target::PrevButton | Target::NextButton | Target::Indicator(_) => {
                if let Some(carousel) = self.carousel.as_mut() {
                    match target {
                        Target::PrevButton => carousel.go_to_previous(doc, scheduler),
                        Target::NextButton => carousel.go_to_next(doc, scheduler),
                        Target::Indicator(index) => carousel.go_to_slide(doc, scheduler, index),
                        _ => false,
                    };
                }
            }
            Target::LearnMore(slide) => {
                if let Some(carousel) = self.carousel.as_mut() {
                    carousel.toggle_details(doc, scheduler, slide);
                }
            }
            Target::CloseDetails(slide) => {
                if let Some(carousel) = self.carousel.as_mut() {
                    carousel.close_details(doc, scheduler, slide);
                }
            }
            Target::TapOverlay(slide) => {
                if let (Some(playback), Some(carousel)) = (self.playback.as_mut(), self.carousel.as_ref()) {
                    playback.on_overlay_tap(doc, carousel.state(), slide);
                }
            }
            Target::MenuToggle => {
                if let Some(menu) = self.menu.as_mut() {
                    menu.toggle(doc);
                }
            }
            Target::MenuClose | Target::MenuLink(_) => {
                if let Some(menu) = self.menu.as_mut() {
                    menu.close(doc);
                }
            }
            _ => return EventOutcome::Ignored,
        }
        EventOutcome::Handled
    }

    fn visibility(&mut self, target: Target, ratio: f64) -> EventOutcome {
        match target {
            Target::MediaContainer(slide) => {
                if let (Some(playback), Some(carousel)) = (self.playback.as_mut(), self.carousel.as_ref()) {
                    playback.on_visibility(&mut self.document, carousel.state(), slide, ratio);
                }
            }
            Target::RevealText(index) => {
                if let Some(reveal) = self.reveal.as_mut() {
                    reveal.on_visibility(&mut self.document, index, ratio);
                }
            }
            _ => return EventOutcome::Ignored,
        }
        EventOutcome::Handled
    }

    /// Advance the clock, firing every timer that falls due on the way
    pub fn advance(&mut self, elapsed: Duration) {
        let until = self.scheduler.now().saturating_add(elapsed);
        while let Some(slot) = self.scheduler.pop_due(until) {
            if let Some(carousel) = self.carousel.as_mut() {
                carousel.on_timer(&mut self.document, &mut self.scheduler, slot);
            }
        }
        self.scheduler.advance_to(until);
    }

    /// Advance the clock to an absolute host time. Earlier times are ignored.
    pub fn advance_to(&mut self, now: Duration) {
        let elapsed = now.saturating_sub(self.scheduler.now());
        if !elapsed.is_zero() {
            self.advance(elapsed);
        }
    }

    /// Navigate the carousel to a slide
    pub fn go_to_slide(&mut self, index: usize) -> bool {
        match self.carousel.as_mut() {
            Some(carousel) => carousel.go_to_slide(&mut self.document, &mut self.scheduler, index),
            None => false,
        }
    }

    /// Navigate the carousel forward
    pub fn go_to_next(&mut self) -> bool {
        match self.carousel.as_mut() {
            Some(carousel) => carousel.go_to_next(&mut self.document, &mut self.scheduler),
            None => false,
        }
    }

    /// Navigate the carousel backward
    pub fn go_to_previous(&mut self) -> bool {
        match self.carousel.as_mut() {
            Some(carousel) => carousel.go_to_previous(&mut self.document, &mut self.scheduler),
            None => false,
        }
    }

    /// The document
    pub fn document(&self) -> &D {
        &self.document
    }

    /// The document, mutably, for hosts that simulate layout changes
    pub fn document_mut(&mut self) -> &mut D {
        &mut self.document
    }

    /// Take the document back
    pub fn into_document(self) -> D {
        self.document
    }

    /// Settings the page was mounted with
    pub fn settings(&self) -> &PageSettings {
        &self.settings
    }

    /// Carousel state, `None` when the page has no slides
    pub fn carousel(&self) -> Option<&CarouselState> {
        self.carousel.as_ref().map(CarouselController::state)
    }

    /// Media playback, `None` when the page has no slides
    pub fn playback(&self) -> Option<&VisibilityPlaybackController> {
        self.playback.as_ref()
    }

    /// Mobile menu, if mounted
    pub fn menu(&self) -> Option<&MobileMenu> {
        self.menu.as_ref()
    }

    /// Text reveal, if mounted
    pub fn reveal(&self) -> Option<&TextReveal> {
        self.reveal.as_ref()
    }

    /// Horizontal slider, if mounted
    pub fn slider(&self) -> Option<&HorizontalSlider> {
        self.slider.as_ref()
    }

    /// Timer queue
    pub fn scheduler(&self) -> &Scheduler {
        &self.scheduler
    }

    /// Registered listeners
    pub fn listeners(&self) -> &ListenerRegistry {
        &self.listeners
    }

    /// Current clock value
    pub fn now(&self) -> Duration {
        self.scheduler.now()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::{MemoryDocument, PageLayout};
    use crate::events::EventKind;

    fn page(layout: PageLayout) -> Page<MemoryDocument> {
        Page::mount(MemoryDocument::from_layout(&layout), PageSettings::default())
    }

    #[test]
    fn test_unregistered_events_are_ignored() {
        let mut page = page(PageLayout {
            nav_buttons: false,
            ..PageLayout::default()
        });
        assert_eq!(page.dispatch(&PageEvent::Click(Target::NextButton)), EventOutcome::Ignored);
        assert_eq!(page.carousel().unwrap().current_index(), 0);
        assert_eq!(page.dispatch(&PageEvent::KeyDown(Key::Escape)), EventOutcome::Ignored);
    }

    #[test]
    fn test_click_routing() {
        let mut page = page(PageLayout::default());
        assert_eq!(page.dispatch(&PageEvent::Click(Target::NextButton)), EventOutcome::Handled);
        assert_eq!(page.carousel().unwrap().current_index(), 1);

        page.dispatch(&PageEvent::Click(Target::Indicator(0)));
        assert_eq!(page.carousel().unwrap().current_index(), 0);

        page.dispatch(&PageEvent::Click(Target::PrevButton));
        assert_eq!(page.carousel().unwrap().current_index(), 2);
    }

    #[test]
    fn test_close_button_only_closes() {
        let mut page = page(PageLayout::default());
        page.dispatch(&PageEvent::Click(Target::CloseDetails(0)));
        assert!(!page.document().is_details_open(0));

        page.dispatch(&PageEvent::Click(Target::LearnMore(0)));
        assert!(page.carousel().unwrap().is_paused());
        page.dispatch(&PageEvent::Click(Target::CloseDetails(0)));
        assert!(!page.document().is_details_open(0));
        assert!(!page.carousel().unwrap().is_paused());
    }

    #[test]
    fn test_advance_fires_auto_advance() {
        let mut page = page(PageLayout::default());
        page.advance(Duration::from_millis(9000));
        assert_eq!(page.carousel().unwrap().current_index(), 1);
        assert_eq!(page.now(), Duration::from_millis(9000));

        page.advance_to(Duration::from_millis(27_000));
        assert_eq!(page.carousel().unwrap().current_index(), 0);

        // Going back in time is a no-op
        page.advance_to(Duration::from_millis(1000));
        assert_eq!(page.now(), Duration::from_millis(27_000));
    }

    #[test]
    fn test_empty_page_is_inert() {
        let mut page = page(PageLayout {
            slides: 0,
            ..PageLayout::default()
        });
        assert!(page.carousel().is_none());
        assert!(page.playback().is_none());
        assert!(!page.go_to_next());
        page.advance(Duration::from_secs(60));
        assert_eq!(page.scheduler().armed_count(), 0);
        assert!(page.listeners().targets_for(EventKind::Click).next().is_none());
    }

    #[test]
    fn test_wheel_outcome_reaches_host() {
        let mut page = page(PageLayout {
            slider_max_scroll: Some(300.0),
            ..PageLayout::default()
        });
        let wheel = PageEvent::Wheel {
            target: Target::Slider,
            delta_x: 0.0,
            delta_y: 100.0,
        };
        assert_eq!(page.dispatch(&wheel), EventOutcome::Consumed);
        assert!(page.slider().is_some());
    }
}
