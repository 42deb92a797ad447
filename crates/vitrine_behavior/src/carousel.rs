// SPDX-License-Identifier: MIT OR Apache-2.0
//! Portfolio carousel.
//!
//! This module handles:
//! - Current slide and indicator synchronization
//! - Auto-advance and progress-fill timers
//! - Details panels, which pause auto-advance while open
//! - Hover pause, which suspends timers without marking the carousel paused
//!
//! [`CarouselState`] is the single writer of the current slide index; the
//! playback gates read it through [`CarouselState::current_index`].

use crate::document::{CarouselDocument, IndicatorSpec, SlidePhase};
use crate::events::{EventKind, ListenerRegistry, Target};
use crate::settings::CarouselSettings;
use crate::timers::{Scheduler, TimerSlot};
use std::time::Duration;

/// Carousel state, one per page
#[derive(Debug, Clone)]
pub struct CarouselState {
    current_index: usize,
    is_paused: bool,
    auto_advance_delay: Duration,
    progress_tick: Duration,
    transition: Duration,
    progress_ticks: u32,
    phases: Vec<SlidePhase>,
    details_open: Vec<bool>,
}

impl CarouselState {
    fn new(slide_count: usize, settings: &CarouselSettings) -> Self {
        let mut phases = vec![SlidePhase::Idle; slide_count];
        if let Some(first) = phases.first_mut() {
            *first = SlidePhase::Active;
        }
        Self {
            current_index: 0,
            is_paused: false,
            auto_advance_delay: settings.auto_advance(),
            progress_tick: settings.progress_tick(),
            transition: settings.transition(),
            progress_ticks: 0,
            phases,
            details_open: vec![false; slide_count],
        }
    }

    /// Index of the current slide
    pub fn current_index(&self) -> usize {
        self.current_index
    }

    /// Number of slides
    pub fn slide_count(&self) -> usize {
        self.phases.len()
    }

    /// Whether an open details panel holds auto-advance
    pub fn is_paused(&self) -> bool {
        self.is_paused
    }

    /// Delay between automatic slide changes
    pub fn auto_advance_delay(&self) -> Duration {
        self.auto_advance_delay
    }

    /// Display phase of a slide
    pub fn phase(&self, slide: usize) -> Option<SlidePhase> {
        self.phases.get(slide).copied()
    }

    /// Whether a slide's details panel is open
    pub fn is_details_open(&self, slide: usize) -> bool {
        self.details_open.get(slide).copied().unwrap_or(false)
    }

    /// Progress ticks that make up one auto-advance cycle
    pub fn ticks_per_cycle(&self) -> f64 {
        // Whole milliseconds keep 9000 / 100 exact
        let delay = self.auto_advance_delay.as_millis() as f64;
        let tick = self.progress_tick.as_millis() as f64;
        if tick > 0.0 {
            (delay / tick).max(1.0)
        } else {
            1.0
        }
    }

    /// Progress fill in percent, clamped to 100
    pub fn progress_percent(&self) -> f64 {
        (f64::from(self.progress_ticks) * 100.0 / self.ticks_per_cycle()).min(100.0)
    }
}

/// Drives the carousel against a document
#[derive(Debug, Clone)]
pub struct CarouselController {
    state: CarouselState,
}

impl CarouselController {
    /// Mount the carousel.
    ///
    /// Returns `None` when the document has no slides: nothing is
    /// registered and no timer starts.
    pub fn mount<D: CarouselDocument>(
        doc: &mut D,
        settings: &CarouselSettings,
        listeners: &mut ListenerRegistry,
        scheduler: &mut Scheduler,
    ) -> Option<Self> {
        let slide_count = doc.slide_count();
        if slide_count == 0 {
            tracing::debug!("No carousel slides, carousel stays inert");
            return None;
        }

        let mut controller = Self {
            state: CarouselState::new(slide_count, settings),
        };

        controller.backfill_indicators(doc);
        controller.register_listeners(doc, listeners);

        for slide in 0..slide_count {
            let phase = controller.state.phases[slide];
            doc.set_slide_phase(slide, phase);
        }
        controller.sync_indicators(doc);
        controller.start_auto_advance(doc, scheduler);

        tracing::info!(
            slides = slide_count,
            indicators = doc.indicator_count(),
            "Mounted carousel"
        );
        Some(controller)
    }

    fn backfill_indicators<D: CarouselDocument>(&self, doc: &mut D) {
        let slide_count = self.state.slide_count();
        let present = doc.indicator_count();
        if present >= slide_count {
            return;
        }
        if !doc.has_target(Target::IndicatorContainer) {
            tracing::debug!("No indicator container, skipping indicator backfill");
            return;
        }
        for index in present..slide_count {
            doc.append_indicator(&IndicatorSpec::for_slide(index));
        }
        tracing::debug!(added = slide_count - present, "Synthesized missing indicators");
    }

    fn register_listeners<D: CarouselDocument>(&self, doc: &D, listeners: &mut ListenerRegistry) {
        for button in [Target::PrevButton, Target::NextButton] {
            if doc.has_target(button) {
                listeners.register(button, EventKind::Click);
            }
        }

        let slide_count = self.state.slide_count();
        for index in 0..doc.indicator_count().min(slide_count) {
            listeners.register(Target::Indicator(index), EventKind::Click);
        }

        for slide in 0..slide_count {
            if !doc.has_target(Target::DetailsPanel(slide)) {
                continue;
            }
            for control in [Target::LearnMore(slide), Target::CloseDetails(slide)] {
                if doc.has_target(control) {
                    listeners.register(control, EventKind::Click);
                }
            }
        }

        if doc.has_target(Target::CarouselContainer) {
            listeners.register(Target::CarouselContainer, EventKind::PointerEnter);
            listeners.register(Target::CarouselContainer, EventKind::PointerLeave);
        }
    }

    /// Read-only view of the state
    pub fn state(&self) -> &CarouselState {
        &self.state
    }

    /// Navigate to a slide.
    ///
    /// Returns false for an out-of-range index.
    pub fn go_to_slide<D: CarouselDocument>(
        &mut self,
        doc: &mut D,
        scheduler: &mut Scheduler,
        index: usize,
    ) -> bool {
        if index >= self.state.slide_count() {
            tracing::warn!(index, slides = self.state.slide_count(), "Ignoring slide out of range");
            return false;
        }

        // Navigation collapses every panel, which also lifts a details pause
        if self.close_all_details(doc) {
            self.state.is_paused = false;
        }

        let outgoing = self.state.current_index;
        self.state.phases[outgoing] = SlidePhase::Leaving;
        doc.set_slide_phase(outgoing, SlidePhase::Leaving);
        scheduler.set_timeout(TimerSlot::TransitionOut(outgoing), self.state.transition);

        self.state.current_index = index;
        self.state.phases[index] = SlidePhase::Active;
        doc.set_slide_phase(index, SlidePhase::Active);
        scheduler.clear(TimerSlot::TransitionOut(index));

        self.sync_indicators(doc);
        self.reset_progress(doc);

        if !self.state.is_paused {
            self.start_auto_advance(doc, scheduler);
        }

        tracing::debug!(from = outgoing, to = index, "Changed slide");
        true
    }

    /// Navigate to the next slide, wrapping to the first
    pub fn go_to_next<D: CarouselDocument>(&mut self, doc: &mut D, scheduler: &mut Scheduler) -> bool {
        let count = self.state.slide_count();
        let next = (self.state.current_index + 1) % count;
        self.go_to_slide(doc, scheduler, next)
    }

    /// Navigate to the previous slide, wrapping to the last
    pub fn go_to_previous<D: CarouselDocument>(
        &mut self,
        doc: &mut D,
        scheduler: &mut Scheduler,
    ) -> bool {
        let count = self.state.slide_count();
        let previous = (self.state.current_index + count - 1) % count;
        self.go_to_slide(doc, scheduler, previous)
    }

    /// Flip a details panel.
    ///
    /// Opening pauses auto-advance until the panel closes; closing resumes it.
    pub fn toggle_details<D: CarouselDocument>(
        &mut self,
        doc: &mut D,
        scheduler: &mut Scheduler,
        slide: usize,
    ) -> bool {
        if slide >= self.state.slide_count() || !doc.has_target(Target::DetailsPanel(slide)) {
            return false;
        }

        let open = !self.state.details_open[slide];
        self.state.details_open[slide] = open;
        doc.set_details_open(slide, open);

        if open {
            self.stop_timers(scheduler);
            self.state.is_paused = true;
            tracing::info!(slide, "Details opened, auto-advance paused");
        } else {
            self.state.is_paused = false;
            self.start_auto_advance(doc, scheduler);
            tracing::info!(slide, "Details closed, auto-advance resumed");
        }
        true
    }

    /// Close a details panel if it is open
    pub fn close_details<D: CarouselDocument>(
        &mut self,
        doc: &mut D,
        scheduler: &mut Scheduler,
        slide: usize,
    ) -> bool {
        if !self.state.is_details_open(slide) {
            return false;
        }
        self.toggle_details(doc, scheduler, slide)
    }

    /// Pointer entered the carousel: suspend timers without pausing
    pub fn pointer_enter(&mut self, scheduler: &mut Scheduler) {
        if self.state.is_details_open(self.state.current_index) {
            return;
        }
        self.stop_timers(scheduler);
        tracing::debug!("Hover suspended auto-advance");
    }

    /// Pointer left the carousel: resume unless a panel holds the pause
    pub fn pointer_leave<D: CarouselDocument>(&mut self, doc: &mut D, scheduler: &mut Scheduler) {
        if self.state.is_details_open(self.state.current_index) {
            return;
        }
        self.resume_auto_advance(doc, scheduler);
    }

    /// Restart timers unless paused, then clear the pause flag
    pub fn resume_auto_advance<D: CarouselDocument>(
        &mut self,
        doc: &mut D,
        scheduler: &mut Scheduler,
    ) {
        if !self.state.is_paused {
            self.start_auto_advance(doc, scheduler);
        }
        self.state.is_paused = false;
    }

    /// Handle a fired timer
    pub fn on_timer<D: CarouselDocument>(
        &mut self,
        doc: &mut D,
        scheduler: &mut Scheduler,
        slot: TimerSlot,
    ) {
        match slot {
            TimerSlot::AutoAdvance => {
                tracing::trace!("Auto-advance");
                self.go_to_next(doc, scheduler);
            }
            TimerSlot::Progress => {
                self.state.progress_ticks = self.state.progress_ticks.saturating_add(1);
                let percent = self.state.progress_percent();
                doc.set_progress(percent);
                tracing::trace!(percent, "Progress tick");
            }
            TimerSlot::TransitionOut(slide) => {
                if self.state.phases.get(slide) == Some(&SlidePhase::Leaving) {
                    self.state.phases[slide] = SlidePhase::Idle;
                    doc.set_slide_phase(slide, SlidePhase::Idle);
                }
            }
        }
    }

    fn start_auto_advance<D: CarouselDocument>(&mut self, doc: &mut D, scheduler: &mut Scheduler) {
        self.stop_timers(scheduler);
        self.reset_progress(doc);
        scheduler.set_interval(TimerSlot::AutoAdvance, self.state.auto_advance_delay);
        if doc.has_target(Target::ProgressBar) {
            scheduler.set_interval(TimerSlot::Progress, self.state.progress_tick);
        }
    }

    fn stop_timers(&self, scheduler: &mut Scheduler) {
        scheduler.clear(TimerSlot::AutoAdvance);
        scheduler.clear(TimerSlot::Progress);
    }

    fn reset_progress<D: CarouselDocument>(&mut self, doc: &mut D) {
        self.state.progress_ticks = 0;
        doc.set_progress(0.0);
    }

    fn sync_indicators<D: CarouselDocument>(&self, doc: &mut D) {
        let current = self.state.current_index;
        for indicator in 0..doc.indicator_count() {
            doc.set_indicator_active(indicator, indicator == current);
        }
    }

    fn close_all_details<D: CarouselDocument>(&mut self, doc: &mut D) -> bool {
        let mut closed_any = false;
        for (slide, open) in self.state.details_open.iter_mut().enumerate() {
            if *open {
                *open = false;
                doc.set_details_open(slide, false);
                closed_any = true;
            }
        }
        closed_any
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::{MemoryDocument, PageLayout};

    fn mount(layout: PageLayout) -> (CarouselController, MemoryDocument, Scheduler, ListenerRegistry) {
        let mut doc = MemoryDocument::from_layout(&layout);
        let mut scheduler = Scheduler::new();
        let mut listeners = ListenerRegistry::new();
        let controller = CarouselController::mount(
            &mut doc,
            &CarouselSettings::default(),
            &mut listeners,
            &mut scheduler,
        )
        .expect("carousel should mount");
        (controller, doc, scheduler, listeners)
    }

    fn run_for(
        controller: &mut CarouselController,
        doc: &mut MemoryDocument,
        scheduler: &mut Scheduler,
        ms: u64,
    ) {
        let until = scheduler.now() + Duration::from_millis(ms);
        while let Some(slot) = scheduler.pop_due(until) {
            controller.on_timer(doc, scheduler, slot);
        }
        scheduler.advance_to(until);
    }

    #[test]
    fn test_zero_slides_is_inert() {
        let mut doc = MemoryDocument::new(0);
        let mut scheduler = Scheduler::new();
        let mut listeners = ListenerRegistry::new();
        let controller = CarouselController::mount(
            &mut doc,
            &CarouselSettings::default(),
            &mut listeners,
            &mut scheduler,
        );
        assert!(controller.is_none());
        assert!(listeners.is_empty());
        assert_eq!(scheduler.armed_count(), 0);
    }

    #[test]
    fn test_mount_marks_first_slide() {
        let (controller, doc, scheduler, _) = mount(PageLayout::default());
        assert_eq!(controller.state().current_index(), 0);
        assert_eq!(doc.active_slides(), vec![0]);
        assert_eq!(doc.active_indicators(), vec![0]);
        assert!(scheduler.is_armed(TimerSlot::AutoAdvance));
        assert!(scheduler.is_armed(TimerSlot::Progress));
    }

    #[test]
    fn test_backfill_indicators() {
        let (_, doc, _, listeners) = mount(PageLayout {
            slides: 5,
            indicators: 2,
            ..PageLayout::default()
        });
        assert_eq!(doc.indicator_count(), 5);
        assert_eq!(doc.indicator(0).and_then(|i| i.test_id.clone()), None);
        let synthesized = doc.indicator(4).unwrap();
        assert_eq!(synthesized.test_id.as_deref(), Some("carousel-indicator-4"));
        assert_eq!(synthesized.label.as_deref(), Some("Go to slide 5"));
        assert!(listeners.is_registered(Target::Indicator(4), EventKind::Click));
    }

    #[test]
    fn test_no_indicator_container_skips_backfill() {
        let (_, doc, _, listeners) = mount(PageLayout {
            indicators: 1,
            indicator_container: false,
            ..PageLayout::default()
        });
        assert_eq!(doc.indicator_count(), 1);
        assert!(listeners.is_registered(Target::Indicator(0), EventKind::Click));
        assert!(!listeners.is_registered(Target::Indicator(1), EventKind::Click));
    }

    #[test]
    fn test_next_twice_from_first() {
        let (mut controller, mut doc, mut scheduler, _) = mount(PageLayout::default());
        run_for(&mut controller, &mut doc, &mut scheduler, 1500);
        assert!(doc.progress().unwrap() > 0.0);

        controller.go_to_next(&mut doc, &mut scheduler);
        controller.go_to_next(&mut doc, &mut scheduler);

        assert_eq!(controller.state().current_index(), 2);
        assert_eq!(doc.active_slides(), vec![2]);
        assert_eq!(doc.active_indicators(), vec![2]);
        assert_eq!(doc.progress(), Some(0.0));
    }

    #[test]
    fn test_previous_wraps_to_last() {
        let (mut controller, mut doc, mut scheduler, _) = mount(PageLayout {
            slides: 4,
            ..PageLayout::default()
        });
        controller.go_to_previous(&mut doc, &mut scheduler);
        assert_eq!(controller.state().current_index(), 3);
    }

    #[test]
    fn test_out_of_range_is_ignored() {
        let (mut controller, mut doc, mut scheduler, _) = mount(PageLayout::default());
        assert!(!controller.go_to_slide(&mut doc, &mut scheduler, 7));
        assert_eq!(controller.state().current_index(), 0);
    }

    #[test]
    fn test_outgoing_slide_transition_window() {
        let (mut controller, mut doc, mut scheduler, _) = mount(PageLayout::default());
        controller.go_to_slide(&mut doc, &mut scheduler, 1);
        assert_eq!(doc.slide_phase(0), Some(SlidePhase::Leaving));

        run_for(&mut controller, &mut doc, &mut scheduler, 599);
        assert_eq!(doc.slide_phase(0), Some(SlidePhase::Leaving));

        run_for(&mut controller, &mut doc, &mut scheduler, 1);
        assert_eq!(doc.slide_phase(0), Some(SlidePhase::Idle));
        assert_eq!(doc.slide_phase(1), Some(SlidePhase::Active));
    }

    #[test]
    fn test_quick_return_keeps_slide_active() {
        let (mut controller, mut doc, mut scheduler, _) = mount(PageLayout::default());
        controller.go_to_slide(&mut doc, &mut scheduler, 1);
        controller.go_to_slide(&mut doc, &mut scheduler, 0);
        run_for(&mut controller, &mut doc, &mut scheduler, 1000);
        assert_eq!(doc.slide_phase(0), Some(SlidePhase::Active));
        assert_eq!(doc.slide_phase(1), Some(SlidePhase::Idle));
    }

    #[test]
    fn test_progress_reaches_exactly_100_before_advance() {
        let (mut controller, mut doc, mut scheduler, _) = mount(PageLayout::default());
        run_for(&mut controller, &mut doc, &mut scheduler, 8999);
        assert_eq!(controller.state().current_index(), 0);
        assert!(doc.progress().unwrap() < 100.0);

        let until = Duration::from_millis(9000);
        let mut seen_full = false;
        while let Some(slot) = scheduler.pop_due(until) {
            if slot == TimerSlot::AutoAdvance {
                seen_full = controller.state().progress_percent() == 100.0;
            }
            controller.on_timer(&mut doc, &mut scheduler, slot);
        }
        assert!(seen_full);
        assert_eq!(controller.state().current_index(), 1);
        assert_eq!(doc.progress(), Some(0.0));
    }

    #[test]
    fn test_details_pause_and_resume() {
        let (mut controller, mut doc, mut scheduler, _) = mount(PageLayout::default());
        controller.toggle_details(&mut doc, &mut scheduler, 0);
        assert!(controller.state().is_paused());
        assert!(doc.is_details_open(0));
        assert!(!scheduler.is_armed(TimerSlot::AutoAdvance));

        let frozen = doc.progress();
        run_for(&mut controller, &mut doc, &mut scheduler, 30_000);
        assert_eq!(controller.state().current_index(), 0);
        assert_eq!(doc.progress(), frozen);

        controller.toggle_details(&mut doc, &mut scheduler, 0);
        assert!(!controller.state().is_paused());
        run_for(&mut controller, &mut doc, &mut scheduler, 9000);
        assert_eq!(controller.state().current_index(), 1);
    }

    #[test]
    fn test_navigation_closes_panels_and_rearms() {
        let (mut controller, mut doc, mut scheduler, _) = mount(PageLayout::default());
        controller.toggle_details(&mut doc, &mut scheduler, 0);
        controller.go_to_slide(&mut doc, &mut scheduler, 2);

        assert!(!doc.is_details_open(0));
        assert!(!controller.state().is_paused());
        assert!(scheduler.is_armed(TimerSlot::AutoAdvance));
    }

    #[test]
    fn test_hover_pause_is_temporary() {
        let (mut controller, mut doc, mut scheduler, _) = mount(PageLayout::default());
        controller.pointer_enter(&mut scheduler);
        assert!(!scheduler.is_armed(TimerSlot::AutoAdvance));
        assert!(!controller.state().is_paused());

        run_for(&mut controller, &mut doc, &mut scheduler, 20_000);
        assert_eq!(controller.state().current_index(), 0);

        controller.pointer_leave(&mut doc, &mut scheduler);
        assert!(scheduler.is_armed(TimerSlot::AutoAdvance));
        assert!(!controller.state().is_paused());

        // The details pause contract is untouched by the hover
        controller.toggle_details(&mut doc, &mut scheduler, 0);
        assert!(controller.state().is_paused());
        controller.toggle_details(&mut doc, &mut scheduler, 0);
        assert!(!controller.state().is_paused());
        assert!(scheduler.is_armed(TimerSlot::AutoAdvance));
    }

    #[test]
    fn test_hover_with_open_panel_keeps_pause() {
        let (mut controller, mut doc, mut scheduler, _) = mount(PageLayout::default());
        controller.toggle_details(&mut doc, &mut scheduler, 0);
        controller.pointer_enter(&mut scheduler);
        controller.pointer_leave(&mut doc, &mut scheduler);
        assert!(controller.state().is_paused());
        assert!(!scheduler.is_armed(TimerSlot::AutoAdvance));
    }

    #[test]
    fn test_resume_clears_pause_without_restarting() {
        let (mut controller, mut doc, mut scheduler, _) = mount(PageLayout::default());
        controller.toggle_details(&mut doc, &mut scheduler, 0);
        controller.resume_auto_advance(&mut doc, &mut scheduler);
        assert!(!controller.state().is_paused());
        assert!(!scheduler.is_armed(TimerSlot::AutoAdvance));

        controller.resume_auto_advance(&mut doc, &mut scheduler);
        assert!(scheduler.is_armed(TimerSlot::AutoAdvance));
    }

    #[test]
    fn test_missing_progress_bar() {
        let (mut controller, mut doc, mut scheduler, _) = mount(PageLayout {
            progress_bar: false,
            ..PageLayout::default()
        });
        assert!(!scheduler.is_armed(TimerSlot::Progress));
        run_for(&mut controller, &mut doc, &mut scheduler, 9000);
        assert_eq!(controller.state().current_index(), 1);
        assert_eq!(doc.progress(), None);
    }

    #[test]
    fn test_missing_optional_controls_register_nothing() {
        let (_, _, _, listeners) = mount(PageLayout {
            nav_buttons: false,
            container: false,
            details: false,
            ..PageLayout::default()
        });
        assert!(!listeners.is_registered(Target::NextButton, EventKind::Click));
        assert!(!listeners.is_registered(Target::CarouselContainer, EventKind::PointerEnter));
        assert!(!listeners.is_registered(Target::LearnMore(0), EventKind::Click));
        assert!(listeners.is_registered(Target::Indicator(2), EventKind::Click));
    }

    #[test]
    fn test_at_most_one_timer_per_slot() {
        let (mut controller, mut doc, mut scheduler, _) = mount(PageLayout::default());
        for _ in 0..10 {
            controller.go_to_next(&mut doc, &mut scheduler);
            controller.pointer_leave(&mut doc, &mut scheduler);
        }
        let timers = [TimerSlot::AutoAdvance, TimerSlot::Progress]
            .into_iter()
            .filter(|slot| scheduler.is_armed(*slot))
            .count();
        assert_eq!(timers, 2);
        assert_eq!(
            scheduler.due_at(TimerSlot::AutoAdvance),
            Some(scheduler.now() + Duration::from_millis(9000))
        );
    }

    mod properties {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn next_cycles_through_every_slide(slides in 1usize..12) {
                let (mut controller, mut doc, mut scheduler, _) = mount(PageLayout {
                    slides,
                    ..PageLayout::default()
                });
                let mut visited = Vec::new();
                for _ in 0..slides {
                    controller.go_to_next(&mut doc, &mut scheduler);
                    visited.push(controller.state().current_index());
                }
                prop_assert_eq!(visited.last().copied(), Some(0));
                visited.sort_unstable();
                prop_assert_eq!(visited, (0..slides).collect::<Vec<_>>());
            }

            #[test]
            fn previous_from_first_lands_on_last(slides in 1usize..12) {
                let (mut controller, mut doc, mut scheduler, _) = mount(PageLayout {
                    slides,
                    ..PageLayout::default()
                });
                controller.go_to_previous(&mut doc, &mut scheduler);
                prop_assert_eq!(controller.state().current_index(), slides - 1);
            }

            #[test]
            fn indicators_match_slides(slides in 1usize..12, present in 0usize..12) {
                let present = present.min(slides);
                let (_, doc, _, _) = mount(PageLayout {
                    slides,
                    indicators: present,
                    ..PageLayout::default()
                });
                prop_assert_eq!(doc.indicator_count(), slides);
                prop_assert_eq!(doc.active_indicators(), vec![0]);
                prop_assert_eq!(doc.active_slides(), vec![0]);
                for index in present..slides {
                    let test_id = format!("carousel-indicator-{index}");
                    prop_assert_eq!(
                        doc.indicator(index).and_then(|i| i.test_id.clone()),
                        Some(test_id)
                    );
                }
            }
        }
    }
}
