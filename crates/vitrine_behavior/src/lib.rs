// SPDX-License-Identifier: MIT OR Apache-2.0
//! Behavior layer of the Vitrine landing page.
//!
//! This crate provides the page's interactive behavior:
//! - Portfolio carousel with auto-advance, progress fill and details panels
//! - Viewport-gated media playback for carousel cards
//! - Mobile navigation menu
//! - Scroll-triggered text reveal
//! - Wheel-driven horizontal slider
//!
//! ## Architecture
//!
//! The behavior layer is built on:
//! - Document port traits, implemented in memory and in the browser
//! - A listener registry filled at mount
//! - A timer scheduler on a host-driven clock
//! - A [`Page`] that owns all of the above and routes events

pub mod carousel;
pub mod document;
pub mod events;
pub mod menu;
pub mod page;
pub mod playback;
pub mod reveal;
pub mod settings;
pub mod slider;
pub mod timers;

pub use carousel::{CarouselController, CarouselState};
pub use document::{
    CarouselDocument, ElementLookup, IndicatorSpec, MediaDocument, MemoryDocument, MemoryMedia,
    MenuDocument, OverlaySpec, PageDocument, PageLayout, RevealDocument, SlidePhase, SliderDocument,
};
pub use events::{EventKind, EventOutcome, Key, ListenerRegistry, PageEvent, Target};
pub use menu::MobileMenu;
pub use page::Page;
pub use playback::{PlaybackGate, ViewportClass, VisibilityPlaybackController};
pub use reveal::{RevealMode, TextReveal};
pub use settings::{
    CarouselSettings, PageSettings, PlaybackSettings, RevealSettings, SettingsError, SliderSettings,
    SETTINGS_FILE_NAME, SETTINGS_FORMAT_VERSION,
};
pub use slider::HorizontalSlider;
pub use timers::{Scheduler, TimerSlot};
