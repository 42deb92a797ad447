// SPDX-License-Identifier: MIT OR Apache-2.0
//! Host events and listener registration.
//!
//! Every element the behavior layer knows about is named by a [`Target`].
//! Components register the `(Target, EventKind)` pairs they handle while
//! mounting; the host only forwards events for registered pairs.

use indexmap::IndexSet;
use serde::{Deserialize, Serialize};

/// An element of the presentation document
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Target {
    /// Carousel container (hover pause)
    CarouselContainer,
    /// Previous-slide button
    PrevButton,
    /// Next-slide button
    NextButton,
    /// Element holding the indicator controls
    IndicatorContainer,
    /// Indicator control for a slide
    Indicator(usize),
    /// Progress fill element
    ProgressBar,
    /// Details panel of a slide
    DetailsPanel(usize),
    /// "Learn more" control of a slide
    LearnMore(usize),
    /// "Close" control inside a details panel
    CloseDetails(usize),
    /// Media element of a slide
    Media(usize),
    /// Container observed for media visibility
    MediaContainer(usize),
    /// Tap-to-play overlay of a slide (mobile)
    TapOverlay(usize),
    /// Mobile menu toggle button
    MenuToggle,
    /// Mobile menu overlay
    Menu,
    /// Close button inside the mobile menu
    MenuClose,
    /// Link inside the mobile menu
    MenuLink(usize),
    /// Element flagged for text reveal
    RevealText(usize),
    /// Horizontal slider
    Slider,
    /// The window itself (scroll, resize, keyboard)
    Window,
}

/// Kind of host event
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EventKind {
    /// Click or tap
    Click,
    /// Pointer entered the element
    PointerEnter,
    /// Pointer left the element
    PointerLeave,
    /// Intersection ratio with the viewport changed
    Visibility,
    /// Mouse wheel
    Wheel,
    /// Window scrolled
    Scroll,
    /// Window resized
    Resize,
    /// Key pressed
    KeyDown,
}

impl EventKind {
    /// DOM event name for this kind, if it maps to a plain listener
    pub fn dom_name(&self) -> Option<&'static str> {
        match self {
            Self::Click => Some("click"),
            Self::PointerEnter => Some("mouseenter"),
            Self::PointerLeave => Some("mouseleave"),
            Self::Wheel => Some("wheel"),
            Self::Scroll => Some("scroll"),
            Self::Resize => Some("resize"),
            Self::KeyDown => Some("keydown"),
            // Delivered by an observer, not a listener
            Self::Visibility => None,
        }
    }
}

/// Keys the page reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Key {
    /// Escape key
    Escape,
    /// Anything else
    Other,
}

impl Key {
    /// Map a DOM `KeyboardEvent.key` value
    pub fn from_dom(key: &str) -> Self {
        match key {
            "Escape" | "Esc" => Self::Escape,
            _ => Self::Other,
        }
    }
}

/// An event delivered by the host
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum PageEvent {
    /// Click or tap on a target
    Click(Target),
    /// Pointer entered a target
    PointerEnter(Target),
    /// Pointer left a target
    PointerLeave(Target),
    /// Intersection ratio of a target crossed an observed threshold
    Visibility {
        /// Observed element
        target: Target,
        /// Visible fraction of the element, 0.0 to 1.0
        ratio: f64,
    },
    /// Wheel over a target
    Wheel {
        /// Element under the pointer
        target: Target,
        /// Horizontal delta in pixels
        delta_x: f64,
        /// Vertical delta in pixels
        delta_y: f64,
    },
    /// Window scrolled
    Scroll,
    /// Window resized
    Resize,
    /// Key pressed
    KeyDown(Key),
}

impl PageEvent {
    /// Element the event is addressed to
    pub fn target(&self) -> Target {
        match *self {
            Self::Click(target) | Self::PointerEnter(target) | Self::PointerLeave(target) => target,
            Self::Visibility { target, .. } | Self::Wheel { target, .. } => target,
            Self::Scroll | Self::Resize | Self::KeyDown(_) => Target::Window,
        }
    }

    /// Kind of the event
    pub fn kind(&self) -> EventKind {
        match self {
            Self::Click(_) => EventKind::Click,
            Self::PointerEnter(_) => EventKind::PointerEnter,
            Self::PointerLeave(_) => EventKind::PointerLeave,
            Self::Visibility { .. } => EventKind::Visibility,
            Self::Wheel { .. } => EventKind::Wheel,
            Self::Scroll => EventKind::Scroll,
            Self::Resize => EventKind::Resize,
            Self::KeyDown(_) => EventKind::KeyDown,
        }
    }
}

/// What the host should do with an event after dispatch
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EventOutcome {
    /// Nobody listens for this event
    #[default]
    Ignored,
    /// Handled, default browser action continues
    Handled,
    /// Handled, default browser action must be prevented
    Consumed,
}

/// Registered `(Target, EventKind)` listeners in registration order
#[derive(Debug, Clone, Default)]
pub struct ListenerRegistry {
    listeners: IndexSet<(Target, EventKind)>,
}

impl ListenerRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a listener (idempotent)
    pub fn register(&mut self, target: Target, kind: EventKind) {
        if self.listeners.insert((target, kind)) {
            tracing::trace!(?target, ?kind, "Registered listener");
        }
    }

    /// Check whether a listener is registered
    pub fn is_registered(&self, target: Target, kind: EventKind) -> bool {
        self.listeners.contains(&(target, kind))
    }

    /// Check whether someone listens for an event
    pub fn listens(&self, event: &PageEvent) -> bool {
        self.is_registered(event.target(), event.kind())
    }

    /// Iterate over registered listeners
    pub fn iter(&self) -> impl Iterator<Item = (Target, EventKind)> + '_ {
        self.listeners.iter().copied()
    }

    /// Targets registered for one kind of event
    pub fn targets_for(&self, kind: EventKind) -> impl Iterator<Item = Target> + '_ {
        self.listeners
            .iter()
            .filter(move |(_, k)| *k == kind)
            .map(|(target, _)| *target)
    }

    /// Number of registered listeners
    pub fn len(&self) -> usize {
        self.listeners.len()
    }

    /// Check if nothing is registered
    pub fn is_empty(&self) -> bool {
        self.listeners.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_window_events_target_window() {
        assert_eq!(PageEvent::Scroll.target(), Target::Window);
        assert_eq!(PageEvent::KeyDown(Key::Escape).target(), Target::Window);
        assert_eq!(PageEvent::Resize.kind(), EventKind::Resize);
    }

    #[test]
    fn test_registry_is_idempotent() {
        let mut registry = ListenerRegistry::new();
        registry.register(Target::NextButton, EventKind::Click);
        registry.register(Target::NextButton, EventKind::Click);
        assert_eq!(registry.len(), 1);
        assert!(registry.listens(&PageEvent::Click(Target::NextButton)));
        assert!(!registry.listens(&PageEvent::Click(Target::PrevButton)));
    }

    #[test]
    fn test_targets_for_kind() {
        let mut registry = ListenerRegistry::new();
        registry.register(Target::MediaContainer(0), EventKind::Visibility);
        registry.register(Target::NextButton, EventKind::Click);
        registry.register(Target::RevealText(2), EventKind::Visibility);

        let observed: Vec<_> = registry.targets_for(EventKind::Visibility).collect();
        assert_eq!(observed, vec![Target::MediaContainer(0), Target::RevealText(2)]);
    }

    #[test]
    fn test_key_mapping() {
        assert_eq!(Key::from_dom("Escape"), Key::Escape);
        assert_eq!(Key::from_dom("Enter"), Key::Other);
    }
}
