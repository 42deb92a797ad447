// SPDX-License-Identifier: MIT OR Apache-2.0
//! Scroll-triggered text reveal.
//!
//! Elements are revealed once and stay revealed. When the host can observe
//! intersections, visibility events drive the reveal; otherwise every scroll
//! and resize polls element positions against a fixed pixel offset.

use crate::document::RevealDocument;
use crate::events::{EventKind, ListenerRegistry, Target};
use crate::settings::RevealSettings;

/// How reveal elements are watched
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RevealMode {
    /// Intersection events from the host
    Observer,
    /// Position checks on scroll and resize
    Polling,
}

/// Text reveal state
#[derive(Debug, Clone)]
pub struct TextReveal {
    mode: RevealMode,
    threshold: f64,
    offset_px: f64,
    revealed: Vec<bool>,
}

impl TextReveal {
    /// Mount the reveal. Returns `None` without reveal elements.
    pub fn mount<D: RevealDocument>(
        doc: &mut D,
        settings: &RevealSettings,
        listeners: &mut ListenerRegistry,
    ) -> Option<Self> {
        let count = doc.reveal_count();
        if count == 0 {
            return None;
        }

        let mode = if doc.supports_observation() {
            RevealMode::Observer
        } else {
            RevealMode::Polling
        };

        match mode {
            RevealMode::Observer => {
                for index in 0..count {
                    listeners.register(Target::RevealText(index), EventKind::Visibility);
                }
            }
            RevealMode::Polling => {
                listeners.register(Target::Window, EventKind::Scroll);
                listeners.register(Target::Window, EventKind::Resize);
            }
        }

        let mut reveal = Self {
            mode,
            threshold: settings.threshold,
            offset_px: f64::from(settings.fallback_offset_px),
            revealed: vec![false; count],
        };
        if mode == RevealMode::Polling {
            // Elements already on screen at load
            reveal.poll(doc);
        }

        tracing::info!(?mode, elements = count, "Mounted text reveal");
        Some(reveal)
    }

    /// Watching mode
    pub fn mode(&self) -> RevealMode {
        self.mode
    }

    /// Whether an element has been revealed
    pub fn is_revealed(&self, index: usize) -> bool {
        self.revealed.get(index).copied().unwrap_or(false)
    }

    /// Visibility of a reveal element changed
    pub fn on_visibility<D: RevealDocument>(&mut self, doc: &mut D, index: usize, ratio: f64) {
        if ratio > 0.0 && ratio >= self.threshold {
            self.reveal(doc, index);
        }
    }

    /// Check every unrevealed element against the viewport
    pub fn poll<D: RevealDocument>(&mut self, doc: &mut D) {
        let trigger = f64::from(doc.viewport_height()) - self.offset_px;
        for index in 0..self.revealed.len() {
            if self.revealed[index] {
                continue;
            }
            if doc.reveal_top(index).is_some_and(|top| top < trigger) {
                self.reveal(doc, index);
            }
        }
    }

    fn reveal<D: RevealDocument>(&mut self, doc: &mut D, index: usize) {
        match self.revealed.get_mut(index) {
            Some(revealed) if !*revealed => {
                *revealed = true;
                doc.set_revealed(index);
            }
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::{MemoryDocument, PageLayout};

    fn doc(observation: bool) -> MemoryDocument {
        MemoryDocument::from_layout(&PageLayout {
            observation,
            reveals: vec![200.0, 750.0, 1600.0],
            viewport_height: 800,
            ..PageLayout::default()
        })
    }

    #[test]
    fn test_observer_mode() {
        let mut doc = doc(true);
        let mut listeners = ListenerRegistry::new();
        let mut reveal = TextReveal::mount(&mut doc, &RevealSettings::default(), &mut listeners).unwrap();
        assert_eq!(reveal.mode(), RevealMode::Observer);
        assert!(listeners.is_registered(Target::RevealText(2), EventKind::Visibility));
        assert!(!doc.is_revealed(0));

        reveal.on_visibility(&mut doc, 1, 0.05);
        assert!(!doc.is_revealed(1));
        reveal.on_visibility(&mut doc, 1, 0.4);
        assert!(doc.is_revealed(1));

        // Revealed elements stay revealed
        reveal.on_visibility(&mut doc, 1, 0.0);
        assert!(reveal.is_revealed(1));
    }

    #[test]
    fn test_polling_fallback() {
        let mut doc = doc(false);
        let mut listeners = ListenerRegistry::new();
        let mut reveal = TextReveal::mount(&mut doc, &RevealSettings::default(), &mut listeners).unwrap();
        assert_eq!(reveal.mode(), RevealMode::Polling);
        assert!(listeners.is_registered(Target::Window, EventKind::Scroll));

        // 200 < 800 - 100 at load, 750 is inside the offset band
        assert!(doc.is_revealed(0));
        assert!(!doc.is_revealed(1));

        doc.set_reveal_top(1, 650.0);
        doc.set_reveal_top(2, 1100.0);
        reveal.poll(&mut doc);
        assert!(doc.is_revealed(1));
        assert!(!doc.is_revealed(2));

        doc.set_viewport_height(1300);
        reveal.poll(&mut doc);
        assert!(doc.is_revealed(2));
    }

    #[test]
    fn test_no_elements() {
        let mut doc = MemoryDocument::new(1);
        let mut listeners = ListenerRegistry::new();
        assert!(TextReveal::mount(&mut doc, &RevealSettings::default(), &mut listeners).is_none());
    }
}
