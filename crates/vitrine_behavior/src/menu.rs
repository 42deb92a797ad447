// SPDX-License-Identifier: MIT OR Apache-2.0
//! Mobile navigation overlay.

use crate::document::MenuDocument;
use crate::events::{EventKind, ListenerRegistry, Target};

/// Open/closed state of the mobile menu
#[derive(Debug, Clone, Default)]
pub struct MobileMenu {
    open: bool,
}

impl MobileMenu {
    /// Mount the menu. Needs both the toggle and the menu element.
    pub fn mount<D: MenuDocument>(doc: &mut D, listeners: &mut ListenerRegistry) -> Option<Self> {
        if !doc.has_target(Target::MenuToggle) || !doc.has_target(Target::Menu) {
            return None;
        }

        listeners.register(Target::MenuToggle, EventKind::Click);
        if doc.has_target(Target::MenuClose) {
            listeners.register(Target::MenuClose, EventKind::Click);
        }
        for link in 0..doc.menu_link_count() {
            listeners.register(Target::MenuLink(link), EventKind::Click);
        }
        listeners.register(Target::Window, EventKind::KeyDown);

        let mut menu = Self::default();
        menu.apply(doc);
        Some(menu)
    }

    /// Whether the menu is open
    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Open when closed, close when open
    pub fn toggle<D: MenuDocument>(&mut self, doc: &mut D) {
        self.open = !self.open;
        self.apply(doc);
        tracing::debug!(open = self.open, "Toggled mobile menu");
    }

    /// Close the menu, returns false if it was already closed
    pub fn close<D: MenuDocument>(&mut self, doc: &mut D) -> bool {
        if !self.open {
            return false;
        }
        self.open = false;
        self.apply(doc);
        tracing::debug!("Closed mobile menu");
        true
    }

    fn apply<D: MenuDocument>(&self, doc: &mut D) {
        doc.set_menu_open(self.open);
        doc.set_toggle_expanded(self.open);
        doc.set_scroll_locked(self.open);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::{MemoryDocument, PageLayout};

    fn menu_doc() -> MemoryDocument {
        MemoryDocument::from_layout(&PageLayout {
            menu_links: Some(4),
            ..PageLayout::default()
        })
    }

    #[test]
    fn test_toggle_locks_scroll() {
        let mut doc = menu_doc();
        let mut listeners = ListenerRegistry::new();
        let mut menu = MobileMenu::mount(&mut doc, &mut listeners).unwrap();
        assert!(!doc.is_menu_open());

        menu.toggle(&mut doc);
        assert!(doc.is_menu_open());
        assert!(doc.is_toggle_expanded());
        assert!(doc.is_scroll_locked());

        menu.toggle(&mut doc);
        assert!(!doc.is_menu_open());
        assert!(!doc.is_scroll_locked());
    }

    #[test]
    fn test_close_when_closed() {
        let mut doc = menu_doc();
        let mut listeners = ListenerRegistry::new();
        let mut menu = MobileMenu::mount(&mut doc, &mut listeners).unwrap();
        assert!(!menu.close(&mut doc));
    }

    #[test]
    fn test_links_registered() {
        let mut doc = menu_doc();
        let mut listeners = ListenerRegistry::new();
        MobileMenu::mount(&mut doc, &mut listeners).unwrap();
        assert!(listeners.is_registered(Target::MenuLink(3), EventKind::Click));
        assert!(!listeners.is_registered(Target::MenuLink(4), EventKind::Click));
        assert!(listeners.is_registered(Target::MenuClose, EventKind::Click));
    }

    #[test]
    fn test_missing_menu() {
        let mut doc = MemoryDocument::new(1);
        let mut listeners = ListenerRegistry::new();
        assert!(MobileMenu::mount(&mut doc, &mut listeners).is_none());
        assert!(listeners.is_empty());
    }
}
