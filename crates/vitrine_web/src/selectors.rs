// SPDX-License-Identifier: MIT OR Apache-2.0
//! Markup contract.
//!
//! CSS selectors and class names the browser document relies on, and the
//! mapping from [`Target`] to where its element lives.

use vitrine_behavior::Target;

/// Carousel container
pub const CAROUSEL: &str = ".portfolio-carousel";
/// Carousel cards, in slide order
pub const SLIDE: &str = ".portfolio-carousel .carousel-slide";
/// Previous-slide button
pub const PREV_BUTTON: &str = ".portfolio-carousel .carousel-prev";
/// Next-slide button
pub const NEXT_BUTTON: &str = ".portfolio-carousel .carousel-next";
/// Indicator container
pub const INDICATORS: &str = ".portfolio-carousel .carousel-indicators";
/// Indicator controls, in slide order
pub const INDICATOR: &str = ".portfolio-carousel .carousel-indicator";
/// Progress fill
pub const PROGRESS_BAR: &str = ".portfolio-carousel .carousel-progress-bar";
/// Details panel, within a card
pub const DETAILS: &str = ".slide-details";
/// "Learn more" control, within a card
pub const LEARN_MORE: &str = ".learn-more-btn";
/// Close control, within a card
pub const CLOSE_DETAILS: &str = ".close-details-btn";
/// Media element, within a card
pub const MEDIA: &str = "video";
/// Media container, within a card
pub const MEDIA_CONTAINER: &str = ".slide-media";
/// Tap-to-play overlay, within a card
pub const TAP_OVERLAY: &str = ".tap-to-play";
/// Mobile menu toggle
pub const MENU_TOGGLE: &str = ".mobile-menu-toggle";
/// Mobile menu overlay
pub const MENU: &str = ".mobile-menu";
/// Mobile menu close button
pub const MENU_CLOSE: &str = ".mobile-menu .mobile-menu-close";
/// Mobile menu links
pub const MENU_LINK: &str = ".mobile-menu a";
/// Text reveal elements
pub const REVEAL_TEXT: &str = ".reveal-text";
/// Horizontal slider
pub const SLIDER: &str = ".horizontal-slider";

/// Class marking the current slide and indicator
pub const ACTIVE_CLASS: &str = "active";
/// Class marking the outgoing slide
pub const LEAVING_CLASS: &str = "prev";
/// Class marking an expanded details panel or an open menu
pub const OPEN_CLASS: &str = "open";
/// Class hiding a tap-to-play overlay
pub const HIDDEN_CLASS: &str = "hidden";
/// Class marking revealed text
pub const REVEALED_CLASS: &str = "revealed";
/// Class given to synthesized indicators
pub const INDICATOR_CLASS: &str = "carousel-indicator";
/// Class given to synthesized overlays
pub const TAP_OVERLAY_CLASS: &str = "tap-to-play";

/// Body attribute carrying RON page settings
pub const SETTINGS_ATTRIBUTE: &str = "data-vitrine-settings";
/// Body attribute carrying log filter directives
pub const LOG_ATTRIBUTE: &str = "data-vitrine-log";
/// Attribute tagging observed elements with their target key
pub const TARGET_ATTRIBUTE: &str = "data-vitrine-target";

/// Where the element of a target is found
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Locator {
    /// First match of a selector in the document
    Single(&'static str),
    /// `n`-th match of a selector in the document
    Nth(&'static str, usize),
    /// First match of a selector inside the `n`-th card
    InSlide(usize, &'static str),
    /// The window, not an element
    Window,
}

/// Locate the element of a target
pub fn locate(target: Target) -> Locator {
    match target {
        Target::CarouselContainer => Locator::Single(CAROUSEL),
        Target::PrevButton => Locator::Single(PREV_BUTTON),
        Target::NextButton => Locator::Single(NEXT_BUTTON),
        Target::IndicatorContainer => Locator::Single(INDICATORS),
        Target::Indicator(i) => Locator::Nth(INDICATOR, i),
        Target::ProgressBar => Locator::Single(PROGRESS_BAR),
        Target::DetailsPanel(i) => Locator::InSlide(i, DETAILS),
        Target::LearnMore(i) => Locator::InSlide(i, LEARN_MORE),
        Target::CloseDetails(i) => Locator::InSlide(i, CLOSE_DETAILS),
        Target::Media(i) => Locator::InSlide(i, MEDIA),
        Target::MediaContainer(i) => Locator::InSlide(i, MEDIA_CONTAINER),
        Target::TapOverlay(i) => Locator::InSlide(i, TAP_OVERLAY),
        Target::MenuToggle => Locator::Single(MENU_TOGGLE),
        Target::Menu => Locator::Single(MENU),
        Target::MenuClose => Locator::Single(MENU_CLOSE),
        Target::MenuLink(i) => Locator::Nth(MENU_LINK, i),
        Target::RevealText(i) => Locator::Nth(REVEAL_TEXT, i),
        Target::Slider => Locator::Single(SLIDER),
        Target::Window => Locator::Window,
    }
}

/// Key written to [`TARGET_ATTRIBUTE`] on observed elements.
///
/// Only observed targets have a key.
pub fn target_key(target: Target) -> Option<String> {
    match target {
        Target::MediaContainer(i) => Some(format!("media:{i}")),
        Target::RevealText(i) => Some(format!("reveal:{i}")),
        _ => None,
    }
}

/// Parse a key written by [`target_key`]
pub fn parse_target_key(key: &str) -> Option<Target> {
    let (kind, index) = key.split_once(':')?;
    let index = index.parse().ok()?;
    match kind {
        "media" => Some(Target::MediaContainer(index)),
        "reveal" => Some(Target::RevealText(index)),
        _ => None,
    }
}
