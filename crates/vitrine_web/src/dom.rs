// SPDX-License-Identifier: MIT OR Apache-2.0
//! Browser document.
//!
//! Implements the document ports over `web-sys`. Element handles are looked
//! up through [`crate::selectors`] on demand, so markup inserted by the
//! behavior layer (indicators, overlays) is found the same way as authored
//! markup.

use crate::error::WebError;
use crate::selectors::{self, Locator};
use vitrine_behavior::{
    CarouselDocument, ElementLookup, IndicatorSpec, MediaDocument, MenuDocument, OverlaySpec,
    RevealDocument, SlidePhase, SliderDocument, Target,
};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, HtmlElement, HtmlMediaElement, Window};

const LOG_TARGET: &str = "vitrine::dom";

/// Document backed by the live DOM
#[derive(Debug, Clone)]
pub struct DomDocument {
    window: Window,
    document: Document,
    body: HtmlElement,
    slides: Vec<Element>,
    observation: bool,
}

impl DomDocument {
    /// Attach to the window's document
    pub fn from_window(window: Window) -> Result<Self, WebError> {
        let document = window.document().ok_or(WebError::NoDocument)?;
        let body = document.body().ok_or(WebError::NoBody)?;
        let slides = query_all(&document, selectors::SLIDE)?;
        let observation = js_sys::Reflect::has(&window, &JsValue::from_str("IntersectionObserver"))
            .unwrap_or(false);

        tracing::debug!(
            target: LOG_TARGET,
            slides = slides.len(),
            observation,
            "Attached to document"
        );
        Ok(Self {
            window,
            document,
            body,
            slides,
            observation,
        })
    }

    /// The window
    pub fn window(&self) -> &Window {
        &self.window
    }

    /// The body element
    pub fn body(&self) -> &HtmlElement {
        &self.body
    }

    /// Element of a target, `None` when absent or for the window
    pub fn element(&self, target: Target) -> Option<Element> {
        match selectors::locate(target) {
            Locator::Single(selector) => self.document.query_selector(selector).ok().flatten(),
            Locator::Nth(selector, index) => query_all(&self.document, selector)
                .ok()
                .and_then(|elements| elements.into_iter().nth(index)),
            Locator::InSlide(slide, selector) => self
                .slides
                .get(slide)
                .and_then(|card| card.query_selector(selector).ok().flatten()),
            Locator::Window => None,
        }
    }

    fn count(&self, selector: &str) -> usize {
        self.document
            .query_selector_all(selector)
            .map_or(0, |list| list.length() as usize)
    }

    fn toggle_class(&self, target: Target, class: &str, on: bool) {
        if let Some(element) = self.element(target) {
            toggle_class(&element, class, on);
        }
    }

    fn media(&self, slide: usize) -> Option<HtmlMediaElement> {
        self.element(Target::Media(slide))
            .and_then(|element| element.dyn_into::<HtmlMediaElement>().ok())
    }
}

fn query_all(document: &Document, selector: &str) -> Result<Vec<Element>, WebError> {
    let list = document.query_selector_all(selector)?;
    Ok((0..list.length())
        .filter_map(|i| list.get(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect())
}

fn toggle_class(element: &Element, class: &str, on: bool) {
    if let Err(err) = element.class_list().toggle_with_force(class, on) {
        tracing::warn!(target: LOG_TARGET, class, error = ?err, "Could not toggle class");
    }
}

fn set_attribute(element: &Element, name: &str, value: &str) {
    if let Err(err) = element.set_attribute(name, value) {
        tracing::warn!(target: LOG_TARGET, name, error = ?err, "Could not set attribute");
    }
}

fn bool_attr(value: bool) -> &'static str {
    if value {
        "true"
    } else {
        "false"
    }
}

impl ElementLookup for DomDocument {
    fn has_target(&self, target: Target) -> bool {
        target == Target::Window || self.element(target).is_some()
    }
}

impl CarouselDocument for DomDocument {
    fn slide_count(&self) -> usize {
        self.slides.len()
    }

    fn set_slide_phase(&mut self, slide: usize, phase: SlidePhase) {
        let Some(card) = self.slides.get(slide) else {
            return;
        };
        toggle_class(card, selectors::ACTIVE_CLASS, phase == SlidePhase::Active);
        toggle_class(card, selectors::LEAVING_CLASS, phase == SlidePhase::Leaving);
        set_attribute(card, "aria-hidden", bool_attr(phase != SlidePhase::Active));
    }

    fn set_details_open(&mut self, slide: usize, open: bool) {
        self.toggle_class(Target::DetailsPanel(slide), selectors::OPEN_CLASS, open);
        if let Some(button) = self.element(Target::LearnMore(slide)) {
            set_attribute(&button, "aria-expanded", bool_attr(open));
        }
    }

    fn indicator_count(&self) -> usize {
        self.count(selectors::INDICATOR)
    }

    fn append_indicator(&mut self, spec: &IndicatorSpec) {
        let Some(container) = self.element(Target::IndicatorContainer) else {
            return;
        };
        let button = match self.document.create_element("button") {
            Ok(button) => button,
            Err(err) => {
                tracing::warn!(target: LOG_TARGET, error = ?err, "Could not create indicator");
                return;
            }
        };
        set_attribute(&button, "type", "button");
        set_attribute(&button, "class", selectors::INDICATOR_CLASS);
        set_attribute(&button, "aria-label", &spec.label);
        set_attribute(&button, "data-testid", &spec.test_id);
        if let Err(err) = container.append_child(&button) {
            tracing::warn!(target: LOG_TARGET, error = ?err, "Could not append indicator");
        }
    }

    fn set_indicator_active(&mut self, indicator: usize, active: bool) {
        if let Some(element) = self.element(Target::Indicator(indicator)) {
            toggle_class(&element, selectors::ACTIVE_CLASS, active);
            set_attribute(&element, "aria-current", bool_attr(active));
        }
    }

    fn set_progress(&mut self, percent: f64) {
        let Some(bar) = self
            .element(Target::ProgressBar)
            .and_then(|element| element.dyn_into::<HtmlElement>().ok())
        else {
            return;
        };
        let _ = bar.style().set_property("width", &format!("{percent}%"));
    }
}

impl MediaDocument for DomDocument {
    fn viewport_width(&self) -> u32 {
        self.window
            .inner_width()
            .ok()
            .and_then(|width| width.as_f64())
            .map_or(0, |width| width.max(0.0) as u32)
    }

    fn play_media(&mut self, slide: usize) {
        if let Some(media) = self.media(slide) {
            // Autoplay policies only allow muted playback without a gesture
            media.set_muted(true);
            if let Err(err) = media.play() {
                tracing::warn!(target: LOG_TARGET, slide, error = ?err, "Play was rejected");
            }
        }
    }

    fn pause_media(&mut self, slide: usize) {
        if let Some(media) = self.media(slide) {
            let _ = media.pause();
        }
    }

    fn rewind_media(&mut self, slide: usize) {
        if let Some(media) = self.media(slide) {
            media.set_current_time(0.0);
        }
    }

    fn create_overlay(&mut self, spec: &OverlaySpec) {
        let Some(container) = self.element(Target::MediaContainer(spec.index)) else {
            return;
        };
        let overlay = match self.document.create_element("button") {
            Ok(overlay) => overlay,
            Err(err) => {
                tracing::warn!(target: LOG_TARGET, error = ?err, "Could not create overlay");
                return;
            }
        };
        set_attribute(&overlay, "type", "button");
        set_attribute(&overlay, "class", selectors::TAP_OVERLAY_CLASS);
        set_attribute(&overlay, "aria-label", &spec.label);
        set_attribute(&overlay, "data-testid", &spec.test_id);
        overlay.set_text_content(Some(&spec.label));
        if let Err(err) = container.append_child(&overlay) {
            tracing::warn!(target: LOG_TARGET, error = ?err, "Could not append overlay");
        }
    }

    fn set_overlay_visible(&mut self, slide: usize, visible: bool) {
        self.toggle_class(Target::TapOverlay(slide), selectors::HIDDEN_CLASS, !visible);
    }
}

impl MenuDocument for DomDocument {
    fn menu_link_count(&self) -> usize {
        self.count(selectors::MENU_LINK)
    }

    fn set_menu_open(&mut self, open: bool) {
        if let Some(menu) = self.element(Target::Menu) {
            toggle_class(&menu, selectors::OPEN_CLASS, open);
            set_attribute(&menu, "aria-hidden", bool_attr(!open));
        }
    }

    fn set_toggle_expanded(&mut self, expanded: bool) {
        if let Some(toggle) = self.element(Target::MenuToggle) {
            set_attribute(&toggle, "aria-expanded", bool_attr(expanded));
        }
    }

    fn set_scroll_locked(&mut self, locked: bool) {
        let style = self.body.style();
        let result = if locked {
            style.set_property("overflow", "hidden")
        } else {
            style.remove_property("overflow").map(|_| ())
        };
        if let Err(err) = result {
            tracing::warn!(target: LOG_TARGET, error = ?err, "Could not change scroll lock");
        }
    }
}

impl RevealDocument for DomDocument {
    fn reveal_count(&self) -> usize {
        self.count(selectors::REVEAL_TEXT)
    }

    fn supports_observation(&self) -> bool {
        self.observation
    }

    fn viewport_height(&self) -> u32 {
        self.window
            .inner_height()
            .ok()
            .and_then(|height| height.as_f64())
            .map_or(0, |height| height.max(0.0) as u32)
    }

    fn reveal_top(&self, index: usize) -> Option<f64> {
        self.element(Target::RevealText(index))
            .map(|element| element.get_bounding_client_rect().top())
    }

    fn set_revealed(&mut self, index: usize) {
        self.toggle_class(Target::RevealText(index), selectors::REVEALED_CLASS, true);
    }
}

impl SliderDocument for DomDocument {
    fn slider_scroll_left(&self) -> f64 {
        self.element(Target::Slider)
            .map_or(0.0, |slider| f64::from(slider.scroll_left()))
    }

    fn slider_max_scroll(&self) -> f64 {
        self.element(Target::Slider).map_or(0.0, |slider| {
            f64::from(slider.scroll_width() - slider.client_width()).max(0.0)
        })
    }

    fn set_slider_scroll_left(&mut self, left: f64) {
        if let Some(slider) = self.element(Target::Slider) {
            slider.set_scroll_left(left.round() as i32);
        }
    }
}
