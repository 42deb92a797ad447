// SPDX-License-Identifier: MIT OR Apache-2.0
//! Wasm entry point.
//!
//! This module handles:
//! - Logging setup from the body's log attribute
//! - Settings from the body's settings attribute
//! - DOM listeners for every registered `(Target, EventKind)` pair
//! - Intersection observers for media containers and reveal text
//! - Pumping the page clock from `performance.now()`

use crate::console::{BrowserConsole, ConsoleLayer};
use crate::dom::DomDocument;
use crate::error::{Result, WebError};
use crate::selectors::{self, parse_target_key, target_key};
use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use vitrine_behavior::{EventKind, EventOutcome, Key, Page, PageEvent, PageSettings, Target};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{
    AddEventListenerOptions, Event, EventTarget, HtmlElement, IntersectionObserver,
    IntersectionObserverEntry, IntersectionObserverInit, KeyboardEvent, WheelEvent, Window,
};

/// Period of the clock pump
const CLOCK_PERIOD_MS: i32 = 50;

type SharedPage = Rc<RefCell<Page<DomDocument>>>;

thread_local! {
    static PAGE: RefCell<Option<SharedPage>> = const { RefCell::new(None) };
}

/// Bind the page behavior to the current document.
#[wasm_bindgen(start)]
pub fn start() -> std::result::Result<(), JsValue> {
    if PAGE.with(|page| page.borrow().is_some()) {
        return Ok(());
    }
    bind().map_err(JsValue::from)
}

/// Index of the current carousel slide, `None` without a carousel
#[wasm_bindgen(js_name = currentSlide)]
pub fn current_slide() -> Option<u32> {
    with_page(|page| page.carousel().map(|c| c.current_index() as u32)).flatten()
}

/// Navigate the carousel to a slide
#[wasm_bindgen(js_name = goToSlide)]
pub fn go_to_slide(index: u32) -> bool {
    with_page(|page| page.go_to_slide(index as usize)).unwrap_or(false)
}

fn with_page<R>(f: impl FnOnce(&mut Page<DomDocument>) -> R) -> Option<R> {
    PAGE.with(|slot| {
        let shared = slot.borrow().clone()?;
        let mut page = shared.try_borrow_mut().ok()?;
        Some(f(&mut page))
    })
}

fn bind() -> Result<()> {
    let window = web_sys::window().ok_or(WebError::NoWindow)?;
    let body = window
        .document()
        .ok_or(WebError::NoDocument)?
        .body()
        .ok_or(WebError::NoBody)?;

    init_logging(&body);
    let settings = read_settings(&body);
    let playback_threshold = settings.playback.visibility_threshold;
    let reveal_threshold = settings.reveal.threshold;

    let document = DomDocument::from_window(window.clone())?;
    let page: SharedPage = Rc::new(RefCell::new(Page::mount(document, settings)));

    bind_listeners(&window, &page)?;

    let (media, reveal): (Vec<Target>, Vec<Target>) = page
        .borrow()
        .listeners()
        .targets_for(EventKind::Visibility)
        .partition(|target| matches!(target, Target::MediaContainer(_)));
    observe(&page, &media, playback_threshold)?;
    observe(&page, &reveal, reveal_threshold)?;

    start_clock(&window, &page)?;

    PAGE.with(|slot| *slot.borrow_mut() = Some(page));
    tracing::info!("Page behavior bound");
    Ok(())
}

fn init_logging(body: &HtmlElement) {
    let directives = body
        .get_attribute(selectors::LOG_ATTRIBUTE)
        .unwrap_or_else(|| "info".to_string());
    let filter = tracing_subscriber::EnvFilter::try_new(&directives)
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(ConsoleLayer::new(BrowserConsole))
        .try_init();
}

fn read_settings(body: &HtmlElement) -> PageSettings {
    let Some(text) = body.get_attribute(selectors::SETTINGS_ATTRIBUTE) else {
        return PageSettings::default();
    };
    PageSettings::from_ron_str(&text).unwrap_or_else(|err| {
        tracing::warn!(error = %err, "Ignoring page settings, using defaults");
        PageSettings::default()
    })
}

fn bind_listeners(window: &Window, page: &SharedPage) -> Result<()> {
    let registered: Vec<(Target, EventKind)> = page.borrow().listeners().iter().collect();

    for (target, kind) in registered {
        let Some(name) = kind.dom_name() else {
            continue;
        };
        let event_target: EventTarget = if target == Target::Window {
            window.clone().into()
        } else {
            match page.borrow().document().element(target) {
                Some(element) => element.into(),
                None => continue,
            }
        };

        let shared = Rc::clone(page);
        let callback = Closure::wrap(Box::new(move |event: Event| {
            let Some(page_event) = to_page_event(target, kind, &event) else {
                return;
            };
            let outcome = match shared.try_borrow_mut() {
                Ok(mut page) => page.dispatch(&page_event),
                Err(_) => {
                    tracing::debug!(?target, ?kind, "Dropping re-entrant event");
                    return;
                }
            };
            if outcome == EventOutcome::Consumed {
                event.prevent_default();
            }
        }) as Box<dyn FnMut(Event)>);

        if kind == EventKind::Wheel {
            // preventDefault is ignored on passive listeners
            let options = AddEventListenerOptions::new();
            options.set_passive(false);
            event_target.add_event_listener_with_callback_and_add_event_listener_options(
                name,
                callback.as_ref().unchecked_ref(),
                &options,
            )?;
        } else {
            event_target.add_event_listener_with_callback(name, callback.as_ref().unchecked_ref())?;
        }
        callback.forget();
    }
    Ok(())
}

fn to_page_event(target: Target, kind: EventKind, event: &Event) -> Option<PageEvent> {
    match kind {
        EventKind::Click => Some(PageEvent::Click(target)),
        EventKind::PointerEnter => Some(PageEvent::PointerEnter(target)),
        EventKind::PointerLeave => Some(PageEvent::PointerLeave(target)),
        EventKind::Wheel => event.dyn_ref::<WheelEvent>().map(|wheel| PageEvent::Wheel {
            target,
            delta_x: wheel.delta_x(),
            delta_y: wheel.delta_y(),
        }),
        EventKind::Scroll => Some(PageEvent::Scroll),
        EventKind::Resize => Some(PageEvent::Resize),
        EventKind::KeyDown => event
            .dyn_ref::<KeyboardEvent>()
            .map(|key| PageEvent::KeyDown(Key::from_dom(&key.key()))),
        EventKind::Visibility => None,
    }
}

fn observe(page: &SharedPage, targets: &[Target], threshold: f64) -> Result<()> {
    if targets.is_empty() {
        return Ok(());
    }

    let shared = Rc::clone(page);
    let callback = Closure::wrap(Box::new(
        move |entries: js_sys::Array, _observer: IntersectionObserver| {
            for entry in entries.iter() {
                let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                    continue;
                };
                let Some(target) = entry
                    .target()
                    .get_attribute(selectors::TARGET_ATTRIBUTE)
                    .as_deref()
                    .and_then(parse_target_key)
                else {
                    continue;
                };
                let ratio = if entry.is_intersecting() {
                    entry.intersection_ratio()
                } else {
                    0.0
                };
                if let Ok(mut page) = shared.try_borrow_mut() {
                    page.dispatch(&PageEvent::Visibility { target, ratio });
                }
            }
        },
    ) as Box<dyn FnMut(js_sys::Array, IntersectionObserver)>);

    let thresholds = js_sys::Array::of2(&JsValue::from_f64(0.0), &JsValue::from_f64(threshold));
    let options = IntersectionObserverInit::new();
    options.set_threshold(&thresholds);
    let observer =
        IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)?;
    callback.forget();

    let page = page.borrow();
    for target in targets {
        let Some(element) = page.document().element(*target) else {
            continue;
        };
        if let Some(key) = target_key(*target) {
            element.set_attribute(selectors::TARGET_ATTRIBUTE, &key)?;
        }
        observer.observe(&element);
    }
    tracing::debug!(observed = targets.len(), threshold, "Observing visibility");
    Ok(())
}

fn start_clock(window: &Window, page: &SharedPage) -> Result<()> {
    let performance = window
        .performance()
        .ok_or(WebError::MissingApi("performance"))?;
    let origin = performance.now();

    let shared = Rc::clone(page);
    let tick = Closure::wrap(Box::new(move || {
        let elapsed_ms = (performance.now() - origin).max(0.0);
        if let Ok(mut page) = shared.try_borrow_mut() {
            page.advance_to(Duration::from_secs_f64(elapsed_ms / 1000.0));
        }
    }) as Box<dyn FnMut()>);
    window.set_interval_with_callback_and_timeout_and_arguments_0(
        tick.as_ref().unchecked_ref(),
        CLOCK_PERIOD_MS,
    )?;
    tick.forget();
    Ok(())
}
