//! DOM wiring for the non-canvas effects.

use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

use js_sys::{Array, Function, Reflect, JSON};
use wasm_bindgen::{closure::Closure, JsCast, JsValue};
use web_sys::{
    Element, HtmlElement, IntersectionObserver, IntersectionObserverEntry,
    IntersectionObserverInit, MouseEvent, ScrollBehavior, ScrollToOptions,
};

use super::dom;
use crate::carousel::CarouselConfig;
use crate::effects::{self, EffectsConfig};
use crate::error::{Result, SiteError};

const RIPPLE_STYLE_ID: &str = "ripple-style";
const RIPPLE_LIFETIME_MS: i32 = 700;

fn scroll_y() -> f64 {
    dom::window()
        .and_then(|w| w.scroll_y().map_err(SiteError::from))
        .unwrap_or(0.0)
}

fn toggle_class(element: &Element, class: &str, on: bool) {
    if let Err(err) = element.class_list().toggle_with_force(class, on) {
        log::debug!("class {class} not toggled: {err:?}");
    }
}

pub fn init_navbar(config: &EffectsConfig) -> Result<()> {
    let navbar: Element = dom::by_id("navbar")?;
    let hamburger: Element = dom::by_id("hamburger")?;
    let nav_links: Element = dom::by_id("nav-links")?;
    let sections = dom::query_all("section[id]")?;
    let anchors = dom::query_all(".nav-links a[href^=\"#\"]")?;

    let navbar_offset = config.navbar_offset;
    let active_offset = config.active_section_offset;
    let on_scroll = move || {
        toggle_class(&navbar, "scrolled", scroll_y() > navbar_offset);

        let tops: Vec<(String, f64)> = sections
            .iter()
            .map(|s| (s.id(), s.get_bounding_client_rect().top()))
            .collect();
        let current = effects::active_section(
            tops.iter().map(|(id, top)| (id.as_str(), *top)),
            active_offset,
        )
        .unwrap_or("");
        let target = format!("#{current}");
        for anchor in &anchors {
            let active = anchor.get_attribute("href").as_deref() == Some(target.as_str());
            toggle_class(anchor, "active", active);
        }
    };
    on_scroll();
    dom::listen_passive(dom::window()?.as_ref(), "scroll", on_scroll)?;

    {
        let hamburger_el = hamburger.clone();
        let nav_links = nav_links.clone();
        dom::listen(hamburger.as_ref(), "click", move |_: MouseEvent| {
            for el in [&hamburger_el, &nav_links] {
                if let Err(err) = el.class_list().toggle("open") {
                    log::debug!("menu toggle failed: {err:?}");
                }
            }
        })?;
    }

    for link in dom::query_all(".nav-links a")? {
        let hamburger = hamburger.clone();
        let nav_links = nav_links.clone();
        dom::listen(link.as_ref(), "click", move |_: MouseEvent| {
            toggle_class(&hamburger, "open", false);
            toggle_class(&nav_links, "open", false);
        })?;
    }
    Ok(())
}

pub fn init_scroll_progress() -> Result<()> {
    let bar: HtmlElement = dom::by_id("scroll-progress")?;
    dom::listen_passive(dom::window()?.as_ref(), "scroll", move || {
        let Ok(window) = dom::window() else { return };
        let Some(body) = window.document().and_then(|d| d.body()) else {
            return;
        };
        let viewport = window
            .inner_height()
            .ok()
            .and_then(|v| v.as_f64())
            .unwrap_or(0.0);
        let pct = effects::scroll_progress(scroll_y(), f64::from(body.scroll_height()), viewport);
        dom::set_style(&bar, "width", &format!("{pct}%"));
    })
}

pub fn init_back_to_top(config: &EffectsConfig) -> Result<()> {
    let button: Element = dom::by_id("back-top")?;
    let window = dom::window()?;

    let threshold = config.back_to_top_offset;
    {
        let button = button.clone();
        dom::listen_passive(window.as_ref(), "scroll", move || {
            toggle_class(&button, "show", scroll_y() > threshold);
        })?;
    }
    dom::listen(button.as_ref(), "click", move |_: MouseEvent| {
        let options = ScrollToOptions::new();
        options.set_top(0.0);
        options.set_behavior(ScrollBehavior::Smooth);
        window.scroll_to_with_scroll_to_options(&options);
    })
}

pub fn init_tilt(config: &EffectsConfig) -> Result<()> {
    let max_tilt = config.max_tilt;
    for card in dom::query_all(".tilt-card")? {
        let Ok(card) = card.dyn_into::<HtmlElement>() else {
            continue;
        };
        {
            let target = card.clone();
            dom::listen(card.as_ref(), "mousemove", move |e: MouseEvent| {
                let (rx, ry) = effects::tilt_angles(
                    f64::from(e.client_x()),
                    f64::from(e.client_y()),
                    dom::rect_of(&target),
                    max_tilt,
                );
                dom::set_style(&target, "transform", &effects::tilt_transform(rx, ry));
            })?;
        }
        let target = card.clone();
        dom::listen(card.as_ref(), "mouseleave", move |_: MouseEvent| {
            dom::set_style(&target, "transform", "");
        })?;
    }
    Ok(())
}

pub fn init_services_glow() -> Result<()> {
    let section: HtmlElement = dom::by_id("services")?;
    let glow: HtmlElement = dom::by_id("services-glow")?;

    {
        let section_el = section.clone();
        let glow = glow.clone();
        dom::listen(section.as_ref(), "mousemove", move |e: MouseEvent| {
            let rect = dom::rect_of(&section_el);
            dom::set_style(&glow, "left", &format!("{}px", f64::from(e.client_x()) - rect.left));
            dom::set_style(&glow, "top", &format!("{}px", f64::from(e.client_y()) - rect.top));
            dom::set_style(&glow, "opacity", "1");
        })?;
    }
    dom::listen(section.as_ref(), "mouseleave", move |_: MouseEvent| {
        dom::set_style(&glow, "opacity", "0");
    })
}

/// Hand the carousel options to `window.Swiper`, if the library loaded.
pub fn init_carousel(config: &CarouselConfig) -> Result<()> {
    let window = dom::window()?;
    let constructor = Reflect::get(&window, &JsValue::from_str("Swiper"))?;
    if constructor.is_undefined() {
        log::error!("Swiper not loaded");
        return Ok(());
    }
    let constructor: Function = constructor
        .dyn_into()
        .map_err(|_| SiteError::Js("window.Swiper is not a constructor".into()))?;

    let options = JSON::parse(&config.to_options_json()?)?;
    Reflect::construct(
        &constructor,
        &Array::of2(&JsValue::from_str(&config.selector), &options),
    )?;
    log::debug!("carousel configured on {}", config.selector);
    Ok(())
}

/// Call `on_visible` once per element the first time it scrolls into view.
fn observe_once<F>(
    elements: &[Element],
    threshold: f64,
    root_margin: &str,
    mut on_visible: F,
) -> Result<()>
where
    F: FnMut(Element) + 'static,
{
    let callback = Closure::<dyn FnMut(Array, IntersectionObserver)>::new(
        move |entries: Array, observer: IntersectionObserver| {
            for entry in entries.iter() {
                let entry: IntersectionObserverEntry = entry.unchecked_into();
                if !entry.is_intersecting() {
                    continue;
                }
                let target = entry.target();
                observer.unobserve(&target);
                on_visible(target);
            }
        },
    );

    let init = IntersectionObserverInit::new();
    init.set_threshold(&JsValue::from_f64(threshold));
    init.set_root_margin(root_margin);
    let observer = IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init)?;
    callback.forget();

    for element in elements {
        observer.observe(element);
    }
    Ok(())
}

pub fn init_timeline() -> Result<()> {
    let steps = dom::query_all(".timeline-step")?;
    if steps.is_empty() {
        return Err(SiteError::MissingElement(".timeline-step".into()));
    }
    observe_once(&steps, 0.25, "0px 0px -60px 0px", |step| {
        if let Err(err) = step.class_list().add_1("visible") {
            log::debug!("timeline step not revealed: {err:?}");
        }
    })
}

pub fn init_counters(config: &EffectsConfig) -> Result<()> {
    let counters = dom::query_all(".bento-stat-num[data-count]")?;
    if counters.is_empty() {
        return Err(SiteError::MissingElement(".bento-stat-num[data-count]".into()));
    }

    let reduced = dom::window()?
        .match_media("(prefers-reduced-motion: reduce)")?
        .map(|m| m.matches())
        .unwrap_or(false);
    let duration = config.counter_duration();

    observe_once(&counters, 0.1, "0px 0px -40px 0px", move |el| {
        let raw = el.get_attribute("data-count").unwrap_or_default();
        let target = match effects::parse_count(&raw) {
            Ok(target) => target,
            Err(err) => {
                log::warn!("counter skipped: {err}");
                return;
            }
        };
        let suffix = el.get_attribute("data-suffix").unwrap_or_default();

        if reduced {
            el.set_text_content(Some(&format!("{target}{suffix}")));
            return;
        }
        if let Err(err) = animate_counter(el, target, suffix, duration) {
            log::warn!("counter animation failed: {err}");
        }
    })
}

/// Drive one counter from 0 to `target` on animation frames.
fn animate_counter(el: Element, target: i64, suffix: String, duration: Duration) -> Result<()> {
    let window = dom::window()?;
    let start = window.performance().map(|p| p.now()).unwrap_or(0.0);

    let slot: Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>> = Rc::new(RefCell::new(None));
    let next = slot.clone();
    let frame_window = window.clone();
    *slot.borrow_mut() = Some(Closure::new(move |now: f64| {
        let elapsed = Duration::from_secs_f64(((now - start) / 1000.0).max(0.0));
        let value = effects::counter_value(target, elapsed, duration);
        el.set_text_content(Some(&format!("{value}{suffix}")));

        if elapsed >= duration {
            return;
        }
        if let Some(callback) = next.borrow().as_ref() {
            let callback = callback.as_ref().unchecked_ref();
            if let Err(err) = frame_window.request_animation_frame(callback) {
                log::debug!("counter frame not scheduled: {err:?}");
            }
        }
    }));

    if let Some(callback) = slot.borrow().as_ref() {
        window.request_animation_frame(callback.as_ref().unchecked_ref())?;
    }
    Ok(())
}

pub fn init_ripple() -> Result<()> {
    let button: HtmlElement = dom::by_id("cta-btn")?;
    let document = dom::document()?;

    if document.get_element_by_id(RIPPLE_STYLE_ID).is_none() {
        let style = document.create_element("style")?;
        style.set_id(RIPPLE_STYLE_ID);
        style.set_text_content(Some(
            "@keyframes ripple-anim{to{transform:scale(1);opacity:0}}",
        ));
        if let Some(head) = document.head() {
            head.append_child(&style)?;
        }
    }

    let target = button.clone();
    dom::listen(button.as_ref(), "click", move |e: MouseEvent| {
        let ripple = effects::ripple_geometry(
            dom::rect_of(&target),
            f64::from(e.client_x()),
            f64::from(e.client_y()),
        );
        if let Err(err) = spawn_ripple(&target, ripple) {
            log::debug!("ripple failed: {err}");
        }
    })
}

fn spawn_ripple(button: &HtmlElement, ripple: effects::Ripple) -> Result<()> {
    let span: HtmlElement = dom::document()?.create_element("span")?.unchecked_into();
    span.style().set_css_text(&format!(
        "position:absolute;width:{size}px;height:{size}px;left:{left}px;top:{top}px;\
         background:rgba(255,255,255,.25);border-radius:50%;transform:scale(0);\
         animation:ripple-anim .6s ease-out forwards;pointer-events:none;",
        size = ripple.size,
        left = ripple.left,
        top = ripple.top,
    ));
    button.append_child(&span)?;
    dom::set_timeout(RIPPLE_LIFETIME_MS, move || span.remove())?;
    Ok(())
}
