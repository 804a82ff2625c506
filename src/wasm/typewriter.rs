use std::cell::{Cell, RefCell};
use std::rc::Rc;
use std::time::Duration;

use wasm_bindgen::JsCast;
use web_sys::HtmlElement;

use super::dom;
use crate::error::{Result, SiteError};
use crate::typewriter::{Typewriter, TypewriterTiming};

const TEXT_ID: &str = "typewriter-text";
const WRAPPER_SELECTOR: &str = ".typewriter-wrapper";
const RESIZE_DEBOUNCE_MS: i32 = 250;

/// Pending `setTimeout` handle for the current run.
type TimerSlot = Rc<Cell<Option<i32>>>;

fn millis(delay: Duration) -> i32 {
    i32::try_from(delay.as_millis()).unwrap_or(i32::MAX)
}

/// Start the typewriter and restart it (debounced) whenever the window
/// resizes, so the reserved height follows the new font metrics.
pub fn init(phrases: &[String], timing: TypewriterTiming) -> Result<()> {
    let timer: TimerSlot = Rc::new(Cell::new(None));
    run(phrases, timing, timer.clone())?;

    let phrases = phrases.to_vec();
    let debounce: TimerSlot = Rc::new(Cell::new(None));
    dom::listen(dom::window()?.as_ref(), "resize", move |_: web_sys::Event| {
        if let Some(handle) = debounce.take() {
            dom::clear_timeout(handle);
        }
        let phrases = phrases.clone();
        let timer = timer.clone();
        let handle = dom::set_timeout(RESIZE_DEBOUNCE_MS, move || {
            if let Ok(Some(wrapper)) = dom::query::<HtmlElement>(WRAPPER_SELECTOR) {
                dom::set_style(&wrapper, "min-height", "auto");
            }
            if let Err(err) = run(&phrases, timing, timer) {
                log::warn!("typewriter restart failed: {err}");
            }
        });
        match handle {
            Ok(handle) => debounce.set(Some(handle)),
            Err(err) => log::warn!("typewriter resize debounce: {err}"),
        }
    })
}

/// One run: reserve height, clear the text, schedule the first tick. Any
/// tick left over from a previous run is cancelled first.
fn run(phrases: &[String], timing: TypewriterTiming, timer: TimerSlot) -> Result<()> {
    let text: HtmlElement = dom::by_id(TEXT_ID)?;
    let typewriter = Typewriter::new(phrases.iter().cloned(), timing)?;

    if let Some(handle) = timer.take() {
        dom::clear_timeout(handle);
    }

    if let Some(wrapper) = dom::query::<HtmlElement>(WRAPPER_SELECTOR)? {
        let height = measure_height(&text, typewriter.longest_phrase())?;
        dom::set_style(&wrapper, "min-height", &format!("{height}px"));
    }
    text.set_text_content(Some(""));

    let state = Rc::new(RefCell::new(typewriter));
    schedule(state, text, timer, timing.start)
}

fn schedule(
    state: Rc<RefCell<Typewriter>>,
    text: HtmlElement,
    timer: TimerSlot,
    delay: Duration,
) -> Result<()> {
    let slot = timer.clone();
    let handle = dom::set_timeout(millis(delay), move || {
        let step = state.borrow_mut().tick();
        text.set_text_content(Some(&step.text));
        if let Err(err) = schedule(state, text, timer, step.delay) {
            log::warn!("typewriter stopped: {err}");
        }
    })?;
    slot.set(Some(handle));
    Ok(())
}

/// Height of `phrase` rendered with the text element's font.
fn measure_height(text: &HtmlElement, phrase: &str) -> Result<i32> {
    let window = dom::window()?;
    let document = dom::document()?;
    let body = document
        .body()
        .ok_or_else(|| SiteError::MissingElement("body".into()))?;

    let mut font = String::new();
    if let Some(computed) = window.get_computed_style(text)? {
        for property in ["font-size", "font-weight", "line-height"] {
            let value = computed.get_property_value(property)?;
            font.push_str(&format!("{property}:{value};"));
        }
    }

    let measurer: HtmlElement = document.create_element("span")?.unchecked_into();
    measurer.style().set_css_text(&format!(
        "position:absolute;visibility:hidden;height:auto;width:auto;white-space:nowrap;{font}"
    ));
    measurer.set_text_content(Some(phrase));
    body.append_child(&measurer)?;
    let height = measurer.offset_height();
    body.remove_child(&measurer)?;
    Ok(height)
}
