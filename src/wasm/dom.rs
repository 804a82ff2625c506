//! Thin helpers over `web_sys` shared by the page initializers.

use wasm_bindgen::{closure::Closure, convert::FromWasmAbi, JsCast};
use web_sys::{AddEventListenerOptions, Document, Element, EventTarget, HtmlElement, Window};

use crate::effects::Rect;
use crate::error::{Result, SiteError};

pub fn window() -> Result<Window> {
    web_sys::window().ok_or_else(|| SiteError::Js("no window".into()))
}

pub fn document() -> Result<Document> {
    window()?
        .document()
        .ok_or_else(|| SiteError::Js("no document".into()))
}

/// Element by id, downcast to the requested type.
pub fn by_id<T: JsCast>(id: &str) -> Result<T> {
    document()?
        .get_element_by_id(id)
        .ok_or_else(|| SiteError::MissingElement(format!("#{id}")))?
        .dyn_into::<T>()
        .map_err(|_| SiteError::MissingElement(format!("#{id} (wrong element type)")))
}

pub fn query<T: JsCast>(selector: &str) -> Result<Option<T>> {
    Ok(document()?
        .query_selector(selector)?
        .and_then(|el| el.dyn_into::<T>().ok()))
}

pub fn query_all(selector: &str) -> Result<Vec<Element>> {
    let list = document()?.query_selector_all(selector)?;
    Ok((0..list.length())
        .filter_map(|i| list.get(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect())
}

pub fn rect_of(element: &Element) -> Rect {
    let r = element.get_bounding_client_rect();
    Rect {
        left: r.left(),
        top: r.top(),
        width: r.width(),
        height: r.height(),
    }
}

/// Attach a listener for the lifetime of the page.
pub fn listen<E, F>(target: &EventTarget, event: &str, handler: F) -> Result<()>
where
    E: FromWasmAbi + 'static,
    F: FnMut(E) + 'static,
{
    let closure = Closure::<dyn FnMut(E)>::new(handler);
    target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())?;
    closure.forget();
    Ok(())
}

/// Like [`listen`], registered as passive (scroll handlers).
pub fn listen_passive<F>(target: &EventTarget, event: &str, handler: F) -> Result<()>
where
    F: FnMut() + 'static,
{
    let closure = Closure::<dyn FnMut()>::new(handler);
    let options = AddEventListenerOptions::new();
    options.set_passive(true);
    target.add_event_listener_with_callback_and_add_event_listener_options(
        event,
        closure.as_ref().unchecked_ref(),
        &options,
    )?;
    closure.forget();
    Ok(())
}

/// One-shot timer; returns the handle for `clear_timeout`.
pub fn set_timeout<F>(millis: i32, callback: F) -> Result<i32>
where
    F: FnOnce() + 'static,
{
    let closure = Closure::once_into_js(callback);
    Ok(window()?.set_timeout_with_callback_and_timeout_and_arguments_0(
        closure.unchecked_ref(),
        millis,
    )?)
}

pub fn clear_timeout(handle: i32) {
    if let Ok(window) = window() {
        window.clear_timeout_with_handle(handle);
    }
}

pub fn set_style(element: &HtmlElement, property: &str, value: &str) {
    if let Err(err) = element.style().set_property(property, value) {
        log::debug!("style {property} not applied: {err:?}");
    }
}
