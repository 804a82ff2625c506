use std::cell::RefCell;
use std::f64::consts::TAU;
use std::rc::Rc;

use wasm_bindgen::{closure::Closure, JsCast};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, HtmlElement, MouseEvent, Window};

use super::dom;
use crate::engine::driver::{AnimationDriver, FrameScheduler};
use crate::engine::surface::{Rgba, Surface};
use crate::engine::{Engine, EngineConfig};
use crate::error::{Result, SiteError};

type FrameSlot = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;

/// `Surface` backed by a canvas 2D context.
struct CanvasSurface {
    ctx: CanvasRenderingContext2d,
}

impl Surface for CanvasSurface {
    fn clear(&mut self, width: f64, height: f64) {
        self.ctx.clear_rect(0.0, 0.0, width, height);
    }

    fn fill_circle(&mut self, x: f64, y: f64, radius: f64, color: Rgba) {
        self.ctx.begin_path();
        if self.ctx.arc(x, y, radius.max(0.0), 0.0, TAU).is_err() {
            return;
        }
        self.ctx.set_fill_style_str(&color.to_string());
        self.ctx.fill();
    }

    fn stroke_line(&mut self, x0: f64, y0: f64, x1: f64, y1: f64, width: f64, color: Rgba) {
        self.ctx.begin_path();
        self.ctx.move_to(x0, y0);
        self.ctx.line_to(x1, y1);
        self.ctx.set_stroke_style_str(&color.to_string());
        self.ctx.set_line_width(width);
        self.ctx.stroke();
    }
}

/// `requestAnimationFrame` against a closure slot filled in after the
/// driver exists.
struct RafScheduler {
    window: Window,
    slot: FrameSlot,
}

impl FrameScheduler for RafScheduler {
    type Handle = i32;

    fn request_frame(&mut self) -> Result<i32> {
        let slot = self.slot.borrow();
        let callback = slot
            .as_ref()
            .ok_or_else(|| SiteError::Schedule("frame callback not installed".into()))?;
        self.window
            .request_animation_frame(callback.as_ref().unchecked_ref())
            .map_err(|err| SiteError::Schedule(format!("{err:?}")))
    }

    fn cancel_frame(&mut self, handle: i32) {
        if let Err(err) = self.window.cancel_animation_frame(handle) {
            log::debug!("cancelAnimationFrame({handle}) failed: {err:?}");
        }
    }
}

/// Size the canvas backing store to its layout box.
fn fit_canvas(canvas: &HtmlCanvasElement) -> (f64, f64) {
    let width = canvas.offset_width().max(0);
    let height = canvas.offset_height().max(0);
    canvas.set_width(width as u32);
    canvas.set_height(height as u32);
    (f64::from(width), f64::from(height))
}

/// Start an engine on the canvas with id `canvas_id`. When `region_id` is
/// given, pointer movement over that element repels the engine's nodes.
pub fn start(canvas_id: &str, region_id: Option<&str>, config: EngineConfig) -> Result<()> {
    let canvas: HtmlCanvasElement = dom::by_id(canvas_id)?;
    let ctx: CanvasRenderingContext2d = canvas
        .get_context("2d")?
        .ok_or_else(|| SiteError::NoContext(canvas_id.to_owned()))?
        .dyn_into()
        .map_err(|_| SiteError::NoContext(canvas_id.to_owned()))?;
    let region: Option<HtmlElement> = region_id.map(dom::by_id::<HtmlElement>).transpose()?;

    let window = dom::window()?;
    let seed = (js_sys::Math::random() * u64::MAX as f64) as u64;
    let slot: FrameSlot = Rc::new(RefCell::new(None));
    let driver = Rc::new(RefCell::new(AnimationDriver::new(
        Engine::new(config, seed),
        RafScheduler {
            window: window.clone(),
            slot: slot.clone(),
        },
    )));

    // Animation loop
    // The closure lives in `slot` so the scheduler can hand it back to
    // `request_animation_frame` every frame.
    {
        let driver = driver.clone();
        let mut surface = CanvasSurface { ctx };
        let name = canvas_id.to_owned();
        *slot.borrow_mut() = Some(Closure::wrap(Box::new(move || {
            if let Err(err) = driver.borrow_mut().on_frame(&mut surface) {
                log::error!("{name}: {err}");
            }
        }) as Box<dyn FnMut()>));
    }

    // Resize: cancel the pending frame and rebuild for the new layout box
    {
        let driver = driver.clone();
        let canvas = canvas.clone();
        let name = canvas_id.to_owned();
        dom::listen(window.as_ref(), "resize", move |_: web_sys::Event| {
            let (width, height) = fit_canvas(&canvas);
            if let Err(err) = driver.borrow_mut().resize(width, height) {
                log::error!("{name}: {err}");
            }
        })?;
    }

    if let Some(region) = region {
        {
            let driver = driver.clone();
            let canvas = canvas.clone();
            dom::listen(region.as_ref(), "mousemove", move |e: MouseEvent| {
                let rect = dom::rect_of(&canvas);
                driver.borrow_mut().engine_mut().pointer_mut().track(
                    f64::from(e.client_x()),
                    f64::from(e.client_y()),
                    rect.left,
                    rect.top,
                );
            })?;
        }
        {
            let driver = driver.clone();
            dom::listen(region.as_ref(), "mouseleave", move |_: MouseEvent| {
                driver.borrow_mut().engine_mut().pointer_mut().leave();
            })?;
        }
    }

    let (width, height) = fit_canvas(&canvas);
    driver.borrow_mut().start(width, height)?;
    log::info!(
        "{canvas_id}: {} entities on {width}x{height}",
        driver.borrow().engine().entities().len()
    );
    Ok(())
}
