#![cfg(target_arch = "wasm32")]

mod common;

use common::RecordingSurface;
use flocks_site::{Engine, EngineConfig};
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

fn canvas_with_size(width: &str, height: &str) -> web_sys::HtmlCanvasElement {
    let document = web_sys::window().unwrap().document().unwrap();
    let canvas = document
        .create_element("canvas")
        .unwrap()
        .dyn_into::<web_sys::HtmlCanvasElement>()
        .unwrap();
    canvas
        .style()
        .set_css_text(&format!("display:block;width:{width};height:{height}"));
    document.body().unwrap().append_child(&canvas).unwrap();
    canvas
}

#[wasm_bindgen_test]
fn engine_fills_canvas_layout_box() {
    let canvas = canvas_with_size("320px", "180px");
    let width = f64::from(canvas.offset_width());
    let height = f64::from(canvas.offset_height());
    assert!(width > 0.0 && height > 0.0);

    let mut engine = Engine::new(EngineConfig::services(), 3);
    engine.rebuild(width, height);
    let stats = engine.step(&mut RecordingSurface::default());
    assert_eq!(stats.entities, 60);
    for e in engine.entities() {
        assert!(e.x >= 0.0 && e.x < width && e.y >= 0.0 && e.y < height);
    }
}

#[wasm_bindgen_test]
fn hidden_canvas_has_degenerate_size() {
    let canvas = canvas_with_size("0", "0");
    let mut engine = Engine::new(EngineConfig::hero(), 3);
    engine.rebuild(
        f64::from(canvas.offset_width()),
        f64::from(canvas.offset_height()),
    );
    for _ in 0..100 {
        engine.step(&mut RecordingSurface::default());
    }
    assert!(engine.entities().iter().all(|e| e.x.is_finite() && e.y.is_finite()));
}
