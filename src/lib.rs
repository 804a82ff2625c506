#![cfg_attr(target_arch = "wasm32", allow(dead_code))]

pub mod carousel;
pub mod config;
pub mod effects;
pub mod engine;
pub mod error;
pub mod typewriter;

pub use config::SiteConfig;
pub use engine::{Engine, EngineConfig};
pub use error::{Result, SiteError};

// Only compile wasm-specific code when targeting wasm32.

#[cfg(target_arch = "wasm32")]
mod wasm {
    use wasm_bindgen::prelude::*;

    use crate::config::{SiteConfig, CONFIG_ELEMENT_ID};

    mod dom;
    mod page;
    mod render;
    mod typewriter;

    #[wasm_bindgen(start)]
    pub fn main() -> Result<(), JsValue> {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).ok();

        let window = web_sys::window().ok_or("no window")?;
        let document = window.document().ok_or("no document")?;

        let inline = document
            .get_element_by_id(CONFIG_ELEMENT_ID)
            .and_then(|el| el.text_content());
        let config = SiteConfig::from_optional_json(inline.as_deref());

        // Each effect stands alone: a failure is logged and the rest still run.
        let results = [
            ("navbar", page::init_navbar(&config.effects)),
            ("scroll progress", page::init_scroll_progress()),
            ("back to top", page::init_back_to_top(&config.effects)),
            (
                "typewriter",
                typewriter::init(&config.phrases, config.typewriter),
            ),
            (
                "hero canvas",
                render::start("hero-canvas", None, config.hero.clone()),
            ),
            (
                "services canvas",
                render::start("services-canvas", Some("services"), config.services.clone()),
            ),
            ("card tilt", page::init_tilt(&config.effects)),
            ("services glow", page::init_services_glow()),
            ("carousel", page::init_carousel(&config.carousel)),
            ("timeline", page::init_timeline()),
            ("counters", page::init_counters(&config.effects)),
            (
                "cta canvas",
                render::start("cta-canvas", None, config.cta.clone()),
            ),
            ("cta ripple", page::init_ripple()),
        ];
        for (name, result) in results {
            match result {
                Ok(()) => log::debug!("{name} ready"),
                Err(err) => log::warn!("{name} skipped: {err}"),
            }
        }

        log::info!("site effects initialised");
        Ok(())
    }
}

// When compiling for non-wasm targets (e.g., `cargo test` on host),
// provide an empty stub so the crate still builds.
#[cfg(not(target_arch = "wasm32"))]
pub fn main() {}
