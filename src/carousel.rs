//! Options handed to the Swiper carousel on the industries section.
//!
//! Only the library's documented options are produced; the struct
//! serialises to the exact object literal Swiper expects.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CarouselConfig {
    /// CSS selector of the swiper container. Not a Swiper option.
    #[serde(skip_serializing)]
    pub selector: String,
    #[serde(rename = "loop")]
    pub looped: bool,
    pub loop_additional_slides: u32,
    /// Transition duration in ms; long values make autoplay feel continuous.
    pub speed: u32,
    pub space_between: u32,
    pub autoplay: Autoplay,
    pub allow_touch_move: bool,
    pub grab_cursor: bool,
    pub slides_per_view: u32,
    /// Keyed by minimum viewport width in pixels.
    pub breakpoints: BTreeMap<u32, Breakpoint>,
    pub centered_slides: bool,
    pub watch_slides_progress: bool,
    pub effect: String,
    /// Only read by Swiper when `effect` is `"fade"`.
    pub fade_effect: FadeEffect,
    pub update_on_window_resize: bool,
    pub resize_observer: bool,
    pub a11y: A11y,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Autoplay {
    pub delay: u32,
    pub disable_on_interaction: bool,
    pub pause_on_mouse_enter: bool,
    pub stop_on_last_slide: bool,
    pub wait_for_transition: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Breakpoint {
    pub slides_per_view: u32,
    pub space_between: u32,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FadeEffect {
    pub cross_fade: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct A11y {
    pub prev_slide_message: String,
    pub next_slide_message: String,
}

impl Default for Autoplay {
    fn default() -> Self {
        Self {
            delay: 1,
            disable_on_interaction: false,
            pause_on_mouse_enter: true,
            stop_on_last_slide: false,
            wait_for_transition: true,
        }
    }
}

impl Default for Breakpoint {
    fn default() -> Self {
        Self {
            slides_per_view: 1,
            space_between: 24,
        }
    }
}

impl Default for A11y {
    fn default() -> Self {
        Self {
            prev_slide_message: "Previous industry".to_owned(),
            next_slide_message: "Next industry".to_owned(),
        }
    }
}

impl Default for CarouselConfig {
    fn default() -> Self {
        let breakpoints = [(480, 2, 20), (768, 3, 24), (1100, 4, 28)]
            .into_iter()
            .map(|(width, slides_per_view, space_between)| {
                (
                    width,
                    Breakpoint {
                        slides_per_view,
                        space_between,
                    },
                )
            })
            .collect();

        Self {
            selector: ".industries-swiper".to_owned(),
            looped: true,
            loop_additional_slides: 8,
            speed: 8000,
            space_between: 24,
            autoplay: Autoplay::default(),
            allow_touch_move: true,
            grab_cursor: true,
            slides_per_view: 1,
            breakpoints,
            centered_slides: false,
            watch_slides_progress: true,
            effect: "slide".to_owned(),
            fade_effect: FadeEffect::default(),
            update_on_window_resize: true,
            resize_observer: true,
            a11y: A11y::default(),
        }
    }
}

impl CarouselConfig {
    /// Swiper options as a JSON object literal.
    pub fn to_options_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}
