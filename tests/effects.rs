use std::time::Duration;

use flocks_site::carousel::{Autoplay, CarouselConfig};
use flocks_site::effects::{
    active_section, counter_value, ease_out_cubic, parse_count, ripple_geometry, scroll_progress,
    tilt_angles, tilt_transform, Rect,
};
use flocks_site::engine::entity::EntityKind;
use flocks_site::engine::surface::Rgb;
use flocks_site::{EngineConfig, SiteConfig, SiteError};

#[test]
fn scroll_progress_is_clamped_percent() {
    assert_eq!(scroll_progress(500.0, 2000.0, 1000.0), 50.0);
    assert_eq!(scroll_progress(5000.0, 2000.0, 1000.0), 100.0);
    assert_eq!(scroll_progress(-20.0, 2000.0, 1000.0), 0.0);
    assert_eq!(scroll_progress(0.0, 1000.0, 1000.0), 0.0);
    assert_eq!(scroll_progress(10.0, f64::NAN, 1000.0), 0.0);
    assert_eq!(scroll_progress(f64::NAN, 2000.0, 1000.0), 0.0);
}

#[test]
fn last_section_past_offset_is_active() {
    let sections = [("hero", -800.0), ("services", 40.0), ("cta", 600.0)];
    assert_eq!(active_section(sections, 120.0), Some("services"));
    assert_eq!(active_section([("hero", 300.0)], 120.0), None);
}

#[test]
fn tilt_is_clamped() {
    let card = Rect {
        left: 0.0,
        top: 0.0,
        width: 200.0,
        height: 100.0,
    };
    assert_eq!(tilt_angles(100.0, 50.0, card, 6.0), (0.0, 0.0));
    assert_eq!(tilt_angles(200.0, 0.0, card, 6.0), (6.0, 6.0));
    assert_eq!(tilt_angles(-1000.0, 1000.0, card, 6.0), (-6.0, -6.0));
    let collapsed = Rect {
        width: f64::NAN,
        ..card
    };
    assert_eq!(tilt_angles(10.0, 10.0, collapsed, 6.0), (0.0, 0.0));
    assert_eq!(
        tilt_transform(1.5, -3.0),
        "perspective(800px) rotateX(1.5deg) rotateY(-3deg) translateY(-6px)"
    );
}

#[test]
fn ripple_is_centred_on_click() {
    let button = Rect {
        left: 100.0,
        top: 50.0,
        width: 160.0,
        height: 40.0,
    };
    let ripple = ripple_geometry(button, 120.0, 70.0);
    assert_eq!(ripple.size, 320.0);
    assert_eq!(ripple.left, 20.0 - 160.0);
    assert_eq!(ripple.top, 20.0 - 160.0);
}

#[test]
fn counter_eases_to_target() {
    let duration = Duration::from_millis(1200);
    assert_eq!(counter_value(250, Duration::ZERO, duration), 0);
    assert_eq!(counter_value(250, duration, duration), 250);
    assert_eq!(counter_value(250, Duration::from_secs(5), duration), 250);
    // ease-out: half the time covers 7/8 of the distance
    assert_eq!(counter_value(800, Duration::from_millis(600), duration), 700);
    assert_eq!(counter_value(10, Duration::ZERO, Duration::ZERO), 10);
    assert!((ease_out_cubic(0.5) - 0.875).abs() < 1e-12);
}

#[test]
fn malformed_counts_are_rejected() {
    assert_eq!(parse_count(" 42 ").unwrap(), 42);
    assert!(matches!(parse_count("12abc"), Err(SiteError::InvalidCount(raw)) if raw == "12abc"));
    assert!(parse_count("").is_err());
}

#[test]
fn carousel_options_match_swiper_names() {
    let json = CarouselConfig::default().to_options_json().unwrap();
    let v: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(v["loop"], true);
    assert_eq!(v["loopAdditionalSlides"], 8);
    assert_eq!(v["speed"], 8000);
    assert_eq!(v["autoplay"]["delay"], 1);
    assert_eq!(v["autoplay"]["pauseOnMouseEnter"], true);
    assert_eq!(v["breakpoints"]["768"]["slidesPerView"], 3);
    assert_eq!(v["breakpoints"]["1100"]["spaceBetween"], 28);
    assert_eq!(v["a11y"]["nextSlideMessage"], "Next industry");
    assert_eq!(v["fadeEffect"]["crossFade"], false);
    assert!(v.get("selector").is_none());
}

#[test]
fn missing_config_uses_defaults() {
    assert_eq!(SiteConfig::from_optional_json(None), SiteConfig::default());
    assert_eq!(SiteConfig::from_optional_json(Some("  ")), SiteConfig::default());
    assert_eq!(
        SiteConfig::from_optional_json(Some("{not json")),
        SiteConfig::default()
    );
    assert!(matches!(
        SiteConfig::from_json("[1]"),
        Err(SiteError::Config(_))
    ));
}

#[test]
fn partial_config_overrides_only_named_fields() {
    let config = SiteConfig::from_json(
        r#"{
            "phrases": ["Alpha"],
            "typewriter": { "hold": 10 },
            "cta": { "populations": [{ "kind": "drift", "count": 5 }], "palette": [[1, 2, 3]] }
        }"#,
    )
    .unwrap();

    assert_eq!(config.phrases, vec!["Alpha".to_owned()]);
    assert_eq!(config.typewriter.hold, Duration::from_millis(10));
    assert_eq!(config.typewriter.type_char, Duration::from_millis(100));
    assert_eq!(config.cta.populations[0].kind, EntityKind::Drift);
    assert_eq!(config.cta.pool_size(), 5);
    assert_eq!(config.cta.palette, vec![Rgb(1, 2, 3)]);
    assert_eq!(config.cta.connectors, None);
    assert_eq!(config.hero, EngineConfig::hero());
    assert_eq!(config.effects.navbar_offset, 60.0);
}

#[test]
fn nested_overrides_keep_sibling_defaults() {
    let config = SiteConfig::from_json(
        r#"{
            "phrases": ["Alpha"],
            "carousel": { "autoplay": { "delay": 3000 }, "breakpoints": { "600": { "slidesPerView": 2 } } },
            "services": { "physics": { "damping": 0.9 }, "connectors": { "radius": 80 } },
            "hero": { "connectors": null }
        }"#,
    )
    .unwrap();

    assert_eq!(config.phrases, vec!["Alpha".to_owned()]);
    assert_eq!(
        config.carousel.autoplay,
        Autoplay {
            delay: 3000,
            ..Autoplay::default()
        }
    );
    assert_eq!(config.carousel.breakpoints[&600].slides_per_view, 2);
    assert_eq!(config.carousel.breakpoints[&600].space_between, 24);
    assert_eq!(config.carousel.a11y, CarouselConfig::default().a11y);

    let services = EngineConfig::services();
    assert_eq!(config.services.physics.damping, 0.9);
    assert_eq!(config.services.physics.repulsion_radius, services.physics.repulsion_radius);
    assert_eq!(config.services.populations, services.populations);
    assert_eq!(config.services.palette, services.palette);
    let connectors = config.services.connectors.expect("services keep connectors");
    assert_eq!(connectors.radius, 80.0);
    assert_eq!(connectors.base_alpha, 0.12);
    assert_eq!(config.hero, EngineConfig::hero());
    assert_eq!(config.cta, EngineConfig::cta());
}

#[test]
fn services_connectors_can_be_switched_off() {
    let config = SiteConfig::from_json(r#"{ "services": { "connectors": null } }"#).unwrap();
    assert_eq!(config.services.connectors, None);
    assert_eq!(config.services.pool_size(), 60);
}
