use std::time::Duration;

use flocks_site::typewriter::{default_phrases, Typewriter, TypewriterTiming};
use flocks_site::SiteError;

fn typewriter(phrases: &[&str]) -> Typewriter {
    Typewriter::new(phrases.iter().copied(), TypewriterTiming::default()).unwrap()
}

#[test]
fn full_cycle_moves_to_next_phrase() {
    let mut tw = typewriter(&["Unified Flocks", "Insights"]);
    let timing = TypewriterTiming::default();
    assert_eq!(tw.visible_text(), "");
    assert!(!tw.is_deleting());

    let mut last = None;
    for n in 1..="Unified Flocks".len() {
        let step = tw.tick();
        assert_eq!(step.text, &"Unified Flocks"[..n]);
        last = Some(step);
    }
    assert_eq!(last.unwrap().delay, timing.hold);
    assert!(tw.is_deleting());

    for n in (0.."Unified Flocks".len()).rev() {
        let step = tw.tick();
        assert_eq!(step.text, &"Unified Flocks"[..n]);
        let expected = if n == 0 { timing.pause } else { timing.delete_char };
        assert_eq!(step.delay, expected);
    }

    assert_eq!(tw.phrase_index(), 1);
    assert!(!tw.is_deleting());
    assert_eq!(tw.visible_text(), "");

    let step = tw.tick();
    assert_eq!(step.text, "I");
    assert_eq!(step.delay, timing.type_char);
}

#[test]
fn wraps_back_to_first_phrase() {
    let mut tw = typewriter(&["ab", "c"]);
    // "ab": 2 typing + 2 deleting, "c": 1 typing + 1 deleting
    for _ in 0..6 {
        tw.tick();
    }
    assert_eq!(tw.phrase_index(), 0);
    assert_eq!(tw.tick().text, "a");
}

#[test]
fn slices_by_character() {
    let mut tw = typewriter(&["héllo"]);
    tw.tick();
    assert_eq!(tw.tick().text, "hé");
}

#[test]
fn empty_phrase_is_skipped() {
    let mut tw = typewriter(&["", "ok"]);
    let step = tw.tick();
    assert_eq!(step.text, "");
    assert_eq!(step.delay, Duration::from_millis(500));
    assert_eq!(tw.tick().text, "o");
}

#[test]
fn rejects_empty_phrase_list() {
    let err = Typewriter::new(Vec::<String>::new(), TypewriterTiming::default()).unwrap_err();
    assert!(matches!(err, SiteError::NoPhrases));
}

#[test]
fn longest_phrase_prefers_last_on_tie() {
    assert_eq!(typewriter(&["abc", "xyz", "de"]).longest_phrase(), "xyz");
    assert_eq!(typewriter(&["ab", "c", "de"]).longest_phrase(), "de");
    let tw = Typewriter::new(default_phrases(), TypewriterTiming::default()).unwrap();
    assert_eq!(tw.longest_phrase(), "Unified Flocks");
}
