//! Drives the widget through its public surface only.

use bubbletea_rs::{KeyMsg, Msg};
use crossterm::event::{KeyCode, KeyModifiers};
use slidingtext::prelude::*;
use slidingtext::{Label, Paginator, PLACEHOLDER_TEXT};

fn key(code: KeyCode) -> Msg {
    Box::new(KeyMsg {
        key: code,
        modifiers: KeyModifiers::NONE,
    }) as Msg
}

#[test]
fn browse_with_keys_and_swipes() {
    let mut widget = SlidingText::new();
    widget.set_texts(&["one", "two", "three"]);
    widget.set_gestures_enabled(true);

    assert!(widget.update(key(KeyCode::Char('l'))).is_some());
    assert_eq!(widget.current_text(), "two");

    assert!(widget.update(SwipeMsg::new(Swipe::Left).into()).is_some());
    assert_eq!(widget.current_text(), "three");

    assert!(widget.update(key(KeyCode::Left)).is_some());
    assert!(widget.update(key(KeyCode::Left)).is_some());
    assert!(widget.update(key(KeyCode::Left)).is_some());
    assert_eq!(widget.current_index(), 2);
    assert!(!widget.is_paused());
}

#[test]
fn pause_survives_style_changes() {
    let mut widget = slidingtext_new();
    widget.pause();
    widget.set_label_color("#ABCDEF");
    widget.set_label_font_size(30.0).unwrap();
    widget.set_texts_source("a|n b");
    assert!(widget.is_paused());
    assert_eq!(widget.current_index(), 0);

    let _cmd = widget.start();
    assert!(!widget.is_paused());
}

#[test]
fn unrelated_messages_are_ignored() {
    let mut widget = SlidingText::new();
    widget.set_gestures_enabled(true);
    assert!(widget.update(Box::new(42_u32) as Msg).is_none());
    assert!(widget.update(key(KeyCode::Enter)).is_none());
    assert_eq!(widget.current_text(), PLACEHOLDER_TEXT);
}

#[test]
fn config_file_builds_widget() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("banner.toml");
    std::fs::write(
        &path,
        r##"
texts = ["Welcome", "Swipe to browse"]
indicator_active_tint_color = "#FF00FF"
gestures_enabled = true
width = 24
height = 4
"##,
    )
    .unwrap();

    let config = Config::load(&path).unwrap();
    let widget = SlidingText::from_config(&config).unwrap();
    assert_eq!(widget.texts(), ["Welcome", "Swipe to browse"]);
    assert_eq!(widget.indicator_active_tint_color(), "#FF00FF");
    assert!(widget.gestures_enabled());

    let view = widget.view();
    assert_eq!(view.split('\n').count(), 4);
    assert!(view.contains("Welcome"));
}

#[test]
fn invalid_interval_keeps_previous() {
    let mut widget = SlidingText::new();
    assert!(matches!(
        widget.set_slide_interval(0.0),
        Err(Error::InvalidInterval { .. })
    ));
    assert_eq!(widget.slide_interval(), 4.0);
}

#[test]
fn building_blocks_are_usable_alone() {
    let mut label = Label::new("hello");
    label.set_font_name("Menlo Bold Italic");
    assert!(label.is_bold());
    assert!(label.is_italic());

    let mut pager = Paginator::new();
    pager.set_total_pages(3);
    pager.set_page(5);
    assert_eq!(pager.page(), 2);
}
