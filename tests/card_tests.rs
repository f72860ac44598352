//! Card state contract tests.
//!
//! Covers the construction defaults, the clickable/click surface, and
//! the serialization behavior a view relies on when it rebuilds cards
//! from a received game state.

use std::cell::Cell;
use std::rc::Rc;

use lobby_view::cards::{Card, ClickHandler, Style};

#[test]
fn test_construction_defaults() {
    let card = Card::new("X");

    assert_eq!(card.name, "X");
    assert!(!card.hidden);
    assert!(card.on_click.is_none());
    assert_eq!(card.style, Style::default());
    assert!(!card.clickable());
}

#[test]
fn test_clickable_tracks_handler_presence() {
    assert!(!Card::new("X").clickable());
    assert!(Card::new("X").with_on_click(|| {}).clickable());
    assert!(Card::new("X").hidden().with_on_click(|| {}).clickable());
}

#[test]
fn test_hidden_card() {
    let card = Card::new("X").hidden();
    assert!(card.hidden);
    // Visibility and interactivity are independent.
    assert!(!card.clickable());
}

/// A board builds a hand where only legal cards get handlers; clicking
/// the others must do nothing.
#[test]
fn test_mixed_hand_click_dispatch() {
    let played = Rc::new(Cell::new(None));

    let hand: Vec<Card> = ["red_3", "blue_7", "red_9"]
        .iter()
        .enumerate()
        .map(|(i, name)| {
            let card = Card::new(*name);
            if name.starts_with("red") {
                let played = Rc::clone(&played);
                card.with_on_click(move || played.set(Some(i)))
            } else {
                card
            }
        })
        .collect();

    assert!(!hand[1].click());
    assert_eq!(played.get(), None);

    assert!(hand[2].click());
    assert_eq!(played.get(), Some(2));
}

#[test]
fn test_handler_invocation_via_handle() {
    let fired = Rc::new(Cell::new(false));
    let flag = Rc::clone(&fired);

    let handler = ClickHandler::new(move || flag.set(true));
    handler.invoke();

    assert!(fired.get());
}

#[test]
fn test_styles_are_per_card() {
    let a = Card::new("a").with_style("z-index", 1);
    let b = Card::new("b");
    let c = Card::new("c");

    assert_eq!(a.style.len(), 1);
    assert!(b.style.is_empty());
    assert!(c.style.is_empty());
}

#[test]
fn test_round_trip_keeps_display_state() {
    let card = Card::new("green_skip")
        .hidden()
        .with_on_click(|| {})
        .with_style("transform", "rotate(180deg)")
        .with_style("z-index", 3);

    let json = serde_json::to_string(&card).unwrap();
    let back: Card = serde_json::from_str(&json).unwrap();

    assert_eq!(back.name, "green_skip");
    assert!(back.hidden);
    assert_eq!(back.style, card.style);
    // Handlers don't travel; the owning view re-attaches them.
    assert!(!back.clickable());
}

#[test]
fn test_debug_format_does_not_expose_handler() {
    let card = Card::new("X").with_on_click(|| {});
    let debug = format!("{:?}", card);

    assert!(debug.contains("ClickHandler(..)"));
    assert!(debug.contains("\"X\""));
}
