// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Vitrine-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Vitrine and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use super::{
    canvas_bounds, counter_label, demo_exhibit, draw, footer_help_line, hex_color, markdown_line,
    osc52_sequence, stack_panes_vertically, view_title, App,
};
use crate::history::NavigationPort;
use crate::model::fixtures::two_group_exhibit;
use crate::model::{Point, Viewport};
use crate::nav::TAG_NAME;
use crate::render::{ChannelMark, Marker};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{backend::TestBackend, layout::Rect, style::Color, Terminal};
use rstest::rstest;
use std::time::{Duration, Instant};

fn line_to_string(line: &ratatui::text::Line<'_>) -> String {
    line.spans.iter().map(|span| span.content.as_ref()).collect::<String>()
}

fn app() -> App {
    App::new(two_group_exhibit(), "/exhibit/".to_owned()).expect("app")
}

fn press(app: &mut App, code: KeyCode) {
    app.handle_key(KeyEvent::new(code, KeyModifiers::NONE));
}

fn type_text(app: &mut App, text: &str) {
    for ch in text.chars() {
        press(app, KeyCode::Char(ch));
    }
}

fn render(app: &App, width: u16, height: u16) -> String {
    let mut terminal = Terminal::new(TestBackend::new(width, height)).expect("terminal");
    terminal.draw(|frame| draw(frame, app)).expect("draw");
    let buffer = terminal.backend().buffer();
    let mut screen = String::new();
    for y in 0..height {
        for x in 0..width {
            screen.push_str(buffer.get(x, y).symbol());
        }
        screen.push('\n');
    }
    screen
}

#[test]
fn starts_at_canonical_address() {
    let app = app();
    assert_eq!(app.navigator.address(), "/exhibit/#s=0#w=0#g=0#v=1_0.5_0.5");
    assert_eq!(app.navigator.port().len(), 1);
    assert!(!app.should_quit);
}

#[test]
fn q_quits() {
    let mut app = app();
    press(&mut app, KeyCode::Char('q'));
    assert!(app.should_quit);
}

#[rstest]
#[case(KeyCode::Right, 1)]
#[case(KeyCode::Char('n'), 1)]
#[case(KeyCode::Char(' '), 1)]
#[case(KeyCode::Left, 2)]
#[case(KeyCode::Char('p'), 2)]
fn waypoint_keys_step_and_push(#[case] code: KeyCode, #[case] expected: usize) {
    let mut app = app();
    press(&mut app, code);
    assert_eq!(app.navigator.store().waypoint_index(), expected);
    assert_eq!(app.navigator.port().pushes(), 1);
}

#[test]
fn story_keys_wrap() {
    let mut app = app();
    press(&mut app, KeyCode::Char(']'));
    assert_eq!(app.navigator.store().story_index(), 1);
    press(&mut app, KeyCode::Char(']'));
    assert_eq!(app.navigator.store().story_index(), 0);
    press(&mut app, KeyCode::Char('['));
    assert_eq!(app.navigator.store().story_index(), 1);

    press(&mut app, KeyCode::Char('i'));
    assert_eq!(app.navigator.store().story_index(), 0);
}

#[test]
fn digit_selects_group_or_toasts() {
    let mut app = app();
    press(&mut app, KeyCode::Char('2'));
    assert_eq!(app.navigator.store().group_index(), 1);

    press(&mut app, KeyCode::Char('9'));
    assert_eq!(app.navigator.store().group_index(), 1);
    assert_eq!(app.toast_message(), Some("No group 9"));
}

#[test]
fn camera_gesture_commits_once_settled() {
    let mut app = app();
    let before = app.navigator.port().mutations();

    press(&mut app, KeyCode::Char('l'));
    assert_eq!(app.navigator.store().viewport().pan, Point::new(0.6, 0.5));
    assert_eq!(app.navigator.port().mutations(), before);

    app.tick(Instant::now());
    assert_eq!(app.navigator.port().mutations(), before);

    app.tick(Instant::now() + Duration::from_secs(1));
    assert_eq!(app.navigator.port().mutations(), before + 1);
    assert_eq!(app.navigator.port().location().hash, "#s=0#w=0#g=0#v=1_0.6_0.5");
    assert!(app.gesture_until.is_none());
}

#[test]
fn zoom_keys_scale_the_camera() {
    let mut app = app();
    press(&mut app, KeyCode::Char('+'));
    assert_eq!(app.navigator.store().viewport(), Viewport::new(1.25, Point::new(0.5, 0.5)));
    press(&mut app, KeyCode::Char('-'));
    assert_eq!(app.navigator.store().viewport(), Viewport::new(1.0, Point::new(0.5, 0.5)));
}

#[test]
fn stepping_mid_gesture_commits_the_gesture_first() {
    let mut app = app();
    press(&mut app, KeyCode::Char('j'));
    press(&mut app, KeyCode::Right);

    assert_eq!(app.navigator.port().pushes(), 2);
    assert!(app.gesture_until.is_none());
    assert_eq!(app.navigator.store().viewport(), Viewport::new(4.0, Point::new(0.3, 0.4)));
}

#[test]
fn back_and_forward_keys_walk_history() {
    let mut app = app();
    press(&mut app, KeyCode::Right);
    press(&mut app, KeyCode::Char('b'));
    assert_eq!(app.navigator.store().waypoint_index(), 0);

    press(&mut app, KeyCode::Char('b'));
    assert_eq!(app.toast_message(), Some("Start of history"));

    press(&mut app, KeyCode::Char('f'));
    assert_eq!(app.navigator.store().waypoint_index(), 1);
    press(&mut app, KeyCode::Char('f'));
    assert_eq!(app.toast_message(), Some("End of history"));
}

#[test]
fn tag_prompt_creates_tag_and_closes() {
    let mut app = app();
    press(&mut app, KeyCode::Right);
    press(&mut app, KeyCode::Char('t'));
    assert_eq!(app.prompt.as_deref(), Some(""));

    type_text(&mut app, "tumorx");
    press(&mut app, KeyCode::Backspace);
    assert_eq!(app.prompt.as_deref(), Some("tumor"));
    // Keys go to the prompt while it is open.
    assert!(!app.should_quit);

    press(&mut app, KeyCode::Enter);
    assert!(app.prompt.is_none());
    let store = app.navigator.store();
    assert_eq!(store.stories()[0].name, TAG_NAME);
    assert_eq!(store.current_waypoint().description, "tumor");
    assert_eq!(store.viewport(), Viewport::new(4.0, Point::new(0.3, 0.4)));
}

#[test]
fn esc_cancels_tag_prompt() {
    let mut app = app();
    press(&mut app, KeyCode::Char('t'));
    type_text(&mut app, "q");
    press(&mut app, KeyCode::Esc);

    assert!(app.prompt.is_none());
    assert!(!app.should_quit);
    assert_ne!(app.navigator.store().stories()[0].name, TAG_NAME);
}

#[test]
fn help_overlay_swallows_navigation() {
    let mut app = app();
    press(&mut app, KeyCode::Char('?'));
    assert!(app.show_help);

    press(&mut app, KeyCode::Right);
    assert_eq!(app.navigator.store().waypoint_index(), 0);

    press(&mut app, KeyCode::Esc);
    assert!(!app.show_help);
}

#[test]
fn draws_demo_exhibit() {
    let app = App::new(demo_exhibit().expect("demo"), "/".to_owned()).expect("app");
    let screen = render(&app, 120, 32);

    assert!(screen.contains("Canvas"));
    assert!(screen.contains("1 Structure"));
    assert!(screen.contains("2 Lymphocytes"));
    assert!(screen.contains("Introduction [1/2]"));
    assert!(screen.contains("Overview"));
}

#[test]
fn draws_help_and_prompt() {
    let mut app = app();
    press(&mut app, KeyCode::Char('?'));
    assert!(render(&app, 100, 30).contains("back / forward"));

    press(&mut app, KeyCode::Esc);
    press(&mut app, KeyCode::Char('t'));
    type_text(&mut app, "note");
    assert!(render(&app, 100, 30).contains("Tag note: note"));
}

#[test]
fn demo_layout_has_image_frames() {
    let app = App::new(demo_exhibit().expect("demo"), "/".to_owned()).expect("app");
    let names: Vec<&str> = app.placements.iter().map(|placement| placement.name.as_str()).collect();
    assert_eq!(names, vec!["tonsil", "lymph-node"]);
}

#[rstest]
#[case("FF0000", Some(Color::Rgb(255, 0, 0)))]
#[case("#00ff7f", Some(Color::Rgb(0, 255, 127)))]
#[case("#AAA", Some(Color::Rgb(170, 170, 170)))]
#[case("12345", None)]
#[case("GG0000", None)]
fn parses_hex_colors(#[case] input: &str, #[case] expected: Option<Color>) {
    assert_eq!(hex_color(input), expected);
}

#[test]
fn canvas_bounds_center_the_viewport() {
    let (x, y) = canvas_bounds(Viewport::new(2.0, Point::new(0.5, 0.25)), 100, 25);
    assert_eq!(x, [0.25, 0.75]);
    assert_eq!(y, [-0.375, -0.125]);
}

#[test]
fn markdown_line_colors_known_channels() {
    let marks = vec![
        ChannelMark { text: "CD3".to_owned(), marker: Marker::Solid { color: "FF0000".to_owned() } },
        ChannelMark { text: "other".to_owned(), marker: Marker::Dashed },
    ];
    let line = markdown_line("T cells `CD3` and `other` `open", &marks);

    assert_eq!(line_to_string(&line), "T cells CD3 and other `open");
    let cd3 = line.spans.iter().find(|span| span.content == "CD3").expect("CD3 span");
    assert_eq!(cd3.style.fg, Some(Color::Rgb(255, 0, 0)));
    let other = line.spans.iter().find(|span| span.content == "other").expect("other span");
    assert_eq!(other.style.fg, Some(Color::Rgb(170, 170, 170)));
}

#[test]
fn footer_help_line_appends_toast() {
    let line = footer_help_line("  Copied address (osc52)", true);
    let text = line_to_string(&line);
    assert!(text.contains("? help"));
    assert!(text.ends_with("Copied address (osc52)"));
}

#[rstest]
#[case(0, 0, "[0/0]")]
#[case(0, 3, "[1/3]")]
#[case(4, 12, "[05/12]")]
fn counter_labels(#[case] index: usize, #[case] total: usize, #[case] expected: &str) {
    assert_eq!(counter_label(index, total), expected);
}

#[test]
fn view_title_trims_tail() {
    assert_eq!(view_title("Story", Some("  [1/2] ")), "─ Story [1/2] ");
    assert_eq!(view_title("Help", None), "─ Help ");
}

#[test]
fn stacks_panes_on_narrow_terminals() {
    assert!(stack_panes_vertically(Rect::new(0, 0, 80, 24)));
    assert!(!stack_panes_vertically(Rect::new(0, 0, 120, 24)));
}

#[test]
fn osc52_wraps_base64_payload() {
    assert_eq!(osc52_sequence("hi"), "\x1b]52;c;aGk=\x1b\\");
}
