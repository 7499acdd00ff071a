// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Vitrine-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Vitrine and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

/// Screen areas of the main view.
struct Panes {
    canvas: Rect,
    tabs: Rect,
    story: Rect,
    footer: Rect,
}

fn split_panes(area: Rect) -> Panes {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(1)])
        .split(area);
    let direction =
        if stack_panes_vertically(rows[0]) { Direction::Vertical } else { Direction::Horizontal };
    let columns = Layout::default()
        .direction(direction)
        .constraints([Constraint::Percentage(62), Constraint::Percentage(38)])
        .split(rows[0]);
    let side = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(0)])
        .split(columns[1]);
    Panes { canvas: columns[0], tabs: side[0], story: side[1], footer: rows[1] }
}

fn stack_panes_vertically(area: Rect) -> bool {
    area.width < 90
}

fn view_title(label: &str, tail: Option<&str>) -> String {
    let mut title = format!("─ {label}");
    if let Some(tail) = tail {
        let tail = tail.trim();
        if !tail.is_empty() {
            title.push(' ');
            title.push_str(tail);
        }
    }
    title.push(' ');
    title
}

fn counter_label(index: usize, total: usize) -> String {
    if total == 0 {
        return "[0/0]".to_owned();
    }

    let width = total.to_string().len();
    let index = (index + 1).min(total);
    format!("[{index:0width$}/{total}]")
}

/// World bounds visible on a canvas of `width` × `height` cells. Y is flipped (world y grows
/// downwards, canvas y upwards), and cells are taken as twice as tall as wide.
fn canvas_bounds(viewport: Viewport, width: u16, height: u16) -> ([f64; 2], [f64; 2]) {
    let visible_width = 1.0 / viewport.zoom.max(f64::EPSILON);
    let aspect = if width == 0 { 1.0 } else { f64::from(height) * 2.0 / f64::from(width) };
    let visible_height = visible_width * aspect;
    let center = viewport.pan;
    (
        [center.x - visible_width / 2.0, center.x + visible_width / 2.0],
        [-(center.y + visible_height / 2.0), -(center.y - visible_height / 2.0)],
    )
}

/// A world rectangle as a canvas shape (bottom-left origin, flipped y).
fn canvas_rectangle(bounds: WorldRect, color: Color) -> Rectangle {
    Rectangle {
        x: bounds.x,
        y: -bounds.bottom(),
        width: bounds.width,
        height: bounds.height,
        color,
    }
}

/// Parses `RRGGBB` or `RGB`, with or without a leading `#`.
fn hex_color(hex: &str) -> Option<Color> {
    let digits = hex.trim().trim_start_matches('#');
    let channel = |range: std::ops::Range<usize>| u8::from_str_radix(digits.get(range)?, 16).ok();
    match digits.len() {
        6 => Some(Color::Rgb(channel(0..2)?, channel(2..4)?, channel(4..6)?)),
        3 => {
            let short = |i: usize| channel(i..i + 1).map(|value| value * 17);
            Some(Color::Rgb(short(0)?, short(1)?, short(2)?))
        }
        _ => None,
    }
}

fn mark_style(marker: &Marker) -> Style {
    let color = match marker {
        Marker::Solid { color } => hex_color(color).unwrap_or(Color::White),
        Marker::Dashed => hex_color(NEUTRAL_MARKER_COLOR).unwrap_or(Color::Gray),
    };
    let style = Style::default().fg(color).add_modifier(Modifier::UNDERLINED);
    match marker {
        Marker::Solid { .. } => style.add_modifier(Modifier::BOLD),
        Marker::Dashed => style.add_modifier(Modifier::DIM),
    }
}

fn group_tabs_line(groups: &[GroupVisibility]) -> Line<'static> {
    let mut spans = Vec::new();
    for (i, group) in groups.iter().enumerate() {
        let label = format!(" {} {} ", i + 1, group.name);
        let style = if group.active {
            Style::default().fg(Color::Black).bg(TAB_ACTIVE_COLOR).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Gray)
        };
        spans.push(Span::styled(label, style));
        spans.push(Span::raw(" "));
    }
    Line::from(spans)
}

/// Story panel text: waypoint heading, waypoint text, then the story markdown with channel names
/// color coded.
fn story_lines(panel: &StoryPanel) -> Vec<Line<'static>> {
    let heading = Style::default().fg(Color::White).add_modifier(Modifier::BOLD);
    let mut lines = vec![
        Line::from(vec![
            Span::styled(counter_label(panel.waypoint_index, panel.waypoint_count), heading),
            Span::raw(" "),
            Span::styled(panel.waypoint_name.clone(), heading),
        ]),
        Line::from(panel.waypoint_description.clone()),
        Line::from(String::new()),
    ];

    let mut in_fence = false;
    for raw in panel.story_markdown.lines() {
        if raw.trim_start().starts_with("```") {
            in_fence = !in_fence;
            continue;
        }
        if in_fence {
            lines.push(Line::styled(raw.to_owned(), Style::default().fg(Color::DarkGray)));
        } else {
            lines.push(markdown_line(raw, &panel.channel_marks));
        }
    }
    lines
}

/// One markdown line; backtick spans become styled channel names.
fn markdown_line(line: &str, marks: &[ChannelMark]) -> Line<'static> {
    let mut spans = Vec::new();
    let mut parts = line.split('`').peekable();
    let mut is_code = false;
    while let Some(part) = parts.next() {
        // An unterminated backtick is plain text.
        let unterminated = is_code && parts.peek().is_none();
        if unterminated {
            spans.push(Span::raw(format!("`{part}")));
        } else if is_code {
            let name = part.trim();
            let style = marks
                .iter()
                .find(|mark| mark.text == name)
                .map(|mark| mark_style(&mark.marker))
                .unwrap_or_default();
            spans.push(Span::styled(part.to_owned(), style));
        } else if !part.is_empty() {
            spans.push(Span::raw(part.to_owned()));
        }
        is_code = !is_code;
    }
    Line::from(spans)
}

fn footer_help_line(toast_suffix: &str, compact: bool) -> Line<'static> {
    let keys: &[(&str, &str)] = if compact {
        &[("←→", "waypoint"), ("1-9", "group"), ("?", "help"), ("q", "quit")]
    } else {
        &[
            ("←→", "waypoint"),
            ("[]", "story"),
            ("1-9", "group"),
            ("hjkl/+-", "camera"),
            ("b/f", "history"),
            ("t", "tag"),
            ("y", "yank"),
            ("?", "help"),
            ("q", "quit"),
        ]
    };
    let mut spans = Vec::new();
    for (key, label) in keys {
        spans.push(Span::styled(format!(" {key}"), Style::default().fg(FOOTER_KEY_COLOR)));
        spans.push(Span::styled(format!(" {label}"), Style::default().fg(FOOTER_LABEL_COLOR)));
    }
    if !toast_suffix.is_empty() {
        spans.push(Span::styled(toast_suffix.to_owned(), Style::default().fg(Color::White)));
    }
    Line::from(spans)
}

fn prompt_line(prompt: &str) -> Line<'static> {
    Line::from(vec![
        Span::styled(" Tag note: ", Style::default().fg(FOOTER_KEY_COLOR)),
        Span::raw(prompt.to_owned()),
    ])
}

fn footer_brand_line() -> Line<'static> {
    Line::from(Span::styled(FOOTER_BRAND, Style::default().fg(FOOTER_BRAND_COLOR)))
}

const HELP_TEXT: &str = "\
Navigation
  → n space   next waypoint
  ← p         previous waypoint
  ] [         next / previous story
  i           introduction (first story)
  1-9         show group

Camera
  h j k l     pan
  + -         zoom

History
  b f         back / forward
  t           tag the current view (type a note, Enter to create)
  y Y         copy address / tag address (OSC 52)

  ?  Esc      close help
  q           quit";

fn render_help(frame: &mut Frame<'_>, area: Rect) {
    let popup = centered_rect(area, 60, 70);
    let help = Paragraph::new(HELP_TEXT)
        .wrap(Wrap { trim: false })
        .block(Block::default().borders(Borders::ALL).title(view_title("Help", None)));
    frame.render_widget(Clear, popup);
    frame.render_widget(help, popup);
}

fn centered_rect(area: Rect, percent_x: u16, percent_y: u16) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);
    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(vertical[1])[1]
}
