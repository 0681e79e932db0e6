//! TUI rendering for Sprintgate using ratatui.
//!
//! The engine owns and advances all animation state; rendering is a pure
//! read of the [`App`] each frame.

mod effects;
mod input;
mod theme;

pub use effects::{apply_modal_effect, background_alpha, background_pan, blend, bob_offset};
pub use input::{InputPump, handle_events};
pub use theme::{Glyphs, Palette, glyphs, palette, spinner_frame, styles};

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Padding, Paragraph},
};

use unicode_width::UnicodeWidthStr;

use sprintgate_engine::{App, BannerArt, ChecklistItem, GatePhase, LoginField, Sequencer};

/// Main draw function.
pub fn draw(frame: &mut Frame, app: &App, loader_art: &str) {
    let options = app.ui_options();
    let palette = palette(options);
    let glyphs = glyphs(options);

    let bg_block = Block::default().style(Style::default().bg(palette.bg_dark));
    frame.render_widget(bg_block, frame.area());

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(1),    // Scene
            Constraint::Length(1), // Status bar
        ])
        .split(frame.area());
    let scene = chunks[0];

    let modal_open = matches!(app.phase(), GatePhase::Guidelines | GatePhase::Login);

    if let Some(banner) = app.banner() {
        // Modals dim the background the way the original's backdrop does.
        let dim = if modal_open { 0.35 } else { 1.0 };
        draw_background(frame, scene, banner, app.sequencer(), dim, &palette);
    }

    if app.is_loading() {
        draw_loader(frame, scene, app, loader_art, &palette);
    }

    match app.phase() {
        GatePhase::Guidelines => draw_guidelines(frame, scene, app, &palette, &glyphs),
        GatePhase::Login => draw_login(frame, scene, app, &palette, &glyphs),
        GatePhase::Loading | GatePhase::Background => {}
    }

    if app.notice().is_some() {
        draw_notice(frame, scene, app, &palette);
    }

    draw_status_bar(frame, app, chunks[1], &palette);
}

fn draw_background(
    frame: &mut Frame,
    area: Rect,
    banner: &BannerArt,
    sequencer: &Sequencer,
    dim: f32,
    palette: &Palette,
) {
    let alpha = background_alpha(sequencer) * dim;
    if alpha <= f32::EPSILON {
        return;
    }
    let pan = background_pan(sequencer);
    let color = blend(palette.bg_dark, palette.text_secondary, alpha);

    // Pan by trimming leading columns; the loop only ever shifts left.
    let shift = usize::from(pan.unsigned_abs());
    let lines: Vec<Line> = banner
        .lines()
        .iter()
        .map(|raw| {
            let trimmed: String = raw.chars().skip(shift).collect();
            Line::from(Span::styled(trimmed, Style::default().fg(color)))
        })
        .collect();

    let height = banner.height().min(area.height);
    let width = banner.width().saturating_sub(shift as u16).min(area.width);
    let rect = Rect {
        x: area.x + (area.width.saturating_sub(width) / 2),
        y: area.y + (area.height.saturating_sub(height) / 2),
        width,
        height,
    };
    frame.render_widget(Paragraph::new(lines).alignment(Alignment::Left), rect);
}

fn draw_loader(frame: &mut Frame, area: Rect, app: &App, loader_art: &str, palette: &Palette) {
    // Once the reveal starts, the overlay fades: its art blends toward the
    // background and the opaque fill is dropped so the banner shows through.
    let (opacity, revealing) = match app.sequencer() {
        Sequencer::Idle => (1.0, false),
        Sequencer::Revealing(timeline) => (1.0 - timeline.loader_progress(), true),
        Sequencer::IdleMotion(_) => (0.0, true),
    };
    if opacity <= f32::EPSILON {
        return;
    }
    if !revealing {
        frame.render_widget(
            Block::default().style(Style::default().bg(palette.bg_dark)),
            area,
        );
    }

    let art_color = blend(palette.bg_dark, palette.primary, opacity);
    let text_color = blend(palette.bg_dark, palette.text_muted, opacity);

    let mut lines: Vec<Line> = loader_art
        .lines()
        .map(|raw| Line::from(Span::styled(raw.to_string(), Style::default().fg(art_color))))
        .collect();
    lines.push(Line::from(""));
    lines.push(Line::from(vec![
        Span::styled(
            spinner_frame(app.spinner_tick(), app.ui_options()),
            Style::default().fg(art_color),
        ),
        Span::styled(" Preparing the arena...", Style::default().fg(text_color)),
    ]));

    let width = lines.iter().map(Line::width).max().unwrap_or(0) as u16;
    let width = width.min(area.width);
    let height = (lines.len() as u16).min(area.height);
    let rect = Rect {
        x: area.x + (area.width.saturating_sub(width) / 2),
        y: area.y + (area.height.saturating_sub(height) / 2),
        width,
        height,
    };
    frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), rect);
}

fn draw_guidelines(frame: &mut Frame, area: Rect, app: &App, palette: &Palette, glyphs: &Glyphs) {
    let cursor = app.guidelines_cursor();
    let max_label_width = area.width.saturating_sub(14).clamp(20, 72) as usize;

    let mut lines: Vec<Line> = vec![
        Line::from(Span::styled(
            " Welcome to CodeSprint 3.0 ",
            styles::modal_title(palette),
        )),
        Line::from(Span::styled(
            " Organized by the Technocrats Developers Club",
            Style::default().fg(palette.text_muted),
        )),
        Line::from(Span::styled(
            " In collaboration with Sheryians Coding School",
            Style::default().fg(palette.text_muted),
        )),
        Line::from(""),
        Line::from(Span::styled(
            " Guidelines for Participants",
            Style::default()
                .fg(palette.warning)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
    ];

    for (i, item) in ChecklistItem::ALL.iter().enumerate() {
        let pointer = if cursor == i { glyphs.pointer } else { " " };
        let checkbox = if app.checklist().is_checked(i) {
            glyphs.checked
        } else {
            glyphs.unchecked
        };
        let ellipsis = if app.ui_options().ascii_only { "..." } else { "…" };
        let label = truncate(item.label(), max_label_width, ellipsis);
        let label_style = if cursor == i {
            Style::default()
                .fg(palette.text_primary)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(palette.text_secondary)
        };
        lines.push(Line::from(vec![
            Span::styled(
                format!("{pointer} {checkbox} "),
                Style::default().fg(palette.text_muted),
            ),
            Span::styled(label, label_style),
        ]));
    }

    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        " After proceeding you will be asked for your Passkey and",
        Style::default().fg(palette.text_muted),
    )));
    lines.push(Line::from(Span::styled(
        " Passcode, provided by the organizers only.",
        Style::default().fg(palette.text_muted),
    )));
    lines.push(Line::from(""));
    // Placeholder row: the action buttons render as separate widgets so
    // the proceed control can bob and shake independently.
    let button_row = lines.len();
    lines.push(Line::from(""));
    lines.push(Line::from(""));
    lines.push(Line::from(vec![
        Span::styled("Space", styles::key_highlight(palette)),
        Span::styled(" toggle  ", styles::key_hint(palette)),
        Span::styled(
            if app.ui_options().ascii_only { "Up/Down" } else { "↑↓" },
            styles::key_highlight(palette),
        ),
        Span::styled(" navigate  ", styles::key_hint(palette)),
        Span::styled("Enter", styles::key_highlight(palette)),
        Span::styled(" activate  ", styles::key_hint(palette)),
        Span::styled("Esc", styles::key_highlight(palette)),
        Span::styled(" cancel", styles::key_hint(palette)),
    ]));

    let rect = modal_rect(frame, app, &lines, area, palette);
    let inner = modal_inner(rect);

    let cancel_label = "[ Cancel ]";
    let proceed_label = "[ Go to Contest ]";
    let cancel_style = if cursor == 5 {
        styles::button_cancel(palette).add_modifier(Modifier::BOLD | Modifier::REVERSED)
    } else {
        styles::button_cancel(palette)
    };
    let proceed_style = if app.checklist().all_checked() {
        styles::button_enabled(palette)
    } else {
        styles::button_disabled(palette)
    };
    let proceed_style = if cursor == 6 {
        proceed_style.add_modifier(Modifier::UNDERLINED)
    } else {
        proceed_style
    };

    let row_y = inner.y + button_row as u16;
    let cancel_width = cancel_label.len() as u16;
    let proceed_width = proceed_label.len() as u16;
    let cancel_rect = Rect {
        x: inner.x + 1,
        y: row_y,
        width: cancel_width.min(inner.width),
        height: 1,
    };
    let mut proceed_rect = Rect {
        x: inner.x + inner.width.saturating_sub(proceed_width + 1),
        y: row_y,
        width: proceed_width.min(inner.width),
        height: 1,
    };
    if let Some(bob) = app.proceed_bob() {
        proceed_rect.y = proceed_rect.y.saturating_sub(bob_offset(bob));
    }
    if let Some(shake) = app.proceed_shake() {
        proceed_rect = apply_modal_effect(shake, proceed_rect, inner);
    }

    if cancel_rect.y < inner.y + inner.height {
        frame.render_widget(
            Paragraph::new(Line::from(Span::styled(cancel_label, cancel_style))),
            cancel_rect,
        );
    }
    if proceed_rect.y < inner.y + inner.height {
        frame.render_widget(
            Paragraph::new(Line::from(Span::styled(proceed_label, proceed_style))),
            proceed_rect,
        );
    }
}

fn draw_login(frame: &mut Frame, area: Rect, app: &App, palette: &Palette, glyphs: &Glyphs) {
    let draft = app.draft();
    let focus = draft.focus();
    let field_width = 32usize;

    let identifier_focused = focus == LoginField::Identifier;
    let passcode_focused = focus == LoginField::Passcode;
    let masked: String = draft.passcode().chars().map(|_| '*').collect();

    let valid = app.credentials_valid();
    let (validity_glyph, validity_text, validity_color) = if valid {
        (glyphs.valid, " Correct credentials", palette.success)
    } else {
        (glyphs.invalid, " Please enter valid credentials", palette.error)
    };

    let mut lines: Vec<Line> = vec![
        Line::from(Span::styled(
            " Enter Access Details ",
            styles::modal_title(palette),
        )),
        Line::from(Span::styled(
            " Only authorised users can join this contest",
            Style::default().fg(palette.text_muted),
        )),
        Line::from(""),
        Line::from(Span::styled(
            " Passkey",
            Style::default().fg(palette.text_secondary),
        )),
        input_row(draft.identifier(), identifier_focused, field_width, palette),
        Line::from(""),
        Line::from(Span::styled(
            " Passcode",
            Style::default().fg(palette.text_secondary),
        )),
        input_row(&masked, passcode_focused, field_width, palette),
        Line::from(vec![
            Span::styled(format!(" {validity_glyph}"), Style::default().fg(validity_color)),
            Span::styled(validity_text, Style::default().fg(validity_color)),
        ]),
        Line::from(""),
    ];

    let button_row = lines.len();
    lines.push(Line::from(""));
    lines.push(Line::from(""));
    lines.push(Line::from(vec![
        Span::styled("Tab", styles::key_highlight(palette)),
        Span::styled(" switch field  ", styles::key_hint(palette)),
        Span::styled("Enter", styles::key_highlight(palette)),
        Span::styled(" submit  ", styles::key_hint(palette)),
        Span::styled("Esc", styles::key_highlight(palette)),
        Span::styled(" close", styles::key_hint(palette)),
    ]));

    let rect = modal_rect(frame, app, &lines, area, palette);
    let inner = modal_inner(rect);

    let submit_label = "[ Submit & Open Contest ]";
    let submit_width = submit_label.len() as u16;
    let mut submit_rect = Rect {
        x: inner.x + (inner.width.saturating_sub(submit_width) / 2),
        y: inner.y + button_row as u16,
        width: submit_width.min(inner.width),
        height: 1,
    };
    if let Some(bob) = app.submit_bob() {
        submit_rect.y = submit_rect.y.saturating_sub(bob_offset(bob));
    }
    if let Some(shake) = app.submit_shake() {
        submit_rect = apply_modal_effect(shake, submit_rect, inner);
    }
    if submit_rect.y < inner.y + inner.height {
        frame.render_widget(
            Paragraph::new(Line::from(Span::styled(
                submit_label,
                styles::button_enabled(palette),
            ))),
            submit_rect,
        );
    }
}

fn input_row(value: &str, focused: bool, width: usize, palette: &Palette) -> Line<'static> {
    // Show the tail when the value overflows the field.
    let visible: String = if value.chars().count() > width {
        value
            .chars()
            .skip(value.chars().count() - width)
            .collect()
    } else {
        value.to_string()
    };
    let cursor = if focused { "_" } else { " " };
    let padding = width.saturating_sub(visible.chars().count());
    let style = if focused {
        Style::default()
            .fg(palette.text_primary)
            .bg(palette.bg_highlight)
    } else {
        Style::default().fg(palette.text_secondary).bg(palette.bg_dark)
    };
    Line::from(vec![
        Span::raw(" "),
        Span::styled(format!("{visible}{cursor}{}", " ".repeat(padding)), style),
    ])
}

fn draw_notice(frame: &mut Frame, area: Rect, app: &App, palette: &Palette) {
    let Some(notice) = app.notice() else {
        return;
    };

    let lines = vec![
        Line::from(Span::styled(
            format!(" {notice} "),
            Style::default()
                .fg(palette.error)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(vec![
            Span::styled("Enter", styles::key_highlight(palette)),
            Span::styled(" dismiss", styles::key_hint(palette)),
        ]),
    ];

    let width = (lines.iter().map(Line::width).max().unwrap_or(10) as u16)
        .saturating_add(4)
        .min(area.width);
    let height = (lines.len() as u16).saturating_add(4).min(area.height);
    let rect = Rect {
        x: area.x + (area.width.saturating_sub(width) / 2),
        y: area.y + (area.height.saturating_sub(height) / 2),
        width,
        height,
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(palette.error))
        .style(Style::default().bg(palette.bg_panel))
        .padding(Padding::uniform(1));

    frame.render_widget(Clear, rect);
    frame.render_widget(
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .block(block),
        rect,
    );
}

fn draw_status_bar(frame: &mut Frame, app: &App, area: Rect, palette: &Palette) {
    let hints: Vec<Span> = match app.phase() {
        GatePhase::Loading | GatePhase::Background => vec![
            Span::styled("q", styles::key_highlight(palette)),
            Span::styled(" quit", styles::key_hint(palette)),
        ],
        GatePhase::Guidelines | GatePhase::Login => vec![
            Span::styled("Ctrl+C", styles::key_highlight(palette)),
            Span::styled(" quit", styles::key_hint(palette)),
        ],
    };

    let mut spans = vec![Span::styled(
        " CodeSprint 3.0 ",
        Style::default()
            .fg(palette.bg_dark)
            .bg(palette.primary)
            .add_modifier(Modifier::BOLD),
    )];
    spans.push(Span::raw("  "));
    spans.extend(hints);

    frame.render_widget(
        Paragraph::new(Line::from(spans)).style(Style::default().bg(palette.bg_panel)),
        area,
    );
}

/// Center a modal in `area`, apply the entry pop effect, clear and render
/// the framed paragraph, and return the final rect.
fn modal_rect(
    frame: &mut Frame,
    app: &App,
    lines: &[Line],
    area: Rect,
    palette: &Palette,
) -> Rect {
    let content_width = lines.iter().map(Line::width).max().unwrap_or(10) as u16;
    let content_width = content_width.min(area.width.saturating_sub(4));
    let max_height = area.height.saturating_sub(2);
    let height = (lines.len() as u16).saturating_add(4).min(max_height);
    let width = content_width.saturating_add(4);

    let base = Rect {
        x: area.x + (area.width.saturating_sub(width) / 2),
        y: area.y + (area.height.saturating_sub(height) / 2),
        width,
        height,
    };
    let rect = match app.modal_effect() {
        Some(effect) => apply_modal_effect(effect, base, area),
        None => base,
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(palette.primary))
        .style(Style::default().bg(palette.bg_panel))
        .padding(Padding::uniform(1));

    frame.render_widget(Clear, rect);
    frame.render_widget(Paragraph::new(lines.to_vec()).block(block), rect);
    rect
}

/// Inner content area of a modal rect (borders plus uniform padding).
fn modal_inner(rect: Rect) -> Rect {
    Rect {
        x: rect.x.saturating_add(2),
        y: rect.y.saturating_add(2),
        width: rect.width.saturating_sub(4),
        height: rect.height.saturating_sub(4),
    }
}

fn truncate(text: &str, max_width: usize, ellipsis: &str) -> String {
    if text.width() <= max_width {
        return text.to_string();
    }
    let mut out = String::new();
    let budget = max_width.saturating_sub(ellipsis.width());
    for ch in text.chars() {
        if out.width() + ch.to_string().width() > budget {
            break;
        }
        out.push(ch);
    }
    out.push_str(ellipsis);
    out
}
