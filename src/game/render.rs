//! Thirty Days rendering.
//!
//! Layout: header (day + stats) / scene (location, panel or interview) /
//! dialogue box / footer hints. Floats are drawn over the scene.

use std::cell::RefCell;
use std::rc::Rc;

use ratzilla::ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratzilla::ratatui::style::{Color, Modifier, Style};
use ratzilla::ratatui::text::{Line, Span};
use ratzilla::ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use ratzilla::ratatui::Frame;

use crate::input::{is_narrow_layout, ClickState};
use crate::widgets::ClickableList;

use super::actions::*;
use super::interview;
use super::logic::{available_actions, days_remaining};
use super::map::{location_info, neighbors};
use super::state::{
    ActiveInterview, Format, GameState, Outcome, Signal, Stage, Stat, ALL_SIGNALS, ALL_STAGES,
    MAX_DAYS,
};
use super::view::{Float, Screen, ViewState};

const DIALOGUE_MIN_H: u16 = 3;
const DIALOGUE_MAX_H: u16 = 6;
const KEYPAD_CELL_W: u16 = 6;

pub fn render(
    state: &GameState,
    view: &ViewState,
    f: &mut Frame,
    area: Rect,
    click_state: &Rc<RefCell<ClickState>>,
) {
    let borders = borders_for(area.width);
    let dialogue_h = dialogue_height(state, area.width, borders);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4),
            Constraint::Min(8),
            Constraint::Length(dialogue_h),
            Constraint::Length(3),
        ])
        .split(area);

    render_header(state, f, chunks[0], borders);

    if state.is_game_over() {
        render_ending(state, f, chunks[1], borders, click_state);
    } else {
        match view.screen {
            Screen::Move => render_move(state, f, chunks[1], borders, click_state),
            Screen::Stats => render_stats(state, f, chunks[1], borders, click_state),
            Screen::Main => match &state.active_interview {
                Some(active) => render_interview(active, view, f, chunks[1], borders, click_state),
                None => render_location(state, f, chunks[1], borders, click_state),
            },
        }
    }

    render_floats(&view.floats, f, chunks[1]);
    render_dialogue(state, f, chunks[2], borders);
    render_footer(state, f, chunks[3], borders, click_state);
}

fn borders_for(area_width: u16) -> Borders {
    if is_narrow_layout(area_width) {
        Borders::TOP | Borders::BOTTOM
    } else {
        Borders::ALL
    }
}

fn stat_color(stat: Stat) -> Color {
    match stat {
        Stat::Energy => Color::Yellow,
        Stat::Charm => Color::Magenta,
        Stat::Knowledge => Color::Cyan,
        Stat::Endurance => Color::Green,
        Stat::Money => Color::LightYellow,
    }
}

fn signal_color(signal: Signal) -> Color {
    match signal {
        Signal::Green => Color::Green,
        Signal::Blue => Color::Blue,
        Signal::Yellow => Color::Yellow,
    }
}

// ── Header ──────────────────────────────────────────────────

fn render_header(state: &GameState, f: &mut Frame, area: Rect, borders: Borders) {
    let is_narrow = is_narrow_layout(area.width);
    let ledger = state.ledger();
    let left = days_remaining(state);

    let day_line = Line::from(vec![
        Span::styled(
            format!(" Day {}/{}", ledger.day.min(MAX_DAYS), MAX_DAYS),
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            if is_narrow {
                format!(" ({}d left)", left)
            } else {
                format!("  ({} days left)", left)
            },
            Style::default().fg(if left <= 5 { Color::Red } else { Color::Gray }),
        ),
        Span::styled(
            format!("  {}", location_info(state.location).name),
            Style::default().fg(Color::Cyan),
        ),
    ]);

    let mut stat_spans = Vec::new();
    for stat in [Stat::Energy, Stat::Charm, Stat::Knowledge, Stat::Endurance] {
        stat_spans.push(Span::styled(
            format!(" {}{}", stat.icon(), ledger.get(stat)),
            Style::default().fg(stat_color(stat)),
        ));
    }
    stat_spans.push(Span::styled(
        format!(" ¥{}", ledger.money),
        Style::default().fg(stat_color(Stat::Money)).add_modifier(Modifier::BOLD),
    ));
    stat_spans.push(Span::styled(
        format!(" Lv.{}", ledger.level),
        Style::default().fg(Color::Gray),
    ));

    let title = if is_narrow { " 30 Days " } else { " Thirty Days " };
    let block = Block::default()
        .borders(borders)
        .border_style(Style::default().fg(Color::Cyan))
        .title(Span::styled(
            title,
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        ));
    f.render_widget(
        Paragraph::new(vec![day_line, Line::from(stat_spans)]).block(block),
        area,
    );
}

// ── Choice helpers ──────────────────────────────────────────

fn push_choice(cl: &mut ClickableList, key: &str, label: &str, action_id: u16, selected: bool) {
    let label_style = if selected {
        Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::White)
    };
    cl.push_clickable(
        Line::from(vec![
            Span::styled(
                format!(" [{}] ", key),
                Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
            ),
            Span::styled(label.to_string(), label_style),
        ]),
        action_id,
    );
}

fn push_choice_dim(cl: &mut ClickableList, key: &str, label: &str, action_id: u16) {
    cl.push_clickable(
        Line::from(vec![
            Span::styled(
                format!(" [{}] ", key),
                Style::default().fg(Color::DarkGray).add_modifier(Modifier::BOLD),
            ),
            Span::styled(label.to_string(), Style::default().fg(Color::DarkGray)),
        ]),
        action_id,
    );
}

fn push_text(cl: &mut ClickableList, text: &str, style: Style) {
    cl.push(Line::from(Span::styled(format!(" {}", text), style)));
}

fn finish_panel(
    cl: ClickableList,
    block: Block,
    f: &mut Frame,
    area: Rect,
    click_state: &Rc<RefCell<ClickState>>,
) {
    let mut cs = click_state.borrow_mut();
    cl.register_targets_with_block(area, &block, &mut cs, 0, true);
    drop(cs);
    f.render_widget(
        Paragraph::new(cl.into_lines()).block(block).wrap(Wrap { trim: false }),
        area,
    );
}

// ── Location ────────────────────────────────────────────────

fn render_location(
    state: &GameState,
    f: &mut Frame,
    area: Rect,
    borders: Borders,
    click_state: &Rc<RefCell<ClickState>>,
) {
    let info = location_info(state.location);
    let mut cl = ClickableList::new();

    push_text(&mut cl, info.description, Style::default().fg(Color::White));
    cl.push(Line::from(""));

    for (i, kind) in available_actions(state).iter().enumerate() {
        let id = ACTION_BASE + i as u16;
        push_choice(&mut cl, &(i + 1).to_string(), kind.label(), id, false);
        if let Some(hint) = kind.hint() {
            push_text(&mut cl, &format!("    {}", hint), Style::default().fg(Color::DarkGray));
        }
    }

    let block = Block::default()
        .borders(borders)
        .border_style(Style::default().fg(Color::DarkGray))
        .title(Span::styled(
            format!(" {} ", info.name),
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        ));
    finish_panel(cl, block, f, area, click_state);
}

// ── Move panel ──────────────────────────────────────────────

fn render_move(
    state: &GameState,
    f: &mut Frame,
    area: Rect,
    borders: Borders,
    click_state: &Rc<RefCell<ClickState>>,
) {
    let mut cl = ClickableList::new();
    push_text(
        &mut cl,
        &format!("From {}, you can go to:", location_info(state.location).name),
        Style::default().fg(Color::Gray),
    );
    cl.push(Line::from(""));

    for (i, dest) in neighbors(state.location).iter().enumerate() {
        let name = location_info(*dest).name;
        push_choice(&mut cl, &(i + 1).to_string(), name, TRAVEL_BASE + i as u16, false);
    }
    if state.active_interview.is_some() {
        cl.push(Line::from(""));
        push_text(
            &mut cl,
            "Leaving now walks out of the interview.",
            Style::default().fg(Color::Red),
        );
    }
    cl.push(Line::from(""));
    push_choice_dim(&mut cl, "-", "Back", BACK);

    let block = Block::default()
        .borders(borders)
        .border_style(Style::default().fg(Color::Green))
        .title(" Move ");
    finish_panel(cl, block, f, area, click_state);
}

// ── Stats panel ─────────────────────────────────────────────

fn render_stats(
    state: &GameState,
    f: &mut Frame,
    area: Rect,
    borders: Borders,
    click_state: &Rc<RefCell<ClickState>>,
) {
    let ledger = state.ledger();
    let mut cl = ClickableList::new();

    for stat in [Stat::Energy, Stat::Charm, Stat::Knowledge, Stat::Endurance, Stat::Money] {
        cl.push(Line::from(vec![
            Span::styled(
                format!(" {} {:<10}", stat.icon(), stat.name()),
                Style::default().fg(Color::Gray),
            ),
            Span::styled(
                ledger.get(stat).to_string(),
                Style::default().fg(stat_color(stat)).add_modifier(Modifier::BOLD),
            ),
        ]));
    }
    cl.push(Line::from(""));
    push_text(
        &mut cl,
        &format!("Recruiter level: {}", ledger.level),
        Style::default().fg(Color::White),
    );
    push_text(
        &mut cl,
        if state.call_center_unlocked {
            "Call center: hired part-time"
        } else {
            "Call center: not hired"
        },
        Style::default().fg(Color::White),
    );
    cl.push(Line::from(""));

    for stage in ALL_STAGES {
        let record = state.record(stage);
        let (status, color) = if record.passed {
            ("passed".to_string(), Color::Green)
        } else if record.last_attempt_day == 0 {
            ("not attempted".to_string(), Color::DarkGray)
        } else {
            (format!("failed on day {}", record.last_attempt_day), Color::Red)
        };
        cl.push(Line::from(vec![
            Span::styled(
                format!(" {}. {:<8}", stage.number(), stage_short_name(stage)),
                Style::default().fg(Color::Gray),
            ),
            Span::styled(status, Style::default().fg(color)),
        ]));
    }

    cl.push(Line::from(""));
    push_choice_dim(&mut cl, "-", "Back", BACK);

    let block = Block::default()
        .borders(borders)
        .border_style(Style::default().fg(Color::Yellow))
        .title(" Stats ");
    finish_panel(cl, block, f, area, click_state);
}

fn stage_short_name(stage: Stage) -> &'static str {
    match stage {
        Stage::Math => "Math",
        Stage::Scenario => "Scenario",
        Stage::Reaction => "Reaction",
        Stage::Boss => "Big Boss",
    }
}

// ── Interview ───────────────────────────────────────────────

fn render_interview(
    active: &ActiveInterview,
    view: &ViewState,
    f: &mut Frame,
    area: Rect,
    borders: Borders,
    click_state: &Rc<RefCell<ClickState>>,
) {
    let (main_area, keypad_area) = match active.format {
        Format::Arithmetic { .. } => {
            let chunks = Layout::default()
                .direction(Direction::Vertical)
                .constraints([Constraint::Min(6), Constraint::Length(6)])
                .split(area);
            (chunks[0], Some(chunks[1]))
        }
        _ => (area, None),
    };

    let mut cl = ClickableList::new();
    push_text(
        &mut cl,
        interview::instructions(active.stage),
        Style::default().fg(Color::DarkGray),
    );
    // The boss quiz gives no feedback until the end.
    if active.stage != Stage::Boss {
        push_text(
            &mut cl,
            &format!("Correct so far: {}/{}", active.correct, active.index),
            Style::default().fg(Color::Gray),
        );
    }
    cl.push(Line::from(""));
    push_text(
        &mut cl,
        &interview::prompt(active),
        Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
    );
    cl.push(Line::from(""));

    match &active.format {
        Format::Arithmetic { .. } => {
            cl.push(Line::from(vec![
                Span::styled(" Answer: ", Style::default().fg(Color::Gray)),
                Span::styled(
                    format!("{}_", view.answer_input),
                    Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
                ),
            ]));
        }
        Format::Choice { selected } => {
            for (i, option) in interview::options(active).iter().enumerate() {
                let is_selected = *selected == Some(i);
                let id = PICK_BASE + i as u16;
                push_choice(&mut cl, &(i + 1).to_string(), option, id, is_selected);
            }
            cl.push(Line::from(""));
            if selected.is_some() {
                push_choice(&mut cl, "N", "Next question", NEXT_QUESTION, false);
            } else {
                push_choice_dim(&mut cl, "N", "Next question", NEXT_QUESTION);
            }
        }
        Format::Reaction { .. } => {
            for (i, signal) in ALL_SIGNALS.iter().enumerate() {
                let key = signal.name()[..1].to_string();
                cl.push_clickable(
                    Line::from(vec![
                        Span::styled(
                            format!(" [{}] ", key),
                            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
                        ),
                        Span::styled(
                            format!("██ {}", signal.name().to_uppercase()),
                            Style::default()
                                .fg(signal_color(*signal))
                                .add_modifier(Modifier::BOLD),
                        ),
                    ]),
                    SIGNAL_BASE + i as u16,
                );
            }
        }
    }

    cl.push(Line::from(""));
    push_choice_dim(&mut cl, "Q", "Walk out", WALK_OUT);

    let block = Block::default()
        .borders(borders)
        .border_style(Style::default().fg(Color::Magenta))
        .title(Span::styled(
            format!(" {} ", active.stage.title()),
            Style::default().fg(Color::Magenta).add_modifier(Modifier::BOLD),
        ));
    finish_panel(cl, block, f, main_area, click_state);

    if let Some(keypad_area) = keypad_area {
        render_keypad(f, keypad_area, borders, click_state);
    }
}

/// On-screen number pad; each cell is its own click target.
fn render_keypad(
    f: &mut Frame,
    area: Rect,
    borders: Borders,
    click_state: &Rc<RefCell<ClickState>>,
) {
    let digit = |d: u16| KEYPAD_BASE + d;
    let rows: [[(&str, u16); 4]; 3] = [
        [("7", digit(7)), ("8", digit(8)), ("9", digit(9)), ("-", KEYPAD_MINUS)],
        [("4", digit(4)), ("5", digit(5)), ("6", digit(6)), ("⌫", KEYPAD_DELETE)],
        [("1", digit(1)), ("2", digit(2)), ("3", digit(3)), ("0", digit(0))],
    ];

    let block = Block::default()
        .borders(borders)
        .border_style(Style::default().fg(Color::DarkGray));
    let inner = block.inner(area);

    let mut lines = Vec::new();
    let mut cs = click_state.borrow_mut();
    for (r, row) in rows.iter().enumerate() {
        let mut spans = Vec::new();
        for (c, (label, id)) in row.iter().enumerate() {
            spans.push(Span::styled(
                format!("  {}   ", label),
                Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
            ));
            let x = inner.x + c as u16 * KEYPAD_CELL_W;
            let y = inner.y + r as u16;
            if x + KEYPAD_CELL_W <= inner.right() && y < inner.bottom() {
                cs.add_click_target(Rect::new(x, y, KEYPAD_CELL_W, 1), *id);
            }
        }
        lines.push(Line::from(spans));
    }

    let submit = Line::from(Span::styled(
        "  Submit ⏎",
        Style::default().fg(Color::Black).bg(Color::Green).add_modifier(Modifier::BOLD),
    ));
    let submit_y = inner.y + rows.len() as u16;
    cs.add_row_target(inner, submit_y, SUBMIT);
    lines.push(submit);
    drop(cs);

    f.render_widget(Paragraph::new(lines).block(block), area);
}

// ── Ending ──────────────────────────────────────────────────

fn render_ending(
    state: &GameState,
    f: &mut Frame,
    area: Rect,
    borders: Borders,
    click_state: &Rc<RefCell<ClickState>>,
) {
    let ledger = state.ledger();
    let mut cl = ClickableList::new();
    cl.push(Line::from(""));

    let (title, color) = match state.outcome {
        Some(Outcome::Hired) => {
            push_text(
                &mut cl,
                "You got the job. A real contract, a real desk, a real salary.",
                Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
            );
            push_text(
                &mut cl,
                &format!("It took you {} days.", ledger.day),
                Style::default().fg(Color::White),
            );
            (" Hired! ", Color::Green)
        }
        _ => {
            push_text(
                &mut cl,
                "Thirty days are up. The month ends without a contract.",
                Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
            );
            let passed = ALL_STAGES.iter().filter(|s| state.record(**s).passed).count();
            push_text(
                &mut cl,
                &format!("Interviews passed: {}/{}", passed, ALL_STAGES.len()),
                Style::default().fg(Color::White),
            );
            (" Time's up ", Color::Red)
        }
    };

    cl.push(Line::from(""));
    push_text(
        &mut cl,
        &format!(
            "Final: ✨{} 📚{} 🏃{} ¥{}",
            ledger.charm, ledger.knowledge, ledger.endurance, ledger.money
        ),
        Style::default().fg(Color::Gray),
    );
    cl.push(Line::from(""));
    push_choice(&mut cl, "R", "Play again", RESTART, false);

    let block = Block::default()
        .borders(borders)
        .border_style(Style::default().fg(color))
        .title(Span::styled(title, Style::default().fg(color).add_modifier(Modifier::BOLD)));
    finish_panel(cl, block, f, area, click_state);
}

// ── Dialogue box ────────────────────────────────────────────

fn dialogue_paragraph(state: &GameState) -> Paragraph<'static> {
    let text = state
        .dialogue
        .as_ref()
        .map(|d| d.text.clone())
        .unwrap_or_default();
    Paragraph::new(Line::from(Span::styled(
        format!(" {}", text),
        Style::default().fg(Color::White),
    )))
    .wrap(Wrap { trim: false })
}

fn dialogue_height(state: &GameState, width: u16, borders: Borders) -> u16 {
    let side = if borders.contains(Borders::LEFT) { 2 } else { 0 };
    let inner_w = width.saturating_sub(side).max(1);
    let rows = dialogue_paragraph(state).line_count(inner_w) as u16;
    (rows + 2).clamp(DIALOGUE_MIN_H, DIALOGUE_MAX_H)
}

fn render_dialogue(state: &GameState, f: &mut Frame, area: Rect, borders: Borders) {
    let speaker = state
        .dialogue
        .as_ref()
        .map(|d| d.speaker.label())
        .unwrap_or("");
    let block = Block::default()
        .borders(borders)
        .border_style(Style::default().fg(Color::DarkGray))
        .title(Span::styled(
            format!(" {} ", speaker),
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
        ));
    f.render_widget(dialogue_paragraph(state).block(block), area);
}

// ── Footer ──────────────────────────────────────────────────

fn render_footer(
    state: &GameState,
    f: &mut Frame,
    area: Rect,
    borders: Borders,
    click_state: &Rc<RefCell<ClickState>>,
) {
    let block = Block::default()
        .borders(borders)
        .border_style(Style::default().fg(Color::DarkGray));
    let inner = block.inner(area);

    let hints: &[(&str, &str, u16)] = if state.is_game_over() {
        &[("R", "Play again", RESTART)]
    } else {
        &[("M", "Move", OPEN_MOVE), ("S", "Stats", OPEN_STATS)]
    };

    let mut spans = Vec::new();
    let mut x = inner.x;
    let mut cs = click_state.borrow_mut();
    for (key, label, id) in hints {
        let key_span = Span::styled(
            format!(" [{}] ", key),
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        );
        let label_span = Span::styled(format!("{} ", label), Style::default().fg(Color::Gray));
        let w = (key_span.width() + label_span.width()) as u16;
        let visible = w.min(inner.right().saturating_sub(x));
        cs.add_click_target(Rect::new(x, inner.y, visible, 1), *id);
        x = x.saturating_add(w);
        spans.push(key_span);
        spans.push(label_span);
    }
    drop(cs);

    f.render_widget(Paragraph::new(Line::from(spans)).block(block), area);
}

// ── Floats ──────────────────────────────────────────────────

/// Resource-change labels rising from the bottom of the scene.
fn render_floats(floats: &[Float], f: &mut Frame, area: Rect) {
    let center_x = area.x + area.width / 2;
    let base_y = area.y + area.height;

    for float in floats {
        let progress = 1.0 - (float.life as f32 / float.max_life as f32);
        let rise = (progress * 4.0) as u16;
        let y = base_y.saturating_sub(2 + rise);
        let x = (center_x as i16 + float.col_offset).max(area.x as i16) as u16;

        let color = if float.life <= float.max_life / 3 {
            Color::DarkGray
        } else if float.text.starts_with('+') {
            stat_color(float.stat)
        } else {
            Color::Red
        };

        if y >= area.y && y < base_y && x < area.x + area.width {
            let text_w = Span::raw(float.text.as_str()).width() as u16;
            let width = text_w.min(area.x + area.width - x);
            if width > 0 {
                let style = Style::default().fg(color).add_modifier(Modifier::BOLD);
                f.render_widget(
                    Paragraph::new(Span::styled(float.text.as_str(), style)),
                    Rect::new(x, y, width, 1),
                );
            }
        }
    }
}
