//! Pure view/render functions for the preview TUI.
//!
//! Functions here take `&AppState` by immutable reference, draw to a
//! ratatui Frame, and never mutate state or return effects.
//!
//! Layout mirrors the send-preview page: RFP details on the left, the
//! email template preview on the right, a status line at the bottom.

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Position, Rect};
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use unicode_width::UnicodeWidthStr;

use crate::common::text::{hard_wrap, hard_wrap_line, wrap_text};
use crate::editor::Editor;
use crate::state::{AppState, ContentState, NoticeLevel};

/// Height of the status line below the panes.
const STATUS_HEIGHT: u16 = 1;

/// Spinner frames for status line animation.
const SPINNER_FRAMES: &[&str] = &["◐", "◓", "◑", "◒"];

/// Renders the entire preview to the frame.
pub fn render(state: &AppState, frame: &mut Frame) {
    let area = frame.area();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(1), Constraint::Length(STATUS_HEIGHT)])
        .split(area);

    let panes = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(45), Constraint::Percentage(55)])
        .split(chunks[0]);

    render_rfp_pane(state, frame, panes[0]);
    render_preview_pane(state, frame, panes[1]);
    render_status_line(state, frame, chunks[1]);
}

/// Renders the left pane: RFP title, description and structured
/// requirements.
fn render_rfp_pane(state: &AppState, frame: &mut Frame, area: Rect) {
    let block = Block::default().borders(Borders::ALL).title(" RFP ");
    let inner_width = area.width.saturating_sub(2) as usize;

    let mut lines: Vec<Line> = Vec::new();
    if let Some(rfp) = &state.rfp {
        lines.push(Line::from(Span::styled(
            rfp.title.clone(),
            Style::default().fg(Color::Cyan),
        )));
        lines.push(Line::default());
        for row in wrap_text(&rfp.description, inner_width) {
            lines.push(Line::from(Span::styled(
                row,
                Style::default().fg(Color::Gray),
            )));
        }
        lines.push(Line::default());
        lines.push(Line::from(Span::styled(
            "Structured Requirements",
            Style::default().fg(Color::Cyan),
        )));
        let requirements = serde_json::to_string_pretty(&rfp.structured_requirements)
            .unwrap_or_else(|_| "{}".to_string());
        for row in requirements.split('\n') {
            for piece in hard_wrap_line(row, inner_width) {
                lines.push(Line::from(Span::styled(
                    piece,
                    Style::default().fg(Color::DarkGray),
                )));
            }
        }
    } else {
        lines.push(Line::from(Span::styled(
            "Loading RFP...",
            Style::default().fg(Color::DarkGray),
        )));
    }

    frame.render_widget(Paragraph::new(lines).block(block), area);
}

/// Renders the right pane: the email template preview in its current
/// lifecycle phase.
fn render_preview_pane(state: &AppState, frame: &mut Frame, area: Rect) {
    let title = if state.preview.content.is_editable() {
        " Email Template Preview (editing) "
    } else {
        " Email Template Preview "
    };
    let block = Block::default().borders(Borders::ALL).title(title);
    let inner = block.inner(area);
    let inner_width = inner.width as usize;
    let inner_height = inner.height as usize;

    match &state.preview.content {
        ContentState::Idle => {
            let message = if state.preview.error.is_some() {
                Span::styled(
                    "Failed to generate email template - press r to retry",
                    Style::default().fg(Color::Red),
                )
            } else {
                Span::styled(
                    "Press r to generate the email template",
                    Style::default().fg(Color::DarkGray),
                )
            };
            frame.render_widget(Paragraph::new(Line::from(message)).block(block), area);
        }
        ContentState::Generating => {
            let spinner = SPINNER_FRAMES[state.spinner_frame % SPINNER_FRAMES.len()];
            let line = Line::from(vec![
                Span::styled(spinner, Style::default().fg(Color::Yellow)),
                Span::raw(" "),
                Span::styled("Generating template...", Style::default().fg(Color::Yellow)),
            ]);
            frame.render_widget(Paragraph::new(line).block(block), area);
        }
        ContentState::Revealing { revealed, .. } => {
            let rows = hard_wrap(revealed, inner_width.max(1));
            // Follow the tail while the text types out.
            let scroll = rows.len().saturating_sub(inner_height);
            let lines: Vec<Line> = rows
                .into_iter()
                .skip(scroll)
                .map(|row| Line::from(Span::raw(row)))
                .collect();
            frame.render_widget(Paragraph::new(lines).block(block), area);
        }
        ContentState::Done { editor } => {
            render_editor(editor, frame, area, block, inner);
        }
    }
}

/// Renders the editable preview with a visible cursor.
fn render_editor(editor: &Editor, frame: &mut Frame, area: Rect, block: Block, inner: Rect) {
    let inner_width = (inner.width as usize).max(1);
    let inner_height = inner.height as usize;

    let (cursor_x, cursor_y) = visual_cursor(editor, inner_width);

    let mut rows: Vec<String> = Vec::new();
    for line in editor.lines() {
        rows.extend(hard_wrap_line(line, inner_width));
    }

    // Keep the cursor row visible.
    let scroll = cursor_y.saturating_sub(inner_height.saturating_sub(1));
    let lines: Vec<Line> = rows
        .into_iter()
        .skip(scroll)
        .take(inner_height)
        .map(|row| Line::from(Span::raw(row)))
        .collect();

    frame.render_widget(Paragraph::new(lines).block(block), area);
    frame.set_cursor_position(Position {
        x: inner.x + cursor_x as u16,
        y: inner.y + (cursor_y - scroll) as u16,
    });
}

/// Maps the editor's (row, col) cursor onto hard-wrapped visual rows.
fn visual_cursor(editor: &Editor, width: usize) -> (usize, usize) {
    let (row, col) = editor.cursor();
    let mut y = 0;
    for line in &editor.lines()[..row] {
        y += hard_wrap_line(line, width).len();
    }
    let prefix: String = editor.lines()[row].chars().take(col).collect();
    let prefix_width = prefix.width();
    y += prefix_width / width;
    (prefix_width % width, y)
}

/// Renders the status line: a transient notice if present, key hints
/// otherwise.
fn render_status_line(state: &AppState, frame: &mut Frame, area: Rect) {
    let spans: Vec<Span> = if let Some(notice) = &state.notice {
        let color = match notice.level {
            NoticeLevel::Info => Color::Green,
            NoticeLevel::Error => Color::Red,
        };
        vec![Span::styled(
            notice.message.clone(),
            Style::default().fg(color),
        )]
    } else if state.tasks.email_send.is_running() {
        let spinner = SPINNER_FRAMES[state.spinner_frame % SPINNER_FRAMES.len()];
        vec![
            Span::styled(spinner, Style::default().fg(Color::Green)),
            Span::raw(" "),
            Span::styled("Sending...", Style::default().fg(Color::Green)),
        ]
    } else if state.preview.content.is_editable() {
        vec![
            Span::styled("Ctrl+S", Style::default().fg(Color::DarkGray)),
            Span::raw(" send  "),
            Span::styled("Ctrl+R", Style::default().fg(Color::DarkGray)),
            Span::raw(" regenerate  "),
            Span::styled("Esc", Style::default().fg(Color::DarkGray)),
            Span::raw(" quit"),
        ]
    } else {
        vec![
            Span::styled("r", Style::default().fg(Color::DarkGray)),
            Span::raw(" regenerate  "),
            Span::styled("q", Style::default().fg(Color::DarkGray)),
            Span::raw(" quit"),
        ]
    };

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn visual_cursor_tracks_wrapped_rows() {
        // 10 chars on a 4-wide pane wrap into rows of 4/4/2.
        let editor = Editor::new("abcdefghij");
        // Cursor is at the end (col 10): visual row 2, col 2.
        assert_eq!(visual_cursor(&editor, 4), (2, 2));
    }

    #[test]
    fn visual_cursor_counts_earlier_lines() {
        let mut editor = Editor::new("abcdefgh\nxy");
        // Cursor at end of "xy": first line wraps to 2 rows of 4.
        assert_eq!(visual_cursor(&editor, 4), (2, 2));
        editor.input(crossterm::event::KeyEvent::new(
            crossterm::event::KeyCode::Home,
            crossterm::event::KeyModifiers::NONE,
        ));
        assert_eq!(visual_cursor(&editor, 4), (0, 2));
    }
}
