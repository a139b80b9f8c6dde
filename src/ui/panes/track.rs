//! Track pane rendering
//!
//! Draws the grid one cell per character. Path tiles, letter stations and the
//! walker's current cell are colored so progress is visible while a run is
//! animated. The cell named by the first diagnosis, if any, is marked in red.

use crate::snapshot::Snapshot;
use crate::track::{classify, CellKind, Grid, Position};
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Style for a single cell
fn cell_style(c: char, is_current: bool, is_faulty: bool) -> Style {
    if is_faulty {
        return Style::default()
            .bg(DEFAULT_THEME.error)
            .fg(Color::Black)
            .add_modifier(Modifier::BOLD);
    }
    if is_current {
        return Style::default()
            .bg(DEFAULT_THEME.success)
            .fg(Color::Black)
            .add_modifier(Modifier::BOLD);
    }

    match classify(c) {
        CellKind::Start | CellKind::End => Style::default()
            .fg(DEFAULT_THEME.primary)
            .add_modifier(Modifier::BOLD),
        CellKind::Straight | CellKind::Turn => Style::default().fg(DEFAULT_THEME.fg),
        CellKind::Letter(_) => Style::default()
            .fg(DEFAULT_THEME.letter)
            .add_modifier(Modifier::BOLD),
        CellKind::Other(_) => Style::default().fg(DEFAULT_THEME.comment),
        CellKind::Blank => Style::default().bg(DEFAULT_THEME.blank_bg),
    }
}

fn track_lines(grid: &Grid, snapshot: &Snapshot) -> Vec<Line<'static>> {
    let faulty = snapshot.first_error().and_then(|e| e.location());

    grid.rows()
        .enumerate()
        .map(|(row, cells)| {
            let spans: Vec<Span> = cells
                .iter()
                .enumerate()
                .map(|(col, &c)| {
                    let at = Position::new(row, col);
                    let style = cell_style(c, snapshot.position == Some(at), faulty == Some(at));
                    Span::styled(c.to_string(), style)
                })
                .collect();
            Line::from(spans)
        })
        .collect()
}

/// Render the track pane
pub fn render_track_pane(frame: &mut Frame, area: Rect, grid: &Grid, snapshot: &Snapshot) {
    let title = if snapshot.running {
        format!(" Track {} ", snapshot.heading.arrow())
    } else {
        " Track ".to_string()
    };

    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(DEFAULT_THEME.border_normal));

    if grid.is_empty() {
        let paragraph = Paragraph::new("(empty track)")
            .block(block)
            .style(Style::default().fg(DEFAULT_THEME.comment));
        frame.render_widget(paragraph, area);
        return;
    }

    // Keep the walker in view on tracks taller or wider than the pane
    let visible_height = area.height.saturating_sub(2) as usize;
    let visible_width = area.width.saturating_sub(2) as usize;
    let (row, col) = snapshot
        .position
        .map_or((0, 0), |at| (at.row, at.col));
    let scroll_y = row.saturating_sub(visible_height.saturating_sub(1));
    let scroll_x = col.saturating_sub(visible_width.saturating_sub(1));

    let paragraph = Paragraph::new(track_lines(grid, snapshot))
        .block(block)
        .scroll((scroll_y as u16, scroll_x as u16));
    frame.render_widget(paragraph, area);
}
