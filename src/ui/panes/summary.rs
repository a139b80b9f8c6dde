//! Summary pane: collected letters, visited path and diagnoses

use crate::snapshot::Snapshot;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    widgets::{Block, Borders, List, ListItem, Paragraph, Wrap},
    Frame,
};

fn pane_block(title: &str) -> Block<'_> {
    Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(DEFAULT_THEME.border_normal))
}

/// Render the summary pane
pub fn render_summary_pane(frame: &mut Frame, area: Rect, snapshot: &Snapshot) {
    let error_rows = snapshot.errors.len().max(1) as u16 + 2;
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(3),
            Constraint::Length(error_rows),
        ])
        .split(area);

    let letters = if snapshot.collected_letters.is_empty() {
        Paragraph::new("(none yet)").style(Style::default().fg(DEFAULT_THEME.comment))
    } else {
        Paragraph::new(snapshot.letters()).style(
            Style::default()
                .fg(DEFAULT_THEME.letter)
                .add_modifier(Modifier::BOLD),
        )
    };
    frame.render_widget(letters.block(pane_block(" Collected Letters ")), chunks[0]);

    let path = Paragraph::new(snapshot.path())
        .style(Style::default().fg(DEFAULT_THEME.fg))
        .wrap(Wrap { trim: false })
        .block(pane_block(" Path "));
    frame.render_widget(path, chunks[1]);

    let items: Vec<ListItem> = if snapshot.errors.is_empty() {
        vec![ListItem::new("(no problems found)").style(Style::default().fg(DEFAULT_THEME.comment))]
    } else {
        snapshot
            .errors
            .iter()
            .map(|e| ListItem::new(e.to_string()).style(Style::default().fg(DEFAULT_THEME.error)))
            .collect()
    };
    frame.render_widget(List::new(items).block(pane_block(" Diagnoses ")), chunks[2]);
}
