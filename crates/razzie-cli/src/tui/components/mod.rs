mod dashboard;
mod movies;

pub(crate) use dashboard::DashboardComponent;
pub(crate) use movies::MoviesComponent;

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::Span,
    widgets::{Block, Borders, Paragraph},
};

use super::app::AppState;

pub(crate) trait Component {
    fn render(&self, f: &mut Frame, area: Rect, state: &AppState);
}

pub(crate) fn section_block(title: &str) -> Block<'_> {
    Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan))
        .title(Span::styled(
            title,
            Style::default()
                .fg(Color::LightCyan)
                .add_modifier(Modifier::BOLD),
        ))
}

/// Centered dimmed text for a list that came back empty.
pub(crate) fn fallback<'a>(text: String, block: Block<'a>) -> Paragraph<'a> {
    Paragraph::new(text)
        .style(Style::default().fg(Color::DarkGray))
        .block(block)
}

pub(crate) fn render_loading(f: &mut Frame, area: Rect, what: &str) {
    f.render_widget(
        Paragraph::new(format!("Loading {}...", what))
            .style(Style::default().fg(Color::DarkGray)),
        area,
    );
}

pub(crate) fn render_error(f: &mut Frame, area: Rect, what: &str, message: &str) {
    f.render_widget(
        Paragraph::new(format!("Could not load {}: {}", what, message))
            .style(Style::default().fg(Color::Red)),
        area,
    );
}
