use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Row, Table},
};

use super::{Component, fallback, render_error, render_loading, section_block};
use crate::tui::app::{AppState, MovieBrowser, View, ViewState};

pub(crate) struct MoviesComponent;

impl Component for MoviesComponent {
    fn render(&self, f: &mut Frame, area: Rect, state: &AppState) {
        match &state.movies {
            ViewState::Loading => render_loading(f, area, "movies"),
            ViewState::Error(message) => render_error(f, area, "the movie list", message),
            ViewState::Ready(browser) => render_ready(f, area, browser, state),
        }
    }
}

fn render_ready(f: &mut Frame, area: Rect, browser: &MovieBrowser, state: &AppState) {
    let block = section_block(" Movies ");
    let inner = block.inner(area);
    f.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .split(inner);

    render_filter_line(f, chunks[0], browser, state);
    render_table(f, chunks[1], browser);
    render_count_line(f, chunks[2], browser);
}

fn render_filter_line(f: &mut Frame, area: Rect, browser: &MovieBrowser, state: &AppState) {
    let mut spans = vec![
        Span::styled("Filter by year: ", Style::default().fg(Color::Gray)),
        Span::styled(
            state.filter_input.clone(),
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        ),
    ];
    if state.view == View::Movies {
        spans.push(Span::styled("█", Style::default().fg(Color::Cyan)));
    }
    if let Some(year) = browser.active_filter {
        spans.push(Span::styled(
            format!("  (showing {})", year),
            Style::default().fg(Color::Yellow),
        ));
    }

    f.render_widget(Paragraph::new(Line::from(spans)), area);
}

fn render_table(f: &mut Frame, area: Rect, browser: &MovieBrowser) {
    if browser.shown.is_empty() {
        let text = match browser.active_filter {
            Some(year) => format!("No movies found for {}.", year),
            None => "No movies found.".to_string(),
        };
        f.render_widget(
            fallback(text, ratatui::widgets::Block::default()),
            area,
        );
        return;
    }

    let rows = browser.shown.iter().map(|movie| {
        let style = if movie.winner {
            Style::default().fg(Color::Green)
        } else {
            Style::default()
        };
        Row::new(vec![
            movie.year.to_string(),
            movie.title.clone(),
            movie.studios.join(", "),
            movie.producers.join(", "),
            if movie.winner { "yes" } else { "no" }.to_string(),
        ])
        .style(style)
    });

    let table = Table::new(
        rows,
        [
            Constraint::Length(6),
            Constraint::Percentage(35),
            Constraint::Percentage(25),
            Constraint::Percentage(30),
            Constraint::Length(6),
        ],
    )
    .header(
        Row::new(vec!["YEAR", "TITLE", "STUDIOS", "PRODUCERS", "WINNER"]).style(
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        ),
    );
    f.render_widget(table, area);
}

fn render_count_line(f: &mut Frame, area: Rect, browser: &MovieBrowser) {
    f.render_widget(
        Paragraph::new(format!(
            "showing {} of {} fetched movies",
            browser.shown.len(),
            browser.total()
        ))
        .style(Style::default().fg(Color::DarkGray)),
        area,
    );
}
