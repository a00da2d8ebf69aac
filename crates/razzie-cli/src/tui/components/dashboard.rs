use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Row, Table},
};

use super::{Component, fallback, render_error, render_loading, section_block};
use crate::tui::app::{AppState, DashboardData, View, ViewState, WinnersLookup};

pub(crate) struct DashboardComponent;

impl Component for DashboardComponent {
    fn render(&self, f: &mut Frame, area: Rect, state: &AppState) {
        match &state.dashboard {
            ViewState::Loading => render_loading(f, area, "dashboard"),
            ViewState::Error(message) => render_error(f, area, "the dashboard", message),
            ViewState::Ready(data) => render_ready(f, area, data, state),
        }
    }
}

fn render_ready(f: &mut Frame, area: Rect, data: &DashboardData, state: &AppState) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage(28), // years with multiple winners
            Constraint::Length(7),      // top studios (3 rows + header)
            Constraint::Percentage(32), // interval extremes
            Constraint::Min(8),         // winners-by-year lookup
        ])
        .split(area);

    render_years(f, chunks[0], data);
    render_studios(f, chunks[1], data);
    render_intervals(f, chunks[2], data);
    render_lookup(f, chunks[3], &state.lookup, state.view == View::Dashboard);
}

fn render_years(f: &mut Frame, area: Rect, data: &DashboardData) {
    let block = section_block(" Years With Multiple Winners ");
    if data.years.is_empty() {
        f.render_widget(
            fallback("No years with multiple winners found.".to_string(), block),
            area,
        );
        return;
    }

    let rows = data
        .years
        .iter()
        .map(|entry| Row::new(vec![entry.year.to_string(), entry.winner_count.to_string()]));
    let table = Table::new(rows, [Constraint::Length(6), Constraint::Length(8)])
        .header(header_row(vec!["YEAR", "WINNERS"]))
        .block(block);
    f.render_widget(table, area);
}

fn render_studios(f: &mut Frame, area: Rect, data: &DashboardData) {
    let block = section_block(" Top Studios By Win Count ");
    if data.top_studios.is_empty() {
        f.render_widget(fallback("No studios found.".to_string(), block), area);
        return;
    }

    let rows = data
        .top_studios
        .iter()
        .map(|studio| Row::new(vec![studio.name.clone(), studio.win_count.to_string()]));
    let table = Table::new(rows, [Constraint::Percentage(80), Constraint::Length(6)])
        .header(header_row(vec!["STUDIO", "WINS"]))
        .block(block);
    f.render_widget(table, area);
}

fn render_intervals(f: &mut Frame, area: Rect, data: &DashboardData) {
    let halves = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    render_interval_table(f, halves[0], " Longest Gap Between Wins ", &data.intervals.max);
    render_interval_table(f, halves[1], " Shortest Gap Between Wins ", &data.intervals.min);
}

fn render_interval_table(
    f: &mut Frame,
    area: Rect,
    title: &str,
    intervals: &[razzie_types::ProducerInterval],
) {
    let block = section_block(title);
    if intervals.is_empty() {
        f.render_widget(
            fallback("No producer intervals found.".to_string(), block),
            area,
        );
        return;
    }

    let rows = intervals.iter().map(|entry| {
        Row::new(vec![
            entry.producer.clone(),
            entry.interval.to_string(),
            entry.previous_win.to_string(),
            entry.following_win.to_string(),
        ])
    });
    let table = Table::new(
        rows,
        [
            Constraint::Percentage(40),
            Constraint::Length(8),
            Constraint::Length(8),
            Constraint::Length(9),
        ],
    )
    .header(header_row(vec!["PRODUCER", "GAP", "FROM", "TO"]))
    .block(block);
    f.render_widget(table, area);
}

fn render_lookup(f: &mut Frame, area: Rect, lookup: &WinnersLookup, focused: bool) {
    let block = section_block(" Winners By Year ");
    let inner = block.inner(area);
    f.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Min(0)])
        .split(inner);

    let mut input_spans = vec![
        Span::styled("Year: ", Style::default().fg(Color::Gray)),
        Span::styled(
            lookup.input.clone(),
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        ),
    ];
    if focused {
        input_spans.push(Span::styled("█", Style::default().fg(Color::Cyan)));
    }
    f.render_widget(Paragraph::new(Line::from(input_spans)), chunks[0]);

    match lookup.searched_year {
        None => {
            f.render_widget(
                Paragraph::new("Type a year and press Enter to look up its winners.")
                    .style(Style::default().fg(Color::DarkGray)),
                chunks[1],
            );
        }
        Some(year) if lookup.winners.is_empty() => {
            f.render_widget(
                Paragraph::new(format!("No winners found for {}.", year))
                    .style(Style::default().fg(Color::DarkGray)),
                chunks[1],
            );
        }
        Some(_) => {
            let rows = lookup.winners.iter().map(|movie| {
                Row::new(vec![
                    movie.id.to_string(),
                    movie.year.to_string(),
                    movie.title.clone(),
                ])
            });
            let table = Table::new(
                rows,
                [
                    Constraint::Length(6),
                    Constraint::Length(6),
                    Constraint::Percentage(80),
                ],
            )
            .header(header_row(vec!["ID", "YEAR", "TITLE"]));
            f.render_widget(table, chunks[1]);
        }
    }
}

fn header_row(cells: Vec<&str>) -> Row<'_> {
    Row::new(cells.into_iter().map(|c| c.to_string())).style(
        Style::default()
            .fg(Color::White)
            .add_modifier(Modifier::BOLD),
    )
}
