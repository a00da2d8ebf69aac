use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use super::app::{AppState, View};
use super::components::{Component, DashboardComponent, MoviesComponent};

pub(crate) fn draw(f: &mut Frame, state: &AppState) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .split(f.area());

    render_title_bar(f, chunks[0], state);

    match state.view {
        View::Dashboard => DashboardComponent.render(f, chunks[1], state),
        View::Movies => MoviesComponent.render(f, chunks[1], state),
    }

    render_footer(f, chunks[2], state);
}

fn render_title_bar(f: &mut Frame, area: Rect, state: &AppState) {
    let tab = |label: &str, active: bool| {
        if active {
            Span::styled(
                format!(" {} ", label),
                Style::default()
                    .fg(Color::Black)
                    .bg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            )
        } else {
            Span::styled(format!(" {} ", label), Style::default().fg(Color::Gray))
        }
    };

    let title = Line::from(vec![
        Span::styled(
            "━━ razzie ",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        tab("Dashboard", state.view == View::Dashboard),
        Span::raw(" "),
        tab("Movies", state.view == View::Movies),
        Span::styled(
            " ━━",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
    ]);

    f.render_widget(Paragraph::new(title), area);
}

fn render_footer(f: &mut Frame, area: Rect, state: &AppState) {
    let hint = match state.view {
        View::Dashboard => "Tab: movie list │ type a year + Enter: winners lookup │ q: quit",
        View::Movies => "Tab: dashboard │ type a year + Enter: filter, empty Enter: clear │ q: quit",
    };

    f.render_widget(
        Paragraph::new(Line::from(Span::styled(
            hint,
            Style::default().fg(Color::DarkGray),
        ))),
        area,
    );
}
