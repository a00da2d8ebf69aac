use comfy_table::{Cell, Color, ContentArrangement, Table, presets::UTF8_FULL};
use owo_colors::OwoColorize;
use razzie_types::{ProducerInterval, ProducerIntervals, StudioWinCount, YearWinnerCount};

/// How many of the server-ranked studios the dashboard shows.
pub const TOP_STUDIOS: usize = 3;

/// Keep only the leading entries of the server-ranked studio list.
pub fn truncate_top_studios(mut studios: Vec<StudioWinCount>) -> Vec<StudioWinCount> {
    studios.truncate(TOP_STUDIOS);
    studios
}

pub fn print_dashboard(
    years: &[YearWinnerCount],
    top_studios: &[StudioWinCount],
    intervals: &ProducerIntervals,
) {
    println!("{}", "Years with multiple winners".bold());
    println!("{}", render_years(years));

    println!("{}", "Top studios by win count".bold());
    println!("{}", render_studios(top_studios));

    println!("{}", "Producers with the longest gap between wins".bold());
    println!("{}", render_intervals(&intervals.max));

    println!("{}", "Producers with the shortest gap between wins".bold());
    println!("{}", render_intervals(&intervals.min));
}

pub fn render_years(years: &[YearWinnerCount]) -> String {
    if years.is_empty() {
        return "No years with multiple winners found.".to_string();
    }

    let mut table = new_table(vec!["YEAR", "WINNERS"]);
    for entry in years {
        table.add_row(vec![
            Cell::new(entry.year).fg(Color::Cyan),
            Cell::new(entry.winner_count),
        ]);
    }
    table.to_string()
}

pub fn render_studios(studios: &[StudioWinCount]) -> String {
    if studios.is_empty() {
        return "No studios found.".to_string();
    }

    let mut table = new_table(vec!["STUDIO", "WINS"]);
    for studio in studios {
        table.add_row(vec![
            Cell::new(&studio.name).fg(Color::Yellow),
            Cell::new(studio.win_count),
        ]);
    }
    table.to_string()
}

pub fn render_intervals(intervals: &[ProducerInterval]) -> String {
    if intervals.is_empty() {
        return "No producer intervals found.".to_string();
    }

    let mut table = new_table(vec!["PRODUCER", "INTERVAL", "PREVIOUS WIN", "FOLLOWING WIN"]);
    for entry in intervals {
        table.add_row(vec![
            Cell::new(&entry.producer).fg(Color::Yellow),
            Cell::new(entry.interval).fg(Color::Cyan),
            Cell::new(entry.previous_win),
            Cell::new(entry.following_win),
        ]);
    }
    table.to_string()
}

fn new_table(header: Vec<&str>) -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(header.into_iter().map(|h| Cell::new(h).fg(Color::White)));
    table
}

#[cfg(test)]
mod tests {
    use super::*;

    fn studio(name: &str, wins: u32) -> StudioWinCount {
        StudioWinCount {
            name: name.to_string(),
            win_count: wins,
        }
    }

    #[test]
    fn test_truncates_to_first_three_studios() {
        let ranked: Vec<StudioWinCount> = (0..10)
            .map(|i| studio(&format!("Studio {}", i), 10 - i))
            .collect();

        let top = truncate_top_studios(ranked);
        assert_eq!(top.len(), TOP_STUDIOS);
        assert_eq!(top[0].name, "Studio 0");
        assert_eq!(top[2].name, "Studio 2");
    }

    #[test]
    fn test_short_list_is_kept_whole() {
        let top = truncate_top_studios(vec![studio("Cannon Films", 4)]);
        assert_eq!(top.len(), 1);
    }

    #[test]
    fn test_empty_lists_render_fallback_text() {
        assert_eq!(render_years(&[]), "No years with multiple winners found.");
        assert_eq!(render_studios(&[]), "No studios found.");
        assert_eq!(render_intervals(&[]), "No producer intervals found.");
    }

    #[test]
    fn test_populated_years_render_as_table() {
        let years = vec![YearWinnerCount {
            year: 1986,
            winner_count: 2,
        }];

        let rendered = render_years(&years);
        assert!(rendered.contains("1986"));
        assert!(rendered.contains("YEAR"));
    }
}
