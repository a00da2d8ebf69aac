use comfy_table::{Cell, Color, ContentArrangement, Table, presets::UTF8_FULL};
use owo_colors::OwoColorize;
use razzie_types::{Movie, Page};

pub fn print_movie_page(page: &Page<Movie>) {
    println!("{}", "Movies".bold());
    println!("{}", render_movies(&page.content));

    if page.total_pages > 0 {
        println!(
            "page {} of {} ({} movies total)",
            page.number + 1,
            page.total_pages,
            page.total_elements
        );
    }
}

pub fn print_winners(year: i32, winners: &[Movie]) {
    println!("{}", format!("Winners of {}", year).bold());
    println!("{}", render_winners(year, winners));
}

pub fn render_movies(movies: &[Movie]) -> String {
    if movies.is_empty() {
        return "No movies found.".to_string();
    }

    let mut table = new_table(vec!["ID", "YEAR", "TITLE", "STUDIOS", "PRODUCERS", "WINNER"]);
    for movie in movies {
        let winner_cell = if movie.winner {
            Cell::new("yes").fg(Color::Green)
        } else {
            Cell::new("no").fg(Color::DarkGrey)
        };

        table.add_row(vec![
            Cell::new(movie.id).fg(Color::DarkGrey),
            Cell::new(movie.year).fg(Color::Cyan),
            Cell::new(&movie.title),
            Cell::new(movie.studios.join(", ")),
            Cell::new(movie.producers.join(", ")),
            winner_cell,
        ]);
    }
    table.to_string()
}

pub fn render_winners(year: i32, winners: &[Movie]) -> String {
    if winners.is_empty() {
        return format!("No winners found for {}.", year);
    }

    let mut table = new_table(vec!["ID", "YEAR", "TITLE"]);
    for movie in winners {
        table.add_row(vec![
            Cell::new(movie.id).fg(Color::DarkGrey),
            Cell::new(movie.year).fg(Color::Cyan),
            Cell::new(&movie.title),
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
