use super::args::{Cli, Commands};
use super::handlers;
use anyhow::{Context, Result};
use razzie_api::{ApiClient, Config, MovieQuery, resolve_base_url};

pub fn run(cli: Cli) -> Result<()> {
    let config = Config::load().context("failed to load configuration")?;
    let base_url = resolve_base_url(cli.api_url.as_deref(), &config);
    let client = ApiClient::new(&base_url);

    let Some(command) = cli.command else {
        show_guidance();
        return Ok(());
    };

    let runtime = tokio::runtime::Runtime::new()?;

    match command {
        Commands::Dashboard => runtime.block_on(handlers::dashboard::handle(&client, cli.format)),

        Commands::Summary => runtime.block_on(handlers::summary::handle(&client, cli.format)),

        Commands::Movies {
            page,
            size,
            year,
            winner,
        } => {
            let query = MovieQuery::page(page, size).year(year).winner(winner);
            runtime.block_on(handlers::movies::handle(&client, &query, cli.format))
        }

        Commands::Winners { year } => {
            runtime.block_on(handlers::winners::handle(&client, year, cli.format))
        }

        Commands::Tui => handlers::tui::handle(&runtime, client),
    }
}

fn show_guidance() {
    println!("razzie - Golden Raspberry award statistics\n");
    println!("Quick commands:");
    println!("  razzie tui                        # Interactive dashboard");
    println!("  razzie dashboard                  # Dashboard tables");
    println!("  razzie movies --page 0 --size 10  # Browse the movie list");
    println!("  razzie winners --year 1990        # Winners of one year\n");
    println!("For more commands:");
    println!("  razzie --help");
}
