//! Dune Character Explorer, terminal edition
//!
//! Renders the same dashboard as the desktop app to stdout.

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use explorer::charts::CategoryCount;
use explorer::{render_dashboard, Dataset, DashboardView, ExplorerConfig, FilterSet};

#[derive(Parser)]
#[command(name = "dune-explorer")]
#[command(about = "Explore the Dune character table from the terminal", long_about = None)]
struct Cli {
    /// Character table (defaults to $DUNE_EXPLORER_DATA or data/duneCharacters.csv)
    #[arg(long)]
    data: Option<PathBuf>,

    /// Timeline event table
    #[arg(long)]
    events: Option<PathBuf>,

    #[arg(long)]
    book: Option<String>,

    #[arg(long)]
    house: Option<String>,

    #[arg(long)]
    relationship: Option<String>,

    /// Character to show in the detail panel
    #[arg(long)]
    character: Option<String>,

    /// Maximum relationship edges in the graph
    #[arg(long)]
    edge_cap: Option<usize>,

    /// Seed for sampling relationship edges
    #[arg(long)]
    seed: Option<u64>,

    /// Print the dashboard as JSON
    #[arg(long)]
    json: bool,

    #[arg(long, short)]
    verbose: bool,
}

impl Cli {
    fn config(&self) -> ExplorerConfig {
        let mut config = ExplorerConfig::from_env();
        if let Some(path) = &self.data {
            config.data_path = path.clone();
        }
        if let Some(path) = &self.events {
            config.events_path = path.clone();
        }
        if let Some(cap) = self.edge_cap {
            config.edge_cap = cap;
        }
        if let Some(seed) = self.seed {
            config.sample_seed = seed;
        }
        config
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let subscriber = FmtSubscriber::builder()
        .with_max_level(if cli.verbose { Level::DEBUG } else { Level::INFO })
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let config = cli.config();
    info!("Dune Character Explorer starting...");

    let dataset = Dataset::load(&config)
        .with_context(|| format!("cannot render the dashboard without {}", config.data_path.display()))?;

    let filters = FilterSet::from_labels(
        cli.book.as_deref(),
        cli.house.as_deref(),
        cli.relationship.as_deref(),
    );
    let view = render_dashboard(&dataset, &filters, cli.character.as_deref(), &config);

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&view)?);
    } else {
        print_dashboard(&view);
    }

    Ok(())
}

fn print_dashboard(view: &DashboardView) {
    let s = &view.summary;
    println!("=== Dune Character Explorer ===");
    println!(
        "Characters: {}  Houses: {}  Cultures: {}  Books: {}",
        s.total_characters, s.unique_houses, s.unique_cultures, s.books
    );
    println!(
        "Filters: book={} house={} relationship={} ({} rows)",
        view.filters.book.label(),
        view.filters.house.label(),
        view.filters.relationship.label(),
        view.matching_rows
    );

    print_bars("Number of Characters per House", &view.house_counts);
    print_bars("Top Cultures by Number of Characters", &view.culture_counts);

    println!("\n--- Lifespans ---");
    for bar in &view.timeline.bars {
        println!("{:<28} {:>6} - {:<6} ({} years)", bar.name, bar.born, bar.died, bar.lifespan);
    }
    for event in &view.timeline.events {
        println!("  * {} AG: {}", event.year, event.label);
    }

    let graph = &view.graph;
    println!(
        "\n--- Relationships ({} of {} edges{}) ---",
        graph.edges.len(),
        graph.total_edges,
        if graph.sampled { ", sampled" } else { "" }
    );
    for edge in &graph.edges {
        println!(
            "{} -[{}]-> {}",
            edge.source,
            edge.relationship.as_deref().unwrap_or("related"),
            edge.target
        );
    }

    println!("\n--- Character Explorer ---");
    match &view.selected {
        Some(detail) => {
            println!("Name:        {}", detail.name);
            println!("House:       {}", detail.house);
            println!("Culture:     {}", detail.culture.as_deref().unwrap_or(""));
            println!("Book:        {}", detail.book.as_deref().unwrap_or(""));
            println!("Born:        {}", year_text(detail.born));
            println!("Died:        {}", year_text(detail.died));
            if let Some(lifespan) = detail.lifespan {
                println!("Lifespan:    {} years", lifespan);
            }
            println!("Description: {}", detail.description.as_deref().unwrap_or(""));
            if let Some(url) = &detail.url {
                println!("Wiki link:   {}", url);
            }
        }
        None => println!("No characters match the current filters."),
    }
}

fn print_bars(title: &str, counts: &[CategoryCount]) {
    println!("\n--- {} ---", title);
    let widest = counts.iter().map(|c| c.count).max().unwrap_or(0).max(1);
    for c in counts {
        let width = c.count * 40 / widest;
        println!("{:<28} {:>4} {}", c.label, c.count, "#".repeat(width.max(1)));
    }
}

fn year_text(year: Option<i32>) -> String {
    year.map(|y| format!("{} AG", y)).unwrap_or_default()
}
