mod cli;

use anyhow::{Context, Result};
use chrono::Utc;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use cli::{Cli, Commands};
use helhub::compose::{compose, load_feed_entries};
use helhub::config::load_site_config;
use helhub::loader::{default_dataset_path, load_dataset, write_dataset};

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Check { file } => {
            let file = match file {
                Some(f) => f,
                None => default_dataset_path()?,
            };
            match load_dataset(&file) {
                Ok(ds) => {
                    println!(
                        "{}: OK ({} announcements, {} recent entries, {} cards)",
                        file.display(),
                        ds.announcements().len(),
                        ds.recent_content(None).len(),
                        ds.cards().len()
                    );
                }
                Err(e) => {
                    eprintln!("{}: {}", file.display(), e);
                    std::process::exit(1);
                }
            }
        }
        Commands::Cards { file } => {
            let ds = load_dataset(&file).with_context(|| format!("loading {}", file.display()))?;
            for card in ds.cards() {
                println!(
                    "{:<20} {:<12} {} items",
                    card.id,
                    card.short_title,
                    card.content_items.len()
                );
            }
        }
        Commands::Show { file, id } => {
            let ds = load_dataset(&file).with_context(|| format!("loading {}", file.display()))?;
            let card = ds.card(&id)?;
            println!("{} ({})", card.title, card.id);
            if !card.description.is_empty() {
                println!("  {}", card.description);
            }
            println!("  {}", card.link);
            for item in &card.content_items {
                let marker = if item.fixed() { "*" } else { "-" };
                println!("  {} {} <{}>", marker, item.title, item.url);
            }
        }
        Commands::Recent { file, limit } => {
            let ds = load_dataset(&file).with_context(|| format!("loading {}", file.display()))?;
            for entry in ds.recent_content(limit) {
                println!("[{}] {} <{}>", entry.media, entry.title, entry.url);
            }
        }
        Commands::Announcements { file } => {
            let ds = load_dataset(&file).with_context(|| format!("loading {}", file.display()))?;
            for line in ds.announcements() {
                println!("{line}");
            }
        }
        Commands::Compose { config, content, out } => {
            let site = load_site_config(&config)
                .with_context(|| format!("loading config {}", config.display()))?;
            let entries = load_feed_entries(&content)
                .with_context(|| format!("loading content log {}", content.display()))?;
            let ds = compose(&site, &entries, Utc::now())?;
            write_dataset(&out, &ds).with_context(|| format!("writing {}", out.display()))?;
            println!("wrote {}", out.display());
        }
        Commands::Convert { input, output } => {
            let ds = load_dataset(&input).with_context(|| format!("loading {}", input.display()))?;
            write_dataset(&output, &ds).with_context(|| format!("writing {}", output.display()))?;
            println!("wrote {}", output.display());
        }
    }

    Ok(())
}
