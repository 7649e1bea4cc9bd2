use airwings_catalog::utils::{logger, validation::Validate};
use airwings_catalog::{
    ApiClient, CatalogConfig, CatalogSnapshot, CatalogView, CliConfig, FallbackCatalog, QueryKey,
};
use anyhow::Context;
use clap::Parser;
use std::time::Duration;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    logger::init_cli_logger(cli.verbose);

    let config = cli.resolve_config().context("failed to load configuration")?;
    if cli.verbose {
        tracing::debug!(?config, "resolved configuration");
    }
    config.validate().context("invalid configuration")?;

    let client = ApiClient::new(&config)?;
    let mut view = CatalogView::new(client, FallbackCatalog::bundled().into_packages());
    view.set_criteria(cli.criteria());

    let key = if cli.featured {
        QueryKey::Featured
    } else {
        QueryKey::All
    };

    let snapshot = view.refresh(key).await;
    print_snapshot(&snapshot, &config);

    if cli.watch {
        tracing::info!(interval = config.poll_seconds, "watching for catalog changes");
        let mut interval = tokio::time::interval(Duration::from_secs(config.poll_seconds));
        // The first tick fires immediately and the refresh above covered it.
        interval.tick().await;

        loop {
            interval.tick().await;
            let snapshot = view.refresh(key).await;
            print_snapshot(&snapshot, &config);
        }
    }

    Ok(())
}

fn print_snapshot(snapshot: &CatalogSnapshot, config: &CatalogConfig) {
    if snapshot.using_fallback {
        eprintln!("⚠ showing bundled catalog data (API: {})", config.base_url);
        if let Some(error) = &snapshot.last_error {
            eprintln!("  {}", error);
        }
    } else if let Some(error) = &snapshot.last_error {
        // Stale-but-real data retained after a transient failure.
        eprintln!("⚠ refresh failed, showing last known packages: {}", error);
    }

    println!(
        "{} of {} packages",
        snapshot.filtered.len(),
        snapshot.packages.len()
    );
    if !snapshot.countries.is_empty() {
        println!("destinations: {}", snapshot.countries.join(", "));
    }

    for pkg in &snapshot.filtered {
        let tag = pkg.tag.as_deref().unwrap_or("");
        println!(
            "{:<4} {:<30} {:<18} {:<20} {:>7.0} AED  {:.1}★ {}",
            pkg.id, pkg.title, pkg.location, pkg.duration, pkg.price, pkg.rating, tag
        );
    }
}
