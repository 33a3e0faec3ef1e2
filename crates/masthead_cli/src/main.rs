//! CLI smoke entry point.
//!
//! # Responsibility
//! - Verify `masthead_core` linkage by building a small catalog in the
//!   process-wide registry and printing its query results.
//! - `--json` prints the catalog snapshot instead of the text report.
//!
//! Set `MASTHEAD_LOG_DIR` (absolute) to enable file logging; the level comes
//! from `MASTHEAD_LOG_LEVEL` or the build-mode default.

use log::error;
use masthead_core::{
    core_version, default_log_level, init_logging, with_global_catalog, Catalog, CatalogResult,
};
use std::process::ExitCode;

const LOG_DIR_ENV: &str = "MASTHEAD_LOG_DIR";
const LOG_LEVEL_ENV: &str = "MASTHEAD_LOG_LEVEL";

fn main() -> ExitCode {
    if let Ok(log_dir) = std::env::var(LOG_DIR_ENV) {
        let level = std::env::var(LOG_LEVEL_ENV)
            .unwrap_or_else(|_| default_log_level().as_str().to_string());
        if let Err(err) = init_logging(&level, &log_dir) {
            eprintln!("masthead logging disabled: {err}");
        }
    }

    let as_json = std::env::args().skip(1).any(|arg| arg == "--json");

    let output = with_global_catalog(|catalog| -> CatalogResult<String> {
        seed_demo(catalog)?;
        if as_json {
            Ok(serde_json::to_string_pretty(&catalog.snapshot())
                .unwrap_or_else(|err| format!("{{\"error\":\"{err}\"}}")))
        } else {
            Ok(render_report(catalog))
        }
    });

    match output {
        Ok(text) => {
            println!("{text}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            error!("event=cli_seed module=cli status=error error_code={}", err.code());
            eprintln!("masthead: {err}");
            ExitCode::FAILURE
        }
    }
}

fn seed_demo(catalog: &mut Catalog) -> CatalogResult<()> {
    let ada = catalog.create_author("Ada")?;
    let grace = catalog.create_author("Grace")?;
    let tech = catalog.create_magazine("Tech Weekly", "Technology")?;
    let arts = catalog.create_magazine("Arts Daily", "Art")?;

    for title in [
        "Notes on the Engine",
        "Bernoulli by Machine",
        "Poetical Science",
    ] {
        catalog.create_article(ada, tech, title)?;
    }
    catalog.create_article(grace, tech, "Compilers for Everyone")?;
    catalog.create_article(grace, arts, "Nanoseconds of Wire")?;
    Ok(())
}

fn render_report(catalog: &Catalog) -> String {
    let mut lines = vec![format!("masthead_core version={}", core_version())];

    for author in catalog.authors() {
        let magazines: Vec<_> = author.magazines().iter().map(|m| m.name()).collect();
        let topics = author
            .topic_areas()
            .map(|topics| topics.into_iter().collect::<Vec<_>>().join(", "))
            .unwrap_or_else(|| "none".to_string());
        lines.push(format!(
            "author {}: magazines=[{}] topics=[{}]",
            author.name(),
            magazines.join(", "),
            topics
        ));
    }

    for magazine in catalog.magazines() {
        let contributing = magazine
            .contributing_authors()
            .map(|authors| {
                authors
                    .iter()
                    .map(|author| author.name())
                    .collect::<Vec<_>>()
                    .join(", ")
            })
            .unwrap_or_else(|| "none".to_string());
        lines.push(format!(
            "magazine {} ({}): articles={} contributing=[{}]",
            magazine.name(),
            magazine.category(),
            magazine.article_count(),
            contributing
        ));
    }

    let top = catalog
        .top_publisher()
        .map(|magazine| magazine.name())
        .unwrap_or("none");
    lines.push(format!("top publisher: {top}"));
    lines.join("\n")
}
