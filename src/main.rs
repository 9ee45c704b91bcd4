use tracing_subscriber::EnvFilter;

use nextgene::{config, data, eval, ActionCatalog};

fn main() {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config::default_log_filter())),
        )
        .init();

    tracing::info!("NextGene evaluation starting v{}", config::APP_VERSION);

    let catalog = ActionCatalog::bundled();
    let vignettes = data::vignettes::bundled();

    match eval::run_evaluation(&vignettes, &catalog) {
        Ok(report) => println!("{}", report.render()),
        Err(e) => {
            // Only reachable on a catalog/engine mismatch; a bug, not input.
            tracing::error!("evaluation failed: {e}");
            std::process::exit(1);
        }
    }
}
