use anyhow::{bail, Result};
use carenest_guidelines::config::Config;
use carenest_guidelines::i18n::{ContentValidator, LanguageRegistry};
use carenest_guidelines::server;
use tracing::{error, info, warn};

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file (ignored in production)
    let _ = dotenvy::dotenv();

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("carenest_guidelines=info".parse()?),
        )
        .init();

    info!("Starting CareNest guidelines service");

    // Load configuration from environment
    let config = Config::from_env()?;
    info!(
        "Fallback policy: {:?}, metrics protected: {}",
        config.fallback_policy,
        config.api_key.is_some()
    );

    // Refuse to serve malformed content
    let registry = LanguageRegistry::get();
    let mut invalid = 0;
    for (code, report) in ContentValidator::validate_registry(registry) {
        for warning in &report.warnings {
            warn!("[{}] {}", code, warning);
        }
        for err in &report.errors {
            error!("[{}] {}", code, err);
        }
        if report.has_errors() {
            invalid += 1;
        }
    }
    if invalid > 0 {
        bail!("{} language(s) failed content validation", invalid);
    }

    info!("✓ Loaded guidelines for: {}", registry.codes().join(", "));

    server::serve(config).await
}
