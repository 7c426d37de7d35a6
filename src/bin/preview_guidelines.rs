//! Preview binary - prints the guidelines for a language to stdout
//!
//! Usage:
//!   cargo run --bin preview                # English, as stored
//!   cargo run --bin preview -- hi          # Hindi, as stored
//!   cargo run --bin preview -- hi --plain  # Hindi, emphasis markers removed
//!   cargo run --bin preview -- en --items  # One numbered item per line
//!
//! Optional:
//! - FALLBACK_POLICY (strict|default, defaults to default)

use anyhow::{bail, Context, Result};
use carenest_guidelines::config::Config;
use carenest_guidelines::i18n::LocalizedContentStore;
use carenest_guidelines::markup::{guideline_items, OutputFormat};
use tracing::{info, warn};

enum Mode {
    Text(OutputFormat),
    Items,
}

fn main() -> Result<()> {
    // Load .env file
    let _ = dotenvy::dotenv();

    // Initialize logging (stderr, so stdout stays clean for the content)
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("preview=info".parse()?)
                .add_directive("carenest_guidelines=warn".parse()?),
        )
        .init();

    let mut lang = "en".to_string();
    let mut mode = Mode::Text(OutputFormat::Markdown);
    for arg in std::env::args().skip(1) {
        match arg.as_str() {
            "--plain" => mode = Mode::Text(OutputFormat::Plain),
            "--items" => mode = Mode::Items,
            flag if flag.starts_with("--") => bail!("Unknown flag: {}", flag),
            code => lang = code.to_string(),
        }
    }

    let config = Config::from_env()?;
    let lookup = LocalizedContentStore::global()
        .lookup(&lang, config.fallback_policy)
        .with_context(|| format!("No guidelines for '{}'", lang))?;

    if lookup.fell_back {
        warn!("'{}' is not configured, showing {}", lang, lookup.language);
    } else {
        info!("Showing guidelines for {} ({})", lookup.language.name(), lookup.language);
    }

    match mode {
        Mode::Text(format) => println!("{}", format.render(lookup.guidelines)),
        Mode::Items => {
            for item in guideline_items(lookup.guidelines) {
                println!("{}\t{}", item.number, item.text);
            }
        }
    }

    Ok(())
}
