//! Subcommand implementations
//!
//! Every command loads its inputs through [`JsonRepository`], runs one
//! library analysis, and prints the report.

use std::path::Path;

use anyhow::{Context, Result};

use crate::{
    adapters::JsonRepository,
    cli::output::create_spinner,
    policy::{OpeningBook, PolicyDocument},
    ports::PolicyRepository,
};

pub mod analyze;
pub mod book;
pub mod compare;
pub mod decode;
pub mod export;

/// Load a policy document, showing a spinner while it parses.
pub(crate) fn load_policy(path: &Path) -> Result<PolicyDocument> {
    let spinner = create_spinner(&format!("Loading {}", path.display()));
    spinner.enable_steady_tick(std::time::Duration::from_millis(100));
    let document = JsonRepository::new()
        .load_policy(path)
        .with_context(|| format!("failed to load policy from {}", path.display()));
    spinner.finish_and_clear();

    let document = document?;
    log::info!(
        "loaded {} states from {}",
        document.database.len(),
        path.display()
    );
    Ok(document)
}

pub(crate) fn load_opening_book(path: &Path) -> Result<OpeningBook> {
    let book = JsonRepository::new()
        .load_opening_book(path)
        .with_context(|| format!("failed to load opening book from {}", path.display()))?;
    log::info!("loaded {} openings from {}", book.openings.len(), path.display());
    Ok(book)
}
