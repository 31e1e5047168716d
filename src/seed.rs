use anyhow::{Context, Result};

use crate::catalog::{COLLECTION, DESIGN_ITEMS};
use crate::store::DocumentStore;

#[derive(Debug, Clone, Default)]
pub struct SeedOpts {
	pub dry_run: bool,
	pub verbose: bool,
}

/// Push the fixed catalog into the store, one document per entry, in
/// catalog order. Each write is awaited before the next is issued; the
/// first failed write ends the pass and comes back as the error, with
/// documents already written left in place. Returns how many documents
/// were written.
pub async fn seed(store: &impl DocumentStore, opts: SeedOpts) -> Result<usize> {
	let total = DESIGN_ITEMS.len();
	let mut written = 0usize;

	for item in DESIGN_ITEMS {
		if opts.dry_run {
			println!("DRY RUN: would write '{}' to {}", item.name, COLLECTION);
			continue;
		}

		let fields =
			serde_json::to_value(item).with_context(|| format!("serializing '{}'", item.name))?;

		store
			.add_document(COLLECTION, fields)
			.await
			.with_context(|| {
				format!(
					"writing '{}' to {} ({} of {} written)",
					item.name, COLLECTION, written, total
				)
			})?;

		written += 1;
		if opts.verbose {
			println!(
				"wrote '{}' ({} credits, {})",
				item.name, item.credits_per_creative, item.category
			);
		}
	}

	Ok(written)
}
