use anyhow::Result;
use async_trait::async_trait;
use surrealdb::{Surreal, engine::any::Any};

/// The one capability the seeder needs from the database: append a new
/// document with the given field set to a named collection. The store
/// assigns each document its own id; callers never see it.
#[async_trait]
pub trait DocumentStore: Send + Sync {
	async fn add_document(&self, collection: &str, fields: serde_json::Value) -> Result<()>;
}

pub struct SurrealStore {
	db: Surreal<Any>,
}

impl SurrealStore {
	pub fn new(db: Surreal<Any>) -> Self {
		Self { db }
	}
}

#[async_trait]
impl DocumentStore for SurrealStore {
	async fn add_document(&self, collection: &str, fields: serde_json::Value) -> Result<()> {
		self.db
			.query(format!("CREATE {} CONTENT $fields;", collection))
			.bind(("fields", fields))
			.await?
			.check()?;
		Ok(())
	}
}
