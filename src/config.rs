use anyhow::{Context, Result};
use rust_dotenv::dotenv::DotEnv;
use surrealdb::{
	Surreal,
	engine::any::Any,
	opt::{Config, auth::Root, capabilities::Capabilities},
};

#[derive(Debug, Clone)]
pub struct DbCfg {
	host: String,
	ns: String,
	db: String,
	user: String,
	pass: String,
}

impl DbCfg {
	pub fn from_env(env: &DotEnv) -> Result<Self> {
		let host = env
			.get_var("DATABASE_HOST".to_string())
			.unwrap_or(String::from("http://localhost:8000"));

		let ns = env
			.get_var("DATABASE_NAMESPACE".to_string())
			.unwrap_or(String::from("app"));

		let db = env
			.get_var("DATABASE_NAME".to_string())
			.unwrap_or(String::from("design"));

		let user = env
			.get_var("DATABASE_USER".to_string())
			.unwrap_or(String::from("root"));

		let pass = env
			.get_var("DATABASE_PASSWORD".to_string())
			.unwrap_or(String::from("root"));

		Ok(Self {
			host,
			ns,
			db,
			user,
			pass,
		})
	}
}

pub async fn connect(cfg: &DbCfg) -> Result<Surreal<Any>> {
	let db = create_client(&cfg.host)
		.await
		.with_context(|| format!("connecting to {}", cfg.host))?;

	db.signin(Root {
		username: cfg.user.to_string(),
		password: cfg.pass.to_string(),
	})
	.await
	.context("signin failed")?;

	db.use_ns(&cfg.ns)
		.use_db(&cfg.db)
		.await
		.with_context(|| format!("selecting ns={} db={}", cfg.ns, cfg.db))?;

	Ok(db)
}

async fn create_client(address: &str) -> Result<Surreal<Any>, surrealdb::Error> {
	let config = Config::new().capabilities(Capabilities::all());
	surrealdb::engine::any::connect((address, config)).await
}
