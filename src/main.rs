use clap::{Parser, Subcommand};
use rust_dotenv::dotenv::DotEnv;
use surrealdb::{Surreal, engine::any::Any};

mod catalog;
mod config;
mod seed;
mod store;

use config::{DbCfg, connect};
use seed::SeedOpts;
use store::SurrealStore;

#[derive(Parser, Debug)]
#[command(version, about = "DesignKit CLI")]
pub struct Cli {
	/// Print each catalog item as it is written
	#[arg(short, long, global = true)]
	verbose: bool,

	#[command(subcommand)]
	command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
	Seed {
		#[arg(long)]
		dry_run: bool,
	},
}

fn load_env() -> DotEnv {
	// Load .env in CWD if present, ignore missing
	DotEnv::new("")
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
	let args = Cli::parse();
	let env = load_env();

	match args.command {
		Commands::Seed { dry_run } => {
			let db = connect_from_env(&env).await?;
			let store = SurrealStore::new(db);
			let opts = SeedOpts {
				dry_run,
				verbose: args.verbose,
			};

			match seed::seed(&store, opts).await {
				Ok(_) if dry_run => {
					println!(
						"DRY RUN: {} design items would be written to {}",
						catalog::DESIGN_ITEMS.len(),
						catalog::COLLECTION
					);
				}
				Ok(written) => {
					println!("seeded {} design items into {}", written, catalog::COLLECTION);
				}
				Err(err) => {
					eprintln!("failed to seed design items: {err:#}");
					return Err(err.into());
				}
			}
		}
	}

	Ok(())
}

async fn connect_from_env(env: &DotEnv) -> anyhow::Result<Surreal<Any>> {
	let cfg = DbCfg::from_env(env)?;
	connect(&cfg).await
}
