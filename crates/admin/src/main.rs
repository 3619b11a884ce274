//! Administrative commands for the marquee catalog.
//!
//! Run offline, never alongside a serving API process:
//!
//! ```text
//! marquee-admin initdb                         drop and recreate the schema
//! marquee-admin bootstrap [--dataset NAME]     reset and reseed in one transaction
//! ```

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use marquee_core::seed::DatasetName;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Marquee catalog administration
#[derive(Debug, Parser)]
#[command(name = "marquee-admin")]
#[command(about = "Reset and seed the marquee movie catalog", long_about = None)]
struct Cli {
    /// SQLite database URL
    #[arg(long, env = "DATABASE_URL", default_value = "sqlite:movies.db")]
    database_url: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Drop and create a fresh, empty schema
    Initdb,

    /// Replace the catalog contents with a seed dataset
    Bootstrap {
        /// Dataset to load
        #[arg(long, value_enum, default_value_t = Dataset::Development)]
        dataset: Dataset,
    },
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Dataset {
    /// Evil Dead, its director and five actors
    Development,
    /// Five Sam Raimi movies, Bruce Campbell in all of them
    Filmography,
}

impl From<Dataset> for DatasetName {
    fn from(dataset: Dataset) -> Self {
        match dataset {
            Dataset::Development => DatasetName::Development,
            Dataset::Filmography => DatasetName::Filmography,
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "marquee_admin=info,marquee_db=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();

    let pool = marquee_db::create_pool(&cli.database_url)
        .await
        .with_context(|| format!("Failed to open database {}", cli.database_url))?;
    tracing::info!(url = %cli.database_url, "Database connection pool created");

    match cli.command {
        Commands::Initdb => {
            marquee_db::drop_schema(&pool)
                .await
                .context("Failed to drop schema")?;
            marquee_db::run_migrations(&pool)
                .await
                .context("Failed to create schema")?;
            println!("Initialized default DB");
        }
        Commands::Bootstrap { dataset } => {
            marquee_db::run_migrations(&pool)
                .await
                .context("Failed to run database migrations")?;
            let data = DatasetName::from(dataset).dataset();
            let summary = marquee_db::seed::reset_and_seed(&pool, &data)
                .await
                .context("Failed to seed catalog")?;
            println!(
                "Added dataset: {} directors, {} actors, {} movies, {} cast links, {} guild memberships",
                summary.directors,
                summary.actors,
                summary.movies,
                summary.attachments,
                summary.memberships
            );
        }
    }

    pool.close().await;
    Ok(())
}
