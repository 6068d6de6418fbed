//! CLI administration tool for the booking service.
//!
//! Planets have no HTTP create or delete endpoint; their lifecycle is
//! managed here, against the store directly. Deletions cascade to the
//! affected missions.
//!
//! # Usage
//!
//! ```bash
//! # Seed a planet
//! cargo run --bin admin -- planet create --name Mars --description "The red planet"
//!
//! # List planets / scientists
//! cargo run --bin admin -- planet list
//! cargo run --bin admin -- scientist list
//!
//! # Delete a planet (cascades its missions)
//! cargo run --bin admin -- planet delete 3
//!
//! # Check database connection
//! cargo run --bin admin -- db check
//! ```
//!
//! # Environment Variables
//!
//! - `DATABASE_URL` (optional): SQLite connection string, defaults to the
//!   local file-backed store

use interplanetary_booking::application::services::{PlanetService, ScientistService};
use interplanetary_booking::config::DEFAULT_DATABASE_URL;
use interplanetary_booking::domain::entities::NewPlanet;
use interplanetary_booking::infrastructure::persistence::{
    SqliteMissionRepository, SqlitePlanetRepository, SqliteScientistRepository,
};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use dialoguer::{Confirm, Input};
use sqlx::sqlite::SqliteConnectOptions;
use sqlx::SqlitePool;
use std::str::FromStr;
use std::sync::Arc;

/// CLI tool for managing the booking service.
#[derive(Parser)]
#[command(name = "admin")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Top-level command groups.
#[derive(Subcommand)]
enum Commands {
    /// Manage planets
    Planet {
        #[command(subcommand)]
        action: PlanetAction,
    },

    /// Manage scientists
    Scientist {
        #[command(subcommand)]
        action: ScientistAction,
    },

    /// Database operations
    Db {
        #[command(subcommand)]
        action: DbAction,
    },
}

/// Planet management subcommands.
#[derive(Subcommand)]
enum PlanetAction {
    /// Seed a new planet
    Create {
        /// Planet name (unique)
        #[arg(short, long)]
        name: Option<String>,

        /// Planet description
        #[arg(short, long)]
        description: Option<String>,
    },

    /// List all planets
    List,

    /// Delete a planet and, by cascade, its missions
    Delete {
        /// Planet id to delete
        id: i64,

        /// Skip confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,
    },

    /// Show the scientists booked onto a planet's missions
    Scientists {
        /// Planet id
        id: i64,
    },
}

/// Scientist management subcommands.
#[derive(Subcommand)]
enum ScientistAction {
    /// List all scientists
    List,

    /// Delete a scientist and, by cascade, their missions
    Delete {
        /// Scientist id to delete
        id: i64,

        /// Skip confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,
    },

    /// Show the planets a scientist is booked onto
    Planets {
        /// Scientist id
        id: i64,
    },
}

/// Database operation subcommands.
#[derive(Subcommand)]
enum DbAction {
    /// Check database connection
    Check,

    /// Show row counts
    Info,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let database_url =
        std::env::var("DATABASE_URL").unwrap_or_else(|_| DEFAULT_DATABASE_URL.to_string());

    let options = SqliteConnectOptions::from_str(&database_url)
        .context("Invalid DATABASE_URL")?
        .create_if_missing(true);

    let pool = SqlitePool::connect_with(options)
        .await
        .context("Failed to connect to database")?;

    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .context("Failed to migrate")?;

    match cli.command {
        Commands::Planet { action } => handle_planet_action(action, &pool).await?,
        Commands::Scientist { action } => handle_scientist_action(action, &pool).await?,
        Commands::Db { action } => handle_db_action(action, &pool).await?,
    }

    Ok(())
}

/// Dispatches planet management commands.
async fn handle_planet_action(action: PlanetAction, pool: &SqlitePool) -> Result<()> {
    let pool = Arc::new(pool.clone());
    let planet_repository = Arc::new(SqlitePlanetRepository::new(pool.clone()));
    let mission_repository = Arc::new(SqliteMissionRepository::new(pool));
    let service = PlanetService::new(planet_repository, mission_repository);

    match action {
        PlanetAction::Create { name, description } => {
            let name = match name {
                Some(n) => n,
                None => Input::new().with_prompt("Planet name").interact_text()?,
            };
            let description = match description {
                Some(d) => d,
                None => Input::new().with_prompt("Description").interact_text()?,
            };

            let planet = service
                .create_planet(NewPlanet { name, description })
                .await
                .map_err(|e| anyhow::anyhow!("Failed to create planet: {:?}", e))?;

            println!(
                "{} planet {} (id {})",
                "Created".green().bold(),
                planet.name.cyan(),
                planet.id
            );
        }
        PlanetAction::List => {
            let planets = service
                .list_planets()
                .await
                .map_err(|e| anyhow::anyhow!("Failed to list planets: {:?}", e))?;

            if planets.is_empty() {
                println!("{}", "No planets found".yellow());
                return Ok(());
            }

            for p in planets {
                println!(
                    "{:>4}  {}  {} ({} missions)",
                    p.planet.id,
                    p.planet.name.cyan().bold(),
                    p.planet.description,
                    p.missions.len()
                );
            }
        }
        PlanetAction::Delete { id, yes } => {
            if !yes {
                let confirmed = Confirm::new()
                    .with_prompt(format!(
                        "Delete planet {id} and all of its missions?"
                    ))
                    .default(false)
                    .interact()?;
                if !confirmed {
                    println!("{}", "Aborted".yellow());
                    return Ok(());
                }
            }

            service
                .delete_planet(id)
                .await
                .map_err(|e| anyhow::anyhow!("Failed to delete planet: {:?}", e))?;

            println!("{} planet {}", "Deleted".green().bold(), id);
        }
        PlanetAction::Scientists { id } => {
            let scientists = service
                .scientists_for_planet(id)
                .await
                .map_err(|e| anyhow::anyhow!("Failed to list scientists: {:?}", e))?;

            if scientists.is_empty() {
                println!("{}", "No scientists booked".yellow());
                return Ok(());
            }

            for s in scientists {
                println!("{:>4}  {}  {}", s.id, s.name.cyan().bold(), s.field_of_study);
            }
        }
    }

    Ok(())
}

/// Dispatches scientist management commands.
async fn handle_scientist_action(action: ScientistAction, pool: &SqlitePool) -> Result<()> {
    let pool = Arc::new(pool.clone());
    let scientist_repository = Arc::new(SqliteScientistRepository::new(pool.clone()));
    let mission_repository = Arc::new(SqliteMissionRepository::new(pool));
    let service = ScientistService::new(scientist_repository, mission_repository);

    match action {
        ScientistAction::List => {
            let scientists = service
                .list_scientists()
                .await
                .map_err(|e| anyhow::anyhow!("Failed to list scientists: {:?}", e))?;

            if scientists.is_empty() {
                println!("{}", "No scientists found".yellow());
                return Ok(());
            }

            for s in scientists {
                println!(
                    "{:>4}  {}  {} ({} missions)",
                    s.scientist.id,
                    s.scientist.name.cyan().bold(),
                    s.scientist.field_of_study,
                    s.missions.len()
                );
            }
        }
        ScientistAction::Delete { id, yes } => {
            if !yes {
                let confirmed = Confirm::new()
                    .with_prompt(format!(
                        "Delete scientist {id} and all of their missions?"
                    ))
                    .default(false)
                    .interact()?;
                if !confirmed {
                    println!("{}", "Aborted".yellow());
                    return Ok(());
                }
            }

            service
                .delete_scientist(id)
                .await
                .map_err(|e| anyhow::anyhow!("Failed to delete scientist: {:?}", e))?;

            println!("{} scientist {}", "Deleted".green().bold(), id);
        }
        ScientistAction::Planets { id } => {
            let planets = service
                .planets_for_scientist(id)
                .await
                .map_err(|e| anyhow::anyhow!("Failed to list planets: {:?}", e))?;

            if planets.is_empty() {
                println!("{}", "No planets booked".yellow());
                return Ok(());
            }

            for p in planets {
                println!("{:>4}  {}  {}", p.id, p.name.cyan().bold(), p.description);
            }
        }
    }

    Ok(())
}

/// Dispatches database commands.
async fn handle_db_action(action: DbAction, pool: &SqlitePool) -> Result<()> {
    match action {
        DbAction::Check => {
            sqlx::query_scalar::<_, i64>("SELECT 1")
                .fetch_one(pool)
                .await
                .context("Database check failed")?;
            println!("{}", "Database connection OK".green().bold());
        }
        DbAction::Info => {
            let planets: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM planets")
                .fetch_one(pool)
                .await?;
            let scientists: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM scientists")
                .fetch_one(pool)
                .await?;
            let missions: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM missions")
                .fetch_one(pool)
                .await?;

            println!("{}", "Database info:".bold());
            println!("  planets:    {planets}");
            println!("  scientists: {scientists}");
            println!("  missions:   {missions}");
        }
    }

    Ok(())
}
