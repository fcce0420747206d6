//! CLI administration tool for the recommendations service.
//!
//! Manages recommendations and inspects the database without going through
//! the HTTP API.
//!
//! # Usage
//!
//! ```bash
//! # List recommendations, optionally filtered
//! cargo run --bin admin -- rec list --product-a-sku AA0001 --type UP_SELL
//!
//! # Add a recommendation
//! cargo run --bin admin -- rec add --product-a-sku AA0001 --product-b-sku AA0002 --type CROSS_SELL
//!
//! # Remove a recommendation
//! cargo run --bin admin -- rec remove 42
//!
//! # Per-type counts
//! cargo run --bin admin -- stats
//!
//! # Check database connection
//! cargo run --bin admin -- db check
//! ```
//!
//! # Environment Variables
//!
//! - `DATABASE_URL` (required): PostgreSQL connection string

use recommendations::application::services::RecommendationService;
use recommendations::domain::entities::{Recommendation, RecommendationType};
use recommendations::domain::repositories::RecommendationFilter;
use recommendations::infrastructure::persistence::PgRecommendationRepository;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use dialoguer::Confirm;
use sqlx::PgPool;
use std::sync::Arc;

type Service = RecommendationService<PgRecommendationRepository>;

/// CLI tool for managing recommendations.
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
    /// Manage recommendations
    Rec {
        #[command(subcommand)]
        action: RecAction,
    },

    /// Show per-type statistics
    Stats,

    /// Database operations
    Db {
        #[command(subcommand)]
        action: DbAction,
    },
}

/// Recommendation management subcommands.
#[derive(Subcommand)]
enum RecAction {
    /// List recommendations
    List {
        /// Only recommendations for this source product
        #[arg(long)]
        product_a_sku: Option<String>,

        /// Only recommendations suggesting this product
        #[arg(long)]
        product_b_sku: Option<String>,

        /// Only this type (UP_SELL, CROSS_SELL, ACCESSORY, BUNDLE)
        #[arg(long = "type")]
        recommendation_type: Option<RecommendationType>,
    },

    /// Add a recommendation
    Add {
        #[arg(long)]
        product_a_sku: String,

        #[arg(long)]
        product_b_sku: String,

        /// UP_SELL, CROSS_SELL, ACCESSORY or BUNDLE
        #[arg(long = "type")]
        recommendation_type: RecommendationType,
    },

    /// Remove a recommendation by id
    Remove {
        id: i64,

        /// Skip confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,
    },
}

/// Database operation subcommands.
#[derive(Subcommand)]
enum DbAction {
    /// Check database connection
    Check,

    /// Show database info
    Info,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let database_url = std::env::var("DATABASE_URL").context("DATABASE_URL must be set")?;

    let pool = PgPool::connect(&database_url)
        .await
        .context("Failed to connect to database")?;

    let service = RecommendationService::new(Arc::new(PgRecommendationRepository::new(
        Arc::new(pool.clone()),
    )));

    match cli.command {
        Commands::Rec { action } => handle_rec_action(action, &service).await?,
        Commands::Stats => handle_stats(&service).await?,
        Commands::Db { action } => handle_db_action(action, &pool).await?,
    }

    Ok(())
}

/// Dispatches recommendation management commands.
async fn handle_rec_action(action: RecAction, service: &Service) -> Result<()> {
    match action {
        RecAction::List {
            product_a_sku,
            product_b_sku,
            recommendation_type,
        } => {
            let filter = RecommendationFilter {
                product_a_sku,
                product_b_sku,
                recommendation_type,
            };
            list_recommendations(service, filter).await?;
        }
        RecAction::Add {
            product_a_sku,
            product_b_sku,
            recommendation_type,
        } => {
            let recommendation =
                Recommendation::new(product_a_sku, product_b_sku, recommendation_type);
            let created = service
                .create(recommendation)
                .await
                .map_err(|e| anyhow::anyhow!("Failed to create recommendation: {}", e))?;

            println!("{} {}", "Created".green().bold(), created.to_string().cyan());
        }
        RecAction::Remove { id, yes } => {
            remove_recommendation(service, id, yes).await?;
        }
    }

    Ok(())
}

/// Lists recommendations as a table.
///
/// # Output Format
///
/// ```text
/// Recommendations
///
///   ID     Product A            Product B            Type
///   ──────────────────────────────────────────────────────────────
///   1      AA0001               AA0002               UP_SELL
/// ```
async fn list_recommendations(service: &Service, filter: RecommendationFilter) -> Result<()> {
    println!("{}", "Recommendations".bright_blue().bold());
    println!();

    let recommendations = service
        .list(filter)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to list recommendations: {}", e))?;

    if recommendations.is_empty() {
        println!("{}", "  No recommendations found".yellow());
        return Ok(());
    }

    println!(
        "  {:<6} {:<20} {:<20} {:<12}",
        "ID".bright_white().bold(),
        "Product A".bright_white().bold(),
        "Product B".bright_white().bold(),
        "Type".bright_white().bold()
    );
    println!("  {}", "─".repeat(62).bright_black());

    for rec in &recommendations {
        let id = rec.id.map(|id| id.to_string()).unwrap_or_default();
        println!(
            "  {:<6} {:<20} {:<20} {}",
            id.bright_black(),
            rec.product_a_sku.cyan(),
            rec.product_b_sku.cyan(),
            rec.recommendation_type.as_str().green()
        );
    }

    println!();
    println!(
        "  Total: {}",
        recommendations.len().to_string().bright_white().bold()
    );
    println!();

    Ok(())
}

/// Removes a recommendation after showing it and asking for confirmation.
async fn remove_recommendation(service: &Service, id: i64, skip_confirm: bool) -> Result<()> {
    let recommendation = service
        .find(id)
        .await
        .map_err(|e| anyhow::anyhow!("Database error: {}", e))?
        .context("Recommendation not found")?;

    println!("  Recommendation: {}", recommendation.to_string().cyan());
    println!();

    if !skip_confirm {
        let confirmed = Confirm::new()
            .with_prompt("Remove this recommendation?")
            .default(false)
            .interact()?;

        if !confirmed {
            println!("{}", "Cancelled".red());
            return Ok(());
        }
    }

    service
        .delete(id)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to remove recommendation: {}", e))?;

    println!("{}", "Recommendation removed".green().bold());

    Ok(())
}

/// Displays the total and per-type recommendation counts.
async fn handle_stats(service: &Service) -> Result<()> {
    println!("{}", "Statistics".bright_blue().bold());
    println!();

    let total = service
        .count()
        .await
        .map_err(|e| anyhow::anyhow!("Failed to count recommendations: {}", e))?;

    println!("  {:<12} {}", "Total:", total.to_string().bright_green().bold());

    for recommendation_type in RecommendationType::ALL {
        let matching = service
            .list(RecommendationFilter::new().with_type(recommendation_type))
            .await
            .map_err(|e| anyhow::anyhow!("Failed to list recommendations: {}", e))?;

        println!(
            "  {:<12} {}",
            format!("{}:", recommendation_type),
            matching.len().to_string().bright_green()
        );
    }
    println!();

    Ok(())
}

/// Handles database diagnostic commands.
async fn handle_db_action(action: DbAction, pool: &PgPool) -> Result<()> {
    match action {
        DbAction::Check => {
            println!("{}", "Checking database connection...".bright_blue());

            sqlx::query("SELECT 1").fetch_one(pool).await?;

            println!("{}", "Database connection OK".green().bold());
        }
        DbAction::Info => {
            println!("{}", "Database Information".bright_blue().bold());
            println!();

            let version: String = sqlx::query_scalar("SELECT version()")
                .fetch_one(pool)
                .await?;

            println!("  PostgreSQL: {}", version.bright_white());
            println!();
        }
    }

    Ok(())
}
