//! Expense CLI
//!
//! Command-line interface for the expense tracker API.

use anyhow::Result;
use chrono::{DateTime, Utc};
use clap::{Args, Parser, Subcommand};

use expense_client::ExpenseClient;
use expense_types::{CategoryId, ExpenditureId, ExpenditureRequest};

#[derive(Parser)]
#[command(name = "expense")]
#[command(author, version, about = "Expense tracker CLI client", long_about = None)]
struct Cli {
    /// Base URL of the expense tracker API
    #[arg(long, env = "EXPENSE_API_URL", default_value = "http://localhost:8080")]
    api_url: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Expenditure operations
    Expenditure {
        #[command(subcommand)]
        action: ExpenditureCommands,
    },
    /// Category operations (read-only)
    Category {
        #[command(subcommand)]
        action: CategoryCommands,
    },
    /// Check API health
    Health,
}

#[derive(Subcommand)]
enum ExpenditureCommands {
    /// Record a new expenditure
    Add(ExpenditureFields),
    /// Get an expenditure
    Get {
        /// Expenditure ID (UUID)
        id: String,
    },
    /// List all expenditures
    List,
    /// Replace every field of an expenditure
    Update {
        /// Expenditure ID (UUID)
        id: String,
        #[command(flatten)]
        fields: ExpenditureFields,
    },
    /// Delete an expenditure
    Delete {
        /// Expenditure ID (UUID)
        id: String,
    },
}

#[derive(Args)]
struct ExpenditureFields {
    /// What the money was spent on
    #[arg(long)]
    description: String,
    /// Amount spent
    #[arg(long, allow_negative_numbers = true)]
    amount: f64,
    /// When it was spent (RFC 3339); defaults to now
    #[arg(long)]
    date: Option<DateTime<Utc>>,
    /// Category ID (UUID)
    #[arg(long)]
    category: Option<String>,
}

impl ExpenditureFields {
    fn into_request(self) -> Result<ExpenditureRequest> {
        let category_id = self
            .category
            .map(|c| {
                c.parse::<CategoryId>()
                    .map_err(|_| anyhow::anyhow!("Invalid category ID: {}", c))
            })
            .transpose()?;

        Ok(ExpenditureRequest {
            description: self.description,
            amount: self.amount,
            date: self.date.unwrap_or_else(Utc::now),
            category_id,
        })
    }
}

#[derive(Subcommand)]
enum CategoryCommands {
    /// List all categories
    List,
    /// Get a category
    Get {
        /// Category ID (UUID)
        id: String,
    },
}

fn parse_expenditure_id(s: &str) -> Result<ExpenditureId> {
    s.parse()
        .map_err(|_| anyhow::anyhow!("Invalid expenditure ID: {}", s))
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let client = ExpenseClient::new(&cli.api_url);

    match cli.command {
        Commands::Health => {
            if client.health().await? {
                println!("✓ API is healthy");
            } else {
                println!("✗ API is not healthy");
                std::process::exit(1);
            }
        }

        Commands::Expenditure { action } => match action {
            ExpenditureCommands::Add(fields) => {
                let expenditure = client.create_expenditure(&fields.into_request()?).await?;
                println!("{}", serde_json::to_string_pretty(&expenditure)?);
            }
            ExpenditureCommands::Get { id } => {
                let expenditure = client.get_expenditure(parse_expenditure_id(&id)?).await?;
                println!("{}", serde_json::to_string_pretty(&expenditure)?);
            }
            ExpenditureCommands::List => {
                let expenditures = client.list_expenditures().await?;
                println!("{}", serde_json::to_string_pretty(&expenditures)?);
            }
            ExpenditureCommands::Update { id, fields } => {
                let id = parse_expenditure_id(&id)?;
                let expenditure = client
                    .update_expenditure(id, &fields.into_request()?)
                    .await?;
                println!("{}", serde_json::to_string_pretty(&expenditure)?);
            }
            ExpenditureCommands::Delete { id } => {
                client
                    .delete_expenditure(parse_expenditure_id(&id)?)
                    .await?;
                println!("✓ Expenditure deleted");
            }
        },

        Commands::Category { action } => match action {
            CategoryCommands::List => {
                let categories = client.list_categories().await?;
                println!("{}", serde_json::to_string_pretty(&categories)?);
            }
            CategoryCommands::Get { id } => {
                let category_id: CategoryId = id
                    .parse()
                    .map_err(|_| anyhow::anyhow!("Invalid category ID: {}", id))?;
                let category = client.get_category(category_id).await?;
                println!("{}", serde_json::to_string_pretty(&category)?);
            }
        },
    }

    Ok(())
}
