//! Configuration loading from flags and environment.

use clap::Parser;

use expense_repo::Storage;

/// Expense tracker server.
#[derive(Debug, Parser)]
#[command(name = "expense-server", version, about)]
pub struct Config {
    /// Store expenditures in the database instead of in memory
    #[arg(long, env = "USE_DB")]
    pub db: bool,

    /// Port to listen on
    #[arg(long, env = "PORT", default_value_t = 8080)]
    pub port: u16,

    /// Full database URL; overrides the individual DB_* settings
    #[arg(long, env = "DATABASE_URL")]
    pub database_url: Option<String>,

    #[command(flatten)]
    pub db_config: DbConfig,
}

/// PostgreSQL connection settings.
#[derive(Debug, Clone, clap::Args)]
pub struct DbConfig {
    #[arg(long, env = "DB_HOST", default_value = "localhost")]
    pub db_host: String,

    #[arg(long, env = "DB_PORT", default_value_t = 5432)]
    pub db_port: u16,

    #[arg(long, env = "DB_USER", default_value = "postgres")]
    pub db_user: String,

    #[arg(long, env = "DB_PASSWORD", default_value = "postgres", hide_env_values = true)]
    pub db_password: String,

    #[arg(long, env = "DB_NAME", default_value = "expense_tracker")]
    pub db_name: String,
}

impl DbConfig {
    /// Renders the settings as a `postgres://` connection URL.
    pub fn connection_url(&self) -> String {
        format!(
            "postgres://{}:{}@{}:{}/{}",
            self.db_user, self.db_password, self.db_host, self.db_port, self.db_name
        )
    }
}

impl Config {
    /// Loads configuration from command-line flags and environment variables.
    pub fn load() -> Self {
        Self::parse()
    }

    /// The storage backend these settings select.
    pub fn storage(&self) -> Storage {
        if !self.db {
            return Storage::Memory;
        }

        let url = self
            .database_url
            .clone()
            .unwrap_or_else(|| self.db_config.connection_url());
        Storage::Database(url)
    }

    /// The socket address to bind.
    pub fn addr(&self) -> String {
        format!("0.0.0.0:{}", self.port)
    }
}
