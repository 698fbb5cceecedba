use clap::Parser;

#[derive(Debug, Clone, Parser)]
#[command(name = "storefront-service", about = "Catalog and basket HTTP backend")]
pub struct Config {
    #[arg(long, env = "DATABASE_URL")]
    pub database_url: String,

    #[arg(long, env = "PORT", default_value = "8080")]
    pub port: u16,

    #[arg(long, env = "DATABASE_MAX_CONNECTIONS", default_value = "10")]
    pub max_connections: u32,

    /// Leave the schema alone; use when the tables are provisioned out-of-band.
    #[arg(long)]
    pub skip_migrations: bool,
}
