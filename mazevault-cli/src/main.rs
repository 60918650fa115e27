//! mazevault CLI - serve the maze record API or generate mazes offline
//!
//! `serve` runs the HTTP server over a SQLite store; `generate` carves a
//! maze with the same library the server uses and prints it to stdout.

use std::net::SocketAddr;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};

use mazevault_gen::Maze;
use mazevault_server::db::{create_pool, migrations};
use mazevault_server::http::run_server;
use mazevault_server::ServerConfig;

mod tracing_setup;

#[derive(Parser, Debug)]
#[command(
    name = "mazevault",
    author,
    version,
    about = "Store and serve generated mazes over HTTP"
)]
struct Cli {
    /// Enable debug logging
    #[arg(long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Run the HTTP server
    Serve(ServeArgs),

    /// Generate a maze and print it as ASCII
    Generate(GenerateArgs),
}

#[derive(Args, Debug)]
struct ServeArgs {
    /// Address to bind to (default: 127.0.0.1:3040 or MAZEVAULT_ADDR)
    #[arg(long, short = 'b')]
    bind: Option<SocketAddr>,

    /// SQLite connection string (default: sqlite:mazevault.db or DATABASE_URL)
    #[arg(long)]
    database_url: Option<String>,

    /// Password for the delete endpoint (default: MAZEVAULT_DELETE_PASSWORD)
    #[arg(long)]
    delete_password: Option<String>,

    /// Allow permissive CORS (all origins) - use with caution
    #[arg(long)]
    cors_permissive: bool,
}

#[derive(Args, Debug)]
struct GenerateArgs {
    /// Maze height in cells
    height: u32,

    /// Maze width in cells
    width: u32,

    /// Generation seed
    #[arg(default_value_t = 0)]
    seed: u64,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Optional .env for DATABASE_URL and friends
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();
    tracing_setup::init_tracing(cli.debug)?;

    match cli.command {
        Commands::Serve(args) => serve(args).await,
        Commands::Generate(args) => generate(args),
    }
}

async fn serve(args: ServeArgs) -> Result<()> {
    let mut config = ServerConfig::from_env();
    if let Some(bind) = args.bind {
        config.bind_addr = bind;
    }
    if let Some(url) = args.database_url {
        config.database_url = url;
    }
    if let Some(password) = args.delete_password {
        config.delete_password = password;
    }
    config.cors_permissive = args.cors_permissive;

    tracing::info!(database = %config.database_url, "opening maze store");
    let pool = create_pool(&config.database_url)
        .await
        .with_context(|| format!("failed to open database {}", config.database_url))?;
    migrations::run(&pool)
        .await
        .context("failed to run migrations")?;

    run_server(pool, config).await.context("server failed")?;
    Ok(())
}

fn generate(args: GenerateArgs) -> Result<()> {
    let maze = Maze::generate(args.height, args.width, args.seed)
        .context("maze generation failed")?;
    print!("{}", maze.render_ascii());
    Ok(())
}
