use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

pub mod commands;

use crate::config::{ServerConfig, DEFAULT_BIND_ADDRESS};
use commands::{print_openapi, serve};

#[derive(Parser)]
#[command(name = "weatherview")]
#[command(about = "Weather forecast API server and page host")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start the web server
    Serve {
        /// Bind address for the web server
        ///
        /// Format: IP:PORT (e.g., 0.0.0.0:3000, 127.0.0.1:8080)
        #[arg(short, long, env = "BIND_ADDRESS", default_value = DEFAULT_BIND_ADDRESS)]
        bind_address: String,

        /// Directory with the built frontend (index.html plus wasm bundle)
        ///
        /// Unknown paths fall back to index.html. Without it only the API is served.
        #[arg(short, long, env = "STATIC_DIR")]
        static_dir: Option<PathBuf>,
    },
    /// Print the OpenAPI document as JSON
    Openapi,
}

impl Cli {
    pub async fn run(self) -> Result<()> {
        match self.command {
            Commands::Serve { bind_address, static_dir } => {
                let config = ServerConfig::new(&bind_address, static_dir)?;
                serve(config).await?;
            }
            Commands::Openapi => {
                print_openapi()?;
            }
        }
        Ok(())
    }
}
