//! CLI for shipdex.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use shipdex_core::config;
use std::path::PathBuf;

use commands::{run_list, run_resolve, run_show, run_slug};

/// Top-level CLI for shipdex.
#[derive(Debug, Parser)]
#[command(name = "shipdex")]
#[command(about = "shipdex: starship catalog browser and image resolver", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Fetch every starship, look up an image for each, and write the name -> URL mapping.
    Resolve {
        /// Where to write the mapping (default: `output_path` from config).
        #[arg(long, short = 'o', value_name = "PATH")]
        output: Option<PathBuf>,
        /// Resolve up to N starships concurrently (default: `jobs` from config).
        #[arg(long, value_name = "N")]
        jobs: Option<usize>,
    },

    /// List starships, optionally filtered by name/model.
    List {
        /// Substring to search for.
        #[arg(long, short = 's')]
        search: Option<String>,
        /// Keep following "next" until every page is shown.
        #[arg(long)]
        all: bool,
        /// Image mapping to read (default: `output_path` from config).
        #[arg(long, value_name = "PATH")]
        images: Option<PathBuf>,
    },

    /// Show details of one starship by its catalog ID.
    Show {
        /// Catalog identifier (the number in `/starships/{id}/`).
        id: u32,
        /// Image mapping to read (default: `output_path` from config).
        #[arg(long, value_name = "PATH")]
        images: Option<PathBuf>,
        /// Write the placeholder SVG here when the ship has no resolved image.
        #[arg(long, value_name = "PATH")]
        svg: Option<PathBuf>,
    },

    /// Print the databank slug and fallback candidates for a name (offline).
    Slug {
        /// Starship name exactly as the catalog spells it.
        name: String,
    },
}

impl CliCommand {
    pub async fn run_from_args() -> Result<()> {
        let cli = Cli::parse();
        let cfg = config::load_or_init()?;
        tracing::debug!("loaded config: {:?}", cfg);

        match cli.command {
            CliCommand::Resolve { output, jobs } => {
                let output = output.unwrap_or_else(|| cfg.output_path.clone());
                let jobs = jobs.unwrap_or(cfg.jobs);
                run_resolve(&cfg, &output, jobs).await?;
            }
            CliCommand::List {
                search,
                all,
                images,
            } => {
                let images = images.unwrap_or_else(|| cfg.output_path.clone());
                run_list(&cfg, search.as_deref(), all, &images).await?;
            }
            CliCommand::Show { id, images, svg } => {
                let images = images.unwrap_or_else(|| cfg.output_path.clone());
                run_show(&cfg, id, &images, svg.as_deref()).await?;
            }
            CliCommand::Slug { name } => run_slug(&name),
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests;
