// ABOUTME: Food planner binary serving the recipe tools over stdio or calling one directly
// ABOUTME: Configuration comes from the environment, overridable by command-line flags
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Food Planner Binary
//!
//! `food-planner serve` speaks MCP over stdin/stdout for an agent runtime.
//! `food-planner call <tool> --args '<json>'` runs a single tool and prints
//! its payload, which is handy for checking a dataset by hand.

use std::path::PathBuf;
use std::process;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use food_planner::{
    config::PlannerConfig,
    logging,
    mcp::{McpServer, PlannerResources},
    tools::ToolExecutionContext,
};
use serde_json::Value;
use tracing::info;

#[derive(Parser)]
#[command(name = "food-planner")]
#[command(about = "Recipe planner tools: local search, recall check, scaling, shopping list")]
struct Args {
    /// Recipe dataset CSV (overrides `FOOD_PLANNER_DATASET_PATH`)
    #[arg(long)]
    dataset: Option<PathBuf>,

    /// Minimum rating for a local recipe (overrides `FOOD_PLANNER_MIN_RATING`)
    #[arg(long)]
    min_rating: Option<f64>,

    /// File of recall keywords, one per line
    #[arg(long)]
    recall_file: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Serve MCP over stdin/stdout (default)
    Serve,
    /// List the available tools
    Tools,
    /// Run a single tool and print its payload
    Call {
        /// Tool name, e.g. `fetch_local_recipe`
        tool: String,
        /// Tool arguments as a JSON object
        #[arg(long, default_value = "{}")]
        args: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    logging::init_from_env()?;

    let mut config = PlannerConfig::from_env();
    if let Some(path) = args.dataset {
        config = config.with_dataset_path(path);
    }
    if let Some(min_rating) = args.min_rating {
        config = config.with_min_rating(min_rating);
    }
    if let Some(path) = args.recall_file {
        config = config.with_recall_file(path);
    }

    let server = McpServer::with_builtin_tools(PlannerResources::from_config(config));

    match args.command.unwrap_or(Command::Serve) {
        Command::Serve => {
            info!("Starting food planner MCP server");
            server.run_stdio().await?;
        }
        Command::Tools => {
            for schema in server.registry().all_schemas() {
                let (name, description) = (schema.name, schema.description);
                println!("{name:<24} {description}");
            }
        }
        Command::Call { tool, args } => {
            let arguments: Value =
                serde_json::from_str(&args).context("--args must be a JSON object")?;
            let context = ToolExecutionContext::new(Arc::clone(server.resources()));
            let result = server
                .registry()
                .execute(&tool, arguments, &context)
                .await?;

            match &result.content {
                Value::String(text) => println!("{text}"),
                other => println!("{}", serde_json::to_string_pretty(other)?),
            }
            if result.is_error {
                process::exit(1);
            }
        }
    }

    Ok(())
}
