//! CLI binary for kintree: build the sample family tree and query it.

mod sample;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use kintree_core::graph::{ChildRole, FamilyGraph, ParentRole};
use kintree_core::schema;
use kintree_query::lookup::{self, Relation};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "kintree", about = "Family relationship graph explorer")]
struct Cli {
    /// JSON tree document to load (defaults to the built-in sample tree)
    #[arg(short, long, global = true)]
    tree: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Look up a relation for a person
    Query {
        /// Person name (case-sensitive)
        person: String,

        /// Relation label, e.g. "brothers" or "maternal-uncle"
        relation: String,
    },

    /// Print the tree as a JSON document
    Tree,

    /// Run the canonical walkthrough queries
    Demo,
}

fn load_tree(cli: &Cli) -> Result<FamilyGraph> {
    match &cli.tree {
        Some(path) => {
            let json = std::fs::read_to_string(path)
                .with_context(|| format!("failed to read tree from {}", path.display()))?;
            schema::from_json(&json)
        }
        None => sample::sample_tree().context("failed to build the sample tree"),
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();
    let graph = load_tree(&cli)?;

    match &cli.command {
        Commands::Query { person, relation } => cmd_query(&graph, person, relation),
        Commands::Tree => cmd_tree(&graph),
        Commands::Demo => cmd_demo(graph),
    }
}

fn cmd_query(graph: &FamilyGraph, person: &str, relation: &str) -> Result<()> {
    let relation: Relation = relation.parse()?;
    match lookup::find_relative(graph, person, relation) {
        Some(result) if !result.is_empty() => println!("{result}"),
        _ => println!("no {relation} found for {person}"),
    }
    Ok(())
}

fn cmd_tree(graph: &FamilyGraph) -> Result<()> {
    println!("{}", schema::to_json(graph)?);
    Ok(())
}

fn cmd_demo(mut graph: FamilyGraph) -> Result<()> {
    println!("brothers of Ish:");
    println!(
        "  {}",
        lookup::find_relative(&graph, "Ish", Relation::Brothers).unwrap_or_default()
    );

    graph.add_child(ParentRole::Mother, "Lavnya", ChildRole::Daughter, "Vanya")?;
    println!("grandchildren of Jnki (after Vanya is born):");
    println!(
        "  {}",
        lookup::find_relative(&graph, "Jnki", Relation::Grandchildren).unwrap_or_default()
    );
    Ok(())
}
