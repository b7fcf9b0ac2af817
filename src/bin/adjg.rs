//! CLI entry point for the `adjg` command-line tool.

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

use adjgraph::cli::commands;
use adjgraph::ErrorKind;

#[derive(Parser)]
#[command(name = "adjg", about = "Inspect and edit JSON adjacency graphs")]
struct Cli {
    /// Output format: "text" (default) or "json"
    #[arg(long, default_value = "text")]
    format: String,

    /// Enable debug logging
    #[arg(long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create a new empty graph file
    Create {
        /// Path to the graph file to create
        file: PathBuf,
    },
    /// Display information about a graph file
    Info {
        /// Path to the graph file
        file: PathBuf,
    },
    /// Add a node
    AddNode {
        /// Path to the graph file
        file: PathBuf,
        /// Node name (payload)
        name: String,
    },
    /// Add an edge between two named nodes
    AddEdge {
        /// Path to the graph file
        file: PathBuf,
        /// Source node name
        from: String,
        /// Target node name
        to: String,
        /// Edge weight
        #[arg(long, default_value = "0")]
        weight: i64,
        /// Add a directed edge instead of an undirected one
        #[arg(long)]
        oriented: bool,
    },
    /// Remove a node and every edge touching it
    RemoveNode {
        /// Path to the graph file
        file: PathBuf,
        /// Node name
        name: String,
    },
    /// Remove an edge between two named nodes
    RemoveEdge {
        /// Path to the graph file
        file: PathBuf,
        /// Source node name
        from: String,
        /// Target node name
        to: String,
        /// Remove only the from -> to direction
        #[arg(long)]
        oriented: bool,
    },
    /// Change the weight of an edge
    SetWeight {
        /// Path to the graph file
        file: PathBuf,
        /// Source node name
        from: String,
        /// Target node name
        to: String,
        /// New weight
        weight: i64,
        /// Change only the from -> to direction
        #[arg(long)]
        oriented: bool,
    },
    /// List the neighbors of a node
    Neighbors {
        /// Path to the graph file
        file: PathBuf,
        /// Node name
        name: String,
    },
    /// List connected components
    Components {
        /// Path to the graph file
        file: PathBuf,
    },
    /// Find a path between two nodes
    Path {
        /// Path to the graph file
        file: PathBuf,
        /// Start node name
        from: String,
        /// End node name
        to: String,
    },
}

fn main() {
    let cli = Cli::parse();
    let json = cli.format == "json";

    let level = if cli.verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Warn
    };
    env_logger::Builder::from_default_env()
        .filter_level(level)
        .init();

    let result = match cli.command {
        Commands::Create { file } => commands::cmd_create(&file),
        Commands::Info { file } => commands::cmd_info(&file, json),
        Commands::AddNode { file, name } => commands::cmd_add_node(&file, &name, json),
        Commands::AddEdge {
            file,
            from,
            to,
            weight,
            oriented,
        } => commands::cmd_add_edge(&file, &from, &to, weight, oriented, json),
        Commands::RemoveNode { file, name } => commands::cmd_remove_node(&file, &name),
        Commands::RemoveEdge {
            file,
            from,
            to,
            oriented,
        } => commands::cmd_remove_edge(&file, &from, &to, oriented),
        Commands::SetWeight {
            file,
            from,
            to,
            weight,
            oriented,
        } => commands::cmd_set_weight(&file, &from, &to, weight, oriented),
        Commands::Neighbors { file, name } => commands::cmd_neighbors(&file, &name, json),
        Commands::Components { file } => commands::cmd_components(&file, json),
        Commands::Path { file, from, to } => commands::cmd_path(&file, &from, &to, json),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        let code = match e.kind() {
            ErrorKind::FileRead => 1,
            ErrorKind::Parse => 2,
            ErrorKind::NodeNotFound | ErrorKind::NodeIsNull | ErrorKind::EdgeNotFound => 4,
            _ => 5,
        };
        process::exit(code);
    }
}
