use clap::{Parser, Subcommand};
use sqlsense::{
    Analyzer, Config, JsonSchemaFile, SchemaStore, Severity, completions, diagnose, quick_info,
};
use std::{io::Read as _, path::PathBuf, process::ExitCode};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "sqlsense")]
#[command(version)]
#[command(about = "Diagnostics, hover and completion for MySQL queries", long_about = None)]
#[command(after_help = "EXAMPLES:
    sqlsense check \"SELECT * FRM users\"
    sqlsense --schema schema.json check --json \"SELECT id FROM users\"
    sqlsense --schema schema.json hover --offset 14 \"SELECT * FROM users\"")]
struct Cli {
    /// TOML configuration file
    #[arg(short, long, env = "SQLSENSE_CONFIG")]
    config: Option<PathBuf>,

    /// JSON schema file (overrides the configured one)
    #[arg(short, long)]
    schema: Option<PathBuf>,

    /// Database name shown in unknown-table diagnostics
    #[arg(short, long)]
    database: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Analyze a query and print its diagnostics
    Check {
        /// Query text; read from stdin when omitted
        query: Option<String>,
        /// Print diagnostics as JSON
        #[arg(long)]
        json: bool,
    },
    /// Describe the word at a byte offset
    Hover {
        /// Byte offset into the query
        #[arg(short, long)]
        offset: usize,
        query: Option<String>,
    },
    /// List completion entries for a query
    Complete { query: Option<String> },
}

fn read_query(query: Option<String>) -> sqlsense::Result<String> {
    match query {
        Some(query) => Ok(query),
        None => {
            let mut text = String::new();
            std::io::stdin().read_to_string(&mut text)?;
            Ok(text.trim_end_matches(['\n', '\r']).to_string())
        }
    }
}

async fn run(cli: Cli) -> sqlsense::Result<ExitCode> {
    let config = Config::load_from(cli.config.as_deref())?;
    let analyzer = Analyzer::from_config(&config);
    let database = cli.database.or(config.database_name);

    let store = SchemaStore::new();
    if let Some(path) = cli.schema.or(config.schema_path) {
        store.load(&JsonSchemaFile::new(path)).await;
    }
    let schema = store.snapshot();
    let schema = schema.as_deref();

    match cli.command {
        Commands::Check { query, json } => {
            let query = read_query(query)?;
            let diagnostics = diagnose(&analyzer, &query, schema, database.as_deref());
            if json {
                println!("{}", serde_json::to_string_pretty(&diagnostics)?);
            } else if diagnostics.is_empty() {
                println!("No problems found.");
            } else {
                for d in &diagnostics {
                    println!("{} [{}] {}+{}: {}", d.severity, d.code, d.start, d.length, d.message);
                }
            }
            let failed = diagnostics.iter().any(|d| d.severity == Severity::Error);
            Ok(if failed { ExitCode::FAILURE } else { ExitCode::SUCCESS })
        }
        Commands::Hover { offset, query } => {
            let query = read_query(query)?;
            let info = quick_info(&analyzer, &query, offset, schema);
            println!("{}", serde_json::to_string_pretty(&info)?);
            Ok(ExitCode::SUCCESS)
        }
        Commands::Complete { query } => {
            let query = read_query(query)?;
            let entries = completions(&analyzer, &query, schema);
            println!("{}", serde_json::to_string_pretty(&entries)?);
            Ok(ExitCode::SUCCESS)
        }
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    match run(Cli::parse()).await {
        Ok(code) => code,
        Err(e) => {
            tracing::error!("{e}");
            eprintln!("error: {e}");
            ExitCode::from(2)
        }
    }
}
