#[macro_use]
extern crate slog;

use std::fs::File;
use std::io::{self, Read};
use std::path::{Path, PathBuf};
use std::process;

use clap::{Parser, Subcommand};
use log::LevelFilter;
use serde_json::Value as Json;
use slog::{Drain, Logger};

use esquery::config::ClientConfig;
use esquery::document::{search_endpoint, Endpoint, DocumentRequest};
use esquery::logger;
use esquery::search::parse::parse_search;


const VERSION: &str = env!("CARGO_PKG_VERSION");


#[derive(Debug, Parser)]
#[command(name = "esquery", version, about = "Prints the Elasticsearch request for a search or document operation")]
struct Args {
    /// Connection settings (JSON)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Log each assembly step
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}


#[derive(Debug, Subcommand)]
enum Command {
    /// Assemble a search from a JSON description (reads stdin when no file or "-" is given)
    Search {
        input: Option<PathBuf>,
    },
    /// Create or replace a document from a JSON source file
    Index {
        index: String,
        id: String,
        source: PathBuf,
    },
    /// Merge the fields of a JSON file into a document
    Update {
        index: String,
        id: String,
        doc: PathBuf,
    },
    Get {
        index: String,
        id: String,
    },
    Delete {
        index: String,
        id: String,
    },
}


fn read_json(path: Option<&Path>) -> Result<Json, String> {
    let mut s = String::new();

    match path {
        Some(path) if path != Path::new("-") => {
            let mut file = File::open(path).map_err(|e| format!("cannot open {}: {}", path.display(), e))?;
            file.read_to_string(&mut s).map_err(|e| format!("cannot read {}: {}", path.display(), e))?;
        }
        _ => {
            io::stdin().read_to_string(&mut s).map_err(|e| format!("cannot read stdin: {}", e))?;
        }
    }

    serde_json::from_str(&s).map_err(|e| format!("invalid JSON: {}", e))
}


fn build_request(command: &Command, config: &ClientConfig, log: &Logger) -> Result<(Endpoint, Option<Json>), String> {
    match *command {
        Command::Search{ref input} => {
            let search = parse_search(&read_json(input.as_ref().map(|p| p.as_path()))?).map_err(|e| e.to_string())?;

            let index = match search.index.or_else(|| config.index.clone()).filter(|index| !index.is_empty()) {
                Some(index) => index,
                None => return Err("no index given in the search or the config".to_string()),
            };

            info!(log, "assembled search"; "index" => &index);
            Ok((search_endpoint(&index), Some(search.source.to_json())))
        }
        Command::Index{ref index, ref id, ref source} => {
            let request = DocumentRequest::index(index.as_str(), id.as_str(), read_json(Some(source.as_path()))?).map_err(|e| e.to_string())?;
            Ok((request.endpoint(), request.body()))
        }
        Command::Update{ref index, ref id, ref doc} => {
            let request = DocumentRequest::update(index.as_str(), id.as_str(), read_json(Some(doc.as_path()))?).map_err(|e| e.to_string())?;
            Ok((request.endpoint(), request.body()))
        }
        Command::Get{ref index, ref id} => {
            let request = DocumentRequest::get(index.as_str(), id.as_str()).map_err(|e| e.to_string())?;
            Ok((request.endpoint(), request.body()))
        }
        Command::Delete{ref index, ref id} => {
            let request = DocumentRequest::delete(index.as_str(), id.as_str()).map_err(|e| e.to_string())?;
            Ok((request.endpoint(), request.body()))
        }
    }
}


fn run(args: &Args, log: &Logger) -> Result<(), String> {
    let config = match args.config {
        Some(ref path) => {
            let config = ClientConfig::load(path).map_err(|e| e.to_string())?;
            info!(log, "loaded config"; "path" => path.display().to_string(), "host" => &config.host, "port" => config.port);
            config
        }
        None => ClientConfig::default(),
    };

    let (endpoint, body) = build_request(&args.command, &config, log)?;
    let url = config.endpoint_url(&endpoint).map_err(|e| e.to_string())?;

    if config.credentials().is_some() {
        debug!(log, "request needs basic authentication"; "user" => config.username.as_ref().map(|u| u.as_str()).unwrap_or(""));
    }

    println!("{} {}", endpoint.method.as_str(), url);
    if let Some(body) = body {
        println!("{}", serde_json::to_string_pretty(&body).map_err(|e| e.to_string())?);
    }

    Ok(())
}


fn main() {
    let args = Args::parse();

    let decorator = slog_term::PlainSyncDecorator::new(io::stderr());
    let drain = slog_term::FullFormat::new(decorator).build().fuse();
    let log = Logger::root(drain, o!("version" => VERSION));

    let level = if args.verbose { LevelFilter::Debug } else { LevelFilter::Warn };
    if let Err(e) = logger::init(level) {
        warn!(log, "cannot install logger"; "error" => e.to_string());
    }

    if let Err(e) = run(&args, &log) {
        error!(log, "request failed"; "error" => e);
        process::exit(1);
    }
}
