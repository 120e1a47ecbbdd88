//! k2psl: CLI tool for classifying hosts against a public suffix list.

use clap::{Parser, Subcommand};
use k2psl::{Authority, Classifier, OutputKind, RuleDatabase};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "k2psl")]
#[command(author = "Kaitu.io")]
#[command(version = "0.1.0")]
#[command(about = "Classify hosts against the Public Suffix List", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print suffix information for each host
    Classify {
        /// Public suffix list file (plain or gzip)
        #[arg(short, long, env = "K2PSL_LIST")]
        list: PathBuf,

        /// Print only this output (is_icann, public_suffix, domain_suffix,
        /// registered_domain, public_registered_domain)
        #[arg(short, long)]
        output: Option<OutputKind>,

        /// Print results as JSON lines
        #[arg(long)]
        json: bool,

        /// Hosts to classify, optionally with a port
        #[arg(required = true)]
        hosts: Vec<String>,
    },

    /// Parse a list file and report rule counts
    Check {
        /// Public suffix list file (plain or gzip)
        #[arg(short, long, env = "K2PSL_LIST")]
        list: PathBuf,

        /// Verbose output
        #[arg(short, long)]
        verbose: bool,
    },
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Classify {
            list,
            output,
            json,
            hosts,
        } => classify_hosts(&list, output, json, &hosts),
        Commands::Check { list, verbose } => check_list(&list, verbose),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn classify_hosts(
    list: &Path,
    output: Option<OutputKind>,
    json: bool,
    hosts: &[String],
) -> Result<(), Box<dyn std::error::Error>> {
    let db = RuleDatabase::open(list)?;
    let classifier = Classifier::new(&db);

    for host in hosts {
        match (output, json) {
            (Some(kind), false) => {
                println!("{}", classifier.evaluate(host, kind));
            }
            (Some(kind), true) => {
                let value = classifier.evaluate(host, kind);
                let line = serde_json::json!({ "host": host, (kind.as_str()): value });
                println!("{}", line);
            }
            (None, false) => {
                let result = classifier.classify(host);
                println!("{}", host);
                for kind in OutputKind::ALL {
                    println!("  {:<26}{}", kind.as_str(), result.get(kind));
                }
            }
            (None, true) => {
                let result = classifier.classify(host);
                let mut line = serde_json::to_value(&result)?;
                line["host"] = serde_json::Value::String(host.clone());
                println!("{}", line);
            }
        }
    }

    Ok(())
}

fn check_list(list: &Path, verbose: bool) -> Result<(), Box<dyn std::error::Error>> {
    if verbose {
        println!("Reading list file: {:?}", list);
    }

    let db = RuleDatabase::open(list)?;
    let stats = db.stats();

    println!(
        "{:?}: {} rules ({} {}, {} {})",
        list,
        stats.total(),
        stats.icann,
        Authority::Icann,
        stats.private,
        Authority::Private
    );

    if verbose {
        println!(
            "  exact: {}, wildcard: {}, exception: {}, max depth: {}",
            stats.exact, stats.wildcard, stats.exception, stats.max_depth
        );
    }

    Ok(())
}
