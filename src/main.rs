//! Domain Sift - find visually interesting short domain names
//!
//! Command line front end: classify names directly, fetch registrar search
//! results into a dump, and build ranked reports from a dump.

use std::path::PathBuf;
use std::process;
use std::time::Duration;

use clap::{Parser, Subcommand};
use indicatif::{ProgressBar, ProgressStyle};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use domain_sift::{
    config::{parse_presence_filter, parse_price_ceiling},
    source::PageProgress,
    DomainSiftError, DumpSource, DumpWriter, Lexicon, NameClassifier, Pipeline, RegistrarClient,
    Report, SiftConfig, StrategyKind,
};

#[derive(Parser, Debug)]
#[command(
    name = "domain-sift",
    version = domain_sift::VERSION,
    about = "Find visually interesting short domain names"
)]
struct Cli {
    /// Classification strategy: lexicon, leet or composite
    #[arg(long, global = true)]
    strategy: Option<StrategyKind>,

    /// Number of ranked entries shown on the console
    #[arg(long, global = true)]
    top: Option<usize>,

    /// Price ceiling for first year and renewal, or `none`
    #[arg(long, global = true)]
    max_price: Option<String>,

    /// Search only names with digits: yes, no or any
    #[arg(long, global = true)]
    has_number: Option<String>,

    /// Search only names with hyphens: yes, no or any
    #[arg(long, global = true)]
    has_hyphen: Option<String>,

    /// Directory for reports and dumps
    #[arg(long, global = true)]
    output_dir: Option<PathBuf>,

    /// Word list replacing the built-in dictionary
    #[arg(long, global = true)]
    words_file: Option<PathBuf>,

    /// Word list replacing the built-in informal words
    #[arg(long, global = true)]
    fun_words_file: Option<PathBuf>,

    /// Debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Print the tags of each name
    Classify {
        #[arg(required = true)]
        names: Vec<String>,

        /// Print results as JSON
        #[arg(long)]
        json: bool,
    },
    /// Walk the registrar search and save raw pages to a dump
    Fetch {
        /// Dump file (default: <output-dir>/search_dump.jsonl)
        #[arg(long)]
        dump: Option<PathBuf>,

        /// Append to the dump instead of replacing it
        #[arg(long)]
        append: bool,

        #[arg(long)]
        max_pages: Option<usize>,
    },
    /// Classify a dump and write reports
    Report {
        /// Dump file to read
        #[arg(short, long)]
        input: PathBuf,
    },
    /// Fetch, then report
    Run {
        #[arg(long)]
        dump: Option<PathBuf>,

        #[arg(long)]
        max_pages: Option<usize>,
    },
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    // Initialize the library
    if let Err(e) = domain_sift::init() {
        eprintln!("{}", e.user_message());
        process::exit(1);
    }

    init_logger(cli.verbose);
    tracing::debug!(?cli, "Parsed command line");

    if let Err(e) = run(cli).await {
        match e.downcast_ref::<DomainSiftError>() {
            Some(err) => {
                tracing::error!(error = %err, "Command failed");
                eprintln!("{}", err.user_message());
            }
            None => eprintln!("❌ Error: {:#}", e),
        }
        process::exit(1);
    }
}

fn init_logger(verbose: bool) {
    let filter = if verbose {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("domain_sift=debug,info"))
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("domain_sift=info,warn"))
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .with_thread_ids(false)
                .with_file(false)
                .with_line_number(false)
                .compact(),
        )
        .init();
}

/// Environment first, then flags on top
fn build_config(cli: &Cli) -> anyhow::Result<SiftConfig> {
    let mut config = SiftConfig::from_env()?;

    if let Some(strategy) = cli.strategy {
        config.strategy = strategy;
    }
    if let Some(top) = cli.top {
        config.report.top_n = top;
    }
    if let Some(raw) = &cli.max_price {
        config.set_price_ceiling(parse_price_ceiling(raw)?);
    }
    if let Some(raw) = &cli.has_number {
        config.fetch.query.has_number = parse_presence_filter(raw)?;
    }
    if let Some(raw) = &cli.has_hyphen {
        config.fetch.query.has_hyphen = parse_presence_filter(raw)?;
    }
    if let Some(dir) = &cli.output_dir {
        config.report.output_dir = dir.clone();
    }
    if let Some(path) = &cli.words_file {
        config.words_file = Some(path.clone());
    }
    if let Some(path) = &cli.fun_words_file {
        config.fun_words_file = Some(path.clone());
    }

    match &cli.command {
        Commands::Fetch { max_pages: Some(n), .. } | Commands::Run { max_pages: Some(n), .. } => {
            config.fetch.max_pages = *n;
        }
        _ => {}
    }

    config.validate()?;
    Ok(config)
}

fn build_classifier(config: &SiftConfig) -> anyhow::Result<NameClassifier> {
    let lexicon = Lexicon::load(config.words_file.as_deref(), config.fun_words_file.as_deref())?;
    Ok(NameClassifier::with_lexicon(config.strategy, lexicon))
}

fn default_dump_path(config: &SiftConfig) -> PathBuf {
    config.report.output_dir.join("search_dump.jsonl")
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let config = build_config(&cli)?;

    match cli.command {
        Commands::Classify { names, json } => {
            let classifier = build_classifier(&config)?;
            classify_names(&classifier, &names, json)
        }
        Commands::Fetch { dump, append, .. } => {
            let dump_path = dump.unwrap_or_else(|| default_dump_path(&config));
            let writer = if append {
                DumpWriter::append(&dump_path)?
            } else {
                DumpWriter::create(&dump_path)?
            };

            let listings = fetch_listings(&config, writer).await?;
            println!("✅ Fetched {} listings", listings.len());
            println!("📁 Dump saved to: {}", dump_path.display());
            Ok(())
        }
        Commands::Report { input } => {
            let pipeline = Pipeline::new(build_classifier(&config)?, config.report.clone());
            let mut source = DumpSource::new(&input);
            let report = pipeline.run(&mut source).await?;
            pipeline.persist(&report)?;
            print_report(&report, &config);
            Ok(())
        }
        Commands::Run { dump, .. } => {
            let pipeline = Pipeline::new(build_classifier(&config)?, config.report.clone());
            let dump_path = dump.unwrap_or_else(|| default_dump_path(&config));

            let listings = fetch_listings(&config, DumpWriter::create(&dump_path)?).await?;
            let report = pipeline.process(listings);
            pipeline.persist(&report)?;
            print_report(&report, &config);
            Ok(())
        }
    }
}

fn classify_names(classifier: &NameClassifier, names: &[String], json: bool) -> anyhow::Result<()> {
    let results: Vec<_> = names.iter().map(|n| classifier.classify(n)).collect();

    if json {
        println!("{}", serde_json::to_string_pretty(&results)?);
        return Ok(());
    }

    println!("🔎 Strategy: {}", classifier.kind());
    println!();
    for result in &results {
        if result.matched {
            println!("✅ {:<12} {}", result.name, result.joined(", "));
        } else {
            println!("❌ {:<12} no pattern", result.name);
        }
    }
    Ok(())
}

async fn fetch_listings(
    config: &SiftConfig,
    writer: DumpWriter,
) -> anyhow::Result<Vec<domain_sift::Listing>> {
    println!("🌐 Searching {}", config.fetch.base_url);

    let mut client = RegistrarClient::new(config.fetch.clone())?.with_dump(writer);

    let spinner = ProgressBar::new_spinner();
    let style = ProgressStyle::with_template("{spinner:.blue} {msg}")
        .map_err(|e| DomainSiftError::internal(e.to_string()))?;
    spinner.set_style(style);
    spinner.enable_steady_tick(Duration::from_millis(100));
    spinner.set_message("Opening session...");

    let result = client
        .fetch_all(|p: &PageProgress| {
            let total = p
                .records_total
                .map(|t| format!(" of {}", t))
                .unwrap_or_default();
            spinner.set_message(format!(
                "Page {}/{}: {} listings{}",
                p.page, p.max_pages, p.collected, total
            ));
        })
        .await;

    spinner.finish_and_clear();
    Ok(result?)
}

fn print_report(report: &Report, config: &SiftConfig) {
    println!();
    println!("📊 Summary ({} strategy):", report.strategy);
    println!("   📥 Listings: {}", report.total_listings);
    println!("   🧹 Unique within price: {}", report.unique_listings);
    println!("   ✨ Interesting: {}", report.matched());
    println!();

    if report.entries.is_empty() {
        println!("❌ No interesting domains found.");
    } else {
        println!("🎯 Top {} domains:", report.top(config.report.top_n).len());
        println!();
        print!("{}", report.render_table(config.report.top_n));
    }

    println!();
    println!("📁 JSON: {}", config.report.json_path().display());
    println!("📁 CSV:  {}", config.report.csv_path().display());
}
