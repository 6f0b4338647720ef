// file: src/main.rs
// description: commandline application entry point with command handling
// reference: application bootstrap and orchestration

use anyhow::{Context, Result};
use clap::{ArgAction, Parser, Subcommand};
use serde::de::DeserializeOwned;
use srp_pipeline::config::StorageBackend;
use srp_pipeline::utils::logging::{format_error, format_info, format_success, format_warning};
use srp_pipeline::{
    Article, ArticleValidator, Config, ConsoleNotifier, EmailNotifier, FileStore, KeyValueStore,
    MemoryStore, Notifier, NotifierChain, Order, OrderValidator, Outcome, Pipeline, PipelineStats,
    ProgressTracker, PublishLog, Record, RecordKind, RecordStore, Report, ReportValidator,
    Validator,
};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

#[derive(Parser)]
#[command(name = "srp_pipeline")]
#[command(author = "cipher")]
#[command(version = "0.1.0")]
#[command(about = "Validate, persist and announce records through pluggable stages", long_about = None)]
struct Cli {
    #[arg(
        short,
        long,
        value_name = "FILE",
        default_value = "config/default.toml"
    )]
    config: PathBuf,

    #[arg(long, default_value_t = true, action = ArgAction::Set)]
    color: bool,

    #[arg(short, long, action = ArgAction::SetTrue)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Publish a single order
    Order {
        #[arg(long, default_value = "ORD-001")]
        id: String,

        #[arg(long, default_value = "cust-42")]
        customer: String,

        #[arg(long, default_value_t = 99.50, allow_negative_numbers = true)]
        total: f64,

        #[arg(long, default_value_t = 3, allow_negative_numbers = true)]
        items: i64,
    },

    /// Publish a single article
    Article {
        #[arg(long, default_value = "art-1")]
        id: String,

        #[arg(long, default_value = "Hello World")]
        title: String,

        #[arg(long, default_value = "This is the content.")]
        content: String,

        #[arg(long, default_value = "author-42")]
        author: String,
    },

    /// Publish a single report and e-mail it
    Report {
        /// Generated when omitted
        #[arg(long)]
        id: Option<String>,

        #[arg(long, default_value = "Monthly Sales")]
        title: String,

        #[arg(long, default_value = "Sales are up 10% this month.")]
        content: String,

        /// Overrides notification.report_recipient
        #[arg(long, value_name = "ADDRESS")]
        to: Option<String>,
    },

    /// Publish every record in a JSON array
    Batch {
        #[arg(long, value_enum)]
        kind: RecordKind,

        #[arg(short, long, value_name = "FILE")]
        file: PathBuf,
    },

    /// Print the stored form of a record
    Show {
        #[arg(long, value_enum)]
        kind: RecordKind,

        #[arg(long)]
        id: String,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    srp_pipeline::utils::logging::init_logger(cli.color, cli.verbose);
    colored::control::set_override(cli.color);

    let config = load_config(&cli.config)?;

    let exit_code = match cli.command {
        Commands::Order {
            id,
            customer,
            total,
            items,
        } => cmd_order(&config, Order::new(id, customer, total, items))?,
        Commands::Article {
            id,
            title,
            content,
            author,
        } => cmd_article(&config, Article::new(id, title, content, author))?,
        Commands::Report {
            id,
            title,
            content,
            to,
        } => {
            let report = match id {
                Some(id) => Report::with_id(id, title, content),
                None => Report::new(title, content),
            };
            cmd_report(&config, report, to.as_deref())?
        }
        Commands::Batch { kind, file } => cmd_batch(&config, kind, &file, cli.color)?,
        Commands::Show { kind, id } => cmd_show(&config, kind, &id)?,
    };

    if exit_code != 0 {
        std::process::exit(exit_code);
    }
    Ok(())
}

fn load_config(path: &Path) -> Result<Config> {
    info!("Loading configuration from: {}", path.display());

    if path.exists() {
        return Config::load(Some(path)).context("Failed to load configuration");
    }

    warn!(
        "Config file {} not found, using default configuration",
        path.display()
    );
    Ok(Config::load(None).unwrap_or_else(|e| {
        warn!("Falling back to built-in defaults: {}", e);
        Config::default_config()
    }))
}

fn open_backend(config: &Config) -> Box<dyn KeyValueStore> {
    match config.storage.backend {
        StorageBackend::File => Box::new(FileStore::new(config.storage.directory.clone())),
        StorageBackend::Memory => Box::new(MemoryStore::new()),
    }
}

fn announce_with<'a, R: Record + 'a>(
    config: &Config,
    primary: impl Notifier<R> + 'a,
) -> NotifierChain<'a, R> {
    let chain = NotifierChain::new().with(primary);
    if config.notification.publish_log {
        chain.with(PublishLog::new())
    } else {
        chain
    }
}

fn cmd_order(config: &Config, order: Order) -> Result<i32> {
    let notifier: NotifierChain<'_, Order> = announce_with(config, ConsoleNotifier::stdout());
    publish_one(config, &order, &OrderValidator::new(), &notifier)
}

fn cmd_article(config: &Config, article: Article) -> Result<i32> {
    let validator = ArticleValidator::new(config.validation.max_title_chars);
    let notifier: NotifierChain<'_, Article> = announce_with(config, ConsoleNotifier::stdout());
    publish_one(config, &article, &validator, &notifier)
}

fn cmd_report(config: &Config, report: Report, to: Option<&str>) -> Result<i32> {
    let validator = ReportValidator::new(config.validation.max_title_chars);
    let notifier: NotifierChain<'_, Report> = announce_with(config, report_mailer(config, to)?);
    publish_one(config, &report, &validator, &notifier)
}

fn report_mailer(config: &Config, to: Option<&str>) -> Result<EmailNotifier> {
    let address = to.unwrap_or(&config.notification.report_recipient);
    EmailNotifier::stdout(address).context("Failed to set up report e-mail")
}

fn publish_one<R: Record>(
    config: &Config,
    record: &R,
    validator: &dyn Validator<R>,
    notifier: &dyn Notifier<R>,
) -> Result<i32> {
    let backend = open_backend(config);
    let store = RecordStore::new(backend.as_ref(), config.storage.format);
    let pipeline = Pipeline::new(validator, &store, notifier);

    let outcome = pipeline.publish(record);
    print_outcome::<R>(record.id(), &outcome);
    Ok(outcome.exit_code())
}

fn print_outcome<R: Record>(id: &str, outcome: &Outcome) {
    match outcome {
        Outcome::Published => {
            println!("{}", format_success(&format!("{} {} published.", R::KIND, id)));
        }
        Outcome::ValidationFailed(violations) => {
            println!("{}", format_error(&format!("{} validation failed.", R::KIND)));
            for violation in violations {
                println!("  {}", format_warning(&violation.to_string()));
            }
        }
        Outcome::PersistenceFailed(_) | Outcome::NotificationFailed(_) => {
            println!("{}", format_error(&format!("{} {}: {}", R::KIND, id, outcome)));
        }
    }
}

fn cmd_batch(config: &Config, kind: RecordKind, file: &Path, color: bool) -> Result<i32> {
    info!("Publishing {} records from {}", kind, file.display());

    let content = fs::read_to_string(file)
        .with_context(|| format!("Failed to read batch file {}", file.display()))?;

    let stats = match kind {
        RecordKind::Order => {
            let orders: Vec<Order> = parse_batch(&content)?;
            let notifier: NotifierChain<'_, Order> = announce_with(config, ConsoleNotifier::stdout());
            publish_all(config, &orders, &OrderValidator::new(), &notifier, color)
        }
        RecordKind::Article => {
            let articles: Vec<Article> = parse_batch(&content)?;
            let validator = ArticleValidator::new(config.validation.max_title_chars);
            let notifier: NotifierChain<'_, Article> = announce_with(config, ConsoleNotifier::stdout());
            publish_all(config, &articles, &validator, &notifier, color)
        }
        RecordKind::Report => {
            let reports: Vec<Report> = parse_batch(&content)?;
            let validator = ReportValidator::new(config.validation.max_title_chars);
            let notifier: NotifierChain<'_, Report> =
                announce_with(config, report_mailer(config, None)?);
            publish_all(config, &reports, &validator, &notifier, color)
        }
    };

    let summary = stats.summary();
    if stats.failed() == 0 {
        println!("{}", format_success(&summary));
        Ok(0)
    } else {
        println!("{}", format_warning(&summary));
        Ok(1)
    }
}

fn parse_batch<R: DeserializeOwned>(content: &str) -> Result<Vec<R>> {
    serde_json::from_str(content).context("Batch file must be a JSON array of records")
}

fn publish_all<R: Record>(
    config: &Config,
    records: &[R],
    validator: &dyn Validator<R>,
    notifier: &dyn Notifier<R>,
    color: bool,
) -> PipelineStats {
    let backend = open_backend(config);
    let store = RecordStore::new(backend.as_ref(), config.storage.format);
    let pipeline = Pipeline::new(validator, &store, notifier);

    let tracker = ProgressTracker::with_color(records.len(), color);
    let stats = pipeline.run_batch(records, Some(&tracker));
    tracker.finish();
    stats
}

fn cmd_show(config: &Config, kind: RecordKind, id: &str) -> Result<i32> {
    if config.storage.backend == StorageBackend::Memory {
        warn!("The memory backend does not outlive a single command");
    }

    let backend = open_backend(config);
    let store = RecordStore::new(backend.as_ref(), config.storage.format);

    match store.load(kind, id).context("Failed to read stored record")? {
        Some(content) => {
            println!("{}", content);
            Ok(0)
        }
        None => {
            println!("{}", format_info(&format!("No stored {} with id {}", kind, id)));
            Ok(1)
        }
    }
}
