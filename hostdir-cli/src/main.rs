mod config;

use anyhow::Context;
use camino::Utf8Path;
use clap::{Parser, Subcommand};
use config::ConfigMerger;
use hostdir_core::adapters::FsCatalogSource;
use hostdir_core::pipeline::{ListingOutcome, run_listing, run_validate};
use hostdir_query::{ChipKind, ListingQuery, params, parse_query, to_query_string};
use hostdir_types::filter::Currency;
use std::process::ExitCode;
use tracing::{debug, error, info};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(
    name = "hostdir",
    version,
    about = "Validate and browse the hosting provider directory."
)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Check providers.json and plans.json before publishing.
    Validate,
    /// Filter, sort and page the provider directory like the listing page does.
    List(ListArgs),
}

#[derive(Debug, Parser)]
struct ListArgs {
    /// Listing query string, e.g. "region=eu&integration=git&sort=name".
    #[arg(default_value = "")]
    query: String,

    /// Output format (text, json).
    #[arg(long, value_enum, default_value = "text")]
    format: OutputFormat,

    /// Providers per page (default: from hostdir.toml, else 12).
    #[arg(long)]
    page_size: Option<usize>,

    /// Currency used for price sorting and display.
    #[arg(long, value_enum)]
    currency: Option<CurrencyArg>,
}

#[derive(Debug, Clone, Copy, clap::ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

#[derive(Debug, Clone, Copy, clap::ValueEnum)]
enum CurrencyArg {
    Eur,
    Usd,
}

impl From<CurrencyArg> for Currency {
    fn from(arg: CurrencyArg) -> Self {
        match arg {
            CurrencyArg::Eur => Currency::Eur,
            CurrencyArg::Usd => Currency::Usd,
        }
    }
}

fn main() -> ExitCode {
    match real_main() {
        Ok(code) => code,
        Err(e) => {
            error!("{:?}", e);
            ExitCode::from(1)
        }
    }
}

fn real_main() -> anyhow::Result<ExitCode> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.cmd {
        Command::Validate => cmd_validate(),
        Command::List(args) => cmd_list(args),
    }
}

fn cmd_validate() -> anyhow::Result<ExitCode> {
    let file_config =
        config::load_or_default(Utf8Path::new(".")).context("load hostdir.toml config")?;
    let merged = ConfigMerger::new(file_config).merge_validate_args();
    debug!(
        data_dir = %merged.data_dir,
        top_providers = merged.validate.vocabulary.top_providers.len(),
        "merged config"
    );

    let source = FsCatalogSource::in_dir(&merged.data_dir);
    let outcome = run_validate(&merged.validate, &source).context("validate catalog")?;

    if let Some(failure) = outcome.failure() {
        eprintln!("Plan validation failed:\n");
        for violation in &outcome.report.violations {
            eprintln!("- {}", violation);
        }
        info!("{}", failure);
        return Ok(ExitCode::from(failure.exit_code()));
    }

    println!(
        "Plan validation passed ({} plans checked).",
        outcome.report.plans_checked
    );
    Ok(ExitCode::SUCCESS)
}

fn cmd_list(args: ListArgs) -> anyhow::Result<ExitCode> {
    let file_config =
        config::load_or_default(Utf8Path::new(".")).context("load hostdir.toml config")?;
    let merged = ConfigMerger::new(file_config)
        .merge_list_args(args.page_size, args.currency.map(Currency::from));
    debug!(
        data_dir = %merged.data_dir,
        page_size = merged.listing.page_size,
        currency = merged.listing.currency.as_param(),
        "merged config"
    );

    let query = parse_query(&args.query);
    let source = FsCatalogSource::in_dir(&merged.data_dir);
    let outcome = run_listing(&merged.listing, &source, &query).context("build listing")?;

    match args.format {
        OutputFormat::Text => print_listing(&query, &outcome),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&outcome)?),
    }
    Ok(ExitCode::SUCCESS)
}

fn print_listing(query: &ListingQuery, outcome: &ListingOutcome) {
    println!("Total: {}", outcome.total);
    println!("Filtered: {}", outcome.filtered);

    if !outcome.chips.is_empty() {
        println!();
        println!("Active filters:");
        for chip in &outcome.chips {
            let rest = to_query_string(&query.without_chip(chip));
            println!(
                "  {}={}  (remove: ?{})",
                chip_param(chip.kind),
                chip.value,
                rest
            );
        }
    }

    println!();
    if outcome.page.items.is_empty() {
        println!(
            "No providers match these filters. \
             Remove a filter or run 'hostdir list' without a query."
        );
        return;
    }

    let currency = outcome.currency.as_param().to_uppercase();
    println!(
        "  {:<24} {:>5}  {:<12} {:<8} TAGS",
        "NAME", "PLANS", "FROM", "REGION"
    );
    for item in &outcome.page.items {
        let from = item
            .min_price(outcome.currency)
            .map(|p| format!("{:.2} {}", p, currency))
            .unwrap_or_else(|| "-".to_string());
        println!(
            "  {:<24} {:>5}  {:<12} {:<8} {}",
            item.name,
            item.plan_count,
            from,
            item.region,
            item.integration_tags.join(", ")
        );
    }
    println!();
    println!(
        "Page {} of {} ({} providers)",
        outcome.page.page, outcome.page.page_count, outcome.page.total
    );
}

fn chip_param(kind: ChipKind) -> &'static str {
    match kind {
        ChipKind::Q => params::Q,
        ChipKind::Region => params::REGION,
        ChipKind::Logo => params::LOGO,
        ChipKind::Integration => params::INTEGRATION,
        ChipKind::Ssl => params::SSL,
        ChipKind::PriceMin => params::PRICE_MIN,
        ChipKind::PriceMax => params::PRICE_MAX,
    }
}
