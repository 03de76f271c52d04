use car_rental::application::engine::RentalEngine;
use car_rental::config::RentalConfig;
use car_rental::domain::car::{Car, CarCategory};
use car_rental::domain::customer::Customer;
use car_rental::domain::ports::Repository;
use car_rental::domain::transaction::Transaction;
use car_rental::infrastructure::clock::FixedClock;
use car_rental::infrastructure::json_file::JsonFileRepository;
use car_rental::infrastructure::random::SeededRandom;
use car_rental::interfaces::csv::request_reader::{RentalRequest, RequestReader};
use car_rental::interfaces::csv::transaction_writer::TransactionWriter;
use chrono::NaiveDate;
use clap::Parser;
use miette::{IntoDiagnostic, Result};
use std::fs::File;
use std::io;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Rental requests CSV file (customer,category,days)
    input: PathBuf,

    /// JSON file with the car inventory
    #[arg(long)]
    cars: PathBuf,

    /// JSON file with the customers
    #[arg(long)]
    customers: PathBuf,

    /// JSON file with the car categories
    #[arg(long)]
    categories: PathBuf,

    /// JSON configuration (tax schedule, currency and date formats)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Seed for car selection, for reproducible runs
    #[arg(long)]
    seed: Option<u64>,

    /// Rental start date (YYYY-MM-DD) instead of today
    #[arg(long)]
    today: Option<NaiveDate>,
}

async fn process(
    engine: &RentalEngine,
    customers: &JsonFileRepository<Customer>,
    categories: &JsonFileRepository<CarCategory>,
    request: RentalRequest,
) -> car_rental::error::Result<Transaction> {
    let customer = customers.find(&request.customer).await?;
    let category = categories.find(&request.category).await?;
    engine.rent(&customer, &category, request.days).await
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    let config = match cli.config {
        Some(path) => RentalConfig::load(path).into_diagnostic()?,
        None => RentalConfig::default(),
    };

    let cars: JsonFileRepository<Car> = JsonFileRepository::new(cli.cars);
    let mut engine = config.into_engine(Box::new(cars));
    if let Some(seed) = cli.seed {
        engine = engine.with_random(Box::new(SeededRandom::new(seed)));
    }
    if let Some(today) = cli.today {
        engine = engine.with_clock(Box::new(FixedClock(today)));
    }

    let customers = JsonFileRepository::new(cli.customers);
    let categories = JsonFileRepository::new(cli.categories);

    let file = File::open(cli.input).into_diagnostic()?;
    let reader = RequestReader::new(file);
    let stdout = io::stdout();
    let mut writer = TransactionWriter::new(stdout.lock());

    for request in reader.requests() {
        match request {
            Ok(request) => match process(&engine, &customers, &categories, request).await {
                Ok(tx) => writer.write(&tx).into_diagnostic()?,
                Err(e) => eprintln!("Error processing rental: {}", e),
            },
            Err(e) => {
                eprintln!("Error reading rental request: {}", e);
            }
        }
    }

    writer.flush().into_diagnostic()?;
    Ok(())
}
