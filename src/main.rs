use clap::{ArgAction, Parser, ValueEnum};
use eshop_payments::application::service::PaymentService;
use eshop_payments::domain::order::Order;
use eshop_payments::infrastructure::in_memory::InMemoryPaymentRepository;
use eshop_payments::interfaces::csv::payment_reader::PaymentReader;
use eshop_payments::interfaces::csv::payment_writer::PaymentWriter;
use miette::{IntoDiagnostic, Result};
use std::collections::HashMap;
use std::fs::File;
use std::io;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::Level;

#[derive(Clone, Copy, Debug, Default, ValueEnum)]
enum OutputFormat {
    #[default]
    Csv,
    Json,
}

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Input payments CSV file
    input: PathBuf,

    /// Only print payments for this order
    #[arg(long)]
    order_id: Option<String>,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Csv)]
    format: OutputFormat,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = match cli.verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        _ => Level::DEBUG,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(io::stderr)
        .init();

    let mut service = PaymentService::new(Box::new(InMemoryPaymentRepository::new()));
    let mut orders: HashMap<String, Arc<Order>> = HashMap::new();

    let file = File::open(&cli.input).into_diagnostic()?;
    let reader = PaymentReader::new(file);
    for record in reader.records() {
        match record {
            Ok(record) => {
                // One shared order per order id.
                let order = orders
                    .entry(record.order_id.clone())
                    .or_insert_with(|| Arc::new(Order::reference(&record.order_id)))
                    .clone();
                let data = record.payment_data();
                let result = service.add_payment(record.id.as_str(), order, record.method, data);
                if let Err(e) = result {
                    tracing::warn!(payment_id = %record.id, error = %e, "Error processing payment");
                }
            }
            Err(e) => {
                tracing::warn!(error = %e, "Error reading payment");
            }
        }
    }

    let payments = match &cli.order_id {
        Some(order_id) => service.get_payments_for_order(order_id),
        None => service.get_all_payments(),
    };
    tracing::info!(count = payments.len(), "writing payments");

    let stdout = io::stdout();
    let mut writer = PaymentWriter::new(stdout.lock());
    match cli.format {
        OutputFormat::Csv => writer.write_csv(&payments),
        OutputFormat::Json => writer.write_json_lines(&payments),
    }
    .into_diagnostic()?;

    Ok(())
}
