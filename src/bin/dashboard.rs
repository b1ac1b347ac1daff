use std::{path::PathBuf, process::ExitCode, time::Duration};

use clap::{Parser, Subcommand};
use sales_dashboard::{
    Config, Dashboard, DateFilter, Error, FilterStore, HttpTransactionSource,
    SQLiteFilterStatePersistence, TransactionTypeFilter, fetch_with_retry, format_currency,
    format_date_time, last_four_digits, payment_method_name, setup_logging, status_name,
};

/// Shows payment transactions filtered by the saved filter selection.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// The URL of the transactions endpoint.
    #[arg(long, env = "DASHBOARD_ENDPOINT", default_value = sales_dashboard::DEFAULT_ENDPOINT)]
    endpoint: String,

    /// File path to the SQLite database that keeps the filter selection.
    #[arg(long, env = "DASHBOARD_STATE_DB", default_value = "dashboard-state.db")]
    state_db: PathBuf,

    /// Canonical timezone name for "local" time, e.g. "America/Bogota".
    /// Defaults to the system's local offset.
    #[arg(long, env = "DASHBOARD_TZ")]
    timezone: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Fetch transactions and show the ones that pass the saved filters.
    Show {
        /// How many extra times to try the fetch after a failure.
        #[arg(long, default_value_t = 3)]
        retries: u32,
    },
    /// Show the details of one transaction.
    Detail {
        /// The transaction id.
        id: String,
    },
    /// Set the date window: today, week or october.
    Date { filter: DateFilter },
    /// Set the sales channels: terminal, payment_link and/or all.
    Types { tags: Vec<TransactionTypeFilter> },
    /// Set the search text. An empty string clears it.
    Search { term: String },
    /// Go back to the default filters.
    Reset,
}

#[tokio::main]
async fn main() -> ExitCode {
    setup_logging("info");

    let args = Args::parse();
    let config = Config {
        endpoint: args.endpoint,
        state_db_path: args.state_db,
        timezone: args.timezone,
    };

    match run(config, args.command).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            tracing::error!("{error}");
            ExitCode::FAILURE
        }
    }
}

async fn run(config: Config, command: Command) -> Result<(), Error> {
    let zone = config.local_zone()?;
    let store = FilterStore::persisted(SQLiteFilterStatePersistence::open(
        &config.state_db_path,
    )?);

    match command {
        Command::Show { retries } => {
            let source = HttpTransactionSource::new(config.endpoint);
            let transactions =
                match fetch_with_retry(&source, retries, Duration::from_secs(1)).await {
                    Ok(transactions) => transactions,
                    Err(error) => {
                        println!("Error al cargar las transacciones: {error}");
                        return Ok(());
                    }
                };

            let dashboard = Dashboard::with_transactions(transactions, zone);
            print_view(&dashboard, &store);
        }
        Command::Detail { id } => {
            let mut dashboard = Dashboard::new(zone);
            dashboard
                .refetch(&HttpTransactionSource::new(config.endpoint))
                .await;

            if let Some(error) = dashboard.error() {
                println!("Error al cargar las transacciones: {error}");
                return Ok(());
            }

            match dashboard.detail(&id) {
                Some(detail) => {
                    println!("{}", detail.status_name);
                    println!("{}", detail.amount);
                    println!("{}", detail.created_at);
                    println!("ID transacción      {}", detail.id);
                    match detail.franchise {
                        Some(franchise) => {
                            println!("Método de pago      {} ({franchise})", detail.payment_method)
                        }
                        None => println!("Método de pago      {}", detail.payment_method),
                    }
                    println!("Tipo de pago        {}", detail.sales_type);
                    println!("Referencia          {}", detail.reference);
                    if let (Some(deduction), Some(net_amount)) = (detail.deduction, detail.net_amount)
                    {
                        println!("Deducción           -{deduction}");
                        println!("Total neto          {net_amount}");
                    }
                }
                None => println!("No existe una transacción con ID {id}"),
            }
        }
        Command::Date { filter } => store.set_date_filter(filter),
        Command::Types { tags } => store.set_transaction_type_filter(tags),
        Command::Search { term } => store.set_search_term(term),
        Command::Reset => store.reset(),
    }

    Ok(())
}

fn print_view(dashboard: &Dashboard, store: &FilterStore) {
    let view = dashboard.view(&store.get());

    println!("{}", view.sales_card_title);
    println!("{}", format_currency(view.total_amount));
    println!("{}", view.date_caption);
    println!(
        "Total de {} transacciones exitosas",
        view.successful_count
    );
    println!();
    println!("{}  ({})", view.table_title, view.type_filter_caption);

    if view.transactions.is_empty() {
        println!("No hay transacciones para mostrar");
        return;
    }

    for transaction in &view.transactions {
        println!(
            "{:<20} {:<22} {:<12} ****{} {:<16} {:>14}",
            status_name(transaction.status),
            format_date_time(transaction.created_at, dashboard.zone()),
            payment_method_name(transaction.payment_method),
            last_four_digits(transaction.transaction_reference),
            transaction.id,
            format_currency(transaction.amount),
        );
    }
}
