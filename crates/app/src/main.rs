//! Bookkeeper entry point.

use app::{Config, LogicManager};
use domain::ListCommand;
use storage::JsonFileStorage;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

#[tokio::main]
async fn main() {
    let config = Config::from_env();

    // 1. Initialize tracing
    tracing_subscriber::registry()
        .with(EnvFilter::try_new(&config.log_level).unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer())
        .init();

    // 2. Install Prometheus metrics recorder
    let metrics_handle = metrics_exporter_prometheus::PrometheusBuilder::new()
        .install_recorder()
        .expect("failed to install Prometheus recorder");

    // 3. Load the book
    let storage = JsonFileStorage::new(&config.data_path);
    let mut logic = LogicManager::load(storage, config.use_sample_data).await;
    tracing::info!(book = %logic.book_keeper(), "bookkeeper ready");

    // 4. Show everything; this also writes the data file on first run
    match logic.execute(&ListCommand).await {
        Ok(result) => println!("{}", result.feedback_to_user),
        Err(e) => tracing::error!(error = %e, "failed to list the book"),
    }

    println!("Clients:");
    for (i, client) in logic.filtered_client_list().into_iter().enumerate() {
        println!("{:>3}. {client}", i + 1);
    }
    println!("Orders:");
    for (i, order) in logic.filtered_order_list().into_iter().enumerate() {
        println!("{:>3}. {order} [{}]", i + 1, order.order_id());
    }

    tracing::debug!(metrics = %metrics_handle.render(), "metrics snapshot");
}
