//! Entry point: load config, connect the store, start the poller and the
//! retention job.

use tracing::info;
use tracing_subscriber::EnvFilter;

use rigmon::config::Config;
use rigmon::poller::Poller;
use rigmon::report::FailureReporter;
use rigmon::retention;
use rigmon::sensor::SensorClient;
use rigmon::store::Store;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("rigmon=info")),
        )
        .init();

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(err) => {
            eprintln!("{err}");
            std::process::exit(1);
        }
    };
    let reporter = FailureReporter::new(&config);

    info!("connecting '{}'...", config.db_host);
    let store = match Store::connect(&config).await {
        Ok(store) => store,
        Err(err) => {
            // Connect failures are fatal; report() does not come back.
            reporter.report(&err).await;
            return;
        }
    };
    info!("connected, monitor started");

    tokio::spawn(retention::run(config.clone(), reporter.clone()));

    let sensor = SensorClient::new(&config);
    Poller::new(sensor, store, reporter, config.mode).run().await;
}
