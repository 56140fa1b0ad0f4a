use std::process::ExitCode;

use kicad_poller::{
    shutdown_channel, ClientBuilder, HttpNotifier, KiCadBoardSource, Poller, PollerConfig,
    PollerError,
};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    init_tracing();

    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!(%err, "kicad poller failed to start");
            if matches!(err, PollerError::Config { .. }) {
                eprintln!(
                    "hint: check BACKEND_URL, SESSION_ID, POLL_INTERVAL, REQUEST_TIMEOUT and DELIVERY_MODE."
                );
            }
            ExitCode::from(1)
        }
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

async fn run() -> Result<(), PollerError> {
    let config = PollerConfig::from_env()?;
    let source = KiCadBoardSource::new(ClientBuilder::new().timeout(config.timeout()));
    let notifier = HttpNotifier::new(&config)?;
    let poller = Poller::new(source, notifier, &config);

    let (trigger, signal) = shutdown_channel();
    let loop_task = poller.run(signal);
    tokio::pin!(loop_task);

    tokio::select! {
        () = &mut loop_task => {}
        result = tokio::signal::ctrl_c() => {
            match result {
                Ok(()) => info!("interrupt received, stopping"),
                Err(err) => error!(%err, "failed to listen for interrupt, stopping"),
            }
            trigger.trigger();
            loop_task.await;
        }
    }

    Ok(())
}
