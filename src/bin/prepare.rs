//! Driver: run ingestion then transformation with default configuration.

use chrono::Utc;
use tracing::info;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, fmt};

use tabprep::{DataIngestion, DataTransformation, IngestionConfig, PrepError, TransformationConfig};

/// Install the process-wide subscriber: console plus a run-scoped log file.
///
/// The returned guard must stay alive for the whole run so buffered log
/// lines are flushed at exit.
fn init_logging() -> WorkerGuard {
    let log_name = format!("prepare_{}.log", Utc::now().format("%m_%d_%Y_%H_%M_%S"));
    let file_appender = tracing_appender::rolling::never("logs", log_name);
    let (file_writer, guard) = tracing_appender::non_blocking(file_appender);

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(fmt::layer().with_ansi(false).with_writer(file_writer))
        .with(fmt::layer().with_writer(std::io::stdout))
        .init();
    guard
}

fn main() -> Result<(), PrepError> {
    let _guard = init_logging();

    let artifacts = DataIngestion::new(IngestionConfig::default()).run()?;
    let output = DataTransformation::new(TransformationConfig::default())
        .run(&artifacts.train, &artifacts.test)?;

    info!(
        train_rows = output.train.nrows(),
        test_rows = output.test.nrows(),
        columns = output.train.ncols(),
        recipe = %output.recipe_path.display(),
        "preparation pipeline finished"
    );
    Ok(())
}
