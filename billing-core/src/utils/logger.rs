//! Logging Infrastructure
//!
//! Structured logging for the counter terminal.
//! Features:
//! - Console output (pretty for development, JSON for production)
//! - Daily rotating application logs (deleted after 14 days)
//! - Permanent sales logs, one line per recorded sale (never deleted)

use std::fs;
use std::path::Path;
use std::sync::Mutex;

use chrono::{Local, NaiveDate};
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{EnvFilter, Layer, Registry, filter, fmt, prelude::*};

/// Log target routed to the permanent sales log
pub const SALES_TARGET: &str = "sales";

/// Days an application log file is kept
pub const APP_LOG_RETENTION_DAYS: i64 = 14;

type BoxedLayer = Box<dyn Layer<Registry> + Send + Sync + 'static>;

fn daily_appender(dir: &Path, prefix: &str) -> anyhow::Result<RollingFileAppender> {
    fs::create_dir_all(dir)?;
    let appender = RollingFileAppender::builder()
        .rotation(Rotation::DAILY)
        .filename_prefix(prefix)
        .filename_suffix("log")
        .build(dir)?;
    Ok(appender)
}

/// Clean up application log files older than `keep_days`
///
/// Only `app/app.YYYY-MM-DD.log` files are considered; sales logs are kept.
/// Returns the number of deleted files.
pub fn cleanup_old_logs(log_dir: &Path, today: NaiveDate, keep_days: i64) -> anyhow::Result<usize> {
    let cutoff = today - chrono::Duration::days(keep_days);
    let app_log_dir = log_dir.join("app");
    if !app_log_dir.exists() {
        return Ok(0);
    }

    let mut removed = 0;
    for entry in fs::read_dir(app_log_dir)? {
        let path = entry?.path();
        let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
            continue;
        };
        if let Some(date_part) = name
            .strip_prefix("app.")
            .and_then(|d| d.strip_suffix(".log"))
            && let Ok(date) = NaiveDate::parse_from_str(date_part, "%Y-%m-%d")
            && date < cutoff
        {
            fs::remove_file(&path)?;
            removed += 1;
            tracing::info!(file = %name, "Deleted old log file");
        }
    }

    Ok(removed)
}

/// Initialize the logging system with daily rotating logs
///
/// # Arguments
/// * `level` - Log level (e.g., "info", "debug", "warn")
/// * `json_format` - Whether to use JSON format on the console
/// * `log_dir` - Optional directory for file logging (e.g., Some("./work_dir/logs"))
///
/// `RUST_LOG` takes precedence over `level` when set. Fails if a global
/// subscriber is already installed.
///
/// # Examples
/// ```no_run
/// use billing_core::utils::logger::init_logger_with_file;
///
/// // Development setup (console only)
/// init_logger_with_file("debug", false, None)?;
///
/// // Production setup (console + file)
/// init_logger_with_file("info", true, Some("./work_dir/logs"))?;
/// # Ok::<(), anyhow::Error>(())
/// ```
pub fn init_logger_with_file(
    level: &str,
    json_format: bool,
    log_dir: Option<&str>,
) -> anyhow::Result<()> {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    let mut layers: Vec<BoxedLayer> = Vec::new();

    // Console layer
    let console_layer = if json_format {
        fmt::layer()
            .json()
            .with_target(true)
            .with_current_span(true)
            .with_file(true)
            .with_line_number(true)
            .boxed()
    } else {
        fmt::layer()
            .with_target(true)
            .with_file(true)
            .with_line_number(true)
            .boxed()
    };
    layers.push(console_layer);

    if let Some(dir) = log_dir {
        let log_dir = Path::new(dir);

        // Application logs, subject to cleanup
        let app_log = daily_appender(&log_dir.join("app"), "app")?;
        layers.push(
            fmt::layer()
                .json()
                .with_target(true)
                .with_file(true)
                .with_line_number(true)
                .with_writer(Mutex::new(app_log))
                .with_filter(filter::filter_fn(|meta| meta.target() != SALES_TARGET))
                .boxed(),
        );

        // Sales logs, never deleted
        let sales_log = daily_appender(&log_dir.join("sales"), "sales")?;
        layers.push(
            fmt::layer()
                .json()
                .with_target(true)
                .with_writer(Mutex::new(sales_log))
                .with_filter(filter::filter_fn(|meta| meta.target() == SALES_TARGET))
                .boxed(),
        );
    }

    tracing_subscriber::registry()
        .with(layers)
        .with(env_filter)
        .try_init()?;

    if let Some(dir) = log_dir
        && let Err(e) = cleanup_old_logs(
            Path::new(dir),
            Local::now().date_naive(),
            APP_LOG_RETENTION_DAYS,
        )
    {
        tracing::warn!(error = %e, "Failed to cleanup old logs");
    }

    Ok(())
}

/// Initialize the logging system (console only)
pub fn init_logger(level: &str, json_format: bool) -> anyhow::Result<()> {
    init_logger_with_file(level, json_format, None)
}

/// Sales log helper - records one line per finalized sale
///
/// Written to `sales/sales.YYYY-MM-DD.log` when file logging is enabled.
///
/// # Examples
/// ```no_run
/// billing_core::sale_log!("payment", 95, "Cash");
/// billing_core::sale_log!("invoice", 95, "UPI", "Table 4");
/// ```
#[macro_export]
macro_rules! sale_log {
    ($kind:expr, $amount:expr, $method:expr) => {
        tracing::info!(
            target: "sales",
            kind = $kind,
            amount = $amount,
            method = %$method,
            "SALE"
        );
    };
    ($kind:expr, $amount:expr, $method:expr, $details:expr) => {
        tracing::info!(
            target: "sales",
            kind = $kind,
            amount = $amount,
            method = %$method,
            details = $details,
            "SALE"
        );
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    fn touch(dir: &Path, name: &str) {
        fs::write(dir.join(name), b"{}\n").unwrap();
    }

    #[test]
    fn test_cleanup_removes_only_expired_app_logs() {
        let tmp = tempfile::tempdir().unwrap();
        let app = tmp.path().join("app");
        let sales = tmp.path().join("sales");
        fs::create_dir_all(&app).unwrap();
        fs::create_dir_all(&sales).unwrap();

        touch(&app, "app.2024-01-01.log");
        touch(&app, "app.2024-03-10.log");
        touch(&app, "notes.txt");
        touch(&sales, "sales.2024-01-01.log");

        let today = NaiveDate::from_ymd_opt(2024, 3, 15).unwrap();
        let removed = cleanup_old_logs(tmp.path(), today, 14).unwrap();

        assert_eq!(removed, 1);
        assert!(!app.join("app.2024-01-01.log").exists());
        assert!(app.join("app.2024-03-10.log").exists());
        assert!(app.join("notes.txt").exists());
        assert!(sales.join("sales.2024-01-01.log").exists());
    }

    #[test]
    fn test_cleanup_without_log_dir() {
        let tmp = tempfile::tempdir().unwrap();
        let today = NaiveDate::from_ymd_opt(2024, 3, 15).unwrap();
        assert_eq!(cleanup_old_logs(tmp.path(), today, 14).unwrap(), 0);
    }
}
