use chrono::Local;
use clap::Parser;

use crate::db::init_db;
use crate::errors::AppError;
use crate::job::run_job;
use crate::logging::init_logging;
use crate::settings::Settings;

mod db;
mod delivery;
mod domain;
mod errors;
mod job;
mod logging;
mod mailer;
mod scheduler;
mod settings;
mod spreadsheets;
mod templates;

#[cfg(test)]
mod tests;

fn main() {
    // 1️⃣ Settings come from flags and the environment
    let settings = Settings::parse();
    init_logging(&settings.log_level, settings.log_format);
    tracing::debug!("headcount {}", env!("CARGO_PKG_VERSION"));

    // 2️⃣ Run once or stay on the schedule
    if let Err(e) = run(&settings) {
        tracing::error!("{e}");
        std::process::exit(1);
    }
}

fn run(settings: &Settings) -> Result<(), AppError> {
    if settings.init_schema {
        init_db(&settings.database())?;
    }

    tracing::info!("RUN_AND_EXIT: {}", settings.run_and_exit);
    if settings.run_and_exit {
        let check_date = settings
            .custom_date
            .unwrap_or_else(|| Local::now().date_naive());
        let sink = settings.report_sink()?;
        run_job(&settings.repository(), &sink, check_date)?;
        Ok(())
    } else {
        scheduler::run_daily(settings)
    }
}
