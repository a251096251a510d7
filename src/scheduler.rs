// src/scheduler.rs

use chrono::{Days, Local, NaiveDateTime, NaiveTime};
use std::thread;

use crate::errors::AppError;
use crate::job::run_job;
use crate::settings::Settings;

/// The first `run_hour:00` strictly after `now`.
pub fn next_run_after(now: NaiveDateTime, run_hour: u32) -> NaiveDateTime {
    let at = NaiveTime::from_hms_opt(run_hour, 0, 0).unwrap_or(NaiveTime::MIN);
    let today = now.date().and_time(at);
    if today > now {
        today
    } else {
        now.date()
            .checked_add_days(Days::new(1))
            .unwrap_or(now.date())
            .and_time(at)
    }
}

/// Runs the job every day at `settings.run_hour`, local time. Never returns
/// unless the report sink can't be built.
///
/// A failed run is logged and the loop waits for the next day.
pub fn run_daily(settings: &Settings) -> Result<(), AppError> {
    let repository = settings.repository();
    let sink = settings.report_sink()?;

    loop {
        let now = Local::now().naive_local();
        let next = next_run_after(now, settings.run_hour);
        tracing::info!("Next run at {}", next);

        if let Ok(wait) = (next - now).to_std() {
            thread::sleep(wait);
        }

        let check_date = Local::now().date_naive();
        if let Err(e) = run_job(&repository, &sink, check_date) {
            tracing::error!("Run for {} failed: {}", check_date, e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn at(y: i32, m: u32, d: u32, h: u32, min: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(h, min, 0)
            .unwrap()
    }

    #[test]
    fn later_today_when_hour_not_reached() {
        assert_eq!(next_run_after(at(2024, 5, 2, 6, 30), 8), at(2024, 5, 2, 8, 0));
    }

    #[test]
    fn tomorrow_when_hour_passed() {
        assert_eq!(next_run_after(at(2024, 5, 2, 9, 0), 8), at(2024, 5, 3, 8, 0));
    }

    #[test]
    fn exactly_on_the_hour_waits_a_day() {
        assert_eq!(next_run_after(at(2024, 5, 2, 8, 0), 8), at(2024, 5, 3, 8, 0));
    }

    #[test]
    fn rolls_over_month_and_year() {
        assert_eq!(next_run_after(at(2024, 12, 31, 23, 0), 0), at(2025, 1, 1, 0, 0));
    }
}
