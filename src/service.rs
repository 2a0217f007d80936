//! Calculation entry point tying the holiday source to the calculator,
//! plus the request-state bookkeeping for a single UI surface.

use crate::calendar::{self, CalculationResult};
use crate::error::{WorkdayError, WorkdayResult};
use crate::provider::HolidaySource;
use chrono::Month;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

/// What a presentation layer needs to render one calculation.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct MonthlyReport {
    pub month: u32,
    pub year: i32,
    pub result: CalculationResult,
}

/// Accepts "1".."12" or an English month name or abbreviation,
/// case-insensitive.
pub fn parse_month(input: &str) -> WorkdayResult<u32> {
    let input = input.trim();
    if let Ok(number) = input.parse::<u32>() {
        if (1..=12).contains(&number) {
            return Ok(number);
        }
        return Err(WorkdayError::InvalidInput("month out of range".to_string()));
    }
    input
        .parse::<Month>()
        .map(|m| m.number_from_month())
        .map_err(|_| WorkdayError::InvalidInput(format!("unrecognized month {:?}", input)))
}

/// Five selectable years centered on `current`, newest first.
pub fn year_options(current: i32) -> Vec<i32> {
    (-2..=2).rev().map(|offset| current + offset).collect()
}

pub struct WorkdayService<S> {
    source: S,
}

impl<S: HolidaySource> WorkdayService<S> {
    pub fn new(source: S) -> WorkdayService<S> {
        WorkdayService { source }
    }

    /// Validate the input, fetch the month's holidays and run the
    /// calculator. Invalid input aborts before any fetch is issued.
    pub async fn calculate(&self, month_input: &str, year: i32) -> WorkdayResult<MonthlyReport> {
        let month = parse_month(month_input)?;
        calendar::validate_month_year(month, year)?;

        info!("calculating working days for {}-{:02}", year, month);
        let holidays = self.source.fetch(month, year).await?;
        let result = calendar::compute(month, year, &holidays)?;
        if result.total_working_days < 0 {
            warn!(
                "working-day total {} for {}-{:02} is negative, holiday data is inconsistent with the month",
                result.total_working_days, year, month
            );
        }
        info!(
            "{} of {} fetched holidays are national holidays on working days",
            result.national_holiday_count,
            holidays.len()
        );
        Ok(MonthlyReport {
            month,
            year,
            result,
        })
    }

    /// Run a calculation under a [`RequestTracker`] ticket. The outcome is
    /// applied only if no newer request has been started in the meantime.
    pub async fn calculate_into(
        &self,
        tracker: &mut RequestTracker,
        month_input: &str,
        year: i32,
    ) -> Resolution {
        let ticket = tracker.begin();
        let outcome = self.calculate(month_input, year).await;
        tracker.resolve(ticket, outcome)
    }
}

/// Lifecycle of the one in-flight calculation a UI surface may hold.
#[derive(Debug, Clone, PartialEq)]
pub enum RequestState {
    Idle,
    Loading,
    Succeeded(MonthlyReport),
    Failed(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequestTicket(u64);

#[derive(Debug, PartialEq, Eq)]
pub enum Resolution {
    Applied,
    Stale,
}

/// Tracks the latest request and drops results of superseded ones.
#[derive(Debug)]
pub struct RequestTracker {
    state: RequestState,
    issued: u64,
}

impl RequestTracker {
    pub fn new() -> RequestTracker {
        RequestTracker {
            state: RequestState::Idle,
            issued: 0,
        }
    }

    pub fn state(&self) -> &RequestState {
        &self.state
    }

    /// Start a new request. Tickets issued earlier become stale.
    pub fn begin(&mut self) -> RequestTicket {
        self.issued += 1;
        self.state = RequestState::Loading;
        RequestTicket(self.issued)
    }

    /// Apply a finished request's outcome. An outcome carried by a
    /// superseded ticket is dropped, so a late result can never overwrite
    /// the state of a request started after it.
    pub fn resolve(
        &mut self,
        ticket: RequestTicket,
        outcome: WorkdayResult<MonthlyReport>,
    ) -> Resolution {
        if ticket.0 != self.issued {
            return Resolution::Stale;
        }
        self.state = match outcome {
            Ok(report) => RequestState::Succeeded(report),
            Err(e) => RequestState::Failed(e.to_string()),
        };
        Resolution::Applied
    }
}

impl Default for RequestTracker {
    fn default() -> Self {
        Self::new()
    }
}
