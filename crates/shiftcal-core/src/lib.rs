//! # shiftcal-core
//!
//! Core domain model and layout engine for the shiftcal calendar generator.
//!
//! This crate provides:
//! - Domain types: `Schedule`, `DayCell`, `MonthGrid`, `YearCalendar`
//! - The work/rest classification and year-grid construction
//! - The band-tiling layout fold (see [`layout`])
//! - Error types and the `Renderer` trait
//!
//! ## Example
//!
//! ```rust
//! use chrono::NaiveDate;
//! use shiftcal_core::Schedule;
//!
//! let start = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
//! let schedule = Schedule::new(start, 5, 2).unwrap();
//!
//! assert!(schedule.is_work_day(start));
//! let calendar = schedule.build_year();
//! assert_eq!(calendar.months.len(), 12);
//! ```

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub mod layout;

/// Number of columns in a month grid (Monday-first week)
pub const GRID_COLS: usize = 7;

// ============================================================================
// Schedule
// ============================================================================

/// A repeating work/rest cycle anchored at a start date
///
/// The cycle is `work_days` consecutive working days followed by `rest_days`
/// consecutive rest days, repeating in both directions from `start_date`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Schedule {
    /// First day of the first work block
    pub start_date: NaiveDate,
    /// Consecutive working days per cycle
    pub work_days: u32,
    /// Consecutive rest days per cycle
    pub rest_days: u32,
}

impl Schedule {
    /// Create a schedule, validating that the cycle is classifiable.
    ///
    /// Fails with [`ScheduleError::InvalidCycle`] when `work_days` is zero:
    /// with unsigned counts that is the only way to end up with either an
    /// empty cycle or a cycle that never works.
    pub fn new(start_date: NaiveDate, work_days: u32, rest_days: u32) -> Result<Self, ScheduleError> {
        if work_days == 0 {
            return Err(ScheduleError::InvalidCycle { work_days, rest_days });
        }
        Ok(Self { start_date, work_days, rest_days })
    }

    /// Length of the repeating cycle in days
    pub fn cycle_length(&self) -> u32 {
        self.work_days + self.rest_days
    }

    /// Classify a date as a working day.
    ///
    /// Uses floor-modulo (`rem_euclid`) on the signed day offset so dates
    /// before the anchor repeat the same pattern backward. Pure and
    /// deterministic for all dates.
    pub fn is_work_day(&self, date: NaiveDate) -> bool {
        let delta = (date - self.start_date).num_days();
        let cycle = i64::from(self.cycle_length());
        delta.rem_euclid(cycle) < i64::from(self.work_days)
    }

    /// Build the twelve month grids for the start date's year.
    ///
    /// The rendered year is always `start_date.year()`, even when the
    /// schedule is anchored late in the year; the cycle still classifies
    /// the whole year correctly thanks to floor-modulo.
    pub fn build_year(&self) -> YearCalendar {
        let year = self.start_date.year();
        let months = (1..=12).map(|month| self.build_month(year, month)).collect();
        YearCalendar { year, months }
    }

    fn build_month(&self, year: i32, month: u32) -> MonthGrid {
        // month is 1..=12 here, so the first of the month always exists
        let first = NaiveDate::from_ymd_opt(year, month, 1).unwrap();
        let leading = first.weekday().num_days_from_monday() as usize;

        let mut cells = Vec::with_capacity(leading + 31);
        cells.resize(leading, DayCell::Blank);
        cells.extend(
            first
                .iter_days()
                .take_while(|d| d.month() == month)
                .map(|date| DayCell::Day { date, is_work_day: self.is_work_day(date) }),
        );

        MonthGrid { month, cells }
    }
}

// ============================================================================
// Grid model
// ============================================================================

/// One cell of a month grid
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum DayCell {
    /// Leading padding before the first day of the month
    Blank,
    /// A calendar day with its work/rest classification
    Day {
        date: NaiveDate,
        is_work_day: bool,
    },
}

impl DayCell {
    pub fn is_blank(&self) -> bool {
        matches!(self, DayCell::Blank)
    }

    pub fn date(&self) -> Option<NaiveDate> {
        match self {
            DayCell::Blank => None,
            DayCell::Day { date, .. } => Some(*date),
        }
    }
}

/// A single month laid out on a 7-column, Monday-first weekly grid
///
/// Cells run left to right, top to bottom: `leading_blanks()` padding cells,
/// then one cell per day of the month. The last row may be partially filled;
/// trailing positions are simply not present.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthGrid {
    /// Month number, 1-12
    pub month: u32,
    cells: Vec<DayCell>,
}

impl MonthGrid {
    pub fn cells(&self) -> &[DayCell] {
        &self.cells
    }

    /// Number of grid rows needed to hold all cells (4, 5, or 6)
    pub fn rows(&self) -> u32 {
        self.cells.len().div_ceil(GRID_COLS) as u32
    }

    /// Padding cells before the 1st of the month (0 = starts on Monday)
    pub fn leading_blanks(&self) -> usize {
        self.cells.iter().take_while(|c| c.is_blank()).count()
    }

    /// Number of actual days in the month
    pub fn day_count(&self) -> usize {
        self.cells.iter().filter(|c| !c.is_blank()).count()
    }
}

/// Twelve month grids for one calendar year
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct YearCalendar {
    pub year: i32,
    /// Grids in month order, always 12
    pub months: Vec<MonthGrid>,
}

impl YearCalendar {
    /// Total day cells across all months (365 or 366)
    pub fn day_count(&self) -> usize {
        self.months.iter().map(MonthGrid::day_count).sum()
    }
}

// ============================================================================
// Traits
// ============================================================================

/// Output rendering
pub trait Renderer {
    type Output;

    /// Render a year calendar to the output format
    fn render(&self, calendar: &YearCalendar) -> Result<Self::Output, RenderError>;
}

// ============================================================================
// Errors
// ============================================================================

/// Schedule validation error
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ScheduleError {
    #[error("invalid work/rest cycle (work_days={work_days}, rest_days={rest_days}): work_days must be positive")]
    InvalidCycle { work_days: u32, rest_days: u32 },
}

/// Rendering error
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Format error: {0}")]
    Format(String),
}

// ============================================================================
// Tests
// ============================================================================
