//! Excel year-calendar renderer
//!
//! Generates a single-sheet XLSX file with twelve month grids, four per
//! horizontal band. Each month gets a merged title cell, a weekday label
//! row, and bordered day cells; work days carry a solid fill. The sheet is
//! set up for landscape printing, centered on the page with fixed margins.
//!
//! Column widths and row heights are specified in centimeters and converted
//! to the character-width and point units the XLSX format uses.

use chrono::Datelike;
use rust_xlsxwriter::{Format, FormatAlign, FormatBorder, Workbook, Worksheet};
use shiftcal_core::layout::{tile_months, GridOrigin, HEADER_ROWS, MONTHS_PER_BAND};
use shiftcal_core::{DayCell, MonthGrid, RenderError, Renderer, YearCalendar, GRID_COLS};

/// Approximate column width in character units for a width given in cm
fn cm_to_col_width(cm: f64) -> f64 {
    cm * 2.54 * 7.0 / 10.0
}

/// Row height in points for a height given in cm
fn cm_to_points(cm: f64) -> f64 {
    cm * 28.3465
}

/// Page margin in inches for a margin given in cm
fn cm_to_inches(cm: f64) -> f64 {
    cm / 2.54
}

const DEFAULT_MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

const DEFAULT_WEEKDAY_LABELS: [&str; 7] = ["Mo", "Tu", "We", "Th", "Fr", "Sa", "Su"];

/// Excel year-calendar renderer
#[derive(Clone, Debug)]
pub struct ExcelCalendarRenderer {
    /// Worksheet name
    pub sheet_name: String,
    /// Font family for all cells
    pub font_name: String,
    /// Month title font size
    pub title_font_size: f64,
    /// Weekday label font size
    pub weekday_font_size: f64,
    /// Day number font size
    pub day_font_size: f64,
    /// Solid fill color for work days (RGB)
    pub work_fill: u32,
    /// Month titles, January first
    pub month_names: [String; 12],
    /// Weekday labels, Monday first
    pub weekday_labels: [String; 7],
    /// Width of each of a month's 7 columns, in cm
    pub day_col_width_cm: f64,
    /// Width of the spacer column between months of a band, in cm
    pub spacer_col_width_cm: f64,
    /// Height of weekday and day rows, in cm
    pub day_row_height_cm: f64,
    /// Page margin on all four sides, in cm
    pub page_margin_cm: f64,
}

impl Default for ExcelCalendarRenderer {
    fn default() -> Self {
        Self {
            sheet_name: "Calendar".into(),
            font_name: "Arial".into(),
            title_font_size: 14.0,
            weekday_font_size: 11.0,
            day_font_size: 16.0,
            work_fill: 0xC0C0C0,
            month_names: DEFAULT_MONTH_NAMES.map(String::from),
            weekday_labels: DEFAULT_WEEKDAY_LABELS.map(String::from),
            day_col_width_cm: 2.4571,
            spacer_col_width_cm: 1.4285,
            day_row_height_cm: 0.64,
            page_margin_cm: 0.8,
        }
    }
}

impl ExcelCalendarRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the worksheet name
    pub fn sheet_name(mut self, name: impl Into<String>) -> Self {
        self.sheet_name = name.into();
        self
    }

    /// Set the font family
    pub fn font_name(mut self, name: impl Into<String>) -> Self {
        self.font_name = name.into();
        self
    }

    /// Set the work-day fill color
    pub fn work_fill_color(mut self, rgb: u32) -> Self {
        self.work_fill = rgb;
        self
    }

    /// Replace the month titles (January first)
    pub fn month_names(mut self, names: [&str; 12]) -> Self {
        self.month_names = names.map(String::from);
        self
    }

    /// Replace the weekday labels (Monday first)
    pub fn weekday_labels(mut self, labels: [&str; 7]) -> Self {
        self.weekday_labels = labels.map(String::from);
        self
    }

    /// Generate the workbook as XLSX bytes
    pub fn render_to_bytes(&self, calendar: &YearCalendar) -> Result<Vec<u8>, RenderError> {
        let mut workbook = Workbook::new();
        let formats = self.create_formats();

        let sheet = workbook.add_worksheet();
        sheet
            .set_name(&self.sheet_name)
            .map_err(|e| RenderError::Format(e.to_string()))?;
        self.set_up_page(sheet);

        let origins = tile_months(&calendar.months);
        for (index, (grid, origin)) in calendar.months.iter().zip(&origins).enumerate() {
            self.write_month(sheet, grid, *origin, &formats)?;

            // Spacer column between months of a band
            if (index + 1) % MONTHS_PER_BAND != 0 {
                let spacer_col = origin.col + GRID_COLS as u16;
                sheet
                    .set_column_width(spacer_col, cm_to_col_width(self.spacer_col_width_cm))
                    .ok();
            }
        }

        let buffer = workbook
            .save_to_buffer()
            .map_err(|e| RenderError::Format(format!("Failed to create Excel: {e}")))?;

        Ok(buffer)
    }

    /// Landscape orientation, fixed margins, print centered on the page
    fn set_up_page(&self, sheet: &mut Worksheet) {
        let margin = cm_to_inches(self.page_margin_cm);
        sheet.set_landscape();
        sheet.set_margins(margin, margin, margin, margin, -1.0, -1.0);
        sheet.set_print_center_horizontally(true);
        sheet.set_print_center_vertically(true);
    }

    /// Create reusable formats
    fn create_formats(&self) -> CalendarFormats {
        let month_title = Format::new()
            .set_font_name(&self.font_name)
            .set_font_size(self.title_font_size)
            .set_bold()
            .set_align(FormatAlign::Center)
            .set_border(FormatBorder::Thin);

        let weekday = Format::new()
            .set_font_name(&self.font_name)
            .set_font_size(self.weekday_font_size)
            .set_bold()
            .set_align(FormatAlign::Center)
            .set_border(FormatBorder::Thin);

        let rest_day = Format::new()
            .set_font_name(&self.font_name)
            .set_font_size(self.day_font_size)
            .set_align(FormatAlign::Center)
            .set_align(FormatAlign::VerticalCenter)
            .set_border(FormatBorder::Thin);

        let work_day = rest_day.clone().set_background_color(self.work_fill);

        let blank = Format::new().set_border(FormatBorder::Thin);

        CalendarFormats { month_title, weekday, work_day, rest_day, blank }
    }

    /// Write one month grid at its origin
    fn write_month(
        &self,
        sheet: &mut Worksheet,
        grid: &MonthGrid,
        origin: GridOrigin,
        formats: &CalendarFormats,
    ) -> Result<(), RenderError> {
        let title = &self.month_names[grid.month as usize - 1];
        sheet
            .merge_range(
                origin.row,
                origin.col,
                origin.row,
                origin.col + GRID_COLS as u16 - 1,
                title,
                &formats.month_title,
            )
            .map_err(|e| RenderError::Format(e.to_string()))?;

        for (offset, label) in self.weekday_labels.iter().enumerate() {
            sheet
                .write_with_format(
                    origin.row + 1,
                    origin.col + offset as u16,
                    label.as_str(),
                    &formats.weekday,
                )
                .map_err(|e| RenderError::Format(e.to_string()))?;
        }

        for (index, cell) in grid.cells().iter().enumerate() {
            let row = origin.row + HEADER_ROWS + (index / GRID_COLS) as u32;
            let col = origin.col + (index % GRID_COLS) as u16;
            match cell {
                DayCell::Blank => {
                    sheet
                        .write_with_format(row, col, "", &formats.blank)
                        .map_err(|e| RenderError::Format(e.to_string()))?;
                }
                DayCell::Day { date, is_work_day } => {
                    let format = if *is_work_day { &formats.work_day } else { &formats.rest_day };
                    sheet
                        .write_with_format(row, col, date.day(), format)
                        .map_err(|e| RenderError::Format(e.to_string()))?;
                }
            }
        }

        // Uniform widths for the month's 7 columns, uniform heights for the
        // weekday row and every day row
        let width = cm_to_col_width(self.day_col_width_cm);
        for offset in 0..GRID_COLS as u16 {
            sheet.set_column_width(origin.col + offset, width).ok();
        }
        let height = cm_to_points(self.day_row_height_cm);
        for row in (origin.row + 1)..(origin.row + HEADER_ROWS + grid.rows()) {
            sheet.set_row_height(row, height).ok();
        }

        Ok(())
    }
}

impl Renderer for ExcelCalendarRenderer {
    type Output = Vec<u8>;

    fn render(&self, calendar: &YearCalendar) -> Result<Self::Output, RenderError> {
        self.render_to_bytes(calendar)
    }
}

/// Reusable cell formats
struct CalendarFormats {
    month_title: Format,
    weekday: Format,
    work_day: Format,
    rest_day: Format,
    blank: Format,
}
