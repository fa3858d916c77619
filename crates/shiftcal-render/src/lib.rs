//! # shiftcal-render
//!
//! Rendering backends for shiftcal year calendars.
//!
//! Currently one backend: an XLSX renderer that tiles the twelve month
//! grids onto a single landscape sheet, shading work days.
//!
//! ## Example
//!
//! ```rust,ignore
//! use shiftcal_core::{Renderer, Schedule};
//! use shiftcal_render::ExcelCalendarRenderer;
//!
//! let calendar = schedule.build_year();
//! let renderer = ExcelCalendarRenderer::new();
//! let xlsx = renderer.render(&calendar)?;
//! std::fs::write("calendar.xlsx", xlsx)?;
//! ```

pub mod excel;

pub use excel::ExcelCalendarRenderer;
