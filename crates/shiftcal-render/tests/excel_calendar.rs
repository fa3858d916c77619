//! Integration tests for Excel calendar rendering

use chrono::NaiveDate;
use pretty_assertions::assert_eq;
use shiftcal_core::{Renderer, Schedule};
use shiftcal_render::ExcelCalendarRenderer;

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

#[test]
fn render_five_two_year_to_excel() {
    let schedule = Schedule::new(date(2024, 1, 1), 5, 2).unwrap();
    let calendar = schedule.build_year();

    let renderer = ExcelCalendarRenderer::new();
    let xlsx = renderer.render(&calendar).unwrap();

    // Verify it's a valid XLSX file (starts with PK zip signature)
    assert!(xlsx.len() > 100);
    assert_eq!(&xlsx[0..2], b"PK");

    // Write to file for inspection (uncomment for local testing)
    // std::fs::write("/tmp/calendar_5_2.xlsx", &xlsx).unwrap();
}

#[test]
fn render_mid_year_anchor() {
    // Anchor in September; January-August classify through negative offsets
    let schedule = Schedule::new(date(2023, 9, 18), 4, 2).unwrap();
    let calendar = schedule.build_year();

    let xlsx = ExcelCalendarRenderer::new().render(&calendar).unwrap();
    assert!(xlsx.len() > 100);
    assert_eq!(&xlsx[0..2], b"PK");
}

#[test]
fn render_with_localized_labels() {
    let schedule = Schedule::new(date(2024, 3, 1), 2, 2).unwrap();
    let calendar = schedule.build_year();

    let renderer = ExcelCalendarRenderer::new()
        .sheet_name("Календарь")
        .month_names([
            "Январь",
            "Февраль",
            "Март",
            "Апрель",
            "Май",
            "Июнь",
            "Июль",
            "Август",
            "Сентябрь",
            "Октябрь",
            "Ноябрь",
            "Декабрь",
        ])
        .weekday_labels(["Пн", "Вт", "Ср", "Чт", "Пт", "Сб", "Вс"]);

    let xlsx = renderer.render(&calendar).unwrap();
    assert!(xlsx.len() > 100);
    assert_eq!(&xlsx[0..2], b"PK");
}

#[test]
fn render_with_custom_fill() {
    let schedule = Schedule::new(date(2024, 1, 1), 1, 3).unwrap();
    let calendar = schedule.build_year();

    let plain = ExcelCalendarRenderer::new().render(&calendar).unwrap();
    let tinted = ExcelCalendarRenderer::new()
        .work_fill_color(0xFFE699)
        .render(&calendar)
        .unwrap();

    assert_eq!(&tinted[0..2], b"PK");
    // Different fill color must change the stored styles
    assert_ne!(plain, tinted);
}

#[test]
fn render_rest_only_cycle_is_never_built() {
    // The renderer never sees an invalid schedule; construction fails first
    assert!(Schedule::new(date(2024, 1, 1), 0, 5).is_err());
}
