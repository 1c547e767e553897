use pretty_assertions::assert_eq;
use shared_types::format::*;

#[test]
fn money_uses_grouping_separators_and_two_decimals() {
    assert_eq!(format_money(12345.67), "$12,345.67");
    assert_eq!(format_money(950.5), "$950.50");
    assert_eq!(format_money(1_234_567.0), "$1,234,567.00");
    assert_eq!(format_money(0.0), "$0.00");
}

#[test]
fn fpl_percentage_renders_to_one_decimal() {
    assert_eq!(format_percent(245.25), "245.3%");
    assert_eq!(format_percent(100.0), "100.0%");
}

#[test]
fn dates_render_in_short_human_form() {
    assert_eq!(format_date_human("2026-01-20T21:35:00Z"), "Jan 20, 2026");
    assert_eq!(format_date_human("2025-12-03"), "Dec 3, 2025");
    assert_eq!(
        format_datetime_human("2026-01-05T14:30:00Z"),
        "Jan 5, 2026 2:30 PM"
    );
}

#[test]
fn missing_optionals_render_the_na_literal() {
    assert_eq!(money_or_na(None), NOT_AVAILABLE);
    assert_eq!(date_or_na(None), NOT_AVAILABLE);
    assert_eq!(NOT_AVAILABLE, "N/A");
}

#[test]
fn present_optionals_format_normally() {
    assert_eq!(money_or_na(Some(12345.67)), "$12,345.67");
    assert_eq!(date_or_na(Some("2026-02-01T09:00:00Z")), "Feb 1, 2026");
}
