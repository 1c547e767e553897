//! Display formatting for the detail view.
//!
//! Dates arrive as ISO-8601 strings (e.g. "2026-01-20T21:35:00Z") and are
//! formatted by slicing rather than full datetime parsing, falling back to
//! the raw prefix when a string does not look like a date.

/// Literal rendered for missing optional values.
pub const NOT_AVAILABLE: &str = "N/A";

const MONTH_NAMES: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun",
    "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

fn parse_month(s: &str) -> Option<usize> {
    s.parse::<usize>().ok().filter(|m| (1..=12).contains(m))
}

/// Format an ISO date string as "Jan 20, 2026".
///
/// Falls back to the first 10 characters if parsing fails.
pub fn format_date_human(date_str: &str) -> String {
    if date_str.len() < 10 {
        return date_str.to_string();
    }
    let year = &date_str[..4];
    let month = &date_str[5..7];
    let day = &date_str[8..10];

    if let Some(m) = parse_month(month) {
        let day_num: u32 = day.parse().unwrap_or(0);
        format!("{} {}, {}", MONTH_NAMES[m - 1], day_num, year)
    } else {
        date_str[..10].to_string()
    }
}

/// Format an ISO datetime string as "Jan 20, 2026 9:35 PM".
///
/// Falls back to date-only if the time portion is missing.
pub fn format_datetime_human(date_str: &str) -> String {
    let date_part = format_date_human(date_str);

    // Need at least "YYYY-MM-DDTHH:MM" (16 chars)
    if date_str.len() < 16 {
        return date_part;
    }

    let hour_str = &date_str[11..13];
    let min_str = &date_str[14..16];

    let hour: u32 = match hour_str.parse() {
        Ok(h) => h,
        Err(_) => return date_part,
    };

    let (display_hour, ampm) = match hour {
        0 => (12, "AM"),
        1..=11 => (hour, "AM"),
        12 => (12, "PM"),
        _ => (hour - 12, "PM"),
    };

    format!("{} {}:{} {}", date_part, display_hour, min_str, ampm)
}

/// Format a dollar amount with grouping separators and two decimals.
pub fn format_money(amount: f64) -> String {
    let cents = (amount.abs() * 100.0).round() as u64;
    let whole = cents / 100;
    let frac = cents % 100;

    let digits = whole.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    let sign = if amount < 0.0 && cents > 0 { "-" } else { "" };
    format!("{}${}.{:02}", sign, grouped, frac)
}

/// Format a percentage to one decimal place, e.g. "245.3%".
pub fn format_percent(value: f64) -> String {
    format!("{:.1}%", value)
}

/// Money, or the N/A placeholder when absent.
pub fn money_or_na(amount: Option<f64>) -> String {
    amount.map(format_money).unwrap_or_else(|| NOT_AVAILABLE.to_string())
}

/// Short date, or the N/A placeholder when absent.
pub fn date_or_na(date_str: Option<&str>) -> String {
    match date_str {
        Some(s) if !s.trim().is_empty() => format_date_human(s),
        _ => NOT_AVAILABLE.to_string(),
    }
}
