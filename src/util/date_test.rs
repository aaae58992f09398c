use super::*;

// =============================================================
// format_date
// =============================================================

#[test]
fn format_date_empty_input_is_placeholder() {
    assert_eq!(format_date(""), "-");
}

#[test]
fn format_date_garbage_input_is_placeholder() {
    assert_eq!(format_date("not-a-date"), "-");
}

#[test]
fn format_date_bare_date_is_zero_padded() {
    assert_eq!(format_date("2024-03-05"), "05.03.2024");
}

#[test]
fn format_date_accepts_full_timestamp() {
    assert_eq!(format_date("2024-03-05T08:07:00"), "05.03.2024");
}

#[test]
fn format_date_accepts_rfc3339() {
    assert_eq!(format_date("2024-12-31T23:59:59Z"), "31.12.2024");
}

#[test]
fn format_date_trims_whitespace() {
    assert_eq!(format_date("  2024-03-05  "), "05.03.2024");
}

// =============================================================
// format_date_time
// =============================================================

#[test]
fn format_date_time_empty_input_is_placeholder() {
    assert_eq!(format_date_time(""), "-");
}

#[test]
fn format_date_time_garbage_input_is_placeholder() {
    assert_eq!(format_date_time("2024-13-99T99:99:99"), "-");
}

#[test]
fn format_date_time_is_zero_padded_24h() {
    assert_eq!(format_date_time("2024-03-05T08:07:00"), "05.03.2024 08:07");
}

#[test]
fn format_date_time_afternoon_stays_24h() {
    assert_eq!(format_date_time("2024-03-05T17:45:12"), "05.03.2024 17:45");
}

#[test]
fn format_date_time_accepts_space_separator() {
    assert_eq!(format_date_time("2024-03-05 08:07:00"), "05.03.2024 08:07");
}

#[test]
fn format_date_time_bare_date_is_midnight() {
    assert_eq!(format_date_time("2024-03-05"), "05.03.2024 00:00");
}

#[test]
fn format_date_time_accepts_fractional_seconds() {
    assert_eq!(format_date_time("2024-03-05T08:07:00.123"), "05.03.2024 08:07");
}
