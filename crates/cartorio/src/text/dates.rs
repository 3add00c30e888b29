use chrono::NaiveDate;

/// Sentinel used when a date cell is missing or unparseable.
pub const NO_DATE: &str = "SemData";

/// Accepted input layouts, tried in order: day-month-year, then
/// year-month-day.
const DATE_FORMATS: [&str; 2] = ["%d-%m-%Y", "%Y-%m-%d"];

/// Standardize a free-form date cell to `YYYY-MM-DD`.
///
/// Returns [`NO_DATE`] when the cell is empty, `"-"`, or the literal
/// `"nan"` an upstream spreadsheet reader leaves behind for blank cells,
/// and when no accepted layout parses. Total over any input; never panics.
pub fn standardize_date(text: &str) -> String {
    let trimmed = text.trim();
    if trimmed.is_empty() || trimmed == "-" || trimmed == "nan" {
        return NO_DATE.to_string();
    }

    for format in DATE_FORMATS {
        if let Ok(date) = NaiveDate::parse_from_str(trimmed, format) {
            return date.format("%Y-%m-%d").to_string();
        }
    }

    NO_DATE.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_day_month_year() {
        assert_eq!(standardize_date("15-03-2020"), "2020-03-15");
        assert_eq!(standardize_date("01-12-1999"), "1999-12-01");
    }

    #[test]
    fn test_year_month_day_passes_through_reformatted() {
        assert_eq!(standardize_date("2020-03-15"), "2020-03-15");
        assert_eq!(standardize_date("1987-1-5"), "1987-01-05");
    }

    #[test]
    fn test_missing_values() {
        assert_eq!(standardize_date(""), "SemData");
        assert_eq!(standardize_date("  "), "SemData");
        assert_eq!(standardize_date("-"), "SemData");
        assert_eq!(standardize_date("nan"), "SemData");
    }

    #[test]
    fn test_nan_sentinel_is_case_sensitive() {
        // "NaN" is not the spreadsheet sentinel; it simply fails to parse.
        assert_eq!(standardize_date("NaN"), "SemData");
        assert_eq!(standardize_date("nan "), "SemData");
    }

    #[test]
    fn test_unparseable_inputs_degrade_to_sentinel() {
        assert_eq!(standardize_date("15/03/2020"), "SemData");
        assert_eq!(standardize_date("março de 2020"), "SemData");
        assert_eq!(standardize_date("32-01-2020"), "SemData");
        assert_eq!(standardize_date("2020-13-01"), "SemData");
    }

    #[test]
    fn test_single_digit_day_and_month() {
        assert_eq!(standardize_date("5-3-2020"), "2020-03-05");
    }
}
