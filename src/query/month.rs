// src/query/month.rs
use chrono::Month;

/// Resolves a month query parameter to a calendar month.
///
/// Accepts English month names and their three-letter abbreviations in any
/// case ("March", "mar") as well as month numbers ("3", "03").
pub fn parse_month(param: &str) -> Option<Month> {
    let param = param.trim();
    if param.is_empty() {
        return None;
    }

    if param.bytes().all(|b| b.is_ascii_digit()) {
        return param.parse::<u8>().ok().and_then(|n| Month::try_from(n).ok());
    }

    param.parse::<Month>().ok()
}

/// The 1-based month number as compared against `EXTRACT(MONTH ...)`.
pub fn month_number(month: Month) -> i32 {
    month.number_from_month() as i32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_names_map_to_month_numbers() {
        let names = [
            "January", "February", "March", "April", "May", "June", "July", "August",
            "September", "October", "November", "December",
        ];

        for (i, name) in names.iter().enumerate() {
            let month = parse_month(name).unwrap_or_else(|| panic!("{name} should parse"));
            assert_eq!(month_number(month), i as i32 + 1);
        }
    }

    #[test]
    fn names_are_case_insensitive_and_may_be_abbreviated() {
        assert_eq!(parse_month("march"), Some(Month::March));
        assert_eq!(parse_month("MARCH"), Some(Month::March));
        assert_eq!(parse_month("Mar"), Some(Month::March));
        assert_eq!(parse_month("  sep "), Some(Month::September));
    }

    #[test]
    fn numeric_months_are_accepted() {
        assert_eq!(parse_month("3"), Some(Month::March));
        assert_eq!(parse_month("03"), Some(Month::March));
        assert_eq!(parse_month("12"), Some(Month::December));
    }

    #[test]
    fn unrecognized_months_resolve_to_none() {
        assert_eq!(parse_month(""), None);
        assert_eq!(parse_month("Smarch"), None);
        assert_eq!(parse_month("0"), None);
        assert_eq!(parse_month("13"), None);
        assert_eq!(parse_month("999"), None);
        assert_eq!(parse_month("-1"), None);
    }
}
