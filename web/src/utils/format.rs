//! Display helpers shared by the hotel and booking pages.

use chrono::{Local, NaiveDate};

/// The visitor's current calendar date. Uses the browser clock after hydration.
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// Whole dollar amounts drop the cents.
pub fn format_price(amount: f64) -> String {
    if amount.fract() == 0.0 {
        format!("${:.0}", amount)
    } else {
        format!("${:.2}", amount)
    }
}

pub fn format_stay_date(date: NaiveDate) -> String {
    date.format("%a, %b %-d, %Y").to_string()
}

pub fn format_review_count(count: u32) -> String {
    if count == 1 {
        "(1 review)".to_string()
    } else {
        format!("({} reviews)", count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_price() {
        assert_eq!(format_price(600.0), "$600");
        assert_eq!(format_price(149.5), "$149.50");
        assert_eq!(format_price(0.0), "$0");
    }

    #[test]
    fn test_format_stay_date() {
        let date = NaiveDate::from_ymd_opt(2024, 1, 4).unwrap();
        assert_eq!(format_stay_date(date), "Thu, Jan 4, 2024");
    }

    #[test]
    fn test_format_review_count() {
        assert_eq!(format_review_count(1), "(1 review)");
        assert_eq!(format_review_count(245), "(245 reviews)");
    }
}
