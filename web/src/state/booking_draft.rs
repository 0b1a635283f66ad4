use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use thiserror::Error;

/// Format used by `<input type="date">` values.
pub const DATE_INPUT_FORMAT: &str = "%Y-%m-%d";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BookingValidationError {
    #[error("Please select check-in and check-out dates")]
    MissingDates,
    #[error("Check-out must be on or after check-in")]
    CheckOutBeforeCheckIn,
    #[error("This hotel is not available for booking")]
    Unavailable,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("guest count must be between 1 and 8, got {value}")]
pub struct GuestCountError {
    pub value: i64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct GuestCount(u8);

impl GuestCount {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 8;

    pub fn get(self) -> u8 {
        self.0
    }

    /// Every selectable count, smallest first.
    pub fn choices() -> impl Iterator<Item = GuestCount> {
        (Self::MIN..=Self::MAX).map(GuestCount)
    }

    pub fn label(self) -> String {
        if self.0 == 1 {
            "1 Guest".to_string()
        } else {
            format!("{} Guests", self.0)
        }
    }
}

impl Default for GuestCount {
    fn default() -> Self {
        GuestCount(2)
    }
}

impl TryFrom<u8> for GuestCount {
    type Error = GuestCountError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        if (Self::MIN..=Self::MAX).contains(&value) {
            Ok(GuestCount(value))
        } else {
            Err(GuestCountError {
                value: i64::from(value),
            })
        }
    }
}

impl FromStr for GuestCount {
    type Err = GuestCountError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value: i64 = s.trim().parse().map_err(|_| GuestCountError { value: 0 })?;
        u8::try_from(value)
            .map_err(|_| GuestCountError { value })
            .and_then(GuestCount::try_from)
    }
}

impl fmt::Display for GuestCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Whole nights between two calendar dates, or `None` when check-out comes
/// before check-in. Same-day stays are zero nights.
pub fn compute_nights(check_in: NaiveDate, check_out: NaiveDate) -> Option<u32> {
    let days = check_out.signed_duration_since(check_in).num_days();
    u32::try_from(days).ok()
}

pub fn compute_total(nights: u32, price_per_night: f64) -> f64 {
    f64::from(nights) * price_per_night
}

/// Empty or malformed input means the date is unset.
pub fn parse_date_input(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), DATE_INPUT_FORMAT).ok()
}

pub fn format_date_input(date: NaiveDate) -> String {
    date.format(DATE_INPUT_FORMAT).to_string()
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StayQuote {
    pub nights: u32,
    pub price_per_night: f64,
    pub total: f64,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct BookingDraft {
    pub check_in: Option<NaiveDate>,
    pub check_out: Option<NaiveDate>,
    pub guests: GuestCount,
    /// Result of the last booking attempt, shown inline under the form.
    /// Any edit clears it.
    pub validation_error: Option<BookingValidationError>,
}

impl BookingDraft {
    pub fn set_check_in(&mut self, date: Option<NaiveDate>) {
        self.check_in = date;
        self.validation_error = None;
    }

    pub fn set_check_out(&mut self, date: Option<NaiveDate>) {
        self.check_out = date;
        self.validation_error = None;
    }

    pub fn set_guests(&mut self, guests: GuestCount) {
        self.guests = guests;
        self.validation_error = None;
    }

    pub fn nights(&self) -> Option<u32> {
        compute_nights(self.check_in?, self.check_out?)
    }

    /// Both dates set but in the wrong order.
    pub fn is_range_reversed(&self) -> bool {
        matches!((self.check_in, self.check_out), (Some(check_in), Some(check_out)) if check_out < check_in)
    }

    /// `None` unless both dates are set and ordered; the summary is hidden then.
    pub fn quote(&self, price_per_night: f64) -> Option<StayQuote> {
        let nights = self.nights()?;
        Some(StayQuote {
            nights,
            price_per_night,
            total: compute_total(nights, price_per_night),
        })
    }

    pub fn min_check_in(today: NaiveDate) -> NaiveDate {
        today
    }

    pub fn min_check_out(&self, today: NaiveDate) -> NaiveDate {
        self.check_in.unwrap_or(today)
    }

    pub fn validate(&self) -> Result<(NaiveDate, NaiveDate), BookingValidationError> {
        let (Some(check_in), Some(check_out)) = (self.check_in, self.check_out) else {
            return Err(BookingValidationError::MissingDates);
        };

        if check_out < check_in {
            return Err(BookingValidationError::CheckOutBeforeCheckIn);
        }

        Ok((check_in, check_out))
    }
}
