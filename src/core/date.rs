use crate::core::reduce::reduce;
use crate::domain::model::{BirthDate, Reduction};
use crate::utils::error::{NumerologyError, Result};
use chrono::{Datelike, NaiveDate};

pub const DATE_FORMAT: &str = "%Y-%m-%d";

impl BirthDate {
    /// Parses an ISO `YYYY-MM-DD` date. Surrounding whitespace is ignored.
    pub fn parse(input: &str) -> Result<Self> {
        let value = input.trim();
        if value.is_empty() {
            return Err(NumerologyError::missing("birth_date"));
        }

        let date = NaiveDate::parse_from_str(value, DATE_FORMAT).map_err(|e| {
            NumerologyError::InvalidDate {
                value: value.to_string(),
                reason: e.to_string(),
            }
        })?;

        Ok(Self {
            value: value.to_string(),
            year: date.year(),
            month: date.month(),
            day: date.day(),
        })
    }

    /// Every decimal digit of the date text, in order.
    pub fn digits(&self) -> impl Iterator<Item = u8> + '_ {
        self.value
            .chars()
            .filter_map(|c| c.to_digit(10))
            .map(|d| d as u8)
    }
}

/// Life-path number: all digits of the date summed, then reduced.
pub fn bhagyank(date: &BirthDate) -> Reduction {
    let total: u64 = date.digits().map(u64::from).sum();
    reduce(total)
}

/// Day-of-month reduced directly.
pub fn moolank(date: &BirthDate) -> Reduction {
    reduce(u64::from(date.day))
}
