use crate::domain::model::{BirthDate, DigitGrid};
use std::collections::BTreeMap;

/// Decimal digits of `n` without padding, most significant first.
fn decimal_digits(n: u32) -> Vec<u8> {
    n.to_string()
        .chars()
        .filter_map(|c| c.to_digit(10))
        .map(|d| d as u8)
        .collect()
}

impl DigitGrid {
    /// Tallies the last two year digits, month, day, the bhagyank and,
    /// for days 10 and later, the moolank.
    pub fn build(date: &BirthDate, bhagyank: u8, moolank: u8) -> Self {
        // 西元前年份取絕對值的末兩位
        let year_last_two = date.year.unsigned_abs() % 100;

        let mut contributing_digits = decimal_digits(year_last_two);
        contributing_digits.extend(decimal_digits(date.month));
        contributing_digits.extend(decimal_digits(date.day));
        contributing_digits.push(bhagyank);
        if date.day >= 10 {
            contributing_digits.push(moolank);
        }

        let cells = (1..=9u8)
            .map(|digit| {
                let count = contributing_digits.iter().filter(|&&d| d == digit).count();
                (digit, digit.to_string().repeat(count))
            })
            .collect::<BTreeMap<_, _>>();

        tracing::debug!(
            "Grid for {} built from digits {:?}",
            date.value,
            contributing_digits
        );

        Self {
            contributing_digits,
            cells,
        }
    }
}
