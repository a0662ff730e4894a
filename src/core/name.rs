use crate::core::letters::{letters_total, map_letters};
use crate::core::reduce::reduce;
use crate::domain::model::NameNumber;

/// Name number of `name`, or `None` when there is nothing but whitespace.
pub fn name_number(name: &str) -> Option<NameNumber> {
    if name.trim().is_empty() {
        return None;
    }

    let letter_values = map_letters(name);
    let total = letters_total(&letter_values);
    tracing::debug!("Name '{}' letter total: {}", name, total);

    Some(NameNumber {
        letter_values,
        total,
        reduction: reduce(total),
    })
}
