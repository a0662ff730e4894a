use numerology_calc::core::letters::letter_value;
use numerology_calc::core::reduce::reduce;
use numerology_calc::{CalculationOptions, CalculationRequest, Calculator, NumerologyError};

fn calculate(name: &str, birth_date: Option<&str>) -> numerology_calc::Result<numerology_calc::NumerologyResult> {
    Calculator::default().calculate(&CalculationRequest::new(name, birth_date))
}

/// "John Smith" born 2024-03-15
#[test]
fn test_john_smith_scenario() -> anyhow::Result<()> {
    let result = calculate("John Smith", Some("2024-03-15"))?;

    let letters: String = result.letter_values.iter().map(|v| v.letter).collect();
    let values: Vec<u8> = result.letter_values.iter().map(|v| v.value).collect();
    assert_eq!(letters, "JOHNSMITH");
    assert_eq!(values, vec![1, 7, 5, 5, 3, 4, 1, 4, 5]);
    assert_eq!(result.total, 35);
    assert_eq!(result.name_number.steps(), &[35, 8]);

    let bhagyank = result.bhagyank.as_ref().expect("bhagyank");
    assert_eq!(bhagyank.steps(), &[17, 8]);
    let moolank = result.moolank.as_ref().expect("moolank");
    assert_eq!(moolank.steps(), &[15, 6]);

    let grid = result.grid.as_ref().expect("grid");
    for digit in [1, 2, 3, 4, 5, 6, 8] {
        assert_eq!(grid.count(digit), 1, "digit {}", digit);
    }
    assert_eq!(grid.cell(7), "");
    assert_eq!(grid.cell(9), "");
    Ok(())
}

#[test]
fn test_empty_name_is_missing_input() {
    let err = calculate("", Some("2024-03-15")).unwrap_err();
    assert!(matches!(err, NumerologyError::MissingInput { .. }));
    assert_eq!(err.user_friendly_message(), "Please enter a name");
}

#[test]
fn test_unparseable_date_is_invalid_date() {
    for date in ["2024-03-32", "March 15", "2024/03/15", "0000-00-00"] {
        let err = calculate("John Smith", Some(date)).unwrap_err();
        assert!(matches!(err, NumerologyError::InvalidDate { .. }), "{}", date);
    }
}

#[test]
fn test_letter_examples() {
    assert_eq!(letter_value('Z'), 7);
    assert_eq!(letter_value('1'), 0);
}

#[test]
fn test_reduction_properties() {
    for n in [0u64, 5, 9, 10, 19, 35, 99, 12345, 987_654_321] {
        let r = reduce(n);
        assert!(r.final_digit() <= 9);
        assert_eq!(r.initial(), n);
        if n < 10 {
            assert_eq!(r.steps(), &[n]);
        }
    }
}

#[test]
fn test_name_number_ignores_case_and_spacing() -> anyhow::Result<()> {
    let base = calculate("Ada Lovelace", Some("1815-12-10"))?;
    let variant = calculate("  ada   LOVELACE ", Some("1815-12-10"))?;
    assert_eq!(base.total, variant.total);
    assert_eq!(base.name_number, variant.name_number);
    Ok(())
}

#[test]
fn test_grid_tally_matches_contributing_digits() -> anyhow::Result<()> {
    // day >= 10: 2 year + 2 month + 2 day + bhagyank + moolank
    let late = calculate("Ada Lovelace", Some("1985-12-31"))?;
    let grid = late.grid.expect("grid");
    assert_eq!(grid.contributing_digits.len(), 8);
    let tallied: usize = (1..=9).map(|d| grid.count(d)).sum();
    let zeros = grid.contributing_digits.iter().filter(|&&d| d == 0).count();
    assert_eq!(tallied + zeros, 8);

    // day < 10: moolank left out
    let early = calculate("Ada Lovelace", Some("1985-12-03"))?;
    assert_eq!(early.grid.expect("grid").contributing_digits.len(), 6);
    Ok(())
}

#[test]
fn test_name_only_variant() -> anyhow::Result<()> {
    let calculator = Calculator::new(CalculationOptions {
        require_birth_date: false,
    });
    let result = calculator.calculate(&CalculationRequest::new("John Smith", None::<&str>))?;
    assert_eq!(result.name_number.final_digit(), 8);
    assert!(result.grid.is_none());
    Ok(())
}
