use crate::core::date::{bhagyank, moolank};
use crate::core::name::name_number;
use crate::domain::model::{BirthDate, CalculationRequest, DigitGrid, NumerologyResult};
use crate::domain::ports::ConfigProvider;
use crate::utils::error::{NumerologyError, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CalculationOptions {
    /// When false, a request without a birth date yields only the name number.
    pub require_birth_date: bool,
}

impl Default for CalculationOptions {
    fn default() -> Self {
        Self {
            require_birth_date: true,
        }
    }
}

impl CalculationOptions {
    pub fn from_config<C: ConfigProvider + ?Sized>(config: &C) -> Self {
        Self {
            require_birth_date: config.require_birth_date(),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct Calculator {
    options: CalculationOptions,
}

impl Calculator {
    pub fn new(options: CalculationOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> CalculationOptions {
        self.options
    }

    pub fn calculate(&self, request: &CalculationRequest) -> Result<NumerologyResult> {
        let name = name_number(&request.name).ok_or_else(|| NumerologyError::missing("name"))?;

        let birth_date = match request.birth_date.as_deref().map(str::trim) {
            Some(value) if !value.is_empty() => Some(BirthDate::parse(value)?),
            _ if self.options.require_birth_date => {
                return Err(NumerologyError::missing("birth_date"));
            }
            _ => None,
        };

        let (bhagyank, moolank, grid) = match &birth_date {
            Some(date) => {
                let b = bhagyank(date);
                let m = moolank(date);
                let grid = DigitGrid::build(date, b.final_digit(), m.final_digit());
                (Some(b), Some(m), Some(grid))
            }
            None => (None, None, None),
        };

        tracing::debug!(
            "Calculated '{}': name={}, bhagyank={:?}, moolank={:?}",
            request.name,
            name.reduction.final_digit(),
            bhagyank.as_ref().map(|r| r.final_digit()),
            moolank.as_ref().map(|r| r.final_digit())
        );

        Ok(NumerologyResult {
            name: request.name.trim().to_string(),
            letter_values: name.letter_values,
            total: name.total,
            name_number: name.reduction,
            birth_date,
            bhagyank,
            moolank,
            grid,
        })
    }
}
