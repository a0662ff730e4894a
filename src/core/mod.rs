pub mod calculator;
pub mod date;
pub mod engine;
pub mod grid;
pub mod letters;
pub mod name;
pub mod pipeline;
pub mod reduce;
pub mod render;

pub use crate::domain::model::{
    BatchOutcome, BatchOutput, BirthDate, CalculationRequest, DigitGrid, LetterValue, NameNumber,
    NumerologyResult, Reduction,
};
pub use crate::domain::ports::{ConfigProvider, Pipeline, Storage};
pub use crate::utils::error::Result;
