use crate::core::calculator::{CalculationOptions, Calculator};
use crate::core::{BatchOutcome, BatchOutput, CalculationRequest, ConfigProvider, Pipeline, Storage};
use crate::domain::model::GRID_LAYOUT;
use crate::utils::error::{NumerologyError, Result};

pub const CSV_OUTPUT_FILE: &str = "numerology_results.csv";
pub const JSON_OUTPUT_FILE: &str = "numerology_results.json";

const CSV_HEADER: [&str; 9] = [
    "line",
    "name",
    "birth_date",
    "total",
    "name_number",
    "bhagyank",
    "moolank",
    "grid",
    "error",
];

/// Reads name/birth date rows from CSV, calculates each one and writes CSV + JSON results.
pub struct BatchPipeline<S: Storage, C: ConfigProvider> {
    source: S,
    sink: S,
    config: C,
    input: String,
}

impl<S: Storage, C: ConfigProvider> BatchPipeline<S, C> {
    pub fn new(source: S, sink: S, config: C, input: impl Into<String>) -> Self {
        Self {
            source,
            sink,
            config,
            input: input.into(),
        }
    }

    fn calculator(&self) -> Calculator {
        Calculator::new(CalculationOptions::from_config(&self.config))
    }
}

fn digit_cell(value: Option<u8>) -> String {
    value.map(|d| d.to_string()).unwrap_or_default()
}

fn csv_row(outcome: &BatchOutcome) -> Vec<String> {
    let line = outcome.line.to_string();
    let birth_date = outcome.request.birth_date.clone().unwrap_or_default();
    let error = outcome.error.clone().unwrap_or_default();

    match &outcome.result {
        Some(result) => {
            // 依顯示順序 3,1,9 / 6,7,5 / 2,8,4 以 | 分隔
            let grid = result
                .grid
                .as_ref()
                .map(|grid| {
                    GRID_LAYOUT
                        .iter()
                        .flatten()
                        .map(|&digit| grid.cell(digit))
                        .collect::<Vec<_>>()
                        .join("|")
                })
                .unwrap_or_default();

            vec![
                line,
                result.name.clone(),
                birth_date,
                result.total.to_string(),
                result.name_number.final_digit().to_string(),
                digit_cell(result.bhagyank.as_ref().map(|r| r.final_digit())),
                digit_cell(result.moolank.as_ref().map(|r| r.final_digit())),
                grid,
                error,
            ]
        }
        None => vec![
            line,
            outcome.request.name.clone(),
            birth_date,
            String::new(),
            String::new(),
            String::new(),
            String::new(),
            String::new(),
            error,
        ],
    }
}

#[async_trait::async_trait]
impl<S: Storage, C: ConfigProvider> Pipeline for BatchPipeline<S, C> {
    async fn extract(&self) -> Result<Vec<CalculationRequest>> {
        tracing::debug!("Reading batch input from: {}", self.source.location(&self.input));
        let data = self.source.read_file(&self.input).await?;

        let mut reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(data.as_slice());

        let headers = reader.headers()?.clone();
        if !headers.iter().any(|h| h == "name") {
            return Err(NumerologyError::CsvError(csv::Error::from(std::io::Error::new(
                std::io::ErrorKind::InvalidData,
                format!("missing 'name' column in header: {:?}", headers),
            ))));
        }

        let mut requests = Vec::new();
        for row in reader.deserialize::<CalculationRequest>() {
            requests.push(row?);
        }

        tracing::debug!("Parsed {} rows", requests.len());
        Ok(requests)
    }

    async fn transform(&self, data: Vec<CalculationRequest>) -> Result<BatchOutput> {
        let calculator = self.calculator();

        let outcomes: Vec<BatchOutcome> = data
            .into_iter()
            .enumerate()
            .map(|(index, request)| {
                // 第 1 行是標題
                let line = index + 2;
                match calculator.calculate(&request) {
                    Ok(result) => BatchOutcome {
                        line,
                        request,
                        result: Some(result),
                        error: None,
                    },
                    Err(e) => {
                        tracing::warn!("⚠️ Line {} skipped: {}", line, e);
                        BatchOutcome {
                            line,
                            request,
                            result: None,
                            error: Some(e.to_string()),
                        }
                    }
                }
            })
            .collect();

        let mut writer = csv::Writer::from_writer(Vec::new());
        writer.write_record(CSV_HEADER)?;
        for outcome in &outcomes {
            writer.write_record(csv_row(outcome))?;
        }
        let csv_bytes = writer.into_inner().map_err(|e| NumerologyError::IoError(e.into_error()))?;
        let csv_output = String::from_utf8(csv_bytes).map_err(|e| NumerologyError::ConfigError {
            message: format!("CSV output is not UTF-8: {}", e),
        })?;

        let json_output = serde_json::to_string_pretty(&outcomes)?;

        Ok(BatchOutput {
            outcomes,
            csv_output,
            json_output,
        })
    }

    async fn load(&self, output: BatchOutput) -> Result<String> {
        tracing::debug!(
            "Writing {} results to {}",
            output.outcomes.len(),
            self.config.output_path()
        );

        self.sink
            .write_file(CSV_OUTPUT_FILE, output.csv_output.as_bytes())
            .await?;
        self.sink
            .write_file(JSON_OUTPUT_FILE, output.json_output.as_bytes())
            .await?;

        Ok(self.sink.location(CSV_OUTPUT_FILE))
    }
}
