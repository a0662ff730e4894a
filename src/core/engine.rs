use crate::core::Pipeline;
use crate::utils::error::Result;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BatchReport {
    pub output_path: String,
    pub total: usize,
    pub succeeded: usize,
    pub failed: usize,
}

pub struct BatchEngine<P: Pipeline> {
    pipeline: P,
}

impl<P: Pipeline> BatchEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self { pipeline }
    }

    pub async fn run(&self) -> Result<BatchReport> {
        tracing::info!("Starting batch calculation...");

        let requests = self.pipeline.extract().await?;
        tracing::info!("Read {} rows", requests.len());

        let output = self.pipeline.transform(requests).await?;
        let total = output.outcomes.len();
        let succeeded = output.outcomes.iter().filter(|o| o.is_success()).count();
        tracing::info!("Calculated {} of {} rows", succeeded, total);

        let output_path = self.pipeline.load(output).await?;
        tracing::info!("Results saved to: {}", output_path);

        Ok(BatchReport {
            output_path,
            total,
            succeeded,
            failed: total - succeeded,
        })
    }
}
