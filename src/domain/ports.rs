use crate::domain::model::{BatchOutput, CalculationRequest};
use crate::utils::error::Result;
use async_trait::async_trait;

pub trait Storage: Send + Sync {
    fn read_file(&self, path: &str) -> impl std::future::Future<Output = Result<Vec<u8>>> + Send;
    fn write_file(
        &self,
        path: &str,
        data: &[u8],
    ) -> impl std::future::Future<Output = Result<()>> + Send;
    fn location(&self, path: &str) -> String;
}

pub trait ConfigProvider: Send + Sync {
    fn output_path(&self) -> &str;
    fn output_format(&self) -> &str;
    fn require_birth_date(&self) -> bool;
    fn show_letters(&self) -> bool;
    fn show_steps(&self) -> bool;
}

#[async_trait]
pub trait Pipeline: Send + Sync {
    async fn extract(&self) -> Result<Vec<CalculationRequest>>;
    async fn transform(&self, data: Vec<CalculationRequest>) -> Result<BatchOutput>;
    async fn load(&self, output: BatchOutput) -> Result<String>;
}
