use crate::core::Pipeline;
use crate::utils::error::Result;

pub struct EtlEngine<P: Pipeline> {
    pipeline: P,
}

impl<P: Pipeline> EtlEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self { pipeline }
    }

    /// Runs extract, transform and load once. Returns the rendered output.
    pub async fn run(&self) -> Result<String> {
        tracing::info!("Starting ETL process...");

        // Extract
        let raw_data = self.pipeline.extract().await?;
        tracing::info!("Extracted {} records", raw_data.len());

        // Transform
        let transformed = self.pipeline.transform(raw_data).await?;
        tracing::info!(
            "Transformed into {} on-court records across {} periods",
            transformed.players.len(),
            transformed.boundaries.len()
        );

        // Load
        let output = self.pipeline.load(transformed).await?;
        tracing::info!("Loaded {} bytes of output", output.len());

        Ok(output)
    }
}
