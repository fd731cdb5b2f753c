pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::{CliConfig, LogFormat};

pub use adapters::{endpoints::Endpoints, http::StatsClient, sink::MemorySink, sink::StdoutSink};
pub use config::toml_config::TomlConfig;
pub use core::{etl::EtlEngine, pipeline::OnCourtPipeline};
pub use domain::ports::OutputFormat;
pub use utils::error::{OnCourtError, Result};
