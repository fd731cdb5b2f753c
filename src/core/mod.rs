pub mod boundary;
pub mod clock;
pub mod columns;
pub mod etl;
pub mod pipeline;
pub mod render;

pub use crate::domain::model::{Table, TransformResult};
pub use crate::domain::ports::{ConfigProvider, Pipeline, Sink, StatsSource};
pub use crate::utils::error::Result;
