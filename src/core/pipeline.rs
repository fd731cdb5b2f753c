use crate::adapters::endpoints::Endpoints;
use crate::core::boundary::{select_boundaries, window_for};
use crate::core::clock::derive_elapsed;
use crate::core::columns::{on_court_players, play_events};
use crate::core::render::render;
use crate::core::{ConfigProvider, Pipeline, Sink, StatsSource, Table, TransformResult};
use crate::domain::model::PeriodWindow;
use crate::utils::error::Result;

/// Play-by-play → period boundaries → windowed boxscores → on-court table.
pub struct OnCourtPipeline<F: StatsSource, S: Sink, C: ConfigProvider> {
    source: F,
    sink: S,
    config: C,
    endpoints: Endpoints,
}

impl<F: StatsSource, S: Sink, C: ConfigProvider> OnCourtPipeline<F, S, C> {
    pub fn new(source: F, sink: S, config: C) -> Self {
        let endpoints = Endpoints::new(config.base_url());
        Self {
            source,
            sink,
            config,
            endpoints,
        }
    }

    /// Derives the boxscore queries for a play-by-play table without issuing them.
    pub fn plan(&self, play_by_play: &Table) -> Result<Vec<PeriodWindow>> {
        let timed = derive_elapsed(play_events(play_by_play)?)?;
        tracing::debug!("Derived elapsed time for {} events", timed.len());

        select_boundaries(&timed)
            .into_iter()
            .map(|sample| {
                let window = window_for(&sample);
                let url = self
                    .endpoints
                    .windowed_boxscore(self.config.game_id(), &window)?;
                Ok(PeriodWindow {
                    sample,
                    window,
                    url,
                })
            })
            .collect()
    }
}

#[async_trait::async_trait]
impl<F: StatsSource, S: Sink, C: ConfigProvider> Pipeline for OnCourtPipeline<F, S, C> {
    async fn extract(&self) -> Result<Table> {
        let url = self.endpoints.play_by_play(self.config.game_id())?;
        tracing::info!("🏀 Fetching play-by-play for game {}", self.config.game_id());

        let table = self.source.fetch_table(&url).await?;
        tracing::info!("📊 Extracted {} play-by-play events", table.len());
        Ok(table)
    }

    async fn transform(&self, data: Table) -> Result<TransformResult> {
        let windows = self.plan(&data)?;
        tracing::info!("Found {} period boundaries", windows.len());

        let mut result = TransformResult::default();
        // 逐節依序查詢，不並行
        for planned in windows {
            tracing::debug!(
                "Period {}: boundary {} → range [{}, {}]",
                planned.sample.period,
                planned.sample.elapsed,
                planned.window.lower,
                planned.window.upper
            );

            let boxscore = self.source.fetch_table(&planned.url).await?;
            let players = on_court_players(&boxscore, planned.sample.period)?;
            tracing::info!(
                "Period {}: {} players on court",
                planned.sample.period,
                players.len()
            );

            result.players.extend(players);
            result.boundaries.push(planned.sample);
        }

        Ok(result)
    }

    async fn load(&self, result: TransformResult) -> Result<String> {
        let rendered = render(&result.players, self.config.output_format())?;
        self.sink.write_output(rendered.as_bytes()).await?;
        tracing::debug!("Wrote {} bytes of output", rendered.len());
        Ok(rendered)
    }
}
