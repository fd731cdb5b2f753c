use crate::domain::model::TimeWindow;
use crate::utils::error::{OnCourtError, Result};
use url::Url;

pub const DEFAULT_BASE_URL: &str = "https://stats.nba.com/stats";

const START_PERIOD: &str = "0";
const END_PERIOD: &str = "14";
/// Range values are tenths of a second since tip-off.
const RANGE_TYPE_ELAPSED: &str = "2";

/// URL builders for the two stats endpoints used by the pipeline.
#[derive(Debug, Clone)]
pub struct Endpoints {
    base: String,
}

impl Endpoints {
    pub fn new(base_url: &str) -> Self {
        Self {
            base: base_url.trim_end_matches('/').to_string(),
        }
    }

    fn build(&self, endpoint: &str, params: &[(&str, &str)]) -> Result<String> {
        let raw = format!("{}/{}/", self.base, endpoint);
        Url::parse_with_params(&raw, params)
            .map(String::from)
            .map_err(|e| OnCourtError::InvalidConfigValueError {
                field: "base_url".to_string(),
                value: self.base.clone(),
                reason: e.to_string(),
            })
    }

    pub fn play_by_play(&self, game_id: &str) -> Result<String> {
        self.build(
            "playbyplayv2",
            &[
                ("gameId", game_id),
                ("startPeriod", START_PERIOD),
                ("endPeriod", END_PERIOD),
            ],
        )
    }

    pub fn windowed_boxscore(&self, game_id: &str, window: &TimeWindow) -> Result<String> {
        let lower = window.lower.to_string();
        let upper = window.upper.to_string();
        self.build(
            "boxscoreadvancedv2",
            &[
                ("gameId", game_id),
                ("startPeriod", START_PERIOD),
                ("endPeriod", END_PERIOD),
                ("startRange", lower.as_str()),
                ("endRange", upper.as_str()),
                ("rangeType", RANGE_TYPE_ELAPSED),
            ],
        )
    }
}

impl Default for Endpoints {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_play_by_play_url() {
        let url = Endpoints::default().play_by_play("0041700404").unwrap();
        assert_eq!(
            url,
            "https://stats.nba.com/stats/playbyplayv2/?gameId=0041700404&startPeriod=0&endPeriod=14"
        );
    }

    #[test]
    fn test_windowed_boxscore_url() {
        let window = TimeWindow { lower: 7291, upper: 7309 };
        let url = Endpoints::new("http://127.0.0.1:5000/")
            .windowed_boxscore("0041700404", &window)
            .unwrap();
        assert_eq!(
            url,
            "http://127.0.0.1:5000/boxscoreadvancedv2/?gameId=0041700404&startPeriod=0&endPeriod=14&startRange=7291&endRange=7309&rangeType=2"
        );
    }

    #[test]
    fn test_invalid_base_url() {
        assert!(matches!(
            Endpoints::new("not a url").play_by_play("0041700404"),
            Err(OnCourtError::InvalidConfigValueError { .. })
        ));
    }
}
