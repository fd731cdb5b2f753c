use crate::domain::model::{OnCourtPlayer, PlayEvent, Table};
use crate::utils::error::{OnCourtError, Result};
use serde_json::Value;

pub const PERIOD: &str = "PERIOD";
pub const PCTIMESTRING: &str = "PCTIMESTRING";
pub const PLAYER_ID: &str = "PLAYER_ID";
pub const PLAYER_NAME: &str = "PLAYER_NAME";

fn invalid(column: &str, row: usize, reason: impl Into<String>) -> OnCourtError {
    OnCourtError::InvalidFieldError {
        column: column.to_string(),
        row,
        reason: reason.into(),
    }
}

// stats.nba.com 偶爾把數字欄位編成字串
fn as_integer(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) => n.as_i64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

pub fn play_events(table: &Table) -> Result<Vec<PlayEvent>> {
    let period_idx = table.column_index(PERIOD)?;
    let clock_idx = table.column_index(PCTIMESTRING)?;

    table
        .rows()
        .iter()
        .enumerate()
        .map(|(row, values)| {
            let period = as_integer(&values[period_idx])
                .ok_or_else(|| invalid(PERIOD, row, format!("expected an integer, got {}", values[period_idx])))?;
            let period = u32::try_from(period)
                .map_err(|_| invalid(PERIOD, row, format!("period {} out of range", period)))?;

            let clock = values[clock_idx]
                .as_str()
                .ok_or_else(|| invalid(PCTIMESTRING, row, format!("expected a string, got {}", values[clock_idx])))?;

            Ok(PlayEvent {
                period,
                clock: clock.to_string(),
            })
        })
        .collect()
}

/// Tags every boxscore row with `period`.
pub fn on_court_players(table: &Table, period: u32) -> Result<Vec<OnCourtPlayer>> {
    let projected = table.select(&[PLAYER_ID, PLAYER_NAME])?;

    projected
        .rows()
        .iter()
        .enumerate()
        .map(|(row, values)| {
            let player_id = as_integer(&values[0])
                .ok_or_else(|| invalid(PLAYER_ID, row, format!("expected an integer, got {}", values[0])))?;
            let player_name = match &values[1] {
                Value::String(s) => s.clone(),
                Value::Null => String::new(),
                other => other.to_string(),
            };
            Ok(OnCourtPlayer {
                player_id,
                player_name,
                period,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn pbp(rows: Vec<Vec<Value>>) -> Table {
        Table::new(
            vec![
                "GAME_ID".to_string(),
                "EVENTNUM".to_string(),
                PERIOD.to_string(),
                PCTIMESTRING.to_string(),
            ],
            rows,
        )
        .unwrap()
    }

    #[test]
    fn test_play_events_reads_period_and_clock() {
        let table = pbp(vec![
            vec![json!("0041700404"), json!(0), json!(1), json!("12:00")],
            vec![json!("0041700404"), json!(1), json!("2"), json!("11:41")],
        ]);

        let events = play_events(&table).unwrap();
        assert_eq!(
            events,
            vec![
                PlayEvent { period: 1, clock: "12:00".to_string() },
                PlayEvent { period: 2, clock: "11:41".to_string() },
            ]
        );
    }

    #[test]
    fn test_play_events_requires_columns() {
        let table = Table::new(vec!["PERIOD".to_string()], vec![vec![json!(1)]]).unwrap();
        assert!(matches!(
            play_events(&table),
            Err(OnCourtError::ColumnNotFoundError { .. })
        ));
    }

    #[test]
    fn test_play_events_rejects_bad_values() {
        let table = pbp(vec![vec![json!("g"), json!(0), json!(null), json!("12:00")]]);
        assert!(matches!(
            play_events(&table),
            Err(OnCourtError::InvalidFieldError { row: 0, .. })
        ));

        let table = pbp(vec![vec![json!("g"), json!(0), json!(-1), json!("12:00")]]);
        assert!(play_events(&table).is_err());

        let table = pbp(vec![vec![json!("g"), json!(0), json!(1), json!(null)]]);
        assert!(play_events(&table).is_err());
    }

    #[test]
    fn test_on_court_players_tags_period() {
        let table = Table::new(
            vec!["GAME_ID".to_string(), "PLAYER_ID".to_string(), "PLAYER_NAME".to_string(), "MIN".to_string()],
            vec![
                vec![json!("0041700404"), json!(201939), json!("Stephen Curry"), json!("0:02")],
                vec![json!("0041700404"), json!(2544), json!("LeBron James"), json!("0:02")],
            ],
        )
        .unwrap();

        let players = on_court_players(&table, 3).unwrap();
        assert_eq!(players.len(), 2);
        assert_eq!(players[0].player_id, 201939);
        assert_eq!(players[1].player_name, "LeBron James");
        assert!(players.iter().all(|p| p.period == 3));
    }
}
