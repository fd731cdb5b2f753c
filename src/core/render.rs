use crate::core::columns::{PERIOD, PLAYER_ID, PLAYER_NAME};
use crate::domain::model::OnCourtPlayer;
use crate::domain::ports::OutputFormat;
use crate::utils::error::{OnCourtError, Result};
use tabled::settings::Style;
use tabled::Tabled;

const OUTPUT_COLUMNS: [&str; 3] = [PLAYER_ID, PLAYER_NAME, PERIOD];

pub fn render(players: &[OnCourtPlayer], format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Table => Ok(render_table(players)),
        OutputFormat::Csv => render_delimited(players, b','),
        OutputFormat::Tsv => render_delimited(players, b'\t'),
        OutputFormat::Json => {
            let mut json = serde_json::to_string_pretty(players)?;
            json.push('\n');
            Ok(json)
        }
    }
}

fn render_delimited(players: &[OnCourtPlayer], delimiter: u8) -> Result<String> {
    let mut writer = csv::WriterBuilder::new()
        .delimiter(delimiter)
        .from_writer(Vec::new());

    writer.write_record(OUTPUT_COLUMNS)?;
    for player in players {
        writer.write_record([
            player.player_id.to_string(),
            player.player_name.clone(),
            player.period.to_string(),
        ])?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| OnCourtError::IoError(e.into_error()))?;
    String::from_utf8(bytes).map_err(|e| OnCourtError::ProcessingError {
        message: format!("rendered output is not UTF-8: {}", e),
    })
}

#[derive(Tabled)]
struct TableRow<'a> {
    #[tabled(rename = "")]
    index: usize,
    #[tabled(rename = "PLAYER_ID")]
    player_id: i64,
    #[tabled(rename = "PLAYER_NAME")]
    player_name: &'a str,
    #[tabled(rename = "PERIOD")]
    period: u32,
}

/// Aligned text table. The leading index restarts at 0 for each period,
/// since every period's rows come from a separate boxscore query.
fn render_table(players: &[OnCourtPlayer]) -> String {
    let mut rows = Vec::with_capacity(players.len());
    let mut index = 0usize;
    let mut last_period = None;
    for player in players {
        if last_period != Some(player.period) {
            index = 0;
            last_period = Some(player.period);
        }
        rows.push(TableRow {
            index,
            player_id: player.player_id,
            player_name: &player.player_name,
            period: player.period,
        });
        index += 1;
    }

    let mut table = tabled::Table::new(rows);
    table.with(Style::blank());
    let mut out = table.to_string();
    out.push('\n');
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn players() -> Vec<OnCourtPlayer> {
        vec![
            OnCourtPlayer { player_id: 201939, player_name: "Stephen Curry".to_string(), period: 2 },
            OnCourtPlayer { player_id: 2544, player_name: "LeBron James".to_string(), period: 2 },
            OnCourtPlayer { player_id: 201142, player_name: "Kevin Durant".to_string(), period: 3 },
        ]
    }

    #[test]
    fn test_render_csv() {
        let csv = render(&players(), OutputFormat::Csv).unwrap();
        let lines: Vec<&str> = csv.lines().collect();
        assert_eq!(lines.len(), 4);
        assert_eq!(lines[0], "PLAYER_ID,PLAYER_NAME,PERIOD");
        assert_eq!(lines[1], "201939,Stephen Curry,2");
        assert_eq!(lines[3], "201142,Kevin Durant,3");
    }

    #[test]
    fn test_render_tsv() {
        let tsv = render(&players(), OutputFormat::Tsv).unwrap();
        assert_eq!(tsv.lines().nth(2), Some("2544\tLeBron James\t2"));
    }

    #[test]
    fn test_render_csv_quotes_commas() {
        let odd = vec![OnCourtPlayer { player_id: 1, player_name: "Nance, Larry Jr.".to_string(), period: 4 }];
        let csv = render(&odd, OutputFormat::Csv).unwrap();
        assert_eq!(csv.lines().nth(1), Some("1,\"Nance, Larry Jr.\",4"));
    }

    #[test]
    fn test_render_json() {
        let json = render(&players(), OutputFormat::Json).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed[2]["player_name"], "Kevin Durant");
        assert_eq!(parsed[2]["period"], 3);
    }

    #[test]
    fn test_render_table_restarts_index_per_period() {
        let table = render(&players(), OutputFormat::Table).unwrap();
        let rows: Vec<Vec<&str>> = table.lines().map(|l| l.split_whitespace().collect()).collect();
        assert_eq!(rows.len(), 4);
        assert_eq!(rows[0], vec!["PLAYER_ID", "PLAYER_NAME", "PERIOD"]);
        assert_eq!(rows[1], vec!["0", "201939", "Stephen", "Curry", "2"]);
        assert_eq!(rows[2], vec!["1", "2544", "LeBron", "James", "2"]);
        assert_eq!(rows[3], vec!["0", "201142", "Kevin", "Durant", "3"]);
    }

    #[test]
    fn test_render_table_columns_line_up() {
        let table = render(&players(), OutputFormat::Table).unwrap();
        let lines: Vec<&str> = table.lines().collect();
        let column = lines[0].find("PLAYER_NAME").unwrap();
        for line in &lines[1..] {
            assert!(line[column..].starts_with(|c: char| c.is_alphabetic()), "{line}");
        }
    }

    #[test]
    fn test_render_empty_table_has_header_only() {
        let table = render(&[], OutputFormat::Table).unwrap();
        assert_eq!(table.lines().count(), 1);
        assert!(table.contains("PLAYER_NAME"));
        let csv = render(&[], OutputFormat::Csv).unwrap();
        assert_eq!(csv.lines().collect::<Vec<_>>(), vec!["PLAYER_ID,PLAYER_NAME,PERIOD"]);
    }
}
