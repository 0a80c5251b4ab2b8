//! Handler for the `rerank` command.

use std::sync::Arc;

use tabled::{Table, Tabled};

use super::command::RerankArgs;
use super::with_database;
use crate::application::MutationService;
use crate::domain::ScoreRecord;
use crate::error::Result;
use crate::infrastructure::bootstrap::open_store;
use crate::infrastructure::config::Config;

#[derive(Tabled)]
struct RankRow {
    #[tabled(rename = "Rank")]
    rank: u32,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "SAT Score")]
    score: u8,
    #[tabled(rename = "Result")]
    result: &'static str,
}

impl From<&ScoreRecord> for RankRow {
    fn from(record: &ScoreRecord) -> Self {
        Self {
            rank: record.rank,
            name: record.name.clone(),
            score: record.score.value(),
            result: if record.passed { "Pass" } else { "Fail" },
        }
    }
}

/// Recompute ranks in one transaction and print the table.
pub async fn execute(config: Config, args: &RerankArgs) -> Result<()> {
    let config = with_database(config, args.db.database.as_deref())?;
    config.init_logging();

    let store = Arc::new(open_store(&config.database)?);
    let records = MutationService::new(store).rerank().await?;

    if args.json {
        let body = serde_json::json!({ "sat_scores": records });
        println!("{body:#}");
    } else {
        println!("{}", render_table(&records));
    }
    Ok(())
}

fn render_table(records: &[ScoreRecord]) -> String {
    let mut rows: Vec<RankRow> = records.iter().map(RankRow::from).collect();
    rows.sort_by(|a, b| a.rank.cmp(&b.rank).then_with(|| a.name.cmp(&b.name)));
    Table::new(rows).to_string()
}

#[cfg(test)]
mod tests {
    use chrono::Utc;

    use super::*;
    use crate::domain::{RecordId, Score};

    fn record(id: i32, name: &str, score: i64, rank: u32) -> ScoreRecord {
        let score = Score::try_new(score).unwrap();
        ScoreRecord {
            id: RecordId::new(id),
            name: name.into(),
            address: "a".into(),
            city: "c".into(),
            country: "n".into(),
            pincode: "p".into(),
            score,
            passed: score.passed(),
            rank,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn table_lists_records_by_rank() {
        let table = render_table(&[record(1, "Carol", 20, 2), record(2, "Alice", 90, 1)]);
        let alice = table.find("Alice").unwrap();
        let carol = table.find("Carol").unwrap();
        assert!(alice < carol);
        assert!(table.contains("SAT Score"));
        assert!(table.contains("Fail"));
    }
}
