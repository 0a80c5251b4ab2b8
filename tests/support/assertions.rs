use satboard::domain::ScoreRecord;

/// Ranks are dense, start at 1, and follow scores from highest to lowest.
pub fn assert_dense_ranking(records: &[ScoreRecord]) {
    for a in records {
        assert!(a.rank >= 1, "{} has rank {}", a.name, a.rank);
        for b in records {
            if a.score > b.score {
                assert!(
                    a.rank < b.rank,
                    "{} ({}) should outrank {} ({})",
                    a.name,
                    a.score.value(),
                    b.name,
                    b.score.value()
                );
            }
            if a.score == b.score {
                assert_eq!(a.rank, b.rank, "{} and {} tie", a.name, b.name);
            }
        }
    }

    let mut ranks: Vec<u32> = records.iter().map(|r| r.rank).collect();
    ranks.sort_unstable();
    ranks.dedup();
    let expected: Vec<u32> = (1..=ranks.len() as u32).collect();
    assert_eq!(ranks, expected, "ranks have gaps");
}

/// Every stored pass flag matches the pass mark.
pub fn assert_pass_flags(records: &[ScoreRecord]) {
    for r in records {
        assert_eq!(r.passed, r.score.passed(), "{} pass flag", r.name);
    }
}

pub fn ranks_by_name(records: &[ScoreRecord]) -> Vec<(String, u32)> {
    let mut pairs: Vec<(String, u32)> = records.iter().map(|r| (r.name.clone(), r.rank)).collect();
    pairs.sort();
    pairs
}
