use satboard::domain::{Location, NewScoreRecord, Score, ScoreUpdate};

pub fn location() -> Location {
    Location::try_new("1 Main St", "Springfield", "US", "12345").expect("valid location")
}

pub fn new_record(name: &str, score: i64) -> NewScoreRecord {
    NewScoreRecord::try_new(name, location(), Score::try_new(score).expect("valid score"))
        .expect("valid record")
}

pub fn score_update(name: &str, score: i64) -> ScoreUpdate {
    ScoreUpdate::try_new(name, Score::try_new(score).expect("valid score")).expect("valid update")
}
