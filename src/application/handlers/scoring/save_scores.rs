//! SaveScoresHandler - Records a student's raw scores.

use std::sync::Arc;

use tracing::debug;

use crate::domain::ahp::{AhpError, ReferenceKind};
use crate::domain::foundation::{CriterionId, DomainError, RawScore, StudentId};
use crate::domain::roster::ScoreEntry;
use crate::ports::AssessmentStore;

/// Command to save one student's scores.
///
/// Scores are on the 0..=100 scale. A later entry for the same criterion
/// replaces an earlier one.
#[derive(Debug, Clone)]
pub struct SaveScoresCommand {
    pub student_id: StudentId,
    pub scores: Vec<(CriterionId, f64)>,
}

/// Result of a successful save.
#[derive(Debug, Clone, PartialEq)]
pub struct SaveScoresResult {
    pub saved: Vec<ScoreEntry>,
}

/// Handler for upserting scores.
pub struct SaveScoresHandler {
    store: Arc<dyn AssessmentStore>,
}

impl SaveScoresHandler {
    pub fn new(store: Arc<dyn AssessmentStore>) -> Self {
        Self { store }
    }

    pub fn handle(&self, cmd: SaveScoresCommand) -> Result<SaveScoresResult, DomainError> {
        // 1. Every reference must exist
        if !self
            .store
            .list_students()?
            .iter()
            .any(|s| s.id == cmd.student_id)
        {
            return Err(AhpError::missing(ReferenceKind::Student, cmd.student_id.as_str()).into());
        }
        let criteria = self.store.list_criteria()?;

        // 2. Validate and collapse repeated criteria
        let mut saved: Vec<ScoreEntry> = Vec::with_capacity(cmd.scores.len());
        for (criterion_id, value) in cmd.scores {
            if !criteria.iter().any(|c| c.id == criterion_id) {
                return Err(AhpError::missing(ReferenceKind::Criterion, criterion_id.as_str()).into());
            }
            let entry = ScoreEntry::new(cmd.student_id.clone(), criterion_id, RawScore::try_new(value)?);
            match saved
                .iter_mut()
                .find(|e| e.is_for(&entry.student_id, &entry.criterion_id))
            {
                Some(existing) => *existing = entry,
                None => saved.push(entry),
            }
        }

        // 3. Upsert
        self.store.upsert_scores(saved.clone())?;

        debug!(student_id = %cmd.student_id, scores = saved.len(), "Saved scores");
        Ok(SaveScoresResult { saved })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::InMemoryAssessmentStore;
    use crate::domain::foundation::ErrorCode;
    use crate::domain::roster::Student;

    fn setup() -> (Arc<InMemoryAssessmentStore>, SaveScoresHandler) {
        let store = Arc::new(InMemoryAssessmentStore::with_default_criteria());
        store
            .insert_student(Student::new(StudentId::new("s1").unwrap(), "Ani").unwrap())
            .unwrap();
        (store.clone(), SaveScoresHandler::new(store))
    }

    fn cid(id: &str) -> CriterionId {
        CriterionId::new(id).unwrap()
    }

    fn command(scores: Vec<(CriterionId, f64)>) -> SaveScoresCommand {
        SaveScoresCommand {
            student_id: StudentId::new("s1").unwrap(),
            scores,
        }
    }

    #[test]
    fn save_scores_upserts_existing_pairs() {
        let (store, handler) = setup();
        handler.handle(command(vec![(cid("1"), 70.0), (cid("2"), 60.0)])).unwrap();

        handler.handle(command(vec![(cid("1"), 90.0)])).unwrap();

        let scores = store.list_scores().unwrap();
        assert_eq!(scores.len(), 2);
        let math = scores.iter().find(|e| e.criterion_id == cid("1")).unwrap();
        assert_eq!(math.score.value(), 90.0);
    }

    #[test]
    fn save_scores_collapses_repeated_criteria() {
        let (store, handler) = setup();

        let result = handler
            .handle(command(vec![(cid("3"), 10.0), (cid("3"), 40.0)]))
            .unwrap();

        assert_eq!(result.saved.len(), 1);
        assert_eq!(store.list_scores().unwrap()[0].score.value(), 40.0);
    }

    #[test]
    fn save_scores_rejects_unknown_student() {
        let (store, handler) = setup();

        let err = handler
            .handle(SaveScoresCommand {
                student_id: StudentId::new("ghost").unwrap(),
                scores: vec![(cid("1"), 50.0)],
            })
            .unwrap_err();

        assert_eq!(err.code, ErrorCode::StudentNotFound);
        assert_eq!(err.details.get("id").map(String::as_str), Some("ghost"));
        assert_eq!(store.score_count().unwrap(), 0);
    }

    #[test]
    fn save_scores_rejects_unknown_criterion_without_partial_write() {
        let (store, handler) = setup();

        let err = handler
            .handle(command(vec![(cid("1"), 50.0), (cid("42"), 50.0)]))
            .unwrap_err();

        assert_eq!(err.code, ErrorCode::CriterionNotFound);
        assert_eq!(store.score_count().unwrap(), 0);
    }

    #[test]
    fn save_scores_rejects_out_of_range_value() {
        let (_, handler) = setup();

        let err = handler.handle(command(vec![(cid("1"), 100.4)])).unwrap_err();

        assert_eq!(err.code, ErrorCode::OutOfRange);
        assert!(err.message.ends_with("got 100.4"), "{}", err.message);
    }

    #[test]
    fn save_scores_rejects_non_finite_value() {
        let (store, handler) = setup();

        let err = handler.handle(command(vec![(cid("1"), f64::NAN)])).unwrap_err();

        assert_eq!(err.code, ErrorCode::InvalidFormat);
        assert_eq!(err.details.get("field").map(String::as_str), Some("raw_score"));
        assert_eq!(store.score_count().unwrap(), 0);
    }
}
