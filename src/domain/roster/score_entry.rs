//! Raw per-student, per-criterion score record.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{CriterionId, RawScore, StudentId};

/// One recorded score for a student on a criterion.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreEntry {
    pub student_id: StudentId,
    pub criterion_id: CriterionId,
    pub score: RawScore,
}

impl ScoreEntry {
    /// Creates a new score entry.
    pub fn new(student_id: StudentId, criterion_id: CriterionId, score: RawScore) -> Self {
        Self {
            student_id,
            criterion_id,
            score,
        }
    }

    /// Returns true if this entry records the given student/criterion pair.
    pub fn is_for(&self, student_id: &StudentId, criterion_id: &CriterionId) -> bool {
        &self.student_id == student_id && &self.criterion_id == criterion_id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn score_entry_is_for_matches_pair() {
        let student = StudentId::new("s1").unwrap();
        let criterion = CriterionId::new("c1").unwrap();
        let entry = ScoreEntry::new(student.clone(), criterion.clone(), RawScore::new(70.0));

        assert!(entry.is_for(&student, &criterion));
        assert!(!entry.is_for(&student, &CriterionId::new("c2").unwrap()));
    }

    #[test]
    fn score_entry_serializes_fields() {
        let entry = ScoreEntry::new(
            StudentId::new("s1").unwrap(),
            CriterionId::new("c1").unwrap(),
            RawScore::new(88.0),
        );
        let json = serde_json::to_string(&entry).unwrap();
        assert_eq!(json, r#"{"student_id":"s1","criterion_id":"c1","score":88.0}"#);
    }
}
