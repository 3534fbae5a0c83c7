//! In-Memory Assessment Store Adapter
//!
//! Keeps students, criteria and scores in memory.
//! Useful for tests, demos and hosts that persist elsewhere.

use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::domain::foundation::{CriterionId, StudentId};
use crate::domain::roster::{Criterion, ScoreEntry, Student};
use crate::ports::{AssessmentSnapshot, AssessmentStore, StoreError};

#[derive(Debug, Default)]
struct Records {
    students: Vec<Student>,
    criteria: Vec<Criterion>,
    scores: Vec<ScoreEntry>,
}

/// In-memory storage for assessment records
#[derive(Debug, Clone, Default)]
pub struct InMemoryAssessmentStore {
    records: Arc<RwLock<Records>>,
}

impl InMemoryAssessmentStore {
    /// Create a new empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store seeded with the default criteria
    pub fn with_default_criteria() -> Self {
        let store = Self::new();
        if let Ok(mut records) = store.records.write() {
            records.criteria = Criterion::default_set();
        }
        store
    }

    /// Clear all stored data (useful for tests)
    pub fn clear(&self) -> Result<(), StoreError> {
        let mut records = self.write()?;
        records.students.clear();
        records.criteria.clear();
        records.scores.clear();
        Ok(())
    }

    /// Get the number of stored scores
    pub fn score_count(&self) -> Result<usize, StoreError> {
        Ok(self.read()?.scores.len())
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, Records>, StoreError> {
        self.records.read().map_err(|_| StoreError::LockPoisoned)
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, Records>, StoreError> {
        self.records.write().map_err(|_| StoreError::LockPoisoned)
    }
}

impl AssessmentStore for InMemoryAssessmentStore {
    fn list_students(&self) -> Result<Vec<Student>, StoreError> {
        Ok(self.read()?.students.clone())
    }

    fn insert_student(&self, student: Student) -> Result<(), StoreError> {
        let mut records = self.write()?;
        if records.students.iter().any(|s| s.id == student.id) {
            return Err(StoreError::Duplicate {
                kind: "student",
                id: student.id.to_string(),
            });
        }
        records.students.push(student);
        Ok(())
    }

    fn update_student(&self, student: Student) -> Result<(), StoreError> {
        let mut records = self.write()?;
        let slot = records
            .students
            .iter_mut()
            .find(|s| s.id == student.id)
            .ok_or_else(|| StoreError::StudentNotFound(student.id.clone()))?;
        *slot = student;
        Ok(())
    }

    fn remove_student(&self, id: &StudentId) -> Result<Student, StoreError> {
        let mut records = self.write()?;
        let index = records
            .students
            .iter()
            .position(|s| &s.id == id)
            .ok_or_else(|| StoreError::StudentNotFound(id.clone()))?;
        let removed = records.students.remove(index);
        records.scores.retain(|e| &e.student_id != id);
        Ok(removed)
    }

    fn list_criteria(&self) -> Result<Vec<Criterion>, StoreError> {
        Ok(self.read()?.criteria.clone())
    }

    fn insert_criterion(&self, criterion: Criterion) -> Result<(), StoreError> {
        let mut records = self.write()?;
        if records.criteria.iter().any(|c| c.id == criterion.id) {
            return Err(StoreError::Duplicate {
                kind: "criterion",
                id: criterion.id.to_string(),
            });
        }
        records.criteria.push(criterion);
        Ok(())
    }

    fn update_criterion(&self, criterion: Criterion) -> Result<(), StoreError> {
        let mut records = self.write()?;
        let slot = records
            .criteria
            .iter_mut()
            .find(|c| c.id == criterion.id)
            .ok_or_else(|| StoreError::CriterionNotFound(criterion.id.clone()))?;
        *slot = criterion;
        Ok(())
    }

    fn remove_criterion(&self, id: &CriterionId) -> Result<Criterion, StoreError> {
        let mut records = self.write()?;
        let index = records
            .criteria
            .iter()
            .position(|c| &c.id == id)
            .ok_or_else(|| StoreError::CriterionNotFound(id.clone()))?;
        let removed = records.criteria.remove(index);
        records.scores.retain(|e| &e.criterion_id != id);
        Ok(removed)
    }

    fn assign_weights(&self, weights: &[(CriterionId, f64)]) -> Result<(), StoreError> {
        let mut records = self.write()?;
        if let Some((missing, _)) = weights
            .iter()
            .find(|(id, _)| !records.criteria.iter().any(|c| &c.id == id))
        {
            return Err(StoreError::CriterionNotFound(missing.clone()));
        }

        for criterion in records.criteria.iter_mut() {
            criterion.weight = weights
                .iter()
                .find(|(id, _)| id == &criterion.id)
                .map(|(_, weight)| *weight);
        }
        Ok(())
    }

    fn list_scores(&self) -> Result<Vec<ScoreEntry>, StoreError> {
        Ok(self.read()?.scores.clone())
    }

    fn upsert_scores(&self, entries: Vec<ScoreEntry>) -> Result<(), StoreError> {
        let mut records = self.write()?;
        records.scores.retain(|existing| {
            !entries
                .iter()
                .any(|new| existing.is_for(&new.student_id, &new.criterion_id))
        });
        records.scores.extend(entries);
        Ok(())
    }

    fn snapshot(&self) -> Result<AssessmentSnapshot, StoreError> {
        let records = self.read()?;
        Ok(AssessmentSnapshot {
            students: records.students.clone(),
            criteria: records.criteria.clone(),
            scores: records.scores.clone(),
        })
    }
}
