//! Student and criterion command and query handlers.

mod add_criterion;
mod list_roster;
mod register_student;
mod remove_criterion;
mod remove_student;
mod seed_default_criteria;
mod update_criterion;
mod update_student;

pub use add_criterion::{AddCriterionCommand, AddCriterionHandler};
pub use list_roster::{ListCriteriaHandler, ListStudentsHandler};
pub use register_student::{RegisterStudentCommand, RegisterStudentHandler, RegisterStudentResult};
pub use remove_criterion::{RemoveCriterionCommand, RemoveCriterionHandler};
pub use remove_student::{RemoveStudentCommand, RemoveStudentHandler};
pub use seed_default_criteria::SeedDefaultCriteriaHandler;
pub use update_criterion::{UpdateCriterionCommand, UpdateCriterionHandler};
pub use update_student::{UpdateStudentCommand, UpdateStudentHandler};
