use crate::domain::model::Student;
use crate::utils::error::{CcrmError, Result};
use crate::utils::validation::{validate_email, validate_non_empty_string};

/// In-memory student registry. Insertion order is the listing order, so the
/// backing store is a plain vector with linear lookups.
#[derive(Debug, Default)]
pub struct StudentDirectory {
    students: Vec<Student>,
}

impl StudentDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a new record keyed by id. Existing ids are never replaced.
    pub fn create(
        &mut self,
        id: impl Into<String>,
        reg_no: impl Into<String>,
        full_name: impl Into<String>,
        email: impl Into<String>,
    ) -> Result<&Student> {
        let id = id.into();
        validate_non_empty_string("id", &id)?;
        if self.find(&id).is_some() {
            return Err(CcrmError::DuplicateStudent { id });
        }
        let email = email.into();
        validate_email("email", &email)?;

        self.students
            .push(Student::new(id, reg_no, full_name, email));
        Ok(self.students.last().unwrap())
    }

    pub fn find(&self, id: &str) -> Option<&Student> {
        self.students.iter().find(|s| s.id == id)
    }

    pub(crate) fn find_mut(&mut self, id: &str) -> Option<&mut Student> {
        self.students.iter_mut().find(|s| s.id == id)
    }

    /// Snapshot copy in insertion order; callers may mutate the result freely.
    pub fn list(&self) -> Vec<Student> {
        self.students.clone()
    }

    /// Clears the active flag. Silent no-op for unknown ids.
    pub fn deactivate(&mut self, id: &str) {
        if let Some(student) = self.find_mut(id) {
            student.deactivate();
        }
    }

    pub fn len(&self) -> usize {
        self.students.len()
    }

    pub fn is_empty(&self) -> bool {
        self.students.is_empty()
    }
}
