use crate::domain::model::{Course, Semester};

/// In-memory course catalog keyed by course code.
#[derive(Debug, Default)]
pub struct CourseCatalog {
    courses: Vec<Course>,
}

impl CourseCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts or overwrites by course code. An overwrite keeps the entry's
    /// original position, so reseeding does not reorder listings.
    pub fn add(&mut self, course: Course) -> &Course {
        match self.courses.iter().position(|c| c.code == course.code) {
            Some(idx) => {
                self.courses[idx] = course;
                &self.courses[idx]
            }
            None => {
                self.courses.push(course);
                self.courses.last().unwrap()
            }
        }
    }

    pub fn find(&self, code: &str) -> Option<&Course> {
        self.courses.iter().find(|c| c.code == code)
    }

    /// Snapshot copy in insertion order.
    pub fn list(&self) -> Vec<Course> {
        self.courses.clone()
    }

    /// Case-insensitive substring match on the instructor's full name.
    /// Courses without an instructor never match.
    pub fn filter_by_instructor_name(&self, name: &str) -> Vec<Course> {
        let needle = name.to_lowercase();
        self.courses
            .iter()
            .filter(|c| {
                c.instructor
                    .as_ref()
                    .is_some_and(|i| i.full_name.to_lowercase().contains(&needle))
            })
            .cloned()
            .collect()
    }

    /// Case-insensitive exact match on the department name.
    pub fn filter_by_department(&self, department: &str) -> Vec<Course> {
        self.courses
            .iter()
            .filter(|c| c.department.eq_ignore_ascii_case(department))
            .cloned()
            .collect()
    }

    pub fn filter_by_semester(&self, semester: Semester) -> Vec<Course> {
        self.courses
            .iter()
            .filter(|c| c.semester == semester)
            .cloned()
            .collect()
    }

    pub fn len(&self) -> usize {
        self.courses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.courses.is_empty()
    }
}
