use crate::core::catalog::CourseCatalog;
use crate::core::students::StudentDirectory;
use crate::domain::model::{Enrollment, Grade};
use crate::utils::error::{CcrmError, Result};

pub const DEFAULT_MAX_CREDITS: u32 = 18;

/// Validates and records student-to-course bindings.
///
/// The service owns the global enrollment index and the credit cap, but not
/// the student or course records; those are resolved at call time from the
/// directory and catalog passed in by the caller.
#[derive(Debug)]
pub struct EnrollmentService {
    enrollments: Vec<Enrollment>,
    max_credits: u32,
}

impl Default for EnrollmentService {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_CREDITS)
    }
}

impl EnrollmentService {
    pub fn new(max_credits: u32) -> Self {
        Self {
            enrollments: Vec::new(),
            max_credits,
        }
    }

    pub fn max_credits(&self) -> u32 {
        self.max_credits
    }

    /// Snapshot of the global enrollment index, in enrollment order.
    pub fn enrollments(&self) -> Vec<Enrollment> {
        self.enrollments.clone()
    }

    /// Enrolls a student in a course.
    ///
    /// Checks run from the most fundamental to the most derived and stop at
    /// the first failure: student existence, course existence, duplicate
    /// enrollment, credit cap. Nothing is mutated until every check has
    /// passed, so a failed call leaves no partial state behind.
    pub fn enroll(
        &mut self,
        students: &mut StudentDirectory,
        catalog: &CourseCatalog,
        student_id: &str,
        course_code: &str,
    ) -> Result<Enrollment> {
        if students.find(student_id).is_none() {
            return Err(CcrmError::StudentNotFound {
                id: student_id.to_string(),
            });
        }
        let course = catalog
            .find(course_code)
            .ok_or_else(|| CcrmError::CourseNotFound {
                code: course_code.to_string(),
            })?;

        // Existence was checked above, so the mutable lookup cannot miss.
        let Some(student) = students.find_mut(student_id) else {
            return Err(CcrmError::StudentNotFound {
                id: student_id.to_string(),
            });
        };
        if student.is_enrolled_in(course_code) {
            return Err(CcrmError::DuplicateEnrollment {
                student_id: student_id.to_string(),
                course_code: course_code.to_string(),
            });
        }

        let attempted = student.enrolled_credits() + course.credits;
        if attempted > self.max_credits {
            return Err(CcrmError::CreditLimitExceeded {
                student_id: student_id.to_string(),
                course_code: course_code.to_string(),
                attempted,
                max_credits: self.max_credits,
            });
        }

        let enrollment = Enrollment::new(student_id, course_code, course.credits);
        student.enrollments.push(enrollment.clone());
        self.enrollments.push(enrollment.clone());

        tracing::debug!(
            student_id,
            course_code,
            credits = course.credits,
            "enrollment recorded"
        );
        Ok(enrollment)
    }

    /// Attaches a grade to an existing enrollment, in both the student's own
    /// list and the global index.
    pub fn record_grade(
        &mut self,
        students: &mut StudentDirectory,
        student_id: &str,
        course_code: &str,
        grade: Grade,
    ) -> Result<()> {
        let student = students
            .find_mut(student_id)
            .ok_or_else(|| CcrmError::StudentNotFound {
                id: student_id.to_string(),
            })?;
        let enrollment = student
            .enrollments
            .iter_mut()
            .find(|e| e.course_code == course_code)
            .ok_or_else(|| CcrmError::EnrollmentNotFound {
                student_id: student_id.to_string(),
                course_code: course_code.to_string(),
            })?;
        enrollment.record_grade(grade);

        if let Some(indexed) = self
            .enrollments
            .iter_mut()
            .find(|e| e.student_id == student_id && e.course_code == course_code)
        {
            indexed.record_grade(grade);
        }
        Ok(())
    }
}
