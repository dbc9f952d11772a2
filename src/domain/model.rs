use crate::utils::error::Result;
use crate::utils::validation::{validate_non_empty_string, validate_positive_number};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Academic term a course is offered in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Semester {
    Spring,
    Summer,
    Fall,
    Winter,
}

impl std::fmt::Display for Semester {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Semester::Spring => "SPRING",
            Semester::Summer => "SUMMER",
            Semester::Fall => "FALL",
            Semester::Winter => "WINTER",
        };
        write!(f, "{}", s)
    }
}

impl std::str::FromStr for Semester {
    type Err = crate::utils::error::CcrmError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_uppercase().as_str() {
            "SPRING" => Ok(Semester::Spring),
            "SUMMER" => Ok(Semester::Summer),
            "FALL" => Ok(Semester::Fall),
            "WINTER" => Ok(Semester::Winter),
            other => Err(crate::utils::error::CcrmError::ValidationError {
                message: format!("unknown semester '{}'", other),
            }),
        }
    }
}

/// Letter grade attached to an enrollment. Storage only; no grade-point math.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Grade {
    S,
    A,
    B,
    C,
    D,
    E,
    F,
}

impl std::str::FromStr for Grade {
    type Err = crate::utils::error::CcrmError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_uppercase().as_str() {
            "S" => Ok(Grade::S),
            "A" => Ok(Grade::A),
            "B" => Ok(Grade::B),
            "C" => Ok(Grade::C),
            "D" => Ok(Grade::D),
            "E" => Ok(Grade::E),
            "F" => Ok(Grade::F),
            other => Err(crate::utils::error::CcrmError::ValidationError {
                message: format!("unknown grade '{}'", other),
            }),
        }
    }
}

/// Instructor data carried by a course. A plain informational value with no
/// registry behind it; the course stays valid regardless of what happens to
/// instructor records elsewhere.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Instructor {
    pub id: String,
    pub full_name: String,
    pub email: String,
    pub department: String,
}

impl Instructor {
    pub fn new(
        id: impl Into<String>,
        full_name: impl Into<String>,
        email: impl Into<String>,
        department: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            full_name: full_name.into(),
            email: email.into(),
            department: department.into(),
        }
    }
}

/// One student-to-course binding for the current term.
///
/// Credits are snapshotted at enrollment time so the per-term credit sum
/// stays stable even if the catalog entry is later overwritten.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Enrollment {
    pub student_id: String,
    pub course_code: String,
    pub credits: u32,
    pub enrolled_at: DateTime<Utc>,
    pub grade: Option<Grade>,
}

impl Enrollment {
    pub fn new(student_id: impl Into<String>, course_code: impl Into<String>, credits: u32) -> Self {
        Self {
            student_id: student_id.into(),
            course_code: course_code.into(),
            credits,
            enrolled_at: Utc::now(),
            grade: None,
        }
    }

    pub fn record_grade(&mut self, grade: Grade) {
        self.grade = Some(grade);
    }
}

/// Student record. Never deleted, only deactivated.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Student {
    pub id: String,
    pub reg_no: String,
    pub full_name: String,
    pub email: String,
    pub active: bool,
    pub enrollments: Vec<Enrollment>,
}

impl Student {
    pub fn new(
        id: impl Into<String>,
        reg_no: impl Into<String>,
        full_name: impl Into<String>,
        email: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            reg_no: reg_no.into(),
            full_name: full_name.into(),
            email: email.into(),
            active: true,
            enrollments: Vec::new(),
        }
    }

    pub fn deactivate(&mut self) {
        self.active = false;
    }

    pub fn is_enrolled_in(&self, course_code: &str) -> bool {
        self.enrollments.iter().any(|e| e.course_code == course_code)
    }

    /// Credit load across the student's active enrollments.
    pub fn enrolled_credits(&self) -> u32 {
        self.enrollments.iter().map(|e| e.credits).sum()
    }
}

impl std::fmt::Display for Student {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "[{}] {} ({}) <{}> {}",
            self.id,
            self.full_name,
            self.reg_no,
            self.email,
            if self.active { "active" } else { "inactive" }
        )
    }
}

/// Course catalog entry. Built through [`CourseBuilder`], validated once at
/// `build()`, immutable afterwards.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Course {
    pub code: String,
    pub title: String,
    pub credits: u32,
    pub semester: Semester,
    pub department: String,
    pub instructor: Option<Instructor>,
}

impl Course {
    pub fn builder(code: impl Into<String>) -> CourseBuilder {
        CourseBuilder::new(code)
    }
}

impl std::fmt::Display for Course {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}: {} ({} cr, {}, {})",
            self.code, self.title, self.credits, self.semester, self.department
        )?;
        if let Some(instr) = &self.instructor {
            write!(f, " — {}", instr.full_name)?;
        }
        Ok(())
    }
}

/// Staged builder for [`Course`]. `build()` is the single validation point.
#[derive(Debug, Clone, Default)]
pub struct CourseBuilder {
    code: String,
    title: Option<String>,
    credits: Option<u32>,
    semester: Option<Semester>,
    department: Option<String>,
    instructor: Option<Instructor>,
}

impl CourseBuilder {
    pub fn new(code: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            ..Default::default()
        }
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn credits(mut self, credits: u32) -> Self {
        self.credits = Some(credits);
        self
    }

    pub fn semester(mut self, semester: Semester) -> Self {
        self.semester = Some(semester);
        self
    }

    pub fn department(mut self, department: impl Into<String>) -> Self {
        self.department = Some(department.into());
        self
    }

    pub fn instructor(mut self, instructor: Instructor) -> Self {
        self.instructor = Some(instructor);
        self
    }

    pub fn build(self) -> Result<Course> {
        validate_non_empty_string("code", &self.code)?;
        let title = self.title.unwrap_or_default();
        validate_non_empty_string("title", &title)?;
        let credits = self.credits.unwrap_or(0);
        validate_positive_number("credits", credits, 1)?;
        let department = self.department.unwrap_or_default();
        validate_non_empty_string("department", &department)?;

        Ok(Course {
            code: self.code,
            title,
            credits,
            semester: self.semester.unwrap_or(Semester::Fall),
            department,
            instructor: self.instructor,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_rejects_zero_credits() {
        let result = Course::builder("CS101")
            .title("Intro to Algorithms")
            .credits(0)
            .department("Computer Science")
            .build();
        assert!(result.is_err());
    }

    #[test]
    fn test_builder_defaults_to_fall() {
        let course = Course::builder("MA201")
            .title("Linear Algebra")
            .credits(3)
            .department("Mathematics")
            .build()
            .unwrap();
        assert_eq!(course.semester, Semester::Fall);
        assert!(course.instructor.is_none());
    }

    #[test]
    fn test_enrolled_credits_sums_snapshots() {
        let mut student = Student::new("S1", "24BCE1001", "Aarav Sharma", "aarav.s@example.com");
        student.enrollments.push(Enrollment::new("S1", "CS101", 4));
        student.enrollments.push(Enrollment::new("S1", "MA201", 3));
        assert_eq!(student.enrolled_credits(), 7);
        assert!(student.is_enrolled_in("CS101"));
        assert!(!student.is_enrolled_in("PHY101"));
    }
}
