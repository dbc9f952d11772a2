pub mod catalog;
pub mod enrollment;
pub mod students;

pub use crate::domain::model::{Course, CourseBuilder, Enrollment, Grade, Instructor, Semester, Student};
pub use crate::domain::ports::{ConfigProvider, Storage};
pub use crate::utils::error::Result;
pub use catalog::CourseCatalog;
pub use enrollment::{EnrollmentService, DEFAULT_MAX_CREDITS};
pub use students::StudentDirectory;
