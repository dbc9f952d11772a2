use crate::core::{EnrollmentService, StudentDirectory};
use crate::domain::ports::Storage;
use crate::utils::error::Result;

pub const STUDENT_EXPORT_FILENAME: &str = "student_records_export.csv";
pub const ENROLLMENT_EXPORT_FILENAME: &str = "enrollments_export.json";

/// Writes the student roster as CSV into the data folder. Returns the number
/// of exported rows.
pub fn export_students<S: Storage>(storage: &S, students: &StudentDirectory) -> Result<usize> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer.write_record(["ID", "RegistrationNo", "FullName", "Email", "IsActive"])?;

    let roster = students.list();
    for student in &roster {
        writer.write_record([
            student.id.as_str(),
            student.reg_no.as_str(),
            student.full_name.as_str(),
            student.email.as_str(),
            if student.active { "true" } else { "false" },
        ])?;
    }

    let data = writer
        .into_inner()
        .map_err(|e| std::io::Error::other(e.to_string()))?;
    storage.write_file(STUDENT_EXPORT_FILENAME, &data)?;

    tracing::info!(rows = roster.len(), file = STUDENT_EXPORT_FILENAME, "student export written");
    Ok(roster.len())
}

/// Dumps the global enrollment index as pretty-printed JSON.
pub fn export_enrollments<S: Storage>(
    storage: &S,
    enrollment: &EnrollmentService,
) -> Result<usize> {
    let records = enrollment.enrollments();
    let data = serde_json::to_vec_pretty(&records)?;
    storage.write_file(ENROLLMENT_EXPORT_FILENAME, &data)?;

    tracing::info!(
        rows = records.len(),
        file = ENROLLMENT_EXPORT_FILENAME,
        "enrollment export written"
    );
    Ok(records.len())
}
