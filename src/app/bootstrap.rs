use crate::core::{Course, CourseCatalog, Instructor, Semester, StudentDirectory};
use crate::utils::error::Result;

/// Seeds the directories with sample records for demo sessions.
///
/// The first CS101 entry is deliberately overwritten by the second add; the
/// catalog keeps last-write-wins semantics for reseeding.
pub fn populate_initial_data(
    students: &mut StudentDirectory,
    catalog: &mut CourseCatalog,
) -> Result<()> {
    students.create("S1", "24BCE1001", "Aarav Sharma", "aarav.s@example.com")?;
    students.create("S2", "24BME1002", "Diya Patel", "diya.p@example.com")?;
    students.create("S3", "24BCE1103", "Rohan Verma", "rohan.v@example.com")?;
    students.create("S4", "24BIT1204", "Isha Singh", "isha.s@example.com")?;

    let prof_kumar = Instructor::new("I1", "Dr. Kumar", "kumar@uni.edu", "Physics");
    catalog.add(
        Course::builder("CS101")
            .title("Intro to Algorithms")
            .credits(4)
            .instructor(prof_kumar)
            .department("Computer Science")
            .build()?,
    );

    let prof_gupta = Instructor::new("I1", "Dr. Rohan Gupta", "gupta.r@uni.edu", "Computer Science");
    let prof_verma = Instructor::new("I2", "Dr. Anjali Verma", "verma.a@uni.edu", "Mathematics");
    let prof_singh = Instructor::new("I3", "Dr. Priya Singh", "singh.p@uni.edu", "Physics");

    catalog.add(
        Course::builder("CS101")
            .title("Intro to Java Programming")
            .credits(4)
            .semester(Semester::Fall)
            .department("Computer Science")
            .instructor(prof_gupta.clone())
            .build()?,
    );
    catalog.add(
        Course::builder("CS102")
            .title("Data Structures")
            .credits(4)
            .semester(Semester::Spring)
            .department("Computer Science")
            .instructor(prof_gupta.clone())
            .build()?,
    );
    catalog.add(
        Course::builder("MA201")
            .title("Linear Algebra")
            .credits(3)
            .semester(Semester::Fall)
            .department("Mathematics")
            .instructor(prof_verma)
            .build()?,
    );
    catalog.add(
        Course::builder("PHY101")
            .title("Classical Mechanics")
            .credits(3)
            .semester(Semester::Fall)
            .department("Physics")
            .instructor(prof_singh)
            .build()?,
    );
    catalog.add(
        Course::builder("CS205")
            .title("Database Systems")
            .credits(3)
            .semester(Semester::Spring)
            .department("Computer Science")
            .instructor(prof_gupta)
            .build()?,
    );

    tracing::debug!(
        students = students.len(),
        courses = catalog.len(),
        "sample data loaded"
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_overwrites_duplicate_cs101() {
        let mut students = StudentDirectory::new();
        let mut catalog = CourseCatalog::new();
        populate_initial_data(&mut students, &mut catalog).unwrap();

        assert_eq!(students.len(), 4);
        // Two CS101 adds collapse into one entry holding the later title.
        assert_eq!(catalog.len(), 5);
        let cs101 = catalog.find("CS101").unwrap();
        assert_eq!(cs101.title, "Intro to Java Programming");
    }
}
