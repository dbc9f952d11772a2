use ccrm::core::{Course, CourseCatalog, Instructor, Semester, StudentDirectory};
use ccrm::CcrmError;

fn sample_catalog() -> CourseCatalog {
    let mut catalog = CourseCatalog::new();
    let gupta = Instructor::new("I1", "Dr. Rohan Gupta", "gupta.r@uni.edu", "Computer Science");
    let verma = Instructor::new("I2", "Dr. Anjali Verma", "verma.a@uni.edu", "Mathematics");

    catalog.add(
        Course::builder("CS101")
            .title("Intro to Java Programming")
            .credits(4)
            .semester(Semester::Fall)
            .department("Computer Science")
            .instructor(gupta.clone())
            .build()
            .unwrap(),
    );
    catalog.add(
        Course::builder("CS102")
            .title("Data Structures")
            .credits(4)
            .semester(Semester::Spring)
            .department("Computer Science")
            .instructor(gupta)
            .build()
            .unwrap(),
    );
    catalog.add(
        Course::builder("MA201")
            .title("Linear Algebra")
            .credits(3)
            .semester(Semester::Fall)
            .department("Mathematics")
            .instructor(verma)
            .build()
            .unwrap(),
    );
    catalog
}

#[test]
fn test_directory_list_preserves_creation_order() {
    let mut students = StudentDirectory::new();
    students
        .create("S1", "24BCE1001", "Aarav Sharma", "aarav.s@example.com")
        .unwrap();
    students
        .create("S2", "24BME1002", "Diya Patel", "diya.p@example.com")
        .unwrap();
    students
        .create("S3", "24BCE1103", "Rohan Verma", "rohan.v@example.com")
        .unwrap();

    let ids: Vec<String> = students.list().into_iter().map(|s| s.id).collect();
    assert_eq!(ids, ["S1", "S2", "S3"]);
}

#[test]
fn test_directory_list_is_a_snapshot() {
    let mut students = StudentDirectory::new();
    students
        .create("S1", "24BCE1001", "Aarav Sharma", "aarav.s@example.com")
        .unwrap();

    let mut snapshot = students.list();
    snapshot.clear();
    snapshot.push(ccrm::core::Student::new(
        "X9",
        "00XXX0000",
        "Intruder",
        "intruder@example.com",
    ));

    // Internal state is untouched by whatever the caller did to the copy.
    assert_eq!(students.list().len(), 1);
    assert_eq!(students.list()[0].id, "S1");
    assert!(students.find("X9").is_none());
}

#[test]
fn test_duplicate_student_id_rejected() {
    let mut students = StudentDirectory::new();
    students
        .create("S1", "24BCE1001", "Aarav Sharma", "aarav.s@example.com")
        .unwrap();
    let err = students
        .create("S1", "24BME1002", "Diya Patel", "diya.p@example.com")
        .unwrap_err();
    assert!(matches!(err, CcrmError::DuplicateStudent { .. }));
    assert_eq!(students.len(), 1);
}

#[test]
fn test_invalid_email_rejected() {
    let mut students = StudentDirectory::new();
    let err = students
        .create("S1", "24BCE1001", "Aarav Sharma", "not-an-email")
        .unwrap_err();
    assert!(matches!(err, CcrmError::ValidationError { .. }));
    assert!(students.is_empty());
}

#[test]
fn test_deactivate_flips_flag_observed_via_find() {
    let mut students = StudentDirectory::new();
    students
        .create("S1", "24BCE1001", "Aarav Sharma", "aarav.s@example.com")
        .unwrap();
    assert!(students.find("S1").unwrap().active);

    students.deactivate("S1");
    assert!(!students.find("S1").unwrap().active);
}

#[test]
fn test_deactivate_unknown_id_is_a_noop() {
    let mut students = StudentDirectory::new();
    students
        .create("S1", "24BCE1001", "Aarav Sharma", "aarav.s@example.com")
        .unwrap();

    students.deactivate("S999");

    assert_eq!(students.len(), 1);
    assert!(students.find("S1").unwrap().active);
}

#[test]
fn test_catalog_add_overwrites_same_code() {
    let mut catalog = sample_catalog();
    assert_eq!(catalog.len(), 3);

    catalog.add(
        Course::builder("CS101")
            .title("Intro to Algorithms")
            .credits(4)
            .semester(Semester::Fall)
            .department("Computer Science")
            .build()
            .unwrap(),
    );

    // Last write wins on content, original listing position is kept.
    assert_eq!(catalog.len(), 3);
    let codes: Vec<String> = catalog.list().into_iter().map(|c| c.code).collect();
    assert_eq!(codes, ["CS101", "CS102", "MA201"]);
    assert_eq!(catalog.find("CS101").unwrap().title, "Intro to Algorithms");
}

#[test]
fn test_filter_by_department_case_insensitive_and_idempotent() {
    let catalog = sample_catalog();

    let first = catalog.filter_by_department("computer science");
    let second = catalog.filter_by_department("computer science");

    let codes = |v: &[Course]| v.iter().map(|c| c.code.clone()).collect::<Vec<_>>();
    assert_eq!(codes(&first), ["CS101", "CS102"]);
    assert_eq!(codes(&first), codes(&second));
}

#[test]
fn test_filter_by_semester() {
    let catalog = sample_catalog();
    let fall = catalog.filter_by_semester(Semester::Fall);
    let codes: Vec<String> = fall.into_iter().map(|c| c.code).collect();
    assert_eq!(codes, ["CS101", "MA201"]);
    assert!(catalog.filter_by_semester(Semester::Winter).is_empty());
}

#[test]
fn test_filter_by_instructor_name_substring() {
    let catalog = sample_catalog();

    let gupta = catalog.filter_by_instructor_name("gupta");
    let codes: Vec<String> = gupta.into_iter().map(|c| c.code).collect();
    assert_eq!(codes, ["CS101", "CS102"]);

    // A course with no instructor never matches.
    let mut catalog = catalog;
    catalog.add(
        Course::builder("PHY101")
            .title("Classical Mechanics")
            .credits(3)
            .department("Physics")
            .build()
            .unwrap(),
    );
    assert!(catalog.filter_by_instructor_name("nobody").is_empty());
}

#[test]
fn test_filters_do_not_mutate_catalog() {
    let catalog = sample_catalog();
    let before: Vec<String> = catalog.list().into_iter().map(|c| c.code).collect();

    let mut filtered = catalog.filter_by_department("Mathematics");
    filtered.clear();

    let after: Vec<String> = catalog.list().into_iter().map(|c| c.code).collect();
    assert_eq!(before, after);
}
