use crate::adapters::{backup, export};
use crate::core::{
    ConfigProvider, CourseCatalog, EnrollmentService, Grade, Semester, Storage, StudentDirectory,
};
use crate::utils::error::Result;
use std::io::BufRead;

/// Interactive menu session. Holds the explicitly constructed directories and
/// the enrollment service; nothing here is global.
pub struct MenuApp<S: Storage, C: ConfigProvider> {
    pub students: StudentDirectory,
    pub catalog: CourseCatalog,
    pub enrollment: EnrollmentService,
    storage: S,
    config: C,
}

impl<S: Storage, C: ConfigProvider> MenuApp<S, C> {
    pub fn new(storage: S, config: C) -> Self {
        Self {
            students: StudentDirectory::new(),
            catalog: CourseCatalog::new(),
            enrollment: EnrollmentService::new(config.max_credits()),
            storage,
            config,
        }
    }

    /// Runs the command loop until "0" or end of input.
    pub fn run<R: BufRead>(&mut self, input: &mut R) -> Result<()> {
        println!("*************************************************");
        println!("*  Welcome to the University Record System      *");
        println!("*************************************************");

        loop {
            display_main_menu();
            let Some(command) = read_line(input)? else {
                break;
            };

            match command.as_str() {
                "1" => self.handle_student_options(),
                "2" => self.handle_course_options(input)?,
                "3" => self.handle_enrollment_options(input)?,
                "4" => self.handle_data_export(),
                "5" => self.handle_backup_and_reports(),
                "0" => break,
                _ => println!("!! ERROR: Unrecognized command. Please select a valid option."),
            }
        }

        println!("\nSystem shutting down. Thank you for using the service!");
        Ok(())
    }

    fn handle_student_options(&self) {
        println!("\n-- Student Record Options --");
        for student in self.students.list() {
            println!("{}", student);
        }
    }

    fn handle_course_options<R: BufRead>(&self, input: &mut R) -> Result<()> {
        println!("\n-- Course Catalog --");
        println!("  a. List all courses");
        println!("  b. Filter by department");
        println!("  c. Filter by semester");
        println!("  d. Filter by instructor name");
        print_prompt(">> Enter your selection: ");
        let Some(choice) = read_line(input)? else {
            return Ok(());
        };

        let courses = match choice.as_str() {
            "a" => self.catalog.list(),
            "b" => {
                print_prompt("Department: ");
                match read_line(input)? {
                    Some(dept) => self.catalog.filter_by_department(&dept),
                    None => return Ok(()),
                }
            }
            "c" => {
                print_prompt("Semester (SPRING/SUMMER/FALL/WINTER): ");
                match read_line(input)? {
                    Some(term) => match term.parse::<Semester>() {
                        Ok(semester) => self.catalog.filter_by_semester(semester),
                        Err(e) => {
                            eprintln!("!! {}", e.user_friendly_message());
                            return Ok(());
                        }
                    },
                    None => return Ok(()),
                }
            }
            "d" => {
                print_prompt("Instructor name: ");
                match read_line(input)? {
                    Some(name) => self.catalog.filter_by_instructor_name(&name),
                    None => return Ok(()),
                }
            }
            _ => {
                println!("!! ERROR: Unrecognized command.");
                return Ok(());
            }
        };

        if courses.is_empty() {
            println!("(no matching courses)");
        }
        for course in courses {
            println!("{}", course);
        }
        Ok(())
    }

    fn handle_enrollment_options<R: BufRead>(&mut self, input: &mut R) -> Result<()> {
        println!("\n-- Enrollment & Grade Management --");
        println!("  1. Enroll a student");
        println!("  2. Record a grade");
        print_prompt(">> Enter your selection: ");
        let Some(choice) = read_line(input)? else {
            return Ok(());
        };

        print_prompt("Enter Student ID (e.g., S1): ");
        let Some(student_id) = read_line(input)? else {
            return Ok(());
        };
        print_prompt("Enter Course Code (e.g., CS101): ");
        let Some(course_code) = read_line(input)? else {
            return Ok(());
        };

        match choice.as_str() {
            "1" => {
                match self.enrollment.enroll(
                    &mut self.students,
                    &self.catalog,
                    &student_id,
                    &course_code,
                ) {
                    Ok(_) => println!("## SUCCESS: Enrollment has been processed successfully."),
                    Err(e) => {
                        eprintln!("!! ENROLLMENT ERROR: {}", e.user_friendly_message());
                        eprintln!("   Suggestion: {}", e.recovery_suggestion());
                    }
                }
            }
            "2" => {
                print_prompt("Grade (S/A/B/C/D/E/F): ");
                let Some(grade_str) = read_line(input)? else {
                    return Ok(());
                };
                let grade = match grade_str.parse::<Grade>() {
                    Ok(g) => g,
                    Err(e) => {
                        eprintln!("!! {}", e.user_friendly_message());
                        return Ok(());
                    }
                };
                match self
                    .enrollment
                    .record_grade(&mut self.students, &student_id, &course_code, grade)
                {
                    Ok(()) => println!("## SUCCESS: Grade recorded."),
                    Err(e) => eprintln!("!! GRADE ERROR: {}", e.user_friendly_message()),
                }
            }
            _ => println!("!! ERROR: Unrecognized command."),
        }
        Ok(())
    }

    fn handle_data_export(&self) {
        match export::export_students(&self.storage, &self.students) {
            Ok(rows) => println!(
                "## SUCCESS: Exported {} student records to the data folder.",
                rows
            ),
            Err(e) => eprintln!("!! EXPORT FAILED: {}", e.user_friendly_message()),
        }
        match export::export_enrollments(&self.storage, &self.enrollment) {
            Ok(rows) => println!("## SUCCESS: Exported {} enrollment records.", rows),
            Err(e) => eprintln!("!! EXPORT FAILED: {}", e.user_friendly_message()),
        }
    }

    fn handle_backup_and_reports(&self) {
        println!("\n-- System Utilities --");
        let data_folder = self.storage.base_path();
        match backup::backup_folder(&data_folder) {
            Ok(location) => {
                println!("## SUCCESS: Backup created at: {}", location.display());
                match backup::folder_size(&location) {
                    Ok(size) => println!("   Total backup size: {} bytes.", size),
                    Err(e) => eprintln!("!! REPORT FAILED: {}", e.user_friendly_message()),
                }
            }
            Err(e) => eprintln!("!! BACKUP FAILED: {}", e.user_friendly_message()),
        }
        println!(
            "   Enrollments on record: {}",
            self.enrollment.enrollments().len()
        );
    }

    pub fn config(&self) -> &C {
        &self.config
    }
}

fn display_main_menu() {
    println!("\n--- Main Navigation Menu ---");
    println!("  1. Student Record Management");
    println!("  2. Course Catalog Management");
    println!("  3. Enrollment & Grade Management");
    println!("  4. Export Data");
    println!("  5. System Backup & Reports");
    println!("  0. Exit Application");
    print_prompt(">> Enter your selection: ");
}

fn print_prompt(prompt: &str) {
    use std::io::Write;
    print!("{}", prompt);
    let _ = std::io::stdout().flush();
}

/// Reads one trimmed line; `None` means end of input.
fn read_line<R: BufRead>(input: &mut R) -> Result<Option<String>> {
    let mut line = String::new();
    let bytes = input.read_line(&mut line)?;
    if bytes == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}
