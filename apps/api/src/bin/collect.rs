//! Interactive resume collection tool.
//!
//! Gathers a raw resume from terminal prompts with retry-until-valid
//! loops and emits it as JSON in the shape `POST /api/v1/normalize`
//! accepts. Collection only; normalization happens server-side.

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use intake_api::models::resume::{EducationIn, ExperienceIn, LocationInput, ResumeIn};

#[derive(Parser)]
#[command(name = "intake-collect", about = "Collect a resume from terminal prompts")]
struct Cli {
    /// Write the collected resume JSON here instead of stdout.
    #[arg(short, long)]
    output: Option<PathBuf>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let stdin = io::stdin();
    let mut prompter = Prompter {
        input: stdin.lock(),
    };

    println!("=== Resume Intake ===");
    let resume = collect_resume(&mut prompter)?;

    let json = serde_json::to_string_pretty(&resume)?;
    match &cli.output {
        Some(path) => {
            std::fs::write(path, &json)
                .with_context(|| format!("failed to write {}", path.display()))?;
            println!("Wrote resume to {}", path.display());
        }
        None => println!("{json}"),
    }

    Ok(())
}

struct Prompter<R> {
    input: R,
}

impl<R: BufRead> Prompter<R> {
    fn ask(&mut self, question: &str) -> Result<String> {
        print!("{question}");
        io::stdout().flush()?;
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            anyhow::bail!("input stream closed");
        }
        Ok(line.trim().to_string())
    }

    fn ask_until(
        &mut self,
        question: &str,
        error: &str,
        valid: impl Fn(&str) -> bool,
    ) -> Result<String> {
        loop {
            let answer = self.ask(question)?;
            if valid(&answer) {
                return Ok(answer);
            }
            println!("{error}");
        }
    }

    /// Empty input means "skip".
    fn ask_optional(&mut self, question: &str) -> Result<Option<String>> {
        let answer = self.ask(question)?;
        Ok((!answer.is_empty()).then_some(answer))
    }

    fn ask_yes_no(&mut self, question: &str) -> Result<bool> {
        loop {
            match self.ask(question)?.to_lowercase().as_str() {
                "y" | "yes" => return Ok(true),
                "n" | "no" => return Ok(false),
                _ => println!("Please enter 'y' or 'n'."),
            }
        }
    }
}

fn collect_resume<R: BufRead>(p: &mut Prompter<R>) -> Result<ResumeIn> {
    let name = p.ask_until(
        "Enter your name: ",
        "Please enter a valid name (letters, spaces, hyphens, or apostrophes only).",
        is_valid_name,
    )?;
    let email = p.ask_until(
        "Email address: ",
        "Enter a valid email address.",
        is_valid_email,
    )?;
    let phone = p.ask_until(
        "Phone number: ",
        "Enter a valid 10-digit phone number (e.g. 1234567890 or 123-456-7890).",
        is_valid_phone,
    )?;
    let location = p.ask_optional("Location (city, state; press Enter to skip): ")?;
    let urls = collect_urls(p)?;
    let experience = collect_experience(p)?;
    let skills = collect_skills(p)?;
    let education = collect_education(p)?;
    let certifications = p
        .ask_optional("Certifications (comma-separated, press Enter to skip): ")?
        .map(|answer| split_csv(&answer));

    Ok(ResumeIn {
        name,
        email,
        phone,
        location: location.map(LocationInput::FreeText),
        urls: (!urls.is_empty()).then_some(urls),
        experience: (!experience.is_empty()).then_some(experience),
        skills,
        education: (!education.is_empty()).then_some(education),
        certifications: certifications.filter(|c| !c.is_empty()),
    })
}

const PROFILE_PROMPTS: &[&str] = &[
    "LinkedIn URL (or press Enter to skip): ",
    "GitHub URL (or press Enter to skip): ",
    "Website URL (or press Enter to skip): ",
    "YouTube URL (or press Enter to skip): ",
];

fn collect_urls<R: BufRead>(p: &mut Prompter<R>) -> Result<Vec<String>> {
    let mut urls = Vec::new();
    for prompt in PROFILE_PROMPTS {
        loop {
            let answer = p.ask(prompt)?;
            if answer.is_empty() {
                break;
            }
            if is_valid_url(&answer) {
                urls.push(answer);
                break;
            }
            println!(
                "Enter a valid URL (e.g., https://linkedin.com/in/username) or press Enter to skip."
            );
        }
    }
    Ok(urls)
}

fn collect_experience<R: BufRead>(p: &mut Prompter<R>) -> Result<Vec<ExperienceIn>> {
    let mut entries = Vec::new();
    while p.ask_yes_no("Add a job? (y/n): ")? {
        let position = p.ask_until("Job title: ", "Job title cannot be empty.", not_empty)?;
        let company = p.ask_until("Company name: ", "Company name cannot be empty.", not_empty)?;
        let start_date = p.ask_until(
            "Start date (YYYY or MM-YYYY): ",
            "Enter a valid start date (YYYY or MM-YYYY).",
            is_valid_month_year,
        )?;
        let end_date = p.ask_until(
            "End date (YYYY, MM-YYYY, or 'present'): ",
            "Enter a valid end date (YYYY, MM-YYYY, or 'present').",
            is_valid_end_date,
        )?;
        let duties = p.ask_until(
            "Responsibilities (semicolon-separated): ",
            "Job duties cannot be empty.",
            not_empty,
        )?;
        let location = p.ask_optional("Job location (press Enter to skip): ")?;

        entries.push(ExperienceIn {
            company,
            position,
            start_date,
            end_date: Some(end_date),
            description: duties
                .split(';')
                .map(str::trim)
                .filter(|d| !d.is_empty())
                .map(str::to_string)
                .collect(),
            location,
        });
    }
    Ok(entries)
}

fn collect_skills<R: BufRead>(p: &mut Prompter<R>) -> Result<Vec<String>> {
    loop {
        let answer = p.ask("Skills (comma-separated): ")?;
        let skills = split_csv(&answer);
        if !skills.is_empty() {
            return Ok(skills);
        }
        println!("Please enter at least one skill (e.g., Python, SQL, Git).");
    }
}

fn collect_education<R: BufRead>(p: &mut Prompter<R>) -> Result<Vec<EducationIn>> {
    let mut entries = Vec::new();
    while p.ask_yes_no("Add education? (y/n): ")? {
        let school = p.ask_until("School name: ", "School name cannot be empty.", not_empty)?;
        let degree = p.ask_until("Degree/Diploma: ", "Degree cannot be empty.", not_empty)?;
        let start_date = p.ask_until(
            "Start date (YYYY or MM-YYYY): ",
            "Enter a valid start date (YYYY or MM-YYYY).",
            is_valid_month_year,
        )?;
        let graduation_date = loop {
            let answer = p.ask("Graduation date (YYYY or MM-YYYY, press Enter if ongoing): ")?;
            if answer.is_empty() {
                break None;
            }
            if is_valid_month_year(&answer) {
                break Some(answer);
            }
            println!("Enter a valid date (YYYY or MM-YYYY) or press Enter to skip.");
        };
        let gpa = loop {
            let answer = p.ask("GPA (optional, press Enter to skip): ")?;
            if answer.is_empty() {
                break None;
            }
            match parse_gpa(&answer) {
                Some(g) => break Some(g),
                None => println!("GPA should be a number between 0.0 and 4.0."),
            }
        };

        entries.push(EducationIn {
            school,
            degree,
            start_date,
            graduation_date,
            gpa,
        });
        println!("Education entry added.");
    }
    Ok(entries)
}

fn not_empty(s: &str) -> bool {
    !s.is_empty()
}

fn is_valid_name(s: &str) -> bool {
    !s.is_empty()
        && s.chars()
            .all(|c| c.is_alphabetic() || matches!(c, ' ' | '-' | '\''))
}

fn is_valid_email(s: &str) -> bool {
    s.contains('@') && s.contains('.')
}

fn is_valid_phone(s: &str) -> bool {
    let digits: String = s.chars().filter(|c| !matches!(c, '-' | ' ')).collect();
    digits.len() == 10 && digits.chars().all(|c| c.is_ascii_digit())
}

/// "YYYY" or "MM-YYYY" with a real month number.
fn is_valid_month_year(s: &str) -> bool {
    if s.len() == 4 && s.chars().all(|c| c.is_ascii_digit()) {
        return true;
    }
    match s.split_once('-') {
        Some((mm, yyyy)) => {
            mm.len() == 2
                && yyyy.len() == 4
                && yyyy.chars().all(|c| c.is_ascii_digit())
                && mm.parse::<u32>().is_ok_and(|m| (1..=12).contains(&m))
        }
        None => false,
    }
}

fn is_valid_end_date(s: &str) -> bool {
    s.eq_ignore_ascii_case("present") || is_valid_month_year(s)
}

fn is_valid_url(s: &str) -> bool {
    (s.contains("http://") || s.contains("https://") || s.contains("www.")) && !s.contains(' ')
}

fn parse_gpa(s: &str) -> Option<f64> {
    let gpa = s.parse::<f64>().ok()?;
    (0.0..=4.0).contains(&gpa).then_some(gpa)
}

fn split_csv(s: &str) -> Vec<String> {
    s.split(',')
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_name_validation() {
        assert!(is_valid_name("Jane Doe"));
        assert!(is_valid_name("Mary-Jane O'Brien"));
        assert!(!is_valid_name(""));
        assert!(!is_valid_name("Jane123"));
    }

    #[test]
    fn test_phone_validation() {
        assert!(is_valid_phone("4155550132"));
        assert!(is_valid_phone("415-555-0132"));
        assert!(!is_valid_phone("415-555-013"));
        assert!(!is_valid_phone("(415) 555-0132")); // parentheses not accepted here
    }

    #[test]
    fn test_month_year_validation() {
        assert!(is_valid_month_year("2023"));
        assert!(is_valid_month_year("03-2023"));
        assert!(!is_valid_month_year("13-2023"));
        assert!(!is_valid_month_year("2023-03")); // year goes last in this prompt
        assert!(!is_valid_month_year("march"));
    }

    #[test]
    fn test_end_date_accepts_present() {
        assert!(is_valid_end_date("present"));
        assert!(is_valid_end_date("Present"));
        assert!(is_valid_end_date("2023"));
        assert!(!is_valid_end_date("someday"));
    }

    #[test]
    fn test_url_validation() {
        assert!(is_valid_url("https://github.com/jane"));
        assert!(is_valid_url("www.example.com"));
        assert!(!is_valid_url("github dot com"));
    }

    #[test]
    fn test_gpa_parsing() {
        assert_eq!(parse_gpa("3.7"), Some(3.7));
        assert_eq!(parse_gpa("4.5"), None);
        assert_eq!(parse_gpa("abc"), None);
    }

    #[test]
    fn test_split_csv_trims_and_drops_empties() {
        assert_eq!(
            split_csv(" Rust , , SQL ,"),
            vec!["Rust".to_string(), "SQL".to_string()]
        );
    }

    #[test]
    fn test_collect_resume_from_scripted_input() {
        // name, email, phone, location, 4 profile prompts, no jobs,
        // skills, no education, no certifications
        let script = "Jane Doe\n\
                      jane@example.com\n\
                      415-555-0132\n\
                      Austin, TX\n\
                      \n\
                      https://github.com/jane\n\
                      \n\
                      \n\
                      n\n\
                      Rust, SQL\n\
                      n\n\
                      \n";
        let mut prompter = Prompter {
            input: Cursor::new(script.as_bytes()),
        };
        let resume = collect_resume(&mut prompter).unwrap();

        assert_eq!(resume.name, "Jane Doe");
        assert_eq!(resume.email, "jane@example.com");
        assert_eq!(resume.phone, "415-555-0132");
        assert!(matches!(
            resume.location,
            Some(LocationInput::FreeText(ref s)) if s == "Austin, TX"
        ));
        assert_eq!(
            resume.urls,
            Some(vec!["https://github.com/jane".to_string()])
        );
        assert_eq!(resume.experience, None);
        assert_eq!(resume.skills, vec!["Rust", "SQL"]);
        assert_eq!(resume.education, None);
        assert_eq!(resume.certifications, None);
    }

    #[test]
    fn test_retry_loop_rejects_then_accepts() {
        let script = "not an email\njane@example.com\n";
        let mut prompter = Prompter {
            input: Cursor::new(script.as_bytes()),
        };
        let email = prompter
            .ask_until("Email: ", "Enter a valid email address.", is_valid_email)
            .unwrap();
        assert_eq!(email, "jane@example.com");
    }
}
