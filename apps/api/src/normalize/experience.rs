use crate::models::resume::{ExperienceIn, ExperienceOut};
use crate::normalize::dates::clean_date;
use crate::normalize::text::title_case;

/// Why an entry was excluded from the cleaned list. Kept internal so the
/// exclusions could be surfaced as warnings later without changing the
/// drop behavior itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExperienceSkip {
    EmptyCompany,
    EmptyPosition,
    UnparseableStartDate,
}

/// Normalizes one raw entry, or reports why it cannot be kept.
///
/// Company, position, and location are title-cased; dates go through the
/// date normalizer (an absent or unparseable end date means the role is
/// ongoing); description bullets pass through unchanged.
pub fn clean_entry(entry: &ExperienceIn) -> Result<ExperienceOut, ExperienceSkip> {
    let company = title_case(&entry.company).ok_or(ExperienceSkip::EmptyCompany)?;
    let position = title_case(&entry.position).ok_or(ExperienceSkip::EmptyPosition)?;
    let start_date = clean_date(&entry.start_date).ok_or(ExperienceSkip::UnparseableStartDate)?;

    Ok(ExperienceOut {
        company,
        position,
        start_date,
        end_date: entry.end_date.as_deref().and_then(clean_date),
        description: entry.description.clone(),
        location: entry.location.as_deref().and_then(title_case),
    })
}

/// Normalizes each entry independently; one bad entry never breaks the
/// rest of the list.
pub fn clean_experience(entries: &[ExperienceIn]) -> Vec<ExperienceOut> {
    entries.iter().filter_map(|e| clean_entry(e).ok()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn entry(company: &str, position: &str, start: &str, end: Option<&str>) -> ExperienceIn {
        ExperienceIn {
            company: company.to_string(),
            position: position.to_string(),
            start_date: start.to_string(),
            end_date: end.map(str::to_string),
            description: vec!["Shipped things".to_string()],
            location: Some("austin, tx".to_string()),
        }
    }

    #[test]
    fn test_valid_entry_is_normalized() {
        let out = clean_entry(&entry("acme corp", "senior engineer", "Jan 2020", Some("03/2022")))
            .unwrap();
        assert_eq!(out.company, "Acme Corp");
        assert_eq!(out.position, "Senior Engineer");
        assert_eq!(out.start_date, NaiveDate::from_ymd_opt(2020, 1, 1).unwrap());
        assert_eq!(out.end_date, NaiveDate::from_ymd_opt(2022, 3, 1));
        assert_eq!(out.description, vec!["Shipped things".to_string()]);
        assert_eq!(out.location.as_deref(), Some("Austin, Tx"));
    }

    #[test]
    fn test_open_ended_end_date_means_ongoing() {
        let out = clean_entry(&entry("Acme", "Engineer", "2020", Some("present"))).unwrap();
        assert_eq!(out.end_date, None);
    }

    #[test]
    fn test_missing_end_date_means_ongoing() {
        let out = clean_entry(&entry("Acme", "Engineer", "2020", None)).unwrap();
        assert_eq!(out.end_date, None);
    }

    #[test]
    fn test_empty_company_is_skipped() {
        let result = clean_entry(&entry("   ", "Engineer", "2020", None));
        assert_eq!(result.unwrap_err(), ExperienceSkip::EmptyCompany);
    }

    #[test]
    fn test_unparseable_start_date_is_skipped() {
        let result = clean_entry(&entry("Acme", "Engineer", "soon", None));
        assert_eq!(result.unwrap_err(), ExperienceSkip::UnparseableStartDate);
    }

    #[test]
    fn test_bad_entry_does_not_break_the_list() {
        let entries = vec![
            entry("", "Engineer", "2020", None),
            entry("Acme", "Engineer", "2021", None),
        ];
        let out = clean_experience(&entries);
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].company, "Acme");
    }
}
