use crate::models::resume::{EducationIn, EducationOut};
use crate::normalize::dates::clean_date;
use crate::normalize::text::title_case;

/// Why an entry was excluded from the cleaned list. Same internal-only
/// policy as experience exclusions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EducationSkip {
    EmptySchool,
    EmptyDegree,
    UnparseableStartDate,
}

/// GPA scale accepted in output; values outside it are dropped, never
/// clamped, and never default to zero.
const GPA_RANGE: std::ops::RangeInclusive<f64> = 0.0..=4.0;

/// Normalizes one raw entry, or reports why it cannot be kept.
/// An out-of-range GPA drops the value only, not the entry.
pub fn clean_entry(entry: &EducationIn) -> Result<EducationOut, EducationSkip> {
    let school = title_case(&entry.school).ok_or(EducationSkip::EmptySchool)?;
    let degree = title_case(&entry.degree).ok_or(EducationSkip::EmptyDegree)?;
    let start_date = clean_date(&entry.start_date).ok_or(EducationSkip::UnparseableStartDate)?;

    Ok(EducationOut {
        school,
        degree,
        start_date,
        graduation_date: entry.graduation_date.as_deref().and_then(clean_date),
        gpa: entry.gpa.filter(|g| GPA_RANGE.contains(g)),
    })
}

/// Normalizes each entry independently; invalid entries are dropped.
pub fn clean_education(entries: &[EducationIn]) -> Vec<EducationOut> {
    entries.iter().filter_map(|e| clean_entry(e).ok()).collect()
}
