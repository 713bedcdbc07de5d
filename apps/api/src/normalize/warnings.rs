use crate::models::resume::{LocationInput, ResumeIn};

/// Non-critical guidance about missing optional sections.
///
/// A pure function of the raw payload, independent of normalization
/// outcomes; each message is emitted at most once, in a fixed order.
pub fn resume_warnings(input: &ResumeIn) -> Vec<String> {
    let mut warnings: Vec<String> = Vec::new();

    if input.education.as_deref().unwrap_or_default().is_empty() {
        warnings.push("No education entries provided.".to_string());
    }

    if input.experience.as_deref().unwrap_or_default().is_empty() {
        warnings.push("No experience entries provided.".to_string());
    }

    if location_missing(input) {
        warnings.push("No location provided.".to_string());
    }

    if input.urls.as_deref().unwrap_or_default().is_empty() {
        warnings.push("No links or portfolios provided.".to_string());
    }

    warnings
}

fn location_missing(input: &ResumeIn) -> bool {
    match &input.location {
        None => true,
        Some(LocationInput::FreeText(s)) => s.trim().is_empty(),
        Some(LocationInput::Structured(_)) => false,
    }
}
