use axum::{extract::State, Json};
use once_cell::sync::Lazy;
use regex::Regex;

use crate::errors::AppError;
use crate::models::resume::{ResumeIn, ResumeOut};
use crate::normalize::normalize_resume;
use crate::state::AppState;

/// Loose input shape: optional "+", then 10-15 digits with separators.
/// The pipeline does the real region-aware validation afterwards.
static PHONE_IN_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\+?\d[\d\s\-()]{9,14}$").expect("phone input pattern"));

/// POST /api/v1/normalize
/// Validates the request shape, then runs the normalization pipeline.
pub async fn handle_normalize(
    State(state): State<AppState>,
    Json(req): Json<ResumeIn>,
) -> Result<Json<ResumeOut>, AppError> {
    validate_request(&req)?;
    Ok(Json(normalize_resume(
        &req,
        &state.config.default_phone_region,
        state.address_parser.as_ref(),
    )))
}

/// Boundary checks the schema layer owns. Shape only; the pipeline never
/// sees a payload that fails these, and never rejects one that passes.
fn validate_request(req: &ResumeIn) -> Result<(), AppError> {
    if !is_plausible_email(&req.email) {
        return Err(AppError::Validation(
            "email must be a valid address".to_string(),
        ));
    }
    if !PHONE_IN_RE.is_match(req.phone.trim()) {
        return Err(AppError::Validation(
            "phone must be 10-15 digits with optional separators".to_string(),
        ));
    }
    if req.skills.is_empty() {
        return Err(AppError::Validation(
            "at least one skill is required".to_string(),
        ));
    }
    Ok(())
}

fn is_plausible_email(email: &str) -> bool {
    match email.trim().split_once('@') {
        Some((local, domain)) => !local.is_empty() && domain.contains('.'),
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_request() -> ResumeIn {
        ResumeIn {
            name: "Jane".to_string(),
            email: "jane@example.com".to_string(),
            phone: "+1 415-555-0132".to_string(),
            location: None,
            urls: None,
            experience: None,
            skills: vec!["Rust".to_string()],
            education: None,
            certifications: None,
        }
    }

    #[test]
    fn test_valid_request_passes() {
        assert!(validate_request(&valid_request()).is_ok());
    }

    #[test]
    fn test_email_without_at_is_rejected() {
        let mut req = valid_request();
        req.email = "jane.example.com".to_string();
        assert!(validate_request(&req).is_err());
    }

    #[test]
    fn test_email_without_domain_dot_is_rejected() {
        let mut req = valid_request();
        req.email = "jane@localhost".to_string();
        assert!(validate_request(&req).is_err());
    }

    #[test]
    fn test_short_phone_is_rejected() {
        let mut req = valid_request();
        req.phone = "12345".to_string();
        assert!(validate_request(&req).is_err());
    }

    #[test]
    fn test_alphabetic_phone_is_rejected() {
        let mut req = valid_request();
        req.phone = "call me maybe".to_string();
        assert!(validate_request(&req).is_err());
    }

    #[test]
    fn test_empty_skills_are_rejected() {
        let mut req = valid_request();
        req.skills = vec![];
        assert!(validate_request(&req).is_err());
    }

    #[test]
    fn test_plain_national_phone_passes() {
        let mut req = valid_request();
        req.phone = "415-555-0132".to_string();
        assert!(validate_request(&req).is_ok());
    }
}
