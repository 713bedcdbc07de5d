//! The normalization pipeline: independent field normalizers plus the
//! aggregator that assembles one cleaned payload from one raw payload.
//!
//! Every normalizer is a pure function; none reads another field's
//! normalized result. Parse failures degrade to absence or a fallback
//! value, so the pipeline as a whole never fails.

pub mod address;
pub mod dates;
pub mod education;
pub mod email;
pub mod experience;
pub mod location;
pub mod name;
pub mod phone;
pub mod skills;
pub mod text;
pub mod urls;
pub mod warnings;

use crate::models::resume::{ResumeIn, ResumeOut};
use crate::normalize::address::AddressParser;

/// Runs every field normalizer over one raw payload.
///
/// `ok` is always true: an unparseable phone falls back to the raw input
/// string, a bad date or URL becomes absence, and invalid list entries
/// are dropped individually. Warnings only flag missing optional
/// sections, never normalization outcomes.
pub fn normalize_resume(
    input: &ResumeIn,
    default_phone_region: &str,
    address_parser: &dyn AddressParser,
) -> ResumeOut {
    let cleaned_phone = phone::to_e164(&input.phone, Some(default_phone_region))
        .unwrap_or_else(|| input.phone.clone());

    ResumeOut {
        ok: true,
        cleaned_name: name::clean_name(&input.name),
        cleaned_email: email::clean_email(&input.email),
        cleaned_phone,
        cleaned_location: input
            .location
            .as_ref()
            .and_then(|loc| location::clean_location(loc, address_parser)),
        cleaned_urls: urls::clean_urls(input.urls.as_deref().unwrap_or_default()),
        cleaned_experience: experience::clean_experience(
            input.experience.as_deref().unwrap_or_default(),
        ),
        cleaned_skills: skills::dedup_cleaned(&input.skills),
        cleaned_education: education::clean_education(
            input.education.as_deref().unwrap_or_default(),
        ),
        cleaned_certifications: skills::dedup_cleaned(
            input.certifications.as_deref().unwrap_or_default(),
        ),
        warnings: warnings::resume_warnings(input),
    }
}
