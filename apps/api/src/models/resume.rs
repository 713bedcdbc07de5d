//! Request and response schemas for resume normalization.
//!
//! `ResumeIn` accepts messy, inconsistent input: mixed date spellings
//! ("Jan 2023", "01/2023", "2023-01"), stray whitespace and capitalization,
//! duplicate skills, unformatted locations. `ResumeOut` is the cleaned form
//! the pipeline produces. Input models reject unknown fields at the
//! boundary; output models carry no such restriction.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Raw resume payload as submitted by the client.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ResumeIn {
    pub name: String,
    pub email: String,
    pub phone: String,
    #[serde(default)]
    pub location: Option<LocationInput>,
    #[serde(default)]
    pub urls: Option<Vec<String>>,
    #[serde(default)]
    pub experience: Option<Vec<ExperienceIn>>,
    /// At least one skill; enforced by the request boundary, not serde.
    pub skills: Vec<String>,
    #[serde(default)]
    pub education: Option<Vec<EducationIn>>,
    #[serde(default)]
    pub certifications: Option<Vec<String>>,
}

/// Location arrives either as a structured record or as free text,
/// depending on the client. One normalizer dispatches on the variant.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum LocationInput {
    Structured(LocationIn),
    FreeText(String),
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LocationIn {
    pub city: String,
    pub state: String,
    pub country: String,
    #[serde(default)]
    pub zip: Option<String>,
}

/// Raw experience entry. Dates are free text until the pipeline parses them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ExperienceIn {
    pub company: String,
    pub position: String,
    pub start_date: String,
    /// Absent or an open-ended marker ("present") means the role is current.
    #[serde(default)]
    pub end_date: Option<String>,
    #[serde(default)]
    pub description: Vec<String>,
    #[serde(default)]
    pub location: Option<String>,
}

/// Raw education entry. GPA is range-checked by the pipeline, not here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct EducationIn {
    pub school: String,
    pub degree: String,
    pub start_date: String,
    #[serde(default)]
    pub graduation_date: Option<String>,
    #[serde(default)]
    pub gpa: Option<f64>,
}

/// Clean, validated resume ready for downstream consumption.
///
/// `ok` is always true: field-level failures degrade to absence or fallback
/// values instead of failing the payload. `warnings` only flags missing
/// optional sections.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResumeOut {
    pub ok: bool,
    pub cleaned_name: String,
    pub cleaned_email: String,
    /// E.164 on success; the raw input string when the number did not parse.
    pub cleaned_phone: String,
    pub cleaned_location: Option<CleanedLocation>,
    pub cleaned_urls: Vec<String>,
    pub cleaned_experience: Vec<ExperienceOut>,
    pub cleaned_skills: Vec<String>,
    pub cleaned_education: Vec<EducationOut>,
    pub cleaned_certifications: Vec<String>,
    pub warnings: Vec<String>,
}

/// Normalized location. Structured input keeps its record shape; free-text
/// input reduces to a formatted display string ("Austin, TX").
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CleanedLocation {
    Structured(LocationOut),
    Formatted(String),
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LocationOut {
    pub city: String,
    pub state: String,
    pub country: String,
    pub zip: Option<String>,
}

/// Cleaned experience entry. Dates are pinned to the first of the month and
/// serialized as "YYYY-MM"; a missing end date means the role is ongoing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExperienceOut {
    pub company: String,
    pub position: String,
    #[serde(with = "year_month")]
    pub start_date: NaiveDate,
    #[serde(with = "year_month_opt")]
    pub end_date: Option<NaiveDate>,
    pub description: Vec<String>,
    pub location: Option<String>,
}

/// Cleaned education entry. GPA, when present, lies in [0.0, 4.0].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EducationOut {
    pub school: String,
    pub degree: String,
    #[serde(with = "year_month")]
    pub start_date: NaiveDate,
    #[serde(with = "year_month_opt")]
    pub graduation_date: Option<NaiveDate>,
    pub gpa: Option<f64>,
}

/// Month-precision date serde: "YYYY-MM" on the wire, `NaiveDate` pinned to
/// day 1 in memory. The day component is never meaningful.
mod year_month {
    use chrono::NaiveDate;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(date: &NaiveDate, ser: S) -> Result<S::Ok, S::Error> {
        ser.serialize_str(&date.format("%Y-%m").to_string())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(de: D) -> Result<NaiveDate, D::Error> {
        let s = String::deserialize(de)?;
        NaiveDate::parse_from_str(&format!("{s}-01"), "%Y-%m-%d").map_err(serde::de::Error::custom)
    }
}

mod year_month_opt {
    use chrono::NaiveDate;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(date: &Option<NaiveDate>, ser: S) -> Result<S::Ok, S::Error> {
        match date {
            Some(d) => super::year_month::serialize(d, ser),
            None => ser.serialize_none(),
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(de: D) -> Result<Option<NaiveDate>, D::Error> {
        let opt = Option::<String>::deserialize(de)?;
        opt.map(|s| {
            NaiveDate::parse_from_str(&format!("{s}-01"), "%Y-%m-%d")
                .map_err(serde::de::Error::custom)
        })
        .transpose()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_location_input_structured_variant() {
        let json = r#"{"city": "Austin", "state": "TX", "country": "USA"}"#;
        let loc: LocationInput = serde_json::from_str(json).unwrap();
        assert!(matches!(loc, LocationInput::Structured(_)));
    }

    #[test]
    fn test_location_input_free_text_variant() {
        let json = r#""Austin, TX""#;
        let loc: LocationInput = serde_json::from_str(json).unwrap();
        assert!(matches!(loc, LocationInput::FreeText(s) if s == "Austin, TX"));
    }

    #[test]
    fn test_resume_in_rejects_unknown_fields() {
        let json = r#"{
            "name": "Jane",
            "email": "jane@example.com",
            "phone": "415-555-0132",
            "skills": ["Rust"],
            "favorite_color": "green"
        }"#;
        assert!(serde_json::from_str::<ResumeIn>(json).is_err());
    }

    #[test]
    fn test_resume_in_optional_sections_default_to_none() {
        let json = r#"{
            "name": "Jane",
            "email": "jane@example.com",
            "phone": "415-555-0132",
            "skills": ["Rust"]
        }"#;
        let resume: ResumeIn = serde_json::from_str(json).unwrap();
        assert!(resume.location.is_none());
        assert!(resume.urls.is_none());
        assert!(resume.experience.is_none());
        assert!(resume.education.is_none());
        assert!(resume.certifications.is_none());
    }

    #[test]
    fn test_experience_out_dates_serialize_as_year_month() {
        let entry = ExperienceOut {
            company: "Acme".to_string(),
            position: "Engineer".to_string(),
            start_date: NaiveDate::from_ymd_opt(2023, 1, 1).unwrap(),
            end_date: None,
            description: vec![],
            location: None,
        };
        let json = serde_json::to_value(&entry).unwrap();
        assert_eq!(json["start_date"], "2023-01");
        assert!(json["end_date"].is_null());
    }

    #[test]
    fn test_year_month_round_trip() {
        let entry = EducationOut {
            school: "State University".to_string(),
            degree: "BSc".to_string(),
            start_date: NaiveDate::from_ymd_opt(2019, 9, 1).unwrap(),
            graduation_date: Some(NaiveDate::from_ymd_opt(2023, 5, 1).unwrap()),
            gpa: Some(3.7),
        };
        let json = serde_json::to_string(&entry).unwrap();
        let back: EducationOut = serde_json::from_str(&json).unwrap();
        assert_eq!(back.start_date, entry.start_date);
        assert_eq!(back.graduation_date, entry.graduation_date);
    }
}
