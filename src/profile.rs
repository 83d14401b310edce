//! Profile content: the person, their work history, projects, and education.
//!
//! Loaded from the `[person]`, `[[experience]]`, `[[projects]]` and
//! `[[education]]` tables of `folio.toml`. Every record is a plain value;
//! nothing here is mutated after loading.

use serde::{Deserialize, Serialize};

/// The profile subject.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PersonData {
    pub name: String,
    pub job_title: String,
    /// Opaque string; left out of the output when blank.
    pub email: String,
    /// Opaque string; left out of the output when blank.
    pub phone: String,
    pub location: Location,
    pub social_profiles: SocialProfiles,
    pub image: Option<String>,
    pub bio: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Location {
    pub city: String,
    pub region: String,
    pub country: String,
}

impl Location {
    /// "City, Region, Country" with blank parts skipped.
    pub fn display(&self) -> String {
        [&self.city, &self.region, &self.country]
            .into_iter()
            .map(|s| s.trim())
            .filter(|s| !s.is_empty())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SocialProfiles {
    pub github: String,
    pub linkedin: String,
}

impl SocialProfiles {
    /// Non-blank profile URLs, GitHub first.
    pub fn urls(&self) -> Vec<&str> {
        [self.github.as_str(), self.linkedin.as_str()]
            .into_iter()
            .filter(|s| !s.trim().is_empty())
            .collect()
    }
}

/// One employment period.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ExperienceData {
    pub company: String,
    pub role: String,
    pub description: String,
    pub start_date: String,
    pub end_date: Option<String>,
    pub location: String,
    pub skills: Option<Vec<String>>,
    pub company_url: Option<String>,
}

/// One showcased project.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ProjectData {
    pub name: String,
    pub description: String,
    pub url: Option<String>,
    pub technologies: Vec<String>,
    pub date_created: Option<String>,
    pub date_published: Option<String>,
}

/// One academic credential.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct EducationData {
    pub institution: String,
    pub degree: String,
    pub field: String,
    pub start_date: String,
    pub end_date: String,
    pub gpa: Option<String>,
    pub location: Option<String>,
}
