//! JSON-LD structured data (Schema.org vocabulary).
//!
//! Each generator returns a JSON string meant to be embedded verbatim in a
//! `<script type="application/ld+json">` element; see [`json_ld_script`].
//! Top-level objects always carry `@context` and one of four `@type` values:
//! `Person`, `WorkExperience`, `CreativeWork`, `EducationalOccupationalCredential`.

use crate::profile::{EducationData, ExperienceData, Location, PersonData, ProjectData};
use crate::utils::html::non_empty;
use serde::Serialize;

pub const SCHEMA_CONTEXT: &str = "https://schema.org";

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct PersonSchema<'a> {
    #[serde(rename = "@context")]
    context: &'static str,
    #[serde(rename = "@type")]
    kind: &'static str,
    name: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    job_title: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    email: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    telephone: Option<&'a str>,
    url: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    address: Option<PostalAddress<'a>>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    same_as: Vec<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    image: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    description: Option<&'a str>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct PostalAddress<'a> {
    #[serde(rename = "@type")]
    kind: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    address_locality: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    address_region: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    address_country: Option<&'a str>,
}

impl<'a> PostalAddress<'a> {
    /// `None` when every part is blank.
    fn new(location: &'a Location) -> Option<Self> {
        let address = Self {
            kind: "PostalAddress",
            address_locality: non_empty(Some(location.city.as_str())),
            address_region: non_empty(Some(location.region.as_str())),
            address_country: non_empty(Some(location.country.as_str())),
        };
        let any = address.address_locality.is_some()
            || address.address_region.is_some()
            || address.address_country.is_some();
        any.then_some(address)
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct Organization<'a> {
    #[serde(rename = "@type")]
    kind: &'static str,
    name: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    url: Option<&'a str>,
}

impl<'a> Organization<'a> {
    fn new(name: &'a str, url: Option<&'a str>) -> Self {
        Self {
            kind: "Organization",
            name,
            url,
        }
    }
}

#[derive(Serialize)]
struct PersonRef<'a> {
    #[serde(rename = "@type")]
    kind: &'static str,
    name: &'a str,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct WorkExperienceSchema<'a> {
    #[serde(rename = "@context")]
    context: &'static str,
    #[serde(rename = "@type")]
    kind: &'static str,
    name: &'a str,
    description: &'a str,
    start_date: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    end_date: Option<&'a str>,
    employer: Organization<'a>,
    #[serde(skip_serializing_if = "Option::is_none")]
    location: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    skills: Option<&'a [String]>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct CreativeWorkSchema<'a> {
    #[serde(rename = "@context")]
    context: &'static str,
    #[serde(rename = "@type")]
    kind: &'static str,
    name: &'a str,
    description: &'a str,
    author: PersonRef<'a>,
    #[serde(skip_serializing_if = "Option::is_none")]
    url: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    keywords: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    date_created: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    date_published: Option<&'a str>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct CredentialSchema<'a> {
    #[serde(rename = "@context")]
    context: &'static str,
    #[serde(rename = "@type")]
    kind: &'static str,
    name: String,
    credential_category: &'static str,
    educational_level: &'a str,
    about: &'a str,
    recognized_by: Organization<'a>,
    #[serde(skip_serializing_if = "Option::is_none")]
    temporal_coverage: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    grade: Option<&'a str>,
    description: String,
}

/// A single `Person` object describing the site's subject.
///
/// `name` and `url` are always present; blank fields are left out.
pub fn generate_person_schema(person: &PersonData, site_url: &str) -> serde_json::Result<String> {
    let schema = PersonSchema {
        context: SCHEMA_CONTEXT,
        kind: "Person",
        name: &person.name,
        job_title: non_empty(Some(person.job_title.as_str())),
        email: non_empty(Some(person.email.as_str())),
        telephone: non_empty(Some(person.phone.as_str())),
        url: site_url,
        address: PostalAddress::new(&person.location),
        same_as: person.social_profiles.urls(),
        image: non_empty(person.image.as_deref()),
        description: non_empty(person.bio.as_deref()),
    };
    serde_json::to_string_pretty(&schema)
}

/// One `WorkExperience` object per employment period.
pub fn generate_work_experience_schema(
    experiences: &[ExperienceData],
) -> serde_json::Result<String> {
    let schemas: Vec<_> = experiences
        .iter()
        .map(|exp| WorkExperienceSchema {
            context: SCHEMA_CONTEXT,
            kind: "WorkExperience",
            name: &exp.role,
            description: &exp.description,
            start_date: &exp.start_date,
            end_date: non_empty(exp.end_date.as_deref()),
            employer: Organization::new(&exp.company, non_empty(exp.company_url.as_deref())),
            location: non_empty(Some(exp.location.as_str())),
            skills: exp.skills.as_deref().filter(|s| !s.is_empty()),
        })
        .collect();
    serde_json::to_string_pretty(&schemas)
}

/// One `CreativeWork` object per project, all attributed to `author_name`.
pub fn generate_creative_work_schema(
    projects: &[ProjectData],
    author_name: &str,
) -> serde_json::Result<String> {
    let schemas: Vec<_> = projects
        .iter()
        .map(|project| CreativeWorkSchema {
            context: SCHEMA_CONTEXT,
            kind: "CreativeWork",
            name: &project.name,
            description: &project.description,
            author: PersonRef {
                kind: "Person",
                name: author_name,
            },
            url: non_empty(project.url.as_deref()),
            keywords: (!project.technologies.is_empty())
                .then(|| project.technologies.join(", ")),
            date_created: non_empty(project.date_created.as_deref()),
            date_published: non_empty(project.date_published.as_deref()),
        })
        .collect();
    serde_json::to_string_pretty(&schemas)
}

/// One `EducationalOccupationalCredential` object per credential.
pub fn generate_education_schema(education: &[EducationData]) -> serde_json::Result<String> {
    let schemas: Vec<_> = education
        .iter()
        .map(|edu| CredentialSchema {
            context: SCHEMA_CONTEXT,
            kind: "EducationalOccupationalCredential",
            name: format!("{} in {}", edu.degree, edu.field),
            credential_category: "degree",
            educational_level: &edu.degree,
            about: &edu.field,
            recognized_by: Organization::new(&edu.institution, None),
            temporal_coverage: date_range(&edu.start_date, &edu.end_date),
            grade: non_empty(edu.gpa.as_deref()),
            description: credential_description(edu),
        })
        .collect();
    serde_json::to_string_pretty(&schemas)
}

/// "Degree in Field from Institution, Location" built from the parts present.
fn credential_description(edu: &EducationData) -> String {
    let degree = non_empty(Some(edu.degree.as_str()));
    let field = non_empty(Some(edu.field.as_str()));

    let mut out = match (degree, field) {
        (Some(d), Some(f)) => format!("{d} in {f}"),
        (Some(d), None) => d.to_string(),
        (None, Some(f)) => f.to_string(),
        (None, None) => String::new(),
    };
    if let Some(institution) = non_empty(Some(edu.institution.as_str())) {
        if out.is_empty() {
            out.push_str(institution);
        } else {
            out.push_str(" from ");
            out.push_str(institution);
        }
    }
    if let Some(location) = non_empty(edu.location.as_deref()) {
        if !out.is_empty() {
            out.push_str(", ");
        }
        out.push_str(location);
    }
    out
}

/// ISO 8601 interval `start/end`, or `None` when both ends are blank.
fn date_range(start: &str, end: &str) -> Option<String> {
    match (non_empty(Some(start)), non_empty(Some(end))) {
        (Some(s), Some(e)) => Some(format!("{s}/{e}")),
        (Some(s), None) => Some(format!("{s}/..")),
        (None, Some(e)) => Some(format!("../{e}")),
        (None, None) => None,
    }
}

/// Wrap a JSON-LD payload in its script element.
///
/// `</` is rewritten to `<\/` so string values cannot terminate the element.
pub fn json_ld_script(json: &str) -> String {
    format!(
        "<script type=\"application/ld+json\">\n{}\n</script>",
        json.replace("</", "<\\/")
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::profile::SocialProfiles;
    use serde_json::Value;

    const TYPES: [&str; 4] = [
        "Person",
        "WorkExperience",
        "CreativeWork",
        "EducationalOccupationalCredential",
    ];

    fn person() -> PersonData {
        PersonData {
            name: "Jane Doe".into(),
            job_title: "Software Engineer".into(),
            email: "jane@example.com".into(),
            phone: "+1-555-0100".into(),
            location: Location {
                city: "Austin".into(),
                region: "TX".into(),
                country: "US".into(),
            },
            social_profiles: SocialProfiles {
                github: "https://github.com/jane".into(),
                linkedin: "https://linkedin.com/in/jane".into(),
            },
            image: None,
            bio: None,
        }
    }

    fn experience(end: Option<&str>) -> ExperienceData {
        ExperienceData {
            company: "Acme".into(),
            role: "Engineer".into(),
            description: "Built things".into(),
            start_date: "2020-01".into(),
            end_date: end.map(Into::into),
            location: String::new(),
            skills: None,
            company_url: None,
        }
    }

    fn parse(json: &str) -> Value {
        serde_json::from_str(json).unwrap()
    }

    fn assert_typed(value: &Value, kind: &str) {
        assert_eq!(value["@context"], SCHEMA_CONTEXT);
        assert_eq!(value["@type"], kind);
        assert!(TYPES.contains(&kind));
    }

    #[test]
    fn test_person_schema() {
        let v = parse(&generate_person_schema(&person(), "https://example.com").unwrap());
        assert_typed(&v, "Person");
        assert_eq!(v["name"], "Jane Doe");
        assert_eq!(v["jobTitle"], "Software Engineer");
        assert_eq!(v["telephone"], "+1-555-0100");
        assert_eq!(v["url"], "https://example.com");
        assert_eq!(v["address"]["@type"], "PostalAddress");
        assert_eq!(v["address"]["addressLocality"], "Austin");
        assert_eq!(v["address"]["addressRegion"], "TX");
        assert_eq!(v["address"]["addressCountry"], "US");
        assert_eq!(v["sameAs"].as_array().unwrap().len(), 2);
        assert!(v.get("image").is_none());
        assert!(v.get("description").is_none());
        assert!(v.get("phone").is_none());
    }

    #[test]
    fn test_person_schema_omits_blank_fields() {
        let p = PersonData {
            name: "Jane Doe".into(),
            job_title: " ".into(),
            location: Location {
                city: String::new(),
                region: String::new(),
                country: "US".into(),
            },
            ..Default::default()
        };
        let v = parse(&generate_person_schema(&p, "https://example.com").unwrap());
        assert_typed(&v, "Person");
        assert_eq!(v["name"], "Jane Doe");
        assert_eq!(v["url"], "https://example.com");
        for key in ["jobTitle", "email", "telephone", "sameAs", "image", "description"] {
            assert!(v.get(key).is_none(), "{key}");
        }
        assert_eq!(v["address"]["addressCountry"], "US");
        assert!(v["address"].get("addressLocality").is_none());
        assert!(v["address"].get("addressRegion").is_none());

        let bare = PersonData {
            name: "Jane Doe".into(),
            ..Default::default()
        };
        let v = parse(&generate_person_schema(&bare, "https://example.com").unwrap());
        assert!(v.get("address").is_none());
        // nothing in the object is an empty string
        assert!(!v.to_string().contains("\"\""));
    }

    #[test]
    fn test_person_schema_optional_fields() {
        let mut p = person();
        p.image = Some("https://example.com/me.jpg".into());
        p.bio = Some("Builds search engines.".into());
        let v = parse(&generate_person_schema(&p, "https://example.com").unwrap());
        assert_eq!(v["image"], "https://example.com/me.jpg");
        assert_eq!(v["description"], "Builds search engines.");
    }

    #[test]
    fn test_work_experience_schema() {
        let mut current = experience(None);
        current.company_url = Some("https://acme.test".into());
        current.location = "Remote".into();
        current.skills = Some(vec!["Rust".into(), "Go".into()]);

        let json = generate_work_experience_schema(&[current, experience(Some("2019-12"))]).unwrap();
        let v = parse(&json);
        let items = v.as_array().unwrap();
        assert_eq!(items.len(), 2);
        for item in items {
            assert_typed(item, "WorkExperience");
            assert_eq!(item["employer"]["@type"], "Organization");
            assert_eq!(item["employer"]["name"], "Acme");
        }

        assert!(items[0].get("endDate").is_none());
        assert_eq!(items[0]["employer"]["url"], "https://acme.test");
        assert_eq!(items[0]["location"], "Remote");
        assert_eq!(items[0]["skills"][1], "Go");

        assert_eq!(items[1]["endDate"], "2019-12");
        assert!(items[1]["employer"].get("url").is_none());
        assert!(items[1].get("location").is_none());
        assert!(items[1].get("skills").is_none());
    }

    #[test]
    fn test_empty_inputs_yield_empty_arrays() {
        assert_eq!(parse(&generate_work_experience_schema(&[]).unwrap()), Value::Array(vec![]));
        assert_eq!(parse(&generate_creative_work_schema(&[], "x").unwrap()), Value::Array(vec![]));
        assert_eq!(parse(&generate_education_schema(&[]).unwrap()), Value::Array(vec![]));
    }

    #[test]
    fn test_creative_work_schema() {
        let projects = vec![
            ProjectData {
                name: "folio".into(),
                description: "Portfolio server".into(),
                url: Some("https://github.com/jane/folio".into()),
                technologies: vec!["Rust".into(), "tiny_http".into()],
                date_created: Some("2024-01-01".into()),
                date_published: None,
            },
            ProjectData {
                name: "notes".into(),
                description: "Scratchpad".into(),
                ..Default::default()
            },
        ];

        let v = parse(&generate_creative_work_schema(&projects, "Jane Doe").unwrap());
        let items = v.as_array().unwrap();
        assert_eq!(items.len(), 2);
        for item in items {
            assert_typed(item, "CreativeWork");
            assert_eq!(item["author"]["@type"], "Person");
            assert_eq!(item["author"]["name"], "Jane Doe");
        }
        assert_eq!(items[0]["keywords"], "Rust, tiny_http");
        assert_eq!(items[0]["url"], "https://github.com/jane/folio");
        assert_eq!(items[0]["dateCreated"], "2024-01-01");
        assert!(items[0].get("datePublished").is_none());

        assert!(items[1].get("keywords").is_none());
        assert!(items[1].get("url").is_none());
        assert!(items[1].get("dateCreated").is_none());
    }

    #[test]
    fn test_education_schema() {
        let education = vec![EducationData {
            institution: "State University".into(),
            degree: "Master of Science".into(),
            field: "Computer Science".into(),
            start_date: "2016-08".into(),
            end_date: "2018-05".into(),
            gpa: Some("3.9/4.0".into()),
            location: Some("Dallas, TX".into()),
        }];

        let v = parse(&generate_education_schema(&education).unwrap());
        let item = &v.as_array().unwrap()[0];
        assert_typed(item, "EducationalOccupationalCredential");
        assert_eq!(item["name"], "Master of Science in Computer Science");
        assert_eq!(item["recognizedBy"]["@type"], "Organization");
        assert_eq!(item["recognizedBy"]["name"], "State University");
        assert_eq!(item["grade"], "3.9/4.0");
        assert_eq!(item["temporalCoverage"], "2016-08/2018-05");
        assert_eq!(
            item["description"],
            "Master of Science in Computer Science from State University, Dallas, TX"
        );
    }

    #[test]
    fn test_education_schema_without_optionals() {
        let education = vec![EducationData {
            institution: "College".into(),
            degree: "BA".into(),
            field: "History".into(),
            start_date: "2010".into(),
            end_date: "2014".into(),
            gpa: None,
            location: None,
        }];
        let v = parse(&generate_education_schema(&education).unwrap());
        let item = &v[0];
        assert!(item.get("grade").is_none());
        assert_eq!(item["description"], "BA in History from College");
    }

    #[test]
    fn test_json_ld_script_neutralises_closing_tag() {
        let mut p = person();
        p.bio = Some("</script><script>alert(1)</script>".into());
        let json = generate_person_schema(&p, "https://example.com").unwrap();
        let script = json_ld_script(&json);

        assert!(script.starts_with(r#"<script type="application/ld+json">"#));
        assert_eq!(script.matches("</script>").count(), 1);
        assert!(script.ends_with("</script>"));
    }
}
