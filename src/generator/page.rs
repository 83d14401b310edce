//! Root document rendering.
//!
//! The page is assembled from the embedded `index.html` shell:
//!
//! ```text
//! <head>
//!   meta tags (basic, Open Graph, Twitter)
//!   google-site-verification      (if GSC_VERIFICATION_ID)
//!   gtag.js                       (if GA_MEASUREMENT_ID)
//!   JSON-LD: Person, WorkExperience[], CreativeWork[], EducationalOccupationalCredential[]
//! <body>
//!   header, about, experience, projects, education, contact
//! ```
//!
//! Empty profile sections are left out of the body.

use crate::config::{SeoConfig, SiteConfig};
use crate::embed::page::{INDEX_HTML, IndexVars};
use crate::profile::{EducationData, ExperienceData, PersonData, ProjectData};
use crate::seo::analytics::{analytics_snippet, verification_meta};
use crate::seo::{
    MetaTagsConfig, OpenGraphTags, TwitterCard, TwitterCardTags, generate_creative_work_schema,
    generate_education_schema, generate_meta_tags, generate_person_schema,
    generate_work_experience_schema, json_ld_script,
};
use crate::utils::html::{escape, non_empty};
use std::fmt::Write;

const ROBOTS_DIRECTIVE: &str = "index, follow";
const OG_TYPE: &str = "website";

/// Render the full root document.
pub fn render_index(seo: &SeoConfig, site: &SiteConfig) -> serde_json::Result<String> {
    let vars = IndexVars {
        lang: html_lang(seo.meta.locale.as_deref()),
        head: render_head(seo, site)?,
        body: render_body(&seo.person, site),
    };
    Ok(INDEX_HTML.render(&vars))
}

/// Everything inside `<head>` except the stylesheet.
pub fn render_head(seo: &SeoConfig, site: &SiteConfig) -> serde_json::Result<String> {
    let canonical = seo.canonical_url();
    let title = &seo.meta.title;
    let description = &seo.site.description;

    let meta = MetaTagsConfig {
        title: title.clone(),
        description: description.clone(),
        canonical_url: canonical.clone(),
        keywords: Some(seo.meta.keywords.clone()),
        author: Some(seo.site.author.clone()),
        robots: Some(ROBOTS_DIRECTIVE.to_string()),
    };
    let og = OpenGraphTags {
        og_title: title.clone(),
        og_description: description.clone(),
        og_image: seo.meta.og_image.clone(),
        og_type: OG_TYPE.to_string(),
        og_url: canonical,
        og_site_name: Some(seo.site.name.clone()),
        og_locale: seo.meta.locale.clone(),
    };
    let twitter = TwitterCardTags {
        card: TwitterCard::SummaryLargeImage,
        title: title.clone(),
        description: description.clone(),
        image: seo.meta.og_image.clone(),
        site: seo.meta.twitter_handle.clone(),
        creator: seo.meta.twitter_handle.clone(),
    };

    let mut blocks = vec![generate_meta_tags(&meta, Some(&og), Some(&twitter))];
    blocks.extend(verification_meta(&seo.analytics));
    blocks.extend(analytics_snippet(&seo.analytics, seo.environment));

    let person = generate_person_schema(&seo.person, &seo.site.url)?;
    let work = generate_work_experience_schema(&site.experience)?;
    let projects = generate_creative_work_schema(&site.projects, &seo.person.name)?;
    let education = generate_education_schema(&site.education)?;
    blocks.extend(
        [person, work, projects, education]
            .iter()
            .map(|json| json_ld_script(json)),
    );

    Ok(blocks.join("\n\n"))
}

/// Visible profile content.
pub fn render_body(person: &PersonData, site: &SiteConfig) -> String {
    let mut body = String::from("<main>\n");
    header(&mut body, person);
    about(&mut body, person);
    experience(&mut body, &site.experience);
    projects(&mut body, &site.projects);
    education(&mut body, &site.education);
    contact(&mut body, person);
    body.push_str("</main>");
    body
}

/// `en_US` -> `en`; `en` when no locale is configured.
fn html_lang(locale: Option<&str>) -> String {
    let lang = locale
        .and_then(|l| l.split(['_', '-']).next())
        .unwrap_or_default()
        .trim();
    if lang.is_empty() {
        "en".to_string()
    } else {
        lang.to_ascii_lowercase()
    }
}

fn header(out: &mut String, person: &PersonData) {
    out.push_str("<header>\n");
    let _ = writeln!(out, "<h1>{}</h1>", escape(&person.name));

    let location = person.location.display();
    let subtitle = [person.job_title.trim(), location.as_str()]
        .into_iter()
        .filter(|s| !s.is_empty())
        .collect::<Vec<_>>()
        .join(" · ");
    if !subtitle.is_empty() {
        let _ = writeln!(out, "<p>{}</p>", escape(&subtitle));
    }
    out.push_str("</header>\n");
}

fn about(out: &mut String, person: &PersonData) {
    let Some(bio) = non_empty(person.bio.as_deref()) else {
        return;
    };
    let _ = writeln!(
        out,
        "<section id=\"about\">\n<h2>About</h2>\n<p>{}</p>\n</section>",
        escape(bio)
    );
}

fn experience(out: &mut String, items: &[ExperienceData]) {
    if items.is_empty() {
        return;
    }
    out.push_str("<section id=\"experience\">\n<h2>Experience</h2>\n");
    for job in items {
        out.push_str("<article>\n");
        let company = match non_empty(job.company_url.as_deref()) {
            Some(url) => format!(
                "<a href=\"{}\">{}</a>",
                escape(url),
                escape(&job.company)
            ),
            None => escape(&job.company).into_owned(),
        };
        let _ = writeln!(out, "<h3>{} at {company}</h3>", escape(&job.role));

        let period = date_range(&job.start_date, job.end_date.as_deref());
        let meta = [period.as_str(), job.location.trim()]
            .into_iter()
            .filter(|s| !s.is_empty())
            .collect::<Vec<_>>()
            .join(" · ");
        if !meta.is_empty() {
            let _ = writeln!(out, "<p class=\"meta\">{}</p>", escape(&meta));
        }
        paragraph(out, &job.description);
        if let Some(skills) = &job.skills {
            tags(out, skills);
        }
        out.push_str("</article>\n");
    }
    out.push_str("</section>\n");
}

fn projects(out: &mut String, items: &[ProjectData]) {
    if items.is_empty() {
        return;
    }
    out.push_str("<section id=\"projects\">\n<h2>Projects</h2>\n");
    for project in items {
        out.push_str("<article>\n");
        match non_empty(project.url.as_deref()) {
            Some(url) => {
                let _ = writeln!(
                    out,
                    "<h3><a href=\"{}\">{}</a></h3>",
                    escape(url),
                    escape(&project.name)
                );
            }
            None => {
                let _ = writeln!(out, "<h3>{}</h3>", escape(&project.name));
            }
        }
        paragraph(out, &project.description);
        tags(out, &project.technologies);
        out.push_str("</article>\n");
    }
    out.push_str("</section>\n");
}

fn education(out: &mut String, items: &[EducationData]) {
    if items.is_empty() {
        return;
    }
    out.push_str("<section id=\"education\">\n<h2>Education</h2>\n");
    for edu in items {
        out.push_str("<article>\n");
        let _ = writeln!(
            out,
            "<h3>{} in {}</h3>\n<p>{}</p>",
            escape(&edu.degree),
            escape(&edu.field),
            escape(&edu.institution)
        );
        let period = date_range(&edu.start_date, non_empty(Some(edu.end_date.as_str())));
        let gpa = non_empty(edu.gpa.as_deref()).map(|g| format!("GPA {g}"));
        let meta = [
            Some(period.as_str()),
            non_empty(edu.location.as_deref()),
            gpa.as_deref(),
        ]
        .into_iter()
        .flatten()
        .filter(|s| !s.is_empty())
        .collect::<Vec<_>>()
        .join(" · ");
        if !meta.is_empty() {
            let _ = writeln!(out, "<p class=\"meta\">{}</p>", escape(&meta));
        }
        out.push_str("</article>\n");
    }
    out.push_str("</section>\n");
}

fn contact(out: &mut String, person: &PersonData) {
    let mut links = Vec::new();
    if let Some(email) = non_empty(Some(person.email.as_str())) {
        links.push(format!(
            "<a href=\"mailto:{0}\">{0}</a>",
            escape(email)
        ));
    }
    if let Some(phone) = non_empty(Some(person.phone.as_str())) {
        links.push(format!(
            "<a href=\"tel:{}\">{}</a>",
            escape(&phone.replace(' ', "")),
            escape(phone)
        ));
    }
    for (label, url) in [
        ("GitHub", person.social_profiles.github.as_str()),
        ("LinkedIn", person.social_profiles.linkedin.as_str()),
    ] {
        if let Some(url) = non_empty(Some(url)) {
            links.push(format!("<a href=\"{}\">{label}</a>", escape(url)));
        }
    }
    if links.is_empty() {
        return;
    }

    out.push_str("<section id=\"contact\">\n<h2>Contact</h2>\n<ul>\n");
    for link in links {
        let _ = writeln!(out, "<li>{link}</li>");
    }
    out.push_str("</ul>\n</section>\n");
}

fn paragraph(out: &mut String, text: &str) {
    if let Some(text) = non_empty(Some(text)) {
        let _ = writeln!(out, "<p>{}</p>", escape(text));
    }
}

fn tags(out: &mut String, items: &[String]) {
    let joined = items
        .iter()
        .map(|s| s.trim())
        .filter(|s| !s.is_empty())
        .collect::<Vec<_>>()
        .join(", ");
    if !joined.is_empty() {
        let _ = writeln!(out, "<p class=\"tags\">{}</p>", escape(&joined));
    }
}

/// `start – end`, with a missing end shown as "Present".
fn date_range(start: &str, end: Option<&str>) -> String {
    let start = start.trim();
    if start.is_empty() {
        return String::new();
    }
    let end = non_empty(end).unwrap_or("Present");
    format!("{start} – {end}")
}
