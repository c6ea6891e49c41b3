//! Profile section payloads.
//!
//! Every struct here doubles as the wire schema: field names are the
//! profile service's names, and every field decodes leniently so a partial
//! or sloppy payload still produces a complete, typed value.

use super::lenient;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A structured record that can live in a repeatable section.
pub trait SectionEntry:
    Clone + Default + PartialEq + Serialize + DeserializeOwned + Send + Sync + 'static
{
    /// Wire name of the section.
    const SECTION: &'static str;
    /// Human-readable section title.
    const LABEL: &'static str;

    /// One-line heading for list views.
    fn headline(&self) -> String;

    /// Link-typed fields as `(wire name, stored value)`.
    fn link_fields(&self) -> Vec<(&'static str, &str)>;
}

/// Contact details (singleton).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContactInfo {
    #[serde(deserialize_with = "lenient::string_or_empty")]
    pub full_name: String,
    #[serde(deserialize_with = "lenient::string_or_empty")]
    pub email: String,
    #[serde(deserialize_with = "lenient::string_or_empty")]
    pub phone: String,
    #[serde(deserialize_with = "lenient::string_or_empty")]
    pub address: String,
    #[serde(deserialize_with = "lenient::string_or_empty")]
    pub linkedin_link: String,
    #[serde(deserialize_with = "lenient::string_or_empty")]
    pub github_link: String,
    #[serde(deserialize_with = "lenient::string_or_empty")]
    pub portfolio_link: String,
}

impl ContactInfo {
    pub const SECTION: &'static str = "contact";

    pub fn link_fields(&self) -> Vec<(&'static str, &str)> {
        vec![
            ("linkedin_link", self.linkedin_link.as_str()),
            ("github_link", self.github_link.as_str()),
            ("portfolio_link", self.portfolio_link.as_str()),
        ]
    }
}

/// Career overview (singleton). Alumni fill in the employment fields.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CareerOverview {
    #[serde(deserialize_with = "lenient::string_or_empty")]
    pub headline: String,
    #[serde(deserialize_with = "lenient::string_or_empty")]
    pub summary: String,
    #[serde(deserialize_with = "lenient::strings_or_empty")]
    pub preferred_domains: Vec<String>,
    #[serde(deserialize_with = "lenient::string_or_empty")]
    pub resume_link: String,
    #[serde(deserialize_with = "lenient::f64_or_zero")]
    pub cgpa: f64,
    #[serde(deserialize_with = "lenient::u32_or_zero")]
    pub graduation_year: u32,
    #[serde(deserialize_with = "lenient::string_or_empty")]
    pub current_company: String,
    #[serde(deserialize_with = "lenient::string_or_empty")]
    pub designation: String,
}

impl CareerOverview {
    pub const SECTION: &'static str = "career";

    pub fn link_fields(&self) -> Vec<(&'static str, &str)> {
        vec![("resume_link", self.resume_link.as_str())]
    }
}

/// One semester of academic results.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AcademicSemester {
    /// Backend identifier, kept verbatim when present.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<Value>,
    #[serde(deserialize_with = "lenient::u32_or_zero")]
    pub academic_year: u32,
    #[serde(deserialize_with = "lenient::u32_or_zero")]
    pub semester_number: u32,
    #[serde(deserialize_with = "lenient::f64_or_zero")]
    pub sgpa: f64,
    #[serde(deserialize_with = "lenient::string_or_empty")]
    pub result_link: String,
    #[serde(deserialize_with = "lenient::u32_or_zero")]
    pub live_backlogs: u32,
    #[serde(deserialize_with = "lenient::u32_or_zero")]
    pub closed_backlogs: u32,
}

impl SectionEntry for AcademicSemester {
    const SECTION: &'static str = "semesters";
    const LABEL: &'static str = "Academic Record";

    fn headline(&self) -> String {
        format!(
            "Semester {} ({}) - SGPA {:.2}, backlogs {} live / {} closed",
            self.semester_number,
            self.academic_year,
            self.sgpa,
            self.live_backlogs,
            self.closed_backlogs
        )
    }

    fn link_fields(&self) -> Vec<(&'static str, &str)> {
        vec![("result_link", self.result_link.as_str())]
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Internship {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<Value>,
    #[serde(deserialize_with = "lenient::string_or_empty")]
    pub company: String,
    #[serde(deserialize_with = "lenient::string_or_empty")]
    pub role: String,
    #[serde(deserialize_with = "lenient::string_or_empty")]
    pub start_date: String,
    #[serde(deserialize_with = "lenient::string_or_empty")]
    pub end_date: String,
    #[serde(deserialize_with = "lenient::string_or_empty")]
    pub description: String,
    #[serde(deserialize_with = "lenient::f64_or_zero")]
    pub stipend: f64,
    #[serde(deserialize_with = "lenient::string_or_empty")]
    pub certificate_link: String,
}

impl SectionEntry for Internship {
    const SECTION: &'static str = "internships";
    const LABEL: &'static str = "Internships";

    fn headline(&self) -> String {
        format!(
            "{} at {} ({} - {})",
            self.role, self.company, self.start_date, self.end_date
        )
    }

    fn link_fields(&self) -> Vec<(&'static str, &str)> {
        vec![("certificate_link", self.certificate_link.as_str())]
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Certification {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<Value>,
    #[serde(deserialize_with = "lenient::string_or_empty")]
    pub name: String,
    #[serde(deserialize_with = "lenient::string_or_empty")]
    pub issuer: String,
    #[serde(deserialize_with = "lenient::string_or_empty")]
    pub issue_date: String,
    #[serde(deserialize_with = "lenient::string_or_empty")]
    pub credential_link: String,
}

impl SectionEntry for Certification {
    const SECTION: &'static str = "certifications";
    const LABEL: &'static str = "Certifications";

    fn headline(&self) -> String {
        format!("{} - {} ({})", self.name, self.issuer, self.issue_date)
    }

    fn link_fields(&self) -> Vec<(&'static str, &str)> {
        vec![("credential_link", self.credential_link.as_str())]
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Project {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<Value>,
    #[serde(deserialize_with = "lenient::string_or_empty")]
    pub title: String,
    #[serde(deserialize_with = "lenient::string_or_empty")]
    pub description: String,
    #[serde(deserialize_with = "lenient::string_or_empty")]
    pub tech_stack: String,
    #[serde(deserialize_with = "lenient::string_or_empty")]
    pub start_date: String,
    #[serde(deserialize_with = "lenient::string_or_empty")]
    pub end_date: String,
    #[serde(deserialize_with = "lenient::string_or_empty")]
    pub project_link: String,
}

impl SectionEntry for Project {
    const SECTION: &'static str = "projects";
    const LABEL: &'static str = "Projects";

    fn headline(&self) -> String {
        if self.tech_stack.is_empty() {
            self.title.clone()
        } else {
            format!("{} [{}]", self.title, self.tech_stack)
        }
    }

    fn link_fields(&self) -> Vec<(&'static str, &str)> {
        vec![("project_link", self.project_link.as_str())]
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Publication {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<Value>,
    #[serde(deserialize_with = "lenient::string_or_empty")]
    pub title: String,
    #[serde(deserialize_with = "lenient::string_or_empty")]
    pub venue: String,
    #[serde(deserialize_with = "lenient::string_or_empty")]
    pub authors: String,
    #[serde(deserialize_with = "lenient::u32_or_zero")]
    pub year: u32,
    #[serde(deserialize_with = "lenient::string_or_empty")]
    pub publication_link: String,
}

impl SectionEntry for Publication {
    const SECTION: &'static str = "publications";
    const LABEL: &'static str = "Publications";

    fn headline(&self) -> String {
        format!("{} - {} {}", self.title, self.venue, self.year)
    }

    fn link_fields(&self) -> Vec<(&'static str, &str)> {
        vec![("publication_link", self.publication_link.as_str())]
    }
}

/// Employment history, mostly filled in by alumni.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WorkExperience {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<Value>,
    #[serde(deserialize_with = "lenient::string_or_empty")]
    pub company: String,
    #[serde(deserialize_with = "lenient::string_or_empty")]
    pub designation: String,
    #[serde(deserialize_with = "lenient::string_or_empty")]
    pub start_date: String,
    #[serde(deserialize_with = "lenient::string_or_empty")]
    pub end_date: String,
    #[serde(deserialize_with = "lenient::bool_or_false")]
    pub current: bool,
    #[serde(deserialize_with = "lenient::string_or_empty")]
    pub description: String,
}

impl SectionEntry for WorkExperience {
    const SECTION: &'static str = "experiences";
    const LABEL: &'static str = "Work Experience";

    fn headline(&self) -> String {
        let until = if self.current {
            "present"
        } else {
            self.end_date.as_str()
        };
        format!(
            "{} at {} ({} - {})",
            self.designation, self.company, self.start_date, until
        )
    }

    fn link_fields(&self) -> Vec<(&'static str, &str)> {
        Vec::new()
    }
}
