//! Profile record model.
//!
//! `ProfilePayload` is the external representation exchanged with the profile
//! service. `ProfileRecord` is the editable aggregate built from it: the two
//! singleton sections plus one `EntryCollection` per repeatable section, all
//! under a single view/edit mode flag.

use super::entry::EntryCollection;
use super::lenient;
use super::link::ProfileLink;
use super::sections::{
    AcademicSemester, CareerOverview, Certification, ContactInfo, Internship, Project,
    Publication, SectionEntry, WorkExperience,
};
use crate::error::{PortalError, Result};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// External profile representation.
///
/// Decoding never fails on content: a missing or mistyped section becomes
/// its default.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProfilePayload {
    #[serde(deserialize_with = "lenient::object_or_default")]
    pub contact: ContactInfo,
    #[serde(deserialize_with = "lenient::object_or_default")]
    pub career: CareerOverview,
    #[serde(deserialize_with = "lenient::list_or_empty")]
    pub semesters: Vec<AcademicSemester>,
    #[serde(deserialize_with = "lenient::list_or_empty")]
    pub internships: Vec<Internship>,
    #[serde(deserialize_with = "lenient::list_or_empty")]
    pub certifications: Vec<Certification>,
    #[serde(deserialize_with = "lenient::list_or_empty")]
    pub projects: Vec<Project>,
    #[serde(deserialize_with = "lenient::list_or_empty")]
    pub publications: Vec<Publication>,
    #[serde(deserialize_with = "lenient::list_or_empty")]
    pub experiences: Vec<WorkExperience>,
}

impl ProfilePayload {
    /// Decodes an arbitrary JSON value. Anything that is not an object is
    /// treated as an empty profile.
    pub fn from_value(value: Value) -> Self {
        if !value.is_object() {
            tracing::warn!("[Profile] Payload is not an object; using empty profile");
            return Self::default();
        }
        serde_json::from_value(value).unwrap_or_else(|e| {
            tracing::warn!("[Profile] Payload could not be decoded ({}); using empty profile", e);
            Self::default()
        })
    }
}

/// Whether the record may be mutated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EditMode {
    #[default]
    View,
    Edit,
}

/// Access to the collection that stores entries of a given type.
pub trait ProfileSection: SectionEntry {
    fn section(record: &ProfileRecord) -> &EntryCollection<Self>;
    fn section_mut(record: &mut ProfileRecord) -> &mut EntryCollection<Self>;
}

macro_rules! profile_section {
    ($entry:ty, $field:ident) => {
        impl ProfileSection for $entry {
            fn section(record: &ProfileRecord) -> &EntryCollection<Self> {
                &record.$field
            }

            fn section_mut(record: &mut ProfileRecord) -> &mut EntryCollection<Self> {
                &mut record.$field
            }
        }
    };
}

profile_section!(AcademicSemester, semesters);
profile_section!(Internship, internships);
profile_section!(Certification, certifications);
profile_section!(Project, projects);
profile_section!(Publication, publications);
profile_section!(WorkExperience, experiences);

/// Entry count per section plus link health, for dashboards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProfileSummary {
    pub sections: Vec<(&'static str, usize)>,
    pub links_total: usize,
    pub links_viewable: usize,
    pub links_broken: usize,
}

impl ProfileSummary {
    pub fn entries_in(&self, section: &str) -> Option<usize> {
        self.sections
            .iter()
            .find(|(name, _)| *name == section)
            .map(|(_, count)| *count)
    }
}

/// Editable multi-section profile.
#[derive(Debug, Clone, Default)]
pub struct ProfileRecord {
    mode: EditMode,
    contact: ContactInfo,
    career: CareerOverview,
    semesters: EntryCollection<AcademicSemester>,
    internships: EntryCollection<Internship>,
    certifications: EntryCollection<Certification>,
    projects: EntryCollection<Project>,
    publications: EntryCollection<Publication>,
    experiences: EntryCollection<WorkExperience>,
}

impl ProfileRecord {
    /// Builds the record from the external representation, in view mode.
    pub fn hydrate(payload: ProfilePayload) -> Self {
        Self {
            mode: EditMode::View,
            contact: payload.contact,
            career: payload.career,
            semesters: EntryCollection::initialize(Some(payload.semesters)),
            internships: EntryCollection::initialize(Some(payload.internships)),
            certifications: EntryCollection::initialize(Some(payload.certifications)),
            projects: EntryCollection::initialize(Some(payload.projects)),
            publications: EntryCollection::initialize(Some(payload.publications)),
            experiences: EntryCollection::initialize(Some(payload.experiences)),
        }
    }

    /// Produces the external representation, preserving every stored value.
    pub fn to_payload(&self) -> ProfilePayload {
        ProfilePayload {
            contact: self.contact.clone(),
            career: self.career.clone(),
            semesters: self.semesters.to_vec(),
            internships: self.internships.to_vec(),
            certifications: self.certifications.to_vec(),
            projects: self.projects.to_vec(),
            publications: self.publications.to_vec(),
            experiences: self.experiences.to_vec(),
        }
    }

    pub fn mode(&self) -> EditMode {
        self.mode
    }

    pub fn set_mode(&mut self, mode: EditMode) {
        self.mode = mode;
    }

    pub fn is_editable(&self) -> bool {
        self.mode == EditMode::Edit
    }

    fn ensure_editable(&self, what: &str) -> Result<()> {
        if self.is_editable() {
            Ok(())
        } else {
            Err(PortalError::read_only(format!(
                "cannot modify {} outside an edit session",
                what
            )))
        }
    }

    pub fn contact(&self) -> &ContactInfo {
        &self.contact
    }

    pub fn contact_mut(&mut self) -> Result<&mut ContactInfo> {
        self.ensure_editable(ContactInfo::SECTION)?;
        Ok(&mut self.contact)
    }

    pub fn career(&self) -> &CareerOverview {
        &self.career
    }

    pub fn career_mut(&mut self) -> Result<&mut CareerOverview> {
        self.ensure_editable(CareerOverview::SECTION)?;
        Ok(&mut self.career)
    }

    /// Read access to a repeatable section.
    pub fn section<S: ProfileSection>(&self) -> &EntryCollection<S> {
        S::section(self)
    }

    /// Mutable access to a repeatable section; refused in view mode.
    pub fn edit_section<S: ProfileSection>(&mut self) -> Result<&mut EntryCollection<S>> {
        self.ensure_editable(S::SECTION)?;
        Ok(S::section_mut(self))
    }

    /// Every link field in the profile with its validation result.
    pub fn links(&self) -> Vec<ProfileLink> {
        let mut links = Vec::new();
        for (field, raw) in self.contact.link_fields() {
            links.push(ProfileLink::new(ContactInfo::SECTION, None, field, raw));
        }
        for (field, raw) in self.career.link_fields() {
            links.push(ProfileLink::new(CareerOverview::SECTION, None, field, raw));
        }
        collect_links(&self.semesters, &mut links);
        collect_links(&self.internships, &mut links);
        collect_links(&self.certifications, &mut links);
        collect_links(&self.projects, &mut links);
        collect_links(&self.publications, &mut links);
        collect_links(&self.experiences, &mut links);
        links
    }

    pub fn summary(&self) -> ProfileSummary {
        let links = self.links();
        ProfileSummary {
            sections: vec![
                (AcademicSemester::SECTION, self.semesters.len()),
                (Internship::SECTION, self.internships.len()),
                (Certification::SECTION, self.certifications.len()),
                (Project::SECTION, self.projects.len()),
                (Publication::SECTION, self.publications.len()),
                (WorkExperience::SECTION, self.experiences.len()),
            ],
            links_total: links.len(),
            links_viewable: links.iter().filter(|l| l.is_viewable()).count(),
            links_broken: links.iter().filter(|l| l.is_broken()).count(),
        }
    }
}

fn collect_links<T: SectionEntry>(collection: &EntryCollection<T>, out: &mut Vec<ProfileLink>) {
    for entry in collection {
        for (field, raw) in entry.value().link_fields() {
            out.push(ProfileLink::new(T::SECTION, Some(entry.id()), field, raw));
        }
    }
}
