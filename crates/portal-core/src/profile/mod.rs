//! Profile domain module.
//!
//! # Module Structure
//!
//! - `entry`: Generic repeatable section controller (`EntryCollection`)
//! - `sections`: Section payloads (`AcademicSemester`, `Internship`, …)
//! - `record`: Editable aggregate and its wire form (`ProfileRecord`, `ProfilePayload`)
//! - `link`: Link-field validation
//! - `lenient`: Defaulting decoders used at the wire boundary
//! - `service`: Remote profile storage trait
//!
//! # Usage
//!
//! ```ignore
//! use portal_core::profile::{ProfileRecord, ProfilePayload, AcademicSemester, EditMode};
//!
//! let mut record = ProfileRecord::hydrate(payload);
//! record.set_mode(EditMode::Edit);
//! let id = record.edit_section::<AcademicSemester>()?.add_default();
//! ```

mod entry;
pub mod lenient;
mod link;
mod record;
mod sections;
mod service;

pub use entry::{Entry, EntryCollection, EntryId};
pub use link::{ProfileLink, is_usable_link, view_link};
pub use record::{EditMode, ProfilePayload, ProfileRecord, ProfileSection, ProfileSummary};
pub use sections::{
    AcademicSemester, CareerOverview, Certification, ContactInfo, Internship, Project,
    Publication, SectionEntry, WorkExperience,
};
pub use service::ProfileService;
