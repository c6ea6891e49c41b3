use anyhow::{Context, Result};
use portal_application::{PortalContext, ProfileEditSession};
use portal_core::profile::{
    AcademicSemester, Certification, Internship, ProfilePayload, ProfileRecord, ProfileSection,
    Project, Publication, SectionEntry, WorkExperience, view_link,
};
use std::fmt::Write as _;
use std::path::Path;

async fn loaded(context: &PortalContext) -> Result<ProfileEditSession> {
    let mut editing = context.profile_session();
    editing.load().await.context("Failed to load profile")?;
    Ok(editing)
}

pub async fn show(context: &PortalContext) -> Result<()> {
    let editing = loaded(context).await?;
    print!("{}", render(editing.record()));
    Ok(())
}

pub async fn export(context: &PortalContext) -> Result<()> {
    let editing = loaded(context).await?;
    let json = serde_json::to_string_pretty(&editing.record().to_payload())?;
    println!("{}", json);
    Ok(())
}

pub async fn import(context: &PortalContext, file: &Path) -> Result<()> {
    let content = std::fs::read_to_string(file)
        .with_context(|| format!("Failed to read {}", file.display()))?;
    let value: serde_json::Value = serde_json::from_str(&content)
        .with_context(|| format!("{} is not valid JSON", file.display()))?;

    let mut editing = context.profile_session();
    editing.stage(ProfilePayload::from_value(value));
    editing.save().await.context("Failed to save profile")?;

    let summary = editing.record().summary();
    println!("Profile saved.");
    if summary.links_broken > 0 {
        println!(
            "{} link(s) are not valid URLs and will not be clickable.",
            summary.links_broken
        );
    }
    Ok(())
}

/// View-mode rendering. Only usable links get a `[view]` marker.
pub fn render(record: &ProfileRecord) -> String {
    let mut out = String::new();

    let contact = record.contact();
    let _ = writeln!(out, "== Contact ==");
    field(&mut out, "name", &contact.full_name);
    field(&mut out, "email", &contact.email);
    field(&mut out, "phone", &contact.phone);
    field(&mut out, "address", &contact.address);
    links(&mut out, contact.link_fields());

    let career = record.career();
    let _ = writeln!(out, "== Career ==");
    field(&mut out, "headline", &career.headline);
    field(&mut out, "summary", &career.summary);
    if !career.preferred_domains.is_empty() {
        field(&mut out, "domains", &career.preferred_domains.join(", "));
    }
    if career.cgpa > 0.0 {
        field(&mut out, "cgpa", &career.cgpa.to_string());
    }
    if career.graduation_year > 0 {
        field(&mut out, "graduating", &career.graduation_year.to_string());
    }
    field(&mut out, "company", &career.current_company);
    field(&mut out, "designation", &career.designation);
    links(&mut out, career.link_fields());

    section::<AcademicSemester>(&mut out, record);
    section::<Internship>(&mut out, record);
    section::<Certification>(&mut out, record);
    section::<Project>(&mut out, record);
    section::<Publication>(&mut out, record);
    section::<WorkExperience>(&mut out, record);

    out
}

fn section<S: ProfileSection>(out: &mut String, record: &ProfileRecord) {
    let entries = record.section::<S>();
    let _ = writeln!(out, "== {} ({}) ==", S::LABEL, entries.len());
    for entry in entries {
        let _ = writeln!(out, "- {}", entry.value().headline());
        links(out, entry.value().link_fields());
    }
}

fn field(out: &mut String, name: &str, value: &str) {
    if !value.is_empty() {
        let _ = writeln!(out, "  {}: {}", name, value);
    }
}

fn links(out: &mut String, fields: Vec<(&'static str, &str)>) {
    for (name, raw) in fields {
        if raw.trim().is_empty() {
            continue;
        }
        if view_link(raw).is_some() {
            let _ = writeln!(out, "  {}: {} [view]", name, raw);
        } else {
            let _ = writeln!(out, "  {}: {}", name, raw);
        }
    }
}
