//! Link-field validation.
//!
//! A link is offered as a clickable "view" affordance only when it parses as
//! an absolute URL with a hierarchical scheme (`https://…`, `http://…`,
//! `ftp://…`). `mailto:`, `javascript:` and other non-base URLs are treated
//! as unusable. The check is advisory: stored values are never rewritten.

use crate::profile::entry::EntryId;
use url::Url;

/// Returns the URL to offer as a "view" link, or `None` if `raw` is blank or malformed.
pub fn view_link(raw: &str) -> Option<Url> {
    if raw.trim().is_empty() {
        return None;
    }
    Url::parse(raw).ok().filter(|url| !url.cannot_be_a_base())
}

/// True when `raw` would get a "view" affordance.
pub fn is_usable_link(raw: &str) -> bool {
    view_link(raw).is_some()
}

/// One link-typed field of a profile, with its validation result.
#[derive(Debug, Clone, PartialEq)]
pub struct ProfileLink {
    /// Wire name of the section (`contact`, `semesters`, …).
    pub section: &'static str,
    /// Entry the link belongs to; `None` for singleton sections.
    pub entry: Option<EntryId>,
    /// Wire name of the field (`result_link`, …).
    pub field: &'static str,
    /// Value exactly as stored.
    pub raw: String,
    pub url: Option<Url>,
}

impl ProfileLink {
    pub fn new(
        section: &'static str,
        entry: Option<EntryId>,
        field: &'static str,
        raw: &str,
    ) -> Self {
        Self {
            section,
            entry,
            field,
            raw: raw.to_string(),
            url: view_link(raw),
        }
    }

    pub fn is_viewable(&self) -> bool {
        self.url.is_some()
    }

    /// True when something was entered but it is not a usable link.
    pub fn is_broken(&self) -> bool {
        self.url.is_none() && !self.raw.trim().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_absolute_urls_are_usable() {
        assert!(is_usable_link("https://results.university.edu/sem/3"));
        assert!(is_usable_link("http://example.com"));
        assert!(is_usable_link("  https://example.com/padded  "));
    }

    #[test]
    fn test_blank_and_malformed_are_not_usable() {
        assert!(view_link("").is_none());
        assert!(view_link("   ").is_none());
        assert!(view_link("not a url").is_none());
        assert!(view_link("www.example.com").is_none());
        assert!(view_link("/relative/path").is_none());
        assert!(view_link("https://").is_none());
    }

    #[test]
    fn test_non_base_schemes_are_not_usable() {
        assert!(view_link("mailto:placement@university.edu").is_none());
        assert!(view_link("javascript:alert(1)").is_none());
    }

    #[test]
    fn test_profile_link_keeps_raw_value() {
        let link = ProfileLink::new("contact", None, "github_link", "not a url");
        assert_eq!(link.raw, "not a url");
        assert!(!link.is_viewable());
        assert!(link.is_broken());

        let empty = ProfileLink::new("contact", None, "github_link", "");
        assert!(!empty.is_viewable());
        assert!(!empty.is_broken());
    }
}
