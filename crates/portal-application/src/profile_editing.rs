//! Profile editing session.
//!
//! Owns one `ProfileRecord` for the lifetime of an edit: hydrated from the
//! profile service on `load`, then either pushed back on `save` or rolled back
//! on `cancel`. Nothing is persisted in between.

use chrono::{DateTime, Utc};
use portal_core::error::{PortalError, Result};
use portal_core::profile::{EditMode, ProfilePayload, ProfileRecord, ProfileService};
use portal_core::session::SessionReader;
use std::sync::Arc;
use uuid::Uuid;

/// Whether the record holds remote data yet.
///
/// An empty but loaded profile is `Loaded`; only a failed fetch is `Failed`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum LoadState {
    #[default]
    NotLoaded,
    Loaded,
    Failed(String),
}

pub struct ProfileEditSession {
    id: Uuid,
    profiles: Arc<dyn ProfileService>,
    session: SessionReader,
    record: ProfileRecord,
    /// Record as it was when editing began; restored by `cancel`.
    snapshot: Option<ProfileRecord>,
    load_state: LoadState,
    loaded_at: Option<DateTime<Utc>>,
    last_saved_at: Option<DateTime<Utc>>,
}

impl ProfileEditSession {
    pub fn new(profiles: Arc<dyn ProfileService>, session: SessionReader) -> Self {
        Self {
            id: Uuid::new_v4(),
            profiles,
            session,
            record: ProfileRecord::default(),
            snapshot: None,
            load_state: LoadState::NotLoaded,
            loaded_at: None,
            last_saved_at: None,
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn load_state(&self) -> &LoadState {
        &self.load_state
    }

    pub fn loaded_at(&self) -> Option<DateTime<Utc>> {
        self.loaded_at
    }

    pub fn last_saved_at(&self) -> Option<DateTime<Utc>> {
        self.last_saved_at
    }

    pub fn record(&self) -> &ProfileRecord {
        &self.record
    }

    /// Mutable access to the record. Section mutation is still refused in
    /// view mode by the record itself.
    pub fn record_mut(&mut self) -> &mut ProfileRecord {
        &mut self.record
    }

    pub fn is_editing(&self) -> bool {
        self.record.mode() == EditMode::Edit
    }

    /// True when the record differs from the snapshot taken by `begin_editing`.
    pub fn has_changes(&self) -> bool {
        match &self.snapshot {
            Some(snapshot) => snapshot.to_payload() != self.record.to_payload(),
            None => false,
        }
    }

    /// Fetches the profile and hydrates a fresh record in view mode.
    ///
    /// On failure the previous record is kept and the load state becomes
    /// `Failed`.
    pub async fn load(&mut self) -> Result<()> {
        let token = match self.token() {
            Ok(token) => token,
            Err(e) => {
                self.load_state = LoadState::Failed(e.to_string());
                return Err(e);
            }
        };
        match self.profiles.fetch_profile(&token).await {
            Ok(payload) => {
                self.record = ProfileRecord::hydrate(payload);
                self.snapshot = None;
                self.load_state = LoadState::Loaded;
                self.loaded_at = Some(Utc::now());
                tracing::info!("[ProfileEdit] Loaded profile (session {})", self.id);
                Ok(())
            }
            Err(e) => {
                tracing::warn!("[ProfileEdit] Failed to load profile: {}", e);
                self.load_state = LoadState::Failed(e.to_string());
                Err(e)
            }
        }
    }

    /// Replaces the record with `payload` and switches to edit mode.
    ///
    /// Used to stage data from outside the profile service (an import file);
    /// `cancel` afterwards returns to the previously loaded record.
    pub fn stage(&mut self, payload: ProfilePayload) {
        let previous = std::mem::replace(&mut self.record, ProfileRecord::hydrate(payload));
        if self.snapshot.is_none() {
            self.snapshot = Some(previous);
        }
        self.load_state = LoadState::Loaded;
        self.record.set_mode(EditMode::Edit);
    }

    /// Switches to edit mode, remembering the current record for `cancel`.
    pub fn begin_editing(&mut self) -> Result<()> {
        if self.load_state != LoadState::Loaded {
            return Err(PortalError::invalid_input(
                "profile must be loaded before editing",
            ));
        }
        if self.is_editing() {
            return Ok(());
        }
        let mut snapshot = self.record.clone();
        snapshot.set_mode(EditMode::View);
        self.snapshot = Some(snapshot);
        self.record.set_mode(EditMode::Edit);
        Ok(())
    }

    /// Pushes the record to the profile service and returns to view mode.
    ///
    /// On failure the session stays in edit mode with the edits intact.
    pub async fn save(&mut self) -> Result<()> {
        if !self.is_editing() {
            return Err(PortalError::read_only("profile is not being edited"));
        }
        let token = self.token()?;
        let payload = self.record.to_payload();

        self.profiles.store_profile(&token, &payload).await?;

        self.record.set_mode(EditMode::View);
        self.snapshot = None;
        self.last_saved_at = Some(Utc::now());
        let summary = self.record.summary();
        tracing::info!(
            "[ProfileEdit] Saved profile (session {}, {} links, {} unusable)",
            self.id,
            summary.links_total,
            summary.links_broken
        );
        Ok(())
    }

    /// Discards edits and returns to view mode.
    pub fn cancel(&mut self) {
        if let Some(mut snapshot) = self.snapshot.take() {
            snapshot.set_mode(EditMode::View);
            self.record = snapshot;
        } else {
            self.record.set_mode(EditMode::View);
        }
        tracing::debug!("[ProfileEdit] Edits discarded (session {})", self.id);
    }

    fn token(&self) -> Result<String> {
        self.session
            .access_token()?
            .ok_or_else(|| PortalError::unauthorized("not logged in"))
    }
}
