//! Mock session store.
//!
//! Single source of truth for the "logged-in" profile, synchronized with
//! durable storage under the `"user"` record. This is a mock session, not a
//! security boundary: any non-empty credentials authenticate, and the
//! password is never stored or checked against anything.
//!
//! State machine: anonymous → login/register → authenticated → logout →
//! anonymous. Failed validation leaves the state unchanged.

use tracing::instrument;

use crate::error::{ValidationError, require_non_empty};
use crate::models::{UserProfile, storage_keys};
use crate::storage::Storage;

/// Owner of the session state.
pub struct SessionStore<S: Storage> {
    storage: S,
    profile: Option<UserProfile>,
}

impl<S: Storage> SessionStore<S> {
    /// Create an anonymous session store.
    ///
    /// Call [`SessionStore::restore`] to pick up a persisted profile.
    pub const fn new(storage: S) -> Self {
        Self {
            storage,
            profile: None,
        }
    }

    /// Create a store and immediately restore any persisted session.
    pub fn open(storage: S) -> Self {
        let mut store = Self::new(storage);
        store.restore();
        store
    }

    /// Restore the session from the persisted record.
    ///
    /// A persisted profile makes the session authenticated as-is; no
    /// credential re-verification happens. Absent or malformed records
    /// leave the session anonymous.
    #[instrument(skip(self))]
    pub fn restore(&mut self) {
        self.profile = match self.storage.get(storage_keys::USER) {
            Some(raw) => match serde_json::from_str(&raw) {
                Ok(profile) => Some(profile),
                Err(e) => {
                    tracing::warn!(error = %e, "malformed user record, staying anonymous");
                    None
                }
            },
            None => None,
        };
    }

    /// Log in with any non-empty credentials.
    ///
    /// The resulting profile carries the entered email plus placeholder
    /// name and phone; the password is discarded.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError`] when `email` or `password` is empty;
    /// the session stays as it was.
    #[instrument(skip(self, password))]
    pub fn login(&mut self, email: &str, password: &str) -> Result<&UserProfile, ValidationError> {
        require_non_empty(&[("email", email), ("password", password)])?;

        let profile = UserProfile {
            name: UserProfile::PLACEHOLDER_NAME.to_owned(),
            email: email.to_owned(),
            phone: UserProfile::PLACEHOLDER_PHONE.to_owned(),
            address: String::new(),
        };
        Ok(self.authenticate(profile))
    }

    /// Register a new profile from the supplied fields.
    ///
    /// The password is accepted but not retained.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError`] when any field is empty; the session
    /// stays as it was.
    #[instrument(skip(self, password))]
    pub fn register(
        &mut self,
        name: &str,
        email: &str,
        password: &str,
        phone: &str,
    ) -> Result<&UserProfile, ValidationError> {
        require_non_empty(&[
            ("name", name),
            ("email", email),
            ("password", password),
            ("phone", phone),
        ])?;

        let profile = UserProfile {
            name: name.to_owned(),
            email: email.to_owned(),
            phone: phone.to_owned(),
            address: String::new(),
        };
        Ok(self.authenticate(profile))
    }

    /// Overwrite the profile with the given fields.
    ///
    /// Always succeeds; no field validation is performed.
    #[instrument(skip(self, profile))]
    pub fn update_profile(&mut self, profile: UserProfile) {
        self.authenticate(profile);
    }

    /// Clear the in-memory profile and delete the persisted record.
    #[instrument(skip(self))]
    pub fn logout(&mut self) {
        self.profile = None;
        if let Err(e) = self.storage.remove(storage_keys::USER) {
            tracing::warn!(error = %e, "failed to delete user record");
        }
    }

    /// The current profile, if the session is authenticated.
    #[must_use]
    pub fn profile(&self) -> Option<&UserProfile> {
        self.profile.as_ref()
    }

    /// Whether the session is authenticated.
    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.profile.is_some()
    }

    fn authenticate(&mut self, profile: UserProfile) -> &UserProfile {
        self.persist(&profile);
        self.profile.insert(profile)
    }

    // Best-effort durability, same contract as the cart store.
    fn persist(&self, profile: &UserProfile) {
        match serde_json::to_string(profile) {
            Ok(encoded) => {
                if let Err(e) = self.storage.put(storage_keys::USER, &encoded) {
                    tracing::warn!(error = %e, "failed to persist user profile");
                }
            }
            Err(e) => tracing::warn!(error = %e, "failed to encode user profile"),
        }
    }
}
