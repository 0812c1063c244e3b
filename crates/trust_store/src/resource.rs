// Copyright 2021-2024 SecureDNA Stiftung (SecureDNA Foundation) <licensing@securedna.org>
// SPDX-License-Identifier: MIT OR Apache-2.0

//! The trust store as a declarative resource: create, refresh and delete against a
//! caller-owned state record. Inputs are immutable once created, so there is no
//! real update.

use thiserror::Error;
use tracing::info;

use crate::{
    generate_with_clock, Clock, Diagnostics, SystemClock, TrustStoreConfig, TrustStoreError,
};

pub const RESOURCE_DESCRIPTION: &str =
    "JKS trust store generated from one or more PEM encoded certificates.";
pub const CERTIFICATES_DESCRIPTION: &str =
    "CA certificates or chains to include in generated trust store; in PEM format.";
pub const PASSWORD_DESCRIPTION: &str =
    "Password to secure trust store. Defaults to empty string.";
pub const JKS_DESCRIPTION: &str = "JKS trust store data; base64 encoded.";
pub const ID_DESCRIPTION: &str = "Hex SHA-1 of the base64 encoded trust store.";

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{0}")]
pub struct PersistError(pub String);

/// Where the outputs of a generation are recorded.
pub trait ResourceData {
    fn id(&self) -> &str;
    fn set_id(&mut self, id: String);
    fn set_jks(&mut self, jks: String) -> Result<(), PersistError>;
}

/// Plain in-memory state record. An empty id means the resource does not exist.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResourceState {
    pub id: String,
    pub jks: Option<String>,
}

impl ResourceData for ResourceState {
    fn id(&self) -> &str {
        &self.id
    }

    fn set_id(&mut self, id: String) {
        self.id = id;
    }

    fn set_jks(&mut self, jks: String) -> Result<(), PersistError> {
        self.jks = Some(jks);
        Ok(())
    }
}

#[derive(Debug, Clone, Default)]
pub struct TrustStoreResource<C = SystemClock> {
    clock: C,
}

impl TrustStoreResource {
    pub fn new() -> Self {
        Self::default()
    }
}

impl<C: Clock> TrustStoreResource<C> {
    pub fn with_clock(clock: C) -> Self {
        Self { clock }
    }

    /// Runs the whole pipeline and records the id and base64 store in `state`.
    /// Nothing is recorded when generation fails fatally.
    pub fn create(
        &self,
        config: &TrustStoreConfig,
        state: &mut impl ResourceData,
    ) -> Diagnostics {
        let generation = generate_with_clock(config, &self.clock);
        let mut diagnostics = generation.diagnostics;
        let Some(artifact) = generation.artifact else {
            return diagnostics;
        };

        state.set_id(artifact.id().to_owned());
        if let Err(e) = state.set_jks(artifact.jks().to_owned()) {
            diagnostics.push(TrustStoreError::PersistJks(e));
        }
        info!(id = state.id(), "Created trust store resource");
        diagnostics
    }

    /// Refreshes `state` by generating the store again.
    ///
    /// With a wall clock the entry timestamps change, and with them the id.
    pub fn read(
        &self,
        config: &TrustStoreConfig,
        state: &mut impl ResourceData,
    ) -> Diagnostics {
        self.create(config, state)
    }

    /// In-place changes are never possible; reports which inputs would force the
    /// resource to be recreated.
    pub fn update(
        &self,
        current: &TrustStoreConfig,
        proposed: &TrustStoreConfig,
    ) -> Diagnostics {
        let mut diagnostics = Diagnostics::new();
        if current.certificates != proposed.certificates {
            diagnostics.push(TrustStoreError::ImmutableInput("certificates"));
        }
        if current.password != proposed.password {
            diagnostics.push(TrustStoreError::ImmutableInput("password"));
        }
        if current.strictness != proposed.strictness {
            diagnostics.push(TrustStoreError::ImmutableInput("strictness"));
        }
        diagnostics
    }

    /// The store only exists in `state`, so forgetting the id is all there is to do.
    pub fn delete(&self, state: &mut impl ResourceData) -> Diagnostics {
        state.set_id(String::new());
        Diagnostics::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::{certificate_pem, fixed_clock};
    use crate::{artifact_id, Strictness};

    struct ReadOnlyState(String);

    impl ResourceData for ReadOnlyState {
        fn id(&self) -> &str {
            &self.0
        }

        fn set_id(&mut self, id: String) {
            self.0 = id;
        }

        fn set_jks(&mut self, _jks: String) -> Result<(), PersistError> {
            Err(PersistError("state is read only".to_owned()))
        }
    }

    fn config() -> TrustStoreConfig {
        TrustStoreConfig::new(vec![certificate_pem(b"a")]).with_password("secret")
    }

    #[test]
    fn create_records_id_and_jks() {
        let resource = TrustStoreResource::with_clock(fixed_clock());
        let mut state = ResourceState::default();
        let diagnostics = resource.create(&config(), &mut state);

        assert!(diagnostics.is_empty());
        let jks = state.jks.as_deref().unwrap();
        assert_eq!(state.id, artifact_id(jks));
    }

    #[test]
    fn read_is_stable_with_a_fixed_clock() {
        let resource = TrustStoreResource::with_clock(fixed_clock());
        let mut created = ResourceState::default();
        resource.create(&config(), &mut created);

        let mut refreshed = created.clone();
        let diagnostics = resource.read(&config(), &mut refreshed);
        assert!(diagnostics.is_empty());
        assert_eq!(refreshed, created);
    }

    #[test]
    fn fatal_generation_leaves_state_untouched() {
        let resource = TrustStoreResource::with_clock(fixed_clock());
        let mut state = ResourceState::default();
        let diagnostics = resource.create(&TrustStoreConfig::new(vec![]), &mut state);

        assert!(diagnostics.has_fatal());
        assert_eq!(state, ResourceState::default());
    }

    #[test]
    fn failure_to_save_jks_is_reported() {
        let resource = TrustStoreResource::with_clock(fixed_clock());
        let mut state = ReadOnlyState(String::new());
        let diagnostics = resource.create(&config(), &mut state);

        assert!(!state.0.is_empty());
        let errors = diagnostics.into_vec();
        assert!(matches!(errors.as_slice(), [TrustStoreError::PersistJks(_)]));
        assert_eq!(errors[0].to_string(), "failed to save JKS: state is read only");
    }

    #[test]
    fn delete_clears_id() {
        let resource = TrustStoreResource::with_clock(fixed_clock());
        let mut state = ResourceState::default();
        resource.create(&config(), &mut state);
        assert!(resource.delete(&mut state).is_empty());
        assert_eq!(state.id(), "");
    }

    #[test]
    fn update_names_every_changed_input() {
        let resource = TrustStoreResource::new();
        assert!(resource.update(&config(), &config()).is_empty());

        let proposed = TrustStoreConfig::new(vec![certificate_pem(b"b")])
            .with_password("other")
            .with_strictness(Strictness::Strict);
        let errors = resource.update(&config(), &proposed).into_vec();
        assert!(matches!(
            errors.as_slice(),
            [
                TrustStoreError::ImmutableInput("certificates"),
                TrustStoreError::ImmutableInput("password"),
                TrustStoreError::ImmutableInput("strictness"),
            ]
        ));
        assert!(errors.iter().all(TrustStoreError::is_fatal));
    }
}
