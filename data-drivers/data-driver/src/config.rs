// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.
//
// Copyright (c) DUSK NETWORK. All rights reserved.

//! Transcoder configuration.
//!
//! ```toml
//! max_payload_len = 65536
//! pretty_json = true
//! families = ["Msg", "Authorization"]
//! ```

use std::fmt;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::Error;

/// Default `max_payload_len`, 1 MiB.
pub const DEFAULT_MAX_PAYLOAD_LEN: usize = 1024 * 1024;

/// The entity families a transcoder can dispatch to.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize,
    Deserialize,
)]
pub enum FamilyKind {
    /// [`initia_core::key::PublicKey`].
    PublicKey,
    /// [`initia_core::auth::Account`].
    Account,
    /// [`initia_core::gov::ProposalContent`].
    ProposalContent,
    /// [`initia_core::authz::Authorization`].
    Authorization,
    /// [`initia_core::msg::Msg`].
    Msg,
}

impl FamilyKind {
    /// Every family, in dispatch order.
    pub const ALL: [FamilyKind; 5] = [
        FamilyKind::PublicKey,
        FamilyKind::Account,
        FamilyKind::ProposalContent,
        FamilyKind::Authorization,
        FamilyKind::Msg,
    ];

    /// The family's registry label.
    pub const fn label(self) -> &'static str {
        match self {
            FamilyKind::PublicKey => "PublicKey",
            FamilyKind::Account => "Account",
            FamilyKind::ProposalContent => "ProposalContent",
            FamilyKind::Authorization => "Authorization",
            FamilyKind::Msg => "Msg",
        }
    }
}

impl fmt::Display for FamilyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Settings of a [`Transcoder`](crate::Transcoder).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DriverConfig {
    /// Largest accepted input payload, in bytes.
    pub max_payload_len: usize,
    /// Emit indented JSON.
    pub pretty_json: bool,
    /// Families the transcoder dispatches to.
    pub families: Vec<FamilyKind>,
}

impl Default for DriverConfig {
    fn default() -> Self {
        Self {
            max_payload_len: DEFAULT_MAX_PAYLOAD_LEN,
            pretty_json: false,
            families: FamilyKind::ALL.to_vec(),
        }
    }
}

impl DriverConfig {
    /// Parses a TOML document; missing keys take their defaults.
    pub fn from_toml(toml: &str) -> Result<Self, Error> {
        Ok(toml::from_str(toml)?)
    }

    /// Reads and parses a TOML file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, Error> {
        let path = path.as_ref();
        let toml = std::fs::read_to_string(path)?;
        let config = Self::from_toml(&toml)?;
        info!(
            event = "driver config loaded",
            path = %path.display(),
            max_payload_len = config.max_payload_len,
            families = config.families.len(),
        );
        Ok(config)
    }

    /// Sets `max_payload_len`.
    pub fn with_max_payload_len(mut self, max_payload_len: usize) -> Self {
        self.max_payload_len = max_payload_len;
        self
    }

    /// Sets `pretty_json`.
    pub fn with_pretty_json(mut self, pretty_json: bool) -> Self {
        self.pretty_json = pretty_json;
        self
    }

    /// Restricts dispatch to the given families.
    pub fn with_families<I>(mut self, families: I) -> Self
    where
        I: IntoIterator<Item = FamilyKind>,
    {
        self.families = families.into_iter().collect();
        self
    }

    /// Whether `family` is enabled.
    pub fn is_enabled(&self, family: FamilyKind) -> bool {
        self.families.contains(&family)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_keys_take_defaults() -> Result<(), Error> {
        let config = DriverConfig::from_toml("pretty_json = true")?;
        assert!(config.pretty_json);
        assert_eq!(config.max_payload_len, DEFAULT_MAX_PAYLOAD_LEN);
        assert_eq!(config.families, FamilyKind::ALL);
        Ok(())
    }

    #[test]
    fn unknown_family_is_rejected() {
        let err = DriverConfig::from_toml(r#"families = ["Block"]"#);
        assert!(matches!(err, Err(Error::Config(_))));
    }

    #[test]
    fn labels_match_core_registries() {
        use initia_core::Family;

        assert_eq!(
            FamilyKind::PublicKey.label(),
            initia_core::key::PublicKey::registry().family()
        );
        assert_eq!(
            FamilyKind::Account.label(),
            initia_core::auth::Account::registry().family()
        );
        assert_eq!(
            FamilyKind::ProposalContent.label(),
            initia_core::gov::ProposalContent::registry().family()
        );
        assert_eq!(
            FamilyKind::Authorization.label(),
            initia_core::authz::Authorization::registry().family()
        );
        assert_eq!(
            FamilyKind::Msg.label(),
            initia_core::msg::Msg::registry().family()
        );
    }
}
