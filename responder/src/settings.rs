// Copyright 2024 Adobe. All rights reserved.
// This file is licensed to you under the Apache License,
// Version 2.0 (http://www.apache.org/licenses/LICENSE-2.0)
// or the MIT license (http://opensource.org/licenses/MIT),
// at your option.

// Unless required by applicable law or agreed to in writing,
// this software is distributed on an "AS IS" BASIS, WITHOUT
// WARRANTIES OR REPRESENTATIONS OF ANY KIND, either express or
// implied. See the LICENSE-MIT and LICENSE-APACHE files for the
// specific language governing permissions and limitations under
// each license.

//! Settings for configuring an [`OcspResponder`](crate::OcspResponder).
//!
//! Settings can be loaded from TOML:
//!
//! ```toml
//! signing_alg = "es256"
//! cert_id_hash = "sha256"
//! status_resolution = "always_good"
//! chain_mode = "issuer_and_signer"
//! ```
//!
//! Any key that is left out keeps its default value.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::{CertIdHashAlg, ChainMode, SigningAlg};

/// Describes how the status of each response entry is chosen.
#[derive(Copy, Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StatusResolution {
    /// Every entry reports the directive currently held by the
    /// [`StatusDirectiveStore`](crate::StatusDirectiveStore).
    #[default]
    Directive,

    /// Every entry reports good, whatever the directive says.
    ///
    /// Kept for test suites written against responders that ignored the
    /// configured directive.
    AlwaysGood,
}

/// Settings to configure a responder.
#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
#[serde(default)]
pub struct ResponderSettings {
    /// Algorithm used to sign responses.
    ///
    /// The default value is `rs256`.
    pub signing_alg: SigningAlg,

    /// Digest used for certificate identifiers on both the request and the
    /// response side.
    ///
    /// The default value is `sha1`.
    pub cert_id_hash: CertIdHashAlg,

    /// How entry statuses are resolved.
    ///
    /// The default value is `directive`.
    pub status_resolution: StatusResolution,

    /// Certificates attached by [`OcspResponder::get_ocsp_response`] and
    /// [`OcspResponder::respond`]. Revocation tokens always attach the issuer
    /// and the signer.
    ///
    /// The default value is `issuer_only`.
    ///
    /// [`OcspResponder::get_ocsp_response`]: crate::OcspResponder::get_ocsp_response
    /// [`OcspResponder::respond`]: crate::OcspResponder::respond
    pub chain_mode: ChainMode,
}

impl ResponderSettings {
    /// Parse settings from a TOML string.
    pub fn from_toml(toml: &str) -> Result<Self, SettingsError> {
        Ok(toml::from_str(toml)?)
    }

    /// Serialize these settings as TOML.
    pub fn to_toml(&self) -> Result<String, SettingsError> {
        toml::to_string(self).map_err(|e| SettingsError::Serialize(e.to_string()))
    }
}

/// Describes errors that can occur while reading or writing settings.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum SettingsError {
    /// The TOML could not be parsed into settings.
    #[error("invalid settings: {0}")]
    Parse(#[from] toml::de::Error),

    /// The settings could not be written as TOML.
    #[error("unable to serialize settings: {0}")]
    Serialize(String),
}
