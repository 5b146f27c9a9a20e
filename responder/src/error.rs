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

use thiserror::Error;

/// Describes the errors that can be reported by the responder.
///
/// None of these are retried internally. Either a fully signed structure is
/// returned or one of these errors is.
#[derive(Debug, Eq, Error, PartialEq)]
#[non_exhaustive]
pub enum ResponderError {
    /// The signing credentials could not be loaded (unreadable credential
    /// store, bad password, empty container or unusable private key).
    #[error("unable to load signing credentials ({0})")]
    CredentialLoad(String),

    /// A certificate or OCSP structure could not be decoded or re-encoded.
    #[error("encoding error ({0})")]
    Encoding(String),

    /// The signature over the response could not be produced.
    #[error("signing error ({0})")]
    Signing(String),

    /// The issuer of a certificate was not found in the trust pool.
    #[error("issuer not found ({0})")]
    Lookup(String),
}

impl ResponderError {
    pub(crate) fn encoding<E: std::fmt::Display>(err: E) -> Self {
        Self::Encoding(err.to_string())
    }
}
