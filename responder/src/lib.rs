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

#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![deny(clippy::unwrap_used)]
#![deny(missing_docs)]
#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg, doc_cfg_hide))]

pub mod cert_id;
pub use cert_id::{compute_identifier, CertIdHashAlg};

pub mod directive;
pub use directive::{MockClock, StatusDirective, StatusDirectiveStore};

mod error;
pub use error::ResponderError;

pub mod hash;

pub mod identity;
pub use identity::SigningIdentity;

pub(crate) mod internal;

pub mod ocsp;
pub use ocsp::{build_request, ChainMode, OcspRequest, OcspResponse, ResponseBuilder};

#[cfg(feature = "openssl")]
pub mod openssl;

pub mod raw_signature;
pub use raw_signature::{RawSigner, RawSignerError, SigningAlg};

mod responder;
pub use responder::OcspResponder;

pub mod settings;
pub use settings::{ResponderSettings, StatusResolution};

pub mod token;
pub use token::{
    CertificatePool, CertificateToken, RevocationToken, RevocationTokenHolder, TrustPool,
};

#[cfg(test)]
pub(crate) mod tests;
