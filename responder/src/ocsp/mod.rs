// Copyright 2022 Adobe. All rights reserved.
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

//! Tools for building OCSP requests and signed OCSP responses.

use rasn::types::OctetString;
use rasn_pkix::{Extension, Extensions};
use serde::{Deserialize, Serialize};

use crate::internal::oids;

mod request;
pub use request::{build_request, OcspRequest};

mod response;
pub use response::{OcspResponse, ResponseBuilder};

/// Selects which certificates are attached to a signed response.
#[derive(Copy, Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ChainMode {
    /// Attach only the issuer certificate.
    #[default]
    IssuerOnly,

    /// Attach the issuer certificate followed by the responder's own signing
    /// certificate.
    IssuerAndSigner,
}

/// Find the nonce extension in `extensions`, if present.
fn find_nonce(extensions: Option<&Extensions>) -> Option<&Extension> {
    let nonce_oid = oids::oid(oids::OCSP_NONCE_OID).ok()?;

    extensions?.iter().find(|ext| ext.extn_id == nonce_oid)
}

/// Decode the OCTET STRING carried by a nonce extension.
fn nonce_value(extension: &Extension) -> Option<Vec<u8>> {
    rasn::der::decode::<OctetString>(&extension.extn_value)
        .ok()
        .map(|nonce| nonce.to_vec())
}
