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

use rasn::types::{Any, ObjectIdentifier};
use rasn_pkix::AlgorithmIdentifier;

use crate::ResponderError;

pub(crate) const SHA1_OID: &[u32] = &[1, 3, 14, 3, 2, 26];
pub(crate) const SHA256_OID: &[u32] = &[2, 16, 840, 1, 101, 3, 4, 2, 1];

pub(crate) const SHA1_WITH_RSAENCRYPTION_OID: &[u32] = &[1, 2, 840, 113549, 1, 1, 5];
pub(crate) const SHA256_WITH_RSAENCRYPTION_OID: &[u32] = &[1, 2, 840, 113549, 1, 1, 11];
pub(crate) const SHA384_WITH_RSAENCRYPTION_OID: &[u32] = &[1, 2, 840, 113549, 1, 1, 12];
pub(crate) const SHA512_WITH_RSAENCRYPTION_OID: &[u32] = &[1, 2, 840, 113549, 1, 1, 13];
pub(crate) const ECDSA_WITH_SHA256_OID: &[u32] = &[1, 2, 840, 10045, 4, 3, 2];
pub(crate) const ED25519_OID: &[u32] = &[1, 3, 101, 112];

/// id-pkix-ocsp-basic
pub(crate) const OCSP_BASIC_OID: &[u32] = &[1, 3, 6, 1, 5, 5, 7, 48, 1, 1];

/// id-pkix-ocsp-nonce
pub(crate) const OCSP_NONCE_OID: &[u32] = &[1, 3, 6, 1, 5, 5, 7, 48, 1, 2];

pub(crate) fn oid(components: &[u32]) -> Result<ObjectIdentifier, ResponderError> {
    ObjectIdentifier::new(components.to_vec())
        .ok_or_else(|| ResponderError::Encoding(format!("invalid OID {components:?}")))
}

/// Build an `AlgorithmIdentifier`, optionally with explicit NULL parameters.
///
/// Many OCSP clients expect NULL rather than absent parameters for digest
/// and RSA algorithms.
pub(crate) fn algorithm_identifier(
    components: &[u32],
    null_parameters: bool,
) -> Result<AlgorithmIdentifier, ResponderError> {
    let parameters = if null_parameters {
        Some(Any::new(
            rasn::der::encode(&()).map_err(ResponderError::encoding)?,
        ))
    } else {
        None
    };

    Ok(AlgorithmIdentifier {
        algorithm: oid(components)?,
        parameters,
    })
}
