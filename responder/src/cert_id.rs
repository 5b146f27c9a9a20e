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

//! Derivation of OCSP certificate identifiers.
//!
//! A `CertID` names a certificate by its issuer and serial number:
//!
//! ```text
//! CertID ::= SEQUENCE {
//!     hashAlgorithm       AlgorithmIdentifier,
//!     issuerNameHash      OCTET STRING, -- Hash of issuer's DN
//!     issuerKeyHash       OCTET STRING, -- Hash of issuer's public key
//!     serialNumber        CertificateSerialNumber }
//! ```

use std::fmt;

use rasn::types::OctetString;
use rasn_ocsp::CertId;
use rasn_pkix::{Certificate, CertificateSerialNumber};
use serde::{Deserialize, Serialize};

use crate::{hash, internal::oids, ResponderError};

/// Digest algorithm used to build certificate identifiers.
///
/// Requests and responses produced by one responder always use the same
/// algorithm, so identifiers built on either side compare equal.
#[derive(Copy, Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CertIdHashAlg {
    /// SHA-1, as used by most deployed OCSP clients.
    #[default]
    Sha1,

    /// SHA-256
    Sha256,
}

impl CertIdHashAlg {
    fn digest(self, data: &[u8]) -> Vec<u8> {
        match self {
            Self::Sha1 => hash::sha1(data),
            Self::Sha256 => hash::sha256(data),
        }
    }

    fn oid(self) -> &'static [u32] {
        match self {
            Self::Sha1 => oids::SHA1_OID,
            Self::Sha256 => oids::SHA256_OID,
        }
    }
}

impl fmt::Display for CertIdHashAlg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> Result<(), fmt::Error> {
        match self {
            Self::Sha1 => write!(f, "sha1"),
            Self::Sha256 => write!(f, "sha256"),
        }
    }
}

/// Compute the OCSP certificate identifier for the certificate with
/// `serial_number` issued by the DER-encoded `issuer` certificate.
///
/// Fails with [`ResponderError::Encoding`] if the issuer certificate can not
/// be decoded or its subject name can not be re-encoded.
pub fn compute_identifier(
    issuer: &[u8],
    serial_number: &CertificateSerialNumber,
    hash_alg: CertIdHashAlg,
) -> Result<CertId, ResponderError> {
    let issuer: Certificate = rasn::der::decode(issuer).map_err(ResponderError::encoding)?;
    identifier_for_issuer(&issuer, serial_number, hash_alg)
}

pub(crate) fn identifier_for_issuer(
    issuer: &Certificate,
    serial_number: &CertificateSerialNumber,
    hash_alg: CertIdHashAlg,
) -> Result<CertId, ResponderError> {
    let issuer_name_raw =
        rasn::der::encode(&issuer.tbs_certificate.subject).map_err(ResponderError::encoding)?;

    let issuer_key_raw = issuer
        .tbs_certificate
        .subject_public_key_info
        .subject_public_key
        .as_raw_slice();

    Ok(CertId {
        hash_algorithm: oids::algorithm_identifier(hash_alg.oid(), true)?,
        issuer_name_hash: OctetString::from(hash_alg.digest(&issuer_name_raw)),
        issuer_key_hash: OctetString::from(hash_alg.digest(issuer_key_raw)),
        serial_number: serial_number.clone(),
    })
}
