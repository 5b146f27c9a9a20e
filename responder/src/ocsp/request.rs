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

use rasn::types::OctetString;
use rasn_ocsp::{CertId, Request, TbsRequest};
use rasn_pkix::{CertificateSerialNumber, Extension, Extensions};

use crate::{
    cert_id::compute_identifier,
    internal::{oids, time::signed_be_bytes},
    ocsp::{find_nonce, nonce_value},
    CertIdHashAlg, MockClock, ResponderError,
};

/// An OCSP request: an ordered list of certificate identifiers plus an
/// optional nonce extension.
#[derive(Clone, Debug, PartialEq)]
pub struct OcspRequest {
    inner: rasn_ocsp::OcspRequest,
}

impl OcspRequest {
    /// Build an unsigned request asking about each of `cert_ids`, in order.
    ///
    /// If `nonce` is given it is wrapped in an OCTET STRING and attached as a
    /// critical `id-pkix-ocsp-nonce` extension.
    pub fn from_cert_ids(
        cert_ids: Vec<CertId>,
        nonce: Option<&[u8]>,
    ) -> Result<Self, ResponderError> {
        let request_extensions = match nonce {
            Some(nonce) => Some(Extensions::from(vec![nonce_extension(nonce)?])),
            None => None,
        };

        let request_list = cert_ids
            .into_iter()
            .map(|req_cert| Request {
                req_cert,
                single_request_extensions: None,
            })
            .collect();

        Ok(Self {
            inner: rasn_ocsp::OcspRequest {
                tbs_request: TbsRequest {
                    version: Default::default(),
                    requestor_name: None,
                    request_list,
                    request_extensions,
                },
                optional_signature: None,
            },
        })
    }

    /// Decode a DER-encoded OCSP request.
    pub fn from_der(der: &[u8]) -> Result<Self, ResponderError> {
        let inner = rasn::der::decode::<rasn_ocsp::OcspRequest>(der)
            .map_err(|e| ResponderError::Encoding(format!("invalid OCSP request: {e}")))?;

        Ok(Self { inner })
    }

    /// Return the DER encoding of this request.
    pub fn to_der(&self) -> Result<Vec<u8>, ResponderError> {
        rasn::der::encode(&self.inner).map_err(ResponderError::encoding)
    }

    /// The certificate identifiers asked about, in request order.
    pub fn entries(&self) -> Vec<&CertId> {
        self.inner
            .tbs_request
            .request_list
            .iter()
            .map(|r| &r.req_cert)
            .collect()
    }

    /// The nonce extension, exactly as it appears in the request.
    pub fn nonce_extension(&self) -> Option<&Extension> {
        find_nonce(self.inner.tbs_request.request_extensions.as_ref())
    }

    /// The nonce bytes carried by the nonce extension.
    pub fn nonce(&self) -> Option<Vec<u8>> {
        self.nonce_extension().and_then(nonce_value)
    }

    /// The underlying ASN.1 structure.
    pub fn as_asn1(&self) -> &rasn_ocsp::OcspRequest {
        &self.inner
    }
}

/// Build a single-entry OCSP request for the certificate with
/// `serial_number` issued by the DER-encoded `issuer`.
///
/// The nonce is the clock's time in milliseconds since the Unix epoch, as a
/// big-endian two's-complement integer.
pub fn build_request(
    issuer: &[u8],
    serial_number: &CertificateSerialNumber,
    clock: &MockClock,
    hash_alg: CertIdHashAlg,
) -> Result<OcspRequest, ResponderError> {
    let cert_id = compute_identifier(issuer, serial_number, hash_alg)?;
    let nonce = signed_be_bytes(clock.timestamp_millis());

    OcspRequest::from_cert_ids(vec![cert_id], Some(&nonce))
}

fn nonce_extension(nonce: &[u8]) -> Result<Extension, ResponderError> {
    let extn_value = rasn::der::encode(&OctetString::from(nonce.to_vec()))
        .map_err(ResponderError::encoding)?;

    Ok(Extension {
        extn_id: oids::oid(oids::OCSP_NONCE_OID)?,
        critical: true,
        extn_value: OctetString::from(extn_value),
    })
}
