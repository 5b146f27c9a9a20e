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

use chrono::{DateTime, Duration, Utc};
use log::debug;
use rasn::types::{BitString, OctetString};
use rasn_ocsp::{
    BasicOcspResponse, CertStatus, OcspResponseStatus, ResponderId, ResponseBytes, ResponseData,
    RevokedInfo, SingleResponse,
};
use rasn_pkix::{AlgorithmIdentifier, Certificate, CrlReason, Extension, Extensions};

use crate::{
    hash,
    internal::{
        oids,
        time::{from_generalized_time, to_generalized_time},
    },
    ocsp::{find_nonce, nonce_value, ChainMode, OcspRequest},
    MockClock, ResponderError, SigningIdentity, StatusDirective, StatusDirectiveStore,
    StatusResolution,
};

/// Builds and signs a basic OCSP response for one issuer.
///
/// Every entry of the request is answered, in request order, with the
/// status resolved from the [`StatusDirectiveStore`]. `thisUpdate` and
/// `producedAt` are taken from the [`MockClock`] the builder was created
/// with.
///
/// The responder ID is the SHA-1 hash of the issuer's public key, while the
/// signature is made with the signing identity's key. Verifiers that locate
/// the signer through the responder ID (such as OpenSSL's
/// `OCSP_basic_verify`) will not find it, even with
/// [`ChainMode::IssuerAndSigner`].
#[derive(Clone, Debug)]
pub struct ResponseBuilder<'a> {
    issuer: &'a [u8],
    now: DateTime<Utc>,
    chain_mode: ChainMode,
    status_resolution: StatusResolution,
}

impl<'a> ResponseBuilder<'a> {
    /// Start a response on behalf of the DER-encoded `issuer` certificate.
    pub fn new(issuer: &'a [u8], clock: &MockClock) -> Self {
        Self {
            issuer,
            now: clock.now(),
            chain_mode: ChainMode::default(),
            status_resolution: StatusResolution::default(),
        }
    }

    /// Choose which certificates are attached to the response.
    pub fn chain_mode(mut self, chain_mode: ChainMode) -> Self {
        self.chain_mode = chain_mode;
        self
    }

    /// Choose how each entry's status is resolved.
    pub fn status_resolution(mut self, status_resolution: StatusResolution) -> Self {
        self.status_resolution = status_resolution;
        self
    }

    /// Answer `request` and sign the result with `identity`.
    ///
    /// If the request carries a nonce extension, it is copied into the
    /// response extensions byte for byte.
    pub fn build(
        &self,
        request: &OcspRequest,
        directives: &StatusDirectiveStore,
        identity: &SigningIdentity,
    ) -> Result<OcspResponse, ResponderError> {
        let issuer: Certificate = rasn::der::decode(self.issuer).map_err(ResponderError::encoding)?;

        let issuer_key_hash = hash::sha1(
            issuer
                .tbs_certificate
                .subject_public_key_info
                .subject_public_key
                .as_raw_slice(),
        );

        let resolved = match self.status_resolution {
            StatusResolution::AlwaysGood => StatusDirective::Good,
            StatusResolution::Directive => directives.get().clone(),
        };

        let this_update = to_generalized_time(self.now);

        let responses = request
            .entries()
            .into_iter()
            .map(|cert_id| SingleResponse {
                cert_id: cert_id.clone(),
                cert_status: self.cert_status(&resolved),
                this_update,
                next_update: None,
                single_extensions: None,
            })
            .collect::<Vec<SingleResponse>>();

        let response_extensions = request
            .nonce_extension()
            .map(|nonce| Extensions::from(vec![nonce.clone()]));

        let tbs_response_data = ResponseData {
            version: Default::default(),
            responder_id: ResponderId::ByKey(OctetString::from(issuer_key_hash)),
            produced_at: this_update,
            responses,
            response_extensions,
        };

        let tbs_der = rasn::der::encode(&tbs_response_data).map_err(ResponderError::encoding)?;
        let signature = identity.sign(&tbs_der)?;

        let certs = match self.chain_mode {
            ChainMode::IssuerOnly => vec![issuer],
            ChainMode::IssuerAndSigner => vec![issuer, identity.certificate().clone()],
        };

        debug!(
            "built OCSP response: entries={} status={:?} resolution={:?} chain={:?} alg={} nonce={}",
            tbs_response_data.responses.len(),
            resolved,
            self.status_resolution,
            self.chain_mode,
            identity.alg(),
            request.nonce().map(hex::encode).unwrap_or_default()
        );

        Ok(OcspResponse {
            inner: BasicOcspResponse {
                tbs_response_data,
                signature_algorithm: identity.alg().algorithm_identifier()?,
                signature: BitString::from_slice(&signature),
                certs: Some(certs),
            },
        })
    }

    // Revoked entries always report one day before the clock and
    // privilegeWithdrawn; the directive's own time and reason are not used.
    fn cert_status(&self, resolved: &StatusDirective) -> CertStatus {
        match resolved {
            StatusDirective::Good => CertStatus::Good,
            StatusDirective::Unknown => CertStatus::Unknown(()),
            StatusDirective::Revoked { .. } => CertStatus::Revoked(RevokedInfo {
                revocation_time: to_generalized_time(self.now - Duration::days(1)),
                revocation_reason: Some(CrlReason::PrivilegeWithdrawn),
            }),
        }
    }
}

/// A signed basic OCSP response.
#[derive(Clone, Debug, PartialEq)]
pub struct OcspResponse {
    inner: BasicOcspResponse,
}

impl OcspResponse {
    /// Decode a DER-encoded `BasicOCSPResponse`.
    pub fn from_der(der: &[u8]) -> Result<Self, ResponderError> {
        let inner = rasn::der::decode::<BasicOcspResponse>(der)
            .map_err(|e| ResponderError::Encoding(format!("invalid basic OCSP response: {e}")))?;

        Ok(Self { inner })
    }

    /// Decode a DER-encoded `OCSPResponse` envelope and extract the basic
    /// response it carries.
    pub fn from_ocsp_response_der(der: &[u8]) -> Result<Self, ResponderError> {
        let envelope = rasn::der::decode::<rasn_ocsp::OcspResponse>(der)
            .map_err(|e| ResponderError::Encoding(format!("invalid OCSP response: {e}")))?;

        if envelope.status != OcspResponseStatus::Successful {
            return Err(ResponderError::Encoding(format!(
                "OCSP response status is {:?}",
                envelope.status
            )));
        }

        let Some(bytes) = envelope.bytes else {
            return Err(ResponderError::Encoding(
                "OCSP response carries no response bytes".to_string(),
            ));
        };

        if bytes.r#type != oids::oid(oids::OCSP_BASIC_OID)? {
            return Err(ResponderError::Encoding(format!(
                "unsupported OCSP response type {:?}",
                bytes.r#type
            )));
        }

        Self::from_der(&bytes.response)
    }

    /// Return the DER encoding of the `BasicOCSPResponse`.
    pub fn to_der(&self) -> Result<Vec<u8>, ResponderError> {
        rasn::der::encode(&self.inner).map_err(ResponderError::encoding)
    }

    /// Return the DER encoding of a successful `OCSPResponse` envelope
    /// carrying this basic response.
    pub fn to_ocsp_response_der(&self) -> Result<Vec<u8>, ResponderError> {
        let envelope = rasn_ocsp::OcspResponse {
            status: OcspResponseStatus::Successful,
            bytes: Some(ResponseBytes {
                r#type: oids::oid(oids::OCSP_BASIC_OID)?,
                response: OctetString::from(self.to_der()?),
            }),
        };

        rasn::der::encode(&envelope).map_err(ResponderError::encoding)
    }

    /// The single responses, in the order of the request entries.
    pub fn entries(&self) -> &[SingleResponse] {
        &self.inner.tbs_response_data.responses
    }

    /// The echoed nonce extension, if the request carried one.
    pub fn nonce_extension(&self) -> Option<&Extension> {
        find_nonce(self.inner.tbs_response_data.response_extensions.as_ref())
    }

    /// The nonce bytes carried by the echoed nonce extension.
    pub fn nonce(&self) -> Option<Vec<u8>> {
        self.nonce_extension().and_then(nonce_value)
    }

    /// The certificates attached to the response.
    pub fn certs(&self) -> &[Certificate] {
        self.inner.certs.as_deref().unwrap_or(&[])
    }

    /// The time the response was produced.
    pub fn produced_at(&self) -> DateTime<Utc> {
        from_generalized_time(&self.inner.tbs_response_data.produced_at)
    }

    /// Identifies the responder (by issuer key hash).
    pub fn responder_id(&self) -> &ResponderId {
        &self.inner.tbs_response_data.responder_id
    }

    /// DER encoding of the signed `ResponseData`.
    pub fn tbs_der(&self) -> Result<Vec<u8>, ResponderError> {
        rasn::der::encode(&self.inner.tbs_response_data).map_err(ResponderError::encoding)
    }

    /// The raw signature value.
    pub fn signature(&self) -> &[u8] {
        self.inner.signature.as_raw_slice()
    }

    /// The algorithm the response was signed with.
    pub fn signature_algorithm(&self) -> &AlgorithmIdentifier {
        &self.inner.signature_algorithm
    }

    /// The underlying ASN.1 structure.
    pub fn as_asn1(&self) -> &BasicOcspResponse {
        &self.inner
    }
}
