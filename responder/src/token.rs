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

//! Binding OCSP answers to the certificates they vouch for.
//!
//! A validation pipeline keeps its known certificates in a [`TrustPool`]. The
//! responder looks a subject's issuer up in that pool, answers for the
//! subject and records the answer on it as a [`RevocationToken`].

use chrono::{DateTime, Utc};
use log::debug;
use rasn_ocsp::{CertStatus, SingleResponse};
use rasn_pkix::{Certificate, CertificateSerialNumber, CrlReason, Name};
use x509_parser::{prelude::FromDer, x509::X509Name};

use crate::{
    internal::time::from_generalized_time, ChainMode, OcspResponder, OcspResponse, ResponderError,
};

/// A certificate that can carry the outcome of a revocation check.
pub trait RevocationTokenHolder {
    /// The name of the certificate's issuer.
    fn issuer_principal(&self) -> &Name;

    /// The certificate's serial number.
    fn serial_number(&self) -> &CertificateSerialNumber;

    /// Record `token` on the certificate, replacing any earlier one.
    fn set_revocation_token(&mut self, token: RevocationToken);
}

/// A collection of known certificates, looked up by subject name.
pub trait TrustPool {
    /// Return every certificate whose subject is `principal`.
    fn get(&self, principal: &Name) -> Vec<&CertificateToken>;
}

/// A decoded certificate and the revocation token bound to it, if any.
#[derive(Clone, Debug, PartialEq)]
pub struct CertificateToken {
    der: Vec<u8>,
    certificate: Certificate,
    revocation_token: Option<RevocationToken>,
}

impl CertificateToken {
    /// Decode a DER-encoded certificate.
    pub fn from_der(der: &[u8]) -> Result<Self, ResponderError> {
        let certificate: Certificate = rasn::der::decode(der)
            .map_err(|e| ResponderError::Encoding(format!("invalid certificate: {e}")))?;

        Ok(Self {
            der: der.to_vec(),
            certificate,
            revocation_token: None,
        })
    }

    /// The DER encoding of the certificate.
    pub fn der(&self) -> &[u8] {
        &self.der
    }

    /// The decoded certificate.
    pub fn certificate(&self) -> &Certificate {
        &self.certificate
    }

    /// The certificate's subject name.
    pub fn subject_principal(&self) -> &Name {
        &self.certificate.tbs_certificate.subject
    }

    /// The revocation token currently bound to this certificate.
    pub fn revocation_token(&self) -> Option<&RevocationToken> {
        self.revocation_token.as_ref()
    }
}

impl RevocationTokenHolder for CertificateToken {
    fn issuer_principal(&self) -> &Name {
        &self.certificate.tbs_certificate.issuer
    }

    fn serial_number(&self) -> &CertificateSerialNumber {
        &self.certificate.tbs_certificate.serial_number
    }

    fn set_revocation_token(&mut self, token: RevocationToken) {
        self.revocation_token = Some(token);
    }
}

/// An in-memory [`TrustPool`].
#[derive(Clone, Debug, Default)]
pub struct CertificatePool {
    certificates: Vec<CertificateToken>,
}

impl CertificatePool {
    /// Create an empty pool.
    pub fn new() -> Self {
        Self::default()
    }

    /// Decode and add a DER-encoded certificate.
    pub fn add_certificate(&mut self, der: &[u8]) -> Result<(), ResponderError> {
        self.certificates.push(CertificateToken::from_der(der)?);
        Ok(())
    }

    /// Add an already decoded certificate.
    pub fn add(&mut self, token: CertificateToken) {
        self.certificates.push(token);
    }

    /// Number of certificates in the pool.
    pub fn len(&self) -> usize {
        self.certificates.len()
    }

    /// Returns `true` if the pool holds no certificate.
    pub fn is_empty(&self) -> bool {
        self.certificates.is_empty()
    }
}

impl TrustPool for CertificatePool {
    fn get(&self, principal: &Name) -> Vec<&CertificateToken> {
        self.certificates
            .iter()
            .filter(|c| c.subject_principal() == principal)
            .collect()
    }
}

/// The OCSP answer recorded for one certificate.
#[derive(Clone, Debug, PartialEq)]
pub struct RevocationToken {
    serial_number: CertificateSerialNumber,
    response: OcspResponse,
    single_response: SingleResponse,
}

impl RevocationToken {
    /// Serial number of the certificate the token vouches for.
    pub fn serial_number(&self) -> &CertificateSerialNumber {
        &self.serial_number
    }

    /// The complete signed response.
    pub fn response(&self) -> &OcspResponse {
        &self.response
    }

    /// The entry of the response that applies to the certificate.
    pub fn single_response(&self) -> &SingleResponse {
        &self.single_response
    }

    /// The reported status.
    pub fn status(&self) -> &CertStatus {
        &self.single_response.cert_status
    }

    /// The time the status was known to be correct.
    pub fn this_update(&self) -> DateTime<Utc> {
        from_generalized_time(&self.single_response.this_update)
    }

    /// The revocation time, if the certificate was reported revoked.
    pub fn revocation_time(&self) -> Option<DateTime<Utc>> {
        match &self.single_response.cert_status {
            CertStatus::Revoked(info) => Some(from_generalized_time(&info.revocation_time)),
            _ => None,
        }
    }

    /// The revocation reason, if the certificate was reported revoked with
    /// one.
    pub fn revocation_reason(&self) -> Option<&CrlReason> {
        match &self.single_response.cert_status {
            CertStatus::Revoked(info) => info.revocation_reason.as_ref(),
            _ => None,
        }
    }
}

/// Look up `subject`'s issuer in `pool`, answer for `subject` and bind the
/// answer to it.
///
/// The first certificate the pool returns for the issuer name is used.
pub(crate) fn issue_token<S, P>(
    subject: &mut S,
    pool: &P,
    responder: &OcspResponder,
) -> Result<RevocationToken, ResponderError>
where
    S: RevocationTokenHolder + ?Sized,
    P: TrustPool + ?Sized,
{
    let principal = subject.issuer_principal();

    let Some(issuer) = pool.get(principal).into_iter().next() else {
        return Err(ResponderError::Lookup(describe_name(principal)));
    };

    let serial_number = subject.serial_number().clone();

    let request = responder.generate_ocsp_request(issuer.der(), &serial_number)?;
    let response = responder.build_response(&request, issuer.der(), ChainMode::IssuerAndSigner)?;

    let Some(single_response) = response.entries().first().cloned() else {
        return Err(ResponderError::Encoding(
            "OCSP response holds no entries".to_string(),
        ));
    };

    let token = RevocationToken {
        serial_number,
        response,
        single_response,
    };

    debug!(
        "bound revocation token: issuer={} status={:?}",
        describe_name(&issuer.certificate.tbs_certificate.subject),
        token.status()
    );

    subject.set_revocation_token(token.clone());

    Ok(token)
}

fn describe_name(name: &Name) -> String {
    let Ok(der) = rasn::der::encode(name) else {
        return format!("{name:?}");
    };

    let described = X509Name::from_der(&der).map(|(_, parsed)| parsed.to_string());
    described.unwrap_or_else(|_| format!("{name:?}"))
}
