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

use chrono::{DateTime, Utc};
use rasn_pkix::{Certificate, CertificateSerialNumber};

use crate::{
    ocsp::{build_request, ResponseBuilder},
    token, ChainMode, MockClock, OcspRequest, OcspResponse, ResponderError, ResponderSettings,
    RevocationToken, RevocationTokenHolder, SigningIdentity, StatusDirective, StatusDirectiveStore,
    TrustPool,
};

/// A programmable OCSP responder for tests.
///
/// The responder owns its signing identity, a [`MockClock`] and a
/// [`StatusDirectiveStore`]. Callers declare the status to report and the
/// time to report it at, then ask for requests, responses or revocation
/// tokens.
///
/// There is no internal locking. Callers that share a responder must
/// serialize their own steps.
#[derive(Debug)]
pub struct OcspResponder {
    identity: SigningIdentity,
    clock: MockClock,
    directives: StatusDirectiveStore,
    settings: ResponderSettings,
}

impl OcspResponder {
    /// Create a responder signing with `identity`.
    ///
    /// The clock starts at the current time and the directive at good.
    pub fn new(identity: SigningIdentity, settings: ResponderSettings) -> Self {
        Self {
            identity,
            clock: MockClock::default(),
            directives: StatusDirectiveStore::default(),
            settings,
        }
    }

    /// Create a responder from a PKCS#12 credential store on disk.
    ///
    /// See [`DEFAULT_PKCS12_PATH`](crate::identity::DEFAULT_PKCS12_PATH) and
    /// [`DEFAULT_PKCS12_PASSWORD`](crate::identity::DEFAULT_PKCS12_PASSWORD)
    /// for the conventional test credentials.
    #[cfg(feature = "openssl")]
    pub fn from_pkcs12_file<P: AsRef<std::path::Path>>(
        path: P,
        password: &str,
        settings: ResponderSettings,
    ) -> Result<Self, ResponderError> {
        let identity = SigningIdentity::from_pkcs12_file(path, password, settings.signing_alg)?;
        Ok(Self::new(identity, settings))
    }

    /// Set the time used for nonces, `thisUpdate` and `producedAt`.
    pub fn set_ocsp_date(&mut self, ocsp_date: DateTime<Utc>) {
        self.clock.set(ocsp_date);
    }

    /// The time used for nonces, `thisUpdate` and `producedAt`.
    pub fn ocsp_date(&self) -> DateTime<Utc> {
        self.clock.now()
    }

    /// Report good for subsequent responses.
    pub fn set_good_status(&mut self) {
        self.directives.set_good();
    }

    /// Report unknown for subsequent responses.
    pub fn set_unknown_status(&mut self) {
        self.directives.set_unknown();
    }

    /// Report revoked for subsequent responses.
    ///
    /// Responses always carry a revocation time one day before the OCSP date
    /// and the reason `privilegeWithdrawn`. The values given here are only
    /// kept in the directive.
    pub fn set_revoked_status(&mut self, revocation_time: DateTime<Utc>, reason_code: i32) {
        self.directives.set_revoked(revocation_time, reason_code);
    }

    /// The directive currently in effect.
    pub fn expected_response(&self) -> &StatusDirective {
        self.directives.get()
    }

    /// The signing identity of this responder.
    pub fn identity(&self) -> &SigningIdentity {
        &self.identity
    }

    /// The settings of this responder.
    pub fn settings(&self) -> &ResponderSettings {
        &self.settings
    }

    /// Build a single-entry request for `serial_number` under `issuer`, with a
    /// nonce derived from the OCSP date.
    pub fn generate_ocsp_request(
        &self,
        issuer: &[u8],
        serial_number: &CertificateSerialNumber,
    ) -> Result<OcspRequest, ResponderError> {
        build_request(issuer, serial_number, &self.clock, self.settings.cert_id_hash)
    }

    /// Answer `request` on behalf of `issuer`, attaching certificates as
    /// `chain_mode` says.
    pub fn build_response(
        &self,
        request: &OcspRequest,
        issuer: &[u8],
        chain_mode: ChainMode,
    ) -> Result<OcspResponse, ResponderError> {
        ResponseBuilder::new(issuer, &self.clock)
            .chain_mode(chain_mode)
            .status_resolution(self.settings.status_resolution)
            .build(request, &self.directives, &self.identity)
    }

    /// Build a request for the DER-encoded `certificate` and answer it on
    /// behalf of `issuer`.
    pub fn get_ocsp_response(
        &self,
        certificate: &[u8],
        issuer: &[u8],
    ) -> Result<OcspResponse, ResponderError> {
        let subject: Certificate =
            rasn::der::decode(certificate).map_err(ResponderError::encoding)?;

        let request =
            self.generate_ocsp_request(issuer, &subject.tbs_certificate.serial_number)?;

        self.build_response(&request, issuer, self.settings.chain_mode)
    }

    /// Answer a DER-encoded OCSP request with a DER-encoded `OCSPResponse`.
    pub fn respond(&self, request: &[u8], issuer: &[u8]) -> Result<Vec<u8>, ResponderError> {
        let request = OcspRequest::from_der(request)?;

        self.build_response(&request, issuer, self.settings.chain_mode)?
            .to_ocsp_response_der()
    }

    /// Check `subject` against its issuer in `pool` and bind the resulting
    /// [`RevocationToken`] to it, replacing any earlier token.
    pub fn get_ocsp_token<S, P>(
        &self,
        subject: &mut S,
        pool: &P,
    ) -> Result<RevocationToken, ResponderError>
    where
        S: RevocationTokenHolder + ?Sized,
        P: TrustPool + ?Sized,
    {
        token::issue_token(subject, pool, self)
    }
}
