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

//! The private key and certificate a responder signs with.

use std::fmt;

use log::trace;
use rasn_pkix::Certificate;
use x509_parser::{error::PEMError, pem::Pem};

use crate::{
    raw_signature::{signer_from_private_key, RawSigner},
    ResponderError, SigningAlg,
};

/// Path of the credential store used when none is given.
pub const DEFAULT_PKCS12_PATH: &str = "ocsp.p12";

/// Password of the credential store used when none is given.
pub const DEFAULT_PKCS12_PASSWORD: &str = "password";

/// The credentials an OCSP responder signs with.
///
/// Owns the signing backend. Immutable once constructed.
pub struct SigningIdentity {
    signer: Box<dyn RawSigner>,
    certificate_der: Vec<u8>,
    certificate: Certificate,
}

impl SigningIdentity {
    /// Create an identity from a DER-encoded signing certificate and a PKCS#8
    /// DER-encoded private key.
    pub fn from_der(
        certificate: &[u8],
        private_key: &[u8],
        alg: SigningAlg,
    ) -> Result<Self, ResponderError> {
        let signer =
            signer_from_private_key(private_key, alg).map_err(|e| e.into_credential_error())?;

        Self::from_signer(certificate, signer)
    }

    /// Create an identity from a PEM-encoded signing certificate and a PEM
    /// PKCS#8 private key.
    ///
    /// If `certificate` holds several PEM blocks, the first one is the
    /// signing certificate.
    pub fn from_pem(
        certificate: &[u8],
        private_key: &[u8],
        alg: SigningAlg,
    ) -> Result<Self, ResponderError> {
        let certificate = first_pem_block(certificate)?;
        let private_key = first_pem_block(private_key)?;

        Self::from_der(&certificate, &private_key, alg)
    }

    /// Create an identity around an already configured signer.
    pub fn from_signer(
        certificate: &[u8],
        signer: Box<dyn RawSigner>,
    ) -> Result<Self, ResponderError> {
        let parsed: Certificate = rasn::der::decode(certificate).map_err(|e| {
            ResponderError::CredentialLoad(format!("invalid signing certificate: {e}"))
        })?;

        if log::log_enabled!(log::Level::Trace) {
            if let Ok((_, cert)) = x509_parser::parse_x509_certificate(certificate) {
                trace!(
                    "OCSP mock-up with signing certificate: subject={} issuer={} serial={} alg={}",
                    cert.subject(),
                    cert.issuer(),
                    cert.raw_serial_as_string(),
                    signer.alg()
                );
            }
        }

        Ok(Self {
            signer,
            certificate_der: certificate.to_vec(),
            certificate: parsed,
        })
    }

    /// Load the first key and certificate from a password-protected PKCS#12
    /// container.
    ///
    /// Fails with [`ResponderError::CredentialLoad`] on a bad password, a
    /// malformed container, or a container without key or certificate.
    #[cfg(feature = "openssl")]
    pub fn from_pkcs12(der: &[u8], password: &str, alg: SigningAlg) -> Result<Self, ResponderError> {
        let credentials =
            crate::openssl::load_pkcs12(der, password).map_err(|e| e.into_credential_error())?;

        Self::from_der(&credentials.certificate, &credentials.private_key, alg)
    }

    /// Read a PKCS#12 container from disk and load it as
    /// [`from_pkcs12`](Self::from_pkcs12) does.
    ///
    /// The file is read in full and closed before the container is parsed.
    #[cfg(feature = "openssl")]
    pub fn from_pkcs12_file<P: AsRef<std::path::Path>>(
        path: P,
        password: &str,
        alg: SigningAlg,
    ) -> Result<Self, ResponderError> {
        let der = std::fs::read(path.as_ref()).map_err(|e| {
            ResponderError::CredentialLoad(format!(
                "unable to read {}: {e}",
                path.as_ref().display()
            ))
        })?;

        Self::from_pkcs12(&der, password, alg)
    }

    /// Sign `data` with the identity's private key.
    pub(crate) fn sign(&self, data: &[u8]) -> Result<Vec<u8>, ResponderError> {
        self.signer.sign(data).map_err(|e| e.into_signing_error())
    }

    /// The signature algorithm used by this identity.
    pub fn alg(&self) -> SigningAlg {
        self.signer.alg()
    }

    /// DER encoding of the signing certificate.
    pub fn certificate_der(&self) -> &[u8] {
        &self.certificate_der
    }

    /// The decoded signing certificate.
    pub fn certificate(&self) -> &Certificate {
        &self.certificate
    }
}

impl fmt::Debug for SigningIdentity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SigningIdentity")
            .field("alg", &self.signer.alg())
            .field("certificate_len", &self.certificate_der.len())
            .finish_non_exhaustive()
    }
}

fn first_pem_block(data: &[u8]) -> Result<Vec<u8>, ResponderError> {
    let blocks = Pem::iter_from_buffer(data)
        .map(|r| match r {
            Ok(pem) => Ok(pem.contents),
            Err(e) => Err(e),
        })
        .collect::<Result<Vec<Vec<u8>>, PEMError>>()
        .map_err(|e| ResponderError::CredentialLoad(e.to_string()))?;

    blocks
        .into_iter()
        .next()
        .ok_or_else(|| ResponderError::CredentialLoad("no PEM block found".to_string()))
}
