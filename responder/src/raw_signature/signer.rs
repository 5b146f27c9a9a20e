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

use thiserror::Error;

use crate::{
    raw_signature::rust_native::signers::{EcdsaSigner, Ed25519Signer, RsaSigner},
    ResponderError, SigningAlg,
};

/// Implementations of the `RawSigner` trait generate a cryptographic signature
/// over an arbitrary byte array.
pub trait RawSigner {
    /// Return a raw signature over the original byte slice.
    ///
    /// The result is the value that goes into the `signature` BIT STRING of
    /// an X.509 signed structure. For ECDSA this is the DER-encoded
    /// `ECDSA-Sig-Value`.
    fn sign(&self, data: &[u8]) -> Result<Vec<u8>, RawSignerError>;

    /// Return the algorithm implemented by this signer.
    fn alg(&self) -> SigningAlg;
}

/// Return a built-in [`RawSigner`] instance using the provided PKCS#8
/// DER-encoded private key.
///
/// Which signer is used depends on `alg`. The key type must match it.
pub fn signer_from_private_key(
    private_key: &[u8],
    alg: SigningAlg,
) -> Result<Box<dyn RawSigner>, RawSignerError> {
    match alg {
        SigningAlg::Rs1 | SigningAlg::Rs256 | SigningAlg::Rs384 | SigningAlg::Rs512 => {
            Ok(Box::new(RsaSigner::from_private_key(private_key, alg)?))
        }

        SigningAlg::Es256 => Ok(Box::new(EcdsaSigner::from_private_key(private_key, alg)?)),

        SigningAlg::Ed25519 => Ok(Box::new(Ed25519Signer::from_private_key(private_key)?)),
    }
}

/// Describes errors that can be identified when generating a raw signature.
#[derive(Debug, Eq, Error, PartialEq)]
#[non_exhaustive]
pub enum RawSignerError {
    /// The signing credentials are invalid.
    #[error("invalid signing credentials ({0})")]
    InvalidSigningCredentials(String),

    /// An error was reported by the OpenSSL native code.
    ///
    /// NOTE: We do not directly capture the OpenSSL error itself because it
    /// lacks an `Eq` implementation. Instead we capture the error description.
    #[cfg(feature = "openssl")]
    #[error("an error was reported by OpenSSL native code: {0}")]
    OpenSslError(String),

    /// The OpenSSL native code mutex could not be acquired.
    #[cfg(feature = "openssl")]
    #[error(transparent)]
    OpenSslMutexUnavailable(#[from] crate::openssl::OpenSslMutexUnavailable),

    /// An unexpected internal error occured while generating the signature.
    #[error("internal error ({0})")]
    InternalError(String),
}

#[cfg(feature = "openssl")]
impl From<openssl::error::ErrorStack> for RawSignerError {
    fn from(err: openssl::error::ErrorStack) -> Self {
        Self::OpenSslError(err.to_string())
    }
}

impl RawSignerError {
    /// Map a failure while loading credentials.
    pub(crate) fn into_credential_error(self) -> ResponderError {
        ResponderError::CredentialLoad(self.to_string())
    }

    /// Map a failure while producing a signature.
    pub(crate) fn into_signing_error(self) -> ResponderError {
        ResponderError::Signing(self.to_string())
    }
}
