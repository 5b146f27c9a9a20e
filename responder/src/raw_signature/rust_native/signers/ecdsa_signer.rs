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

use ecdsa::signature::Signer;
use p256::ecdsa::{Signature as P256Signature, SigningKey as P256SigningKey};
use pkcs8::DecodePrivateKey;

use crate::raw_signature::{RawSigner, RawSignerError, SigningAlg};

/// Implements [`RawSigner`] trait for ECDSA on P-256 with SHA-256.
///
/// X.509 structures carry ECDSA signatures as a DER `SEQUENCE { r, s }`, so
/// that is what [`RawSigner::sign`] returns here.
pub(crate) struct EcdsaSigner {
    signing_key: P256SigningKey,
}

impl EcdsaSigner {
    pub(crate) fn from_private_key(
        private_key: &[u8],
        algorithm: SigningAlg,
    ) -> Result<Self, RawSignerError> {
        if algorithm != SigningAlg::Es256 {
            return Err(RawSignerError::InvalidSigningCredentials(
                "Unsupported algorithm".to_string(),
            ));
        }

        let signing_key = P256SigningKey::from_pkcs8_der(private_key).map_err(|e| {
            RawSignerError::InvalidSigningCredentials(format!("invalid ES256 private key: {e}"))
        })?;

        Ok(EcdsaSigner { signing_key })
    }
}

impl RawSigner for EcdsaSigner {
    fn sign(&self, data: &[u8]) -> Result<Vec<u8>, RawSignerError> {
        let signature: P256Signature = self
            .signing_key
            .try_sign(data)
            .map_err(|e| RawSignerError::InternalError(format!("signature error: {e}")))?;

        Ok(signature.to_der().as_bytes().to_vec())
    }

    fn alg(&self) -> SigningAlg {
        SigningAlg::Es256
    }
}
