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

use rsa::{
    pkcs1v15::SigningKey,
    pkcs8::DecodePrivateKey,
    signature::{SignatureEncoding, Signer},
    RsaPrivateKey,
};
use sha1::Sha1;
use sha2::{Sha256, Sha384, Sha512};

use crate::raw_signature::{RawSigner, RawSignerError, SigningAlg};

enum RsaSigningAlg {
    Rs1,
    Rs256,
    Rs384,
    Rs512,
}

/// Implements [`RawSigner`] trait using `rsa` crate's implementation of
/// RSASSA-PKCS1-v1_5.
pub(crate) struct RsaSigner {
    alg: RsaSigningAlg,
    private_key: RsaPrivateKey,
}

impl RsaSigner {
    pub(crate) fn from_private_key(
        private_key: &[u8],
        alg: SigningAlg,
    ) -> Result<Self, RawSignerError> {
        let private_key = RsaPrivateKey::from_pkcs8_der(private_key).map_err(|e| {
            RawSignerError::InvalidSigningCredentials(format!("invalid RSA private key: {e}"))
        })?;

        let alg: RsaSigningAlg = match alg {
            SigningAlg::Rs1 => RsaSigningAlg::Rs1,
            SigningAlg::Rs256 => RsaSigningAlg::Rs256,
            SigningAlg::Rs384 => RsaSigningAlg::Rs384,
            SigningAlg::Rs512 => RsaSigningAlg::Rs512,
            _ => {
                return Err(RawSignerError::InternalError(
                    "RsaSigner should be used only for SigningAlg::Rs***".to_string(),
                ));
            }
        };

        Ok(RsaSigner { alg, private_key })
    }
}

impl RawSigner for RsaSigner {
    fn sign(&self, data: &[u8]) -> Result<Vec<u8>, RawSignerError> {
        let sig = match self.alg {
            RsaSigningAlg::Rs1 => {
                SigningKey::<Sha1>::new(self.private_key.clone()).try_sign(data)
            }
            RsaSigningAlg::Rs256 => {
                SigningKey::<Sha256>::new(self.private_key.clone()).try_sign(data)
            }
            RsaSigningAlg::Rs384 => {
                SigningKey::<Sha384>::new(self.private_key.clone()).try_sign(data)
            }
            RsaSigningAlg::Rs512 => {
                SigningKey::<Sha512>::new(self.private_key.clone()).try_sign(data)
            }
        }
        .map_err(|e| RawSignerError::InternalError(format!("signature error: {e}")))?;

        Ok(sig.to_bytes().to_vec())
    }

    fn alg(&self) -> SigningAlg {
        match self.alg {
            RsaSigningAlg::Rs1 => SigningAlg::Rs1,
            RsaSigningAlg::Rs256 => SigningAlg::Rs256,
            RsaSigningAlg::Rs384 => SigningAlg::Rs384,
            RsaSigningAlg::Rs512 => SigningAlg::Rs512,
        }
    }
}
