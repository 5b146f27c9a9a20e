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

use std::{fmt, str::FromStr};

use rasn_pkix::AlgorithmIdentifier;
use serde::{Deserialize, Serialize};

use crate::{internal::oids, ResponderError};

/// Describes the signature algorithms a responder can sign OCSP responses
/// with.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[non_exhaustive]
pub enum SigningAlg {
    /// RSASSA-PKCS1-v1_5 using SHA-1 (legacy `SHA1withRSA`)
    Rs1,

    /// RSASSA-PKCS1-v1_5 using SHA-256
    #[default]
    Rs256,

    /// RSASSA-PKCS1-v1_5 using SHA-384
    Rs384,

    /// RSASSA-PKCS1-v1_5 using SHA-512
    Rs512,

    /// ECDSA with SHA-256 on the P-256 curve
    Es256,

    /// Edwards-Curve DSA (Ed25519 instance only)
    Ed25519,
}

impl SigningAlg {
    /// Return the X.509 `AlgorithmIdentifier` that announces this algorithm
    /// in a signed structure.
    pub fn algorithm_identifier(&self) -> Result<AlgorithmIdentifier, ResponderError> {
        match self {
            Self::Rs1 => oids::algorithm_identifier(oids::SHA1_WITH_RSAENCRYPTION_OID, true),
            Self::Rs256 => oids::algorithm_identifier(oids::SHA256_WITH_RSAENCRYPTION_OID, true),
            Self::Rs384 => oids::algorithm_identifier(oids::SHA384_WITH_RSAENCRYPTION_OID, true),
            Self::Rs512 => oids::algorithm_identifier(oids::SHA512_WITH_RSAENCRYPTION_OID, true),
            Self::Es256 => oids::algorithm_identifier(oids::ECDSA_WITH_SHA256_OID, false),
            Self::Ed25519 => oids::algorithm_identifier(oids::ED25519_OID, false),
        }
    }
}

impl FromStr for SigningAlg {
    type Err = UnknownAlgorithmError;

    fn from_str(alg: &str) -> Result<Self, Self::Err> {
        match alg {
            "rs1" => Ok(Self::Rs1),
            "rs256" => Ok(Self::Rs256),
            "rs384" => Ok(Self::Rs384),
            "rs512" => Ok(Self::Rs512),
            "es256" => Ok(Self::Es256),
            "ed25519" => Ok(Self::Ed25519),
            _ => Err(UnknownAlgorithmError(alg.to_owned())),
        }
    }
}

impl fmt::Display for SigningAlg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> Result<(), fmt::Error> {
        write!(
            f,
            "{}",
            match self {
                Self::Rs1 => "rs1",
                Self::Rs256 => "rs256",
                Self::Rs384 => "rs384",
                Self::Rs512 => "rs512",
                Self::Es256 => "es256",
                Self::Ed25519 => "ed25519",
            }
        )
    }
}

#[derive(Debug, PartialEq, Eq)]
/// This error is thrown when converting from a string to [`SigningAlg`]
/// if the algorithm string is unrecognized.
///
/// The string must be one of "rs1", "rs256", "rs384", "rs512", "es256", or
/// "ed25519".
pub struct UnknownAlgorithmError(pub String);

impl fmt::Display for UnknownAlgorithmError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> Result<(), fmt::Error> {
        write!(f, "UnknownAlgorithmError({})", self.0)
    }
}

impl std::error::Error for UnknownAlgorithmError {}
