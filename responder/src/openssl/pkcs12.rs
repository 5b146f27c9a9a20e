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

use openssl::pkcs12::Pkcs12;

use crate::{openssl::with_openssl, raw_signature::RawSignerError};

/// Key and certificate extracted from a PKCS#12 container.
pub(crate) struct Pkcs12Credentials {
    /// DER-encoded signing certificate.
    pub(crate) certificate: Vec<u8>,

    /// PKCS#8 DER-encoded private key.
    pub(crate) private_key: Vec<u8>,
}

/// Open a password-protected PKCS#12 container and take the first key and
/// certificate it holds.
pub(crate) fn load_pkcs12(der: &[u8], password: &str) -> Result<Pkcs12Credentials, RawSignerError> {
    with_openssl(|| {
        let parsed = Pkcs12::from_der(der)?.parse2(password)?;

        let Some(pkey) = parsed.pkey else {
            return Err(RawSignerError::InvalidSigningCredentials(
                "PKCS#12 container holds no private key".to_string(),
            ));
        };

        let Some(cert) = parsed.cert else {
            return Err(RawSignerError::InvalidSigningCredentials(
                "PKCS#12 container holds no certificate".to_string(),
            ));
        };

        Ok(Pkcs12Credentials {
            certificate: cert.to_der()?,
            private_key: pkey.private_key_to_pkcs8()?,
        })
    })
}
