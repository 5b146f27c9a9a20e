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

//! Tools for working with raw signature algorithms.
//!
//! The signing backend is chosen per [`SigningIdentity`] instance. Nothing is
//! registered process-wide.
//!
//! [`SigningIdentity`]: crate::SigningIdentity

pub(crate) mod rust_native;

pub(crate) mod signer;
pub use signer::{signer_from_private_key, RawSigner, RawSignerError};

mod signing_alg;
pub use signing_alg::{SigningAlg, UnknownAlgorithmError};
