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

//! Credential store support backed by OpenSSL.

use std::sync::Mutex;

use thiserror::Error;

mod pkcs12;
pub(crate) use pkcs12::load_pkcs12;

// OpenSSL is not re-entrant. Every call into it goes through this lock.
static FFI_MUTEX: Mutex<()> = Mutex::new(());

/// Run `f` while holding the process-wide OpenSSL lock.
///
/// `f` must not panic. A panic poisons the lock and every later OpenSSL
/// call fails with [`OpenSslMutexUnavailable`].
pub(crate) fn with_openssl<T, E>(f: impl FnOnce() -> Result<T, E>) -> Result<T, E>
where
    E: From<OpenSslMutexUnavailable>,
{
    let _guard = FFI_MUTEX.lock().map_err(|_| OpenSslMutexUnavailable)?;
    f()
}

/// Error returned when the OpenSSL native code lock can not be acquired.
///
/// This happens after an earlier OpenSSL call panicked while holding it.
#[derive(Debug, Eq, Error, PartialEq)]
#[error("Unable to acquire OpenSSL native code mutex")]
pub struct OpenSslMutexUnavailable;
