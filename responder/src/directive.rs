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

//! Caller-controlled state of a responder: the revocation status it should
//! report and the time it should report it at.
//!
//! Neither type locks internally. A test that shares one responder between
//! threads must serialize its own steps (set directive, build response,
//! assert).

use chrono::{DateTime, Utc};

use crate::internal::time;

/// The revocation outcome a responder has been told to report.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub enum StatusDirective {
    /// The certificate is not revoked.
    #[default]
    Good,

    /// The responder does not know the certificate.
    Unknown,

    /// The certificate has been revoked.
    Revoked {
        /// Time of revocation.
        revocation_time: DateTime<Utc>,

        /// CRL reason code (unspecified = 0 through aACompromise = 10).
        ///
        /// Any integer is accepted.
        reason_code: i32,
    },
}

/// Holds the currently declared [`StatusDirective`].
#[derive(Clone, Debug, Default)]
pub struct StatusDirectiveStore {
    directive: StatusDirective,
}

impl StatusDirectiveStore {
    /// Report the certificate as good.
    pub fn set_good(&mut self) {
        self.directive = StatusDirective::Good;
    }

    /// Report the certificate status as unknown.
    pub fn set_unknown(&mut self) {
        self.directive = StatusDirective::Unknown;
    }

    /// Report the certificate as revoked.
    ///
    /// Reason codes:
    /// unspecified = 0; keyCompromise = 1; cACompromise = 2;
    /// affiliationChanged = 3; superseded = 4; cessationOfOperation = 5;
    /// certificateHold = 6; removeFromCRL = 8; privilegeWithdrawn = 9;
    /// aACompromise = 10.
    pub fn set_revoked(&mut self, revocation_time: DateTime<Utc>, reason_code: i32) {
        self.directive = StatusDirective::Revoked {
            revocation_time,
            reason_code,
        };
    }

    /// Return the active directive.
    pub fn get(&self) -> &StatusDirective {
        &self.directive
    }
}

/// The responder's notion of "now".
///
/// Defaults to the time the clock was created. Every request and response
/// built after [`MockClock::set`] uses the new value.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct MockClock {
    now: DateTime<Utc>,
}

impl Default for MockClock {
    fn default() -> Self {
        Self {
            now: time::utc_now(),
        }
    }
}

impl MockClock {
    /// Create a clock fixed at `now`.
    pub fn at(now: DateTime<Utc>) -> Self {
        Self { now }
    }

    /// Move the clock to `now`.
    pub fn set(&mut self, now: DateTime<Utc>) {
        self.now = now;
    }

    /// Current mock time.
    pub fn now(&self) -> DateTime<Utc> {
        self.now
    }

    /// Current mock time as milliseconds since the Unix epoch.
    pub fn timestamp_millis(&self) -> i64 {
        self.now.timestamp_millis()
    }
}
