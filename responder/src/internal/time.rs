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
use rasn::types::{GeneralizedTime, Integer, IntegerType};

/// Return the current time in UTC.
pub(crate) fn utc_now() -> DateTime<Utc> {
    Utc::now()
}

/// Convert a UTC timestamp into the ASN.1 `GeneralizedTime` representation.
pub(crate) fn to_generalized_time(time: DateTime<Utc>) -> GeneralizedTime {
    time.fixed_offset()
}

/// Convert an ASN.1 `GeneralizedTime` back to UTC.
pub(crate) fn from_generalized_time(time: &GeneralizedTime) -> DateTime<Utc> {
    time.with_timezone(&Utc)
}

/// Minimal two's-complement big-endian encoding of `value`.
///
/// Matches the byte layout of an ASN.1 INTEGER body, so `0x7f` stays one
/// byte and `0x80` gains a leading zero.
pub(crate) fn signed_be_bytes(value: i64) -> Vec<u8> {
    let integer = Integer::from(value);
    let (bytes, len) = IntegerType::to_signed_bytes_be(&integer);
    bytes.as_ref()[..len].to_vec()
}
