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

use rasn::types::{Integer, OctetString};
use rasn_ocsp::{Request, TbsRequest};

use crate::{
    compute_identifier,
    internal::{oids, time::signed_be_bytes},
    ocsp::build_request,
    tests::fixtures::{t0, TestCa},
    CertIdHashAlg, MockClock, OcspRequest, ResponderError,
};

#[test]
fn single_entry_with_nonce() {
    let ca = TestCa::new("Issuer X");
    let clock = MockClock::at(t0());

    let request = build_request(ca.der(), &Integer::from(42), &clock, CertIdHashAlg::Sha1).unwrap();

    let expected = compute_identifier(ca.der(), &Integer::from(42), CertIdHashAlg::Sha1).unwrap();
    assert_eq!(request.entries(), vec![&expected]);

    let nonce = request.nonce_extension().unwrap();
    assert_eq!(nonce.extn_id, oids::oid(oids::OCSP_NONCE_OID).unwrap());
    assert!(nonce.critical);

    assert_eq!(request.nonce(), Some(signed_be_bytes(t0().timestamp_millis())));
    assert_eq!(
        request.nonce(),
        Some(vec![0x01, 0x8f, 0x34, 0x06, 0x9e, 0x00])
    );
}

#[test]
fn nonce_follows_clock() {
    let ca = TestCa::new("Issuer X");
    let mut clock = MockClock::at(t0());

    let first = build_request(ca.der(), &Integer::from(42), &clock, CertIdHashAlg::Sha1).unwrap();

    clock.set(t0() + chrono::Duration::milliseconds(1));
    let second = build_request(ca.der(), &Integer::from(42), &clock, CertIdHashAlg::Sha1).unwrap();

    assert_ne!(first.nonce(), second.nonce());
    assert_eq!(first.entries(), second.entries());
}

#[test]
fn der_round_trip() {
    let ca = TestCa::new("Issuer X");
    let clock = MockClock::at(t0());

    let request = build_request(ca.der(), &Integer::from(42), &clock, CertIdHashAlg::Sha256).unwrap();
    let der = request.to_der().unwrap();

    let decoded = OcspRequest::from_der(&der).unwrap();
    assert_eq!(decoded, request);
    assert_eq!(decoded.as_asn1().tbs_request.request_list.len(), 1);
    assert!(decoded.as_asn1().optional_signature.is_none());
}

#[test]
fn multiple_entries_without_nonce() {
    let ca = TestCa::new("Issuer X");

    let ids: Vec<_> = [7, 8, 9]
        .into_iter()
        .map(|serial| {
            compute_identifier(ca.der(), &Integer::from(serial), CertIdHashAlg::Sha1).unwrap()
        })
        .collect();

    let request = OcspRequest::from_cert_ids(ids.clone(), None).unwrap();

    assert_eq!(request.entries(), ids.iter().collect::<Vec<_>>());
    assert!(request.nonce_extension().is_none());
    assert!(request.nonce().is_none());
}

#[test]
fn malformed_issuer() {
    let clock = MockClock::at(t0());

    let err = build_request(b"\x30\x03\x02\x01", &Integer::from(42), &clock, CertIdHashAlg::Sha1)
        .unwrap_err();

    assert!(matches!(err, ResponderError::Encoding(_)));
}

#[test]
fn malformed_request() {
    let err = OcspRequest::from_der(b"garbage").unwrap_err();
    assert!(matches!(err, ResponderError::Encoding(_)));
}

#[test]
fn foreign_nonce_is_kept_verbatim() {
    // A request built by another client, with a nonce that is not an
    // OCTET STRING.
    let ca = TestCa::new("Issuer X");
    let id = compute_identifier(ca.der(), &Integer::from(42), CertIdHashAlg::Sha1).unwrap();

    let inner = rasn_ocsp::OcspRequest {
        tbs_request: TbsRequest {
            version: Default::default(),
            requestor_name: None,
            request_list: vec![Request {
                req_cert: id,
                single_request_extensions: None,
            }],
            request_extensions: Some(
                vec![rasn_pkix::Extension {
                    extn_id: oids::oid(oids::OCSP_NONCE_OID).unwrap(),
                    critical: false,
                    extn_value: OctetString::from(vec![0xde, 0xad, 0xbe, 0xef]),
                }]
                .into(),
            ),
        },
        optional_signature: None,
    };

    let request = OcspRequest::from_der(&rasn::der::encode(&inner).unwrap()).unwrap();

    let nonce = request.nonce_extension().unwrap();
    assert!(!nonce.critical);
    assert_eq!(nonce.extn_value.to_vec(), vec![0xde, 0xad, 0xbe, 0xef]);
    assert_eq!(request.nonce(), None);
}
