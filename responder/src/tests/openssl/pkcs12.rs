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

use std::io::Write;

use openssl::{
    asn1::Asn1Time,
    bn::BigNum,
    hash::MessageDigest,
    pkcs12::Pkcs12,
    pkey::{PKey, Private},
    rsa::Rsa,
    x509::{X509Builder, X509NameBuilder, X509},
};
use rasn::types::Integer;
use rsa::{pkcs1v15, pkcs8::DecodePublicKey, signature::Verifier as _, RsaPublicKey};

use crate::{
    identity::{DEFAULT_PKCS12_PASSWORD, DEFAULT_PKCS12_PATH},
    tests::fixtures::{t0, TestCa},
    ChainMode, OcspResponder, ResponderError, ResponderSettings, SigningAlg, SigningIdentity,
};

fn credentials() -> (PKey<Private>, X509) {
    let pkey = PKey::from_rsa(Rsa::generate(2048).unwrap()).unwrap();

    let mut name = X509NameBuilder::new().unwrap();
    name.append_entry_by_text("CN", "OCSP Responder").unwrap();
    let name = name.build();

    let mut builder = X509Builder::new().unwrap();
    builder.set_version(2).unwrap();
    builder
        .set_serial_number(&BigNum::from_u32(7).unwrap().to_asn1_integer().unwrap())
        .unwrap();
    builder.set_subject_name(&name).unwrap();
    builder.set_issuer_name(&name).unwrap();
    builder.set_pubkey(&pkey).unwrap();
    builder
        .set_not_before(&Asn1Time::days_from_now(0).unwrap())
        .unwrap();
    builder
        .set_not_after(&Asn1Time::days_from_now(365).unwrap())
        .unwrap();
    builder.sign(&pkey, MessageDigest::sha256()).unwrap();

    (pkey, builder.build())
}

fn container(pkey: &PKey<Private>, cert: &X509, password: &str) -> Vec<u8> {
    Pkcs12::builder()
        .name("ocsp")
        .pkey(pkey)
        .cert(cert)
        .build2(password)
        .unwrap()
        .to_der()
        .unwrap()
}

#[test]
fn default_store_location() {
    assert_eq!(DEFAULT_PKCS12_PATH, "ocsp.p12");
    assert_eq!(DEFAULT_PKCS12_PASSWORD, "password");
}

#[test]
fn load_container() {
    let (pkey, cert) = credentials();
    let der = container(&pkey, &cert, DEFAULT_PKCS12_PASSWORD);

    let identity =
        SigningIdentity::from_pkcs12(&der, DEFAULT_PKCS12_PASSWORD, SigningAlg::Rs256).unwrap();

    assert_eq!(identity.alg(), SigningAlg::Rs256);
    assert_eq!(identity.certificate_der(), cert.to_der().unwrap().as_slice());
}

#[test]
fn bad_password() {
    let (pkey, cert) = credentials();
    let der = container(&pkey, &cert, DEFAULT_PKCS12_PASSWORD);

    let err = SigningIdentity::from_pkcs12(&der, "wrong", SigningAlg::Rs256).unwrap_err();
    assert!(matches!(err, ResponderError::CredentialLoad(_)));
}

#[test]
fn not_a_container() {
    let err = SigningIdentity::from_pkcs12(b"garbage", "password", SigningAlg::Rs256).unwrap_err();
    assert!(matches!(err, ResponderError::CredentialLoad(_)));
}

#[test]
fn key_does_not_match_alg() {
    let (pkey, cert) = credentials();
    let der = container(&pkey, &cert, DEFAULT_PKCS12_PASSWORD);

    let err =
        SigningIdentity::from_pkcs12(&der, DEFAULT_PKCS12_PASSWORD, SigningAlg::Es256).unwrap_err();
    assert!(matches!(err, ResponderError::CredentialLoad(_)));
}

#[test]
fn missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join(DEFAULT_PKCS12_PATH);

    let err = SigningIdentity::from_pkcs12_file(&path, DEFAULT_PKCS12_PASSWORD, SigningAlg::Rs256)
        .unwrap_err();
    assert!(matches!(err, ResponderError::CredentialLoad(_)));

    let err = OcspResponder::from_pkcs12_file(
        &path,
        DEFAULT_PKCS12_PASSWORD,
        ResponderSettings::default(),
    )
    .unwrap_err();
    assert!(matches!(err, ResponderError::CredentialLoad(_)));
}

#[test]
fn responder_from_file() {
    let (pkey, cert) = credentials();

    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(&container(&pkey, &cert, DEFAULT_PKCS12_PASSWORD))
        .unwrap();

    let mut responder = OcspResponder::from_pkcs12_file(
        file.path(),
        DEFAULT_PKCS12_PASSWORD,
        ResponderSettings::default(),
    )
    .unwrap();
    responder.set_ocsp_date(t0());

    let issuer = TestCa::new("Issuer X");
    let request = responder
        .generate_ocsp_request(issuer.der(), &Integer::from(42))
        .unwrap();
    let response = responder
        .build_response(&request, issuer.der(), ChainMode::IssuerAndSigner)
        .unwrap();

    assert_eq!(response.certs().len(), 2);
    assert_eq!(&response.certs()[1], responder.identity().certificate());
    assert_eq!(
        responder.identity().certificate_der(),
        cert.to_der().unwrap().as_slice()
    );

    let public_key =
        RsaPublicKey::from_public_key_der(&pkey.public_key_to_der().unwrap()).unwrap();
    let signature = pkcs1v15::Signature::try_from(response.signature()).unwrap();

    pkcs1v15::VerifyingKey::<sha2::Sha256>::new(public_key)
        .verify(&response.tbs_der().unwrap(), &signature)
        .unwrap();
}
