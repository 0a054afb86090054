//! End-to-end round trips through the public API.

#![expect(
    unused_crate_dependencies,
    reason = "not every workspace dependency is used by this test"
)]

use xrpl_addr_fmt::{
    SeedType, classic_address_to_x_address, decode_account_id, decode_seed, decode_x_address,
    encode_account_id, encode_seed, encode_x_address, is_valid_classic_address,
    is_valid_x_address, x_address_to_classic_address,
};

#[test]
fn classic_roundtrip_across_payloads() {
    for fill in [0x00u8, 0x01, 0x7F, 0xFF] {
        let account_id = [fill; 20];
        let address = encode_account_id(&account_id).expect("test: encode");
        assert!(is_valid_classic_address(&address));
        assert_eq!(decode_account_id(&address).unwrap(), account_id);
    }
}

#[test]
fn seed_roundtrip_from_hex_entropy() {
    let entropy = hex::decode("000102030405060708090A0B0C0D0E0F").unwrap();

    for ty in [SeedType::Ed25519, SeedType::Secp256k1] {
        let seed = encode_seed(&entropy, ty).expect("test: encode");
        let (decoded, decoded_ty) = decode_seed(&seed).expect("test: decode");
        assert_eq!(decoded.as_slice(), entropy);
        assert_eq!(decoded_ty, ty);
    }
}

#[test]
fn classic_to_x_and_back() {
    let account_id = [0xAAu8; 20];
    let classic = encode_account_id(&account_id).expect("test: encode");

    for (tag, is_test) in [(None, false), (Some(0), false), (Some(413), true)] {
        let x = classic_address_to_x_address(&classic, tag, is_test).expect("test: convert");
        assert!(is_valid_x_address(&x));

        let (back, back_tag, back_test) =
            x_address_to_classic_address(&x).expect("test: convert back");
        assert_eq!(back, classic);
        assert_eq!(back_tag, tag.map(|t| t as u32));
        assert_eq!(back_test, is_test);
    }
}

#[test]
fn x_address_decode_matches_encode() {
    let account_id = [0x11u8; 20];
    let encoded =
        encode_x_address(&account_id, Some(4_294_967_295), false).expect("test: encode");

    let x = decode_x_address(&encoded).expect("test: decode");
    assert_eq!(x.account_id(), &account_id);
    assert_eq!(x.tag(), Some(u32::MAX));
    assert!(!x.is_test());
}

#[test]
fn classic_and_x_addresses_do_not_cross_validate() {
    let account_id = [0x55u8; 20];
    let classic = encode_account_id(&account_id).expect("test: encode");
    let x = encode_x_address(&account_id, None, false).expect("test: encode");

    assert!(is_valid_classic_address(&classic));
    assert!(!is_valid_classic_address(&x));
    assert!(is_valid_x_address(&x));
    assert!(!is_valid_x_address(&classic));
}
