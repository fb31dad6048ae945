#[path = "../common/mod.rs"]
mod common;

use libfelica::Error;
use libfelica::protocol::{CommandResponse, Response};
use libfelica::types::StatusFlags;

#[test]
fn polling_response_decodes_to_polling_variant() {
    let raw = common::fixtures::polling_reply();
    let resp = CommandResponse::decode(&raw).unwrap();
    assert!(resp.length_matches());

    match Response::decode(0x00, &resp).unwrap() {
        Response::Polling(p) => {
            assert_eq!(p.idm, common::fixtures::sample_idm());
            assert_eq!(p.pmm, common::fixtures::sample_pmm());
            assert_eq!(p.system_code, Some(common::fixtures::sample_system_code()));
        }
        other => panic!("expected polling response, got {:?}", other),
    }
}

#[test]
fn bare_polling_reply_from_hex() {
    let raw = common::hex_bytes(common::fixtures::BARE_POLLING_HEX);
    let resp = CommandResponse::decode(&raw).unwrap();
    assert_eq!(resp.idm().manufacturer_code(), [0x01, 0x14]);
    match Response::decode(0x00, &resp).unwrap() {
        Response::Polling(p) => {
            assert_eq!(p.pmm.ic_code(), [0x01, 0x20]);
            assert_eq!(p.system_code, None);
        }
        other => panic!("expected polling response, got {:?}", other),
    }
}

#[test]
fn read_response_decodes_blocks() {
    let block = common::fixtures::sample_block(0xAA);
    let raw = common::fixtures::read_reply_with_block(block.as_bytes());
    let resp = CommandResponse::decode(&raw).unwrap();

    match Response::decode(0x06, &resp).unwrap() {
        Response::ReadWithoutEncryption(r) => {
            assert_eq!(r.status, StatusFlags::new(0, 0));
            assert_eq!(r.blocks, vec![block]);
        }
        other => panic!("expected read response, got {:?}", other),
    }
}

#[test]
fn read_error_response_carries_no_blocks() {
    let raw = common::fixtures::read_reply_err(0x01, 0xA6);
    assert_eq!(
        raw,
        common::hex_bytes("0c 07 01 02 03 04 05 06 07 08 01 a6")
    );
    let resp = CommandResponse::decode(&raw).unwrap();
    match Response::decode(0x06, &resp).unwrap() {
        Response::ReadWithoutEncryption(r) => {
            assert_eq!(r.status, StatusFlags::new(0x01, 0xA6));
            assert!(r.blocks.is_empty());
        }
        other => panic!("expected read response, got {:?}", other),
    }
}

#[test]
fn short_buffers_are_malformed() {
    for len in 0..10 {
        let raw = vec![0u8; len];
        match CommandResponse::decode(&raw) {
            Err(Error::MalformedResponse {
                expected: 10,
                actual,
            }) => assert_eq!(actual, len),
            other => panic!("expected MalformedResponse, got {:?}", other),
        }
    }
}

#[test]
fn decoder_ignores_length_byte_and_code() {
    let mut raw = common::fixtures::write_reply_ok();
    raw[0] = 0xFF;
    let resp = CommandResponse::decode(&raw).unwrap();
    assert!(!resp.length_matches());
    assert_eq!(resp.data(), &[0x00, 0x00]);
}
