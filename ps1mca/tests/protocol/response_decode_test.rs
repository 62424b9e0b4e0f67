use ps1mca::protocol::responses::read::data_window;
use ps1mca::protocol::responses::{
    decode_verify, IdResponse, PocketStationStatus, ReadFrameResponse, WriteFrameResponse,
};
use ps1mca::test_support::{good_read_reply, id_reply_with_signature, write_reply};
use ps1mca::{CardKind, FrameAddress, TransferOutcome};
use proptest::prelude::*;

#[test]
fn verify_reply_decodes_card_kinds() {
    assert_eq!(decode_verify(&[0x55, 0x01]).unwrap(), CardKind::Ps1);
    assert_eq!(decode_verify(&[0x55, 0x02]).unwrap(), CardKind::Ps2);
    assert!(decode_verify(&[0x54, 0x01]).is_err());
}

#[test]
fn read_reply_roundtrip_through_parser() {
    let address = FrameAddress::new(0x02aa).unwrap();
    let reply = good_read_reply(address, 0x37);
    let parsed = ReadFrameResponse::parse(&reply).unwrap();

    assert_eq!(parsed.status, [0x55, 0x5a]);
    assert_eq!(parsed.ack, [0x5c, 0x5d]);
    assert_eq!(parsed.echo, [0x02, 0xaa]);
    assert_eq!(parsed.data.as_bytes(), &[0x37u8; 128]);
    assert_eq!(parsed.end_byte, 0x47);
    assert_eq!(parsed.outcomes(address), vec![TransferOutcome::Success]);
}

#[test]
fn read_reply_bad_checksum_still_exposes_data() {
    let address = FrameAddress::new(12).unwrap();
    let mut reply = good_read_reply(address, 0x99);
    reply[142] ^= 0x01;

    let parsed = ReadFrameResponse::parse(&reply).unwrap();
    let outcomes = parsed.outcomes(address);
    assert!(outcomes
        .iter()
        .any(|o| matches!(o, TransferOutcome::ChecksumMismatch { .. })));
    // data survives the failed check; the session writes it to the sink anyway
    assert_eq!(parsed.data.as_bytes(), &[0x99u8; 128]);
}

#[test]
fn write_reply_reject_codes_are_fatal_outcomes() {
    let executing = WriteFrameResponse::parse(&write_reply(0xfd)).unwrap();
    assert!(executing.outcomes().iter().any(|o| o.is_fatal()));

    let protected = WriteFrameResponse::parse(&write_reply(0xfe)).unwrap();
    assert!(protected.outcomes().iter().any(|o| o.is_fatal()));

    let bad_checksum = WriteFrameResponse::parse(&write_reply(0x4e)).unwrap();
    assert!(bad_checksum.outcomes().iter().all(|o| !o.is_fatal()));
}

#[test]
fn id_reply_geometry_accessors() {
    let reply = id_reply_with_signature([0x5a, 0x5d, 0x5c, 0x5d, 0x04, 0x00, 0x00, 0x80]);
    let parsed = IdResponse::parse(&reply).unwrap();
    assert_eq!(parsed.reported_frame_count(), 1024);
    assert_eq!(parsed.reported_frame_size(), 128);
}

proptest! {
    // Decoders must fail closed on arbitrary input, never panic.
    #[test]
    fn decoders_never_panic(data in prop::collection::vec(any::<u8>(), 0..200)) {
        use std::panic::{catch_unwind, AssertUnwindSafe};

        let address = FrameAddress::new(0).unwrap();
        let did_not_panic = catch_unwind(AssertUnwindSafe(|| {
            let _ = decode_verify(&data);
            let _ = IdResponse::parse(&data);
            let _ = PocketStationStatus::parse(&data);
            let _ = WriteFrameResponse::parse(&data);
            if let Ok(r) = ReadFrameResponse::parse(&data) {
                let _ = r.outcomes(address);
            }
            let _ = data_window(&data);
        }))
        .is_ok();
        prop_assert!(did_not_panic);
    }
}
