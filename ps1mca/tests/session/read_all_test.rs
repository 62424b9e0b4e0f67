use crate::common::fixtures;
use ps1mca::constants::CARD_SIZE;
use ps1mca::test_support::{
    good_read_reply, mock_session, read_reply_with_data, shared_mock_session,
};
use ps1mca::{FrameAddress, TransferOutcome};

#[test]
fn whole_card_read_produces_exact_dump() {
    crate::common::init_logs();
    let (mut session, shared) = shared_mock_session(fixtures::whole_card_read_replies());

    let mut sink = Vec::new();
    let reports = session.read_all(&mut sink).unwrap();

    // exactly 131072 bytes, frame order 0..=1023
    assert_eq!(sink.len(), CARD_SIZE);
    assert_eq!(reports.len(), 1024);
    assert!(reports.iter().all(|r| r.is_success()));
    assert_eq!(sink, fixtures::striped_image());

    // every frame was requested once, in increasing address order
    let sent = &shared.borrow().sent;
    assert_eq!(sent.len(), 1024);
    for (i, cmd) in sent.iter().enumerate() {
        assert_eq!(cmd.len(), 144);
        assert_eq!(u16::from_be_bytes([cmd[8], cmd[9]]), i as u16);
    }
}

#[test]
fn checksum_mismatch_is_recorded_but_data_is_kept() {
    let mut replies = fixtures::whole_card_read_replies();
    // corrupt the checksum byte of frame 5
    replies[5][142] ^= 0xff;
    let mut session = mock_session(replies);

    let mut sink = Vec::new();
    let reports = session.read_all(&mut sink).unwrap();

    assert_eq!(sink.len(), CARD_SIZE);
    assert!(!reports[5].is_success());
    assert!(reports[5]
        .outcomes
        .iter()
        .any(|o| matches!(o, TransferOutcome::ChecksumMismatch { .. })));
    // the device's data still landed at the right offset
    assert_eq!(&sink[5 * 128..6 * 128], &[5u8; 128][..]);
    // and the surrounding frames were unaffected
    assert!(reports[4].is_success());
    assert!(reports[6].is_success());
}

#[test]
fn address_echo_mismatch_does_not_shift_the_dump() {
    let mut replies = fixtures::whole_card_read_replies();
    // frame 7 answers with frame 8's address; the reply is internally
    // consistent (checksum matches the echoed address), as a confused
    // card's would be
    let eight = FrameAddress::new(8).unwrap();
    replies[7] = read_reply_with_data(eight, &[7u8; 128]);
    let mut session = mock_session(replies);

    let mut sink = Vec::new();
    let reports = session.read_all(&mut sink).unwrap();

    assert_eq!(
        reports[7].outcomes,
        vec![TransferOutcome::AddressEchoMismatch { actual: 8 }]
    );
    // data goes where the request was made, preserving offsets
    assert_eq!(&sink[7 * 128..8 * 128], &[7u8; 128][..]);
}

#[test]
fn short_reply_records_protocol_error_and_pads() {
    let mut replies = vec![good_read_reply(FrameAddress::MIN, 0x01)];
    replies.push(vec![0x55, 0x5a, 0, 0]); // frame 1 truncated
    replies.extend(
        FrameAddress::all()
            .skip(2)
            .map(|a| good_read_reply(a, 0x01)),
    );
    let mut session = mock_session(replies);

    let mut sink = Vec::new();
    let reports = session.read_all(&mut sink).unwrap();

    assert_eq!(sink.len(), CARD_SIZE);
    assert_eq!(
        reports[1].outcomes,
        vec![TransferOutcome::ProtocolError { status: 0x55 }]
    );
    assert!(sink[128..256].iter().all(|&b| b == 0));
    assert!(reports[2].is_success());
}
