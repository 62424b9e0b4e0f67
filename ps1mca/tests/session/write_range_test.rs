use crate::common::fixtures;
use ps1mca::constants::{MEB_REJECT_EXECUTING, MEB_REJECT_PROTECTED};
use ps1mca::test_support::{mock_session, shared_mock_session, write_reply};
use ps1mca::TransferOutcome;

#[test]
fn plain_range_writes_image_frames() {
    let image = fixtures::striped_image();
    let (mut session, shared) = shared_mock_session(fixtures::good_write_replies(3));

    let report = session.write_range(10, 12, &image).unwrap();

    assert!(report.is_complete());
    assert_eq!(report.first.value(), 10);
    assert_eq!(report.last.value(), 12);
    assert_eq!(report.frames.len(), 3);
    assert!(report.frames.iter().all(|f| f.is_success()));

    let sent = &shared.borrow().sent;
    assert_eq!(sent.len(), 3);
    for (i, cmd) in sent.iter().enumerate() {
        assert_eq!(cmd.len(), 142);
        assert_eq!(u16::from_be_bytes([cmd[8], cmd[9]]), 10 + i as u16);
        // image frame N is filled with N & 0xff
        assert_eq!(&cmd[10..138], &[(10 + i) as u8; 128][..]);
    }
}

#[test]
fn unusable_range_rewrites_the_whole_card() {
    let image = fixtures::striped_image();
    let (mut session, shared) = shared_mock_session(fixtures::good_write_replies(1024));

    // out of range and inverted: must fall back to 0..=1023, not error out
    let report = session.write_range(2000, 5, &image).unwrap();

    assert_eq!(report.first.value(), 0);
    assert_eq!(report.last.value(), 1023);
    assert_eq!(report.frames.len(), 1024);
    assert_eq!(shared.borrow().sent.len(), 1024);
}

#[test]
fn reject_executing_file_aborts_immediately() {
    crate::common::init_logs();
    let image = fixtures::striped_image();
    // frames 10..=14 succeed, frame 15 is rejected
    let mut replies = fixtures::good_write_replies(5);
    replies.push(write_reply(MEB_REJECT_EXECUTING));
    let (mut session, shared) = shared_mock_session(replies);

    let report = session.write_range(10, 20, &image).unwrap();

    let abort = report.abort.expect("workflow must abort");
    assert_eq!(abort.address.value(), 15);
    assert_eq!(abort.outcome, TransferOutcome::WriteRejectedExecutingFile);
    assert_eq!(report.frames.len(), 6);

    // address 16 must never have been attempted
    let sent = shared.borrow().sent.clone();
    assert_eq!(sent.len(), 6);
    assert_eq!(u16::from_be_bytes([sent[5][8], sent[5][9]]), 15);
}

#[test]
fn reject_protected_region_aborts_too() {
    let image = fixtures::striped_image();
    let mut session = mock_session(vec![write_reply(MEB_REJECT_PROTECTED)]);

    let report = session.write_range(0, 0, &image).unwrap();
    let abort = report.abort.expect("workflow must abort");
    assert_eq!(
        abort.outcome,
        TransferOutcome::WriteRejectedProtectedRegion
    );
}

#[test]
fn bad_checksum_and_timeouts_do_not_abort() {
    let image = fixtures::striped_image();
    // frame 0 ok, frame 1 bad checksum, frames 2 and 3 time out (queue
    // drained); every frame of the range must still be attempted
    let replies = vec![write_reply(0x47), write_reply(0x4e)];
    let (mut session, shared) = shared_mock_session(replies);

    let report = session.write_range(0, 3, &image).unwrap();

    assert!(report.abort.is_none());
    assert_eq!(report.frames.len(), 4);
    assert!(report.frames[0].is_success());
    assert_eq!(
        report.frames[1].outcomes,
        vec![TransferOutcome::WriteBadChecksum]
    );
    assert_eq!(
        report.frames[2].outcomes,
        vec![TransferOutcome::TransportError]
    );
    assert_eq!(
        report.frames[3].outcomes,
        vec![TransferOutcome::TransportError]
    );
    assert_eq!(shared.borrow().sent.len(), 4);
}
