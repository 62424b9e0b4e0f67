// fixtures.rs: card images and reply sequences shared by session tests

use ps1mca::constants::{CARD_SIZE, FRAME_SIZE, MEB_GOOD};
use ps1mca::test_support::{good_read_reply, write_reply};
use ps1mca::FrameAddress;

/// Flat card image where every byte of frame N equals `N & 0xff`.
pub fn striped_image() -> Vec<u8> {
    let mut image = vec![0u8; CARD_SIZE];
    for address in FrameAddress::all() {
        let fill = (address.value() & 0xff) as u8;
        let start = address.byte_offset();
        image[start..start + FRAME_SIZE].fill(fill);
    }
    image
}

/// 1024 consistent read replies matching [`striped_image`], in address order.
pub fn whole_card_read_replies() -> Vec<Vec<u8>> {
    FrameAddress::all()
        .map(|address| good_read_reply(address, (address.value() & 0xff) as u8))
        .collect()
}

/// `n` good write replies.
pub fn good_write_replies(n: usize) -> Vec<Vec<u8>> {
    (0..n).map(|_| write_reply(MEB_GOOD)).collect()
}
