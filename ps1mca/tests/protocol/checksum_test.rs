use ps1mca::protocol::frame_checksum;
use ps1mca::FrameAddress;
use proptest::prelude::*;

#[test]
fn checksum_examples() {
    assert_eq!(frame_checksum(0x00, 0x00, &[0u8; 128]), 0x00);
    assert_eq!(frame_checksum(0x01, 0x02, &[]), 0x03);
    assert_eq!(frame_checksum(0x01, 0x02, &[0x03]), 0x00);
}

proptest! {
    // XOR is its own inverse: folding the same frame twice cancels out.
    #[test]
    fn checksum_self_cancels(addr in 0u16..1024, data in prop::collection::vec(any::<u8>(), 128)) {
        let address = FrameAddress::new(addr).unwrap();
        let once = frame_checksum(address.msb(), address.lsb(), &data);
        let mut doubled = data.clone();
        doubled.extend_from_slice(&data);
        let twice = frame_checksum(address.msb(), address.lsb(), &doubled);
        prop_assert_eq!(twice, address.msb() ^ address.lsb());
        // and appending the checksum itself zeroes the address fold
        let mut with_sum = data.clone();
        with_sum.push(once);
        prop_assert_eq!(frame_checksum(address.msb(), address.lsb(), &with_sum), 0);
    }

    #[test]
    fn address_split_join_roundtrip(addr in 0u16..1024) {
        let address = FrameAddress::new(addr).unwrap();
        prop_assert_eq!(((address.msb() as u16) << 8) | address.lsb() as u16, addr);
        prop_assert_eq!(FrameAddress::from_parts(address.msb(), address.lsb()).unwrap(), address);
    }
}
