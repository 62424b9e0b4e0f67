use ps1mca::protocol::Command;
use ps1mca::{FrameAddress, FrameData};

#[test]
fn verify_command_bytes() {
    assert_eq!(Command::VerifyCardType.encode(), vec![0xaa, 0x40]);
}

#[test]
fn get_id_command_bytes() {
    assert_eq!(
        Command::GetId.encode(),
        vec![0xaa, 0x42, 0x0a, 0x00, 0x81, 0x53, 0, 0, 0, 0, 0, 0, 0, 0]
    );
}

#[test]
fn pocketstation_id_command_bytes() {
    assert_eq!(
        Command::PocketStationId.encode(),
        vec![0xaa, 0x42, 0x0a, 0x00, 0x81, 0x58, 0, 0, 0, 0, 0, 0, 0, 0]
    );
}

#[test]
fn read_command_layout() {
    let address = FrameAddress::new(0x0123).unwrap();
    let buf = Command::ReadFrame { address }.encode();

    assert_eq!(buf.len(), 144);
    let mut expected = vec![0u8; 144];
    expected[..10].copy_from_slice(&[0xaa, 0x42, 0x8c, 0x00, 0x81, 0x52, 0, 0, 0x01, 0x23]);
    assert_eq!(buf, expected);
}

#[test]
fn write_command_layout() {
    let address = FrameAddress::new(0x03ff).unwrap();
    let mut bytes = [0u8; 128];
    bytes[0] = 0x80;
    bytes[127] = 0x01;
    let data = FrameData::from_bytes(bytes);
    let buf = Command::WriteFrame { address, data }.encode();

    assert_eq!(buf.len(), 142);
    assert_eq!(&buf[..10], &[0xaa, 0x42, 0x8a, 0x00, 0x81, 0x57, 0, 0, 0x03, 0xff]);
    assert_eq!(&buf[10..138], &bytes[..]);
    assert_eq!(buf[138], 0x03 ^ 0xff ^ 0x80 ^ 0x01);
    assert_eq!(&buf[139..], &[0, 0, 0]);
}

#[test]
fn read_command_header_matches_reference_capture() {
    let address = FrameAddress::new(1).unwrap();
    let buf = Command::ReadFrame { address }.encode();
    assert_eq!(hex::encode(&buf[..10]), "aa428c00815200000001");
}

#[test]
fn write_command_checksum_covers_every_data_byte() {
    let address = FrameAddress::new(0).unwrap();
    let mut bytes = [0u8; 128];
    let base = Command::WriteFrame {
        address,
        data: FrameData::from_bytes(bytes),
    }
    .encode()[138];

    for i in 0..128 {
        bytes[i] ^= 0xff;
        let checksum = Command::WriteFrame {
            address,
            data: FrameData::from_bytes(bytes),
        }
        .encode()[138];
        assert_ne!(checksum, base, "flipping data byte {} must change the checksum", i);
        bytes[i] ^= 0xff;
    }
}
