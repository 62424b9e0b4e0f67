// ps1mca/src/constants.rs
//! Protocol constants for the PS3 Memory Card Adaptor (CECHZM1) and PS1 cards.

/// Sony Corp. USB vendor id.
pub const USB_VENDOR_ID: u16 = 0x054c;

/// PlayStation 3 Memory Card Adaptor product id.
pub const USB_PRODUCT_ID: u16 = 0x02ea;

/// Bulk OUT endpoint (EP 2 OUT).
pub const BULK_OUT_ENDPOINT: u8 = 0x02;

/// Bulk IN endpoint (EP 1 IN).
pub const BULK_IN_ENDPOINT: u8 = 0x81;

/// Largest reply the adaptor produces; matches the card's 256-byte RAM buffer.
pub const RESPONSE_BUFFER_LEN: usize = 256;

/// First byte of every adaptor command.
pub const CMD_MAGIC: u8 = 0xaa;

/// Short-form command class: verify what type of card is inserted.
pub const CMD_VERIFY_CARD_TYPE: u8 = 0x40;

/// Long-form command class carrying an inner PS1 card command.
pub const CMD_TYPE_LONG: u8 = 0x42;

/// Adaptor acknowledge byte, first byte of every reply.
pub const STATUS_ACK: u8 = 0x55;

/// Second reply byte when the long-form command was accepted.
pub const STATUS_SUCCESS: u8 = 0x5a;

/// Second reply byte when card authentication failed.
pub const STATUS_WRONG: u8 = 0xaf;

/// Verify reply: a PS1 card is inserted.
pub const CARD_TYPE_PS1: u8 = 0x01;

/// Verify reply: a PS2 card is inserted (not supported by this driver).
pub const CARD_TYPE_PS2: u8 = 0x02;

/// Memory Card Access, the leading byte of every inner card command.
pub const MC_ACCESS: u8 = 0x81;

/// Inner read command (ASCII `R`).
pub const MC_CMD_READ: u8 = 0x52;

/// Inner get-id command (ASCII `S`).
pub const MC_CMD_GET_ID: u8 = 0x53;

/// Inner write command (ASCII `W`).
pub const MC_CMD_WRITE: u8 = 0x57;

/// PocketStation get-id command (ASCII `X`).
pub const PKST_CMD_GET_ID: u8 = 0x58;

/// Command acknowledge byte pair sent by the card after a long command header.
pub const REPLY_ACK: [u8; 2] = [0x5c, 0x5d];

/// Memory End Byte: good (ASCII `G`).
pub const MEB_GOOD: u8 = 0x47;

/// Memory End Byte: bad checksum (ASCII `N`).
pub const MEB_BAD_CHECKSUM: u8 = 0x4e;

/// Memory End Byte: bad frame.
pub const MEB_BAD_FRAME: u8 = 0xff;

/// Memory End Byte: write to the directory entry of the currently executed
/// file was rejected (PocketStation).
pub const MEB_REJECT_EXECUTING: u8 = 0xfd;

/// Memory End Byte: write to the write-protected broken-frame region was
/// rejected (PocketStation write protection).
pub const MEB_REJECT_PROTECTED: u8 = 0xfe;

/// Frame size in bytes; a frame is the card's equivalent of a disk sector.
pub const FRAME_SIZE: usize = 128;

/// Number of frames on a PS1 memory card.
pub const FRAME_COUNT: usize = 1024;

/// Whole-card capacity: 1024 frames of 128 bytes.
pub const CARD_SIZE: usize = FRAME_SIZE * FRAME_COUNT;

/// Highest valid frame address.
pub const MAX_FRAME_ADDRESS: u16 = 0x03ff;

/// Signature window of a get-id reply from an original memory card or a
/// PocketStation: ID1, ID2, ack1, ack2, frame count 0x0400 (1024) and frame
/// size 0x0080 (128).
pub const ID_SIGNATURE: [u8; 8] = [0x5a, 0x5d, 0x5c, 0x5d, 0x04, 0x00, 0x00, 0x80];

/// Offset of the signature window inside a get-id reply.
pub const ID_SIGNATURE_OFFSET: usize = 6;

/// Verify command and reply length.
pub const VERIFY_LEN: usize = 2;

/// Get-id (and PocketStation get-id) command length.
pub const GET_ID_CMD_LEN: usize = 14;

/// Inner length byte of the get-id command (command length minus the 4-byte
/// adaptor header).
pub const GET_ID_INNER_LEN: u8 = 0x0a;

/// Read command and reply length.
pub const READ_LEN: usize = 144;

/// Inner length byte of the read command.
pub const READ_INNER_LEN: u8 = 0x8c;

/// Write command and reply length.
pub const WRITE_LEN: usize = 142;

/// Inner length byte of the write command.
pub const WRITE_INNER_LEN: u8 = 0x8a;

/// Offset of the command acknowledge pair in a read reply.
pub const READ_ACK_OFFSET: usize = 10;

/// Offset of the echoed frame address in a read reply.
pub const READ_ECHO_OFFSET: usize = 12;

/// Offset of the 128 data bytes in a read reply.
pub const READ_DATA_OFFSET: usize = 14;

/// Offset of the checksum byte in a read reply.
pub const READ_CHECKSUM_OFFSET: usize = 142;

/// Offset of the Memory End Byte in a read reply.
pub const READ_END_OFFSET: usize = 143;

/// Offset of the frame address in read and write commands.
pub const CMD_ADDRESS_OFFSET: usize = 8;

/// Offset of the 128 data bytes in a write command.
pub const WRITE_DATA_OFFSET: usize = 10;

/// Offset of the checksum byte in a write command.
pub const WRITE_CHECKSUM_OFFSET: usize = 138;

/// Offset of the Memory End Byte in a write reply.
pub const WRITE_END_OFFSET: usize = 141;
