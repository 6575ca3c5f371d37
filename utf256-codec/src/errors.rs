#[derive(thiserror::Error, Debug)]
pub enum DecodeError {
    #[error("UTF-256 stream length must be a multiple of 8. Read {0} bytes")]
    MalformedLength(usize),

    #[error("Expanded byte at offset {offset} must be 0x00 or 0xFF. Read {value:#04X}")]
    InvalidByte { value: u8, offset: usize },
}
