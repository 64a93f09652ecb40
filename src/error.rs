/// Broad class of an [`RtpError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// A numeric field does not fit its bit width.
    Range,
    /// A field holds a value outside its allowed set.
    Value,
    /// The input buffer is not a well-formed RTP packet.
    Format,
}

/// Errors that can occur while encoding or decoding RTP packets.
#[derive(Debug, thiserror::Error)]
pub enum RtpError {
    /// Payload type does not fit in 7 bits.
    #[error("payload type out of range ({value}, max 0x7f)")]
    PayloadTypeOutOfRange { value: u8 },

    /// Padding does not fit the single-octet length trailer.
    #[error("padding too long ({len} bytes, max 255)")]
    PaddingTooLong { len: usize },

    /// Only RTP versions 1 and 2 can be encoded.
    #[error("unsupported RTP version {0} (expected 1 or 2)")]
    UnsupportedVersion(u8),

    /// More CSRC identifiers than the 4-bit count can carry.
    #[error("too many CSRC identifiers ({count}, max 15)")]
    TooManyCsrcs { count: usize },

    /// A field was queried by a name outside the header vocabulary.
    #[error("unknown RTP header field {0:?}")]
    UnknownField(String),

    /// The buffer cannot hold the 12-byte fixed header.
    #[error("buffer too short for RTP header ({len} bytes, need 12)")]
    HeaderTooShort { len: usize },

    /// CSRC list, extension or padding runs past the end of the buffer.
    #[error("truncated RTP packet ({len} bytes)")]
    Truncated { len: usize },
}

impl RtpError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            RtpError::PayloadTypeOutOfRange { .. } | RtpError::PaddingTooLong { .. } => {
                ErrorKind::Range
            }
            RtpError::UnsupportedVersion(_)
            | RtpError::TooManyCsrcs { .. }
            | RtpError::UnknownField(_) => ErrorKind::Value,
            RtpError::HeaderTooShort { .. } | RtpError::Truncated { .. } => ErrorKind::Format,
        }
    }
}

pub type Result<T> = std::result::Result<T, RtpError>;
