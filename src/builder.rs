use crate::config::EncodeOptions;
use crate::error::{Result, RtpError};
use crate::rtp::*;
use tracing::{debug, trace};

/// Encode an RTP packet.
///
/// Wire format:
/// ```text
///  0                   1                   2                   3
///  0 1 2 3 4 5 6 7 8 9 0 1 2 3 4 5 6 7 8 9 0 1 2 3 4 5 6 7 8 9 0 1
/// +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
/// |V=2|P|X|  CC   |M|     PT      |       sequence number         |
/// +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
/// |                           timestamp                           |
/// +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
/// |           synchronization source (SSRC) identifier            |
/// +=+=+=+=+=+=+=+=+=+=+=+=+=+=+=+=+=+=+=+=+=+=+=+=+=+=+=+=+=+=+=+=+
/// |            contributing source (CSRC) identifiers             |
/// |                             ....                              |
/// +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
/// |                payload  ...  | padding ... | padding length   |
/// +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
/// ```
///
/// The extension bit is never set. Padding, when given, is followed by
/// one octet holding its length.
pub fn encode(
    ssrc: u32,
    payload_type: u8,
    payload: &[u8],
    sequence_number: u16,
    timestamp: u32,
    options: &EncodeOptions,
) -> Result<Vec<u8>> {
    let mut dst = Vec::with_capacity(encoded_len(payload, options));
    encode_into(ssrc, payload_type, payload, sequence_number, timestamp, options, &mut dst)?;
    Ok(dst)
}

/// Encode an RTP packet, appending it to `dst`.
///
/// `dst` is left untouched if the header fields are rejected.
pub fn encode_into(
    ssrc: u32,
    payload_type: u8,
    payload: &[u8],
    sequence_number: u16,
    timestamp: u32,
    options: &EncodeOptions,
    dst: &mut Vec<u8>,
) -> Result<()> {
    validate(payload_type, options).map_err(|err| {
        debug!(error = %err, ssrc, "rejecting RTP encode request");
        err
    })?;

    let padded = !options.padding.is_empty();

    let mut h1 = options.version << 6;
    if padded {
        h1 |= PADDING_FLAG;
    }
    h1 |= options.csrcs.len() as u8 & CSRC_COUNT_MASK;

    let mut h2 = payload_type & PAYLOAD_TYPE_MASK;
    if options.marker {
        h2 |= MARKER_FLAG;
    }

    dst.reserve(encoded_len(payload, options));
    dst.push(h1);
    dst.push(h2);
    dst.extend_from_slice(&sequence_number.to_be_bytes());
    dst.extend_from_slice(&timestamp.to_be_bytes());
    dst.extend_from_slice(&ssrc.to_be_bytes());

    for csrc in &options.csrcs {
        dst.extend_from_slice(&csrc.to_be_bytes());
    }

    dst.extend_from_slice(payload);

    if padded {
        dst.extend_from_slice(&options.padding);
        dst.push(options.padding.len() as u8);
    }

    trace!(
        ssrc,
        payload_type,
        sequence_number,
        csrcs = options.csrcs.len(),
        payload_len = payload.len(),
        padding_len = options.padding.len(),
        "encoded RTP packet"
    );

    Ok(())
}

/// Size of the packet [`encode`] would produce.
pub fn encoded_len(payload: &[u8], options: &EncodeOptions) -> usize {
    let padding = if options.padding.is_empty() {
        0
    } else {
        options.padding.len() + 1
    };
    FIXED_HEADER_LEN + 4 * options.csrcs.len() + payload.len() + padding
}

fn validate(payload_type: u8, options: &EncodeOptions) -> Result<()> {
    if payload_type > MAX_PAYLOAD_TYPE {
        return Err(RtpError::PayloadTypeOutOfRange {
            value: payload_type,
        });
    }

    if options.version != 1 && options.version != 2 {
        return Err(RtpError::UnsupportedVersion(options.version));
    }

    if options.csrcs.len() > MAX_CSRC_COUNT {
        return Err(RtpError::TooManyCsrcs {
            count: options.csrcs.len(),
        });
    }

    if options.padding.len() > MAX_PADDING_LEN {
        return Err(RtpError::PaddingTooLong {
            len: options.padding.len(),
        });
    }

    Ok(())
}
