use crate::error::{Result, RtpError};
use crate::rtp::*;
use crate::rtp_header_extension::parse_header_extension;

extern crate nom;
use nom::bits::bits;
use nom::bits::complete::take;
use nom::combinator::rest;
use nom::error::ErrorKind;
use nom::multi::count;
use nom::number::complete::{be_u16, be_u32};
use nom::{sequence::tuple, IResult};
use tracing::{debug, trace};

/// Decode an RTP packet.
///
/// Fails with a format error if the buffer is shorter than the fixed header,
/// or if the CSRC list, header extension or padding run past its end.
/// Any header extension is skipped without being interpreted.
pub fn decode(input: &[u8]) -> Result<RtpPacket<'_>> {
    if input.len() < FIXED_HEADER_LEN {
        debug!(len = input.len(), "rejecting buffer shorter than RTP header");
        return Err(RtpError::HeaderTooShort { len: input.len() });
    }

    match parse_rtp_packet(input) {
        Ok((_, packet)) => {
            trace!(
                ssrc = packet.ssrc,
                payload_type = packet.payload_type,
                sequence_number = packet.sequence_number,
                csrcs = packet.csrcs.len(),
                payload_len = packet.payload.len(),
                "decoded RTP packet"
            );
            Ok(packet)
        }
        Err(_) => {
            debug!(len = input.len(), "rejecting truncated RTP packet");
            Err(RtpError::Truncated { len: input.len() })
        }
    }
}

/// Parse an RTP packet
pub fn parse_rtp_packet(input: &[u8]) -> IResult<&[u8], RtpPacket> {
    let (
        input,
        (
            (version, padding, extension, csrc_count),
            (marker, payload_type),
            sequence_number,
            timestamp,
            ssrc,
        ),
    ) = tuple((parse_vpxcc, parse_mpt, be_u16, be_u32, be_u32))(input)?;

    let (input, csrcs) = parse_csrc(input, csrc_count as usize)?;

    let input = if extension == 1 {
        let (input, ext) = parse_header_extension(input)?;
        trace!(
            profile = ext.profile,
            words = ext.length,
            skipped = ext.wire_len(),
            "skipping RTP header extension"
        );
        input
    } else {
        input
    };

    let (input, (payload, padding)) = parse_payload(input, padding == 1)?;

    Ok((
        input,
        RtpPacket {
            version,
            marker: marker == 1,
            payload_type,
            sequence_number,
            timestamp,
            ssrc,
            csrcs,
            payload,
            padding,
        },
    ))
}

fn parse_vpxcc(input: &[u8]) -> IResult<&[u8], (u8, u8, u8, u8)> {
    let (input, (v, p, x, cc)) = bits(tuple((
        take::<_, _, _, (_, _)>(2usize),
        take::<_, _, _, (_, _)>(1usize),
        take::<_, _, _, (_, _)>(1usize),
        take::<_, _, _, (_, _)>(4usize),
    )))(input)?;

    Ok((input, (v, p, x, cc)))
}

fn parse_mpt(input: &[u8]) -> IResult<&[u8], (u8, u8)> {
    let (input, (m, pt)) = bits(tuple((
        take::<_, _, _, (_, _)>(1usize),
        take::<_, _, _, (_, _)>(7usize),
    )))(input)?;

    Ok((input, (m, pt)))
}

fn parse_csrc(input: &[u8], csrc_count: usize) -> IResult<&[u8], Vec<u32>> {
    count(be_u32, csrc_count)(input)
}

// When padded, the last byte counts the padding bytes in front of it.
fn parse_payload(input: &[u8], padded: bool) -> IResult<&[u8], (&[u8], Option<&[u8]>)> {
    let (input, body) = rest::<_, (_, _)>(input)?;
    if !padded {
        return Ok((input, (body, None)));
    }

    match body.split_last() {
        Some((&padding_len, body)) if usize::from(padding_len) <= body.len() => {
            let (payload, padding) = body.split_at(body.len() - usize::from(padding_len));
            Ok((input, (payload, Some(padding))))
        }
        _ => Err(nom::Err::Error((body, ErrorKind::Eof))),
    }
}
