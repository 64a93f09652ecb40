use nom::bytes::complete::take;
use nom::number::complete::be_u16;
use nom::{sequence::tuple, IResult};

/// An RTP packet header extension, https://tools.ietf.org/html/rfc3550#section-5.3.1
///
/// The codec does not interpret extensions; this is only parsed so the
/// decoder knows where the payload starts.
#[derive(Debug)]
pub(crate) struct RtpPacketHeaderExtension<'a> {
    // profile -- 2 bytes
    pub profile: u16,

    // length (in number of 32 bit words) -- 2 bytes
    pub length: u16,

    // variable length data -- {length*4} bytes
    pub data: &'a [u8],
}

impl RtpPacketHeaderExtension<'_> {
    /// Bytes the extension occupies on the wire, including its own header.
    pub fn wire_len(&self) -> usize {
        4 + self.data.len()
    }
}

pub(crate) fn parse_header_extension(input: &[u8]) -> IResult<&[u8], RtpPacketHeaderExtension> {
    let (input, (profile, length)) = tuple((be_u16, be_u16))(input)?;
    let (input, data) = take(usize::from(length) * 4)(input)?;

    Ok((
        input,
        RtpPacketHeaderExtension {
            profile,
            length,
            data,
        },
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_extension_empty() {
        let input = [0xBE, 0xDE, 0x00, 0x00, 0xAA];
        let (rest, ext) = parse_header_extension(&input).unwrap();

        assert_eq!(ext.profile, 0xBEDE);
        assert_eq!(ext.length, 0);
        assert_eq!(ext.data.len(), 0);
        assert_eq!(ext.wire_len(), 4);
        assert_eq!(rest, [0xAA]);
    }

    #[test]
    fn parse_extension_with_data() {
        let input = [0x10, 0x00, 0x00, 0x02, 1, 2, 3, 4, 5, 6, 7, 8, 0x55];
        let (rest, ext) = parse_header_extension(&input).unwrap();

        assert_eq!(ext.profile, 0x1000);
        assert_eq!(ext.length, 2);
        assert_eq!(ext.data, [1, 2, 3, 4, 5, 6, 7, 8]);
        assert_eq!(ext.wire_len(), 12);
        assert_eq!(rest, [0x55]);
    }

    #[test]
    fn parse_extension_missing_header() {
        let input = [0xBE, 0xDE, 0x00];
        assert!(parse_header_extension(&input).is_err());
    }

    #[test]
    fn parse_extension_missing_data() {
        let input = [0xBE, 0xDE, 0x00, 0x02, 1, 2, 3];
        assert!(parse_header_extension(&input).is_err());
    }
}
