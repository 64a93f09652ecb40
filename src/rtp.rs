use std::fmt;
use std::str::FromStr;

use crate::error::RtpError;

/// Length of the fixed RTP header, before any CSRC identifiers
pub const FIXED_HEADER_LEN: usize = 12;

/// Largest payload type the 7 bit field can carry
pub const MAX_PAYLOAD_TYPE: u8 = 0x7f;

/// Largest number of CSRC identifiers the 4 bit count can carry
pub const MAX_CSRC_COUNT: usize = 15;

/// Largest padding the single octet length trailer can describe
pub const MAX_PADDING_LEN: usize = 0xff;

pub(crate) const PADDING_FLAG: u8 = 0x20;
pub(crate) const CSRC_COUNT_MASK: u8 = 0x0f;
pub(crate) const MARKER_FLAG: u8 = 0x80;
pub(crate) const PAYLOAD_TYPE_MASK: u8 = 0x7f;

/// The RTP header fields that can be queried on a decoded packet
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Payload,
    PayloadType,
    Ssrc,
    Csrcs,
    Timestamp,
    SequenceNumber,
    Version,
    Marker,
    Padding,
}

impl Field {
    /// Every field, in vocabulary order.
    pub const ALL: [Field; 9] = [
        Field::Payload,
        Field::PayloadType,
        Field::Ssrc,
        Field::Csrcs,
        Field::Timestamp,
        Field::SequenceNumber,
        Field::Version,
        Field::Marker,
        Field::Padding,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Field::Payload => "Payload",
            Field::PayloadType => "PayloadType",
            Field::Ssrc => "Ssrc",
            Field::Csrcs => "Csrcs",
            Field::Timestamp => "Timestamp",
            Field::SequenceNumber => "SequenceNumber",
            Field::Version => "Version",
            Field::Marker => "Marker",
            Field::Padding => "Padding",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Field {
    type Err = RtpError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Field::ALL
            .iter()
            .copied()
            .find(|field| field.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| RtpError::UnknownField(s.to_string()))
    }
}

/// The value of a single header field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldValue<'a> {
    /// Payload or padding bytes
    Bytes(&'a [u8]),

    /// Any of the integer fields, widened to 32 bits
    Int(u32),

    /// CSRC identifiers, in wire order
    List(&'a [u32]),

    /// Marker bit
    Flag(bool),

    /// Padding on a packet without the padding flag
    Absent,
}

impl<'a> FieldValue<'a> {
    pub fn as_u32(&self) -> Option<u32> {
        match *self {
            FieldValue::Int(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_bytes(&self) -> Option<&'a [u8]> {
        match *self {
            FieldValue::Bytes(b) => Some(b),
            _ => None,
        }
    }
}

impl fmt::Display for FieldValue<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::Bytes(bytes) => {
                f.write_str("[")?;
                for (i, b) in bytes.iter().enumerate() {
                    if i > 0 {
                        f.write_str(" ")?;
                    }
                    write!(f, "{:02x}", b)?;
                }
                f.write_str("]")
            }
            FieldValue::Int(v) => write!(f, "{}", v),
            FieldValue::List(values) => write!(f, "{:?}", values),
            FieldValue::Flag(v) => write!(f, "{}", v),
            FieldValue::Absent => f.write_str("none"),
        }
    }
}

/// A decoded RTP packet, https://tools.ietf.org/html/rfc3550#section-5.1
///
/// Payload and padding borrow from the buffer the packet was decoded from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RtpPacket<'a> {
    // version -- 2 bits
    pub(crate) version: u8,

    // marker flag -- 1 bit
    pub(crate) marker: bool,

    // payload type -- 7 bits
    pub(crate) payload_type: u8,

    // sequence number -- 2 bytes
    pub(crate) sequence_number: u16,

    // timestamp -- 4 bytes
    pub(crate) timestamp: u32,

    // synchronization source identifier
    pub(crate) ssrc: u32,

    // contributing source identifiers (0 to 15)
    pub(crate) csrcs: Vec<u32>,

    // payload, without padding
    pub(crate) payload: &'a [u8],

    // padding, only when the padding flag is set
    pub(crate) padding: Option<&'a [u8]>,
}

impl<'a> RtpPacket<'a> {
    pub fn version(&self) -> u8 {
        self.version
    }

    pub fn marker(&self) -> bool {
        self.marker
    }

    pub fn payload_type(&self) -> u8 {
        self.payload_type
    }

    pub fn sequence_number(&self) -> u16 {
        self.sequence_number
    }

    pub fn timestamp(&self) -> u32 {
        self.timestamp
    }

    pub fn ssrc(&self) -> u32 {
        self.ssrc
    }

    pub fn csrcs(&self) -> &[u32] {
        &self.csrcs
    }

    pub fn payload(&self) -> &'a [u8] {
        self.payload
    }

    pub fn padding(&self) -> Option<&'a [u8]> {
        self.padding
    }

    /// Look up a single field.
    pub fn get(&self, field: Field) -> FieldValue<'_> {
        match field {
            Field::Payload => FieldValue::Bytes(self.payload),
            Field::PayloadType => FieldValue::Int(u32::from(self.payload_type)),
            Field::Ssrc => FieldValue::Int(self.ssrc),
            Field::Csrcs => FieldValue::List(&self.csrcs),
            Field::Timestamp => FieldValue::Int(self.timestamp),
            Field::SequenceNumber => FieldValue::Int(u32::from(self.sequence_number)),
            Field::Version => FieldValue::Int(u32::from(self.version)),
            Field::Marker => FieldValue::Flag(self.marker),
            Field::Padding => match self.padding {
                Some(padding) => FieldValue::Bytes(padding),
                None => FieldValue::Absent,
            },
        }
    }

    /// Look up several fields, returned in the order requested.
    pub fn get_many(&self, fields: &[Field]) -> Vec<FieldValue<'_>> {
        fields.iter().map(|&field| self.get(field)).collect()
    }

    /// Look up fields by name. Fails on the first name outside the vocabulary.
    pub fn query(&self, names: &[&str]) -> Result<Vec<FieldValue<'_>>, RtpError> {
        names
            .iter()
            .map(|name| name.parse::<Field>().map(|field| self.get(field)))
            .collect()
    }
}

impl fmt::Display for RtpPacket<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for field in Field::ALL.iter() {
            writeln!(f, "{} : {}", field, self.get(*field))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    fn sample_packet(payload: &[u8]) -> RtpPacket<'_> {
        RtpPacket {
            version: 2,
            marker: true,
            payload_type: 96,
            sequence_number: 0x1234,
            timestamp: 1234,
            ssrc: 12,
            csrcs: vec![3, 4],
            payload,
            padding: None,
        }
    }

    #[test]
    fn field_names_round_trip() {
        for field in Field::ALL.iter() {
            assert_eq!(field.name().parse::<Field>().unwrap(), *field);
        }
    }

    #[test]
    fn field_names_ignore_case() {
        assert_eq!("sequencenumber".parse::<Field>().unwrap(), Field::SequenceNumber);
    }

    #[test]
    fn unknown_field_name() {
        let err = "Extension".parse::<Field>().unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Value);
    }

    #[test]
    fn get_single_field() {
        let payload = [1, 2, 3, 4];
        let packet = sample_packet(&payload);

        assert_eq!(packet.get(Field::Version), FieldValue::Int(2));
        assert_eq!(packet.get(Field::Marker), FieldValue::Flag(true));
        assert_eq!(packet.get(Field::Csrcs), FieldValue::List(&[3, 4]));
        assert_eq!(packet.get(Field::Padding), FieldValue::Absent);
        assert_eq!(packet.get(Field::Payload).as_bytes(), Some(&payload[..]));
    }

    #[test]
    fn get_many_keeps_order() {
        let payload = [1, 2, 3, 4];
        let packet = sample_packet(&payload);

        let values = packet.get_many(&[Field::Version, Field::Payload]);
        assert_eq!(values, vec![FieldValue::Int(2), FieldValue::Bytes(&[1, 2, 3, 4])]);
    }

    #[test]
    fn query_by_name() {
        let payload = [9];
        let packet = sample_packet(&payload);

        let values = packet.query(&["Timestamp", "Ssrc"]).unwrap();
        assert_eq!(values, vec![FieldValue::Int(1234), FieldValue::Int(12)]);

        assert!(matches!(
            packet.query(&["Ssrc", "Bogus"]),
            Err(RtpError::UnknownField(ref name)) if name == "Bogus"
        ));
    }

    #[test]
    fn display_dumps_every_field() {
        let payload = [0xf1, 0xe2];
        let dump = sample_packet(&payload).to_string();

        assert_eq!(dump.lines().count(), Field::ALL.len());
        assert!(dump.contains("Payload : [f1 e2]"));
        assert!(dump.contains("Csrcs : [3, 4]"));
        assert!(dump.contains("Padding : none"));
    }
}
