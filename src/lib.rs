//! # RTP codec
//!
//! This crate encodes and decodes RTP packet headers. Decoding is written
//! with nom; header extensions are skipped rather than interpreted.
//!
//! ```
//! use rtp_codec::{decode, encode, EncodeOptions, Field, FieldValue};
//!
//! let frame = encode(12, 1, &[1, 2, 3, 4], 0, 1234, &EncodeOptions::default()).unwrap();
//! assert_eq!(frame, [0x80, 0x01, 0x00, 0x00, 0x00, 0x00, 0x04, 0xd2, 0x00, 0x00, 0x00, 0x0c, 1, 2, 3, 4]);
//!
//! let packet = decode(&frame).unwrap();
//! assert_eq!(
//!     packet.get_many(&[Field::Version, Field::Payload]),
//!     vec![FieldValue::Int(2), FieldValue::Bytes(&[1, 2, 3, 4])]
//! );
//! ```
//!
//! See also:
//! - [RFC 3550](https://tools.ietf.org/html/rfc3550): RTP: A Transport Protocol for Real-Time Applications

mod rtp;
pub use rtp::*;

mod rtp_header_extension;

mod parser;
pub use parser::*;

mod builder;
pub use builder::*;

mod config;
pub use config::*;

mod error;
pub use error::{ErrorKind, Result, RtpError};
