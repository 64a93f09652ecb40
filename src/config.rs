/// Default RTP version written by the encoder.
pub const DEFAULT_VERSION: u8 = 2;

/// Optional header settings for [`encode`](crate::encode).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncodeOptions {
    /// RTP version, 1 or 2. Default: 2.
    pub version: u8,
    /// Contributing source identifiers, in wire order. Default: none.
    pub csrcs: Vec<u32>,
    /// Padding bytes appended after the payload. Default: none.
    pub padding: Vec<u8>,
    /// Marker bit. Default: unset.
    pub marker: bool,
}

impl Default for EncodeOptions {
    fn default() -> Self {
        Self {
            version: DEFAULT_VERSION,
            csrcs: Vec::new(),
            padding: Vec::new(),
            marker: false,
        }
    }
}

impl EncodeOptions {
    pub fn with_version(mut self, version: u8) -> Self {
        self.version = version;
        self
    }

    pub fn with_csrcs(mut self, csrcs: impl Into<Vec<u32>>) -> Self {
        self.csrcs = csrcs.into();
        self
    }

    pub fn with_padding(mut self, padding: impl Into<Vec<u8>>) -> Self {
        self.padding = padding.into();
        self
    }

    pub fn with_marker(mut self, marker: bool) -> Self {
        self.marker = marker;
        self
    }
}
