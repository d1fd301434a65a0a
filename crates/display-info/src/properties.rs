use core::fmt;

/// Raw state codes used by the remote connection-properties interface.
pub mod raw {
    /// HDR disabled.
    pub const HDR_OFF: u32 = 0;
    /// HDR10.
    pub const HDR_10: u32 = 1;
    /// HDR10+.
    pub const HDR_10PLUS: u32 = 2;
    /// Dolby Vision.
    pub const HDR_DOLBYVISION: u32 = 3;
    /// Technicolor.
    pub const HDR_TECHNICOLOR: u32 = 4;

    /// No HDCP encryption.
    pub const HDCP_UNENCRYPTED: u32 = 0;
    /// HDCP 1.x.
    pub const HDCP_1X: u32 = 1;
    /// HDCP 2.x.
    pub const HDCP_2X: u32 = 2;
}

/// The HDR mode a display is operating in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[allow(clippy::exhaustive_enums)]
pub enum HdrType {
    Off,
    Hdr10,
    Hdr10Plus,
    DolbyVision,
    Technicolor,
    /// The provider reported a state this client does not know.
    Unknown,
}

impl HdrType {
    /// Maps a raw provider code, unrecognised codes are [`HdrType::Unknown`].
    pub const fn from_raw(value: u32) -> Self {
        match value {
            raw::HDR_OFF => Self::Off,
            raw::HDR_10 => Self::Hdr10,
            raw::HDR_10PLUS => Self::Hdr10Plus,
            raw::HDR_DOLBYVISION => Self::DolbyVision,
            raw::HDR_TECHNICOLOR => Self::Technicolor,
            _ => Self::Unknown,
        }
    }
}

impl fmt::Display for HdrType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Off => "Off",
            Self::Hdr10 => "HDR10",
            Self::Hdr10Plus => "HDR10+",
            Self::DolbyVision => "DolbyVision",
            Self::Technicolor => "Technicolor",
            Self::Unknown => "Unknown",
        };

        f.write_str(name)
    }
}

/// The HDCP protection level negotiated with a display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[allow(clippy::exhaustive_enums)]
pub enum HdcpProtection {
    Unencrypted,
    Hdcp1x,
    Hdcp2x,
    /// The provider reported a level this client does not know.
    Unknown,
}

impl HdcpProtection {
    /// Maps a raw provider code, unrecognised codes are [`HdcpProtection::Unknown`].
    pub const fn from_raw(value: u32) -> Self {
        match value {
            raw::HDCP_UNENCRYPTED => Self::Unencrypted,
            raw::HDCP_1X => Self::Hdcp1x,
            raw::HDCP_2X => Self::Hdcp2x,
            _ => Self::Unknown,
        }
    }
}

impl fmt::Display for HdcpProtection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Unencrypted => "Unencrypted",
            Self::Hdcp1x => "HDCP 1.x",
            Self::Hdcp2x => "HDCP 2.x",
            Self::Unknown => "Unknown",
        };

        f.write_str(name)
    }
}
