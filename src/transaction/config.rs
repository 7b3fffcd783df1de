use std::time::Duration;

/// LoRa spreading factor.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub enum SpreadingFactor {
    /// SF5
    Sf5,
    /// SF6
    Sf6,
    /// SF7
    Sf7,
    /// SF8
    Sf8,
    /// SF9
    #[default]
    Sf9,
    /// SF10
    Sf10,
    /// SF11
    Sf11,
    /// SF12
    Sf12,
}

/// LoRa bandwidth.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub enum Bandwidth {
    /// 7.8 kHz
    Khz7_8,
    /// 10.4 kHz
    Khz10_4,
    /// 15.6 kHz
    Khz15_6,
    /// 20.8 kHz
    Khz20_8,
    /// 31.25 kHz
    Khz31_25,
    /// 41.7 kHz
    Khz41_7,
    /// 62.5 kHz
    Khz62_5,
    /// 125 kHz
    #[default]
    Khz125,
    /// 250 kHz
    Khz250,
    /// 500 kHz
    Khz500,
}

/// LoRa coding rate.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub enum CodingRate {
    /// 4/5
    #[default]
    Cr4_5,
    /// 4/6
    Cr4_6,
    /// 4/7
    Cr4_7,
    /// 4/8
    Cr4_8,
}

/// LoRa packet length mode.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub enum HeaderType {
    /// The packet carries an explicit header.
    #[default]
    Explicit,
    /// The packet length is fixed and known to both ends.
    Implicit,
}

/// LoRa sync word.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub enum SyncWord {
    /// Private network sync word.
    #[default]
    Private,
    /// Public network sync word.
    Public,
}

/// LoRa radio parameters of a transaction.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct RadioConfig {
    /// Carrier frequency in Hz.
    pub frequency_hz: u32,
    /// Transmit power in dBm.
    pub tx_power_dbm: i8,
    /// Spreading factor.
    pub spreading_factor: SpreadingFactor,
    /// Bandwidth.
    pub bandwidth: Bandwidth,
    /// Coding rate.
    pub coding_rate: CodingRate,
    /// Preamble length in symbols.
    pub preamble_length: u16,
    /// Packet length mode.
    pub header_type: HeaderType,
    /// Whether IQ inversion is enabled.
    pub invert_iq: bool,
    /// Whether the payload CRC is enabled.
    pub crc: bool,
    /// Sync word.
    pub sync_word: SyncWord,
    /// Default reception window.
    pub rx_timeout: Duration,
    /// Default maximum size of a received packet.
    pub max_rx_size: u8,
}

impl Default for RadioConfig {
    fn default() -> Self {
        Self {
            frequency_hz: 868_100_000,
            tx_power_dbm: 14,
            spreading_factor: SpreadingFactor::default(),
            bandwidth: Bandwidth::default(),
            coding_rate: CodingRate::default(),
            preamble_length: 12,
            header_type: HeaderType::default(),
            invert_iq: false,
            crc: true,
            sync_word: SyncWord::default(),
            rx_timeout: Duration::from_secs(30),
            max_rx_size: 6,
        }
    }
}
