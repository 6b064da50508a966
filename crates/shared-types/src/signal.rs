//! Signal strength helpers used for display and detail augmentation.

use std::fmt;

/// Map signal strength (dBm) to a 0-100 quality percentage.
///
/// `clamp(0, 100, (rssi + 100) * 2)`
pub fn signal_quality(rssi: i32) -> u8 {
    (rssi.saturating_add(100).saturating_mul(2)).clamp(0, 100) as u8
}

/// Number of filled bars out of `bar_count` for a quality percentage.
pub fn signal_bars(quality: u8, bar_count: u8) -> u8 {
    let filled = (u32::from(quality.min(100)) * u32::from(bar_count)).div_ceil(100);
    filled as u8
}

/// Coarse signal grade.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SignalLevel {
    Excellent,
    Good,
    Fair,
    Poor,
}

impl SignalLevel {
    pub fn from_rssi(rssi: i32) -> Self {
        match rssi {
            r if r >= -50 => SignalLevel::Excellent,
            r if r >= -60 => SignalLevel::Good,
            r if r >= -70 => SignalLevel::Fair,
            _ => SignalLevel::Poor,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            SignalLevel::Excellent => "excellent",
            SignalLevel::Good => "good",
            SignalLevel::Fair => "fair",
            SignalLevel::Poor => "poor",
        }
    }
}

/// Radio band derived from center frequency.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrequencyBand {
    Band2_4GHz,
    Band5GHz,
    Band6GHz,
}

impl FrequencyBand {
    pub fn from_frequency(mhz: u32) -> Self {
        if mhz >= 5955 {
            FrequencyBand::Band6GHz
        } else if mhz >= 5000 {
            FrequencyBand::Band5GHz
        } else {
            FrequencyBand::Band2_4GHz
        }
    }
}

impl fmt::Display for FrequencyBand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            FrequencyBand::Band2_4GHz => "2.4GHz",
            FrequencyBand::Band5GHz => "5GHz",
            FrequencyBand::Band6GHz => "6GHz",
        };
        f.write_str(label)
    }
}
