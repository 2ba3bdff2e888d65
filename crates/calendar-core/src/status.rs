//! Battery and Wi-Fi read-outs for the status bar.

/// Battery voltage limits in millivolts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PowerThresholds {
    /// Voltage reported as 0 %.
    pub min_mv: u32,
    /// Voltage reported as 100 %.
    pub max_mv: u32,
    /// Below this the read-out is drawn in the accent colour.
    pub warn_mv: u32,
}

impl Default for PowerThresholds {
    /// Single-cell Li-ion.
    fn default() -> Self {
        Self {
            min_mv: 3000,
            max_mv: 4200,
            warn_mv: 3400,
        }
    }
}

impl PowerThresholds {
    /// Charge estimate for `mv` between these limits.
    pub fn percent(&self, mv: u32) -> u8 {
        battery_percent(mv, self.min_mv, self.max_mv)
    }

    /// `true` when `mv` is below the warning voltage.
    pub fn is_low(&self, mv: u32) -> bool {
        mv < self.warn_mv
    }
}

/// Estimated state of charge for a Li-ion cell, `0..=100`.
///
/// Symmetric sigmoid `105 - 105 / (1 + (1.724 * x)^5.5)` where `x` is the
/// voltage's position between `min_mv` and `max_mv`.
// Voltages are well under 2^24 so f32 holds them exactly, and the curve is
// rounded and clamped to 0..=100 before the cast back.
#[allow(
    clippy::cast_precision_loss,
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss
)]
pub fn battery_percent(mv: u32, min_mv: u32, max_mv: u32) -> u8 {
    let (Some(above), Some(range)) = (mv.checked_sub(min_mv), max_mv.checked_sub(min_mv)) else {
        return 0;
    };
    if above == 0 || range == 0 {
        return 0;
    }
    let x = above as f32 / range as f32;
    let curve = 105.0 - 105.0 / (1.0 + libm::powf(1.724 * x, 5.5));
    libm::roundf(curve).clamp(0.0, 100.0) as u8
}

/// Battery icon level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum BatteryLevel {
    /// Below 8 %.
    Empty,
    /// 8 % and up.
    Bars1,
    /// 22 % and up.
    Bars2,
    /// 36 % and up.
    Bars3,
    /// 50 % and up.
    Bars4,
    /// 65 % and up.
    Bars5,
    /// 79 % and up.
    Bars6,
    /// 93 % and up.
    Full,
}

impl BatteryLevel {
    /// Bucket a charge percentage.
    pub const fn from_percent(percent: u8) -> Self {
        match percent {
            93.. => Self::Full,
            79.. => Self::Bars6,
            65.. => Self::Bars5,
            50.. => Self::Bars4,
            36.. => Self::Bars3,
            22.. => Self::Bars2,
            8.. => Self::Bars1,
            _ => Self::Empty,
        }
    }

    /// Filled bars in the icon, `0..=7`.
    pub const fn bars(self) -> u8 {
        self as u8
    }
}

/// Wi-Fi link quality derived from RSSI.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SignalStrength {
    /// No link (RSSI reported as 0).
    Disconnected,
    /// -50 dBm or better.
    Excellent,
    /// -60 dBm or better.
    Good,
    /// -70 dBm or better.
    Fair,
    /// Anything weaker.
    Poor,
}

impl SignalStrength {
    /// Classify an RSSI reading in dBm.
    pub const fn from_rssi(rssi: i32) -> Self {
        match rssi {
            0 => Self::Disconnected,
            -50.. => Self::Excellent,
            -60.. => Self::Good,
            -70.. => Self::Fair,
            _ => Self::Poor,
        }
    }

    /// Fixed label shown next to the icon.
    pub const fn description(self) -> &'static str {
        match self {
            Self::Disconnected => "No Connection",
            Self::Excellent => "Excellent",
            Self::Good => "Good",
            Self::Fair => "Fair",
            Self::Poor => "Weak",
        }
    }

    /// Links weaker than -70 dBm are drawn in the accent colour.
    pub const fn needs_attention(self) -> bool {
        matches!(self, Self::Poor)
    }
}
