pub struct PwmConfig {
    pub frequency_hz: u32,
    pub duty_bits: u8,
}

impl PwmConfig {
    /// Highest duty value expressible at the configured resolution.
    #[allow(clippy::cast_possible_truncation)]
    pub const fn max_duty(&self) -> u16 {
        ((1u32 << self.duty_bits) - 1) as u16
    }
}

pub struct PatternTimings {
    pub duty_step: u16,
    pub step_delay_ms: u64,
    pub pause_delay_ms: u64,
}

pub struct FirmwareConfig {
    pub version: &'static str,
}

/// Number of LEDs wired to the board.
pub const LED_COUNT: usize = 3;

pub const PWM: PwmConfig = PwmConfig {
    frequency_hz: 5_000,
    duty_bits: 10,
};

pub const PATTERN: PatternTimings = PatternTimings {
    duty_step: 10,
    step_delay_ms: 10,
    pause_delay_ms: 300,
};

pub const FIRMWARE: FirmwareConfig = FirmwareConfig {
    version: env!("BUILD_VERSION"),
};

/// GPIO pins driving the LEDs, in LED index order.
#[macro_export]
macro_rules! led_gpios {
    ($p:expr) => {
        ($p.GPIO2, $p.GPIO4, $p.GPIO5)
    };
}
