use embassy_time::{Delay, Duration};

use triglow_patterns::{PatternConfig, PatternEngine};

use crate::infrastructure::config;
use crate::infrastructure::drivers::EspLedcDriver;

/// Task running the pattern cycle forever.
///
/// Owns the PWM driver for the rest of the program; every sleep goes
/// through the embassy timer so the ramps yield to the executor.
#[embassy_executor::task]
pub async fn led_pattern_task(driver: EspLedcDriver, seed: u64) {
    let timings = PatternConfig {
        max_duty: config::PWM.max_duty(),
        duty_step: config::PATTERN.duty_step,
        step_delay: Duration::from_millis(config::PATTERN.step_delay_ms),
        pause_delay: Duration::from_millis(config::PATTERN.pause_delay_ms),
    };

    let mut engine: PatternEngine<EspLedcDriver, Delay, { config::LED_COUNT }> =
        PatternEngine::new(driver, Delay, timings, seed);

    engine.run().await
}
