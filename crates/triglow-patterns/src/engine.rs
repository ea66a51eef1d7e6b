//! Pattern engine - plays the LED patterns over an abstract duty output.
//!
//! The engine owns everything the patterns need:
//! - the duty output (hardware PWM binding, or a recording fake in tests)
//! - a delay provider used for every cooperative sleep
//! - the timing/duty configuration
//! - the random generator for the random pattern
//!
//! Nothing here is global: configuration and the seed are passed in at
//! construction, which keeps the whole engine runnable on a host.

use embassy_time::Duration;
use embedded_hal_async::delay::DelayNs;

use crate::DutyOutput;
use crate::pattern::PatternId;
use crate::ramp::DutyRamp;
use crate::rng::SplitMix64;

#[cfg(feature = "esp32-log")]
macro_rules! phase_log {
    ($($arg:tt)*) => { esp_println::println!($($arg)*) };
}
#[cfg(not(feature = "esp32-log"))]
macro_rules! phase_log {
    ($($arg:tt)*) => {{}};
}

/// Breathe iterations per random phase.
const RANDOM_BREATHS: usize = 6;

/// Duty and timing parameters shared by all patterns.
#[derive(Debug, Clone, Copy)]
pub struct PatternConfig {
    /// Peak duty value a breathe ramp reaches.
    pub max_duty: u16,
    /// Duty increment between ramp steps.
    pub duty_step: u16,
    /// Sleep after every ramp step.
    pub step_delay: Duration,
    /// Sleep between pattern steps (counter advances, random picks).
    pub pause_delay: Duration,
}

/// Plays patterns on `N` LEDs through a [`DutyOutput`].
pub struct PatternEngine<O: DutyOutput, D: DelayNs, const N: usize> {
    output: O,
    delay: D,
    config: PatternConfig,
    rng: SplitMix64,
}

impl<O: DutyOutput, D: DelayNs, const N: usize> PatternEngine<O, D, N> {
    /// Create an engine over `output`, sleeping through `delay`.
    ///
    /// `seed` initializes the random pattern's generator; seeding from a
    /// hardware entropy source keeps runs from repeating, while a fixed
    /// seed makes the random pattern reproducible.
    pub fn new(output: O, delay: D, config: PatternConfig, seed: u64) -> Self {
        Self {
            output,
            delay,
            config,
            rng: SplitMix64::new(seed),
        }
    }

    /// Set the instantaneous duty of one LED.
    pub fn set_brightness(&mut self, led: usize, duty: u16) {
        self.output.set_duty(led, duty);
    }

    /// Ramp one LED 0 -> max -> 0, sleeping `step_delay` after each step.
    ///
    /// Blocks the calling task for the whole ramp; the final committed
    /// duty is always 0.
    pub async fn breathe(&mut self, led: usize) {
        let step_ms = duration_ms(self.config.step_delay);
        for duty in DutyRamp::new(self.config.max_duty, self.config.duty_step) {
            self.output.set_duty(led, duty);
            self.delay.delay_ms(step_ms).await;
        }
    }

    /// Breathe each LED ascending, then back down excluding both ends.
    ///
    /// For three LEDs the visiting order is 0, 1, 2, 1; index 0 is only
    /// revisited when the next sweep starts.
    pub async fn run_chase(&mut self) {
        for led in 0..N {
            self.breathe(led).await;
        }
        for led in (1..N.saturating_sub(1)).rev() {
            self.breathe(led).await;
        }
    }

    /// Count 0 through 2^N - 1, rendering each value in binary: a set bit
    /// breathes its LED, a clear bit turns it off. Pauses between counts.
    pub async fn run_binary_counter(&mut self) {
        let pause_ms = duration_ms(self.config.pause_delay);
        for count in 0..(1usize << N) {
            for led in 0..N {
                if (count >> led) & 1 == 1 {
                    self.breathe(led).await;
                } else {
                    self.set_brightness(led, 0);
                }
            }
            self.delay.delay_ms(pause_ms).await;
        }
    }

    /// Breathe a randomly drawn LED, `RANDOM_BREATHS` times in a row,
    /// pausing after each.
    pub async fn run_random(&mut self) {
        let pause_ms = duration_ms(self.config.pause_delay);
        for _ in 0..RANDOM_BREATHS {
            let led = self.rng.next_index(N);
            phase_log!("pattern: random picked led {}", led);
            self.breathe(led).await;
            self.delay.delay_ms(pause_ms).await;
        }
    }

    /// Run one pattern from start to finish.
    pub async fn run_pattern(&mut self, id: PatternId) {
        phase_log!("pattern: {}", id.as_str());
        match id {
            PatternId::Chase => self.run_chase().await,
            PatternId::BinaryCounter => self.run_binary_counter().await,
            PatternId::Random => self.run_random().await,
        }
    }

    /// Run every pattern once, in the fixed cycle order.
    pub async fn run_cycle(&mut self) {
        for id in PatternId::CYCLE {
            self.run_pattern(id).await;
        }
    }

    /// Run pattern cycles forever.
    pub async fn run(&mut self) -> ! {
        loop {
            self.run_cycle().await;
        }
    }

    /// Get a reference to the duty output.
    pub fn output(&self) -> &O {
        &self.output
    }

    /// Get a mutable reference to the duty output.
    pub fn output_mut(&mut self) -> &mut O {
        &mut self.output
    }
}

#[allow(clippy::cast_possible_truncation)]
fn duration_ms(duration: Duration) -> u32 {
    duration.as_millis() as u32
}
