#![no_std]

pub mod engine;
pub mod pattern;
pub mod ramp;
pub mod rng;

pub use engine::{PatternConfig, PatternEngine};
pub use pattern::PatternId;
pub use ramp::DutyRamp;
pub use rng::SplitMix64;

pub use embassy_time::Duration;

/// Abstract PWM duty output.
///
/// Implement this trait to drive real hardware channels, or a recording
/// fake for host tests. The pattern engine is generic over this trait and
/// never touches hardware directly.
pub trait DutyOutput {
    /// Write and commit `duty` on the channel bound to LED `led`.
    ///
    /// `led` is a position in the fixed LED sequence; the implementation
    /// owns the mapping to physical pins and channels.
    fn set_duty(&mut self, led: usize, duty: u16);
}
