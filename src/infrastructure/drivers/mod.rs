mod led_pwm;
mod random;

pub use led_pwm::{EspLedcDriver, PwmInitError};
pub use random::hardware_seed;
