pub(crate) mod patterns;

pub use patterns::led_pattern_task;
