//! Breathing duty ramp.
//!
//! Produces the 0 -> max -> 0 duty sequence one breathe cycle plays on a
//! single LED. The sequence is a plain iterator so callers decide how to
//! pace it (sleep per step) and tests can collect it directly.

/// Iterator over one full breathing ramp.
///
/// Rises from 0 in `step` increments, emits the peak `max_duty` exactly
/// once (clamped, so the peak is reached even when `step` does not divide
/// `max_duty`), then falls by the same decrement and terminates with a
/// final 0. The resulting sequence is strictly increasing up to the peak
/// and strictly decreasing after it.
#[derive(Debug, Clone)]
pub struct DutyRamp {
    max_duty: u16,
    step: u16,
    state: State,
}

#[derive(Debug, Clone, Copy)]
enum State {
    Rise(u16),
    Fall(u16),
    Done,
}

impl DutyRamp {
    /// Create a ramp peaking at `max_duty` with the given increment.
    ///
    /// A zero `step` is treated as 1 so the ramp always terminates.
    pub fn new(max_duty: u16, step: u16) -> Self {
        Self {
            max_duty,
            step: step.max(1),
            state: State::Rise(0),
        }
    }

    /// Total number of duty values a full ramp emits.
    ///
    /// Constant for fixed parameters, so one breathe cycle takes exactly
    /// `step_count * step_delay` of wall time.
    pub const fn step_count(max_duty: u16, step: u16) -> usize {
        if max_duty == 0 {
            return 1;
        }
        let step = if step == 0 { 1 } else { step };
        2 * max_duty.div_ceil(step) as usize + 1
    }
}

impl Iterator for DutyRamp {
    type Item = u16;

    fn next(&mut self) -> Option<u16> {
        match self.state {
            State::Rise(duty) => {
                if duty >= self.max_duty {
                    // Peak reached; a zero-height ramp is just [0]
                    self.state = if self.max_duty == 0 {
                        State::Done
                    } else {
                        State::Fall(self.max_duty.saturating_sub(self.step))
                    };
                    Some(self.max_duty)
                } else {
                    self.state = State::Rise(duty.saturating_add(self.step));
                    Some(duty)
                }
            }
            State::Fall(duty) => {
                if duty == 0 {
                    self.state = State::Done;
                    Some(0)
                } else {
                    self.state = State::Fall(duty.saturating_sub(self.step));
                    Some(duty)
                }
            }
            State::Done => None,
        }
    }
}
