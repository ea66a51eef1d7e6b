//! Pattern identifiers and the fixed scheduling order.

/// Identifier of a display pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PatternId {
    /// Back-and-forth breathing sweep across the LEDs.
    Chase,
    /// Binary counter rendered as breathing (bit set) vs off (bit clear).
    BinaryCounter,
    /// Randomly chosen LEDs breathing one at a time.
    Random,
}

impl PatternId {
    /// The order the scheduler cycles through, forever.
    pub const CYCLE: [PatternId; 3] = [
        PatternId::Chase,
        PatternId::BinaryCounter,
        PatternId::Random,
    ];

    /// Name used in pattern-transition logs.
    pub const fn as_str(self) -> &'static str {
        match self {
            PatternId::Chase => "chase",
            PatternId::BinaryCounter => "binary counter",
            PatternId::Random => "random",
        }
    }
}
