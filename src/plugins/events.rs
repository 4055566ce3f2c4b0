use bevy::prelude::*;

/// A ring was flown through during the last fixed tick.
#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub struct RingPassedEvent {
    /// Index into `Simulator::rings`
    pub index: usize,
    /// Score after crediting the ring
    pub score: u32,
}

/// The tank ran dry during the given tick.
#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub struct FlameOutEvent {
    pub tick: u64,
}
