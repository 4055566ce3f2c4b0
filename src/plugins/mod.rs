mod events;
mod flight;

pub use events::{FlameOutEvent, RingPassedEvent};
pub use flight::{FlightPlugin, FlightSet};
