mod hud;

pub use hud::{help_text, Telemetry};
