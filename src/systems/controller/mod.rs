mod keyboard;

pub use keyboard::keyboard_control_system;
