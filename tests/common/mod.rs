#![allow(dead_code)]

mod assertions;
mod helpers;
mod test_app;

pub use assertions::{assert_flight_invariants, assert_state_finite, assert_vec_eq};
pub use helpers::*;
pub use test_app::{TestApp, TestAppBuilder};
