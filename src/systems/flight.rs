use bevy::prelude::*;

use crate::{
    plugins::{FlameOutEvent, RingPassedEvent},
    resources::PendingControls,
    sim::Simulator,
};

/// Step the simulator once with everything queued since the last tick.
pub fn flight_step_system(
    mut simulator: ResMut<Simulator>,
    mut pending: ResMut<PendingControls>,
    mut ring_events: EventWriter<RingPassedEvent>,
    mut flame_out_events: EventWriter<FlameOutEvent>,
) {
    let input = pending.take();
    let dt = simulator.config().physics.time_step;
    let report = simulator.step(&input, dt);

    let score = simulator.state().score;
    for index in report.rings_passed {
        ring_events.send(RingPassedEvent { index, score });
    }
    if report.fuel_exhausted {
        flame_out_events.send(FlameOutEvent {
            tick: simulator.tick(),
        });
    }
}
