use bevy::{ecs::event::Events, prelude::*};
use std::io::{self, BufRead, Write};

use crate::{
    input::Command,
    plugins::{FlameOutEvent, RingPassedEvent},
    rendering::{help_text, Telemetry},
    resources::PendingControls,
    sim::Simulator,
    utils::Result,
};

/// Drive a flight app from line input until `exit`, end of input or an empty
/// tank. Each control line is one `FixedUpdate` tick; `help` does not step.
/// Writes the HUD (or JSON lines) to `out` and returns the final score.
///
/// The app must have [`FlightPlugin`](crate::plugins::FlightPlugin) installed.
pub fn run_session(
    app: &mut App,
    mut input: impl BufRead,
    out: &mut impl Write,
    json: bool,
) -> Result<u32> {
    let mut buf = Vec::new();
    loop {
        let simulator = app.world().resource::<Simulator>();
        if simulator.is_finished() {
            break;
        }

        let telemetry = Telemetry::capture(simulator);
        if json {
            writeln!(out, "{}", serde_json::to_string(&telemetry)?)?;
        } else {
            writeln!(out, "\n{telemetry}")?;
            write!(out, "Command: ")?;
        }
        out.flush()?;

        let Some(line) = read_line(&mut input, &mut buf)? else {
            break;
        };
        let controls = app.world().resource::<Simulator>().config().controls.clone();

        match Command::parse(&line, &controls) {
            Command::Help => writeln!(out, "{}", help_text())?,
            Command::Exit => break,
            Command::Controls(deltas) => {
                app.world_mut()
                    .resource_mut::<PendingControls>()
                    .push(deltas);
                app.world_mut().run_schedule(FixedUpdate);
                report_events(app, out, json)?;
            }
        }
    }

    let score = app.world().resource::<Simulator>().state().score;
    if json {
        writeln!(out, "{}", serde_json::json!({ "final_score": score }))?;
    } else {
        writeln!(out, "\nFlight over! Final score: {score}")?;
    }
    Ok(score)
}

// Bytes that are not UTF-8 become U+FFFD, which no token matches
fn read_line(input: &mut impl BufRead, buf: &mut Vec<u8>) -> io::Result<Option<String>> {
    buf.clear();
    if input.read_until(b'\n', buf)? == 0 {
        return Ok(None);
    }
    Ok(Some(String::from_utf8_lossy(buf).into_owned()))
}

fn report_events(app: &mut App, out: &mut impl Write, json: bool) -> Result<()> {
    let passed: Vec<RingPassedEvent> = app
        .world_mut()
        .resource_mut::<Events<RingPassedEvent>>()
        .drain()
        .collect();
    let flame_outs: Vec<FlameOutEvent> = app
        .world_mut()
        .resource_mut::<Events<FlameOutEvent>>()
        .drain()
        .collect();

    if json {
        for event in passed {
            let line = serde_json::json!({ "ring_passed": event.index, "score": event.score });
            writeln!(out, "{line}")?;
        }
        for event in flame_outs {
            writeln!(out, "{}", serde_json::json!({ "flame_out": event.tick }))?;
        }
        return Ok(());
    }
    for event in passed {
        writeln!(out, "Ring {} passed! Score: {}", event.index + 1, event.score)?;
    }
    for event in flame_outs {
        writeln!(out, "Out of fuel at tick {}, engine cut.", event.tick)?;
    }
    Ok(())
}
