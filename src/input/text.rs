use crate::components::{ControlAxis, ControlInput};
use crate::resources::ControlConfig;
use crate::utils::deg_to_rad;

/// Every accepted token with the axis it drives and the direction.
pub const TOKEN_TABLE: &[(&str, ControlAxis, f64)] = &[
    ("w", ControlAxis::Pitch, 1.0),
    ("pitch+", ControlAxis::Pitch, 1.0),
    ("p+", ControlAxis::Pitch, 1.0),
    ("s", ControlAxis::Pitch, -1.0),
    ("pitch-", ControlAxis::Pitch, -1.0),
    ("p-", ControlAxis::Pitch, -1.0),
    ("a", ControlAxis::Yaw, -1.0),
    ("yaw-", ControlAxis::Yaw, -1.0),
    ("y-", ControlAxis::Yaw, -1.0),
    ("d", ControlAxis::Yaw, 1.0),
    ("yaw+", ControlAxis::Yaw, 1.0),
    ("y+", ControlAxis::Yaw, 1.0),
    ("q", ControlAxis::Roll, -1.0),
    ("roll-", ControlAxis::Roll, -1.0),
    ("r-", ControlAxis::Roll, -1.0),
    ("e", ControlAxis::Roll, 1.0),
    ("roll+", ControlAxis::Roll, 1.0),
    ("r+", ControlAxis::Roll, 1.0),
    ("+", ControlAxis::Throttle, 1.0),
    ("t+", ControlAxis::Throttle, 1.0),
    ("throttle+", ControlAxis::Throttle, 1.0),
    ("-", ControlAxis::Throttle, -1.0),
    ("t-", ControlAxis::Throttle, -1.0),
    ("throttle-", ControlAxis::Throttle, -1.0),
];

/// Size of one command on `axis`: throttle fraction or radians.
pub fn axis_step(axis: ControlAxis, controls: &ControlConfig) -> f64 {
    match axis {
        ControlAxis::Throttle => controls.throttle_step,
        ControlAxis::Pitch => deg_to_rad(controls.pitch_step_deg),
        ControlAxis::Yaw => deg_to_rad(controls.yaw_step_deg),
        ControlAxis::Roll => deg_to_rad(controls.roll_step_deg),
    }
}

fn lookup(token: &str) -> Option<(ControlAxis, f64)> {
    TOKEN_TABLE
        .iter()
        .find(|(name, _, _)| *name == token)
        .map(|&(_, axis, sign)| (axis, sign))
}

/// Parse whitespace-separated tokens into one tick's deltas. Repeated tokens
/// add up; unknown tokens are skipped.
pub fn parse_controls(line: &str, controls: &ControlConfig) -> ControlInput {
    let mut input = ControlInput::default();
    for (axis, sign) in line.split_whitespace().filter_map(lookup) {
        input.nudge(axis, sign * axis_step(axis, controls));
    }
    input
}

/// One line of driver input.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Help,
    Exit,
    Controls(ControlInput),
}

impl Command {
    /// `help` and `exit` only count when they are the whole line; the line
    /// terminator (`\n` or `\r\n`) is ignored.
    pub fn parse(line: &str, controls: &ControlConfig) -> Self {
        let line = line.trim_end_matches('\n').trim_end_matches('\r');
        match line {
            "help" => Command::Help,
            "exit" => Command::Exit,
            other => Command::Controls(parse_controls(other, controls)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_every_alias_maps() {
        let controls = ControlConfig::default();
        let pitch_up = deg_to_rad(0.8);
        for token in ["w", "pitch+", "p+"] {
            assert_relative_eq!(parse_controls(token, &controls).pitch_delta, pitch_up);
        }
        for token in ["s", "pitch-", "p-"] {
            assert_relative_eq!(parse_controls(token, &controls).pitch_delta, -pitch_up);
        }
        for token in ["a", "yaw-", "y-"] {
            assert_relative_eq!(parse_controls(token, &controls).yaw_delta, -deg_to_rad(1.2));
        }
        for token in ["d", "yaw+", "y+"] {
            assert_relative_eq!(parse_controls(token, &controls).yaw_delta, deg_to_rad(1.2));
        }
        for token in ["q", "roll-", "r-"] {
            assert_relative_eq!(parse_controls(token, &controls).roll_delta, -deg_to_rad(1.4));
        }
        for token in ["e", "roll+", "r+"] {
            assert_relative_eq!(parse_controls(token, &controls).roll_delta, deg_to_rad(1.4));
        }
        for token in ["+", "t+", "throttle+"] {
            assert_relative_eq!(parse_controls(token, &controls).throttle_delta, 0.04);
        }
        for token in ["-", "t-", "throttle-"] {
            assert_relative_eq!(parse_controls(token, &controls).throttle_delta, -0.04);
        }
    }

    #[test]
    fn test_tokens_accumulate() {
        let controls = ControlConfig::default();
        let input = parse_controls("w w  p+ + t+ e d y-", &controls);
        assert_relative_eq!(input.pitch_delta, 3.0 * deg_to_rad(0.8), epsilon = 1e-12);
        assert_relative_eq!(input.throttle_delta, 0.08, epsilon = 1e-12);
        assert_relative_eq!(input.roll_delta, deg_to_rad(1.4), epsilon = 1e-12);
        assert_relative_eq!(input.yaw_delta, 0.0, epsilon = 1e-12);
    }

    #[test]
    fn test_unknown_tokens_ignored() {
        let controls = ControlConfig::default();
        assert_eq!(parse_controls("", &controls), ControlInput::default());
        assert_eq!(parse_controls("x W pitch throttle", &controls), ControlInput::default());
        let input = parse_controls("banana w", &controls);
        assert_relative_eq!(input.pitch_delta, deg_to_rad(0.8));
    }

    #[test]
    fn test_custom_step_sizes() {
        let controls = ControlConfig {
            throttle_step: 0.1,
            ..Default::default()
        };
        assert_relative_eq!(parse_controls("+", &controls).throttle_delta, 0.1);
    }

    #[test]
    fn test_commands() {
        let controls = ControlConfig::default();
        assert_eq!(Command::parse("help", &controls), Command::Help);
        assert_eq!(Command::parse("exit\n", &controls), Command::Exit);
        assert_eq!(Command::parse("help\r\n", &controls), Command::Help);
        assert_eq!(
            Command::parse("", &controls),
            Command::Controls(ControlInput::default())
        );
        // Only a bare command word is a command
        assert!(matches!(
            Command::parse("exit w", &controls),
            Command::Controls(_)
        ));
    }

    #[test]
    fn test_padded_command_words_are_controls() {
        let controls = ControlConfig::default();
        for line in ["  exit  ", "help\t", " help", "exit \n"] {
            assert_eq!(
                Command::parse(line, &controls),
                Command::Controls(ControlInput::default()),
                "{line:?} should not be a command"
            );
        }
    }
}
