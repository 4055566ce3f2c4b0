use crate::components::{FlightState, Ring};

/// Mark every not-yet-passed ring whose radius contains the aircraft and
/// credit `score_per_ring` for each. Returns the indices passed this call.
pub fn check_ring_passage(
    state: &mut FlightState,
    rings: &mut [Ring],
    score_per_ring: u32,
) -> Vec<usize> {
    let mut passed = Vec::new();

    for (index, ring) in rings.iter_mut().enumerate() {
        if ring.passed || !ring.contains(&state.position) {
            continue;
        }
        ring.passed = true;
        state.score = state.score.saturating_add(score_per_ring);
        passed.push(index);
    }

    passed
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::Vector3;
    use pretty_assertions::assert_eq;

    fn ring_at(x: f64, y: f64, z: f64, radius: f64) -> Ring {
        Ring::new(Vector3::new(x, y, z), radius)
    }

    #[test]
    fn test_ring_passes_once() {
        let mut state = FlightState::default();
        let mut rings = vec![ring_at(0.0, 80.0, 0.0, 50.0)];

        assert_eq!(check_ring_passage(&mut state, &mut rings, 100), vec![0]);
        assert!(rings[0].passed);
        assert_eq!(state.score, 100);

        // Still inside, but already credited
        assert!(check_ring_passage(&mut state, &mut rings, 100).is_empty());
        assert!(rings[0].passed);
        assert_eq!(state.score, 100);
    }

    #[test]
    fn test_multiple_rings_in_one_check() {
        let mut state = FlightState::default();
        let mut rings = vec![
            ring_at(0.0, 80.0, 10.0, 20.0),
            ring_at(500.0, 80.0, 0.0, 20.0),
            ring_at(0.0, 90.0, 0.0, 20.0),
        ];

        assert_eq!(check_ring_passage(&mut state, &mut rings, 100), vec![0, 2]);
        assert_eq!(state.score, 200);
        assert!(!rings[1].passed);
    }

    #[test]
    fn test_out_of_range_ring_untouched() {
        let mut state = FlightState::default();
        let mut rings = vec![ring_at(0.0, 80.0, 320.0, 45.0)];
        assert!(check_ring_passage(&mut state, &mut rings, 100).is_empty());
        assert!(!rings[0].passed);
        assert_eq!(state.score, 0);
    }
}
