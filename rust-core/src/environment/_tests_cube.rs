#[cfg(test)]
mod _tests_cube {
    use super::super::cube::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    const IGNORE_FIRST: [bool; 6] = [true, false, false, false, false, false];

    #[test]
    fn test_forward_move_adds_increments() {
        let mut cube = ContinuousCube::default();
        let outcome = cube.step(&[0.1; 6], &CubeAction::Move([0.2; 6]), false);
        assert!(outcome.valid);
        for value in outcome.state {
            assert!((value - 0.3).abs() < 1e-12);
        }
    }

    #[test]
    fn test_ignored_dims_are_untouched_and_zeroed_in_action() {
        let mut cube = ContinuousCube::new(IGNORE_FIRST);
        let outcome = cube.step(&[0.5; 6], &CubeAction::Move([0.25; 6]), false);
        assert!(outcome.valid);
        assert_eq!(outcome.state[0], 0.5);
        assert_eq!(outcome.state[1], 0.75);
        assert_eq!(outcome.action, CubeAction::Move([0.0, 0.25, 0.25, 0.25, 0.25, 0.25]));
    }

    #[test]
    fn test_move_out_of_cube_is_rejected() {
        let mut cube = ContinuousCube::default();
        let state = [0.9; 6];
        let outcome = cube.step(&state, &CubeAction::Move([0.0, 0.0, 0.0, 0.0, 0.0, 0.2]), false);
        assert!(!outcome.valid);
        assert_eq!(outcome.state, state);

        let backward = cube.step(&[0.1; 6], &CubeAction::Move([0.2; 6]), true);
        assert!(!backward.valid);
    }

    #[test]
    fn test_negative_increment_is_rejected() {
        let mut cube = ContinuousCube::default();
        let action = CubeAction::Move([0.1, -0.1, 0.0, 0.0, 0.0, 0.0]);
        let outcome = cube.step(&[0.5; 6], &action, false);
        assert!(!outcome.valid);
    }

    #[test]
    fn test_backward_move_subtracts_increments() {
        let mut cube = ContinuousCube::default();
        let outcome = cube.step(&[0.5; 6], &CubeAction::Move([0.5; 6]), true);
        assert!(outcome.valid);
        assert_eq!(outcome.state, [0.0; 6]);
    }

    #[test]
    fn test_eos_lifecycle() {
        let mut cube = ContinuousCube::default();
        let state = [0.4; 6];
        assert!(cube.step(&state, &CubeAction::Eos, false).valid);
        assert!(cube.is_done());

        // nothing moves forward once done
        assert!(!cube.step(&state, &CubeAction::Eos, false).valid);
        assert!(!cube.step(&state, &CubeAction::Move([0.1; 6]), false).valid);
        assert_eq!(
            cube.mask_invalid_actions_forward(&state),
            ActionMask { moves: true, eos: true }
        );
        assert_eq!(
            cube.mask_invalid_actions_backward(&state),
            ActionMask { moves: true, eos: false }
        );

        assert!(cube.step(&state, &CubeAction::Eos, true).valid);
        assert!(!cube.is_done());
        assert!(!cube.step(&state, &CubeAction::Eos, true).valid);
    }

    #[test]
    fn test_masks_at_boundaries() {
        let cube = ContinuousCube::new(IGNORE_FIRST);
        let source = [0.0; 6];
        assert_eq!(
            cube.mask_invalid_actions_backward(&source),
            ActionMask { moves: true, eos: true }
        );
        assert!(!cube.mask_invalid_actions_forward(&source).moves);

        // only the ignored dimension has room left
        let full = [0.0, 1.0, 1.0, 1.0, 1.0, 1.0];
        assert!(cube.mask_invalid_actions_forward(&full).moves);
    }

    #[test]
    fn test_random_action_stays_inside_cube() {
        let mut cube = ContinuousCube::new(IGNORE_FIRST);
        let mut rng = StdRng::seed_from_u64(7);
        let mut state = [0.0; 6];
        for _ in 0..200 {
            let action = cube.random_action(&state, false, 0.3, &mut rng);
            if let CubeAction::Move(increments) = action {
                assert_eq!(increments[0], 0.0);
                assert!(increments.iter().all(|inc| (0.0..=0.3).contains(inc)));
            }
            let outcome = cube.step(&state, &action, false);
            assert!(outcome.valid);
            state = outcome.state;
        }
        assert!(state.iter().all(|v| (0.0..=1.0).contains(v)));
    }

    #[test]
    fn test_reset_clears_done() {
        let mut cube = ContinuousCube::default();
        cube.step(&[0.0; 6], &CubeAction::Eos, false);
        cube.reset();
        assert!(!cube.is_done());
    }
}
