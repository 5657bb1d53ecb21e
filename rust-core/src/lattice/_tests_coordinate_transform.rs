#[cfg(test)]
mod _tests_coordinate_transform {
    use super::super::base_matrix::*;
    use super::super::coordinate_transform::*;
    use super::super::lattice_types::LatticeParameters;
    use crate::config::LOGM_TOLERANCE;
    use crate::error::LatticeError;
    use approx::{assert_abs_diff_eq, assert_relative_eq};
    use nalgebra::Matrix3;

    const TOL: f64 = 1e-4;

    #[test]
    fn test_basis_is_orthogonal() {
        let basis = basis_matrices();
        for i in 0..6 {
            assert_eq!(basis[i], basis[i].transpose());
            for j in (i + 1)..6 {
                let inner = basis[i].component_mul(&basis[j]).sum();
                assert_eq!(inner, 0.0, "B{} . B{}", i + 1, j + 1);
            }
        }
    }

    #[test]
    fn test_coefficients_recovered_from_symmetric_matrix() {
        let k = [0.1, -0.2, 0.3, 0.4, -0.5, 0.6];
        let s = symmetric_from_coefficients(&k);
        let recovered = coefficients_from_symmetric(&s);
        for (expected, actual) in k.iter().zip(recovered.iter()) {
            assert_abs_diff_eq!(expected, actual, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_state_projection_affine_map() {
        let bounds = ProjectionBounds::default();
        assert_eq!(bounds.state_to_projection(&[0.0; 6]), bounds.min);
        assert_eq!(bounds.state_to_projection(&[1.0; 6]), bounds.max);

        let projection = bounds.state_to_projection(&[0.5; 6]);
        assert_eq!(projection, [0.0, 0.0, 0.0, 0.0, 0.0, 2.75]);

        let state = [0.1, 0.25, 0.5, 0.75, 0.9, 0.33];
        let back = bounds.projection_to_state(&bounds.state_to_projection(&state));
        for (expected, actual) in state.iter().zip(back.iter()) {
            assert_abs_diff_eq!(expected, actual, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_bounds_contains() {
        let bounds = ProjectionBounds::default();
        assert!(bounds.contains(&bounds.min));
        assert!(bounds.contains(&bounds.max));
        let mut outside = bounds.max;
        outside[3] += 1e-6;
        assert!(!bounds.contains(&outside));
    }

    #[test]
    fn test_midpoint_projection_maps_to_cubic_cell() {
        // S = 2.75 I, J = exp(5.5) I
        let params = projection_to_lattice(&[0.0, 0.0, 0.0, 0.0, 0.0, 2.75]);
        for length in params.lengths {
            assert_relative_eq!(length, 15.6426, epsilon = TOL);
        }
        for angle in params.angles {
            assert_relative_eq!(angle, 90.0, epsilon = 1e-9);
        }
    }

    #[test]
    fn test_hexagonal_off_diagonal_gives_120_degrees() {
        let params = projection_to_lattice(&[-(3.0_f64).ln() / 4.0, 0.0, 0.0, 0.0, 0.3, 1.0]);
        assert_relative_eq!(params.angles[2], 120.0, epsilon = 1e-9);
        assert_relative_eq!(params.lengths[0], params.lengths[1], epsilon = 1e-12);
    }

    #[test]
    fn test_projection_to_lattice_always_has_positive_volume() {
        let bounds = ProjectionBounds::default();
        for corner in 0..64u32 {
            let state: [f64; 6] = std::array::from_fn(|i| 0.25 + 0.5 * ((corner >> i) & 1) as f64);
            let params = projection_to_lattice(&bounds.state_to_projection(&state));
            assert!(params.volume() > 0.0, "corner {corner}: {params}");
        }
    }

    #[test]
    fn test_lattice_round_trip() {
        let cases = [
            [5.0, 6.0, 7.0, 80.0, 95.0, 105.0],
            [1.5, 300.0, 42.0, 60.0, 110.0, 100.0],
            [3.0, 3.0, 5.0, 90.0, 90.0, 120.0],
            [5.0, 5.0, 5.0, 70.0, 70.0, 70.0],
        ];
        for values in cases {
            let params = LatticeParameters::from_array(values);
            let projection = lattice_to_projection(&params, LOGM_TOLERANCE).unwrap();
            let recovered = projection_to_lattice(&projection).to_array();
            for (expected, actual) in values.iter().zip(recovered.iter()) {
                assert_relative_eq!(expected, actual, epsilon = TOL);
            }
        }
    }

    #[test]
    fn test_impossible_angles_are_not_positive_definite() {
        // gamma > alpha + beta: no real cell has these angles
        let params = LatticeParameters::new([1.0, 1.0, 1.0], [60.0, 60.0, 150.0]);
        assert!(matches!(
            lattice_to_projection(&params, LOGM_TOLERANCE),
            Err(LatticeError::NonPositiveDefinite { .. })
        ));
    }

    #[test]
    fn test_non_physical_parameters_rejected() {
        let params = LatticeParameters::new([-1.0, 1.0, 1.0], [90.0, 90.0, 90.0]);
        assert!(matches!(
            lattice_to_projection(&params, LOGM_TOLERANCE),
            Err(LatticeError::InvalidParameters(_))
        ));
    }

    #[test]
    fn test_zero_tolerance_reports_numeric_instability() {
        let params = LatticeParameters::new([5.0, 6.0, 7.0], [80.0, 95.0, 105.0]);
        assert!(matches!(
            lattice_to_projection(&params, 0.0),
            Err(LatticeError::NumericInstability { tolerance, .. }) if tolerance == 0.0
        ));
    }

    #[test]
    fn test_ill_conditioned_cell_reports_numeric_instability() {
        // Needle-like cell: eigenvalues of the metric span about eight orders of magnitude
        let params = LatticeParameters::new(
            [935.0239, 1.1596, 1.1359],
            [100.5648, 119.5220, 52.2839],
        );
        assert!(matches!(
            lattice_to_projection(&params, LOGM_TOLERANCE),
            Err(LatticeError::NumericInstability { residual, .. }) if residual > LOGM_TOLERANCE
        ));
    }

    #[test]
    fn test_symmetric_from_coefficients_matches_manual_sum() {
        let k = [1.0, 2.0, 3.0, 4.0, 5.0, 6.0];
        let expected = Matrix3::new(
            4.0 + 5.0 + 6.0, 1.0, 2.0,
            1.0, -4.0 + 5.0 + 6.0, 3.0,
            2.0, 3.0, -10.0 + 6.0,
        );
        assert_eq!(symmetric_from_coefficients(&k), expected);
    }
}
