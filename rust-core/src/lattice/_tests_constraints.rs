#[cfg(test)]
mod _tests_constraints {
    use super::super::constraints::*;
    use super::super::lattice_types::LatticeSystem;
    use crate::error::LatticeError;
    use crate::interfaces::Space;

    const RAW: [f64; 6] = [0.3, -0.7, 1.1, 2.5, -1.25, 4.0];

    #[test]
    fn test_triclinic_is_unconstrained() {
        let table = ConstraintTable::for_system(LatticeSystem::Triclinic);
        assert_eq!(table.ignored_dims, [false; 6]);
        assert_eq!(table.projection, SpaceConstraints::unconstrained(Space::Projection));
        assert_eq!(table.lattice.apply(&RAW), RAW);
        assert_eq!(table.projection.apply(&RAW), RAW);
    }

    #[test]
    fn test_ignored_dims_table() {
        let expected = [
            (LatticeSystem::Monoclinic, [true, false, true, false, false, false]),
            (LatticeSystem::Orthorhombic, [true, true, true, false, false, false]),
            (LatticeSystem::Tetragonal, [true, true, true, true, false, false]),
            (LatticeSystem::Hexagonal, [true, true, true, true, false, false]),
            (LatticeSystem::Rhombohedral, [false, true, true, true, true, false]),
            (LatticeSystem::Cubic, [true, true, true, true, true, false]),
        ];
        for (system, ignored) in expected {
            assert_eq!(ConstraintTable::for_system(system).ignored_dims, ignored, "{system}");
        }
    }

    #[test]
    fn test_hexagonal_projection_fixes_gamma_coefficient() {
        let table = ConstraintTable::for_system(LatticeSystem::Hexagonal);
        let projected = table.projection.apply(&RAW);
        assert_eq!(projected[0], -(3.0_f64).ln() / 4.0);
        assert_eq!(&projected[1..4], &[0.0, 0.0, 0.0]);
        assert_eq!(&projected[4..], &RAW[4..]);

        let lattice = table.lattice.apply(&[3.0, 7.0, 5.0, 10.0, 20.0, 30.0]);
        assert_eq!(lattice, [3.0, 3.0, 5.0, 90.0, 90.0, 120.0]);
    }

    #[test]
    fn test_rhombohedral_ties() {
        let table = ConstraintTable::for_system(LatticeSystem::Rhombohedral);
        let projected = table.projection.apply(&RAW);
        assert_eq!(projected, [0.3, 0.3, 0.3, 0.0, 0.0, 4.0]);

        let lattice = table.lattice.apply(&[5.0, 6.0, 7.0, 70.0, 80.0, 85.0]);
        assert_eq!(lattice, [5.0, 5.0, 5.0, 70.0, 70.0, 70.0]);
    }

    #[test]
    fn test_fixed_takes_precedence_over_tied() {
        let constraints = SpaceConstraints::new(
            Space::LatticeParameters,
            [None, Some(2.0), None, None, None, None],
            [None, Some(0), Some(1), None, None, None],
        )
        .unwrap();
        assert_eq!(constraints.dims()[1], DimensionConstraint::Fixed(2.0));
        // dimension 2 follows the resolved (fixed) value of dimension 1
        assert_eq!(constraints.apply(&RAW)[..3], [0.3, 2.0, 2.0]);
        assert_eq!(constraints.tied_values(), [None, None, Some(1), None, None, None]);
    }

    #[test]
    fn test_forward_tie_is_rejected() {
        let result = SpaceConstraints::new(
            Space::Projection,
            [None; 6],
            [None, None, Some(4), None, None, None],
        );
        assert!(matches!(
            result,
            Err(LatticeError::InvalidConstraint { index: 2, target: 4, .. })
        ));

        let self_tie = SpaceConstraints::new(
            Space::Projection,
            [None; 6],
            [Some(0), None, None, None, None, None],
        );
        assert!(self_tie.is_err());
    }

    #[test]
    fn test_apply_is_idempotent() {
        for system in LatticeSystem::ALL {
            let table = ConstraintTable::for_system(system);
            for constraints in [table.projection, table.lattice] {
                let once = constraints.apply(&RAW);
                assert_eq!(constraints.apply(&once), once, "{system}");
                assert!(constraints.is_satisfied_by(&once, 0.0));
            }
        }
    }

    #[test]
    fn test_fixed_values_accessor() {
        let table = ConstraintTable::for_system(LatticeSystem::Monoclinic);
        assert_eq!(
            table.projection.fixed_values(),
            [Some(0.0), None, Some(0.0), None, None, None]
        );
        assert_eq!(
            table.lattice.fixed_values(),
            [None, None, None, Some(90.0), None, Some(90.0)]
        );
        assert_eq!(table.lattice.tied_values(), [None; 6]);
    }

    #[test]
    fn test_display_lists_every_dimension() {
        let rendered = ConstraintTable::for_system(LatticeSystem::Cubic).to_string();
        assert!(rendered.starts_with("lattice system: cubic"));
        assert!(rendered.contains("tied to a"));
        assert_eq!(rendered.lines().count(), 8);
    }
}
