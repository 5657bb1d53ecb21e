use std::fmt;
use std::str::FromStr;

use nalgebra::Matrix3;
use serde::{Deserialize, Serialize};

use crate::error::LatticeError;
use crate::interfaces::N_DIM;
use crate::Result;

/// The seven 3D lattice systems.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum LatticeSystem {
    Triclinic,
    Monoclinic,
    Orthorhombic,
    Tetragonal,
    Hexagonal,
    Rhombohedral,
    Cubic,
}

impl LatticeSystem {
    pub const ALL: [LatticeSystem; 7] = [
        LatticeSystem::Triclinic,
        LatticeSystem::Monoclinic,
        LatticeSystem::Orthorhombic,
        LatticeSystem::Tetragonal,
        LatticeSystem::Hexagonal,
        LatticeSystem::Rhombohedral,
        LatticeSystem::Cubic,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            LatticeSystem::Triclinic => "triclinic",
            LatticeSystem::Monoclinic => "monoclinic",
            LatticeSystem::Orthorhombic => "orthorhombic",
            LatticeSystem::Tetragonal => "tetragonal",
            LatticeSystem::Hexagonal => "hexagonal",
            LatticeSystem::Rhombohedral => "rhombohedral",
            LatticeSystem::Cubic => "cubic",
        }
    }
}

impl fmt::Display for LatticeSystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for LatticeSystem {
    type Err = LatticeError;

    fn from_str(s: &str) -> Result<Self> {
        let needle = s.trim().to_ascii_lowercase();
        LatticeSystem::ALL
            .into_iter()
            .find(|system| system.name() == needle)
            .ok_or_else(|| LatticeError::InvalidLatticeSystem(s.to_string()))
    }
}

/// Edge lengths (Angstrom) and angles (degrees) of a unit cell.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LatticeParameters {
    /// a, b, c
    pub lengths: [f64; 3],
    /// alpha, beta, gamma
    pub angles: [f64; 3],
}

impl LatticeParameters {
    pub fn new(lengths: [f64; 3], angles: [f64; 3]) -> Self {
        Self { lengths, angles }
    }

    pub fn from_array(values: [f64; N_DIM]) -> Self {
        let [a, b, c, alpha, beta, gamma] = values;
        Self::new([a, b, c], [alpha, beta, gamma])
    }

    /// Builds parameters either from a full sextuple or from separate lengths
    /// and angles. The sextuple wins when both are given.
    pub fn from_parts(
        parameters: Option<[f64; N_DIM]>,
        lengths: Option<[f64; 3]>,
        angles: Option<[f64; 3]>,
    ) -> Result<Self> {
        match (parameters, lengths, angles) {
            (Some(values), _, _) => Ok(Self::from_array(values)),
            (None, Some(lengths), Some(angles)) => Ok(Self::new(lengths, angles)),
            _ => Err(LatticeError::MissingParameters),
        }
    }

    pub fn to_array(&self) -> [f64; N_DIM] {
        let [a, b, c] = self.lengths;
        let [alpha, beta, gamma] = self.angles;
        [a, b, c, alpha, beta, gamma]
    }

    /// Rejects values that cannot describe a unit cell: non-finite entries,
    /// non-positive lengths and angles outside (0, 180) degrees.
    pub fn check_physical(&self) -> Result<()> {
        if self.to_array().iter().any(|v| !v.is_finite()) {
            return Err(LatticeError::InvalidParameters(format!(
                "non-finite value in {self}"
            )));
        }
        if self.lengths.iter().any(|&l| l <= 0.0) {
            return Err(LatticeError::InvalidParameters(format!(
                "lengths must be strictly positive, got {:?}",
                self.lengths
            )));
        }
        if self.angles.iter().any(|&angle| angle <= 0.0 || angle >= 180.0) {
            return Err(LatticeError::InvalidParameters(format!(
                "angles must lie in (0, 180) degrees, got {:?}",
                self.angles
            )));
        }
        Ok(())
    }

    /// Metric tensor G with G_ii = |a_i|^2 and G_ij = |a_i||a_j| cos(angle_ij).
    pub fn metric_tensor(&self) -> Matrix3<f64> {
        let [a, b, c] = self.lengths;
        let [alpha, beta, gamma] = self.angles;

        let ab_cos_gamma = a * b * gamma.to_radians().cos();
        let ac_cos_beta = a * c * beta.to_radians().cos();
        let bc_cos_alpha = b * c * alpha.to_radians().cos();

        Matrix3::new(
            a * a, ab_cos_gamma, ac_cos_beta,
            ab_cos_gamma, b * b, bc_cos_alpha,
            ac_cos_beta, bc_cos_alpha, c * c,
        )
    }

    /// Unit cell volume sqrt(det G). NaN when the parameters describe no real cell.
    pub fn volume(&self) -> f64 {
        self.metric_tensor().determinant().sqrt()
    }
}

impl fmt::Display for LatticeParameters {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [a, b, c] = self.lengths;
        let [alpha, beta, gamma] = self.angles;
        write!(
            f,
            "({a:?}, {b:?}, {c:?}), ({alpha:?}, {beta:?}, {gamma:?})"
        )
    }
}

/// Identify the most symmetric lattice system compatible with a set of parameters.
pub fn identify_lattice_system(params: &LatticeParameters, tol: f64) -> LatticeSystem {
    let [a, b, c] = params.lengths;
    let [alpha, beta, gamma] = params.angles;

    // Check length relationships
    let a_eq_b = approx_equal(a, b, tol);
    let b_eq_c = approx_equal(b, c, tol);
    let all_equal = a_eq_b && b_eq_c;

    // Check angle relationships
    let alpha_90 = approx_equal(alpha, 90.0, tol);
    let beta_90 = approx_equal(beta, 90.0, tol);
    let gamma_90 = approx_equal(gamma, 90.0, tol);
    let all_90 = alpha_90 && beta_90 && gamma_90;
    let gamma_120 = approx_equal(gamma, 120.0, tol);
    let angles_equal = approx_equal(alpha, beta, tol) && approx_equal(beta, gamma, tol);

    match (all_equal, a_eq_b, all_90) {
        // Cubic: a = b = c, α = β = γ = 90°
        (true, _, true) => LatticeSystem::Cubic,

        // Rhombohedral: a = b = c, α = β = γ ≠ 90°
        (true, _, false) if angles_equal => LatticeSystem::Rhombohedral,

        // Tetragonal: a = b ≠ c, α = β = γ = 90°
        (false, true, true) => LatticeSystem::Tetragonal,

        // Hexagonal: a = b, α = β = 90°, γ = 120°
        (_, true, false) if alpha_90 && beta_90 && gamma_120 => LatticeSystem::Hexagonal,

        // Orthorhombic: α = β = γ = 90°
        (_, _, true) => LatticeSystem::Orthorhombic,

        // Monoclinic: α = γ = 90° ≠ β
        _ if alpha_90 && gamma_90 => LatticeSystem::Monoclinic,

        _ => LatticeSystem::Triclinic,
    }
}

/// Check if two values are approximately equal within tolerance
pub fn approx_equal(a: f64, b: f64, tol: f64) -> bool {
    (a - b).abs() < tol
}
