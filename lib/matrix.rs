//! Dense matrix representations of Pauli operators.
//!
//! These scale as *O*(4<sup>*n*</sup>) and are only meant for checking the
//! symbolic algebra in [`pauli`][crate::pauli] on small systems.

use nalgebra as na;
use num_complex::Complex64 as C64;
use once_cell::sync::Lazy;
use crate::pauli::{ NPauli, Pauli, Phase };

/// A single-qubit identity matrix.
pub static PAULI_I: Lazy<na::DMatrix<C64>> =
    Lazy::new(|| na::DMatrix::identity(2, 2));

/// A single-qubit Pauli *X* matrix.
pub static PAULI_X: Lazy<na::DMatrix<C64>> =
    Lazy::new(|| {
        let mut x = na::DMatrix::zeros(2, 2);
        x[(0, 1)] = C64::from(1.0);
        x[(1, 0)] = C64::from(1.0);
        x
    });

/// A single-qubit Pauli *Y* matrix.
pub static PAULI_Y: Lazy<na::DMatrix<C64>> =
    Lazy::new(|| {
        let mut y = na::DMatrix::zeros(2, 2);
        y[(0, 1)] = -C64::i();
        y[(1, 0)] =  C64::i();
        y
    });

/// A single-qubit Pauli *Z* matrix.
pub static PAULI_Z: Lazy<na::DMatrix<C64>> =
    Lazy::new(|| {
        let mut z = na::DMatrix::zeros(2, 2);
        z[(0, 0)] = C64::from( 1.0);
        z[(1, 1)] = C64::from(-1.0);
        z
    });

impl Pauli {
    /// Get the 2 × 2 matrix for `self`.
    pub fn as_matrix(&self) -> &'static na::DMatrix<C64> {
        match self {
            Self::I => Lazy::force(&PAULI_I),
            Self::X => Lazy::force(&PAULI_X),
            Self::Y => Lazy::force(&PAULI_Y),
            Self::Z => Lazy::force(&PAULI_Z),
        }
    }
}

/// Construct the matrix `phase · P_0 ⊗ P_1 ⊗ ... ⊗ P_{n-1}`.
pub fn string_matrix(phase: Phase, ops: &[Pauli]) -> na::DMatrix<C64> {
    ops.iter()
        .fold(
            na::DMatrix::from_diagonal_element(1, 1, phase.as_complex()),
            |acc, p| acc.kronecker(p.as_matrix()),
        )
}

impl NPauli {
    /// Construct the 2<sup>*n*</sup> × 2<sup>*n*</sup> matrix representation
    /// of `self`, with qubit 0 as the most significant tensor factor.
    pub fn as_matrix(&self) -> na::DMatrix<C64> {
        string_matrix(self.sign.as_phase(), &self.ops)
    }
}
