//! Tools for tracking the stabilizer group of a resource state as fusion
//! measurements are applied to it.
//!
//! States are identified only by a list of generators of their stabilizer
//! group, each a signed *n*-qubit Pauli operator. Measuring a Pauli observable
//! *M* with outcome ±1 either adds ±*M* to the group (if *M* commutes with every
//! generator) or swaps it in for one generator that anticommutes with it,
//! multiplying every other anticommuting generator by the one that was swapped
//! out so that the group stays abelian.
//!
//! # Example
//! ```
//! use fusion_stab::{ NPauli, Outcomes, Sign, parse_string, update };
//!
//! let resource: Vec<NPauli>
//!     = ["+XXX", "+ZZI", "+IZZ"].iter().map(|s| s.parse().unwrap()).collect();
//! let fusions = vec![parse_string("XII").unwrap(), parse_string("IZI").unwrap()];
//! let mut outcomes = Outcomes::new();
//! outcomes.insert(fusions[1].clone(), Sign::Minus);
//!
//! let updated = update(&resource, &fusions, &outcomes).unwrap();
//! let expected: Vec<NPauli>
//!     = ["-IZI", "+XII", "+IZZ"].iter().map(|s| s.parse().unwrap()).collect();
//! assert_eq!(updated, expected);
//! ```

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum FusionError {
    #[error("mismatched Pauli string lengths: expected {expected}, found {found}")]
    LengthMismatch { expected: usize, found: usize },

    #[error("encountered non-Hermitian phase {0} in Pauli product")]
    NonHermitianPhase(pauli::Phase),

    #[error("invalid Pauli symbol {0:?}")]
    InvalidSymbol(char),

    #[error("invalid sign {0}; must be +1 or -1")]
    InvalidSign(i8),
}
pub type FusionResult<T> = Result<T, FusionError>;

pub mod pauli;
pub use pauli::{
    NPauli,
    Pauli,
    PauliString,
    Phase,
    Sign,
    anticommutes,
    multiply,
    parse_string,
};

pub mod matrix;

pub mod update;
pub use update::{ Outcomes, Step, update, update_in_place, update_traced };
