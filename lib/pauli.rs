//! Signed *n*-qubit Pauli operators and the symbolic algebra acting on them.
//!
//! An *n*-qubit Pauli operator is written as a string over the four symbols
//! `I`, `X`, `Y`, `Z` (one per qubit) carrying an overall sign of ±1. Products
//! are computed qubit by qubit from the single-qubit multiplication table,
//! accumulating a phase that is an integer power of **i**. Products of two
//! Hermitian operators that commute carry a phase of ±1, while products of two
//! anticommuting operators carry ±**i** and are rejected, since they are not
//! Hermitian and therefore cannot be stabilizers.
//!
//! # Example
//! ```
//! use fusion_stab::pauli::{ NPauli, anticommutes };
//!
//! let a: NPauli = "+XXI".parse().unwrap();
//! let b: NPauli = "-ZZI".parse().unwrap();
//! assert!(!anticommutes(&a.ops, &b.ops).unwrap());
//!
//! let ab = a.multiply(&b).unwrap();
//! assert_eq!(ab.to_string(), "+YYI");
//! println!("{:#}", ab); // `#` formatter suppresses identities
//! // +YY.
//! ```

use std::{
    fmt,
    ops::{ Add, AddAssign, Mul, MulAssign, Neg },
    str::FromStr,
};
use num_complex::Complex64 as C64;
use rand::Rng;
use crate::{ FusionError, FusionResult };

/// An overall phase factor limited to integer powers of **i**.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Phase {
    /// +1
    Pi0,
    /// +i
    Pi1h,
    /// -1
    Pi,
    /// -i
    Pi3h,
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Self::Pi0 => write!(f, "+1"),
            Self::Pi1h => write!(f, "+i"),
            Self::Pi => write!(f, "-1"),
            Self::Pi3h => write!(f, "-i"),
        }
    }
}

impl Phase {
    /// Convert to the bare exponent on **i**.
    pub fn to_int(&self) -> u8 {
        match self {
            Self::Pi0  => 0,
            Self::Pi1h => 1,
            Self::Pi   => 2,
            Self::Pi3h => 3,
        }
    }

    /// Convert from a bare exponent on **i** (modulo 4).
    pub fn from_int(i: i8) -> Self {
        match i.rem_euclid(4) {
            0 => Self::Pi0,
            1 => Self::Pi1h,
            2 => Self::Pi,
            3 => Self::Pi3h,
            _ => unreachable!(),
        }
    }

    /// Return `true` if `self` is ±1.
    pub fn is_real(&self) -> bool { matches!(self, Self::Pi0 | Self::Pi) }

    pub fn as_complex(self) -> C64 {
        match self {
            Self::Pi0  => 1.0_f64.into(),
            Self::Pi1h => C64::i(),
            Self::Pi   => (-1.0_f64).into(),
            Self::Pi3h => -C64::i(),
        }
    }
}

impl Add for Phase {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self::from_int((self.to_int() + rhs.to_int()) as i8)
    }
}

impl AddAssign for Phase {
    fn add_assign(&mut self, rhs: Self) { *self = *self + rhs; }
}

impl Neg for Phase {
    type Output = Self;

    fn neg(self) -> Self::Output { Self::from_int(-(self.to_int() as i8)) }
}

/// The overall sign of a Hermitian Pauli operator.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Sign {
    /// +1
    #[default]
    Plus,
    /// -1
    Minus,
}

impl fmt::Display for Sign {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Self::Plus => write!(f, "+"),
            Self::Minus => write!(f, "-"),
        }
    }
}

impl Sign {
    /// Convert to `+1` or `-1`.
    pub fn to_int(&self) -> i8 {
        match self {
            Self::Plus => 1,
            Self::Minus => -1,
        }
    }

    /// Convert from `+1` or `-1`, failing on anything else.
    pub fn from_int(i: i8) -> FusionResult<Self> {
        match i {
            1 => Ok(Self::Plus),
            -1 => Ok(Self::Minus),
            _ => Err(FusionError::InvalidSign(i)),
        }
    }

    /// Fold a real phase into a sign, failing if the phase is ±**i**.
    pub fn from_phase(phase: Phase) -> FusionResult<Self> {
        match phase {
            Phase::Pi0 => Ok(Self::Plus),
            Phase::Pi => Ok(Self::Minus),
            _ => Err(FusionError::NonHermitianPhase(phase)),
        }
    }

    pub fn as_phase(self) -> Phase {
        match self {
            Self::Plus => Phase::Pi0,
            Self::Minus => Phase::Pi,
        }
    }
}

impl Neg for Sign {
    type Output = Self;

    fn neg(self) -> Self::Output {
        match self {
            Self::Plus => Self::Minus,
            Self::Minus => Self::Plus,
        }
    }
}

impl Mul for Sign {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        if self == rhs { Self::Plus } else { Self::Minus }
    }
}

impl MulAssign for Sign {
    fn mul_assign(&mut self, rhs: Self) { *self = *self * rhs; }
}

/// A single-qubit Pauli operator.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Pauli {
    /// Identity
    I,
    /// σ<sub>*x*</sub>
    X,
    /// σ<sub>*y*</sub>
    Y,
    /// σ<sub>*z*</sub>
    Z,
}

impl fmt::Display for Pauli {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Self::I => write!(f, "{}", if f.alternate() { "." } else { "I" }),
            _ => write!(f, "{:?}", self),
        }
    }
}

impl TryFrom<char> for Pauli {
    type Error = FusionError;

    fn try_from(c: char) -> Result<Self, Self::Error> {
        match c {
            'I' | '.' => Ok(Self::I),
            'X' => Ok(Self::X),
            'Y' => Ok(Self::Y),
            'Z' => Ok(Self::Z),
            _ => Err(FusionError::InvalidSymbol(c)),
        }
    }
}

impl From<Pauli> for char {
    fn from(p: Pauli) -> Self {
        match p {
            Pauli::I => 'I',
            Pauli::X => 'X',
            Pauli::Y => 'Y',
            Pauli::Z => 'Z',
        }
    }
}

use Pauli::{ I as PI, X as PX, Y as PY, Z as PZ };
use Phase::{ Pi0 as E0, Pi1h as E1, Pi3h as E3 };

// MUL_TABLE[a][b] = (e, c) such that a b = i^e c
const MUL_TABLE: [[(Phase, Pauli); 4]; 4] = [
    [(E0, PI), (E0, PX), (E0, PY), (E0, PZ)],
    [(E0, PX), (E0, PI), (E1, PZ), (E3, PY)],
    [(E0, PY), (E3, PZ), (E0, PI), (E1, PX)],
    [(E0, PZ), (E1, PY), (E3, PX), (E0, PI)],
];

impl Pauli {
    /// All four single-qubit Paulis, in table order.
    pub const ALL: [Self; 4] = [Self::I, Self::X, Self::Y, Self::Z];

    /// Return the product `self · other` as a phase and a single Pauli.
    pub fn product(self, other: Self) -> (Phase, Self) {
        MUL_TABLE[self as usize][other as usize]
    }

    /// Return `true` if `self` and `other` commute.
    pub fn commutes_with(self, other: Self) -> bool {
        match (self, other) {
            (_, Self::I) => true,
            (Self::I, _) => true,
            (a, b) if a == b => true,
            _ => false,
        }
    }

    /// Return `true` if `self` and `other` anticommute.
    pub fn anticommutes_with(self, other: Self) -> bool {
        !self.commutes_with(other)
    }

    fn from_int(u: usize) -> Self {
        match u % 4 {
            0 => Self::I,
            1 => Self::X,
            2 => Self::Y,
            3 => Self::Z,
            _ => unreachable!(),
        }
    }

    /// Sample a uniformly random string of `n` single-qubit Paulis.
    pub fn gen_string<R>(n: usize, rng: &mut R) -> PauliString
    where R: Rng + ?Sized
    {
        (0..n).map(|_| Self::from_int(rng.gen_range(0..4))).collect()
    }
}

/// A bare (unsigned) *n*-qubit Pauli string, e.g. a fusion measurement.
pub type PauliString = Vec<Pauli>;

/// Parse a bare Pauli string such as `"XZI"`.
///
/// Surrounding whitespace is ignored; `.` is accepted for the identity.
pub fn parse_string(s: &str) -> FusionResult<PauliString> {
    s.trim().chars().map(Pauli::try_from).collect()
}

fn check_len(expected: usize, found: usize) -> FusionResult<()> {
    if expected == found {
        Ok(())
    } else {
        Err(FusionError::LengthMismatch { expected, found })
    }
}

/// Multiply two bare Pauli strings qubit by qubit, returning the accumulated
/// phase along with the resulting string.
///
/// Unlike [`multiply`], this never fails on a phase of ±**i**.
pub fn product(p: &[Pauli], q: &[Pauli]) -> FusionResult<(Phase, PauliString)> {
    check_len(p.len(), q.len())?;
    let mut phase = Phase::Pi0;
    let ops: PauliString
        = p.iter().zip(q)
        .map(|(&a, &b)| {
            let (e, c) = a.product(b);
            phase += e;
            c
        })
        .collect();
    Ok((phase, ops))
}

/// Multiply two signed Pauli operators.
///
/// Fails with [`FusionError::LengthMismatch`] if the operators act on
/// different numbers of qubits, and with [`FusionError::NonHermitianPhase`] if
/// the product carries a phase of ±**i** (i.e. `p` and `q` anticommute).
pub fn multiply(p: &NPauli, q: &NPauli) -> FusionResult<NPauli> {
    let (phase, ops) = product(&p.ops, &q.ops)?;
    let sign = p.sign * q.sign * Sign::from_phase(phase)?;
    Ok(NPauli { sign, ops })
}

/// Return `true` if the Pauli strings `p` and `q` anticommute.
///
/// Two strings anticommute iff an odd number of their qubit-wise factors
/// anticommute.
pub fn anticommutes(p: &[Pauli], q: &[Pauli]) -> FusionResult<bool> {
    check_len(p.len(), q.len())?;
    Ok(
        p.iter().zip(q)
            .fold(false, |parity, (&a, &b)| parity ^ a.anticommutes_with(b))
    )
}

/// A single *n*-qubit Pauli operator with a sign.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct NPauli {
    pub sign: Sign,
    pub ops: PauliString,
}

impl fmt::Display for NPauli {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.sign)?;
        self.ops.iter()
            .try_for_each(|p| fmt::Display::fmt(p, f))
    }
}

impl FromStr for NPauli {
    type Err = FusionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let (sign, rest)
            = if let Some(rest) = s.strip_prefix('-') {
                (Sign::Minus, rest)
            } else if let Some(rest) = s.strip_prefix('+') {
                (Sign::Plus, rest)
            } else {
                (Sign::Plus, s)
            };
        Ok(Self { sign, ops: parse_string(rest)? })
    }
}

impl NPauli {
    pub fn new(sign: Sign, ops: PauliString) -> Self { Self { sign, ops } }

    /// The `n`-qubit identity with sign +1.
    pub fn identity(n: usize) -> Self {
        Self { sign: Sign::Plus, ops: vec![Pauli::I; n] }
    }

    /// Sample a random `n`-qubit operator with a random sign.
    pub fn gen<R>(n: usize, rng: &mut R) -> Self
    where R: Rng + ?Sized
    {
        let sign = if rng.gen::<bool>() { Sign::Minus } else { Sign::Plus };
        Self { sign, ops: Pauli::gen_string(n, rng) }
    }

    /// Number of qubits acted on.
    pub fn len(&self) -> usize { self.ops.len() }

    pub fn is_empty(&self) -> bool { self.ops.is_empty() }

    /// Return `true` if every factor is the identity, regardless of sign.
    pub fn is_identity(&self) -> bool {
        self.ops.iter().all(|p| *p == Pauli::I)
    }

    /// Number of non-identity factors.
    pub fn weight(&self) -> usize {
        self.ops.iter().filter(|p| **p != Pauli::I).count()
    }

    /// Compute `self · other`. See [`multiply`].
    pub fn multiply(&self, other: &Self) -> FusionResult<Self> {
        multiply(self, other)
    }

    /// Return `true` if `self` anticommutes with the bare string `other`.
    pub fn anticommutes_with(&self, other: &[Pauli]) -> FusionResult<bool> {
        anticommutes(&self.ops, other)
    }

    /// Return `true` if `self` commutes with the bare string `other`.
    pub fn commutes_with(&self, other: &[Pauli]) -> FusionResult<bool> {
        anticommutes(&self.ops, other).map(|a| !a)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use itertools::Itertools;
    use rand::{ Rng, SeedableRng, rngs::StdRng };

    fn np(s: &str) -> NPauli { s.parse().unwrap() }

    fn ps(s: &str) -> PauliString { parse_string(s).unwrap() }

    #[test]
    fn single_qubit_table() {
        assert_eq!(Pauli::X.product(Pauli::Y), (Phase::Pi1h, Pauli::Z));
        assert_eq!(Pauli::Y.product(Pauli::X), (Phase::Pi3h, Pauli::Z));
        assert_eq!(Pauli::Y.product(Pauli::Z), (Phase::Pi1h, Pauli::X));
        assert_eq!(Pauli::Z.product(Pauli::Y), (Phase::Pi3h, Pauli::X));
        assert_eq!(Pauli::Z.product(Pauli::X), (Phase::Pi1h, Pauli::Y));
        assert_eq!(Pauli::X.product(Pauli::Z), (Phase::Pi3h, Pauli::Y));
        for p in Pauli::ALL {
            assert_eq!(p.product(p), (Phase::Pi0, Pauli::I));
            assert_eq!(Pauli::I.product(p), (Phase::Pi0, p));
            assert_eq!(p.product(Pauli::I), (Phase::Pi0, p));
        }
    }

    #[test]
    fn phase_arithmetic() {
        assert_eq!(Phase::Pi1h + Phase::Pi1h, Phase::Pi);
        assert_eq!(Phase::Pi3h + Phase::Pi1h, Phase::Pi0);
        assert_eq!(-Phase::Pi1h, Phase::Pi3h);
        assert_eq!(Phase::from_int(-1), Phase::Pi3h);
        assert!(Phase::Pi.is_real());
        assert!(!Phase::Pi3h.is_real());
    }

    #[test]
    fn sign_conversions() {
        assert_eq!(Sign::from_int(1), Ok(Sign::Plus));
        assert_eq!(Sign::from_int(-1), Ok(Sign::Minus));
        assert_eq!(Sign::from_int(0), Err(FusionError::InvalidSign(0)));
        assert_eq!(Sign::Minus * Sign::Minus, Sign::Plus);
        assert_eq!(-Sign::Plus, Sign::Minus);
        assert_eq!(Sign::from_phase(Phase::Pi1h), Err(FusionError::NonHermitianPhase(Phase::Pi1h)));
    }

    #[test]
    fn parse_and_display() {
        let p = np("-XIZ");
        assert_eq!(p.sign, Sign::Minus);
        assert_eq!(p.ops, vec![Pauli::X, Pauli::I, Pauli::Z]);
        assert_eq!(p.to_string(), "-XIZ");
        assert_eq!(format!("{:#}", p), "-X.Z");
        assert_eq!(np("YY").to_string(), "+YY");
        assert_eq!(np("+").ops, Vec::<Pauli>::new());
        assert_eq!("+XQ".parse::<NPauli>(), Err(FusionError::InvalidSymbol('Q')));
    }

    #[test]
    fn multiply_signs() {
        assert_eq!(multiply(&np("+XX"), &np("+ZZ")).unwrap(), np("-YY"));
        assert_eq!(multiply(&np("-XXI"), &np("+ZZI")).unwrap(), np("+YYI"));
        assert_eq!(multiply(&np("+IZZ"), &np("+ZZI")).unwrap(), np("+ZIZ"));
        assert_eq!(multiply(&np("-ZY"), &np("-XX")).unwrap(), np("+YZ"));
    }

    #[test]
    fn multiply_length_mismatch() {
        assert_eq!(
            multiply(&np("+XX"), &np("+XXX")),
            Err(FusionError::LengthMismatch { expected: 2, found: 3 }),
        );
        assert_eq!(
            anticommutes(&ps("XYZ"), &ps("X")),
            Err(FusionError::LengthMismatch { expected: 3, found: 1 }),
        );
    }

    #[test]
    fn multiply_non_hermitian() {
        assert_eq!(
            multiply(&np("+X"), &np("+Y")),
            Err(FusionError::NonHermitianPhase(Phase::Pi1h)),
        );
        assert_eq!(
            multiply(&np("+XZI"), &np("+ZZY")),
            Err(FusionError::NonHermitianPhase(Phase::Pi3h)),
        );
    }

    #[test]
    fn anticommutation() {
        assert!(!anticommutes(&ps("XXX"), &ps("XII")).unwrap());
        assert!(!anticommutes(&ps("ZZI"), &ps("IZI")).unwrap());
        assert!(anticommutes(&ps("XXX"), &ps("ZII")).unwrap());
        assert!(!anticommutes(&ps("XX"), &ps("ZZ")).unwrap());
        assert!(!anticommutes(&ps("XY"), &ps("ZZ")).unwrap());
        assert!(!anticommutes(&ps("XYZ"), &ps("ZZZ")).unwrap());
        assert!(anticommutes(&ps("XYZ"), &ps("ZZY")).unwrap());
        assert!(!anticommutes(&ps(""), &ps("")).unwrap());
    }

    #[test]
    fn commutation_symmetry_exhaustive() {
        let strings: Vec<PauliString>
            = (0..2).map(|_| Pauli::ALL).multi_cartesian_product().collect();
        for (a, b) in strings.iter().cartesian_product(strings.iter()) {
            assert_eq!(anticommutes(a, b).unwrap(), anticommutes(b, a).unwrap());
            let pa = NPauli::new(Sign::Plus, a.clone());
            let pb = NPauli::new(Sign::Plus, b.clone());
            // commuting pairs multiply to Hermitian operators, anticommuting
            // pairs never do
            assert_eq!(
                multiply(&pa, &pb).is_ok(),
                !anticommutes(a, b).unwrap(),
            );
        }
    }

    #[test]
    fn closure_identity_involution() {
        let mut rng = StdRng::seed_from_u64(10546);
        for _ in 0..200 {
            let n = rng.gen_range(1..8_usize);
            let p = NPauli::gen(n, &mut rng);
            let q = NPauli::gen(n, &mut rng);
            let id = NPauli::identity(n);

            assert_eq!(multiply(&id, &p).unwrap(), p);
            assert_eq!(multiply(&p, &id).unwrap(), p);
            assert_eq!(multiply(&p, &p).unwrap(), id);

            if !anticommutes(&p.ops, &q.ops).unwrap() {
                let pq = multiply(&p, &q).unwrap();
                assert_eq!(pq.len(), n);
                assert_eq!(multiply(&q, &p).unwrap(), pq);
            }
        }
    }

    #[test]
    fn weight_and_identity() {
        assert_eq!(np("-XIZI").weight(), 2);
        assert!(np("-III").is_identity());
        assert!(!np("+IYI").is_identity());
        assert!(np("+").is_empty());
        assert!(np("+XX").commutes_with(&ps("ZZ")).unwrap());
    }
}
