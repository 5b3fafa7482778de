//! Updating a resource state's stabilizer generators under fusion
//! measurements.
//!
//! Each measurement *M* is processed in order against the current generator
//! list:
//! - If *M* commutes with every generator, it is appended with the sign of its
//!   outcome.
//! - Otherwise the first anticommuting generator is taken as the pivot and
//!   replaced by *M* (with the outcome's sign), and every other anticommuting
//!   generator is multiplied by the pivot's value from *before* the
//!   replacement. The product of two operators that both anticommute with *M*
//!   commutes with *M*, so afterward every generator but the new one commutes
//!   with *M*.
//!
//! Generators are never removed, so the list grows by exactly the number of
//! measurements that commuted with the whole group.

use itertools::Itertools;
use rustc_hash::FxHashMap;
use tracing::{ debug, trace };
use crate::{
    FusionError,
    FusionResult,
    pauli::{ NPauli, Pauli, PauliString, Sign },
};

/// Observed measurement outcomes, keyed by measurement string.
///
/// Any measurement not present is taken to have outcome +1. Since the map is
/// keyed by the bare string, repeated measurements of the same string in one
/// run all share a single outcome.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Outcomes(FxHashMap<PauliString, Sign>);

impl Outcomes {
    /// Create a new, empty set of outcomes (all +1).
    pub fn new() -> Self { Self::default() }

    /// Record the outcome of a measurement, returning any previous value.
    pub fn insert(&mut self, meas: PauliString, outcome: Sign) -> Option<Sign> {
        self.0.insert(meas, outcome)
    }

    /// Look up the outcome of a measurement, defaulting to +1.
    pub fn get(&self, meas: &[Pauli]) -> Sign {
        self.0.get(meas).copied().unwrap_or(Sign::Plus)
    }

    pub fn len(&self) -> usize { self.0.len() }

    pub fn is_empty(&self) -> bool { self.0.is_empty() }
}

impl FromIterator<(PauliString, Sign)> for Outcomes {
    fn from_iter<I>(iter: I) -> Self
    where I: IntoIterator<Item = (PauliString, Sign)>
    {
        Self(iter.into_iter().collect())
    }
}

/// Record of how a single measurement changed the generator list, produced
/// by [`update_traced`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Step {
    /// The measurement commuted with every generator and was appended at
    /// `index`.
    Appended { index: usize },
    /// The measurement replaced the generator at `pivot`; the generators at
    /// `corrected` were multiplied by the old pivot.
    Pivoted { pivot: usize, corrected: Vec<usize> },
}

impl Step {
    /// Return `true` if `self` is `Appended`.
    pub fn is_appended(&self) -> bool { matches!(self, Self::Appended { .. }) }

    /// Return `true` if `self` is `Pivoted`.
    pub fn is_pivoted(&self) -> bool { matches!(self, Self::Pivoted { .. }) }
}

/// Infer the qubit count from the first generator, or the first measurement
/// if there are no generators, or zero if there is neither.
pub fn qubit_count(generators: &[NPauli], measurements: &[PauliString])
    -> usize
{
    generators.first().map(|g| g.len())
        .or_else(|| measurements.first().map(|m| m.len()))
        .unwrap_or(0)
}

// apply a single measurement to `gens` in place
fn apply_fusion(gens: &mut Vec<NPauli>, meas: &[Pauli], outcome: Sign)
    -> FusionResult<Step>
{
    let anti: Vec<usize>
        = gens.iter()
        .map(|g| g.anticommutes_with(meas))
        .collect::<FusionResult<Vec<bool>>>()?
        .into_iter()
        .positions(|a| a)
        .collect();

    let Some((&pivot, rest)) = anti.split_first() else {
        gens.push(NPauli::new(outcome, meas.to_vec()));
        debug!(
            measurement = %meas.iter().join(""),
            %outcome,
            index = gens.len() - 1,
            "measurement commutes with group; appended"
        );
        return Ok(Step::Appended { index: gens.len() - 1 });
    };

    let old_pivot
        = std::mem::replace(&mut gens[pivot], NPauli::new(outcome, meas.to_vec()));
    for &j in rest.iter() {
        let corrected = gens[j].multiply(&old_pivot)?;
        trace!(index = j, from = %gens[j], to = %corrected, "corrected generator");
        gens[j] = corrected;
    }
    debug!(
        measurement = %meas.iter().join(""),
        %outcome,
        pivot,
        %old_pivot,
        num_corrected = rest.len(),
        "measurement replaced pivot"
    );
    Ok(Step::Pivoted { pivot, corrected: rest.to_vec() })
}

/// Like [`update`], but also return a [`Step`] for every measurement.
pub fn update_traced(
    generators: &[NPauli],
    measurements: &[PauliString],
    outcomes: &Outcomes,
) -> FusionResult<(Vec<NPauli>, Vec<Step>)>
{
    let n = qubit_count(generators, measurements);
    if let Some(m) = measurements.iter().find(|m| m.len() != n) {
        return Err(FusionError::LengthMismatch { expected: n, found: m.len() });
    }
    let mut gens: Vec<NPauli> = generators.to_vec();
    let steps: Vec<Step>
        = measurements.iter()
        .map(|m| apply_fusion(&mut gens, m, outcomes.get(m)))
        .collect::<FusionResult<Vec<Step>>>()?;
    Ok((gens, steps))
}

/// Apply a sequence of fusion measurements to a list of stabilizer
/// generators, returning the updated list.
///
/// `generators` is left untouched. Fails with
/// [`FusionError::LengthMismatch`] if any measurement (or generator) does not
/// match the qubit count inferred by [`qubit_count`], and with
/// [`FusionError::NonHermitianPhase`] if two generators that both
/// anticommute with a measurement also anticommute with each other. This can
/// only happen when the input generators do not commute, but a non-abelian
/// input is not always detected.
pub fn update(
    generators: &[NPauli],
    measurements: &[PauliString],
    outcomes: &Outcomes,
) -> FusionResult<Vec<NPauli>>
{
    update_traced(generators, measurements, outcomes).map(|(gens, _)| gens)
}

/// Like [`update`], but overwriting `generators` with the result.
///
/// On error, `generators` is left as it was.
pub fn update_in_place(
    generators: &mut Vec<NPauli>,
    measurements: &[PauliString],
    outcomes: &Outcomes,
) -> FusionResult<()>
{
    *generators = update(generators, measurements, outcomes)?;
    Ok(())
}
