use derive_more::Deref;
use uuid::Uuid;

use crate::{RIR, RPE, Reps, ShortName, Weight};

/// Estimates the one rep max of a set.
///
/// Reps in reserve are added to the performed reps before applying the Brzycki formula, so
/// a single at RPE 10 yields the lifted weight. The result is rounded to whole pounds.
#[must_use]
pub fn estimate_one_rep_max(weight: Weight, reps: Reps, rpe: RPE) -> f32 {
    let effective_reps = f32::from(reps) + f32::from(RIR::from(rpe));
    (f32::from(weight) * 36.0 / (37.0 - effective_reps)).round()
}

#[derive(Debug, Clone, PartialEq)]
pub struct OneRepMaxEntry {
    pub id: OneRepMaxID,
    pub short_name: ShortName,
    pub weight: Weight,
    pub reps: Reps,
    pub rpe: RPE,
    pub one_rm: f32,
}

impl OneRepMaxEntry {
    #[must_use]
    pub fn new(
        id: OneRepMaxID,
        short_name: ShortName,
        weight: Weight,
        reps: Reps,
        rpe: RPE,
    ) -> Self {
        Self {
            id,
            short_name,
            weight,
            reps,
            rpe,
            one_rm: estimate_one_rep_max(weight, reps, rpe),
        }
    }

    pub fn apply(&mut self, field: WorkoutField) {
        match field {
            WorkoutField::ShortName(short_name) => self.short_name = short_name,
            WorkoutField::Weight(weight) => self.weight = weight,
            WorkoutField::Reps(reps) => self.reps = reps,
            WorkoutField::RPE(rpe) => self.rpe = rpe,
        }
    }

    /// Returns true if the estimate changed.
    pub fn recompute(&mut self) -> bool {
        let one_rm = estimate_one_rep_max(self.weight, self.reps, self.rpe);
        #[allow(clippy::float_cmp)]
        let changed = one_rm != self.one_rm;
        self.one_rm = one_rm;
        changed
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum WorkoutField {
    ShortName(ShortName),
    Weight(Weight),
    Reps(Reps),
    RPE(RPE),
}

#[derive(Deref, Debug, Default, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct OneRepMaxID(Uuid);

impl OneRepMaxID {
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    #[must_use]
    pub fn nil() -> Self {
        Self(Uuid::nil())
    }

    #[must_use]
    pub fn is_nil(&self) -> bool {
        self.0.is_nil()
    }
}

impl From<Uuid> for OneRepMaxID {
    fn from(value: Uuid) -> Self {
        Self(value)
    }
}

impl From<u128> for OneRepMaxID {
    fn from(value: u128) -> Self {
        Self(Uuid::from_bytes(value.to_be_bytes()))
    }
}
