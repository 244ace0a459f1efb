//! Summary figures shown by the dashboard overview panel.

#[cfg(test)]
#[path = "overview_test.rs"]
mod overview_test;

use inventory::{Movement, Tent, TentState, Unit};

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TentOverview {
    pub total: usize,
    /// Sum of sleeping places over every tent.
    pub capacity: u32,
    pub incomplete: usize,
    /// One entry per condition, in `TentState::ALL` order.
    pub by_state: Vec<(TentState, usize)>,
    /// One entry per unit of the movement, then any other unit still present.
    pub by_unit: Vec<(Unit, usize)>,
}

impl TentOverview {
    #[must_use]
    pub fn compute(movement: Movement, tents: &[Tent]) -> Self {
        let by_state = TentState::ALL
            .into_iter()
            .map(|state| (state, tents.iter().filter(|t| t.state == state).count()))
            .collect();

        let mut units: Vec<Unit> = movement.units().to_vec();
        for tent in tents {
            if !units.contains(&tent.unit) {
                units.push(tent.unit);
            }
        }
        let by_unit = units
            .into_iter()
            .map(|unit| (unit, tents.iter().filter(|t| t.unit == unit).count()))
            .collect();

        Self {
            total: tents.len(),
            capacity: tents.iter().map(|t| u32::from(t.size.places())).sum(),
            incomplete: tents.iter().filter(|t| !t.complete).count(),
            by_state,
            by_unit,
        }
    }
}
