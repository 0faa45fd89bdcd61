#[cfg(test)]
#[path = "../../tests/unit/models/solution_test.rs"]
mod solution_test;

use crate::models::{Cost, Instance};
use crate::utils::GenericResult;

/// A feasible selection of items. Keeps a per constraint load and the objective value in sync
/// with the selection, so both are never recomputed from scratch.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Solution {
    selection: Vec<bool>,
    load: Vec<u8>,
    saturated: usize,
    cost: Cost,
}

impl Solution {
    /// Creates an empty solution for the instance.
    pub fn empty(instance: &Instance) -> Self {
        Self { selection: vec![false; instance.items()], load: vec![0; instance.constraints()], saturated: 0, cost: 0 }
    }

    /// Creates a solution with given items selected. Fails if an item is unknown, duplicated or
    /// the selection violates a constraint.
    pub fn with_items(instance: &Instance, items: &[usize]) -> GenericResult<Self> {
        items.iter().try_fold(Self::empty(instance), |mut solution, &item| {
            if item >= instance.items() {
                return Err(format!("unknown item: {item}").into());
            }

            if solution.is_selected(item) {
                return Err(format!("item {item} is selected twice").into());
            }

            if !solution.can_add(instance, item) {
                return Err(format!("item {item} violates capacity of a constraint").into());
            }

            solution.add(instance, item);

            Ok(solution)
        })
    }

    /// Returns the objective value: a total weight of selected items.
    pub fn cost(&self) -> Cost {
        self.cost
    }

    /// Returns selection flags indexed by item.
    pub fn selection(&self) -> &[bool] {
        self.selection.as_slice()
    }

    /// Returns loads indexed by constraint.
    pub fn load(&self) -> &[u8] {
        self.load.as_slice()
    }

    /// Returns true if the item is selected.
    pub fn is_selected(&self, item: usize) -> bool {
        self.selection[item]
    }

    /// Returns indices of selected items in increasing order.
    pub fn selected(&self) -> impl Iterator<Item = usize> + '_ {
        self.selection.iter().enumerate().filter(|(_, is_selected)| **is_selected).map(|(item, _)| item)
    }

    /// Returns true if every constraint is used at its capacity.
    pub fn is_saturated(&self) -> bool {
        self.saturated == self.load.len()
    }

    /// Returns true if the item is not selected and all its constraints are free.
    pub fn can_add(&self, instance: &Instance, item: usize) -> bool {
        !self.selection[item] && instance.item_constraints(item).iter().all(|&constraint| self.load[constraint] == 0)
    }

    /// Returns true if the item would fit once the `removed` item is taken out of the selection.
    pub fn fits_without(&self, instance: &Instance, item: usize, removed: usize) -> bool {
        !self.selection[item]
            && instance
                .item_constraints(item)
                .iter()
                .all(|&constraint| self.load[constraint] == 0 || instance.consumes(constraint, removed))
    }

    /// Selects the item. The caller ensures that the item fits.
    pub fn add(&mut self, instance: &Instance, item: usize) {
        debug_assert!(self.can_add(instance, item));

        instance.item_constraints(item).iter().for_each(|&constraint| {
            self.load[constraint] += 1;
            self.saturated += 1;
        });
        self.selection[item] = true;
        self.cost += instance.weight(item);
    }

    /// Removes the selected item.
    pub fn remove(&mut self, instance: &Instance, item: usize) {
        debug_assert!(self.selection[item]);

        instance.item_constraints(item).iter().for_each(|&constraint| {
            self.load[constraint] -= 1;
            self.saturated -= 1;
        });
        self.selection[item] = false;
        self.cost -= instance.weight(item);
    }

    /// Checks feasibility and consistency of cached values by recomputing them from the selection.
    pub fn is_feasible(&self, instance: &Instance) -> bool {
        let mut load = vec![0_usize; instance.constraints()];
        self.selected().flat_map(|item| instance.item_constraints(item).iter()).for_each(|&c| load[c] += 1);

        let cost = self.selected().map(|item| instance.weight(item)).sum::<Cost>();

        load.iter().all(|&value| value <= 1)
            && load.iter().zip(self.load.iter()).all(|(&actual, &cached)| actual == cached as usize)
            && cost == self.cost
    }
}
