//! The Route Search Engine.

mod a_star;
pub use a_star::{a_star_search, RouteSearch, SearchState};

mod config;
pub use config::SearchConfig;

use crate::Cost;
use ordered_float::OrderedFloat;
use std::cmp::Ordering;

/// Frontier entry: Node, Cost so far, estimated total Cost.
///
/// Ordered so that a [`BinaryHeap`](std::collections::BinaryHeap) pops the lowest estimate first.
#[derive(Debug, PartialEq, Eq)]
pub(crate) struct HeuristicElement<Id>(pub Id, pub OrderedFloat<Cost>, pub OrderedFloat<Cost>);

impl<Id> HeuristicElement<Id> {
    pub fn new(id: Id, cost: Cost, estimate: Cost) -> Self {
        HeuristicElement(id, OrderedFloat(cost), OrderedFloat(estimate))
    }
}

impl<Id: Eq> PartialOrd for HeuristicElement<Id> {
    fn partial_cmp(&self, rhs: &Self) -> Option<Ordering> {
        Some(self.cmp(rhs))
    }
}
impl<Id: Eq> Ord for HeuristicElement<Id> {
    fn cmp(&self, rhs: &Self) -> Ordering {
        rhs.2.cmp(&self.2)
    }
}
