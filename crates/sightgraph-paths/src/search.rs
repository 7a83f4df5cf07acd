//! Best-first search over a query [`Overlay`].
//!
//! OPEN is a plain insertion-ordered list that is re-scanned on every
//! iteration, so improving a node already in OPEN only needs an in-place
//! update. Ties on `home_dist + estimate` go to the earliest OPEN entry.

use crate::config::CostMetric;
use crate::node::{NONE, Slot};
use crate::overlay::Overlay;

/// Outcome of a successful search: the parent of every slot (or [`NONE`]).
#[derive(Debug)]
pub(crate) struct SearchTree {
    pub(crate) parents: Vec<Slot>,
    pub(crate) expanded: usize,
}

/// Search from `start` to `goal`. Returns `None` when OPEN runs dry.
pub(crate) fn best_first(
    view: &Overlay<'_>,
    start: Slot,
    goal: Slot,
    metric: CostMetric,
) -> Option<SearchTree> {
    let n = view.len();
    let mut home_dist = vec![0.0_f64; n];
    let mut parents = vec![NONE; n];
    let mut in_open = vec![false; n];
    let mut closed = vec![false; n];
    let goal_cell = view.cell(goal);

    let mut open: Vec<Slot> = vec![start];
    in_open[start] = true;
    let mut expanded = 0;

    while !open.is_empty() {
        let mut best = 0;
        let mut best_score = f64::INFINITY;
        for (i, &slot) in open.iter().enumerate() {
            let score = home_dist[slot] + metric.cost(view.cell(slot), goal_cell);
            if i == 0 || score < best_score {
                best = i;
                best_score = score;
            }
        }

        let current = open.remove(best);
        if current == goal {
            return Some(SearchTree { parents, expanded });
        }
        in_open[current] = false;
        closed[current] = true;
        expanded += 1;

        let current_cell = view.cell(current);
        for next in view.neighbors(current) {
            if closed[next] {
                continue;
            }
            let candidate = home_dist[current] + metric.cost(current_cell, view.cell(next));
            if !in_open[next] {
                open.push(next);
                in_open[next] = true;
            } else if candidate >= home_dist[next] {
                continue;
            }
            parents[next] = current;
            home_dist[next] = candidate;
        }
    }

    None
}
