use crate::node::{NONE, Slot};

/// Collapse a parent chain into the fewest waypoints that keep every
/// segment in sight.
///
/// From the current waypoint (initially `goal`), climb the parent chain and
/// remember the last ancestor `sees` still reports as visible. At the first
/// hidden ancestor, that remembered one becomes the next waypoint and the
/// climb resumes from it. Once the rest of the chain is visible the walk
/// stops: the chain's root (the search start) is never emitted.
///
/// Returns slots in root-to-goal order, `goal` last.
pub(crate) fn compress(goal: Slot, parents: &[Slot], sees: impl Fn(Slot, Slot) -> bool) -> Vec<Slot> {
    let mut out = vec![goal];
    let mut current = goal;

    loop {
        let first = parents[current];
        if first == NONE {
            break;
        }
        let mut last_visible = first;
        let mut cursor = first;
        let mut hidden = false;
        while cursor != NONE {
            if !sees(current, cursor) {
                hidden = true;
                break;
            }
            last_visible = cursor;
            cursor = parents[cursor];
        }
        if !hidden {
            break;
        }
        out.push(last_visible);
        current = last_visible;
    }

    out.reverse();
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Chain 0 <- 1 <- 2 <- ... <- n-1, rooted at 0.
    fn chain(n: usize) -> Vec<Slot> {
        (0..n).map(|i| if i == 0 { NONE } else { i - 1 }).collect()
    }

    #[test]
    fn fully_visible_chain_keeps_only_goal() {
        let parents = chain(5);
        assert_eq!(compress(4, &parents, |_, _| true), vec![4]);
    }

    #[test]
    fn root_alone() {
        assert_eq!(compress(0, &chain(1), |_, _| false), vec![0]);
    }

    #[test]
    fn neighbours_only_keeps_every_inner_node() {
        let parents = chain(5);
        let sees = |a: Slot, b: Slot| a.abs_diff(b) <= 1;
        assert_eq!(compress(4, &parents, sees), vec![1, 2, 3, 4]);
    }

    #[test]
    fn skips_to_deepest_visible_ancestor() {
        // 7 sees back to 4, 4 sees back to the root.
        let parents = chain(8);
        let sees = |a: Slot, b: Slot| {
            let (hi, lo) = (a.max(b), a.min(b));
            (hi >= 4 && lo >= 4) || hi <= 4
        };
        assert_eq!(compress(7, &parents, sees), vec![4, 7]);
    }

    #[test]
    fn hidden_parent_is_still_committed() {
        let parents = chain(3);
        assert_eq!(compress(2, &parents, |_, _| false), vec![0, 1, 2]);
    }

    #[test]
    fn follows_parents_not_slot_order() {
        // Root 3 <- 0 <- 2 <- 1 (goal).
        let parents = vec![3, 2, 0, NONE];
        let sees = |a: Slot, b: Slot| !matches!((a.min(b), a.max(b)), (1, 3) | (0, 1));
        assert_eq!(compress(1, &parents, sees), vec![2, 1]);
    }
}
