//! This module implements a variant of
//! [pathfinding's astar function](https://docs.rs/pathfinding/latest/pathfinding/directed/astar/index.html)
//! with an explicit closed set and an expansion counter. All bookkeeping lives in locals, so
//! concurrent searches never share state.
use fxhash::{FxBuildHasher, FxHashSet};
use indexmap::map::Entry::{Occupied, Vacant};
use indexmap::IndexMap;
use log::trace;
use num_traits::Zero;
use std::cmp::Ordering;
use std::collections::BinaryHeap;
use std::hash::Hash;

type FxIndexMap<K, V> = IndexMap<K, V, FxBuildHasher>;

struct SmallestCostHolder<K> {
    estimated_cost: K,
    cost: K,
    index: usize,
}

impl<K: PartialEq> Eq for SmallestCostHolder<K> {}

impl<K: PartialEq> PartialEq for SmallestCostHolder<K> {
    fn eq(&self, other: &Self) -> bool {
        self.estimated_cost.eq(&other.estimated_cost)
            && self.cost.eq(&other.cost)
            && self.index == other.index
    }
}

impl<K: Ord> PartialOrd for SmallestCostHolder<K> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<K: Ord> Ord for SmallestCostHolder<K> {
    fn cmp(&self, other: &Self) -> Ordering {
        // First orders per estimated cost, then favours the node that is furthest along.
        // Remaining ties go to the node discovered first, which keeps the order total.
        other
            .estimated_cost
            .cmp(&self.estimated_cost)
            .then_with(|| self.cost.cmp(&other.cost))
            .then_with(|| other.index.cmp(&self.index))
    }
}

fn reverse_path<N, V, F>(parents: &FxIndexMap<N, V>, mut parent: F, start: usize) -> Vec<N>
where
    N: Eq + Hash + Clone,
    F: FnMut(&V) -> usize,
{
    let mut i = start;
    let mut path: Vec<N> = std::iter::from_fn(|| {
        parents.get_index(i).map(|(node, value)| {
            i = parent(value);
            node.clone()
        })
    })
    .collect();
    path.reverse();
    path
}

/// What a single [astar] run produced.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AstarResult<N, C> {
    /// The path from the start to the first node accepted by `success`, and its cost.
    pub found: Option<(Vec<N>, C)>,
    /// Number of nodes moved into the closed set.
    pub expanded: usize,
}

/// Best-first search from `start` until a node satisfying `success` is selected.
///
/// `successors` yields neighbours with their (positive) move cost and `heuristic` must not
/// overestimate the remaining cost for the returned path to be optimal. Stale heap entries
/// are discarded lazily instead of being decreased in place.
pub fn astar<N, C, FN, IN, FH, FS>(
    start: &N,
    mut successors: FN,
    mut heuristic: FH,
    mut success: FS,
) -> AstarResult<N, C>
where
    N: Eq + Hash + Clone,
    C: Zero + Ord + Copy,
    FN: FnMut(&N) -> IN,
    IN: IntoIterator<Item = (N, C)>,
    FH: FnMut(&N) -> C,
    FS: FnMut(&N) -> bool,
{
    let mut to_see = BinaryHeap::new();
    to_see.push(SmallestCostHolder {
        estimated_cost: heuristic(start),
        cost: Zero::zero(),
        index: 0,
    });
    let mut parents: FxIndexMap<N, (usize, C)> = FxIndexMap::default();
    parents.insert(start.clone(), (usize::MAX, Zero::zero()));
    let mut closed: FxHashSet<usize> = FxHashSet::default();
    let mut expanded = 0;

    while let Some(SmallestCostHolder { cost, index, .. }) = to_see.pop() {
        let successors = {
            let Some((node, &(_, c))) = parents.get_index(index) else {
                continue;
            };
            if success(node) {
                let path = reverse_path(&parents, |&(p, _)| p, index);
                return AstarResult {
                    found: Some((path, cost)),
                    expanded,
                };
            }
            // A node may sit in the heap several times if a cheaper way to it was found
            // later. Only the entry carrying the best known cost is expanded.
            if cost > c || !closed.insert(index) {
                continue;
            }
            expanded += 1;
            trace!("Expanding node {} ({} in heap)", index, to_see.len());
            successors(node)
        };
        for (successor, move_cost) in successors {
            let new_cost = cost + move_cost;
            let h; // heuristic(&successor)
            let n; // index for successor
            match parents.entry(successor) {
                Vacant(e) => {
                    h = heuristic(e.key());
                    n = e.index();
                    e.insert((index, new_cost));
                }
                Occupied(mut e) => {
                    if closed.contains(&e.index()) || new_cost >= e.get().1 {
                        continue;
                    }
                    h = heuristic(e.key());
                    n = e.index();
                    e.insert((index, new_cost));
                }
            }

            to_see.push(SmallestCostHolder {
                estimated_cost: new_cost + h,
                cost: new_cost,
                index: n,
            });
        }
    }
    AstarResult {
        found: None,
        expanded,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// A line graph 0 - 1 - 2 - ... - 9 with unit costs.
    fn line_successors(n: &u32) -> Vec<(u32, u32)> {
        let mut v = Vec::new();
        if *n > 0 {
            v.push((n - 1, 1));
        }
        if *n < 9 {
            v.push((n + 1, 1));
        }
        v
    }

    #[test]
    fn finds_line_path() {
        let result = astar(&2, line_successors, |n| n.abs_diff(7), |n| *n == 7);
        let (path, cost) = result.found.unwrap();
        assert_eq!(path, vec![2, 3, 4, 5, 6, 7]);
        assert_eq!(cost, 5);
        // A perfect heuristic only expands the nodes on the path before the goal.
        assert_eq!(result.expanded, 5);
    }

    #[test]
    fn start_is_goal() {
        let result = astar(&4, line_successors, |_| 0, |n| *n == 4);
        assert_eq!(result.found, Some((vec![4], 0)));
        assert_eq!(result.expanded, 0);
    }

    #[test]
    fn exhausts_before_giving_up() {
        let result = astar(&0, line_successors, |_| 0, |n| *n == 42);
        assert_eq!(result.found, None);
        assert_eq!(result.expanded, 10);
    }

    /// The cheap detour 0 -> 2 -> 3 beats the direct but expensive 0 -> 3 edge, even though
    /// 3 is discovered first through the expensive edge.
    #[test]
    fn improves_discovered_nodes() {
        let successors = |n: &u8| -> Vec<(u8, u32)> {
            match n {
                0 => vec![(3, 10), (2, 1)],
                2 => vec![(3, 1)],
                _ => vec![],
            }
        };
        let result = astar(&0, successors, |_| 0, |n| *n == 3);
        assert_eq!(result.found, Some((vec![0, 2, 3], 2)));
    }

    #[test]
    fn heap_order_prefers_low_estimate() {
        let mut heap = BinaryHeap::new();
        for (estimated_cost, cost, index) in [(5, 1, 0), (3, 0, 1), (3, 2, 2), (3, 2, 3)] {
            heap.push(SmallestCostHolder {
                estimated_cost,
                cost,
                index,
            });
        }
        let order: Vec<usize> = std::iter::from_fn(|| heap.pop().map(|h| h.index)).collect();
        assert_eq!(order, vec![2, 3, 1, 0]);
    }
}
