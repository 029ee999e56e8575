//! Generic graph search shared by every solver. The frontier decides the expansion
//! order; the loop itself only discards stale entries, records parents, tests for the
//! goal on expansion and pushes unexpanded successors.
use crate::frontier::{Frontier, SearchNode};
use fxhash::FxBuildHasher;
use indexmap::IndexMap;
use log::{debug, info};
use num_traits::Zero;
use std::cmp::Ordering;
use std::hash::Hash;

type FxIndexMap<K, V> = IndexMap<K, V, FxBuildHasher>;

/// Walks parent indices back from `goal` and returns the nodes in start to goal order.
fn reverse_path<N: Clone>(parents: &FxIndexMap<N, usize>, goal: usize) -> Vec<N> {
    let mut path: Vec<N> = std::iter::successors(parents.get_index(goal), |&(_, &parent)| {
        parents.get_index(parent)
    })
    .map(|(node, _)| node.clone())
    .collect();
    path.reverse();
    path
}

/// Compares the paths that reach `node` through the expanded nodes at `a` and `b`.
fn compare_paths<N: Ord + Clone>(
    parents: &FxIndexMap<N, usize>,
    node: &N,
    a: usize,
    b: usize,
) -> Ordering {
    let mut path_a = reverse_path(parents, a);
    path_a.push(node.clone());
    let mut path_b = reverse_path(parents, b);
    path_b.push(node.clone());
    path_a.cmp(&path_b)
}

/// Expands nodes in the order given by `frontier` until `success` holds for an expanded
/// node, returning the path to it and its accumulated cost.
///
/// A node is expanded at most once. Entries for already expanded nodes are skipped when
/// popped, so a node may sit in the frontier several times without a decrease-key step.
/// When the frontier hands out several equally ranked entries for one node, the node is
/// reached along the lexicographically smallest path among them.
/// `priority` receives a node and its accumulated cost and yields the key priority
/// frontiers order on.
pub fn graph_search<N, C, FR, FN, IN, FP, FS>(
    start: &N,
    mut frontier: FR,
    mut successors: FN,
    mut priority: FP,
    mut success: FS,
) -> Option<(Vec<N>, C)>
where
    N: Ord + Hash + Clone,
    C: Zero + Ord + Copy,
    FR: Frontier<N, C>,
    FN: FnMut(&N) -> IN,
    IN: IntoIterator<Item = (N, C)>,
    FP: FnMut(&N, C) -> C,
    FS: FnMut(&N) -> bool,
{
    // Doubles as the visited set: a node gets its slot when it is expanded.
    let mut parents: FxIndexMap<N, usize> = FxIndexMap::default();
    frontier.push(SearchNode {
        node: start.clone(),
        cost: Zero::zero(),
        priority: priority(start, Zero::zero()),
        parent: usize::MAX,
    });
    while let Some(mut entry) = frontier.pop() {
        if parents.contains_key(&entry.node) {
            continue;
        }
        while let Some(tied) = frontier.pop_tied(&entry) {
            if compare_paths(&parents, &entry.node, tied.parent, entry.parent) == Ordering::Less {
                entry = tied;
            }
        }
        let SearchNode {
            node, cost, parent, ..
        } = entry;
        let (index, _) = parents.insert_full(node.clone(), parent);
        if success(&node) {
            debug!("Goal reached after expanding {} nodes", parents.len());
            return Some((reverse_path(&parents, index), cost));
        }
        for (successor, move_cost) in successors(&node) {
            if parents.contains_key(&successor) {
                continue;
            }
            let new_cost = cost + move_cost;
            frontier.push(SearchNode {
                priority: priority(&successor, new_cost),
                node: successor,
                cost: new_cost,
                parent: index,
            });
        }
    }
    info!(
        "Frontier exhausted after expanding {} nodes, no path exists",
        parents.len()
    );
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::frontier::{HeuristicQueue, PriorityQueue, Queue, Stack};

    // 0 - 1 - 2
    // |       |
    // 3 ----- 4   with 3-4 costing 5 and every other edge 1
    fn edges(n: &u32) -> Vec<(u32, u32)> {
        match n {
            0 => vec![(1, 1), (3, 1)],
            1 => vec![(0, 1), (2, 1)],
            2 => vec![(1, 1), (4, 1)],
            3 => vec![(0, 1), (4, 5)],
            4 => vec![(2, 1), (3, 5)],
            _ => vec![],
        }
    }

    #[test]
    fn start_is_goal() {
        let result = graph_search(&0, Queue::default(), edges, |_, c| c, |n| *n == 0);
        assert_eq!(result, Some((vec![0], 0)));
    }

    #[test]
    fn cheapest_path_with_cost_priority() {
        let result = graph_search(&3, PriorityQueue::default(), edges, |_, c| c, |n| *n == 4);
        assert_eq!(result, Some((vec![3, 0, 1, 2, 4], 4)));
    }

    #[test]
    fn fewest_edges_with_queue() {
        let result = graph_search(&3, Queue::default(), edges, |_, c| c, |n| *n == 4);
        assert_eq!(result, Some((vec![3, 4], 5)));
    }

    /// The stack expands the most recently discovered node, so the search dives
    /// along the last successor first.
    #[test]
    fn stack_dives_deep() {
        let result = graph_search(&0, Stack::default(), edges, |_, c| c, |n| *n == 1);
        assert_eq!(result, Some((vec![0, 3, 4, 2, 1], 8)));
    }

    /// 3 is first pushed from 5, then from 1 with the same rank. The path through
    /// 1 is the smaller one.
    #[test]
    fn tied_entries_take_smallest_path() {
        fn diamond(n: &u32) -> Vec<(u32, u32)> {
            match n {
                0 => vec![(5, 1), (1, 1)],
                1 | 5 => vec![(3, 1)],
                _ => vec![],
            }
        }
        let heuristic = |n: &u32, _: u32| match n {
            5 => 1,
            1 => 2,
            _ => 3,
        };
        let result = graph_search(&0, HeuristicQueue::default(), diamond, heuristic, |n| *n == 3);
        assert_eq!(result, Some((vec![0, 1, 3], 2)));
    }

    #[test]
    fn exhausted_frontier() {
        let result = graph_search(&0, Queue::default(), edges, |_, c| c, |n| *n == 9);
        assert_eq!(result, None);
    }
}
