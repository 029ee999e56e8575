//! Frontier disciplines that decide which discovered node is expanded next.
use std::cmp::Ordering;
use std::collections::{BinaryHeap, VecDeque};

/// A discovered node waiting to be expanded, together with the cost of reaching it,
/// the key priority frontiers order on and the arena index of the node it was reached from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SearchNode<N, C> {
    pub node: N,
    pub cost: C,
    pub priority: C,
    pub parent: usize,
}

pub trait Frontier<N, C>: Default {
    fn push(&mut self, entry: SearchNode<N, C>);
    fn pop(&mut self) -> Option<SearchNode<N, C>>;
    /// Pops the next entry only if it is for the same node as `entry` and ranks level
    /// with it. Frontiers without a ranking never have tied entries.
    fn pop_tied(&mut self, _entry: &SearchNode<N, C>) -> Option<SearchNode<N, C>> {
        None
    }
    fn len(&self) -> usize;
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Last in, first out. Ignores priorities.
#[derive(Clone, Debug)]
pub struct Stack<N, C> {
    entries: Vec<SearchNode<N, C>>,
}

impl<N, C> Default for Stack<N, C> {
    fn default() -> Self {
        Stack {
            entries: Vec::new(),
        }
    }
}

impl<N, C> Frontier<N, C> for Stack<N, C> {
    fn push(&mut self, entry: SearchNode<N, C>) {
        self.entries.push(entry);
    }
    fn pop(&mut self) -> Option<SearchNode<N, C>> {
        self.entries.pop()
    }
    fn len(&self) -> usize {
        self.entries.len()
    }
}

/// First in, first out. Ignores priorities.
#[derive(Clone, Debug)]
pub struct Queue<N, C> {
    entries: VecDeque<SearchNode<N, C>>,
}

impl<N, C> Default for Queue<N, C> {
    fn default() -> Self {
        Queue {
            entries: VecDeque::new(),
        }
    }
}

impl<N, C> Frontier<N, C> for Queue<N, C> {
    fn push(&mut self, entry: SearchNode<N, C>) {
        self.entries.push_back(entry);
    }
    fn pop(&mut self) -> Option<SearchNode<N, C>> {
        self.entries.pop_front()
    }
    fn len(&self) -> usize {
        self.entries.len()
    }
}

struct SmallestCostHolder<N, C, const BY_COST: bool> {
    entry: SearchNode<N, C>,
    sequence: usize,
}

impl<N: Ord, C: Ord, const BY_COST: bool> SmallestCostHolder<N, C, BY_COST> {
    /// Orders on priority, then cost if `BY_COST`, then node.
    fn rank(&self, other: &Self) -> Ordering {
        let ordering = self.entry.priority.cmp(&other.entry.priority);
        let ordering = if BY_COST {
            ordering.then_with(|| self.entry.cost.cmp(&other.entry.cost))
        } else {
            ordering
        };
        ordering.then_with(|| self.entry.node.cmp(&other.entry.node))
    }
}

impl<N: Ord, C: Ord, const BY_COST: bool> Eq for SmallestCostHolder<N, C, BY_COST> {}

impl<N: Ord, C: Ord, const BY_COST: bool> PartialEq for SmallestCostHolder<N, C, BY_COST> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl<N: Ord, C: Ord, const BY_COST: bool> PartialOrd for SmallestCostHolder<N, C, BY_COST> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<N: Ord, C: Ord, const BY_COST: bool> Ord for SmallestCostHolder<N, C, BY_COST> {
    fn cmp(&self, other: &Self) -> Ordering {
        // BinaryHeap is a max-heap: the smallest rank has to compare greatest.
        other
            .rank(self)
            .then_with(|| other.sequence.cmp(&self.sequence))
    }
}

/// Pops the entry with the smallest priority first. Equal priorities go to the smaller
/// cost when `BY_COST` is set, then to the smaller node, then to the earliest push.
pub struct RankedQueue<N, C, const BY_COST: bool> {
    heap: BinaryHeap<SmallestCostHolder<N, C, BY_COST>>,
    pushed: usize,
}

/// Ranks on priority, then cost.
pub type PriorityQueue<N, C> = RankedQueue<N, C, true>;
/// Ranks on priority alone, so equal priorities are settled on the node whatever the cost.
pub type HeuristicQueue<N, C> = RankedQueue<N, C, false>;

impl<N: Ord, C: Ord, const BY_COST: bool> Default for RankedQueue<N, C, BY_COST> {
    fn default() -> Self {
        RankedQueue {
            heap: BinaryHeap::new(),
            pushed: 0,
        }
    }
}

impl<N: Ord, C: Ord, const BY_COST: bool> Frontier<N, C> for RankedQueue<N, C, BY_COST> {
    fn push(&mut self, entry: SearchNode<N, C>) {
        self.heap.push(SmallestCostHolder {
            entry,
            sequence: self.pushed,
        });
        self.pushed += 1;
    }
    fn pop(&mut self) -> Option<SearchNode<N, C>> {
        self.heap.pop().map(|holder| holder.entry)
    }
    fn pop_tied(&mut self, entry: &SearchNode<N, C>) -> Option<SearchNode<N, C>> {
        let next = self.heap.peek()?;
        let tied = next.entry.node == entry.node
            && next.entry.priority == entry.priority
            && (!BY_COST || next.entry.cost == entry.cost);
        if tied {
            self.pop()
        } else {
            None
        }
    }
    fn len(&self) -> usize {
        self.heap.len()
    }
}
