//! Named, interchangeable orderings over task snapshots.

use crate::task::domain::Task;
use std::cmp::Ordering;
use std::fmt;
use thiserror::Error;

/// Total-order comparator over tasks.
pub type TaskOrdering = fn(&Task, &Task) -> Ordering;

/// Name of the identity strategy used when a caller does not choose one.
pub const DEFAULT_STRATEGY: &str = "default";

/// Error returned when a strategy name is not registered.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown sort strategy: {0}")]
pub struct UnknownSortStrategyError(pub String);

/// A named ordering applied to a task snapshot.
///
/// Application is a stable sort, so tasks with equal keys keep their
/// snapshot order.
#[derive(Clone, Copy)]
pub struct SortStrategy {
    name: &'static str,
    description: &'static str,
    ordering: TaskOrdering,
}

impl SortStrategy {
    /// Returns the registry name.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// Returns a one-line human description.
    #[must_use]
    pub const fn description(&self) -> &'static str {
        self.description
    }

    /// Returns the tasks reordered by this strategy.
    #[must_use]
    pub fn apply(&self, mut tasks: Vec<Task>) -> Vec<Task> {
        tasks.sort_by(self.ordering);
        tasks
    }
}

impl fmt::Debug for SortStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SortStrategy")
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}

/// Orders present keys by `cmp` and places absent keys after them.
fn present_first<T>(a: Option<T>, b: Option<T>, cmp: impl FnOnce(&T, &T) -> Ordering) -> Ordering {
    match (a, b) {
        (Some(left), Some(right)) => cmp(&left, &right),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

fn by_priority(a: &Task, b: &Task) -> Ordering {
    present_first(a.priority(), b.priority(), |left, right| right.cmp(left))
}

fn by_deadline(a: &Task, b: &Task) -> Ordering {
    present_first(a.due_at(), b.due_at(), Ord::cmp)
}

fn by_creation(a: &Task, b: &Task) -> Ordering {
    a.created_at().cmp(&b.created_at())
}

const fn unordered(_: &Task, _: &Task) -> Ordering {
    Ordering::Equal
}

static BUILTIN_STRATEGIES: [SortStrategy; 4] = [
    SortStrategy {
        name: "priority",
        description: "Highest priority first; tasks without a priority last",
        ordering: by_priority,
    },
    SortStrategy {
        name: "deadline",
        description: "Earliest deadline first; tasks without a deadline last",
        ordering: by_deadline,
    },
    SortStrategy {
        name: "creation",
        description: "Oldest creation time first",
        ordering: by_creation,
    },
    SortStrategy {
        name: DEFAULT_STRATEGY,
        description: "Insertion order, no reordering",
        ordering: unordered,
    },
];

/// Fixed registry of sort strategies keyed by name.
#[derive(Debug, Clone, Copy)]
pub struct SortStrategyRegistry {
    strategies: &'static [SortStrategy],
}

impl SortStrategyRegistry {
    /// Creates the registry of built-in strategies.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            strategies: &BUILTIN_STRATEGIES,
        }
    }

    /// Resolves a strategy by name, ignoring surrounding whitespace and
    /// ASCII case.
    ///
    /// # Errors
    ///
    /// Returns [`UnknownSortStrategyError`] when no strategy has the name.
    pub fn get(&self, name: &str) -> Result<&'static SortStrategy, UnknownSortStrategyError> {
        let normalized = name.trim().to_ascii_lowercase();
        self.strategies
            .iter()
            .find(|strategy| strategy.name == normalized)
            .ok_or_else(|| UnknownSortStrategyError(name.to_owned()))
    }

    /// Returns the registered strategy names.
    #[must_use]
    pub fn names(&self) -> Vec<&'static str> {
        self.strategies.iter().map(SortStrategy::name).collect()
    }

    /// Returns every registered strategy.
    #[must_use]
    pub const fn strategies(&self) -> &'static [SortStrategy] {
        self.strategies
    }
}

impl Default for SortStrategyRegistry {
    fn default() -> Self {
        Self::new()
    }
}
