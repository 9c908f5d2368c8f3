//! Guards of transition groups.

use thiserror::Error;

/// Errors decoding a length-prefixed guard row.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GuardError {
    /// The row has no length prefix.
    #[error("guard row is empty")]
    Empty,

    /// The length prefix is negative.
    #[error("guard row has negative length {0}")]
    NegativeLength(i32),

    /// The row is shorter than its prefix claims.
    #[error("guard row claims {claimed} labels but holds {available}")]
    Truncated {
        /// Label count from the prefix.
        claimed: usize,
        /// Labels actually present.
        available: usize,
    },

    /// A label index is negative.
    #[error("guard row contains negative label index {0}")]
    NegativeLabel(i32),

    /// A length or label index does not fit a row entry.
    #[error("{0} does not fit a guard row entry")]
    Overflow(usize),
}

/// State labels whose conjunction enables one transition group.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Guard {
    labels: Vec<usize>,
}

impl Guard {
    /// Create a guard over the given label indices, in order.
    pub fn new(labels: Vec<usize>) -> Self {
        Self { labels }
    }

    /// A guard with no labels (always enabled).
    pub fn empty() -> Self {
        Self::default()
    }

    /// Decode a `[length, label0, label1, ...]` row.
    ///
    /// Entries past `length` are ignored.
    pub fn from_prefixed(row: &[i32]) -> Result<Self, GuardError> {
        let (&length, rest) = row.split_first().ok_or(GuardError::Empty)?;
        let claimed = usize::try_from(length).map_err(|_| GuardError::NegativeLength(length))?;
        if rest.len() < claimed {
            return Err(GuardError::Truncated {
                claimed,
                available: rest.len(),
            });
        }

        let labels = rest[..claimed]
            .iter()
            .map(|&l| usize::try_from(l).map_err(|_| GuardError::NegativeLabel(l)))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { labels })
    }

    /// Encode as a `[length, label0, label1, ...]` row.
    ///
    /// Fails if the length or a label exceeds `i32::MAX`.
    pub fn to_prefixed(&self) -> Result<Vec<i32>, GuardError> {
        let entry = |n: usize| i32::try_from(n).map_err(|_| GuardError::Overflow(n));
        let mut row = Vec::with_capacity(self.labels.len() + 1);
        row.push(entry(self.labels.len())?);
        for &label in &self.labels {
            row.push(entry(label)?);
        }
        Ok(row)
    }

    /// Label indices in this guard.
    pub fn labels(&self) -> &[usize] {
        &self.labels
    }

    /// Number of labels in this guard.
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    /// Whether this guard has no labels.
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }
}

/// Guards for every transition group, indexed by group.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GuardList {
    guards: Vec<Guard>,
}

impl GuardList {
    /// Create a guard list from per-group guards.
    pub fn new(guards: Vec<Guard>) -> Self {
        Self { guards }
    }

    /// Guard of a transition group.
    pub fn get(&self, action: usize) -> Option<&Guard> {
        self.guards.get(action)
    }

    /// Number of transition groups covered.
    pub fn len(&self) -> usize {
        self.guards.len()
    }

    /// Whether the list covers no transition groups.
    pub fn is_empty(&self) -> bool {
        self.guards.is_empty()
    }

    /// Iterate over `(action, guard)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (usize, &Guard)> + '_ {
        self.guards.iter().enumerate()
    }

    /// Highest label index referenced by any guard.
    pub fn max_label(&self) -> Option<usize> {
        self.guards
            .iter()
            .flat_map(|g| g.labels.iter().copied())
            .max()
    }
}

impl FromIterator<Guard> for GuardList {
    fn from_iter<I: IntoIterator<Item = Guard>>(iter: I) -> Self {
        Self {
            guards: iter.into_iter().collect(),
        }
    }
}
