use std::collections::BTreeSet;

/// Link rows to insert and delete so the stored membership set matches the
/// submitted one.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SetDelta {
    pub added: Vec<i64>,
    pub removed: Vec<i64>,
}

impl SetDelta {
    pub fn is_empty(&self) -> bool {
        self.added.is_empty() && self.removed.is_empty()
    }
}

/// Diff the current membership set against the target set.
///
/// Duplicate ids collapse; both output vectors are sorted ascending.
pub fn reconcile(current: &[i64], target: &[i64]) -> SetDelta {
    let current: BTreeSet<i64> = current.iter().copied().collect();
    let target: BTreeSet<i64> = target.iter().copied().collect();

    SetDelta {
        added: target.difference(&current).copied().collect(),
        removed: current.difference(&target).copied().collect(),
    }
}
