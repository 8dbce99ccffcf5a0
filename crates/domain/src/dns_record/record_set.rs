use super::RecordType;
use std::collections::BTreeMap;

/// Outcome of the lookup behind one record type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecordStatus {
    /// At least one value was returned.
    Resolved,
    /// The lookup succeeded with zero records (NODATA or NXDOMAIN).
    Empty,
    /// Transport error, timeout or server failure.
    Failed(String),
}

/// Aggregated records for one domain.
///
/// A record type has a key only when it resolved with at least one value, so
/// `get` answers `None` for both empty and failed lookups. `status` tells the
/// two apart.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecordSet {
    values: BTreeMap<RecordType, Vec<String>>,
    statuses: BTreeMap<RecordType, RecordStatus>,
}

impl RecordSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a successful lookup. An empty `values` marks the type `Empty`
    /// and leaves no key behind.
    pub fn insert(&mut self, record_type: RecordType, values: Vec<String>) {
        if values.is_empty() {
            self.values.remove(&record_type);
            self.statuses.insert(record_type, RecordStatus::Empty);
        } else {
            self.values.insert(record_type, values);
            self.statuses.insert(record_type, RecordStatus::Resolved);
        }
    }

    pub fn mark_failed(&mut self, record_type: RecordType, reason: impl Into<String>) {
        self.values.remove(&record_type);
        self.statuses
            .insert(record_type, RecordStatus::Failed(reason.into()));
    }

    pub fn get(&self, record_type: RecordType) -> Option<&[String]> {
        self.values.get(&record_type).map(Vec::as_slice)
    }

    pub fn contains(&self, record_type: RecordType) -> bool {
        self.values.contains_key(&record_type)
    }

    /// `None` when the type was never looked up.
    pub fn status(&self, record_type: RecordType) -> Option<&RecordStatus> {
        self.statuses.get(&record_type)
    }

    /// Present keys in lookup order.
    pub fn iter(&self) -> impl Iterator<Item = (RecordType, &[String])> {
        self.values.iter().map(|(t, v)| (*t, v.as_slice()))
    }

    pub fn failures(&self) -> impl Iterator<Item = (RecordType, &str)> {
        self.statuses.iter().filter_map(|(t, s)| match s {
            RecordStatus::Failed(reason) => Some((*t, reason.as_str())),
            _ => None,
        })
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}
