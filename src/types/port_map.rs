//! The result mapping produced by a scan.

use crate::scanner::PortState;
use std::collections::BTreeMap;

/// Mapping from port number to the state found by its probe.
///
/// Only the batch driver can insert into it; once a scan returns, callers
/// get a read-only view. Iteration is in ascending port order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PortMap {
    states: BTreeMap<u16, PortState>,
}

impl PortMap {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Record the state of `port`. Returns the previous state if the port
    /// was already present.
    pub(crate) fn insert(&mut self, port: u16, state: PortState) -> Option<PortState> {
        self.states.insert(port, state)
    }

    pub fn get(&self, port: u16) -> Option<PortState> {
        self.states.get(&port).copied()
    }

    pub fn contains(&self, port: u16) -> bool {
        self.states.contains_key(&port)
    }

    pub fn len(&self) -> usize {
        self.states.len()
    }

    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }

    /// Iterate over `(port, state)` pairs in ascending port order.
    pub fn iter(&self) -> impl Iterator<Item = (u16, PortState)> + '_ {
        self.states.iter().map(|(&port, &state)| (port, state))
    }

    /// Ports found open, ascending.
    pub fn open_ports(&self) -> impl Iterator<Item = u16> + '_ {
        self.iter()
            .filter(|(_, state)| state.is_open())
            .map(|(port, _)| port)
    }

    pub fn open_count(&self) -> usize {
        self.open_ports().count()
    }

    pub fn closed_count(&self) -> usize {
        self.len() - self.open_count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counts_and_order() {
        let mut map = PortMap::new();
        map.insert(443, PortState::Open);
        map.insert(21, PortState::Closed);
        map.insert(22, PortState::Open);

        assert_eq!(map.len(), 3);
        assert_eq!(map.open_count(), 2);
        assert_eq!(map.closed_count(), 1);
        assert_eq!(map.open_ports().collect::<Vec<_>>(), vec![22, 443]);
        assert_eq!(
            map.iter().map(|(p, _)| p).collect::<Vec<_>>(),
            vec![21, 22, 443]
        );
    }

    #[test]
    fn test_insert_reports_previous() {
        let mut map = PortMap::new();
        assert_eq!(map.insert(80, PortState::Closed), None);
        assert_eq!(map.insert(80, PortState::Open), Some(PortState::Closed));
        assert_eq!(map.get(80), Some(PortState::Open));
        assert!(!map.contains(81));
    }
}
