//! Request ordering for overlapping lookups
//!
//! Every lookup gets an id when issued. A completed lookup is applied only if
//! its id is newer than the last applied one, so a slow response for an old
//! query can never replace the result of a newer query.

#[derive(Debug, Default)]
pub struct LookupSequencer {
    last_issued: u64,
    last_applied: u64,
}

impl LookupSequencer {
    /// Allocate the id for a new lookup
    pub fn issue(&mut self) -> u64 {
        self.last_issued += 1;
        self.last_issued
    }

    /// Whether a lookup that just completed should be delivered
    pub fn accept(&mut self, request_id: u64) -> bool {
        if request_id <= self.last_applied {
            return false;
        }
        self.last_applied = request_id;
        true
    }

    /// Lookups issued but neither applied nor superseded yet
    pub fn in_flight(&self) -> u64 {
        self.last_issued - self.last_applied
    }
}
