//! Wall-clock access and product id generation.
//!
//! Ids are millisecond timestamps, bumped past the last issued (or observed)
//! id so two creates within one millisecond still get distinct ids. This is
//! only safe with a single writer per store key.

#[cfg(test)]
#[path = "clock_test.rs"]
mod clock_test;

use crate::state::catalog::ProductId;

/// Milliseconds since the Unix epoch.
pub fn now_ms() -> i64 {
    #[cfg(feature = "csr")]
    {
        #[allow(clippy::cast_possible_truncation)]
        {
            js_sys::Date::now() as i64
        }
    }
    #[cfg(not(feature = "csr"))]
    {
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map_or(0, |d| i64::try_from(d.as_millis()).unwrap_or(i64::MAX))
    }
}

/// Source of fresh product ids.
pub trait IdSource {
    /// `None` once the id space past the last issued id is used up.
    fn next_id(&mut self) -> Option<ProductId>;

    /// Record an id that already exists so it is never issued again.
    fn observe(&mut self, id: ProductId);
}

/// Strictly increasing clock-derived ids.
#[derive(Clone, Debug)]
pub struct ClockIdSource {
    last: ProductId,
    clock: fn() -> i64,
}

impl Default for ClockIdSource {
    fn default() -> Self {
        Self::with_clock(now_ms)
    }
}

impl ClockIdSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_clock(clock: fn() -> i64) -> Self {
        Self { last: 0, clock }
    }
}

impl IdSource for ClockIdSource {
    fn next_id(&mut self) -> Option<ProductId> {
        let floor = self.last.checked_add(1)?;
        let id = (self.clock)().max(floor);
        self.last = id;
        Some(id)
    }

    fn observe(&mut self, id: ProductId) {
        self.last = self.last.max(id);
    }
}
