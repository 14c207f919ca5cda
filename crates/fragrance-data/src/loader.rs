//! Product loader: drives one catalog load cycle per mount.
//!
//! ```text
//! begin() ──► Pending ──resolve(Ok)──► Ready
//!                │
//!                └──resolve(Err)──► Failed
//! ```
//!
//! Each `begin()` starts a new cycle and hands back a [`LoadTicket`]. A result
//! is only applied if it carries the ticket of the current cycle and the state
//! is still `Pending`, so at most one terminal transition happens per cycle and
//! results from an abandoned cycle are dropped.

use fragrance_core::{LoadState, Product};
use tracing::{debug, info, warn};

use crate::{CatalogError, CatalogSource};

/// Identifies the load cycle a result belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LoadTicket {
    cycle: u64,
}

impl LoadTicket {
    pub fn cycle(&self) -> u64 {
        self.cycle
    }
}

#[derive(Debug, Default)]
pub struct ProductLoader {
    state: LoadState,
    cycle: u64,
}

impl ProductLoader {
    /// A loader in `Pending` that has not started a cycle yet.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &LoadState {
        &self.state
    }

    /// Current cycle number. Zero before the first `begin()`.
    pub fn cycle(&self) -> u64 {
        self.cycle
    }

    /// Start a new cycle. The state returns to `Pending`.
    pub fn begin(&mut self) -> LoadTicket {
        self.cycle += 1;
        self.state = LoadState::Pending;
        debug!(cycle = self.cycle, "catalog load started");
        LoadTicket { cycle: self.cycle }
    }

    /// Apply a fetch outcome. Returns `true` if the state changed.
    pub fn resolve(
        &mut self,
        ticket: LoadTicket,
        result: Result<Vec<Product>, CatalogError>,
    ) -> bool {
        if ticket.cycle != self.cycle {
            debug!(
                ticket = ticket.cycle,
                current = self.cycle,
                "discarding catalog result from a stale cycle"
            );
            return false;
        }
        if !self.state.is_pending() {
            debug!(cycle = self.cycle, "catalog already settled");
            return false;
        }

        self.state = match result {
            Ok(products) => {
                info!(cycle = self.cycle, products = products.len(), "catalog ready");
                LoadState::ready(products)
            }
            Err(error) => {
                warn!(cycle = self.cycle, error = %error, "catalog load failed");
                LoadState::failed(error.to_string())
            }
        };
        true
    }

    /// Invalidate the current cycle. Any in-flight result will be discarded.
    pub fn abandon(&mut self) {
        if self.state.is_pending() && self.cycle > 0 {
            debug!(cycle = self.cycle, "catalog load abandoned");
        }
        self.cycle += 1;
    }

    /// Run a full cycle against a source and return the settled state.
    pub async fn load<S: CatalogSource + ?Sized>(&mut self, source: &S) -> &LoadState {
        let ticket = self.begin();
        let result = source.fetch_catalog().await;
        self.resolve(ticket, result);
        &self.state
    }
}
