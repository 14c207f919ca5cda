//! View-local state: catalog load state and mobile menu visibility.

use std::sync::Arc;

use crate::product::Product;

/// Catalog state for one load cycle.
///
/// Moves `Pending -> Failed` or `Pending -> Ready` exactly once per cycle.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum LoadState {
    /// Request issued, nothing received yet.
    #[default]
    Pending,
    /// The catalog could not be loaded.
    Failed { message: String },
    /// The catalog arrived. The sequence is never mutated afterwards.
    Ready { products: Arc<[Product]> },
}

impl LoadState {
    /// Build a `Ready` state from a received sequence.
    pub fn ready(products: Vec<Product>) -> Self {
        Self::Ready {
            products: products.into(),
        }
    }

    /// Build a `Failed` state with a display message.
    pub fn failed(message: impl Into<String>) -> Self {
        Self::Failed {
            message: message.into(),
        }
    }

    pub fn is_pending(&self) -> bool {
        matches!(self, Self::Pending)
    }

    pub fn is_ready(&self) -> bool {
        matches!(self, Self::Ready { .. })
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, Self::Failed { .. })
    }

    /// Check if the cycle has reached `Failed` or `Ready`.
    pub fn is_terminal(&self) -> bool {
        !self.is_pending()
    }

    /// Products of a `Ready` state; empty otherwise.
    pub fn products(&self) -> &[Product] {
        match self {
            Self::Ready { products } => &products[..],
            _ => &[],
        }
    }

    /// Message of a `Failed` state.
    pub fn error_message(&self) -> Option<&str> {
        match self {
            Self::Failed { message } => Some(message.as_str()),
            _ => None,
        }
    }

    /// Short lowercase name for logs and markup.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Failed { .. } => "failed",
            Self::Ready { .. } => "ready",
        }
    }
}

/// Whether the slide-in mobile menu is open.
///
/// Final state depends only on the last call, never on history.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MenuVisibility {
    open: bool,
}

impl MenuVisibility {
    /// Closed menu.
    pub fn closed() -> Self {
        Self { open: false }
    }

    pub fn open(&mut self) {
        self.open = true;
    }

    pub fn close(&mut self) {
        self.open = false;
    }

    pub fn is_open(&self) -> bool {
        self.open
    }
}
