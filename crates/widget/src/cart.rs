//! In-memory cart state.
//!
//! Pure state transitions: every operation returns an outcome enum and the
//! caller decides what to render or notify. Lines keep first-added order and
//! there is at most one line per product id. A decrement that lands on zero
//! does not delete the line synchronously; it marks it pending removal so
//! the exit animation can play, and the caller schedules the actual
//! [`Cart::remove`].

use golden_fork_core::{Product, ProductId};
use rust_decimal::Decimal;

/// One product's entry in the cart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartLine {
    /// The product this line is for.
    pub product: Product,
    /// Units of the product; in `[1, cap]` while live, `0` only during the
    /// pending-removal window.
    pub quantity: u32,
    /// Set when the line has been decremented to zero and is waiting out
    /// its removal delay.
    pub pending_removal: bool,
}

impl CartLine {
    fn new(product: Product) -> Self {
        Self {
            product,
            quantity: 1,
            pending_removal: false,
        }
    }

    /// Price × quantity for this line.
    #[must_use]
    pub fn line_total(&self) -> Decimal {
        self.product.price.line_total(self.quantity)
    }
}

/// Result of adding a product to the cart.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddOutcome {
    /// Product added or its quantity bumped; carries the new quantity.
    Added {
        quantity: u32,
        /// The line was in its pending-removal window and got revived; the
        /// caller must cancel the scheduled removal.
        revived: bool,
    },
    /// The line already sits at the quantity cap; nothing was mutated.
    Capped,
}

/// Result of changing a line's quantity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuantityOutcome {
    /// Quantity changed; carries the new value.
    Changed(u32),
    /// Increment refused at the cap; nothing was mutated.
    Capped,
    /// Decrement reached zero; the line is now pending removal and the
    /// caller must schedule [`Cart::remove`].
    Emptied,
    /// No live line for that product; silent no-op.
    Missing,
}

/// The in-memory cart: an ordered sequence of [`CartLine`].
#[derive(Debug, Clone)]
pub struct Cart {
    lines: Vec<CartLine>,
    quantity_cap: u32,
}

impl Cart {
    /// Create an empty cart with the given per-line quantity cap.
    #[must_use]
    pub const fn new(quantity_cap: u32) -> Self {
        Self {
            lines: Vec::new(),
            quantity_cap,
        }
    }

    /// Lines in first-added order, including any pending removal.
    #[must_use]
    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    /// Whether the cart has no lines at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Add one unit of `product`.
    ///
    /// First add creates a line with quantity 1 at the back. An existing
    /// line below the cap is incremented; at the cap nothing is mutated. A
    /// line in its pending-removal window is revived at quantity 1.
    pub fn add(&mut self, product: &Product) -> AddOutcome {
        let cap = self.quantity_cap;
        if let Some(line) = self.line_mut(product.id) {
            if line.pending_removal {
                line.quantity = 1;
                line.pending_removal = false;
                return AddOutcome::Added {
                    quantity: 1,
                    revived: true,
                };
            }
            if line.quantity >= cap {
                return AddOutcome::Capped;
            }
            line.quantity += 1;
            return AddOutcome::Added {
                quantity: line.quantity,
                revived: false,
            };
        }
        self.lines.push(CartLine::new(product.clone()));
        AddOutcome::Added {
            quantity: 1,
            revived: false,
        }
    }

    /// Increment a line's quantity, subject to the cap.
    pub fn increment(&mut self, id: ProductId) -> QuantityOutcome {
        let cap = self.quantity_cap;
        match self.live_line_mut(id) {
            Some(line) if line.quantity >= cap => QuantityOutcome::Capped,
            Some(line) => {
                line.quantity += 1;
                QuantityOutcome::Changed(line.quantity)
            }
            None => QuantityOutcome::Missing,
        }
    }

    /// Decrement a line's quantity; at zero the line becomes pending
    /// removal instead of being deleted.
    pub fn decrement(&mut self, id: ProductId) -> QuantityOutcome {
        match self.live_line_mut(id) {
            Some(line) if line.quantity <= 1 => {
                line.quantity = 0;
                line.pending_removal = true;
                QuantityOutcome::Emptied
            }
            Some(line) => {
                line.quantity -= 1;
                QuantityOutcome::Changed(line.quantity)
            }
            None => QuantityOutcome::Missing,
        }
    }

    /// Delete a line outright. Called when a scheduled removal fires.
    pub fn remove(&mut self, id: ProductId) {
        self.lines.retain(|line| line.product.id != id);
    }

    /// Total item count: sum of quantities. Pending lines contribute zero.
    #[must_use]
    pub fn total_items(&self) -> u32 {
        self.lines.iter().map(|line| line.quantity).sum()
    }

    /// Total price: sum of quantity × unit price over all lines.
    #[must_use]
    pub fn total_price(&self) -> Decimal {
        self.lines.iter().map(CartLine::line_total).sum()
    }

    fn line_mut(&mut self, id: ProductId) -> Option<&mut CartLine> {
        self.lines.iter_mut().find(|line| line.product.id == id)
    }

    /// Like `line_mut`, but pending-removal lines are treated as gone.
    fn live_line_mut(&mut self, id: ProductId) -> Option<&mut CartLine> {
        self.lines
            .iter_mut()
            .find(|line| line.product.id == id && !line.pending_removal)
    }
}
