use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use tracing::{info, instrument, warn};
use uuid::Uuid;

use crate::catalog::CatalogSource;
use crate::models::{
    validate_session_id, Cart, CartSummary, ItemSelection, LineItemView, OrderQuote, Pricing,
    ServiceCategory, ServiceError, ServiceResult, Validate,
};

/// One active ordering session and its cart
#[derive(Debug)]
pub struct CartSession {
    pub session_id: String,
    pub started_at: DateTime<Utc>,
    cart: Cart,
}

impl CartSession {
    fn new(session_id: String, pricing: Pricing) -> Self {
        Self {
            session_id,
            started_at: Utc::now(),
            cart: Cart::new(pricing),
        }
    }

    /// The cart owned by this session
    pub fn cart(&self) -> &Cart {
        &self.cart
    }
}

/// Session-scoped boundary around the cart aggregate.
///
/// The service is an explicitly owned value the caller constructs and passes
/// by reference; there is exactly one owner of the cart state for the
/// lifetime of a session. Every cart-facing call made while no session is
/// active fails with [`ServiceError::SessionNotStarted`].
pub struct CartService {
    catalog: Box<dyn CatalogSource>,
    pricing: Pricing,
    session: Option<CartSession>,
}

impl CartService {
    /// Create a new CartService over a catalog and pricing rules
    pub fn new(catalog: Box<dyn CatalogSource>, pricing: Pricing) -> Self {
        Self {
            catalog,
            pricing,
            session: None,
        }
    }

    /// Begin an ordering session with an empty cart.
    ///
    /// Starting over an active session discards the old cart.
    #[instrument(skip(self), fields(session_id = %session_id))]
    pub fn start_session(&mut self, session_id: &str) -> ServiceResult<()> {
        validate_session_id(session_id)?;

        if let Some(active) = &self.session {
            warn!(
                previous = %active.session_id,
                "Replacing active session with a new one"
            );
        }

        self.session = Some(CartSession::new(session_id.to_string(), self.pricing));
        info!("Session started");
        Ok(())
    }

    /// End the active session, discarding its cart
    #[instrument(skip(self))]
    pub fn end_session(&mut self) -> ServiceResult<()> {
        let session = self.session.take().ok_or(ServiceError::SessionNotStarted)?;
        info!(session_id = %session.session_id, items = session.cart.items().len(), "Session ended");
        Ok(())
    }

    /// Whether a session is currently active
    pub fn has_active_session(&self) -> bool {
        self.session.is_some()
    }

    /// The active session, when one exists
    pub fn active_session(&self) -> Option<&CartSession> {
        self.session.as_ref()
    }

    /// The active session's identifier
    pub fn session_id(&self) -> ServiceResult<&str> {
        Ok(&self.active()?.session_id)
    }

    /// Replace every cart item of `category` with the given selections.
    ///
    /// Selections are passed through to the cart unvalidated; zero-quantity
    /// entries are dropped and other categories are untouched.
    #[instrument(skip(self, selections), fields(category = %category, submitted = selections.len()))]
    pub fn replace_category_items(
        &mut self,
        category: ServiceCategory,
        selections: Vec<ItemSelection>,
    ) -> ServiceResult<CartSummary> {
        let session = self.active_mut()?;
        session.cart.replace_category_items(category, selections);

        let summary = Self::summarize(session);
        info!(
            stored = session.cart.items_in_category(category).len(),
            "Category items replaced"
        );
        Ok(summary)
    }

    /// Strict variant of [`Self::replace_category_items`]: every selection is
    /// validated before any of them reach the cart.
    #[instrument(skip(self, selections), fields(category = %category, submitted = selections.len()))]
    pub fn replace_category_items_checked(
        &mut self,
        category: ServiceCategory,
        selections: Vec<ItemSelection>,
    ) -> ServiceResult<CartSummary> {
        self.active()?;
        for selection in &selections {
            selection.validate()?;
        }
        self.replace_category_items(category, selections)
    }

    /// Replace a category's items from (item id, quantity) picks resolved
    /// against the catalog
    #[instrument(skip(self, picks), fields(category = %category, picks = picks.len()))]
    pub fn replace_category_from_catalog(
        &mut self,
        category: ServiceCategory,
        picks: &[(&str, u32)],
    ) -> ServiceResult<CartSummary> {
        self.active()?;

        let mut selections = Vec::with_capacity(picks.len());
        for (item_id, quantity) in picks {
            let listing = self.catalog.find(category, item_id).ok_or_else(|| {
                ServiceError::CatalogItemNotFound {
                    item_id: (*item_id).to_string(),
                    category,
                }
            })?;
            selections.push(listing.to_selection(*quantity));
        }

        self.replace_category_items(category, selections)
    }

    /// Overwrite one item's quantity; 0 removes the item.
    ///
    /// Updating an item that is not in the cart fails with
    /// [`ServiceError::ItemNotFound`] rather than inserting.
    #[instrument(skip(self), fields(category = %category, item_id = %item_id, quantity))]
    pub fn update_item_quantity(
        &mut self,
        category: ServiceCategory,
        item_id: &str,
        quantity: u32,
    ) -> ServiceResult<CartSummary> {
        let session = self.active_mut()?;

        if !session.cart.update_item_quantity(item_id, category, quantity) {
            return Err(ServiceError::ItemNotFound {
                item_id: item_id.to_string(),
                category,
            });
        }

        if quantity == 0 {
            info!("Item removed from cart (quantity set to 0)");
        } else {
            info!("Cart item quantity updated");
        }
        Ok(Self::summarize(session))
    }

    /// Remove one item from the cart
    #[instrument(skip(self), fields(category = %category, item_id = %item_id))]
    pub fn remove_item(
        &mut self,
        category: ServiceCategory,
        item_id: &str,
    ) -> ServiceResult<CartSummary> {
        self.update_item_quantity(category, item_id, 0)
    }

    /// Remove all items regardless of category. Idempotent.
    #[instrument(skip(self))]
    pub fn clear(&mut self) -> ServiceResult<CartSummary> {
        let session = self.active_mut()?;
        session.cart.clear();
        info!("Cart cleared");
        Ok(Self::summarize(session))
    }

    /// Whether the active session's cart holds no items
    pub fn is_empty(&self) -> ServiceResult<bool> {
        Ok(self.active()?.cart.is_empty())
    }

    /// Total number of garments in the active session's cart
    pub fn item_count(&self) -> ServiceResult<u32> {
        Ok(self.active()?.cart.total_items())
    }

    /// Current cart contents and derived totals
    #[instrument(skip(self))]
    pub fn summary(&self) -> ServiceResult<CartSummary> {
        let session = self.active()?;
        Ok(Self::summarize(session))
    }

    /// Produce a checkout quote, applying an optional discount.
    ///
    /// The discount is subtracted before totaling and clamped so the quoted
    /// total never goes negative. An empty cart cannot be checked out.
    #[instrument(skip(self), fields(discount = ?discount))]
    pub fn checkout(&self, discount: Option<Decimal>) -> ServiceResult<OrderQuote> {
        let session = self.active()?;

        if session.cart.is_empty() {
            return Err(ServiceError::EmptyCart);
        }

        let gross = session.cart.totals();
        let max_discount = gross.total.max(Decimal::ZERO);
        let discount = discount
            .unwrap_or(Decimal::ZERO)
            .clamp(Decimal::ZERO, max_discount);
        let totals = session.cart.totals_with_discount(discount);

        let quote = OrderQuote {
            quote_id: Uuid::new_v4().to_string(),
            session_id: session.session_id.clone(),
            items: session.cart.items().iter().map(LineItemView::from).collect(),
            total_items: session.cart.total_items(),
            subtotal: totals.subtotal,
            delivery_fee: totals.delivery_fee,
            tax: totals.tax,
            discount: totals.discount,
            total: totals.total,
            created_at: Utc::now(),
        };

        info!(quote_id = %quote.quote_id, total = %quote.total, "Checkout quote produced");
        Ok(quote)
    }

    fn active(&self) -> ServiceResult<&CartSession> {
        self.session.as_ref().ok_or(ServiceError::SessionNotStarted)
    }

    fn active_mut(&mut self) -> ServiceResult<&mut CartSession> {
        self.session.as_mut().ok_or(ServiceError::SessionNotStarted)
    }

    fn summarize(session: &CartSession) -> CartSummary {
        let cart = &session.cart;
        let totals = cart.totals();
        CartSummary {
            session_id: session.session_id.clone(),
            items: cart.items().iter().map(LineItemView::from).collect(),
            total_items: cart.total_items(),
            subtotal: totals.subtotal,
            delivery_fee: totals.delivery_fee,
            tax: totals.tax,
            total: totals.total,
            updated_at: cart.updated_at,
        }
    }
}
