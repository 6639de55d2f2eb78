use crate::error::TrendzError;
use crate::model::ProductRecord;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RequestStatus {
    Initial,
    InProgress,
    Success,
    Failure,
}

/// Why a fetch ended in `RequestStatus::Failure`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FailureKind {
    NotFound,
    Unauthorized,
    HttpStatus(u16),
    Network,
    MalformedBody,
    MissingToken,
}

/// User input on the quantity controls.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuantityAction {
    Increment,
    Decrement,
    AddToCart,
}

impl QuantityAction {
    pub fn parse(input: &str) -> Option<Self> {
        match input.trim() {
            "+" | "plus" => Some(QuantityAction::Increment),
            "-" | "minus" => Some(QuantityAction::Decrement),
            "a" | "add" => Some(QuantityAction::AddToCart),
            _ => None,
        }
    }
}

/// State of one mounted product screen.
///
/// Fields only change through the transition methods, which keep the
/// status linear (Initial -> InProgress -> Success | Failure), the quantity
/// at 1 or more, and the product data empty outside of Success.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScreenState {
    status: RequestStatus,
    product: Option<ProductRecord>,
    similar_products: Vec<ProductRecord>,
    quantity: u32,
    failure: Option<FailureKind>,
}

impl Default for ScreenState {
    fn default() -> Self {
        Self::new()
    }
}

impl ScreenState {
    pub fn new() -> Self {
        ScreenState {
            status: RequestStatus::Initial,
            product: None,
            similar_products: Vec::new(),
            quantity: 1,
            failure: None,
        }
    }

    pub fn status(&self) -> RequestStatus {
        self.status
    }

    pub fn product(&self) -> Option<&ProductRecord> {
        self.product.as_ref()
    }

    pub fn similar_products(&self) -> &[ProductRecord] {
        &self.similar_products
    }

    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    pub fn failure(&self) -> Option<FailureKind> {
        self.failure
    }

    pub fn begin_fetch(&mut self) -> Result<(), TrendzError> {
        self.transition(RequestStatus::Initial, RequestStatus::InProgress)
    }

    pub fn succeed(
        &mut self,
        product: ProductRecord,
        similar_products: Vec<ProductRecord>,
    ) -> Result<(), TrendzError> {
        self.transition(RequestStatus::InProgress, RequestStatus::Success)?;
        self.product = Some(product);
        self.similar_products = similar_products;
        Ok(())
    }

    pub fn fail(&mut self, kind: FailureKind) -> Result<(), TrendzError> {
        self.transition(RequestStatus::InProgress, RequestStatus::Failure)?;
        self.failure = Some(kind);
        Ok(())
    }

    pub fn increment_quantity(&mut self) {
        self.quantity = self.quantity.saturating_add(1);
    }

    pub fn decrement_quantity(&mut self) {
        if self.quantity > 1 {
            self.quantity -= 1;
        }
    }

    pub fn apply(&mut self, action: QuantityAction) {
        match action {
            QuantityAction::Increment => self.increment_quantity(),
            QuantityAction::Decrement => self.decrement_quantity(),
            QuantityAction::AddToCart => {
                tracing::debug!("Add to cart pressed; cart is not wired to this screen");
            }
        }
    }

    fn transition(&mut self, from: RequestStatus, to: RequestStatus) -> Result<(), TrendzError> {
        if self.status != from {
            return Err(TrendzError::InvalidTransition {
                from: self.status,
                to,
            });
        }
        tracing::debug!("Screen status {:?} -> {:?}", from, to);
        self.status = to;
        Ok(())
    }
}
