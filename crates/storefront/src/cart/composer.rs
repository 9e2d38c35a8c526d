//! Add-to-cart composition.
//!
//! ```text
//! Idle ─▶ Validating ─┬─▶ Rejected
//!                     └─▶ Submitting ─┬─▶ Succeeded
//!                                     └─▶ Failed
//! ```
//!
//! Terminal states are reported through [`AddToCartOutcome`]; the view
//! returns to `Idle` as soon as the attempt finishes.

use std::collections::HashMap;
use std::sync::{Mutex, PoisonError};

use async_trait::async_trait;
use serde::Serialize;
use tracing::{debug, info, instrument, warn};
use woo_storefront_core::catalog::{Selection, resolve_variation};
use woo_storefront_core::{Cart, CartLineInput, CartTarget, Product, ProductId, ProductKind, Quantity};

use crate::woo::{AddedCartItem, CommerceSession, WooClient, WooError};

/// Shown when the backend gave no usable explanation.
pub const GENERIC_FAILURE_MESSAGE: &str = "Could not add the item to your cart. Please try again.";

/// The backend side of an add-to-cart.
#[async_trait]
pub trait CartBackend: Send + Sync {
    /// Submit one `addToCart` mutation.
    async fn add_to_cart(
        &self,
        session: &mut CommerceSession,
        input: &CartLineInput,
    ) -> Result<AddedCartItem, WooError>;
}

#[async_trait]
impl CartBackend for WooClient {
    async fn add_to_cart(
        &self,
        session: &mut CommerceSession,
        input: &CartLineInput,
    ) -> Result<AddedCartItem, WooError> {
        Self::add_to_cart(self, session, input).await
    }
}

/// Identity of one product view: the shopper's HTTP session plus the product.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ViewKey {
    session: String,
    product: ProductId,
}

impl ViewKey {
    /// Key for `product` as seen by `session`.
    #[must_use]
    pub fn new(session: impl Into<String>, product: ProductId) -> Self {
        Self {
            session: session.into(),
            product,
        }
    }
}

/// Where an add-to-cart attempt stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AttemptState {
    Idle,
    Validating,
    Submitting,
    Rejected,
    Succeeded,
    Failed,
}

/// Why an attempt was refused before reaching the backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "reason", rename_all = "snake_case")]
pub enum RejectReason {
    /// A variable product without a matching variation.
    SelectionIncomplete,
    /// Bought on another site.
    ExternalPurchase { url: String },
    /// Grouped products are added child by child.
    GroupedProduct,
    /// An attempt for this view is still running.
    AlreadyInFlight,
}

impl std::fmt::Display for RejectReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::SelectionIncomplete => f.write_str("Please choose a color and size."),
            Self::ExternalPurchase { url } => write!(f, "This product is sold at {url}."),
            Self::GroupedProduct => f.write_str("Add the products in this group individually."),
            Self::AlreadyInFlight => f.write_str("Already adding this item to your cart."),
        }
    }
}

/// Result of [`CartComposer::add_to_cart`]. Never an error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum AddToCartOutcome {
    /// The backend created or updated a line.
    Added {
        cart_line_key: String,
        cart: Option<Cart>,
    },
    /// Refused locally; nothing was sent.
    Rejected {
        #[serde(flatten)]
        reason: RejectReason,
        message: String,
    },
    /// Sent, but the backend did not add the item.
    Failed { message: String },
}

impl AddToCartOutcome {
    fn rejected(reason: RejectReason) -> Self {
        Self::Rejected {
            message: reason.to_string(),
            reason,
        }
    }

    /// The terminal state this outcome corresponds to.
    #[must_use]
    pub const fn state(&self) -> AttemptState {
        match self {
            Self::Added { .. } => AttemptState::Succeeded,
            Self::Rejected { .. } => AttemptState::Rejected,
            Self::Failed { .. } => AttemptState::Failed,
        }
    }
}

/// One add-to-cart request from a product view.
#[derive(Debug, Clone, Copy)]
pub struct AddToCartRequest<'a> {
    pub view_key: &'a ViewKey,
    pub product: &'a Product,
    pub selection: &'a Selection,
    pub quantity: Quantity,
}

/// Decide what a view's add-to-cart would buy.
///
/// # Errors
///
/// Returns the [`RejectReason`] for products that cannot be added as-is.
pub fn cart_target(product: &Product, selection: &Selection) -> Result<CartTarget, RejectReason> {
    match &product.kind {
        ProductKind::Simple { .. } => Ok(CartTarget::Product {
            product_id: product.database_id,
        }),
        ProductKind::Variable { .. } => resolve_variation(product, selection)
            .map(|variation| CartTarget::Variation {
                product_id: product.database_id,
                variation_id: variation.database_id,
            })
            .ok_or(RejectReason::SelectionIncomplete),
        ProductKind::External { external_url, .. } => Err(RejectReason::ExternalPurchase {
            url: external_url.clone(),
        }),
        ProductKind::Group { .. } => Err(RejectReason::GroupedProduct),
    }
}

type Attempts = Mutex<HashMap<ViewKey, AttemptState>>;

/// Submits add-to-cart mutations, at most one in flight per view.
pub struct CartComposer<B> {
    backend: B,
    attempts: Attempts,
}

/// Marks a view as busy until dropped.
struct InFlight<'a> {
    attempts: &'a Attempts,
    key: ViewKey,
}

impl InFlight<'_> {
    fn transition(&self, state: AttemptState) {
        self.attempts
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(self.key.clone(), state);
    }
}

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        self.attempts
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .remove(&self.key);
    }
}

impl<B: CartBackend> CartComposer<B> {
    /// Create a composer over `backend`.
    #[must_use]
    pub fn new(backend: B) -> Self {
        Self {
            backend,
            attempts: Mutex::new(HashMap::new()),
        }
    }

    /// The backend this composer submits to.
    #[must_use]
    pub const fn backend(&self) -> &B {
        &self.backend
    }

    /// Current state of a view's attempt.
    #[must_use]
    pub fn state(&self, key: &ViewKey) -> AttemptState {
        self.attempts
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .get(key)
            .copied()
            .unwrap_or(AttemptState::Idle)
    }

    fn begin(&self, key: &ViewKey) -> Option<InFlight<'_>> {
        let mut attempts = self.attempts.lock().unwrap_or_else(PoisonError::into_inner);
        if attempts.contains_key(key) {
            return None;
        }
        attempts.insert(key.clone(), AttemptState::Validating);
        Some(InFlight {
            attempts: &self.attempts,
            key: key.clone(),
        })
    }

    /// Add the view's current choice to the cart.
    ///
    /// Validation happens before any network call. A backend refusal
    /// surfaces the backend's own message; transport failures get a
    /// generic retry message. Nothing here retries automatically.
    #[instrument(skip_all, fields(product = %request.product.database_id, quantity = %request.quantity))]
    pub async fn add_to_cart(
        &self,
        session: &mut CommerceSession,
        request: AddToCartRequest<'_>,
    ) -> AddToCartOutcome {
        let Some(attempt) = self.begin(request.view_key) else {
            debug!("Add to cart already in flight for this view");
            return AddToCartOutcome::rejected(RejectReason::AlreadyInFlight);
        };

        let target = match cart_target(request.product, request.selection) {
            Ok(target) => target,
            Err(reason) => {
                info!(reason = ?reason, "Add to cart rejected");
                return AddToCartOutcome::rejected(reason);
            }
        };

        let input = CartLineInput::new(target, request.quantity);
        attempt.transition(AttemptState::Submitting);

        let outcome = match self.backend.add_to_cart(session, &input).await {
            Ok(AddedCartItem {
                key: Some(key),
                cart,
                ..
            }) => AddToCartOutcome::Added {
                cart_line_key: key,
                cart,
            },
            Ok(_) => {
                warn!("addToCart returned no cart item key");
                AddToCartOutcome::Failed {
                    message: GENERIC_FAILURE_MESSAGE.to_string(),
                }
            }
            Err(e) if e.is_transport() => {
                warn!(error = %e, "Add to cart transport failure");
                AddToCartOutcome::Failed {
                    message: GENERIC_FAILURE_MESSAGE.to_string(),
                }
            }
            Err(e) => {
                info!(error = %e, "Backend refused add to cart");
                AddToCartOutcome::Failed {
                    message: e
                        .backend_message()
                        .unwrap_or_else(|| GENERIC_FAILURE_MESSAGE.to_string()),
                }
            }
        };

        attempt.transition(outcome.state());
        outcome
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    use tokio::sync::Notify;
    use woo_storefront_core::{
        Attribute, GlobalId, GroupChild, Pricing, StockStatus, Variation, VariationId,
    };

    use super::*;
    use crate::woo::GraphQLError;

    /// Scripted backend that records every input it receives.
    #[derive(Default)]
    struct FakeBackend {
        calls: AtomicUsize,
        inputs: Mutex<Vec<CartLineInput>>,
        response: Mutex<Option<Result<AddedCartItem, WooError>>>,
        gate: Option<Arc<Notify>>,
    }

    impl FakeBackend {
        fn responding(response: Result<AddedCartItem, WooError>) -> Self {
            Self {
                response: Mutex::new(Some(response)),
                ..Self::default()
            }
        }

        fn calls(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl CartBackend for FakeBackend {
        async fn add_to_cart(
            &self,
            _session: &mut CommerceSession,
            input: &CartLineInput,
        ) -> Result<AddedCartItem, WooError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.inputs.lock().unwrap().push(input.clone());
            if let Some(gate) = &self.gate {
                gate.notified().await;
            }
            self.response.lock().unwrap().take().unwrap_or_else(|| Ok(added("line-1")))
        }
    }

    fn added(key: &str) -> AddedCartItem {
        AddedCartItem {
            key: Some(key.to_string()),
            quantity: Some(1),
            cart: None,
        }
    }

    fn variation(id: i64, color: &str, size: &str) -> Variation {
        Variation {
            id: GlobalId::new(format!("v{id}")),
            database_id: VariationId::new(id),
            name: format!("Variation {id}"),
            stock_status: StockStatus::InStock,
            stock_quantity: None,
            purchasable: true,
            on_sale: false,
            pricing: Pricing::default(),
            attributes: vec![Attribute::new("pa_color", color), Attribute::new("pa_size", size)],
        }
    }

    fn product(kind: ProductKind) -> Product {
        Product {
            id: GlobalId::new("p"),
            database_id: ProductId::new(100),
            slug: "ao-so-mi".to_string(),
            name: "Áo sơ mi".to_string(),
            description: None,
            on_sale: false,
            average_rating: None,
            image: None,
            kind,
        }
    }

    fn variable() -> Product {
        product(ProductKind::Variable {
            pricing: Pricing::default(),
            variations: vec![variation(101, "red", "m"), variation(102, "red", "l")],
            color_terms: vec![],
            size_terms: vec![],
        })
    }

    fn selection(color: &str, size: &str) -> Selection {
        Selection {
            color: color.to_string(),
            size: size.to_string(),
        }
    }

    fn key() -> ViewKey {
        ViewKey::new("session-1", ProductId::new(100))
    }

    async fn add(
        composer: &CartComposer<FakeBackend>,
        product: &Product,
        selection: &Selection,
        quantity: Quantity,
    ) -> AddToCartOutcome {
        let view_key = key();
        let mut session = CommerceSession::default();
        composer
            .add_to_cart(
                &mut session,
                AddToCartRequest {
                    view_key: &view_key,
                    product,
                    selection,
                    quantity,
                },
            )
            .await
    }

    #[tokio::test]
    async fn test_variable_product_submits_matched_variation() {
        let composer = CartComposer::new(FakeBackend::default());
        let outcome = add(&composer, &variable(), &selection("red", "l"), Quantity::clamped(2)).await;

        assert_eq!(
            outcome,
            AddToCartOutcome::Added {
                cart_line_key: "line-1".to_string(),
                cart: None,
            }
        );
        let inputs = composer.backend().inputs.lock().unwrap();
        let input = inputs.first().unwrap();
        assert_eq!(
            input.target,
            CartTarget::Variation {
                product_id: ProductId::new(100),
                variation_id: VariationId::new(102),
            }
        );
        assert_eq!(input.quantity.get(), 2);
    }

    #[tokio::test]
    async fn test_incomplete_selection_is_rejected_without_network() {
        let composer = CartComposer::new(FakeBackend::default());
        let outcome = add(&composer, &variable(), &selection("red", ""), Quantity::ONE).await;

        assert!(matches!(
            outcome,
            AddToCartOutcome::Rejected {
                reason: RejectReason::SelectionIncomplete,
                ..
            }
        ));
        assert_eq!(composer.backend().calls(), 0);
        assert_eq!(composer.state(&key()), AttemptState::Idle);
    }

    #[tokio::test]
    async fn test_simple_product_uses_product_id() {
        let composer = CartComposer::new(FakeBackend::default());
        let simple = product(ProductKind::Simple {
            pricing: Pricing::default(),
            stock_quantity: None,
        });
        add(&composer, &simple, &Selection::default(), Quantity::from_input("0")).await;

        let inputs = composer.backend().inputs.lock().unwrap();
        let input = inputs.first().unwrap();
        assert_eq!(
            input.target,
            CartTarget::Product {
                product_id: ProductId::new(100)
            }
        );
        assert_eq!(input.quantity, Quantity::ONE);
    }

    #[tokio::test]
    async fn test_external_and_group_products_are_rejected() {
        let composer = CartComposer::new(FakeBackend::default());
        let external = product(ProductKind::External {
            price: None,
            external_url: "https://partner.example/item".to_string(),
        });
        let outcome = add(&composer, &external, &Selection::default(), Quantity::ONE).await;
        assert!(matches!(
            outcome,
            AddToCartOutcome::Rejected {
                reason: RejectReason::ExternalPurchase { ref url },
                ..
            } if url == "https://partner.example/item"
        ));

        let group = product(ProductKind::Group {
            children: vec![GroupChild {
                id: GlobalId::new("c"),
                database_id: ProductId::new(301),
                name: "Mũ".to_string(),
                price: None,
            }],
        });
        let outcome = add(&composer, &group, &Selection::default(), Quantity::ONE).await;
        assert_eq!(outcome.state(), AttemptState::Rejected);
        assert_eq!(composer.backend().calls(), 0);
    }

    #[tokio::test]
    async fn test_backend_message_is_passed_through_verbatim() {
        let composer = CartComposer::new(FakeBackend::responding(Err(WooError::GraphQL(vec![
            GraphQLError::message("Bạn không thể thêm \"Áo sơ mi\" vào giỏ hàng vì sản phẩm đã hết hàng."),
        ]))));
        let outcome = add(&composer, &variable(), &selection("red", "m"), Quantity::ONE).await;
        assert_eq!(
            outcome,
            AddToCartOutcome::Failed {
                message: "Bạn không thể thêm \"Áo sơ mi\" vào giỏ hàng vì sản phẩm đã hết hàng."
                    .to_string()
            }
        );
    }

    #[tokio::test]
    async fn test_transport_failure_gets_generic_message() {
        let composer = CartComposer::new(FakeBackend::responding(Err(WooError::Status {
            status: 503,
            body: "Service Unavailable".to_string(),
        })));
        let outcome = add(&composer, &variable(), &selection("red", "m"), Quantity::ONE).await;
        assert_eq!(
            outcome,
            AddToCartOutcome::Failed {
                message: GENERIC_FAILURE_MESSAGE.to_string()
            }
        );
        assert_eq!(composer.state(&key()), AttemptState::Idle);
    }

    #[tokio::test]
    async fn test_rate_limit_gets_generic_message() {
        let composer = CartComposer::new(FakeBackend::responding(Err(WooError::RateLimited(30))));
        let outcome = add(&composer, &variable(), &selection("red", "m"), Quantity::ONE).await;
        assert_eq!(
            outcome,
            AddToCartOutcome::Failed {
                message: GENERIC_FAILURE_MESSAGE.to_string()
            }
        );
    }

    #[tokio::test]
    async fn test_refusal_without_message_gets_generic_message() {
        let composer = CartComposer::new(FakeBackend::responding(Err(WooError::Unauthorized)));
        let outcome = add(&composer, &variable(), &selection("red", "m"), Quantity::ONE).await;
        assert_eq!(
            outcome,
            AddToCartOutcome::Failed {
                message: GENERIC_FAILURE_MESSAGE.to_string()
            }
        );
    }

    #[tokio::test]
    async fn test_missing_line_key_is_a_failure() {
        let composer = CartComposer::new(FakeBackend::responding(Ok(AddedCartItem {
            key: None,
            quantity: None,
            cart: None,
        })));
        let outcome = add(&composer, &variable(), &selection("red", "m"), Quantity::ONE).await;
        assert_eq!(outcome.state(), AttemptState::Failed);
    }

    #[tokio::test]
    async fn test_fresh_token_per_attempt() {
        let composer = CartComposer::new(FakeBackend::default());
        add(&composer, &variable(), &selection("red", "m"), Quantity::ONE).await;
        add(&composer, &variable(), &selection("red", "m"), Quantity::ONE).await;

        let inputs = composer.backend().inputs.lock().unwrap();
        assert_eq!(inputs.len(), 2);
        assert_ne!(
            inputs.first().unwrap().idempotency_token,
            inputs.last().unwrap().idempotency_token
        );
    }

    #[tokio::test]
    async fn test_second_submit_while_in_flight_is_rejected() {
        let gate = Arc::new(Notify::new());
        let composer = Arc::new(CartComposer::new(FakeBackend {
            gate: Some(Arc::clone(&gate)),
            ..FakeBackend::default()
        }));

        let first = {
            let composer = Arc::clone(&composer);
            tokio::spawn(async move {
                add(&composer, &variable(), &selection("red", "m"), Quantity::ONE).await
            })
        };

        while composer.state(&key()) != AttemptState::Submitting {
            tokio::task::yield_now().await;
        }

        let second = add(&composer, &variable(), &selection("red", "m"), Quantity::ONE).await;
        assert!(matches!(
            second,
            AddToCartOutcome::Rejected {
                reason: RejectReason::AlreadyInFlight,
                ..
            }
        ));
        assert_eq!(composer.backend().calls(), 1);

        gate.notify_one();
        let first = first.await.unwrap();
        assert_eq!(first.state(), AttemptState::Succeeded);
        assert_eq!(composer.state(&key()), AttemptState::Idle);

        // The guard is released, so the next click goes through.
        let third = add(&composer, &variable(), &selection("red", "m"), Quantity::ONE).await;
        assert_eq!(third.state(), AttemptState::Succeeded);
    }

    #[tokio::test]
    async fn test_other_views_are_not_blocked() {
        let composer = CartComposer::new(FakeBackend::default());
        let _busy = composer.begin(&key()).unwrap();

        let other = ViewKey::new("session-2", ProductId::new(100));
        let mut session = CommerceSession::default();
        let product = variable();
        let selection = selection("red", "m");
        let outcome = composer
            .add_to_cart(
                &mut session,
                AddToCartRequest {
                    view_key: &other,
                    product: &product,
                    selection: &selection,
                    quantity: Quantity::ONE,
                },
            )
            .await;
        assert_eq!(outcome.state(), AttemptState::Succeeded);
    }

    #[test]
    fn test_outcome_serializes_with_status_tag() {
        let json = serde_json::to_value(AddToCartOutcome::rejected(
            RejectReason::ExternalPurchase {
                url: "https://partner.example".to_string(),
            },
        ))
        .unwrap();
        assert_eq!(json["status"], "rejected");
        assert_eq!(json["reason"], "external_purchase");
        assert_eq!(json["url"], "https://partner.example");
    }
}
