//! WooGraphQL client implementation.
//!
//! Uses `graphql_client` request and response envelopes with `reqwest` 0.13
//! for HTTP. Catalog reads are cached with `moka`; cart, account and checkout
//! calls are never cached and always carry a [`CommerceSession`].

use std::sync::Arc;
use std::time::Duration;

use graphql_client::{GraphQLQuery, Response};
use moka::future::Cache;
use secrecy::{ExposeSecret, SecretString};
use tracing::{debug, instrument, warn};
use woo_storefront_core::{
    Cart, CartLineInput, CartTarget, Category, Customer, OrderSummary, Product, ProductPage,
};

use super::cache::{CacheKey, CacheValue};
use super::conversions::{
    convert_added_item, convert_cart, convert_category, convert_checkout, convert_customer,
    convert_logged_in_user, convert_order, convert_payment_gateway, convert_product,
    convert_product_page,
};
use super::queries::{
    AddToCart, ChangePassword, Checkout, EmptyCart, GetCart, GetCustomer, GetCustomerOrders,
    GetPaymentGateways, GetProduct, GetProductCategories, GetProducts, Login, Logout,
    NoVariables, RegisterCustomer, RemoveItemsFromCart, RequestPasswordReset, ResetPassword,
    SuccessPayload, UpdateCustomer, UpdateItemQuantities, add_to_cart, change_password, checkout,
    empty_cart, get_customer_orders, get_product, get_product_categories, get_products, login,
    register_customer, remove_items_from_cart, request_password_reset, reset_password,
    update_customer, update_item_quantities,
};
use super::session::{CommerceSession, SESSION_HEADER};
use super::types::{
    AddedCartItem, CheckoutResult, CheckoutSubmission, PasswordChange, PasswordReset,
    PaymentGateway, ProductQuery, ProfileUpdate, Registration,
};
use super::{GraphQLError, GraphQLErrorLocation, WooError};
use crate::config::WooConfig;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(20);
const CATEGORY_PAGE_SIZE: i64 = 100;

// =============================================================================
// WooClient
// =============================================================================

/// Client for a WooGraphQL endpoint.
///
/// Cheap to clone; clones share the HTTP connection pool and the catalog
/// cache.
#[derive(Clone)]
pub struct WooClient {
    inner: Arc<WooClientInner>,
}

struct WooClientInner {
    client: reqwest::Client,
    endpoint: String,
    api_token: Option<SecretString>,
    cache: Cache<CacheKey, CacheValue>,
}

/// Parsed result of one request plus any session token the backend issued.
type Sent<T> = (Result<T, WooError>, Option<String>);

/// Credentials attached to one request.
#[derive(Default)]
struct RequestAuth<'a> {
    woo_session: Option<String>,
    bearer: Option<&'a str>,
}

impl WooClient {
    /// Create a new client.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be built (TLS backend
    /// initialization failure).
    pub fn new(config: &WooConfig) -> Result<Self, WooError> {
        let cache = Cache::builder()
            .max_capacity(1000)
            .time_to_live(config.product_cache_ttl)
            .build();

        let client = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()?;

        Ok(Self {
            inner: Arc::new(WooClientInner {
                client,
                endpoint: config.graphql_url.to_string(),
                api_token: config.api_token.clone(),
                cache,
            }),
        })
    }

    /// Execute a GraphQL operation without a shopper session.
    async fn execute_public<Q: GraphQLQuery>(
        &self,
        variables: Q::Variables,
    ) -> Result<Q::ResponseData, WooError> {
        let auth = RequestAuth {
            woo_session: None,
            bearer: self.inner.api_token.as_ref().map(ExposeSecret::expose_secret),
        };
        let (data, _) = self.send::<Q>(variables, auth).await?;
        data
    }

    /// Execute a GraphQL operation on behalf of `session`.
    ///
    /// A `woocommerce-session` header in the response replaces the token
    /// stored on the session, even when the response carries errors.
    async fn execute<Q: GraphQLQuery>(
        &self,
        session: &mut CommerceSession,
        variables: Q::Variables,
    ) -> Result<Q::ResponseData, WooError> {
        let auth = RequestAuth {
            woo_session: session.session_header_value(),
            bearer: session
                .auth_token()
                .or_else(|| self.inner.api_token.as_ref().map(ExposeSecret::expose_secret)),
        };
        let (data, new_token) = self.send::<Q>(variables, auth).await?;
        if let Some(token) = new_token
            && session.update_woo_session(&token)
        {
            debug!("Backend issued a new cart session token");
        }
        data
    }

    /// Send one operation. Returns the parsed result and any session token
    /// the backend handed out.
    async fn send<Q: GraphQLQuery>(
        &self,
        variables: Q::Variables,
        auth: RequestAuth<'_>,
    ) -> Result<Sent<Q::ResponseData>, WooError> {
        let request_body = Q::build_query(variables);

        let mut request = self
            .inner
            .client
            .post(&self.inner.endpoint)
            .header("Content-Type", "application/json")
            .json(&request_body);
        if let Some(session) = auth.woo_session {
            request = request.header(SESSION_HEADER, session);
        }
        if let Some(token) = auth.bearer {
            request = request.bearer_auth(token);
        }

        let response = request.send().await?;
        let status = response.status();
        let new_token = response
            .headers()
            .get(SESSION_HEADER)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string);

        // Check for rate limiting
        if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
            let retry_after = response
                .headers()
                .get("Retry-After")
                .and_then(|v| v.to_str().ok())
                .and_then(|s| s.parse::<u64>().ok())
                .unwrap_or(1);
            return Err(WooError::RateLimited(retry_after));
        }

        // Get response body as text first for better error diagnostics
        let response_text = response.text().await?;

        if !status.is_success() {
            tracing::error!(
                status = %status,
                body = %response_text.chars().take(500).collect::<String>(),
                "WooGraphQL returned non-success status"
            );
            return Err(WooError::Status {
                status: status.as_u16(),
                body: response_text.chars().take(200).collect(),
            });
        }

        let response: Response<Q::ResponseData> = match serde_json::from_str(&response_text) {
            Ok(r) => r,
            Err(e) => {
                tracing::error!(
                    error = %e,
                    body = %response_text.chars().take(500).collect::<String>(),
                    "Failed to parse WooGraphQL response"
                );
                return Err(WooError::Parse(e));
            }
        };

        Ok((into_data(response), new_token))
    }

    // =========================================================================
    // Catalog (cached)
    // =========================================================================

    /// Get a product by its slug.
    ///
    /// # Errors
    ///
    /// Returns [`WooError::NotFound`] if no product has this slug.
    #[instrument(skip(self))]
    pub async fn get_product_by_slug(&self, slug: &str) -> Result<Arc<Product>, WooError> {
        let cache_key = CacheKey::Product(slug.to_string());
        if let Some(CacheValue::Product(product)) = self.inner.cache.get(&cache_key).await {
            debug!("Cache hit for product");
            return Ok(product);
        }

        let data = self
            .execute_public::<GetProduct>(get_product::Variables {
                slug: slug.to_string(),
            })
            .await?;

        let product = Arc::new(convert_product(
            data.product
                .ok_or_else(|| WooError::NotFound(format!("Product not found: {slug}")))?,
        ));

        self.inner
            .cache
            .insert(cache_key, CacheValue::Product(Arc::clone(&product)))
            .await;

        Ok(product)
    }

    /// Get one page of the product listing.
    ///
    /// Pages without a search term are cached.
    ///
    /// # Errors
    ///
    /// Returns an error if the API request fails.
    #[instrument(skip(self))]
    pub async fn get_products(&self, query: ProductQuery) -> Result<ProductPage, WooError> {
        let query = query.normalized();
        let cache_key = CacheKey::Products(query.clone());
        if query.is_cacheable()
            && let Some(CacheValue::Products(page)) = self.inner.cache.get(&cache_key).await
        {
            debug!("Cache hit for product listing");
            return Ok(page);
        }

        let data = self
            .execute_public::<GetProducts>(get_products::Variables {
                first: query.first,
                after: query.after.clone(),
                search: query.search.clone(),
                category: query.category.clone(),
            })
            .await?;

        let page = data
            .products
            .map(convert_product_page)
            .unwrap_or_default();

        if query.is_cacheable() {
            self.inner
                .cache
                .insert(cache_key, CacheValue::Products(page.clone()))
                .await;
        }

        Ok(page)
    }

    /// List product categories.
    ///
    /// # Errors
    ///
    /// Returns an error if the API request fails.
    #[instrument(skip(self))]
    pub async fn get_categories(&self) -> Result<Arc<Vec<Category>>, WooError> {
        if let Some(CacheValue::Categories(categories)) =
            self.inner.cache.get(&CacheKey::Categories).await
        {
            debug!("Cache hit for categories");
            return Ok(categories);
        }

        let data = self
            .execute_public::<GetProductCategories>(get_product_categories::Variables {
                first: CATEGORY_PAGE_SIZE,
            })
            .await?;

        let categories = Arc::new(
            data.product_categories
                .unwrap_or_default()
                .nodes
                .into_iter()
                .map(convert_category)
                .collect::<Vec<_>>(),
        );

        self.inner
            .cache
            .insert(CacheKey::Categories, CacheValue::Categories(Arc::clone(&categories)))
            .await;

        Ok(categories)
    }

    /// Drop every cached catalog entry.
    pub fn invalidate_catalog(&self) {
        self.inner.cache.invalidate_all();
    }

    // =========================================================================
    // Cart (not cached - mutable state)
    // =========================================================================

    /// Fetch the session's cart.
    ///
    /// # Errors
    ///
    /// Returns an error if the API request fails.
    #[instrument(skip(self, session))]
    pub async fn get_cart(&self, session: &mut CommerceSession) -> Result<Cart, WooError> {
        let data = self.execute::<GetCart>(session, NoVariables {}).await?;
        Ok(data.cart.map(convert_cart).unwrap_or_default())
    }

    /// Add a product or variation to the session's cart.
    ///
    /// The input's idempotency token is sent as `clientMutationId`.
    ///
    /// # Errors
    ///
    /// Returns an error if the API request fails or the backend refuses the
    /// item (out of stock, not purchasable).
    #[instrument(skip(self, session, input), fields(target = ?input.target, quantity = %input.quantity))]
    pub async fn add_to_cart(
        &self,
        session: &mut CommerceSession,
        input: &CartLineInput,
    ) -> Result<AddedCartItem, WooError> {
        let (product_id, variation_id) = match input.target {
            CartTarget::Product { product_id } => (product_id.as_i64(), None),
            CartTarget::Variation {
                product_id,
                variation_id,
            } => (product_id.as_i64(), Some(variation_id.as_i64())),
        };

        let variables = add_to_cart::Variables {
            input: add_to_cart::AddToCartInput {
                client_mutation_id: input.idempotency_token.as_str().to_string(),
                product_id,
                quantity: i64::from(input.quantity.get()),
                variation_id,
            },
        };

        let data = self.execute::<AddToCart>(session, variables).await?;
        data.add_to_cart
            .map(convert_added_item)
            .ok_or_else(|| WooError::GraphQL(vec![GraphQLError::message("Failed to add item to cart")]))
    }

    /// Set line quantities. A quantity of 0 removes the line.
    ///
    /// # Errors
    ///
    /// Returns an error if the API request fails.
    #[instrument(skip(self, session))]
    pub async fn update_item_quantities(
        &self,
        session: &mut CommerceSession,
        items: &[(String, u32)],
    ) -> Result<Cart, WooError> {
        let variables = update_item_quantities::Variables {
            input: update_item_quantities::UpdateItemQuantitiesInput {
                client_mutation_id: mutation_id(),
                items: items
                    .iter()
                    .map(|(key, quantity)| update_item_quantities::CartItemQuantityInput {
                        key: key.clone(),
                        quantity: i64::from(*quantity),
                    })
                    .collect(),
            },
        };

        let data = self.execute::<UpdateItemQuantities>(session, variables).await?;
        cart_from_payload(data.update_item_quantities.and_then(|p| p.cart), "update cart")
    }

    /// Remove lines by key.
    ///
    /// # Errors
    ///
    /// Returns an error if the API request fails.
    #[instrument(skip(self, session))]
    pub async fn remove_items(
        &self,
        session: &mut CommerceSession,
        keys: &[String],
    ) -> Result<Cart, WooError> {
        let variables = remove_items_from_cart::Variables {
            input: remove_items_from_cart::RemoveItemsFromCartInput {
                client_mutation_id: mutation_id(),
                keys: keys.to_vec(),
            },
        };

        let data = self.execute::<RemoveItemsFromCart>(session, variables).await?;
        cart_from_payload(data.remove_items_from_cart.and_then(|p| p.cart), "remove cart items")
    }

    /// Remove every line.
    ///
    /// # Errors
    ///
    /// Returns an error if the API request fails.
    #[instrument(skip(self, session))]
    pub async fn empty_cart(&self, session: &mut CommerceSession) -> Result<Cart, WooError> {
        let variables = empty_cart::Variables {
            input: empty_cart::EmptyCartInput {
                client_mutation_id: mutation_id(),
                clear_persistent_cart: true,
            },
        };

        let data = self.execute::<EmptyCart>(session, variables).await?;
        Ok(data
            .empty_cart
            .and_then(|p| p.cart)
            .map(convert_cart)
            .unwrap_or_default())
    }

    // =========================================================================
    // Account
    // =========================================================================

    /// Log a customer in and store the auth token on `session`.
    ///
    /// # Errors
    ///
    /// Returns the backend's message for bad credentials, or an error if the
    /// API request fails.
    #[instrument(skip(self, session, password))]
    pub async fn login(
        &self,
        session: &mut CommerceSession,
        username: &str,
        password: &str,
    ) -> Result<Customer, WooError> {
        let variables = login::Variables {
            input: login::LoginInput {
                client_mutation_id: mutation_id(),
                username: username.to_string(),
                password: password.to_string(),
            },
        };

        let payload = self
            .execute::<Login>(session, variables)
            .await?
            .login
            .ok_or_else(|| WooError::UserError("Login failed".to_string()))?;

        let token = payload
            .auth_token
            .filter(|t| !t.is_empty())
            .ok_or_else(|| WooError::UserError("Login failed".to_string()))?;
        let user = payload
            .user
            .ok_or_else(|| WooError::UserError("Login failed".to_string()))?;

        session.set_auth_token(token);
        Ok(convert_logged_in_user(user))
    }

    /// Fetch the logged-in customer.
    ///
    /// # Errors
    ///
    /// Returns [`WooError::Unauthorized`] if `session` has no auth token.
    #[instrument(skip(self, session))]
    pub async fn get_customer(&self, session: &mut CommerceSession) -> Result<Customer, WooError> {
        require_auth(session)?;
        let data = self.execute::<GetCustomer>(session, NoVariables {}).await?;
        data.customer
            .map(convert_customer)
            .ok_or(WooError::Unauthorized)
    }

    /// Fetch the logged-in customer's most recent orders.
    ///
    /// # Errors
    ///
    /// Returns [`WooError::Unauthorized`] if `session` has no auth token.
    #[instrument(skip(self, session))]
    pub async fn get_customer_orders(
        &self,
        session: &mut CommerceSession,
        first: i64,
    ) -> Result<Vec<OrderSummary>, WooError> {
        require_auth(session)?;
        let data = self
            .execute::<GetCustomerOrders>(session, get_customer_orders::Variables { first })
            .await?;
        let customer = data.customer.ok_or(WooError::Unauthorized)?;
        Ok(customer
            .orders
            .unwrap_or_default()
            .nodes
            .into_iter()
            .map(convert_order)
            .collect())
    }

    /// End the customer's backend session.
    ///
    /// Local tokens are left alone; callers clear them whatever the outcome.
    ///
    /// # Errors
    ///
    /// Returns [`WooError::Unauthorized`] if `session` has no auth token, or
    /// an error if the API request fails.
    #[instrument(skip(self, session))]
    pub async fn logout(&self, session: &mut CommerceSession) -> Result<(), WooError> {
        require_auth(session)?;
        let data = self.execute::<Logout>(session, NoVariables {}).await?;
        succeeded(data.logout, "log out")
    }

    /// Create a customer account.
    ///
    /// The new customer is not logged in; follow with [`WooClient::login`].
    ///
    /// # Errors
    ///
    /// Returns the backend's message if the username or email is taken, or
    /// an error if the API request fails.
    #[instrument(skip(self, session, registration), fields(username = %registration.username))]
    pub async fn register(
        &self,
        session: &mut CommerceSession,
        registration: &Registration,
    ) -> Result<Customer, WooError> {
        let variables = register_customer::Variables {
            input: register_customer::RegisterCustomerInput {
                client_mutation_id: mutation_id(),
                username: registration.username.clone(),
                email: registration.email.clone(),
                password: registration.password.expose_secret().to_string(),
                first_name: registration.first_name.clone(),
                last_name: registration.last_name.clone(),
            },
        };

        let data = self.execute::<RegisterCustomer>(session, variables).await?;
        data.register_customer
            .and_then(|payload| payload.customer)
            .map(convert_customer)
            .ok_or_else(|| WooError::UserError("Registration failed".to_string()))
    }

    /// Change the logged-in customer's name, email, or addresses.
    ///
    /// # Errors
    ///
    /// Returns [`WooError::Unauthorized`] if `session` has no auth token, or
    /// the backend's message if the change is refused.
    #[instrument(skip(self, session, update))]
    pub async fn update_customer(
        &self,
        session: &mut CommerceSession,
        update: &ProfileUpdate,
    ) -> Result<Customer, WooError> {
        require_auth(session)?;
        let variables = update_customer::Variables {
            input: update_customer::UpdateCustomerInput {
                client_mutation_id: mutation_id(),
                first_name: update.first_name.clone(),
                last_name: update.last_name.clone(),
                email: update.email.clone(),
                billing: update.billing.clone().map(Into::into),
                shipping: update.shipping.clone().map(Into::into),
            },
        };

        let data = self.execute::<UpdateCustomer>(session, variables).await?;
        data.update_customer
            .and_then(|payload| payload.customer)
            .map(convert_customer)
            .ok_or_else(|| WooError::UserError("Could not update your account".to_string()))
    }

    /// Change the logged-in customer's password.
    ///
    /// # Errors
    ///
    /// Returns [`WooError::Unauthorized`] if `session` has no auth token, or
    /// the backend's message if the current password is wrong.
    #[instrument(skip(self, session, change))]
    pub async fn change_password(
        &self,
        session: &mut CommerceSession,
        change: &PasswordChange,
    ) -> Result<(), WooError> {
        require_auth(session)?;
        let variables = change_password::Variables {
            input: change_password::ChangePasswordInput {
                client_mutation_id: mutation_id(),
                current_password: change.current_password.expose_secret().to_string(),
                new_password: change.new_password.expose_secret().to_string(),
            },
        };

        let data = self.execute::<ChangePassword>(session, variables).await?;
        succeeded(data.change_password, "change the password")
    }

    /// Ask the backend to email a password reset link.
    ///
    /// # Errors
    ///
    /// Returns an error if the API request fails or the backend refuses.
    #[instrument(skip(self, session))]
    pub async fn request_password_reset(
        &self,
        session: &mut CommerceSession,
        username: &str,
    ) -> Result<(), WooError> {
        let variables = request_password_reset::Variables {
            input: request_password_reset::RequestPasswordResetInput {
                client_mutation_id: mutation_id(),
                username: username.to_string(),
            },
        };

        let data = self.execute::<RequestPasswordReset>(session, variables).await?;
        succeeded(data.request_password_reset, "send the reset email")
    }

    /// Set a new password using the key from a reset email.
    ///
    /// # Errors
    ///
    /// Returns the backend's message if the key is invalid or expired.
    #[instrument(skip(self, session, reset), fields(login = %reset.login))]
    pub async fn reset_password(
        &self,
        session: &mut CommerceSession,
        reset: &PasswordReset,
    ) -> Result<(), WooError> {
        let variables = reset_password::Variables {
            input: reset_password::ResetPasswordInput {
                client_mutation_id: mutation_id(),
                key: reset.key.clone(),
                login: reset.login.clone(),
                password: reset.password.expose_secret().to_string(),
            },
        };

        let data = self.execute::<ResetPassword>(session, variables).await?;
        succeeded(data.reset_password, "reset the password")
    }

    // =========================================================================
    // Checkout
    // =========================================================================

    /// List the enabled payment gateways.
    ///
    /// # Errors
    ///
    /// Returns an error if the API request fails.
    #[instrument(skip(self, session))]
    pub async fn get_payment_gateways(
        &self,
        session: &mut CommerceSession,
    ) -> Result<Vec<PaymentGateway>, WooError> {
        let data = self
            .execute::<GetPaymentGateways>(session, NoVariables {})
            .await?;
        Ok(data
            .payment_gateways
            .unwrap_or_default()
            .nodes
            .into_iter()
            .map(convert_payment_gateway)
            .collect())
    }

    /// Place an order for the session's cart.
    ///
    /// # Errors
    ///
    /// Returns the backend's message if the order is refused, or an error if
    /// the API request fails.
    #[instrument(skip(self, session, submission), fields(payment_method = %submission.payment_method))]
    pub async fn checkout(
        &self,
        session: &mut CommerceSession,
        submission: &CheckoutSubmission,
    ) -> Result<CheckoutResult, WooError> {
        let address = address_input(submission);
        let variables = checkout::Variables {
            input: checkout::CheckoutInput {
                client_mutation_id: mutation_id(),
                payment_method: submission.payment_method.clone(),
                billing: address.clone(),
                shipping: checkout::CustomerAddressInput {
                    email: None,
                    phone: None,
                    ..address
                },
                ship_to_different_address: false,
                customer_note: submission.customer_note.clone(),
            },
        };

        let data = self.execute::<Checkout>(session, variables).await?;
        let result = data
            .checkout
            .map(convert_checkout)
            .ok_or_else(|| WooError::GraphQL(vec![GraphQLError::message("Checkout failed")]))?;

        if result.order.is_none() {
            warn!(result = ?result.result, "Checkout returned no order");
        }
        Ok(result)
    }
}

/// Turn a GraphQL envelope into data or an error.
fn into_data<T>(response: Response<T>) -> Result<T, WooError> {
    if let Some(errors) = response.errors
        && !errors.is_empty()
    {
        debug!(errors = ?errors, "GraphQL errors in response");

        return Err(WooError::GraphQL(
            errors
                .into_iter()
                .map(|e| GraphQLError {
                    message: e.message,
                    locations: e.locations.map_or_else(Vec::new, |locs| {
                        locs.into_iter()
                            .map(|l| GraphQLErrorLocation {
                                line: i64::from(l.line),
                                column: i64::from(l.column),
                            })
                            .collect()
                    }),
                    path: e.path.map_or_else(Vec::new, |p| {
                        p.into_iter()
                            .map(|fragment| match fragment {
                                graphql_client::PathFragment::Key(k) => {
                                    serde_json::Value::String(k)
                                }
                                graphql_client::PathFragment::Index(i) => {
                                    serde_json::Value::Number(i.into())
                                }
                            })
                            .collect()
                    }),
                })
                .collect(),
        ));
    }

    response
        .data
        .ok_or_else(|| WooError::GraphQL(vec![GraphQLError::message("No data in response")]))
}

fn require_auth(session: &CommerceSession) -> Result<(), WooError> {
    if session.is_authenticated() {
        Ok(())
    } else {
        Err(WooError::Unauthorized)
    }
}

/// `Ok` only for an explicit `success: true`.
fn succeeded(payload: Option<SuccessPayload>, action: &str) -> Result<(), WooError> {
    if payload.and_then(|p| p.success) == Some(true) {
        Ok(())
    } else {
        Err(WooError::UserError(format!("Could not {action}")))
    }
}

fn mutation_id() -> String {
    uuid::Uuid::new_v4().to_string()
}

fn cart_from_payload(
    cart: Option<super::queries::CartNode>,
    action: &str,
) -> Result<Cart, WooError> {
    cart.map(convert_cart)
        .ok_or_else(|| WooError::GraphQL(vec![GraphQLError::message(format!("Failed to {action}"))]))
}

fn address_input(submission: &CheckoutSubmission) -> checkout::CustomerAddressInput {
    let billing = &submission.billing;
    checkout::CustomerAddressInput {
        first_name: billing.first_name.clone().unwrap_or_default(),
        last_name: billing.last_name.clone().unwrap_or_default(),
        address1: billing.address1.clone().unwrap_or_default(),
        city: billing.city.clone().unwrap_or_default(),
        state: billing.state.clone().unwrap_or_default(),
        postcode: billing.postcode.clone(),
        country: billing.country.clone().unwrap_or_default(),
        email: billing.email.clone(),
        phone: billing.phone.clone(),
    }
}
