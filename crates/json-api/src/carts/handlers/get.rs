//! Get Cart Handler

use std::sync::Arc;

use salvo::{oapi::extract::PathParam, prelude::*};
use uuid::Uuid;

use crate::{
    carts::{errors::into_api_error, handlers::CartResponse},
    errors::ApiError,
    extensions::*,
    state::State,
};

/// Get Cart Handler
///
/// Returns the cart with its lines and grand total.
#[endpoint(tags("carts"), summary = "Get Cart")]
pub(crate) async fn handler(
    cart: PathParam<Uuid>,
    depot: &mut Depot,
) -> Result<Json<CartResponse>, ApiError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let cart = state
        .app
        .carts
        .get_cart(cart.into_inner().into())
        .await
        .map_err(into_api_error)?;

    Ok(Json(cart.into()))
}

#[cfg(test)]
mod tests {
    use salvo::test::{ResponseExt, TestClient};
    use testresult::TestResult;

    use maanushi_app::{
        context::AppContext,
        domain::carts::{
            CartsServiceError, MockCartsService,
            records::{CartItemUuid, CartUuid},
        },
    };

    use crate::test_helpers::{make_cart, make_cart_item, public_service, strict_context};

    use super::*;

    fn make_service(carts: MockCartsService) -> Service {
        let app = AppContext {
            carts: Arc::new(carts),
            ..strict_context()
        };

        public_service(app, Router::with_path("carts/{cart}").get(handler))
    }

    fn mock_carts() -> MockCartsService {
        let mut carts = MockCartsService::new();

        carts.expect_create_cart().never();
        carts.expect_get_user_cart().never();
        carts.expect_add_item().never();
        carts.expect_update_item().never();

        carts
    }

    #[tokio::test]
    async fn test_get_cart_returns_items_and_total() -> TestResult {
        let uuid = CartUuid::new();
        let mut carts = mock_carts();

        carts
            .expect_get_cart()
            .once()
            .withf(move |u| *u == uuid)
            .return_once(move |_| {
                Ok(make_cart(
                    uuid,
                    vec![
                        make_cart_item(CartItemUuid::new(), uuid, 1, 10),
                        make_cart_item(CartItemUuid::new(), uuid, 1, 5),
                    ],
                ))
            });

        let mut res = TestClient::get(format!("http://example.com/carts/{uuid}"))
            .send(&make_service(carts))
            .await;

        let body: CartResponse = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::OK));
        assert_eq!(body.items.len(), 2);
        assert_eq!(body.grand_total, 15);

        Ok(())
    }

    #[tokio::test]
    async fn test_get_missing_cart_returns_404() -> TestResult {
        let uuid = CartUuid::new();
        let mut carts = mock_carts();

        carts
            .expect_get_cart()
            .once()
            .return_once(|_| Err(CartsServiceError::NotFound));

        let res = TestClient::get(format!("http://example.com/carts/{uuid}"))
            .send(&make_service(carts))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::NOT_FOUND));

        Ok(())
    }

    #[tokio::test]
    async fn test_malformed_cart_id_returns_400() -> TestResult {
        let mut carts = mock_carts();

        carts.expect_get_cart().never();

        let res = TestClient::get("http://example.com/carts/not-a-uuid")
            .send(&make_service(carts))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));

        Ok(())
    }
}
