//! Get Product Handler

use std::sync::Arc;

use salvo::{oapi::extract::PathParam, prelude::*};
use uuid::Uuid;

use crate::{
    errors::ApiError, extensions::*, products::errors::into_api_error,
    products::handlers::ProductResponse, state::State,
};

/// Get Product Handler
///
/// Returns a live product with its live details.
#[endpoint(tags("products"), summary = "Get Product")]
pub(crate) async fn handler(
    product: PathParam<Uuid>,
    depot: &mut Depot,
) -> Result<Json<ProductResponse>, ApiError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let product = state
        .app
        .products
        .get_product(product.into_inner().into())
        .await
        .map_err(into_api_error)?;

    Ok(Json(product.into()))
}

#[cfg(test)]
mod tests {
    use salvo::test::{ResponseExt, TestClient};
    use testresult::TestResult;

    use maanushi_app::{
        context::AppContext,
        domain::products::{MockProductsService, ProductsServiceError, records::ProductUuid},
    };

    use crate::test_helpers::{admin_service, make_product, strict_context};

    use super::*;

    fn make_service(products: MockProductsService) -> Service {
        let app = AppContext {
            products: Arc::new(products),
            ..strict_context()
        };

        admin_service(app, Router::with_path("admin/products/{product}").get(handler))
    }

    fn mock_products() -> MockProductsService {
        let mut products = MockProductsService::new();

        products.expect_list_products().never();
        products.expect_create_product().never();
        products.expect_update_product().never();
        products.expect_add_product_details().never();
        products.expect_delete_product().never();

        products
    }

    #[tokio::test]
    async fn test_get_returns_200() -> TestResult {
        let uuid = ProductUuid::new();
        let mut products = mock_products();

        products
            .expect_get_product()
            .once()
            .withf(move |u| *u == uuid)
            .return_once(move |_| Ok(make_product(uuid)));

        let mut res = TestClient::get(format!("http://example.com/admin/products/{uuid}"))
            .send(&make_service(products))
            .await;

        let body: ProductResponse = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::OK));
        assert_eq!(body.uuid, uuid.into_uuid());
        assert_eq!(body.name, "Neem Soap");

        Ok(())
    }

    #[tokio::test]
    async fn test_get_missing_product_returns_404() -> TestResult {
        let uuid = ProductUuid::new();
        let mut products = mock_products();

        products
            .expect_get_product()
            .once()
            .withf(move |u| *u == uuid)
            .return_once(|_| Err(ProductsServiceError::NotFound));

        let res = TestClient::get(format!("http://example.com/admin/products/{uuid}"))
            .send(&make_service(products))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::NOT_FOUND));

        Ok(())
    }
}
