//! Test Helpers

use jiff::Timestamp;
use jiff_sqlx::Timestamp as SqlxTimestamp;
use sqlx::query;

use crate::{
    domain::{
        carts::{
            CartsService, CartsServiceError,
            data::{CartItemChange, NewCartItem},
            records::{CartItemUuid, CartUuid},
        },
        orders::records::{OrderDetailUuid, OrderStatus, OrderUuid, PaymentMode},
        products::{
            ProductsService, ProductsServiceError,
            data::{NewProduct, NewProductDetails},
            records::{ProductDetailsUuid, ProductUuid},
        },
        users::{
            UsersService, UsersServiceError,
            data::NewUser,
            records::{UserRecord, UserUuid},
        },
    },
    test::TestContext,
};

pub(crate) async fn create_user(
    ctx: &TestContext,
    email: &str,
) -> Result<UserRecord, UsersServiceError> {
    ctx.users
        .create_user(NewUser {
            uuid: UserUuid::new(),
            first_name: "Asha".to_string(),
            last_name: "Rao".to_string(),
            email: email.to_string(),
            phone_num: "9876543210".to_string(),
        })
        .await
}

/// Create a product with a single variant priced at `price`.
pub(crate) async fn create_product(
    ctx: &TestContext,
    name: &str,
    price: u64,
) -> Result<(ProductUuid, ProductDetailsUuid), ProductsServiceError> {
    let details = ProductDetailsUuid::new();

    let product = ctx
        .products
        .create_product(NewProduct {
            uuid: ProductUuid::new(),
            name: name.to_string(),
            description: String::new(),
            discount_price: None,
            details: vec![NewProductDetails {
                uuid: details,
                price,
                stock: 100,
            }],
        })
        .await?;

    Ok((product.uuid, details))
}

pub(crate) async fn add_item(
    ctx: &TestContext,
    cart: CartUuid,
    product_details: ProductDetailsUuid,
    quantity: u32,
) -> Result<CartItemChange, CartsServiceError> {
    ctx.carts
        .add_item(
            cart,
            NewCartItem {
                uuid: CartItemUuid::new(),
                product_details_uuid: product_details,
                quantity,
            },
        )
        .await
}

/// Insert an order directly; checkout lives outside this crate.
pub(crate) async fn place_order(
    ctx: &TestContext,
    user: UserUuid,
    payment_mode: PaymentMode,
    placed_at: Timestamp,
    lines: &[(ProductDetailsUuid, u32, OrderStatus)],
) -> Result<OrderUuid, sqlx::Error> {
    let order = OrderUuid::new();
    let mut tx = ctx.db.pool().begin().await?;

    query("INSERT INTO orders (uuid, user_uuid, payment_mode_id, placed_at) VALUES ($1, $2, $3, $4)")
        .bind(order.into_uuid())
        .bind(user.into_uuid())
        .bind(payment_mode.code())
        .bind(SqlxTimestamp::from(placed_at))
        .execute(&mut *tx)
        .await?;

    for (details, quantity, status) in lines {
        query(
            "INSERT INTO order_details (uuid, order_uuid, product_details_uuid, quantity, order_status_id) \
             VALUES ($1, $2, $3, $4, $5)",
        )
        .bind(OrderDetailUuid::new().into_uuid())
        .bind(order.into_uuid())
        .bind(details.into_uuid())
        .bind(i64::from(*quantity))
        .bind(status.code())
        .execute(&mut *tx)
        .await?;
    }

    tx.commit().await?;

    Ok(order)
}

/// Make every `UPDATE` on `carts` fail from here on.
pub(crate) async fn fail_grand_total_writes(ctx: &TestContext) -> Result<(), sqlx::Error> {
    query(
        "CREATE FUNCTION reject_cart_update() RETURNS trigger AS $$ \
         BEGIN RAISE EXCEPTION 'cart updates disabled'; END; \
         $$ LANGUAGE plpgsql",
    )
    .execute(ctx.db.pool())
    .await?;

    query(
        "CREATE TRIGGER reject_cart_update BEFORE UPDATE ON carts \
         FOR EACH ROW EXECUTE FUNCTION reject_cart_update()",
    )
    .execute(ctx.db.pool())
    .await?;

    Ok(())
}
