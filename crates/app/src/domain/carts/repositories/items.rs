//! Cart Items Repository

use jiff_sqlx::Timestamp as SqlxTimestamp;
use sqlx::{FromRow, Postgres, Row, Transaction, postgres::PgRow, query, query_as};

use crate::{
    database::{amount_to_i64, try_get_amount, try_get_quantity},
    domain::{
        carts::records::{CartItemRecord, CartItemUuid, CartUuid},
        products::records::ProductDetailsUuid,
    },
};

const GET_CART_ITEMS_SQL: &str = include_str!("../sql/get_cart_items.sql");
const GET_CART_ITEM_SQL: &str = include_str!("../sql/get_cart_item.sql");
const FIND_CART_ITEM_BY_PRODUCT_DETAILS_SQL: &str =
    include_str!("../sql/find_cart_item_by_product_details.sql");
const CREATE_CART_ITEM_SQL: &str = include_str!("../sql/create_cart_item.sql");
const UPDATE_CART_ITEM_SQL: &str = include_str!("../sql/update_cart_item.sql");
const SUM_CART_ITEM_TOTALS_SQL: &str = include_str!("../sql/sum_cart_item_totals.sql");
const GET_UNIT_PRICE_SQL: &str = include_str!("../sql/get_unit_price.sql");

#[derive(Debug, Clone, Default)]
pub(crate) struct PgCartItemsRepository;

impl PgCartItemsRepository {
    #[must_use]
    pub(crate) fn new() -> Self {
        Self
    }

    pub(crate) async fn get_cart_items(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        cart: CartUuid,
    ) -> Result<Vec<CartItemRecord>, sqlx::Error> {
        query_as::<Postgres, CartItemRecord>(GET_CART_ITEMS_SQL)
            .bind(cart.into_uuid())
            .fetch_all(&mut **tx)
            .await
    }

    pub(crate) async fn get_cart_item(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        cart: CartUuid,
        item: CartItemUuid,
    ) -> Result<CartItemRecord, sqlx::Error> {
        query_as::<Postgres, CartItemRecord>(GET_CART_ITEM_SQL)
            .bind(cart.into_uuid())
            .bind(item.into_uuid())
            .fetch_one(&mut **tx)
            .await
    }

    pub(crate) async fn find_by_product_details(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        cart: CartUuid,
        product_details: ProductDetailsUuid,
    ) -> Result<Option<CartItemRecord>, sqlx::Error> {
        query_as::<Postgres, CartItemRecord>(FIND_CART_ITEM_BY_PRODUCT_DETAILS_SQL)
            .bind(cart.into_uuid())
            .bind(product_details.into_uuid())
            .fetch_optional(&mut **tx)
            .await
    }

    pub(crate) async fn create_cart_item(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        cart: CartUuid,
        item: CartItemUuid,
        product_details: ProductDetailsUuid,
        quantity: u32,
        total_price: u64,
    ) -> Result<CartItemRecord, sqlx::Error> {
        query_as::<Postgres, CartItemRecord>(CREATE_CART_ITEM_SQL)
            .bind(item.into_uuid())
            .bind(cart.into_uuid())
            .bind(product_details.into_uuid())
            .bind(i64::from(quantity))
            .bind(amount_to_i64(total_price, "total_price")?)
            .fetch_one(&mut **tx)
            .await
    }

    pub(crate) async fn update_cart_item(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        item: CartItemUuid,
        quantity: u32,
        total_price: u64,
    ) -> Result<CartItemRecord, sqlx::Error> {
        query_as::<Postgres, CartItemRecord>(UPDATE_CART_ITEM_SQL)
            .bind(item.into_uuid())
            .bind(i64::from(quantity))
            .bind(amount_to_i64(total_price, "total_price")?)
            .fetch_one(&mut **tx)
            .await
    }

    /// Sum of the line totals currently visible in `tx`; zero for an empty cart.
    pub(crate) async fn sum_item_totals(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        cart: CartUuid,
    ) -> Result<u64, sqlx::Error> {
        let row = query(SUM_CART_ITEM_TOTALS_SQL)
            .bind(cart.into_uuid())
            .fetch_one(&mut **tx)
            .await?;

        try_get_amount(&row, "grand_total")
    }

    /// Price of live product details; `RowNotFound` when missing or soft-deleted.
    pub(crate) async fn get_unit_price(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        product_details: ProductDetailsUuid,
    ) -> Result<u64, sqlx::Error> {
        let row = query(GET_UNIT_PRICE_SQL)
            .bind(product_details.into_uuid())
            .fetch_one(&mut **tx)
            .await?;

        try_get_amount(&row, "price")
    }
}

impl<'r> FromRow<'r, PgRow> for CartItemRecord {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        Ok(Self {
            uuid: CartItemUuid::from_uuid(row.try_get("uuid")?),
            cart_uuid: CartUuid::from_uuid(row.try_get("cart_uuid")?),
            product_details_uuid: ProductDetailsUuid::from_uuid(
                row.try_get("product_details_uuid")?,
            ),
            quantity: try_get_quantity(row, "quantity")?,
            total_price: try_get_amount(row, "total_price")?,
            created_at: row.try_get::<SqlxTimestamp, _>("created_at")?.to_jiff(),
            updated_at: row.try_get::<SqlxTimestamp, _>("updated_at")?.to_jiff(),
        })
    }
}
