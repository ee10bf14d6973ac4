//! Carts service.

use async_trait::async_trait;
use mockall::automock;
use sqlx::{Postgres, Transaction};
use tracing::{Span, info};

use crate::{
    database::Db,
    domain::{
        carts::{
            data::{CartItemChange, NewCart, NewCartItem},
            errors::CartsServiceError,
            records::{CartItemRecord, CartItemUuid, CartRecord, CartUuid},
            repositories::{PgCartItemsRepository, PgCartsRepository},
        },
        users::records::UserUuid,
    },
};

#[derive(Debug, Clone)]
pub struct PgCartsService {
    db: Db,
    carts_repository: PgCartsRepository,
    items_repository: PgCartItemsRepository,
}

impl PgCartsService {
    #[must_use]
    pub fn new(db: Db) -> Self {
        Self {
            db,
            carts_repository: PgCartsRepository::new(),
            items_repository: PgCartItemsRepository::new(),
        }
    }

    /// Recompute the grand total from the items written in `tx`, store it, and
    /// return the cart with its items as the transaction now sees them.
    async fn store_grand_total(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        cart: CartUuid,
    ) -> Result<CartRecord, CartsServiceError> {
        let grand_total = self.items_repository.sum_item_totals(tx, cart).await?;

        let mut record = self
            .carts_repository
            .update_grand_total(tx, cart, grand_total)
            .await?;

        record.items = self.items_repository.get_cart_items(tx, cart).await?;

        Span::current().record("grand_total", grand_total);

        Ok(record)
    }
}

/// `quantity × unit_price`, kept within what a `BIGINT` column can hold.
fn line_total(quantity: u32, unit_price: u64) -> Result<u64, CartsServiceError> {
    u64::from(quantity)
        .checked_mul(unit_price)
        .filter(|total| i64::try_from(*total).is_ok())
        .ok_or(CartsServiceError::TotalOverflow)
}

fn ensure_quantity(quantity: u32) -> Result<(), CartsServiceError> {
    if quantity == 0 {
        return Err(CartsServiceError::InvalidQuantity);
    }

    Ok(())
}

#[async_trait]
impl CartsService for PgCartsService {
    async fn create_cart(&self, cart: NewCart) -> Result<CartRecord, CartsServiceError> {
        let mut tx = self.db.begin().await?;

        let created = self.carts_repository.create_cart(&mut tx, &cart).await?;

        tx.commit().await?;

        info!(cart_uuid = %created.uuid, user_uuid = %created.user_uuid, "created cart");

        Ok(created)
    }

    async fn get_cart(&self, cart: CartUuid) -> Result<CartRecord, CartsServiceError> {
        let mut tx = self.db.begin().await?;

        let mut record = self.carts_repository.get_cart(&mut tx, cart).await?;

        record.items = self.items_repository.get_cart_items(&mut tx, cart).await?;

        tx.commit().await?;

        Ok(record)
    }

    async fn get_user_cart(&self, user: UserUuid) -> Result<CartRecord, CartsServiceError> {
        let mut tx = self.db.begin().await?;

        let mut record = self.carts_repository.get_user_cart(&mut tx, user).await?;

        record.items = self
            .items_repository
            .get_cart_items(&mut tx, record.uuid)
            .await?;

        tx.commit().await?;

        Ok(record)
    }

    #[tracing::instrument(
        name = "carts.service.add_item",
        skip(self, item),
        fields(
            cart_uuid = %cart,
            product_details_uuid = %item.product_details_uuid,
            quantity = item.quantity,
            merged = tracing::field::Empty,
            grand_total = tracing::field::Empty
        ),
        err
    )]
    async fn add_item(
        &self,
        cart: CartUuid,
        item: NewCartItem,
    ) -> Result<CartItemChange, CartsServiceError> {
        ensure_quantity(item.quantity)?;

        let mut tx = self.db.begin().await?;

        self.carts_repository.lock_cart(&mut tx, cart).await?;

        let unit_price = self
            .items_repository
            .get_unit_price(&mut tx, item.product_details_uuid)
            .await?;

        let existing = self
            .items_repository
            .find_by_product_details(&mut tx, cart, item.product_details_uuid)
            .await?;

        Span::current().record("merged", existing.is_some());

        let written = match existing {
            Some(existing) => {
                let quantity = existing
                    .quantity
                    .checked_add(item.quantity)
                    .ok_or(CartsServiceError::TotalOverflow)?;

                self.items_repository
                    .update_cart_item(
                        &mut tx,
                        existing.uuid,
                        quantity,
                        line_total(quantity, unit_price)?,
                    )
                    .await?
            }
            None => {
                self.items_repository
                    .create_cart_item(
                        &mut tx,
                        cart,
                        item.uuid,
                        item.product_details_uuid,
                        item.quantity,
                        line_total(item.quantity, unit_price)?,
                    )
                    .await?
            }
        };

        let record = self.store_grand_total(&mut tx, cart).await?;

        tx.commit().await?;

        info!(cart_item_uuid = %written.uuid, grand_total = record.grand_total, "added cart item");

        Ok(CartItemChange {
            item: written,
            cart: record,
        })
    }

    #[tracing::instrument(
        name = "carts.service.update_item",
        skip(self),
        fields(
            cart_uuid = %cart,
            cart_item_uuid = %item,
            grand_total = tracing::field::Empty
        ),
        err
    )]
    async fn update_item(
        &self,
        cart: CartUuid,
        item: CartItemUuid,
        quantity: u32,
    ) -> Result<CartItemChange, CartsServiceError> {
        ensure_quantity(quantity)?;

        let mut tx = self.db.begin().await?;

        self.carts_repository.lock_cart(&mut tx, cart).await?;

        let existing: CartItemRecord = self
            .items_repository
            .get_cart_item(&mut tx, cart, item)
            .await?;

        let unit_price = self
            .items_repository
            .get_unit_price(&mut tx, existing.product_details_uuid)
            .await?;

        let written = self
            .items_repository
            .update_cart_item(&mut tx, item, quantity, line_total(quantity, unit_price)?)
            .await?;

        let record = self.store_grand_total(&mut tx, cart).await?;

        tx.commit().await?;

        info!(grand_total = record.grand_total, "updated cart item");

        Ok(CartItemChange {
            item: written,
            cart: record,
        })
    }
}

#[automock]
#[async_trait]
pub trait CartsService: Send + Sync {
    /// Creates the single cart a user may own.
    async fn create_cart(&self, cart: NewCart) -> Result<CartRecord, CartsServiceError>;

    /// Retrieve a single cart with its items.
    async fn get_cart(&self, cart: CartUuid) -> Result<CartRecord, CartsServiceError>;

    /// Retrieve the cart owned by a user.
    async fn get_user_cart(&self, user: UserUuid) -> Result<CartRecord, CartsServiceError>;

    /// Add product details to a cart, merging into an existing line for the
    /// same details, and recompute the grand total in the same transaction.
    async fn add_item(
        &self,
        cart: CartUuid,
        item: NewCartItem,
    ) -> Result<CartItemChange, CartsServiceError>;

    /// Set the quantity of a line and recompute the grand total in the same transaction.
    async fn update_item(
        &self,
        cart: CartUuid,
        item: CartItemUuid,
        quantity: u32,
    ) -> Result<CartItemChange, CartsServiceError>;
}
