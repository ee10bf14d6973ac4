//! Products Repository

use jiff_sqlx::Timestamp as SqlxTimestamp;
use sqlx::{FromRow, Postgres, Row, Transaction, postgres::PgRow, query, query_as};
use uuid::Uuid;

use crate::{
    database::{amount_to_i64, try_get_amount, try_get_optional_amount},
    domain::products::{
        data::{NewProduct, NewProductDetails, ProductUpdate},
        records::{ProductDetailsRecord, ProductDetailsUuid, ProductRecord, ProductUuid},
    },
    pagination::Page,
};

const LIST_PRODUCTS_SQL: &str = include_str!("sql/list_products.sql");
const GET_PRODUCT_SQL: &str = include_str!("sql/get_product.sql");
const CREATE_PRODUCT_SQL: &str = include_str!("sql/create_product.sql");
const UPDATE_PRODUCT_SQL: &str = include_str!("sql/update_product.sql");
const DELETE_PRODUCT_SQL: &str = include_str!("sql/delete_product.sql");
const LIST_PRODUCT_DETAILS_SQL: &str = include_str!("sql/list_product_details.sql");
const CREATE_PRODUCT_DETAILS_SQL: &str = include_str!("sql/create_product_details.sql");
const DELETE_PRODUCT_DETAILS_SQL: &str = include_str!("sql/delete_product_details.sql");

#[derive(Debug, Clone, Default)]
pub(crate) struct PgProductsRepository;

impl PgProductsRepository {
    #[must_use]
    pub(crate) fn new() -> Self {
        Self
    }

    pub(crate) async fn list_products(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        page: Page,
    ) -> Result<Vec<ProductRecord>, sqlx::Error> {
        let mut products = query_as::<Postgres, ProductRecord>(LIST_PRODUCTS_SQL)
            .bind(page.limit())
            .bind(page.offset())
            .fetch_all(&mut **tx)
            .await?;

        let uuids: Vec<Uuid> = products.iter().map(|p| p.uuid.into_uuid()).collect();

        let details = self.list_product_details(tx, &uuids).await?;

        for detail in details {
            if let Some(product) = products.iter_mut().find(|p| p.uuid == detail.product_uuid) {
                product.details.push(detail);
            }
        }

        Ok(products)
    }

    pub(crate) async fn get_product(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        product: ProductUuid,
    ) -> Result<ProductRecord, sqlx::Error> {
        let mut record = query_as::<Postgres, ProductRecord>(GET_PRODUCT_SQL)
            .bind(product.into_uuid())
            .fetch_one(&mut **tx)
            .await?;

        record.details = self
            .list_product_details(tx, &[product.into_uuid()])
            .await?;

        Ok(record)
    }

    pub(crate) async fn create_product(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        product: &NewProduct,
    ) -> Result<ProductRecord, sqlx::Error> {
        let discount_price = product
            .discount_price
            .map(|price| amount_to_i64(price, "discount_price"))
            .transpose()?;

        query_as::<Postgres, ProductRecord>(CREATE_PRODUCT_SQL)
            .bind(product.uuid.into_uuid())
            .bind(&product.name)
            .bind(&product.description)
            .bind(discount_price)
            .fetch_one(&mut **tx)
            .await
    }

    pub(crate) async fn update_product(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        product: ProductUuid,
        update: &ProductUpdate,
    ) -> Result<ProductRecord, sqlx::Error> {
        let discount_price = update
            .discount_price
            .map(|price| amount_to_i64(price, "discount_price"))
            .transpose()?;

        let mut record = query_as::<Postgres, ProductRecord>(UPDATE_PRODUCT_SQL)
            .bind(product.into_uuid())
            .bind(&update.name)
            .bind(&update.description)
            .bind(discount_price)
            .fetch_one(&mut **tx)
            .await?;

        record.details = self
            .list_product_details(tx, &[product.into_uuid()])
            .await?;

        Ok(record)
    }

    /// Soft-delete a product and its details, returning the number of products stamped.
    pub(crate) async fn delete_product(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        product: ProductUuid,
    ) -> Result<u64, sqlx::Error> {
        let rows_affected = query(DELETE_PRODUCT_SQL)
            .bind(product.into_uuid())
            .execute(&mut **tx)
            .await?
            .rows_affected();

        query(DELETE_PRODUCT_DETAILS_SQL)
            .bind(product.into_uuid())
            .execute(&mut **tx)
            .await?;

        Ok(rows_affected)
    }

    pub(crate) async fn list_product_details(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        products: &[Uuid],
    ) -> Result<Vec<ProductDetailsRecord>, sqlx::Error> {
        query_as::<Postgres, ProductDetailsRecord>(LIST_PRODUCT_DETAILS_SQL)
            .bind(products)
            .fetch_all(&mut **tx)
            .await
    }

    pub(crate) async fn create_product_details(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        product: ProductUuid,
        details: &NewProductDetails,
    ) -> Result<ProductDetailsRecord, sqlx::Error> {
        query_as::<Postgres, ProductDetailsRecord>(CREATE_PRODUCT_DETAILS_SQL)
            .bind(details.uuid.into_uuid())
            .bind(product.into_uuid())
            .bind(amount_to_i64(details.price, "price")?)
            .bind(amount_to_i64(details.stock, "stock")?)
            .fetch_one(&mut **tx)
            .await
    }
}

impl<'r> FromRow<'r, PgRow> for ProductRecord {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        Ok(Self {
            uuid: ProductUuid::from_uuid(row.try_get("uuid")?),
            name: row.try_get("name")?,
            description: row.try_get("description")?,
            discount_price: try_get_optional_amount(row, "discount_price")?,
            details: Vec::new(),
            created_at: row.try_get::<SqlxTimestamp, _>("created_at")?.to_jiff(),
            updated_at: row.try_get::<SqlxTimestamp, _>("updated_at")?.to_jiff(),
            deleted_at: row
                .try_get::<Option<SqlxTimestamp>, _>("deleted_at")?
                .map(SqlxTimestamp::to_jiff),
        })
    }
}

impl<'r> FromRow<'r, PgRow> for ProductDetailsRecord {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        Ok(Self {
            uuid: ProductDetailsUuid::from_uuid(row.try_get("uuid")?),
            product_uuid: ProductUuid::from_uuid(row.try_get("product_uuid")?),
            price: try_get_amount(row, "price")?,
            stock: try_get_amount(row, "stock")?,
            created_at: row.try_get::<SqlxTimestamp, _>("created_at")?.to_jiff(),
            updated_at: row.try_get::<SqlxTimestamp, _>("updated_at")?.to_jiff(),
            deleted_at: row
                .try_get::<Option<SqlxTimestamp>, _>("deleted_at")?
                .map(SqlxTimestamp::to_jiff),
        })
    }
}
