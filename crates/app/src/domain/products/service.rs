//! Products service.

use async_trait::async_trait;
use mockall::automock;

use crate::{
    database::Db,
    domain::products::{
        data::{NewProduct, NewProductDetails, ProductUpdate},
        errors::ProductsServiceError,
        records::{ProductDetailsRecord, ProductRecord, ProductUuid},
        repository::PgProductsRepository,
    },
    pagination::Page,
};

#[derive(Debug, Clone)]
pub struct PgProductsService {
    db: Db,
    repository: PgProductsRepository,
}

impl PgProductsService {
    #[must_use]
    pub fn new(db: Db) -> Self {
        Self {
            db,
            repository: PgProductsRepository::new(),
        }
    }
}

#[async_trait]
impl ProductsService for PgProductsService {
    async fn list_products(&self, page: Page) -> Result<Vec<ProductRecord>, ProductsServiceError> {
        let mut tx = self.db.begin().await?;

        let products = self.repository.list_products(&mut tx, page).await?;

        tx.commit().await?;

        Ok(products)
    }

    async fn get_product(
        &self,
        product: ProductUuid,
    ) -> Result<ProductRecord, ProductsServiceError> {
        let mut tx = self.db.begin().await?;

        let product = self.repository.get_product(&mut tx, product).await?;

        tx.commit().await?;

        Ok(product)
    }

    async fn create_product(
        &self,
        product: NewProduct,
    ) -> Result<ProductRecord, ProductsServiceError> {
        if product.name.trim().is_empty() {
            return Err(ProductsServiceError::EmptyName);
        }

        let mut tx = self.db.begin().await?;

        let mut created = self.repository.create_product(&mut tx, &product).await?;

        for details in &product.details {
            let details = self
                .repository
                .create_product_details(&mut tx, created.uuid, details)
                .await?;

            created.details.push(details);
        }

        tx.commit().await?;

        Ok(created)
    }

    async fn update_product(
        &self,
        product: ProductUuid,
        update: ProductUpdate,
    ) -> Result<ProductRecord, ProductsServiceError> {
        if update.name.trim().is_empty() {
            return Err(ProductsServiceError::EmptyName);
        }

        let mut tx = self.db.begin().await?;

        let updated = self
            .repository
            .update_product(&mut tx, product, &update)
            .await?;

        tx.commit().await?;

        Ok(updated)
    }

    async fn add_product_details(
        &self,
        product: ProductUuid,
        details: NewProductDetails,
    ) -> Result<ProductDetailsRecord, ProductsServiceError> {
        let mut tx = self.db.begin().await?;

        // Refuse new variants on deleted products.
        self.repository.get_product(&mut tx, product).await?;

        let created = self
            .repository
            .create_product_details(&mut tx, product, &details)
            .await?;

        tx.commit().await?;

        Ok(created)
    }

    async fn delete_product(&self, product: ProductUuid) -> Result<(), ProductsServiceError> {
        let mut tx = self.db.begin().await?;

        let rows_affected = self.repository.delete_product(&mut tx, product).await?;

        if rows_affected == 0 {
            return Err(ProductsServiceError::NotFound);
        }

        tx.commit().await?;

        Ok(())
    }
}

#[automock]
#[async_trait]
pub trait ProductsService: Send + Sync {
    /// Lists live products, newest first.
    async fn list_products(&self, page: Page) -> Result<Vec<ProductRecord>, ProductsServiceError>;

    /// Retrieve a single live product with its live details.
    async fn get_product(&self, product: ProductUuid)
    -> Result<ProductRecord, ProductsServiceError>;

    /// Creates a product together with its initial details.
    async fn create_product(
        &self,
        product: NewProduct,
    ) -> Result<ProductRecord, ProductsServiceError>;

    /// Replaces the descriptive fields of a product.
    async fn update_product(
        &self,
        product: ProductUuid,
        update: ProductUpdate,
    ) -> Result<ProductRecord, ProductsServiceError>;

    /// Adds a purchasable variant to an existing product.
    async fn add_product_details(
        &self,
        product: ProductUuid,
        details: NewProductDetails,
    ) -> Result<ProductDetailsRecord, ProductsServiceError>;

    /// Soft-deletes a product and all of its details.
    async fn delete_product(&self, product: ProductUuid) -> Result<(), ProductsServiceError>;
}
