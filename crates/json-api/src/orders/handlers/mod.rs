//! Order Handlers

use salvo::oapi::ToSchema;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use maanushi_app::domain::orders::records::{OrderDetailRecord, OrderRecord};

pub(crate) mod get;
pub(crate) mod index;
pub(crate) mod status;

/// One line of an order
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct OrderDetailResponse {
    pub uuid: Uuid,
    pub product_details_uuid: Uuid,
    pub quantity: u32,

    /// `pending`, `placed`, `shipped`, `delivered`, `cancelled`, `returned`
    /// or `return_requested`
    pub status: String,

    pub updated_at: String,
}

impl From<OrderDetailRecord> for OrderDetailResponse {
    fn from(detail: OrderDetailRecord) -> Self {
        OrderDetailResponse {
            uuid: detail.uuid.into(),
            product_details_uuid: detail.product_details_uuid.into(),
            quantity: detail.quantity,
            status: detail.status.as_str().to_string(),
            updated_at: detail.updated_at.to_string(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct OrderResponse {
    pub uuid: Uuid,
    pub user_uuid: Uuid,

    /// `COD`, `RAZORPAY` or `WALLET`
    pub payment_mode: String,

    pub placed_at: String,
    pub details: Vec<OrderDetailResponse>,
}

impl From<OrderRecord> for OrderResponse {
    fn from(order: OrderRecord) -> Self {
        OrderResponse {
            uuid: order.uuid.into(),
            user_uuid: order.user_uuid.into(),
            payment_mode: order.payment_mode.as_str().to_string(),
            placed_at: order.placed_at.to_string(),
            details: order.details.into_iter().map(Into::into).collect(),
        }
    }
}
