//! Report Records

use jiff::Timestamp;

use crate::domain::{
    orders::records::{OrderStatus, OrderUuid, PaymentMode},
    products::records::ProductDetailsUuid,
    users::records::UserUuid,
};

/// Admin dashboard widget counts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DashboardRecord {
    pub active_users: u64,
    pub blocked_users: u64,
    pub products: u64,
    pub pending_orders: u64,
    pub return_requests: u64,
}

/// One order line in a sales report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SalesRecord {
    pub user_uuid: UserUuid,
    pub first_name: String,
    pub email: String,
    pub product_details_uuid: ProductDetailsUuid,
    pub product_name: String,
    pub quantity: u32,
    pub order_uuid: OrderUuid,
    pub placed_at: Timestamp,
    pub payment_mode: PaymentMode,
    pub price: u64,
    pub discount_price: Option<u64>,
    pub order_status: OrderStatus,
}
