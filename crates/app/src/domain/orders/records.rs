//! Order Records

use std::{fmt, str::FromStr};

use jiff::Timestamp;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::{
    domain::{products::records::ProductDetailsUuid, users::records::UserUuid},
    uuids::TypedUuid,
};

/// Order UUID
pub type OrderUuid = TypedUuid<OrderRecord>;

/// Order Detail UUID
pub type OrderDetailUuid = TypedUuid<OrderDetailRecord>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown {kind} `{value}`")]
pub struct UnknownCode {
    kind: &'static str,
    value: String,
}

/// Fulfilment state of a single order line. Codes match `order_statuses.id`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OrderStatus {
    Pending,
    Placed,
    Shipped,
    Delivered,
    Cancelled,
    Returned,
    ReturnRequested,
}

impl OrderStatus {
    #[must_use]
    pub const fn code(self) -> i16 {
        match self {
            Self::Pending => 1,
            Self::Placed => 2,
            Self::Shipped => 3,
            Self::Delivered => 4,
            Self::Cancelled => 5,
            Self::Returned => 6,
            Self::ReturnRequested => 7,
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Placed => "placed",
            Self::Shipped => "shipped",
            Self::Delivered => "delivered",
            Self::Cancelled => "cancelled",
            Self::Returned => "returned",
            Self::ReturnRequested => "return_requested",
        }
    }
}

impl TryFrom<i16> for OrderStatus {
    type Error = UnknownCode;

    fn try_from(code: i16) -> Result<Self, Self::Error> {
        Ok(match code {
            1 => Self::Pending,
            2 => Self::Placed,
            3 => Self::Shipped,
            4 => Self::Delivered,
            5 => Self::Cancelled,
            6 => Self::Returned,
            7 => Self::ReturnRequested,
            _ => {
                return Err(UnknownCode {
                    kind: "order status",
                    value: code.to_string(),
                });
            }
        })
    }
}

impl FromStr for OrderStatus {
    type Err = UnknownCode;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        [
            Self::Pending,
            Self::Placed,
            Self::Shipped,
            Self::Delivered,
            Self::Cancelled,
            Self::Returned,
            Self::ReturnRequested,
        ]
        .into_iter()
        .find(|status| status.as_str().eq_ignore_ascii_case(s))
        .ok_or_else(|| UnknownCode {
            kind: "order status",
            value: s.to_string(),
        })
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How an order was paid. Codes match `payment_modes.id`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PaymentMode {
    Cod,
    Razorpay,
    Wallet,
}

impl PaymentMode {
    #[must_use]
    pub const fn code(self) -> i16 {
        match self {
            Self::Cod => 1,
            Self::Razorpay => 2,
            Self::Wallet => 3,
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Cod => "COD",
            Self::Razorpay => "RAZORPAY",
            Self::Wallet => "WALLET",
        }
    }
}

impl TryFrom<i16> for PaymentMode {
    type Error = UnknownCode;

    fn try_from(code: i16) -> Result<Self, Self::Error> {
        match code {
            1 => Ok(Self::Cod),
            2 => Ok(Self::Razorpay),
            3 => Ok(Self::Wallet),
            _ => Err(UnknownCode {
                kind: "payment mode",
                value: code.to_string(),
            }),
        }
    }
}

/// Order Record
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderRecord {
    pub uuid: OrderUuid,
    pub user_uuid: UserUuid,
    pub payment_mode: PaymentMode,
    pub placed_at: Timestamp,
    pub details: Vec<OrderDetailRecord>,
}

/// Order Detail Record
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderDetailRecord {
    pub uuid: OrderDetailUuid,
    pub order_uuid: OrderUuid,
    pub product_details_uuid: ProductDetailsUuid,
    pub quantity: u32,
    pub status: OrderStatus,
    pub updated_at: Timestamp,
}
