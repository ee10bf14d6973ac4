//! Report Handlers

pub(crate) mod dashboard;
pub(crate) mod sales;
