//! Admin session cookie handling

pub(crate) mod cookies;
pub(crate) mod middleware;
