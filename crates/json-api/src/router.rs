//! App Router

use salvo::Router;

use crate::{
    admins, auth, carts, healthcheck, observability::metrics_handler, orders, products, reports,
    users,
};

/// Every route the server exposes, without the server-wide hoops.
///
/// Everything under `/admin` except signup, login and logout requires a
/// valid `admin-token` cookie.
pub(crate) fn app_router() -> Router {
    Router::new()
        .push(Router::with_path("healthcheck").get(healthcheck::handler))
        .push(Router::with_path("metrics").get(metrics_handler))
        .push(admin_router())
        .push(carts_router())
}

fn admin_router() -> Router {
    Router::with_path("admin")
        .push(Router::with_path("signup").post(admins::signup::handler))
        .push(Router::with_path("login").post(admins::login::handler))
        .push(Router::with_path("logout").post(admins::logout::handler))
        .push(
            Router::new()
                .hoop(auth::middleware::handler)
                .push(Router::with_path("home").get(admins::home::handler))
                .push(Router::with_path("dashboard").get(reports::dashboard::handler))
                .push(Router::with_path("sales-report").get(reports::sales::handler))
                .push(
                    Router::with_path("users")
                        .get(users::index::handler)
                        .push(Router::with_path("{user}/access").put(users::access::handler))
                        .push(Router::with_path("{user}/cart").get(carts::user::handler)),
                )
                .push(
                    Router::with_path("products")
                        .get(products::index::handler)
                        .post(products::create::handler)
                        .push(
                            Router::with_path("{product}")
                                .get(products::get::handler)
                                .put(products::update::handler)
                                .delete(products::delete::handler)
                                .push(
                                    Router::with_path("details")
                                        .post(products::details::handler),
                                ),
                        ),
                )
                .push(
                    Router::with_path("orders")
                        .get(orders::index::handler)
                        .push(
                            Router::with_path("details/{detail}/status")
                                .put(orders::status::handler),
                        )
                        .push(Router::with_path("{order}").get(orders::get::handler)),
                ),
        )
}

fn carts_router() -> Router {
    Router::with_path("carts").post(carts::create::handler).push(
        Router::with_path("{cart}")
            .get(carts::get::handler)
            .push(
                Router::with_path("items")
                    .post(carts::items::create::handler)
                    .push(Router::with_path("{item}").put(carts::items::update::handler)),
            ),
    )
}
