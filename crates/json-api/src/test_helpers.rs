//! Test helpers.

use std::sync::Arc;

use jiff::Timestamp;
use salvo::{affix_state::inject, prelude::*};

use maanushi_app::{
    auth::MockAuthService,
    context::AppContext,
    domain::{
        admins::MockAdminsService,
        carts::{
            MockCartsService,
            records::{CartItemRecord, CartItemUuid, CartRecord, CartUuid},
        },
        orders::MockOrdersService,
        products::{
            MockProductsService,
            records::{ProductDetailsRecord, ProductDetailsUuid, ProductRecord, ProductUuid},
        },
        reports::MockReportsService,
        users::{
            MockUsersService,
            records::{UserRecord, UserUuid},
        },
    },
};

use crate::{extensions::*, state::State};

pub(crate) const TEST_ADMIN_EMAIL: &str = "ops@example.com";

#[salvo::handler]
pub(crate) async fn inject_admin(
    req: &mut Request,
    depot: &mut Depot,
    res: &mut Response,
    ctrl: &mut FlowCtrl,
) {
    depot.insert_admin_email(TEST_ADMIN_EMAIL.to_string());
    ctrl.call_next(req, depot, res).await;
}

fn strict_admins_mock() -> MockAdminsService {
    let mut admins = MockAdminsService::new();

    admins.expect_sign_up().never();
    admins.expect_login().never();
    admins.expect_find_by_email().never();

    admins
}

fn strict_users_mock() -> MockUsersService {
    let mut users = MockUsersService::new();

    users.expect_list_users().never();
    users.expect_get_user().never();
    users.expect_create_user().never();
    users.expect_set_access().never();

    users
}

fn strict_products_mock() -> MockProductsService {
    let mut products = MockProductsService::new();

    products.expect_list_products().never();
    products.expect_get_product().never();
    products.expect_create_product().never();
    products.expect_update_product().never();
    products.expect_add_product_details().never();
    products.expect_delete_product().never();

    products
}

fn strict_orders_mock() -> MockOrdersService {
    let mut orders = MockOrdersService::new();

    orders.expect_list_orders().never();
    orders.expect_get_order().never();
    orders.expect_update_order_status().never();

    orders
}

fn strict_carts_mock() -> MockCartsService {
    let mut carts = MockCartsService::new();

    carts.expect_create_cart().never();
    carts.expect_get_cart().never();
    carts.expect_get_user_cart().never();
    carts.expect_add_item().never();
    carts.expect_update_item().never();

    carts
}

fn strict_reports_mock() -> MockReportsService {
    let mut reports = MockReportsService::new();

    reports.expect_dashboard().never();
    reports.expect_sales_report().never();

    reports
}

fn strict_auth_mock() -> MockAuthService {
    let mut auth = MockAuthService::new();

    auth.expect_authenticate_session().never();

    auth
}

/// Every service mocked to fail the test if called. Override the ones a test
/// exercises with struct update syntax.
pub(crate) fn strict_context() -> AppContext {
    AppContext {
        admins: Arc::new(strict_admins_mock()),
        users: Arc::new(strict_users_mock()),
        products: Arc::new(strict_products_mock()),
        orders: Arc::new(strict_orders_mock()),
        carts: Arc::new(strict_carts_mock()),
        reports: Arc::new(strict_reports_mock()),
        auth: Arc::new(strict_auth_mock()),
    }
}

/// Service for routes that sit behind the session middleware, with an admin
/// already signed in.
pub(crate) fn admin_service(app: AppContext, route: Router) -> Service {
    Service::new(
        Router::new()
            .hoop(inject(State::from_app_context(app, false)))
            .hoop(inject_admin)
            .push(route),
    )
}

pub(crate) fn public_service(app: AppContext, route: Router) -> Service {
    Service::new(
        Router::new()
            .hoop(inject(State::from_app_context(app, false)))
            .push(route),
    )
}

pub(crate) fn make_user(uuid: UserUuid) -> UserRecord {
    UserRecord {
        uuid,
        first_name: "Asha".to_string(),
        last_name: "Menon".to_string(),
        email: "asha@example.com".to_string(),
        phone_num: "9876543210".to_string(),
        blocked: false,
        created_at: Timestamp::UNIX_EPOCH,
        updated_at: Timestamp::UNIX_EPOCH,
    }
}

pub(crate) fn make_product(uuid: ProductUuid) -> ProductRecord {
    ProductRecord {
        uuid,
        name: "Neem Soap".to_string(),
        description: "Cold pressed".to_string(),
        discount_price: None,
        details: vec![make_product_details(ProductDetailsUuid::new(), uuid, 120)],
        created_at: Timestamp::UNIX_EPOCH,
        updated_at: Timestamp::UNIX_EPOCH,
        deleted_at: None,
    }
}

pub(crate) fn make_product_details(
    uuid: ProductDetailsUuid,
    product_uuid: ProductUuid,
    price: u64,
) -> ProductDetailsRecord {
    ProductDetailsRecord {
        uuid,
        product_uuid,
        price,
        stock: 10,
        created_at: Timestamp::UNIX_EPOCH,
        updated_at: Timestamp::UNIX_EPOCH,
        deleted_at: None,
    }
}

pub(crate) fn make_cart(uuid: CartUuid, items: Vec<CartItemRecord>) -> CartRecord {
    CartRecord {
        uuid,
        user_uuid: UserUuid::new(),
        grand_total: items.iter().map(|item| item.total_price).sum(),
        items,
        created_at: Timestamp::UNIX_EPOCH,
        updated_at: Timestamp::UNIX_EPOCH,
    }
}

pub(crate) fn make_cart_item(
    uuid: CartItemUuid,
    cart_uuid: CartUuid,
    quantity: u32,
    total_price: u64,
) -> CartItemRecord {
    CartItemRecord {
        uuid,
        cart_uuid,
        product_details_uuid: ProductDetailsUuid::new(),
        quantity,
        total_price,
        created_at: Timestamp::UNIX_EPOCH,
        updated_at: Timestamp::UNIX_EPOCH,
    }
}
