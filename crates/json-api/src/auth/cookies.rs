//! `admin-token` cookie construction.

use maanushi_app::auth::SESSION_TTL;
use salvo::{
    http::cookie::{Cookie, SameSite, time::Duration},
    prelude::Request,
};

pub(crate) const ADMIN_TOKEN_COOKIE: &str = "admin-token";

/// Cookie carrying a freshly issued session token. Lives as long as the token.
pub(crate) fn session_cookie(token: String, secure: bool) -> Cookie<'static> {
    Cookie::build((ADMIN_TOKEN_COOKIE, token))
        .path("/")
        .http_only(true)
        .secure(secure)
        .same_site(SameSite::Lax)
        .max_age(Duration::seconds(SESSION_TTL.as_secs()))
        .build()
}

/// Cookie that tells the browser to drop the session.
pub(crate) fn removal_cookie(secure: bool) -> Cookie<'static> {
    let mut cookie = Cookie::build((ADMIN_TOKEN_COOKIE, ""))
        .path("/")
        .http_only(true)
        .secure(secure)
        .same_site(SameSite::Lax)
        .build();

    cookie.make_removal();

    cookie
}

pub(crate) fn session_token(req: &Request) -> Option<String> {
    req.cookie(ADMIN_TOKEN_COOKIE)
        .map(|cookie| cookie.value().trim().to_owned())
        .filter(|token| !token.is_empty())
}
