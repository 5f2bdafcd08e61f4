use actix_web::cookie::{
    time::{Duration, OffsetDateTime},
    Cookie, SameSite as HttpSameSite,
};
use reel_core::domain::entities::{RefreshCookie, SameSite};

/// Renders a refresh cookie for the `Set-Cookie` header
///
/// A negative max-age is written as `Max-Age=0`.
pub fn to_http_cookie(cookie: &RefreshCookie) -> Cookie<'static> {
    let expires = OffsetDateTime::from_unix_timestamp(cookie.expires.timestamp())
        .unwrap_or(OffsetDateTime::UNIX_EPOCH);

    Cookie::build(cookie.name.clone(), cookie.value.clone())
        .path(cookie.path.clone())
        .domain(cookie.domain.clone())
        .expires(expires)
        .max_age(Duration::seconds(cookie.max_age.max(0)))
        .http_only(cookie.http_only)
        .secure(cookie.secure)
        .same_site(same_site(cookie.same_site))
        .finish()
}

fn same_site(value: SameSite) -> HttpSameSite {
    match value {
        SameSite::Strict => HttpSameSite::Strict,
        SameSite::Lax => HttpSameSite::Lax,
        SameSite::None => HttpSameSite::None,
    }
}
