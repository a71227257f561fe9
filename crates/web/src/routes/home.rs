//! Public page route handlers.
//!
//! The delivery pages are static placeholders until the delivery program
//! goes live; only the account system is backed by the database.

use askama::Template;
use askama_web::WebTemplate;
use axum::{extract::Query, response::IntoResponse};

use crate::middleware::OptionalAccount;
use crate::models::CurrentAccount;
use crate::routes::MessageQuery;

/// Home page template.
#[derive(Template, WebTemplate)]
#[template(path = "home/index.html")]
pub struct IndexTemplate {
    /// Signed-in account, if any, for the greeting.
    pub account: Option<CurrentAccount>,
    pub error: Option<String>,
    pub success: Option<String>,
}

/// Cistern program page template.
#[derive(Template, WebTemplate)]
#[template(path = "home/cisterns.html")]
pub struct CisternsTemplate {
    pub account: Option<CurrentAccount>,
}

/// Delivery tracking page template.
#[derive(Template, WebTemplate)]
#[template(path = "home/track_delivery.html")]
pub struct TrackDeliveryTemplate {
    pub account: Option<CurrentAccount>,
}

/// Delivery detail page template.
#[derive(Template, WebTemplate)]
#[template(path = "home/delivery_detail.html")]
pub struct DeliveryDetailTemplate {
    pub account: Option<CurrentAccount>,
}

/// Display the home page.
pub async fn index(
    OptionalAccount(account): OptionalAccount,
    Query(query): Query<MessageQuery>,
) -> impl IntoResponse {
    IndexTemplate {
        account,
        error: query.error,
        success: query.success,
    }
}

/// Display the cistern program page.
pub async fn cisterns(OptionalAccount(account): OptionalAccount) -> impl IntoResponse {
    CisternsTemplate { account }
}

/// Display the delivery tracking page.
pub async fn track_delivery(OptionalAccount(account): OptionalAccount) -> impl IntoResponse {
    TrackDeliveryTemplate { account }
}

/// Display the delivery detail page.
pub async fn delivery_detail(OptionalAccount(account): OptionalAccount) -> impl IntoResponse {
    DeliveryDetailTemplate { account }
}
