pub mod gear;
pub mod guitarist;
pub mod health;
pub mod manufacturer;

use axum::Router;

use crate::state::AppState;

/// Build the `/gg` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /gear                          list (?brandName=&type=), create
/// /gear/{id}                     get, update, delete
/// /gear/guitarist/{id}           gear list, add gear (PUT), remove gear (DELETE)
/// /gear/manufacturer/{id}        set gear brand (PUT)
///
/// /guitarist                     list (?genre=&birthYear=), create
/// /guitarist/{id}                get, update, delete
/// /guitarist/name/{name}         get by exact name
///
/// /manufacturer                  list (?mainProductType=), create
/// /manufacturer/{id}             get, update, delete
/// /manufacturer/name/{name}      get by exact name
/// /manufacturer/gear/{id}        set gear brand (PUT)
/// ```
pub fn gg_routes() -> Router<AppState> {
    Router::new()
        .nest("/gear", gear::router())
        .nest("/guitarist", guitarist::router())
        .nest("/manufacturer", manufacturer::router())
}
