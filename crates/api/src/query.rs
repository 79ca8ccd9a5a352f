//! Query parameter types for the list endpoints.
//!
//! Slug-style values (`fender-custom-shop`) are accepted; the services
//! normalize them before matching.

use serde::Deserialize;

/// `GET /gg/gear?brandName=&type=`
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GearListParams {
    pub brand_name: Option<String>,
    #[serde(rename = "type")]
    pub gear_type: Option<String>,
}

/// `GET /gg/guitarist?genre=&birthYear=`
///
/// `birth_year` stays a string here so that a malformed value reaches the
/// service and is reported as a validation error.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GuitaristListParams {
    pub genre: Option<String>,
    pub birth_year: Option<String>,
}

/// `GET /gg/manufacturer?mainProductType=`
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ManufacturerListParams {
    pub main_product_type: Option<String>,
}
