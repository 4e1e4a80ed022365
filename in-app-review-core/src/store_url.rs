//! Store page URLs for manual reviews

/// Microsoft Store review page, opened through the `ms-windows-store` scheme
pub fn microsoft_store_review_url(product_id: &str) -> String {
    format!(
        "ms-windows-store://review/?ProductId={}",
        urlencoding::encode(product_id.trim())
    )
}

/// Mac App Store "write a review" page
pub fn mac_app_store_review_url(app_store_id: &str) -> String {
    format!(
        "macappstore://apps.apple.com/app/id{}?action=write-review",
        urlencoding::encode(app_store_id.trim())
    )
}

/// Trim a caller-supplied store identifier; blank counts as absent
pub fn normalize_store_id(id: Option<&str>) -> Option<&str> {
    id.map(str::trim).filter(|id| !id.is_empty())
}
