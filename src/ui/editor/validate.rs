use thiserror::Error;

use crate::api::NewProduct;

/// Fallback image applied when the field is left blank.
pub const PLACEHOLDER_IMAGE: &str = "https://picsum.photos/seed/new-product/600/400";

/// Local rejection of form input. Never leaves the view boundary; the fixed
/// message is rendered inline next to the form.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Title is required")]
    TitleRequired,
    #[error("Price must be a number and greater than 0.")]
    PriceInvalid,
}

/// Validate the draft, first failure wins. No request is issued on failure.
pub fn validate(title: &str, price: &str, image: &str) -> Result<NewProduct, ValidationError> {
    let title = title.trim();
    if title.is_empty() {
        return Err(ValidationError::TitleRequired);
    }

    let price: f64 = price
        .trim()
        .parse()
        .map_err(|_| ValidationError::PriceInvalid)?;
    if price.is_nan() || price <= 0.0 {
        return Err(ValidationError::PriceInvalid);
    }

    let image = image.trim();
    let image = if image.is_empty() {
        PLACEHOLDER_IMAGE.to_string()
    } else {
        image.to_string()
    };

    Ok(NewProduct {
        title: title.to_string(),
        price,
        image,
    })
}
