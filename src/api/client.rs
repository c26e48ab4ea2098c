use reqwest::Client;
use tracing::debug;

use crate::api::error::ApiError;
use crate::api::types::{CreatedProduct, NewProduct, Product, WeatherReport};
use crate::config::{Endpoints, WEATHER_API_KEY_ENV};

/// Client for the catalog and weather endpoints.
///
/// Cheap to clone; the inner `reqwest::Client` shares its connection pool.
#[derive(Clone)]
pub struct ApiClient {
    client: Client,
    endpoints: Endpoints,
}

impl ApiClient {
    pub fn new(endpoints: Endpoints) -> Result<Self, ApiError> {
        let client = Client::builder().build()?;
        Ok(Self { client, endpoints })
    }

    /// GET the whole products collection.
    pub async fn fetch_products(&self) -> Result<Vec<Product>, ApiError> {
        debug!(url = %self.endpoints.products, "fetching products");
        let resp = self.client.get(&self.endpoints.products).send().await?;
        if !resp.status().is_success() {
            return Err(ApiError::Status {
                message: "Failed to fetch products",
            });
        }
        Ok(resp.json().await?)
    }

    /// GET a single product. The id is a route parameter taken verbatim.
    pub async fn fetch_product(&self, id: &str) -> Result<Product, ApiError> {
        let url = format!("{}/{}", self.endpoints.products, id);
        debug!(%url, "fetching product detail");
        let resp = self.client.get(&url).send().await?;
        if !resp.status().is_success() {
            return Err(ApiError::Status {
                message: "Failed to fetch product details",
            });
        }
        Ok(resp.json().await?)
    }

    /// GET the weather for a city.
    ///
    /// The API key is read from the environment at call time and sent as-is;
    /// a missing key means an empty `appid` and an ordinary request failure.
    pub async fn fetch_weather(&self, city: &str) -> Result<WeatherReport, ApiError> {
        let key = std::env::var(WEATHER_API_KEY_ENV).unwrap_or_default();
        debug!(%city, "fetching weather");
        let resp = self
            .client
            .get(&self.endpoints.weather)
            .query(&[
                ("q", city),
                ("units", self.endpoints.units.as_str()),
                ("appid", key.as_str()),
            ])
            .send()
            .await?;
        if !resp.status().is_success() {
            return Err(ApiError::Status {
                message: "City not found",
            });
        }
        Ok(resp.json().await?)
    }

    /// POST a new product to the placeholder create endpoint.
    pub async fn create_product(&self, draft: &NewProduct) -> Result<CreatedProduct, ApiError> {
        debug!(title = %draft.title, "creating product");
        let resp = self
            .client
            .post(&self.endpoints.create)
            .json(draft)
            .send()
            .await?;
        if !resp.status().is_success() {
            return Err(ApiError::Status {
                message: "Failed to create product.",
            });
        }
        Ok(resp.json().await?)
    }
}
