use serde::Deserialize;

/// Application configuration, loaded from an optional TOML file.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct Config {
    #[serde(default)]
    pub endpoints: Endpoints,
}

/// Remote endpoints the client talks to.
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default)]
pub struct Endpoints {
    /// Products collection; detail fetches append `/{id}`.
    pub products: String,
    /// Placeholder create endpoint for new products.
    pub create: String,
    /// Weather-by-city endpoint.
    pub weather: String,
    /// Unit system passed to the weather endpoint.
    pub units: String,
}

impl Default for Endpoints {
    fn default() -> Self {
        Self {
            products: "https://fakestoreapi.com/products".to_string(),
            create: "https://jsonplaceholder.typicode.com/posts".to_string(),
            weather: "https://api.openweathermap.org/data/2.5/weather".to_string(),
            units: "metric".to_string(),
        }
    }
}
