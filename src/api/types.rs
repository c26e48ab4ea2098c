use serde::{Deserialize, Serialize};

/// A catalog entity as returned by the products endpoint.
///
/// Fields default individually: the entity shape is opaque to the UI beyond
/// "present or absent", so a partial record still renders.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(default)]
pub struct Product {
    pub id: i64,
    pub title: String,
    pub price: f64,
    pub category: String,
    pub description: String,
    pub image: String,
}

/// Payload for creating a product.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewProduct {
    pub title: String,
    pub price: f64,
    pub image: String,
}

/// Response from the create endpoint. Only the server-assigned id matters;
/// a response without one is still a success.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(default)]
pub struct CreatedProduct {
    pub id: Option<i64>,
}

/// Weather reading for a city.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(default)]
pub struct WeatherReport {
    pub name: String,
    pub weather: Vec<WeatherCondition>,
    pub main: WeatherMain,
}

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(default)]
pub struct WeatherCondition {
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(default)]
pub struct WeatherMain {
    pub temp: f64,
}

impl WeatherReport {
    /// First condition description, if the server sent one.
    pub fn description(&self) -> Option<&str> {
        self.weather.first().map(|c| c.description.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn product_decodes_with_missing_fields() {
        let product: Product = serde_json::from_str(r#"{"id": 3, "title": "Mug"}"#).unwrap();
        assert_eq!(product.id, 3);
        assert_eq!(product.title, "Mug");
        assert_eq!(product.price, 0.0);
        assert!(product.description.is_empty());
    }

    #[test]
    fn created_product_tolerates_missing_id() {
        let created: CreatedProduct = serde_json::from_str("{}").unwrap();
        assert_eq!(created.id, None);
    }

    #[test]
    fn weather_report_reads_nested_fields() {
        let report: WeatherReport = serde_json::from_str(
            r#"{"name": "London", "weather": [{"description": "light rain"}], "main": {"temp": 14.2}}"#,
        )
        .unwrap();
        assert_eq!(report.name, "London");
        assert_eq!(report.description(), Some("light rain"));
        assert_eq!(report.main.temp, 14.2);
    }
}
