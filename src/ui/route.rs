/// Navigable screens, one per route.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Route {
    #[default]
    Home,
    Products,
    /// Detail for one product; the id is taken verbatim from the route.
    ProductDetail(String),
    Editor,
    Weather,
    /// Catch-all for paths that match nothing.
    NotFound,
}

impl Route {
    /// Parse a path string into a route. Unknown paths map to `NotFound`.
    pub fn parse(path: &str) -> Route {
        let trimmed = path.trim_end_matches('/');
        match trimmed {
            "" | "/" => Route::Home,
            "/products" => Route::Products,
            "/editor" => Route::Editor,
            "/weather" => Route::Weather,
            _ => match trimmed.strip_prefix("/products/") {
                Some(id) if !id.is_empty() && !id.contains('/') => {
                    Route::ProductDetail(id.to_string())
                }
                _ => Route::NotFound,
            },
        }
    }

    /// Title shown for the screen.
    pub fn title(&self) -> &'static str {
        match self {
            Route::Home => "Home",
            Route::Products => "Products",
            Route::ProductDetail(_) => "Product",
            Route::Editor => "Editor",
            Route::Weather => "Weather",
            Route::NotFound => "Not Found",
        }
    }
}
