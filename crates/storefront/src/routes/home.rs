//! Home page route handler: the catalog plus the checkout form.

use askama::Template;
use askama_web::WebTemplate;
use axum::extract::State;

use crate::error::Result;
use crate::filters;
use crate::models::Product;
use crate::state::AppState;

/// Product display data for templates.
#[derive(Clone)]
pub struct ProductView {
    /// Hex id, used as the `qty_<id>` form field suffix.
    pub id: String,
    pub name: String,
    pub price: String,
    pub description: String,
    pub image_url: String,
}

impl ProductView {
    fn new(product: &Product, uploads_base: &str) -> Self {
        Self {
            id: product.id.to_hex(),
            name: product.name.clone(),
            price: product.price.display(),
            description: product.description.clone(),
            image_url: resolve_image_url(uploads_base, &product.image_path),
        }
    }
}

/// Home page template.
#[derive(Template, WebTemplate)]
#[template(path = "home.html")]
pub struct HomeTemplate {
    pub products: Vec<ProductView>,
}

/// Display the catalog and the buyer-info form.
pub async fn home(State(state): State<AppState>) -> Result<HomeTemplate> {
    let products = state.collections().catalog().list_active().await?;
    let uploads_base = &state.config().uploads_base;

    Ok(HomeTemplate {
        products: products
            .iter()
            .map(|p| ProductView::new(p, uploads_base))
            .collect(),
    })
}

/// Resolve an image reference against the uploads base URL.
///
/// Absolute references pass through untouched.
fn resolve_image_url(uploads_base: &str, image_path: &str) -> String {
    if image_path.starts_with("http://") || image_path.starts_with("https://") {
        return image_path.to_owned();
    }
    format!(
        "{}/{}",
        uploads_base.trim_end_matches('/'),
        image_path.trim_start_matches('/')
    )
}
