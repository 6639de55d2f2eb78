use crate::model::ProductRecord;
use crate::screen::state::{FailureKind, RequestStatus, ScreenState};

pub const FAILURE_IMAGE_URL: &str =
    "https://assets.ccbp.in/frontend/react-js/nxt-trendz-error-view-img.png";
pub const STAR_IMAGE_URL: &str = "https://assets.ccbp.in/frontend/react-js/star-img.png";
pub const PRODUCTS_ROUTE: &str = "/products";

/// The one view a screen shows for its current status.
#[derive(Debug, Clone, Copy)]
pub enum View<'a> {
    Nothing,
    Loading,
    Details {
        product: &'a ProductRecord,
        similar_products: &'a [ProductRecord],
        quantity: u32,
    },
    NotFound {
        failure: Option<FailureKind>,
    },
}

pub fn select_view(state: &ScreenState) -> View<'_> {
    match state.status() {
        RequestStatus::Initial => View::Nothing,
        RequestStatus::InProgress => View::Loading,
        RequestStatus::Failure => View::NotFound {
            failure: state.failure(),
        },
        RequestStatus::Success => match state.product() {
            Some(product) => View::Details {
                product,
                similar_products: state.similar_products(),
                quantity: state.quantity(),
            },
            None => View::Nothing,
        },
    }
}

pub fn render(view: &View<'_>) -> String {
    let mut out = String::new();
    match view {
        View::Nothing => {}
        View::Loading => out.push_str("Loading product details...\n"),
        View::Details {
            product,
            similar_products,
            quantity,
        } => {
            format_item_details(product, &mut out);
            format_quantity(*quantity, &mut out);
            out.push_str("[ ADD TO CART ]\n\n");
            format_similar_products(similar_products, &mut out);
        }
        View::NotFound { failure } => format_failure(*failure, &mut out),
    }
    out
}

/// JSON rendering of the whole screen, for scripting.
pub fn render_json(state: &ScreenState) -> Result<String, serde_json::Error> {
    let mut json = serde_json::to_string_pretty(state)?;
    json.push('\n');
    Ok(json)
}

pub fn format_quantity_line(quantity: u32) -> String {
    format!("[-] {} [+]", quantity)
}

fn format_item_details(product: &ProductRecord, out: &mut String) {
    out.push_str(&format!("# {}\n\n", product.title));
    out.push_str(&format!("![product]({})\n\n", product.image_url));
    out.push_str(&format!("- **Price:** {}\n", format_price(product.price)));
    out.push_str(&format!(
        "- **Rating:** {} ![star]({})\n",
        product.rating, STAR_IMAGE_URL
    ));
    out.push_str(&format!(
        "- **Reviews:** {} Reviews\n",
        product.total_reviews
    ));
    out.push('\n');

    if !product.description.is_empty() {
        out.push_str(&product.description);
        out.push_str("\n\n");
    }

    out.push_str(&format!("- **Available:** {}\n", product.availability));
    out.push_str(&format!("- **Brand:** {}\n\n", product.brand));
}

fn format_quantity(quantity: u32, out: &mut String) {
    out.push_str("## Quantity\n");
    out.push_str(&format_quantity_line(quantity));
    out.push_str("\n\n");
}

// Each tile is a plain template over the record.
fn format_similar_products(products: &[ProductRecord], out: &mut String) {
    out.push_str("## Similar Products\n");
    if products.is_empty() {
        out.push_str("_None_\n");
        return;
    }
    for (i, product) in products.iter().enumerate() {
        out.push('\n');
        out.push_str(&format!("### {}. {}\n", i + 1, product.title));
        out.push_str(&format!("- **Brand:** {}\n", product.brand));
        out.push_str(&format!("- **Price:** {}\n", format_price(product.price)));
        out.push_str(&format!("- **Rating:** {}\n", product.rating));
        out.push_str(&format!("- **ID:** {}\n", product.id));
    }
}

fn format_failure(failure: Option<FailureKind>, out: &mut String) {
    out.push_str(&format!("![failure view]({})\n\n", FAILURE_IMAGE_URL));
    out.push_str("# Product Not Found\n\n");
    if let Some(reason) = failure.and_then(failure_reason) {
        out.push_str(&format!("_{}_\n\n", reason));
    }
    out.push_str(&format!("[Continue Shopping]({})\n", PRODUCTS_ROUTE));
}

fn failure_reason(kind: FailureKind) -> Option<String> {
    match kind {
        FailureKind::NotFound => None,
        FailureKind::Unauthorized => Some("The API rejected the auth token".to_string()),
        FailureKind::HttpStatus(status) => {
            Some(format!("The API responded with HTTP {}", status))
        }
        FailureKind::Network => Some("The product API could not be reached".to_string()),
        FailureKind::MalformedBody => {
            Some("The API returned an unreadable response".to_string())
        }
        FailureKind::MissingToken => Some("No auth token is configured".to_string()),
    }
}

fn format_price(price: f64) -> String {
    format!("Rs {}/-", price)
}
