use serde::{Deserialize, Deserializer, Serialize};

/// A product as the API returns it.
#[derive(Debug, Clone, Deserialize)]
pub struct RawProduct {
    #[serde(deserialize_with = "deserialize_id")]
    pub id: String,
    pub brand: String,
    pub title: String,
    pub price: f64,
    pub rating: f64,
    pub availability: String,
    pub description: String,
    #[serde(alias = "imageUrl")]
    pub image_url: String,
    #[serde(alias = "totalReviews")]
    pub total_reviews: u64,
}

/// Body of `GET /products/{id}`.
#[derive(Debug, Clone, Deserialize)]
pub struct ProductDetailsResponse {
    #[serde(flatten)]
    pub product: RawProduct,
    #[serde(default, alias = "similarProducts")]
    pub similar_products: Vec<RawProduct>,
}

/// Display-ready product, replaced wholesale on every fetch.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductRecord {
    pub id: String,
    pub brand: String,
    pub title: String,
    pub price: f64,
    pub rating: f64,
    pub availability: String,
    pub description: String,
    pub image_url: String,
    pub total_reviews: u64,
}

impl From<RawProduct> for ProductRecord {
    fn from(raw: RawProduct) -> Self {
        ProductRecord {
            id: raw.id,
            brand: raw.brand,
            title: raw.title,
            price: raw.price,
            rating: raw.rating,
            availability: raw.availability,
            description: raw.description,
            image_url: raw.image_url,
            total_reviews: raw.total_reviews,
        }
    }
}

impl ProductDetailsResponse {
    /// Normalize the primary product and each similar product with the same rule.
    pub fn normalize(self) -> (ProductRecord, Vec<ProductRecord>) {
        let similar = self
            .similar_products
            .into_iter()
            .map(ProductRecord::from)
            .collect();
        (ProductRecord::from(self.product), similar)
    }
}

// Ids arrive as JSON numbers but route parameters are strings.
fn deserialize_id<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawId {
        Number(u64),
        Text(String),
    }

    Ok(match RawId::deserialize(deserializer)? {
        RawId::Number(n) => n.to_string(),
        RawId::Text(s) => s,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_body() -> &'static str {
        r#"{
            "id": 1,
            "brand": "B",
            "title": "T",
            "price": 100,
            "rating": 4,
            "availability": "IN STOCK",
            "description": "D",
            "image_url": "u",
            "total_reviews": 10,
            "similar_products": [{
                "id": 2,
                "brand": "B2",
                "title": "Similar",
                "price": 250,
                "rating": 3.9,
                "availability": "Out of Stock",
                "description": "D2",
                "image_url": "u2",
                "total_reviews": 3
            }]
        }"#
    }

    #[test]
    fn normalizes_primary_and_similar_products() {
        let body: ProductDetailsResponse = serde_json::from_str(sample_body()).unwrap();
        let (product, similar) = body.normalize();

        assert_eq!(product.id, "1");
        assert_eq!(product.title, "T");
        assert_eq!(product.price, 100.0);
        assert_eq!(product.image_url, "u");
        assert_eq!(product.total_reviews, 10);
        assert_eq!(similar.len(), 1);
        assert_eq!(similar[0].id, "2");
        assert_eq!(similar[0].rating, 3.9);
    }

    #[test]
    fn string_ids_are_kept_verbatim() {
        let raw: RawProduct = serde_json::from_str(
            r#"{"id":"abc-1","brand":"B","title":"T","price":1.5,"rating":5,
                "availability":"IN STOCK","description":"","image_url":"","total_reviews":0}"#,
        )
        .unwrap();
        assert_eq!(ProductRecord::from(raw).id, "abc-1");
    }

    #[test]
    fn missing_similar_products_is_empty() {
        let body: ProductDetailsResponse = serde_json::from_str(
            r#"{"id":7,"brand":"B","title":"T","price":1,"rating":1,
                "availability":"IN STOCK","description":"","image_url":"","total_reviews":0}"#,
        )
        .unwrap();
        assert!(body.normalize().1.is_empty());
    }

    #[test]
    fn normalization_is_idempotent() {
        let body: ProductDetailsResponse = serde_json::from_str(sample_body()).unwrap();
        let (first, _) = body.normalize();

        let reparsed: RawProduct =
            serde_json::from_value(serde_json::to_value(&first).unwrap()).unwrap();
        let second = ProductRecord::from(reparsed);

        assert_eq!(first, second);
    }

    #[test]
    fn record_serializes_in_display_shape() {
        let body: ProductDetailsResponse = serde_json::from_str(sample_body()).unwrap();
        let (product, _) = body.normalize();
        let json = serde_json::to_value(&product).unwrap();

        assert_eq!(json["imageUrl"], "u");
        assert_eq!(json["totalReviews"], 10);
        assert!(json.get("image_url").is_none());
    }
}
