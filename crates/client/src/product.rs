//! Storefront catalogue service

use serde::{Deserialize, Serialize};

use crate::api::ApiClient;
use crate::error::ClientResult;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UserType {
    pub usertype: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProductCategory {
    pub usertype: UserType,
    pub category: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Product {
    pub id: u64,
    pub name: String,
    pub price: String,
    pub brand: String,
    pub category: ProductCategory,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductList {
    #[serde(rename = "responseCode")]
    pub response_code: u16,
    #[serde(default)]
    pub products: Vec<Product>,
    #[serde(default)]
    pub message: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Brand {
    pub id: u64,
    pub brand: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BrandList {
    #[serde(rename = "responseCode")]
    pub response_code: u16,
    #[serde(default)]
    pub brands: Vec<Brand>,
}

#[derive(Clone, Debug)]
pub struct ProductService {
    api: ApiClient,
}

impl ProductService {
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }

    pub async fn products(&self) -> ClientResult<ProductList> {
        self.api.json(self.api.get("/productsList")).await
    }

    pub async fn search_products(&self, term: &str) -> ClientResult<ProductList> {
        let request = self
            .api
            .post("/searchProduct")
            .form(&[("search_product", term)]);
        self.api.json(request).await
    }

    pub async fn brands(&self) -> ClientResult<BrandList> {
        self.api.json(self.api.get("/brandsList")).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_product_list_parses() {
        let body = r#"{"responseCode": 200, "products": [
            {"id": 1, "name": "Blue Top", "price": "Rs. 500", "brand": "Polo",
             "category": {"usertype": {"usertype": "Women"}, "category": "Tops"}}
        ]}"#;
        let list: ProductList = serde_json::from_str(body).unwrap();
        assert_eq!(list.products[0].name, "Blue Top");
        assert_eq!(list.products[0].category.usertype.usertype, "Women");
    }
}
