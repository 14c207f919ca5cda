//! Catalog product records.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use std::fmt;

use crate::price::Price;

/// Opaque product identifier as sent by the catalog API.
///
/// Backends disagree on whether ids are numbers or strings, so both are
/// accepted and kept verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ProductId {
    Number(serde_json::Number),
    Text(String),
}

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{}", n),
            Self::Text(s) => write!(f, "{}", s),
        }
    }
}

impl From<u64> for ProductId {
    fn from(id: u64) -> Self {
        Self::Number(id.into())
    }
}

impl From<&str> for ProductId {
    fn from(id: &str) -> Self {
        Self::Text(id.to_string())
    }
}

/// A product as returned by `GET /api/products`.
///
/// Only `price` is required. Text fields that are missing or `null` become
/// empty, and an id that is neither a number nor a string counts as absent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    #[serde(default, deserialize_with = "lenient_id")]
    pub id: Option<ProductId>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub title: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub description: String,
    pub price: Price,
    #[serde(default)]
    pub image: Option<String>,
}

impl Product {
    /// Create a product with the required fields.
    pub fn new(title: impl Into<String>, price: impl Into<Price>) -> Self {
        Self {
            id: None,
            title: title.into(),
            description: String::new(),
            price: price.into(),
            image: None,
        }
    }

    /// Set the product id.
    pub fn with_id(mut self, id: impl Into<ProductId>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Set the description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Set the image URL.
    pub fn with_image(mut self, image: impl Into<String>) -> Self {
        self.image = Some(image.into());
        self
    }

    /// Render identity of this product at `position` in its sequence.
    pub fn key(&self, position: usize) -> ProductKey {
        match &self.id {
            Some(id) => ProductKey::Id(id.clone()),
            None => ProductKey::Position(position),
        }
    }
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

fn lenient_id<'de, D>(deserializer: D) -> Result<Option<ProductId>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Number(n) => Some(ProductId::Number(n)),
        Value::String(s) => Some(ProductId::Text(s)),
        _ => None,
    })
}

/// Identity used to key a rendered card.
///
/// Position only stands in for identity within one render.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ProductKey {
    Id(ProductId),
    Position(usize),
}

impl fmt::Display for ProductKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Id(id) => write!(f, "{}", id),
            Self::Position(pos) => write!(f, "#{}", pos),
        }
    }
}
