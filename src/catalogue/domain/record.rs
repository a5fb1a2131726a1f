//! Product-info record.

use super::{CatalogueDomainError, ProductCategory, ProductQuery};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Field holding the product name.
pub const PRODUCT_NAME_FIELD: &str = "product_name";
/// Field holding the category label.
pub const CATEGORY_FIELD: &str = "category";
/// Field holding the feature summary.
pub const KEY_FEATURES_FIELD: &str = "key_features";
/// Field holding the specification mapping.
pub const SPECIFICATIONS_FIELD: &str = "specifications";
/// Field holding the target audience.
pub const TARGET_AUDIENCE_FIELD: &str = "target_audience";
/// Field holding the price text.
pub const PRICE_FIELD: &str = "price";
/// Field holding the description template.
pub const TEMPLATE_FIELD: &str = "template";
/// Field flagging synthesized records.
pub const GENERATED_FIELD: &str = "generated";
/// Field whose presence marks a lookup failure rather than product data.
pub const ERROR_MARKER_FIELD: &str = "error";

const SYNTHESIZED_FEATURES_PREFIX: &str = "Features extracted from query: ";
const SYNTHESIZED_PRICE: &str = "Price not specified";
const SYNTHESIZED_TEMPLATE: &str = "Introducing the {product_name}: a quality product designed for {target_audience}. Featuring {key_features}, this {category} product delivers exceptional value.";

/// Structured product information.
///
/// A record wraps a JSON object so that stored records keep any extra keys
/// verbatim. Construction guarantees `product_name` (string), `category`
/// (string) and `generated` (bool) are present.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Map<String, Value>", into = "Map<String, Value>")]
pub struct ProductRecord {
    fields: Map<String, Value>,
}

impl ProductRecord {
    /// Decodes a record exactly as stored in the backing store.
    ///
    /// Stored records are never synthesized, so `generated` is forced to
    /// `false` whatever the payload says.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogueDomainError::MalformedRecord`] when the payload is
    /// not a JSON object with a string `product_name`, or
    /// [`CatalogueDomainError::ErrorMarker`] when it carries an `error` key.
    pub fn from_stored_json(payload: &[u8]) -> Result<Self, CatalogueDomainError> {
        let fields: Map<String, Value> = serde_json::from_slice(payload)
            .map_err(|err| CatalogueDomainError::MalformedRecord(err.to_string()))?;
        let mut record = Self::try_from(fields)?;
        record
            .fields
            .insert(GENERATED_FIELD.to_owned(), Value::Bool(false));
        Ok(record)
    }

    /// Fabricates a record from the query text alone.
    #[must_use]
    pub fn synthesize(query: &ProductQuery) -> Self {
        let (product_name, target_audience) = query.name_and_audience();
        let category = ProductCategory::classify(query.as_str());

        let mut specifications = Map::new();
        specifications.insert(
            "detail1".to_owned(),
            Value::from("Generated specification 1"),
        );
        specifications.insert(
            "detail2".to_owned(),
            Value::from("Generated specification 2"),
        );

        let mut fields = Map::new();
        fields.insert(PRODUCT_NAME_FIELD.to_owned(), Value::String(product_name));
        fields.insert(CATEGORY_FIELD.to_owned(), Value::from(category.as_str()));
        fields.insert(
            KEY_FEATURES_FIELD.to_owned(),
            Value::String(format!("{SYNTHESIZED_FEATURES_PREFIX}{query}")),
        );
        fields.insert(
            SPECIFICATIONS_FIELD.to_owned(),
            Value::Object(specifications),
        );
        fields.insert(
            TARGET_AUDIENCE_FIELD.to_owned(),
            Value::String(target_audience),
        );
        fields.insert(PRICE_FIELD.to_owned(), Value::from(SYNTHESIZED_PRICE));
        fields.insert(TEMPLATE_FIELD.to_owned(), Value::from(SYNTHESIZED_TEMPLATE));
        fields.insert(GENERATED_FIELD.to_owned(), Value::Bool(true));

        Self { fields }
    }

    /// Returns the product name.
    #[must_use]
    pub fn product_name(&self) -> &str {
        self.str_field(PRODUCT_NAME_FIELD).unwrap_or_default()
    }

    /// Returns the category label.
    #[must_use]
    pub fn category(&self) -> &str {
        self.str_field(CATEGORY_FIELD)
            .unwrap_or(ProductCategory::Unknown.as_str())
    }

    /// Returns the feature summary when it is a string.
    #[must_use]
    pub fn key_features(&self) -> Option<&str> {
        self.str_field(KEY_FEATURES_FIELD)
    }

    /// Returns the specification mapping when present.
    #[must_use]
    pub fn specifications(&self) -> Option<&Map<String, Value>> {
        self.fields
            .get(SPECIFICATIONS_FIELD)
            .and_then(Value::as_object)
    }

    /// Returns the target audience when it is a string.
    #[must_use]
    pub fn target_audience(&self) -> Option<&str> {
        self.str_field(TARGET_AUDIENCE_FIELD)
    }

    /// Returns the price text when it is a string.
    #[must_use]
    pub fn price(&self) -> Option<&str> {
        self.str_field(PRICE_FIELD)
    }

    /// Returns the description template when it is a string.
    #[must_use]
    pub fn template(&self) -> Option<&str> {
        self.str_field(TEMPLATE_FIELD)
    }

    /// Returns `true` for synthesized records.
    #[must_use]
    pub fn is_generated(&self) -> bool {
        self.fields
            .get(GENERATED_FIELD)
            .and_then(Value::as_bool)
            .unwrap_or(false)
    }

    /// Returns a field by name.
    #[must_use]
    pub fn get(&self, field: &str) -> Option<&Value> {
        self.fields.get(field)
    }

    /// Returns the underlying JSON object.
    #[must_use]
    pub const fn as_map(&self) -> &Map<String, Value> {
        &self.fields
    }

    /// Iterates over string-valued fields only.
    pub fn string_fields(&self) -> impl Iterator<Item = (&str, &str)> {
        self.fields
            .iter()
            .filter_map(|(name, value)| value.as_str().map(|text| (name.as_str(), text)))
    }

    /// Serializes the record to JSON text.
    ///
    /// # Errors
    ///
    /// Returns the serializer error; a record built through this type's
    /// constructors always serializes.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(&self.fields)
    }

    fn str_field(&self, field: &str) -> Option<&str> {
        self.fields.get(field).and_then(Value::as_str)
    }
}

impl TryFrom<Map<String, Value>> for ProductRecord {
    type Error = CatalogueDomainError;

    fn try_from(mut fields: Map<String, Value>) -> Result<Self, Self::Error> {
        if let Some(marker) = fields.get(ERROR_MARKER_FIELD) {
            let message = marker
                .as_str()
                .map_or_else(|| marker.to_string(), str::to_owned);
            return Err(CatalogueDomainError::ErrorMarker(message));
        }

        if !fields.get(PRODUCT_NAME_FIELD).is_some_and(Value::is_string) {
            return Err(CatalogueDomainError::MalformedRecord(format!(
                "'{PRODUCT_NAME_FIELD}' must be a string"
            )));
        }

        match fields.get(CATEGORY_FIELD).map(Value::is_string) {
            None => {
                fields.insert(
                    CATEGORY_FIELD.to_owned(),
                    Value::from(ProductCategory::Unknown.as_str()),
                );
            }
            Some(true) => {}
            Some(false) => {
                return Err(CatalogueDomainError::MalformedRecord(format!(
                    "'{CATEGORY_FIELD}' must be a string"
                )));
            }
        }

        if !fields.get(GENERATED_FIELD).is_some_and(Value::is_boolean) {
            fields.insert(GENERATED_FIELD.to_owned(), Value::Bool(false));
        }

        Ok(Self { fields })
    }
}

impl From<ProductRecord> for Map<String, Value> {
    fn from(value: ProductRecord) -> Self {
        value.fields
    }
}
