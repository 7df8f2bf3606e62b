//! Response schema declaration for structured-output generation.
//!
//! A small typed rendition of the schema language the `generateContent`
//! endpoint accepts (an OpenAPI-style subset). Only the pieces this
//! application needs are modelled.

use std::collections::BTreeMap;

use serde::Serialize;

/// Schema node types accepted by the structured-output endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum SchemaType {
    Array,
    Object,
    String,
    Integer,
}

/// One node of a response schema.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Schema {
    #[serde(rename = "type")]
    pub schema_type: SchemaType,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<&'static str>,

    /// Element schema, for arrays.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub items: Option<Box<Schema>>,

    /// Field schemas, for objects.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub properties: Option<BTreeMap<&'static str, Schema>>,

    /// Allowed values, for closed string sets.
    #[serde(rename = "enum", skip_serializing_if = "Option::is_none")]
    pub enum_values: Option<Vec<&'static str>>,

    /// Required field names, for objects.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub required: Option<Vec<&'static str>>,
}

impl Schema {
    fn new(schema_type: SchemaType) -> Self {
        Self {
            schema_type,
            description: None,
            items: None,
            properties: None,
            enum_values: None,
            required: None,
        }
    }

    /// A free-text string field.
    pub fn string() -> Self {
        Self::new(SchemaType::String)
    }

    /// An integer field.
    pub fn integer() -> Self {
        Self::new(SchemaType::Integer)
    }

    /// An array of `items`.
    pub fn array(items: Schema) -> Self {
        let mut schema = Self::new(SchemaType::Array);
        schema.items = Some(Box::new(items));
        schema
    }

    /// An object with the given fields, of which `required` must be present.
    pub fn object(
        properties: impl IntoIterator<Item = (&'static str, Schema)>,
        required: impl IntoIterator<Item = &'static str>,
    ) -> Self {
        let mut schema = Self::new(SchemaType::Object);
        schema.properties = Some(properties.into_iter().collect());
        schema.required = Some(required.into_iter().collect());
        schema
    }

    /// Attach a description hint for the model.
    pub fn describe(mut self, description: &'static str) -> Self {
        self.description = Some(description);
        self
    }

    /// Restrict a string field to a closed value set.
    pub fn one_of(mut self, values: impl IntoIterator<Item = &'static str>) -> Self {
        self.enum_values = Some(values.into_iter().collect());
        self
    }
}

/// The declared shape of a route-planning response: an array of route
/// options, each with ordered steps.
///
/// Required fields are enforced again at decode time; the schema request
/// alone is not trusted to guarantee them.
pub fn route_options_schema() -> Schema {
    let step = Schema::object(
        [
            (
                "mode",
                Schema::string().one_of(crate::domain::TransportMode::ALL.map(|m| m.as_str())),
            ),
            ("instruction", Schema::string().describe("用戶該做什麼，繁體中文")),
            ("duration", Schema::string().describe("步驟所需時間")),
            (
                "locationName",
                Schema::string().describe("車站或地點名稱，用於地圖搜索"),
            ),
            ("lineName", Schema::string().describe("路線號碼或線路名稱")),
            (
                "waitMinutes",
                Schema::integer().describe("預計下一班車的等待分鐘數 (模擬值)"),
            ),
        ],
        ["mode", "instruction", "duration", "locationName"],
    );

    let route = Schema::object(
        [
            ("id", Schema::string()),
            (
                "summary",
                Schema::string().describe("路線摘要，例如 '港鐵 -> 巴士 5號'"),
            ),
            ("totalDuration", Schema::string().describe("例如 '45 分鐘'")),
            ("cost", Schema::string().describe("例如 'HK$ 12.5'")),
            (
                "tags",
                Schema::array(Schema::string()).describe("標籤，例如 '最快'、'最平'、'少步行'"),
            ),
            ("steps", Schema::array(step)),
        ],
        ["id", "summary", "totalDuration", "cost", "steps", "tags"],
    );

    Schema::array(route)
}
