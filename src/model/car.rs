use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Document type tag stored with every car.
pub const CAR_DOC_TYPE: &str = "car";

fn car_doc_type() -> String {
    CAR_DOC_TYPE.to_string()
}

/// A vehicle asset record, keyed on the ledger by its asset id (e.g. `CAR0`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Car {
    #[serde(rename = "docType", default = "car_doc_type")]
    pub doc_type: String,
    pub make: String,
    pub model: String,
    pub color: String,
    pub owner: String,
    /// Fields written by other clients, carried through rewrites untouched.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Car {
    pub fn new(
        make: impl Into<String>,
        model: impl Into<String>,
        color: impl Into<String>,
        owner: impl Into<String>,
    ) -> Self {
        Self {
            doc_type: car_doc_type(),
            make: make.into(),
            model: model.into(),
            color: color.into(),
            owner: owner.into(),
            extra: Map::new(),
        }
    }

    /// Name of the first empty field, if any.
    pub fn blank_field(&self) -> Option<&'static str> {
        [
            ("make", &self.make),
            ("model", &self.model),
            ("color", &self.color),
            ("owner", &self.owner),
        ]
        .into_iter()
        .find(|(_, value)| value.is_empty())
        .map(|(name, _)| name)
    }

    pub fn set_owner(&mut self, owner: impl Into<String>) {
        self.owner = owner.into();
    }
}
