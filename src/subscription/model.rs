use serde::Deserialize;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Subscription {
    pub name: String,
    pub id: String,
    #[serde(rename = "isDefault", default)]
    pub is_default: bool,
}
