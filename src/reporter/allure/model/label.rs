use serde_derive::Serialize;

#[derive(Debug, Serialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
#[serde(tag = "name", content = "value")]
pub enum Label {
    Feature(String),
    Story(String),
    Tag(String),
    Framework(String),
    Language(String),
    Host(String),
    Suite(String),
}
