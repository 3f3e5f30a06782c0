//! Organizational structure items
//!
//! The hierarchy (company → branch → department → section → unit) arrives as
//! a flat list; each item points at its parent by id.

use serde::{Deserialize, Serialize};

use crate::error::ModelError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StructureType {
    Company,
    Branch,
    Department,
    Section,
    Unit,
}

impl StructureType {
    pub const ALL: [StructureType; 5] = [
        StructureType::Company,
        StructureType::Branch,
        StructureType::Department,
        StructureType::Section,
        StructureType::Unit,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            StructureType::Company => "company",
            StructureType::Branch => "branch",
            StructureType::Department => "department",
            StructureType::Section => "section",
            StructureType::Unit => "unit",
        }
    }
}

impl std::fmt::Display for StructureType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for StructureType {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "company" => Ok(StructureType::Company),
            "branch" => Ok(StructureType::Branch),
            "department" => Ok(StructureType::Department),
            "section" => Ok(StructureType::Section),
            "unit" => Ok(StructureType::Unit),
            _ => Err(ModelError::UnknownStructureType(s.to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FlatStructureItem {
    pub id: String,
    /// Display name
    pub name: String,
    #[serde(rename = "type")]
    pub kind: StructureType,
    /// `None` marks a root of the license's hierarchy
    #[serde(default)]
    pub parent_id: Option<String>,
    /// Owning license
    pub license_id: String,
}

impl FlatStructureItem {
    pub fn is_root(&self) -> bool {
        self.parent_id.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_item() {
        let json = r#"{
            "id": "d-1",
            "name": "Finance",
            "type": "department",
            "parentId": "c-1",
            "licenseId": "lic-7"
        }"#;

        let item: FlatStructureItem = serde_json::from_str(json).unwrap();
        assert_eq!(item.kind, StructureType::Department);
        assert_eq!(item.parent_id.as_deref(), Some("c-1"));
        assert_eq!(item.license_id, "lic-7");
        assert!(!item.is_root());
    }

    #[test]
    fn test_null_parent_is_root() {
        let json = r#"{"id":"c-1","name":"Acme","type":"company","parentId":null,"licenseId":"lic-7"}"#;
        let item: FlatStructureItem = serde_json::from_str(json).unwrap();
        assert!(item.is_root());

        let out = serde_json::to_value(&item).unwrap();
        assert_eq!(out["type"], "company");
        assert!(out["parentId"].is_null());
    }

    #[test]
    fn test_unknown_type_rejected() {
        let json = r#"{"id":"x","name":"X","type":"division","parentId":null,"licenseId":"l"}"#;
        assert!(serde_json::from_str::<FlatStructureItem>(json).is_err());
        assert_eq!(
            "division".parse::<StructureType>().unwrap_err(),
            ModelError::UnknownStructureType("division".to_string())
        );
    }

    #[test]
    fn test_parse_type_case_insensitive() {
        for kind in StructureType::ALL {
            assert_eq!(kind.as_str().to_uppercase().parse::<StructureType>().unwrap(), kind);
        }
    }
}
