use crate::openai::{Model, ModelListResponse};

const CATALOG_CREATED: u64 = 1687882410;

// (id, root)
const BUILTIN_MODELS: [(&str, &str); 4] = [
    ("gpt-4", "gpt-4"),
    ("gpt-4-turbo", "gpt-4"),
    ("gpt-3.5-turbo", "gpt-3.5-turbo"),
    ("gpt-4o-mini", "gpt-4"),
];

/// The model list served on `/models`. Built once at startup and never mutated.
#[derive(Debug, Clone, PartialEq)]
pub struct ModelCatalog {
    list: ModelListResponse,
}

impl ModelCatalog {
    pub fn builtin() -> Self {
        let data = BUILTIN_MODELS
            .iter()
            .map(|(id, root)| Model {
                id: (*id).to_string(),
                object: "model".to_string(),
                created: CATALOG_CREATED,
                owned_by: "openai".to_string(),
                permission: Vec::new(),
                root: (*root).to_string(),
                parent: None,
            })
            .collect();
        Self {
            list: ModelListResponse {
                data,
                object: "list".to_string(),
            },
        }
    }

    pub fn list(&self) -> &ModelListResponse {
        &self.list
    }
}

impl Default for ModelCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_has_four_openai_models_in_order() {
        let catalog = ModelCatalog::builtin();
        let ids: Vec<&str> = catalog.list().data.iter().map(|m| m.id.as_str()).collect();
        assert_eq!(ids, ["gpt-4", "gpt-4-turbo", "gpt-3.5-turbo", "gpt-4o-mini"]);
        assert!(catalog.list().data.iter().all(|m| m.owned_by == "openai"
            && m.created == CATALOG_CREATED
            && m.parent.is_none()));
    }

    #[test]
    fn serializes_data_before_object() {
        let json = serde_json::to_string(ModelCatalog::builtin().list()).unwrap();
        assert!(json.starts_with(r#"{"data":[{"id":"gpt-4","object":"model","created":1687882410,"owned_by":"openai","permission":[],"root":"gpt-4","parent":null}"#));
        assert!(json.ends_with(r#"],"object":"list"}"#));
    }
}
