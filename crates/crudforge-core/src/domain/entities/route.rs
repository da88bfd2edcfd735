use serde::Serialize;

use crate::domain::entities::entity::EntityName;

/// Icon element every generated navigation entry uses.
pub const ROUTE_ICON: &str = "<TbTemplate size={24} />";

/// Versioned URL prefix generated pages live under.
pub const ROUTE_PREFIX: &str = "/v1";

/// One navigation entry in the generated project's route list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RouteEntry {
    pub icon: String,
    pub label: String,
    pub url: String,
}

impl RouteEntry {
    pub fn for_entity(entity: &EntityName) -> Self {
        Self {
            icon: ROUTE_ICON.to_string(),
            label: format!("CRUD {}", entity.capitalized()),
            url: format!("{ROUTE_PREFIX}/{entity}"),
        }
    }

    /// Object-literal block, two-space indented, with a trailing comma and
    /// newline so it can be spliced straight in front of the closing `];`.
    pub fn render(&self) -> String {
        format!(
            "  {{\n    icon: {},\n    label: \"{}\",\n    url: \"{}\",\n  }},\n",
            self.icon, self.label, self.url
        )
    }
}
