use crate::config::Config;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// The four mutually exclusive workflows offered in the control menu
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum Workflow {
    TrayPurchases,
    Sowings,
    Plantings,
    Discards,
}

impl Workflow {
    pub const ALL: [Workflow; 4] = [
        Workflow::TrayPurchases,
        Workflow::Sowings,
        Workflow::Plantings,
        Workflow::Discards,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Workflow::TrayPurchases => "Purchased trays",
            Workflow::Sowings => "Sowing",
            Workflow::Plantings => "Planting",
            Workflow::Discards => "Discards",
        }
    }

    pub fn path(self) -> &'static str {
        match self {
            Workflow::TrayPurchases => "/api/trays",
            Workflow::Sowings => "/api/sowings",
            Workflow::Plantings => "/api/plantings",
            Workflow::Discards => "/api/discards",
        }
    }
}

#[derive(Debug, ToSchema, Deserialize, Serialize)]
pub struct MenuEntry {
    pub workflow: Workflow,
    pub label: String,
    pub path: String,
}

#[derive(Debug, ToSchema, Deserialize, Serialize, Default)]
pub struct UIConfiguration {
    #[serde(rename = "appName")]
    pub app_name: String,
    pub deployment: String,
    pub menu: Vec<MenuEntry>,
}

impl UIConfiguration {
    pub fn new(config: &Config) -> Self {
        Self {
            app_name: config.app_name.clone(),
            deployment: config.deployment.clone(),
            menu: Workflow::ALL
                .into_iter()
                .map(|workflow| MenuEntry {
                    workflow,
                    label: workflow.label().to_string(),
                    path: workflow.path().to_string(),
                })
                .collect(),
        }
    }
}

#[derive(ToSchema, Deserialize, Serialize)]
pub struct HealthCheck {
    pub status: String,
}
