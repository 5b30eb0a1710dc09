use crate::storage::Dataset;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

/// A batch of purchased seedling trays still on hand
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct TrayStock {
    pub code: String,
    pub variety_name: String,
    pub quantity: i64,
}

#[derive(Serialize, Deserialize)]
pub struct TrayStockRow {
    #[serde(rename = "Código")]
    code: String,
    #[serde(rename = "Nome Variedade")]
    variety_name: String,
    #[serde(rename = "Quantidade")]
    quantity: i64,
}

impl Dataset for TrayStock {
    const NAME: &'static str = "bandejas_compradas";
    const FILE_NAME: &'static str = "bandejas_compradas.csv";
    const COLUMNS: &'static [&'static str] = &["Código", "Nome Variedade", "Quantidade"];

    type Row = TrayStockRow;

    fn to_row(&self) -> TrayStockRow {
        TrayStockRow {
            code: self.code.clone(),
            variety_name: self.variety_name.clone(),
            quantity: self.quantity,
        }
    }

    fn from_row(row: TrayStockRow) -> Self {
        Self {
            code: row.code,
            variety_name: row.variety_name,
            quantity: row.quantity,
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct TrayPurchaseCreate {
    /// Tray code, six digits or HBxxxx by convention
    #[serde(default)]
    pub code: String,
    #[serde(default)]
    pub variety_name: String,
    #[serde(default)]
    pub quantity: i64,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct TrayPurchaseResponse {
    pub message: String,
    pub tray: TrayStock,
}

/// Cascading variety choice offered by the planting and discard workflows
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct VarietySelection {
    pub variety_names: Vec<String>,
    pub selected_variety: String,
    pub variety_codes: Vec<String>,
}

#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct VarietySelectionQuery {
    /// Variety to list codes for; defaults to the first variety in stock
    pub variety_name: Option<String>,
}
