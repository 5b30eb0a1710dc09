use crate::storage::Dataset;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// What was thrown away. Only tray discards reduce tray stock.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum DiscardType {
    #[serde(rename = "Bandejas", alias = "trays")]
    Trays,
    #[serde(rename = "Vasos", alias = "pots")]
    Pots,
}

impl DiscardType {
    pub fn label(self) -> &'static str {
        match self {
            DiscardType::Trays => "tray(s)",
            DiscardType::Pots => "pot(s)",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct DiscardRecord {
    pub date: NaiveDate,
    pub discard_type: DiscardType,
    pub variety_code: String,
    pub variety_name: String,
    pub quantity_discarded: i64,
}

#[derive(Serialize, Deserialize)]
pub struct DiscardRow {
    #[serde(rename = "Data")]
    date: NaiveDate,
    #[serde(rename = "Tipo")]
    discard_type: DiscardType,
    #[serde(rename = "Código Variedade")]
    variety_code: String,
    #[serde(rename = "Nome Variedade")]
    variety_name: String,
    #[serde(rename = "Quantidade Descartada")]
    quantity_discarded: i64,
}

impl Dataset for DiscardRecord {
    const NAME: &'static str = "descartes";
    const FILE_NAME: &'static str = "descartes.csv";
    const COLUMNS: &'static [&'static str] = &[
        "Data",
        "Tipo",
        "Código Variedade",
        "Nome Variedade",
        "Quantidade Descartada",
    ];

    type Row = DiscardRow;

    fn to_row(&self) -> DiscardRow {
        DiscardRow {
            date: self.date,
            discard_type: self.discard_type,
            variety_code: self.variety_code.clone(),
            variety_name: self.variety_name.clone(),
            quantity_discarded: self.quantity_discarded,
        }
    }

    fn from_row(row: DiscardRow) -> Self {
        Self {
            date: row.date,
            discard_type: row.discard_type,
            variety_code: row.variety_code,
            variety_name: row.variety_name,
            quantity_discarded: row.quantity_discarded,
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct DiscardCreate {
    #[serde(default)]
    pub variety_name: String,
    #[serde(default)]
    pub variety_code: String,
    #[serde(default)]
    pub discard_type: Option<DiscardType>,
    #[serde(default)]
    pub quantity_discarded: i64,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct DiscardResponse {
    pub message: String,
    pub discard: DiscardRecord,
    /// Trays of this code and variety still in stock
    pub remaining_trays: i64,
}
