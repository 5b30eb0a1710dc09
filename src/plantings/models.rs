use crate::storage::Dataset;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Seedlings moved from trays into pots
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct PlantingRecord {
    pub date: NaiveDate,
    pub variety_code: String,
    pub variety_name: String,
    pub pots_planted: i64,
    pub trays_used: i64,
}

#[derive(Serialize, Deserialize)]
pub struct PlantingRow {
    #[serde(rename = "Data")]
    date: NaiveDate,
    #[serde(rename = "Código Variedade")]
    variety_code: String,
    #[serde(rename = "Nome Variedade")]
    variety_name: String,
    #[serde(rename = "Quantidade Vasos Plantados")]
    pots_planted: i64,
    #[serde(rename = "Bandejas Usadas")]
    trays_used: i64,
}

impl Dataset for PlantingRecord {
    const NAME: &'static str = "plantios";
    const FILE_NAME: &'static str = "plantios.csv";
    const COLUMNS: &'static [&'static str] = &[
        "Data",
        "Código Variedade",
        "Nome Variedade",
        "Quantidade Vasos Plantados",
        "Bandejas Usadas",
    ];

    type Row = PlantingRow;

    fn to_row(&self) -> PlantingRow {
        PlantingRow {
            date: self.date,
            variety_code: self.variety_code.clone(),
            variety_name: self.variety_name.clone(),
            pots_planted: self.pots_planted,
            trays_used: self.trays_used,
        }
    }

    fn from_row(row: PlantingRow) -> Self {
        Self {
            date: row.date,
            variety_code: row.variety_code,
            variety_name: row.variety_name,
            pots_planted: row.pots_planted,
            trays_used: row.trays_used,
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct PlantingCreate {
    #[serde(default)]
    pub variety_name: String,
    /// One of the codes offered for `variety_name` by the selection endpoint
    #[serde(default)]
    pub variety_code: String,
    #[serde(default)]
    pub pots_planted: i64,
    #[serde(default)]
    pub trays_used: i64,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct PlantingResponse {
    pub message: String,
    pub planting: PlantingRecord,
    /// Trays of this code and variety still in stock
    pub remaining_trays: i64,
}
