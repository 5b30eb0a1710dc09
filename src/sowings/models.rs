use crate::storage::Dataset;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct SowingRecord {
    pub date: NaiveDate,
    pub variety_code: String,
    pub variety_name: String,
    /// Number of trays sown
    pub quantity_sown: i64,
}

#[derive(Serialize, Deserialize)]
pub struct SowingRow {
    #[serde(rename = "Data")]
    date: NaiveDate,
    #[serde(rename = "Código Variedade")]
    variety_code: String,
    #[serde(rename = "Nome Variedade")]
    variety_name: String,
    #[serde(rename = "Quantidade Semeada")]
    quantity_sown: i64,
}

impl Dataset for SowingRecord {
    const NAME: &'static str = "semeio";
    const FILE_NAME: &'static str = "semeio.csv";
    const COLUMNS: &'static [&'static str] = &[
        "Data",
        "Código Variedade",
        "Nome Variedade",
        "Quantidade Semeada",
    ];

    type Row = SowingRow;

    fn to_row(&self) -> SowingRow {
        SowingRow {
            date: self.date,
            variety_code: self.variety_code.clone(),
            variety_name: self.variety_name.clone(),
            quantity_sown: self.quantity_sown,
        }
    }

    fn from_row(row: SowingRow) -> Self {
        Self {
            date: row.date,
            variety_code: row.variety_code,
            variety_name: row.variety_name,
            quantity_sown: row.quantity_sown,
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct SowingCreate {
    /// Sowing date, today when omitted
    #[serde(default)]
    pub date: Option<NaiveDate>,
    /// "CF" followed by four digits
    #[serde(default)]
    pub variety_code: String,
    #[serde(default)]
    pub variety_name: String,
    #[serde(default)]
    pub quantity_sown: i64,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct SowingResponse {
    pub message: String,
    pub sowing: SowingRecord,
}
