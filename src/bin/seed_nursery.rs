//! Nursery Seeder
//!
//! Fills a running nursery stock API with a small demo season: tray
//! purchases, sowings, plantings and discards.
//!
//! Usage:
//!   `cargo run --bin seed_nursery -- --url http://localhost:3000`

use clap::{Arg, Command};
use console::style;
use indicatif::{ProgressBar, ProgressStyle};
use reqwest::Client;
use serde_json::{Value, json};
use std::time::Duration;

type SeedResult<T> = Result<T, Box<dyn std::error::Error>>;

pub struct NurserySeeder {
    base_url: String,
    client: Client,
    created: usize,
}

impl NurserySeeder {
    pub fn new(base_url: &str) -> SeedResult<Self> {
        let client = Client::builder().timeout(Duration::from_secs(30)).build()?;

        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client,
            created: 0,
        })
    }

    async fn post(&self, endpoint: &str, data: &Value) -> SeedResult<Value> {
        let url = format!("{}{}", self.base_url, endpoint);
        let response = self.client.post(&url).json(data).send().await?;

        if response.status().is_success() {
            Ok(response.json::<Value>().await?)
        } else {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();
            Err(format!("HTTP {status} {endpoint}: {error_text}").into())
        }
    }

    pub async fn test_connection(&self) -> SeedResult<()> {
        let url = format!("{}/healthz", self.base_url);
        let response = self.client.get(&url).send().await?;
        if !response.status().is_success() {
            return Err(format!("Health check failed with HTTP {}", response.status()).into());
        }
        Ok(())
    }

    async fn post_all(&mut self, step: &str, endpoint: &str, records: Vec<Value>) -> SeedResult<()> {
        println!("{} Creating {endpoint} records...", style(step).bold().dim());

        let pb = ProgressBar::new(records.len() as u64);
        pb.set_style(
            ProgressStyle::default_bar()
                .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos:>7}/{len:7} {msg}")?
                .progress_chars("##-"),
        );

        for record in records {
            let result = self.post(endpoint, &record).await?;
            pb.set_message(
                result["message"]
                    .as_str()
                    .unwrap_or_default()
                    .to_string(),
            );
            self.created += 1;
            pb.inc(1);
        }

        pb.finish_with_message("done");
        Ok(())
    }

    pub async fn seed(&mut self) -> SeedResult<()> {
        self.post_all(
            "[1/4]",
            "/api/trays",
            vec![
                json!({"code": "123456", "variety_name": "Tomate Cereja", "quantity": 12}),
                json!({"code": "123457", "variety_name": "Tomate Cereja", "quantity": 6}),
                json!({"code": "HB0001", "variety_name": "Alface Crespa", "quantity": 8}),
                json!({"code": "HB0002", "variety_name": "Manjericão", "quantity": 4}),
            ],
        )
        .await?;

        self.post_all(
            "[2/4]",
            "/api/sowings",
            vec![
                json!({"variety_code": "CF0101", "variety_name": "Tomate Cereja", "quantity_sown": 5}),
                json!({"variety_code": "CF0202", "variety_name": "Alface Crespa", "quantity_sown": 3}),
            ],
        )
        .await?;

        self.post_all(
            "[3/4]",
            "/api/plantings",
            vec![
                json!({"variety_name": "Tomate Cereja", "variety_code": "123456", "pots_planted": 150, "trays_used": 5}),
                json!({"variety_name": "Alface Crespa", "variety_code": "HB0001", "pots_planted": 80, "trays_used": 2}),
            ],
        )
        .await?;

        self.post_all(
            "[4/4]",
            "/api/discards",
            vec![
                json!({"variety_name": "Manjericão", "variety_code": "HB0002", "discard_type": "Bandejas", "quantity_discarded": 1}),
                json!({"variety_name": "Tomate Cereja", "variety_code": "123456", "discard_type": "Vasos", "quantity_discarded": 7}),
            ],
        )
        .await?;

        Ok(())
    }
}

#[tokio::main]
async fn main() -> SeedResult<()> {
    let matches = Command::new("Nursery Seeder")
        .version("1.0")
        .about("Seeds the nursery stock API with a demo season of records")
        .arg(
            Arg::new("url")
                .short('u')
                .long("url")
                .value_name("URL")
                .help("API base URL")
                .default_value("http://localhost:3000"),
        )
        .get_matches();

    let base_url = matches
        .get_one::<String>("url")
        .map_or("http://localhost:3000", String::as_str);

    println!("{}", style("Nursery Seeder v1.0").bold());
    println!("{}", style("-".repeat(40)).dim());
    println!("API URL: {}", style(base_url).cyan());

    let mut seeder = NurserySeeder::new(base_url)?;
    seeder.test_connection().await?;
    seeder.seed().await?;

    println!(
        "{} Created {} records",
        style("OK").green().bold(),
        seeder.created
    );
    Ok(())
}
