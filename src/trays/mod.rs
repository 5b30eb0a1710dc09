pub mod ledger;
pub mod models;
pub mod services;
pub mod views;

#[cfg(test)]
mod tests;
