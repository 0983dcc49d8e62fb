pub mod account;
pub mod dashboard;
pub mod generate;
pub mod pricing;
