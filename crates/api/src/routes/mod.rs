pub mod census;
pub mod health;
