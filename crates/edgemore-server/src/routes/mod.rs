pub mod estimates;
pub mod health;
