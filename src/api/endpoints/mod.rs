pub mod health;
pub mod meetings;
