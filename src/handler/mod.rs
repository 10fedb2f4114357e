pub mod health;
pub mod loglevel;
