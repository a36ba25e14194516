pub mod export;
pub mod spinner;
