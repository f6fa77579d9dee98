pub mod checks;
pub mod suite;
