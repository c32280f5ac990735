pub mod account_builder;
pub mod profile_builder;
