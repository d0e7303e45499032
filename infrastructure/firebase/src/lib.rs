pub mod client;
pub mod identity;
pub mod settings;
pub mod token_verifier;
