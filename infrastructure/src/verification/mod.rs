//! Bot verification adapters

mod turnstile;

pub use turnstile::TurnstileVerifier;
