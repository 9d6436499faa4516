//! Form relay adapters

mod web3forms;

pub use web3forms::{ACCESS_KEY_FIELD, Web3FormsRelay};
