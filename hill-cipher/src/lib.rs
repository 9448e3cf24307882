pub mod cipher;
pub mod errors;
pub mod preset;
pub mod ring;
pub mod text;

pub use cipher::{HillParams, KeyMatrix, decrypt, encrypt};
pub use errors::HillCipherError;
