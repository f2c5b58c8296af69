pub mod client;
pub mod envelope;
pub mod interface;

pub use client::TranslatorClient;
pub use interface::{TranslateError, TranslateRequest, TranslateResponse, Translator, DEFAULT_TARGET_LANGUAGE};
