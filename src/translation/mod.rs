mod client;

pub use client::{Translate, TranslationClient};
