use anyhow::{Context, Result};
use reqwest::Client;
use serde_json::Value;

/// A single-string translation call against the external provider.
///
/// Implementations return `Err` on failure; deciding how a failure is
/// represented (and whether it is cached) is left to the caller.
#[allow(async_fn_in_trait)]
pub trait Translate {
    async fn translate(&self, text: &str, source: &str, target: &str) -> Result<String>;
}

/// HTTP client for a Google-Translate-compatible endpoint.
pub struct TranslationClient {
    client: Client,
    endpoint: String,
}

impl TranslationClient {
    pub fn new(endpoint: String) -> Self {
        Self {
            client: Client::new(),
            endpoint,
        }
    }
}

impl Translate for TranslationClient {
    async fn translate(&self, text: &str, source: &str, target: &str) -> Result<String> {
        let url = format!("{}/translate_a/single", self.endpoint.trim_end_matches('/'));

        let response = self
            .client
            .get(&url)
            .query(&[
                ("client", "gtx"),
                ("dt", "t"),
                ("sl", source),
                ("tl", target),
                ("q", text),
            ])
            .send()
            .await
            .with_context(|| format!("Failed to connect to translation endpoint: {url}"))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            anyhow::bail!("Translation request failed with status {status}: {body}");
        }

        let payload: Value = response
            .json()
            .await
            .context("Failed to parse translation response as JSON")?;

        parse_translation(&payload)
    }
}

/// Extracts the translated text from the provider's nested-array payload.
///
/// The first element of the response is a list of segments; each segment's
/// first element is a translated chunk.
fn parse_translation(payload: &Value) -> Result<String> {
    let segments = payload
        .get(0)
        .and_then(Value::as_array)
        .context("Unexpected translation response shape")?;

    let translated: String = segments
        .iter()
        .filter_map(|segment| segment.get(0).and_then(Value::as_str))
        .collect();

    if translated.is_empty() {
        anyhow::bail!("Translation response contained no text");
    }

    Ok(translated)
}
