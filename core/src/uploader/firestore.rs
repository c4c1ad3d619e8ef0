// giftlist_core/src/uploader/firestore.rs

use anyhow::{anyhow, bail, Context};
use async_trait::async_trait;
use reqwest::Url;
use serde_json::{json, Map, Value as JsonValue};
use tracing::debug;

use crate::uploader::DocumentStore;

pub const DEFAULT_FIRESTORE_BASE_URL: &str = "https://firestore.googleapis.com/v1";

/// How requests are authorized. The admin variant carries an OAuth access token
/// for a service account; the web variant uses the project's browser API key and
/// relies on Firestore security rules.
#[derive(Clone)]
pub enum FirestoreAuth {
  BearerToken(String),
  ApiKey(String),
}

impl std::fmt::Debug for FirestoreAuth {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    match self {
      FirestoreAuth::BearerToken(_) => f.write_str("BearerToken([REDACTED])"),
      FirestoreAuth::ApiKey(_) => f.write_str("ApiKey([REDACTED])"),
    }
  }
}

/// Minimal Firestore REST client: whole-document writes to the default database.
#[derive(Debug, Clone)]
pub struct FirestoreClient {
  http: reqwest::Client,
  base_url: Url,
  project_id: String,
  auth: FirestoreAuth,
}

impl FirestoreClient {
  pub fn new(base_url: &str, project_id: impl Into<String>, auth: FirestoreAuth) -> anyhow::Result<Self> {
    let base_url = Url::parse(base_url).with_context(|| format!("invalid Firestore base URL '{base_url}'"))?;
    if base_url.cannot_be_a_base() {
      bail!("Firestore base URL '{}' cannot carry a path", base_url);
    }
    Ok(Self {
      http: reqwest::Client::new(),
      base_url,
      project_id: project_id.into(),
      auth,
    })
  }

  /// `{base}/projects/{project}/databases/(default)/documents/{collection}/{key}`, with
  /// `key` percent-encoded as a single path segment.
  pub fn document_url(&self, collection: &str, key: &str) -> anyhow::Result<Url> {
    let mut url = self.base_url.clone();
    url
      .path_segments_mut()
      .map_err(|()| anyhow!("Firestore base URL cannot carry a path"))?
      .pop_if_empty()
      .extend([
        "projects",
        self.project_id.as_str(),
        "databases",
        "(default)",
        "documents",
        collection,
        key,
      ]);
    Ok(url)
  }
}

#[async_trait]
impl DocumentStore for FirestoreClient {
  async fn set_document(&self, collection: &str, key: &str, document: &JsonValue) -> anyhow::Result<()> {
    let url = self.document_url(collection, key)?;
    let body = json!({ "fields": to_firestore_fields(document) });

    // PATCH without an update mask replaces every field of the document.
    let request = self.http.patch(url.clone()).json(&body);
    let request = match &self.auth {
      FirestoreAuth::BearerToken(token) => request.bearer_auth(token),
      FirestoreAuth::ApiKey(key) => request.query(&[("key", key)]),
    };

    let response = request
      .send()
      .await
      .with_context(|| format!("request to {url} failed"))?;
    let status = response.status();
    if !status.is_success() {
      let detail = response.text().await.unwrap_or_default();
      bail!("Firestore returned {} for '{}': {}", status, key, detail);
    }
    debug!(%url, "document written");
    Ok(())
  }
}

/// Converts a JSON object into Firestore's typed `fields` map. Non-objects yield an empty map.
pub fn to_firestore_fields(document: &JsonValue) -> JsonValue {
  let fields: Map<String, JsonValue> = document
    .as_object()
    .map(|object| {
      object
        .iter()
        .map(|(name, value)| (name.clone(), to_firestore_value(value)))
        .collect()
    })
    .unwrap_or_default();
  JsonValue::Object(fields)
}

fn to_firestore_value(value: &JsonValue) -> JsonValue {
  match value {
    JsonValue::Null => json!({ "nullValue": null }),
    JsonValue::Bool(b) => json!({ "booleanValue": b }),
    JsonValue::Number(n) => match n.as_i64() {
      // Firestore's int64 values travel as decimal strings.
      Some(i) => json!({ "integerValue": i.to_string() }),
      None => json!({ "doubleValue": n.as_f64().unwrap_or_default() }),
    },
    JsonValue::String(s) => json!({ "stringValue": s }),
    JsonValue::Array(items) => {
      json!({ "arrayValue": { "values": items.iter().map(to_firestore_value).collect::<Vec<_>>() } })
    }
    JsonValue::Object(_) => json!({ "mapValue": { "fields": to_firestore_fields(value) } }),
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn document_keys_are_encoded_as_one_segment() {
    let client = FirestoreClient::new(
      "https://firestore.googleapis.com/v1/",
      "lista-nascita",
      FirestoreAuth::ApiKey("k".to_string()),
    )
    .unwrap();

    let url = client.document_url("products", "Seggiolino auto Chicco Fold & Go").unwrap();
    assert_eq!(
      url.as_str(),
      "https://firestore.googleapis.com/v1/projects/lista-nascita/databases/(default)/documents/products/Seggiolino%20auto%20Chicco%20Fold%20&%20Go"
    );
  }

  #[test]
  fn fields_are_typed() {
    let fields = to_firestore_fields(&json!({
      "product_name": "Dentinale",
      "price": 13.5,
      "stock": 1,
      "sku": null
    }));
    assert_eq!(
      fields,
      json!({
        "product_name": { "stringValue": "Dentinale" },
        "price": { "doubleValue": 13.5 },
        "stock": { "integerValue": "1" },
        "sku": { "nullValue": null }
      })
    );
  }

  #[test]
  fn credentials_are_not_printed() {
    let auth = FirestoreAuth::BearerToken("secret-token".to_string());
    assert!(!format!("{auth:?}").contains("secret-token"));
  }
}
