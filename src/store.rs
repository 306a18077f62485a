// src/store.rs

use crate::errors::{ConciergeError, ConciergeResult};
use crate::rules::{default_rules, ResponseRule};
use std::fs;

/// Holds the ordered rule list the conversation matches against.
///
/// Starts out with the built-in defaults and is replaced wholesale at most
/// once, by the startup load. Never mutated afterward.
pub struct ResponseStore {
    rules: Vec<ResponseRule>,
    replaced: bool,
}

impl ResponseStore {
    pub fn with_defaults() -> Self {
        Self {
            rules: default_rules(),
            replaced: false,
        }
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Swaps in a freshly loaded rule list. Only the first call takes effect.
    pub fn replace(&mut self, rules: Vec<ResponseRule>) {
        if self.replaced {
            debug_print!("ignoring repeated rule replacement");
            return;
        }
        self.rules = rules;
        self.replaced = true;
    }

    /// Returns the first rule (in declaration order) with any keyword that is
    /// a case-insensitive substring of the input.
    pub fn find_match(&self, input: &str) -> Option<&ResponseRule> {
        let normalized = input.to_lowercase();
        self.rules.iter().find(|rule| rule.matches(&normalized))
    }
}

/// Fetches and parses a rule document in a single attempt, no retries.
///
/// `http(s)://` sources go over the wire; anything else is read as a local
/// file. The caller decides what a failure means (the startup load keeps the
/// defaults and logs a warning).
pub async fn fetch_rules(source: &str) -> ConciergeResult<Vec<ResponseRule>> {
    let raw = if source.starts_with("http://") || source.starts_with("https://") {
        let response = reqwest::get(source).await?;
        let status = response.status();
        if !status.is_success() {
            return Err(ConciergeError::rules_error(format!(
                "{} returned {}",
                source, status
            )));
        }
        response.text().await?
    } else {
        fs::read_to_string(source)?
    };

    let rules: Vec<ResponseRule> = serde_json::from_str(&raw)?;

    // A rule without keywords can never match; drop it rather than carry it.
    let (kept, dropped): (Vec<_>, Vec<_>) =
        rules.into_iter().partition(|rule| !rule.keywords.is_empty());
    for rule in &dropped {
        log::warn!("dropping rule {} from {}: no keywords", rule.id, source);
    }

    Ok(kept)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::Link;
    use std::io::Write;
    use tempfile::NamedTempFile;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn rule(id: u32, keywords: &[&str], response: &str) -> ResponseRule {
        ResponseRule {
            id,
            keywords: keywords.iter().map(|k| k.to_string()).collect(),
            response: response.to_string(),
            link: None,
        }
    }

    #[test]
    fn test_defaults_match_expected_rules() {
        let store = ResponseStore::with_defaults();
        assert_eq!(store.find_match("Hello there").unwrap().id, 1);
        assert_eq!(store.find_match("thanks a lot").unwrap().id, 3);
        assert!(store.find_match("xyz123").is_none());
    }

    #[test]
    fn test_empty_input_matches_nothing() {
        let store = ResponseStore::with_defaults();
        assert!(store.find_match("").is_none());
        assert!(store.find_match("   ").is_none());
    }

    #[test]
    fn test_first_declared_rule_wins() {
        let mut store = ResponseStore::with_defaults();
        store.replace(vec![
            rule(10, &["alpha"], "first"),
            rule(20, &["alpha", "beta"], "second"),
        ]);
        // Both rules carry "alpha"; declaration order is the tie-break.
        assert_eq!(store.find_match("alpha beta").unwrap().id, 10);
        // A keyword only the later rule carries still reaches it.
        assert_eq!(store.find_match("beta").unwrap().id, 20);
    }

    #[test]
    fn test_replace_applies_only_once() {
        let mut store = ResponseStore::with_defaults();
        store.replace(vec![rule(10, &["alpha"], "first")]);
        store.replace(vec![rule(20, &["beta"], "second")]);
        assert_eq!(store.len(), 1);
        assert_eq!(store.find_match("alpha").unwrap().id, 10);
    }

    #[test]
    fn test_defaults_survive_without_replace() {
        let store = ResponseStore::with_defaults();
        assert_eq!(store.len(), default_rules().len());
    }

    #[tokio::test]
    async fn test_fetch_rules_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        write!(
            file,
            r#"[{{ "id": 1, "keywords": ["ping"], "response": "pong" }}]"#
        )
        .unwrap();

        let rules = fetch_rules(file.path().to_str().unwrap()).await.unwrap();
        assert_eq!(rules.len(), 1);
        assert_eq!(rules[0].response, "pong");
    }

    #[tokio::test]
    async fn test_fetch_rules_missing_file_is_an_error() {
        assert!(fetch_rules("definitely/not/here.json").await.is_err());
    }

    #[tokio::test]
    async fn test_fetch_rules_malformed_document_is_an_error() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "{{ not json ]").unwrap();
        assert!(fetch_rules(file.path().to_str().unwrap()).await.is_err());
    }

    #[tokio::test]
    async fn test_fetch_rules_drops_keywordless_rules() {
        let mut file = NamedTempFile::new().unwrap();
        write!(
            file,
            r#"[
                {{ "id": 1, "keywords": [], "response": "orphan" }},
                {{ "id": 2, "keywords": ["ok"], "response": "kept" }}
            ]"#
        )
        .unwrap();

        let rules = fetch_rules(file.path().to_str().unwrap()).await.unwrap();
        assert_eq!(rules.len(), 1);
        assert_eq!(rules[0].id, 2);
    }

    #[tokio::test]
    async fn test_fetch_rules_over_http() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/responses.json"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
                {
                    "id": 6,
                    "keywords": ["rate content"],
                    "response": "details",
                    "link": { "text": "more", "url": "https://example.com" }
                }
            ])))
            .mount(&server)
            .await;

        let rules = fetch_rules(&format!("{}/responses.json", server.uri()))
            .await
            .unwrap();
        assert_eq!(rules.len(), 1);
        assert_eq!(
            rules[0].link,
            Some(Link {
                text: "more".to_string(),
                url: "https://example.com".to_string(),
            })
        );
    }

    #[tokio::test]
    async fn test_fetch_rules_http_error_status() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&server)
            .await;

        assert!(fetch_rules(&server.uri()).await.is_err());
    }
}
