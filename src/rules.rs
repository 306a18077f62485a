// src/rules.rs

use serde::{Deserialize, Serialize};

/// A follow-up link a rule may carry; revealed after the reply finishes typing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Link {
    pub text: String,
    pub url: String,
}

/// One keyword-set-to-response mapping entry.
///
/// Keywords match case-insensitively as substrings of the user input.
/// Rule order is the tie-break: the first rule with any hit wins, no scoring.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResponseRule {
    pub id: u32,
    pub keywords: Vec<String>,
    pub response: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link: Option<Link>,
}

impl ResponseRule {
    /// Checks the rule's keywords in declaration order against an
    /// already-lowercased input.
    pub fn matches(&self, normalized_input: &str) -> bool {
        self.keywords
            .iter()
            .any(|keyword| normalized_input.contains(&keyword.to_lowercase()))
    }
}

/// The built-in rule set used until a load succeeds, and kept when it doesn't.
pub fn default_rules() -> Vec<ResponseRule> {
    vec![
        ResponseRule {
            id: 1,
            keywords: vec![
                "hello".to_string(),
                "hi".to_string(),
                "hey".to_string(),
                "howdy".to_string(),
                "namaste".to_string(),
            ],
            response: "Hello! How can I help you today?".to_string(),
            link: None,
        },
        ResponseRule {
            id: 2,
            keywords: vec![
                "bye".to_string(),
                "goodbye".to_string(),
                "see you".to_string(),
                "talk later".to_string(),
            ],
            response: "Goodbye! Have a great day!".to_string(),
            link: None,
        },
        ResponseRule {
            id: 3,
            keywords: vec!["thank".to_string(), "thanks".to_string()],
            response: "You're welcome! Is there anything else I can help you with?".to_string(),
            link: None,
        },
        ResponseRule {
            id: 6,
            keywords: vec![
                "rate content".to_string(),
                "pricing information".to_string(),
                "rate data".to_string(),
            ],
            response: "Rate content is the information about prices or costs that a company \
                       collects and stores electronically. This can include things like hourly \
                       rates, fees for services, prices per unit, or discounts from suppliers. \
                       Companies use this rate content in their electronic systems to help manage \
                       purchases, check that invoices match agreed prices, and make sure they pay \
                       the right amount. It helps automate and simplify buying and billing \
                       processes by having all the pricing details organized and easy to access."
                .to_string(),
            link: Some(Link {
                text: "Click here for more details".to_string(),
                url: "https://example.com/rate-content-details".to_string(),
            }),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keyword_match_is_case_insensitive_both_sides() {
        let rule = ResponseRule {
            id: 1,
            keywords: vec!["HELLO".to_string()],
            response: "hi there".to_string(),
            link: None,
        };
        assert!(rule.matches("well hello friend"));
        assert!(!rule.matches("goodbye"));
    }

    #[test]
    fn test_keyword_matches_as_substring() {
        let rule = ResponseRule {
            id: 3,
            keywords: vec!["thank".to_string()],
            response: "welcome".to_string(),
            link: None,
        };
        assert!(rule.matches("thanks a lot"));
    }

    #[test]
    fn test_empty_keyword_list_never_matches() {
        let rule = ResponseRule {
            id: 9,
            keywords: Vec::new(),
            response: "unreachable".to_string(),
            link: None,
        };
        assert!(!rule.matches("anything at all"));
    }

    #[test]
    fn test_rule_document_round_trips_link() {
        let raw = r#"{
            "id": 6,
            "keywords": ["rate content"],
            "response": "details",
            "link": { "text": "more", "url": "https://example.com" }
        }"#;
        let rule: ResponseRule = serde_json::from_str(raw).unwrap();
        assert_eq!(rule.link.as_ref().unwrap().text, "more");

        let raw_no_link = r#"{ "id": 1, "keywords": ["hi"], "response": "hello" }"#;
        let rule: ResponseRule = serde_json::from_str(raw_no_link).unwrap();
        assert!(rule.link.is_none());
    }
}
