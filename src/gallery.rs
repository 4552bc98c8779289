//! Built-in example structures offered as conversation starters.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ExampleTemplate {
    pub title: &'static str,
    pub description: &'static str,
    pub json: &'static str,
}

/// How many examples the empty conversation offers as quick starts.
pub const QUICK_START_COUNT: usize = 3;

pub const EXAMPLES: [ExampleTemplate; 3] = [
    ExampleTemplate {
        title: "User Profile",
        description: "Basic user information structure",
        json: r#"{
  "user": {
    "id": 1,
    "name": "John Doe",
    "email": "john@example.com",
    "roles": ["admin", "editor"],
    "settings": {
      "notifications": true,
      "theme": "dark"
    }
  }
}"#,
    },
    ExampleTemplate {
        title: "API Response",
        description: "Standard API response format",
        json: r#"{
  "status": "success",
  "code": 200,
  "data": {
    "products": [
      {
        "id": 1,
        "name": "Product A",
        "price": 29.99
      },
      {
        "id": 2,
        "name": "Product B",
        "price": 49.99
      }
    ]
  },
  "meta": {
    "total": 2,
    "page": 1,
    "limit": 10
  }
}"#,
    },
    ExampleTemplate {
        title: "Configuration",
        description: "Application configuration",
        json: r#"{
  "app": {
    "name": "My App",
    "version": "1.0.0",
    "environment": "production",
    "features": {
      "darkMode": true,
      "analytics": true,
      "subscription": false
    },
    "api": {
      "baseUrl": "https://api.example.com",
      "timeout": 5000,
      "retryAttempts": 3
    }
  }
}"#,
    },
];

pub const TIPS: [&str; 5] = [
    "Be specific with field names and data types",
    "Mention nesting structure if needed",
    "Upload example data for reference",
    "Specify array items and their format",
    "Ask for specific validation requirements",
];

pub fn quick_starts() -> &'static [ExampleTemplate] {
    &EXAMPLES[..QUICK_START_COUNT.min(EXAMPLES.len())]
}

/// Composer text for an example picked from the gallery.
pub fn seed_prompt(example: &ExampleTemplate) -> String {
    format!("Generate JSON based on this example: {}", example.json)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_example_is_valid_json() {
        for example in EXAMPLES.iter() {
            assert!(
                serde_json::from_str::<serde_json::Value>(example.json).is_ok(),
                "{} does not parse",
                example.title
            );
        }
    }

    #[test]
    fn seed_prompt_embeds_example() {
        let prompt = seed_prompt(&EXAMPLES[0]);
        assert!(prompt.starts_with("Generate JSON based on this example: {"));
        assert!(prompt.ends_with(EXAMPLES[0].json));
    }
}
