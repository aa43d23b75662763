//! JSON-file rule storage.

use std::fs;
use std::path::PathBuf;

use patlint::error::PatlintError;
use patlint::{CustomRule, Result, RuleStore};

/// Stores the rule list as a JSON array in a single file, the same shape
/// rule-export files carry. A missing file reads as an empty list.
pub struct JsonRuleStore {
    path: PathBuf,
}

impl JsonRuleStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl RuleStore for JsonRuleStore {
    fn load(&self) -> Result<Vec<CustomRule>> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }

        let contents = fs::read_to_string(&self.path).map_err(|source| PatlintError::Io {
            path: self.path.clone(),
            source,
        })?;
        let rules = serde_json::from_str(&contents)?;
        Ok(rules)
    }

    fn save(&self, rules: &[CustomRule]) -> Result<()> {
        let contents = serde_json::to_string_pretty(rules)?;
        fs::write(&self.path, contents).map_err(|source| PatlintError::Io {
            path: self.path.clone(),
            source,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use patlint::Severity;

    #[test]
    fn test_missing_file_loads_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonRuleStore::new(dir.path().join("rules.json"));
        assert_eq!(store.load().unwrap(), vec![]);
    }

    #[test]
    fn test_save_and_load_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonRuleStore::new(dir.path().join("rules.json"));

        let rules = vec![
            CustomRule::new("r1", "模糊用语", "大约", "不应使用模糊用语。")
                .with_severity(Severity::Warning)
                .with_category("措辞"),
        ];
        store.save(&rules).unwrap();

        let loaded = store.load().unwrap();
        assert_eq!(loaded.len(), 1);
        assert_eq!(loaded[0].id, "r1");
        assert_eq!(loaded[0].category, "措辞");
    }

    #[test]
    fn test_legacy_rules_without_category_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("rules.json");
        fs::write(
            &path,
            r#"[{
                "id": "old-1",
                "name": "旧规则",
                "description": "",
                "pattern": "应当",
                "isRegex": false,
                "errorMessage": "措辞问题。",
                "suggestion": "",
                "severity": "info",
                "enabled": false,
                "createdAt": 1700000000000
            }]"#,
        )
        .unwrap();

        let loaded = JsonRuleStore::new(path).load().unwrap();
        assert_eq!(loaded[0].category, "");
        assert!(!loaded[0].enabled);
    }

    #[test]
    fn test_malformed_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("rules.json");
        fs::write(&path, "not json").unwrap();
        assert!(JsonRuleStore::new(path).load().is_err());
    }
}
