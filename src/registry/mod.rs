mod parser;
mod provider;

use std::{collections::HashMap, path::Path};

pub use self::provider::ProviderRecord;

use self::parser::RecordLine;

use crate::fetch::{FetchError, FetchFile};

/// Provider name to record, iterated in order of first appearance in the input.
#[derive(Debug, Clone, Default)]
pub struct ProviderRegistry {
    order: Vec<String>,
    records: HashMap<String, ProviderRecord>,
}

impl ProviderRegistry {
    pub fn from_text(content: &str) -> Self {
        let mut registry = Self::default();

        for (index, line) in content.lines().enumerate() {
            match RecordLine::parse(line) {
                Ok(Some(record)) => registry.insert(record),
                Ok(None) => {}
                Err(err) => {
                    tracing::warn!("skipping line {}: {err}: {}", index + 1, line.trim());
                }
            }
        }

        registry.records.values_mut().for_each(ProviderRecord::dedup);
        registry
    }

    pub fn load(path: &Path) -> Result<Self, FetchError> {
        let content = FetchFile::from(path).fetch()?;
        let registry = Self::from_text(&content);
        tracing::info!(
            "loaded {} providers from {}",
            registry.len(),
            path.display()
        );

        Ok(registry)
    }

    fn insert(&mut self, line: RecordLine) {
        if !self.records.contains_key(&line.provider) {
            self.order.push(line.provider.clone());
        }

        self.records
            .entry(line.provider)
            .or_default()
            .push(line.category, line.value);
    }

    pub fn get(&self, provider: &str) -> Option<&ProviderRecord> {
        self.records.get(provider)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &ProviderRecord)> {
        self.order
            .iter()
            .filter_map(|name| self.records.get(name).map(|r| (name.as_str(), r)))
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const INPUT: &str = "\
# provider | type | value

ProviderA|ipv4|1.1.1.1
ProviderA|ipv6|2606:4700:4700::1111
ProviderA|country|US
ProviderB | IPV4 | 9.9.9.9
ProviderA|ipv4|1.1.1.1
ProviderB | fallback | 8.8.8.8
ProviderB | country | CH
ProviderB | country | DE
";

    #[test]
    fn it_builds_registry_in_input_order() {
        let registry = ProviderRegistry::from_text(INPUT);
        let names: Vec<&str> = registry.iter().map(|(name, _)| name).collect();
        assert_eq!(names, vec!["ProviderA", "ProviderB"]);

        let a = registry.get("ProviderA").unwrap();
        assert_eq!(a.ipv4, vec!["1.1.1.1".to_string()]);
        assert_eq!(a.ipv6, vec!["2606:4700:4700::1111".to_string()]);
        assert_eq!(a.country.as_deref(), Some("US"));

        let b = registry.get("ProviderB").unwrap();
        assert_eq!(b.ipv4, vec!["9.9.9.9".to_string()]);
        assert_eq!(b.fallback, vec!["8.8.8.8".to_string()]);
        assert_eq!(b.country.as_deref(), Some("DE"));
    }

    #[test]
    fn it_skips_malformed_lines_without_touching_registry() {
        let registry = ProviderRegistry::from_text("ProviderA|ipv4\nProviderC|doq|x\n|ipv4|1.1.1.1");
        assert!(registry.is_empty());
        assert!(registry.get("ProviderA").is_none());
        assert!(registry.get("ProviderC").is_none());
    }

    #[test]
    fn it_keeps_provider_names_case_sensitive() {
        let registry = ProviderRegistry::from_text("dns|ipv4|1.1.1.1\nDNS|ipv4|8.8.8.8");
        assert_eq!(registry.len(), 2);
    }

    #[test]
    fn it_reports_missing_input() {
        let dir = tempfile::tempdir().unwrap();
        let err = ProviderRegistry::load(&dir.path().join("dns_list.txt")).unwrap_err();
        assert!(matches!(err, FetchError::NotFound(_)));
    }
}
