use itertools::Itertools;

use super::parser::Category;

/// Everything the input lists for one provider.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProviderRecord {
    pub ipv4: Vec<String>,
    pub ipv6: Vec<String>,
    pub doh: Vec<String>,
    pub dot: Vec<String>,
    pub hostname: Vec<String>,
    pub fallback: Vec<String>,
    pub country: Option<String>,
}

/// Order-preserving dedup: keeps the first occurrence of each value.
pub fn unique<'a, I>(values: I) -> Vec<String>
where
    I: IntoIterator<Item = &'a String>,
{
    values.into_iter().unique().cloned().collect()
}

impl ProviderRecord {
    pub fn push(&mut self, category: Category, value: String) {
        match category {
            Category::Ipv4 => self.ipv4.push(value),
            Category::Ipv6 => self.ipv6.push(value),
            Category::Doh => self.doh.push(value),
            Category::Dot => self.dot.push(value),
            Category::Hostname => self.hostname.push(value),
            Category::Fallback => self.fallback.push(value),
            Category::Country => self.country = Some(value),
        }
    }

    pub fn dedup(&mut self) {
        for list in [
            &mut self.ipv4,
            &mut self.ipv6,
            &mut self.doh,
            &mut self.dot,
            &mut self.hostname,
            &mut self.fallback,
        ] {
            *list = unique(list.iter());
        }
    }

    /// True when no list category holds a value. `country` alone does not count.
    pub fn is_empty(&self) -> bool {
        self.ipv4.is_empty()
            && self.ipv6.is_empty()
            && self.doh.is_empty()
            && self.dot.is_empty()
            && self.hostname.is_empty()
            && self.fallback.is_empty()
    }

    /// `ipv4 ++ ipv6 ++ doh ++ dot ++ hostname`, deduplicated.
    pub fn resolvers(&self) -> Vec<String> {
        unique(
            self.ipv4
                .iter()
                .chain(&self.ipv6)
                .chain(&self.doh)
                .chain(&self.dot)
                .chain(&self.hostname),
        )
    }

    /// Plain-address resolvers only: `ipv4 ++ ipv6`, deduplicated.
    pub fn bootstrap(&self) -> Vec<String> {
        unique(self.ipv4.iter().chain(&self.ipv6))
    }

    pub fn effective_fallback(&self, default_fallback: &[String]) -> Vec<String> {
        if self.fallback.is_empty() {
            unique(default_fallback)
        } else {
            unique(&self.fallback)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    #[test]
    fn it_dedups_preserving_first_occurrence() {
        let mut record = ProviderRecord::default();
        for v in ["1.1.1.1", "1.0.0.1", "1.1.1.1", "1.0.0.1", "8.8.8.8"] {
            record.push(Category::Ipv4, v.to_string());
        }
        record.dedup();
        assert_eq!(record.ipv4, strings(&["1.1.1.1", "1.0.0.1", "8.8.8.8"]));
    }

    #[test]
    fn it_keeps_last_country() {
        let mut record = ProviderRecord::default();
        record.push(Category::Country, "US".to_string());
        record.push(Category::Country, "CA".to_string());
        assert_eq!(record.country.as_deref(), Some("CA"));
        assert!(record.is_empty());
    }

    #[test]
    fn it_concatenates_resolvers_in_category_order() {
        let mut record = ProviderRecord::default();
        record.push(Category::Hostname, "dns.example".to_string());
        record.push(Category::Dot, "tls://dns.example".to_string());
        record.push(Category::Doh, "https://dns.example/dns-query".to_string());
        record.push(Category::Ipv6, "2606:4700:4700::1111".to_string());
        record.push(Category::Ipv4, "1.1.1.1".to_string());
        record.push(Category::Hostname, "1.1.1.1".to_string());

        assert_eq!(
            record.resolvers(),
            strings(&[
                "1.1.1.1",
                "2606:4700:4700::1111",
                "https://dns.example/dns-query",
                "tls://dns.example",
                "dns.example",
            ])
        );
        assert_eq!(record.bootstrap(), strings(&["1.1.1.1", "2606:4700:4700::1111"]));
    }

    #[test]
    fn it_falls_back_to_default_list() {
        let default = strings(&["8.8.8.8", "1.1.1.1", "8.8.8.8"]);
        let mut record = ProviderRecord::default();
        assert_eq!(record.effective_fallback(&default), strings(&["8.8.8.8", "1.1.1.1"]));

        record.push(Category::Fallback, "9.9.9.9".to_string());
        record.push(Category::Fallback, "9.9.9.9".to_string());
        assert_eq!(record.effective_fallback(&default), strings(&["9.9.9.9"]));
    }
}
