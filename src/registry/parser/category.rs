use std::{fmt::Display, str::FromStr};

use thiserror::Error;

/// The kind of entry a record line carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Ipv4,
    Ipv6,
    Doh,
    Dot,
    Hostname,
    Fallback,
    Country,
}

#[derive(Error, Debug, PartialEq, Eq)]
#[error("UnknownCategory: {0}")]
pub struct ParseCategoryError(pub String);

impl Category {
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Ipv4 => "ipv4",
            Category::Ipv6 => "ipv6",
            Category::Doh => "doh",
            Category::Dot => "dot",
            Category::Hostname => "hostname",
            Category::Fallback => "fallback",
            Category::Country => "country",
        }
    }
}

impl FromStr for Category {
    type Err = ParseCategoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "ipv4" => Ok(Category::Ipv4),
            "ipv6" => Ok(Category::Ipv6),
            "doh" => Ok(Category::Doh),
            "dot" => Ok(Category::Dot),
            "hostname" => Ok(Category::Hostname),
            "fallback" => Ok(Category::Fallback),
            "country" => Ok(Category::Country),
            _ => Err(ParseCategoryError(s.trim().to_string())),
        }
    }
}

impl Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
