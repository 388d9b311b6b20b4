use serde_yaml::{Mapping, Value};
use thiserror::Error;

use crate::registry::ProviderRecord;

use super::{Variant, DNS_SECTION};

const RESOLVER_KEYS: [&str; 3] = ["nameserver", "direct-nameserver", "proxy-server-nameserver"];
const DEFAULT_NAMESERVER: &str = "default-nameserver";
const FALLBACK: &str = "fallback";

#[derive(Error, Debug)]
pub enum MergeError {
    #[error("template has no `dns` mapping")]
    MissingDnsSection,

    #[error("YamlError: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

fn overwrite(dns: &mut Mapping, key: &str, values: Vec<String>) {
    if values.is_empty() {
        tracing::debug!("no entries for `{key}`, keeping template value");
        return;
    }

    match dns.get_mut(key) {
        Some(slot) => *slot = Value::Sequence(values.into_iter().map(Value::String).collect()),
        None => tracing::debug!("template has no `{key}`, leaving it absent"),
    }
}

/// Applies `record` to a copy of `document`. Only the five resolver keys of
/// the DNS section are ever rewritten.
pub(super) fn merge(
    document: &Value,
    record: &ProviderRecord,
    variant: Variant,
    default_fallback: &[String],
) -> Result<Value, MergeError> {
    let mut document = document.clone();
    let dns = document
        .get_mut(DNS_SECTION)
        .and_then(Value::as_mapping_mut)
        .ok_or(MergeError::MissingDnsSection)?;

    let resolvers = record.resolvers();
    for key in RESOLVER_KEYS {
        overwrite(dns, key, resolvers.clone());
    }

    if variant == Variant::Strict {
        overwrite(dns, DEFAULT_NAMESERVER, record.bootstrap());
    }

    overwrite(dns, FALLBACK, record.effective_fallback(default_fallback));

    Ok(document)
}
