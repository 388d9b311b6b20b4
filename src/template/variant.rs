use std::fmt::Display;

/// Which flavour of config file to produce for a provider.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Variant {
    /// Rewrites the general-purpose resolver keys and `fallback`.
    Normal,
    /// Like `Normal`, and also pins `default-nameserver` to the provider's
    /// plain IPv4/IPv6 addresses.
    Strict,
}

impl Variant {
    pub const ALL: [Variant; 2] = [Variant::Normal, Variant::Strict];

    pub fn label(&self) -> &'static str {
        match self {
            Variant::Normal => "Normal",
            Variant::Strict => "Strict",
        }
    }
}

impl Display for Variant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}
