use lazy_static::lazy_static;
use regex::Regex;

fn sanitize(name: &str) -> Option<String> {
    lazy_static! {
        static ref UNSAFE: Regex = Regex::new(r"[^\p{L}\p{N}._\-\s]").unwrap();
        static ref SPACES: Regex = Regex::new(r"\s+").unwrap();
    }

    let kept = UNSAFE.replace_all(name, "");
    let stem = SPACES.replace_all(kept.trim(), "_").to_string();

    if stem.chars().all(|c| c == '.') {
        return None;
    }

    Some(stem)
}

/// Maps a provider display name onto letters, digits and `._-`, collapsing inner
/// whitespace runs to one `_`. Returns `None` when nothing usable is left.
pub fn sanitize_stem(name: &str) -> Option<String> {
    sanitize(name)
}
