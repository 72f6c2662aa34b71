//! Identity-similarity checks between a password and account identifiers.
//!
//! A password overlaps an identity string when it contains, as a substring:
//!
//! - the whole identity,
//! - any contiguous fragment of the identity at least `min_fragment`
//!   characters long, or
//! - the identity reversed.
//!
//! Both arguments must already be lowercased by the caller.

/// Returns `true` if `password` overlaps `identity`.
///
/// An empty identity never overlaps. Every fragment of length `n >= min_fragment`
/// starts with a fragment of exactly `min_fragment` characters, so scanning the
/// `min_fragment`-wide windows decides the whole `[min_fragment, len]` range.
pub fn overlaps(password: &str, identity: &str, min_fragment: usize) -> bool {
    if identity.is_empty() {
        return false;
    }

    if password.contains(identity) {
        return true;
    }

    let chars: Vec<char> = identity.chars().collect();

    if min_fragment > 0 && chars.len() >= min_fragment {
        let mut fragment = String::with_capacity(min_fragment * 4);
        for window in chars.windows(min_fragment) {
            fragment.clear();
            fragment.extend(window);
            if password.contains(fragment.as_str()) {
                return true;
            }
        }
    }

    let reversed: String = chars.iter().rev().collect();
    password.contains(reversed.as_str())
}
