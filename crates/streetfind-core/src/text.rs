// crates/streetfind-core/src/text.rs

/// Lowercases a string for case-insensitive comparison.
///
/// Uses full Unicode lowercasing so that `"RUE DE L'ÉGLISE"` and
/// `"rue de l'église"` compare equal. Accents are kept: `"Eglise"` and
/// `"Église"` are different streets.
pub fn fold_case(s: &str) -> String {
    s.to_lowercase()
}

/// Case-insensitive exact equality. Not a substring or fuzzy match.
///
/// # Examples
/// ```rust
/// use streetfind_core::text::equals_folded;
///
/// assert!(equals_folded("Rue Victor Hugo", "rue victor hugo"));
/// assert!(!equals_folded("rue Victor Hugot", "rue Victor Hugo"));
/// ```
pub fn equals_folded(a: &str, b: &str) -> bool {
    // Fast path avoids allocating for the common ASCII case.
    if a.is_ascii() && b.is_ascii() {
        return a.eq_ignore_ascii_case(b);
    }
    fold_case(a) == fold_case(b)
}
