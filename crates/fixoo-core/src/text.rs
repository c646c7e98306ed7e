// crates/fixoo-core/src/text.rs

/// Convert a string into a folded key suitable for matching and comparison.
///
/// This performs:
/// 1\) Transliterate Unicode → ASCII (e.g. `Fès` -> `Fes`)
/// 2\) Normalize to lowercase
///
/// The implementation uses the `deunicode` crate to perform a best-effort
/// transliteration from Unicode to ASCII. The shipped catalog carries
/// French store names, city names and service tags ("Meknès",
/// "Réparation téléphone"), so all user-facing text matching goes through
/// this folding.
///
/// # Examples
///
/// ```rust
/// use fixoo_core::text::fold_key;
///
/// assert_eq!(fold_key("Fès"), "fes");
/// assert_eq!(fold_key("Réparation écran"), "reparation ecran");
/// ```
pub fn fold_key(s: &str) -> String {
    deunicode::deunicode(s).to_lowercase()
}

/// Compares two strings for equality after Unicode folding.
///
/// Case-insensitive and accent-insensitive: both sides are transliterated
/// to ASCII and lowercased before comparison. Used for exact-city matching
/// and service-tag intersection.
///
/// # Examples
///
/// ```rust
/// use fixoo_core::text::equals_folded;
///
/// assert!(equals_folded("Meknès", "meknes"));
/// assert!(equals_folded("FÈS", "fes"));
/// assert!(!equals_folded("Rabat", "Salé"));
/// ```
pub fn equals_folded(a: &str, b: &str) -> bool {
    fold_key(a) == fold_key(b)
}

/// Substring match on folded forms.
///
/// Returns `true` when the folded `haystack` contains the folded `needle`.
/// An empty needle always matches.
pub fn contains_folded(haystack: &str, needle: &str) -> bool {
    fold_key(haystack).contains(&fold_key(needle))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn folds_accents_and_case() {
        assert_eq!(fold_key("Fès"), "fes");
        assert_eq!(fold_key("MEKNÈS"), "meknes");
        assert_eq!(fold_key("Récupération données"), "recuperation donnees");
    }

    #[test]
    fn folded_equality() {
        assert!(equals_folded("Fès", "fes"));
        assert!(equals_folded("casablanca", "Casablanca"));
        assert!(!equals_folded("Rabat", "Tanger"));
    }

    #[test]
    fn folded_containment() {
        assert!(contains_folded("QuickRepair Casablanca", "casa"));
        assert!(contains_folded("Réparation téléphone", "telephone"));
        assert!(contains_folded("anything", ""));
        assert!(!contains_folded("Oujda", "agadir"));
    }
}
