use crate::models::SpendCategory;
use std::collections::BTreeSet;

pub type ProtectedSet = BTreeSet<SpendCategory>;

const PROFESSION_SIGNALS: &[(SpendCategory, &[&str])] = &[
    (
        SpendCategory::Entertainment,
        &["dj", "musician", "artist", "producer"],
    ),
    (SpendCategory::Dining, &["chef", "cook", "food"]),
    (
        SpendCategory::Transportation,
        &["driver", "courier", "uber", "lyft"],
    ),
];

const PROTECT_SIGNALS: &[(SpendCategory, &[&str])] = &[
    (
        SpendCategory::Entertainment,
        &["entertainment", "concert", "show", "gig", "dj", "music", "festival", "movie"],
    ),
    (
        SpendCategory::Dining,
        &["dining", "restaurant", "food", "eat out", "takeout", "delivery"],
    ),
    (
        SpendCategory::Shopping,
        &["shopping", "clothes", "clothing", "fashion", "retail", "buy stuff"],
    ),
    (
        SpendCategory::Transportation,
        &["car", "gas", "transport", "uber", "lyft", "commute"],
    ),
    (SpendCategory::Other, &["misc", "other", "general", "personal"]),
];

const CUT_SIGNALS: &[(SpendCategory, &[&str])] = &[
    (
        SpendCategory::Entertainment,
        &["cut entertainment", "less entertainment", "no shows", "reduce concerts"],
    ),
    (
        SpendCategory::Dining,
        &["cut dining", "less dining", "cook more", "no restaurants"],
    ),
    (
        SpendCategory::Shopping,
        &["cut shopping", "less shopping", "no shopping", "stop buying"],
    ),
    (
        SpendCategory::Transportation,
        &["cut gas", "drive less", "less uber", "less lyft"],
    ),
];

fn matching(table: &[(SpendCategory, &[&str])], lower: &str) -> Vec<SpendCategory> {
    table
        .iter()
        .filter(|(_, terms)| terms.iter().any(|t| lower.contains(t)))
        .map(|(category, _)| *category)
        .collect()
}

/// Categories a profession usually depends on.
pub fn protected_from_profession(profession: &str) -> ProtectedSet {
    matching(PROFESSION_SIGNALS, &profession.to_lowercase())
        .into_iter()
        .collect()
}

/// Protect signals are applied first, cut signals second, so a message that
/// does both leaves the category unprotected.
pub fn protected_from_text(text: &str, current: &ProtectedSet) -> ProtectedSet {
    let lower = text.to_lowercase();
    let mut next = current.clone();
    for category in matching(PROTECT_SIGNALS, &lower) {
        next.insert(category);
    }
    for category in matching(CUT_SIGNALS, &lower) {
        next.remove(&category);
    }
    next
}

pub fn toggle(current: &ProtectedSet, category: SpendCategory) -> ProtectedSet {
    let mut next = current.clone();
    if !next.remove(&category) {
        next.insert(category);
    }
    next
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set(categories: &[SpendCategory]) -> ProtectedSet {
        categories.iter().copied().collect()
    }

    #[test]
    fn professions_seed_protected_categories() {
        assert_eq!(
            protected_from_profession("Club DJ"),
            set(&[SpendCategory::Entertainment])
        );
        assert_eq!(
            protected_from_profession("Food truck chef"),
            set(&[SpendCategory::Dining])
        );
        assert_eq!(
            protected_from_profession("Courier"),
            set(&[SpendCategory::Transportation])
        );
        assert!(protected_from_profession("Accountant").is_empty());
    }

    #[test]
    fn protect_terms_add_categories() {
        let next = protected_from_text("I love going to concerts and eat out a lot", &set(&[]));
        assert_eq!(
            next,
            set(&[SpendCategory::Dining, SpendCategory::Entertainment])
        );
    }

    #[test]
    fn cut_terms_remove_categories() {
        let current = set(&[SpendCategory::Dining, SpendCategory::Shopping]);
        let next = protected_from_text("I'm fine to STOP BUYING gadgets", &current);
        assert_eq!(next, set(&[SpendCategory::Dining]));
    }

    #[test]
    fn cut_wins_when_both_signals_appear() {
        // "cut dining" contains "dining", a protect term, but the cut runs last.
        let next = protected_from_text("Let's cut dining", &set(&[]));
        assert!(next.is_empty());
    }

    #[test]
    fn unrelated_text_leaves_set_alone() {
        let current = set(&[SpendCategory::Other]);
        assert_eq!(protected_from_text("How can I save more?", &current), current);
    }

    #[test]
    fn toggle_flips_membership() {
        let on = toggle(&set(&[]), SpendCategory::Shopping);
        assert!(on.contains(&SpendCategory::Shopping));
        assert!(toggle(&on, SpendCategory::Shopping).is_empty());
    }
}
