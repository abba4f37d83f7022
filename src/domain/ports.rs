use crate::domain::model::Card;

/// Lists every set among `cards`.
///
/// Each set is reported once, as cards at table positions `i < j < k`, and the
/// list is ordered by `(i, j, k)`.
pub trait SetFinder {
    fn name(&self) -> &'static str;
    fn find_sets(&self, cards: &[Card]) -> Vec<[Card; 3]>;
}
