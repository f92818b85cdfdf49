//! Stop name resolution.
//!
//! Free-text stop names are matched against the stops table with a
//! tiered cascade, from exact down to substring. The ordering is a
//! deliberate precision-over-recall choice: when an exact stop exists a
//! broader partial match must never shadow it.

use crate::domain::Stop;

/// Resolve a free-text query to a stop.
///
/// Tiers, in strict precedence order; within a tier the first match in
/// table row order wins:
///
/// 1. exact name match (case-insensitive)
/// 2. parenthetical prefix: if the query contains `(`, the part before
///    it is matched as a prefix of the stored name (handles aliases
///    like "Kempegowda Bus Station (Majestic)")
/// 3. the full query as a prefix of the stored name
/// 4. the full query as a substring of the stored name
///
/// Empty or whitespace-only queries return `None` without scanning.
pub fn resolve_stop<'a>(stops: &'a [Stop], query: &str) -> Option<&'a Stop> {
    let query = query.trim().to_lowercase();
    if query.is_empty() {
        return None;
    }

    if let Some(stop) = stops.iter().find(|s| s.stop_name.to_lowercase() == query) {
        return Some(stop);
    }

    if let Some(paren) = query.find('(') {
        let base = query[..paren].trim();
        if !base.is_empty()
            && let Some(stop) = stops
                .iter()
                .find(|s| s.stop_name.to_lowercase().starts_with(base))
        {
            return Some(stop);
        }
    }

    if let Some(stop) = stops
        .iter()
        .find(|s| s.stop_name.to_lowercase().starts_with(&query))
    {
        return Some(stop);
    }

    stops
        .iter()
        .find(|s| s.stop_name.to_lowercase().contains(&query))
}

/// All stops whose name contains the query, in table order.
///
/// Backs the stop search endpoint; an empty query matches nothing.
pub fn search_stops<'a>(stops: &'a [Stop], query: &str) -> Vec<&'a Stop> {
    let query = query.trim().to_lowercase();
    if query.is_empty() {
        return Vec::new();
    }

    stops
        .iter()
        .filter(|s| s.stop_name.to_lowercase().contains(&query))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::StopId;

    fn stop(id: &str, name: &str) -> Stop {
        Stop {
            stop_id: StopId::new(id),
            stop_name: name.to_string(),
            stop_lat: 12.97,
            stop_lon: 77.57,
        }
    }

    #[test]
    fn exact_match_beats_prefix_match() {
        let stops = vec![stop("2", "Majestic Bus Stand"), stop("1", "Majestic")];

        let found = resolve_stop(&stops, "majestic").unwrap();
        assert_eq!(found.stop_name, "Majestic");
    }

    #[test]
    fn exact_match_is_case_insensitive() {
        let stops = vec![stop("1", "Koramangala")];
        assert!(resolve_stop(&stops, "KORAMANGALA").is_some());
        assert!(resolve_stop(&stops, "  koramangala  ").is_some());
    }

    #[test]
    fn parenthetical_query_matches_stored_prefix() {
        let stops = vec![stop("1", "Kempegowda Bus Station (Majestic)")];

        let found = resolve_stop(&stops, "Kempegowda Bus Station (KBS)").unwrap();
        assert_eq!(found.stop_id, StopId::new("1"));
    }

    #[test]
    fn prefix_match_when_no_exact() {
        let stops = vec![stop("1", "Indiranagar 100ft Road"), stop("2", "Jayanagar")];

        let found = resolve_stop(&stops, "indiranagar").unwrap();
        assert_eq!(found.stop_id, StopId::new("1"));
    }

    #[test]
    fn substring_match_as_last_resort() {
        let stops = vec![stop("1", "Domlur Bridge")];

        let found = resolve_stop(&stops, "bridge").unwrap();
        assert_eq!(found.stop_id, StopId::new("1"));
    }

    #[test]
    fn first_row_wins_within_a_tier() {
        let stops = vec![stop("1", "Silk Board"), stop("2", "Silk Institute")];

        let found = resolve_stop(&stops, "silk").unwrap();
        assert_eq!(found.stop_id, StopId::new("1"));
    }

    #[test]
    fn empty_query_returns_none() {
        let stops = vec![stop("1", "Majestic")];
        assert!(resolve_stop(&stops, "").is_none());
        assert!(resolve_stop(&stops, "   ").is_none());
        assert!(resolve_stop(&[], "anything").is_none());
    }

    #[test]
    fn unmatched_query_returns_none() {
        let stops = vec![stop("1", "Majestic")];
        assert!(resolve_stop(&stops, "whitefield").is_none());
    }

    #[test]
    fn search_returns_all_substring_matches_in_order() {
        let stops = vec![
            stop("1", "Jayanagar 4th Block"),
            stop("2", "Majestic"),
            stop("3", "Jayanagar 9th Block"),
        ];

        let found = search_stops(&stops, "jayanagar");
        assert_eq!(found.len(), 2);
        assert_eq!(found[0].stop_id, StopId::new("1"));
        assert_eq!(found[1].stop_id, StopId::new("3"));
    }

    #[test]
    fn search_with_empty_query_matches_nothing() {
        let stops = vec![stop("1", "Majestic")];
        assert!(search_stops(&stops, "").is_empty());
        assert!(search_stops(&stops, "  ").is_empty());
    }
}
