use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::error::{CoreError, Result};

/// Cap on the rejection-sampling loop in [`derangement_draw`]. The
/// per-attempt success probability never drops below 1/e for n >= 3
/// (and is 1/2 for n = 2), so hitting this cap is practically
/// unreachable; it exists to make termination explicit.
pub const MAX_DRAW_ATTEMPTS: u32 = 1000;

/// A giver -> recipient assignment over the registry's name set.
///
/// Always a derangement: bijective, no name maps to itself. Produced
/// once per draw and discarded after it is revealed or mailed out.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Pairing {
    assignments: Vec<(String, String)>,
}

impl Pairing {
    pub fn recipient_of(&self, giver: &str) -> Option<&str> {
        self.assignments
            .iter()
            .find(|(g, _)| g == giver)
            .map(|(_, r)| r.as_str())
    }

    /// (giver, recipient) pairs in draw order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.assignments.iter().map(|(g, r)| (g.as_str(), r.as_str()))
    }

    pub fn len(&self) -> usize {
        self.assignments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.assignments.is_empty()
    }
}

/// Which pairing mode produced a draw.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DrawKind {
    /// Single random cycle over all names (used for the email draw).
    Cyclic,
    /// Uniformly sampled derangement, any cycle structure (local draw).
    Derangement,
}

impl std::fmt::Display for DrawKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DrawKind::Cyclic => write!(f, "cyclic"),
            DrawKind::Derangement => write!(f, "derangement"),
        }
    }
}

/// Draw a pairing by shuffling the names once and assigning each name to
/// its successor in the shuffled order. A cyclic shift has no fixed
/// points for n >= 2, so this never retries, at the cost of always
/// producing a single cycle rather than a uniform derangement.
pub fn cyclic_draw<R: Rng + ?Sized>(names: &[String], rng: &mut R) -> Result<Pairing> {
    ensure_enough(names)?;

    let mut shuffled = names.to_vec();
    shuffled.shuffle(rng);

    let assignments = (0..shuffled.len())
        .map(|i| {
            (
                shuffled[i].clone(),
                shuffled[(i + 1) % shuffled.len()].clone(),
            )
        })
        .collect();

    Ok(Pairing { assignments })
}

/// Draw a pairing by rejection sampling: shuffle until no name lands on
/// its own position in the base order. Uniform over all derangements,
/// expected ~e attempts, bounded by [`MAX_DRAW_ATTEMPTS`].
pub fn derangement_draw<R: Rng + ?Sized>(names: &[String], rng: &mut R) -> Result<Pairing> {
    ensure_enough(names)?;

    let mut shuffled = names.to_vec();
    for _ in 0..MAX_DRAW_ATTEMPTS {
        shuffled.shuffle(rng);
        if names.iter().zip(&shuffled).all(|(base, drawn)| base != drawn) {
            let assignments = names
                .iter()
                .cloned()
                .zip(shuffled.iter().cloned())
                .collect();
            return Ok(Pairing { assignments });
        }
    }

    Err(CoreError::DrawExhausted {
        attempts: MAX_DRAW_ATTEMPTS,
    })
}

fn ensure_enough(names: &[String]) -> Result<()> {
    if names.len() < 2 {
        return Err(CoreError::InsufficientParticipants { count: names.len() });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::collections::HashSet;

    fn names(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    fn assert_derangement(base: &[String], pairing: &Pairing) {
        assert_eq!(pairing.len(), base.len());

        let givers: HashSet<_> = pairing.iter().map(|(g, _)| g.to_string()).collect();
        let recipients: HashSet<_> = pairing.iter().map(|(_, r)| r.to_string()).collect();
        let all: HashSet<_> = base.iter().cloned().collect();

        // Total bijection over the name set.
        assert_eq!(givers, all);
        assert_eq!(recipients, all);

        // No fixed points.
        for (giver, recipient) in pairing.iter() {
            assert_ne!(giver, recipient, "{} drew themselves", giver);
        }
    }

    /// Walk giver -> recipient links and count how many hops it takes to
    /// return to the start.
    fn cycle_length(pairing: &Pairing, start: &str) -> usize {
        let mut current = pairing.recipient_of(start).unwrap();
        let mut hops = 1;
        while current != start {
            current = pairing.recipient_of(current).unwrap();
            hops += 1;
        }
        hops
    }

    #[test]
    fn test_cyclic_draw_is_a_single_full_cycle() {
        let base = names(&["A", "B", "C", "D", "E", "F", "G"]);
        for seed in 0..50 {
            let mut rng = StdRng::seed_from_u64(seed);
            let pairing = cyclic_draw(&base, &mut rng).unwrap();
            assert_derangement(&base, &pairing);
            assert_eq!(cycle_length(&pairing, "A"), base.len());
        }
    }

    #[test]
    fn test_cyclic_draw_three_names() {
        let base = names(&["A", "B", "C"]);
        let mut rng = StdRng::seed_from_u64(7);
        let pairing = cyclic_draw(&base, &mut rng).unwrap();
        assert_derangement(&base, &pairing);
        assert_eq!(cycle_length(&pairing, "A"), 3);
    }

    #[test]
    fn test_cyclic_draw_two_names_is_the_swap() {
        let base = names(&["A", "B"]);
        let mut rng = StdRng::seed_from_u64(3);
        let pairing = cyclic_draw(&base, &mut rng).unwrap();
        assert_eq!(pairing.recipient_of("A"), Some("B"));
        assert_eq!(pairing.recipient_of("B"), Some("A"));
    }

    #[test]
    fn test_derangement_draw_has_no_fixed_points() {
        let base = names(&["A", "B", "C", "D", "E"]);
        for seed in 0..50 {
            let mut rng = StdRng::seed_from_u64(seed);
            let pairing = derangement_draw(&base, &mut rng).unwrap();
            assert_derangement(&base, &pairing);
        }
    }

    #[test]
    fn test_derangement_draw_two_names_always_swaps() {
        let base = names(&["A", "B"]);
        for seed in 0..20 {
            let mut rng = StdRng::seed_from_u64(seed);
            let pairing = derangement_draw(&base, &mut rng).unwrap();
            assert_eq!(pairing.recipient_of("A"), Some("B"));
            assert_eq!(pairing.recipient_of("B"), Some("A"));
        }
    }

    #[test]
    fn test_derangement_draw_can_produce_multiple_cycles() {
        // With 4 names, 3 of the 9 derangements are double swaps. Over
        // enough seeds we should see at least one that is not a single
        // 4-cycle, distinguishing this mode from the cyclic draw.
        let base = names(&["A", "B", "C", "D"]);
        let mut saw_multi_cycle = false;
        for seed in 0..200 {
            let mut rng = StdRng::seed_from_u64(seed);
            let pairing = derangement_draw(&base, &mut rng).unwrap();
            if cycle_length(&pairing, "A") < base.len() {
                saw_multi_cycle = true;
                break;
            }
        }
        assert!(saw_multi_cycle);
    }

    #[test]
    fn test_both_modes_reject_fewer_than_two() {
        let mut rng = StdRng::seed_from_u64(0);

        for base in [names(&[]), names(&["A"])] {
            let err = cyclic_draw(&base, &mut rng).unwrap_err();
            assert!(
                matches!(err, CoreError::InsufficientParticipants { count } if count == base.len())
            );

            let err = derangement_draw(&base, &mut rng).unwrap_err();
            assert!(
                matches!(err, CoreError::InsufficientParticipants { count } if count == base.len())
            );
        }
    }
}
