//! Property tests for listing line parsing and presentation ordering

use exo::core::entry_parser::parse_listing;
use exo::core::presenter::{memory_tier, present};
use exo::error::EntryError;
use exo::{Candidate, MemoryTier, ProcessEntry};
use proptest::prelude::*;

proptest! {
    #[test]
    fn valid_lines_yield_pid_and_trimmed_label(
        pid in any::<u32>(),
        label in "[A-Za-z0-9._$/-]{0,24}( [A-Za-z0-9._-]{1,12}){0,3}",
        padding in " {1,4}",
    ) {
        let line = format!("{pid}{padding}{label}");
        let entry = ProcessEntry::parse(line.trim()).unwrap();
        prop_assert_eq!(entry.pid(), pid);
        prop_assert_eq!(entry.label(), label.trim());
    }

    #[test]
    fn lines_without_leading_digits_are_parse_errors(line in "[A-Za-z._:-][A-Za-z0-9._: -]{0,40}") {
        let trimmed = line.trim();
        prop_assert_eq!(
            ProcessEntry::parse(trimmed),
            Err(EntryError::Parse { line: trimmed.to_string() })
        );
    }

    #[test]
    fn listing_parses_one_entry_per_non_blank_line(pids in proptest::collection::vec(any::<u32>(), 0..20)) {
        let listing: String = pids
            .iter()
            .map(|pid| format!("  {pid} Main\n\n"))
            .collect();
        let entries = parse_listing(&listing).unwrap();
        let parsed: Vec<u32> = entries.iter().map(ProcessEntry::pid).collect();
        prop_assert_eq!(parsed, pids);
    }

    #[test]
    fn presenter_orders_by_elapsed_descending(elapsed in proptest::collection::vec(0u64..5_000_000, 0..30)) {
        let candidates: Vec<Candidate> = elapsed
            .iter()
            .enumerate()
            .map(|(i, ms)| Candidate {
                pid: i as u32 + 1,
                command_line: "java Main".to_string(),
                memory_bytes: 0,
                elapsed_ms: *ms,
                is_likely_target: false,
            })
            .collect();

        let choices = present(candidates);
        let shown: Vec<u64> = choices.iter().map(|c| elapsed[c.value as usize - 1]).collect();
        prop_assert!(shown.windows(2).all(|w| w[0] >= w[1]));

        // ties keep their original relative order
        for w in choices.windows(2) {
            if elapsed[w[0].value as usize - 1] == elapsed[w[1].value as usize - 1] {
                prop_assert!(w[0].value < w[1].value);
            }
        }
    }

    #[test]
    fn memory_tier_is_monotonic(a in any::<u64>(), b in any::<u64>()) {
        let rank = |tier: MemoryTier| match tier {
            MemoryTier::Low => 0,
            MemoryTier::Elevated => 1,
            MemoryTier::Critical => 2,
        };
        let (low, high) = if a <= b { (a, b) } else { (b, a) };
        prop_assert!(rank(memory_tier(low)) <= rank(memory_tier(high)));
    }
}

#[test]
fn documented_memory_classification() {
    assert_eq!(memory_tier(1_500_000_000), MemoryTier::Critical);
    assert_eq!(memory_tier(150_000_000), MemoryTier::Elevated);
    assert_eq!(memory_tier(500_000), MemoryTier::Low);
    assert_eq!(memory_tier(1_000_000_001), MemoryTier::Critical);
    assert_eq!(memory_tier(1_000_000_000), MemoryTier::Elevated);
    assert_eq!(memory_tier(100_000_000), MemoryTier::Elevated);
    assert_eq!(memory_tier(100_000_001), MemoryTier::Elevated);
}
