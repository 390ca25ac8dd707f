// Evlist Natural Ordering
// Compares paths so that embedded numbers sort by value (event2 < event10)

use std::cmp::Ordering;

/// Split a string into maximal runs of consecutive ASCII digits, with every
/// other character standing alone.
///
/// The input is lower-cased first, so `"Event10"` becomes
/// `["e", "v", "e", "n", "t", "10"]`.
pub fn partition(s: &str) -> Vec<String> {
    let mut parts: Vec<String> = Vec::new();
    let mut prev_digit = false;

    for c in s.to_lowercase().chars() {
        let digit = c.is_ascii_digit();
        match parts.last_mut() {
            Some(last) if digit && prev_digit => last.push(c),
            _ => parts.push(c.to_string()),
        }
        prev_digit = digit;
    }

    parts
}

fn is_numeric(part: &str) -> bool {
    part.starts_with(|c: char| c.is_ascii_digit())
}

/// Compare two digit runs by value without parsing, so arbitrarily long runs
/// cannot overflow.
fn cmp_numeric(a: &str, b: &str) -> Ordering {
    let a = a.trim_start_matches('0');
    let b = b.trim_start_matches('0');
    a.len().cmp(&b.len()).then_with(|| a.cmp(b))
}

fn cmp_part(a: &str, b: &str) -> Ordering {
    if is_numeric(a) && is_numeric(b) {
        cmp_numeric(a, b)
    } else {
        a.cmp(b)
    }
}

/// Natural-order comparison of two strings.
///
/// Partitions are compared pairwise: digit runs by numeric value, anything
/// else as text. When one partition list is a prefix of the other the
/// shorter sorts first. Remaining ties (digit runs that differ only in
/// leading zeros, or strings that differ only in case) fall back to the
/// lower-cased strings and finally the strings as given, which keeps this
/// a strict total order over distinct inputs.
pub fn natural_cmp(a: &str, b: &str) -> Ordering {
    let a_parts = partition(a);
    let b_parts = partition(b);

    for (x, y) in a_parts.iter().zip(&b_parts) {
        if x != y {
            match cmp_part(x, y) {
                Ordering::Equal => continue,
                ord => return ord,
            }
        }
    }

    a_parts
        .len()
        .cmp(&b_parts.len())
        .then_with(|| a.to_lowercase().cmp(&b.to_lowercase()))
        .then_with(|| a.cmp(b))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partition_event_node() {
        assert_eq!(partition("event10"), vec!["e", "v", "e", "n", "t", "10"]);
    }

    #[test]
    fn test_partition_lowercases_and_splits_digits() {
        assert_eq!(
            partition("/Dev/IN1/ev23x"),
            vec!["/", "d", "e", "v", "/", "i", "n", "1", "/", "e", "v", "23", "x"]
        );
    }

    #[test]
    fn test_partition_empty() {
        assert!(partition("").is_empty());
    }

    #[test]
    fn test_numeric_suffix_orders_by_value() {
        assert_eq!(natural_cmp("event2", "event10"), Ordering::Less);
        assert_eq!(natural_cmp("event10", "event2"), Ordering::Greater);
        assert_eq!(
            natural_cmp("/dev/input/event3", "/dev/input/event10"),
            Ordering::Less
        );
        assert_eq!(
            natural_cmp("/dev/input/event3", "/dev/input/event4"),
            Ordering::Less
        );
    }

    #[test]
    fn test_equal_strings_are_equal() {
        assert_eq!(natural_cmp("/dev/input/event7", "/dev/input/event7"), Ordering::Equal);
    }

    #[test]
    fn test_prefix_sorts_first() {
        assert_eq!(natural_cmp("event", "event0"), Ordering::Less);
        assert_eq!(natural_cmp("event1", "event"), Ordering::Greater);
    }

    #[test]
    fn test_text_parts_compare_as_text() {
        assert_eq!(natural_cmp("mouse0", "event0"), Ordering::Greater);
        assert_eq!(natural_cmp("a10", "b2"), Ordering::Less);
    }

    #[test]
    fn test_case_insensitive_with_stable_tiebreak() {
        assert_eq!(natural_cmp("Event2", "event10"), Ordering::Less);
        assert_ne!(natural_cmp("Event1", "event1"), Ordering::Equal);
        assert_eq!(
            natural_cmp("Event1", "event1"),
            natural_cmp("event1", "Event1").reverse()
        );
    }

    #[test]
    fn test_leading_zeros_are_not_equal() {
        assert_ne!(natural_cmp("event01", "event1"), Ordering::Equal);
        assert_eq!(natural_cmp("event01", "event2"), Ordering::Less);
    }

    #[test]
    fn test_huge_numbers_do_not_overflow() {
        assert_eq!(
            natural_cmp("event99999999999999999999999", "event100000000000000000000000"),
            Ordering::Less
        );
    }

    #[test]
    fn test_total_order_over_mixed_widths() {
        let inputs = [
            "event", "event0", "event00", "event1", "event01", "event2", "event10", "event010",
            "event100", "Event2", "event2a", "event2b", "mouse0", "mice", "js0", "",
        ];

        for a in &inputs {
            for b in &inputs {
                let ab = natural_cmp(a, b);
                assert_eq!(ab, natural_cmp(b, a).reverse(), "antisymmetry {a} {b}");
                assert_eq!(ab == Ordering::Equal, a == b, "strictness {a} {b}");
                for c in &inputs {
                    if ab == Ordering::Less && natural_cmp(b, c) == Ordering::Less {
                        assert_eq!(natural_cmp(a, c), Ordering::Less, "transitivity {a} {b} {c}");
                    }
                }
            }
        }
    }

    #[test]
    fn test_sort_event_nodes() {
        let mut nodes = vec!["event10", "event2", "event1", "event0", "event11", "event3"];
        nodes.sort_by(|a, b| natural_cmp(a, b));
        assert_eq!(
            nodes,
            vec!["event0", "event1", "event2", "event3", "event10", "event11"]
        );
    }
}
