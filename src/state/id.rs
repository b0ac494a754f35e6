use std::time::{SystemTime, UNIX_EPOCH};

use rand::{Rng, SeedableRng, rngs::OsRng, rngs::StdRng};
use tracing::warn;

/// Generates an entry id from two random 32-bit words in hex. When the OS generator is
/// unavailable a clock-seeded generator is used instead, which doesn't guarantee uniqueness.
pub fn generate_id() -> String {
    let mut words = [0u32; 2];
    match OsRng.try_fill(&mut words[..]) {
        Ok(_) => format!("{:x}{:x}", words[0], words[1]),
        Err(e) => {
            warn!("Secure random source unavailable, using fallback ids: {e}");
            fallback_id()
        }
    }
}

fn fallback_id() -> String {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|v| v.as_nanos())
        .unwrap_or_default();
    let mut rng = StdRng::seed_from_u64(nanos as u64);
    format!("{}{}", nanos / 1_000_000, rng.gen::<u32>())
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::{fallback_id, generate_id};

    #[test]
    fn test_ids_are_hex_and_distinct() {
        let ids = (0..1000).map(|_| generate_id()).collect::<HashSet<_>>();
        assert_eq!(ids.len(), 1000);
        for id in ids {
            assert!(!id.is_empty() && id.len() <= 16, "{id}");
            assert!(id.chars().all(|c| c.is_ascii_hexdigit()), "{id}");
        }
    }

    #[test]
    fn test_fallback_is_numeric() {
        let id = fallback_id();
        assert!(!id.is_empty());
        assert!(id.chars().all(|c| c.is_ascii_digit()), "{id}");
    }
}
