use chrono::Utc;
use std::sync::atomic::{AtomicI64, Ordering};

/// Issues `<prefix>_<millis>` identifiers.
///
/// The numeric suffix is the wall clock in milliseconds, bumped past the last
/// issued value so that it strictly increases within a process.
#[derive(Debug, Default)]
pub struct IdGenerator {
    last: AtomicI64,
}

impl IdGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn next_suffix(&self) -> i64 {
        let now = Utc::now().timestamp_millis();
        let prev = self
            .last
            .fetch_update(Ordering::AcqRel, Ordering::Acquire, |prev| {
                Some(now.max(prev + 1))
            })
            .unwrap_or_else(|prev| prev);
        now.max(prev + 1)
    }

    pub fn issue(&self, prefix: &str) -> String {
        format!("{}_{}", prefix, self.next_suffix())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_suffixes_strictly_increase() {
        let ids = IdGenerator::new();
        let mut last = 0;
        for _ in 0..1_000 {
            let next = ids.next_suffix();
            assert!(next > last);
            last = next;
        }
    }

    #[test]
    fn test_issue_prefixes_and_never_repeats() {
        let ids = IdGenerator::new();
        let issued: HashSet<String> = (0..500).map(|_| ids.issue("recruiter_demo")).collect();
        assert_eq!(issued.len(), 500);
        assert!(issued.iter().all(|id| id.starts_with("recruiter_demo_")));
    }

    #[test]
    fn test_concurrent_issuers_do_not_collide() {
        let ids = std::sync::Arc::new(IdGenerator::new());
        let handles: Vec<_> = (0..4)
            .map(|_| {
                let ids = ids.clone();
                std::thread::spawn(move || (0..250).map(|_| ids.next_suffix()).collect::<Vec<_>>())
            })
            .collect();

        let mut all = HashSet::new();
        for handle in handles {
            for suffix in handle.join().unwrap() {
                assert!(all.insert(suffix));
            }
        }
        assert_eq!(all.len(), 1_000);
    }
}
