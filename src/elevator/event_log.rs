use std::collections::VecDeque;

/// Bounded list of event messages, dropping the oldest once full.
#[derive(Debug, Clone)]
pub struct EventLog {
    entries: VecDeque<String>,
    capacity: usize,
}

impl EventLog {
    pub fn new(capacity: usize) -> EventLog {
        EventLog {
            entries: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    pub fn push(&mut self, message: impl Into<String>) {
        if self.capacity == 0 {
            return;
        }
        while self.entries.len() >= self.capacity {
            self.entries.pop_front();
        }
        self.entries.push_back(message.into());
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[cfg(test)]
    pub fn last(&self) -> Option<&str> {
        self.entries.back().map(String::as_str)
    }

    pub fn to_vec(&self) -> Vec<String> {
        self.entries.iter().cloned().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::EventLog;

    #[test]
    fn test_event_log_evicts_oldest_first() {
        let mut log = EventLog::new(20);

        for i in 0..25 {
            log.push(format!("event {}", i));
        }

        assert_eq!(log.len(), 20);
        let entries = log.to_vec();
        assert_eq!(entries.first().map(String::as_str), Some("event 5"));
        assert_eq!(log.last(), Some("event 24"));
    }

    #[test]
    fn test_event_log_below_capacity_keeps_everything() {
        let mut log = EventLog::new(3);
        assert!(log.is_empty());

        log.push("a");
        log.push("b");

        assert_eq!(log.to_vec(), vec!["a".to_string(), "b".to_string()]);
    }
}
