use ferrous_lookup_application::ports::RecordCachePort;
use ferrous_lookup_domain::RecordSet;
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

/// Cache without expiry that counts accesses.
#[derive(Default)]
pub struct MockRecordCache {
    entries: Mutex<HashMap<String, Arc<RecordSet>>>,
    gets: AtomicUsize,
    puts: AtomicUsize,
}

impl MockRecordCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get_count(&self) -> usize {
        self.gets.load(Ordering::SeqCst)
    }

    pub fn put_count(&self) -> usize {
        self.puts.load(Ordering::SeqCst)
    }

    pub fn keys(&self) -> Vec<String> {
        self.entries.lock().unwrap().keys().cloned().collect()
    }
}

impl RecordCachePort for MockRecordCache {
    fn get(&self, domain: &str) -> Option<Arc<RecordSet>> {
        self.gets.fetch_add(1, Ordering::SeqCst);
        self.entries.lock().unwrap().get(domain).cloned()
    }

    fn put(&self, domain: &str, records: Arc<RecordSet>) {
        self.puts.fetch_add(1, Ordering::SeqCst);
        self.entries
            .lock()
            .unwrap()
            .insert(domain.to_string(), records);
    }

    fn len(&self) -> usize {
        self.entries.lock().unwrap().len()
    }
}
