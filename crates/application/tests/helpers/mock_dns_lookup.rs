use async_trait::async_trait;
use ferrous_lookup_application::ports::DnsLookup;
use ferrous_lookup_domain::{DomainError, MxRecord};
use std::collections::{HashMap, HashSet};
use std::net::IpAddr;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;
use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LookupKind {
    Ip,
    Cname,
    Mx,
    Txt,
    Ns,
    Reverse,
}

#[derive(Default)]
pub struct MockDnsLookup {
    addresses: Vec<IpAddr>,
    cnames: Vec<String>,
    exchanges: Vec<MxRecord>,
    texts: Vec<String>,
    name_servers: Vec<String>,
    hostnames: Vec<String>,
    failures: HashMap<LookupKind, DomainError>,
    hanging: HashSet<LookupKind>,
    delay: Option<Duration>,
    calls: Mutex<HashMap<LookupKind, usize>>,
    queried: Mutex<Vec<String>>,
    in_flight: AtomicUsize,
    max_in_flight: AtomicUsize,
}

impl MockDnsLookup {
    pub fn new() -> Self {
        Self::default()
    }

    /// A domain with a record of every type.
    pub fn populated() -> Self {
        Self::new()
            .with_addresses(&["93.184.216.34", "2606:2800:220:1:248:1893:25c8:1946"])
            .with_cnames(&["edge.example.net."])
            .with_exchanges(&[("mail.example.com.", 10), ("backup.example.com.", 20)])
            .with_texts(&["v=spf1 -all"])
            .with_name_servers(&["a.iana-servers.net.", "b.iana-servers.net."])
    }

    pub fn with_addresses(mut self, addresses: &[&str]) -> Self {
        self.addresses = addresses.iter().map(|a| a.parse().unwrap()).collect();
        self
    }

    pub fn with_cnames(mut self, cnames: &[&str]) -> Self {
        self.cnames = cnames.iter().map(|c| c.to_string()).collect();
        self
    }

    pub fn with_exchanges(mut self, exchanges: &[(&str, u16)]) -> Self {
        self.exchanges = exchanges
            .iter()
            .map(|(host, pref)| MxRecord::new(*host, *pref))
            .collect();
        self
    }

    pub fn with_texts(mut self, texts: &[&str]) -> Self {
        self.texts = texts.iter().map(|t| t.to_string()).collect();
        self
    }

    pub fn with_name_servers(mut self, name_servers: &[&str]) -> Self {
        self.name_servers = name_servers.iter().map(|n| n.to_string()).collect();
        self
    }

    pub fn with_hostnames(mut self, hostnames: &[&str]) -> Self {
        self.hostnames = hostnames.iter().map(|h| h.to_string()).collect();
        self
    }

    pub fn failing(mut self, kind: LookupKind, error: DomainError) -> Self {
        self.failures.insert(kind, error);
        self
    }

    /// The lookup never completes.
    pub fn hanging(mut self, kind: LookupKind) -> Self {
        self.hanging.insert(kind);
        self
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    pub fn calls(&self, kind: LookupKind) -> usize {
        self.calls.lock().unwrap().get(&kind).copied().unwrap_or(0)
    }

    pub fn total_calls(&self) -> usize {
        self.calls.lock().unwrap().values().sum()
    }

    pub fn queried_domains(&self) -> Vec<String> {
        self.queried.lock().unwrap().clone()
    }

    pub fn max_in_flight(&self) -> usize {
        self.max_in_flight.load(Ordering::SeqCst)
    }

    async fn answer<T: Clone>(&self, kind: LookupKind, target: &str, value: &[T]) -> Result<Vec<T>, DomainError> {
        *self.calls.lock().unwrap().entry(kind).or_insert(0) += 1;
        self.queried.lock().unwrap().push(target.to_string());

        let current = self.in_flight.fetch_add(1, Ordering::SeqCst) + 1;
        self.max_in_flight.fetch_max(current, Ordering::SeqCst);

        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }
        if self.hanging.contains(&kind) {
            std::future::pending::<()>().await;
        }

        self.in_flight.fetch_sub(1, Ordering::SeqCst);

        match self.failures.get(&kind) {
            Some(error) => Err(error.clone()),
            None => Ok(value.to_vec()),
        }
    }
}

#[async_trait]
impl DnsLookup for MockDnsLookup {
    async fn lookup_ip(&self, domain: &str) -> Result<Vec<IpAddr>, DomainError> {
        self.answer(LookupKind::Ip, domain, &self.addresses).await
    }

    async fn lookup_cname(&self, domain: &str) -> Result<Vec<String>, DomainError> {
        self.answer(LookupKind::Cname, domain, &self.cnames).await
    }

    async fn lookup_mx(&self, domain: &str) -> Result<Vec<MxRecord>, DomainError> {
        self.answer(LookupKind::Mx, domain, &self.exchanges).await
    }

    async fn lookup_txt(&self, domain: &str) -> Result<Vec<String>, DomainError> {
        self.answer(LookupKind::Txt, domain, &self.texts).await
    }

    async fn lookup_ns(&self, domain: &str) -> Result<Vec<String>, DomainError> {
        self.answer(LookupKind::Ns, domain, &self.name_servers).await
    }

    async fn reverse_lookup(&self, ip: IpAddr) -> Result<Vec<String>, DomainError> {
        self.answer(LookupKind::Reverse, &ip.to_string(), &self.hostnames)
            .await
    }
}
