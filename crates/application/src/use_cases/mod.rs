pub mod dns;

pub use dns::{BatchResolveUseCase, BatchSummary, ResolveDomainUseCase, ReverseLookupUseCase};
