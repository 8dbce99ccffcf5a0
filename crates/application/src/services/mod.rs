mod domain_normalizer;

pub use domain_normalizer::normalize_domain;
