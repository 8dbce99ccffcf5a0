#![allow(dead_code)]

mod counting_lookup;

pub use counting_lookup::CountingLookup;
