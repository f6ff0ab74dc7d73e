// Storage adapters behind the domain repository traits

pub mod repositories;
