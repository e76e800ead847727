/// Domain layer - hosts, errata and the currency score rules
pub mod domain;
pub mod policies;
pub mod services;
