mod currency_scorer;

pub use currency_scorer::CurrencyScorer;
