mod error;
mod provider;
mod static_provider;
mod yahoo;

pub use {
    error::{NoDataError, NoDataReason},
    provider::{FetchRequest, MarketDataProvider},
    static_provider::StaticProvider,
    yahoo::YahooProvider,
};
