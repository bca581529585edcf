//! Domain value types.
//!
//! - [`Currency`]: ISO currency codes
//! - [`CurrencyPair`]: An ordered pair of distinct currencies
//! - [`FxRate`]: A positive rate quoted on a currency pair
//! - [`CurrencyAmount`]: A decimal amount tagged with its currency
//! - [`BuySell`]: Trade direction
//! - [`StandardId`]: A scheme-qualified identifier for securities and contracts
//! - [`Date`]: Calendar date

mod amount;
mod buy_sell;
mod currency;
mod currency_pair;
mod date;
mod fx_rate;
mod identifiers;

pub use amount::CurrencyAmount;
pub use buy_sell::BuySell;
pub use currency::Currency;
pub use currency_pair::CurrencyPair;
pub use date::Date;
pub use fx_rate::FxRate;
pub use identifiers::StandardId;
