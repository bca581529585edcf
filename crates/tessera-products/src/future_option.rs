//! Exchange-traded options on futures, described generically.
//!
//! A generic future option is priced from a single market quote for the listed
//! option contract. The product carries the contract conventions (tick size and tick
//! value) needed to turn a quoted price into a monetary amount.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use tessera_core::types::{Currency, Date, StandardId};

use crate::error::{ProductError, ProductResult};

/// Option flavour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PutCall {
    /// Right to buy the underlying future.
    Call,
    /// Right to sell the underlying future.
    Put,
}

/// The contract terms of a listed option on a future.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GenericFutureOption {
    product_id: StandardId,
    currency: Currency,
    tick_size: Decimal,
    tick_value: Decimal,
    put_call: Option<PutCall>,
    strike: Option<Decimal>,
    expiry: Option<Date>,
}

impl GenericFutureOption {
    /// Returns a builder.
    #[must_use]
    pub fn builder() -> GenericFutureOptionBuilder {
        GenericFutureOptionBuilder::default()
    }

    /// Returns the product identifier.
    pub fn product_id(&self) -> &StandardId {
        &self.product_id
    }

    /// Returns the currency the option is quoted and settled in.
    pub fn currency(&self) -> Currency {
        self.currency
    }

    /// Returns the minimum price movement.
    pub fn tick_size(&self) -> Decimal {
        self.tick_size
    }

    /// Returns the monetary value of one tick.
    pub fn tick_value(&self) -> Decimal {
        self.tick_value
    }

    /// Returns put or call, if known.
    pub fn put_call(&self) -> Option<PutCall> {
        self.put_call
    }

    /// Returns the strike, if known.
    pub fn strike(&self) -> Option<Decimal> {
        self.strike
    }

    /// Returns the expiry date, if known.
    pub fn expiry(&self) -> Option<Date> {
        self.expiry
    }
}

/// Builder for [`GenericFutureOption`].
#[derive(Debug, Clone, Default)]
pub struct GenericFutureOptionBuilder {
    product_id: Option<StandardId>,
    currency: Option<Currency>,
    tick_size: Option<Decimal>,
    tick_value: Option<Decimal>,
    put_call: Option<PutCall>,
    strike: Option<Decimal>,
    expiry: Option<Date>,
}

impl GenericFutureOptionBuilder {
    /// Sets the product identifier.
    #[must_use]
    pub fn product_id(mut self, id: StandardId) -> Self {
        self.product_id = Some(id);
        self
    }

    /// Sets the currency.
    #[must_use]
    pub fn currency(mut self, currency: Currency) -> Self {
        self.currency = Some(currency);
        self
    }

    /// Sets the tick size.
    #[must_use]
    pub fn tick_size(mut self, tick_size: Decimal) -> Self {
        self.tick_size = Some(tick_size);
        self
    }

    /// Sets the tick value.
    #[must_use]
    pub fn tick_value(mut self, tick_value: Decimal) -> Self {
        self.tick_value = Some(tick_value);
        self
    }

    /// Sets put or call.
    #[must_use]
    pub fn put_call(mut self, put_call: PutCall) -> Self {
        self.put_call = Some(put_call);
        self
    }

    /// Sets the strike.
    #[must_use]
    pub fn strike(mut self, strike: Decimal) -> Self {
        self.strike = Some(strike);
        self
    }

    /// Sets the expiry date.
    #[must_use]
    pub fn expiry(mut self, expiry: Date) -> Self {
        self.expiry = Some(expiry);
        self
    }

    /// Builds the product.
    ///
    /// # Errors
    ///
    /// Returns an error if a required field is missing or the tick size/value is not
    /// positive.
    pub fn build(self) -> ProductResult<GenericFutureOption> {
        let product_id = self
            .product_id
            .ok_or(ProductError::MissingField("product_id"))?;
        let currency = self.currency.ok_or(ProductError::MissingField("currency"))?;
        let tick_size = self
            .tick_size
            .ok_or(ProductError::MissingField("tick_size"))?;
        let tick_value = self
            .tick_value
            .ok_or(ProductError::MissingField("tick_value"))?;

        if tick_size <= Decimal::ZERO {
            return Err(ProductError::invalid("tick_size", "must be positive"));
        }
        if tick_value <= Decimal::ZERO {
            return Err(ProductError::invalid("tick_value", "must be positive"));
        }

        Ok(GenericFutureOption {
            product_id,
            currency,
            tick_size,
            tick_value,
            put_call: self.put_call,
            strike: self.strike,
            expiry: self.expiry,
        })
    }
}

/// A position in a listed future option.
///
/// The security identifier names the listed contract and is what market data is
/// quoted against.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GenericFutureOptionTrade {
    trade_id: Option<StandardId>,
    trade_date: Option<Date>,
    security_id: StandardId,
    product: GenericFutureOption,
    quantity: i64,
}

impl GenericFutureOptionTrade {
    /// Returns a builder.
    #[must_use]
    pub fn builder() -> GenericFutureOptionTradeBuilder {
        GenericFutureOptionTradeBuilder::default()
    }

    /// Returns the trade identifier, if any.
    pub fn trade_id(&self) -> Option<&StandardId> {
        self.trade_id.as_ref()
    }

    /// Returns the trade date, if any.
    pub fn trade_date(&self) -> Option<Date> {
        self.trade_date
    }

    /// Returns the identifier of the listed security.
    pub fn security_id(&self) -> &StandardId {
        &self.security_id
    }

    /// Returns the product.
    pub fn product(&self) -> &GenericFutureOption {
        &self.product
    }

    /// Returns the signed number of contracts. Negative means short.
    pub fn quantity(&self) -> i64 {
        self.quantity
    }
}

/// Builder for [`GenericFutureOptionTrade`].
#[derive(Debug, Clone, Default)]
pub struct GenericFutureOptionTradeBuilder {
    trade_id: Option<StandardId>,
    trade_date: Option<Date>,
    security_id: Option<StandardId>,
    product: Option<GenericFutureOption>,
    quantity: Option<i64>,
}

impl GenericFutureOptionTradeBuilder {
    /// Sets the trade identifier.
    #[must_use]
    pub fn trade_id(mut self, id: StandardId) -> Self {
        self.trade_id = Some(id);
        self
    }

    /// Sets the trade date.
    #[must_use]
    pub fn trade_date(mut self, date: Date) -> Self {
        self.trade_date = Some(date);
        self
    }

    /// Sets the security identifier.
    #[must_use]
    pub fn security_id(mut self, id: StandardId) -> Self {
        self.security_id = Some(id);
        self
    }

    /// Sets the product.
    #[must_use]
    pub fn product(mut self, product: GenericFutureOption) -> Self {
        self.product = Some(product);
        self
    }

    /// Sets the signed quantity.
    #[must_use]
    pub fn quantity(mut self, quantity: i64) -> Self {
        self.quantity = Some(quantity);
        self
    }

    /// Builds the trade.
    ///
    /// # Errors
    ///
    /// Returns `ProductError::MissingField` if the security, product or quantity is
    /// not set.
    pub fn build(self) -> ProductResult<GenericFutureOptionTrade> {
        let security_id = self
            .security_id
            .ok_or(ProductError::MissingField("security_id"))?;
        let product = self.product.ok_or(ProductError::MissingField("product"))?;
        let quantity = self.quantity.ok_or(ProductError::MissingField("quantity"))?;

        Ok(GenericFutureOptionTrade {
            trade_id: self.trade_id,
            trade_date: self.trade_date,
            security_id,
            product,
            quantity,
        })
    }
}
