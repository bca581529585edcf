//! FX non-deliverable forwards.
//!
//! An NDF pays the difference between the FX rate agreed at inception and the rate
//! observed on the fixing date, settled entirely in one currency. It is used for
//! currencies that cannot easily be delivered offshore, for example a USD/INR forward
//! settled in USD.

use rust_decimal::Decimal;
use serde::Serialize;

use tessera_core::types::{BuySell, Currency, CurrencyAmount, Date, FxRate, StandardId};

use crate::error::{ProductError, ProductResult};
use crate::fx_index::FxIndex;

/// A non-deliverable forward.
///
/// Invariants checked on construction:
/// - the notional is not negative
/// - the index pair contains the settlement currency
/// - the index pair matches the agreed rate pair, in either orientation
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FxNonDeliverableForward {
    buy_sell: BuySell,
    settlement_currency: Currency,
    notional: Decimal,
    agreed_fx_rate: FxRate,
    payment_date: Date,
    index: FxIndex,
}

impl FxNonDeliverableForward {
    /// Returns a builder.
    #[must_use]
    pub fn builder() -> FxNonDeliverableForwardBuilder {
        FxNonDeliverableForwardBuilder::default()
    }

    /// Returns a builder pre-populated from this forward.
    #[must_use]
    pub fn to_builder(&self) -> FxNonDeliverableForwardBuilder {
        FxNonDeliverableForwardBuilder {
            buy_sell: Some(self.buy_sell),
            settlement_currency: Some(self.settlement_currency),
            notional: Some(self.notional),
            agreed_fx_rate: Some(self.agreed_fx_rate),
            payment_date: Some(self.payment_date),
            index: Some(self.index.clone()),
        }
    }

    /// Returns whether the forward is bought or sold.
    pub fn buy_sell(&self) -> BuySell {
        self.buy_sell
    }

    /// Returns the currency the payment is made in.
    pub fn settlement_currency(&self) -> Currency {
        self.settlement_currency
    }

    /// Returns the unsigned notional, in the settlement currency.
    pub fn notional(&self) -> Decimal {
        self.notional
    }

    /// Returns the rate agreed at inception.
    pub fn agreed_fx_rate(&self) -> FxRate {
        self.agreed_fx_rate
    }

    /// Returns the payment date.
    pub fn payment_date(&self) -> Date {
        self.payment_date
    }

    /// Returns the index observed on the fixing date.
    pub fn index(&self) -> &FxIndex {
        &self.index
    }

    /// Returns the currency that is not settled.
    pub fn non_deliverable_currency(&self) -> Currency {
        let pair = self.agreed_fx_rate.pair();
        if pair.base() == self.settlement_currency {
            pair.counter()
        } else {
            pair.base()
        }
    }

    /// Expands the forward into its signed settlement form.
    pub fn expand(&self) -> ExpandedFxNonDeliverableForward {
        ExpandedFxNonDeliverableForward {
            settlement_currency_notional: CurrencyAmount::new(
                self.settlement_currency,
                self.buy_sell.normalize(self.notional),
            ),
            agreed_fx_rate: self.agreed_fx_rate,
            payment_date: self.payment_date,
            index: self.index.clone(),
        }
    }
}

/// Builder for [`FxNonDeliverableForward`].
#[derive(Debug, Clone, Default)]
pub struct FxNonDeliverableForwardBuilder {
    buy_sell: Option<BuySell>,
    settlement_currency: Option<Currency>,
    notional: Option<Decimal>,
    agreed_fx_rate: Option<FxRate>,
    payment_date: Option<Date>,
    index: Option<FxIndex>,
}

impl FxNonDeliverableForwardBuilder {
    /// Sets buy or sell.
    #[must_use]
    pub fn buy_sell(mut self, buy_sell: BuySell) -> Self {
        self.buy_sell = Some(buy_sell);
        self
    }

    /// Sets the settlement currency.
    #[must_use]
    pub fn settlement_currency(mut self, currency: Currency) -> Self {
        self.settlement_currency = Some(currency);
        self
    }

    /// Sets the notional.
    #[must_use]
    pub fn notional(mut self, notional: Decimal) -> Self {
        self.notional = Some(notional);
        self
    }

    /// Sets the agreed FX rate.
    #[must_use]
    pub fn agreed_fx_rate(mut self, rate: FxRate) -> Self {
        self.agreed_fx_rate = Some(rate);
        self
    }

    /// Sets the payment date.
    #[must_use]
    pub fn payment_date(mut self, date: Date) -> Self {
        self.payment_date = Some(date);
        self
    }

    /// Sets the fixing index.
    #[must_use]
    pub fn index(mut self, index: FxIndex) -> Self {
        self.index = Some(index);
        self
    }

    /// Builds the forward.
    ///
    /// # Errors
    ///
    /// Returns an error if a field is missing, the notional is negative, or the index,
    /// agreed rate and settlement currency do not describe the same currency pair.
    pub fn build(self) -> ProductResult<FxNonDeliverableForward> {
        let buy_sell = self.buy_sell.ok_or(ProductError::MissingField("buy_sell"))?;
        let settlement_currency = self
            .settlement_currency
            .ok_or(ProductError::MissingField("settlement_currency"))?;
        let notional = self.notional.ok_or(ProductError::MissingField("notional"))?;
        let agreed_fx_rate = self
            .agreed_fx_rate
            .ok_or(ProductError::MissingField("agreed_fx_rate"))?;
        let payment_date = self
            .payment_date
            .ok_or(ProductError::MissingField("payment_date"))?;
        let index = self.index.ok_or(ProductError::MissingField("index"))?;

        if notional < Decimal::ZERO {
            return Err(ProductError::invalid("notional", "must not be negative"));
        }

        let pair = index.currency_pair();
        if !pair.contains(settlement_currency) {
            return Err(ProductError::Inconsistent(
                "FxIndex and settlement currency are incompatible".into(),
            ));
        }
        let agreed_pair = agreed_fx_rate.pair();
        if !(pair == agreed_pair || pair.is_inverse(&agreed_pair)) {
            return Err(ProductError::Inconsistent(
                "FxIndex and agreed FX rate are incompatible".into(),
            ));
        }

        Ok(FxNonDeliverableForward {
            buy_sell,
            settlement_currency,
            notional,
            agreed_fx_rate,
            payment_date,
            index,
        })
    }
}

/// An NDF reduced to its signed settlement notional.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExpandedFxNonDeliverableForward {
    /// Signed notional in the settlement currency. Positive when bought.
    pub settlement_currency_notional: CurrencyAmount,
    /// The rate agreed at inception.
    pub agreed_fx_rate: FxRate,
    /// The payment date.
    pub payment_date: Date,
    /// The fixing index.
    pub index: FxIndex,
}

impl ExpandedFxNonDeliverableForward {
    /// Returns the settlement currency.
    pub fn settlement_currency(&self) -> Currency {
        self.settlement_currency_notional.currency()
    }
}

/// A trade in an [`FxNonDeliverableForward`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FxNonDeliverableForwardTrade {
    trade_id: Option<StandardId>,
    trade_date: Option<Date>,
    product: FxNonDeliverableForward,
}

impl FxNonDeliverableForwardTrade {
    /// Creates a trade.
    #[must_use]
    pub fn new(product: FxNonDeliverableForward) -> Self {
        Self {
            trade_id: None,
            trade_date: None,
            product,
        }
    }

    /// Returns a copy with the trade identifier set.
    #[must_use]
    pub fn with_trade_id(mut self, id: StandardId) -> Self {
        self.trade_id = Some(id);
        self
    }

    /// Returns a copy with the trade date set.
    #[must_use]
    pub fn with_trade_date(mut self, date: Date) -> Self {
        self.trade_date = Some(date);
        self
    }

    /// Returns the trade identifier, if any.
    pub fn trade_id(&self) -> Option<&StandardId> {
        self.trade_id.as_ref()
    }

    /// Returns the trade date, if any.
    pub fn trade_date(&self) -> Option<Date> {
        self.trade_date
    }

    /// Returns the traded product.
    pub fn product(&self) -> &FxNonDeliverableForward {
        &self.product
    }
}
