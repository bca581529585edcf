//! The closed set of calculation targets.

use serde::Serialize;
use std::fmt;

use tessera_core::types::{Currency, StandardId};

use crate::future_option::GenericFutureOptionTrade;
use crate::fx_ndf::FxNonDeliverableForwardTrade;

/// Discriminant of [`CalculationTarget`], used as the registry key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum TargetType {
    /// [`GenericFutureOptionTrade`].
    GenericFutureOption,
    /// [`FxNonDeliverableForwardTrade`].
    FxNdf,
}

impl TargetType {
    /// Every target type, in declaration order.
    pub const ALL: [TargetType; 2] = [TargetType::GenericFutureOption, TargetType::FxNdf];

    /// Returns the name of the trade type this discriminant stands for.
    pub fn trade_type_name(&self) -> &'static str {
        match self {
            TargetType::GenericFutureOption => "GenericFutureOptionTrade",
            TargetType::FxNdf => "FxNonDeliverableForwardTrade",
        }
    }
}

impl fmt::Display for TargetType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.trade_type_name())
    }
}

/// A trade that calculations can be performed on.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", content = "trade", rename_all = "kebab-case")]
pub enum CalculationTarget {
    /// A listed option on a future.
    GenericFutureOption(GenericFutureOptionTrade),
    /// An FX non-deliverable forward.
    FxNdf(FxNonDeliverableForwardTrade),
}

impl CalculationTarget {
    /// Returns the discriminant.
    pub fn target_type(&self) -> TargetType {
        match self {
            CalculationTarget::GenericFutureOption(_) => TargetType::GenericFutureOption,
            CalculationTarget::FxNdf(_) => TargetType::FxNdf,
        }
    }

    /// Returns the currency the target is priced in.
    pub fn priced_currency(&self) -> Currency {
        match self {
            CalculationTarget::GenericFutureOption(t) => t.product().currency(),
            CalculationTarget::FxNdf(t) => t.product().settlement_currency(),
        }
    }

    /// Returns the trade identifier, if the trade has one.
    pub fn trade_id(&self) -> Option<&StandardId> {
        match self {
            CalculationTarget::GenericFutureOption(t) => t.trade_id(),
            CalculationTarget::FxNdf(t) => t.trade_id(),
        }
    }
}

impl From<GenericFutureOptionTrade> for CalculationTarget {
    fn from(trade: GenericFutureOptionTrade) -> Self {
        CalculationTarget::GenericFutureOption(trade)
    }
}

impl From<FxNonDeliverableForwardTrade> for CalculationTarget {
    fn from(trade: FxNonDeliverableForwardTrade) -> Self {
        CalculationTarget::FxNdf(trade)
    }
}

/// A concrete trade type that is one variant of [`CalculationTarget`].
///
/// Typed calculation functions name their target through this trait, which lets the
/// registry key them by [`TargetType`] and project the enum back onto the trade.
pub trait TargetVariant: Send + Sync + 'static {
    /// The discriminant of this variant.
    const TARGET_TYPE: TargetType;

    /// Returns the trade if `target` is this variant.
    fn from_target(target: &CalculationTarget) -> Option<&Self>;
}

impl TargetVariant for GenericFutureOptionTrade {
    const TARGET_TYPE: TargetType = TargetType::GenericFutureOption;

    fn from_target(target: &CalculationTarget) -> Option<&Self> {
        match target {
            CalculationTarget::GenericFutureOption(t) => Some(t),
            _ => None,
        }
    }
}

impl TargetVariant for FxNonDeliverableForwardTrade {
    const TARGET_TYPE: TargetType = TargetType::FxNdf;

    fn from_target(target: &CalculationTarget) -> Option<&Self> {
        match target {
            CalculationTarget::FxNdf(t) => Some(t),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::future_option::GenericFutureOption;
    use crate::fx_index::FxIndex;
    use crate::fx_ndf::FxNonDeliverableForward;
    use rust_decimal_macros::dec;
    use tessera_core::types::{BuySell, CurrencyPair, Date, FxRate};

    fn future_option() -> GenericFutureOptionTrade {
        let product = GenericFutureOption::builder()
            .product_id(StandardId::of("OG-Future", "ED-OPT").unwrap())
            .currency(Currency::USD)
            .tick_size(dec!(0.005))
            .tick_value(dec!(12.5))
            .build()
            .unwrap();
        GenericFutureOptionTrade::builder()
            .trade_id(StandardId::of("trade", "1").unwrap())
            .security_id(StandardId::of("OG-Ticker", "ED-OPT-MAR26").unwrap())
            .product(product)
            .quantity(10)
            .build()
            .unwrap()
    }

    fn ndf() -> FxNonDeliverableForwardTrade {
        let pair = CurrencyPair::of(Currency::USD, Currency::KRW).unwrap();
        let product = FxNonDeliverableForward::builder()
            .buy_sell(BuySell::Buy)
            .settlement_currency(Currency::USD)
            .notional(dec!(5_000_000))
            .agreed_fx_rate(FxRate::of(pair, dec!(1340)).unwrap())
            .payment_date(Date::from_ymd(2026, 12, 16).unwrap())
            .index(FxIndex::of("USD/KRW-KFTC18", pair).unwrap())
            .build()
            .unwrap();
        FxNonDeliverableForwardTrade::new(product)
    }

    #[test]
    fn test_target_type_and_currency() {
        let fo = CalculationTarget::from(future_option());
        assert_eq!(fo.target_type(), TargetType::GenericFutureOption);
        assert_eq!(fo.priced_currency(), Currency::USD);
        assert_eq!(fo.trade_id().map(ToString::to_string).as_deref(), Some("trade~1"));

        let fx = CalculationTarget::from(ndf());
        assert_eq!(fx.target_type(), TargetType::FxNdf);
        assert_eq!(fx.priced_currency(), Currency::USD);
        assert!(fx.trade_id().is_none());
    }

    #[test]
    fn test_projection() {
        let fo = CalculationTarget::from(future_option());
        assert!(GenericFutureOptionTrade::from_target(&fo).is_some());
        assert!(FxNonDeliverableForwardTrade::from_target(&fo).is_none());
    }

    #[test]
    fn test_all_covers_every_variant() {
        let targets = [
            CalculationTarget::from(future_option()),
            CalculationTarget::from(ndf()),
        ];
        for target in &targets {
            assert!(TargetType::ALL.contains(&target.target_type()));
        }
    }

    #[test]
    fn test_display() {
        assert_eq!(
            TargetType::GenericFutureOption.to_string(),
            "GenericFutureOptionTrade"
        );
        assert_eq!(TargetType::FxNdf.to_string(), "FxNonDeliverableForwardTrade");
    }

    #[test]
    fn test_serialize_tagged() {
        let json = serde_json::to_value(CalculationTarget::from(future_option())).unwrap();
        assert_eq!(json["type"], "generic-future-option");
        assert_eq!(json["trade"]["quantity"], 10);
    }
}
