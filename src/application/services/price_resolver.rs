//! # Price Resolver
//!
//! Best-price resolution for one offering against one source's promotions.
//!
//! This module provides the [`PriceResolver`], a pure, deterministic
//! service with no I/O: given a base price and the promotions one source
//! published, it finds the single promotion that yields the lowest
//! effective price. There is exactly one resolution algorithm; sources
//! differ only in the promotions they feed it.

use crate::domain::entities::{DiscountKind, Promotion};
use crate::domain::value_objects::Price;
use serde::{Deserialize, Serialize};
use std::fmt;

/// The resolved price for one (offering, promotion list) pair.
///
/// # Invariants
///
/// - `best_price <= original_price`
/// - `best_price` is never negative: a discount overshooting the base
///   price clamps to zero
/// - `savings == original_price - best_price`
/// - `applied_promotion` is present exactly when some promotion improved
///   on the original price
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PriceResolution {
    /// The offering's base price.
    original_price: Price,
    /// The lowest achievable price.
    best_price: Price,
    /// The promotion that achieved the best price, if any improved on it.
    #[serde(rename = "appliedOffer")]
    applied_promotion: Option<Promotion>,
    /// Amount saved relative to the base price.
    savings: Price,
}

impl PriceResolution {
    pub(crate) fn new(
        original_price: Price,
        best_price: Price,
        applied_promotion: Option<Promotion>,
    ) -> Self {
        Self {
            original_price,
            best_price,
            applied_promotion,
            savings: original_price.saturating_sub(best_price),
        }
    }

    /// Returns the offering's base price.
    #[inline]
    #[must_use]
    pub fn original_price(&self) -> Price {
        self.original_price
    }

    /// Returns the lowest achievable price.
    #[inline]
    #[must_use]
    pub fn best_price(&self) -> Price {
        self.best_price
    }

    /// Returns the promotion that achieved the best price, if any.
    #[inline]
    #[must_use]
    pub fn applied_promotion(&self) -> Option<&Promotion> {
        self.applied_promotion.as_ref()
    }

    /// Returns the amount saved relative to the base price.
    #[inline]
    #[must_use]
    pub fn savings(&self) -> Price {
        self.savings
    }

    /// Returns true if some promotion improved on the base price.
    #[must_use]
    pub fn has_discount(&self) -> bool {
        self.applied_promotion.is_some()
    }
}

impl fmt::Display for PriceResolution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}", self.original_price, self.best_price)?;
        if let Some(promotion) = &self.applied_promotion {
            write!(f, " via {promotion}")?;
        }
        Ok(())
    }
}

/// Pure best-price resolution over a promotion list.
///
/// # Algorithm
///
/// Starting from the base price, each promotion is evaluated in list
/// order. A promotion whose kind label contains `percent` takes
/// `base * magnitude / 100` off; one whose label contains `flat` takes
/// the magnitude itself off; anything else is inert. The candidate price
/// floors at zero. A strictly-lower candidate becomes the new best, so
/// the *first* promotion reaching a given minimal price wins and later
/// ties never overwrite it.
///
/// Promotions with missing or unparseable discount data contribute
/// nothing; they are skipped, never reported as errors.
///
/// # Examples
///
/// ```
/// use skyfare::application::services::PriceResolver;
/// use skyfare::domain::entities::Promotion;
/// use skyfare::domain::value_objects::Price;
///
/// let promo = Promotion::builder()
///     .code("FLY10")
///     .discount_kind("percent")
///     .discount_value("10")
///     .build();
///
/// let resolution = PriceResolver::new().resolve(Price::new(1000.0).unwrap(), &[promo]);
/// assert_eq!(resolution.best_price(), Price::new(900.0).unwrap());
/// assert_eq!(resolution.savings(), Price::new(100.0).unwrap());
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct PriceResolver;

impl PriceResolver {
    /// Creates a new price resolver.
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Resolves the best achievable price for `base_price` under
    /// `promotions`.
    #[must_use]
    pub fn resolve(&self, base_price: Price, promotions: &[Promotion]) -> PriceResolution {
        let mut best = base_price;
        let mut applied = None;

        for promotion in promotions {
            let Some(discount) = Self::discount(base_price, promotion) else {
                continue;
            };
            let candidate = base_price.saturating_sub(discount);
            if candidate < best {
                best = candidate;
                applied = Some(promotion.clone());
            }
        }

        PriceResolution::new(base_price, best, applied)
    }

    /// Returns the discount a promotion takes off `base_price`, or `None`
    /// when the promotion cannot be applied at all.
    ///
    /// Unrecognized kinds yield a zero discount rather than `None`: the
    /// promotion is inert but well-formed. Negative or overflowing
    /// magnitudes are treated as inert.
    fn discount(base_price: Price, promotion: &Promotion) -> Option<Price> {
        let magnitude = promotion.magnitude()?;
        match promotion.kind() {
            DiscountKind::Percentage => base_price.percentage(magnitude),
            DiscountKind::Flat => Price::from_decimal(magnitude).ok(),
            DiscountKind::Unrecognized => Some(Price::ZERO),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn price(value: f64) -> Price {
        Price::new(value).unwrap()
    }

    fn percent(code: &str, value: &str) -> Promotion {
        Promotion::builder()
            .code(code)
            .discount_kind("percent")
            .discount_value(value)
            .build()
    }

    fn flat(code: &str, value: &str) -> Promotion {
        Promotion::builder()
            .code(code)
            .discount_kind("flat")
            .discount_value(value)
            .build()
    }

    mod resolution {
        use super::*;

        #[test]
        fn percent_discount() {
            let resolution = PriceResolver::new().resolve(price(1000.0), &[percent("P10", "10")]);
            assert_eq!(resolution.best_price(), price(900.0));
            assert_eq!(resolution.savings(), price(100.0));
            assert_eq!(
                resolution.applied_promotion().and_then(Promotion::code),
                Some("P10")
            );
        }

        #[test]
        fn flat_discount() {
            let resolution = PriceResolver::new().resolve(price(1000.0), &[flat("F150", "150")]);
            assert_eq!(resolution.best_price(), price(850.0));
            assert_eq!(resolution.savings(), price(150.0));
        }

        #[test]
        fn picks_deepest_discount() {
            let promotions = vec![percent("P5", "5"), flat("F200", "200"), percent("P10", "10")];
            let resolution = PriceResolver::new().resolve(price(1000.0), &promotions);
            assert_eq!(resolution.best_price(), price(800.0));
            assert_eq!(
                resolution.applied_promotion().and_then(Promotion::code),
                Some("F200")
            );
        }

        #[test]
        fn no_promotions_keeps_base() {
            let resolution = PriceResolver::new().resolve(price(1000.0), &[]);
            assert_eq!(resolution.best_price(), price(1000.0));
            assert_eq!(resolution.savings(), Price::ZERO);
            assert!(!resolution.has_discount());
        }

        #[test]
        fn zero_base_price() {
            let resolution = PriceResolver::new().resolve(Price::ZERO, &[percent("P10", "10")]);
            assert_eq!(resolution.best_price(), Price::ZERO);
            assert!(!resolution.has_discount());
        }
    }

    mod inert_promotions {
        use super::*;

        #[test]
        fn unparseable_magnitude() {
            let resolution = PriceResolver::new().resolve(price(1000.0), &[percent("BAD", "abc")]);
            assert_eq!(resolution.best_price(), price(1000.0));
            assert!(resolution.applied_promotion().is_none());
        }

        #[test]
        fn missing_magnitude() {
            let promotion = Promotion::builder().discount_kind("percent").build();
            let resolution = PriceResolver::new().resolve(price(1000.0), &[promotion]);
            assert_eq!(resolution.best_price(), price(1000.0));
        }

        #[test]
        fn missing_kind() {
            let promotion = Promotion::builder().discount_value("10").build();
            let resolution = PriceResolver::new().resolve(price(1000.0), &[promotion]);
            assert_eq!(resolution.best_price(), price(1000.0));
        }

        #[test]
        fn unrecognized_kind() {
            let promotion = Promotion::builder()
                .discount_kind("cashback")
                .discount_value("500")
                .build();
            let resolution = PriceResolver::new().resolve(price(1000.0), &[promotion]);
            assert_eq!(resolution.best_price(), price(1000.0));
            assert!(resolution.applied_promotion().is_none());
        }

        #[test]
        fn negative_magnitude() {
            let resolution = PriceResolver::new()
                .resolve(price(1000.0), &[flat("NEG", "-50"), percent("NEGP", "-10")]);
            assert_eq!(resolution.best_price(), price(1000.0));
            assert!(resolution.applied_promotion().is_none());
        }

        #[test]
        fn inert_promotions_do_not_mask_usable_ones() {
            let promotions = vec![percent("BAD", "abc"), flat("F100", "100")];
            let resolution = PriceResolver::new().resolve(price(1000.0), &promotions);
            assert_eq!(resolution.best_price(), price(900.0));
            assert_eq!(
                resolution.applied_promotion().and_then(Promotion::code),
                Some("F100")
            );
        }
    }

    mod tie_break {
        use super::*;

        #[test]
        fn first_promotion_reaching_best_price_wins() {
            // Both yield 900 for a 1000 base; the earlier one must win.
            let promotions = vec![percent("FIRST", "10"), flat("SECOND", "100")];
            let resolution = PriceResolver::new().resolve(price(1000.0), &promotions);
            assert_eq!(resolution.best_price(), price(900.0));
            assert_eq!(
                resolution.applied_promotion().and_then(Promotion::code),
                Some("FIRST")
            );
        }

        #[test]
        fn later_strict_improvement_still_wins() {
            let promotions = vec![percent("FIRST", "10"), flat("SECOND", "101")];
            let resolution = PriceResolver::new().resolve(price(1000.0), &promotions);
            assert_eq!(
                resolution.applied_promotion().and_then(Promotion::code),
                Some("SECOND")
            );
        }
    }

    mod clamping {
        use super::*;

        #[test]
        fn overshooting_flat_discount_clamps_to_zero() {
            let resolution = PriceResolver::new().resolve(price(1000.0), &[flat("BIG", "1500")]);
            assert_eq!(resolution.best_price(), Price::ZERO);
            assert_eq!(resolution.savings(), price(1000.0));
            assert!(resolution.has_discount());
        }

        #[test]
        fn overshooting_percentage_clamps_to_zero() {
            let resolution = PriceResolver::new().resolve(price(1000.0), &[percent("P150", "150")]);
            assert_eq!(resolution.best_price(), Price::ZERO);
        }
    }

    mod serde_format {
        use super::*;

        #[test]
        fn serializes_wire_field_names() {
            let resolution = PriceResolver::new().resolve(price(1000.0), &[percent("P10", "10")]);
            let json = serde_json::to_value(&resolution).unwrap();
            assert!(json.get("originalPrice").is_some());
            assert!(json.get("bestPrice").is_some());
            assert!(json.get("appliedOffer").is_some());
            assert!(json.get("savings").is_some());
        }

        #[test]
        fn applied_offer_null_without_discount() {
            let resolution = PriceResolver::new().resolve(price(1000.0), &[]);
            let json = serde_json::to_value(&resolution).unwrap();
            assert!(json.get("appliedOffer").unwrap().is_null());
        }
    }

    mod properties {
        use super::*;
        use proptest::prelude::*;

        fn arb_promotion() -> impl Strategy<Value = Promotion> {
            let kinds = prop_oneof![
                Just("percent".to_string()),
                Just("Percentage Off".to_string()),
                Just("flat".to_string()),
                Just("FLAT".to_string()),
                Just("cashback".to_string()),
            ];
            let values = prop_oneof![
                Just("10".to_string()),
                Just("150".to_string()),
                Just("50.5".to_string()),
                Just("abc".to_string()),
                Just("-20".to_string()),
                Just("2000000".to_string()),
            ];
            (proptest::option::of(kinds), proptest::option::of(values)).prop_map(
                |(kind, value)| {
                    let mut builder = Promotion::builder();
                    if let Some(kind) = kind {
                        builder = builder.discount_kind(kind);
                    }
                    if let Some(value) = value {
                        builder = builder.discount_value(value);
                    }
                    builder.build()
                },
            )
        }

        proptest! {
            #[test]
            fn resolution_invariants(
                base in 0.0f64..1_000_000.0,
                promotions in proptest::collection::vec(arb_promotion(), 0..8),
            ) {
                let base = Price::new(base).unwrap();
                let resolution = PriceResolver::new().resolve(base, &promotions);

                prop_assert_eq!(resolution.original_price(), base);
                prop_assert!(resolution.best_price() <= base);
                prop_assert_eq!(
                    resolution.savings(),
                    base.saturating_sub(resolution.best_price())
                );
                if resolution.applied_promotion().is_none() {
                    prop_assert_eq!(resolution.best_price(), base);
                } else {
                    prop_assert!(resolution.best_price() < base);
                }
            }
        }
    }
}
