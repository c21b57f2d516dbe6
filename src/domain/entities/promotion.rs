//! # Promotion Entity
//!
//! A discount rule scoped to one source.
//!
//! Promotions arrive as scraped text: every field is optional and the
//! discount magnitude may be malformed. Unusable discount data makes a
//! promotion *inert*: it contributes zero discount during price
//! resolution, and it is never an error.
//!
//! # Examples
//!
//! ```
//! use skyfare::domain::entities::{DiscountKind, Promotion};
//!
//! let promo = Promotion::builder()
//!     .title("Festive Sale")
//!     .code("FLY10")
//!     .discount_kind("Percentage")
//!     .discount_value("10")
//!     .build();
//!
//! assert_eq!(promo.kind(), DiscountKind::Percentage);
//! assert!(promo.magnitude().is_some());
//! ```

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Classification of a promotion's discount kind label.
///
/// Labels are matched by case-insensitive substring, mirroring the loose
/// text the sources publish: any label containing `percent` is a
/// percentage discount, any label containing `flat` is a flat amount, and
/// everything else (including a missing label) is unrecognized and inert.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DiscountKind {
    /// Percentage of the base price.
    Percentage,
    /// Flat amount off the base price.
    Flat,
    /// Unknown label; contributes zero discount.
    Unrecognized,
}

impl DiscountKind {
    /// Classifies a raw discount kind label.
    #[must_use]
    pub fn classify(label: &str) -> Self {
        let label = label.to_lowercase();
        if label.contains("percent") {
            Self::Percentage
        } else if label.contains("flat") {
            Self::Flat
        } else {
            Self::Unrecognized
        }
    }
}

impl fmt::Display for DiscountKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Percentage => write!(f, "percentage"),
            Self::Flat => write!(f, "flat"),
            Self::Unrecognized => write!(f, "unrecognized"),
        }
    }
}

/// A discount rule published by one source.
///
/// All fields are optional because they are scraped from marketing pages;
/// a promotion missing its kind or magnitude is inert, not invalid.
/// Immutable once produced by an adapter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct Promotion {
    /// Marketing title.
    title: Option<String>,
    /// Machine promo code.
    code: Option<String>,
    /// Human-readable description.
    description: Option<String>,
    /// Raw discount kind label ("Percentage", "Flat 150 off", ...).
    discount_kind: Option<String>,
    /// Raw discount magnitude text; may be malformed.
    discount_value: Option<String>,
    /// Sponsor identifier (bank or card partner).
    sponsor: Option<String>,
}

impl Promotion {
    /// Returns a builder for a promotion.
    #[must_use]
    pub fn builder() -> PromotionBuilder {
        PromotionBuilder::default()
    }

    /// Returns the marketing title.
    #[inline]
    #[must_use]
    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    /// Returns the machine promo code.
    #[inline]
    #[must_use]
    pub fn code(&self) -> Option<&str> {
        self.code.as_deref()
    }

    /// Returns the human-readable description.
    #[inline]
    #[must_use]
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Returns the raw discount kind label.
    #[inline]
    #[must_use]
    pub fn discount_kind(&self) -> Option<&str> {
        self.discount_kind.as_deref()
    }

    /// Returns the raw discount magnitude text.
    #[inline]
    #[must_use]
    pub fn discount_value(&self) -> Option<&str> {
        self.discount_value.as_deref()
    }

    /// Returns the sponsor identifier.
    #[inline]
    #[must_use]
    pub fn sponsor(&self) -> Option<&str> {
        self.sponsor.as_deref()
    }

    /// Classifies the discount kind label.
    ///
    /// A missing label classifies as [`DiscountKind::Unrecognized`].
    #[must_use]
    pub fn kind(&self) -> DiscountKind {
        self.discount_kind
            .as_deref()
            .map_or(DiscountKind::Unrecognized, DiscountKind::classify)
    }

    /// Parses the discount magnitude.
    ///
    /// Returns `None` when the magnitude is missing or not wholly numeric.
    #[must_use]
    pub fn magnitude(&self) -> Option<Decimal> {
        self.discount_value.as_deref()?.trim().parse().ok()
    }

    /// Returns true if this promotion can never change a price.
    ///
    /// Inert promotions have an unrecognized kind or an unusable
    /// magnitude. They are skipped during price resolution, not rejected.
    #[must_use]
    pub fn is_inert(&self) -> bool {
        self.kind() == DiscountKind::Unrecognized || self.magnitude().is_none()
    }
}

impl fmt::Display for Promotion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Promotion({} {} {})",
            self.code.as_deref().unwrap_or("-"),
            self.discount_kind.as_deref().unwrap_or("-"),
            self.discount_value.as_deref().unwrap_or("-"),
        )
    }
}

/// Builder for [`Promotion`].
#[derive(Debug, Clone, Default)]
pub struct PromotionBuilder {
    promotion: Promotion,
}

impl PromotionBuilder {
    /// Sets the marketing title.
    #[must_use]
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.promotion.title = Some(title.into());
        self
    }

    /// Sets the machine promo code.
    #[must_use]
    pub fn code(mut self, code: impl Into<String>) -> Self {
        self.promotion.code = Some(code.into());
        self
    }

    /// Sets the human-readable description.
    #[must_use]
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.promotion.description = Some(description.into());
        self
    }

    /// Sets the raw discount kind label.
    #[must_use]
    pub fn discount_kind(mut self, kind: impl Into<String>) -> Self {
        self.promotion.discount_kind = Some(kind.into());
        self
    }

    /// Sets the raw discount magnitude text.
    #[must_use]
    pub fn discount_value(mut self, value: impl Into<String>) -> Self {
        self.promotion.discount_value = Some(value.into());
        self
    }

    /// Sets the sponsor identifier.
    #[must_use]
    pub fn sponsor(mut self, sponsor: impl Into<String>) -> Self {
        self.promotion.sponsor = Some(sponsor.into());
        self
    }

    /// Builds the promotion.
    #[must_use]
    pub fn build(self) -> Promotion {
        self.promotion
    }
}
