//! AR order selection.

use sensorcast_config::{DEFAULT_MAX_ORDER, DEFAULT_MIN_ORDER};

use crate::error::{EngineError, EngineResult};

/// Chooses the AR order from the forecast horizon.
///
/// The order starts at the horizon and is clamped to
/// `[min_order, max_order]`. Short horizons still get enough order to
/// capture periodic structure; long horizons are kept numerically stable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OrderPolicy {
    min_order: usize,
    max_order: usize,
}

impl Default for OrderPolicy {
    fn default() -> Self {
        Self {
            min_order: DEFAULT_MIN_ORDER,
            max_order: DEFAULT_MAX_ORDER,
        }
    }
}

impl OrderPolicy {
    /// Creates a policy with custom bounds.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidOrderBounds`] if `min_order` is zero or
    /// exceeds `max_order`.
    pub fn new(min_order: usize, max_order: usize) -> EngineResult<Self> {
        if min_order == 0 || min_order > max_order {
            return Err(EngineError::InvalidOrderBounds {
                min: min_order,
                max: max_order,
            });
        }
        Ok(Self {
            min_order,
            max_order,
        })
    }

    /// Lower bound.
    pub fn min_order(&self) -> usize {
        self.min_order
    }

    /// Upper bound.
    pub fn max_order(&self) -> usize {
        self.max_order
    }

    /// AR order for a horizon of `horizon` samples.
    pub fn order_for(&self, horizon: usize) -> usize {
        horizon.clamp(self.min_order, self.max_order)
    }
}

/// AR order for `horizon` under the default `[200, 1000]` bounds.
pub fn order_for(horizon: usize) -> usize {
    OrderPolicy::default().order_for(horizon)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_default_bounds() {
        assert_eq!(order_for(0), 200);
        assert_eq!(order_for(50), 200);
        assert_eq!(order_for(200), 200);
        assert_eq!(order_for(201), 201);
        assert_eq!(order_for(999), 999);
        assert_eq!(order_for(1000), 1000);
        assert_eq!(order_for(5760), 1000);
    }

    #[test]
    fn test_custom_bounds() {
        let policy = OrderPolicy::new(2, 8).unwrap();
        assert_eq!(policy.order_for(1), 2);
        assert_eq!(policy.order_for(5), 5);
        assert_eq!(policy.order_for(80), 8);
    }

    #[test]
    fn test_invalid_bounds() {
        assert!(matches!(
            OrderPolicy::new(0, 10),
            Err(EngineError::InvalidOrderBounds { min: 0, max: 10 })
        ));
        assert!(OrderPolicy::new(11, 10).is_err());
        assert!(OrderPolicy::new(10, 10).is_ok());
    }

    proptest! {
        #[test]
        fn prop_order_clamped(horizon in 0usize..20_000) {
            let order = order_for(horizon);
            prop_assert!((200..=1000).contains(&order));
            if horizon > 200 && horizon < 1000 {
                prop_assert_eq!(order, horizon);
            }
        }
    }
}
