use crate::costing::calculator::round2;
use crate::costing::models::{PricingInput, PricingResult, SaleMode};

/// Derive sale price, profit and margin from COGS
///
/// Margin is 0 whenever the sale price is not positive.
pub fn compute_pricing(input: &PricingInput) -> PricingResult {
    let sale_price = match input.sale_mode {
        SaleMode::Markup => input.cogs * (1.0 + input.markup_percent / 100.0),
        SaleMode::Manual => input.manual_sale_price_uah,
    };
    let profit = sale_price - input.cogs;
    let margin_percent = if sale_price > 0.0 {
        (profit / sale_price) * 100.0
    } else {
        0.0
    };

    PricingResult {
        sale_price: round2(sale_price),
        profit: round2(profit),
        margin_percent: round2(margin_percent),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < 1e-9,
            "expected {}, got {}",
            expected,
            actual
        );
    }

    fn markup(cogs: f64, markup_percent: f64) -> PricingInput {
        PricingInput {
            cogs,
            sale_mode: SaleMode::Markup,
            markup_percent,
            manual_sale_price_uah: 0.0,
        }
    }

    #[test]
    fn test_markup_pricing() {
        let result = compute_pricing(&markup(146.22, 30.0));

        assert_close(result.sale_price, 190.09);
        assert_close(result.profit, 43.87);
        assert_close(result.margin_percent, 23.08);
    }

    #[test]
    fn test_manual_pricing() {
        let result = compute_pricing(&PricingInput {
            cogs: 146.22,
            sale_mode: SaleMode::Manual,
            markup_percent: 30.0,
            manual_sale_price_uah: 150.0,
        });

        assert_close(result.sale_price, 150.0);
        assert_close(result.profit, 3.78);
        assert_close(result.margin_percent, 2.52);
    }

    #[test]
    fn test_manual_price_below_cogs() {
        let result = compute_pricing(&PricingInput {
            cogs: 100.0,
            sale_mode: SaleMode::Manual,
            markup_percent: 0.0,
            manual_sale_price_uah: 80.0,
        });

        assert_close(result.profit, -20.0);
        assert_close(result.margin_percent, -25.0);
    }

    #[test]
    fn test_zero_sale_price_has_zero_margin() {
        let result = compute_pricing(&markup(146.22, -100.0));

        assert_close(result.sale_price, 0.0);
        assert_close(result.profit, -146.22);
        assert_eq!(result.margin_percent, 0.0);
    }

    #[test]
    fn test_zero_cogs_zero_price() {
        let result = compute_pricing(&markup(0.0, 30.0));

        assert_eq!(result, PricingResult::default());
    }
}
