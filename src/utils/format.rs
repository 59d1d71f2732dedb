use crate::domain::model::FormatOptions;
use rust_decimal::{Decimal, RoundingStrategy};

/// Row identifier: the total count left-zero-padded to at least `pad_width`
/// digits, an underscore, and the zero-based row index.
pub fn row_id(total: u64, index: usize, pad_width: usize) -> String {
    format!("{:0>width$}_{}", total, index, width = pad_width)
}

/// Renders a coordinate for the submission file: round to the configured
/// number of fractional digits (half-to-even, the same midpoint behavior as
/// binary-float rounding), print with exactly that many digits, and prepend
/// the text-guard marker.
pub fn guarded_decimal(value: Decimal, opts: &FormatOptions) -> String {
    let rounded =
        value.round_dp_with_strategy(opts.decimals, RoundingStrategy::MidpointNearestEven);
    format!(
        "{}{:.prec$}",
        opts.text_guard,
        rounded,
        prec = opts.decimals as usize
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn row_id_pads_to_minimum_width() {
        assert_eq!(row_id(5, 0, 3), "005_0");
        assert_eq!(row_id(5, 4, 3), "005_4");
        assert_eq!(row_id(42, 10, 3), "042_10");
    }

    #[test]
    fn row_id_does_not_truncate_wide_counts() {
        assert_eq!(row_id(1234, 0, 3), "1234_0");
    }

    #[test]
    fn rounds_excess_digits() {
        let opts = FormatOptions::default();
        assert_eq!(guarded_decimal(dec("10.123456789"), &opts), "s10.123457");
    }

    #[test]
    fn pads_short_values_to_six_digits() {
        let opts = FormatOptions::default();
        assert_eq!(guarded_decimal(dec("20"), &opts), "s20.000000");
        assert_eq!(guarded_decimal(dec("0.1"), &opts), "s0.100000");
        assert_eq!(guarded_decimal(dec("-5"), &opts), "s-5.000000");
    }

    #[test]
    fn midpoints_round_to_even() {
        let opts = FormatOptions::default();
        assert_eq!(guarded_decimal(dec("0.1234565"), &opts), "s0.123456");
        assert_eq!(guarded_decimal(dec("0.1234575"), &opts), "s0.123458");
    }

    #[test]
    fn honors_custom_options() {
        let opts = FormatOptions {
            decimals: 2,
            text_guard: 't',
            id_pad_width: 3,
        };
        assert_eq!(guarded_decimal(dec("3.14159"), &opts), "t3.14");
    }
}
