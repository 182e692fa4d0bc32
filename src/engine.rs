//! Recursive Karatsuba multiplication with step recording.

use num_bigint::BigUint;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::codec;
use crate::error::KaratsubaError;
use crate::trace::{Step, Trace};

/// Everything one top-level multiplication produces: the operands as
/// supplied, the product in both representations, and the ordered step
/// log.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KaratsubaResult {
    pub original_x: String,
    pub original_y: String,
    pub radix: u32,
    #[serde(with = "crate::trace::decimal_string")]
    pub decimal_result: BigUint,
    pub base_result: String,
    pub steps: Trace,
}

/// Multiplies two digit strings in the given radix, recording every
/// recursive step.
///
/// `radix` arrives as the raw selector text. All validation happens up
/// front in the codec: either a complete [`KaratsubaResult`] comes back
/// or an error does, before any trace record was built.
pub fn compute_karatsuba(
    x: &str,
    y: &str,
    radix: &str,
) -> Result<KaratsubaResult, KaratsubaError> {
    let radix = codec::parse_radix(radix)?;
    let x_value = codec::decode(x, radix)?;
    let y_value = codec::decode(y, radix)?;
    debug!(x, y, radix, "multiplying");

    let mut trace = Trace::new();
    let product = multiply(&x_value, &y_value, radix, 0, &mut trace);
    let base_result = codec::encode(&product, radix);
    debug!(result = %base_result, steps = trace.len(), "multiplication finished");

    Ok(KaratsubaResult {
        original_x: x.to_string(),
        original_y: y.to_string(),
        radix,
        decimal_result: product,
        base_result,
        steps: trace,
    })
}

/// One level of the recursion: split, three sub-products, combine.
///
/// Records are emitted in pre-order: the parent's split, then the three
/// child subtrees in z2, z0, digit-sum order, then the parent's combine.
/// A replaying consumer depends on exactly this order.
///
/// The radix must already be validated, see [`codec::parse_radix`].
pub fn multiply(
    x: &BigUint,
    y: &BigUint,
    radix: u32,
    depth: usize,
    trace: &mut Trace,
) -> BigUint {
    let big_radix = BigUint::from(radix);

    // Terminal state: both operands are single digits in this radix.
    if x < &big_radix && y < &big_radix {
        let result = x * y;
        trace.push(Step::BaseCase {
            x: codec::encode(x, radix),
            y: codec::encode(y, radix),
            result: codec::encode(&result, radix),
            decimal: result.clone(),
            depth,
        });
        return result;
    }

    let size = codec::digit_length(x, radix).max(codec::digit_length(y, radix));
    let m = size.div_ceil(2);
    assert!(m >= 1, "split width must cover at least one digit");
    let base_power = big_radix.pow(m as u32);

    // Exact decomposition: x == high1 * base_power + low1, same for y.
    let high1 = x / &base_power;
    let low1 = x % &base_power;
    let high2 = y / &base_power;
    let low2 = y % &base_power;

    trace.push(Step::Split {
        x: codec::encode(x, radix),
        y: codec::encode(y, radix),
        m,
        high1: codec::encode(&high1, radix),
        low1: codec::encode(&low1, radix),
        high2: codec::encode(&high2, radix),
        low2: codec::encode(&low2, radix),
        depth,
    });

    let z2 = multiply(&high1, &high2, radix, depth + 1, trace);
    let z0 = multiply(&low1, &low2, radix, depth + 1, trace);
    let z_sum = multiply(&(&high1 + &low1), &(&high2 + &low2), radix, depth + 1, trace);
    // (h1 + l1)(h2 + l2) = z2 + z0 + h1*l2 + h2*l1, so this never underflows.
    let z1 = z_sum - &z2 - &z0;

    let result = &z2 * (&base_power * &base_power) + &z1 * &base_power + &z0;

    trace.push(Step::Combine {
        z2: codec::encode(&z2, radix),
        z1: codec::encode(&z1, radix),
        z0: codec::encode(&z0, radix),
        base_power: codec::encode(&base_power, radix),
        result: codec::encode(&result, radix),
        decimal: result.clone(),
        depth,
    });

    result
}
