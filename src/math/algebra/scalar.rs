/* ************************************************************************ **
** This file is part of mathkern, and is licensed under EITHER the MIT      **
** license or the Apache 2.0 license, at your option.                       **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

/// `|x|^p` carrying the sign of `x`.
///
/// Unlike `f64::powf`, this is defined (and odd) for negative `x`, which is
/// what odd roots of negative numbers need.
pub fn signed_pow(x: f64, p: f64) -> f64 {
    let magnitude = x.abs().powf(p);
    if x < 0.0 { -magnitude } else { magnitude }
}

/// The real `n`th root of `x`.
///
/// For odd `n` this is defined everywhere.  For even `n` a negative `x` has
/// no real root, and neither does anything for `n == 0`.
pub fn real_root(x: f64, n: u32) -> Option<f64> {
    match n {
        0 => None,
        1 => Some(x),
        2 if x < 0.0 => None,
        2 => Some(x.sqrt()),
        3 => Some(x.cbrt()),
        _ if n % 2 == 1 => Some(signed_pow(x, 1.0 / f64::from(n))),
        _ if x < 0.0 => None,
        _ => Some(x.powf(1.0 / f64::from(n))),
    }
}

/// Real cube root, defined for negative `x`.
#[inline]
pub fn signed_cbrt(x: f64) -> f64 { x.cbrt() }

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn signed_pow_is_odd() {
        assert_eq!(signed_pow(-8.0, 1.0 / 3.0), -signed_pow(8.0, 1.0 / 3.0));
        assert_close!(signed_pow(-8.0, 1.0 / 3.0), -2.0);
        assert_eq!(signed_pow(-3.0, 2.0), -9.0);
        assert_eq!(signed_pow(0.0, 0.5), 0.0);
    }

    #[test]
    fn roots_of_negative_numbers() {
        assert_eq!(signed_cbrt(-27.0), -3.0);
        assert_eq!(real_root(-27.0, 3), Some(-3.0));
        assert_eq!(real_root(-32.0, 1), Some(-32.0));
        assert_close!(real_root(-32.0, 5).unwrap(), -2.0);
        assert_eq!(real_root(-16.0, 4), None);
        assert_eq!(real_root(-4.0, 2), None);
        assert_close!(real_root(16.0, 4).unwrap(), 2.0);
        assert_eq!(real_root(9.0, 2), Some(3.0));
        assert_eq!(real_root(9.0, 0), None);
    }
}
