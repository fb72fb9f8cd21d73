//! Property-based tests for rational arithmetic and cell parsing.

#[cfg(test)]
mod tests {
    use num_traits::{One, Zero};
    use proptest::prelude::*;

    use crate::{Integer, Rational};

    // Strategy for generating small integers
    fn small_int() -> impl Strategy<Value = i64> {
        -1000i64..1000i64
    }

    // Strategy for generating non-zero integers
    fn non_zero_int() -> impl Strategy<Value = i64> {
        prop_oneof![(-1000i64..=-1i64), (1i64..=1000i64)]
    }

    fn rational() -> impl Strategy<Value = Rational> {
        (small_int(), non_zero_int()).prop_map(|(n, d)| Rational::from_i64(n, d).unwrap())
    }

    fn non_zero_rational() -> impl Strategy<Value = Rational> {
        (non_zero_int(), non_zero_int()).prop_map(|(n, d)| Rational::from_i64(n, d).unwrap())
    }

    proptest! {
        // Normalization

        #[test]
        fn construction_normalizes(n in small_int(), d in non_zero_int()) {
            let r = Rational::from_i64(n, d).unwrap();
            let num = r.numerator();
            let den = r.denominator();
            prop_assert!(den.signum() > 0);
            prop_assert!(num.gcd(&den).is_one());
            if n == 0 {
                prop_assert!(den.is_one());
            }
        }

        #[test]
        fn construction_preserves_value(n in small_int(), d in non_zero_int()) {
            // n/d == num/den  <=>  n * den == num * d
            let r = Rational::from_i64(n, d).unwrap();
            prop_assert_eq!(
                Integer::new(n) * r.denominator(),
                r.numerator() * Integer::new(d)
            );
        }

        // Field axioms

        #[test]
        fn add_commutative(a in rational(), b in rational()) {
            prop_assert_eq!(&a + &b, &b + &a);
        }

        #[test]
        fn mul_commutative(a in rational(), b in rational()) {
            prop_assert_eq!(&a * &b, &b * &a);
        }

        #[test]
        fn distributive(a in rational(), b in rational(), c in rational()) {
            prop_assert_eq!(&a * &(&b + &c), &a * &b + &a * &c);
        }

        #[test]
        fn sub_is_add_neg(a in rational(), b in rational()) {
            prop_assert_eq!(&a - &b, &a + &(-&b));
        }

        #[test]
        fn multiplicative_inverse(a in non_zero_rational()) {
            let product = &a * &a.recip().unwrap();
            prop_assert!(product.is_one());
        }

        #[test]
        fn div_then_mul_is_identity(p in rational(), q in non_zero_rational()) {
            let quotient = p.checked_div(&q).unwrap();
            prop_assert_eq!(quotient * &q, p);
        }

        #[test]
        fn self_sub_is_zero(a in rational()) {
            prop_assert!((&a - &a).is_zero());
        }

        // Text round trips

        #[test]
        fn display_round_trips(a in rational()) {
            let text = a.to_string();
            prop_assert_eq!(Rational::from_decimal_str(&text).unwrap(), a.clone());
            prop_assert_eq!(text.parse::<Rational>().unwrap(), a);
        }

        #[test]
        fn decimal_text_round_trips(n in small_int(), k in 0u32..6) {
            // n / 10^k printed as a decimal literal
            let scale = 10i64.pow(k);
            let r = Rational::from_i64(n, scale).unwrap();
            let magnitude = n.unsigned_abs();
            let sign = if n < 0 { "-" } else { "" };
            let whole = magnitude / scale.unsigned_abs();
            let frac = magnitude % scale.unsigned_abs();
            let text = if k == 0 {
                format!("{sign}{whole}")
            } else {
                format!("{sign}{whole}.{frac:0width$}", width = k as usize)
            };
            prop_assert_eq!(Rational::from_decimal_str(&text).unwrap(), r);
        }

        #[test]
        fn lenient_parse_never_fails_on_garbage(text in "[a-z ]{0,8}") {
            prop_assert!(Rational::from_decimal_str(&text).unwrap().is_zero());
        }
    }
}
