#[cfg(test)]
mod tests {
    use karatrace::{KaratsubaError, StepKind, compute_karatsuba};
    use num_bigint::BigUint;
    use rand::Rng;

    #[test]
    fn decimal_two_digit_product() {
        let result = compute_karatsuba("12", "34", "10").unwrap();
        assert_eq!(result.decimal_result, BigUint::from(408u32));
        assert_eq!(result.base_result, "408");
        assert_eq!(result.original_x, "12");
        assert_eq!(result.original_y, "34");
        assert_eq!(result.radix, 10);
    }

    #[test]
    fn binary_product() {
        // 1010 * 1100 in binary is 10 * 12 = 120 = 1111000.
        let result = compute_karatsuba("1010", "1100", "2").unwrap();
        assert_eq!(result.decimal_result, BigUint::from(120u32));
        assert_eq!(result.base_result, "1111000");
    }

    #[test]
    fn hexadecimal_product() {
        // 6E9 * 4AC in hex is 1769 * 1196 = 2115724 = 20488C.
        let result = compute_karatsuba("6E9", "4AC", "16").unwrap();
        assert_eq!(result.decimal_result, BigUint::from(2_115_724u32));
        assert_eq!(result.base_result, "20488C");
    }

    #[test]
    fn zero_operand_propagates_through_combines() {
        let result = compute_karatsuba("0", "999", "10").unwrap();
        assert_eq!(result.decimal_result, BigUint::from(0u32));
        assert_eq!(result.base_result, "0");
        // 999 is not a single digit, so the pair still splits; every
        // sub-product and combine along the way must come out zero.
        assert!(result.steps.count_of(StepKind::Split) > 0);
        for step in &result.steps {
            match step {
                karatrace::Step::Split { x, .. } => assert_eq!(x, "0"),
                karatrace::Step::BaseCase { result, .. }
                | karatrace::Step::Combine { result, .. } => assert_eq!(result, "0"),
            }
        }
    }

    #[test]
    fn single_digit_operands_skip_the_recursion() {
        let result = compute_karatsuba("7", "8", "10").unwrap();
        assert_eq!(result.decimal_result, BigUint::from(56u32));
        assert_eq!(result.base_result, "56");
        assert_eq!(result.steps.len(), 1);
        assert_eq!(result.steps.count_of(StepKind::BaseCase), 1);
        assert_eq!(result.steps.count_of(StepKind::Split), 0);
        assert_eq!(result.steps.count_of(StepKind::Combine), 0);
        assert_eq!(result.steps.get(0).unwrap().depth(), 0);
    }

    #[test]
    fn lowercase_input_is_accepted_and_preserved() {
        let result = compute_karatsuba("6e9", "4ac", "16").unwrap();
        assert_eq!(result.base_result, "20488C");
        // The bundle echoes the operands exactly as supplied.
        assert_eq!(result.original_x, "6e9");
        assert_eq!(result.original_y, "4ac");
    }

    #[test]
    fn leading_zeros_do_not_change_the_product() {
        let plain = compute_karatsuba("12", "34", "10").unwrap();
        let padded = compute_karatsuba("0012", "034", "10").unwrap();
        assert_eq!(plain.decimal_result, padded.decimal_result);
        assert_eq!(plain.base_result, padded.base_result);
    }

    #[test]
    fn stays_exact_far_beyond_machine_precision() {
        let x = "123456789012345678901234567890";
        let y = "987654321098765432109876543210";
        let result = compute_karatsuba(x, y, "10").unwrap();

        let expected = x.parse::<BigUint>().unwrap() * y.parse::<BigUint>().unwrap();
        assert_eq!(result.decimal_result, expected);
        assert_eq!(result.base_result, expected.to_string());
    }

    #[test]
    fn agrees_with_builtin_multiplication_across_radices() {
        let mut rng = rand::thread_rng();
        for radix in [2u32, 8, 10, 16] {
            for _ in 0..50 {
                let a: u64 = rng.gen_range(0..1_000_000_000);
                let b: u64 = rng.gen_range(0..1_000_000_000);
                let a_str = to_radix(a, radix);
                let b_str = to_radix(b, radix);

                let result = compute_karatsuba(&a_str, &b_str, &radix.to_string()).unwrap();
                let expected = BigUint::from(a) * BigUint::from(b);
                assert_eq!(
                    result.decimal_result, expected,
                    "{a} * {b} in radix {radix}"
                );
                assert_eq!(result.base_result, to_radix_big(&expected, radix));
            }
        }
    }

    #[test]
    fn rejects_empty_operands() {
        assert_eq!(
            compute_karatsuba("", "34", "10"),
            Err(KaratsubaError::EmptyInput)
        );
        assert_eq!(
            compute_karatsuba("12", "", "10"),
            Err(KaratsubaError::EmptyInput)
        );
    }

    #[test]
    fn rejects_digits_outside_the_radix() {
        assert_eq!(
            compute_karatsuba("10", "39", "2"),
            Err(KaratsubaError::InvalidDigit {
                digit: '3',
                position: 0,
                radix: 2,
            })
        );
        assert_eq!(
            compute_karatsuba("12", "34", "2"),
            Err(KaratsubaError::InvalidDigit {
                digit: '2',
                position: 1,
                radix: 2,
            })
        );
    }

    #[test]
    fn rejects_unsupported_radix_selectors() {
        for bad in ["1", "37", "ten", ""] {
            assert_eq!(
                compute_karatsuba("12", "34", bad),
                Err(KaratsubaError::InvalidRadix(bad.to_string()))
            );
        }
    }

    fn to_radix(value: u64, radix: u32) -> String {
        to_radix_big(&BigUint::from(value), radix)
    }

    fn to_radix_big(value: &BigUint, radix: u32) -> String {
        value.to_str_radix(radix).to_uppercase()
    }
}
