//! Property-based tests for the elimination engine.

#[cfg(test)]
mod tests {
    use num_traits::{One, Zero};
    use proptest::prelude::*;
    use rowred_linalg::DenseMatrix;
    use rowred_rational::Rational;

    use crate::{
        compute_ranks, reduce_to_normal_form, replay, solve, Solution, SolutionType, Trace,
    };

    // Entries are small and often zero so degenerate systems are common.
    fn entry() -> impl Strategy<Value = Rational> {
        prop_oneof![2 => Just(0i64), 3 => -3i64..=3i64].prop_map(Rational::from)
    }

    fn system() -> impl Strategy<Value = (DenseMatrix<Rational>, Vec<Rational>)> {
        (1usize..=4).prop_flat_map(|n| {
            (
                prop::collection::vec(prop::collection::vec(entry(), n), n),
                prop::collection::vec(entry(), n),
            )
                .prop_map(|(rows, b)| (DenseMatrix::from_rows(rows).unwrap(), b))
        })
    }

    fn satisfies(a: &DenseMatrix<Rational>, b: &[Rational], x: &[Rational]) -> bool {
        a.rows().zip(b).all(|(row, rhs)| {
            let lhs = row
                .iter()
                .zip(x)
                .fold(Rational::zero(), |acc, (c, v)| acc + c * v);
            &lhs == rhs
        })
    }

    proptest! {
        #[test]
        fn classification_matches_ranks((a, b) in system(), reduce in any::<bool>()) {
            let n = a.num_rows();
            let result = solve(&a, &b, reduce).unwrap();

            prop_assert!(result.rank_a <= result.rank_aug);
            prop_assert!(result.rank_aug <= n);
            prop_assert_eq!(
                result.solution_type == SolutionType::Inconsistent,
                result.rank_a < result.rank_aug
            );
            let expected = if result.rank_a < result.rank_aug {
                SolutionType::Inconsistent
            } else if result.rank_a < n {
                SolutionType::Infinite
            } else {
                SolutionType::Unique
            };
            prop_assert_eq!(result.solution_type, expected);
        }

        #[test]
        fn solutions_satisfy_the_system((a, b) in system(), reduce in any::<bool>()) {
            let result = solve(&a, &b, reduce).unwrap();
            match &result.solution {
                Solution::Unique(x) => prop_assert!(satisfies(&a, &b, x)),
                Solution::Parametric(values) => {
                    for seed in [-1i64, 0, 2] {
                        let x: Vec<Rational> = values
                            .iter()
                            .map(|v| {
                                v.to_expr().evaluate(|p| {
                                    Rational::from(seed * (i64::try_from(p.column).unwrap() + 1))
                                })
                            })
                            .collect();
                        prop_assert!(satisfies(&a, &b, &x));
                    }
                }
                Solution::Inconsistent => {
                    prop_assert_eq!(result.solution_text.len(), 1);
                }
            }
            prop_assert_eq!(result.solution_text.len(), match result.solution_type {
                SolutionType::Inconsistent => 1,
                _ => a.num_rows(),
            });
        }

        #[test]
        fn reduction_does_not_change_the_answer((a, b) in system()) {
            let plain = solve(&a, &b, false).unwrap();
            let reduced = solve(&a, &b, true).unwrap();
            prop_assert_eq!(plain.rank_a, reduced.rank_a);
            prop_assert_eq!(plain.rank_aug, reduced.rank_aug);
            prop_assert_eq!(plain.solution, reduced.solution);
        }

        #[test]
        fn normal_form_is_idempotent((a, b) in system()) {
            let once = solve(&a, &b, true).unwrap().final_matrix;
            let mut twice = once.clone();
            let mut trace = Trace::new();
            reduce_to_normal_form(&mut twice, &mut trace).unwrap();
            prop_assert_eq!(&twice, &once);
            // Only the marker step is recorded on the second pass.
            prop_assert_eq!(trace.len(), 1);
            prop_assert_eq!(compute_ranks(&twice), compute_ranks(&once));
        }

        #[test]
        fn normal_form_pivots_are_one((a, b) in system()) {
            let m = solve(&a, &b, true).unwrap().final_matrix;
            let n = m.num_rows();
            for row in 0..n {
                if let Some(col) = m.leading_index(row, n) {
                    prop_assert!(m[(row, col)].is_one());
                    for other in (0..n).filter(|&r| r != row) {
                        prop_assert!(m[(other, col)].is_zero());
                    }
                }
            }
        }

        #[test]
        fn traces_replay((a, b) in system(), reduce in any::<bool>()) {
            let result = solve(&a, &b, reduce).unwrap();
            prop_assert_eq!(replay(&result.steps).unwrap(), result.final_matrix);
        }
    }
}
