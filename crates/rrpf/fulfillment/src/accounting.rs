//! Row budget accounting.

use rrpf_types::Constraints;

/// True when `requested_rows` fits within `constraints.max_total_rows`.
///
/// A non-positive budget admits nothing but zero rows.
pub fn check_row_constraints(requested_rows: u64, constraints: &Constraints) -> bool {
    let allowed = u64::try_from(constraints.max_total_rows).unwrap_or(0);
    requested_rows <= allowed
}

#[cfg(test)]
mod tests {
    use super::*;

    fn budget(max_total_rows: i64) -> Constraints {
        Constraints {
            max_total_rows,
            max_groups: 10,
            fail_on_partial: true,
        }
    }

    #[test]
    fn limit_is_inclusive() {
        assert!(check_row_constraints(100, &budget(100)));
        assert!(!check_row_constraints(101, &budget(100)));
        assert!(check_row_constraints(0, &budget(1)));
    }

    #[test]
    fn negative_budget_admits_only_zero() {
        assert!(check_row_constraints(0, &budget(-5)));
        assert!(!check_row_constraints(1, &budget(-5)));
    }
}
