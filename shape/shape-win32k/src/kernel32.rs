//! # `NtWow64Csr*` Contracts
//!
//! Calls with wrappers in the base system library rather than the
//! user-interface or graphics ones. They go through the same kernel entry
//! and are checked the same way.
//!
//! | Call | Shape |
//! |------|-------|
//! | `NtWow64CsrBasepNlsGetUserInfo` | locale name written into a buffer of `size` bytes |
//! | `NtWow64CsrBasepCreateActCtx` | one structure of unknown size, partially modeled |

use crate::{OK, UNKNOWN};
use shape_engine::{Access, ContractSpec, FieldRule, SizeExpr};

const NLS_GET_USER_INFO: &[FieldRule] =
    &[FieldRule::bounded_wide_string(0, SizeExpr::arg(1), Access::Write)];

/// Sorted by name.
pub const CONTRACTS: &[ContractSpec] = &[
    // The kernel stores the base of a new mapping inside the structure; the
    // rest of it, including several input strings, is not described.
    ContractSpec::new("NtWow64CsrBasepCreateActCtx", 1, UNKNOWN),
    ContractSpec::new("NtWow64CsrBasepNlsGetUserInfo", 2, OK).rules(NLS_GET_USER_INFO),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_are_sorted_and_unique() {
        assert!(CONTRACTS.windows(2).all(|w| w[0].name < w[1].name));
    }

    #[test]
    fn every_contract_is_self_consistent() {
        for spec in CONTRACTS {
            assert_eq!(spec.validate(&[]), Ok(()), "{}", spec.name);
        }
    }
}
