//! Constants used throughout the FP17 core crate.
//!
//! Field limits for BCDS1 records live here so validation and configuration agree on them.

/// Largest contract number accepted (ten digits).
pub const MAX_CONTRACT_NUMBER: u64 = 9_999_999_999;

/// Largest provider, performer or DPB PIN number accepted (six digits).
pub const MAX_SIX_DIGIT_NUMBER: u32 = 999_999;

/// Maximum length of a site code.
pub const MAX_SITE_LEN: usize = 5;

/// Largest transaction number accepted.
pub const MAX_TRANSACTION_NUMBER: u32 = 999_999;

/// Largest resubmission count accepted.
pub const MAX_RESUBMISSION_COUNT: u8 = 99;

/// Maximum length of a surname, previous surname or forename.
pub const MAX_NAME_LEN: usize = 20;

/// Maximum number of address lines.
pub const MAX_ADDRESS_LINES: usize = 5;

/// Maximum length of one address line.
pub const MAX_ADDRESS_LINE_LEN: usize = 32;

/// Supplier-testing contract number, used when no override is configured.
pub const DEFAULT_CONTRACT_NUMBER: u64 = 1_746_395;

/// Supplier-testing provider number.
pub const DEFAULT_PROVIDER_NUMBER: u32 = 4_680;

/// Supplier-testing performer number.
pub const DEFAULT_PERFORMER_NUMBER: u32 = 103_384;

/// Supplier-testing DPB PIN.
pub const DEFAULT_DPB_PIN: u32 = 637_694;
