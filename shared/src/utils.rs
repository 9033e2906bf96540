//! # Shared Utility Functions
//!
//! ## Address Formatting
//!
//! Functions for formatting Sui addresses for display:
//! - [`format_address`] - Format address with ellipsis (first N and last M characters)
//! - [`truncate_address`] - Short form used in the navigation header
//!
//! ```rust
//! use shared::utils::format_address;
//!
//! let address = "0x7a3f5c2e9b1d4a6f8c0e2b4d6f8a0c2e4b6d8f0a2c4e6b8d0f2a4c6e8b0d2f41";
//! assert_eq!(format_address(address, 6, 4), "0x7a3f...2f41");
//! ```

/// Format a wallet address by showing the first `prefix_len` and last `suffix_len` characters.
///
/// If the address is shorter than `prefix_len + suffix_len`, it is returned as-is.
///
/// # Examples
///
/// ```rust
/// use shared::utils::format_address;
///
/// let addr = "0x7a3f5c2e9b1d4a6f8c0e2b4d6f8a0c2e4b6d8f0a2c4e6b8d0f2a4c6e8b0d2f41";
/// assert_eq!(format_address(addr, 6, 4), "0x7a3f...2f41");
/// assert_eq!(format_address("0x2", 6, 4), "0x2");
/// ```
pub fn format_address(address: &str, prefix_len: usize, suffix_len: usize) -> String {
    let address_len = address.len();

    if address_len <= prefix_len + suffix_len || !address.is_ascii() {
        return address.to_string();
    }

    // ASCII checked above, byte slicing is on char boundaries
    let prefix = &address[..prefix_len];
    let suffix = &address[address_len - suffix_len..];

    format!("{}...{}", prefix, suffix)
}

/// Format a Sui address as `0x` plus four leading and four trailing hex digits.
pub fn truncate_address(address: &str) -> String {
    format_address(address, 6, 4)
}
