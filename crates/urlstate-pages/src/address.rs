//! Wallet address validation.
//!
//! Two formats are accepted:
//! - SS58: base58, a 1-byte (prefix < 64) or 2-byte network prefix, a 32-byte
//!   public key and a 2-byte checksum.
//! - EVM: `0x` followed by 40 hex digits.
//!
//! The SS58 checksum itself is not verified; a structurally valid address
//! with a wrong checksum is accepted.

const BASE58_ALPHABET: &[u8; 58] =
    b"123456789ABCDEFGHJKLMNPQRSTUVWXYZabcdefghijkmnopqrstuvwxyz";

/// Placeholder recipient used when the link carries no valid address.
pub const DEFAULT_ADDRESS: &str = "5GrwvaEF5zXb26Fz9rcQpDWS55tNKfoLqCkBtgaWzrfsHn5T";

fn base58_decode(input: &str) -> Option<Vec<u8>> {
    // Little-endian accumulator, reversed at the end.
    let mut out: Vec<u8> = Vec::with_capacity(input.len());
    for c in input.bytes() {
        let digit = BASE58_ALPHABET.iter().position(|&a| a == c)?;
        let mut carry = u32::try_from(digit).ok()?;
        for byte in &mut out {
            carry += u32::from(*byte) * 58;
            *byte = (carry & 0xff) as u8;
            carry >>= 8;
        }
        while carry > 0 {
            out.push((carry & 0xff) as u8);
            carry >>= 8;
        }
    }
    let zeros = input.bytes().take_while(|&b| b == b'1').count();
    out.extend(std::iter::repeat_n(0, zeros));
    out.reverse();
    Some(out)
}

/// Structural SS58 check.
#[must_use]
pub fn is_valid_ss58(address: &str) -> bool {
    if address.is_empty() || address.len() > 64 {
        return false;
    }
    let Some(bytes) = base58_decode(address) else {
        return false;
    };
    match bytes.len() {
        35 => bytes[0] < 64,
        36 => bytes[0] & 0b1100_0000 == 0b0100_0000,
        _ => false,
    }
}

/// `0x` + 40 hex digits, any case.
#[must_use]
pub fn is_valid_evm_address(address: &str) -> bool {
    address
        .strip_prefix("0x")
        .is_some_and(|digits| digits.len() == 40 && hex::decode(digits).is_ok())
}

#[must_use]
pub fn is_valid_wallet_address(address: &str) -> bool {
    is_valid_ss58(address) || is_valid_evm_address(address)
}
