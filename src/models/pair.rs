use alloy_primitives::{keccak256, Address, B256};

/// A resolved, whitelist-confirmed token pair.
///
/// Immutable once built by the resolver: addresses come from the known-token
/// table, decimals from the override table or the token contract, and the
/// whitelist check has already passed against the market contract.
#[derive(Debug, Clone)]
pub struct Pair {
    /// The pair as the user typed it, e.g. `"W-ETH/DAI"`.
    pub text: String,
    pub from_address: Address,
    pub from_symbol: String,
    pub from_decimals: u8,
    pub to_address: Address,
    pub to_symbol: String,
    pub to_decimals: u8,
}

impl Pair {
    /// Topic the market contract indexes take events under:
    /// `keccak256(to_address ++ from_address)` packed, 40 bytes.
    pub fn take_topic(&self) -> B256 {
        let mut packed = [0u8; 40];
        packed[..20].copy_from_slice(self.to_address.as_slice());
        packed[20..].copy_from_slice(self.from_address.as_slice());
        keccak256(packed)
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use alloy_primitives::address;

    #[test]
    fn take_topic_is_order_sensitive() {
        let pair = Pair {
            text: "W-ETH/DAI".to_string(),
            from_address: address!("c02aaa39b223fe8d0a0e5c4f27ead9083c756cc2"),
            from_symbol: "W-ETH".to_string(),
            from_decimals: 18,
            to_address: address!("89d24a6b4ccb1b6faa2625fe562bdd9a23260359"),
            to_symbol: "DAI".to_string(),
            to_decimals: 18,
        };
        let flipped = Pair {
            text: "DAI/W-ETH".to_string(),
            from_address: pair.to_address,
            from_symbol: pair.to_symbol.clone(),
            from_decimals: 18,
            to_address: pair.from_address,
            to_symbol: pair.from_symbol.clone(),
            to_decimals: 18,
        };
        assert_ne!(pair.take_topic(), flipped.take_topic());
    }
}
