use alloy_primitives::{Address, B256, U256};
use anyhow::{anyhow, Result};
use async_trait::async_trait;

use crate::abi;
use crate::config::OASIS_CONTRACT;
use crate::models::{OfferId, TradeEvent};
use crate::rpc::EthRpc;

/// Everything the market core needs from the remote ledger. The offer list
/// stays ledger-resident; this trait only hands out opaque ids and per-id
/// reads.
#[async_trait]
pub trait MarketGateway: Send + Sync {
    async fn is_pair_whitelisted(&self, from: Address, to: Address) -> Result<bool>;

    async fn offer_count(&self, from: Address, to: Address) -> Result<u64>;

    async fn best_offer(&self, from: Address, to: Address) -> Result<OfferId>;

    /// `(pay_amount, buy_amount)` of an offer in native units. A zero pay
    /// amount marks a deleted slot.
    async fn offer(&self, id: OfferId) -> Result<(U256, U256)>;

    async fn worse_offer(&self, id: OfferId) -> Result<OfferId>;

    /// Take events for the pair topic over an inclusive block range,
    /// ascending block order as the node returns them.
    async fn take_events(
        &self,
        pair_topic: B256,
        from_block: u64,
        to_block: u64,
    ) -> Result<Vec<TradeEvent>>;

    async fn block_number(&self) -> Result<u64>;

    async fn token_decimals(&self, token: Address) -> Result<u8>;
}

/// Canonical signature of the take event. Non-indexed data words land in
/// declaration order: id, pay_gem, buy_gem, take_amt, give_amt, timestamp.
const LOG_TAKE_SIGNATURE: &str =
    "LogTake(bytes32,bytes32,address,address,address,address,uint128,uint128,uint64)";

/// `MarketGateway` backed by the OasisDEX matching market contract over
/// JSON-RPC.
pub struct OasisGateway {
    rpc: EthRpc,
    contract: Address,
}

impl OasisGateway {
    pub fn new(rpc: EthRpc) -> Self {
        Self::with_contract(rpc, OASIS_CONTRACT)
    }

    pub fn with_contract(rpc: EthRpc, contract: Address) -> Self {
        Self { rpc, contract }
    }

    async fn call_words(&self, to: Address, signature: &str, args: &[B256]) -> Result<Vec<U256>> {
        let data = abi::encode_call(signature, args);
        let returned = self.rpc.call(to, data).await?;
        abi::decode_words(&returned)
    }
}

#[async_trait]
impl MarketGateway for OasisGateway {
    async fn is_pair_whitelisted(&self, from: Address, to: Address) -> Result<bool> {
        let words = self
            .call_words(
                self.contract,
                "isTokenPairWhitelisted(address,address)",
                &[from.into_word(), to.into_word()],
            )
            .await?;
        Ok(!abi::word_at(&words, 0)?.is_zero())
    }

    async fn offer_count(&self, from: Address, to: Address) -> Result<u64> {
        let words = self
            .call_words(
                self.contract,
                "getOfferCount(address,address)",
                &[from.into_word(), to.into_word()],
            )
            .await?;
        abi::word_at(&words, 0)?
            .try_into()
            .map_err(|_| anyhow!("offer count overflows u64"))
    }

    async fn best_offer(&self, from: Address, to: Address) -> Result<OfferId> {
        let words = self
            .call_words(
                self.contract,
                "getBestOffer(address,address)",
                &[from.into_word(), to.into_word()],
            )
            .await?;
        Ok(OfferId::new(abi::word_at(&words, 0)?))
    }

    async fn offer(&self, id: OfferId) -> Result<(U256, U256)> {
        // getOffer returns (pay_amt, pay_gem, buy_amt, buy_gem); the token
        // words are not needed here.
        let words = self
            .call_words(self.contract, "getOffer(uint256)", &[id.raw().into()])
            .await?;
        Ok((abi::word_at(&words, 0)?, abi::word_at(&words, 2)?))
    }

    async fn worse_offer(&self, id: OfferId) -> Result<OfferId> {
        let words = self
            .call_words(self.contract, "getWorseOffer(uint256)", &[id.raw().into()])
            .await?;
        Ok(OfferId::new(abi::word_at(&words, 0)?))
    }

    async fn take_events(
        &self,
        pair_topic: B256,
        from_block: u64,
        to_block: u64,
    ) -> Result<Vec<TradeEvent>> {
        let topics = [abi::event_topic(LOG_TAKE_SIGNATURE), pair_topic];
        let logs = self
            .rpc
            .get_logs(self.contract, &topics, from_block, to_block)
            .await?;

        let mut events = Vec::with_capacity(logs.len());
        for log in logs {
            let words = abi::decode_words(&log.data)?;
            events.push(TradeEvent {
                take_amount: abi::word_at(&words, 3)?,
                give_amount: abi::word_at(&words, 4)?,
                block_number: log.block_number,
            });
        }
        Ok(events)
    }

    async fn block_number(&self) -> Result<u64> {
        self.rpc.block_number().await
    }

    async fn token_decimals(&self, token: Address) -> Result<u8> {
        let words = self.call_words(token, "decimals()", &[]).await?;
        abi::word_at(&words, 0)?
            .try_into()
            .map_err(|_| anyhow!("token {} reports unusable decimals", token))
    }
}
