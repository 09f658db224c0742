use alloy_primitives::{Address, B256};
use anyhow::{anyhow, Result};
use serde_json::{json, Value};
use std::sync::atomic::{AtomicU64, Ordering};

use crate::abi;

/// One `eth_getLogs` entry, stripped to the fields the core reads.
#[derive(Debug, Clone)]
pub struct LogEntry {
    pub data: Vec<u8>,
    pub block_number: u64,
}

/// Ethereum JSON-RPC transport. Holds the HTTP client; safe to share across
/// the concurrent sub-fetches of a single quote.
pub struct EthRpc {
    endpoint: String,
    client: reqwest::Client,
    next_id: AtomicU64,
}

impl EthRpc {
    pub fn new(endpoint: &str) -> Self {
        let client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(60))
            .build()
            .expect("Failed to build HTTP client");
        Self::with_client(endpoint, client)
    }

    pub fn with_client(endpoint: &str, client: reqwest::Client) -> Self {
        Self {
            endpoint: crate::utils::remove_trailing_slash(endpoint),
            client,
            next_id: AtomicU64::new(1),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    async fn request(&self, method: &str, params: Value) -> Result<Value> {
        let body = json!({
            "jsonrpc": "2.0",
            "id": self.next_id.fetch_add(1, Ordering::Relaxed),
            "method": method,
            "params": params,
        });
        let response = self.client.post(&self.endpoint).json(&body).send().await?;
        if response.status() == reqwest::StatusCode::TOO_MANY_REQUESTS {
            return Err(anyhow!("rate_limited"));
        }
        let text = response.text().await?;
        let parsed: Value = serde_json::from_str(&text)?;
        if let Some(err) = parsed.get("error") {
            let code = err.get("code").and_then(|c| c.as_i64()).unwrap_or(0);
            let message = err
                .get("message")
                .and_then(|m| m.as_str())
                .unwrap_or("unknown error");
            return Err(anyhow!("rpc error {} from {}: {}", code, method, message));
        }
        parsed
            .get("result")
            .cloned()
            .ok_or_else(|| anyhow!("rpc response for {} has no result", method))
    }

    /// `eth_call` against the latest block; returns raw return data.
    pub async fn call(&self, to: Address, data: Vec<u8>) -> Result<Vec<u8>> {
        let params = json!([
            {
                "to": format!("{}", to),
                "data": format!("0x{}", hex::encode(&data)),
            },
            "latest",
        ]);
        let result = self.request("eth_call", params).await?;
        let text = result
            .as_str()
            .ok_or_else(|| anyhow!("eth_call result is not a string"))?;
        abi::decode_hex(text)
    }

    pub async fn block_number(&self) -> Result<u64> {
        let result = self.request("eth_blockNumber", json!([])).await?;
        let text = result
            .as_str()
            .ok_or_else(|| anyhow!("eth_blockNumber result is not a string"))?;
        abi::parse_quantity(text)
    }

    /// `eth_getLogs` filtered by contract address and topic list over an
    /// inclusive block range.
    pub async fn get_logs(
        &self,
        address: Address,
        topics: &[B256],
        from_block: u64,
        to_block: u64,
    ) -> Result<Vec<LogEntry>> {
        let topics: Vec<String> = topics.iter().map(|t| format!("{}", t)).collect();
        let params = json!([{
            "address": format!("{}", address),
            "topics": topics,
            "fromBlock": abi::to_quantity(from_block),
            "toBlock": abi::to_quantity(to_block),
        }]);
        let result = self.request("eth_getLogs", params).await?;
        let raw_logs = result
            .as_array()
            .ok_or_else(|| anyhow!("eth_getLogs result is not an array"))?;

        let mut entries = Vec::with_capacity(raw_logs.len());
        for log in raw_logs {
            let data = log
                .get("data")
                .and_then(|d| d.as_str())
                .ok_or_else(|| anyhow!("log entry has no data field"))?;
            let block_number = log
                .get("blockNumber")
                .and_then(|b| b.as_str())
                .ok_or_else(|| anyhow!("log entry has no blockNumber field"))?;
            entries.push(LogEntry {
                data: abi::decode_hex(data)?,
                block_number: abi::parse_quantity(block_number)?,
            });
        }
        Ok(entries)
    }
}
