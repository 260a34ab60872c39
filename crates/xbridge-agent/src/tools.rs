//! Bridge-quote rig tool
//!
//! Mounts the pipeline's extraction-free tail on any `rig` agent: the model
//! supplies the five transaction parameters as tool arguments and gets back
//! the serialized summary plus artifact.

use rig::{completion::ToolDefinition, tool::Tool};
use serde::Deserialize;
use serde_json::json;
use tracing::{info, instrument};

use xbridge_client::AggregatorClient;
use xbridge_types::TransactionDetails;

use crate::pipeline::{resolve_and_quote, PipelineError};

/// The arguments for the bridge quote tool, provided by the AI model.
#[derive(Deserialize, Debug)]
pub struct BridgeQuoteArgs {
    pub from_chain: String,
    pub to_chain: String,
    pub amount: String,
    pub from_token: String,
    pub to_token: String,
}

/// A `rig` tool that resolves a route through the aggregator and quotes it.
pub struct BridgeQuoteTool {
    client: AggregatorClient,
}

impl BridgeQuoteTool {
    pub fn new(client: AggregatorClient) -> Self {
        Self { client }
    }
}

impl Tool for BridgeQuoteTool {
    const NAME: &'static str = "bridge_quote";
    type Error = PipelineError;
    type Args = BridgeQuoteArgs;
    type Output = String;

    /// Defines the tool's schema and description for the AI model.
    async fn definition(&self, _prompt: String) -> ToolDefinition {
        ToolDefinition {
            name: Self::NAME.to_string(),
            description: "Get a priced bridge/swap route between two chains. Use when the user wants to bridge, swap, or move tokens across chains. Requires the source and destination chain names, the token symbols on each side, and the amount to send.".to_string(),
            parameters: json!({
                "type": "object",
                "properties": {
                    "from_chain": {
                        "type": "string",
                        "description": "Source chain name as the user wrote it (e.g. 'BSC', 'Ethereum')"
                    },
                    "to_chain": {
                        "type": "string",
                        "description": "Destination chain name (e.g. 'Polygon')"
                    },
                    "amount": {
                        "type": "string",
                        "description": "Decimal amount of the source token to send (e.g. '50')"
                    },
                    "from_token": {
                        "type": "string",
                        "description": "Token symbol on the source chain (e.g. 'USDT')"
                    },
                    "to_token": {
                        "type": "string",
                        "description": "Token symbol on the destination chain; same as from_token when the user names only one"
                    }
                },
                "required": ["from_chain", "to_chain", "amount", "from_token", "to_token"],
            }),
        }
    }

    #[instrument(
        name = "bridge_quote_tool_call",
        skip(self),
        fields(
            tool_name = "bridge_quote",
            from_chain = %args.from_chain,
            to_chain = %args.to_chain,
            amount = %args.amount,
        )
    )]
    async fn call(&self, args: Self::Args) -> Result<Self::Output, Self::Error> {
        let details = TransactionDetails {
            from_chain: args.from_chain,
            to_chain: args.to_chain,
            amount: args.amount,
            from_token: args.from_token,
            to_token: args.to_token,
        };
        let summary = resolve_and_quote(&self.client, &details).await?;
        info!("[BridgeQuoteTool] {}", summary.message);
        Ok(serde_json::to_string(&summary)?)
    }
}
