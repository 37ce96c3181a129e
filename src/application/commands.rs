//! CLI commands and handlers
use clap::{Parser, Subcommand};
use serde::Serialize;
use serde_json::json;
use tracing::info;

use crate::application::services::ExchangeService;
use crate::domain::pricing::QuoteSide;
use crate::infrastructure::JsonStateStore;
use crate::shared::errors::AppError;
use crate::shared::types::Address;
use crate::shared::utils::{format_ether, parse_ether};

#[derive(Parser, Debug)]
#[command(name = "coinswap")]
#[command(version, about = "Fixed-rate native <-> coin exchange")]
pub struct Cli {
    /// Path to config file
    #[arg(long, global = true)]
    pub config: Option<String>,

    /// Path to the JSON state file (overrides config)
    #[arg(long, global = true)]
    pub state: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// List registered coins
    Coins,

    /// Register a new coin (operator only)
    #[command(name = "add-coin")]
    AddCoin {
        #[arg(long)]
        name: String,

        #[arg(long)]
        symbol: String,

        /// Tokens per native unit (defaults to the configured rate)
        #[arg(long)]
        rate: Option<u128>,

        /// Caller address (defaults to the operator)
        #[arg(long)]
        from: Option<Address>,
    },

    /// Stop swaps for a coin (operator only)
    Deactivate {
        #[arg(long)]
        name: String,

        #[arg(long)]
        from: Option<Address>,
    },

    /// Add tokens to a coin's reserve (operator only)
    Fund {
        #[arg(long)]
        name: String,

        /// Amount in whole tokens, decimals allowed
        #[arg(long)]
        amount: String,

        #[arg(long)]
        from: Option<Address>,
    },

    /// Give an account native currency
    Faucet {
        #[arg(long)]
        account: Address,

        #[arg(long)]
        amount: String,
    },

    /// Tokens received for a native amount
    #[command(name = "quote-native")]
    QuoteNative {
        #[arg(long)]
        coin: String,

        #[arg(long)]
        amount: String,
    },

    /// Native currency received for a token amount
    #[command(name = "quote-token")]
    QuoteToken {
        #[arg(long)]
        coin: String,

        #[arg(long)]
        amount: String,
    },

    /// Swap native currency for coin tokens
    #[command(name = "swap-native")]
    SwapNative {
        #[arg(long)]
        account: Address,

        #[arg(long)]
        coin: String,

        #[arg(long)]
        amount: String,
    },

    /// Swap coin tokens back for native currency
    #[command(name = "swap-coin")]
    SwapCoin {
        #[arg(long)]
        account: Address,

        #[arg(long)]
        coin: String,

        #[arg(long)]
        amount: String,
    },

    /// Show balances of an account
    Balance {
        #[arg(long)]
        account: Address,

        /// Limit to one coin
        #[arg(long)]
        coin: Option<String>,
    },
}

impl Commands {
    /// Whether the command changes exchange state
    pub fn is_mutating(&self) -> bool {
        !matches!(
            self,
            Commands::Coins
                | Commands::QuoteNative { .. }
                | Commands::QuoteToken { .. }
                | Commands::Balance { .. }
        )
    }
}

pub struct CommandExecutor;

impl CommandExecutor {
    /// Execute the selected command and persist the result
    pub async fn execute(
        command: Commands,
        service: &ExchangeService,
        store: &JsonStateStore,
    ) -> Result<(), AppError> {
        let mutating = command.is_mutating();
        let output = Self::run(command, service).await?;
        println!("{}", output);

        if mutating {
            service.save(store).await?;
        }
        Ok(())
    }

    /// Execute a command, returning its pretty JSON output
    pub async fn run(command: Commands, service: &ExchangeService) -> Result<String, AppError> {
        let operator = *service.operator();

        match command {
            Commands::Coins => render(&service.coins().await),
            Commands::AddCoin { name, symbol, rate, from } => {
                let coin = service
                    .add_coin(&from.unwrap_or(operator), &name, &symbol, rate)
                    .await?;
                render(&coin)
            }
            Commands::Deactivate { name, from } => {
                let coin = service.deactivate_coin(&from.unwrap_or(operator), &name).await?;
                render(&coin)
            }
            Commands::Fund { name, amount, from } => {
                let coin = service
                    .fund_reserve(&from.unwrap_or(operator), &name, parse_ether(&amount)?)
                    .await?;
                render(&coin)
            }
            Commands::Faucet { account, amount } => {
                let balance = service.faucet(&account, parse_ether(&amount)?).await?;
                render(&json!({
                    "account": account,
                    "native_balance": format_ether(balance),
                }))
            }
            Commands::QuoteNative { coin, amount } => {
                let quote = service
                    .quote(QuoteSide::NativeToToken, parse_ether(&amount)?, &coin)
                    .await?;
                render(&quote)
            }
            Commands::QuoteToken { coin, amount } => {
                let quote = service
                    .quote(QuoteSide::TokenToNative, parse_ether(&amount)?, &coin)
                    .await?;
                render(&quote)
            }
            Commands::SwapNative { account, coin, amount } => {
                let receipt = service
                    .swap_native_to_coin(&account, &coin, parse_ether(&amount)?)
                    .await?;
                info!("✅ {} swapped {} native for {}", account, amount, coin);
                render(&receipt)
            }
            Commands::SwapCoin { account, coin, amount } => {
                let receipt = service
                    .swap_coin_to_native(&account, &coin, parse_ether(&amount)?)
                    .await?;
                info!("✅ {} swapped {} {} for native", account, amount, coin);
                render(&receipt)
            }
            Commands::Balance { account, coin } => {
                let names = match coin {
                    Some(coin) => vec![coin],
                    None => service.coins().await.into_iter().map(|c| c.name).collect(),
                };

                let mut balances = serde_json::Map::new();
                for name in names {
                    let balance = service.get_balance(&name, &account).await?;
                    balances.insert(name, json!(format_ether(balance)));
                }

                render(&json!({
                    "account": account,
                    "native": format_ether(service.native_balance(&account).await),
                    "coins": balances,
                }))
            }
        }
    }
}

// Amounts are u128 and may exceed u64, so render straight to text
fn render<T: Serialize>(value: &T) -> Result<String, AppError> {
    Ok(serde_json::to_string_pretty(value)?)
}
