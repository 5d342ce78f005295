//! Terminal client for the BlueMint demo services.
//!
//! Exposes the same REST surface as the browser client — auth, wallet,
//! gateway, merchant ledger, transactions — as clap subcommands, plus watch
//! modes that poll on an interval the way the demo pages do. Useful for
//! scripting the full offline-escrow flow without a browser.

use std::time::Duration;

use clap::{Args, Parser, Subcommand};
use wire::{
    DashboardStatus, IntegrityReport, MerchantEarnings, OtpRequested, PrepareOfflineRequest,
    PrepareOfflineResponse, Profile, TransactionRecord, VerifyOtpResponse, WalletBalance,
};

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error("http request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("{service} returned HTTP {status}: {message}")]
    Service {
        service: &'static str,
        status: u16,
        message: String,
    },
    #[error("response decode failed: {0}")]
    Decode(#[from] wire::SchemaError),
    #[error("OTP verification refused: {0}")]
    VerifyRefused(String),
    #[error("invalid JSON output: {0}")]
    InvalidJson(#[from] serde_json::Error),
}

#[derive(Parser, Debug)]
#[command(name = "bluemint-cli", about = "BlueMint wallet demo REST CLI")]
struct Cli {
    #[arg(long, env = "BLUEMINT_AUTH_URL", default_value = "http://127.0.0.1:8000")]
    auth_url: String,

    #[arg(long, env = "BLUEMINT_ESCROW_URL", default_value = "http://127.0.0.1:8001")]
    escrow_url: String,

    #[arg(long, env = "BLUEMINT_GATEWAY_URL", default_value = "http://127.0.0.1:8080")]
    gateway_url: String,

    #[arg(long, env = "BLUEMINT_LEDGER_URL", default_value = "http://127.0.0.1:8003")]
    ledger_url: String,

    #[arg(long, env = "BLUEMINT_TRANSACTIONS_URL", default_value = "http://127.0.0.1:8004")]
    transactions_url: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Clone)]
struct CliContext {
    auth_url: String,
    escrow_url: String,
    gateway_url: String,
    ledger_url: String,
    transactions_url: String,
}

#[derive(Subcommand, Debug)]
enum Command {
    Auth(AuthCommand),
    Wallet(WalletCommand),
    Merchant(MerchantCommand),
    Txn(TxnCommand),
}

#[derive(Args, Debug)]
struct AuthCommand {
    #[command(subcommand)]
    command: AuthSubcommand,
}

#[derive(Subcommand, Debug)]
enum AuthSubcommand {
    /// Ask the auth service to send (and, in the demo, echo) an OTP.
    RequestOtp {
        #[arg(long)]
        phone: String,
    },
    /// Verify an OTP and print the established identity.
    VerifyOtp {
        #[arg(long)]
        phone: String,
        #[arg(long)]
        otp: String,
    },
    /// Print the profile behind a wallet id.
    Profile { wallet_id: String },
}

#[derive(Args, Debug)]
struct WalletCommand {
    #[command(subcommand)]
    command: WalletSubcommand,
}

#[derive(Subcommand, Debug)]
enum WalletSubcommand {
    /// Print the spendable/escrow split once.
    Balance { wallet_id: String },
    /// Poll the balance on an interval, printing one line per tick.
    Watch {
        wallet_id: String,
        #[arg(long, default_value_t = 3)]
        interval_secs: u64,
    },
    /// Lock funds into escrow and mint an offline token bundle.
    PrepareOffline {
        wallet_id: String,
        #[arg(long)]
        phone: String,
        #[arg(long)]
        amount: f64,
        #[arg(long, default_value = "mock_device_001")]
        device_id: String,
        /// Attest a rooted device (the gateway fails closed on this).
        #[arg(long, default_value_t = false)]
        rooted: bool,
        /// Attest an attached debugger.
        #[arg(long, default_value_t = false)]
        debugger: bool,
        /// Attest an emulator environment.
        #[arg(long, default_value_t = false)]
        emulator: bool,
        /// Attest a broken app signature.
        #[arg(long, default_value_t = false)]
        invalid_signature: bool,
    },
}

#[derive(Args, Debug)]
struct MerchantCommand {
    #[command(subcommand)]
    command: MerchantSubcommand,
}

#[derive(Subcommand, Debug)]
enum MerchantSubcommand {
    /// Print the merchant's settled earnings once.
    Earnings {
        #[arg(default_value = "MCH-CAFE-X")]
        merchant_id: String,
    },
    /// Poll earnings on an interval, printing one line per tick.
    Watch {
        #[arg(default_value = "MCH-CAFE-X")]
        merchant_id: String,
        #[arg(long, default_value_t = 3)]
        interval_secs: u64,
    },
}

#[derive(Args, Debug)]
struct TxnCommand {
    #[command(subcommand)]
    command: TxnSubcommand,
}

#[derive(Subcommand, Debug)]
enum TxnSubcommand {
    /// Print the full transaction feed for a wallet.
    List { wallet_id: String },
    /// Print settled transactions only.
    History { wallet_id: String },
    /// Print the dashboard status cards (pending count, incoming total).
    Status { wallet_id: String },
}

#[tokio::main]
async fn main() -> Result<(), CliError> {
    let cli = Cli::parse();
    let ctx = CliContext {
        auth_url: cli.auth_url,
        escrow_url: cli.escrow_url,
        gateway_url: cli.gateway_url,
        ledger_url: cli.ledger_url,
        transactions_url: cli.transactions_url,
    };

    match cli.command {
        Command::Auth(auth) => run_auth(&ctx, auth).await,
        Command::Wallet(wallet) => run_wallet(&ctx, wallet).await,
        Command::Merchant(merchant) => run_merchant(&ctx, merchant).await,
        Command::Txn(txn) => run_txn(&ctx, txn).await,
    }
}

async fn run_auth(ctx: &CliContext, auth: AuthCommand) -> Result<(), CliError> {
    match auth.command {
        AuthSubcommand::RequestOtp { phone } => {
            let url = service_url(&ctx.auth_url, "/auth/request-otp");
            let body = serde_json::json!({ "phone": phone });
            let response: OtpRequested = post_json("auth service", &url, &body).await?;
            print_json(&response)?;
            if let Some(otp) = &response.debug_otp {
                eprintln!("echoed OTP: {otp}");
            }
            Ok(())
        }
        AuthSubcommand::VerifyOtp { phone, otp } => {
            let url = service_url(&ctx.auth_url, "/auth/verify-otp");
            let body = serde_json::json!({ "phone": phone, "otp": otp });
            let response: VerifyOtpResponse = post_json("auth service", &url, &body).await?;
            if response.status != "success" {
                return Err(CliError::VerifyRefused(response.status));
            }
            print_json(&response.user)?;
            Ok(())
        }
        AuthSubcommand::Profile { wallet_id } => {
            let url = service_url(&ctx.auth_url, &format!("/auth/profile/{wallet_id}"));
            let profile: Profile = get_json("auth service", &url).await?;
            print_json(&profile)?;
            Ok(())
        }
    }
}

async fn run_wallet(ctx: &CliContext, wallet: WalletCommand) -> Result<(), CliError> {
    match wallet.command {
        WalletSubcommand::Balance { wallet_id } => {
            let balance = fetch_balance(ctx, &wallet_id).await?;
            print_json(&balance)?;
            Ok(())
        }
        WalletSubcommand::Watch {
            wallet_id,
            interval_secs,
        } => {
            let interval = Duration::from_secs(interval_secs.max(1));
            loop {
                match fetch_balance(ctx, &wallet_id).await {
                    Ok(balance) => println!(
                        "spendable={:.2} escrow_locked={:.2}",
                        balance.spendable_balance, balance.escrow_locked
                    ),
                    Err(error) => eprintln!("watch error: {error}"),
                }
                tokio::time::sleep(interval).await;
            }
        }
        WalletSubcommand::PrepareOffline {
            wallet_id,
            phone,
            amount,
            device_id,
            rooted,
            debugger,
            emulator,
            invalid_signature,
        } => {
            let url = service_url(&ctx.gateway_url, "/gateway/prepare-offline");
            let request = PrepareOfflineRequest {
                wallet_id,
                phone,
                amount,
                integrity_report: IntegrityReport {
                    device_id,
                    is_rooted: rooted,
                    app_signature_valid: !invalid_signature,
                    has_debugger: debugger,
                    is_emulator: emulator,
                },
            };
            let response: PrepareOfflineResponse =
                post_json("gateway", &url, &request).await?;
            print_json(&response)?;
            eprintln!(
                "status={} minted={} total={}",
                response.status,
                response.tokens.len(),
                wire::token_bundle_total(&response.tokens)
            );
            Ok(())
        }
    }
}

async fn run_merchant(ctx: &CliContext, merchant: MerchantCommand) -> Result<(), CliError> {
    match merchant.command {
        MerchantSubcommand::Earnings { merchant_id } => {
            let earnings = fetch_earnings(ctx, &merchant_id).await?;
            print_json(&earnings)?;
            Ok(())
        }
        MerchantSubcommand::Watch {
            merchant_id,
            interval_secs,
        } => {
            let interval = Duration::from_secs(interval_secs.max(1));
            loop {
                match fetch_earnings(ctx, &merchant_id).await {
                    Ok(earnings) => println!("total_earnings={:.2}", earnings.total_earnings),
                    Err(error) => eprintln!("watch error: {error}"),
                }
                tokio::time::sleep(interval).await;
            }
        }
    }
}

async fn run_txn(ctx: &CliContext, txn: TxnCommand) -> Result<(), CliError> {
    match txn.command {
        TxnSubcommand::List { wallet_id } => {
            let url = service_url(&ctx.transactions_url, &format!("/transactions/{wallet_id}"));
            let feed: Vec<TransactionRecord> = get_json("transaction service", &url).await?;
            print_json(&feed)?;
            Ok(())
        }
        TxnSubcommand::History { wallet_id } => {
            let url = service_url(&ctx.transactions_url, &format!("/history/{wallet_id}"));
            let feed: Vec<TransactionRecord> = get_json("transaction service", &url).await?;
            print_json(&feed)?;
            Ok(())
        }
        TxnSubcommand::Status { wallet_id } => {
            let url = service_url(&ctx.transactions_url, &format!("/status/{wallet_id}"));
            let status: DashboardStatus = get_json("transaction service", &url).await?;
            print_json(&status)?;
            Ok(())
        }
    }
}

async fn fetch_balance(ctx: &CliContext, wallet_id: &str) -> Result<WalletBalance, CliError> {
    let url = service_url(&ctx.escrow_url, &format!("/wallet/{wallet_id}/balance"));
    get_json("escrow service", &url).await
}

async fn fetch_earnings(ctx: &CliContext, merchant_id: &str) -> Result<MerchantEarnings, CliError> {
    let url = service_url(&ctx.ledger_url, &format!("/merchant/{merchant_id}/earnings"));
    get_json("settlement ledger", &url).await
}

async fn get_json<T: serde::de::DeserializeOwned>(
    service: &'static str,
    url: &str,
) -> Result<T, CliError> {
    let client = reqwest::Client::new();
    let response = client.get(url).send().await?;
    decode_response(service, response).await
}

async fn post_json<T: serde::de::DeserializeOwned>(
    service: &'static str,
    url: &str,
    body: &impl serde::Serialize,
) -> Result<T, CliError> {
    let client = reqwest::Client::new();
    let response = client.post(url).json(body).send().await?;
    decode_response(service, response).await
}

async fn decode_response<T: serde::de::DeserializeOwned>(
    service: &'static str,
    response: reqwest::Response,
) -> Result<T, CliError> {
    let status = response.status();
    let body = response.text().await?;
    if !status.is_success() {
        let message = wire::error_detail(&body).unwrap_or(body);
        return Err(CliError::Service {
            service,
            status: status.as_u16(),
            message,
        });
    }
    Ok(wire::decode_body(&body)?)
}

fn service_url(base: &str, path: &str) -> String {
    format!("{}{path}", base.trim_end_matches('/'))
}

fn print_json(value: &impl serde::Serialize) -> Result<(), CliError> {
    let rendered = serde_json::to_string_pretty(value)?;
    println!("{rendered}");
    Ok(())
}
