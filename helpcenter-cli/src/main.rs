//! Help Center CLI
//!
//! Command-line access to the payment provider, plus offline tools for
//! signing and checking webhook payloads.

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};

use helpcenter_gateway::{
    DEFAULT_API_URL, RazorpayClient, sign_webhook, validate_webhook_signature,
};
use helpcenter_types::{CreateOrderRequest, Credentials, PaymentGateway, PaymentVerification};

#[derive(Parser)]
#[command(name = "helpcenter")]
#[command(author, version, about = "Help center payment tools", long_about = None)]
struct Cli {
    /// Base URL of the payment provider API
    #[arg(long, env = "RAZORPAY_API_URL", default_value = DEFAULT_API_URL)]
    api_url: String,

    /// Provider key id
    #[arg(long, env = "RAZORPAY_KEY_ID")]
    key_id: Option<String>,

    /// Provider key secret
    #[arg(long, env = "RAZORPAY_KEY_SECRET", hide_env_values = true)]
    key_secret: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Webhook signature tools (offline)
    Webhook {
        #[command(subcommand)]
        action: WebhookCommands,
    },
    /// Order operations
    Order {
        #[command(subcommand)]
        action: OrderCommands,
    },
    /// Payment operations
    Payment {
        #[command(subcommand)]
        action: PaymentCommands,
    },
}

/// Payload source: inline or from a file, read byte-for-byte.
#[derive(Args)]
#[group(required = true, multiple = false)]
struct BodySource {
    /// Raw payload
    #[arg(long)]
    body: Option<String>,
    /// File holding the raw payload
    #[arg(long)]
    file: Option<PathBuf>,
}

impl BodySource {
    fn read(self) -> Result<String> {
        match (self.body, self.file) {
            (Some(body), _) => Ok(body),
            (None, Some(path)) => std::fs::read_to_string(&path)
                .with_context(|| format!("failed to read {}", path.display())),
            (None, None) => anyhow::bail!("either --body or --file is required"),
        }
    }
}

#[derive(Subcommand)]
enum WebhookCommands {
    /// Print the signature for a payload
    Sign {
        #[arg(long, env = "RAZORPAY_WEBHOOK_SECRET", hide_env_values = true)]
        secret: String,
        #[command(flatten)]
        source: BodySource,
    },
    /// Check a payload against a signature
    Verify {
        #[arg(long, env = "RAZORPAY_WEBHOOK_SECRET", hide_env_values = true)]
        secret: String,
        #[arg(long)]
        signature: String,
        #[command(flatten)]
        source: BodySource,
    },
    /// Start a local webhook listener that checks signatures
    Listen {
        /// Port to listen on
        #[arg(long, default_value = "3000")]
        port: u16,
        #[arg(long, env = "RAZORPAY_WEBHOOK_SECRET", hide_env_values = true)]
        secret: String,
    },
}

#[derive(Subcommand)]
enum OrderCommands {
    /// Create an order
    Create {
        /// Amount in smallest currency unit
        #[arg(long)]
        amount: i64,
        #[arg(long, default_value = "INR")]
        currency: String,
        #[arg(long)]
        receipt: Option<String>,
    },
    /// Get order details
    Get {
        /// Order ID
        id: String,
    },
}

#[derive(Subcommand)]
enum PaymentCommands {
    /// Get payment details
    Get {
        /// Payment ID
        id: String,
    },
    /// Capture an authorized payment
    Capture {
        id: String,
        #[arg(long)]
        amount: i64,
        #[arg(long, default_value = "INR")]
        currency: String,
    },
    /// Check a checkout signature for an order/payment pair
    Verify {
        #[arg(long)]
        order_id: String,
        #[arg(long)]
        payment_id: String,
        #[arg(long)]
        signature: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let client = RazorpayClient::with_base_url(
        Credentials::from_optional(cli.key_id, cli.key_secret),
        cli.api_url,
    );

    match cli.command {
        Commands::Webhook { action } => match action {
            WebhookCommands::Sign { secret, source } => {
                let body = source.read()?;
                println!("{}", sign_webhook(body.as_bytes(), &secret));
            }
            WebhookCommands::Verify {
                secret,
                signature,
                source,
            } => {
                let body = source.read()?;
                if validate_webhook_signature(&body, &signature, &secret) {
                    println!("✓ valid");
                } else {
                    println!("✗ invalid");
                    std::process::exit(1);
                }
            }
            WebhookCommands::Listen { port, secret } => {
                let app = axum::Router::new()
                    .route("/webhook", axum::routing::post(handle_webhook))
                    .with_state(Arc::new(secret));
                let addr = std::net::SocketAddr::from(([127, 0, 0, 1], port));
                println!("Listening for webhooks on {}", addr);
                let listener = tokio::net::TcpListener::bind(&addr).await?;
                axum::serve(listener, app).await?;
            }
        },

        Commands::Order { action } => match action {
            OrderCommands::Create {
                amount,
                currency,
                receipt,
            } => {
                let mut req = CreateOrderRequest::new(amount, currency.to_uppercase());
                if let Some(receipt) = receipt {
                    req = req.with_receipt(receipt);
                }
                let order = client.create_order(req).await?;
                println!("{}", serde_json::to_string_pretty(&order)?);
            }
            OrderCommands::Get { id } => {
                let order = client.fetch_order(&id).await?;
                println!("{}", serde_json::to_string_pretty(&order)?);
            }
        },

        Commands::Payment { action } => match action {
            PaymentCommands::Get { id } => {
                let payment = client.fetch_payment(&id).await?;
                println!("{}", serde_json::to_string_pretty(&payment)?);
            }
            PaymentCommands::Capture {
                id,
                amount,
                currency,
            } => {
                let payment = client
                    .capture_payment(&id, amount, &currency.to_uppercase())
                    .await?;
                println!("{}", serde_json::to_string_pretty(&payment)?);
            }
            PaymentCommands::Verify {
                order_id,
                payment_id,
                signature,
            } => {
                let verification = PaymentVerification {
                    order_id,
                    payment_id,
                    signature,
                };
                if client.verify_payment_signature(&verification) {
                    println!("✓ valid");
                } else {
                    println!("✗ invalid");
                    std::process::exit(1);
                }
            }
        },
    }

    Ok(())
}

async fn handle_webhook(
    axum::extract::State(secret): axum::extract::State<Arc<String>>,
    headers: axum::http::HeaderMap,
    body: String,
) -> impl axum::response::IntoResponse {
    let signature = headers
        .get("x-razorpay-signature")
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default();
    let valid = validate_webhook_signature(&body, signature, &secret);

    println!("POST /webhook HTTP/1.1");
    for (name, value) in &headers {
        println!("{}: {:?}", name, value);
    }
    println!();
    println!("{}", body);
    println!("signature: {}", if valid { "valid" } else { "INVALID" });
    println!("----------------------------------------");

    if valid {
        axum::http::StatusCode::OK
    } else {
        axum::http::StatusCode::UNAUTHORIZED
    }
}
