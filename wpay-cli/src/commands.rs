//! Subcommand execution.

use anyhow::Context;
use serde::Serialize;
use std::path::Path;
use wpay_sdk::client::WalletPayClient;
use wpay_sdk::config::ClientConfig;
use wpay_sdk::objects::{CreateOrderRequest, MoneyAmount, OrderListQuery};
use wpay_sdk::signature::{WebhookRequest, WebhookSign};

use crate::Command;

/// What a finished command reports back to `main`.
#[derive(Debug, PartialEq, Eq)]
pub enum Outcome {
    Done,
    InvalidSignature,
}

pub async fn run(command: Command, config: ClientConfig) -> anyhow::Result<Outcome> {
    let client = WalletPayClient::new(config);

    match command {
        Command::CreateOrder {
            amount,
            currency,
            description,
            external_id,
            customer_telegram_user_id,
            return_url,
            fail_return_url,
            custom_data,
            timeout_seconds,
        } => {
            let request = CreateOrderRequest {
                amount: MoneyAmount::new(currency, amount),
                description: Some(description),
                return_url,
                fail_return_url,
                custom_data,
                external_id,
                timeout_seconds,
                customer_telegram_user_id,
            };
            tracing::info!(external_id = %request.external_id, "Creating order");
            print_json(&client.create_order(request).await?)?;
        }
        Command::Preview { id } => {
            print_json(&client.get_order_preview(&id).await?)?;
        }
        Command::List { offset, count } => {
            let response = client
                .get_order_list(&OrderListQuery::new(offset, count))
                .await?;
            print_json(&response)?;
        }
        Command::Amount => {
            print_json(&client.get_order_amount().await?)?;
        }
        Command::Verify {
            method,
            uri,
            timestamp,
            signature,
            body,
        } => {
            let request = WebhookRequest::from_raw(method, uri, read_body(&body)?);
            let sign = WebhookSign::new(timestamp, signature);
            if client.verify_webhook(&request, &sign)? {
                println!("valid");
            } else {
                tracing::warn!("Webhook signature mismatch");
                println!("invalid");
                return Ok(Outcome::InvalidSignature);
            }
        }
        Command::Sign {
            method,
            uri,
            timestamp,
            body,
        } => {
            let request = WebhookRequest::from_raw(method, uri, read_body(&body)?);
            let signature = client
                .webhook_verifier()
                .compute_signature(&request, &timestamp)?;
            println!("{signature}");
        }
    }

    Ok(Outcome::Done)
}

fn read_body(path: &Path) -> anyhow::Result<String> {
    std::fs::read_to_string(path)
        .with_context(|| format!("failed to read body from {}", path.display()))
}

fn print_json<T: Serialize>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
