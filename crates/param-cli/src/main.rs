use std::io::Read;
use std::process::exit;
use std::sync::Arc;

use param_providers::InMemoryDataClient;
use param_store::InMemoryContractStore;
use parametric_adapter::{AdapterContext, AdapterController, AppConfig};
use serde_json::Value;
use tracing_subscriber::EnvFilter;

const USAGE: &str = "Uso: param-cli evaluate --request <FILE|-> [--api-spec <FILE>] [--data <FILE>] [--contracts <FILE>]";

fn read_json(path: &str) -> Result<Value, String> {
    let mut text = String::new();
    if path == "-" {
        std::io::stdin().read_to_string(&mut text).map_err(|e| format!("stdin: {e}"))?;
    } else {
        text = std::fs::read_to_string(path).map_err(|e| format!("{path}: {e}"))?;
    }
    serde_json::from_str(&text).map_err(|e| format!("{path}: {e}"))
}

#[tokio::main]
async fn main() {
    // logs a stderr; stdout queda para el envelope
    tracing_subscriber::fmt().with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
                             .with_writer(std::io::stderr)
                             .init();

    let args: Vec<String> = std::env::args().collect();
    if args.len() < 2 || args[1] != "evaluate" {
        eprintln!("{USAGE}");
        exit(2);
    }
    let mut request: Option<String> = None;
    let mut api_spec: Option<String> = None;
    let mut data: Option<String> = None;
    let mut contracts: Option<String> = None;
    let mut i = 2;
    while i < args.len() {
        let slot = match args[i].as_str() {
            "--request" => &mut request,
            "--api-spec" => &mut api_spec,
            "--data" => &mut data,
            "--contracts" => &mut contracts,
            other => {
                eprintln!("[param-cli] opción desconocida: {other}\n{USAGE}");
                exit(2);
            }
        };
        i += 1;
        match args.get(i) {
            Some(v) => *slot = Some(v.clone()),
            None => {
                eprintln!("{USAGE}");
                exit(2);
            }
        }
        i += 1;
    }
    let Some(request) = request else {
        eprintln!("{USAGE}");
        exit(2);
    };

    let mut config = match AppConfig::from_env() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("[param-cli] config error: {e}");
            exit(5);
        }
    };
    if let Some(path) = api_spec {
        config.api_spec_path = Some(path.into());
    }
    let context = match AdapterContext::initialize(&config) {
        Ok(ctx) => ctx,
        Err(e) => {
            eprintln!("[param-cli] startup error: {e}");
            exit(5);
        }
    };

    let mut client = match data.as_deref().map(read_json).transpose() {
        Ok(Some(fixture)) => match InMemoryDataClient::from_fixture(&fixture) {
            Ok(c) => c,
            Err(e) => {
                eprintln!("[param-cli] data fixture: {e}");
                exit(5);
            }
        },
        Ok(None) => InMemoryDataClient::new(),
        Err(e) => {
            eprintln!("[param-cli] data fixture: {e}");
            exit(5);
        }
    };
    if let Some(url) = &config.data_gateway_url {
        client = client.with_gateway_url(url.clone());
    }
    let mut store = match contracts.as_deref().map(read_json).transpose() {
        Ok(Some(fixture)) => match InMemoryContractStore::from_fixture(&fixture) {
            Ok(s) => s,
            Err(e) => {
                eprintln!("[param-cli] contracts fixture: {e}");
                exit(5);
            }
        },
        Ok(None) => InMemoryContractStore::new(),
        Err(e) => {
            eprintln!("[param-cli] contracts fixture: {e}");
            exit(5);
        }
    };
    if let Some(url) = &config.store.url {
        store = store.with_source(url.clone());
    }

    let body = match read_json(&request) {
        Ok(v) => v,
        Err(e) => {
            eprintln!("[param-cli] request: {e}");
            exit(2);
        }
    };

    let controller = AdapterController::new(context, Arc::new(client), Arc::new(store));
    let envelope = controller.evaluate(body).await;
    match serde_json::to_string_pretty(&envelope) {
        Ok(out) => println!("{out}"),
        Err(e) => {
            eprintln!("[param-cli] cannot serialize envelope: {e}");
            exit(1);
        }
    }
    exit(if envelope.is_success() { 0 } else { 1 });
}
