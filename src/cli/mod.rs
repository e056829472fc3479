//! CLI command handling
//!
//! Resolves settings, then either performs a single translation call or
//! runs the test suite, and formats the output.

use std::path::Path;

use crate::client::{self, ApiClient, ClientConfig, Envelope, TranslateEndpoint};
use crate::commands::{OutputFormat, TestArgs};
use crate::common::config::Config;
use crate::common::{Error, Result};
use crate::testing::{self, RunOptions};

/// Dispatch a CLI invocation
///
/// Returns whether every recorded check passed. Failed checks are not
/// errors; `Err` is reserved for bad settings and local IO failures.
pub async fn dispatch(args: TestArgs) -> Result<bool> {
    let config = match &args.config_file {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };

    let host = args.host.clone().unwrap_or_else(|| config.server.host.clone());
    let port = args.port.unwrap_or(config.server.port);
    let client_config = ClientConfig::new(host, port)?.with_timeouts(config.timeouts.clone());
    let client = ApiClient::new(client_config)?;

    let mut options = RunOptions::from_config(&config);
    if let Some(max) = args.max_text_length {
        options.max_text_length = max;
    }

    tracing::debug!(base_url = client.base_url(), selector = %args.selector, "Resolved settings");

    if let Some(image) = &args.image {
        return translate_single(&client, &args, image, &options).await;
    }

    let results = testing::run_tests(&client, args.selector, &options).await;

    if args.output == OutputFormat::Json {
        println!("{}", serde_json::to_string_pretty(&results)?);
    }

    Ok(results.all_passed())
}

/// Run one translation call for `--image`
async fn translate_single(
    client: &ApiClient,
    args: &TestArgs,
    image: &Path,
    options: &RunOptions,
) -> Result<bool> {
    if args.save.is_some() && args.endpoint != TranslateEndpoint::Image {
        return Err(Error::Config(
            "--save requires --endpoint image".to_string(),
        ));
    }

    let translate_config = args
        .config
        .as_deref()
        .map(client::parse_config)
        .transpose()?;

    let envelope = client
        .translate(args.endpoint, image, translate_config.as_ref())
        .await;

    match args.output {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&envelope)?),
        OutputFormat::Summary => client::print_response(&envelope, options.max_text_length),
    }

    if let Some(save) = &args.save {
        save_image(&envelope, save)?;
    }

    Ok(envelope.is_success())
}

fn save_image(envelope: &Envelope, path: &Path) -> Result<()> {
    match envelope.image_data() {
        Some(bytes) => {
            std::fs::write(path, bytes).map_err(|e| Error::file_write(path, e))?;
            eprintln!("Saved {} bytes to {}", bytes.len(), path.display());
            Ok(())
        }
        None => {
            tracing::warn!(path = %path.display(), "No image data to save");
            Ok(())
        }
    }
}
