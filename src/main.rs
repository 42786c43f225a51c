use std::io::{Read, Write};

use color_eyre::eyre::WrapErr;
use prost::Message;
use tracing_subscriber::EnvFilter;

mod descriptor;
mod error;
mod fields;
mod generator;
mod http_rule;
mod message;
mod options;
mod service;
mod string_builder;

#[cfg(test)]
mod apex_tests;

const LOG_ENV: &str = "PROTOC_GEN_APEX_LOG";

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    // stdout carries the response, so logs go to stderr.
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    let stdin = std::io::stdin();
    let mut bytes: Vec<u8> = Vec::new();
    stdin
        .lock()
        .read_to_end(&mut bytes)
        .wrap_err("couldn't read to end of stdin")?;

    let request = generator::decode_request(&bytes).wrap_err(
        "couldn't parse CodeGeneratorRequest, make sure you're using this as a plugin to protoc",
    )?;

    let mut output = Vec::new();
    generator::generate_response(request)
        .encode(&mut output)
        .wrap_err("couldn't encode CodeGeneratorResponse")?;

    std::io::stdout()
        .write_all(&output)
        .wrap_err("couldn't write to stdout")?;

    Ok(())
}
