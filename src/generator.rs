use std::collections::HashMap;

use prost::Message;
use prost_types::compiler::{
    code_generator_response::{Feature, File},
    CodeGeneratorResponse,
};

use crate::{
    descriptor::{CodeGeneratorRequest, FileDescriptorProto},
    error::GenerateError,
    message::render_message,
    options::GeneratorOptions,
    service::render_service,
};

const EXTENSION: &str = "cls";

pub fn decode_request(bytes: &[u8]) -> Result<CodeGeneratorRequest, GenerateError> {
    Ok(CodeGeneratorRequest::decode(bytes)?)
}

pub fn generate_response(request: CodeGeneratorRequest) -> CodeGeneratorResponse {
    match generate_files(&request) {
        Ok(file) => CodeGeneratorResponse {
            error: None,
            supported_features: Some(Feature::Proto3Optional as u64),
            file,
        },

        Err(error) => {
            tracing::error!(%error, "generation aborted");

            CodeGeneratorResponse {
                error: Some(error.to_string()),
                supported_features: Some(Feature::Proto3Optional as u64),
                file: Vec::new(),
            }
        }
    }
}

/// One `.cls` per top-level message, then one per service, for each requested
/// file in request order. Any error discards everything generated so far.
pub fn generate_files(request: &CodeGeneratorRequest) -> Result<Vec<File>, GenerateError> {
    let proto_files: HashMap<&str, &FileDescriptorProto> = request
        .proto_file
        .iter()
        .map(|file| (file.name(), file))
        .collect();

    let options = GeneratorOptions::parse(request.parameter());
    tracing::debug!(?options, "resolved generator options");

    let mut files = Vec::new();

    for file_name in &request.file_to_generate {
        let file = proto_files
            .get(file_name.as_str())
            .ok_or_else(|| GenerateError::MissingFile {
                file: file_name.clone(),
            })?;

        let package = file.package();
        tracing::debug!(file = file_name.as_str(), package, "generating");

        for message in &file.message_type {
            files.push(apex_file(
                message.name(),
                render_message(message, package, options.extends_message.as_deref()),
            ));
        }

        for service in &file.service {
            files.push(apex_file(
                &format!("{}Service", service.name()),
                render_service(service, package, &options)?,
            ));
        }
    }

    Ok(files)
}

fn apex_file(class_name: &str, content: String) -> File {
    let name = format!("{class_name}.{EXTENSION}");
    tracing::debug!(name = name.as_str(), "generated");

    File {
        name: Some(name),
        content: Some(content),
        ..Default::default()
    }
}
