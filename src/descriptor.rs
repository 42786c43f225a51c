// The subset of plugin.proto and descriptor.proto this generator reads.
//
// prost_types::MethodOptions drops extension data on decode, so the request is
// decoded into these types instead, with `google.api.http` declared as a plain
// field on MethodOptions.

use prost_types::field_descriptor_proto::{Label, Type};

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct CodeGeneratorRequest {
    #[prost(string, repeated, tag = "1")]
    pub file_to_generate: Vec<String>,
    #[prost(string, optional, tag = "2")]
    pub parameter: Option<String>,
    #[prost(message, repeated, tag = "15")]
    pub proto_file: Vec<FileDescriptorProto>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct FileDescriptorProto {
    #[prost(string, optional, tag = "1")]
    pub name: Option<String>,
    #[prost(string, optional, tag = "2")]
    pub package: Option<String>,
    #[prost(message, repeated, tag = "4")]
    pub message_type: Vec<DescriptorProto>,
    #[prost(message, repeated, tag = "6")]
    pub service: Vec<ServiceDescriptorProto>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct DescriptorProto {
    #[prost(string, optional, tag = "1")]
    pub name: Option<String>,
    #[prost(message, repeated, tag = "2")]
    pub field: Vec<FieldDescriptorProto>,
    #[prost(message, repeated, tag = "3")]
    pub nested_type: Vec<DescriptorProto>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct FieldDescriptorProto {
    #[prost(string, optional, tag = "1")]
    pub name: Option<String>,
    #[prost(enumeration = "Label", optional, tag = "4")]
    pub label: Option<i32>,
    #[prost(enumeration = "Type", optional, tag = "5")]
    pub r#type: Option<i32>,
    /// Fully-qualified (leading `.`) when produced by protoc.
    #[prost(string, optional, tag = "6")]
    pub type_name: Option<String>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ServiceDescriptorProto {
    #[prost(string, optional, tag = "1")]
    pub name: Option<String>,
    #[prost(message, repeated, tag = "2")]
    pub method: Vec<MethodDescriptorProto>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct MethodDescriptorProto {
    #[prost(string, optional, tag = "1")]
    pub name: Option<String>,
    #[prost(string, optional, tag = "2")]
    pub input_type: Option<String>,
    #[prost(string, optional, tag = "3")]
    pub output_type: Option<String>,
    #[prost(message, optional, tag = "4")]
    pub options: Option<MethodOptions>,
}

impl MethodDescriptorProto {
    pub fn http_rule(&self) -> Option<&HttpRule> {
        self.options.as_ref()?.http.as_ref()
    }
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct MethodOptions {
    /// `extend google.protobuf.MethodOptions { HttpRule http = 72295728; }`
    #[prost(message, optional, tag = "72295728")]
    pub http: Option<HttpRule>,
}

/// google.api.HttpRule, reduced to the verb patterns. `custom`, `body` and
/// `additional_bindings` are skipped on decode; a rule carrying only `custom`
/// decodes with no pattern.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct HttpRule {
    #[prost(oneof = "http_rule::Pattern", tags = "2, 3, 4, 5, 6")]
    pub pattern: Option<http_rule::Pattern>,
}

pub mod http_rule {
    #[derive(Clone, PartialEq, ::prost::Oneof)]
    pub enum Pattern {
        #[prost(string, tag = "2")]
        Get(String),
        #[prost(string, tag = "3")]
        Put(String),
        #[prost(string, tag = "4")]
        Post(String),
        #[prost(string, tag = "5")]
        Delete(String),
        #[prost(string, tag = "6")]
        Patch(String),
    }
}
