use std::collections::HashMap;

use indoc::indoc;
use prost::Message;

use crate::{
    descriptor::{CodeGeneratorRequest, FileDescriptorProto},
    generator::generate_response,
};

// Only `file` is needed; re-decoding protox's encoded set keeps the
// google.api.http extension that prost_types would drop.
#[derive(Clone, PartialEq, ::prost::Message)]
struct FileDescriptorSet {
    #[prost(message, repeated, tag = "1")]
    file: Vec<FileDescriptorProto>,
}

fn compile_request(files: &[&str], parameter: Option<&str>) -> CodeGeneratorRequest {
    let encoded = protox::Compiler::new(["./src/samples/protos"])
        .unwrap()
        .include_imports(true)
        .open_files(files)
        .unwrap()
        .encode_file_descriptor_set();

    CodeGeneratorRequest {
        file_to_generate: files.iter().map(|&file| file.to_owned()).collect(),
        parameter: parameter.map(ToOwned::to_owned),
        proto_file: FileDescriptorSet::decode(encoded.as_slice()).unwrap().file,
    }
}

fn generate(files: &[&str], parameter: Option<&str>) -> HashMap<String, String> {
    let response = generate_response(compile_request(files, parameter));
    assert_eq!(response.error, None);

    response
        .file
        .into_iter()
        .map(|file| (file.name().to_owned(), file.content().to_owned()))
        .collect()
}

#[test]
fn foo() {
    let generated = generate(&["kitchen_sink.proto"], None);

    assert_eq!(
        generated["Foo.cls"],
        indoc! {"
            public class Foo {
                public String bar { get; set; }
                public List<Integer> ids { get; set; }
            }
        "}
    );
}

#[test]
fn kitchen_sink() {
    let generated = generate(&["kitchen_sink.proto"], Some("extends_message=Model"));

    // Imports (timestamp.proto) aren't generated, and enums never are.
    let mut names: Vec<&str> = generated.keys().map(String::as_str).collect();
    names.sort_unstable();
    assert_eq!(names, ["Foo.cls", "KitchenSink.cls"]);

    assert_eq!(
        generated["KitchenSink.cls"],
        indoc! {"
            public class KitchenSink extends Model {
                public String name { get; set; }
                public Integer count { get; set; }
                public Integer small { get; set; }
                public Integer signed { get; set; }
                public Boolean enabled { get; set; }
                public Double ratio { get; set; }
                public Double precise { get; set; }
                public unknown blob { get; set; }
                public unknown fixed { get; set; }
                public unknown mood { get; set; }
                public Foo foo { get; set; }
                public List<Foo> foos { get; set; }
                public .google.protobuf.Timestamp created_at { get; set; }
                public KitchenSink.Inner inner { get; set; }
                public String nickname { get; set; }

                public class Inner {
                    public List<String> tags { get; set; }
                    public KitchenSink.Inner.Deeper deeper { get; set; }
                }

                public class Sibling {
                    public Integer id { get; set; }
                }
            }
        "}
    );
}

#[test]
fn greeter() {
    let generated = generate(&["greeter.proto"], Some("extends_service=ApiClient"));

    assert!(generated["HelloRequest.cls"].starts_with("public class HelloRequest {\n"));
    assert!(generated["HelloReply.cls"].starts_with("public class HelloReply {\n"));

    let mut names: Vec<&str> = generated.keys().map(String::as_str).collect();
    names.sort_unstable();
    assert_eq!(names, ["GreeterService.cls", "HelloReply.cls", "HelloRequest.cls"]);

    assert_eq!(
        generated["GreeterService.cls"],
        indoc! {"
            public class GreeterService extends ApiClient {
                public HelloReply SayHello(HelloRequest input) {
                    HttpResponse res = this.call('GET', '/v1/hello', JSON.serialize(input));
                    return (HelloReply) JSON.deserializeStrict(res.getBody(), HelloReply.class);
                }

                public HelloReply Update(HelloRequest input) {
                    HttpResponse res = this.call('PATCH', '/v1/hello/{name}', JSON.serialize(input));
                    return (HelloReply) JSON.deserializeStrict(res.getBody(), HelloReply.class);
                }

                public .google.protobuf.Empty Forget(.google.protobuf.Empty input) {
                    HttpResponse res = this.call('DELETE', '/v1/hello', JSON.serialize(input));
                    return (.google.protobuf.Empty) JSON.deserializeStrict(res.getBody(), .google.protobuf.Empty.class);
                }

                private HttpResponse call(String method, String path, String requestBody) {
                    HttpRequest req = new HttpRequest();
                    req.setMethod(method);

                    // The default callout timeout of 10 seconds is often too short.
                    req.setTimeout(60000);

                    req.setEndpoint('https://example.com' + path);
                    req.setBody(requestBody);

                    Http http = new Http();
                    HttpResponse res = http.send(req);

                    if (res.getStatusCode() == 401) {
                        // throw new CalloutException(res.getStatus());
                    }
                    return res;
                }
            }
        "}
    );
}

#[test]
fn response_order_is_file_then_definition() {
    let response = generate_response(compile_request(
        &["greeter.proto", "kitchen_sink.proto"],
        None,
    ));

    let names: Vec<&str> = response.file.iter().map(|file| file.name()).collect();
    assert_eq!(
        names,
        [
            "HelloRequest.cls",
            "HelloReply.cls",
            "GreeterService.cls",
            "Foo.cls",
            "KitchenSink.cls",
        ]
    );
}

#[test]
fn unknown_parameters_are_ignored() {
    assert_eq!(
        generate(&["greeter.proto"], Some("extends=Base,lang=apex")),
        generate(&["greeter.proto"], None)
    );
}

#[test]
fn endpoint_is_not_configurable() {
    assert_eq!(
        generate(&["greeter.proto"], Some("endpoint_base=callout:Greeter")),
        generate(&["greeter.proto"], None)
    );
}

#[test]
fn unbound_annotation_fails_the_run() {
    let response = generate_response(compile_request(
        &["kitchen_sink.proto", "unbound.proto"],
        None,
    ));

    assert!(response.file.is_empty());
    assert!(response
        .error
        .unwrap()
        .starts_with("Broken.Ping has a google.api.http annotation"));
}
