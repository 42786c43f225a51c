use indoc::indoc;

use crate::{
    descriptor::{MethodDescriptorProto, ServiceDescriptorProto},
    error::GenerateError,
    fields::unqualify,
    http_rule,
    options::GeneratorOptions,
    string_builder::StringBuilder,
};

const DEFAULT_ENDPOINT_BASE: &str = "https://example.com";

// A 401 is detected but deliberately not thrown, so callers see the raw response.
const CALL_HELPER: &str = indoc! {"
    private HttpResponse call(String method, String path, String requestBody) {
        HttpRequest req = new HttpRequest();
        req.setMethod(method);

        // The default callout timeout of 10 seconds is often too short.
        req.setTimeout(60000);

        req.setEndpoint(<endpoint_base> + path);
        req.setBody(requestBody);

        Http http = new Http();
        HttpResponse res = http.send(req);

        if (res.getStatusCode() == 401) {
            // throw new CalloutException(res.getStatus());
        }
        return res;
    }"};

/// Quotes `text` as an Apex string literal.
fn apex_string(text: &str) -> String {
    format!("'{}'", text.replace('\\', "\\\\").replace('\'', "\\'"))
}

fn push_method(
    builder: &mut StringBuilder,
    service: &ServiceDescriptorProto,
    method: &MethodDescriptorProto,
    package: &str,
) -> Result<bool, GenerateError> {
    let Some(rule) = method.http_rule() else {
        tracing::debug!(
            service = service.name(),
            method = method.name(),
            "skipping method without google.api.http"
        );
        return Ok(false);
    };

    let binding = http_rule::resolve(rule).ok_or_else(|| GenerateError::UnresolvedHttpRule {
        service: service.name().to_owned(),
        method: method.name().to_owned(),
    })?;

    let input_type = unqualify(method.input_type(), package);
    let output_type = unqualify(method.output_type(), package);

    builder.block(
        format!(
            "public {output_type} {}({input_type} input)",
            method.name()
        ),
        |builder| {
            builder.push(format!(
                "HttpResponse res = this.call('{}', {}, JSON.serialize(input));",
                binding.verb,
                apex_string(binding.path)
            ));
            builder.push(format!(
                "return ({output_type}) JSON.deserializeStrict(res.getBody(), {output_type}.class);"
            ));
        },
    );

    Ok(true)
}

/// Renders a `<Service>Service` client class with one method per HTTP-bound rpc.
/// Rpcs without a `google.api.http` annotation are left out.
pub fn render_service(
    service: &ServiceDescriptorProto,
    package: &str,
    options: &GeneratorOptions,
) -> Result<String, GenerateError> {
    let name = format!("{}Service", service.name());
    let header = match &options.extends_service {
        Some(base) => format!("public class {name} extends {base} {{"),
        None => format!("public class {name} {{"),
    };

    let mut builder = StringBuilder::new();
    builder.push(header);
    builder.indent();

    for method in &service.method {
        if push_method(&mut builder, service, method, package)? {
            builder.blank();
        }
    }

    builder.push(CALL_HELPER.replace("<endpoint_base>", &apex_string(DEFAULT_ENDPOINT_BASE)));
    builder.dedent();
    builder.push("}");

    Ok(builder.build())
}
