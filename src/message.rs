use crate::{descriptor::DescriptorProto, fields::property_type, string_builder::StringBuilder};

fn class_header(name: &str, extends: Option<&str>) -> String {
    match extends {
        Some(base) => format!("public class {name} extends {base}"),
        None => format!("public class {name}"),
    }
}

fn push_properties(builder: &mut StringBuilder, message: &DescriptorProto, package: &str) {
    for field in &message.field {
        builder.push(format!(
            "public {} {} {{ get; set; }}",
            property_type(field, package),
            field.name()
        ));
    }
}

/// Renders `message` as an Apex class, with one inner class per directly nested
/// message. Types nested any deeper are not rendered.
pub fn render_message(message: &DescriptorProto, package: &str, extends: Option<&str>) -> String {
    let mut builder = StringBuilder::new();

    builder.block(class_header(message.name(), extends), |builder| {
        push_properties(builder, message, package);

        for (index, nested) in message.nested_type.iter().enumerate() {
            if index > 0 || !message.field.is_empty() {
                builder.blank();
            }

            builder.block(format!("public class {}", nested.name()), |builder| {
                push_properties(builder, nested, package);
            });
        }
    });

    builder.build()
}
