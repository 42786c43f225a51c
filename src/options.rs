/// Settings resolved from the `--apex_opt` parameter string, e.g.
/// `extends_message=Model,extends_service=ApiClient`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GeneratorOptions {
    /// Superclass for every generated message class.
    pub extends_message: Option<String>,
    /// Superclass for every generated service client.
    pub extends_service: Option<String>,
}

impl GeneratorOptions {
    /// Parses comma separated `key=value` pairs. Parts without `=` and unknown
    /// keys are ignored; later keys override earlier ones.
    pub fn parse(parameter: &str) -> Self {
        let mut options = Self::default();

        for part in parameter.split(',') {
            let Some((key, value)) = part.split_once('=') else {
                continue;
            };

            let value = value.trim();
            let set = (!value.is_empty()).then(|| value.to_owned());

            match key.trim() {
                "extends_message" => options.extends_message = set,
                "extends_service" => options.extends_service = set,
                other => tracing::debug!(key = other, "ignoring unknown option"),
            }
        }

        options
    }
}
