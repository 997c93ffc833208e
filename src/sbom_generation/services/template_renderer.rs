/// Placeholder replaced by the port name
pub const PORT_PLACEHOLDER: &str = "{port}";

/// Placeholder replaced by the port version
pub const VERSION_PLACEHOLDER: &str = "{version}";

/// TemplateRenderer service for Mapping Table templates
///
/// Plain substring substitution of `{version}` and `{port}`. Any other
/// brace token is left untouched and nothing is escaped.
pub struct TemplateRenderer;

impl TemplateRenderer {
    pub fn render(template: &str, name: &str, version: &str) -> String {
        template
            .replace(VERSION_PLACEHOLDER, version)
            .replace(PORT_PLACEHOLDER, name)
    }
}
