use tera::{Context, Tera};

use crate::error::ExportError;
use crate::report::DiagnosisReport;

/// Default report template (Jinja2 syntax, markdown-subset output consumed
/// by [`crate::docx::generate_docx`]).
pub const REPORT_TEMPLATE: &str = "\
# {{ title }}

Generated {{ generated_at }}

{% for entry in entries %}## {{ entry.index }}. {{ entry.name }}

- **Confidence Level:** {{ entry.confidence_level }}
- **Explanation:** {{ entry.explanation }}

{% endfor %}";

/// Render a Tera template with a DiagnosisReport.
///
/// The `template_content` is the raw template string (Jinja2 syntax).
/// The report fields become the template context variables.
pub fn render_report(
    template_name: &str,
    template_content: &str,
    report: &DiagnosisReport,
) -> Result<String, ExportError> {
    let mut tera = Tera::default();
    tera.add_raw_template(template_name, template_content)
        .map_err(|e| ExportError::TemplateParse(e.to_string()))?;

    // Convert the report to a Tera context via serde_json
    let value = serde_json::to_value(report)?;
    let context =
        Context::from_value(value).map_err(|e| ExportError::TemplateRender(e.to_string()))?;

    let rendered = tera.render(template_name, &context)?;
    Ok(rendered)
}
