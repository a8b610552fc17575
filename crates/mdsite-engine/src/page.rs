//! Page templating: a document's title and rendered body substituted into
//! an HTML template.

use thiserror::Error;

use crate::{
    error::ConvertError,
    html::RenderOptions,
    parsing::{extract_title, markdown_to_html_node},
};

#[derive(Debug, Error)]
pub enum PageError {
    #[error(transparent)]
    Convert(#[from] ConvertError),

    #[error("Template is missing the {0} placeholder")]
    MissingPlaceholder(&'static str),
}

/// An HTML page template with `{{ Title }}` and `{{ Content }}` placeholders.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Template {
    source: String,
}

impl Template {
    pub const TITLE: &'static str = "{{ Title }}";
    pub const CONTENT: &'static str = "{{ Content }}";

    /// # Errors
    /// [`PageError::MissingPlaceholder`] if the source has no `{{ Content }}`.
    /// A missing `{{ Title }}` is allowed.
    pub fn new(source: impl Into<String>) -> Result<Self, PageError> {
        let source = source.into();
        if !source.contains(Self::CONTENT) {
            return Err(PageError::MissingPlaceholder(Self::CONTENT));
        }
        Ok(Self { source })
    }

    /// Replaces every placeholder occurrence, title first, then content.
    pub fn render(&self, title: &str, content: &str) -> String {
        self.source
            .replace(Self::TITLE, title)
            .replace(Self::CONTENT, content)
    }
}

/// Converts `markdown` and fills `template` with its title and HTML.
pub fn render_page(
    markdown: &str,
    template: &Template,
    options: &RenderOptions,
) -> Result<String, PageError> {
    let title = extract_title(markdown)?;
    let content = markdown_to_html_node(markdown)?.render_with(options);
    Ok(template.render(&title, &content))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const TEMPLATE: &str =
        "<html><head><title>{{ Title }}</title></head><body>{{ Content }}</body></html>";

    #[test]
    fn renders_full_page() {
        let template = Template::new(TEMPLATE).unwrap();
        let page = render_page(
            "# Tolkien Fan Club\n\n**I like Tolkien**",
            &template,
            &RenderOptions::default(),
        )
        .unwrap();
        assert_eq!(
            page,
            "<html><head><title>Tolkien Fan Club</title></head><body><div><h1>Tolkien Fan Club</h1><p><b>I like Tolkien</b></p></div></body></html>"
        );
    }

    #[test]
    fn replaces_every_occurrence() {
        let template = Template::new("{{ Title }}|{{ Content }}|{{ Title }}").unwrap();
        assert_eq!(template.render("T", "C"), "T|C|T");
    }

    #[test]
    fn template_without_title_is_allowed() {
        let template = Template::new("<main>{{ Content }}</main>").unwrap();
        assert_eq!(template.render("ignored", "body"), "<main>body</main>");
    }

    #[test]
    fn template_without_content_is_rejected() {
        assert!(matches!(
            Template::new("<title>{{ Title }}</title>"),
            Err(PageError::MissingPlaceholder(Template::CONTENT))
        ));
    }

    #[test]
    fn page_without_title_fails() {
        let template = Template::new(TEMPLATE).unwrap();
        let err = render_page("just text", &template, &RenderOptions::default()).unwrap_err();
        assert!(matches!(err, PageError::Convert(ConvertError::NoTitleFound)));
    }

    #[test]
    fn strict_options_reach_the_body() {
        let template = Template::new("{{ Content }}").unwrap();
        let page = render_page(
            "# T\n\n![a \"b\"](x.png)",
            &template,
            &RenderOptions::strict(),
        )
        .unwrap();
        assert!(page.contains(r#"alt="a &quot;b&quot;""#));
    }
}
