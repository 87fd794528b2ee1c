use crate::application::registry::{FormatterDescriptor, FormatterRegistry};
use crate::ports::outbound::{Formatter, FormatterContext};
use crate::shared::FormatterResult;

/// Factory for creating formatters from a registry
///
/// Combines selection and instantiation: the registry decides which
/// implementation handles a request, the factory builds an instance of it
/// for one request context.
pub struct FormatterFactory<'a> {
    registry: &'a FormatterRegistry,
}

impl<'a> FormatterFactory<'a> {
    pub fn new(registry: &'a FormatterRegistry) -> Self {
        Self { registry }
    }

    /// Selects the implementation for `name` without instantiating it
    ///
    /// # Errors
    /// Returns `NoFormatterAvailable` if nothing satisfies the request
    pub fn select(&self, name: &str, multiple: bool) -> FormatterResult<&'a FormatterDescriptor> {
        self.registry.find_formatter(name, multiple)
    }

    /// Creates a formatter instance for the requested format
    ///
    /// # Errors
    /// Returns `NoFormatterAvailable` if nothing satisfies the request
    ///
    /// # Examples
    /// ```
    /// use red_formatter::adapters::outbound::formatters::register_builtin_formatters;
    /// use red_formatter::adapters::outbound::memory::BufferSink;
    /// use red_formatter::application::factories::FormatterFactory;
    /// use red_formatter::application::registry::FormatterRegistry;
    /// use red_formatter::ports::outbound::FormatterContext;
    ///
    /// let mut registry = FormatterRegistry::new();
    /// register_builtin_formatters(&mut registry).unwrap();
    ///
    /// let context = FormatterContext::new("http://example.com/", Box::new(BufferSink::new()));
    /// let formatter = FormatterFactory::new(&registry).create("txt", false, context);
    /// assert!(formatter.is_ok());
    /// ```
    pub fn create(
        &self,
        name: &str,
        multiple: bool,
        context: FormatterContext,
    ) -> FormatterResult<Box<dyn Formatter>> {
        Ok(self.select(name, multiple)?.instantiate(context))
    }

    /// Returns the progress message for the selected implementation
    pub fn progress_message(descriptor: &FormatterDescriptor) -> String {
        format!(
            "📝 Rendering {} output with {}...",
            descriptor.name().unwrap_or("unnamed"),
            descriptor.short_type_name()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::outbound::formatters::{
        register_builtin_formatters, TableHtmlFormatter, TextFormatter,
    };
    use crate::adapters::outbound::memory::BufferSink;
    use crate::report::domain::AnalysisResult;
    use crate::shared::error::FormatterError;

    fn registry() -> FormatterRegistry {
        let mut registry = FormatterRegistry::new();
        register_builtin_formatters(&mut registry).unwrap();
        registry
    }

    #[test]
    fn test_select() {
        let registry = registry();
        let factory = FormatterFactory::new(&registry);
        assert!(factory.select("txt", false).unwrap().is::<TextFormatter>());
        assert!(factory.select("nope", true).unwrap().is::<TableHtmlFormatter>());
    }

    #[test]
    fn test_create_builds_instance_writing_to_context_sink() {
        let registry = registry();
        let sink = BufferSink::new();
        let context = FormatterContext::new("http://example.com/", Box::new(sink.clone()));
        let mut formatter = FormatterFactory::new(&registry)
            .create("txt", false, context)
            .unwrap();

        let result = AnalysisResult::new("http://example.com/").with_status(204, "No Content");
        formatter.start_output().unwrap();
        formatter.finish_output(&result).unwrap();
        assert!(sink.contents().starts_with("204 No Content\n"));
    }

    #[test]
    fn test_create_reports_missing_formatter() {
        let registry = FormatterRegistry::new();
        let context = FormatterContext::new("http://example.com/", Box::new(BufferSink::new()));
        let err = FormatterFactory::new(&registry)
            .create("txt", false, context)
            .err()
            .unwrap();
        assert!(matches!(err, FormatterError::NoFormatterAvailable { .. }));
    }

    #[test]
    fn test_progress_message() {
        let registry = registry();
        let descriptor = registry.find_formatter("har", true).unwrap();
        assert_eq!(
            FormatterFactory::progress_message(descriptor),
            "📝 Rendering har output with HarFormatter..."
        );
    }
}
