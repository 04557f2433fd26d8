//! Denylist of cross-cutting framework services.
//!
//! Logging, configuration, caching and hosting abstractions are injected into
//! almost every class; counting them as dependencies would flag nearly every
//! class as mixing responsibilities.

use std::collections::HashSet;

/// Base type names (generic arguments stripped) filtered by default.
pub const DEFAULT_FRAMEWORK_TYPES: &[&str] = &[
    "ILogger",
    "ILoggerFactory",
    "IConfiguration",
    "IOptions",
    "IOptionsSnapshot",
    "IOptionsMonitor",
    "IMemoryCache",
    "IDistributedCache",
    "IHostEnvironment",
    "IWebHostEnvironment",
    "IHostingEnvironment",
    "IHostApplicationLifetime",
    "IHttpContextAccessor",
    "IServiceProvider",
];

/// Decides which dependency types are dropped before analysis.
#[derive(Debug, Clone, Default)]
pub struct FrameworkFilter {
    denied: HashSet<String>,
}

impl FrameworkFilter {
    /// Filter that keeps every type.
    pub fn disabled() -> Self {
        Self::default()
    }

    /// Filter over [`DEFAULT_FRAMEWORK_TYPES`].
    pub fn standard() -> Self {
        Self::with_extra(std::iter::empty::<&str>())
    }

    /// Filter over the default denylist plus caller-supplied base names.
    pub fn with_extra<I, S>(extra: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let denied = DEFAULT_FRAMEWORK_TYPES
            .iter()
            .map(|name| name.to_string())
            .chain(extra.into_iter().map(|name| base_type_name(name.as_ref()).to_string()))
            .collect();
        Self { denied }
    }

    pub fn from_flag(filter_framework_types: bool) -> Self {
        if filter_framework_types {
            Self::standard()
        } else {
            Self::disabled()
        }
    }

    pub fn is_excluded(&self, type_name: &str) -> bool {
        !self.denied.is_empty() && self.denied.contains(base_type_name(type_name))
    }
}

/// `ILogger<OrderService>` -> `ILogger`, `Microsoft.Extensions.Logging.ILogger` -> `ILogger`.
pub fn base_type_name(type_name: &str) -> &str {
    let without_generics = type_name
        .split_once('<')
        .map_or(type_name, |(base, _)| base)
        .trim_end_matches(['?', '[', ']']);
    without_generics
        .rsplit_once('.')
        .map_or(without_generics, |(_, last)| last)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_type_name_strips_generics_and_namespace() {
        assert_eq!(base_type_name("ILogger<OrderService>"), "ILogger");
        assert_eq!(base_type_name("Microsoft.Extensions.Logging.ILogger"), "ILogger");
        assert_eq!(base_type_name("IOrderService?"), "IOrderService");
        assert_eq!(base_type_name("IOrderService"), "IOrderService");
    }

    #[test]
    fn test_standard_filter_excludes_logger_variants() {
        let filter = FrameworkFilter::standard();
        assert!(filter.is_excluded("ILogger<OrderService>"));
        assert!(filter.is_excluded("IOptions<SmtpSettings>"));
        assert!(!filter.is_excluded("IOrderService"));
    }

    #[test]
    fn test_disabled_filter_keeps_everything() {
        assert!(!FrameworkFilter::disabled().is_excluded("ILogger<OrderService>"));
    }

    #[test]
    fn test_extra_entries_are_normalized() {
        let filter = FrameworkFilter::with_extra(["IMediator<Unit>"]);
        assert!(filter.is_excluded("IMediator"));
        assert!(filter.is_excluded("ILogger"));
    }
}
