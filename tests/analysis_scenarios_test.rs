mod common;

use common::*;
use pretty_assertions::assert_eq;
use respmap::analysis::{analyze, AnalyzerConfig, Limitation, PALETTE};
use respmap::{Error, ResponsibilityAnalyzer};

#[test]
fn test_process_controller_single_consumer() {
    let result = analyze(PROCESS_CONTROLLER, true);

    assert_eq!(type_names(&result), vec!["IA", "IB", "IC"]);
    assert_eq!(result.dependencies[0].parameter_name, "a");
    assert_eq!(result.dependencies[0].field_name.as_deref(), Some("_a"));
    assert_eq!(result.dependencies[2].field_name.as_deref(), Some("_c"));

    assert_eq!(result.method_usages.len(), 1);
    assert_eq!(result.method_usages[0].method_name, "GetWorkpieces");
    assert_eq!(result.method_usages[0].dependency_keys, vec!["IA"]);
    assert!(!result.has_multiple_responsibilities);
    assert!(result.mixed_methods.is_empty());
}

#[test]
fn test_dedicated_methods_flag_violation() {
    for source in [
        ORDER_AND_EMAIL,
        ORDER_AND_EMAIL_DOCUMENTED,
        ORDER_AND_EMAIL_CONVENTIONAL,
    ] {
        let result = analyze(source, true);

        assert_eq!(type_names(&result), vec!["IOrderService", "IEmailService"]);
        assert_eq!(result.consumers_of("IOrderService"), vec!["ProcessOrder"]);
        assert_eq!(
            result.consumers_of("IEmailService"),
            vec!["SendConfirmationEmail"]
        );
        assert!(result.has_multiple_responsibilities);
        assert!(result.mixed_methods.is_empty());
    }
}

#[test]
fn test_doc_comments_do_not_add_limitations() {
    let result = analyze(ORDER_AND_EMAIL_DOCUMENTED, true);
    assert!(result.limitations.is_empty());
}

#[test]
fn test_dependencies_used_together_look_cohesive() {
    let result = analyze(ALWAYS_TOGETHER, true);

    assert_eq!(type_names(&result), vec!["IRepository", "IRenderer"]);
    assert!(!result.has_multiple_responsibilities);
    assert_eq!(result.mixed_methods, vec!["Build", "Preview"]);
}

#[test]
fn test_field_only_dependency() {
    let result = analyze(FIELD_ONLY, true);

    assert_eq!(type_names(&result), vec!["ITimeSource"]);
    let dependency = &result.dependencies[0];
    assert_eq!(dependency.parameter_name, "");
    assert_eq!(dependency.field_name.as_deref(), Some("_time"));
    assert_eq!(result.consumers_of("ITimeSource"), vec!["Now"]);
    assert!(!result.has_multiple_responsibilities);
}

#[test]
fn test_no_constructor_and_no_fields() {
    let result = analyze(NO_DEPENDENCIES, true);

    assert!(result.dependencies.is_empty());
    assert!(result.method_usages.is_empty());
    assert!(!result.has_multiple_responsibilities);
    assert!(result.mixed_methods.is_empty());
}

#[test]
fn test_framework_filter_toggle() {
    let filtered = analyze(WITH_FRAMEWORK_SERVICES, true);
    assert_eq!(type_names(&filtered), vec!["IInvoiceRepository"]);
    assert_eq!(filtered.dependencies[0].color, PALETTE[0]);

    let unfiltered = analyze(WITH_FRAMEWORK_SERVICES, false);
    assert_eq!(
        type_names(&unfiltered),
        vec!["ILogger<InvoiceService>", "IInvoiceRepository"]
    );
    assert_eq!(unfiltered.mixed_methods, vec!["Load"]);
}

#[test]
fn test_colors_follow_discovery_order() {
    let params: Vec<String> = (0..10).map(|i| format!("IDep{i} dep{i}")).collect();
    let source = format!("class Wide({}) {{ }}", params.join(", "));
    let result = analyze(&source, true);

    assert_eq!(result.dependencies.len(), 10);
    for (index, dependency) in result.dependencies.iter().enumerate() {
        assert_eq!(dependency.color, PALETTE[index % PALETTE.len()]);
    }
    assert_eq!(result.dependencies[8].color, result.dependencies[0].color);
}

#[test]
fn test_analysis_is_idempotent() {
    for source in [
        PROCESS_CONTROLLER,
        ORDER_AND_EMAIL,
        ALWAYS_TOGETHER,
        FIELD_ONLY,
        WITH_FRAMEWORK_SERVICES,
    ] {
        assert_eq!(analyze(source, true), analyze(source, true));
    }
}

#[test]
fn test_multiple_classes_are_reported() {
    let source = format!("{ORDER_AND_EMAIL}\npublic class Other {{ }}\n");
    let result = analyze(&source, true);
    assert!(result.limitations.contains(&Limitation::MultipleClasses));
}

#[test]
fn test_configured_analyzer_enforces_size_limit() {
    let analyzer = ResponsibilityAnalyzer::new(&AnalyzerConfig {
        max_source_bytes: 64,
        ..AnalyzerConfig::default()
    });
    let err = analyzer.analyze(ORDER_AND_EMAIL).unwrap_err();
    assert!(matches!(err, Error::SourceTooLarge { limit: 64, .. }));

    let result = ResponsibilityAnalyzer::default()
        .analyze(ORDER_AND_EMAIL)
        .unwrap();
    assert!(result.has_multiple_responsibilities);
}

#[test]
fn test_extra_framework_types_from_config() {
    let analyzer = ResponsibilityAnalyzer::new(&AnalyzerConfig {
        extra_framework_types: vec!["IInvoiceRepository".to_string()],
        ..AnalyzerConfig::default()
    });
    let result = analyzer.analyze(WITH_FRAMEWORK_SERVICES).unwrap();
    assert!(result.dependencies.is_empty());
}
