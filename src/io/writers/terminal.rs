use crate::analysis::exclusively_used_dependencies;
use crate::formatting::{create_formatter, FormattingConfig, OutputFormatter};
use crate::io::output::{AnalysisReport, OutputWriter};
use std::io::Write;

const RULE: &str = "═══════════════════════════════════════════";
const THIN_RULE: &str = "───────────────────────────────────────────";

pub struct TerminalWriter<W: Write> {
    writer: W,
    formatter: Box<dyn OutputFormatter>,
}

impl<W: Write> TerminalWriter<W> {
    pub fn new(writer: W, formatting: FormattingConfig) -> Self {
        Self {
            writer,
            formatter: create_formatter(formatting),
        }
    }
}

impl<W: Write> OutputWriter for TerminalWriter<W> {
    fn write_report(&mut self, report: &AnalysisReport<'_>) -> anyhow::Result<()> {
        self.write_header(report)?;
        self.write_dependencies(report)?;
        self.write_methods(report)?;
        self.write_verdict(report)?;
        self.write_limitations(report)?;
        Ok(())
    }
}

impl<W: Write> TerminalWriter<W> {
    fn write_header(&mut self, report: &AnalysisReport<'_>) -> anyhow::Result<()> {
        let f = &self.formatter;
        writeln!(self.writer, "{}", f.header(RULE))?;
        writeln!(
            self.writer,
            "{}",
            f.header(&format!("  RESPONSIBILITY MAP  {}", report.source_name))
        )?;
        writeln!(self.writer, "{}", f.header(RULE))?;
        if let Some(selected) = report.selected {
            writeln!(self.writer, "Selected: {}", f.bold(selected))?;
        }
        writeln!(self.writer)?;
        Ok(())
    }

    fn write_dependencies(&mut self, report: &AnalysisReport<'_>) -> anyhow::Result<()> {
        let f = &self.formatter;
        let dependencies = &report.result.dependencies;
        writeln!(
            self.writer,
            "{} Dependencies ({})",
            f.emoji("🔍", "*"),
            dependencies.len()
        )?;
        writeln!(self.writer, "{THIN_RULE}")?;

        if dependencies.is_empty() {
            writeln!(self.writer, "  {}", f.dim("none"))?;
        }
        for dependency in dependencies {
            let selected = report.selected == Some(dependency.type_name.as_str());
            let marker = if selected { "▶" } else { "●" };
            let consumers = report.result.consumers_of(&dependency.type_name);
            let binding = match (&dependency.parameter_name, &dependency.field_name) {
                (p, Some(field)) if !p.is_empty() => format!("{p} / {field}"),
                (_, Some(field)) => field.clone(),
                (p, None) => p.clone(),
            };
            writeln!(
                self.writer,
                "  {} {}  {}",
                f.swatch(marker, &dependency.color),
                f.bold(&dependency.type_name),
                f.dim(&binding)
            )?;
            let used_by = if consumers.is_empty() {
                f.dim("unused in methods")
            } else {
                consumers.join(", ")
            };
            writeln!(self.writer, "      used by: {used_by}")?;
        }
        writeln!(self.writer)?;
        Ok(())
    }

    fn write_methods(&mut self, report: &AnalysisReport<'_>) -> anyhow::Result<()> {
        let f = &self.formatter;
        let usages: Vec<_> = report
            .result
            .method_usages
            .iter()
            .filter(|usage| report.selected.is_none_or(|selected| usage.uses(selected)))
            .collect();
        if usages.is_empty() {
            return Ok(());
        }

        writeln!(self.writer, "{} Methods", f.emoji("📊", "*"))?;
        writeln!(self.writer, "{THIN_RULE}")?;
        let width = usages
            .iter()
            .map(|usage| usage.method_name.len())
            .max()
            .unwrap_or(0);
        for usage in usages {
            let keys = usage
                .dependency_keys
                .iter()
                .map(|key| match report.result.dependency(key) {
                    Some(dependency) => f.swatch(key, &dependency.color),
                    None => key.clone(),
                })
                .collect::<Vec<_>>()
                .join(", ");
            let mixed = if usage.is_mixed() {
                format!("  {}", f.warning("[mixed]"))
            } else {
                String::new()
            };
            writeln!(
                self.writer,
                "  {:<width$}  → {keys}{mixed}",
                usage.method_name
            )?;
        }
        writeln!(self.writer)?;
        Ok(())
    }

    fn write_verdict(&mut self, report: &AnalysisReport<'_>) -> anyhow::Result<()> {
        let f = &self.formatter;
        let result = report.result;
        let verdict = if result.has_multiple_responsibilities {
            format!("{} {}", f.emoji("✗", "[FAIL]"), f.error(report.verdict()))
        } else {
            format!("{} {}", f.emoji("✓", "[OK]"), f.success(report.verdict()))
        };
        writeln!(self.writer, "Verdict: {verdict}")?;

        let exclusive = exclusively_used_dependencies(&result.dependencies, &result.method_usages);
        if !exclusive.is_empty() {
            writeln!(
                self.writer,
                "  Dependencies with a dedicated method: {}",
                exclusive.join(", ")
            )?;
        }
        if !result.mixed_methods.is_empty() {
            writeln!(
                self.writer,
                "  Methods mixing dependencies: {}",
                f.warning(&result.mixed_methods.join(", "))
            )?;
        }
        Ok(())
    }

    fn write_limitations(&mut self, report: &AnalysisReport<'_>) -> anyhow::Result<()> {
        if report.result.limitations.is_empty() {
            return Ok(());
        }
        let f = &self.formatter;
        writeln!(self.writer)?;
        writeln!(self.writer, "{} Known limitations", f.emoji("⚠", "[WARN]"))?;
        for limitation in &report.result.limitations {
            writeln!(self.writer, "  {}", f.dim(&limitation.to_string()))?;
        }
        Ok(())
    }
}
