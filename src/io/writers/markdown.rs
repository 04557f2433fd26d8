use crate::analysis::exclusively_used_dependencies;
use crate::io::output::{AnalysisReport, OutputWriter};
use std::io::Write;

pub struct MarkdownWriter<W: Write> {
    writer: W,
}

impl<W: Write> MarkdownWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write> OutputWriter for MarkdownWriter<W> {
    fn write_report(&mut self, report: &AnalysisReport<'_>) -> anyhow::Result<()> {
        self.write_header(report)?;
        self.write_summary(report)?;
        self.write_dependencies(report)?;
        self.write_methods(report)?;
        self.write_limitations(report)?;
        Ok(())
    }
}

impl<W: Write> MarkdownWriter<W> {
    fn write_header(&mut self, report: &AnalysisReport<'_>) -> anyhow::Result<()> {
        writeln!(self.writer, "# Responsibility Map: `{}`", report.source_name)?;
        writeln!(self.writer)?;
        writeln!(self.writer, "**Verdict:** {}", report.verdict())?;
        writeln!(self.writer)?;
        if let Some(selected) = report.selected {
            writeln!(self.writer, "**Selected:** `{selected}`")?;
            writeln!(self.writer)?;
        }
        Ok(())
    }

    fn write_summary(&mut self, report: &AnalysisReport<'_>) -> anyhow::Result<()> {
        let result = report.result;
        let exclusive = exclusively_used_dependencies(&result.dependencies, &result.method_usages);

        writeln!(self.writer, "## Summary")?;
        writeln!(self.writer)?;
        writeln!(self.writer, "| Metric | Value |")?;
        writeln!(self.writer, "|--------|-------|")?;
        writeln!(self.writer, "| Dependencies | {} |", result.dependencies.len())?;
        writeln!(
            self.writer,
            "| Methods using dependencies | {} |",
            result.method_usages.len()
        )?;
        writeln!(
            self.writer,
            "| Dependencies with a dedicated method | {} |",
            exclusive.len()
        )?;
        writeln!(
            self.writer,
            "| Methods mixing dependencies | {} |",
            result.mixed_methods.len()
        )?;
        writeln!(self.writer)?;
        Ok(())
    }

    fn write_dependencies(&mut self, report: &AnalysisReport<'_>) -> anyhow::Result<()> {
        if report.result.dependencies.is_empty() {
            return Ok(());
        }
        writeln!(self.writer, "## Dependencies")?;
        writeln!(self.writer)?;
        writeln!(self.writer, "| Type | Parameter | Field | Color | Used by |")?;
        writeln!(self.writer, "|------|-----------|-------|-------|---------|")?;
        for dependency in &report.result.dependencies {
            writeln!(
                self.writer,
                "| `{}` | {} | {} | `{}` | {} |",
                dependency.type_name,
                code_or_dash(&dependency.parameter_name),
                code_or_dash(dependency.field_name.as_deref().unwrap_or_default()),
                dependency.color,
                report.result.consumers_of(&dependency.type_name).join(", ")
            )?;
        }
        writeln!(self.writer)?;
        Ok(())
    }

    fn write_methods(&mut self, report: &AnalysisReport<'_>) -> anyhow::Result<()> {
        let usages: Vec<_> = report
            .result
            .method_usages
            .iter()
            .filter(|usage| report.selected.is_none_or(|selected| usage.uses(selected)))
            .collect();
        if usages.is_empty() {
            return Ok(());
        }
        writeln!(self.writer, "## Methods")?;
        writeln!(self.writer)?;
        writeln!(self.writer, "| Method | Dependencies | Mixed |")?;
        writeln!(self.writer, "|--------|--------------|-------|")?;
        for usage in usages {
            writeln!(
                self.writer,
                "| `{}` | {} | {} |",
                usage.method_name,
                usage
                    .dependency_keys
                    .iter()
                    .map(|key| format!("`{key}`"))
                    .collect::<Vec<_>>()
                    .join(", "),
                if usage.is_mixed() { "yes" } else { "" }
            )?;
        }
        writeln!(self.writer)?;
        Ok(())
    }

    fn write_limitations(&mut self, report: &AnalysisReport<'_>) -> anyhow::Result<()> {
        if report.result.limitations.is_empty() {
            return Ok(());
        }
        writeln!(self.writer, "## Known Limitations")?;
        writeln!(self.writer)?;
        for limitation in &report.result.limitations {
            writeln!(
                self.writer,
                "- **{}** {}",
                limitation.code(),
                limitation.description()
            )?;
        }
        writeln!(self.writer)?;
        Ok(())
    }
}

fn code_or_dash(name: &str) -> String {
    if name.is_empty() {
        "-".to_string()
    } else {
        format!("`{name}`")
    }
}
