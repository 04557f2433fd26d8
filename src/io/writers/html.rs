use crate::highlight::{escape, DEPENDENCY_CLASS, MIXED_CLASS};
use crate::io::output::{AnalysisReport, OutputWriter};
use std::io::Write;

const STYLE: &str = r#"
body { font-family: -apple-system, "Segoe UI", sans-serif; margin: 2rem; color: #1f2328; }
h1 { font-size: 1.3rem; }
.verdict { font-weight: 600; padding: .5rem .75rem; border-radius: 6px; display: inline-block; }
.verdict.violation { background: #ffebe9; color: #cf222e; }
.verdict.cohesive { background: #dafbe1; color: #1a7f37; }
.legend { list-style: none; padding: 0; }
.legend li { margin: .25rem 0; }
.legend li.selected { font-weight: 700; }
.swatch { display: inline-block; width: .9rem; height: .9rem; border-radius: 3px; vertical-align: middle; margin-right: .4rem; }
.consumers { color: #656d76; font-size: .9em; }
pre { background: #f6f8fa; padding: 1rem; border-radius: 6px; overflow-x: auto; line-height: 1.45; }
.mixed-responsibility { outline: 2px dashed #cf222e; outline-offset: 1px; }
.limitations { color: #9a6700; }
"#;

pub struct HtmlWriter<W: Write> {
    writer: W,
}

impl<W: Write> HtmlWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write> OutputWriter for HtmlWriter<W> {
    fn write_report(&mut self, report: &AnalysisReport<'_>) -> anyhow::Result<()> {
        let title = escape(report.source_name);
        writeln!(self.writer, "<!DOCTYPE html>")?;
        writeln!(self.writer, r#"<html lang="en">"#)?;
        writeln!(self.writer, "<head>")?;
        writeln!(self.writer, r#"<meta charset="utf-8">"#)?;
        writeln!(self.writer, "<title>Responsibility Map: {title}</title>")?;
        writeln!(self.writer, "<style>{STYLE}</style>")?;
        writeln!(self.writer, "</head>")?;
        writeln!(self.writer, "<body>")?;
        writeln!(self.writer, "<h1>Responsibility Map: <code>{title}</code></h1>")?;

        self.write_verdict(report)?;
        self.write_legend(report)?;
        self.write_limitations(report)?;

        writeln!(self.writer, "<pre><code>{}</code></pre>", report.markup())?;
        writeln!(self.writer, "</body>")?;
        writeln!(self.writer, "</html>")?;
        Ok(())
    }
}

impl<W: Write> HtmlWriter<W> {
    fn write_verdict(&mut self, report: &AnalysisReport<'_>) -> anyhow::Result<()> {
        let class = if report.result.has_multiple_responsibilities {
            "violation"
        } else {
            "cohesive"
        };
        writeln!(
            self.writer,
            r#"<p class="verdict {class}">{}</p>"#,
            escape(report.verdict())
        )?;
        if !report.result.mixed_methods.is_empty() {
            writeln!(
                self.writer,
                r#"<p>Methods mixing dependencies: <span class="{MIXED_CLASS}-list">{}</span></p>"#,
                escape(&report.result.mixed_methods.join(", "))
            )?;
        }
        Ok(())
    }

    fn write_legend(&mut self, report: &AnalysisReport<'_>) -> anyhow::Result<()> {
        if report.result.dependencies.is_empty() {
            return Ok(());
        }
        writeln!(self.writer, r#"<ul class="legend">"#)?;
        for dependency in &report.result.dependencies {
            let selected = report.selected == Some(dependency.type_name.as_str());
            let consumers = report.result.consumers_of(&dependency.type_name).join(", ");
            writeln!(
                self.writer,
                r#"<li class="{DEPENDENCY_CLASS}-legend{}" data-dependency="{}"><span class="swatch" style="background-color: {}"></span><code>{}</code> <span class="consumers">{}</span></li>"#,
                if selected { " selected" } else { "" },
                escape(&dependency.type_name),
                escape(&dependency.color),
                escape(&dependency.type_name),
                escape(&consumers),
            )?;
        }
        writeln!(self.writer, "</ul>")?;
        Ok(())
    }

    fn write_limitations(&mut self, report: &AnalysisReport<'_>) -> anyhow::Result<()> {
        if report.result.limitations.is_empty() {
            return Ok(());
        }
        writeln!(self.writer, r#"<ul class="limitations">"#)?;
        for limitation in &report.result.limitations {
            writeln!(self.writer, "<li>{}</li>", escape(&limitation.to_string()))?;
        }
        writeln!(self.writer, "</ul>")?;
        Ok(())
    }
}
