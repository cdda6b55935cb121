//! odftext - show how ODF paragraphs collapse their whitespace

use std::process::ExitCode;

use clap::Parser;
use serde::Serialize;
use tracing_subscriber::EnvFilter;

use odftext::dom::{AttrKey, ElementKind, NodeId, OdfDom, QName};
use odftext::text::{
    is_character_element, is_odf_whitespace_char, is_paragraph, is_significant_whitespace,
    is_trailing_whitespace,
};

#[derive(Parser)]
#[command(name = "odftext")]
#[command(version, about = "Show which whitespace survives in ODF paragraphs", long_about = None)]
#[command(after_help = "EXAMPLES:
    odftext content.xml             Print each paragraph as rendered
    odftext --json content.xml      Report significant whitespace offsets as JSON
    odftext --trailing content.xml  Also count trailing whitespace")]
struct Cli {
    /// XML file (content.xml or any fragment with text:p elements)
    #[arg(value_name = "FILE")]
    input: String,

    /// Emit a JSON report instead of text
    #[arg(long)]
    json: bool,

    /// Report trailing whitespace per paragraph
    #[arg(long)]
    trailing: bool,
}

/// Whitespace decisions for one text run.
#[derive(Serialize)]
struct RunReport {
    text: String,
    significant: Vec<usize>,
    trailing: Vec<usize>,
}

#[derive(Serialize)]
struct ParagraphReport {
    index: usize,
    heading: bool,
    /// Paragraph text after collapsing.
    rendered: String,
    runs: Vec<RunReport>,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<(), String> {
    let dom = OdfDom::parse_file(&cli.input).map_err(|e| format!("{}: {e}", cli.input))?;

    let reports: Vec<_> = dom
        .descendants(dom.document())
        .filter(|&id| is_paragraph(&dom, id))
        .enumerate()
        .map(|(index, paragraph)| report_paragraph(&dom, index, paragraph))
        .collect();

    if cli.json {
        let json = serde_json::to_string_pretty(&reports).map_err(|e| e.to_string())?;
        println!("{json}");
        return Ok(());
    }

    for report in &reports {
        let marker = if report.heading { "h" } else { "p" };
        println!("{marker}{:>4}: {:?}", report.index, report.rendered);
        if cli.trailing {
            let trailing: usize = report.runs.iter().map(|r| r.trailing.len()).sum();
            if trailing > 0 {
                println!("       {trailing} trailing whitespace char(s)");
            }
        }
    }
    Ok(())
}

fn report_paragraph(dom: &OdfDom, index: usize, paragraph: NodeId) -> ParagraphReport {
    let mut report = ParagraphReport {
        index,
        heading: dom.element_kind(paragraph) == Some(ElementKind::Heading),
        rendered: String::new(),
        runs: Vec::new(),
    };
    render_children(dom, paragraph, &mut report);
    report
}

/// Append the content of `parent` to `report`.
///
/// Character elements and `text:s` are leaves; nested paragraphs (frame
/// captions, notes) are reported on their own.
fn render_children(dom: &OdfDom, parent: NodeId, report: &mut ParagraphReport) {
    for id in dom.children(parent) {
        if let Some(text) = dom.text_content(id) {
            report.runs.push(render_run(dom, id, text, &mut report.rendered));
            continue;
        }
        if is_character_element(dom, id) {
            report.rendered.push(match dom.element_kind(id) {
                Some(ElementKind::Tab) => '\t',
                Some(ElementKind::LineBreak) => '\n',
                _ => '\u{fffc}',
            });
            continue;
        }
        match dom.element_kind(id) {
            Some(ElementKind::Space) => {
                let count = dom
                    .attr(id, &AttrKey::Other(QName::text("c")))
                    .and_then(|c| c.parse::<usize>().ok())
                    .unwrap_or(1);
                report.rendered.extend(std::iter::repeat_n(' ', count));
            }
            _ if is_paragraph(dom, id) => {}
            _ => render_children(dom, id, report),
        }
    }
}

fn render_run(dom: &OdfDom, id: NodeId, text: &str, rendered: &mut String) -> RunReport {
    let mut significant = Vec::new();
    let mut trailing = Vec::new();
    for (offset, c) in text.chars().enumerate() {
        if !is_odf_whitespace_char(c) {
            rendered.push(c);
            continue;
        }
        if is_significant_whitespace(dom, id, offset) {
            significant.push(offset);
            rendered.push(' ');
        }
        if is_trailing_whitespace(dom, id, offset) {
            trailing.push(offset);
        }
    }
    RunReport {
        text: text.to_string(),
        significant,
        trailing,
    }
}
