use crate::fixture::{Action, Trace};
use crate::layout::RecordLayout;
use anyhow::{Context, Result};
use colored::*;
use std::io::{BufWriter, Write};

pub fn write_json(trace: &Trace, out: &mut dyn Write) -> Result<()> {
    let mut buf = BufWriter::new(out);
    serde_json::to_writer_pretty(&mut buf, trace).context("Failed to serialize trace")?;
    buf.write_all(b"\n")?;
    buf.flush()?;
    Ok(())
}

fn describe(action: &Action) -> String {
    match action {
        Action::Declare => "declare point".to_string(),
        Action::AssignFields { x, y } => format!("point.x = {}; point.y = {}", x, y),
        Action::Initialize { x, y } => format!("initialize(point, {}, {})", x, y),
        Action::Move { dx, dy } => format!("move(point, {}, {})", dx, dy),
    }
}

pub fn render_text(trace: &Trace) -> String {
    let mut out = String::new();
    out.push_str(&format!("{}\n", "Point fixture".bold().blue()));
    for (i, step) in trace.steps.iter().enumerate() {
        out.push_str(&format!(
            "  {}. {:<36} -> ({}, {})\n",
            i + 1,
            describe(&step.action),
            step.point.x,
            step.point.y
        ));
    }
    out.push_str(&format!(
        "{}\n",
        format!("result: {} (exit code {})", trace.result, trace.exit_code).green()
    ));
    out
}

pub fn render_layout(layout: &RecordLayout) -> String {
    let mut out = format!(
        "{}\n",
        format!(
            "struct {} (size {}, align {})",
            layout.name, layout.size, layout.align
        )
        .bold()
        .blue()
    );
    for f in &layout.fields {
        out.push_str(&format!(
            "  [{}] {}: offset {}, size {}\n",
            f.index, f.name, f.offset, f.size
        ));
    }
    out
}
