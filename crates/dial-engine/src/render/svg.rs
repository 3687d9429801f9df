use std::fmt::Write;

use crate::coords::Vec2;
use crate::paint::{Color, Stroke};
use crate::scene::{CircleCmd, DrawCmd, DrawList, LineCmd, TextCmd};

/// SVG document writer.
///
/// Serializes a [`DrawList`] in paint order. Root-level accessibility
/// attributes and an embedded stylesheet are optional.
#[derive(Debug, Clone, Default)]
pub struct SvgDocument {
    size: Vec2,
    role: Option<String>,
    aria_label: Option<String>,
    classes: Vec<String>,
    stylesheet: Option<String>,
}

impl SvgDocument {
    pub fn new(size: Vec2) -> Self {
        Self { size, ..Self::default() }
    }

    pub fn role(mut self, role: impl Into<String>) -> Self {
        self.role = Some(role.into());
        self
    }

    pub fn aria_label(mut self, label: impl Into<String>) -> Self {
        self.aria_label = Some(label.into());
        self
    }

    pub fn class(mut self, class: impl Into<String>) -> Self {
        self.classes.push(class.into());
        self
    }

    pub fn stylesheet(mut self, css: impl Into<String>) -> Self {
        self.stylesheet = Some(css.into());
        self
    }

    /// Renders `list` into a standalone SVG document.
    pub fn render(&self, list: &mut DrawList) -> String {
        let mut out = String::with_capacity(256 + list.len() * 96);
        let (w, h) = (fmt_num(self.size.x), fmt_num(self.size.y));

        // `write!` into a String cannot fail.
        let _ = write!(
            out,
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}""#
        );
        if let Some(role) = &self.role {
            let _ = write!(out, r#" role="{}""#, escape_xml(role));
        }
        if let Some(label) = &self.aria_label {
            let _ = write!(out, r#" aria-label="{}""#, escape_xml(label));
        }
        if !self.classes.is_empty() {
            let _ = write!(out, r#" class="{}""#, escape_xml(&self.classes.join(" ")));
        }
        out.push_str(">\n");

        if let Some(label) = &self.aria_label {
            let _ = writeln!(out, "  <title>{}</title>", escape_xml(label));
        }
        if let Some(css) = &self.stylesheet {
            let _ = writeln!(out, "  <style><![CDATA[\n{css}\n  ]]></style>");
        }

        let mut count = 0usize;
        for item in list.iter_in_paint_order() {
            out.push_str("  ");
            match &item.cmd {
                DrawCmd::Circle(c) => write_circle(&mut out, c, item.part.as_deref()),
                DrawCmd::Line(l) => write_line(&mut out, l, item.part.as_deref()),
                DrawCmd::Text(t) => write_text(&mut out, t, item.part.as_deref()),
            }
            out.push('\n');
            count += 1;
        }
        out.push_str("</svg>\n");

        log::trace!("svg: serialized {count} draw items ({} bytes)", out.len());
        out
    }
}

fn write_part(out: &mut String, part: Option<&str>) {
    if let Some(part) = part {
        let part = escape_xml(part);
        let _ = write!(out, r#" class="{part}" part="{part}""#);
    }
}

fn write_stroke(out: &mut String, stroke: &Stroke) {
    let _ = write!(
        out,
        r#" stroke="{}" stroke-width="{}""#,
        stroke.color.to_css(),
        fmt_num(stroke.width)
    );
    if let Some(dash) = stroke.dash {
        let _ = write!(out, r#" stroke-dasharray="{} {}""#, fmt_num(dash.dash), fmt_num(dash.gap));
    }
}

fn write_circle(out: &mut String, c: &CircleCmd, part: Option<&str>) {
    let fill = c.fill.map(Color::to_css).unwrap_or_else(|| "none".to_string());
    let _ = write!(
        out,
        r#"<circle cx="{}" cy="{}" r="{}" fill="{fill}""#,
        fmt_num(c.center.x),
        fmt_num(c.center.y),
        fmt_num(c.radius)
    );
    if let Some(stroke) = &c.stroke {
        write_stroke(out, stroke);
    }
    write_part(out, part);
    out.push_str("/>");
}

fn write_line(out: &mut String, l: &LineCmd, part: Option<&str>) {
    let _ = write!(
        out,
        r#"<line x1="{}" y1="{}" x2="{}" y2="{}""#,
        fmt_num(l.from.x),
        fmt_num(l.from.y),
        fmt_num(l.to.x),
        fmt_num(l.to.y)
    );
    write_stroke(out, &l.stroke);
    if let Some(rot) = l.rotation {
        let _ = write!(
            out,
            r#" transform="rotate({} {} {})""#,
            fmt_num(rot.deg),
            fmt_num(rot.pivot.x),
            fmt_num(rot.pivot.y)
        );
    }
    write_part(out, part);
    out.push_str("/>");
}

fn write_text(out: &mut String, t: &TextCmd, part: Option<&str>) {
    let _ = write!(
        out,
        r#"<text x="{}" y="{}" font-size="{}" fill="{}" text-anchor="middle" dominant-baseline="central" font-family="sans-serif""#,
        fmt_num(t.center.x),
        fmt_num(t.center.y),
        fmt_num(t.size),
        t.color.to_css()
    );
    write_part(out, part);
    let _ = write!(out, ">{}</text>", escape_xml(&t.text));
}

/// Formats a coordinate with at most three decimals and no trailing zeros.
pub fn fmt_num(v: f32) -> String {
    let s = format!("{:.3}", v);
    let s = s.trim_end_matches('0').trim_end_matches('.');
    match s {
        "-0" | "" => "0".to_string(),
        s => s.to_string(),
    }
}

/// Escapes the five XML special characters.
pub fn escape_xml(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for ch in s.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            c => out.push(c),
        }
    }
    out
}
