//! Inline-HTML rendering for prescription results. The chat frontend
//! renders these fragments as styled cards.

use shared_utils::format_date;

use crate::models::MedicationLine;

const CELL_STYLE: &str = "padding:6px 10px;border:1px solid #d9e2ec;text-align:left";

pub fn escape_html(raw: &str) -> String {
    let mut escaped = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// One table row per medication line.
pub fn medication_table(lines: &[MedicationLine]) -> String {
    let mut html = String::from(
        "<table style=\"border-collapse:collapse;width:100%\">\
         <thead><tr style=\"background-color:#f0f4f8\">",
    );
    for heading in ["Ngày khám", "Thuốc", "Liều dùng", "Số lượng", "Đơn vị", "Thời gian dùng"] {
        html.push_str(&format!("<th style=\"{CELL_STYLE}\">{heading}</th>"));
    }
    html.push_str("</tr></thead><tbody>");

    for line in lines {
        html.push_str("<tr>");
        for cell in [
            format_date(line.exam_date),
            escape_html(&line.name),
            escape_html(&line.dosage),
            line.quantity.to_string(),
            escape_html(&line.unit),
            escape_html(&line.duration),
        ] {
            html.push_str(&format!("<td style=\"{CELL_STYLE}\">{cell}</td>"));
        }
        html.push_str("</tr>");
    }

    html.push_str("</tbody></table>");
    html
}
