// libs/prescription-cell/tests/render_test.rs

use chrono::NaiveDate;

use prescription_cell::render::{escape_html, medication_table};
use prescription_cell::MedicationLine;

fn line(name: &str) -> MedicationLine {
    MedicationLine {
        exam_date: NaiveDate::from_ymd_opt(2026, 6, 2).unwrap(),
        name: name.to_string(),
        dosage: "1 viên sáng, 1 viên tối".to_string(),
        quantity: 14,
        unit: "viên".to_string(),
        duration: "7 ngày".to_string(),
    }
}

#[test]
fn one_row_per_medication_line() {
    let table = medication_table(&[line("Paracetamol 500mg"), line("Amoxicillin 250mg")]);
    assert_eq!(table.matches("<tr>").count(), 2);
    assert!(table.contains("Paracetamol 500mg"));
    assert!(table.contains("Amoxicillin 250mg"));
    assert!(table.contains("02/06/2026"));
    assert!(table.starts_with("<table"));
    assert!(table.ends_with("</table>"));
}

#[test]
fn empty_prescription_renders_headers_only() {
    let table = medication_table(&[]);
    assert_eq!(table.matches("<tr>").count(), 0);
    assert!(table.contains("Thuốc"));
}

#[test]
fn medication_names_are_escaped() {
    let table = medication_table(&[line("Thuốc <b>đặc trị</b> & co")]);
    assert!(table.contains("Thuốc &lt;b&gt;đặc trị&lt;/b&gt; &amp; co"));
    assert!(!table.contains("<b>đặc trị</b>"));
}

#[test]
fn escape_covers_the_html_special_characters() {
    assert_eq!(escape_html(r#"<a href="x">'&'</a>"#), "&lt;a href=&quot;x&quot;&gt;&#39;&amp;&#39;&lt;/a&gt;");
}
