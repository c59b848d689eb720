//! Tests for the HTML price report.

use chrono::NaiveDate;
use price_model::ProductRecord;
use price_report::{ReportOptions, export, export_to_path};

fn record(id: i64, name: &str, price: f64, weight: f64) -> ProductRecord {
    ProductRecord {
        id,
        name: name.to_string(),
        price,
        weight,
        source_file: "price1.csv".to_string(),
    }
}

fn render(records: &[ProductRecord], options: &ReportOptions) -> String {
    let mut buffer = Vec::new();
    export(records, &mut buffer, options).expect("export");
    String::from_utf8(buffer).expect("utf-8")
}

#[test]
fn renders_title_headers_and_rows_in_given_order() {
    let records = vec![record(7, "Молоко", 80.0, 1.0), record(3, "Хлеб", 50.0, 0.5)];

    let html = render(&records, &ReportOptions::default());

    assert!(html.starts_with("<!DOCTYPE html>"));
    assert!(html.contains("<title>Анализ прайс-листов</title>"));
    assert!(html.contains("<h1>Анализ прайс-листов</h1>"));
    assert!(html.contains("<meta charset=\"UTF-8\"/>"));
    assert!(html.contains("<th>Цена за кг</th>"));
    assert_eq!(html.matches("<table>").count(), 1);
    assert_eq!(html.matches("<tr>").count(), 3);

    let milk = html.find("<td>Молоко</td>").expect("milk row");
    let bread = html.find("<td>Хлеб</td>").expect("bread row");
    assert!(milk < bread);
    assert!(html.contains("<td>1</td>"));
    assert!(html.contains("<td>2</td>"));
    assert!(!html.contains("<td>7</td>"));
    assert!(html.contains("<td>80.00</td>"));
    assert!(html.contains("<td>100.00</td>"));
}

#[test]
fn escapes_markup_in_names() {
    let html = render(
        &[record(1, "Сыр <Российский> & Co", 600.0, 0.3)],
        &ReportOptions::default(),
    );

    assert!(html.contains("&lt;Российский&gt; &amp; Co"));
    assert!(!html.contains("<Российский>"));
}

#[test]
fn empty_report_has_only_header_row() {
    let html = render(&[], &ReportOptions::default());
    assert_eq!(html.matches("<tr>").count(), 1);
    assert!(html.trim_end().ends_with("</html>"));
}

#[test]
fn prints_generation_time_when_requested() {
    let at = NaiveDate::from_ymd_opt(2024, 3, 1)
        .unwrap()
        .and_hms_opt(9, 30, 0)
        .unwrap();
    let html = render(&[], &ReportOptions::default().with_generated_at(at));
    assert!(html.contains("<p>Сформировано: 2024-03-01 09:30</p>"));
}

#[test]
fn export_to_path_creates_parent_directories() {
    let dir = tempfile::TempDir::new().unwrap();
    let path = dir.path().join("out").join("prices.html");

    export_to_path(&[record(1, "Хлеб", 50.0, 0.5)], &path, &ReportOptions::default())
        .expect("export");

    let written = std::fs::read_to_string(&path).unwrap();
    assert!(written.contains("<td>Хлеб</td>"));
}
