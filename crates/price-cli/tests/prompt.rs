//! Prompt loop tests with scripted input.

use std::fs;
use std::io::Cursor;
use std::path::Path;

use tempfile::TempDir;

use price_cli::prompt::{
    FAREWELL_MESSAGE, FOLDER_PROMPT, NOT_FOUND_MESSAGE, REPORT_SAVED_MESSAGE, SEARCH_PROMPT,
    prompt_for_folder, run_prompt_loop,
};
use price_cli::session::{SessionOptions, run_session};
use price_model::NewProduct;
use price_store::{ProductStore, SqliteStore};

fn seeded_store() -> SqliteStore {
    let mut store = SqliteStore::in_memory().expect("open store");
    for (name, price, weight) in [
        ("Хлеб белый", 50.0, 0.5),
        ("Хлеб ржаной", 45.0, 0.6),
        ("Молоко", 80.0, 1.0),
    ] {
        store
            .insert(NewProduct::new(name, price, weight, "price.csv"))
            .expect("insert");
    }
    store
}

fn run(store: &SqliteStore, script: &str) -> (usize, String) {
    let mut input = Cursor::new(script.as_bytes().to_vec());
    let mut output = Vec::new();
    let answered = run_prompt_loop(store, &mut input, &mut output).expect("prompt loop");
    (answered, String::from_utf8(output).expect("utf-8 output"))
}

#[test]
fn answers_queries_until_exit() {
    let store = seeded_store();
    let (answered, output) = run(&store, "хлеб\nnothing\nEXIT\nмолоко\n");

    assert_eq!(answered, 2);
    assert_eq!(output.matches(SEARCH_PROMPT).count(), 3);
    assert!(output.contains("Хлеб ржаной"));
    assert!(output.contains("Хлеб белый"));
    assert!(!output.contains("Молоко"));
    assert!(output.contains(NOT_FOUND_MESSAGE));
    assert!(output.trim_end().ends_with(FAREWELL_MESSAGE));

    let rye = output.find("Хлеб ржаной").expect("rye bread listed");
    let white = output.find("Хлеб белый").expect("white bread listed");
    assert!(rye < white, "cheaper per kg comes first");
}

#[test]
fn end_of_input_ends_the_loop() {
    let store = seeded_store();
    let (answered, output) = run(&store, "молоко\n");

    assert_eq!(answered, 1);
    assert!(output.contains("80.00"));
    assert!(output.contains(FAREWELL_MESSAGE));
}

#[test]
fn exit_with_surrounding_whitespace() {
    let store = seeded_store();
    let (answered, output) = run(&store, "  Exit  \r\n");

    assert_eq!(answered, 0);
    assert!(output.contains(FAREWELL_MESSAGE));
}

#[test]
fn folder_prompt_reads_one_line() {
    let mut input = Cursor::new("  /data/prices \nignored\n".as_bytes().to_vec());
    let mut output = Vec::new();
    let folder = prompt_for_folder(&mut input, &mut output).expect("folder");
    assert_eq!(folder, std::path::PathBuf::from("/data/prices"));
}

#[test]
fn folder_prompt_rejects_empty_input() {
    let mut input = Cursor::new(b"\n".to_vec());
    let mut output = Vec::new();
    assert!(prompt_for_folder(&mut input, &mut output).is_err());
}

fn price_folder(root: &Path) -> std::path::PathBuf {
    let folder = root.join("lists");
    fs::create_dir(&folder).expect("create folder");
    fs::write(
        folder.join("price1.csv"),
        "товар,цена,вес\nХлеб белый,50,0.5\nХлеб ржаной,45,0.6\nМолоко,80,1\n",
    )
    .expect("write price list");
    folder
}

fn session(store: &mut SqliteStore, options: &SessionOptions, script: &str) -> String {
    let mut input = Cursor::new(script.as_bytes().to_vec());
    let mut output = Vec::new();
    run_session(store, options, &mut input, &mut output).expect("session");
    String::from_utf8(output).expect("utf-8 output")
}

#[test]
fn exit_exports_the_ranked_report() {
    let dir = TempDir::new().expect("temp dir");
    let report_path = dir.path().join("prices.html");
    let options = SessionOptions {
        folder: Some(price_folder(dir.path())),
        report_path: Some(report_path.clone()),
        ..SessionOptions::default()
    };
    let mut store = SqliteStore::in_memory().expect("open store");

    let output = session(&mut store, &options, "хлеб\nEXIT\n");

    let html = fs::read_to_string(&report_path).expect("report written");
    let rye = html.find("Хлеб ржаной").expect("rye bread in report");
    let white = html.find("Хлеб белый").expect("white bread in report");
    let milk = html.find("Молоко").expect("milk in report");
    assert!(rye < milk && milk < white);

    let farewell = output.find(FAREWELL_MESSAGE).expect("farewell");
    let saved = output.find(REPORT_SAVED_MESSAGE).expect("report message");
    assert!(farewell < saved, "report is written after the loop ends");
}

#[test]
fn end_of_input_also_exports() {
    let dir = TempDir::new().expect("temp dir");
    let report_path = dir.path().join("out").join("prices.html");
    let options = SessionOptions {
        folder: Some(price_folder(dir.path())),
        report_path: Some(report_path.clone()),
        ..SessionOptions::default()
    };
    let mut store = SqliteStore::in_memory().expect("open store");

    session(&mut store, &options, "молоко\n");

    assert!(report_path.is_file());
}

#[test]
fn disabled_export_writes_nothing() {
    let dir = TempDir::new().expect("temp dir");
    let options = SessionOptions {
        folder: Some(price_folder(dir.path())),
        report_path: None,
        ..SessionOptions::default()
    };
    let mut store = SqliteStore::in_memory().expect("open store");

    let output = session(&mut store, &options, "exit\n");

    assert!(!dir.path().join("prices.html").exists());
    assert!(!output.contains(REPORT_SAVED_MESSAGE));
    assert!(output.contains(FAREWELL_MESSAGE));
}

#[test]
fn missing_folder_is_asked_for() {
    let dir = TempDir::new().expect("temp dir");
    let folder = price_folder(dir.path());
    let report_path = dir.path().join("prices.html");
    let options = SessionOptions {
        report_path: Some(report_path.clone()),
        ..SessionOptions::default()
    };
    let mut store = SqliteStore::in_memory().expect("open store");

    let script = format!("{}\nexit\n", folder.display());
    let output = session(&mut store, &options, &script);

    assert!(output.starts_with(FOLDER_PROMPT));
    assert_eq!(store.count().expect("count"), 3);
    assert!(report_path.is_file());
}
