use std::fs;
use std::path::Path;

use assert_cmd::Command;
use calamine::{open_workbook, Reader, Xlsx};
use docx_rs::{Docx, Paragraph, Run, Table, TableCell, TableRow};
use predicates::prelude::*;

fn paragraph(text: &str) -> Paragraph {
    Paragraph::new().add_run(Run::new().add_text(text))
}

fn write_docx(path: &Path, docx: Docx) {
    let file = fs::File::create(path).unwrap();
    docx.build().pack(file).unwrap();
}

fn form_with_table(path: &Path) {
    let table = Table::new(vec![
        TableRow::new(vec![
            TableCell::new().add_paragraph(paragraph("Nome")),
            TableCell::new().add_paragraph(paragraph("João Souza")),
        ]),
        TableRow::new(vec![
            TableCell::new().add_paragraph(paragraph("CPF")),
            TableCell::new().add_paragraph(paragraph("111.222.333-44")),
        ]),
    ]);
    write_docx(
        path,
        Docx::new()
            .add_paragraph(paragraph("Ficha de inscrição"))
            .add_table(table),
    );
}

fn read_sheet(path: &Path) -> Vec<Vec<String>> {
    let mut workbook: Xlsx<_> = open_workbook(path).unwrap();
    let range = workbook.worksheet_range("Sheet1").unwrap();
    range
        .rows()
        .map(|row| row.iter().map(|cell| cell.to_string()).collect())
        .collect()
}

fn campos() -> Command {
    Command::cargo_bin("campos").unwrap()
}

#[test]
fn process_prints_paragraph_fields() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("ficha.docx");
    write_docx(
        &input,
        Docx::new()
            .add_paragraph(paragraph("Nome: Maria Silva"))
            .add_paragraph(paragraph("CPF 123.456.789-00 emitido em 05/03/2021")),
    );

    campos()
        .arg("process")
        .arg(&input)
        .assert()
        .success()
        .stdout(predicate::str::contains("Nome: Maria Silva"))
        .stdout(predicate::str::contains("123.456.789-00"))
        .stdout(predicate::str::contains("05/03/2021"));
}

#[test]
fn process_json_and_xlsx_output() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("ficha.docx");
    let output = dir.path().join("dados.xlsx");
    form_with_table(&input);

    campos()
        .arg("process")
        .arg(&input)
        .args(["--format", "json", "-o"])
        .arg(&output)
        .assert()
        .success()
        .stdout(predicate::str::contains("\"Nome\": \"João Souza\""));

    assert_eq!(
        read_sheet(&output),
        vec![
            vec!["Nome", "CPF", "Data"],
            vec!["João Souza", "", ""],
        ]
    );
}

#[test]
fn process_skips_saving_empty_result() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("vazio.docx");
    let output = dir.path().join("dados.xlsx");
    write_docx(&input, Docx::new().add_paragraph(paragraph("Sem campos aqui")));

    campos()
        .arg("process")
        .arg(&input)
        .arg("-o")
        .arg(&output)
        .assert()
        .success()
        .stderr(predicate::str::contains("Nothing to save"));

    assert!(!output.exists());
}

#[test]
fn process_missing_file_fails() {
    let dir = tempfile::tempdir().unwrap();

    campos()
        .arg("process")
        .arg(dir.path().join("ausente.docx"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("ausente.docx"));
}

#[test]
fn batch_isolates_unreadable_documents() {
    let dir = tempfile::tempdir().unwrap();
    let good = dir.path().join("a.docx");
    let broken = dir.path().join("b.docx");
    let output = dir.path().join("lote.xlsx");
    form_with_table(&good);
    fs::write(&broken, b"not a zip").unwrap();

    campos()
        .arg("batch")
        .arg(&good)
        .arg(&broken)
        .arg(dir.path().join("c.docx"))
        .arg("-o")
        .arg(&output)
        .assert()
        .success()
        .stdout(predicate::str::contains("a.docx | João Souza"))
        .stdout(predicate::str::contains("Failed files:"));

    let rows = read_sheet(&output);
    assert_eq!(rows.len(), 4);
    assert_eq!(rows[0], vec!["Arquivo", "Nome", "CPF", "Data", "Erro"]);
    assert_eq!(rows[1][..4], ["a.docx", "João Souza", "", ""]);
    assert_eq!(rows[2][0], "b.docx");
    assert!(!rows[2][4].is_empty());
    assert_eq!(rows[3][0], "c.docx");
    assert!(!rows[3][4].is_empty());
}

#[test]
fn batch_folder_with_remove() {
    let dir = tempfile::tempdir().unwrap();
    let forms = dir.path().join("fichas");
    fs::create_dir_all(forms.join("sub")).unwrap();
    form_with_table(&forms.join("a.docx"));
    form_with_table(&forms.join("sub").join("b.docx"));
    let output = dir.path().join("lote.csv");

    campos()
        .arg("batch")
        .arg(&forms)
        .args(["--remove", "b.docx", "-o"])
        .arg(&output)
        .assert()
        .success();

    let text = fs::read_to_string(&output).unwrap();
    let lines: Vec<_> = text.lines().collect();
    assert_eq!(lines, vec!["Arquivo,Nome,CPF,Data", "a.docx,João Souza,,"]);
}

#[test]
fn batch_without_documents_fails() {
    let dir = tempfile::tempdir().unwrap();

    campos()
        .arg("batch")
        .arg(dir.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("No .docx files found"));
}

#[test]
fn config_set_and_get_with_explicit_path() {
    let dir = tempfile::tempdir().unwrap();
    let config = dir.path().join("campos.json");

    campos()
        .arg("-c")
        .arg(&config)
        .args(["config", "set", "export.batch_file_name", "saida.xlsx"])
        .assert()
        .success();

    campos()
        .arg("-c")
        .arg(&config)
        .args(["config", "get", "export.batch_file_name"])
        .assert()
        .success()
        .stdout(predicate::str::contains("saida.xlsx"));

    campos()
        .arg("-c")
        .arg(&config)
        .args(["config", "set", "batch.recursive", "talvez"])
        .assert()
        .failure();
}
