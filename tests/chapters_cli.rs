use std::fs;
use std::process::Command;

const TABLE: &str = "term,us_term,br_term,chapter,order,us_definition,br_definition
índice,index,índice,10,4,Position in a sequence.,Posição numa sequência.
bug,bug,-,01,1,An error in a program.,
indice,index,índice,03,1,A number used to select an element.,
debug,debug,depurar,01,2,To find and remove errors.,
";

#[test]
fn counts_entries_per_chapter() {
    let exe = env!("CARGO_BIN_EXE_gloss_chapters");
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("glossary.csv");
    fs::write(&input, TABLE).unwrap();

    let output = Command::new(exe)
        .args(["--input", input.to_str().unwrap()])
        .output()
        .expect("run failed");
    assert!(output.status.success());
    assert_eq!(String::from_utf8_lossy(&output.stdout), "01 2\n03 1\n10 1\n");
}

#[test]
fn lists_entries_in_master_order() {
    let exe = env!("CARGO_BIN_EXE_gloss_chapters");
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("glossary.csv");
    fs::write(&input, TABLE).unwrap();

    let output = Command::new(exe)
        .args(["--input", input.to_str().unwrap(), "--list"])
        .output()
        .expect("run failed");
    assert!(output.status.success());
    assert_eq!(
        String::from_utf8_lossy(&output.stdout),
        concat!(
            "*bug* [1]\n  An error in a program.\n\n",
            "*debug* (depurar) [1]\n  To find and remove errors.\n\n",
            "indice (*index*) [3]\n  A number used to select an element.\n\n",
            "índice (*index*) [10]\n  Posição numa sequência.\n\n",
        )
    );
}

#[test]
fn bad_order_column_fails() {
    let exe = env!("CARGO_BIN_EXE_gloss_chapters");
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("glossary.csv");
    fs::write(&input, "term,us_term,br_term,chapter,order,us_definition,br_definition\nbug,bug,-,01,one,,\n").unwrap();

    let output = Command::new(exe)
        .args(["--input", input.to_str().unwrap(), "--list"])
        .output()
        .expect("run failed");
    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
    assert!(String::from_utf8_lossy(&output.stderr).contains("invalid order value 'one'"));
}
