mod common;
use common::Sandbox;
use predicates::str::contains;

#[test]
fn no_subcommand_starts_the_menu() {
    let sb = Sandbox::new();

    sb.cmd()
        .write_stdin("8\n")
        .assert()
        .success()
        .stdout(contains("1: Add a new study log"))
        .stdout(contains("Thank you for using the Study Tracker!"));
}

#[test]
fn menu_add_and_view() {
    let sb = Sandbox::new();

    sb.cmd()
        .arg("menu")
        .write_stdin("1\n2024-01-01\nMath\n2.5\nalgebra, basics\n2\n8\n")
        .assert()
        .success()
        .stdout(contains("Study log saved successfully!"))
        .stdout(contains("1 | 2024-01-01 | Math"));

    assert!(sb.read_log().contains("2024-01-01,Math,2.5,algebra; basics"));
}

#[test]
fn menu_rejects_bad_input_and_keeps_going() {
    let sb = Sandbox::new();
    sb.seed();
    let before = sb.read_log();

    sb.cmd()
        .arg("menu")
        .write_stdin("hello\n99\n4\n7\nx\n8\n")
        .assert()
        .success()
        .stderr(contains("Invalid input. Please enter a number."))
        .stderr(contains("Invalid option."))
        .stderr(contains("Invalid log number 7"));

    assert_eq!(sb.read_log(), before);
}

#[test]
fn menu_summaries() {
    let sb = Sandbox::new();
    sb.add("2024-01-01", "Math", "2.5", "algebra");
    sb.add("2024-01-01", "Math", "1.0", "geometry");

    sb.cmd()
        .arg("menu")
        .write_stdin("5\n6\n8\n")
        .assert()
        .success()
        .stdout(contains("2024-01-01 | 3.50"))
        .stdout(contains("Math    | 3.50"));
}

#[test]
fn end_of_input_exits_cleanly() {
    let sb = Sandbox::new();

    sb.cmd().arg("menu").write_stdin("").assert().success();
}

#[test]
fn menu_delete_requires_numeric_choice() {
    let sb = Sandbox::new();
    sb.seed();

    sb.cmd()
        .arg("menu")
        .write_stdin("4\nfirst\n8\n")
        .assert()
        .success()
        .stderr(contains("'first' is not a log number"));
}

#[test]
fn menu_delete_with_confirmation() {
    let sb = Sandbox::new();
    sb.seed();

    sb.cmd()
        .arg("menu")
        .write_stdin("4\n1\ny\n8\n")
        .assert()
        .success()
        .stdout(contains("Log deleted successfully!"));

    assert!(!sb.read_log().contains("Math"));
}

#[test]
fn menu_on_corrupt_file_is_read_only() {
    let sb = Sandbox::new();
    let content = "Date,Subject,Duration,Description\n\
                   2024-01-01,Math,2.5,algebra\n\
                   2024-01-02,Bad\n\
                   2024-01-03,Physics,1.0,optics\n\
                   2024-01-04,Art,2.0,sketching\n";
    sb.write_log(content);

    sb.cmd()
        .arg("menu")
        .write_stdin("1\n2024-01-05\nChem\n1\nd\n2\n8\n")
        .assert()
        .success()
        .stderr(contains("Corrupt log file at line 3"))
        .stderr(contains("Adding, editing and deleting are disabled"))
        .stdout(contains("1 | 2024-01-01 | Math"));

    assert_eq!(sb.read_log(), content);
}
