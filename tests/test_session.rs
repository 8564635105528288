use matops::{Choice, MatrixPair, Outcome, Session, Summary};

fn two_by_two() -> MatrixPair {
    matops::loads("2\n1 2\n3 4\n5 6\n7 8\n").unwrap()
}

fn run(pair: &mut MatrixPair, input: &str) -> (Summary, String) {
    let mut session = Session::new(input.as_bytes(), Vec::new());
    let summary = session.run(pair).unwrap();
    let output = String::from_utf8(session.into_output()).unwrap();
    (summary, output)
}

const REPORT: &str = "\
Matrix A (2x2):
   1   2
   3   4
Matrix B (2x2):
   5   6
   7   8

A + B:
Sum (2x2):
   6   8
  10  12

A * B:
Product (2x2):
  19  22
  43  50

Diagonal sums:
Matrix A -> main: 5, secondary: 5
Matrix B -> main: 13, secondary: 13
";

#[test]
fn full_transcript() {
    let mut pair = two_by_two();
    let (summary, output) = run(&mut pair, "0\n1 0\n1\n0 1\n1\n1 0 -4\n");

    let expected = format!(
        "{REPORT}\
\nRow swap (0-based). Choose matrix (0 for A, 1 for B): \
Enter two row indices to swap (0-based, separated by a space, e.g., '1 3'): \
Matrix A after row swap (2x2):
   3   4
   1   2

Column swap (0-based). Choose matrix (0 for A, 1 for B): \
Enter two column indices to swap (0-based, separated by a space, e.g., '0 2'): \
Matrix B after column swap (2x2):
   6   5
   8   7

Update one element. Choose matrix (0 for A, 1 for B): \
Enter the row, column, and new value (0-based, separated by spaces, e.g., '2 1 99'): \
Matrix B after update (2x2):
   6   5
  -4   7

Done. Goodbye!
"
    );
    assert_eq!(output, expected);
    assert_eq!(
        summary,
        Summary {
            row_swap: Outcome::Applied(Choice::A),
            column_swap: Outcome::Applied(Choice::B),
            update: Outcome::Applied(Choice::B),
        }
    );
    assert_eq!(pair.a().to_rows(), vec![vec![3, 4], vec![1, 2]]);
    assert_eq!(pair.b().to_rows(), vec![vec![6, 5], vec![-4, 7]]);
}

#[test]
fn invalid_indices_leave_matrices_unchanged() {
    let mut pair = two_by_two();
    let (summary, output) = run(&mut pair, "0 -1 0\n1 0 2\n0 2 0 5\n");
    assert!(output.contains("Invalid row indices. No changes made.\n"));
    assert!(output.contains("Invalid column indices. No changes made.\n"));
    assert!(output.contains("Invalid indices. No changes made.\n"));
    assert_eq!(summary.row_swap, Outcome::Rejected(Choice::A));
    assert_eq!(summary.column_swap, Outcome::Rejected(Choice::B));
    assert_eq!(summary.update, Outcome::Rejected(Choice::A));
    assert_eq!(pair, two_by_two());
}

#[test]
fn unreadable_input_skips_step_and_rest_of_line() {
    let mut pair = two_by_two();
    let (summary, output) = run(&mut pair, "0 one two\n0 0 1\n1 1 1 0\n");
    assert!(output.contains("Invalid input; skipping row swap.\n"));
    assert!(!output.contains("after row swap"));
    assert_eq!(summary.row_swap, Outcome::Skipped);
    assert_eq!(summary.column_swap, Outcome::Applied(Choice::A));
    assert_eq!(summary.update, Outcome::Applied(Choice::B));
    assert_eq!(pair.a().to_rows(), vec![vec![2, 1], vec![4, 3]]);
    assert_eq!(pair.b().to_rows(), vec![vec![5, 6], vec![7, 0]]);
}

#[test]
fn non_integer_selector_skips_step() {
    let mut pair = two_by_two();
    let (summary, output) = run(&mut pair, "B 0 1\n0 0 1\n0 0 0 0\n");
    assert!(output.contains("Invalid input; skipping row swap.\n"));
    assert_eq!(summary.row_swap, Outcome::Skipped);
    assert_eq!(summary.column_swap, Outcome::Applied(Choice::A));
    assert_eq!(summary.update, Outcome::Applied(Choice::A));
}

#[test]
fn any_selector_other_than_one_is_a() {
    let mut pair = two_by_two();
    let (summary, _) = run(&mut pair, "5\n0 1\n-1\n0 1\n1\n0 0 0\n");
    assert_eq!(summary.row_swap, Outcome::Applied(Choice::A));
    assert_eq!(summary.column_swap, Outcome::Applied(Choice::A));
    assert_eq!(summary.update, Outcome::Applied(Choice::B));
    assert_eq!(pair.a().to_rows(), vec![vec![4, 3], vec![2, 1]]);
}

#[test]
fn end_of_input_skips_remaining_steps() {
    let mut pair = two_by_two();
    let (summary, output) = run(&mut pair, "1\n1 0\n");
    assert_eq!(summary.row_swap, Outcome::Applied(Choice::B));
    assert_eq!(summary.column_swap, Outcome::Skipped);
    assert_eq!(summary.update, Outcome::Skipped);
    assert!(output.contains("Invalid input; skipping column swap.\n"));
    assert!(output.contains("Invalid input; skipping update.\n"));
    assert!(output.ends_with("\nDone. Goodbye!\n"));
}

#[test]
fn tokens_may_share_one_line() {
    let mut pair = two_by_two();
    let (summary, _) = run(&mut pair, "0 0 1 0 0 1 0 1 1 8");
    assert_eq!(summary.row_swap, Outcome::Applied(Choice::A));
    assert_eq!(summary.column_swap, Outcome::Applied(Choice::A));
    assert_eq!(summary.update, Outcome::Applied(Choice::A));
    assert_eq!(pair.a().to_rows(), vec![vec![4, 3], vec![2, 8]]);
}

#[test]
fn prompt_filename() {
    let mut session = Session::new("  data/m.txt  \n".as_bytes(), Vec::new());
    assert_eq!(session.prompt_filename().unwrap(), "data/m.txt");
    let output = String::from_utf8(session.into_output()).unwrap();
    assert_eq!(output, "Enter input filename: ");
}

#[test]
fn prompt_filename_at_end_of_input() {
    let mut session = Session::new("".as_bytes(), Vec::new());
    assert!(matches!(
        session.prompt_filename(),
        Err(matops::MatrixError::InputError(_))
    ));
}

#[test]
fn non_utf8_input_skips_step() {
    let mut pair = two_by_two();
    let mut session = Session::new(&b"\xe9\n0 0 1\n1 0 0 9\n"[..], Vec::new());
    let summary = session.run(&mut pair).unwrap();
    let output = String::from_utf8(session.into_output()).unwrap();
    assert!(output.contains("Invalid input; skipping row swap.\n"));
    assert_eq!(summary.row_swap, Outcome::Skipped);
    assert_eq!(summary.column_swap, Outcome::Applied(Choice::A));
    assert_eq!(summary.update, Outcome::Applied(Choice::B));
    assert_eq!(pair.a().to_rows(), vec![vec![2, 1], vec![4, 3]]);
    assert_eq!(pair.b().to_rows(), vec![vec![9, 6], vec![7, 8]]);
}

#[test]
fn selector_outside_i32_skips_step() {
    let mut pair = two_by_two();
    let (summary, output) = run(&mut pair, "4294967297 0 1\n0 0 1\n0 0 0 9\n");
    assert!(output.contains("Invalid input; skipping row swap.\n"));
    assert_eq!(summary.row_swap, Outcome::Skipped);
    assert_eq!(summary.column_swap, Outcome::Applied(Choice::A));
    assert_eq!(summary.update, Outcome::Applied(Choice::A));
    assert_eq!(pair.a().to_rows(), vec![vec![9, 1], vec![4, 3]]);
}
