use anyhow::Result;
use matops::{Choice, MatrixPair};

fn load_input(path: &str) -> Result<MatrixPair> {
    let pair = matops::load_path(path)?;
    Ok(pair)
}

fn display_pair(pair: &MatrixPair) {
    println!("We can print the pair as a YAML string:\n");
    println!("{pair}");
}

fn arithmetic_examples(pair: &MatrixPair) {
    println!("Arithmetic:\n");
    print!("{}", (pair.a() + pair.b()).labeled("A + B"));
    print!("{}", (pair.a() * pair.b()).labeled("A * B"));

    for choice in [Choice::A, Choice::B] {
        let (main, secondary) = pair.get(choice).diagonal_sums();
        println!("{choice}: main diagonal {main}, secondary diagonal {secondary}");
    }

    // The default arithmetic wraps; the checked form reports the cell.
    match pair.a().checked_multiply(pair.b()) {
        Ok(_) => println!("A * B fits in i32"),
        Err(e) => println!("A * B overflows: {e}"),
    }
}

fn mutation_examples(pair: &mut MatrixPair) {
    println!("\nMutations:\n");
    let last = pair.nrows() - 1;

    let a = pair.get_mut(Choice::A);
    if a.swap_rows(0, last) {
        print!("{}", a.labeled("A with first and last rows swapped"));
    }

    let b = pair.get_mut(Choice::B);
    if b.swap_cols(0, last) {
        print!("{}", b.labeled("B with first and last columns swapped"));
    }

    // Out of range indices leave the matrix alone.
    let nrows = pair.nrows();
    assert!(!pair.get_mut(Choice::A).update_cell(nrows, 0, 1));
    assert!(pair.get_mut(Choice::A).update_cell(0, 0, 99));
    print!("{}", pair.a().labeled("A after update"));
}

fn main() -> Result<()> {
    let path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "tests/data/valid/three_by_three.txt".to_string());
    let mut pair = load_input(&path)?;
    display_pair(&pair);
    arithmetic_examples(&pair);
    mutation_examples(&mut pair);
    Ok(())
}
