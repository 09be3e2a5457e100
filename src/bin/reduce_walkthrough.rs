// Walkthrough of the fold/reduce operation: the worked examples from the
// library, traced step by step on the terminal.

use colored::Colorize;
use reduce::{fold, fold_first, rfold, trace_step, FoldError, Reduce};
use std::collections::HashMap;

fn heading(text: &str) {
    println!("\n{}", text.cyan().bold());
}

fn main() {
    heading("1. Summing with an explicit seed");
    let numbers = [1, 2, 3, 4];
    let total = fold(
        &numbers,
        |acc, element, index, _| {
            let next = acc + element;
            println!("  {}", trace_step(&acc, element, index, &next));
            next
        },
        0,
    );
    println!("  fold([1, 2, 3, 4], +, 0) = {}", total.to_string().green());

    heading("2. Summing without a seed (accumulator starts at the first element)");
    match fold_first(&numbers, |acc, element, index, _| {
        let next = acc + element;
        println!("  {}", trace_step(&acc, element, index, &next));
        next
    }) {
        Ok(total) => println!("  fold_first([1, 2, 3, 4], +) = {}", total.to_string().green()),
        Err(err) => println!("  {}", err.to_string().red()),
    }

    heading("3. The one failure mode: empty input and no seed");
    let empty: [i64; 0] = [];
    match fold_first(&empty, |acc, element, _, _| acc + element) {
        Ok(total) => println!("  unexpected total {total}"),
        Err(FoldError::EmptySequence) => {
            println!("  {}", "✗ cannot seed the accumulator from an empty sequence".red());
            println!("  supply a seed instead: fold([], +, 0) = {}",
                fold(&empty, |acc, element, _, _| acc + element, 0).to_string().green());
        }
    }

    heading("4. The accumulator type need not match the element type");
    let words = ["the", "quick", "brown", "the", "fox", "the"];
    let tally = words.reduce_with(
        |mut counts: HashMap<&str, u32>, word, _, _| {
            *counts.entry(*word).or_insert(0) += 1;
            counts
        },
        HashMap::new(),
    );
    println!("  word tally: {tally:?}");

    heading("5. Flattening, the classic reduce exercise");
    let nested = vec![vec![1, 2], vec![3, 4], vec![5]];
    let flat = fold(
        &nested,
        |mut acc: Vec<i32>, chunk, _, _| {
            acc.extend_from_slice(chunk);
            acc
        },
        Vec::new(),
    );
    println!("  flatten({nested:?}) = {flat:?}");

    heading("6. Folding from the right");
    let letters = ["a", "b", "c"];
    let forward = fold(&letters, |acc, s, _, _| acc + s, String::new());
    let backward = rfold(&letters, |acc, s, _, _| acc + s, String::new());
    println!("  left to right:  {}", forward.green());
    println!("  right to left:  {}", backward.green());
}
