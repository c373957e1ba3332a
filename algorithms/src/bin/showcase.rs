//! Standalone runner that exercises every component on small sample inputs,
//! then times the three sorts against `slice::sort`.

use std::time::Instant;

use anyhow::Result;
use rand::seq::SliceRandom;
use tracing::info;

use classic_algorithms::catalogue::CATALOGUE;
use classic_algorithms::data_structures::{BinarySearchTree, LinkedList, MinHeap};
use classic_algorithms::dynamic_programming::{fibonacci, knapsack, lcs_str};
use classic_algorithms::graph::Graph;
use classic_algorithms::logging;
use classic_algorithms::searching::binary_search;
use classic_algorithms::sorting::{SortAlgorithm, heap_sort, merge_sort, quick_sort};
use classic_algorithms::string_algorithms::{
    find_pattern, is_palindrome, longest_palindromic_substring,
};

fn main() -> Result<()> {
    logging::init();

    println!("=== Catalogue ===");
    for e in CATALOGUE {
        println!("{:<40} | {:<24} | {}", e.path, e.kind, e.time);
    }

    println!("\n=== Data Structures ===");
    {
        let mut list: LinkedList<i32> = [1, 2, 3].into_iter().collect();
        list.prepend(0);
        list.delete(&2);
        println!("Linked list: {:?}", list.to_vec());

        let mut tree = BinarySearchTree::new();
        for k in [50, 30, 70, 20, 40, 60, 80] {
            tree.insert_key(k);
        }
        tree.delete(&50);
        println!("BST inorder after deleting 50: {:?}", tree.inorder());
        println!("BST preorder after deleting 50: {:?}", tree.preorder());

        let mut heap: MinHeap<i32> = [5, 3, 7, 1, 9, 4].into_iter().collect();
        let mut drained = Vec::new();
        while !heap.is_empty() {
            drained.push(heap.extract_min()?);
        }
        println!("Heap drain: {drained:?}");
    }

    println!("\n=== Graph ===");
    {
        let mut g = Graph::directed();
        for (a, b) in [("A", "B"), ("A", "C"), ("B", "D"), ("C", "D")] {
            g.add_edge(a, b);
        }
        println!("BFS from A: {:?}", g.bfs(&"A")?);
        println!("DFS from A: {:?}", g.dfs(&"A")?);
    }

    println!("\n=== Sorting & Searching ===");
    {
        let arr = vec![64, 34, 25, 12, 22, 11, 90];
        let mut q = arr.clone();
        quick_sort(&mut q);
        let mut h = arr.clone();
        heap_sort(&mut h);
        println!("Original:   {arr:?}");
        println!("Quick sort: {q:?}");
        println!("Merge sort: {:?}", merge_sort(&arr));
        println!("Heap sort:  {h:?}");

        let sorted = [1, 3, 5, 7, 9, 11, 13, 15];
        println!("Binary search for 7 in {sorted:?}: {:?}", binary_search(&sorted, &7));
    }

    println!("\n=== Dynamic Programming ===");
    {
        println!("Fibonacci(10): {}", fibonacci(10)?);
        println!("LCS('ABCDGH', 'AEDFHR'): {}", lcs_str("ABCDGH", "AEDFHR"));
        let sol = knapsack(&[2, 3, 4, 5], &[3, 4, 5, 6], 8)?;
        println!("Knapsack (capacity=8): value {}, items {:?}", sol.value, sol.items);
    }

    println!("\n=== Strings ===");
    {
        println!("Is 'racecar' a palindrome? {}", is_palindrome("racecar"));
        println!("Is 'hello' a palindrome? {}", is_palindrome("hello"));
        let text = "AABAACAADAABAAABAA";
        println!("Find 'AABA' in '{text}': {:?}", find_pattern(text, "AABA"));
        println!("Longest palindrome in 'babad': {}", longest_palindromic_substring("babad"));
    }

    compare_sorting_algorithms(1_000);
    Ok(())
}

fn compare_sorting_algorithms(size: u32) {
    let mut input: Vec<u32> = (1..=size * 10).collect();
    input.shuffle(&mut rand::thread_rng());
    input.truncate(size as usize);

    for alg in SortAlgorithm::ALL {
        let mut v = input.clone();
        let start = Instant::now();
        alg.sort(&mut v);
        let elapsed = start.elapsed();
        info!(algorithm = alg.name(), size, micros = elapsed.as_micros() as u64, "sorted");
    }

    let mut v = input.clone();
    let start = Instant::now();
    v.sort();
    info!(
        algorithm = "slice::sort",
        size,
        micros = start.elapsed().as_micros() as u64,
        "sorted"
    );
}
