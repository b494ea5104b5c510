//! A simple word index example.
//!
//! In this example, a text is split in chunks, and each chunk is indexed by its own thread:
//! -   Each Indexer thread counts the occurrences of each word in its chunk, in its own HashSet.
//! -   The main thread then merges the partial indexes, and reports the most frequent words.
//!
//! Run with `RUST_LOG=debug` to see the HashSets being created.

extern crate crossbeam_utils;
extern crate chained;
extern crate env_logger;

use std::cmp::Ordering;

use chained::allocator::DefaultAllocator;
use chained::hashset::{Callbacks, HashSet};
use chained::vector::Vector;

const NUMBER_BUCKETS: usize = 31;
const NUMBER_INDEXERS: usize = 3;

const TEXT: &str = "\
It was the best of times, it was the worst of times, it was the age of wisdom, \
it was the age of foolishness, it was the epoch of belief, it was the epoch of incredulity, \
it was the season of Light, it was the season of Darkness, it was the spring of hope, \
it was the winter of despair, we had everything before us, we had nothing before us, \
we were all going direct to Heaven, we were all going direct the other way";

type Index = HashSet<WordCount, Callbacks<WordCount, DefaultAllocator>>;

//  A word, and its number of occurrences; keyed by the word alone.
#[derive(Debug)]
struct WordCount {
    word: String,
    count: usize,
}

impl WordCount {
    fn probe(word: &str) -> Self { WordCount { word: word.to_string(), count: 0 } }
}

//  FNV-1a, modulo the number of buckets.
fn hash(element: &WordCount, number_buckets: usize) -> usize {
    let hash = element.word.bytes().fold(0xcbf29ce484222325u64, |hash, byte| {
        (hash ^ u64::from(byte)).wrapping_mul(0x100000001b3)
    });

    (hash % number_buckets as u64) as usize
}

fn compare(left: &WordCount, right: &WordCount) -> Ordering { left.word.cmp(&right.word) }

fn add(index: &mut Index, word: &str, count: usize) {
    let previous = index.lookup(&WordCount::probe(word)).map(|e| e.count).unwrap_or(0);

    index.enter(WordCount { word: word.to_string(), count: previous + count });
}

fn main() {
    env_logger::init();

    let words: Vec<String> = TEXT
        .split(|c: char| !c.is_alphabetic())
        .filter(|w| !w.is_empty())
        .map(|w| w.to_lowercase())
        .collect();

    let chunk_size = (words.len() + NUMBER_INDEXERS - 1) / NUMBER_INDEXERS;

    let partials: Vec<_> = crossbeam_utils::thread::scope(|scope| {
        //
        //  Indexers
        //
        let handles: Vec<_> = words.chunks(chunk_size).enumerate().map(|(i, chunk)| {
            scope.spawn(move |_| {
                let mut index: Index = HashSet::with_callbacks(NUMBER_BUCKETS, hash, compare, None);

                for word in chunk {
                    add(&mut index, word, 1);
                }

                println!("Indexer {} - {} words, {} distinct", i, chunk.len(), index.len());

                index
            })
        }).collect();

        handles.into_iter().map(|handle| handle.join().unwrap()).collect()
    }).unwrap();

    //
    //  Merge
    //
    let mut index: Index = HashSet::with_callbacks(NUMBER_BUCKETS, hash, compare, None);

    for partial in &partials {
        for element in partial {
            add(&mut index, &element.word, element.count);
        }
    }

    let total: usize = index.iter().map(|e| e.count).sum();
    assert_eq!(words.len(), total);

    let mut ranking: Vector<(usize, &str)> = Vector::with_capacity(index.len());
    ranking.extend(index.iter().map(|e| (e.count, e.word.as_str())));
    ranking.sort_by(|a, b| b.cmp(a));

    println!("{} words, {} distinct", total, index.len());

    for (count, word) in ranking.iter().take(5) {
        println!("{:>4} {}", count, word);
    }

    let longest = (0..index.number_buckets()).map(|i| index.bucket(i).len()).max().unwrap_or(0);
    println!("Longest bucket: {} of {} buckets", longest, index.number_buckets());
}
