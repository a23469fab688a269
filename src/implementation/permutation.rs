// Copyright 2020 Xavier Gillard
//
// Permission is hereby granted, free of charge, to any person obtaining a copy of
// this software and associated documentation files (the "Software"), to deal in
// the Software without restriction, including without limitation the rights to
// use, copy, modify, merge, publish, distribute, sublicense, and/or sell copies of
// the Software, and to permit persons to whom the Software is furnished to do so,
// subject to the following conditions:
//
// The above copyright notice and this permission notice shall be included in all
// copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
// IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY, FITNESS
// FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR
// COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER
// IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN
// CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

//! This module provides the iterative permutation generator backing the
//! brute-force solver.

/// A finite generator which produces every permutation of `0..k` exactly
/// once, using Heap's algorithm: each successive permutation is derived from
/// the previous one through a single element swap, which avoids rebuilding
/// the sequence from scratch at every step.
///
/// The generation is iterative: one counter per recursion level of the
/// textbook algorithm is tracked explicitly. Because each call to `next`
/// mutates the sequence in place and lends it out, this type is a *streaming*
/// generator rather than a `std::iter::Iterator` (the borrow it yields is
/// tied to the generator itself).
///
/// # Example
/// ```
/// # use atsp::HeapPermutations;
/// let mut perms = HeapPermutations::new(3);
/// let mut count = 0;
/// while let Some(p) = perms.next() {
///     assert_eq!(3, p.len());
///     count += 1;
/// }
/// assert_eq!(6, count); // 3! distinct permutations
/// ```
#[derive(Debug, Clone)]
pub struct HeapPermutations {
    /// The sequence being permuted in place.
    items: Vec<usize>,
    /// One swap counter per level of the (unrolled) recursion.
    counters: Vec<usize>,
    /// The level currently being processed.
    level: usize,
    /// Whether the initial (identity) permutation was yielded already.
    started: bool,
}

impl HeapPermutations {
    /// Creates a generator over the permutations of `0..k`.
    pub fn new(k: usize) -> Self {
        Self {
            items: (0..k).collect(),
            counters: vec![0; k],
            level: 1,
            started: false,
        }
    }

    /// Yields the next permutation, or `None` once all `k!` permutations
    /// have been produced.
    #[allow(clippy::should_implement_trait)]
    pub fn next(&mut self) -> Option<&[usize]> {
        if !self.started {
            self.started = true;
            return if self.items.is_empty() { None } else { Some(&self.items) };
        }
        let k = self.items.len();
        while self.level < k {
            let level = self.level;
            if self.counters[level] <= level - 1 {
                // Heap's rule: swap with the first element on even levels,
                // with the counter position on odd ones.
                let swap_with = if level % 2 == 0 { 0 } else { self.counters[level] };
                self.items.swap(level, swap_with);
                self.counters[level] += 1;
                // Deeper levels restart from scratch on the new prefix.
                self.level = 1;
                return Some(&self.items);
            } else {
                self.counters[level] = 0;
                self.level += 1;
            }
        }
        None
    }
}

// ############################################################################
// #### TESTS #################################################################
// ############################################################################
