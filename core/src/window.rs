use std::collections::VecDeque;

/// FIFO-buffer med fast kapasitet: push kaster eldste element når full.
/// Kapasiteten settes ved konstruksjon og endres aldri.
#[derive(Debug, Clone)]
pub struct SlidingWindow<T> {
    buf: VecDeque<T>,
    cap: usize,
}

impl<T> SlidingWindow<T> {
    pub fn new(cap: usize) -> Self {
        debug_assert!(cap > 0, "vindu uten kapasitet gir ikke mening");
        Self {
            buf: VecDeque::with_capacity(cap),
            cap,
        }
    }

    pub fn push(&mut self, value: T) {
        if self.buf.len() >= self.cap {
            self.buf.pop_front();
        }
        self.buf.push_back(value);
    }

    /// Tømmer vinduet, beholder allokert kapasitet.
    pub fn clear(&mut self) {
        self.buf.clear();
    }

    pub fn len(&self) -> usize {
        self.buf.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.cap
    }

    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.buf.iter()
    }
}

impl SlidingWindow<f64> {
    /// Konsekutive differanser, eldst først (len-1 verdier).
    pub fn deltas(&self) -> Vec<f64> {
        self.buf
            .iter()
            .zip(self.buf.iter().skip(1))
            .map(|(a, b)| b - a)
            .collect()
    }

    pub fn values(&self) -> impl Iterator<Item = f64> + '_ {
        self.buf.iter().copied()
    }
}
