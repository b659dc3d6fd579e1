use std::slice::IterMut;

use crate::media::{MediaPrimitive, MediaPrimitiveMut};

/// Iterating wav audio samples, as decoded by `WavReader` of the `hound` crate
pub struct AudioWavIter<T> {
    samples: T,
}

impl<T> AudioWavIter<T>
where
    T: Iterator<Item = i16>,
{
    pub fn new(samples: T) -> Self {
        Self { samples }
    }
}

/// Audio samples iterator that yields immutable MediaPrimitives `MediaPrimitive`
impl<T> Iterator for AudioWavIter<T>
where
    T: Iterator<Item = i16>,
{
    type Item = MediaPrimitive;

    fn next(&mut self) -> Option<Self::Item> {
        self.samples.next().map(MediaPrimitive::AudioSample)
    }
}

/// Iterating mutable wav audio samples
pub struct AudioWavIterMut<'a> {
    samples: IterMut<'a, i16>,
}

impl<'a> AudioWavIterMut<'a> {
    pub fn new(samples: IterMut<'a, i16>) -> Self {
        Self { samples }
    }
}

/// Audio samples iterator that yields mutable MediaPrimitives `MediaPrimitiveMut`
impl<'a> Iterator for AudioWavIterMut<'a> {
    type Item = MediaPrimitiveMut<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        self.samples.next().map(MediaPrimitiveMut::AudioSample)
    }
}
