use crate::media::MediaPrimitive;

/// generic unveil algorithm, the counterpart of `HideAlgorithm`
pub trait UnveilAlgorithm {
    /// decodes one bit from a carrier primitive
    fn decode(&self, carrier: MediaPrimitive) -> bool;
}

/// generic stegano decoder, yields one unveiled bit per carrier primitive
pub struct UniversalDecoder<I, A>
where
    I: Iterator<Item = MediaPrimitive>,
    A: UnveilAlgorithm,
{
    input: I,
    algorithm: A,
}

impl<I, A> UniversalDecoder<I, A>
where
    I: Iterator<Item = MediaPrimitive>,
    A: UnveilAlgorithm,
{
    pub fn new(input: I, algorithm: A) -> Self {
        Self { input, algorithm }
    }
}

impl<I, A> Iterator for UniversalDecoder<I, A>
where
    I: Iterator<Item = MediaPrimitive>,
    A: UnveilAlgorithm,
{
    type Item = bool;

    fn next(&mut self) -> Option<Self::Item> {
        self.input.next().map(|p| self.algorithm.decode(p))
    }
}

/// default 1 bit unveil strategy
pub struct OneBitUnveil;

impl UnveilAlgorithm for OneBitUnveil {
    fn decode(&self, carrier: MediaPrimitive) -> bool {
        match carrier {
            MediaPrimitive::ImageColorChannel(c) => c & 1 == 1,
            MediaPrimitive::AudioSample(s) => s & 1 == 1,
        }
    }
}
