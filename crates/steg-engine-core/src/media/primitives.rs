/// wrap the low level data types that carries information
#[derive(Debug, Eq, PartialEq)]
pub enum MediaPrimitive {
    ImageColorChannel(u8),
    AudioSample(i16),
}

impl From<u8> for MediaPrimitive {
    fn from(value: u8) -> Self {
        MediaPrimitive::ImageColorChannel(value)
    }
}

impl From<i16> for MediaPrimitive {
    fn from(value: i16) -> Self {
        MediaPrimitive::AudioSample(value)
    }
}

/// mutable primitive for storing stegano data
#[derive(Debug, Eq, PartialEq)]
pub enum MediaPrimitiveMut<'a> {
    ImageColorChannel(&'a mut u8),
    AudioSample(&'a mut i16),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn media_primitive_mut_should_allow_to_mutate_colors() {
        let mut color: u8 = 8;
        let c = MediaPrimitiveMut::ImageColorChannel(&mut color);

        if let MediaPrimitiveMut::ImageColorChannel(i) = c {
            *i = 9;
        }

        assert_eq!(color, 9);
    }
}
