//! Ordered list of serialized frames.

/// The finished frames of an animation, in playback order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FrameSequence {
    frames: Vec<String>,
}

impl FrameSequence {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one serialized frame.
    pub fn push(&mut self, frame: String) {
        self.frames.push(frame);
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.frames.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, String> {
        self.frames.iter()
    }

    pub fn as_slice(&self) -> &[String] {
        &self.frames
    }

    /// Drop the first `count` frames. Dropping more frames than exist
    /// leaves the sequence empty.
    ///
    /// # Returns
    /// The number of frames actually removed
    pub fn skip_leading(&mut self, count: usize) -> usize {
        let count = count.min(self.frames.len());
        self.frames.drain(..count);
        count
    }

    pub fn into_vec(self) -> Vec<String> {
        self.frames
    }
}

impl From<Vec<String>> for FrameSequence {
    fn from(frames: Vec<String>) -> Self {
        Self { frames }
    }
}

impl<'a> IntoIterator for &'a FrameSequence {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.frames.iter()
    }
}
