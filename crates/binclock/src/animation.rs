/// Fixed-length frame sequence.
///
/// Hands out frame numbers `0..total` once each and then stays finished;
/// the sequence does not repeat.
#[derive(Debug, Clone)]
pub struct FrameDriver {
    next: u64,
    total: u64,
}

impl FrameDriver {
    pub fn new(total: u64) -> Self {
        Self { next: 0, total }
    }

    /// Next frame number, or `None` once every frame has run.
    pub fn next_frame(&mut self) -> Option<u64> {
        if self.next >= self.total {
            return None;
        }
        let frame = self.next;
        self.next += 1;
        Some(frame)
    }

    #[inline]
    pub fn is_finished(&self) -> bool {
        self.next >= self.total
    }

    /// Frames run so far.
    #[inline]
    pub fn completed(&self) -> u64 {
        self.next
    }

    #[inline]
    pub fn total(&self) -> u64 {
        self.total
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn yields_each_frame_once() {
        let mut d = FrameDriver::new(3);
        assert_eq!(d.next_frame(), Some(0));
        assert_eq!(d.next_frame(), Some(1));
        assert!(!d.is_finished());
        assert_eq!(d.next_frame(), Some(2));
        assert!(d.is_finished());
        assert_eq!(d.next_frame(), None);
        assert_eq!(d.completed(), 3);
    }

    #[test]
    fn empty_sequence_is_finished() {
        let mut d = FrameDriver::new(0);
        assert!(d.is_finished());
        assert_eq!(d.next_frame(), None);
    }
}
