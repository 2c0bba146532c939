use crate::shared::frame::Frame;

/// Frame delivery boundary: yields frames at device-native rate.
/// `None` ends the stream. The detection side is the sole consumer.
pub trait FrameSource: Send {
    fn next_frame(&mut self) -> Option<Frame>;
}
