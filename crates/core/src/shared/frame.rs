/// Pixel layout of a captured frame. The kernel never interprets
/// pixel data; the format travels along so the detection capability
/// can.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PixelFormat {
    Rgb8,
    Bgra8,
    Nv21,
}

/// A single captured camera frame: an opaque image buffer plus its
/// dimensions and a monotonic capture index.
///
/// A frame is owned by the capture/detection side for exactly one
/// processing call and must not be retained past it.
#[derive(Clone, Debug)]
pub struct Frame {
    data: Vec<u8>,
    width: u32,
    height: u32,
    pixel_format: PixelFormat,
    index: usize,
}

impl Frame {
    pub fn new(
        data: Vec<u8>,
        width: u32,
        height: u32,
        pixel_format: PixelFormat,
        index: usize,
    ) -> Self {
        Self {
            data,
            width,
            height,
            pixel_format,
            index,
        }
    }

    pub fn data(&self) -> &[u8] {
        &self.data
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn pixel_format(&self) -> PixelFormat {
        self.pixel_format
    }

    pub fn index(&self) -> usize {
        self.index
    }
}
