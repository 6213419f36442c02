use {crate::CollectError, tongue_image::Image};

/// Live view of the capture plus the operator's keyboard.
pub trait Preview {
    /// Present `frame`; `None` keeps the previous picture but still pumps events.
    fn show(&mut self, frame: Option<&Image>) -> Result<(), CollectError>;

    /// Keys pressed since the last call, lowercase.
    fn keys(&mut self) -> Vec<char>;

    /// `false` once the operator closed the view.
    fn is_open(&self) -> bool;
}

#[cfg(feature = "window")]
mod window {
    use {
        super::Preview,
        crate::CollectError,
        minifb::{Key, KeyRepeat, Window, WindowOptions},
        tongue_base::Vec2,
        tongue_image::{Image, image_to_u32},
    };

    /// Preview in a minifb window.
    pub struct MinifbPreview {
        window: Window,
    }

    impl MinifbPreview {
        pub fn new(title: &str, size: Vec2<usize>) -> Result<Self, CollectError> {
            let mut window = Window::new(title, size.x, size.y, WindowOptions::default())
                .map_err(|e| CollectError::Preview(e.to_string()))?;
            window.set_target_fps(30);
            Ok(Self { window })
        }
    }

    fn key_char(key: Key) -> Option<char> {
        match key {
            Key::R => Some('r'),
            Key::L => Some('l'),
            Key::N => Some('n'),
            Key::Q => Some('q'),
            _ => None,
        }
    }

    impl Preview for MinifbPreview {
        fn show(&mut self, frame: Option<&Image>) -> Result<(), CollectError> {
            match frame {
                Some(frame) => {
                    let buf = image_to_u32(frame);
                    self.window
                        .update_with_buffer(&buf, frame.width(), frame.height())
                        .map_err(|e| CollectError::Preview(e.to_string()))
                }
                None => {
                    self.window.update();
                    Ok(())
                }
            }
        }

        fn keys(&mut self) -> Vec<char> {
            self.window
                .get_keys_pressed(KeyRepeat::No)
                .into_iter()
                .filter_map(key_char)
                .collect()
        }

        fn is_open(&self) -> bool {
            self.window.is_open() && !self.window.is_key_down(Key::Escape)
        }
    }
}

#[cfg(feature = "window")]
pub use window::MinifbPreview;
