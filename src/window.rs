use anyhow::{bail, Context, Result};
use minifb::{Key, Window, WindowOptions};

const TARGET_FPS: usize = 30;

/// Packs 8-bit RGB triples into the 0RGB words the window buffer expects.
pub fn pack_rgb(rgb: &[u8]) -> Vec<u32> {
    rgb.chunks_exact(3)
        .map(|p| (u32::from(p[0]) << 16) | (u32::from(p[1]) << 8) | u32::from(p[2]))
        .collect()
}

/// Shows an RGB image and blocks until the window is closed or Esc is pressed.
pub fn show(title: &str, rgb: &[u8], width: usize, height: usize) -> Result<()> {
    if rgb.len() != width * height * 3 {
        bail!(
            "image buffer holds {} bytes, expected {} for {width}x{height}",
            rgb.len(),
            width * height * 3
        );
    }

    let pixels = pack_rgb(rgb);

    let mut window = Window::new(title, width, height, WindowOptions::default())
        .context("failed to open chart window")?;
    window.set_target_fps(TARGET_FPS);

    while window.is_open() && !window.is_key_down(Key::Escape) {
        window
            .update_with_buffer(&pixels, width, height)
            .context("failed to draw chart window")?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pack_rgb() {
        let rgb = [255, 0, 0, 0, 128, 0, 1, 2, 3];
        assert_eq!(pack_rgb(&rgb), vec![0xFF0000, 0x008000, 0x010203]);
    }

    #[test]
    fn test_show_rejects_wrong_buffer_size() {
        let err = show("chart", &[0u8; 5], 2, 2).unwrap_err();
        assert_eq!(err.to_string(), "image buffer holds 5 bytes, expected 12 for 2x2");
    }
}
