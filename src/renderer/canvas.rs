//! Canvas 2D surface (web only)

use std::collections::HashMap;

use glam::Vec2;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, Document, HtmlImageElement};

use super::{ImageHandle, Rgba, Surface};

/// `Surface` backed by a `CanvasRenderingContext2d`
pub struct CanvasSurface {
    ctx: CanvasRenderingContext2d,
    images: HashMap<ImageHandle, HtmlImageElement>,
}

fn css(color: Rgba) -> String {
    format!(
        "rgba({}, {}, {}, {})",
        (color[0] * 255.0).round() as u8,
        (color[1] * 255.0).round() as u8,
        (color[2] * 255.0).round() as u8,
        color[3]
    )
}

impl CanvasSurface {
    pub fn new(ctx: CanvasRenderingContext2d) -> Self {
        ctx.set_line_width(2.0);
        ctx.set_font("15px Impact");
        ctx.set_text_baseline("middle");
        Self {
            ctx,
            images: HashMap::new(),
        }
    }

    /// Look up the preloaded `<img>` elements for every handle
    pub fn load_images(&mut self, document: &Document) {
        for handle in [ImageHandle::Player, ImageHandle::Background] {
            match document
                .get_element_by_id(handle.element_id())
                .and_then(|el| el.dyn_into::<HtmlImageElement>().ok())
            {
                Some(img) => {
                    self.images.insert(handle, img);
                }
                None => log::warn!("Image #{} not found, drawing without it", handle.element_id()),
            }
        }
    }

    pub fn clear(&self, width: f32, height: f32) {
        self.ctx.clear_rect(0.0, 0.0, width as f64, height as f64);
    }

    fn circle_path(&self, center: Vec2, radius: f32) {
        self.ctx.begin_path();
        let _ = self.ctx.arc(
            center.x as f64,
            center.y as f64,
            radius as f64,
            0.0,
            std::f64::consts::TAU,
        );
    }
}

impl Surface for CanvasSurface {
    fn fill_rect(&mut self, origin: Vec2, size: Vec2, color: Rgba) {
        self.ctx.set_fill_style_str(&css(color));
        self.ctx
            .fill_rect(origin.x as f64, origin.y as f64, size.x as f64, size.y as f64);
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Rgba) {
        self.circle_path(center, radius);
        self.ctx.set_fill_style_str(&css(color));
        self.ctx.fill();
    }

    fn stroke_circle(&mut self, center: Vec2, radius: f32, color: Rgba) {
        self.circle_path(center, radius);
        self.ctx.set_stroke_style_str(&css(color));
        self.ctx.stroke();
    }

    fn draw_image(&mut self, image: ImageHandle, center: Vec2, size: Vec2, rotation: f32) {
        let Some(img) = self.images.get(&image) else {
            return;
        };
        self.ctx.save();
        let _ = self.ctx.translate(center.x as f64, center.y as f64);
        let _ = self.ctx.rotate(rotation as f64);
        if let Err(e) = self.ctx.draw_image_with_html_image_element_and_dw_and_dh(
            img,
            -(size.x as f64) / 2.0,
            -(size.y as f64) / 2.0,
            size.x as f64,
            size.y as f64,
        ) {
            log::warn!("drawImage failed: {:?}", e);
        }
        self.ctx.restore();
    }

    fn blit_background(&mut self, image: ImageHandle, source: Vec2, size: Vec2) {
        let Some(img) = self.images.get(&image) else {
            return;
        };
        let (w, h) = (size.x as f64, size.y as f64);
        if let Err(e) = self
            .ctx
            .draw_image_with_html_image_element_and_sw_and_sh_and_dx_and_dy_and_dw_and_dh(
                img,
                source.x as f64,
                source.y as f64,
                w,
                h,
                0.0,
                0.0,
                w,
                h,
            )
        {
            log::warn!("Background blit failed: {:?}", e);
        }
    }

    fn fill_text(&mut self, text: &str, pos: Vec2, color: Rgba) {
        self.ctx.set_fill_style_str(&css(color));
        let _ = self.ctx.fill_text(text, pos.x as f64, pos.y as f64);
    }
}
